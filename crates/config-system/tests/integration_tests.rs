//! End-to-end form cycle tests: device JSON in, form out, edits validated
//! back into wire JSON.

use ntp_panel_config::{
    validate_gnss, validate_network, validate_ntp, GnssForm, NetworkConfig, NetworkForm, NtpConfig,
    NtpForm,
};

#[test]
fn test_load_edit_save_cycle_for_network() {
    // Device reports a static address
    let loaded: NetworkConfig = serde_json::from_str(
        r#"{
            "hostname": "gps-ntp-server",
            "ip_address": 3232235786,
            "netmask": 4294967040,
            "gateway": 3232235777,
            "dns_server": 134744072,
            "mac_address": "28:CD:C1:00:11:22"
        }"#,
    )
    .unwrap();

    let mut form = NetworkForm::from_config(&loaded);
    assert!(!form.use_dhcp);
    assert_eq!(form.ip_address, "192.168.1.10");
    assert_eq!(form.netmask, "255.255.255.0");

    // User switches to DHCP and saves
    form.use_dhcp = true;
    let config = validate_network(&form).unwrap();

    let body = serde_json::to_value(&config).unwrap();
    assert_eq!(body["ip_address"], serde_json::json!(0));
    assert_eq!(body["netmask"], serde_json::json!(0));
    assert_eq!(body["gateway"], serde_json::json!(0));
    assert_eq!(body["dns_server"], serde_json::json!(0));
    assert_eq!(body["hostname"], serde_json::json!("gps-ntp-server"));
    assert!(body.get("mac_address").is_none());
}

#[test]
fn test_static_address_survives_round_trip() {
    let form = NetworkForm {
        hostname: "bench-clock".to_string(),
        use_dhcp: false,
        ip_address: "10.11.12.13".to_string(),
        netmask: "255.255.0.0".to_string(),
        gateway: "10.11.0.1".to_string(),
        dns_server: "1.1.1.1".to_string(),
    };

    let config = validate_network(&form).unwrap();
    let body = serde_json::to_string(&config).unwrap();

    let reloaded: NetworkConfig = serde_json::from_str(&body).unwrap();
    let repopulated = NetworkForm::from_config(&reloaded);
    assert_eq!(repopulated.ip_address, "10.11.12.13");
    assert_eq!(repopulated.netmask, "255.255.0.0");
    assert_eq!(repopulated.gateway, "10.11.0.1");
    assert_eq!(repopulated.dns_server, "1.1.1.1");
    assert!(!repopulated.use_dhcp);
}

#[test]
fn test_invalid_fields_block_the_save() {
    let form = NetworkForm {
        hostname: "way-too-long-hostname-for-this-device-firmware".to_string(),
        use_dhcp: false,
        ip_address: "192.168.1.999".to_string(),
        netmask: "255.255.255.0".to_string(),
        gateway: String::new(),
        dns_server: String::new(),
    };

    let errors = validate_network(&form).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["hostname", "ip_address"]);
}

#[test]
fn test_gnss_wire_body_is_fully_typed() {
    let form = GnssForm {
        gps_enabled: true,
        glonass_enabled: false,
        galileo_enabled: true,
        beidou_enabled: false,
        qzss_enabled: true,
        qzss_l1s_enabled: true,
        gnss_update_rate: "5".to_string(),
        disaster_alert_priority: "2".to_string(),
    };

    let config = validate_gnss(&form).unwrap();
    let body = serde_json::to_value(&config).unwrap();

    assert_eq!(body["gnss_update_rate"], serde_json::json!(5));
    assert_eq!(body["disaster_alert_priority"], serde_json::json!(2));
    assert_eq!(body["glonass_enabled"], serde_json::json!(false));
}

#[test]
fn test_ntp_defaults_accepted_verbatim() {
    let form = NtpForm::from_config(&NtpConfig::default());
    let config = validate_ntp(&form).unwrap();
    assert_eq!(config, NtpConfig::default());
}
