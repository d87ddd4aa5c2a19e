//! Configuration form layer for the GPS NTP appliance
//!
//! Five independent sections, each with a typed wire shape, a raw form
//! record, validators and local defaults. Everything here is pure data
//! transformation; the bridge crate wires it to the page.

pub mod forms;
pub mod outcome;
pub mod sections;
pub mod validation;

pub use forms::{
    validate_gnss, validate_logging, validate_network, validate_ntp, validate_system, FieldError,
    GnssForm, LoggingForm, NetworkForm, NtpForm, SystemForm,
};
pub use outcome::{
    factory_reset_outcome, load_failure_notice, saving_notice, save_outcome, section_reset_notice,
    section_reset_prompt, status_failure_notice, validation_notice, BannerKind, Notice,
    FACTORY_RESET_CONFIRM, RELOAD_DELAY_MS,
};
pub use sections::{
    GnssConfig, LoggingConfig, NetworkConfig, NtpConfig, SectionKind, SystemConfig,
};
