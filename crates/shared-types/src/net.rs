//! IPv4 packing for the wire format
//!
//! The device transports IP-valued fields as unsigned 32-bit integers in
//! big-endian octet order; the UI edits and displays them as dotted-quad
//! strings. The conversion is lossless both ways for every valid address.

use std::fmt;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// IPv4 address packed as `(o1<<24)|(o2<<16)|(o3<<8)|o4`, the form every
/// IP field takes on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedIp(pub u32);

impl PackedIp {
    /// Zero means "not set"; DHCP mode sends all network address fields as zero
    pub const UNSET: PackedIp = PackedIp(0);

    pub fn is_unset(self) -> bool {
        self.0 == 0
    }

    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> Self {
        PackedIp(u32::from(a) << 24 | u32::from(b) << 16 | u32::from(c) << 8 | u32::from(d))
    }

    pub fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parse a dotted-quad string
    ///
    /// Accepts exactly four segments of 1-3 ASCII digits, each 0-255.
    /// Leading zeros are fine; signs, blanks, and extra segments are not.
    pub fn parse(text: &str) -> Option<Self> {
        let mut octets = [0u8; 4];
        let mut count = 0usize;
        for part in text.split('.') {
            if count == 4
                || part.is_empty()
                || part.len() > 3
                || !part.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            octets[count] = part.parse::<u8>().ok()?;
            count += 1;
        }
        if count != 4 {
            return None;
        }
        Some(PackedIp::from_octets(octets[0], octets[1], octets[2], octets[3]))
    }

    /// Dotted-quad display form; the unset address renders as `0.0.0.0`
    pub fn to_dotted(self) -> String {
        Ipv4Addr::from(self.0).to_string()
    }
}

impl fmt::Display for PackedIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(self.0))
    }
}

impl From<Ipv4Addr> for PackedIp {
    fn from(addr: Ipv4Addr) -> Self {
        PackedIp(addr.into())
    }
}

impl From<PackedIp> for Ipv4Addr {
    fn from(ip: PackedIp) -> Self {
        Ipv4Addr::from(ip.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octet_packing_is_big_endian() {
        assert_eq!(PackedIp::from_octets(1, 2, 3, 4).0, 0x0102_0304);
        assert_eq!(PackedIp::from_octets(192, 168, 1, 1).0, 3_232_235_777);
        assert_eq!(PackedIp(0x0102_0304).octets(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_dotted_quad_round_trip() {
        for text in [
            "0.0.0.0",
            "255.255.255.255",
            "192.168.1.1",
            "10.0.0.254",
            "8.8.8.8",
        ] {
            let ip = PackedIp::parse(text).unwrap();
            assert_eq!(ip.to_dotted(), text);
        }
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(
            PackedIp::parse("192.168.001.010"),
            Some(PackedIp::from_octets(192, 168, 1, 10))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for text in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "256.1.1.1",
            "1.2.3.999",
            "a.b.c.d",
            "1..2.3",
            "1.2.3.+4",
            " 1.2.3.4",
            "1.2.3.4 ",
        ] {
            assert_eq!(PackedIp::parse(text), None, "accepted {text:?}");
        }
    }

    #[test]
    fn test_serde_transparent_integer() {
        let ip = PackedIp::from_octets(192, 168, 1, 1);
        assert_eq!(serde_json::to_string(&ip).unwrap(), "3232235777");

        let back: PackedIp = serde_json::from_str("3232235777").unwrap();
        assert_eq!(back, ip);
    }

    #[test]
    fn test_ipv4addr_conversion_matches_wire_packing() {
        let addr: Ipv4Addr = "203.0.113.9".parse().unwrap();
        let ip = PackedIp::from(addr);
        assert_eq!(ip, PackedIp::from_octets(203, 0, 113, 9));
        assert_eq!(Ipv4Addr::from(ip), addr);
    }
}
