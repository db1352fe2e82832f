//! System configuration
//!
//! The device recognises exactly three options: the network name, the
//! passphrase, and the attendance endpoint URL. They are baked in at build
//! time (see `main.rs`), validated once here, and the resulting struct is
//! immutable for the rest of the power cycle — no ambient mutable globals.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable reporter configuration, constructed once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// WiFi station SSID (1–32 printable ASCII bytes).
    pub wifi_ssid: heapless::String<32>,
    /// WPA2 passphrase (8–64 bytes), or empty for an open network.
    pub wifi_password: heapless::String<64>,
    /// Attendance service endpoint, e.g. `http://192.168.1.20:5000/api/rfid_scan`.
    pub endpoint_url: heapless::String<128>,
}

impl ReporterConfig {
    /// Validate and construct the configuration.
    pub fn new(ssid: &str, password: &str, endpoint_url: &str) -> Result<Self> {
        validate_ssid(ssid)?;
        validate_password(password)?;
        validate_endpoint(endpoint_url)?;

        let mut cfg = Self {
            wifi_ssid: heapless::String::new(),
            wifi_password: heapless::String::new(),
            endpoint_url: heapless::String::new(),
        };
        cfg.wifi_ssid
            .push_str(ssid)
            .map_err(|_| Error::Config("SSID too long"))?;
        cfg.wifi_password
            .push_str(password)
            .map_err(|_| Error::Config("passphrase too long"))?;
        cfg.endpoint_url
            .push_str(endpoint_url)
            .map_err(|_| Error::Config("endpoint URL too long"))?;
        Ok(cfg)
    }
}

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<()> {
    if ssid.is_empty() || ssid.len() > 32 || !is_printable_ascii(ssid) {
        return Err(Error::Config(
            "SSID must be 1-32 printable ASCII bytes",
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    // Empty is a valid open-network configuration.
    if !password.is_empty() && (password.len() < 8 || password.len() > 64) {
        return Err(Error::Config(
            "passphrase must be 8-64 bytes for WPA2, or empty for open",
        ));
    }
    Ok(())
}

fn validate_endpoint(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::Config("endpoint URL must be http:// or https://"));
    }
    Ok(())
}
