//! Blocking delay adapter.
//!
//! - **`target_os = "espidf"`** — yields to FreeRTOS via
//!   `esp_idf_hal::delay::FreeRtos`, so the watchdog and WiFi task keep
//!   running during pattern execution.
//! - **all other targets** — `std::thread::sleep` for host-side runs.

use crate::app::ports::DelayPort;

pub struct SystemDelay;

impl SystemDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayPort for SystemDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
