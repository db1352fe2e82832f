//! Two-LED indicator driver.
//!
//! Drives the discrete red and green status LEDs through any pair of
//! [`embedded_hal::digital::OutputPin`]s — on ESP-IDF these are
//! `esp_idf_hal::gpio::PinDriver` outputs, on the host any test double.
//! Tracks the last commanded state in memory so callers can query it without
//! reading the pins back.

use embedded_hal::digital::OutputPin;

use crate::app::ports::IndicatorPort;
use crate::drivers::patterns::Light;

pub struct IndicatorLeds<R, G> {
    red: R,
    green: G,
    current: (bool, bool),
}

impl<R: OutputPin, G: OutputPin> IndicatorLeds<R, G> {
    /// Takes ownership of both pins and drives them low.
    pub fn new(mut red: R, mut green: G) -> Self {
        let _ = red.set_low();
        let _ = green.set_low();
        Self {
            red,
            green,
            current: (false, false),
        }
    }

    /// Last commanded (red, green) state.
    pub fn current(&self) -> (bool, bool) {
        self.current
    }

    pub fn all_off(&mut self) {
        self.set_light(Light::Red, false);
        self.set_light(Light::Green, false);
    }
}

impl<R: OutputPin, G: OutputPin> IndicatorPort for IndicatorLeds<R, G> {
    fn set_light(&mut self, light: Light, on: bool) {
        // GPIO writes on this board are infallible.
        match (light, on) {
            (Light::Red, true) => {
                let _ = self.red.set_high();
                self.current.0 = true;
            }
            (Light::Red, false) => {
                let _ = self.red.set_low();
                self.current.0 = false;
            }
            (Light::Green, true) => {
                let _ = self.green.set_high();
                self.current.1 = true;
            }
            (Light::Green, false) => {
                let _ = self.green.set_low();
                self.current.1 = false;
            }
        }
    }
}
