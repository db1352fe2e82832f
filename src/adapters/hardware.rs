//! Composite hardware adapter.
//!
//! Bundles the tag reader, the indicator LEDs, and the delay source into one
//! value that satisfies every hardware-side port the control loop consumes.
//! This keeps [`AppService::tick`](crate::app::service::AppService::tick) to
//! a single `hw` parameter and avoids split mutable borrows across ports.

use embedded_hal::digital::OutputPin;

use crate::app::ports::{DelayPort, IndicatorPort, TagReaderPort};
use crate::drivers::indicator::IndicatorLeds;
use crate::drivers::patterns::Light;
use crate::uid::TagUidBytes;

use super::delay::SystemDelay;
use super::reader::TagReader;

pub struct HardwareAdapter<R, G> {
    reader: TagReader,
    leds: IndicatorLeds<R, G>,
    delay: SystemDelay,
}

impl<R: OutputPin, G: OutputPin> HardwareAdapter<R, G> {
    pub fn new(reader: TagReader, leds: IndicatorLeds<R, G>) -> Self {
        Self {
            reader,
            leds,
            delay: SystemDelay::new(),
        }
    }

    pub fn reader_mut(&mut self) -> &mut TagReader {
        &mut self.reader
    }

    pub fn leds(&self) -> &IndicatorLeds<R, G> {
        &self.leds
    }
}

impl<R: OutputPin, G: OutputPin> TagReaderPort for HardwareAdapter<R, G> {
    fn poll_new_tag(&mut self) -> Option<TagUidBytes> {
        self.reader.poll_new_tag()
    }
}

impl<R: OutputPin, G: OutputPin> IndicatorPort for HardwareAdapter<R, G> {
    fn set_light(&mut self, light: Light, on: bool) {
        self.leds.set_light(light, on);
    }
}

impl<R: OutputPin, G: OutputPin> DelayPort for HardwareAdapter<R, G> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
