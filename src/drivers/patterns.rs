//! Blink pattern vocabulary and its blocking executor.
//!
//! The two indicator LEDs are the device's only operator-facing status
//! channel, so the pattern table below *is* the user interface — the timings
//! are load-bearing and must not drift.
//!
//! | Event                        | Light | Reps | Phase (ms) |
//! |------------------------------|-------|------|------------|
//! | Network join in progress     | R/G alternating | 1 | 300 |
//! | Ready                        | Green | solid on | — |
//! | Tag detected                 | Red   | 1    | 150 |
//! | Transmitting to service      | Green | 2    | 100 |
//! | Service accepted (200)       | Green | 3    | 200 |
//! | Service rejected (non-200)   | Red   | 3    | 200 |
//! | Transport/request failure    | Red   | 5    | 100 |
//! | Network unavailable at scan  | Red   | 2    | 400 |
//!
//! Execution is blocking and run-to-completion: one pattern finishes before
//! the control loop proceeds, so patterns are never interrupted or
//! interleaved.

use crate::app::ports::{DelayPort, IndicatorPort};

/// Which of the two indicator LEDs a pattern drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Light {
    Red,
    Green,
}

/// A named on/off blink sequence for one light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPattern {
    pub light: Light,
    pub repetitions: u8,
    pub on_ms: u32,
}

impl BlinkPattern {
    /// Total blocking duration of one execution.
    pub const fn total_ms(&self) -> u32 {
        2 * self.repetitions as u32 * self.on_ms
    }
}

// ── The signaling vocabulary ──────────────────────────────────

/// Join-in-progress, odd iterations.
pub const JOIN_RED: BlinkPattern = BlinkPattern {
    light: Light::Red,
    repetitions: 1,
    on_ms: 300,
};
/// Join-in-progress, even iterations.
pub const JOIN_GREEN: BlinkPattern = BlinkPattern {
    light: Light::Green,
    repetitions: 1,
    on_ms: 300,
};
/// A new tag was read.
pub const TAG_DETECTED: BlinkPattern = BlinkPattern {
    light: Light::Red,
    repetitions: 1,
    on_ms: 150,
};
/// Request to the attendance service is in flight.
pub const TRANSMITTING: BlinkPattern = BlinkPattern {
    light: Light::Green,
    repetitions: 2,
    on_ms: 100,
};
/// Service answered 200.
pub const ACCEPTED: BlinkPattern = BlinkPattern {
    light: Light::Green,
    repetitions: 3,
    on_ms: 200,
};
/// Service answered with a non-200 status.
pub const REJECTED: BlinkPattern = BlinkPattern {
    light: Light::Red,
    repetitions: 3,
    on_ms: 200,
};
/// The request/response exchange did not complete.
pub const TRANSPORT_FAILURE: BlinkPattern = BlinkPattern {
    light: Light::Red,
    repetitions: 5,
    on_ms: 100,
};
/// Link was down when the tag was scanned.
pub const NETWORK_UNAVAILABLE: BlinkPattern = BlinkPattern {
    light: Light::Red,
    repetitions: 2,
    on_ms: 400,
};

// ── Executor ──────────────────────────────────────────────────

/// Execute a pattern to completion, blocking the caller for
/// [`BlinkPattern::total_ms`]. Leaves the light off.
pub fn run(hw: &mut (impl IndicatorPort + DelayPort), pattern: &BlinkPattern) {
    for _ in 0..pattern.repetitions {
        hw.set_light(pattern.light, true);
        hw.delay_ms(pattern.on_ms);
        hw.set_light(pattern.light, false);
        hw.delay_ms(pattern.on_ms);
    }
}

/// Switch a light on persistently (the Ready indication). Does not block and
/// does not auto-revert.
pub fn hold(hw: &mut impl IndicatorPort, light: Light) {
    hw.set_light(light, true);
}
