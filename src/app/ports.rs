//! Port traits — the hexagonal boundary between domain logic and the outside
//! world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (tag reader, WiFi, HTTP client, LEDs, delay source, event
//! sinks) implement these traits. The
//! [`AppService`](super::service::AppService) consumes them via generics, so
//! the domain core never touches hardware directly.
//!
//! | Port              | Production adapter          |
//! |-------------------|-----------------------------|
//! | `TagReaderPort`   | `adapters::reader`          |
//! | `ConnectivityPort`| `adapters::wifi`            |
//! | `HttpPort`        | `adapters::http`            |
//! | `IndicatorPort`   | `drivers::indicator`        |
//! | `DelayPort`       | `adapters::delay`           |
//! | `EventSink`       | `adapters::log_sink`        |

use core::fmt;

use crate::drivers::patterns::Light;
use crate::uid::TagUidBytes;

// ───────────────────────────────────────────────────────────────
// Tag reader port (driven adapter: RFID front-end → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the RFID reader capability.
pub trait TagReaderPort {
    /// Single non-blocking poll. `Some(uid)` when a new tag is in the field
    /// and its serial was read completely; `None` for absence *or* an
    /// incomplete read (indistinguishable to the caller by design).
    ///
    /// A successful poll advances the reader's internal anti-collision
    /// state, so the same physically-present tag does not re-report until
    /// it leaves and re-enters the field.
    fn poll_new_tag(&mut self) -> Option<TagUidBytes>;
}

// ───────────────────────────────────────────────────────────────
// Connectivity port (driven adapter: network link → domain)
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityError {
    NoCredentials,
    InvalidSsid,
    InvalidPassword,
    ConnectionFailed,
}

impl fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCredentials => write!(f, "no WiFi credentials configured"),
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => {
                write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)")
            }
            Self::ConnectionFailed => write!(f, "WiFi connection failed"),
        }
    }
}

/// Station-mode network link.
pub trait ConnectivityPort {
    /// One blocking join attempt.
    fn connect(&mut self) -> Result<(), ConnectivityError>;

    /// Cheap link-status query, safe to call once per scan.
    fn is_connected(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// HTTP port (driven adapter: domain → attendance service)
// ───────────────────────────────────────────────────────────────

/// A completed HTTP exchange. The body is captured (bounded) for the
/// diagnostic log only — this firmware never parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: heapless::String<256>,
}

/// The transport could not complete the exchange (connect error, timeout,
/// malformed response). Carries the transport's own diagnostic description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub reason: heapless::String<96>,
}

impl TransportError {
    pub fn new(reason: &str) -> Self {
        let mut e = Self {
            reason: heapless::String::new(),
        };
        for ch in reason.chars() {
            if e.reason.push(ch).is_err() {
                break;
            }
        }
        e
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Blocking request/response exchange primitive.
pub trait HttpPort {
    /// Issue a single POST with `Content-Type: application/json` and the
    /// given body. No retries at this layer.
    fn post_json(&mut self, url: &str, body: &str) -> Result<HttpResponse, TransportError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator + delay ports (driven adapters: domain → operator)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the two status LEDs.
pub trait IndicatorPort {
    fn set_light(&mut self, light: Light, on: bool);
}

/// Blocking delay source. The pattern executor and the post-scan quiescent
/// pause both run through this, so tests can substitute a recording clock.
pub trait DelayPort {
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log today; a
/// display or telemetry uplink would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
