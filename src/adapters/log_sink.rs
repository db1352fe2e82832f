//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production). The log
//! stream is advisory only — the indicator LEDs remain the operator-facing
//! contract.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::NetworkJoined => {
                info!("NET   | joined");
            }
            AppEvent::TagScanned { uid } => {
                info!("SCAN  | uid={}", uid);
            }
            AppEvent::ReportResolved { uid, outcome } => {
                info!("REPORT| uid={} outcome={}", uid, outcome);
            }
        }
    }
}
