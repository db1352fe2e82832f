//! Network reporter — builds the attendance payload, performs the exchange,
//! and classifies the outcome.
//!
//! One report per scan, no retries at any layer: a failure here is terminal
//! for the current scan only and surfaces as an indicator pattern plus a log
//! line. Retrying is the operator's job (present the card again).

use core::fmt;

use log::{info, warn};
use serde::Serialize;

use super::ports::{ConnectivityPort, HttpPort};

/// Wire payload. Serialises to exactly `{"uid":"<value>"}` — the identifier
/// is lowercase hex, so no JSON escaping ever applies.
#[derive(Serialize)]
struct ScanReport<'a> {
    uid: &'a str,
}

/// Classified result of one report attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Service answered 200.
    Success,
    /// Exchange completed but the service answered something else.
    ServerRejected {
        status: u16,
        body: heapless::String<256>,
    },
    /// The exchange itself did not complete.
    TransportFailed { reason: heapless::String<96> },
    /// Link was down; no request was attempted.
    NetworkUnavailable,
}

impl fmt::Display for ReportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "accepted"),
            Self::ServerRejected { status, .. } => write!(f, "rejected (status {status})"),
            Self::TransportFailed { reason } => write!(f, "transport failure: {reason}"),
            Self::NetworkUnavailable => write!(f, "network unavailable"),
        }
    }
}

/// Owns the endpoint and the outcome classification. Stateless between
/// scans.
pub struct Reporter {
    endpoint: heapless::String<128>,
}

impl Reporter {
    pub fn new(endpoint_url: &str) -> Self {
        let mut endpoint = heapless::String::new();
        let _ = endpoint.push_str(endpoint_url);
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Relay one identifier to the attendance service.
    ///
    /// Re-verifies the link before attempting — a scan that races a link
    /// drop returns [`ReportOutcome::NetworkUnavailable`] without touching
    /// the transport.
    pub fn report(
        &self,
        net: &impl ConnectivityPort,
        http: &mut impl HttpPort,
        uid: &str,
    ) -> ReportOutcome {
        if !net.is_connected() {
            warn!("report skipped: link down at scan time (uid={uid})");
            return ReportOutcome::NetworkUnavailable;
        }

        let Ok(body) = serde_json::to_string(&ScanReport { uid }) else {
            // Serialising a single borrowed-str field cannot fail.
            return ReportOutcome::TransportFailed {
                reason: super::ports::TransportError::new("payload serialisation failed").reason,
            };
        };

        info!("POST {} {}", self.endpoint, body);

        match http.post_json(&self.endpoint, &body) {
            Ok(resp) if resp.status == 200 => {
                info!("service accepted uid={uid}");
                ReportOutcome::Success
            }
            Ok(resp) => {
                warn!(
                    "service rejected uid={uid}: status={} body={}",
                    resp.status, resp.body
                );
                ReportOutcome::ServerRejected {
                    status: resp.status,
                    body: resp.body,
                }
            }
            Err(e) => {
                warn!("report transport failed (uid={uid}): {e}");
                ReportOutcome::TransportFailed { reason: e.reason }
            }
        }
    }
}
