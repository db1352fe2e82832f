//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — today that is the serial log.

use crate::app::reporter::ReportOutcome;
use crate::state::DeviceState;
use crate::uid::UidString;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The application service has started (carries initial state).
    Started(DeviceState),

    /// The network join succeeded; the device is entering `Ready`.
    NetworkJoined,

    /// A tag was read and its identifier canonicalised.
    TagScanned { uid: UidString },

    /// A scan's report attempt resolved (in any of its four ways).
    ReportResolved {
        uid: UidString,
        outcome: ReportOutcome,
    },
}
