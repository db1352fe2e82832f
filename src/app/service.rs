//! Application service — the control loop core.
//!
//! [`AppService`] owns the lifecycle FSM and the reporter, and runs the
//! fixed per-iteration sequence: poll → format → signal → report → signal →
//! quiesce. All I/O flows through port traits injected at call sites, making
//! the entire service testable with mock adapters.
//!
//! ```text
//!  TagReaderPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                    │        AppService        │
//!  IndicatorPort ◀── │  DeviceFsm · Reporter    │ ──▶ HttpPort
//!  DelayPort     ◀── └──────────────────────────┘ ──▶ ConnectivityPort
//! ```

use log::{info, warn};

use crate::config::ReporterConfig;
use crate::drivers::patterns::{self, BlinkPattern, Light};
use crate::state::{DeviceFsm, DeviceState};
use crate::uid;

use super::events::AppEvent;
use super::ports::{
    ConnectivityPort, DelayPort, EventSink, HttpPort, IndicatorPort, TagReaderPort,
};
use super::reporter::{ReportOutcome, Reporter};

/// Pause after handling a tag, so a card still resting on the reader does
/// not re-trigger immediately.
pub const QUIESCENT_MS: u32 = 2000;

/// The application service orchestrates all domain logic.
pub struct AppService {
    fsm: DeviceFsm,
    reporter: Reporter,
    /// Which light the next join-in-progress blink uses.
    join_blink_red: bool,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: &ReporterConfig) -> Self {
        Self {
            fsm: DeviceFsm::new(),
            reporter: Reporter::new(&config.endpoint_url),
            join_blink_red: true,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup. Call once, before [`join_network`](Self::join_network).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.fsm.state()));
        info!("AppService started in {:?}", self.fsm.state());
    }

    /// Block until the network is joined.
    ///
    /// Each join attempt that fails to observe a connected link runs one
    /// join-in-progress blink, alternating red and green per iteration.
    /// There is no timeout and no attempt cap: the device waits as long as
    /// it takes, exactly as it behaves in the field. On success the FSM
    /// enters `Ready` (once, irrevocably) and the green light is held on.
    pub fn join_network(
        &mut self,
        net: &mut impl ConnectivityPort,
        hw: &mut (impl IndicatorPort + DelayPort),
        sink: &mut impl EventSink,
    ) {
        self.fsm.transition(DeviceState::ConnectingNetwork);
        info!("joining network");

        loop {
            if net.is_connected() {
                break;
            }
            if let Err(e) = net.connect() {
                warn!("network join attempt failed: {e}");
            }
            if net.is_connected() {
                break;
            }
            let pattern = if self.join_blink_red {
                &patterns::JOIN_RED
            } else {
                &patterns::JOIN_GREEN
            };
            self.join_blink_red = !self.join_blink_red;
            patterns::run(hw, pattern);
        }

        self.fsm.transition(DeviceState::Ready);
        patterns::hold(hw, Light::Green);
        sink.emit(&AppEvent::NetworkJoined);
        info!("network joined; entering steady state");
    }

    // ── Per-scan orchestration ────────────────────────────────

    /// Run one `Ready` iteration.
    ///
    /// With no tag in the field this is a single cheap poll and returns
    /// `None`. With a tag it runs the full signal/report sequence, pauses
    /// for [`QUIESCENT_MS`], and returns the scan's outcome. Every branch is
    /// terminal for this scan only — nothing carries over to the next poll.
    pub fn tick(
        &mut self,
        hw: &mut (impl TagReaderPort + IndicatorPort + DelayPort),
        net: &mut impl ConnectivityPort,
        http: &mut impl HttpPort,
        sink: &mut impl EventSink,
    ) -> Option<ReportOutcome> {
        debug_assert!(self.fsm.is_ready(), "tick before join_network");

        let raw = hw.poll_new_tag()?;
        let uid = uid::format(&raw);
        info!("tag detected: uid={uid}");
        sink.emit(&AppEvent::TagScanned { uid: uid.clone() });
        patterns::run(hw, &patterns::TAG_DETECTED);

        let outcome = if net.is_connected() {
            patterns::run(hw, &patterns::TRANSMITTING);
            self.reporter.report(net, http, &uid)
        } else {
            ReportOutcome::NetworkUnavailable
        };

        patterns::run(hw, Self::outcome_pattern(&outcome));
        info!("scan resolved: {outcome}");
        sink.emit(&AppEvent::ReportResolved {
            uid,
            outcome: outcome.clone(),
        });

        hw.delay_ms(QUIESCENT_MS);
        Some(outcome)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current lifecycle state.
    pub fn state(&self) -> DeviceState {
        self.fsm.state()
    }

    /// Endpoint the reporter posts to.
    pub fn endpoint(&self) -> &str {
        self.reporter.endpoint()
    }

    // ── Internal ──────────────────────────────────────────────

    fn outcome_pattern(outcome: &ReportOutcome) -> &'static BlinkPattern {
        match outcome {
            ReportOutcome::Success => &patterns::ACCEPTED,
            ReportOutcome::ServerRejected { .. } => &patterns::REJECTED,
            ReportOutcome::TransportFailed { .. } => &patterns::TRANSPORT_FAILURE,
            ReportOutcome::NetworkUnavailable => &patterns::NETWORK_UNAVAILABLE,
        }
    }
}
