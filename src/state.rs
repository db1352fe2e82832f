//! Device lifecycle state machine.
//!
//! The device moves through exactly one forward path per power cycle:
//!
//! ```text
//! Booting ──▶ ConnectingNetwork ──▶ Ready
//! ```
//!
//! `Ready` is terminal: network loss after the join is handled as a per-scan
//! condition by the control loop and never re-enters `ConnectingNetwork`.
//! [`DeviceFsm`] enforces that policy — any transition out of `Ready`, and
//! any edge not in the path above, is rejected.

use log::{info, warn};

/// Enumeration of all device lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// Power-on; peripherals are being initialised.
    Booting,
    /// Attempting the network join (unbounded).
    ConnectingNetwork,
    /// Network joined; polling for tags. Terminal.
    Ready,
}

impl DeviceState {
    fn name(self) -> &'static str {
        match self {
            Self::Booting => "Booting",
            Self::ConnectingNetwork => "ConnectingNetwork",
            Self::Ready => "Ready",
        }
    }
}

/// Transition engine over [`DeviceState`].
///
/// Owns the current state and the single legal edge list. Rejected
/// transitions are logged and leave the state untouched, so a caller bug
/// cannot take the device out of `Ready`.
pub struct DeviceFsm {
    current: DeviceState,
}

impl DeviceFsm {
    /// A fresh power cycle starts in `Booting`.
    pub fn new() -> Self {
        Self {
            current: DeviceState::Booting,
        }
    }

    /// The current state.
    pub fn state(&self) -> DeviceState {
        self.current
    }

    /// Whether the steady polling state has been reached.
    pub fn is_ready(&self) -> bool {
        self.current == DeviceState::Ready
    }

    /// Attempt a transition. Returns `true` if the edge is legal and was
    /// taken.
    pub fn transition(&mut self, next: DeviceState) -> bool {
        if !Self::edge_is_legal(self.current, next) {
            warn!(
                "STATE | rejected {} -> {}",
                self.current.name(),
                next.name()
            );
            return false;
        }
        info!("STATE | {} -> {}", self.current.name(), next.name());
        self.current = next;
        true
    }

    fn edge_is_legal(from: DeviceState, to: DeviceState) -> bool {
        matches!(
            (from, to),
            (DeviceState::Booting, DeviceState::ConnectingNetwork)
                | (DeviceState::ConnectingNetwork, DeviceState::Ready)
        )
    }
}

impl Default for DeviceFsm {
    fn default() -> Self {
        Self::new()
    }
}
