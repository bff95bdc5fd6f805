//! Per-instance gesture session state.

use crate::events::{PointerPress, TargetId};
use web_time::Instant;

/// Explicit phase of the in-progress interaction.
///
/// The original timeout-juggling is modelled as a state machine: each
/// non-idle phase carries exactly one deadline, so at most one arbiter
/// is ever armed and cancellation is just dropping the phase.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Phase {
    /// No interaction in progress.
    Idle,
    /// Pointer is down; the deadline is the long-click arbiter. Holds
    /// the press event so a long click can emit it.
    Pressed {
        deadline: Instant,
        press: PointerPress,
    },
    /// Pointer released once; the deadline is the single-click
    /// confirmation. A press-start landing in this phase upgrades the
    /// interaction to a double click.
    AwaitingConfirm {
        deadline: Instant,
        release: PointerPress,
    },
}

/// Mutable classification state for one logical pointer target.
///
/// Created once per recogniser and reset between interactions, never
/// destroyed mid-interaction. Exclusively owned and mutated by the
/// recogniser.
#[derive(Debug)]
pub(crate) struct GestureSession {
    /// Press-starts seen since the last reset to 0.
    pub press_count: u8,
    /// Movement observed since the last press-start.
    pub is_moving: bool,
    pub phase: Phase,
    /// Target currently holding the ghost-click guard, if any.
    pub ghost_target: Option<TargetId>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self {
            press_count: 0,
            is_moving: false,
            phase: Phase::Idle,
            ghost_target: None,
        }
    }

    /// Drops any pending deadline and zeroes the counters. Does not
    /// touch `ghost_target`; the recogniser detaches the guard first.
    pub fn reset(&mut self) {
        self.press_count = 0;
        self.is_moving = false;
        self.phase = Phase::Idle;
    }

    /// The armed deadline, if any phase is holding one.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pressed { deadline, .. } | Phase::AwaitingConfirm { deadline, .. } => {
                Some(*deadline)
            }
        }
    }
}
