//! Click gesture recogniser.
//!
//! Disambiguates a raw press/release/move stream into one of three
//! outcomes: single click, double click, long click. The interesting
//! part is the race between the two deadlines and the next press:
//!
//! - a press arms the long-click deadline;
//! - a release swaps it for the single-click confirmation deadline;
//! - a second press inside that window preempts the confirmation and
//!   resolves to a double click on the spot;
//! - movement while pressed demotes an elapsing long-click deadline to
//!   a no-op (the interaction was a swipe).
//!
//! Deadlines are plain `Instant`s carried by the current [`Phase`] and
//! checked from the host's frame pump via [`ClickRecognizer::tick`];
//! hosts with timer scheduling can sleep until
//! [`ClickRecognizer::next_deadline`] instead of polling.

use crate::callbacks::ClickCallbacks;
use crate::events::PointerPress;
use crate::ghost_click::{GhostClickGuard, NoopGhostClickGuard};
use crate::options::ClickOptions;
use crate::session::{GestureSession, Phase};
use std::mem;
use web_time::Instant;

/// Recogniser for one logical pointer target.
///
/// All entry points run on the host's event thread; the only
/// "concurrency" is the logical race between the deadlines and the next
/// input event, serialized by the host's event loop.
pub struct ClickRecognizer {
    options: ClickOptions,
    callbacks: ClickCallbacks,
    guard: Box<dyn GhostClickGuard>,
    session: GestureSession,
}

impl ClickRecognizer {
    /// Recogniser without a ghost-click mechanism (the guard seam is a
    /// no-op regardless of `options.suppress_ghost_click`).
    pub fn new(callbacks: ClickCallbacks, options: ClickOptions) -> Self {
        Self::with_guard(callbacks, options, Box::new(NoopGhostClickGuard))
    }

    /// Recogniser wired to a host-provided ghost-click guard.
    pub fn with_guard(
        callbacks: ClickCallbacks,
        options: ClickOptions,
        guard: Box<dyn GhostClickGuard>,
    ) -> Self {
        Self {
            options,
            callbacks,
            guard,
            session: GestureSession::new(),
        }
    }

    pub fn options(&self) -> &ClickOptions {
        &self.options
    }

    /// Press-starts seen since the last resolution or cancel.
    pub fn press_count(&self) -> u8 {
        self.session.press_count
    }

    /// The armed deadline, if any. Hosts that schedule wake-ups instead
    /// of polling every frame should `tick` at this time.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.deadline()
    }

    /// Pointer/touch down.
    pub fn press_start(&mut self, event: PointerPress, now: Instant) {
        self.session.is_moving = false;
        self.session.press_count += 1;

        if self.session.press_count == 2 {
            // Second press inside the confirmation window: the pending
            // arbiter (whichever phase holds it) is dropped and the
            // interaction resolves right now.
            self.detach_guard();
            self.session.reset();
            log::trace!("double click on target {}", event.target);
            (self.callbacks.double_click)(&event);
            return;
        }

        if self.options.suppress_ghost_click {
            // Balanced attach: clear a stale guard before reassigning.
            self.detach_guard();
            self.guard.attach(event.target);
            self.session.ghost_target = Some(event.target);
        }
        self.session.phase = Phase::Pressed {
            deadline: now + self.options.long_click_delay,
            press: event,
        };
    }

    /// Pointer/touch up.
    pub fn press_end(&mut self, event: PointerPress, now: Instant) {
        self.detach_guard();
        self.session.is_moving = false;
        if self.session.press_count == 1 {
            self.session.phase = Phase::AwaitingConfirm {
                deadline: now + self.options.double_click_delay,
                release: event,
            };
        } else {
            // Stray release with no press outstanding.
            self.session.phase = Phase::Idle;
        }
    }

    /// Pointer/touch moved while pressed. Cancels nothing; only gates
    /// the long-click resolution.
    pub fn move_detected(&mut self) {
        self.session.is_moving = true;
    }

    /// Pointer left the element: the interaction is abandoned. Cleans
    /// up the guard and any pending deadline without resolving.
    pub fn leave(&mut self) {
        self.detach_guard();
        self.session.reset();
    }

    /// Frame pump. Fires whichever deadline has elapsed, if any.
    /// Ticking past an already-consumed deadline is a no-op.
    pub fn tick(&mut self, now: Instant) {
        match mem::replace(&mut self.session.phase, Phase::Idle) {
            Phase::Pressed { deadline, press } if now >= deadline => {
                self.resolve_long(press);
            }
            Phase::AwaitingConfirm { deadline, release } if now >= deadline => {
                self.resolve_single(release);
            }
            pending => self.session.phase = pending,
        }
    }

    /// Long-click deadline elapsed with the pointer still down.
    fn resolve_long(&mut self, press: PointerPress) {
        self.detach_guard();
        let moving = self.session.is_moving;
        self.session.reset();
        if moving {
            // Swipe, not a hold.
            log::trace!("long-click deadline demoted by movement");
            return;
        }
        log::trace!("long click on target {}", press.target);
        (self.callbacks.long_click)(&press);
    }

    /// Single-click confirmation elapsed with no second press.
    fn resolve_single(&mut self, release: PointerPress) {
        // Re-check the count: a transition earlier in the same turn may
        // already have consumed this press.
        let confirmed = self.session.press_count == 1;
        self.session.reset();
        if confirmed {
            log::trace!("single click on target {}", release.target);
            (self.callbacks.single_click)(&release);
        }
    }

    fn detach_guard(&mut self) {
        if let Some(target) = self.session.ghost_target.take() {
            self.guard.detach(target);
        }
    }
}
