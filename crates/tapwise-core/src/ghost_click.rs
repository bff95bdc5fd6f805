//! Ghost-click guard seam.
//!
//! Some platforms synthesize a mouse click shortly after a touch
//! release, double-firing handlers already triggered by the touch
//! event. The recogniser guards against this by asking the host to
//! attach a one-shot listener on the pressed target that swallows the
//! next synthetic click; the host supplies the mechanism through this
//! trait.

use crate::events::TargetId;

/// Host hook for attaching/removing the swallow-next-synthetic-click
/// listener on a target.
///
/// The recogniser guarantees balanced calls: every `attach` is paired
/// with a `detach` on the same target before any reattachment, on every
/// terminating transition. Implementations should leave multi-touch
/// sequences alone (a second finger going down is not a ghost click).
pub trait GhostClickGuard {
    fn attach(&mut self, target: TargetId);
    fn detach(&mut self, target: TargetId);
}

/// Guard that does nothing. Used when suppression is disabled or the
/// host platform has no ghost-click problem.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct NoopGhostClickGuard;

impl GhostClickGuard for NoopGhostClickGuard {
    fn attach(&mut self, _target: TargetId) {}

    fn detach(&mut self, _target: TargetId) {}
}
