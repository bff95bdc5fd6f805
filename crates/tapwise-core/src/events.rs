//! Normalized pointer event types shared between hosts and the recogniser.

use std::any::Any;
use std::rc::Rc;

/// Host-assigned identity of a pointer target.
pub type TargetId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Stylus,
    Unknown,
}

/// Position in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The normalized data structure for a press or release.
///
/// Hosts build one of these from their raw platform event; the recogniser
/// hands the same value back to whichever callback resolves the
/// interaction, so handlers see the event that started (long click) or
/// ended (single click) the gesture.
#[derive(Clone)]
pub struct PointerPress {
    pub target: TargetId,
    pub position: Point,
    pub type_: PointerType,
    /// Milliseconds since an arbitrary host epoch.
    pub uptime: u64,
    /// Opaque platform event, carried through untouched.
    pub raw: Option<Rc<dyn Any>>,
}

impl std::fmt::Debug for PointerPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerPress")
            .field("target", &self.target)
            .field("position", &self.position)
            .field("type_", &self.type_)
            .field("uptime", &self.uptime)
            .field("raw", &self.raw.as_ref().map(Rc::as_ptr))
            .finish()
    }
}

impl PartialEq for PointerPress {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
            && self.position == other.position
            && self.type_ == other.type_
            && self.uptime == other.uptime
    }
}

impl PointerPress {
    pub fn new(target: TargetId, position: Point, type_: PointerType, uptime: u64) -> Self {
        Self {
            target,
            position,
            type_,
            uptime,
            raw: None,
        }
    }

    /// Attaches the opaque platform event.
    pub fn with_raw(mut self, raw: Rc<dyn Any>) -> Self {
        self.raw = Some(raw);
        self
    }
}
