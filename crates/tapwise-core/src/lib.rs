//! Core click-gesture disambiguation for Tapwise.
//!
//! One [`ClickRecognizer`] per interactive element turns a stream of
//! normalized press/release/move events into at most one of three
//! notifications per interaction: single click, double click, or long
//! click. The host event layer wires its raw input events into the
//! recogniser, pumps [`ClickRecognizer::tick`] with frame time, and
//! receives outcomes through [`ClickCallbacks`].
//!
//! Everything is single-threaded and cooperative: events and deadline
//! resolutions all run on the host's event thread, in delivery order.

pub mod callbacks;
pub mod context_menu;
pub mod events;
pub mod ghost_click;
pub mod options;
pub mod recognizer;
mod session;


// Re-export commonly used items
pub use callbacks::ClickCallbacks;
pub use context_menu::{ContextMenuHost, ContextMenuSuppressor};
pub use events::{Point, PointerPress, PointerType, TargetId};
pub use ghost_click::{GhostClickGuard, NoopGhostClickGuard};
pub use options::{ClickOptions, DOUBLE_CLICK_DELAY_MS, LONG_CLICK_DELAY_MS};
pub use recognizer::ClickRecognizer;
