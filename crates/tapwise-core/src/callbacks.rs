//! Outcome handlers invoked when an interaction resolves.

use crate::events::PointerPress;
use std::fmt;
use std::rc::Rc;

type ClickHandler = Rc<dyn Fn(&PointerPress)>;

fn noop() -> ClickHandler {
    Rc::new(|_| {})
}

/// The three outcome handlers. Each defaults to a no-op, so a caller
/// only wires the outcomes it cares about.
///
/// Example:
/// `ClickCallbacks::new().on_single_click(|ev| println!("tap {:?}", ev.position))`
#[derive(Clone)]
pub struct ClickCallbacks {
    pub(crate) single_click: ClickHandler,
    pub(crate) double_click: ClickHandler,
    pub(crate) long_click: ClickHandler,
}

impl Default for ClickCallbacks {
    fn default() -> Self {
        Self {
            single_click: noop(),
            double_click: noop(),
            long_click: noop(),
        }
    }
}

impl ClickCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_single_click(mut self, handler: impl Fn(&PointerPress) + 'static) -> Self {
        self.single_click = Rc::new(handler);
        self
    }

    pub fn on_double_click(mut self, handler: impl Fn(&PointerPress) + 'static) -> Self {
        self.double_click = Rc::new(handler);
        self
    }

    pub fn on_long_click(mut self, handler: impl Fn(&PointerPress) + 'static) -> Self {
        self.long_click = Rc::new(handler);
        self
    }
}

impl fmt::Debug for ClickCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickCallbacks")
            .field("single_click", &Rc::as_ptr(&self.single_click))
            .field("double_click", &Rc::as_ptr(&self.double_click))
            .field("long_click", &Rc::as_ptr(&self.long_click))
            .finish()
    }
}
