//! Recogniser configuration and its default timing constants.
//!
//! These values are host-overridable; the defaults are tuned for typical
//! desktop/mobile pointer latency. Hosts with platform-specific
//! conventions (e.g. an OS-wide double-click interval) should override
//! the delays from their own configuration source.

use web_time::Duration;

/// Hold duration in milliseconds after a press-start with no matching
/// release before a long click fires.
pub const LONG_CLICK_DELAY_MS: u64 = 300;

/// Window in milliseconds after a release during which a second press
/// upgrades the interaction to a double click. Only once this window
/// closes is a single click confirmed.
pub const DOUBLE_CLICK_DELAY_MS: u64 = 200;

/// Configuration for a [`ClickRecognizer`](crate::ClickRecognizer).
///
/// Every field is independently overridable; `Default` gives the stock
/// behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOptions {
    /// Time after a press-start with no release before a long click fires.
    pub long_click_delay: Duration,
    /// Time after a press-end before a single click is confirmed.
    pub double_click_delay: Duration,
    /// Guard against the synthetic mouse click some platforms emit
    /// after a touch release.
    pub suppress_ghost_click: bool,
    /// Whether the context-menu suppressor should be active for this
    /// instance. Consumed by
    /// [`ContextMenuSuppressor`](crate::ContextMenuSuppressor), not by
    /// the recogniser itself.
    pub suppress_context_menu: bool,
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self {
            long_click_delay: Duration::from_millis(LONG_CLICK_DELAY_MS),
            double_click_delay: Duration::from_millis(DOUBLE_CLICK_DELAY_MS),
            suppress_ghost_click: true,
            suppress_context_menu: true,
        }
    }
}

impl ClickOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn long_click_delay(mut self, delay: Duration) -> Self {
        self.long_click_delay = delay;
        self
    }

    pub fn double_click_delay(mut self, delay: Duration) -> Self {
        self.double_click_delay = delay;
        self
    }

    pub fn suppress_ghost_click(mut self, enabled: bool) -> Self {
        self.suppress_ghost_click = enabled;
        self
    }

    pub fn suppress_context_menu(mut self, enabled: bool) -> Self {
        self.suppress_context_menu = enabled;
        self
    }
}
