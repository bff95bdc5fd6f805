//! Global context-menu suppression.
//!
//! While a recogniser instance is active, right-click/long-press
//! context menus would fight the long-click gesture, so hosts usually
//! want the default menu suppressed for the instance's lifetime. This
//! is a separate, explicitly scoped resource acquisition: it shares no
//! state with the gesture session and is installed/removed purely by
//! guard lifetime.

use crate::options::ClickOptions;

/// Host hook for the global capture-phase context-menu handler.
///
/// `install` should register a handler that prevents the default menu
/// and stops its propagation; `remove` unregisters the same handler.
pub trait ContextMenuHost {
    fn install(&mut self);
    fn remove(&mut self);
}

/// RAII guard for the context-menu handler.
///
/// Installs on construction when enabled and removes on `Drop`, so
/// every exit path of the owning scope releases the handler.
pub struct ContextMenuSuppressor<H: ContextMenuHost> {
    host: H,
    installed: bool,
}

impl<H: ContextMenuHost> ContextMenuSuppressor<H> {
    /// Installs the host handler if `options.suppress_context_menu` is
    /// set; otherwise the guard is inert.
    pub fn new(mut host: H, options: &ClickOptions) -> Self {
        let installed = options.suppress_context_menu;
        if installed {
            host.install();
        }
        Self { host, installed }
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

impl<H: ContextMenuHost> Drop for ContextMenuSuppressor<H> {
    fn drop(&mut self) {
        if self.installed {
            self.host.remove();
            self.installed = false;
        }
    }
}
