//! Page lifecycle helpers shared by the browser wiring.

use std::cell::Cell;

/// Whether the document's `load` event has already fired for a given
/// `document.readyState`. A module instantiated after that point must run its
/// load-gated work directly instead of waiting for the event.
#[inline]
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// One-shot start guard for a page subsystem on the UI thread.
#[derive(Debug, Default)]
pub struct StartOnce {
    started: Cell<bool>,
}

impl StartOnce {
    pub const fn new() -> Self {
        Self {
            started: Cell::new(false),
        }
    }

    /// `true` for the first caller only.
    pub fn claim(&self) -> bool {
        !self.started.replace(true)
    }

    pub fn is_started(&self) -> bool {
        self.started.get()
    }
}
