//! Modal dismissal

use std::fmt;

/// Key name that closes the modal
pub const ESCAPE_KEY: &str = "Escape";

/// User input that may dismiss the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// The "Close" button
    CloseButton,
    /// A click on the overlay behind the modal
    Backdrop,
    /// A key press, by key name (`"Escape"`, `"Enter"`, ...)
    Key(String),
}

impl ModalEvent {
    pub fn key(key: impl Into<String>) -> Self {
        ModalEvent::Key(key.into())
    }

    /// Whether this event asks for the modal to close
    pub fn closes_modal(&self) -> bool {
        match self {
            ModalEvent::CloseButton | ModalEvent::Backdrop => true,
            ModalEvent::Key(key) => key == ESCAPE_KEY,
        }
    }
}

/// The caller's "close the modal" callback
pub struct ModalHandle {
    on_close: Box<dyn Fn() + Send + Sync>,
}

impl ModalHandle {
    pub fn new(on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_close: Box::new(on_close),
        }
    }

    /// Call the close callback if `event` dismisses the modal
    ///
    /// Returns true when the callback ran.
    pub fn handle(&self, event: &ModalEvent) -> bool {
        if !event.closes_modal() {
            return false;
        }

        tracing::debug!(event = ?event, "closing order modal");
        (self.on_close)();
        true
    }
}

impl fmt::Debug for ModalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalHandle").finish_non_exhaustive()
    }
}
