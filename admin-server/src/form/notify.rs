//! Warning delivery for the cycle editor.
//!
//! The browser console shows validation warnings as toast notifications.
//! The editor only knows the `Notifier` seam; the web layer buffers the
//! messages and ships them back in the response.

/// Sink for user-facing warnings raised while editing a cycle.
pub trait Notifier {
    /// Deliver one warning message.
    fn warn(&mut self, message: &str);
}

/// Buffers warnings so a request handler can return them as toasts.
#[derive(Debug, Default)]
pub struct ToastBuffer {
    toasts: Vec<String>,
}

impl ToastBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered warnings, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.toasts)
    }

    /// Returns true if no warnings are buffered.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastBuffer {
    fn warn(&mut self, message: &str) {
        self.toasts.push(message.to_string());
    }
}
