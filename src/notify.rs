//! User-facing warnings raised while resolving.
use std::sync::Mutex;

/// Receives fire-and-forget warnings meant for the user.
pub trait Notifier {
    fn warn(&self, message: &str);
}

/// Emits warnings as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "exname::notify", "{message}");
    }
}

/// Keeps every warning in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}
