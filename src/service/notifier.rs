use std::collections::BTreeSet;
use std::sync::Arc;

use log::info;

/// Something that can deliver a message to a set of contact addresses.
///
/// Delivery is fire-and-forget: the election neither waits for nor inspects
/// the outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, recipients: &BTreeSet<String>, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, recipients: &BTreeSet<String>, message: &str) {
        (**self).notify(recipients, message)
    }
}

/// Notifier that writes every message to the log instead of delivering it.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    sender: String,
}

impl LogNotifier {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, recipients: &BTreeSet<String>, message: &str) {
        for recipient in recipients {
            info!("Notification from {} to {recipient}: {message}", self.sender);
        }
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;

#[cfg(test)]
mod recording {
    use std::sync::Mutex;

    use super::*;

    /// Notifier that remembers every message it was asked to deliver.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
        calls: Mutex<usize>,
    }

    impl RecordingNotifier {
        /// Messages delivered to `recipient`, oldest first.
        pub fn messages_for(&self, recipient: &str) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .filter(|(to, _)| to == recipient)
                .map(|(_, message)| message.clone())
                .collect()
        }

        /// How many times `notify` was called.
        pub fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, recipients: &BTreeSet<String>, message: &str) {
            *self.calls.lock().unwrap() += 1;
            let mut sent = self.sent.lock().unwrap();
            for recipient in recipients {
                sent.push((recipient.clone(), message.to_string()));
            }
        }
    }
}
