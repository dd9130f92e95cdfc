//! The election domain services.
//!
//! Each component owns its own state and only exchanges tokens and value
//! types with the others. [`Election`] is the only one callers are expected
//! to use directly.

mod contenders;
mod election;
mod notifier;
mod ratings;
mod registry;

pub use contenders::ContenderTracker;
pub use election::{Election, FOLLOWER_THRESHOLD};
pub use notifier::{LogNotifier, Notifier};
pub use ratings::RatingAggregator;
pub use registry::CitizenRegistry;

#[cfg(test)]
pub use notifier::RecordingNotifier;
