#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;

pub use config::Config;

use config::{ConfigFairing, ElectionFairing};
use logging::LoggerFairing;

/// Build the election server: configuration, a fresh election, request
/// logging and every API route.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(ElectionFairing)
}

/// Build a server around a fresh election whose notifications are recorded
/// rather than logged.
#[cfg(test)]
pub(crate) fn rocket_for_notifier(
    notifier: std::sync::Arc<service::RecordingNotifier>,
) -> Rocket<Build> {
    rocket::build()
        .mount("/", api::routes())
        .attach(ConfigFairing)
        .manage(service::Election::with_notifier(notifier))
}
