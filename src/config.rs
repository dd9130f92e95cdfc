use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::service::{Election, LogNotifier};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_election_name")]
    election_name: String,
    #[serde(default = "default_notification_sender")]
    notification_sender: String,
}

impl Config {
    /// Human-readable name of the election.
    pub fn election_name(&self) -> &str {
        &self.election_name
    }

    /// Address that outgoing notifications are sent from.
    pub fn notification_sender(&self) -> &str {
        &self.notification_sender
    }
}

fn default_election_name() -> String {
    "Manifesto Election".to_string()
}

fn default_notification_sender() -> String {
    "noreply@election.local".to_string()
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        info!("Loaded config for election '{}'", config.election_name());

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that constructs the election, with every component and the
/// notifier injected, and places it into managed state. Must be attached
/// after [`ConfigFairing`].
pub struct ElectionFairing;

#[rocket::async_trait]
impl Fairing for ElectionFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let sender = match rocket.state::<Config>() {
            Some(config) => config.notification_sender().to_string(),
            None => {
                error!("Election cannot start without its config");
                return Err(rocket);
            }
        };
        let election = Election::with_notifier(LogNotifier::new(sender));
        info!("Election open for registrations");

        // Manage the state.
        rocket = rocket.manage(election);
        Ok(rocket)
    }
}
