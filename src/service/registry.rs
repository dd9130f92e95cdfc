use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::{Error, Result};
use crate::model::{Citizen, CitizenToken};

/// Issues citizen tokens and resolves them back to citizens.
///
/// One registry is constructed by the host and handed to the election; there
/// is no global instance.
#[derive(Debug, Default)]
pub struct CitizenRegistry {
    citizens: HashMap<CitizenToken, Citizen>,
    /// (name, contact) pairs already registered.
    identities: HashSet<(String, String)>,
}

impl CitizenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a citizen and return their freshly minted token.
    /// Each (name, contact) pair may only register once.
    pub fn register(&mut self, name: &str, contact: &str) -> Result<CitizenToken> {
        let identity = (name.to_string(), contact.to_string());
        if self.identities.contains(&identity) {
            return Err(Error::DuplicateRegistration {
                name: identity.0,
                contact: identity.1,
            });
        }

        let mut token = CitizenToken::random();
        while self.citizens.contains_key(&token) {
            token = CitizenToken::random();
        }

        self.citizens.insert(token, Citizen::new(token, name, contact));
        self.identities.insert(identity);
        debug!("Registered citizen {token}");
        Ok(token)
    }

    pub fn get(&self, token: &CitizenToken) -> Option<&Citizen> {
        self.citizens.get(token)
    }

    pub fn len(&self) -> usize {
        self.citizens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citizens.is_empty()
    }
}
