use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::error::{Error, Result};
use crate::model::{Citizen, CitizenToken, Contender, Idea, Manifesto};

/// Tracks nominations, the manifesto of each contender, and who follows whom.
#[derive(Debug, Default)]
pub struct ContenderTracker {
    contenders: HashMap<CitizenToken, Contender>,
    /// Followers of each contender, in the order they started following.
    followers: HashMap<CitizenToken, Vec<Citizen>>,
}

impl ContenderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nominate a citizen as a contender. Nominating an existing contender
    /// changes nothing. Returns whether the citizen was newly nominated.
    pub fn nominate(&mut self, citizen: Citizen) -> bool {
        if self.contenders.contains_key(&citizen.token) {
            return false;
        }
        let token = citizen.token;
        self.followers.insert(token, Vec::new());
        self.contenders.insert(token, Contender::new(citizen));
        debug!("Nominated contender {token}");
        true
    }

    pub fn get(&self, token: &CitizenToken) -> Option<&Contender> {
        self.contenders.get(token)
    }

    /// All contenders, in no particular order.
    pub fn contenders(&self) -> impl Iterator<Item = &Contender> {
        self.contenders.values()
    }

    pub fn is_contender(&self, token: &CitizenToken) -> bool {
        self.contenders.contains_key(token)
    }

    /// Attach a manifesto to a contender. This can only happen once.
    pub fn post_manifesto(
        &mut self,
        token: &CitizenToken,
        manifesto: Manifesto,
    ) -> Result<&Contender> {
        let contender = self.contenders.get_mut(token).ok_or(Error::NotAContender)?;
        if contender.manifesto.is_some() {
            return Err(Error::ManifestoAlreadyPosted);
        }
        contender.manifesto = Some(manifesto);
        Ok(&*contender)
    }

    /// Add an idea to a contender's existing manifesto. Returns whether the
    /// idea was new to the manifesto.
    pub fn add_idea(&mut self, token: &CitizenToken, idea: Idea) -> Result<bool> {
        let contender = self.contenders.get_mut(token).ok_or(Error::NotAContender)?;
        contender
            .manifesto
            .as_mut()
            .ok_or(Error::NoManifestoYet)?
            .add(idea)
    }

    /// Make `citizen` a follower of `contender`. Following twice has no further
    /// effect. Returns whether the citizen is a new follower.
    pub fn start_following(&mut self, citizen: Citizen, contender: &CitizenToken) -> Result<bool> {
        let followers = self.followers.get_mut(contender).ok_or(Error::NotAContender)?;
        if followers.iter().any(|follower| follower.token == citizen.token) {
            return Ok(false);
        }
        followers.push(citizen);
        Ok(true)
    }

    pub fn is_follower(&self, citizen: &CitizenToken, contender: &CitizenToken) -> bool {
        self.followers
            .get(contender)
            .map(|followers| followers.iter().any(|follower| &follower.token == citizen))
            .unwrap_or(false)
    }

    /// Contact addresses of everyone following `contender`.
    pub fn follower_contacts(&self, contender: &CitizenToken) -> BTreeSet<String> {
        self.followers
            .get(contender)
            .into_iter()
            .flatten()
            .map(|follower| follower.contact.clone())
            .collect()
    }
}
