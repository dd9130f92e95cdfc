use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Citizen, CitizenToken, Contender, Idea, Manifesto, Rating};

use super::{CitizenRegistry, ContenderTracker, Notifier, RatingAggregator};

/// Rating at or above which the rater starts following the idea's publisher.
pub const FOLLOWER_THRESHOLD: u8 = 6;

/// The only entry point into an election.
///
/// Resolves identities, delegates each change to the component that owns the
/// affected state, and then applies any knock-on effects: a high rating makes
/// the rater a follower, and a new idea notifies the contender's followers.
///
/// Every component sits behind its own lock. When more than one is needed
/// they are taken in the order registry, contenders, ratings.
pub struct Election {
    registry: RwLock<CitizenRegistry>,
    contenders: RwLock<ContenderTracker>,
    ratings: RwLock<RatingAggregator>,
    notifier: Box<dyn Notifier>,
}

impl Election {
    pub fn new(
        registry: CitizenRegistry,
        contenders: ContenderTracker,
        ratings: RatingAggregator,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            registry: RwLock::new(registry),
            contenders: RwLock::new(contenders),
            ratings: RwLock::new(ratings),
            notifier: Box::new(notifier),
        }
    }

    /// A new, empty election.
    pub fn with_notifier(notifier: impl Notifier + 'static) -> Self {
        Self::new(
            CitizenRegistry::new(),
            ContenderTracker::new(),
            RatingAggregator::new(),
            notifier,
        )
    }

    pub fn register(&self, name: &str, contact: &str) -> Result<CitizenToken> {
        let token = write(&self.registry).register(name, contact)?;
        info!("Citizen {token} registered");
        Ok(token)
    }

    pub fn registered_citizen(&self, token: &CitizenToken) -> Option<Citizen> {
        read(&self.registry).get(token).cloned()
    }

    pub fn is_contender(&self, citizen: &Citizen) -> bool {
        read(&self.contenders).is_contender(&citizen.token)
    }

    /// Nominate the citizen holding `token`. Nominating twice changes nothing.
    pub fn nominate_myself(&self, token: &CitizenToken) -> Result<()> {
        let citizen = self.registered_citizen(token).ok_or(Error::NotRegistered)?;
        if write(&self.contenders).nominate(citizen) {
            info!("Citizen {token} nominated themselves");
        }
        Ok(())
    }

    pub fn my_contender_details(&self, token: &CitizenToken) -> Option<Contender> {
        read(&self.contenders).get(token).cloned()
    }

    /// Every contender, in no particular order.
    pub fn contenders(&self) -> Vec<Contender> {
        read(&self.contenders).contenders().cloned().collect()
    }

    /// Post a contender's manifesto and open each of its ideas for rating.
    pub fn post_my_manifesto(&self, token: &CitizenToken, manifesto: Manifesto) -> Result<()> {
        let mut contenders = write(&self.contenders);
        let contender = contenders.post_manifesto(token, manifesto)?;
        let ideas = contender
            .manifesto
            .as_ref()
            .map(|manifesto| manifesto.ideas().to_vec())
            .unwrap_or_default();

        let mut ratings = write(&self.ratings);
        for idea in ideas.iter().cloned() {
            ratings.publish(idea, *token);
        }
        info!("Contender {token} posted a manifesto with {} ideas", ideas.len());
        Ok(())
    }

    /// Add an idea to a contender's manifesto, open it for rating and let the
    /// contender's followers know. An idea already in the manifesto is
    /// absorbed without publishing or notifying again.
    pub fn add_idea_to_my_manifesto(&self, token: &CitizenToken, idea: Idea) -> Result<()> {
        let (contender, recipients) = {
            let mut contenders = write(&self.contenders);
            if !contenders.add_idea(token, idea.clone())? {
                debug!("Contender {token} already has idea '{idea}'");
                return Ok(());
            }
            write(&self.ratings).publish(idea.clone(), *token);

            let contender = contenders.get(token).cloned().ok_or(Error::NotAContender)?;
            let recipients = contenders.follower_contacts(token);
            (contender, recipients)
        };
        info!("Contender {token} added idea '{idea}'");

        if !recipients.is_empty() {
            let message = format!(
                "{} added new idea to manifesto: {}",
                contender.name(),
                idea.description()
            );
            debug!("Notifying {} followers of contender {token}", recipients.len());
            self.notifier.notify(&recipients, &message);
        }
        Ok(())
    }

    /// Rate an idea. A rating of at least `FOLLOWER_THRESHOLD` makes the rater
    /// a follower of the idea's publisher.
    pub fn rate_idea(&self, rater: &CitizenToken, idea: &Idea, rating: Rating) -> Result<()> {
        let citizen = self.registered_citizen(rater).ok_or(Error::NotRegistered)?;
        let publisher = write(&self.ratings).rate(*rater, idea, rating)?;
        debug!("Citizen {rater} rated '{idea}' {}", rating.value());

        if rating.value() >= FOLLOWER_THRESHOLD
            && write(&self.contenders).start_following(citizen, &publisher)?
        {
            info!("Citizen {rater} now follows contender {publisher}");
        }
        Ok(())
    }

    pub fn my_rating_for(&self, token: &CitizenToken, idea: &Idea) -> Option<Rating> {
        read(&self.ratings).rating_of(token, idea)
    }

    pub fn i_follow(&self, token: &CitizenToken, contender: &Contender) -> bool {
        read(&self.contenders).is_follower(token, contender.token())
    }

    /// Remove a rating. Removing a rating that does not exist is not an error.
    pub fn delete_rating_for_idea(&self, token: &CitizenToken, idea: &Idea) {
        if write(&self.ratings).delete_rating(token, idea).is_some() {
            debug!("Citizen {token} deleted their rating of '{idea}'");
        }
    }

    pub fn final_rating_for(&self, contender: &Contender) -> Option<f64> {
        read(&self.ratings).final_rating_of(contender.token())
    }

    pub fn contender_with_highest_final_rating(&self) -> Option<Contender> {
        let contenders = read(&self.contenders);
        let leader = read(&self.ratings).leader()?;
        contenders.get(&leader).cloned()
    }
}

/// Lock for reading, carrying on past a panic in another holder.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Lock for writing, carrying on past a panic in another holder.
fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
