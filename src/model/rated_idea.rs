use std::collections::HashMap;

use super::{CitizenToken, Idea, Rating};

/// Ledger entry recording one published idea, who published it, and every
/// rating it has received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedIdea {
    idea: Idea,
    publisher: CitizenToken,
    ratings: HashMap<CitizenToken, Rating>,
}

impl RatedIdea {
    /// A newly published idea with no ratings.
    pub fn new(idea: Idea, publisher: CitizenToken) -> Self {
        Self {
            idea,
            publisher,
            ratings: HashMap::new(),
        }
    }

    pub fn idea(&self) -> &Idea {
        &self.idea
    }

    pub fn publisher(&self) -> &CitizenToken {
        &self.publisher
    }

    pub fn ratings(&self) -> &HashMap<CitizenToken, Rating> {
        &self.ratings
    }

    pub fn rating_by(&self, rater: &CitizenToken) -> Option<Rating> {
        self.ratings.get(rater).copied()
    }

    /// Record a rating, replacing and returning any earlier one by the same rater.
    pub fn add_rating(&mut self, rater: CitizenToken, rating: Rating) -> Option<Rating> {
        self.ratings.insert(rater, rating)
    }

    pub fn delete_rating(&mut self, rater: &CitizenToken) -> Option<Rating> {
        self.ratings.remove(rater)
    }

    /// Mean of all current ratings, or `None` if the idea is unrated.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total = self
            .ratings
            .values()
            .map(|rating| f64::from(rating.value()))
            .sum::<f64>();
        Some(total / self.ratings.len() as f64)
    }
}
