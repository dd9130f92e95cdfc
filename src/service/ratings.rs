use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::model::{CitizenToken, Idea, RatedIdea, Rating};

/// Owns the rating ledger and the running final rating of every contender.
///
/// A contender's final rating is the sum, over each of their published ideas
/// that currently has at least one rating, of that idea's mean rating. It is
/// recomputed eagerly whenever the ledger changes, so lookups are O(1).
#[derive(Debug, Default)]
pub struct RatingAggregator {
    ledger: HashMap<Idea, RatedIdea>,
    /// Ideas each contender has published, in publication order.
    published: HashMap<CitizenToken, Vec<Idea>>,
    /// Contenders in the order they first published an idea. Breaks ties.
    publishers: Vec<CitizenToken>,
    final_ratings: HashMap<CitizenToken, f64>,
}

impl RatingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `idea` for rating on behalf of `contender`.
    ///
    /// Publishing an idea again starts its ledger entry afresh, dropping any
    /// ratings it had; if it was published by someone else it now belongs to
    /// `contender`.
    pub fn publish(&mut self, idea: Idea, contender: CitizenToken) {
        let previous = self
            .ledger
            .insert(idea.clone(), RatedIdea::new(idea.clone(), contender));
        if let Some(previous) = previous {
            let previous_publisher = *previous.publisher();
            if previous_publisher != contender {
                if let Some(ideas) = self.published.get_mut(&previous_publisher) {
                    ideas.retain(|published| published != &idea);
                }
                self.recompute(&previous_publisher);
            }
        }

        if !self.published.contains_key(&contender) {
            self.publishers.push(contender);
        }
        let ideas = self.published.entry(contender).or_default();
        if !ideas.contains(&idea) {
            ideas.push(idea);
        }
        self.recompute(&contender);
    }

    /// Record `rater`'s rating of `idea`, replacing any earlier rating of theirs.
    /// Returns the contender who published the idea.
    pub fn rate(
        &mut self,
        rater: CitizenToken,
        idea: &Idea,
        rating: Rating,
    ) -> Result<CitizenToken> {
        let rated = self
            .ledger
            .get_mut(idea)
            .ok_or_else(|| Error::IdeaNotPublished(idea.clone()))?;
        let publisher = *rated.publisher();
        if publisher == rater {
            return Err(Error::SelfRatingForbidden);
        }

        rated.add_rating(rater, rating);
        self.recompute(&publisher);
        Ok(publisher)
    }

    /// Remove `rater`'s rating of `idea`, if there is one.
    pub fn delete_rating(&mut self, rater: &CitizenToken, idea: &Idea) -> Option<Rating> {
        let rated = self.ledger.get_mut(idea)?;
        let removed = rated.delete_rating(rater)?;
        let publisher = *rated.publisher();
        self.recompute(&publisher);
        Some(removed)
    }

    pub fn rating_of(&self, rater: &CitizenToken, idea: &Idea) -> Option<Rating> {
        self.ledger.get(idea)?.rating_by(rater)
    }

    pub fn publisher_of(&self, idea: &Idea) -> Option<CitizenToken> {
        self.ledger.get(idea).map(|rated| *rated.publisher())
    }

    /// The contender's final rating, or `None` if none of their ideas is rated.
    pub fn final_rating_of(&self, contender: &CitizenToken) -> Option<f64> {
        self.final_ratings.get(contender).copied()
    }

    /// The contender with the highest final rating. On a tie the contender
    /// who published first wins.
    pub fn leader(&self) -> Option<CitizenToken> {
        let mut leader: Option<(CitizenToken, f64)> = None;
        for contender in &self.publishers {
            if let Some(&rating) = self.final_ratings.get(contender) {
                match leader {
                    Some((_, best)) if best >= rating => {}
                    _ => leader = Some((*contender, rating)),
                }
            }
        }
        leader.map(|(contender, _)| contender)
    }

    fn recompute(&mut self, contender: &CitizenToken) {
        let averages = self
            .published
            .get(contender)
            .into_iter()
            .flatten()
            .filter_map(|idea| self.ledger.get(idea))
            .filter(|rated| rated.publisher() == contender)
            .filter_map(RatedIdea::average_rating)
            .collect::<Vec<_>>();

        if averages.is_empty() {
            self.final_ratings.remove(contender);
        } else {
            let total = averages.iter().sum::<f64>();
            debug!("Final rating of contender {contender} is now {total}");
            self.final_ratings.insert(*contender, total);
        }
    }
}
