pub mod api;

mod citizen;
mod contender;
mod idea;
mod manifesto;
mod rated_idea;
mod rating;

pub use citizen::{Citizen, CitizenToken, TokenParseError, TOKEN_LENGTH};
pub use contender::Contender;
pub use idea::Idea;
pub use manifesto::{Manifesto, MAX_IDEAS, MIN_IDEAS};
pub use rated_idea::RatedIdea;
pub use rating::{Rating, MAX_RATING, MIN_RATING};
