use log::warn;
use rocket::{http::Status, response::Responder};
use thiserror::Error;

use crate::model::Idea;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when interacting with an election.
///
/// None of these are recoverable internally; they are handed back verbatim to
/// whoever called the election. Absence of a citizen, contender or rating is
/// never an error and is modelled with `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Citizen '{name}' <{contact}> is already registered")]
    DuplicateRegistration { name: String, contact: String },
    #[error("Citizen is not registered")]
    NotRegistered,
    #[error("Manifesto must have between 1 and 3 ideas, got {0}")]
    InvalidManifestoSize(usize),
    #[error("Manifesto cannot have more than 3 ideas")]
    ManifestoFull,
    #[error("Manifesto cannot have fewer than 1 idea")]
    ManifestoEmpty,
    #[error("Citizen is not a nominated contender")]
    NotAContender,
    #[error("Contender can only post a manifesto once")]
    ManifestoAlreadyPosted,
    #[error("Contender has not posted a manifesto yet")]
    NoManifestoYet,
    #[error("Idea '{0}' has not been published")]
    IdeaNotPublished(Idea),
    #[error("Contenders cannot rate their own ideas")]
    SelfRatingForbidden,
    #[error("Rating must be between 0 and 10, got {0}")]
    InvalidRatingValue(i64),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// The HTTP status this error is reported with.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidManifestoSize(_)
            | Self::ManifestoFull
            | Self::ManifestoEmpty
            | Self::NoManifestoYet
            | Self::InvalidRatingValue(_) => Status::BadRequest,
            Self::DuplicateRegistration { .. } | Self::ManifestoAlreadyPosted => Status::Conflict,
            Self::NotAContender | Self::SelfRatingForbidden => Status::Forbidden,
            Self::IdeaNotPublished(_) | Self::NotFound(_) => Status::NotFound,
            Self::NotRegistered | Self::Unauthorized(_) => Status::Unauthorized,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        warn!("Rejected request ({status}): {self}");
        Err(status)
    }
}
