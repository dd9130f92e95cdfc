//! Request and response bodies of the HTTP interface.
//!
//! These are views over the domain model that leave out anything a caller
//! should not see, e.g. other citizens' contact addresses.

use serde::{Deserialize, Serialize};

use crate::model::{Citizen, CitizenToken, Contender, Idea};

mod session;

pub use session::{Session, CITIZEN_TOKEN_COOKIE};

/// A request to register a new citizen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub contact: String,
}

/// A citizen's own details, as returned to that citizen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenDescription {
    pub token: CitizenToken,
    pub name: String,
    pub contact: String,
}

impl From<Citizen> for CitizenDescription {
    fn from(citizen: Citizen) -> Self {
        Self {
            token: citizen.token,
            name: citizen.name,
            contact: citizen.contact,
        }
    }
}

/// Public view of a contender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContenderDescription {
    pub token: CitizenToken,
    pub name: String,
    /// Empty until a manifesto is posted.
    pub ideas: Vec<Idea>,
    /// Sum of the mean rating of each rated idea, if any idea is rated.
    pub final_rating: Option<f64>,
}

impl ContenderDescription {
    pub fn new(contender: Contender, final_rating: Option<f64>) -> Self {
        Self {
            token: contender.citizen.token,
            name: contender.citizen.name,
            ideas: contender
                .manifesto
                .map(Vec::from)
                .unwrap_or_default(),
            final_rating,
        }
    }
}

/// A request to rate an idea. The value is validated by the election so an
/// out-of-range rating is reported as such rather than as a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRequest {
    pub idea: Idea,
    pub rating: i64,
}

/// Overview of the whole election.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub name: String,
    pub contenders: usize,
    pub leader: Option<ContenderDescription>,
}
