use serde::{Deserialize, Serialize};

use super::{Citizen, CitizenToken, Manifesto};

/// A citizen's candidacy. A contender's identity is its citizen's token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contender {
    pub citizen: Citizen,
    /// Absent until the contender posts one.
    pub manifesto: Option<Manifesto>,
}

impl Contender {
    /// A freshly nominated contender, without a manifesto.
    pub fn new(citizen: Citizen) -> Self {
        Self {
            citizen,
            manifesto: None,
        }
    }

    pub fn token(&self) -> &CitizenToken {
        &self.citizen.token
    }

    pub fn name(&self) -> &str {
        &self.citizen.name
    }
}
