use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A policy proposal. Two ideas are the same idea iff their descriptions match.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Idea {
    description: String,
}

impl Idea {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for Idea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<&str> for Idea {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for Idea {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}
