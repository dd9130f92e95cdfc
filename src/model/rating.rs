use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MIN_RATING: u8 = 0;
pub const MAX_RATING: u8 = 10;

/// A citizen's score for a single idea, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(MIN_RATING) || value > i64::from(MAX_RATING) {
            return Err(Error::InvalidRatingValue(value));
        }
        // Range checked above.
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
