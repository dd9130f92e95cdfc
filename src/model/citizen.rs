use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use data_encoding::{DecodeError, HEXLOWER, HEXLOWER_PERMISSIVE};
use rand::RngCore;
use rocket::{
    http::{
        impl_from_uri_param_identity,
        uri::fmt::{Formatter, Path, UriDisplay},
    },
    request::FromParam,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of random bytes in a citizen token.
pub const TOKEN_LENGTH: usize = 16;

/// Opaque handle identifying a registered citizen.
///
/// Tokens are random and are rendered as lowercase hex, both on the wire and
/// in logs.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CitizenToken([u8; TOKEN_LENGTH]);

impl CitizenToken {
    /// Generate a random token.
    pub fn random() -> Self {
        let mut bytes = [0; TOKEN_LENGTH];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl Display for CitizenToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", HEXLOWER.encode(&self.0))
    }
}

#[derive(Debug, Error)]
pub enum TokenParseError {
    #[error("citizen token is not valid hex: {0}")]
    Encoding(#[from] DecodeError),
    #[error("citizen token must be 16 bytes, got {0}")]
    Length(usize),
}

impl FromStr for CitizenToken {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = HEXLOWER_PERMISSIVE.decode(s.as_bytes())?;
        let bytes: [u8; TOKEN_LENGTH] = bytes
            .try_into()
            .map_err(|bytes: Vec<u8>| TokenParseError::Length(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for CitizenToken {
    type Error = TokenParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CitizenToken> for String {
    fn from(token: CitizenToken) -> Self {
        token.to_string()
    }
}

impl<'a> FromParam<'a> for CitizenToken {
    type Error = TokenParseError;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}

impl UriDisplay<Path> for CitizenToken {
    fn fmt(&self, formatter: &mut Formatter<'_, Path>) -> std::fmt::Result {
        formatter.write_value(self.to_string())
    }
}

impl_from_uri_param_identity!([Path] CitizenToken);

/// A registered citizen. Never changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    pub token: CitizenToken,
    /// Display name.
    pub name: String,
    /// Address that notifications are delivered to.
    pub contact: String,
    pub registered_at: DateTime<Utc>,
}

impl Citizen {
    pub fn new(token: CitizenToken, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            token,
            name: name.into(),
            contact: contact.into(),
            registered_at: Utc::now(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let first = CitizenToken::random();
        let second = CitizenToken::random();
        assert_ne!(first, second);
    }

    #[test]
    fn token_string_form_parses_back() {
        let token = CitizenToken::random();
        let rendered = token.to_string();
        assert_eq!(TOKEN_LENGTH * 2, rendered.len());
        assert_eq!(token, rendered.parse().unwrap());
        assert_eq!(token, rendered.to_uppercase().parse().unwrap());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(
            "not hex at all".parse::<CitizenToken>(),
            Err(TokenParseError::Encoding(_))
        ));
        assert!(matches!(
            "abcd".parse::<CitizenToken>(),
            Err(TokenParseError::Length(2))
        ));
    }
}
