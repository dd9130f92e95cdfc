use log::debug;
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use crate::error::Error;
use crate::logging::RequestTrace;
use crate::model::{Citizen, CitizenToken};
use crate::service::Election;

/// Name of the private cookie carrying the citizen's token.
pub const CITIZEN_TOKEN_COOKIE: &str = "citizen_token";

/// The registered citizen making a request.
#[derive(Debug, Clone)]
pub struct Session {
    pub citizen: Citizen,
}

impl Session {
    pub fn token(&self) -> &CitizenToken {
        &self.citizen.token
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Error;

    /// Resolve the token cookie to a registered citizen.
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match resolve(req) {
            Ok(citizen) => Outcome::Success(Session { citizen }),
            Err(err) => {
                debug!("{} has no valid session: {err}", RequestTrace::of(req).id);
                Outcome::Failure((Status::Unauthorized, err))
            }
        }
    }
}

fn resolve(req: &Request<'_>) -> Result<Citizen, Error> {
    let cookie = req
        .cookies()
        .get_private(CITIZEN_TOKEN_COOKIE)
        .ok_or_else(|| Error::Unauthorized("no citizen token".to_string()))?;
    let token = cookie
        .value()
        .parse::<CitizenToken>()
        .map_err(|e| Error::Unauthorized(e.to_string()))?;

    // The election is always managed once the rocket has ignited.
    req.rocket()
        .state::<Election>()
        .and_then(|election| election.registered_citizen(&token))
        .ok_or(Error::NotRegistered)
}
