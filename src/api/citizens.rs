use rocket::{
    http::{Cookie, CookieJar},
    serde::json::Json,
    Route, State,
};

use crate::error::{Error, Result};
use crate::model::api::{CitizenDescription, Registration, Session, CITIZEN_TOKEN_COOKIE};
use crate::service::Election;

pub fn routes() -> Vec<Route> {
    routes![register, me]
}

#[post("/citizens", data = "<registration>", format = "json")]
pub fn register(
    registration: Json<Registration>,
    cookies: &CookieJar<'_>,
    election: &State<Election>,
) -> Result<Json<CitizenDescription>> {
    let token = election.register(&registration.name, &registration.contact)?;
    let citizen = election
        .registered_citizen(&token)
        .ok_or_else(|| Error::not_found(format!("Citizen '{token}'")))?;

    cookies.add_private(Cookie::new(CITIZEN_TOKEN_COOKIE, token.to_string()));
    Ok(Json(citizen.into()))
}

#[get("/citizens/me")]
pub fn me(session: Session) -> Json<CitizenDescription> {
    Json(session.citizen.into())
}
