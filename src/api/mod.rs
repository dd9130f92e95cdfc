use rocket::Route;

use crate::model::{api::ContenderDescription, Contender};
use crate::service::Election;

mod citizens;
mod contenders;
mod election;
mod ratings;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(citizens::routes());
    routes.extend(contenders::routes());
    routes.extend(ratings::routes());
    routes.extend(election::routes());
    routes
}

/// Public view of a contender, including their current final rating.
fn describe(election: &Election, contender: Contender) -> ContenderDescription {
    let final_rating = election.final_rating_for(&contender);
    ContenderDescription::new(contender, final_rating)
}

/// Shared steps for API tests.
#[cfg(test)]
pub(crate) mod helpers {
    use rocket::{
        http::{ContentType, Cookie},
        local::asynchronous::{Client, LocalRequest, LocalResponse},
        serde::json::serde_json::{self, json},
    };
    use serde::de::DeserializeOwned;

    use crate::model::{
        api::{CitizenDescription, Registration, CITIZEN_TOKEN_COOKIE},
        CitizenToken, Idea,
    };

    /// Register a citizen and return their token.
    pub async fn register(client: &Client, registration: Registration) -> CitizenToken {
        let response = client
            .post(uri!(crate::api::citizens::register))
            .header(ContentType::JSON)
            .body(json!(registration).to_string())
            .dispatch()
            .await;
        body::<CitizenDescription>(response).await.token
    }

    /// Register a citizen, nominate them and post a manifesto of `ideas`.
    pub async fn contender(
        client: &Client,
        registration: Registration,
        ideas: &[Idea],
    ) -> CitizenToken {
        let token = register(client, registration).await;
        as_citizen(client.post(uri!(crate::api::contenders::nominate)), &token)
            .dispatch()
            .await;
        as_citizen(
            client.post(uri!(crate::api::contenders::post_manifesto)),
            &token,
        )
        .header(ContentType::JSON)
        .body(json!(ideas).to_string())
        .dispatch()
        .await;
        token
    }

    /// Make the request on behalf of the citizen holding `token`.
    pub fn as_citizen<'c>(request: LocalRequest<'c>, token: &CitizenToken) -> LocalRequest<'c> {
        request.private_cookie(Cookie::new(CITIZEN_TOKEN_COOKIE, token.to_string()))
    }

    pub async fn body<T: DeserializeOwned>(response: LocalResponse<'_>) -> T {
        let raw_response = response.into_string().await.unwrap();
        serde_json::from_str(&raw_response).unwrap()
    }
}
