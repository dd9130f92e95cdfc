use rocket::{serde::json::Json, Route, State};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::api::{ContenderDescription, ElectionSummary};
use crate::service::Election;

use super::describe;

pub fn routes() -> Vec<Route> {
    routes![summary, leader]
}

#[get("/election")]
pub fn summary(config: &State<Config>, election: &State<Election>) -> Json<ElectionSummary> {
    let leader = election
        .contender_with_highest_final_rating()
        .map(|contender| describe(election, contender));
    Json(ElectionSummary {
        name: config.election_name().to_string(),
        contenders: election.contenders().len(),
        leader,
    })
}

#[get("/election/leader")]
pub fn leader(election: &State<Election>) -> Result<Json<ContenderDescription>> {
    let leader = election
        .contender_with_highest_final_rating()
        .ok_or_else(|| Error::not_found("Leading contender"))?;
    Ok(Json(describe(election, leader)))
}
