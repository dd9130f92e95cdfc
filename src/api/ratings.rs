use rocket::{serde::json::Json, Route, State};

use crate::error::{Error, Result};
use crate::model::{
    api::{RatingRequest, Session},
    Idea, Rating,
};
use crate::service::Election;

pub fn routes() -> Vec<Route> {
    routes![rate, my_rating, delete_rating]
}

#[put("/ideas/rating", data = "<request>", format = "json")]
pub fn rate(
    session: Session,
    request: Json<RatingRequest>,
    election: &State<Election>,
) -> Result<()> {
    let RatingRequest { idea, rating } = request.into_inner();
    let rating = Rating::new(rating)?;
    election.rate_idea(session.token(), &idea, rating)
}

#[get("/ideas/rating?<idea>")]
pub fn my_rating(
    session: Session,
    idea: String,
    election: &State<Election>,
) -> Result<Json<Rating>> {
    let idea = Idea::from(idea);
    election
        .my_rating_for(session.token(), &idea)
        .map(Json)
        .ok_or_else(|| Error::not_found(format!("Rating of idea '{idea}'")))
}

#[delete("/ideas/rating?<idea>")]
pub fn delete_rating(session: Session, idea: String, election: &State<Election>) {
    election.delete_rating_for_idea(session.token(), &Idea::from(idea));
}
