use rocket::{serde::json::Json, Route, State};

use crate::error::{Error, Result};
use crate::model::{
    api::{ContenderDescription, Session},
    CitizenToken, Idea, Manifesto,
};
use crate::service::Election;

use super::describe;

pub fn routes() -> Vec<Route> {
    routes![
        nominate,
        my_details,
        contenders,
        post_manifesto,
        add_idea,
        following,
    ]
}

#[post("/contenders/me")]
pub fn nominate(
    session: Session,
    election: &State<Election>,
) -> Result<Json<ContenderDescription>> {
    election.nominate_myself(session.token())?;
    contender_details(session.token(), election)
}

#[get("/contenders/me")]
pub fn my_details(
    session: Session,
    election: &State<Election>,
) -> Result<Json<ContenderDescription>> {
    contender_details(session.token(), election)
}

#[get("/contenders")]
pub fn contenders(election: &State<Election>) -> Json<Vec<ContenderDescription>> {
    let contenders = election
        .contenders()
        .into_iter()
        .map(|contender| describe(election, contender))
        .collect();
    Json(contenders)
}

#[post("/contenders/me/manifesto", data = "<ideas>", format = "json")]
pub fn post_manifesto(
    session: Session,
    ideas: Json<Vec<Idea>>,
    election: &State<Election>,
) -> Result<Json<ContenderDescription>> {
    let manifesto = Manifesto::new(ideas.into_inner())?;
    election.post_my_manifesto(session.token(), manifesto)?;
    contender_details(session.token(), election)
}

#[post("/contenders/me/manifesto/ideas", data = "<idea>", format = "json")]
pub fn add_idea(
    session: Session,
    idea: Json<Idea>,
    election: &State<Election>,
) -> Result<Json<ContenderDescription>> {
    election.add_idea_to_my_manifesto(session.token(), idea.into_inner())?;
    contender_details(session.token(), election)
}

#[get("/contenders/<contender>/following")]
pub fn following(
    session: Session,
    contender: CitizenToken,
    election: &State<Election>,
) -> Result<Json<bool>> {
    let contender = election
        .my_contender_details(&contender)
        .ok_or_else(|| Error::not_found(format!("Contender '{contender}'")))?;
    Ok(Json(election.i_follow(session.token(), &contender)))
}

fn contender_details(
    token: &CitizenToken,
    election: &Election,
) -> Result<Json<ContenderDescription>> {
    let contender = election
        .my_contender_details(token)
        .ok_or_else(|| Error::not_found(format!("Contender '{token}'")))?;
    Ok(Json(describe(election, contender)))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::serde_json::json,
    };

    use crate::api::helpers::{as_citizen, body, contender, register};
    use crate::model::api::Registration;

    use super::*;

    #[backend_test]
    async fn citizen_can_nominate_themselves(client: Client) {
        let token = register(&client, Registration::example()).await;

        let response = as_citizen(client.get(uri!(my_details)), &token)
            .dispatch()
            .await;
        assert_eq!(Status::NotFound, response.status());

        let response = as_citizen(client.post(uri!(nominate)), &token)
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        let nominated = body::<ContenderDescription>(response).await;
        assert_eq!(token, nominated.token);
        assert_eq!(Registration::example().name, nominated.name);
        assert!(nominated.ideas.is_empty());
        assert_eq!(None, nominated.final_rating);

        // Nominating again is harmless.
        let response = as_citizen(client.post(uri!(nominate)), &token)
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }

    #[backend_test]
    async fn contender_can_post_a_manifesto_once(client: Client) {
        let ideas = [Idea::example1(), Idea::example2()];
        let token = contender(&client, Registration::example(), &ideas).await;

        let response = as_citizen(client.get(uri!(my_details)), &token)
            .dispatch()
            .await;
        assert_eq!(ideas.to_vec(), body::<ContenderDescription>(response).await.ideas);

        let response = as_citizen(client.post(uri!(post_manifesto)), &token)
            .header(ContentType::JSON)
            .body(json!([Idea::example3()]).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::Conflict, response.status());
    }

    #[backend_test]
    async fn manifesto_size_is_validated(client: Client) {
        let token = register(&client, Registration::example()).await;
        as_citizen(client.post(uri!(nominate)), &token)
            .dispatch()
            .await;

        let too_many = [
            Idea::example1(),
            Idea::example2(),
            Idea::example3(),
            Idea::example4(),
        ];
        let response = as_citizen(client.post(uri!(post_manifesto)), &token)
            .header(ContentType::JSON)
            .body(json!(too_many).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::BadRequest, response.status());
    }

    #[backend_test]
    async fn only_contenders_can_post_manifestos(client: Client) {
        let token = register(&client, Registration::example()).await;

        let response = as_citizen(client.post(uri!(post_manifesto)), &token)
            .header(ContentType::JSON)
            .body(json!([Idea::example1()]).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::Forbidden, response.status());
    }

    #[backend_test]
    async fn contender_can_add_ideas_up_to_the_limit(client: Client) {
        let token = contender(
            &client,
            Registration::example(),
            &[Idea::example1(), Idea::example2()],
        )
        .await;

        let response = as_citizen(client.post(uri!(add_idea)), &token)
            .header(ContentType::JSON)
            .body(json!(Idea::example3()).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!(
            vec![Idea::example1(), Idea::example2(), Idea::example3()],
            body::<ContenderDescription>(response).await.ideas
        );

        let response = as_citizen(client.post(uri!(add_idea)), &token)
            .header(ContentType::JSON)
            .body(json!(Idea::example4()).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::BadRequest, response.status());
    }

    #[backend_test]
    async fn anyone_can_list_the_contenders(client: Client) {
        let first = contender(&client, Registration::example(), &[Idea::example1()]).await;
        let second = contender(&client, Registration::example2(), &[Idea::example2()]).await;
        register(&client, Registration::example3()).await;

        let response = client.get(uri!(contenders)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let mut listed = body::<Vec<ContenderDescription>>(response)
            .await
            .into_iter()
            .map(|contender| contender.token.to_string())
            .collect::<Vec<_>>();
        listed.sort();
        let mut expected = vec![first.to_string(), second.to_string()];
        expected.sort();
        assert_eq!(expected, listed);
    }

    #[backend_test]
    async fn following_is_reported_per_contender(client: Client) {
        let followed = contender(&client, Registration::example(), &[Idea::example1()]).await;
        let rater = register(&client, Registration::example2()).await;

        let response = as_citizen(client.get(uri!(following(followed))), &rater)
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        assert!(!body::<bool>(response).await);

        let response = as_citizen(client.get(uri!(following(rater))), &rater)
            .dispatch()
            .await;
        assert_eq!(Status::NotFound, response.status());
    }
}
