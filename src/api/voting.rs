use rocket::{serde::json::Json, Route, State};

use crate::error::Result;
use crate::ledger;
use crate::model::api::{ChoiceRequest, VoteStats};
use crate::store::SharedStore;

pub fn routes() -> Vec<Route> {
    routes![record_choice, question_stats]
}

#[post("/choice", data = "<request>", format = "json")]
async fn record_choice(
    request: Json<ChoiceRequest>,
    store: &State<SharedStore>,
) -> Result<Json<VoteStats>> {
    let stats = ledger::record_choice(store.inner().as_ref(), request.0).await?;
    Ok(Json(stats))
}

#[get("/stats/<question_id>")]
async fn question_stats(
    question_id: &str,
    store: &State<SharedStore>,
) -> Result<Json<VoteStats>> {
    let stats = ledger::stats(store.inner().as_ref(), question_id).await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Status};
    use serde_json::json;

    use crate::model::api::VoteStats;
    use crate::model::common::Author;
    use crate::model::db::question::NewQuestion;
    use crate::model::mongodb::Id;
    use crate::store::QuestionStore;
    use crate::testing;

    #[rocket::async_test]
    async fn vote_and_stats_round_trip() {
        let (client, store) = testing::client().await;
        let mut question = NewQuestion::new(
            "storico",
            "Essere un legionario",
            "Essere uno scriba",
            Author::Admin,
        );
        question.votes_a = 120;
        question.votes_b = 95;
        let question = store.insert_question(question).await.unwrap();

        let response = client
            .post("/api/choice")
            .header(ContentType::JSON)
            .body(
                json!({
                    "questionId": question.id.to_string(),
                    "choice": "A",
                    "userId": "user-1",
                })
                .to_string(),
            )
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let stats = response.into_json::<VoteStats>().await.unwrap();
        assert_eq!(stats.votes_a, 121);
        assert_eq!(stats.votes_b, 95);
        assert_eq!(stats.percentage_a, 56.0);
        assert_eq!(stats.percentage_b, 44.0);

        let response = client
            .get(format!("/api/stats/{}", question.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let stats = response.into_json::<VoteStats>().await.unwrap();
        assert_eq!(stats.votes_a, 121);
        assert_eq!(stats.votes_b, 95);

        assert_eq!(store.user_choices().len(), 1);
    }

    #[rocket::async_test]
    async fn fresh_question_reports_even_split() {
        let (client, store) = testing::client().await;
        let question = store
            .insert_question(NewQuestion::new(
                "basket",
                "Schiacciare",
                "Tirare da tre",
                Author::Admin,
            ))
            .await
            .unwrap();

        let response = client
            .get(format!("/api/stats/{}", question.id))
            .dispatch()
            .await;
        let stats = response.into_json::<VoteStats>().await.unwrap();
        assert_eq!(stats.percentage_a, 50.0);
        assert_eq!(stats.percentage_b, 50.0);
    }

    #[rocket::async_test]
    async fn unknown_question_is_404() {
        let (client, _store) = testing::client().await;

        let response = client
            .post("/api/choice")
            .header(ContentType::JSON)
            .body(json!({"questionId": Id::new().to_string(), "choice": "B"}).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);

        let response = client
            .get(format!("/api/stats/{}", Id::new()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[rocket::async_test]
    async fn malformed_id_is_a_client_error_not_404() {
        let (client, _store) = testing::client().await;

        let response = client
            .post("/api/choice")
            .header(ContentType::JSON)
            .body(json!({"questionId": "not-an-id", "choice": "A"}).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let response = client.get("/api/stats/not-an-id").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn choice_must_be_a_or_b() {
        let (client, store) = testing::client().await;
        let question = store
            .insert_question(NewQuestion::new(
                "random",
                "Volare",
                "Essere invisibile",
                Author::Admin,
            ))
            .await
            .unwrap();

        let response = client
            .post("/api/choice")
            .header(ContentType::JSON)
            .body(json!({"questionId": question.id.to_string(), "choice": "C"}).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);
    }
}
