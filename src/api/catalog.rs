use rocket::{serde::json::Json, Route, State};
use serde::Serialize;

use crate::catalog;
use crate::error::Result;
use crate::model::api::{QuestionDescription, QuestionRequest, SeedOutcome};
use crate::store::SharedStore;

pub fn routes() -> Vec<Route> {
    routes![service_info, list_questions, create_question, seed_questions]
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    message: &'static str,
}

#[get("/")]
fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Cosa Sceglieresti API",
    })
}

#[get("/questions?<category>")]
async fn list_questions(
    category: Option<String>,
    store: &State<SharedStore>,
) -> Result<Json<Vec<QuestionDescription>>> {
    let category = category.unwrap_or_else(|| catalog::RANDOM_CATEGORY.to_string());
    let questions = catalog::list_by_category(store.inner().as_ref(), &category).await?;
    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

#[post("/questions", data = "<request>", format = "json")]
async fn create_question(
    request: Json<QuestionRequest>,
    store: &State<SharedStore>,
) -> Result<Json<QuestionDescription>> {
    let QuestionRequest {
        category,
        option_a,
        option_b,
    } = request.0;
    let question = catalog::create(store.inner().as_ref(), category, option_a, option_b).await?;
    Ok(Json(question.into()))
}

#[post("/seed")]
async fn seed_questions(store: &State<SharedStore>) -> Result<Json<SeedOutcome>> {
    let outcome = catalog::seed(store.inner().as_ref()).await?;
    Ok(Json(outcome))
}
