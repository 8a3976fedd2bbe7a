use rocket::{serde::json::Json, Route, State};

use crate::error::Result;
use crate::generator::{self, client::SharedGenerator};
use crate::model::api::{GenerateRequest, QuestionDescription};
use crate::store::SharedStore;

pub fn routes() -> Vec<Route> {
    routes![generate_question]
}

#[post("/generate-question", data = "<request>", format = "json")]
async fn generate_question(
    request: Json<GenerateRequest>,
    store: &State<SharedStore>,
    text_generator: &State<SharedGenerator>,
) -> Result<Json<QuestionDescription>> {
    let question = generator::generate(
        store.inner().as_ref(),
        text_generator.inner().as_ref(),
        &request.category,
    )
    .await?;
    Ok(Json(question.into()))
}
