//! AI question generation: prompt selection, the upstream call, and
//! fallback parsing of the reply.

pub mod client;
pub mod parse;
pub mod prompt;

use crate::catalog;
use crate::error::Result;
use crate::model::{
    common::Author,
    db::question::{NewQuestion, Question},
};
use crate::store::QuestionStore;

use self::client::TextGenerator;
use self::parse::parse_options;

/// Ask the external service for a new question in the given category and
/// persist it. The category is stored lower-cased; categories without their
/// own template use the `random` one.
pub async fn generate(
    store: &dyn QuestionStore,
    generator: &dyn TextGenerator,
    category: &str,
) -> Result<Question> {
    let category = category.to_lowercase();
    let session_id = prompt::session_id();
    let template = prompt::template_for(&category);

    let raw = generator
        .complete(&session_id, prompt::SYSTEM_MESSAGE, template)
        .await?;

    let parsed = parse_options(&raw);
    if parsed.is_heuristic() {
        warn!("Generator reply for category '{category}' was not valid JSON, using line fallback");
    }
    let (option_a, option_b) = parsed.into_options();

    catalog::insert(
        store,
        NewQuestion::new(category, option_a, option_b, Author::Ai),
    )
    .await
}
