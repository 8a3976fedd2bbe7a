//! Request and response shapes for the API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    common::{Author, Choice},
    db::question::Question,
};

/// Body of `POST /api/questions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub category: String,
    pub option_a: String,
    pub option_b: String,
}

/// A question as presented by the API, with a plain hex-string ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDescription {
    pub id: String,
    pub category: String,
    pub option_a: String,
    pub option_b: String,
    pub votes_a: u64,
    pub votes_b: u64,
    pub created_by: Author,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionDescription {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_string(),
            category: question.question.category,
            option_a: question.question.option_a,
            option_b: question.question.option_b,
            votes_a: question.question.votes_a,
            votes_b: question.question.votes_b,
            created_by: question.question.created_by,
            created_at: question.question.created_at,
        }
    }
}

/// Body of `POST /api/choice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceRequest {
    pub question_id: String,
    pub choice: Choice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Vote counters and percentages for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteStats {
    pub question_id: String,
    pub votes_a: u64,
    pub votes_b: u64,
    pub percentage_a: f64,
    pub percentage_b: f64,
}

/// Body of `POST /api/generate-question`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub category: String,
}

/// Result of `POST /api/seed`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SeedOutcome {
    /// The catalog already had questions; nothing was inserted.
    AlreadyPopulated { message: &'static str, count: u64 },
    /// The starter set was inserted.
    Seeded { message: &'static str, inserted: u64 },
}
