use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::model::{common::Choice, mongodb::Id};

/// Audit record of a single user's vote. Append-only; a user may vote on
/// the same question any number of times.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChoice {
    pub user_id: String,
    pub question_id: Id,
    pub choice: Choice,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl UserChoice {
    pub fn new(user_id: String, question_id: Id, choice: Choice) -> Self {
        Self {
            user_id,
            question_id,
            choice,
            timestamp: Utc::now(),
        }
    }
}
