use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::model::{common::Author, mongodb::Id};

/// A question ready for DB insertion, i.e. a [`Question`] without an ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub category: String,
    pub option_a: String,
    pub option_b: String,
    pub votes_a: u64,
    pub votes_b: u64,
    pub created_by: Author,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl NewQuestion {
    /// A fresh question with zeroed counters, created now.
    pub fn new(
        category: impl Into<String>,
        option_a: impl Into<String>,
        option_b: impl Into<String>,
        created_by: Author,
    ) -> Self {
        Self {
            category: category.into(),
            option_a: option_a.into(),
            option_b: option_b.into(),
            votes_a: 0,
            votes_b: 0,
            created_by,
            created_at: Utc::now(),
        }
    }
}

/// A question from the database, with its unique ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub question: NewQuestion,
}

impl Deref for Question {
    type Target = NewQuestion;

    fn deref(&self) -> &Self::Target {
        &self.question
    }
}

impl DerefMut for Question {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.question
    }
}
