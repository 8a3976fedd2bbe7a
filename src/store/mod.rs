//! The storage seam: an opaque document-store interface with a MongoDB
//! implementation and, for tests, an in-memory substitute.

use std::sync::Arc;

use crate::error::Result;
use crate::model::{
    common::Choice,
    db::{
        choice::UserChoice,
        question::{NewQuestion, Question},
    },
    mongodb::Id,
};

#[cfg(test)]
pub mod memory;
pub mod mongo;

/// Shared handle on the question store, managed as Rocket state.
pub type SharedStore = Arc<dyn QuestionStore>;

/// The document-store operations the service relies on.
#[rocket::async_trait]
pub trait QuestionStore: Send + Sync {
    /// Insert a single question, returning it with its assigned ID.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Bulk-insert questions, returning how many were written.
    async fn insert_questions(&self, questions: Vec<NewQuestion>) -> Result<u64>;

    /// All questions whose category matches exactly, up to `limit`, in
    /// storage-native order.
    async fn questions_by_category(&self, category: &str, limit: i64) -> Result<Vec<Question>>;

    /// An unordered random sample of up to `size` questions drawn from the
    /// whole catalog.
    async fn sample_questions(&self, size: i32) -> Result<Vec<Question>>;

    /// Look up a question by ID.
    async fn find_question(&self, id: Id) -> Result<Option<Question>>;

    /// Increment the chosen vote counter and return the updated question in
    /// a single atomic operation, or `None` if the ID does not resolve.
    async fn add_vote(&self, id: Id, choice: Choice) -> Result<Option<Question>>;

    /// Number of questions in the catalog.
    async fn count_questions(&self) -> Result<u64>;

    /// Append a user's vote to the audit collection.
    async fn record_user_choice(&self, choice: UserChoice) -> Result<()>;
}
