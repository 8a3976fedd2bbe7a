use std::ops::Deref;

use mongodb::{bson::doc, error::Error as DbError, Collection, Database, IndexModel};

use crate::model::db::{
    choice::UserChoice,
    question::{NewQuestion, Question},
};

/// A type that can be directly inserted/read to/from the database.
pub trait MongoCollection {
    /// The name of the collection.
    const NAME: &'static str;
}

/// A database collection of the given type.
pub struct Coll<T>(Collection<T>);

impl<T> Coll<T>
where
    T: MongoCollection,
{
    /// Get a handle on this collection in the given database.
    pub fn from_db(db: &Database) -> Self {
        Self(db.collection(T::NAME))
    }
}

// `derive(Clone)` would only derive if `T: Clone`, but we don't need that bound.
impl<T> Clone for Coll<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Deref for Coll<T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Question collections
const QUESTIONS: &str = "questions";
impl MongoCollection for Question {
    const NAME: &'static str = QUESTIONS;
}
impl MongoCollection for NewQuestion {
    const NAME: &'static str = QUESTIONS;
}

// User choice collection
const USER_CHOICES: &str = "user_choices";
impl MongoCollection for UserChoice {
    const NAME: &'static str = USER_CHOICES;
}

/// Ensure that all the required indexes exist on the given database.
///
/// This operation is idempotent.
pub async fn ensure_indexes_exist(db: &Database) -> Result<(), DbError> {
    debug!("Ensuring collection indexes exist");

    // Question collection, for category listings.
    let question_index = IndexModel::builder().keys(doc! {"category": 1}).build();
    Coll::<Question>::from_db(db)
        .create_index(question_index, None)
        .await?;

    // User choice collection, for per-question audit lookups.
    let choice_index = IndexModel::builder().keys(doc! {"questionId": 1}).build();
    Coll::<UserChoice>::from_db(db)
        .create_index(choice_index, None)
        .await?;

    Ok(())
}
