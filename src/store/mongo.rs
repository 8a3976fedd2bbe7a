use mongodb::{
    bson::{doc, from_document, Document},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Database,
};
use rocket::futures::TryStreamExt;

use crate::error::{Error, Result};
use crate::model::{
    common::Choice,
    db::{
        choice::UserChoice,
        question::{NewQuestion, Question},
    },
    mongodb::{Coll, Id},
};

use super::QuestionStore;

/// The production MongoDB-backed store.
pub struct MongoStore {
    questions: Coll<Question>,
    new_questions: Coll<NewQuestion>,
    user_choices: Coll<UserChoice>,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self {
            questions: Coll::from_db(&db),
            new_questions: Coll::from_db(&db),
            user_choices: Coll::from_db(&db),
        }
    }
}

#[rocket::async_trait]
impl QuestionStore for MongoStore {
    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let id: Id = self
            .new_questions
            .insert_one(&question, None)
            .await?
            .inserted_id
            .as_object_id()
            .ok_or_else(|| {
                Error::Unexpected("Inserted question did not receive an ObjectId".to_string())
            })?
            .into();
        Ok(Question { id, question })
    }

    async fn insert_questions(&self, questions: Vec<NewQuestion>) -> Result<u64> {
        let result = self.new_questions.insert_many(&questions, None).await?;
        Ok(result.inserted_ids.len() as u64)
    }

    async fn questions_by_category(&self, category: &str, limit: i64) -> Result<Vec<Question>> {
        let filter = doc! { "category": category };
        let options = FindOptions::builder().limit(limit).build();
        let questions = self
            .questions
            .find(filter, options)
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn sample_questions(&self, size: i32) -> Result<Vec<Question>> {
        let pipeline = [doc! { "$sample": { "size": size } }];
        let documents: Vec<Document> = self
            .questions
            .aggregate(pipeline, None)
            .await?
            .try_collect()
            .await?;
        documents
            .into_iter()
            .map(|document| Ok(from_document(document)?))
            .collect()
    }

    async fn find_question(&self, id: Id) -> Result<Option<Question>> {
        Ok(self.questions.find_one(id.as_doc(), None).await?)
    }

    async fn add_vote(&self, id: Id, choice: Choice) -> Result<Option<Question>> {
        let mut increment = Document::new();
        increment.insert(choice.votes_field(), 1_i64);
        let update = doc! { "$inc": increment };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(self
            .questions
            .find_one_and_update(id.as_doc(), update, options)
            .await?)
    }

    async fn count_questions(&self) -> Result<u64> {
        Ok(self.questions.count_documents(None, None).await?)
    }

    async fn record_user_choice(&self, choice: UserChoice) -> Result<()> {
        self.user_choices.insert_one(choice, None).await?;
        Ok(())
    }
}
