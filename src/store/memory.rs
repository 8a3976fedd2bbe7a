use std::sync::Mutex;

use rand::seq::SliceRandom;

use crate::error::Result;
use crate::model::{
    common::Choice,
    db::{
        choice::UserChoice,
        question::{NewQuestion, Question},
    },
    mongodb::Id,
};

use super::QuestionStore;

/// In-memory substitute for the MongoDB store.
#[derive(Default)]
pub struct MemoryStore {
    questions: Mutex<Vec<Question>>,
    user_choices: Mutex<Vec<UserChoice>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded audit entries.
    pub fn user_choices(&self) -> Vec<UserChoice> {
        self.user_choices.lock().unwrap().clone()
    }
}

#[rocket::async_trait]
impl QuestionStore for MemoryStore {
    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let question = Question {
            id: Id::new(),
            question,
        };
        self.questions.lock().unwrap().push(question.clone());
        Ok(question)
    }

    async fn insert_questions(&self, questions: Vec<NewQuestion>) -> Result<u64> {
        let mut stored = self.questions.lock().unwrap();
        let inserted = questions.len() as u64;
        stored.extend(questions.into_iter().map(|question| Question {
            id: Id::new(),
            question,
        }));
        Ok(inserted)
    }

    async fn questions_by_category(&self, category: &str, limit: i64) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|question| question.category == category)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn sample_questions(&self, size: i32) -> Result<Vec<Question>> {
        let mut sampled = self.questions.lock().unwrap().clone();
        sampled.shuffle(&mut rand::thread_rng());
        sampled.truncate(size as usize);
        Ok(sampled)
    }

    async fn find_question(&self, id: Id) -> Result<Option<Question>> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|question| question.id == id)
            .cloned())
    }

    async fn add_vote(&self, id: Id, choice: Choice) -> Result<Option<Question>> {
        let mut questions = self.questions.lock().unwrap();
        match questions.iter_mut().find(|question| question.id == id) {
            Some(question) => {
                match choice {
                    Choice::A => question.votes_a += 1,
                    Choice::B => question.votes_b += 1,
                }
                Ok(Some(question.clone()))
            }
            None => Ok(None),
        }
    }

    async fn count_questions(&self) -> Result<u64> {
        Ok(self.questions.lock().unwrap().len() as u64)
    }

    async fn record_user_choice(&self, choice: UserChoice) -> Result<()> {
        self.user_choices.lock().unwrap().push(choice);
        Ok(())
    }
}
