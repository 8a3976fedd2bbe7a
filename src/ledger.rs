//! The voting ledger: vote recording, stats reads, and the percentage split.

use crate::error::{Error, Result};
use crate::model::{
    api::{ChoiceRequest, VoteStats},
    db::{choice::UserChoice, question::Question},
    mongodb::Id,
};
use crate::store::QuestionStore;

/// Record a vote and return the updated counters and percentages.
///
/// The increment and the fetch are one atomic storage operation, so two
/// concurrent voters on the same question never lose an update. The audit
/// append for an attached user ID is best-effort and not atomic with the
/// increment.
pub async fn record_choice(
    store: &dyn QuestionStore,
    request: ChoiceRequest,
) -> Result<VoteStats> {
    let id = request.question_id.parse::<Id>()?;
    let question = store
        .add_vote(id, request.choice)
        .await?
        .ok_or_else(|| Error::not_found(format!("Question with ID '{}'", request.question_id)))?;

    if let Some(user_id) = request.user_id {
        let audit = UserChoice::new(user_id, id, request.choice);
        if let Err(err) = store.record_user_choice(audit).await {
            warn!("Failed to record user choice for question {id}: {err}");
        }
    }

    Ok(tally(&question))
}

/// Current counters and percentages for a question, without mutating it.
pub async fn stats(store: &dyn QuestionStore, raw_id: &str) -> Result<VoteStats> {
    let id = raw_id.parse::<Id>()?;
    let question = store
        .find_question(id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Question with ID '{raw_id}'")))?;
    Ok(tally(&question))
}

fn tally(question: &Question) -> VoteStats {
    let (percentage_a, percentage_b) = percentages(question.votes_a, question.votes_b);
    VoteStats {
        question_id: question.id.to_string(),
        votes_a: question.votes_a,
        votes_b: question.votes_b,
        percentage_a,
        percentage_b,
    }
}

/// Split the vote counters into per-side percentages, each independently
/// rounded to one decimal place. With no votes at all, both sides report
/// 50.0 rather than a computed ratio. Because the sides round independently,
/// the pair can sum to anywhere between 99.9 and 100.1.
fn percentages(votes_a: u64, votes_b: u64) -> (f64, f64) {
    let total = votes_a + votes_b;
    if total == 0 {
        return (50.0, 50.0);
    }
    let share = |votes: u64| (votes as f64 / total as f64 * 1000.0).round() / 10.0;
    (share(votes_a), share(votes_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::common::{Author, Choice};
    use crate::model::db::question::NewQuestion;
    use crate::store::memory::MemoryStore;

    async fn stored_question(store: &MemoryStore, votes_a: u64, votes_b: u64) -> Question {
        let mut question = NewQuestion::new(
            "storico",
            "Essere un gladiatore",
            "Essere un faraone",
            Author::Admin,
        );
        question.votes_a = votes_a;
        question.votes_b = votes_b;
        store.insert_question(question).await.unwrap()
    }

    fn vote(question_id: String, choice: Choice, user_id: Option<String>) -> ChoiceRequest {
        ChoiceRequest {
            question_id,
            choice,
            user_id,
        }
    }

    #[rocket::async_test]
    async fn vote_increments_and_splits() {
        let store = MemoryStore::new();
        let question = stored_question(&store, 120, 95).await;

        let stats = record_choice(&store, vote(question.id.to_string(), Choice::A, None))
            .await
            .unwrap();

        assert_eq!(stats.votes_a, 121);
        assert_eq!(stats.votes_b, 95);
        assert_eq!(stats.percentage_a, 56.0);
        assert_eq!(stats.percentage_b, 44.0);
    }

    #[rocket::async_test]
    async fn unvoted_question_reports_even_split() {
        let store = MemoryStore::new();
        let question = stored_question(&store, 0, 0).await;

        let stats = stats(&store, &question.id.to_string()).await.unwrap();
        assert_eq!(stats.percentage_a, 50.0);
        assert_eq!(stats.percentage_b, 50.0);
    }

    #[rocket::async_test]
    async fn unknown_question_is_not_found_and_leaves_no_audit() {
        let store = MemoryStore::new();

        let err = record_choice(
            &store,
            vote(Id::new().to_string(), Choice::B, Some("user-1".to_string())),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
        assert!(store.user_choices().is_empty());
    }

    #[rocket::async_test]
    async fn malformed_id_is_rejected_up_front() {
        let store = MemoryStore::new();

        let err = record_choice(&store, vote("not-an-id".to_string(), Choice::A, None))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidId(_)));

        let err = stats(&store, "not-an-id").await.unwrap_err();
        assert!(matches!(err, Error::InvalidId(_)));
    }

    #[rocket::async_test]
    async fn repeat_votes_from_one_user_are_all_audited() {
        let store = MemoryStore::new();
        let question = stored_question(&store, 0, 0).await;

        for _ in 0..2 {
            record_choice(
                &store,
                vote(
                    question.id.to_string(),
                    Choice::B,
                    Some("user-7".to_string()),
                ),
            )
            .await
            .unwrap();
        }

        let audits = store.user_choices();
        assert_eq!(audits.len(), 2);
        assert_eq!(audits[0].user_id, "user-7");
        assert_eq!(audits[0].question_id, question.id);
        assert_eq!(audits[0].choice, Choice::B);
    }

    #[rocket::async_test]
    async fn counters_never_decrease() {
        let store = MemoryStore::new();
        let question = stored_question(&store, 0, 0).await;

        let mut previous = (0, 0);
        for round in 0..20 {
            let choice = if round % 3 == 0 { Choice::B } else { Choice::A };
            let stats = record_choice(&store, vote(question.id.to_string(), choice, None))
                .await
                .unwrap();

            assert!(stats.votes_a >= previous.0 && stats.votes_b >= previous.1);
            assert!((0.0..=100.0).contains(&stats.percentage_a));
            assert!((0.0..=100.0).contains(&stats.percentage_b));
            assert!((stats.percentage_a + stats.percentage_b - 100.0).abs() <= 0.1 + 1e-9);
            previous = (stats.votes_a, stats.votes_b);
        }
    }

    #[test]
    fn even_split_without_votes() {
        assert_eq!(percentages(0, 0), (50.0, 50.0));
    }

    #[test]
    fn rounding_is_per_side() {
        assert_eq!(percentages(1, 2), (33.3, 66.7));
        assert_eq!(percentages(1, 5), (16.7, 83.3));
        // Independent rounding can push the pair past 100.
        assert_eq!(percentages(1, 1999), (0.1, 100.0));
    }
}
