//! The question catalog: listing, creation, and one-time seeding.

use crate::error::Result;
use crate::model::{
    api::SeedOutcome,
    common::Author,
    db::question::{NewQuestion, Question},
};
use crate::store::QuestionStore;

/// Reserved category meaning "sample across the whole catalog".
pub const RANDOM_CATEGORY: &str = "random";

/// Maximum number of questions returned by a random sample.
const RANDOM_SAMPLE_SIZE: i32 = 10;

/// Maximum number of questions returned for a single category.
const CATEGORY_LIST_LIMIT: i64 = 100;

/// List questions for a category.
///
/// The `random` sentinel (matched case-insensitively) samples up to
/// [`RANDOM_SAMPLE_SIZE`] questions across all categories; any other
/// category is matched exactly. An unknown category yields an empty list.
pub async fn list_by_category(store: &dyn QuestionStore, category: &str) -> Result<Vec<Question>> {
    if category.eq_ignore_ascii_case(RANDOM_CATEGORY) {
        store.sample_questions(RANDOM_SAMPLE_SIZE).await
    } else {
        store.questions_by_category(category, CATEGORY_LIST_LIMIT).await
    }
}

/// Persist a question authored through the API.
pub async fn create(
    store: &dyn QuestionStore,
    category: String,
    option_a: String,
    option_b: String,
) -> Result<Question> {
    insert(store, NewQuestion::new(category, option_a, option_b, Author::Admin)).await
}

/// Persist an already-constructed question.
pub async fn insert(store: &dyn QuestionStore, question: NewQuestion) -> Result<Question> {
    store.insert_question(question).await
}

/// Populate an empty catalog with the starter set.
///
/// The emptiness check and the bulk insert are two separate round trips;
/// two seed calls racing on an empty catalog can both insert.
pub async fn seed(store: &dyn QuestionStore) -> Result<SeedOutcome> {
    let count = store.count_questions().await?;
    if count > 0 {
        return Ok(SeedOutcome::AlreadyPopulated {
            message: "Database already has questions",
            count,
        });
    }

    let inserted = store.insert_questions(starter_questions()).await?;
    info!("Seeded the question catalog with {inserted} starter questions");
    Ok(SeedOutcome::Seeded {
        message: "Database seeded successfully",
        inserted,
    })
}

/// The pre-authored starter set: three questions for each of the five
/// launch categories.
fn starter_questions() -> Vec<NewQuestion> {
    fn question(
        category: &str,
        option_a: &str,
        option_b: &str,
        votes_a: u64,
        votes_b: u64,
    ) -> NewQuestion {
        let mut question = NewQuestion::new(category, option_a, option_b, Author::Admin);
        question.votes_a = votes_a;
        question.votes_b = votes_b;
        question
    }

    vec![
        // Storico
        question(
            "storico",
            "Vivere nell'Impero Romano al suo apice",
            "Vivere nell'Antico Egitto durante la costruzione delle piramidi",
            120,
            95,
        ),
        question(
            "storico",
            "Essere un cavaliere medievale",
            "Essere un samurai giapponese",
            87,
            134,
        ),
        question(
            "storico",
            "Partecipare alla rivoluzione francese",
            "Esplorare il Nuovo Mondo con Colombo",
            102,
            78,
        ),
        // Calcio
        question(
            "calcio",
            "Vincere la Champions da panchinaro",
            "Perdere la finale da protagonista assoluto",
            156,
            210,
        ),
        question(
            "calcio",
            "Giocare 15 anni in Serie B da capitano",
            "Giocare 2 anni in Serie A poi finire la carriera",
            98,
            167,
        ),
        question(
            "calcio",
            "Vincere il Pallone d'Oro senza mai vincere un trofeo",
            "Vincere tutto ma non essere mai nei top 10",
            201,
            112,
        ),
        // Basket
        question(
            "basket",
            "10 anni da role player in NBA",
            "1 anno da MVP poi finire in Europa",
            145,
            189,
        ),
        question(
            "basket",
            "Vincere 5 anelli da sesto uomo",
            "0 anelli ma 10 convocazioni All-Star",
            167,
            98,
        ),
        question(
            "basket",
            "Giocare con Michael Jordan nei Bulls",
            "Essere compagno di squadra di LeBron",
            234,
            143,
        ),
        // Religione
        question(
            "religione",
            "Parlare direttamente con una divinità",
            "Ricevere una prova fisica e tangibile del soprannaturale",
            189,
            156,
        ),
        question(
            "religione",
            "Conoscere il senso ultimo della vita",
            "Sapere con certezza cosa c'è dopo la morte",
            198,
            187,
        ),
        question(
            "religione",
            "Vivere in un mondo con religioni diverse ma in armonia",
            "Vivere in un mondo con una sola religione universale",
            267,
            89,
        ),
        // Random
        question(
            "random",
            "Avere sempre la canzone giusta in mente al momento giusto",
            "Non dover mai più aspettare in fila",
            134,
            201,
        ),
        question(
            "random",
            "Parlare con gli animali",
            "Parlare tutte le lingue del mondo",
            298,
            156,
        ),
        question(
            "random",
            "Vivere senza internet per un anno con 1 milione di euro",
            "Vivere con internet ma guadagnare solo 1000 euro al mese",
            312,
            87,
        ),
    ]
}
