//! Prompt templates for question generation, keyed by category.

/// System persona presented to the text-generation service.
pub const SYSTEM_MESSAGE: &str = "Sei un creatore esperto di domande 'Would You Rather' in \
    italiano. Le tue domande sono creative, coinvolgenti e fanno riflettere.";

const STORICO: &str = "Genera una domanda 'Preferiresti' in stile storico. Deve essere una \
    scelta difficile tra due scenari storici o epoche. Rispondi SOLO con questo formato JSON: \
    {\"optionA\": \"...\", \"optionB\": \"...\"}";

const CALCIO: &str = "Genera una domanda 'Preferiresti' sul calcio. Deve essere una scelta \
    difficile tra due scenari calcistici (carriera, trofei, momenti epici). Rispondi SOLO con \
    questo formato JSON: {\"optionA\": \"...\", \"optionB\": \"...\"}";

const BASKET: &str = "Genera una domanda 'Preferiresti' sull'NBA/basket. Deve essere una \
    scelta difficile tra due scenari (carriera, campionati, leggende). Rispondi SOLO con questo \
    formato JSON: {\"optionA\": \"...\", \"optionB\": \"...\"}";

const RELIGIONE: &str = "Genera una domanda 'Preferiresti' filosofica/religiosa. Deve essere \
    una scelta profonda su fede, spiritualità o esistenza. Rispondi SOLO con questo formato \
    JSON: {\"optionA\": \"...\", \"optionB\": \"...\"}";

const RANDOM: &str = "Genera una domanda 'Preferiresti' assurda e divertente su qualsiasi \
    tema. Rispondi SOLO con questo formato JSON: {\"optionA\": \"...\", \"optionB\": \"...\"}";

/// The template for a category; unknown categories fall back to the
/// `random` template. Expects the category to already be lower-cased.
pub fn template_for(category: &str) -> &'static str {
    match category {
        "storico" => STORICO,
        "calcio" => CALCIO,
        "basket" => BASKET,
        "religione" => RELIGIONE,
        _ => RANDOM,
    }
}

/// A fresh session identifier; sessions are never reused across calls.
pub fn session_id() -> String {
    format!("question-gen-{:032x}", rand::random::<u128>())
}
