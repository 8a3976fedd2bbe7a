use serde::{Deserialize, Serialize};

/// A selected side of a question. Any other value is rejected at the
/// request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// Name of the vote counter field this choice increments.
    pub fn votes_field(self) -> &'static str {
        match self {
            Choice::A => "votesA",
            Choice::B => "votesB",
        }
    }
}

/// Who authored a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Admin,
    Ai,
    User,
}
