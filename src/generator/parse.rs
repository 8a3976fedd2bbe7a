//! Two-stage parsing of generator output: strict JSON first, then a
//! line-split heuristic that always yields two options.

use serde::Deserialize;

const PLACEHOLDER_A: &str = "Opzione A";
const PLACEHOLDER_B: &str = "Opzione B";

/// The two option strings recovered from a generator reply, tagged with how
/// they were recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionPair {
    /// The reply carried the expected JSON object.
    Structured { option_a: String, option_b: String },
    /// The reply was malformed; options were taken from its first lines.
    Heuristic { option_a: String, option_b: String },
}

impl OptionPair {
    pub fn into_options(self) -> (String, String) {
        match self {
            Self::Structured { option_a, option_b } | Self::Heuristic { option_a, option_b } => {
                (option_a, option_b)
            }
        }
    }

    pub fn is_heuristic(&self) -> bool {
        matches!(self, Self::Heuristic { .. })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedOptions {
    option_a: String,
    option_b: String,
}

/// Recover two options from a raw generator reply. Never fails: a reply
/// that defeats the strict parse degrades to its first two non-empty lines,
/// and placeholders stand in for missing lines.
pub fn parse_options(raw: &str) -> OptionPair {
    if let Some(options) = parse_structured(raw) {
        return OptionPair::Structured {
            option_a: options.option_a,
            option_b: options.option_b,
        };
    }

    let mut lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());
    OptionPair::Heuristic {
        option_a: lines.next().unwrap_or(PLACEHOLDER_A).to_string(),
        option_b: lines.next().unwrap_or(PLACEHOLDER_B).to_string(),
    }
}

/// The strict stage: strip an optional fenced code block, parse the JSON
/// object, and require both options to be non-empty.
fn parse_structured(raw: &str) -> Option<GeneratedOptions> {
    let text = strip_fences(raw.trim());
    let options: GeneratedOptions = serde_json::from_str(text).ok()?;
    if options.option_a.trim().is_empty() || options.option_b.trim().is_empty() {
        return None;
    }
    Some(options)
}

/// Pull the contents out of a ```json fence (or a bare ``` fence); an
/// unclosed fence keeps everything after the marker.
fn strip_fences(text: &str) -> &str {
    for marker in ["```json", "```"] {
        if let Some(start) = text.find(marker) {
            let rest = &text[start + marker.len()..];
            let body = match rest.find("```") {
                Some(end) => &rest[..end],
                None => rest,
            };
            return body.trim();
        }
    }
    text
}
