use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The flat progress snapshot written to disk. Serde handles the happy
/// path; `from_json` decodes field-by-field so a single malformed value
/// never throws away the rest of the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressData {
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(
        default,
        alias = "correctCharacters",
        alias = "correctCharactersThisLevel"
    )]
    pub correct_chars_this_level: usize,
    #[serde(default, alias = "totalCharactersTyped")]
    pub total_chars_typed: usize,
    #[serde(default, alias = "totalErrors")]
    pub total_errors: usize,
}

fn default_level() -> u32 {
    1
}

impl Default for ProgressData {
    fn default() -> Self {
        Self {
            level: default_level(),
            streak: 0,
            correct_chars_this_level: 0,
            total_chars_typed: 0,
            total_errors: 0,
        }
    }
}

impl ProgressData {
    /// Decode a snapshot, substituting the default for any field that is
    /// missing or not a non-negative integer. Unparseable documents yield
    /// the full default snapshot.
    pub fn from_json(content: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(content) else {
            return Self::default();
        };

        Self {
            level: field(&value, &["level"])
                .map(|n| n as u32)
                .filter(|&n| n >= 1)
                .unwrap_or_else(default_level),
            streak: field(&value, &["streak"]).map(|n| n as u32).unwrap_or(0),
            correct_chars_this_level: field(
                &value,
                &[
                    "correct_chars_this_level",
                    "correctCharacters",
                    "correctCharactersThisLevel",
                ],
            )
            .map(|n| n as usize)
            .unwrap_or(0),
            total_chars_typed: field(&value, &["total_chars_typed", "totalCharactersTyped"])
                .map(|n| n as usize)
                .unwrap_or(0),
            total_errors: field(&value, &["total_errors", "totalErrors"])
                .map(|n| n as usize)
                .unwrap_or(0),
        }
    }
}

fn field(value: &Value, names: &[&str]) -> Option<u64> {
    names
        .iter()
        .find_map(|name| value.get(name).and_then(Value::as_u64))
}
