//! Spell-check wire model
//!
//! JSON shapes exchanged with the LLM spell-check path, camelCase on the
//! wire. Incoming objects parse leniently: only `word` is required per
//! entry, everything else defaults.

use serde::{Deserialize, Serialize};

/// One spell-checked token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellCheckResult {
    pub word: String,
    /// Missing verdicts default to false so the entry stays visible
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Char offset of the word in the original text
    #[serde(default)]
    pub start: usize,
    /// Char offset one past the word's end
    #[serde(default)]
    pub end: usize,
}

/// Recovered spell-check response.
///
/// `results` is always present, even after total parse failure; `error`
/// and `rawResponse` carry the degraded state instead of a thrown error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResponse {
    #[serde(default)]
    pub results: Vec<SpellCheckResult>,
    /// Opaque statistics object, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}
