//! Staged recovery of a response object from raw model output
//!
//! Strict parse first, then progressively more forgiving stages. Never
//! an error: total failure degrades to an empty result set carrying the
//! raw text.

use crate::spell::ParsedResponse;

use super::extract::{extract_object, strip_code_fences};
use super::repair::repair;

/// Default char cap for the degraded `rawResponse` echo.
pub const RAW_RESPONSE_LIMIT: usize = 500;

/// Error message reported when no stage recovers an object.
pub const PARSE_FAILURE: &str = "Failed to parse response";

/// Recovers a [`ParsedResponse`] from raw model output. Never fails.
///
/// Stages, stopping at the first that yields an object: strict parse,
/// code-fence stripping, balanced-object extraction, text repairs. When
/// everything fails the result carries [`PARSE_FAILURE`] and the first
/// [`RAW_RESPONSE_LIMIT`] chars of the input.
pub fn parse(raw: &str) -> ParsedResponse {
    parse_with_limit(raw, RAW_RESPONSE_LIMIT)
}

/// Recovery with an explicit `rawResponse` truncation limit (in chars).
pub fn parse_with_limit(raw: &str, limit: usize) -> ParsedResponse {
    if let Some(parsed) = try_strict(raw) {
        return parsed;
    }

    let stripped = strip_code_fences(raw);
    if let Some(parsed) = try_strict(&stripped) {
        return parsed;
    }

    let candidate = match extract_object(&stripped) {
        Some(object) => {
            if let Some(parsed) = try_strict(object) {
                return parsed;
            }
            object
        }
        None => stripped.as_str(),
    };

    log::debug!(
        "strict parse failed, repairing {} chars",
        candidate.chars().count()
    );
    let repaired = repair(candidate);
    if let Some(parsed) = try_strict(&repaired) {
        return parsed;
    }

    log::warn!("response unrecoverable, returning degraded result");
    ParsedResponse {
        results: Vec::new(),
        statistics: None,
        error: Some(PARSE_FAILURE.to_string()),
        raw_response: Some(truncate_chars(raw, limit)),
    }
}

/// Strict deserialization; `None` on any error.
fn try_strict(text: &str) -> Option<ParsedResponse> {
    serde_json::from_str(text).ok()
}

/// First `limit` chars of `text`, cut on scalar boundaries.
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_json_passes_through() {
        let response = parse(r#"{"results":[{"word":"qala","isCorrect":true,"suggestions":[]}]}"#);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].word, "qala");
        assert!(response.error.is_none());
        assert!(response.raw_response.is_none());
    }

    #[test]
    fn test_code_fences_stripped() {
        let raw = "```json\n{\"results\": [{\"word\":\"salam\",\"isCorrect\":true,\"suggestions\":[]}]}\n```";
        let response = parse(raw);
        assert_eq!(response.results.len(), 1);
        assert!(response.results[0].is_correct);
    }

    #[test]
    fn test_object_extracted_from_prose() {
        let raw = "Sure! Here is the check:\n{\"results\":[{\"word\":\"jaqsı\"}]}\nLet me know.";
        let response = parse(raw);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].word, "jaqsı");
    }

    #[test]
    fn test_nested_braces_extracted() {
        let raw = "note {\"results\":[],\"statistics\":{\"words\":{\"total\":3}}} done";
        let response = parse(raw);
        assert!(response.error.is_none());
        assert_eq!(response.statistics.unwrap()["words"]["total"], 3);
    }

    #[test]
    fn test_repair_stage_recovers() {
        let raw = "{\"results\": [{\"word\":\"sa\nlam\",\"isCorrect\":false,\"suggestions\":[\"salam\"],},]}";
        let response = parse(raw);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].word, "sa lam");
        assert_eq!(response.results[0].suggestions, vec!["salam".to_string()]);
    }

    #[test]
    fn test_degraded_result() {
        let response = parse("not json at all");
        assert!(response.results.is_empty());
        assert_eq!(response.error.as_deref(), Some(PARSE_FAILURE));
        assert_eq!(response.raw_response.as_deref(), Some("not json at all"));
    }

    #[test]
    fn test_never_fails_on_garbage() {
        for raw in [
            "",
            "{",
            "}",
            "null",
            "42",
            "\"just a string\"",
            "[1,2,3]",
            "{\"results\": }",
            "\u{0}\u{1}\u{fffd}binary",
            "``````",
        ] {
            // unrecoverable input degrades, it never panics
            let response = parse(raw);
            assert!(response.results.is_empty());
            assert_eq!(response.error.as_deref(), Some(PARSE_FAILURE));
        }
    }

    #[test]
    fn test_empty_object_is_valid() {
        let response = parse("{}");
        assert!(response.results.is_empty());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_raw_response_truncated() {
        let raw = "ә".repeat(700);
        let response = parse(&raw);
        let echoed = response.raw_response.unwrap();
        assert_eq!(echoed.chars().count(), RAW_RESPONSE_LIMIT);
    }

    #[test]
    fn test_custom_limit() {
        let response = parse_with_limit("definitely not json", 5);
        assert_eq!(response.raw_response.as_deref(), Some("defin"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let response = parse(r#"{"results":[],"model":"x-large","tokens":812}"#);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_truncated_response_degrades() {
        // cut off mid-array, no balanced object to extract
        let response = parse("{\"results\": [{\"word\":\"qala\",");
        assert_eq!(response.error.as_deref(), Some(PARSE_FAILURE));
        assert!(response.results.is_empty());
    }
}
