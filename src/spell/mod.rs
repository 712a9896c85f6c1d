//! Spell-check formatting path
//!
//! Joins recovered model output with the original text: parse the
//! response, then back-fill word offsets against the text the check ran
//! on.
//!
//! ```
//! use qalpaq::spell::annotate;
//!
//! let response = annotate("bir eki", "{\"results\": []}");
//! assert!(response.results.is_empty());
//! ```

mod positions;
mod result;

pub use positions::fill_positions;
pub use result::{ParsedResponse, SpellCheckResult};

use crate::sanitize;

/// Recovers a response and back-fills offsets against `text`.
pub fn annotate(text: &str, raw: &str) -> ParsedResponse {
    let mut response = sanitize::parse(raw);
    fill_positions(text, &mut response.results);
    response
}

/// (total, flagged) counts over a result set.
pub fn summary(results: &[SpellCheckResult]) -> (usize, usize) {
    let flagged = results.iter().filter(|r| !r.is_correct).count();
    (results.len(), flagged)
}
