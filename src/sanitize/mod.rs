//! Best-effort recovery of JSON from model output
//!
//! Responses that should carry a spell-check object arrive wrapped in
//! code fences, prose, or mild syntax damage. [`parse`] walks a fixed
//! stage list and always returns a usable value; callers never handle an
//! error.
//!
//! ```
//! use qalpaq::sanitize::parse;
//!
//! let response = parse("```json\n{\"results\": []}\n```");
//! assert!(response.results.is_empty());
//! assert!(response.error.is_none());
//! ```

mod extract;
mod parser;
mod repair;

pub use extract::{extract_object, strip_code_fences};
pub use parser::{parse, parse_with_limit, PARSE_FAILURE, RAW_RESPONSE_LIMIT};
pub use repair::repair;
