//! Script detection for Karakalpak text
//!
//! ```
//! use qalpaq::script::{detect, ScriptType};
//!
//! assert_eq!(detect("сәлем"), ScriptType::Cyrillic);
//! assert_eq!(detect("sálem"), ScriptType::Latin);
//! assert_eq!(detect("12345"), ScriptType::Unknown);
//! ```

pub mod alphabet;
mod detect;

pub use detect::{cyrillic_ratio, detect, script_counts, ScriptType};
