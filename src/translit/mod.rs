//! Cyrillic↔Latin transliteration
//!
//! Ordered mapping tables applied with greedy longest-match; the default
//! direction comes from script detection.
//!
//! ```
//! use qalpaq::translit::convert_auto;
//!
//! let conversion = convert_auto("қала");
//! assert_eq!(conversion.converted, "qala");
//! ```

mod engine;
mod table;

pub use engine::{convert, convert_auto, Conversion, Transliterator, TranslitError};
pub use table::{CYR_TO_LAT, LAT_TO_CYR};
