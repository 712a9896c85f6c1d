pub mod config;
pub mod sanitize;
pub mod script;
pub mod spell;
pub mod translit;

pub use sanitize::{parse, parse_with_limit};
pub use script::{detect, ScriptType};
pub use spell::{annotate, fill_positions, ParsedResponse, SpellCheckResult};
pub use translit::{convert, convert_auto, Conversion, Transliterator, TranslitError};
