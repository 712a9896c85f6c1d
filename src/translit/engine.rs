//! Greedy longest-match conversion engine
//!
//! Applies the direction tables left-to-right, restores case, and passes
//! unmapped characters through unchanged. Direction defaults come from
//! script detection.

use serde::Serialize;

use super::table::{longest_match, Direction};
use crate::script::alphabet::{fold_char, upper_char};
use crate::script::{detect, ScriptType};

/// Conversion error
#[derive(Debug)]
pub enum TranslitError {
    /// Requested target is not a convertible orthography
    UnsupportedTarget(ScriptType),
}

impl std::fmt::Display for TranslitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslitError::UnsupportedTarget(script) => {
                write!(f, "unsupported conversion target: {}", script)
            }
        }
    }
}

impl std::error::Error for TranslitError {}

/// Outcome of one conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub original: String,
    pub converted: String,
    pub from: ScriptType,
    pub to: ScriptType,
}

/// Conversion engine carrying the auto-direction policy.
#[derive(Debug, Clone)]
pub struct Transliterator {
    mixed_target: ScriptType,
}

impl Transliterator {
    /// Creates an engine converting mixed-script input toward
    /// `mixed_target`. Non-convertible values behave as Latin.
    pub fn new(mixed_target: ScriptType) -> Self {
        let mixed_target = match mixed_target {
            ScriptType::Cyrillic | ScriptType::Latin => mixed_target,
            _ => ScriptType::Latin,
        };
        Self { mixed_target }
    }

    /// Default policy: mixed input converts toward Latin.
    pub fn with_defaults() -> Self {
        Self::new(ScriptType::Latin)
    }

    /// Converts toward an explicit target script.
    ///
    /// Same-script input comes back unchanged. Only `Cyrillic` and
    /// `Latin` are valid targets; anything else is a caller bug and
    /// returns [`TranslitError::UnsupportedTarget`].
    pub fn convert(&self, text: &str, target: ScriptType) -> Result<Conversion, TranslitError> {
        let direction = match target {
            ScriptType::Latin => Direction::CyrToLat,
            ScriptType::Cyrillic => Direction::LatToCyr,
            other => return Err(TranslitError::UnsupportedTarget(other)),
        };

        let from = detect(text);
        let converted = if from == target {
            text.to_string()
        } else {
            apply(text, direction)
        };

        Ok(Conversion {
            original: text.to_string(),
            converted,
            from,
            to: target,
        })
    }

    /// Converts toward the opposite of the detected script.
    ///
    /// Mixed input converts toward the configured target; unknown input
    /// comes back unchanged with `to == from`.
    pub fn convert_auto(&self, text: &str) -> Conversion {
        let from = detect(text);

        let target = match from {
            ScriptType::Cyrillic => ScriptType::Latin,
            ScriptType::Latin => ScriptType::Cyrillic,
            ScriptType::Mixed => self.mixed_target,
            ScriptType::Unknown => {
                return Conversion {
                    original: text.to_string(),
                    converted: text.to_string(),
                    from,
                    to: from,
                };
            }
        };

        let direction = match target {
            ScriptType::Cyrillic => Direction::LatToCyr,
            _ => Direction::CyrToLat,
        };

        Conversion {
            original: text.to_string(),
            converted: apply(text, direction),
            from,
            to: target,
        }
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Converts with the default engine.
pub fn convert(text: &str, target: ScriptType) -> Result<Conversion, TranslitError> {
    Transliterator::with_defaults().convert(text, target)
}

/// Auto-converts with the default engine.
pub fn convert_auto(text: &str) -> Conversion {
    Transliterator::with_defaults().convert_auto(text)
}

/// Applies a direction's table left-to-right with greedy longest-match.
/// Unmapped characters pass through unchanged.
fn apply(text: &str, direction: Direction) -> String {
    let original: Vec<char> = text.chars().collect();
    let folded: Vec<char> = original.iter().map(|&c| fold_char(c)).collect();

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < folded.len() {
        match longest_match(direction, &folded, pos) {
            Some((len, target)) => {
                push_cased(&mut out, target, &original, pos, len);
                pos += len;
            }
            None => {
                out.push(original[pos]);
                pos += 1;
            }
        }
    }

    out
}

/// Writes `target` with the case of the matched source span restored.
fn push_cased(out: &mut String, target: &str, original: &[char], pos: usize, len: usize) {
    if target.is_empty() {
        return; // ъ and ь drop
    }

    let span = &original[pos..pos + len];
    if !span.iter().any(|c| c.is_uppercase()) {
        out.push_str(target);
        return;
    }

    if target.chars().count() == 1 || uppercase_context(original, pos, len) {
        for c in target.chars() {
            out.push(upper_char(c));
        }
        return;
    }

    // title case: uppercase head, stored tail
    let mut chars = target.chars();
    if let Some(first) = chars.next() {
        out.push(upper_char(first));
    }
    out.extend(chars);
}

/// Decides between SH and Sh for an uppercase source with a multi-char
/// target.
///
/// A multi-letter span answers from its own letters; a single letter
/// follows the nearest cased neighbour inside the same word, looking
/// ahead first. A lone letter stays title case.
fn uppercase_context(original: &[char], pos: usize, len: usize) -> bool {
    let cased = |c: char| c.is_uppercase() || c.is_lowercase();

    let span = &original[pos..pos + len];
    if span.len() > 1 {
        return span.iter().filter(|c| cased(**c)).all(|c| c.is_uppercase());
    }

    for &c in original.iter().skip(pos + len) {
        if c.is_whitespace() {
            break;
        }
        if cased(c) {
            return c.is_uppercase();
        }
    }
    for &c in original[..pos].iter().rev() {
        if c.is_whitespace() {
            break;
        }
        if cased(c) {
            return c.is_uppercase();
        }
    }

    false
}
