//! Script classification
//!
//! Counts alphabet-specific code points and classifies a span as
//! Cyrillic, Latin, mixed, or unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::alphabet::{is_cyrillic_letter, is_latin_letter};

/// Writing system of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    /// Karakalpak Cyrillic orthography
    Cyrillic,
    /// Karakalpak Latin orthography (2016)
    Latin,
    /// Both alphabets present in equal measure
    Mixed,
    /// No letters from either alphabet
    Unknown,
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScriptType::Cyrillic => "cyrillic",
            ScriptType::Latin => "latin",
            ScriptType::Mixed => "mixed",
            ScriptType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ScriptType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cyrillic" => Ok(ScriptType::Cyrillic),
            "latin" => Ok(ScriptType::Latin),
            "mixed" => Ok(ScriptType::Mixed),
            "unknown" => Ok(ScriptType::Unknown),
            _ => Err(format!("unknown script name: {}", s)),
        }
    }
}

/// Counts (Cyrillic, Latin) letters in a span. Characters outside both
/// alphabets count toward neither.
pub fn script_counts(text: &str) -> (usize, usize) {
    let mut cyrillic = 0;
    let mut latin = 0;

    for c in text.chars() {
        if is_cyrillic_letter(c) {
            cyrillic += 1;
        } else if is_latin_letter(c) {
            latin += 1;
        }
    }

    (cyrillic, latin)
}

/// Classifies a span by its letter counts.
///
/// No letters from either alphabet gives `Unknown`; a strict majority
/// wins; a nonzero tie gives `Mixed`.
pub fn detect(text: &str) -> ScriptType {
    let (cyrillic, latin) = script_counts(text);

    if cyrillic == 0 && latin == 0 {
        ScriptType::Unknown
    } else if cyrillic > latin {
        ScriptType::Cyrillic
    } else if latin > cyrillic {
        ScriptType::Latin
    } else {
        ScriptType::Mixed
    }
}

/// Share of Cyrillic letters among classified letters (0.0 ~ 1.0).
///
/// 0.0 when the span contains no letters from either alphabet.
pub fn cyrillic_ratio(text: &str) -> f32 {
    let (cyrillic, latin) = script_counts(text);
    let total = cyrillic + latin;

    if total == 0 {
        return 0.0;
    }

    cyrillic as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_cyrillic() {
        assert_eq!(detect("сәлем бол"), ScriptType::Cyrillic);
        assert_eq!(detect("Нөкис қаласы"), ScriptType::Cyrillic);
        assert_eq!(detect("ў"), ScriptType::Cyrillic);
    }

    #[test]
    fn test_detect_latin() {
        assert_eq!(detect("sałamat bolıń"), ScriptType::Latin);
        assert_eq!(detect("Qaraqalpaqstan"), ScriptType::Latin);
        assert_eq!(detect("ǵárezsizlik"), ScriptType::Latin);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect("12345 !!!"), ScriptType::Unknown);
        assert_eq!(detect(""), ScriptType::Unknown);
        assert_eq!(detect("... 42 ..."), ScriptType::Unknown);
        assert_eq!(detect("日本語"), ScriptType::Unknown);
    }

    #[test]
    fn test_detect_mixed_on_tie() {
        // three letters each
        assert_eq!(detect("бар bar"), ScriptType::Mixed);
        assert_eq!(detect("aб"), ScriptType::Mixed);
    }

    #[test]
    fn test_detect_majority_wins() {
        // one Latin letter drowned by Cyrillic
        assert_eq!(detect("сәлем w"), ScriptType::Cyrillic);
        // one Cyrillic letter drowned by Latin
        assert_eq!(detect("salem ш"), ScriptType::Latin);
    }

    #[test]
    fn test_detect_deterministic() {
        let text = "Aralıq teńiz бойы";
        assert_eq!(detect(text), detect(text));
    }

    #[test]
    fn test_script_counts() {
        assert_eq!(script_counts("сәлем"), (5, 0));
        assert_eq!(script_counts("salem"), (0, 5));
        assert_eq!(script_counts("с a 1 !"), (1, 1));
        assert_eq!(script_counts(""), (0, 0));
    }

    #[test]
    fn test_cyrillic_ratio() {
        assert_eq!(cyrillic_ratio("сәлем"), 1.0);
        assert_eq!(cyrillic_ratio("salem"), 0.0);
        assert_eq!(cyrillic_ratio("12345"), 0.0);
        assert!((cyrillic_ratio("бар b") - 0.75).abs() < 0.01);
    }

    #[test]
    fn test_script_type_display_round_trip() {
        for script in [
            ScriptType::Cyrillic,
            ScriptType::Latin,
            ScriptType::Mixed,
            ScriptType::Unknown,
        ] {
            let parsed: ScriptType = script.to_string().parse().unwrap();
            assert_eq!(parsed, script);
        }
        assert!("klingon".parse::<ScriptType>().is_err());
    }

    #[test]
    fn test_script_type_serde() {
        assert_eq!(
            serde_json::to_string(&ScriptType::Cyrillic).unwrap(),
            "\"cyrillic\""
        );
        let parsed: ScriptType = serde_json::from_str("\"latin\"").unwrap();
        assert_eq!(parsed, ScriptType::Latin);
    }
}
