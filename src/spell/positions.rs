//! Word-position back-filling
//!
//! Model results name words but not where they sit. Offsets are
//! recovered by scanning the original text left to right.

use crate::script::alphabet::{fold, fold_char};

use super::result::SpellCheckResult;

/// A whitespace-delimited token with char offsets into the source text.
struct Token {
    /// Offset of the punctuation-stripped core
    start: usize,
    /// One past the stripped core
    end: usize,
    /// Stripped, case-folded form used for matching
    folded: String,
}

/// Computes `start`/`end` for each result against the original text.
///
/// Tokens are whitespace-delimited; matching strips surrounding
/// punctuation and ignores case. A cursor advances past each match so
/// duplicate words resolve in document order. Unmatched words fall back
/// to `start = 0, end = word length` in chars.
pub fn fill_positions(text: &str, results: &mut [SpellCheckResult]) {
    let tokens = tokenize(text);
    let mut cursor = 0;

    for result in results.iter_mut() {
        let needle = fold(strip_punctuation(&result.word));

        let hit = if needle.is_empty() {
            None
        } else {
            tokens[cursor..]
                .iter()
                .position(|token| token.folded == needle)
                .map(|offset| cursor + offset)
        };

        match hit {
            Some(i) => {
                result.start = tokens[i].start;
                result.end = tokens[i].end;
                cursor = i + 1;
            }
            None => {
                result.start = 0;
                result.end = result.word.chars().count();
            }
        }
    }
}

/// Splits on whitespace, keeping char offsets of each token's
/// punctuation-stripped core. Pure-punctuation tokens can never match
/// and are skipped.
fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                push_token(&mut tokens, &chars, s, i);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        push_token(&mut tokens, &chars, s, chars.len());
    }

    tokens
}

fn push_token(tokens: &mut Vec<Token>, chars: &[char], start: usize, end: usize) {
    let mut s = start;
    let mut e = end;
    while s < e && !chars[s].is_alphanumeric() {
        s += 1;
    }
    while e > s && !chars[e - 1].is_alphanumeric() {
        e -= 1;
    }
    if s == e {
        return;
    }

    tokens.push(Token {
        start: s,
        end: e,
        folded: chars[s..e].iter().map(|&c| fold_char(c)).collect(),
    });
}

/// Trims non-alphanumeric characters from both ends.
fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}
