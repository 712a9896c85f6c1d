//! Text repairs for almost-JSON
//!
//! Fixes the malformations models actually produce: invalid escape
//! sequences, raw control characters inside string values, and trailing
//! commas. Every pass is string-aware so repairs never touch structure.

/// Applies the full repair chain.
///
/// String contents are fixed first so the comma pass sees clean quoting.
pub fn repair(text: &str) -> String {
    let cleaned = fix_strings(text);
    fix_trailing_commas(&cleaned)
}

/// In-string repairs: drops backslashes that do not start a valid JSON
/// escape, collapses raw newlines and tabs to a single space, strips the
/// remaining control characters.
fn fix_strings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if !in_string {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
            continue;
        }

        match c {
            '"' => {
                in_string = false;
                out.push(c);
            }
            '\\' => match chars.peek() {
                Some(&next) if is_valid_escape(next) => {
                    out.push(c);
                    out.push(next);
                    chars.next();
                }
                // invalid escape: drop the backslash, the escaped char
                // is handled on the next iteration
                _ => {}
            },
            '\n' | '\r' | '\t' => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            c if (c as u32) < 0x20 => {
                // other raw control characters are dropped
            }
            c => out.push(c),
        }
    }

    out
}

fn is_valid_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')
}

/// Removes trailing commas before `}` or `]`, outside strings.
fn fix_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
            continue;
        }

        if c == ',' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '}' || chars[j] == ']') {
                // drop the comma, keep the whitespace
                i += 1;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    out
}
