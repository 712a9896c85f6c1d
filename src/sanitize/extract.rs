//! Candidate extraction from raw model output
//!
//! Pulls a JSON object out of the chatter around it: code-fence markers,
//! leading prose, and trailing explanations.

/// Removes Markdown code-fence markers (```json and ```) and trims.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Extracts the first balanced `{...}` block.
///
/// Walks from the first `{` tracking string and escape state, so braces
/// inside string values never count toward nesting depth. Returns `None`
/// when no balanced object closes (truncated responses).
pub fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
