//! Regex metacharacter escaping for literal text.

/// Escape every regex metacharacter in `text` so the result matches `text`
/// literally.
///
/// The escape set is the set of characters that carry meaning in the emitted
/// pattern dialect: `. * + ? ^ $ { } ( ) | [ ] \`.
pub fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_metacharacter(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn is_metacharacter(ch: char) -> bool {
    matches!(
        ch,
        '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
    )
}
