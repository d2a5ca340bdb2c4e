//! Pairwise generalizer: the narrowest fragment matching two literals.
//!
//! Resolution is an ordered rule list; the first applicable rule wins:
//!
//! 1. Either side absent -> escape the present side (empty if both absent).
//! 2. Either side empty -> escape the other side.
//! 3. Identical strings -> escape literally.
//! 4. Both digits -> `\d+`.
//! 5. Both letters -> alternation of the two escaped literals.
//! 6. Both alphanumeric -> same alternation form.
//! 7. Equal length -> position-by-position character classes.
//! 8. Different length -> alternation fallback.
//!
//! Rules 5-8 favor enumeration over blanket classes: once two literals
//! diverge structurally, a `\w+`-style wildcard would silently admit
//! unintended matches. Digits are the one class generalized to an open-ended
//! quantity, since numeric examples most commonly vary in value rather than
//! width.

use crate::synth::classify::{is_alphanumeric, is_digits, is_letters};
use crate::synth::escape::escape_regex;

/// Generalize two optional literals into a regex fragment covering both.
pub fn generalize(a: Option<&str>, b: Option<&str>) -> String {
    let (a, b) = match (a, b) {
        (None, None) => return String::new(),
        (Some(a), None) => return escape_regex(a),
        (None, Some(b)) => return escape_regex(b),
        (Some(a), Some(b)) => (a, b),
    };

    if a.is_empty() && b.is_empty() {
        return String::new();
    }
    if a.is_empty() {
        return escape_regex(b);
    }
    if b.is_empty() {
        return escape_regex(a);
    }
    if a == b {
        return escape_regex(a);
    }

    if is_digits(a) && is_digits(b) {
        return "\\d+".to_string();
    }
    if (is_letters(a) && is_letters(b)) || (is_alphanumeric(a) && is_alphanumeric(b)) {
        return alternation(a, b);
    }

    if a.chars().count() == b.chars().count() {
        return class_diff(a, b);
    }

    alternation(a, b)
}

/// Whether one of the class-level rules (shared digits, letters or
/// alphanumeric shape) resolves this pair. Callers use this to decide when
/// positional alignment is worth attempting instead.
pub fn class_rule_applies(a: &str, b: &str) -> bool {
    (is_digits(a) && is_digits(b))
        || (is_letters(a) && is_letters(b))
        || (is_alphanumeric(a) && is_alphanumeric(b))
}

/// Position-by-position diff of two equal-length strings: identical
/// characters are escaped literally, differing positions become a two
/// character class in encountered order.
pub fn class_diff(a: &str, b: &str) -> String {
    let mut fragment = String::new();
    for (ch_a, ch_b) in a.chars().zip(b.chars()) {
        if ch_a == ch_b {
            fragment.push_str(&escape_regex(&ch_a.to_string()));
        } else {
            fragment.push('[');
            fragment.push_str(&escape_regex(&ch_a.to_string()));
            fragment.push_str(&escape_regex(&ch_b.to_string()));
            fragment.push(']');
        }
    }
    fragment
}

fn alternation(a: &str, b: &str) -> String {
    format!("(?:{}|{})", escape_regex(a), escape_regex(b))
}
