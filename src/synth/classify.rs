//! Character classification predicates.
//!
//! Used to pick a semantic generalization for a pair of literals before
//! falling back to positional diffing.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("digits pattern is valid"));
static LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("letters pattern is valid"));
static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+$").expect("alphanumeric pattern is valid"));

/// Whether `text` is one or more digits.
pub fn is_digits(text: &str) -> bool {
    DIGITS.is_match(text)
}

/// Whether `text` is one or more ASCII letters.
pub fn is_letters(text: &str) -> bool {
    LETTERS.is_match(text)
}

/// Whether `text` is one or more word characters (letters, digits,
/// underscore).
pub fn is_alphanumeric(text: &str) -> bool {
    ALPHANUMERIC.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert!(is_digits("123"));
        assert!(!is_digits("12a"));
        assert!(!is_digits(""));
    }

    #[test]
    fn test_letters() {
        assert!(is_letters("abc"));
        assert!(is_letters("AbC"));
        assert!(!is_letters("ab1"));
        assert!(!is_letters(""));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("user_1"));
        assert!(is_alphanumeric("abc"));
        assert!(is_alphanumeric("123"));
        assert!(!is_alphanumeric("a-b"));
        assert!(!is_alphanumeric(""));
    }
}
