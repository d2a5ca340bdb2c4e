//! Structural aligner: common prefix/suffix plus a generalized middle.
//!
//! For two literals of differing shape, strip the longest common prefix and
//! the longest common suffix (the suffix search never overlaps the prefix),
//! then delegate the remaining middles to the pairwise generalizer. When the
//! generalizer yields an empty middle while content remains on either side,
//! a non-greedy wildcard keeps both examples covered instead of silently
//! dropping the content.

use crate::synth::escape::escape_regex;
use crate::synth::pair;

/// The outcome of aligning two literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Longest common prefix (raw text).
    pub prefix: String,
    /// Generalized middle fragment (already a regex body).
    pub middle: String,
    /// Longest common suffix (raw text).
    pub suffix: String,
    /// Whether the middle had to be rescued with `.+?`.
    pub wildcard_rescued: bool,
}

impl Alignment {
    /// The assembled fragment: escaped prefix, middle, escaped suffix.
    pub fn pattern(&self) -> String {
        format!(
            "{}{}{}",
            escape_regex(&self.prefix),
            self.middle,
            escape_regex(&self.suffix)
        )
    }
}

/// Align two literals around their common prefix and suffix.
pub fn align(a: &str, b: &str) -> Alignment {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prefix_len = 0;
    while prefix_len < a_chars.len()
        && prefix_len < b_chars.len()
        && a_chars[prefix_len] == b_chars[prefix_len]
    {
        prefix_len += 1;
    }

    // Suffix scan is bounded by the prefix so that the two regions never
    // claim the same character.
    let mut suffix_len = 0;
    while suffix_len < a_chars.len() - prefix_len
        && suffix_len < b_chars.len() - prefix_len
        && a_chars[a_chars.len() - 1 - suffix_len] == b_chars[b_chars.len() - 1 - suffix_len]
    {
        suffix_len += 1;
    }

    let prefix: String = a_chars[..prefix_len].iter().collect();
    let suffix: String = a_chars[a_chars.len() - suffix_len..].iter().collect();
    let mid_a: String = a_chars[prefix_len..a_chars.len() - suffix_len].iter().collect();
    let mid_b: String = b_chars[prefix_len..b_chars.len() - suffix_len].iter().collect();

    let mut middle = pair::generalize(Some(&mid_a), Some(&mid_b));
    let mut wildcard_rescued = false;
    if middle.is_empty() && (!mid_a.is_empty() || !mid_b.is_empty()) {
        middle = ".+?".to_string();
        wildcard_rescued = true;
    }

    Alignment {
        prefix,
        middle,
        suffix,
        wildcard_rescued,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_middle_widens() {
        let alignment = align("item-123", "item-9");
        assert_eq!(alignment.prefix, "item-");
        assert_eq!(alignment.middle, "\\d+");
        assert_eq!(alignment.suffix, "");
        assert_eq!(alignment.pattern(), "item-\\d+");
    }

    #[test]
    fn test_prefix_and_suffix() {
        let alignment = align("log_alpha.txt", "log_beta12.txt");
        assert_eq!(alignment.prefix, "log_");
        assert_eq!(alignment.suffix, ".txt");
        assert_eq!(alignment.middle, "(?:alpha|beta12)");
        assert_eq!(alignment.pattern(), "log_(?:alpha|beta12)\\.txt");
    }

    #[test]
    fn test_no_common_affixes_delegates_whole_strings() {
        let alignment = align("123", "45");
        assert_eq!(alignment.prefix, "");
        assert_eq!(alignment.suffix, "");
        assert_eq!(alignment.pattern(), "\\d+");
    }

    #[test]
    fn test_suffix_never_overlaps_prefix() {
        // "aaa" vs "aa": prefix claims both characters of the shorter string,
        // leaving nothing for the suffix scan.
        let alignment = align("aaa", "aa");
        assert_eq!(alignment.prefix, "aa");
        assert_eq!(alignment.suffix, "");
        assert_eq!(alignment.middle, "a");
    }

    #[test]
    fn test_wildcard_rescue_flag_defaults_off() {
        let alignment = align("abc-1", "abd-2");
        assert!(!alignment.wildcard_rescued);
    }
}
