//! Test support helpers.
//!
//! Assertions over synthesized patterns, shared by unit and integration
//! tests. Patterns are compiled anchored (`^(...)$`) on the same
//! lookahead-capable engine the synthesis core tests itself with, so a
//! pattern carrying exclusion guards asserts the same way a plain one does.

use fancy_regex::Regex;

/// Whether `pattern`, anchored at both ends, matches all of `text`.
/// Panics on a pattern that does not compile: tests must not silently pass
/// over a malformed result.
pub fn matches_exactly(pattern: &str, text: &str) -> bool {
    let anchored = format!("^({})$", pattern);
    let regex = Regex::new(&anchored)
        .unwrap_or_else(|err| panic!("pattern /{}/ failed to compile: {}", anchored, err));
    regex
        .is_match(text)
        .unwrap_or_else(|err| panic!("matching /{}/ against {:?} failed: {}", anchored, text, err))
}

/// Assert that `pattern` matches `text` exactly.
pub fn assert_matches_exactly(pattern: &str, text: &str) {
    assert!(
        matches_exactly(pattern, text),
        "pattern /{}/ should match {:?}",
        pattern,
        text
    );
}

/// Assert that `pattern` does not match `text` exactly.
pub fn assert_rejects(pattern: &str, text: &str) {
    assert!(
        !matches_exactly(pattern, text),
        "pattern /{}/ should not match {:?}",
        pattern,
        text
    );
}
