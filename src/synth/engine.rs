//! Matching engine wrapper for pattern self-testing.
//!
//! Synthesis manipulates regexes as data and repeatedly tests candidate
//! patterns against sample strings. Those patterns may carry negative
//! lookahead guards, so the tests are hosted on a backtracking engine with
//! lookaround support. A malformed in-progress pattern must never abort a
//! synthesis call: the fallible API surfaces the failure, the infallible one
//! logs it and degrades to "no match".

use fancy_regex::Regex;
use std::fmt;
use tracing::warn;

/// Error type for engine operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The anchored pattern failed to compile.
    InvalidPattern(String),
    /// The match attempt itself failed (e.g. backtracking limit).
    MatchFailed(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidPattern(msg) => write!(f, "invalid pattern: {}", msg),
            EngineError::MatchFailed(msg) => write!(f, "match attempt failed: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

/// Test whether `pattern`, anchored at both ends, matches all of `text`.
pub fn try_matches_exactly(pattern: &str, text: &str) -> Result<bool, EngineError> {
    let anchored = format!("^({})$", pattern);
    let regex =
        Regex::new(&anchored).map_err(|err| EngineError::InvalidPattern(err.to_string()))?;
    regex
        .is_match(text)
        .map_err(|err| EngineError::MatchFailed(err.to_string()))
}

/// Like [`try_matches_exactly`], but a broken pattern is assumed to match
/// nothing. The failure is logged for diagnostics.
pub fn matches_exactly(pattern: &str, text: &str) -> bool {
    match try_matches_exactly(pattern, text) {
        Ok(matched) => matched,
        Err(err) => {
            warn!(pattern, error = %err, "pattern self-test failed; assuming no match");
            false
        }
    }
}
