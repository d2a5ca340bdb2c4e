//! Negative-example exclusion: fold "should not match" items into the
//! pattern as anchored negative-lookahead guards.
//!
//! Each guard excludes only a full-string equality with the negative example
//! (`(?!^fragment$)`), never a partial overlap. A negative example whose
//! parsed fragment is textually identical to the entire current pattern is a
//! contradiction: the result becomes the never-matches sentinel `(?!)` and
//! processing stops.
//!
//! The contradiction check is syntactic, not semantic: `\d+` and `[0-9]+`
//! written as desired and negative would not be detected. Semantic regex
//! equivalence is undecidable in general and out of scope.

use crate::synth::engine;
use crate::synth::parser;
use crate::synth::sample;
use tracing::warn;

/// The sentinel pattern that matches nothing.
pub const NEVER_MATCHES: &str = "(?!)";

/// What happened while folding the negative examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionOutcome {
    /// The pattern with any guards prepended, or [`NEVER_MATCHES`].
    pub pattern: String,
    /// Negative examples that produced a guard, in input order.
    pub excluded: Vec<String>,
    /// The negative example that negated the whole pattern, if any.
    pub contradiction: Option<String>,
    /// Whether any non-blank negative example was examined at all.
    pub examined_any: bool,
}

/// Fold `negatives` into `pattern`, in input order.
pub fn apply_exclusions(pattern: String, negatives: &[String]) -> ExclusionOutcome {
    let mut pattern = pattern;
    let mut excluded = Vec::new();
    let mut examined_any = false;

    for item in negatives {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        examined_any = true;

        let fragment = parser::parse(item);
        if fragment.is_empty() {
            warn!(item, "negative example parsed to an empty fragment; skipping");
            continue;
        }

        if !pattern.trim().is_empty() && fragment == pattern {
            return ExclusionOutcome {
                pattern: NEVER_MATCHES.to_string(),
                excluded,
                contradiction: Some(item.to_string()),
                examined_any,
            };
        }

        let test_literal = sample::instantiate(item);
        if engine::matches_exactly(&pattern, &test_literal) {
            pattern = format!("(?!^{}$){}", fragment, pattern);
            excluded.push(item.to_string());
        }
    }

    ExclusionOutcome {
        pattern,
        excluded,
        contradiction: None,
        examined_any,
    }
}
