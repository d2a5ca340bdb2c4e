//! Property-based tests for the smart syntax layer
//!
//! These properties pin down the degradation guarantees: parsing never
//! panics, literal input round-trips through escaping, and the pattern
//! parsed from brace-free input matches exactly that input.

use proptest::prelude::*;
use rexgen::synth::engine;
use rexgen::synth::escape::escape_regex;
use rexgen::synth::parser::parse;
use rexgen::synth::sample::instantiate;

proptest! {
    /// Parsing and instantiation accept arbitrary input without panicking.
    #[test]
    fn parse_never_panics(input in "\\PC*") {
        let _ = parse(&input);
        let _ = instantiate(&input);
    }

    /// Brace-free input is pure literal text: the parse equals the escape
    /// and the instantiation is the identity.
    #[test]
    fn brace_free_input_is_literal(input in "[^{}]*") {
        prop_assert_eq!(parse(&input), escape_regex(&input));
        prop_assert_eq!(instantiate(&input), input);
    }

    /// The pattern parsed from brace-free input matches exactly that input.
    #[test]
    fn literal_pattern_matches_its_source(input in "[^{}]{1,40}") {
        prop_assert!(engine::matches_exactly(&parse(&input), &input));
    }

    /// A counted digit placeholder produces a pattern that accepts exactly
    /// the requested width.
    #[test]
    fn counted_digit_width(n in 1u32..8) {
        let pattern = parse(&format!("{{digit:{}}}", n));
        let sample = "7".repeat(n as usize);
        prop_assert!(engine::matches_exactly(&pattern, &sample));
        prop_assert!(!engine::matches_exactly(&pattern, &"7".repeat(n as usize + 1)));
    }
}
