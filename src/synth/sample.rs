//! Sample instantiator: smart syntax input to a concrete literal string.
//!
//! Uses the same scan as the parser but substitutes each recognized
//! placeholder with its registry sample instead of a pattern fragment.
//! Position placeholders contribute the empty string, counted quantifiers
//! repeat the sample, and unrecognized spans pass through unchanged. The
//! result is only ever used to self-test candidate patterns; it never appears
//! in an emitted pattern.

use crate::synth::scan::{scan, Segment};

/// Produce a concrete string standing in for `input`.
pub fn instantiate(input: &str) -> String {
    let mut literal = String::new();
    for segment in scan(input) {
        match segment {
            Segment::Literal(text) => literal.push_str(text),
            Segment::Placeholder { token, definition } => {
                for _ in 0..token.quantifier.sample_count() {
                    literal.push_str(definition.sample);
                }
            }
        }
    }
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_input_is_unchanged() {
        assert_eq!(instantiate("warning"), "warning");
        assert_eq!(instantiate("a.b{c"), "a.b{c");
    }

    #[test]
    fn test_placeholder_substitution() {
        assert_eq!(instantiate("{num}"), "1");
        assert_eq!(instantiate("User{num+}"), "User1");
        assert_eq!(instantiate("{alpha}{upper}"), "aX");
    }

    #[test]
    fn test_counted_quantifiers_repeat_the_sample() {
        assert_eq!(instantiate("{digit:3}"), "222");
        assert_eq!(instantiate("{num:2,}"), "11");
        assert_eq!(instantiate("{num:2,4}"), "11");
        assert_eq!(instantiate("{num:0}"), "");
    }

    #[test]
    fn test_position_placeholders_contribute_nothing() {
        assert_eq!(instantiate("{sol}abc{eol}"), "abc");
        assert_eq!(instantiate("{sol}{eol}"), "");
    }

    #[test]
    fn test_unknown_placeholder_passes_through() {
        assert_eq!(instantiate("{bogus}"), "{bogus}");
    }

    #[test]
    fn test_email_shaped_smart_syntax() {
        assert_eq!(instantiate("{word:3,}@gmail.com"), "www@gmail.com");
    }
}
