//! Placeholder parser: smart syntax input to a regex body.
//!
//! Literal runs are escaped, recognized placeholders emit their registry
//! fragment plus the quantifier suffix. Parsing never fails; unparseable
//! spans have already degraded to literals in the scanner.

use crate::synth::escape::escape_regex;
use crate::synth::scan::{scan, Segment};

/// Parse a smart syntax string into an unanchored regex body.
pub fn parse(input: &str) -> String {
    let mut pattern = String::new();
    for segment in scan(input) {
        match segment {
            Segment::Literal(text) => pattern.push_str(&escape_regex(text)),
            Segment::Placeholder { token, definition } => {
                pattern.push_str(definition.fragment);
                pattern.push_str(&token.quantifier.suffix());
            }
        }
    }
    pattern
}
