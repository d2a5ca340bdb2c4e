//! Smart syntax registry
//!
//! The static table of placeholder keys and the regex fragment, description
//! and sample string each one stands for. Keys are looked up
//! case-insensitively. The table is data, not code: adding a placeholder is a
//! new row, never a new branch.
//!
//! Every fragment is a standalone regex atom, so it composes safely under
//! quantification (`{num+}` becomes `\d+`) and inside alternations.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A single placeholder definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartSyntaxDefinition {
    /// The regex fragment emitted for this placeholder.
    pub fragment: &'static str,
    /// Human-readable description, surfaced by the CLI `keys` listing.
    pub description: &'static str,
    /// A concrete string matching `fragment`, used to build sample test
    /// strings. Position placeholders (`sol`, `eol`) contribute nothing.
    pub sample: &'static str,
}

/// Placeholder definitions in listing order.
const DEFINITIONS: &[(&str, SmartSyntaxDefinition)] = &[
    (
        "alpha",
        SmartSyntaxDefinition {
            fragment: "[a-zA-Z]",
            description: "any alphabet letter (a-z, A-Z)",
            sample: "a",
        },
    ),
    (
        "lower",
        SmartSyntaxDefinition {
            fragment: "[a-z]",
            description: "any lowercase letter",
            sample: "x",
        },
    ),
    (
        "upper",
        SmartSyntaxDefinition {
            fragment: "[A-Z]",
            description: "any uppercase letter",
            sample: "X",
        },
    ),
    (
        "num",
        SmartSyntaxDefinition {
            fragment: "\\d",
            description: "any digit (0-9)",
            sample: "1",
        },
    ),
    (
        "digit",
        SmartSyntaxDefinition {
            fragment: "\\d",
            description: "any digit (0-9)",
            sample: "2",
        },
    ),
    (
        "alphanum",
        SmartSyntaxDefinition {
            fragment: "[a-zA-Z0-9]",
            description: "any letter or digit",
            sample: "b",
        },
    ),
    (
        "word",
        SmartSyntaxDefinition {
            fragment: "\\w",
            description: "any word character (alphanumeric plus underscore)",
            sample: "w",
        },
    ),
    (
        "symbol",
        SmartSyntaxDefinition {
            fragment: "[^A-Za-z0-9\\s]",
            description: "common symbols",
            sample: "$",
        },
    ),
    (
        "space",
        SmartSyntaxDefinition {
            fragment: "\\s",
            description: "any whitespace character",
            sample: " ",
        },
    ),
    (
        "whitespace",
        SmartSyntaxDefinition {
            fragment: "\\s",
            description: "any whitespace character",
            sample: "\t",
        },
    ),
    (
        "any",
        SmartSyntaxDefinition {
            fragment: ".",
            description: "any single character (except newline)",
            sample: "*",
        },
    ),
    (
        "sol",
        SmartSyntaxDefinition {
            fragment: "^",
            description: "start of line",
            sample: "",
        },
    ),
    (
        "eol",
        SmartSyntaxDefinition {
            fragment: "$",
            description: "end of line",
            sample: "",
        },
    ),
    (
        "url",
        SmartSyntaxDefinition {
            fragment: "https?://(?:www\\.)?[-a-zA-Z0-9@:%._\\+~#=]{1,256}\\.[a-zA-Z0-9()]{1,6}\\b(?:[-a-zA-Z0-9()@:%_\\+.~#?&//=]*)",
            description: "a URL (e.g., http://example.com)",
            sample: "http://example.com",
        },
    ),
    (
        "ipv4",
        SmartSyntaxDefinition {
            fragment: "(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)",
            description: "an IPv4 address (e.g., 192.168.1.1)",
            sample: "192.168.1.1",
        },
    ),
];

static INDEX: Lazy<HashMap<&'static str, &'static SmartSyntaxDefinition>> =
    Lazy::new(|| DEFINITIONS.iter().map(|(key, def)| (*key, def)).collect());

/// Look up a placeholder definition by key, case-insensitively.
pub fn lookup(key: &str) -> Option<&'static SmartSyntaxDefinition> {
    let lowered = key.to_ascii_lowercase();
    INDEX.get(lowered.as_str()).copied()
}

/// All placeholder definitions in stable listing order.
pub fn definitions() -> impl Iterator<Item = (&'static str, &'static SmartSyntaxDefinition)> {
    DEFINITIONS.iter().map(|(key, def)| (*key, def))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_key() {
        let def = lookup("num").unwrap();
        assert_eq!(def.fragment, "\\d");
        assert_eq!(def.sample, "1");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("NUM"), lookup("num"));
        assert_eq!(lookup("Alpha"), lookup("alpha"));
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert!(lookup("bogus").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_position_placeholders_have_empty_samples() {
        assert_eq!(lookup("sol").unwrap().sample, "");
        assert_eq!(lookup("eol").unwrap().sample, "");
    }

    #[test]
    fn test_listing_order_is_stable() {
        let keys: Vec<&str> = definitions().map(|(key, _)| key).collect();
        assert_eq!(keys.first(), Some(&"alpha"));
        assert_eq!(keys.last(), Some(&"ipv4"));
        assert_eq!(keys.len(), 15);
    }

    #[test]
    fn test_every_nonempty_sample_matches_its_fragment() {
        for (key, def) in definitions() {
            if def.sample.is_empty() {
                continue;
            }
            let anchored = format!("^(?:{})+$", def.fragment);
            let regex = regex::Regex::new(&anchored)
                .unwrap_or_else(|e| panic!("fragment for {{{}}} must compile: {}", key, e));
            assert!(
                regex.is_match(def.sample),
                "sample {:?} must match fragment for {{{}}}",
                def.sample,
                key
            );
        }
    }
}
