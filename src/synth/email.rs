//! Email specialization: segment-wise resolution of `user@domain.tld`.
//!
//! Generic prefix/suffix diffing mishandles the semantically distinct `@` and
//! `.` separators and produces poor alternations for domains, so email-shaped
//! example pairs are split into their three segments and each segment is
//! resolved independently: through the placeholder parser when the raw
//! desired segment is itself a single smart-syntax token, and through the
//! pairwise generalizer (or the structural aligner when lengths differ and no
//! class-level rule applies) otherwise.

use crate::synth::align;
use crate::synth::pair;
use crate::synth::parser;
use crate::synth::scan;
use once_cell::sync::Lazy;
use regex::Regex;

/// The structural shape `localpart@domain.tld` with `localpart`/`domain` in
/// `[\w.-]+` and a 2-63 letter TLD.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\w.-]+)@([\w.-]+)\.([a-zA-Z]{2,63})$").expect("email shape pattern is valid")
});

/// The three segments of an email-shaped literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailParts<'a> {
    pub user: &'a str,
    pub domain: &'a str,
    pub tld: &'a str,
}

/// The raw desired example split at its literal `@` and last `.`, before any
/// placeholder resolution. Present only when the separators are unambiguous:
/// `@` not first, last `.` after the `@` with at least one character between
/// and after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailComponents<'a> {
    pub user: &'a str,
    pub domain: &'a str,
    pub tld: &'a str,
}

/// The per-segment patterns of a specialized email result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPattern {
    pub user: String,
    pub domain: String,
    pub tld: String,
}

impl EmailPattern {
    /// Assemble the full fragment with literal separators.
    pub fn assemble(&self) -> String {
        format!("{}@{}\\.{}", self.user, self.domain, self.tld)
    }
}

/// Whether `text` has the structural email shape.
pub fn is_email_like(text: &str) -> bool {
    EMAIL_SHAPE.is_match(text)
}

/// Split an email-shaped literal into its three segments.
pub fn parts(text: &str) -> Option<EmailParts<'_>> {
    EMAIL_SHAPE.captures(text).map(|caps| EmailParts {
        user: caps.get(1).map_or("", |m| m.as_str()),
        domain: caps.get(2).map_or("", |m| m.as_str()),
        tld: caps.get(3).map_or("", |m| m.as_str()),
    })
}

/// Split the raw desired example at literal separators, if unambiguous.
/// Smart syntax inside the segments is fine; smart syntax standing in for a
/// separator is not.
pub fn literal_components(input: &str) -> Option<EmailComponents<'_>> {
    let at = input.find('@')?;
    let last_dot = input.rfind('.')?;
    if at > 0 && last_dot > at + 1 && last_dot < input.len() - 1 {
        Some(EmailComponents {
            user: &input[..at],
            domain: &input[at + 1..last_dot],
            tld: &input[last_dot + 1..],
        })
    } else {
        None
    }
}

/// Resolve all three segments. `components` carries the raw desired segments
/// for the smart-syntax override; pass `None` for the pure-literal mode.
pub fn specialize(
    components: Option<&EmailComponents<'_>>,
    desired: &EmailParts<'_>,
    positive: &EmailParts<'_>,
) -> EmailPattern {
    EmailPattern {
        user: resolve_segment(components.map(|c| c.user), desired.user, positive.user),
        domain: resolve_segment(components.map(|c| c.domain), desired.domain, positive.domain),
        tld: resolve_segment(components.map(|c| c.tld), desired.tld, positive.tld),
    }
}

/// Resolve one segment: placeholder parser when the raw desired segment is a
/// single smart-syntax token, literal pair resolution otherwise.
fn resolve_segment(raw: Option<&str>, desired: &str, positive: &str) -> String {
    if let Some(raw) = raw {
        if scan::is_smart_syntax_key(raw.trim()) {
            return parser::parse(raw);
        }
    }
    resolve_literal_pair(desired, positive)
}

/// Literal pair resolution: the pairwise generalizer, except that pairs of
/// differing length which no class-level rule covers go through the
/// structural aligner to preserve shared affixes.
pub fn resolve_literal_pair(desired: &str, positive: &str) -> String {
    if desired != positive
        && !desired.is_empty()
        && !positive.is_empty()
        && !pair::class_rule_applies(desired, positive)
        && desired.chars().count() != positive.chars().count()
    {
        align::align(desired, positive).pattern()
    } else {
        pair::generalize(Some(desired), Some(positive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape_detection() {
        assert!(is_email_like("abc@gmail.com"));
        assert!(is_email_like("a.b-c@sub.domain.co"));
        assert!(!is_email_like("not-an-email"));
        assert!(!is_email_like("a@b"));
        assert!(!is_email_like("@gmail.com"));
        assert!(!is_email_like("abc@gmail.c"));
    }

    #[test]
    fn test_parts() {
        let parts = parts("abc@gmail.com").unwrap();
        assert_eq!(parts.user, "abc");
        assert_eq!(parts.domain, "gmail");
        assert_eq!(parts.tld, "com");
    }

    #[test]
    fn test_parts_with_dotted_domain() {
        let parts = parts("x@mail.example.org").unwrap();
        assert_eq!(parts.user, "x");
        assert_eq!(parts.domain, "mail.example");
        assert_eq!(parts.tld, "org");
    }

    #[test]
    fn test_literal_components() {
        let components = literal_components("{word:3,}@gmail.com").unwrap();
        assert_eq!(components.user, "{word:3,}");
        assert_eq!(components.domain, "gmail");
        assert_eq!(components.tld, "com");
    }

    #[test]
    fn test_literal_components_rejects_ambiguous_separators() {
        assert!(literal_components("@gmail.com").is_none());
        assert!(literal_components("abc@.com").is_none());
        assert!(literal_components("abc@gmail.").is_none());
        assert!(literal_components("abc.gmail").is_none());
    }

    #[test]
    fn test_specialize_literal_pair() {
        let desired = parts("abc@gmail.com").unwrap();
        let positive = parts("xyz@hotmail.com").unwrap();
        let pattern = specialize(None, &desired, &positive);
        assert_eq!(pattern.user, "(?:abc|xyz)");
        assert_eq!(pattern.domain, "(?:gmail|hotmail)");
        assert_eq!(pattern.tld, "com");
        assert_eq!(pattern.assemble(), "(?:abc|xyz)@(?:gmail|hotmail)\\.com");
    }

    #[test]
    fn test_specialize_with_smart_syntax_override() {
        let components = literal_components("{word:3,}@gmail.com").unwrap();
        let desired = parts("www@gmail.com").unwrap();
        let positive = parts("user@gmail.com").unwrap();
        let pattern = specialize(Some(&components), &desired, &positive);
        assert_eq!(pattern.user, "\\w{3,}");
        assert_eq!(pattern.domain, "gmail");
        assert_eq!(pattern.tld, "com");
    }

    #[test]
    fn test_resolve_literal_pair_aligns_shared_affixes() {
        // Differing lengths, no class rule (both contain separators), shared
        // prefix/suffix worth keeping.
        assert_eq!(
            resolve_literal_pair("user-abc.log", "user-42.log"),
            "user-(?:abc|42)\\.log"
        );
    }

    #[test]
    fn test_resolve_literal_pair_keeps_digit_widening() {
        // Differing lengths where a class rule applies stay with the
        // pairwise generalizer.
        assert_eq!(resolve_literal_pair("123", "45"), "\\d+");
    }
}
