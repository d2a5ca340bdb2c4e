//! Brace scanner for the smart syntax mini-language.
//!
//! Splits an input string into literal runs and recognized placeholder
//! tokens. The same scan backs both the pattern parser (which escapes
//! literals and emits registry fragments) and the sample instantiator (which
//! passes literals through and emits registry samples), so the two can never
//! disagree about where a placeholder starts or ends.
//!
//! A `{...}` span is a placeholder only when its interior matches the token
//! grammar `key[?*+]` / `key:N` / `key:N,` / `key:N,M` with `key` in
//! `[a-zA-Z0-9_]+` and the key resolves in the registry. Anything else,
//! including an unterminated `{`, degrades to a literal run; spans are never
//! dropped.

use crate::synth::registry::{self, SmartSyntaxDefinition};
use once_cell::sync::Lazy;
use regex::Regex;

/// How many times a placeholder occurrence may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// Exactly one occurrence (no suffix).
    One,
    /// `?` - zero or one.
    Optional,
    /// `*` - zero or more.
    ZeroPlus,
    /// `+` - one or more.
    OnePlus,
    /// `:N` - exactly N.
    Exactly(u32),
    /// `:N,` - at least N.
    AtLeast(u32),
    /// `:N,M` - between N and M.
    Range(u32, u32),
}

impl Quantifier {
    /// The regex suffix this quantifier appends to a fragment.
    pub fn suffix(&self) -> String {
        match self {
            Quantifier::One => String::new(),
            Quantifier::Optional => "?".to_string(),
            Quantifier::ZeroPlus => "*".to_string(),
            Quantifier::OnePlus => "+".to_string(),
            Quantifier::Exactly(n) => format!("{{{}}}", n),
            Quantifier::AtLeast(n) => format!("{{{},}}", n),
            Quantifier::Range(n, m) => format!("{{{},{}}}", n, m),
        }
    }

    /// How many copies of the registry sample an instantiated placeholder
    /// contributes. Counted quantifiers repeat the sample so that the sample
    /// string satisfies its own anchored pattern; all others contribute one.
    pub fn sample_count(&self) -> u32 {
        match self {
            Quantifier::Exactly(n) | Quantifier::AtLeast(n) | Quantifier::Range(n, _) => *n,
            _ => 1,
        }
    }
}

/// A recognized placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// The key as written (case preserved).
    pub key: String,
    pub quantifier: Quantifier,
}

/// One piece of a scanned input string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Literal text, including any `{...}` span that did not resolve to a
    /// placeholder.
    Literal(&'a str),
    /// A recognized placeholder with its registry definition.
    Placeholder {
        token: PlaceholderToken,
        definition: &'static SmartSyntaxDefinition,
    },
}

/// Token grammar for a brace interior.
///
/// Group 1: key, group 2: simple quantifier (`?*+`), group 3: N, group 4: M
/// (present and empty for `:N,`, absent for `:N`).
static TOKEN_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9_]+)(?:([?*+])|:(\d+)(?:,(\d*))?)?$")
        .expect("token grammar is valid")
});

/// Any `{...}` span with a non-empty interior, recognized or not.
static BRACE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]+\}").expect("brace span pattern is valid"));

/// Whether `input` contains any `{...}` span.
///
/// This deliberately reports `true` for spans that will *not* resolve (such as
/// `{bogus}`): the caller treats any braced input as a smart-syntax attempt
/// and the scanner degrades unknown spans to literals later.
pub fn contains_smart_syntax(input: &str) -> bool {
    BRACE_SPAN.is_match(input)
}

/// Whether `candidate` is a single `{key...}` span whose key resolves in the
/// registry. Quantifier syntax after the key is not validated here; this is a
/// coarse test used to decide per-segment smart-syntax overrides.
pub fn is_smart_syntax_key(candidate: &str) -> bool {
    let interior = match candidate
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(interior) => interior,
        None => return false,
    };
    let key = interior
        .split(|ch| matches!(ch, ':' | '?' | '*' | '+'))
        .next()
        .unwrap_or("");
    registry::lookup(key).is_some()
}

/// Scan `input` into literal and placeholder segments.
pub fn scan(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        if input[pos..].starts_with('{') {
            match input[pos..].find('}') {
                // No closing brace: the rest of the input is literal.
                None => {
                    segments.push(Segment::Literal(&input[pos..]));
                    break;
                }
                Some(offset) => {
                    let close = pos + offset;
                    let interior = &input[pos + 1..close];
                    match resolve(interior) {
                        Some((token, definition)) => {
                            segments.push(Segment::Placeholder { token, definition });
                        }
                        None => segments.push(Segment::Literal(&input[pos..=close])),
                    }
                    pos = close + 1;
                }
            }
        } else {
            let end = input[pos..]
                .find('{')
                .map(|offset| pos + offset)
                .unwrap_or(input.len());
            segments.push(Segment::Literal(&input[pos..end]));
            pos = end;
        }
    }
    segments
}

/// Match a brace interior against the token grammar and the registry.
fn resolve(interior: &str) -> Option<(PlaceholderToken, &'static SmartSyntaxDefinition)> {
    let caps = TOKEN_GRAMMAR.captures(interior)?;
    let key = caps.get(1)?.as_str();
    let definition = registry::lookup(key)?;

    let quantifier = if let Some(simple) = caps.get(2) {
        match simple.as_str() {
            "?" => Quantifier::Optional,
            "*" => Quantifier::ZeroPlus,
            "+" => Quantifier::OnePlus,
            _ => return None,
        }
    } else if let Some(n) = caps.get(3) {
        let n: u32 = n.as_str().parse().ok()?;
        match caps.get(4) {
            None => Quantifier::Exactly(n),
            Some(m) if m.as_str().is_empty() => Quantifier::AtLeast(n),
            Some(m) => Quantifier::Range(n, m.as_str().parse().ok()?),
        }
    } else {
        Quantifier::One
    };

    Some((
        PlaceholderToken {
            key: key.to_string(),
            quantifier,
        },
        definition,
    ))
}
