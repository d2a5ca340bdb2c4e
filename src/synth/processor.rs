//! Synthesis orchestrator.
//!
//! Selects how the desired example is turned into a pattern via an ordered,
//! first-match-wins rule table, then applies the fallback invariant and the
//! negative-example exclusions. The rule identifiers keep the precedence
//! order auditable and testable independently of pattern assembly.
//!
//! Only the first positive example ever participates in generalization;
//! further positives are acknowledged in the explanation.

use crate::synth::align;
use crate::synth::email::{self, EmailComponents};
use crate::synth::engine;
use crate::synth::escape::escape_regex;
use crate::synth::exclusion::{self, NEVER_MATCHES};
use crate::synth::explain::Explanation;
use crate::synth::pair;
use crate::synth::parser;
use crate::synth::request::RequestError;
use crate::synth::sample;
use crate::synth::scan;
use tracing::{debug, warn};

/// The normalized input of one synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSet {
    /// The required seed example. Kept as provided (not trimmed) so literal
    /// whitespace survives into the pattern; must be non-blank.
    pub desired: String,
    /// "Should match" examples, trimmed and with blanks discarded. Only the
    /// first drives generalization; the rest are acknowledged.
    pub positives: Vec<String>,
    /// "Should not match" examples, trimmed and with blanks discarded. All
    /// are enforced.
    pub negatives: Vec<String>,
}

impl ExampleSet {
    pub fn new(
        desired: impl Into<String>,
        positives: Vec<String>,
        negatives: Vec<String>,
    ) -> Result<Self, RequestError> {
        let desired = desired.into();
        if desired.trim().is_empty() {
            return Err(RequestError::MissingDesired);
        }
        Ok(Self {
            desired,
            positives: normalize_list(positives),
            negatives: normalize_list(negatives),
        })
    }
}

fn normalize_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// The outcome of one synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    /// An unanchored regex body, or the `(?!)` never-matches sentinel.
    pub pattern: String,
    /// The audit trail of which rules fired.
    pub explanation: String,
}

/// Named synthesis rules, tried in declaration order; the first whose
/// predicate holds wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisRule {
    /// Smart-syntax segments inside a literal `@`/`.` email structure,
    /// resolved per segment against an email-shaped positive example.
    EmailHybrid,
    /// Email-shaped smart syntax without clean literal separators; the whole
    /// string goes to the placeholder parser, the positive example is only
    /// checked for compatibility.
    EmailSmartWhole,
    /// Two literal email-shaped examples, generalized per segment.
    EmailLiteralPair,
    /// Email-shaped smart syntax with no usable email positive.
    EmailSmartOnly,
    /// A literal email desired example with no email positive.
    EmailLiteralOnly,
    /// Non-email smart syntax; the placeholder parser owns the result.
    SmartSyntax,
    /// A literal desired example with a positive example to diff against.
    LiteralWithPositive,
    /// A literal desired example on its own.
    LiteralOnly,
}

impl SynthesisRule {
    /// All rules in precedence order.
    pub const ORDER: &'static [SynthesisRule] = &[
        SynthesisRule::EmailHybrid,
        SynthesisRule::EmailSmartWhole,
        SynthesisRule::EmailLiteralPair,
        SynthesisRule::EmailSmartOnly,
        SynthesisRule::EmailLiteralOnly,
        SynthesisRule::SmartSyntax,
        SynthesisRule::LiteralWithPositive,
        SynthesisRule::LiteralOnly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SynthesisRule::EmailHybrid => "email_hybrid",
            SynthesisRule::EmailSmartWhole => "email_smart_whole",
            SynthesisRule::EmailLiteralPair => "email_literal_pair",
            SynthesisRule::EmailSmartOnly => "email_smart_only",
            SynthesisRule::EmailLiteralOnly => "email_literal_only",
            SynthesisRule::SmartSyntax => "smart_syntax",
            SynthesisRule::LiteralWithPositive => "literal_with_positive",
            SynthesisRule::LiteralOnly => "literal_only",
        }
    }

    fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        match self {
            SynthesisRule::EmailHybrid => {
                ctx.desired_uses_smart
                    && ctx.desired_email
                    && ctx.positive_email
                    && ctx.desired_components.is_some()
            }
            SynthesisRule::EmailSmartWhole => {
                ctx.desired_uses_smart && ctx.desired_email && ctx.positive_email
            }
            SynthesisRule::EmailLiteralPair => {
                !ctx.desired_uses_smart && ctx.desired_email && ctx.positive_email
            }
            SynthesisRule::EmailSmartOnly => ctx.desired_uses_smart && ctx.desired_email,
            SynthesisRule::EmailLiteralOnly => ctx.desired_email,
            SynthesisRule::SmartSyntax => ctx.desired_uses_smart,
            SynthesisRule::LiteralWithPositive => ctx.first_positive().is_some(),
            SynthesisRule::LiteralOnly => true,
        }
    }
}

/// Precomputed facts the rule predicates and applications share.
struct RuleContext<'a> {
    examples: &'a ExampleSet,
    desired_uses_smart: bool,
    positive_uses_smart: bool,
    /// The desired example with placeholders instantiated (or as-is).
    desired_example: String,
    /// The first positive example with placeholders instantiated (or as-is).
    positive_example: Option<String>,
    desired_email: bool,
    positive_email: bool,
    /// The raw desired example split at literal `@`/`.` separators.
    desired_components: Option<EmailComponents<'a>>,
}

impl<'a> RuleContext<'a> {
    fn new(examples: &'a ExampleSet) -> Self {
        let desired_uses_smart = scan::contains_smart_syntax(&examples.desired);
        let first_positive = examples.positives.first().map(String::as_str);
        let positive_uses_smart = first_positive
            .map(scan::contains_smart_syntax)
            .unwrap_or(false);

        let desired_example = if desired_uses_smart {
            sample::instantiate(&examples.desired)
        } else {
            examples.desired.clone()
        };
        let positive_example = first_positive.map(|positive| {
            if positive_uses_smart {
                sample::instantiate(positive)
            } else {
                positive.to_string()
            }
        });

        let desired_email = email::is_email_like(&desired_example);
        let positive_email = positive_example
            .as_deref()
            .map(email::is_email_like)
            .unwrap_or(false);
        let desired_components = email::literal_components(&examples.desired);

        Self {
            examples,
            desired_uses_smart,
            positive_uses_smart,
            desired_example,
            positive_example,
            desired_email,
            positive_email,
            desired_components,
        }
    }

    fn first_positive(&self) -> Option<&str> {
        self.examples.positives.first().map(String::as_str)
    }
}

/// One rule's pattern and explanation before exclusions.
struct Draft {
    pattern: String,
    explanation: Explanation,
    /// Whether the first positive example actually drove generalization.
    generalized: bool,
}

/// Synthesize a pattern and explanation from `examples`.
pub fn synthesize(examples: &ExampleSet) -> SynthesisResult {
    let ctx = RuleContext::new(examples);
    let rule = select_rule(&ctx);
    debug!(rule = rule.name(), "selected synthesis rule");

    let draft = apply_rule(rule, &ctx);
    let mut pattern = draft.pattern;
    let mut explanation = draft.explanation;

    if draft.generalized && examples.positives.len() > 1 {
        explanation
            .append("(Note: Only the first 'Should Match' example is used for this generalization).");
    }

    // The fallback invariant: a non-blank desired example must never be lost
    // to an empty pattern, unless it legitimately parses to a pure anchor.
    let parsed_desired = parser::parse(&examples.desired);
    let anchor_only = matches!(parsed_desired.as_str(), "" | "^" | "$" | "^$");

    if pattern.trim().is_empty() && !examples.desired.trim().is_empty() && !anchor_only {
        pattern = escape_regex(&examples.desired);
        explanation
            .append("(Fallback to literal desired match as previous steps resulted in an empty regex).");
    }

    let outcome = exclusion::apply_exclusions(pattern, &examples.negatives);
    pattern = outcome.pattern;
    if let Some(item) = &outcome.contradiction {
        explanation.set(format!(
            "Contradiction: The 'Should Not Match' item \"{}\" directly negates the entire pattern. The regex will not match anything.",
            item
        ));
    } else if !outcome.excluded.is_empty() {
        let quoted: Vec<String> = outcome
            .excluded
            .iter()
            .map(|item| format!("\"{}\"", item))
            .collect();
        explanation.append(&format!("Actively excluded cases: {}.", quoted.join(", ")));
    } else if outcome.examined_any {
        explanation.append(
            "All 'Should Not Match' cases were already avoided by the generated regex or the base regex was effectively empty.",
        );
    }

    // Re-check the fallback invariant after exclusion processing. The
    // contradiction sentinel and its explanation are preserved verbatim.
    if pattern.trim().is_empty() && !examples.desired.trim().is_empty() && !anchor_only {
        pattern = escape_regex(&examples.desired);
        explanation.set(format!(
            "Matches the literal string: \"{}\" (final fallback as regex was empty).",
            examples.desired
        ));
    } else if pattern == NEVER_MATCHES && outcome.contradiction.is_some() {
        // Contradiction explanation already set.
    } else if pattern.trim().is_empty() && anchor_only {
        let keep_note = explanation.is_empty()
            || explanation
                .as_str()
                .starts_with("Matches the literal string:")
            || explanation.as_str().ends_with(
                "(Fallback to literal desired match as previous steps resulted in an empty regex).",
            );
        if keep_note {
            explanation.append(&format!(
                "The regex matches an empty string or specific position based on input like \"{}\".",
                examples.desired
            ));
        }
    }

    SynthesisResult {
        pattern,
        explanation: explanation.into_string(),
    }
}

/// Pick the first rule in precedence order whose predicate holds.
fn select_rule(ctx: &RuleContext<'_>) -> SynthesisRule {
    SynthesisRule::ORDER
        .iter()
        .copied()
        .find(|rule| rule.applies(ctx))
        .unwrap_or(SynthesisRule::LiteralOnly)
}

fn apply_rule(rule: SynthesisRule, ctx: &RuleContext<'_>) -> Draft {
    match rule {
        SynthesisRule::EmailHybrid => apply_email_hybrid(ctx),
        SynthesisRule::EmailSmartWhole => apply_email_smart_whole(ctx),
        SynthesisRule::EmailLiteralPair => apply_email_literal_pair(ctx),
        SynthesisRule::EmailSmartOnly => apply_email_smart_only(ctx),
        SynthesisRule::EmailLiteralOnly => apply_email_literal_only(ctx),
        SynthesisRule::SmartSyntax => apply_smart_syntax(ctx),
        SynthesisRule::LiteralWithPositive => apply_literal_with_positive(ctx),
        SynthesisRule::LiteralOnly => apply_literal_only(ctx),
    }
}

fn apply_email_hybrid(ctx: &RuleContext<'_>) -> Draft {
    let components = ctx
        .desired_components
        .as_ref()
        .expect("hybrid email rule requires literal separators");
    let desired_parts = email::parts(&ctx.desired_example)
        .expect("hybrid email rule requires an email-shaped desired example");
    let positive_example = ctx
        .positive_example
        .as_deref()
        .expect("hybrid email rule requires a positive example");
    let positive_parts = email::parts(positive_example)
        .expect("hybrid email rule requires an email-shaped positive example");

    let email_pattern = email::specialize(Some(components), &desired_parts, &positive_parts);
    let mut explanation = Explanation::new();
    explanation.set(format!(
        "Generalized as a hybrid email pattern. User: {}, Domain: {}, TLD: {}. Derived from \"Desired Matches\" (\"{}\") and \"Should Match\" (\"{}\").",
        email_pattern.user,
        email_pattern.domain,
        email_pattern.tld,
        ctx.examples.desired,
        ctx.first_positive().unwrap_or_default()
    ));

    Draft {
        pattern: email_pattern.assemble(),
        explanation,
        generalized: true,
    }
}

fn apply_email_smart_whole(ctx: &RuleContext<'_>) -> Draft {
    let pattern = parser::parse(&ctx.examples.desired);
    let first = ctx.first_positive().unwrap_or_default();
    let positive_example = ctx.positive_example.as_deref().unwrap_or_default();

    let mut explanation = Explanation::new();
    explanation.set(format!(
        "Regex constructed from Smart Syntax in \"Desired Matches\" (\"{}\"), which appears to define an email structure.",
        ctx.examples.desired
    ));
    match engine::try_matches_exactly(&pattern, positive_example) {
        Ok(true) => explanation.append(&format!(
            "The \"Should Match\" example (\"{}\") is compatible with this regex.",
            first
        )),
        Ok(false) => explanation.append(&format!(
            "The \"Should Match\" example (\"{}\") is NOT compatible. The regex remains based on \"Desired Matches\" Smart Syntax.",
            first
        )),
        Err(err) => {
            warn!(pattern = %pattern, error = %err, "could not test positive example against smart syntax pattern");
            explanation.append(
                "Could not test \"Should Match\" example due to an error. Regex based on \"Desired Matches\" Smart Syntax.",
            );
        }
    }

    Draft {
        pattern,
        explanation,
        generalized: false,
    }
}

fn apply_email_literal_pair(ctx: &RuleContext<'_>) -> Draft {
    let desired_parts = email::parts(&ctx.desired_example)
        .expect("literal email rule requires an email-shaped desired example");
    let positive_example = ctx
        .positive_example
        .as_deref()
        .expect("literal email rule requires a positive example");
    let positive_parts = email::parts(positive_example)
        .expect("literal email rule requires an email-shaped positive example");

    let email_pattern = email::specialize(None, &desired_parts, &positive_parts);
    let mut explanation = Explanation::new();
    explanation.set(format!(
        "Generalized as an email pattern from literal examples \"{}\" and \"{}\". User: {}, Domain: {}, TLD: {}.",
        ctx.examples.desired,
        ctx.first_positive().unwrap_or_default(),
        email_pattern.user,
        email_pattern.domain,
        email_pattern.tld
    ));

    Draft {
        pattern: email_pattern.assemble(),
        explanation,
        generalized: true,
    }
}

fn apply_email_smart_only(ctx: &RuleContext<'_>) -> Draft {
    let pattern = parser::parse(&ctx.examples.desired);
    let mut explanation = Explanation::new();
    explanation.set(format!(
        "Regex constructed from Smart Syntax in \"Desired Matches\" (\"{}\"), which defines an email structure.",
        ctx.examples.desired
    ));
    if let Some(first) = ctx.first_positive() {
        explanation.append(&format!(
            "The \"Should Match\" example (\"{}\") was not email-like or not suitable for combined email generalization.",
            first
        ));
    }

    Draft {
        pattern,
        explanation,
        generalized: false,
    }
}

fn apply_email_literal_only(ctx: &RuleContext<'_>) -> Draft {
    let pattern = escape_regex(&ctx.examples.desired);
    let mut explanation = Explanation::new();
    explanation.set(format!(
        "Matches the literal email string: \"{}\".",
        ctx.examples.desired
    ));
    if let Some(first) = ctx.first_positive() {
        explanation.append(&format!(
            "The \"Should Match\" example (\"{}\") was not email-like or not suitable for structural generalization with the email.",
            first
        ));
    } else {
        explanation
            .append("No \"Should Match\" example provided to generalize the email structure.");
    }

    Draft {
        pattern,
        explanation,
        generalized: false,
    }
}

fn apply_smart_syntax(ctx: &RuleContext<'_>) -> Draft {
    let pattern = parser::parse(&ctx.examples.desired);
    let mut explanation = Explanation::new();
    explanation.set(format!(
        "Regex constructed from Smart Syntax in \"Desired Matches\": \"{}\".",
        ctx.examples.desired
    ));
    if let Some(first) = ctx.first_positive() {
        explanation.append(&format!(
            "The \"Should Match\" example (\"{}\") was also considered. Since \"Desired Matches\" uses Smart Syntax and no structural email generalization was applied, the regex is primarily based on the Smart Syntax.",
            first
        ));
    }

    Draft {
        pattern,
        explanation,
        generalized: false,
    }
}

fn apply_literal_with_positive(ctx: &RuleContext<'_>) -> Draft {
    let desired = &ctx.examples.desired;
    let first = ctx
        .first_positive()
        .expect("literal pair rule requires a positive example");

    let mut pattern = escape_regex(desired);
    let mut explanation = Explanation::new();
    let mut generalized = false;
    explanation.set(format!("Matches the literal string: \"{}\".", desired));
    explanation.append(&format!(
        "Considering \"Should Match\" example: \"{}\".",
        first
    ));

    if ctx.positive_uses_smart {
        explanation.append(
            "It uses Smart Syntax. Generalizing a literal \"Desired Match\" with a Smart Syntax \"Should Match\" is complex; the regex currently remains based on the literal \"Desired Match\".",
        );
    } else if desired == first {
        explanation.append("It is identical to \"Desired Matches\".");
    } else if desired.chars().count() == first.chars().count() {
        pattern = pair::class_diff(desired, first);
        explanation.append("Generalized character-by-character differences.");
        generalized = true;
    } else {
        let alignment = align::align(desired, first);
        pattern = alignment.pattern();
        explanation.append(&format!(
            "Generalized based on common prefix/suffix. Prefix: \"{}\", Middle: {}, Suffix: \"{}\".",
            alignment.prefix, alignment.middle, alignment.suffix
        ));
        if alignment.wildcard_rescued {
            explanation.append(
                "Middle part further generalized with a wildcard as specific generalization was not possible.",
            );
        }
        generalized = true;
    }

    Draft {
        pattern,
        explanation,
        generalized,
    }
}

fn apply_literal_only(ctx: &RuleContext<'_>) -> Draft {
    let pattern = escape_regex(&ctx.examples.desired);
    let mut explanation = Explanation::new();
    explanation.set(format!(
        "Matches the literal string: \"{}\".",
        ctx.examples.desired
    ));

    Draft {
        pattern,
        explanation,
        generalized: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn examples(desired: &str, positives: &[&str], negatives: &[&str]) -> ExampleSet {
        ExampleSet::new(
            desired,
            positives.iter().map(|s| s.to_string()).collect(),
            negatives.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    fn selected(desired: &str, positives: &[&str]) -> SynthesisRule {
        let set = examples(desired, positives, &[]);
        let ctx = RuleContext::new(&set);
        select_rule(&ctx)
    }

    #[test]
    fn test_rule_selection_precedence() {
        assert_eq!(
            selected("{word:3,}@gmail.com", &["xyz@gmail.com"]),
            SynthesisRule::EmailHybrid
        );
        assert_eq!(
            selected("abc@gmail.com", &["xyz@hotmail.com"]),
            SynthesisRule::EmailLiteralPair
        );
        assert_eq!(
            selected("{word+}@{word+}.{alpha:3}", &["not-an-email"]),
            SynthesisRule::EmailSmartOnly
        );
        assert_eq!(selected("abc@gmail.com", &[]), SynthesisRule::EmailLiteralOnly);
        assert_eq!(selected("User{num+}", &["User123"]), SynthesisRule::SmartSyntax);
        assert_eq!(selected("abc", &["abd"]), SynthesisRule::LiteralWithPositive);
        assert_eq!(selected("abc", &[]), SynthesisRule::LiteralOnly);
    }

    #[test]
    fn test_email_smart_whole_selected_without_literal_separators() {
        // The whole desired example is one placeholder whose sample is
        // email-shaped, so there is no literal @/. structure to split on.
        let set = examples("{url}", &["ok@example.com"], &[]);
        let ctx = RuleContext::new(&set);
        // {url}'s sample is not email-shaped, so this falls through to the
        // generic smart syntax rule instead.
        assert_eq!(select_rule(&ctx), SynthesisRule::SmartSyntax);
    }

    #[test]
    fn test_literal_only_synthesis() {
        let result = synthesize(&examples("a.b", &[], &[]));
        assert_eq!(result.pattern, "a\\.b");
        assert_eq!(result.explanation, "Matches the literal string: \"a.b\".");
    }

    #[test]
    fn test_smart_syntax_synthesis() {
        let result = synthesize(&examples("User{num+}", &["User123"], &[]));
        assert_eq!(result.pattern, "User\\d+");
        assert!(result
            .explanation
            .starts_with("Regex constructed from Smart Syntax in \"Desired Matches\": \"User{num+}\"."));
        assert!(result.explanation.contains("primarily based on the Smart Syntax"));
    }

    #[test]
    fn test_literal_pair_equal_length() {
        let result = synthesize(&examples("item-A", &["item_B"], &[]));
        assert_eq!(result.pattern, "item[-_][AB]");
        assert!(result
            .explanation
            .contains("Generalized character-by-character differences."));
    }

    #[test]
    fn test_literal_pair_identical() {
        let result = synthesize(&examples("abc", &["abc"], &[]));
        assert_eq!(result.pattern, "abc");
        assert!(result.explanation.contains("It is identical to \"Desired Matches\"."));
    }

    #[test]
    fn test_literal_pair_differing_lengths() {
        let result = synthesize(&examples("item-123", &["item-9"], &[]));
        assert_eq!(result.pattern, "item-\\d+");
        assert!(result
            .explanation
            .contains("Generalized based on common prefix/suffix. Prefix: \"item-\", Middle: \\d+, Suffix: \"\"."));
    }

    #[test]
    fn test_literal_pair_with_smart_positive_keeps_literal() {
        let result = synthesize(&examples("abc", &["{word+}"], &[]));
        assert_eq!(result.pattern, "abc");
        assert!(result.explanation.contains("It uses Smart Syntax."));
    }

    #[test]
    fn test_multiple_positives_note() {
        let result = synthesize(&examples("item-A", &["item_B", "item_C"], &[]));
        assert!(result
            .explanation
            .contains("(Note: Only the first 'Should Match' example is used for this generalization)."));
    }

    #[test]
    fn test_no_multiple_positives_note_without_generalization() {
        let result = synthesize(&examples("User{num+}", &["User123", "User456"], &[]));
        assert!(!result.explanation.contains("Only the first 'Should Match'"));
    }

    #[test]
    fn test_contradiction_sets_sentinel_and_explanation() {
        let result = synthesize(&examples("abc", &[], &["abc"]));
        assert_eq!(result.pattern, NEVER_MATCHES);
        assert_eq!(
            result.explanation,
            "Contradiction: The 'Should Not Match' item \"abc\" directly negates the entire pattern. The regex will not match anything."
        );
    }

    #[test]
    fn test_redundant_exclusion_is_reported() {
        let result = synthesize(&examples("warning", &[], &["error"]));
        assert_eq!(result.pattern, "warning");
        assert!(result
            .explanation
            .contains("All 'Should Not Match' cases were already avoided"));
    }

    #[test]
    fn test_applied_exclusion_is_reported() {
        let result = synthesize(&examples("{word+}", &[], &["abc"]));
        assert_eq!(result.pattern, "(?!^abc$)\\w+");
        assert!(result.explanation.contains("Actively excluded cases: \"abc\"."));
    }

    #[test]
    fn test_anchor_only_desired_gets_position_note() {
        let result = synthesize(&examples("{sol}{eol}", &[], &[]));
        assert_eq!(result.pattern, "^$");
        // Pattern is non-empty, so no extra position note is appended.
        assert!(result
            .explanation
            .starts_with("Regex constructed from Smart Syntax"));
    }

    #[test]
    fn test_email_literal_only_with_non_email_positive() {
        let result = synthesize(&examples("abc@gmail.com", &["not-an-email"], &[]));
        assert_eq!(result.pattern, "abc@gmail\\.com");
        assert!(result
            .explanation
            .starts_with("Matches the literal email string: \"abc@gmail.com\"."));
        assert!(result
            .explanation
            .contains("was not email-like or not suitable for structural generalization"));
    }

    #[test]
    fn test_email_hybrid_synthesis() {
        let result = synthesize(&examples("{word:3,}@gmail.com", &["xyz@hotmail.com"], &[]));
        assert_eq!(result.pattern, "\\w{3,}@(?:gmail|hotmail)\\.com");
        assert!(result
            .explanation
            .starts_with("Generalized as a hybrid email pattern."));
    }
}
