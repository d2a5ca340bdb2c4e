//! Boundary wire types.
//!
//! The JSON contract consumed from and returned to the UI layer:
//! `{desiredMatches, shouldMatch, shouldNotMatch}` in,
//! `{generatedRegex, regexExplanation}` out. `shouldMatch` and
//! `shouldNotMatch` accept either a single string or a list of strings;
//! normalization trims entries and discards blanks. A blank `desiredMatches`
//! is rejected here, before the core runs.

use crate::synth::processor::{ExampleSet, SynthesisResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for request validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// `desiredMatches` was missing or blank.
    MissingDesired,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingDesired => {
                write!(f, "desiredMatches is required and must be a non-empty string")
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// A field that accepts one string or many.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// A synthesis request as received from the boundary layer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub desired_matches: String,
    #[serde(default)]
    pub should_match: OneOrMany,
    #[serde(default)]
    pub should_not_match: OneOrMany,
}

impl GenerateRequest {
    /// Validate and normalize into an [`ExampleSet`].
    pub fn into_example_set(self) -> Result<ExampleSet, RequestError> {
        ExampleSet::new(
            self.desired_matches,
            self.should_match.into_vec(),
            self.should_not_match.into_vec(),
        )
    }
}

/// A synthesis response as returned to the boundary layer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub generated_regex: String,
    pub regex_explanation: String,
}

impl From<SynthesisResult> for GenerateResponse {
    fn from(result: SynthesisResult) -> Self {
        Self {
            generated_regex: result.pattern,
            regex_explanation: result.explanation,
        }
    }
}
