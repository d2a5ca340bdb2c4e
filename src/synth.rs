//! Pattern synthesis from example strings
//!
//! This module contains the whole regex-by-example pipeline:
//!
//! 1. The smart syntax layer ([`registry`], [`scan`], [`parser`], [`sample`])
//!    turns `{key[quantifier]}` placeholders into regex fragments, or into a
//!    concrete sample string used for self-testing.
//! 2. The generalization layer ([`classify`], [`pair`], [`align`]) computes
//!    the narrowest fragment covering two literal examples.
//! 3. The email specialization ([`email`]) resolves `user@domain.tld` shaped
//!    examples segment by segment.
//! 4. The exclusion layer ([`exclusion`]) folds negative examples into
//!    anchored negative-lookahead guards.
//! 5. The orchestrator ([`processor`]) selects which of the above applies via
//!    an ordered first-match-wins rule table and assembles the final pattern
//!    together with a human-readable explanation.
//!
//! Internal self-testing of candidate patterns goes through [`engine`], which
//! hosts a lookahead-capable regex engine and degrades compile failures to
//! "no match" instead of aborting a synthesis call.

pub mod align;
pub mod classify;
pub mod email;
pub mod engine;
pub mod escape;
pub mod exclusion;
pub mod explain;
pub mod pair;
pub mod parser;
pub mod processor;
pub mod registry;
pub mod request;
pub mod sample;
pub mod scan;
pub mod testing;

pub use processor::{synthesize, ExampleSet, SynthesisResult, SynthesisRule};
pub use request::{GenerateRequest, GenerateResponse, RequestError};
