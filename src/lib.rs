//! # rexgen
//!
//! A library that synthesizes a single regular expression from a small set of
//! example strings: one required "desired" example, optional positive examples
//! ("should match") and optional negative examples ("should not match").
//!
//! The desired example may use *smart syntax* placeholders such as `{num+}` or
//! `{word:3,}` that stand in for predefined regex fragments; everything else is
//! treated as literal text. The first positive example drives generalization,
//! and negative examples are folded into the result as anchored
//! negative-lookahead guards.
//!
//! See the [synthesis module](synth) for the full pipeline.

pub mod synth;
