//! Explanation accumulator.
//!
//! The explanation is an append-only audit trail of which rules fired during
//! a synthesis call. Additions are separated by sentence terminators: if the
//! current text does not already end with `.`, `?` or `!`, a period is
//! inserted before the next addition.

/// A sentence-terminating explanation builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanation {
    text: String,
}

impl Explanation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole explanation.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append an addition, terminating the previous sentence first.
    pub fn append(&mut self, addition: &str) {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            self.text = addition.to_string();
            return;
        }
        let mut text = trimmed.to_string();
        if !text.ends_with('.') && !text.ends_with('?') && !text.ends_with('!') {
            text.push('.');
        }
        text.push(' ');
        text.push_str(addition);
        self.text = text;
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
