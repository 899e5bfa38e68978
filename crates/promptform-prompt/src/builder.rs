//! Builder‐style helper for assembling instruction text from ordered
//! segments.
//!
//! Composed prompts are a fixed sequence of segments: a format directive
//! with the schema, optional labeled payload blocks, and a closing
//! instruction. `PromptBuilder` keeps that assembly linear and explicit —
//! every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use promptform_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_line("Respond with JSON matching this schema:")
//!     .add_line("{ \"done\": { \"type\": \"boolean\" } }")
//!     .add_labeled_payload("Example response", "{ \"done\": true }")
//!     .add_blank_line()
//!     .add_line("Generate the data from the current conversation context.")
//!     .finalize();
//!
//! assert!(text.starts_with("Respond with JSON"));
//! assert!(text.contains("Example response:"));
//! ```
//!
//! The builder performs no validation besides `expect`ing that writing to
//! the internal `String` never fails (which it shouldn't), and it never
//! smart-formats: newlines and whitespace come out exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper that accumulates prompt segments into a `String` buffer.
///
/// Call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a labeled payload block: a blank separator, `<label>:` on its own
    /// line, then the payload verbatim.
    ///
    /// Used for the example and original-data segments; the payload is the
    /// serializer's output and is embedded untouched so the model sees the
    /// exact textual form the decoder will read back.
    pub fn add_labeled_payload(self, label: impl Display, payload: impl Display) -> Self {
        self.add_blank_line()
            .add_line(format!("{label}:"))
            .add_line(payload)
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_come_out_in_order() {
        let text = PromptBuilder::new()
            .add_line("first")
            .add_line("second")
            .finalize();
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn labeled_payload_keeps_the_payload_verbatim() {
        let payload = "{\n  \"a\": 1\n}";
        let text = PromptBuilder::new()
            .add_line("head")
            .add_labeled_payload("Original data", payload)
            .finalize();
        assert_eq!(text, format!("head\n\nOriginal data:\n{payload}\n"));
    }
}
