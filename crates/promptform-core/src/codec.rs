//! The one serializer both sides of the pipeline share.
//!
//! Payloads embedded into prompts are rendered here, and model output is
//! parsed back here, so a value that round-trips through a prompt decodes
//! to an equal value. Decoding is pure coercion: the declared constraints
//! are never checked against decoded values.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::{PromptformError, Result};

/// Pretty-print a single payload for embedding into a prompt.
pub fn render_payload<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(PromptformError::Serialization)
}

/// Render a list payload in compact form. Lists tend to be long, so they are
/// kept on one line instead of pretty-printed.
pub fn render_list_payload<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items).map_err(PromptformError::Serialization)
}

/// Parse a model response into a single value of type `T`.
pub fn parse_response<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(classify)
}

/// Parse a model response into a list of `T`.
///
/// Models frequently return no content at all for an empty result set, so
/// both an absent response and a blank one decode to an empty vector rather
/// than an error.
pub fn parse_list_response<T: DeserializeOwned>(text: Option<&str>) -> Result<Vec<T>> {
    let Some(text) = text else {
        return Ok(Vec::new());
    };
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(classify)
}

/// Split decode failures so callers can pick a retry policy: syntactically
/// broken text is the model's fault, a data mismatch is the caller's.
fn classify(err: serde_json::Error) -> PromptformError {
    match err.classify() {
        Category::Data => PromptformError::ResponseMismatch(err),
        _ => PromptformError::MalformedResponse(err),
    }
}
