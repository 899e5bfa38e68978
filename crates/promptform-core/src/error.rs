//! Unified error type exposed by **`promptform-core`**.
//!
//! Every fallible operation in the workspace returns these variants directly,
//! so callers can match once and decide how to react. The two decode variants
//! are deliberately separate: [`PromptformError::MalformedResponse`] usually
//! means the model ignored the format directive and a retry of the model call
//! is worthwhile, while [`PromptformError::ResponseMismatch`] points at a
//! schema/type disagreement in the calling code, which no retry will fix.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PromptformError>;

#[derive(Debug, Error)]
pub enum PromptformError {
    /// A registered field declaration violates one of the metadata rules
    /// (see `registry::field_metas`). Carries the declaring type, the field
    /// identifier and the violated rule. The type stays broken for the rest
    /// of the process until its declaration is fixed.
    #[error("invalid field configuration [{type_name}.{field}]: {reason}")]
    Configuration {
        type_name: &'static str,
        field: &'static str,
        reason: &'static str,
    },

    /// A value (schema tree, example or original payload) could not be
    /// serialized to JSON.
    #[error("failed to serialize payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The model response is not syntactically valid JSON. Retrying the
    /// model call is a reasonable reaction.
    #[error("model response is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The model response parsed as JSON but cannot be turned into the
    /// target type. This indicates a schema/type mismatch on the caller
    /// side, not a flaky model.
    #[error("model response does not match the target type: {0}")]
    ResponseMismatch(#[source] serde_json::Error),
}
