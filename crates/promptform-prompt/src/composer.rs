//! Composes the instruction text that accompanies a schema: the create
//! variant, the modify-in-place variant and the list variant.
//!
//! Every composed prompt is the same ordered segment sequence:
//!
//! 1. the strict-format directive with the rendered schema,
//! 2. an optional labeled example payload,
//! 3. an optional labeled original-data payload (modify variants only),
//! 4. a closing instruction pointing the model at the conversation context
//!    (and, for modify variants, at preserving unchanged data).
//!
//! The wording lives in the segment constants below and may be swapped for
//! a localized set; the segment order and their conditional presence are
//! the contract. Schema, example and original payloads are all rendered
//! through [`promptform_core::codec`], the same serializer the decoder
//! reads with, so a payload embedded here decodes back to an equal value.

use promptform_core::codec::{render_list_payload, render_payload};
use promptform_core::error::Result;
use promptform_core::registry::PromptSchema;
use promptform_core::schema::{list_schema_for, schema_for};
use serde::Serialize;

use crate::builder::PromptBuilder;

/// Segment 1: strict response format, no prose, no code fences.
const STRICT_FORMAT_DIRECTIVE: &str = "Respond with JSON that strictly matches the following \
     schema. Output nothing but the JSON payload itself: no surrounding text and no ```json \
     code fences.";

/// Label for the optional example payload block.
const EXAMPLE_LABEL: &str = "Example response";

/// Label for the optional original-data payload block.
const ORIGINAL_LABEL: &str = "Original data";

/// Segment 4 for the create variants.
const CREATE_CLOSING: &str = "Generate the data from the current conversation context.";

/// Segment 4 for the modify variant.
const MODIFY_CLOSING: &str = "Modify the original data according to the current conversation \
     context, preserving every field that needs no change.";

/// Segment 4 for the list variant.
const LIST_MODIFY_CLOSING: &str = "Modify the original elements according to the current \
     conversation context, preserving every element that needs no change.";

/// Compose a create prompt for a single `T`, optionally showing `example`
/// as a reference payload.
pub fn create_prompt<T>(example: Option<&T>) -> Result<String>
where
    T: PromptSchema + Serialize,
{
    let schema = render_payload(&schema_for::<T>()?)?;
    let example = example.map(render_payload).transpose()?;
    Ok(assemble(None, &schema, example, None, CREATE_CLOSING))
}

/// Compose a create prompt with a caller-supplied task preamble ahead of
/// the format directive. Useful when the surrounding conversation does not
/// already state the task.
pub fn create_prompt_with_preamble<T>(preamble: &str, example: Option<&T>) -> Result<String>
where
    T: PromptSchema + Serialize,
{
    let schema = render_payload(&schema_for::<T>()?)?;
    let example = example.map(render_payload).transpose()?;
    Ok(assemble(Some(preamble), &schema, example, None, CREATE_CLOSING))
}

/// Compose a modify-in-place prompt for a single `T`. When `original` is
/// present its payload is embedded so the model can edit it; the closing
/// instruction tells the model to keep unchanged fields as they are.
pub fn modify_prompt<T>(example: Option<&T>, original: Option<&T>) -> Result<String>
where
    T: PromptSchema + Serialize,
{
    let schema = render_payload(&schema_for::<T>()?)?;
    let example = example.map(render_payload).transpose()?;
    let original = original.map(render_payload).transpose()?;
    Ok(assemble(None, &schema, example, original, MODIFY_CLOSING))
}

/// Compose the list counterpart of [`modify_prompt`]: the schema is the
/// array form, payloads are rendered sequences, and empty sequences are
/// treated as absent.
pub fn list_modify_prompt<T>(examples: Option<&[T]>, originals: Option<&[T]>) -> Result<String>
where
    T: PromptSchema + Serialize,
{
    let schema = render_payload(&list_schema_for::<T>()?)?;
    let examples = examples
        .filter(|items| !items.is_empty())
        .map(render_list_payload)
        .transpose()?;
    let originals = originals
        .filter(|items| !items.is_empty())
        .map(render_list_payload)
        .transpose()?;
    Ok(assemble(None, &schema, examples, originals, LIST_MODIFY_CLOSING))
}

/// Ordered segment concatenation shared by all variants.
fn assemble(
    preamble: Option<&str>,
    schema: &str,
    example: Option<String>,
    original: Option<String>,
    closing: &'static str,
) -> String {
    let mut builder = PromptBuilder::new();
    if let Some(preamble) = preamble {
        builder = builder.add_line(preamble).add_blank_line();
    }
    builder = builder.add_line(STRICT_FORMAT_DIRECTIVE).add_line(schema);
    if let Some(example) = example {
        builder = builder.add_labeled_payload(EXAMPLE_LABEL, example);
    }
    if let Some(original) = original {
        builder = builder.add_labeled_payload(ORIGINAL_LABEL, original);
    }
    builder.add_blank_line().add_line(closing).finalize()
}
