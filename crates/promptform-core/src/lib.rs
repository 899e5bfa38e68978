//! # `promptform-core`
//!
//! Core machinery for the Promptform workspace: declarative per-field
//! metadata, a process-wide memoizing registry, prompt-oriented schema
//! synthesis and typed decoding of model responses.
//!
//! The pipeline reads left to right:
//!
//! ```text
//! PromptSchema impl ──► registry (cached FieldMeta map)
//!                              │
//!                              ▼
//!                       schema tree (ordered JSON)
//!                              │
//!        promptform-prompt ────┤  (instruction text, external model call)
//!                              ▼
//!                       codec::parse_response ──► typed value
//! ```
//!
//! Everything is a synchronous in-memory computation; the model call itself
//! lives outside this workspace. See the individual modules for details and
//! examples.

pub mod codec;
pub mod error;
pub mod field;
pub mod registry;
pub mod schema;

pub use error::{PromptformError, Result};
pub use field::{Constraints, DEFAULT_PATTERN_MESSAGE, FieldKind, FieldSpec, JsonType, ModifyPolicy};
pub use registry::{FieldMeta, FieldMetaMap, PromptSchema, field_metas};
pub use schema::{list_schema_for, schema_for};
