//! # `promptform` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                   | What it provides                                                        |
//! |-------------------------|-------------------------------------------------------------------------|
//! | **`promptform-core`**   | Field metadata registry, schema synthesis, typed response decoding      |
//! | **`promptform-prompt`** | Fluent text builder and the create/modify/list prompt composers         |
//!
//! The workflow: declare a type's fields once via [`PromptSchema`], compose
//! an instruction with one of the [`prompt`] variants, send it to whatever
//! model transport you use, and decode the reply with [`codec`].
//!
//! ## Design philosophy
//!
//! * **No procedural macros** – field registration is an ordinary trait
//!   `impl`, so the whole pipeline works without magic.
//! * **One serializer, both directions** – schemas and example payloads are
//!   rendered by the same `serde_json` configuration the decoder reads, so
//!   what the model was shown is exactly what parses back.
//! * **Constraints are prompt contract, not gate** – declared ranges and
//!   patterns are surfaced to the model; decoding never re-checks them.
//!
//! ## Quick example
//!
//! ```rust
//! use promptform::{FieldSpec, JsonType, PromptSchema};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Task {
//!     title: String,
//!     done: bool,
//! }
//!
//! impl PromptSchema for Task {
//!     const TYPE_NAME: &'static str = "Task";
//!
//!     fn field_specs() -> Vec<FieldSpec> {
//!         vec![
//!             FieldSpec::new("title", JsonType::String)
//!                 .name("Title")
//!                 .describe("Short task summary"),
//!             FieldSpec::new("done", JsonType::Boolean)
//!                 .name("Done")
//!                 .describe("Completion state"),
//!         ]
//!     }
//! }
//!
//! let instruction = promptform::prompt::create_prompt::<Task>(None).unwrap();
//! assert!(instruction.contains("\"title\""));
//!
//! // ... send `instruction` to a model, then:
//! let task: Task =
//!     promptform::codec::parse_response(r#"{"title": "ship it", "done": false}"#).unwrap();
//! assert_eq!(task.title, "ship it");
//! ```
#![doc(html_root_url = "https://docs.rs/promptform/latest")]

pub use promptform_core::*;
pub use promptform_prompt as prompt;
