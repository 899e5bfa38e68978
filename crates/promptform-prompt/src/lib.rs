//! # `promptform-prompt`
//!
//! Instruction-text assembly for the Promptform workspace: a fluent
//! [`builder::PromptBuilder`] for ordered segment concatenation and the
//! [`composer`] functions that turn a registered type's schema plus optional
//! payloads into a complete model instruction.

pub mod builder;
pub mod composer;

pub use builder::PromptBuilder;
pub use composer::{create_prompt, create_prompt_with_preamble, list_modify_prompt, modify_prompt};
