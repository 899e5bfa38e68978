//! Per-field declaration types: the author-facing [`FieldSpec`] and the small
//! enums that classify a field's value and modification behaviour.
//!
//! A [`FieldSpec`] is the Rust counterpart of a field annotation: one
//! immutable record per field, written once by the type's author and consumed
//! by the metadata registry. The fluent builder keeps declarations compact:
//!
//! ```rust
//! use promptform_core::field::{FieldSpec, JsonType, ModifyPolicy};
//!
//! let spec = FieldSpec::new("amount", JsonType::Integer)
//!     .name("Amount")
//!     .describe("Total order amount in cents")
//!     .min(0)
//!     .max(10_000)
//!     .modify(ModifyPolicy::AuditRequired);
//!
//! assert_eq!(spec.field(), "amount");
//! ```
//!
//! Nothing here validates anything; the rules (required fields need a name,
//! read-only implies required, min ≤ max) are enforced by the registry when
//! a type's metadata is first derived.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Fallback text attached to a pattern constraint when the author does not
/// supply one.
pub const DEFAULT_PATTERN_MESSAGE: &str = "field validation failed";

/// Governs whether and how a field may be altered by a modification request.
///
/// The serialized form is the SCREAMING_SNAKE_CASE policy name, which is also
/// what ends up in schema nodes (`modifyPolicy` / `modifiable`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModifyPolicy {
    /// The field may be changed freely.
    Allow,
    /// The field must never be changed.
    ReadOnly,
    /// The field may change only under conditions enforced elsewhere.
    Conditional,
    /// Changes to the field require an approval step.
    AuditRequired,
}

impl ModifyPolicy {
    /// Canonical policy name as embedded in schema nodes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifyPolicy::Allow => "ALLOW",
            ModifyPolicy::ReadOnly => "READ_ONLY",
            ModifyPolicy::Conditional => "CONDITIONAL",
            ModifyPolicy::AuditRequired => "AUDIT_REQUIRED",
        }
    }
}

impl Display for ModifyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The JSON value type a field is expected to hold in the model response.
///
/// Rust has no runtime reflection, so the author states the value type when
/// declaring the field. The lowercase name becomes the `type` attribute of
/// the field's schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Integer,
    Number,
    Boolean,
    Enum,
    String,
}

impl JsonType {
    /// Lowercase type name as embedded in schema nodes.
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Enum => "enum",
            JsonType::String => "string",
        }
    }

    /// Coarse semantic category used to decide which constraints apply.
    /// Integral and floating types collapse into [`FieldKind::Number`].
    pub fn kind(&self) -> FieldKind {
        match self {
            JsonType::Integer | JsonType::Number => FieldKind::Number,
            JsonType::Boolean => FieldKind::Boolean,
            JsonType::Enum => FieldKind::Enum,
            JsonType::String => FieldKind::String,
        }
    }
}

impl Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic category of a field, coarser than [`JsonType`]. Range bounds are
/// only meaningful for [`FieldKind::Number`]; pattern constraints apply to
/// every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Boolean,
    Enum,
    String,
}

/// Author-supplied declaration for a single field.
///
/// Defaults mirror the annotation surface: empty display name, empty
/// description, `required = true`, [`ModifyPolicy::Allow`], unbounded range,
/// no pattern, generic pattern message.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub(crate) field: &'static str,
    pub(crate) json_type: JsonType,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) required: bool,
    pub(crate) modify: ModifyPolicy,
    pub(crate) min: Option<i64>,
    pub(crate) max: Option<i64>,
    pub(crate) pattern: &'static str,
    pub(crate) message: &'static str,
}

impl FieldSpec {
    /// Declare a field by its identifier and expected JSON value type.
    pub fn new(field: &'static str, json_type: JsonType) -> Self {
        Self {
            field,
            json_type,
            name: "",
            description: "",
            required: true,
            modify: ModifyPolicy::Allow,
            min: None,
            max: None,
            pattern: "",
            message: DEFAULT_PATTERN_MESSAGE,
        }
    }

    /// Identifier the field was declared under.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Display name shown to the model. Required fields must set one.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Free-form description of the field's meaning.
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Whether the model must always emit a value for this field.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Modification policy for update-style prompts.
    pub fn modify(mut self, policy: ModifyPolicy) -> Self {
        self.modify = policy;
        self
    }

    /// Inclusive lower bound. Only meaningful on numeric fields.
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound. Only meaningful on numeric fields.
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Regular expression the value must match. Applies to any field kind.
    pub fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = pattern;
        self
    }

    /// Message surfaced alongside the pattern when it is violated.
    pub fn message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }
}

/// Constraint set derived from a [`FieldSpec`], holding only the constraints
/// that are actually in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub pattern: Option<&'static str>,
    pub pattern_message: Option<&'static str>,
}

impl Constraints {
    /// Derive the effective constraint set for a field.
    ///
    /// Range bounds are carried only for [`FieldKind::Number`] fields that
    /// set them; a pattern (and its message) is carried whenever a non-empty
    /// pattern string was declared, regardless of kind.
    pub fn derive(spec: &FieldSpec, kind: FieldKind) -> Self {
        let mut constraints = Constraints::default();
        if kind == FieldKind::Number {
            constraints.min = spec.min;
            constraints.max = spec.max;
        }
        if !spec.pattern.is_empty() {
            constraints.pattern = Some(spec.pattern);
            constraints.pattern_message = Some(spec.message);
        }
        constraints
    }

    /// True when no constraint is in effect.
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
            && self.max.is_none()
            && self.pattern.is_none()
            && self.pattern_message.is_none()
    }
}
