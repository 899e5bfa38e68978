//! Per-type field metadata: the [`PromptSchema`] registration trait, the
//! derived [`FieldMeta`] records and the process-wide memoizing cache.
//!
//! A type opts into schema and prompt synthesis by implementing
//! [`PromptSchema`] once, listing its fields **in declaration order**. That
//! order is load-bearing: it flows unchanged through the metadata map into
//! the schema tree, which in turn steers the model towards a canonical
//! response layout.
//!
//! ```rust
//! use promptform_core::field::{FieldSpec, JsonType};
//! use promptform_core::registry::{PromptSchema, field_metas};
//!
//! struct Ticket {
//!     title: String,
//!     open: bool,
//! }
//!
//! impl PromptSchema for Ticket {
//!     const TYPE_NAME: &'static str = "Ticket";
//!
//!     fn field_specs() -> Vec<FieldSpec> {
//!         vec![
//!             FieldSpec::new("title", JsonType::String).name("Title"),
//!             FieldSpec::new("open", JsonType::Boolean).name("Open"),
//!         ]
//!     }
//! }
//!
//! let metas = field_metas::<Ticket>().unwrap();
//! assert_eq!(metas.len(), 2);
//! assert_eq!(metas.get("title").unwrap().display_name(), "Title");
//! ```
//!
//! Metadata is derived at most once per type for the life of the process and
//! shared behind an [`Arc`]. Derivation is where the declaration rules are
//! enforced; an invalid declaration fails fast, caches nothing, and every
//! later call for that type re-derives and fails the same way until the
//! declaration itself is fixed.

use std::any::TypeId;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error::{PromptformError, Result};
use crate::field::{Constraints, FieldKind, FieldSpec, JsonType, ModifyPolicy};

/// Registration surface for types that participate in schema and prompt
/// synthesis.
///
/// Implementations must list one [`FieldSpec`] per annotated field, in the
/// order the fields are declared on the type. Fields left out of the list
/// are invisible to the whole machinery: they never appear in schemas or
/// prompts.
pub trait PromptSchema: 'static {
    /// Name of the implementing type, used in configuration errors.
    const TYPE_NAME: &'static str;

    /// The field declarations, in declaration order.
    fn field_specs() -> Vec<FieldSpec>;
}

/// Resolved, validated metadata for one field.
///
/// Derived from a [`FieldSpec`] by [`field_metas`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
    display_name: &'static str,
    description: &'static str,
    required: bool,
    modify: ModifyPolicy,
    json_type: JsonType,
    kind: FieldKind,
    constraints: Constraints,
}

impl FieldMeta {
    /// Display name, falling back to the field identifier when the
    /// declaration does not set one.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn modify_policy(&self) -> ModifyPolicy {
        self.modify
    }

    /// Concrete JSON value type, as declared.
    pub fn json_type(&self) -> JsonType {
        self.json_type
    }

    /// Coarse semantic category inferred from the JSON value type.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The constraints in effect for this field.
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    fn derive(type_name: &'static str, spec: &FieldSpec) -> Result<Self> {
        let kind = spec.json_type.kind();
        validate(type_name, spec, kind)?;
        Ok(Self {
            display_name: if spec.name.is_empty() {
                spec.field
            } else {
                spec.name
            },
            description: spec.description,
            required: spec.required,
            modify: spec.modify,
            json_type: spec.json_type,
            kind,
            constraints: Constraints::derive(spec, kind),
        })
    }
}

/// Declaration rules, checked when a type's metadata is first derived.
fn validate(type_name: &'static str, spec: &FieldSpec, kind: FieldKind) -> Result<()> {
    if spec.required && spec.name.is_empty() {
        return Err(PromptformError::Configuration {
            type_name,
            field: spec.field,
            reason: "required fields must declare a display name",
        });
    }

    if spec.modify == ModifyPolicy::ReadOnly && !spec.required {
        return Err(PromptformError::Configuration {
            type_name,
            field: spec.field,
            reason: "read-only fields must be required",
        });
    }

    if kind == FieldKind::Number {
        if let (Some(min), Some(max)) = (spec.min, spec.max) {
            if min > max {
                return Err(PromptformError::Configuration {
                    type_name,
                    field: spec.field,
                    reason: "minimum bound exceeds maximum bound",
                });
            }
        }
    }

    Ok(())
}

/// Insertion-ordered, immutable map from field identifier to [`FieldMeta`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMetaMap {
    entries: Vec<(&'static str, FieldMeta)>,
}

impl FieldMetaMap {
    /// Look up one field's metadata by identifier.
    pub fn get(&self, field: &str) -> Option<&FieldMeta> {
        self.entries
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, meta)| meta)
    }

    /// Iterate the fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldMeta)> {
        self.entries.iter().map(|(id, meta)| (*id, meta))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static META_CACHE: OnceLock<DashMap<TypeId, Arc<FieldMetaMap>>> = OnceLock::new();

/// Derive (or fetch the cached) field metadata for `T`.
///
/// The first successful call per type derives and caches the map; every
/// later call returns the same shared instance through a read-only lookup.
/// Concurrent first calls for one type are serialized on the cache entry,
/// so exactly one derivation completes and all callers observe it. A failed
/// derivation caches nothing.
pub fn field_metas<T: PromptSchema>() -> Result<Arc<FieldMetaMap>> {
    let cache = META_CACHE.get_or_init(DashMap::new);
    let key = TypeId::of::<T>();

    // Populated types are served without touching the write path.
    if let Some(hit) = cache.get(&key) {
        return Ok(Arc::clone(&hit));
    }

    match cache.entry(key) {
        Entry::Occupied(hit) => Ok(Arc::clone(hit.get())),
        Entry::Vacant(slot) => {
            let metas = derive_metas::<T>()?;
            Ok(Arc::clone(&slot.insert(Arc::new(metas))))
        }
    }
}

fn derive_metas<T: PromptSchema>() -> Result<FieldMetaMap> {
    let specs = T::field_specs();
    let mut entries = Vec::with_capacity(specs.len());
    for spec in &specs {
        entries.push((spec.field(), FieldMeta::derive(T::TYPE_NAME, spec)?));
    }
    Ok(FieldMetaMap { entries })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Invoice;

    static INVOICE_DERIVATIONS: AtomicUsize = AtomicUsize::new(0);

    impl PromptSchema for Invoice {
        const TYPE_NAME: &'static str = "Invoice";

        fn field_specs() -> Vec<FieldSpec> {
            INVOICE_DERIVATIONS.fetch_add(1, Ordering::SeqCst);
            vec![
                FieldSpec::new("total", JsonType::Integer)
                    .name("Total")
                    .min(0),
                FieldSpec::new("paid", JsonType::Boolean).name("Paid"),
                FieldSpec::new("memo", JsonType::String).required(false),
            ]
        }
    }

    #[test]
    fn metadata_derived_once_and_shared_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| field_metas::<Invoice>().unwrap()))
            .collect();
        let maps: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(INVOICE_DERIVATIONS.load(Ordering::SeqCst), 1);
        for map in &maps[1..] {
            assert!(Arc::ptr_eq(&maps[0], map));
        }

        // A later sequential call still hits the cache.
        let again = field_metas::<Invoice>().unwrap();
        assert_eq!(*again, *maps[0]);
        assert_eq!(INVOICE_DERIVATIONS.load(Ordering::SeqCst), 1);

        // Post-population reads from many threads at once keep returning the
        // same shared instance without re-deriving anything.
        let readers: Vec<_> = (0..16)
            .map(|_| std::thread::spawn(|| field_metas::<Invoice>().unwrap()))
            .collect();
        for reader in readers {
            assert!(Arc::ptr_eq(&maps[0], &reader.join().unwrap()));
        }
        assert_eq!(INVOICE_DERIVATIONS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn declaration_order_is_preserved() {
        let metas = field_metas::<Invoice>().unwrap();
        let order: Vec<_> = metas.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["total", "paid", "memo"]);
    }

    #[test]
    fn unnamed_optional_field_falls_back_to_identifier() {
        let metas = field_metas::<Invoice>().unwrap();
        assert_eq!(metas.get("memo").unwrap().display_name(), "memo");
    }

    #[test]
    fn required_field_without_name_is_rejected() {
        struct Nameless;
        impl PromptSchema for Nameless {
            const TYPE_NAME: &'static str = "Nameless";
            fn field_specs() -> Vec<FieldSpec> {
                vec![FieldSpec::new("code", JsonType::String)]
            }
        }

        match field_metas::<Nameless>() {
            Err(PromptformError::Configuration {
                type_name,
                field,
                reason,
            }) => {
                assert_eq!(type_name, "Nameless");
                assert_eq!(field, "code");
                assert!(reason.contains("display name"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }

        // No partial entry persists; the same error is raised again.
        assert!(matches!(
            field_metas::<Nameless>(),
            Err(PromptformError::Configuration { field: "code", .. })
        ));
    }

    #[test]
    fn optional_field_without_name_is_accepted() {
        struct Loose;
        impl PromptSchema for Loose {
            const TYPE_NAME: &'static str = "Loose";
            fn field_specs() -> Vec<FieldSpec> {
                vec![FieldSpec::new("hint", JsonType::String).required(false)]
            }
        }

        assert!(field_metas::<Loose>().is_ok());
    }

    #[test]
    fn read_only_field_must_be_required() {
        struct Frozen;
        impl PromptSchema for Frozen {
            const TYPE_NAME: &'static str = "Frozen";
            fn field_specs() -> Vec<FieldSpec> {
                vec![
                    FieldSpec::new("id", JsonType::String)
                        .name("Identifier")
                        .required(false)
                        .modify(ModifyPolicy::ReadOnly),
                ]
            }
        }

        assert!(matches!(
            field_metas::<Frozen>(),
            Err(PromptformError::Configuration {
                type_name: "Frozen",
                field: "id",
                ..
            })
        ));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        struct Backwards;
        impl PromptSchema for Backwards {
            const TYPE_NAME: &'static str = "Backwards";
            fn field_specs() -> Vec<FieldSpec> {
                vec![
                    FieldSpec::new("qty", JsonType::Integer)
                        .name("Quantity")
                        .min(10)
                        .max(1),
                ]
            }
        }

        assert!(matches!(
            field_metas::<Backwards>(),
            Err(PromptformError::Configuration {
                field: "qty",
                reason: "minimum bound exceeds maximum bound",
                ..
            })
        ));
    }

    #[test]
    fn pattern_only_field_never_trips_the_bounds_check() {
        struct Tagged;
        impl PromptSchema for Tagged {
            const TYPE_NAME: &'static str = "Tagged";
            fn field_specs() -> Vec<FieldSpec> {
                vec![
                    FieldSpec::new("tag", JsonType::String)
                        .name("Tag")
                        .pattern("^[a-z-]+$"),
                ]
            }
        }

        let metas = field_metas::<Tagged>().unwrap();
        let constraints = metas.get("tag").unwrap().constraints();
        assert_eq!(constraints.pattern, Some("^[a-z-]+$"));
        assert_eq!(constraints.min, None);
        assert_eq!(constraints.max, None);
    }
}
