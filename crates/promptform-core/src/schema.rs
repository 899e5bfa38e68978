//! Turns registered field metadata into the simplified, prompt-oriented
//! schema tree that gets embedded into model instructions.
//!
//! This is **not** a JSON Schema implementation. The tree is a plain JSON
//! object with one node per registered field, shaped for a model to read:
//! the attributes double as documentation (`description`, `modifyPolicy`)
//! and as soft constraints (`min`, `max`, `pattern`). Enforcement is left
//! entirely to the model via the prompt contract; nothing here or in the
//! decoder validates values against it.
//!
//! Node ordering follows field declaration order, which is why the workspace
//! builds `serde_json` with `preserve_order`.

use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::registry::{FieldMeta, PromptSchema, field_metas};

/// Build the schema tree for a single object of type `T`.
///
/// One node per registered field, in declaration order. Fields without a
/// registered declaration do not exist as far as the schema is concerned.
pub fn schema_for<T: PromptSchema>() -> Result<Value> {
    let metas = field_metas::<T>()?;
    let mut root = Map::new();
    for (field, meta) in metas.iter() {
        root.insert(field.to_string(), field_node(meta));
    }
    Ok(Value::Object(root))
}

/// Build the schema tree for a homogeneous list of `T`: an `array` wrapper
/// whose `items` attribute holds the single-object schema.
pub fn list_schema_for<T: PromptSchema>() -> Result<Value> {
    let mut root = Map::new();
    root.insert("type".to_string(), json!("array"));
    root.insert("items".to_string(), schema_for::<T>()?);
    Ok(Value::Object(root))
}

fn field_node(meta: &FieldMeta) -> Value {
    let mut node = Map::new();
    node.insert("type".to_string(), json!(meta.json_type().as_str()));
    node.insert("description".to_string(), json!(node_description(meta)));
    node.insert("required".to_string(), json!(meta.required()));
    node.insert(
        "modifyPolicy".to_string(),
        json!(meta.modify_policy().as_str()),
    );

    let constraints = meta.constraints();
    if let Some(min) = constraints.min {
        node.insert("min".to_string(), json!(min));
    }
    if let Some(max) = constraints.max {
        node.insert("max".to_string(), json!(max));
    }
    if let Some(pattern) = constraints.pattern {
        node.insert("pattern".to_string(), json!(pattern));
    }
    if let Some(message) = constraints.pattern_message {
        node.insert("patternMessage".to_string(), json!(message));
    }

    // Raw declaration-level duplicate of the policy, kept for consumers that
    // read `modifiable` instead of `modifyPolicy`.
    node.insert(
        "modifiable".to_string(),
        json!(meta.modify_policy().as_str()),
    );
    Value::Object(node)
}

/// `"<displayName> | <description>"`, with a literal ` [required]` marker
/// appended for required fields.
fn node_description(meta: &FieldMeta) -> String {
    format!(
        "{} | {}{}",
        meta.display_name(),
        meta.description(),
        if meta.required() { " [required]" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use crate::field::{FieldSpec, JsonType, ModifyPolicy};

    use super::*;

    struct Order;

    impl PromptSchema for Order {
        const TYPE_NAME: &'static str = "Order";

        fn field_specs() -> Vec<FieldSpec> {
            vec![
                FieldSpec::new("amount", JsonType::Integer)
                    .name("Amount")
                    .describe("Order total in cents")
                    .min(0)
                    .max(10_000),
                FieldSpec::new("status", JsonType::Enum)
                    .name("Status")
                    .describe("Lifecycle state")
                    .modify(ModifyPolicy::ReadOnly),
                FieldSpec::new("note", JsonType::String)
                    .describe("Free-form note")
                    .required(false)
                    .pattern("^[A-Za-z ]*$")
                    .message("letters and spaces only"),
            ]
        }
    }

    #[test]
    fn nodes_follow_declaration_order() {
        let schema = schema_for::<Order>().unwrap();
        let fields: Vec<_> = schema.as_object().unwrap().keys().collect();
        assert_eq!(fields, vec!["amount", "status", "note"]);
    }

    #[test]
    fn numeric_node_carries_bounds() {
        let schema = schema_for::<Order>().unwrap();
        let amount = &schema["amount"];
        assert_eq!(amount["type"], "integer");
        assert_eq!(
            amount["description"],
            "Amount | Order total in cents [required]"
        );
        assert_eq!(amount["required"], true);
        assert_eq!(amount["modifyPolicy"], "ALLOW");
        assert_eq!(amount["modifiable"], "ALLOW");
        assert_eq!(amount["min"], 0);
        assert_eq!(amount["max"], 10_000);
        assert!(amount.get("pattern").is_none());
    }

    #[test]
    fn pattern_node_carries_no_bounds() {
        let schema = schema_for::<Order>().unwrap();
        let note = &schema["note"];
        assert_eq!(note["type"], "string");
        assert_eq!(note["description"], "note | Free-form note");
        assert_eq!(note["required"], false);
        assert_eq!(note["pattern"], "^[A-Za-z ]*$");
        assert_eq!(note["patternMessage"], "letters and spaces only");
        assert!(note.get("min").is_none());
        assert!(note.get("max").is_none());
    }

    #[test]
    fn enum_node_reports_policy_name() {
        let schema = schema_for::<Order>().unwrap();
        let status = &schema["status"];
        assert_eq!(status["type"], "enum");
        assert_eq!(status["modifyPolicy"], "READ_ONLY");
        assert_eq!(status["modifiable"], "READ_ONLY");
    }

    #[test]
    fn node_attributes_appear_in_contract_order() {
        let schema = schema_for::<Order>().unwrap();
        let keys: Vec<_> = schema["amount"].as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec![
                "type",
                "description",
                "required",
                "modifyPolicy",
                "min",
                "max",
                "modifiable"
            ]
        );
    }

    #[test]
    fn list_schema_wraps_the_object_schema() {
        let schema = list_schema_for::<Order>().unwrap();
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"], schema_for::<Order>().unwrap());
    }
}
