//! Example: *Composing order-extraction prompts and decoding a reply*
//!
//! This showcases the full pipeline without any network transport:
//!
//! 1. Declare a type's fields once via [`PromptSchema`].
//! 2. Compose a create prompt and a modify prompt for it.
//! 3. Decode a (here: canned) model reply back into the typed value.
//!
//! The code is intentionally *stand-alone* so that you can run it from the
//! crate without touching any other files.

use promptform::{FieldSpec, JsonType, ModifyPolicy, PromptSchema, codec, prompt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Order {
    amount: i64,
    status: String,
    note: String,
}

impl PromptSchema for Order {
    const TYPE_NAME: &'static str = "Order";

    fn field_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("amount", JsonType::Integer)
                .name("Amount")
                .describe("Order total in cents")
                .min(0)
                .max(10_000)
                .modify(ModifyPolicy::AuditRequired),
            FieldSpec::new("status", JsonType::Enum)
                .name("Status")
                .describe("One of OPEN, PAID, SHIPPED"),
            FieldSpec::new("note", JsonType::String)
                .describe("Optional free-form note")
                .required(false)
                .pattern("^[A-Za-z ]*$")
                .message("letters and spaces only"),
        ]
    }
}

fn main() -> promptform::Result<()> {
    let example = Order {
        amount: 100,
        status: "OPEN".to_string(),
        note: "ok".to_string(),
    };

    println!("── create prompt ──────────────────────────────");
    println!("{}", prompt::create_prompt(Some(&example))?);

    let current = Order {
        amount: 50,
        status: "OPEN".to_string(),
        note: String::new(),
    };

    println!("── modify prompt ──────────────────────────────");
    println!("{}", prompt::modify_prompt(None, Some(&current))?);

    // Pretend the model answered; decode its reply into the typed value.
    let reply = r#"{"amount": 50, "status": "PAID", "note": ""}"#;
    let updated: Order = codec::parse_response(reply)?;
    println!("decoded reply: {updated:?}");

    Ok(())
}
