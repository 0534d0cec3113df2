use crate::action::ACTIONS_FIELD;
use rand::Rng;
use serde_json::{Value, json};

/// Prefix of generated test ids.
pub const TEST_ID_PREFIX: &str = "test";

/// Returns `true` for an object with a string `name` and an `actions` array.
pub fn is_test_document(value: &Value) -> bool {
    value.get("name").is_some_and(Value::is_string)
        && value.get(ACTIONS_FIELD).is_some_and(Value::is_array)
}

/// Generates an id such as `test-0427`.
pub fn random_id(prefix: &str) -> String {
    let suffix: u32 = rand::rng().random_range(0..10_000);
    format!("{}-{:04}", prefix, suffix)
}

/// An empty test with a generated name.
pub fn default_document() -> Value {
    json!({
        "name": random_id(TEST_ID_PREFIX),
        "actions": [],
    })
}
