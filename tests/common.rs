//! Common test utilities for building test documents and catalogs.
use kumiki::prelude::*;
use serde_json::{Value, json};

/// A single-action test.
///
/// Layout: `[print]`
#[allow(dead_code)]
pub fn sample_test_json() -> Value {
    json!({
        "name": "sample-test",
        "actions": [
            { "print": { "message": "Hello from Citrus!" } }
        ]
    })
}

/// A test with one leaf and one container.
///
/// Layout: `[print, iterate[print]]`
#[allow(dead_code)]
pub fn nested_test_json() -> Value {
    json!({
        "name": "t1",
        "actions": [
            { "print": { "message": "hi" } },
            {
                "iterate": {
                    "condition": "i<5",
                    "actions": [{ "print": { "message": "x" } }]
                }
            }
        ]
    })
}

/// Three top-level actions with a two-step container in the middle.
///
/// Layout: `[print, iterate[print, delay], delay]`
#[allow(dead_code)]
pub fn three_step_json() -> Value {
    json!({
        "name": "test-1234",
        "description": "Prints in a loop",
        "variables": [
            { "name": "user", "value": "Citrus" },
            { "name": "userId", "value": "42" }
        ],
        "actions": [
            { "print": { "message": "Hello World!" } },
            {
                "iterate": {
                    "condition": "i < 5",
                    "actions": [
                        { "print": { "message": "${i}: Hello World!" } },
                        { "delay": { "milliseconds": 5000 } }
                    ]
                }
            },
            { "delay": { "milliseconds": 100 } }
        ]
    })
}

/// Containers nested two levels deep.
///
/// Layout: `[sequential[iterate[print, send]]]`
#[allow(dead_code)]
pub fn deeply_nested_json() -> Value {
    json!({
        "name": "deep",
        "actions": [
            {
                "sequential": {
                    "actions": [
                        {
                            "iterate": {
                                "condition": "i < 2",
                                "actions": [
                                    { "print": { "message": "inner" } },
                                    {
                                        "send": {
                                            "endpoint": "http://localhost:8080",
                                            "message": { "body": { "data": "ping" } }
                                        }
                                    }
                                ]
                            }
                        }
                    ]
                }
            }
        ]
    })
}

/// A catalog covering the kinds used by the fixtures.
#[allow(dead_code)]
pub const CATALOG_JSON: &str = r#"{
    "testSchema": { "type": "object", "required": ["name", "actions"] },
    "actions": {
        "print": {
            "name": "print",
            "title": "Print",
            "description": "Prints a message to the log",
            "propertiesSchema": {
                "type": "object",
                "properties": { "message": { "type": "string" } }
            }
        },
        "delay": {
            "title": "Delay",
            "propertiesSchema": {
                "type": "object",
                "properties": { "milliseconds": { "type": "integer" } }
            }
        }
    },
    "containers": {
        "iterate": {
            "title": "Iterate",
            "propertiesSchema": {
                "type": "object",
                "properties": { "condition": { "type": "string" } }
            }
        }
    },
    "endpoints": {
        "send": { "title": "Send" }
    },
    "functions": {
        "randomNumber": { "description": "Generates a random number" },
        "concat": { "description": "Concatenates strings" },
        "currentDate": {}
    },
    "validationMatcher": {
        "equalsIgnoreCase": { "description": "Case-insensitive comparison" },
        "isNumber": {},
        "ignore": {}
    }
}"#;

#[allow(dead_code)]
pub fn create_catalog() -> ActionCatalog {
    ActionCatalog::from_json(CATALOG_JSON).expect("Failed to load catalog")
}
