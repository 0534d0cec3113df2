use serde_json::{Map, Value};

mod index;

pub use index::{ActionCatalog, ActionCatalogBuilder, CatalogEntry};

/// Supplies display names and JSON-schema fragments for action kinds.
///
/// This is the seam to the schema/catalog service; the tree engine only ever asks
/// these questions and never interprets schema content itself.
pub trait SchemaProvider: Send + Sync {
    /// Schema describing the whole test document. Defaults to an empty schema.
    fn test_schema(&self) -> Value {
        Value::Object(Map::new())
    }

    /// Schema fragment for the parameters of `kind`, if the kind is known.
    fn schema_for_action(&self, kind: &str) -> Option<Value>;

    /// Human-readable title for `kind`, if the catalog has one.
    fn name_for_action(&self, _kind: &str) -> Option<String> {
        None
    }
}

/// A provider that knows no action kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl SchemaProvider for EmptyCatalog {
    fn schema_for_action(&self, _kind: &str) -> Option<Value> {
        None
    }
}
