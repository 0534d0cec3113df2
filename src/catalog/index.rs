use super::SchemaProvider;
use crate::error::CatalogError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// One catalog entry: an action, container, endpoint, function or validation matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "propertiesSchema",
        skip_serializing_if = "Option::is_none"
    )]
    pub properties_schema: Option<Value>,
}

impl CatalogEntry {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            description: None,
            properties_schema: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.properties_schema = Some(schema);
        self
    }
}

/// Catalog entry as it appears on disk. The map key is authoritative; `name` is optional.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    #[serde(alias = "propertiesSchema")]
    properties_schema: Option<Value>,
}

/// The catalog index format.
#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    actions: AHashMap<String, RawEntry>,
    #[serde(default)]
    containers: AHashMap<String, RawEntry>,
    #[serde(default)]
    endpoints: AHashMap<String, RawEntry>,
    #[serde(default)]
    functions: AHashMap<String, RawEntry>,
    #[serde(default, alias = "validationMatcher")]
    validation_matcher: AHashMap<String, RawEntry>,
    #[serde(default, alias = "testSchema")]
    test_schema: Option<Value>,
}

/// An in-memory action catalog, keyed by kind within each section.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    actions: AHashMap<String, CatalogEntry>,
    containers: AHashMap<String, CatalogEntry>,
    endpoints: AHashMap<String, CatalogEntry>,
    functions: AHashMap<String, CatalogEntry>,
    validation_matchers: AHashMap<String, CatalogEntry>,
    test_schema: Option<Value>,
}

impl ActionCatalog {
    pub fn builder() -> ActionCatalogBuilder {
        ActionCatalogBuilder::new()
    }

    /// Parses a catalog index with `actions`, `containers`, `endpoints`,
    /// `functions` and `validationMatcher` sections.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        if !value.is_object() {
            return Err(CatalogError::JsonParseError(
                "catalog index must be a JSON object".to_string(),
            ));
        }
        let raw: RawCatalog =
            serde_json::from_value(value).map_err(|e| CatalogError::JsonParseError(e.to_string()))?;

        Ok(Self {
            actions: convert_section("actions", raw.actions)?,
            containers: convert_section("containers", raw.containers)?,
            endpoints: convert_section("endpoints", raw.endpoints)?,
            functions: convert_section("functions", raw.functions)?,
            validation_matchers: convert_section("validationMatcher", raw.validation_matcher)?,
            test_schema: raw.test_schema,
        })
    }

    /// Loads a catalog index from a file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Looks `kind` up in the actions, then containers, then endpoints sections.
    pub fn entry(&self, kind: &str) -> Option<&CatalogEntry> {
        self.actions
            .get(kind)
            .or_else(|| self.containers.get(kind))
            .or_else(|| self.endpoints.get(kind))
    }

    pub fn is_container(&self, kind: &str) -> bool {
        self.containers.contains_key(kind)
    }

    /// Test functions, sorted by name.
    pub fn functions(&self) -> Vec<&CatalogEntry> {
        sorted_entries(&self.functions)
    }

    /// Validation matchers, sorted by name.
    pub fn validation_matchers(&self) -> Vec<&CatalogEntry> {
        sorted_entries(&self.validation_matchers)
    }

    pub fn len(&self) -> usize {
        self.actions.len() + self.containers.len() + self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sorted_entries(section: &AHashMap<String, CatalogEntry>) -> Vec<&CatalogEntry> {
    let mut entries: Vec<_> = section.values().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

fn convert_section(
    section: &str,
    raw: AHashMap<String, RawEntry>,
) -> Result<AHashMap<String, CatalogEntry>, CatalogError> {
    raw.into_iter()
        .map(|(key, entry)| {
            if let Some(name) = &entry.name {
                if *name != key {
                    return Err(CatalogError::InvalidEntry {
                        section: section.to_string(),
                        name: key,
                        message: format!("entry name '{}' does not match its key", name),
                    });
                }
            }
            if let Some(schema) = &entry.properties_schema {
                if !schema.is_object() {
                    return Err(CatalogError::InvalidEntry {
                        section: section.to_string(),
                        name: key,
                        message: "propertiesSchema must be an object".to_string(),
                    });
                }
            }
            let converted = CatalogEntry {
                name: key.clone(),
                title: entry.title,
                description: entry.description,
                properties_schema: entry.properties_schema,
            };
            Ok((key, converted))
        })
        .collect()
}

impl SchemaProvider for ActionCatalog {
    fn test_schema(&self) -> Value {
        self.test_schema
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    fn schema_for_action(&self, kind: &str) -> Option<Value> {
        let entry = self.entry(kind)?;
        Some(
            entry
                .properties_schema
                .clone()
                .unwrap_or_else(|| Value::Object(Map::new())),
        )
    }

    fn name_for_action(&self, kind: &str) -> Option<String> {
        self.entry(kind)?.title.clone()
    }
}

/// Assembles an [`ActionCatalog`] in code.
#[derive(Debug, Default)]
pub struct ActionCatalogBuilder {
    catalog: ActionCatalog,
}

impl ActionCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, entry: CatalogEntry) -> Self {
        self.catalog.actions.insert(entry.name.clone(), entry);
        self
    }

    pub fn with_container(mut self, entry: CatalogEntry) -> Self {
        self.catalog.containers.insert(entry.name.clone(), entry);
        self
    }

    pub fn with_endpoint(mut self, entry: CatalogEntry) -> Self {
        self.catalog.endpoints.insert(entry.name.clone(), entry);
        self
    }

    pub fn with_function(mut self, entry: CatalogEntry) -> Self {
        self.catalog.functions.insert(entry.name.clone(), entry);
        self
    }

    pub fn with_validation_matcher(mut self, entry: CatalogEntry) -> Self {
        self.catalog
            .validation_matchers
            .insert(entry.name.clone(), entry);
        self
    }

    pub fn with_test_schema(mut self, schema: Value) -> Self {
        self.catalog.test_schema = Some(schema);
        self
    }

    pub fn build(self) -> ActionCatalog {
        self.catalog
    }
}
