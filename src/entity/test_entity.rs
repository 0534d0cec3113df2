use super::document::{TEST_ID_PREFIX, default_document, random_id};
use super::{BaseEntity, EntityType, GroupIcon, VisualEntity};
use crate::action::{ACTIONS_FIELD, extract_action_name_from_path};
use crate::catalog::{EmptyCatalog, SchemaProvider};
use crate::path::{self, ROOT_PATH};
use crate::viz::{NodeLabelType, VizTree};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A visual test entity: owns one test document and addresses its actions by path.
///
/// The document is kept exactly as it was supplied, so an entity that is never
/// mutated serializes back to its input.
#[derive(Clone)]
pub struct TestVisualEntity {
    id: String,
    test: Value,
    schema_provider: Arc<dyn SchemaProvider>,
}

impl TestVisualEntity {
    pub const ROOT_PATH: &'static str = ROOT_PATH;

    /// Wraps `document`, or a fresh empty test when `None`.
    pub fn new(document: Option<Value>) -> Self {
        let builder = Self::builder();
        match document {
            Some(document) => builder.document(document).build(),
            None => builder.build(),
        }
    }

    pub fn builder() -> TestEntityBuilder {
        TestEntityBuilder::new()
    }

    pub fn test(&self) -> &Value {
        &self.test
    }

    /// Direct access to the document. Changing `name` here does not move the id until
    /// the next root update.
    pub fn test_mut(&mut self) -> &mut Value {
        &mut self.test
    }

    pub fn name(&self) -> Option<&str> {
        self.test.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.test
            .get("description")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
    }

    /// The top-level action sequence, empty when absent or malformed.
    pub fn actions(&self) -> &[Value] {
        self.test
            .get(ACTIONS_FIELD)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn actions_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.test
            .get_mut(ACTIONS_FIELD)
            .and_then(Value::as_array_mut)
    }

    /// Executable entities contained in this one. A test has none.
    pub fn entities(&self) -> Vec<&dyn BaseEntity> {
        Vec::new()
    }

    pub fn visual_entities(&self) -> Vec<&dyn VisualEntity> {
        vec![self as &dyn VisualEntity]
    }

    fn root_label(&self, label_type: NodeLabelType) -> String {
        match (label_type, self.description()) {
            (NodeLabelType::Description, Some(description)) => description.to_string(),
            _ => self.id.clone(),
        }
    }
}

/// Treats the empty string like an absent path.
fn given(path: Option<&str>) -> Option<&str> {
    path.filter(|p| !p.is_empty())
}

impl fmt::Debug for TestVisualEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestVisualEntity")
            .field("id", &self.id)
            .field("test", &self.test)
            .finish_non_exhaustive()
    }
}

impl Serialize for TestVisualEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.test.serialize(serializer)
    }
}

impl BaseEntity for TestVisualEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Test
    }

    fn to_json(&self) -> Value {
        self.test.clone()
    }
}

impl VisualEntity for TestVisualEntity {
    /// Sets the id and writes it through to the document's `name`.
    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
        if let Value::Object(test) = &mut self.test {
            test.insert("name".to_string(), Value::String(self.id.clone()));
        }
    }

    fn node_label(&self, path: Option<&str>, label_type: NodeLabelType) -> String {
        match given(path) {
            None => String::new(),
            Some(ROOT_PATH) => self.root_label(label_type),
            Some(path) => extract_action_name_from_path(path)
                .unwrap_or_default()
                .to_string(),
        }
    }

    fn node_schema(&self, path: Option<&str>) -> Option<Value> {
        match given(path)? {
            ROOT_PATH => Some(self.schema_provider.test_schema()),
            path => {
                path::resolve(&self.test, path)?;
                let kind = extract_action_name_from_path(path)?;
                self.schema_provider.schema_for_action(kind)
            }
        }
    }

    fn node_definition(&self, path: Option<&str>) -> Option<Value> {
        let path = given(path)?;
        let definition = path::resolve(&self.test, path).cloned();
        if definition.is_none() {
            trace!(path, "definition requested for a path that does not resolve");
        }
        Some(definition.unwrap_or_else(|| Value::Object(Map::new())))
    }

    fn update_model(&mut self, path: Option<&str>, value: Value) {
        let Some(path) = given(path) else {
            return;
        };

        if path == ROOT_PATH {
            path::update(&mut self.test, ROOT_PATH, value);
            if let Some(name) = self.name() {
                self.id = name.to_string();
            }
            debug!(id = %self.id, "updated test root");
            return;
        }

        if path::update(&mut self.test, path, value) {
            debug!(path, "updated action");
        } else {
            debug!(path, "update skipped, path does not resolve");
        }
    }

    fn remove_step(&mut self, path: Option<&str>) {
        let Some(path) = given(path) else {
            return;
        };
        match path::remove_at(&mut self.test, path) {
            Some(_) => debug!(path, "removed step"),
            None => debug!(path, "remove skipped, path does not resolve"),
        }
    }

    fn to_viz_node(&self) -> VizTree {
        VizTree::build(&self.root_label(NodeLabelType::Id), &self.test, &*self.schema_provider)
    }

    fn group_icons(&self) -> Vec<GroupIcon> {
        Vec::new()
    }
}

/// Configures a [`TestVisualEntity`].
pub struct TestEntityBuilder {
    document: Option<Value>,
    id: Option<String>,
    schema_provider: Arc<dyn SchemaProvider>,
}

impl Default for TestEntityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEntityBuilder {
    pub fn new() -> Self {
        Self {
            document: None,
            id: None,
            schema_provider: Arc::new(EmptyCatalog),
        }
    }

    pub fn document(mut self, document: Value) -> Self {
        self.document = Some(document);
        self
    }

    /// Overrides the id derived from the document's `name`. The document is left untouched.
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn schema_provider(mut self, provider: Arc<dyn SchemaProvider>) -> Self {
        self.schema_provider = provider;
        self
    }

    pub fn build(self) -> TestVisualEntity {
        let test = self.document.unwrap_or_else(default_document);
        let id = self
            .id
            .or_else(|| test.get("name").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| random_id(TEST_ID_PREFIX));
        TestVisualEntity {
            id,
            test,
            schema_provider: self.schema_provider,
        }
    }
}
