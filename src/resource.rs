use crate::entity::{BaseEntity, TestVisualEntity, is_test_document};
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use tracing::debug;

/// The document type a resource holds. Suggestion providers are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceSchemaType {
    Route,
    Test,
}

/// A source file holding at most one test.
#[derive(Debug, Clone, Default)]
pub struct TestResource {
    test: Option<TestVisualEntity>,
}

impl TestResource {
    /// Wraps `document` when given; otherwise the resource starts out empty.
    pub fn new(document: Option<Value>) -> Self {
        Self {
            test: document.map(|document| TestVisualEntity::new(Some(document))),
        }
    }

    pub fn with_entity(entity: TestVisualEntity) -> Self {
        Self { test: Some(entity) }
    }

    /// Parses a test document, rejecting anything that is not shaped like a test.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Value =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
        if !is_test_document(&document) {
            return Err(DocumentError::NotATest);
        }
        Ok(Self::new(Some(document)))
    }

    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn resource_type(&self) -> SourceSchemaType {
        SourceSchemaType::Test
    }

    /// Executable entities. Tests are visual-only, so this is always empty.
    pub fn entities(&self) -> Vec<&dyn BaseEntity> {
        Vec::new()
    }

    pub fn visual_entities(&self) -> Vec<&TestVisualEntity> {
        self.test.iter().collect()
    }

    pub fn test(&self) -> Option<&TestVisualEntity> {
        self.test.as_ref()
    }

    pub fn test_mut(&mut self) -> Option<&mut TestVisualEntity> {
        self.test.as_mut()
    }

    /// Replaces the held test with a fresh, empty one.
    pub fn add_new_entity(&mut self) -> &mut TestVisualEntity {
        let entity = TestVisualEntity::new(None);
        debug!(id = %entity.id(), "created test entity");
        self.test.insert(entity)
    }

    pub fn remove_entity(&mut self) -> Option<TestVisualEntity> {
        self.test.take()
    }

    pub fn to_json(&self) -> Option<Value> {
        self.test.as_ref().map(|test| test.to_json())
    }
}
