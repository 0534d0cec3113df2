use crate::viz::{NodeLabelType, VizTree};
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod document;
mod test_entity;

pub use document::{TEST_ID_PREFIX, default_document, is_test_document, random_id};
pub use test_entity::{TestEntityBuilder, TestVisualEntity};

/// The kind of entity a document wrapper represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Route,
    Test,
}

/// An icon decorating a group node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupIcon {
    pub name: String,
    pub title: String,
}

/// Identity shared by every entity.
pub trait BaseEntity {
    fn id(&self) -> &str;
    fn entity_type(&self) -> EntityType;
    /// The canonical document, exactly as stored.
    fn to_json(&self) -> Value;
}

/// The surface the rendering and suggestion layers depend on.
///
/// Paths are `None` (or empty) when the caller has nothing selected; readers then
/// return an empty result and mutators do nothing. Stale paths degrade the same way.
pub trait VisualEntity: BaseEntity {
    fn set_id(&mut self, id: &str);

    fn node_label(&self, path: Option<&str>, label_type: NodeLabelType) -> String;

    fn node_schema(&self, path: Option<&str>) -> Option<Value>;

    /// The value stored at `path`, or `{}` when the path does not resolve.
    ///
    /// `actions.<i>.<kind>` yields the action's parameter record, while `actions.<i>`
    /// yields the whole element including its kind key.
    fn node_definition(&self, path: Option<&str>) -> Option<Value>;

    /// Replaces the value at an existing `path`. Stale paths are ignored.
    fn update_model(&mut self, path: Option<&str>, value: Value);

    fn remove_step(&mut self, path: Option<&str>);

    fn to_viz_node(&self) -> VizTree;

    fn group_icons(&self) -> Vec<GroupIcon>;
}
