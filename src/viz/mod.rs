//! The visualization projection of a test document.
//!
//! A [`VizTree`] is rebuilt from scratch on every request. Nodes live in an arena
//! owned by the tree; each node stores its parent and its ordered children, and the
//! previous/next sibling links are derived from the parent's child order on demand.
//! Node handles are only meaningful within the tree that produced them; across two
//! builds only paths are stable.

use crate::action::{ACTIONS_FIELD, Action};
use crate::catalog::SchemaProvider;
use crate::path::{NodePath, ROOT_PATH};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

mod display;

/// Which field of a node to use as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeLabelType {
    #[default]
    Id,
    Description,
}

/// Index of a node inside its [`VizTree`].
pub type VizNodeId = usize;

/// Rendering-facing data carried by one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizNodeData {
    /// Canonical path, or [`ROOT_PATH`] for the root group.
    pub path: String,
    pub is_group: bool,
    /// The document name for the root, the action kind otherwise. Empty for malformed actions.
    pub label: String,
    /// Catalog title, falling back to the label.
    pub title: String,
    pub description: Option<String>,
    /// The `message` record of send/receive style actions.
    pub message: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    data: VizNodeData,
    parent: Option<VizNodeId>,
    children: Vec<VizNodeId>,
}

/// A navigable tree of visualization nodes. The root always exists at id `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct VizTree {
    slots: Vec<Slot>,
}

impl VizTree {
    /// Builds the tree for `document`, labelling the root group with `root_label`.
    ///
    /// Malformed action elements become unlabeled leaves addressed by their index path.
    pub fn build(root_label: &str, document: &Value, provider: &dyn SchemaProvider) -> Self {
        let mut tree = Self { slots: Vec::new() };
        let root = tree.push(
            None,
            VizNodeData {
                path: ROOT_PATH.to_string(),
                is_group: true,
                label: root_label.to_string(),
                title: root_label.to_string(),
                description: string_field(document, "description"),
                message: None,
            },
        );

        if let Some(actions) = document.get(ACTIONS_FIELD).and_then(Value::as_array) {
            let sequence = NodePath::root().child_field(ACTIONS_FIELD);
            tree.append_actions(root, &sequence, actions, provider);
        }
        tree
    }

    fn append_actions(
        &mut self,
        parent: VizNodeId,
        sequence: &NodePath,
        actions: &[Value],
        provider: &dyn SchemaProvider,
    ) {
        for (index, raw) in actions.iter().enumerate() {
            let element = sequence.child_index(index);
            let action = Action::decode(raw);
            match action {
                Action::Step { kind, value } => {
                    let path = element.child_field(kind);
                    let nested = action.nested_actions();
                    let node = self.push(
                        Some(parent),
                        VizNodeData {
                            path: path.to_string(),
                            is_group: nested.is_some(),
                            label: kind.to_string(),
                            title: provider
                                .name_for_action(kind)
                                .unwrap_or_else(|| kind.to_string()),
                            description: string_field(value, "description"),
                            message: value.get("message").filter(|m| m.is_object()).cloned(),
                        },
                    );
                    if let Some(nested) = nested {
                        let nested_sequence = path.child_field(ACTIONS_FIELD);
                        self.append_actions(node, &nested_sequence, nested, provider);
                    }
                }
                Action::Unknown => {
                    warn!(path = %element, "malformed action element, rendering it unlabeled");
                    self.push(
                        Some(parent),
                        VizNodeData {
                            path: element.to_string(),
                            is_group: false,
                            label: String::new(),
                            title: String::new(),
                            description: None,
                            message: None,
                        },
                    );
                }
            }
        }
    }

    fn push(&mut self, parent: Option<VizNodeId>, data: VizNodeData) -> VizNodeId {
        let id = self.slots.len();
        self.slots.push(Slot {
            data,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.slots[parent].children.push(id);
        }
        id
    }

    pub fn root(&self) -> VizNode<'_> {
        VizNode { tree: self, id: 0 }
    }

    pub fn node(&self, id: VizNodeId) -> Option<VizNode<'_>> {
        (id < self.slots.len()).then_some(VizNode { tree: self, id })
    }

    /// Finds the node carrying `path`.
    pub fn find(&self, path: &str) -> Option<VizNode<'_>> {
        self.slots
            .iter()
            .position(|slot| slot.data.path == path)
            .map(|id| VizNode { tree: self, id })
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All nodes in depth-first pre-order, which is document order.
    pub fn iter(&self) -> impl Iterator<Item = VizNode<'_>> {
        (0..self.slots.len()).map(move |id| VizNode { tree: self, id })
    }

    /// All node paths in document order.
    pub fn paths(&self) -> Vec<&str> {
        self.slots.iter().map(|slot| slot.data.path.as_str()).collect()
    }
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A borrowed handle to one node of a [`VizTree`].
#[derive(Debug, Clone, Copy)]
pub struct VizNode<'t> {
    tree: &'t VizTree,
    id: VizNodeId,
}

impl PartialEq for VizNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for VizNode<'_> {}

impl<'t> VizNode<'t> {
    fn slot(&self) -> &'t Slot {
        &self.tree.slots[self.id]
    }

    pub fn id(&self) -> VizNodeId {
        self.id
    }

    pub fn data(&self) -> &'t VizNodeData {
        &self.slot().data
    }

    pub fn path(&self) -> &'t str {
        &self.slot().data.path
    }

    pub fn is_group(&self) -> bool {
        self.slot().data.is_group
    }

    pub fn is_root(&self) -> bool {
        self.slot().parent.is_none()
    }

    pub fn parent(&self) -> Option<VizNode<'t>> {
        self.slot().parent.map(|id| VizNode {
            tree: self.tree,
            id,
        })
    }

    pub fn children(&self) -> Vec<VizNode<'t>> {
        self.slot()
            .children
            .iter()
            .map(|&id| VizNode {
                tree: self.tree,
                id,
            })
            .collect()
    }

    pub fn child_count(&self) -> usize {
        self.slot().children.len()
    }

    fn sibling(&self, offset: isize) -> Option<VizNode<'t>> {
        let siblings = &self.parent()?.slot().children;
        let position = siblings.iter().position(|&id| id == self.id)?;
        let target = position.checked_add_signed(offset)?;
        siblings.get(target).map(|&id| VizNode {
            tree: self.tree,
            id,
        })
    }

    /// The sibling before this one, if any. The root and first children have none.
    pub fn previous_node(&self) -> Option<VizNode<'t>> {
        self.sibling(-1)
    }

    /// The sibling after this one, if any. The root and last children have none.
    pub fn next_node(&self) -> Option<VizNode<'t>> {
        self.sibling(1)
    }

    pub fn node_label(&self, label_type: NodeLabelType) -> String {
        let data = self.data();
        match (label_type, &data.description) {
            (NodeLabelType::Description, Some(description)) => description.clone(),
            _ => data.label.clone(),
        }
    }

    pub fn title(&self) -> &'t str {
        &self.slot().data.title
    }

    pub fn message(&self) -> Option<&'t Value> {
        self.slot().data.message.as_ref()
    }
}
