//! # Kumiki - Path-Addressed Test Flow Trees
//!
//! **Kumiki** is the tree engine behind a visual editor for test-flow documents. A test
//! is a JSON document with a `name` and an ordered `actions` sequence; every action is a
//! single-key record whose key is its kind, and container kinds such as `iterate` carry
//! their own nested `actions`. Kumiki owns that document, addresses any node in it with
//! dot-separated paths, edits it in place, and projects it into a navigable
//! visualization tree.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Wrap a document in a [`TestVisualEntity`](entity::TestVisualEntity), either
//!     directly or through a [`TestResource`](resource::TestResource) that validates the shape.
//! 2.  **Address**: Read definitions, labels and schemas with paths such as
//!     `actions.1.iterate.actions.0.print`. [`ROOT_PATH`](path::ROOT_PATH) addresses the
//!     document itself.
//! 3.  **Edit**: `update_model` and `remove_step` change the document in place. Stale or
//!     missing paths are silently ignored so the editor stays interactive.
//! 4.  **Visualize**: `to_viz_node` rebuilds a [`VizTree`](viz::VizTree) from the current
//!     document, with parent, children and sibling navigation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kumiki::prelude::*;
//! use serde_json::json;
//!
//! let mut entity = TestVisualEntity::new(Some(json!({
//!     "name": "t1",
//!     "actions": [
//!         { "print": { "message": "hi" } },
//!         { "iterate": {
//!             "condition": "i < 5",
//!             "actions": [{ "print": { "message": "x" } }]
//!         } }
//!     ]
//! })));
//!
//! let definition = entity.node_definition(Some("actions.1.iterate.actions.0.print"));
//! assert_eq!(definition, Some(json!({ "message": "x" })));
//!
//! let tree = entity.to_viz_node();
//! println!("{}", tree);
//!
//! entity.remove_step(Some("actions.1.iterate"));
//! assert_eq!(entity.actions().len(), 1);
//! ```

pub mod action;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod path;
pub mod prelude;
pub mod resource;
pub mod suggestions;
pub mod viz;
