//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kumiki crate,
//! including the entity traits whose methods make up the editing surface.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let resource = TestResource::from_file("path/to/test.json")?;
//! if let Some(test) = resource.test() {
//!     println!("{}", test.to_viz_node());
//! }
//! # Ok(())
//! # }
//! ```

// Entities and resources
pub use crate::entity::{BaseEntity, EntityType, TestVisualEntity, VisualEntity};
pub use crate::resource::{SourceSchemaType, TestResource};

// Paths and actions
pub use crate::action::{Action, extract_action_name, extract_action_name_from_path};
pub use crate::path::{NodePath, PathSegment, ROOT_PATH};

// Visualization
pub use crate::viz::{NodeLabelType, VizNode, VizTree};

// Catalog and suggestions
pub use crate::catalog::{ActionCatalog, CatalogEntry, EmptyCatalog, SchemaProvider};
pub use crate::suggestions::{SuggestionContext, SuggestionRegistrar, SuggestionRegistry};

// Error types
pub use crate::error::{CatalogError, DocumentError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
