use super::{Suggestion, SuggestionContext, SuggestionProvider};
use crate::catalog::{ActionCatalog, CatalogEntry};
use crate::entity::TestVisualEntity;
use crate::resource::TestResource;
use serde_json::Value;

const FUNCTION_PREFIX: &str = "citrus:";

/// Suggests `${name}` for the variables a test declares.
#[derive(Debug, Clone, Default)]
pub struct TestVariableSuggestionProvider {
    variables: Vec<String>,
}

impl TestVariableSuggestionProvider {
    pub const ID: &'static str = "test-variables";

    /// Snapshots the top-level `variables[].name` entries of `entity`.
    pub fn from_entity(entity: &TestVisualEntity) -> Self {
        let variables = entity
            .test()
            .get("variables")
            .and_then(Value::as_array)
            .map(|variables| {
                variables
                    .iter()
                    .filter_map(|variable| variable.get("name")?.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self { variables }
    }

    pub fn from_resource(resource: &TestResource) -> Self {
        resource
            .test()
            .map(Self::from_entity)
            .unwrap_or_default()
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }
}

impl SuggestionProvider for TestVariableSuggestionProvider {
    fn id(&self) -> &str {
        Self::ID
    }

    fn suggestions(&self, word: &str, _context: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let Some(partial) = word.strip_prefix("${").or_else(|| word.strip_prefix('$')) else {
            return Vec::new();
        };
        self.variables
            .iter()
            .filter(|name| name.starts_with(partial))
            .map(|name| Suggestion {
                value: format!("${{{}}}", name),
                description: None,
                group: "Test variables".to_string(),
            })
            .collect()
    }
}

/// Suggests `citrus:<name>()` for the catalog's test functions.
#[derive(Debug, Clone, Default)]
pub struct TestFunctionSuggestionProvider {
    functions: Vec<CatalogEntry>,
}

impl TestFunctionSuggestionProvider {
    pub const ID: &'static str = "test-functions";

    pub fn from_catalog(catalog: &ActionCatalog) -> Self {
        Self {
            functions: catalog.functions().into_iter().cloned().collect(),
        }
    }
}

impl SuggestionProvider for TestFunctionSuggestionProvider {
    fn id(&self) -> &str {
        Self::ID
    }

    fn suggestions(&self, word: &str, _context: &SuggestionContext<'_>) -> Vec<Suggestion> {
        // A partially typed prefix such as `cit` already asks for every function.
        let partial = match word.strip_prefix(FUNCTION_PREFIX) {
            Some(partial) => partial,
            None if !word.is_empty() && FUNCTION_PREFIX.starts_with(word) => "",
            None => return Vec::new(),
        };
        self.functions
            .iter()
            .filter(|function| function.name.starts_with(partial))
            .map(|function| Suggestion {
                value: format!("{}{}()", FUNCTION_PREFIX, function.name),
                description: function.description.clone(),
                group: "Test functions".to_string(),
            })
            .collect()
    }
}

/// Suggests `@<name>()@` for the catalog's validation matchers.
#[derive(Debug, Clone, Default)]
pub struct ValidationMatcherSuggestionProvider {
    matchers: Vec<CatalogEntry>,
}

impl ValidationMatcherSuggestionProvider {
    pub const ID: &'static str = "test-validation-matchers";

    pub fn from_catalog(catalog: &ActionCatalog) -> Self {
        Self {
            matchers: catalog.validation_matchers().into_iter().cloned().collect(),
        }
    }
}

impl SuggestionProvider for ValidationMatcherSuggestionProvider {
    fn id(&self) -> &str {
        Self::ID
    }

    fn suggestions(&self, word: &str, _context: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let Some(partial) = word.strip_prefix('@') else {
            return Vec::new();
        };
        self.matchers
            .iter()
            .filter(|matcher| matcher.name.starts_with(partial))
            .map(|matcher| Suggestion {
                value: format!("@{}()@", matcher.name),
                description: matcher.description.clone(),
                group: "Validation matchers".to_string(),
            })
            .collect()
    }
}
