//! Autocompletion plumbing for test documents.
//!
//! The host owns one [`SuggestionRegistry`]. A [`SuggestionRegistrar`] keeps the
//! registry in step with the current document type: switching types disposes every
//! provider registered for the previous type before registering the new set.

use crate::catalog::ActionCatalog;
use crate::resource::{SourceSchemaType, TestResource};
use serde::Serialize;
use tracing::debug;

mod providers;

pub use providers::{
    TestFunctionSuggestionProvider, TestVariableSuggestionProvider,
    ValidationMatcherSuggestionProvider,
};

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub value: String,
    pub description: Option<String>,
    pub group: String,
}

/// The field being edited and where the cursor sits in it.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub property_name: &'a str,
    pub input_value: &'a str,
    /// Byte offset of the cursor; clamped to the input.
    pub cursor_position: usize,
}

impl<'a> SuggestionContext<'a> {
    pub fn new(property_name: &'a str, input_value: &'a str, cursor_position: usize) -> Self {
        Self {
            property_name,
            input_value,
            cursor_position,
        }
    }

    /// The whitespace-delimited word ending at the cursor.
    pub fn word(&self) -> &'a str {
        let mut end = self.cursor_position.min(self.input_value.len());
        while !self.input_value.is_char_boundary(end) {
            end -= 1;
        }
        let head = &self.input_value[..end];
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        &head[start..]
    }
}

/// A source of completion candidates.
pub trait SuggestionProvider: Send + Sync {
    /// Stable id used to unregister the provider.
    fn id(&self) -> &str;

    /// Whether the provider wants to answer for `property_name`.
    fn applies_to(&self, _property_name: &str) -> bool {
        true
    }

    fn suggestions(&self, word: &str, context: &SuggestionContext<'_>) -> Vec<Suggestion>;
}

/// The set of active providers.
#[derive(Default)]
pub struct SuggestionRegistry {
    providers: Vec<Box<dyn SuggestionProvider>>,
}

impl SuggestionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `provider`, replacing any provider registered under the same id.
    pub fn register(&mut self, provider: Box<dyn SuggestionProvider>) {
        self.unregister(provider.id());
        debug!(id = provider.id(), "registered suggestion provider");
        self.providers.push(provider);
    }

    /// Removes the provider with `id`. Returns whether one was registered.
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.providers.len();
        self.providers.retain(|provider| provider.id() != id);
        before != self.providers.len()
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|provider| provider.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Collects candidates for the word under the cursor from every applicable provider.
    pub fn suggestions(&self, context: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let word = context.word();
        self.providers
            .iter()
            .filter(|provider| provider.applies_to(context.property_name))
            .flat_map(|provider| provider.suggestions(word, context))
            .collect()
    }
}

/// Tracks which providers were registered for the current document type.
#[derive(Debug, Default)]
pub struct SuggestionRegistrar {
    schema_type: Option<SourceSchemaType>,
    registered: Vec<String>,
}

impl SuggestionRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_type(&self) -> Option<SourceSchemaType> {
        self.schema_type
    }

    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Disposes the previous registrations, then registers `providers` for `schema_type`.
    pub fn switch_schema(
        &mut self,
        registry: &mut SuggestionRegistry,
        schema_type: SourceSchemaType,
        providers: Vec<Box<dyn SuggestionProvider>>,
    ) {
        self.dispose(registry);
        for provider in providers {
            self.registered.push(provider.id().to_string());
            registry.register(provider);
        }
        self.schema_type = Some(schema_type);
        debug!(?schema_type, count = self.registered.len(), "switched suggestion providers");
    }

    /// Unregisters everything this registrar registered.
    pub fn dispose(&mut self, registry: &mut SuggestionRegistry) {
        for id in self.registered.drain(..) {
            registry.unregister(&id);
        }
        self.schema_type = None;
    }
}

/// The providers this crate contributes for `schema_type`.
///
/// Tests get variable, function and validation-matcher completion. Other document
/// types are served by providers the host registers itself.
pub fn providers_for(
    schema_type: SourceSchemaType,
    resource: &TestResource,
    catalog: &ActionCatalog,
) -> Vec<Box<dyn SuggestionProvider>> {
    match schema_type {
        SourceSchemaType::Test => vec![
            Box::new(TestVariableSuggestionProvider::from_resource(resource))
                as Box<dyn SuggestionProvider>,
            Box::new(TestFunctionSuggestionProvider::from_catalog(catalog)),
            Box::new(ValidationMatcherSuggestionProvider::from_catalog(catalog)),
        ],
        SourceSchemaType::Route => Vec::new(),
    }
}
