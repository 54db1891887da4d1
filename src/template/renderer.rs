//! The template renderer

use tracing::{debug, trace, warn};

use super::registry::PlaceholderRegistry;
use super::value::{Binding, Callback, Placeholder, Substitution, Value};
use crate::error::PlaceholderError;
use crate::pattern::{self, PlaceholderToken, Segment};

/// A pattern plus the placeholders used to fill it in
///
/// Rendering never mutates the renderer. Computed placeholders are invoked
/// on every render, once per occurrence, so their output follows any change
/// to the state their bindings point at.
#[derive(Debug, Default, Clone)]
pub struct TemplateRenderer {
    pattern: String,
    registry: PlaceholderRegistry,
}

impl TemplateRenderer {
    /// Create an empty renderer: empty pattern, no placeholders
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a pattern
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            registry: PlaceholderRegistry::new(),
        }
    }

    /// Register a placeholder, overwriting any entry with the same name
    ///
    /// `bindings` only matter for computed values and must match the
    /// callback's arity. On a mismatch the callback is still stored, but
    /// without bindings, and rendering it fails until it is registered again.
    pub fn add_placeholder(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Substitution>,
        bindings: Vec<Binding>,
    ) -> Result<(), PlaceholderError> {
        let name = name.into();
        match value.into() {
            Substitution::Literal(value) => {
                self.store(name, Placeholder::Literal(value));
                Ok(())
            }
            Substitution::Computed(callback) => {
                let expected = callback.arity();
                let found = bindings.len();
                if expected != found {
                    warn!(%name, expected, found, "callback arity mismatch");
                    self.store(
                        name.clone(),
                        Placeholder::Computed {
                            callback,
                            bindings: None,
                        },
                    );
                    return Err(PlaceholderError::arity_mismatch(name, expected, found));
                }
                self.store(
                    name,
                    Placeholder::Computed {
                        callback,
                        bindings: Some(bindings),
                    },
                );
                Ok(())
            }
        }
    }

    /// Register a literal placeholder
    pub fn add_literal(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.store(name.into(), Placeholder::Literal(value.into()));
    }

    /// Register a computed placeholder
    pub fn add_computed(
        &mut self,
        name: impl Into<String>,
        callback: Callback,
        bindings: Vec<Binding>,
    ) -> Result<(), PlaceholderError> {
        self.add_placeholder(name, callback, bindings)
    }

    fn store(&mut self, name: String, placeholder: Placeholder) {
        let computed = placeholder.is_computed();
        if self.registry.insert(name.as_str(), placeholder).is_some() {
            debug!(%name, computed, "placeholder replaced");
        } else {
            debug!(%name, computed, "placeholder registered");
        }
    }

    pub fn has_placeholder(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Stored value for `name`, `None` if it is not registered
    pub fn get_placeholder(&self, name: &str) -> Option<&Placeholder> {
        self.registry.get(name)
    }

    /// Remove a placeholder together with its bindings
    pub fn remove_placeholder(&mut self, name: &str) -> Result<Placeholder, PlaceholderError> {
        let removed = self
            .registry
            .remove(name)
            .ok_or_else(|| PlaceholderError::unknown(name))?;
        debug!(%name, "placeholder removed");
        Ok(removed)
    }

    /// Remove every placeholder, keeping the pattern
    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replace the pattern. Tokens are not checked until rendering.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    /// Placeholder tokens of the current pattern, in order of appearance
    pub fn tokens(&self) -> Vec<PlaceholderToken<'_>> {
        pattern::tokens(&self.pattern).collect()
    }

    /// Distinct names referenced by the pattern, in order of first appearance
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for token in pattern::tokens(&self.pattern) {
            if !names.contains(&token.name) {
                names.push(token.name);
            }
        }
        names
    }

    /// Tokens of the current pattern that name no registered placeholder
    pub fn unresolved(&self) -> Vec<PlaceholderToken<'_>> {
        pattern::tokens(&self.pattern)
            .filter(|token| !self.registry.contains(token.name))
            .collect()
    }

    /// Render the stored pattern
    ///
    /// Unregistered tokens are left as they are.
    pub fn render(&self) -> Result<String, PlaceholderError> {
        self.render_pattern(&self.pattern)
    }

    /// Render the stored pattern, failing on the first unregistered token
    pub fn render_strict(&self) -> Result<String, PlaceholderError> {
        if let Some(token) = self.unresolved().into_iter().next() {
            return Err(PlaceholderError::unresolved(token.name, token.span));
        }
        self.render()
    }

    /// Render any pattern against the registered placeholders
    ///
    /// The stored pattern is left untouched.
    pub fn render_pattern(&self, pattern: &str) -> Result<String, PlaceholderError> {
        let segments = pattern::scan(pattern);
        let mut out = String::with_capacity(pattern.len());
        let mut substituted = 0usize;

        for segment in &segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(token) => match self.registry.get(token.name) {
                    Some(placeholder) => {
                        out.push_str(&resolve(token.name, placeholder)?);
                        substituted += 1;
                    }
                    None => out.push_str(&pattern[token.span.clone()]),
                },
            }
        }

        trace!(segments = segments.len(), substituted, "pattern rendered");
        Ok(out)
    }
}

/// Final text for one occurrence of a placeholder
fn resolve(name: &str, placeholder: &Placeholder) -> Result<String, PlaceholderError> {
    match placeholder {
        Placeholder::Literal(value) => Ok(value.to_string()),
        Placeholder::Computed {
            callback,
            bindings: Some(bindings),
        } => {
            let args: Vec<Value> = bindings.iter().map(Binding::resolve).collect();
            Ok(callback.call(&args).to_string())
        }
        Placeholder::Computed { bindings: None, .. } => Err(PlaceholderError::unbound(name)),
    }
}
