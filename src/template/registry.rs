//! Ordered placeholder registry

use super::value::Placeholder;

/// Placeholders keyed by name, kept in insertion order
///
/// Replacing an existing name keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderRegistry {
    entries: Vec<(String, Placeholder)>,
}

impl PlaceholderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    /// Store a placeholder, returning the entry it replaced
    pub fn insert(&mut self, name: impl Into<String>, placeholder: Placeholder) -> Option<Placeholder> {
        let name = name.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, placeholder)),
            None => {
                self.entries.push((name, placeholder));
                None
            }
        }
    }

    /// Get a placeholder by name
    pub fn get(&self, name: &str) -> Option<&Placeholder> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, placeholder)| placeholder)
    }

    /// Check if a placeholder exists
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove a placeholder, preserving the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Placeholder> {
        self.position(name)
            .map(|idx| self.entries.remove(idx).1)
    }

    /// Get all names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Placeholder)> {
        self.entries.iter().map(|(key, p)| (key.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Value;

    fn literal(v: &str) -> Placeholder {
        Placeholder::Literal(Value::from(v))
    }

    #[test]
    fn test_registry_insert_and_get() {
        let mut registry = PlaceholderRegistry::new();
        assert!(registry.insert("greeting", literal("ciao")).is_none());
        assert!(registry.contains("greeting"));
        assert_eq!(
            registry.get("greeting").and_then(|p| p.literal()),
            Some(&Value::from("ciao"))
        );
    }

    #[test]
    fn test_registry_overwrite_keeps_position() {
        let mut registry = PlaceholderRegistry::new();
        registry.insert("a", literal("1"));
        registry.insert("b", literal("2"));
        let previous = registry.insert("a", literal("3"));

        assert!(previous.is_some());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("a").and_then(|p| p.literal()),
            Some(&Value::from("3"))
        );
    }

    #[test]
    fn test_registry_remove_preserves_order() {
        let mut registry = PlaceholderRegistry::new();
        for name in ["a", "b", "c"] {
            registry.insert(name, literal(name));
        }
        assert!(registry.remove("b").is_some());
        assert!(registry.remove("b").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = PlaceholderRegistry::new();
        registry.insert("a", literal("1"));
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get("a").is_none());
    }
}
