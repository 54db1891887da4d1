//! TOML template definitions
//!
//! A template definition carries a pattern and a table of literal
//! placeholders. Computed placeholders cannot be expressed in TOML and are
//! added to the resulting renderer in code.
//!
//! ```toml
//! pattern = "Hello {user}, you have {count} new messages"
//!
//! [metadata]
//! name = "inbox"
//!
//! [placeholders]
//! user = "ada"
//! count = 3
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::template::{TemplateRenderer, Value};

/// Errors that can occur when parsing template definitions
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse template TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Placeholder '{name}' has unsupported value type {kind}")]
    UnsupportedValue { name: String, kind: &'static str },
}

/// A template definition: pattern plus literal placeholders
#[derive(Debug, Clone, Default)]
pub struct TemplateConfig {
    /// Optional name for the template
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Pattern to render
    pub pattern: String,
    /// Literal placeholders in document order
    pub placeholders: Vec<(String, Value)>,
}

/// TOML structure for deserializing template definitions
#[derive(Deserialize)]
struct TomlTemplate {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    pattern: String,
    #[serde(default)]
    placeholders: toml::Table,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl TemplateConfig {
    /// Load a template definition from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlTemplate = toml::from_str(content)?;

        let placeholders = parsed
            .placeholders
            .into_iter()
            .map(|(name, value)| {
                let value = literal_from_toml(&name, value)?;
                Ok((name, value))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(TemplateConfig {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            pattern: parsed.pattern,
            placeholders,
        })
    }

    /// Build a renderer with the pattern and every literal registered
    pub fn into_renderer(self) -> TemplateRenderer {
        let mut renderer = TemplateRenderer::with_pattern(self.pattern);
        for (name, value) in self.placeholders {
            renderer.add_literal(name, value);
        }
        renderer
    }
}

fn literal_from_toml(name: &str, value: toml::Value) -> Result<Value, ConfigError> {
    match value {
        toml::Value::String(s) => Ok(Value::Str(s)),
        toml::Value::Integer(n) => Ok(Value::Int(n)),
        toml::Value::Float(x) => Ok(Value::Float(x)),
        toml::Value::Boolean(b) => Ok(Value::Bool(b)),
        other => Err(ConfigError::UnsupportedValue {
            name: name.to_string(),
            kind: other.type_str(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r#"
pattern = "Hello {user}"

[metadata]
name = "greeting"
description = "A test template"

[placeholders]
user = "ada"
"#;
        let config = TemplateConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.name, Some("greeting".to_string()));
        assert_eq!(config.description, Some("A test template".to_string()));
        assert_eq!(config.pattern, "Hello {user}");
        assert_eq!(
            config.placeholders,
            vec![("user".to_string(), Value::from("ada"))]
        );
    }

    #[test]
    fn test_placeholders_keep_document_order() {
        let toml_str = r#"
pattern = "{z} {a} {m}"

[placeholders]
z = 1
a = 2.5
m = true
"#;
        let config = TemplateConfig::from_str(toml_str).expect("Should parse");
        let names: Vec<_> = config.placeholders.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);

        let renderer = config.into_renderer();
        assert_eq!(renderer.names().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(renderer.render().unwrap(), "1 2.5 true");
    }

    #[test]
    fn test_missing_sections_default() {
        let config = TemplateConfig::from_str("").expect("Should parse");
        assert_eq!(config.name, None);
        assert!(config.pattern.is_empty());
        assert!(config.placeholders.is_empty());
    }

    #[test]
    fn test_unsupported_value_error() {
        let toml_str = r#"
[placeholders]
list = [1, 2]
"#;
        let err = TemplateConfig::from_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedValue { ref name, kind: "array" } if name == "list"
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(TemplateConfig::from_str(invalid).is_err());
    }
}
