//! Placeholder System - named-placeholder string templates
//!
//! Patterns contain `{name}` tokens that are replaced by literal values or by
//! the output of callbacks bound to caller-owned state.
//!
//! # Example
//!
//! ```rust
//! use placeholder_system::TemplateRenderer;
//!
//! let mut tpl = TemplateRenderer::with_pattern("Now replacing placeholder replace with {replace}");
//! tpl.add_literal("replace", "sostituto");
//! assert_eq!(
//!     tpl.render().unwrap(),
//!     "Now replacing placeholder replace with sostituto"
//! );
//! ```

pub mod config;
pub mod error;
pub mod pattern;
pub mod template;

pub use config::{ConfigError, TemplateConfig};
pub use error::PlaceholderError;
pub use pattern::{PlaceholderToken, Segment, Span};
pub use template::{
    Binding, Callback, Placeholder, PlaceholderRegistry, Substitution, TemplateRenderer, Value,
};

/// Render a pattern against a list of literal values in one call
///
/// # Example
///
/// ```rust
/// use placeholder_system::render;
///
/// let out = render("{level}: {msg}", [("level", "WARN"), ("msg", "disk full")]).unwrap();
/// assert_eq!(out, "WARN: disk full");
/// ```
pub fn render<I, K, V>(pattern: &str, values: I) -> Result<String, PlaceholderError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let mut renderer = TemplateRenderer::with_pattern(pattern);
    for (name, value) in values {
        renderer.add_literal(name, value);
    }
    renderer.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_one_shot() {
        let out = render("{a}-{b}", [("a", 1), ("b", 2)]).unwrap();
        assert_eq!(out, "1-2");
    }

    #[test]
    fn test_render_one_shot_unknown_token() {
        let out = render("{a} {b}", [("a", "x")]).unwrap();
        assert_eq!(out, "x {b}");
    }

    #[test]
    fn test_render_one_shot_empty() {
        let out = render("{x}", Vec::<(String, Value)>::new()).unwrap();
        assert_eq!(out, "{x}");
    }
}
