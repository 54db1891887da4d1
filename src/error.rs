//! Error types for placeholder registration and rendering

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::pattern::Span;

/// Errors that can occur while registering placeholders or rendering
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceholderError {
    /// Bound argument count differs from the callback's declared arity
    #[error("placeholder '{name}' expects {expected} bound argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    /// Removal of a name that is not registered
    #[error("placeholder '{name}' does not exist")]
    UnknownPlaceholder { name: String },

    /// Computed placeholder whose registration failed the arity check
    #[error("placeholder '{name}' has no bound arguments")]
    UnboundPlaceholder { name: String },

    /// Token naming an unregistered placeholder (strict rendering)
    #[error("unresolved placeholder '{{{name}}}'")]
    UnresolvedToken { name: String, span: Span },
}

impl PlaceholderError {
    pub fn arity_mismatch(name: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ArityMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownPlaceholder { name: name.into() }
    }

    pub fn unbound(name: impl Into<String>) -> Self {
        Self::UnboundPlaceholder { name: name.into() }
    }

    pub fn unresolved(name: impl Into<String>, span: Span) -> Self {
        Self::UnresolvedToken {
            name: name.into(),
            span,
        }
    }

    /// Placeholder name the error is about
    pub fn name(&self) -> &str {
        match self {
            Self::ArityMismatch { name, .. }
            | Self::UnknownPlaceholder { name }
            | Self::UnboundPlaceholder { name }
            | Self::UnresolvedToken { name, .. } => name,
        }
    }

    /// Get the pattern span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnresolvedToken { span, .. } => Some(span),
            _ => None,
        }
    }

    /// Format the error against the pattern it came from using ariadne
    ///
    /// Errors without a span are reported at the start of the pattern with no
    /// label. Output is uncolored.
    pub fn format(&self, pattern: &str, source_name: &str) -> String {
        let mut buf = Vec::new();
        let offset = self.span().map_or(0, |span| span.start);
        let message = self.to_string();

        let mut report = Report::build(ReportKind::Error, source_name, offset)
            .with_config(Config::default().with_color(false))
            .with_message(&message);

        if let Some(span) = self.span() {
            report = report.with_label(
                Label::new((source_name, span.clone()))
                    .with_message(format!("'{}' is not registered", self.name()))
                    .with_color(Color::Yellow),
            );
        }

        if report
            .finish()
            .write((source_name, Source::from(pattern)), &mut buf)
            .is_err()
        {
            return message;
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_display() {
        let err = PlaceholderError::arity_mismatch("square", 1, 2);
        assert_eq!(
            err.to_string(),
            "placeholder 'square' expects 1 bound argument(s), got 2"
        );
    }

    #[test]
    fn test_unknown_display() {
        let err = PlaceholderError::unknown("missing");
        assert!(err.to_string().contains("missing"));
        assert_eq!(err.name(), "missing");
        assert!(err.span().is_none());
    }

    #[test]
    fn test_unresolved_display_keeps_braces() {
        let err = PlaceholderError::unresolved("user", 6..12);
        assert_eq!(err.to_string(), "unresolved placeholder '{user}'");
        assert_eq!(err.span(), Some(&(6..12)));
    }

    #[test]
    fn test_format_unresolved_report() {
        let pattern = "Hello {user}!";
        let err = PlaceholderError::unresolved("user", 6..12);
        let report = err.format(pattern, "greeting");
        assert!(report.contains("unresolved placeholder '{user}'"));
        assert!(report.contains("'user' is not registered"));
        assert!(report.contains("greeting"));
    }

    #[test]
    fn test_format_without_span() {
        let err = PlaceholderError::unknown("gone");
        let report = err.format("{gone}", "pattern");
        assert!(report.contains("placeholder 'gone' does not exist"));
    }
}
