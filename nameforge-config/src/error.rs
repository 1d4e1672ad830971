use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for nameforge-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid descriptor error, pointing at the descriptor if it
    /// can be found in the source.
    pub fn invalid_descriptor_error(
        &self,
        key: impl Into<String>,
        descriptor: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let descriptor = descriptor.into();
        let span = find_value_span(&self.src, &descriptor);
        Box::new(Error::InvalidDescriptor {
            src: self.named_source(),
            span,
            key: key.into(),
            descriptor,
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a nameforge.toml with a [naming] table, or pass overrides on the command line"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse nameforge.toml")]
    #[diagnostic(code(nameforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid generator descriptor '{descriptor}' for '{key}'")]
    #[diagnostic(
        code(nameforge::invalid_descriptor),
        help("{reason}. Use 'fullTypeName' or 'assemblyName:fullTypeName'.")
    )]
    InvalidDescriptor {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid descriptor")]
        span: Option<SourceSpan>,
        key: String,
        descriptor: String,
        reason: String,
    },
}

/// Find the span of a quoted string value in the TOML source.
///
/// Falls back to the first bare occurrence when the quoted form is absent.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "[naming]\nenum_name_generator = \"plugins:Gen\"\n";
        let span = find_value_span(src, "plugins:Gen").unwrap();
        assert_eq!(span.offset(), 32);
        assert_eq!(span.len(), 11);
    }

    #[test]
    fn test_find_value_span_single_quotes() {
        let src = "type_name_generator = 'a b'";
        let span = find_value_span(src, "a b").unwrap();
        assert_eq!(span.offset(), 23);
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("[naming]", "nope").is_none());
        assert!(find_value_span("[naming]", "").is_none());
    }
}
