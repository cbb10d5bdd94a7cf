use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for table file operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the file content and name so validation code can build
/// diagnostics without threading both through every call.
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

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
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

    /// Create a validation error, pointing at `needle` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: crate::validate::find_key_span(&self.src, needle),
            message: message.into(),
        })
    }

    /// Create an invalid scalar kind error.
    pub fn invalid_scalar_kind_error(&self, target_type: &str, kind: &str) -> Box<Error> {
        Box::new(Error::InvalidScalarKind {
            src: self.named_source(),
            span: crate::validate::find_value_span(&self.src, target_type, kind),
            target_type: target_type.to_string(),
            kind: kind.to_string(),
            valid: crate::validate::scalar_kind_names(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(typeloom::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table file")]
    #[diagnostic(code(typeloom::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid scalar kind '{kind}' for '{target_type}'")]
    #[diagnostic(code(typeloom::invalid_scalar_kind), help("valid kinds are: {valid}"))]
    InvalidScalarKind {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown scalar kind")]
        span: Option<SourceSpan>,
        target_type: String,
        kind: String,
        valid: String,
    },

    #[error("{message}")]
    #[diagnostic(code(typeloom::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
