//! Error types for XML object mapping.
//!
//! # Taxonomy
//!
//! | Condition | Variant | Recoverable |
//! |-----------|---------|-------------|
//! | Cursor not on the expected start tag | [`StructuralViolation::NotOnStartTag`] | no |
//! | Root element has the wrong name | [`StructuralViolation::UnexpectedRoot`] | no |
//! | Stream ends before a close tag | [`StructuralViolation::Truncated`] | no |
//! | Stray text between child elements | [`StructuralViolation::UnexpectedText`] | no |
//! | Nesting deeper than the configured limit | [`StructuralViolation::TooDeep`] | no |
//! | Mismatched or unclosed markup | [`StructuralViolation::Malformed`] | no |
//! | Scalar text that does not parse | [`MappingError::InvalidValue`] | no |
//! | Unknown child element | not an error, reported to diagnostics | yes |
//! | Required field never set | [`MappingError::MissingRequired`], only from `validate` | n/a |
//!
//! The cursor is forward-only, so a failed parse can never be retried from the
//! same cursor. Callers re-acquire a fresh stream instead.

use thiserror::Error;

/// A violation of the element structure the mapper expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralViolation {
    /// `init` was called while the cursor was not on a start tag.
    #[error("expected a start tag, found {found}")]
    NotOnStartTag {
        /// Description of the event the cursor was on.
        found: String,
    },

    /// The document root does not match the requested entity.
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        /// Tag of the entity being parsed.
        expected: &'static str,
        /// Tag actually present in the stream.
        found: String,
    },

    /// The stream ended while an element was still open.
    #[error("document ended before </{open}> was closed")]
    Truncated {
        /// Name of the innermost open element.
        open: String,
    },

    /// Non-whitespace text appeared where only child elements are allowed.
    #[error("unexpected text inside <{context}>")]
    UnexpectedText {
        /// Element in which the text appeared.
        context: String,
    },

    /// Element nesting exceeded the configured limit.
    #[error("element nesting exceeds the limit of {limit}")]
    TooDeep {
        /// The configured maximum depth.
        limit: usize,
    },

    /// The reader rejected the markup itself (mismatched or unclosed tags).
    #[error("malformed markup: {detail}")]
    Malformed {
        /// Reader diagnostic.
        detail: String,
    },
}

/// The primary error type for parse, serialize and validate operations.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The stream does not have the shape the entity expects.
    #[error("structural violation: {0}")]
    Structural(#[from] StructuralViolation),

    /// A scalar field's text could not be converted to the field's type.
    #[error("invalid value {value:?} for <{entity}>/{field}")]
    InvalidValue {
        /// Tag of the entity declaring the field.
        entity: &'static str,
        /// Wire name of the field.
        field: &'static str,
        /// The raw text found in the stream.
        value: String,
    },

    /// Required fields left unset, as reported by [`crate::validate`].
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    /// Low-level XML syntax error from the reader or writer.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An entity or character reference that cannot be resolved.
    #[error("bad escape: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// IO error while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Element names or text that are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl MappingError {
    /// Returns `true` if the error is a [`StructuralViolation`].
    pub fn is_structural(&self) -> bool {
        matches!(self, MappingError::Structural(_))
    }

    /// Returns the structural violation, if this is one.
    pub fn as_structural(&self) -> Option<&StructuralViolation> {
        match self {
            MappingError::Structural(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<std::string::FromUtf8Error> for MappingError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        MappingError::Utf8(err.utf8_error())
    }
}

/// Result type alias for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
