//! Parser and writer configuration.
//!
//! The engine reads no environment variables or files. Embedding applications
//! either build a [`ParserConfig`] or [`WriterConfig`] in code or deserialize
//! one from their own configuration source, then hand it to the `_config`
//! boundary operations.
//!
//! | Type | Key | Default | Description |
//! |------|-----|---------|-------------|
//! | [`WriterConfig`] | `indent` | none | Spaces per nesting level; none writes compact XML |
//! | [`WriterConfig`] | `xml_declaration` | `false` | Emit `<?xml version="1.0" encoding="UTF-8"?>` |
//! | [`ParserConfig`] | `max_depth` | 256 | Deepest element nesting accepted |
//! | [`ParserConfig`] | `strict_text` | `true` | Reject stray text between child elements |
//!
//! # Example
//!
//! ```rust
//! use linkedin_xml::WriterConfig;
//!
//! let writer: WriterConfig = serde_json::from_str(r#"{ "indent": 2 }"#).unwrap();
//! assert_eq!(writer.indent, Some(2));
//! assert!(!writer.xml_declaration);
//! ```

use serde::{Deserialize, Serialize};

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse-side settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest element nesting accepted before failing with `TooDeep`.
    pub max_depth: usize,
    /// When `true`, non-whitespace text between child elements is a
    /// structural violation. When `false` it is ignored.
    pub strict_text: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_text: true,
        }
    }
}

/// Serialize-side settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Indentation width in spaces. `None` writes compact output.
    pub indent: Option<usize>,
    /// Emit an XML declaration before the root element.
    pub xml_declaration: bool,
}

impl WriterConfig {
    /// Compact output with no declaration.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output with an XML declaration, for request bodies that are
    /// logged or inspected by hand.
    pub fn pretty() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
        }
    }
}
