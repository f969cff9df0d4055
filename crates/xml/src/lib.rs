//! # LinkedIn XML Mapping Engine
//!
//! Converts between a forward-only XML event stream and a tree of typed schema
//! entities, for the documents exchanged with the LinkedIn REST API.
//!
//! ## Features
//!
//! - **One mapping mechanism**: every entity declares its wire tag and an
//!   ordered field table ([`SchemaEntity`]), usually through
//!   [`schema_entity!`]. A single generic driver interprets the table for
//!   parsing, serialization and validation.
//! - **Forward compatible**: elements an entity does not declare are skipped
//!   with an explicit depth counter and reported to an injectable
//!   [`Diagnostics`] sink, never treated as errors.
//! - **Static polymorphism**: abstract field types are [`Capability`] markers
//!   bound to exactly one concrete variant at compile time ([`capabilities!`]).
//! - **Order tolerant input, order strict output**: children may arrive in any
//!   order; output always follows the declared field order and omits unset
//!   fields.
//!
//! ## Examples
//!
//! ```ignore
//! use linkedin_xml::{from_xml_str, to_xml_string, validate};
//! use linkedin_schema::ApiStandardProfileRequest;
//!
//! let xml = "<api-standard-profile-request><url>http://x</url></api-standard-profile-request>";
//! let request: ApiStandardProfileRequest = from_xml_str(xml)?;
//! assert_eq!(request.url.as_deref(), Some("http://x"));
//!
//! // Parsing is permissive; checking required fields is a separate step.
//! assert!(validate(&request).is_err());
//!
//! let back = to_xml_string(&request)?;
//! ```

pub mod config;
pub mod diagnostics;
pub mod entity;
pub mod error;
mod macros;
pub mod resolve;
pub mod xml;

// Re-export common types and functions
pub use config::{ParserConfig, WriterConfig};
pub use diagnostics::{
    CollectingDiagnostics, Diagnostics, SilentDiagnostics, TracingDiagnostics, UnknownElement,
};
pub use entity::{Access, Field, FieldKind, ParseContext, ParseState, SchemaEntity, validate};
pub use error::{MappingError, Result, StructuralViolation};
pub use resolve::{Binding, Capability, Resolved};
pub use xml::{EventKind, QuickXmlCursor, QuickXmlSink, XmlCursor, XmlSink};

// Re-export the boundary operations at top level for convenience
pub use xml::{
    from_xml_reader, from_xml_reader_with, from_xml_slice, from_xml_str, from_xml_str_config,
    from_xml_str_with, parse, serialize, to_xml_string, to_xml_string_config, to_xml_vec,
    to_xml_vec_config, to_xml_writer, to_xml_writer_config,
};
