//! The XML side of the mapper.
//!
//! - [`cursor`]: the forward-only pull cursor the parser drives
//! - [`sink`]: the event sink the serializer writes to
//! - [`utils`]: tag utilities shared by every entity
//! - [`de`] and [`ser`]: the two boundary operations, over strings, byte
//!   slices, readers and writers
//!
//! ## Wire shape
//!
//! One element per entity. Scalar fields are leaf elements whose text is the
//! value; counters such as `total` are attributes on the entity's start tag;
//! repeated children are sibling elements in input order:
//!
//! ```xml
//! <api-standard-profile-request>
//!   <url>http://api.linkedin.com/v1/people/x</url>
//!   <headers total="1">
//!     <http-header>
//!       <name>x-li-auth-token</name>
//!       <value>name:abc</value>
//!     </http-header>
//!   </headers>
//! </api-standard-profile-request>
//! ```
//!
//! Input order is free; output order is the declared field order. Unknown
//! elements are skipped on input and never written.

pub mod cursor;
pub mod de;
pub mod ser;
pub mod sink;
pub mod utils;

pub use cursor::{EventKind, QuickXmlCursor, XmlCursor};
pub use sink::{QuickXmlSink, XmlSink};

// Re-export serialization functions
pub use ser::{
    serialize, to_xml_string, to_xml_string_config, to_xml_vec, to_xml_vec_config,
    to_xml_writer, to_xml_writer_config,
};

// Re-export deserialization functions
pub use de::{
    from_xml_reader, from_xml_reader_with, from_xml_slice, from_xml_str, from_xml_str_config,
    from_xml_str_with, parse,
};
