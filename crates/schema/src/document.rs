//! Response bodies whose root element is not known in advance.
//!
//! Most calls know which entity they expect, but any call may come back with
//! an `<error>` document instead. [`Document`] reads the root tag first and
//! then parses the matching entity.

use crate::api_error::ApiError;
use crate::profile::{Connections, People, Person};
use crate::skills::Skills;
use linkedin_xml::entity::accepts_tag;
use linkedin_xml::{
    ParseContext, QuickXmlCursor, Result, SchemaEntity, StructuralViolation, XmlCursor, parse,
};

/// A parsed top-level response document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Person(Box<Person>),
    Connections(Connections),
    People(People),
    Skills(Skills),
    Error(ApiError),
}

impl Document {
    /// Parses a response body, choosing the entity by its root element.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        Self::from_xml_str_with(xml, &ParseContext::new())
    }

    /// Parses a response body with an explicit context.
    pub fn from_xml_str_with(xml: &str, ctx: &ParseContext<'_>) -> Result<Self> {
        let mut cursor = QuickXmlCursor::from_xml_str(xml);
        cursor.advance_to_root()?;
        let root = cursor.name().unwrap_or_default();

        if accepts_tag::<Person>(root) {
            Ok(Document::Person(Box::new(parse(&mut cursor, ctx)?)))
        } else if accepts_tag::<Connections>(root) {
            Ok(Document::Connections(parse(&mut cursor, ctx)?))
        } else if accepts_tag::<People>(root) {
            Ok(Document::People(parse(&mut cursor, ctx)?))
        } else if accepts_tag::<Skills>(root) {
            Ok(Document::Skills(parse(&mut cursor, ctx)?))
        } else if accepts_tag::<ApiError>(root) {
            Ok(Document::Error(parse(&mut cursor, ctx)?))
        } else {
            Err(StructuralViolation::UnexpectedRoot {
                expected: "person, connections, people, skills or error",
                found: root.to_string(),
            }
            .into())
        }
    }

    /// Wire tag of the document's root element.
    pub fn tag(&self) -> &'static str {
        match self {
            Document::Person(_) => Person::TAG,
            Document::Connections(_) => Connections::TAG,
            Document::People(_) => People::TAG,
            Document::Skills(_) => Skills::TAG,
            Document::Error(_) => ApiError::TAG,
        }
    }

    /// The error document, if the API returned one.
    pub fn as_error(&self) -> Option<&ApiError> {
        match self {
            Document::Error(error) => Some(error),
            _ => None,
        }
    }
}
