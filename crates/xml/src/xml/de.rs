//! Parse boundary: turning an XML document into a typed entity.
//!
//! [`parse`] works on any [`XmlCursor`] and is what a transport layer calls on
//! a response body. The `from_xml_*` functions build a [`QuickXmlCursor`]
//! over common input types and call it.

use crate::config::ParserConfig;
use crate::entity::{ParseContext, SchemaEntity, accepts_tag, parse_child};
use crate::error::{Result, StructuralViolation};
use crate::xml::cursor::{EventKind, QuickXmlCursor, XmlCursor, is_blank};
use std::io::BufRead;

/// Parses the document's root element as an `E`.
///
/// The cursor may be at the start of the document or already on the root start
/// tag. The root must be named [`SchemaEntity::TAG`] or one of the entity's
/// [`SchemaEntity::ALIASES`]; anything else fails with
/// [`StructuralViolation::UnexpectedRoot`] before any field is read.
pub fn parse<E: SchemaEntity>(cursor: &mut dyn XmlCursor, ctx: &ParseContext<'_>) -> Result<E> {
    seek_root(cursor)?;
    let found = cursor.name().unwrap_or_default();
    if !accepts_tag::<E>(found) {
        return Err(StructuralViolation::UnexpectedRoot {
            expected: E::TAG,
            found: found.to_string(),
        }
        .into());
    }

    let span = tracing::debug_span!("parse", root = E::TAG);
    let _guard = span.enter();
    let entity = parse_child::<E>(cursor, ctx)?;
    tracing::trace!("parsed root element");
    Ok(entity)
}

/// Moves the cursor onto the first start tag, skipping the prolog.
fn seek_root(cursor: &mut dyn XmlCursor) -> Result<()> {
    loop {
        match cursor.event() {
            EventKind::StartTag => return Ok(()),
            EventKind::StartDocument => {}
            EventKind::Text if cursor.text().map(is_blank).unwrap_or(true) => {}
            _ => {
                return Err(StructuralViolation::NotOnStartTag {
                    found: cursor.describe(),
                }
                .into());
            }
        }
        cursor.next()?;
    }
}

/// Parse an entity from an XML string.
///
/// # Examples
///
/// ```ignore
/// use linkedin_xml::from_xml_str;
/// use linkedin_schema::ApiStandardProfileRequest;
///
/// let xml = "<api-standard-profile-request><url>http://x</url></api-standard-profile-request>";
/// let request: ApiStandardProfileRequest = from_xml_str(xml)?;
/// ```
pub fn from_xml_str<E: SchemaEntity>(xml: &str) -> Result<E> {
    from_xml_str_with(xml, &ParseContext::new())
}

/// Parse an entity from an XML string with an explicit context.
pub fn from_xml_str_with<E: SchemaEntity>(xml: &str, ctx: &ParseContext<'_>) -> Result<E> {
    let mut cursor = QuickXmlCursor::from_xml_str(xml);
    parse(&mut cursor, ctx)
}

/// Parse an entity from XML bytes, which must be UTF-8.
pub fn from_xml_slice<E: SchemaEntity>(xml: &[u8]) -> Result<E> {
    let xml = std::str::from_utf8(xml)?;
    from_xml_str(xml)
}

/// Parse an entity from a buffered reader.
pub fn from_xml_reader<R: BufRead, E: SchemaEntity>(reader: R) -> Result<E> {
    from_xml_reader_with(reader, &ParseContext::new())
}

/// Parse an entity from a buffered reader with an explicit context.
pub fn from_xml_reader_with<R: BufRead, E: SchemaEntity>(
    reader: R,
    ctx: &ParseContext<'_>,
) -> Result<E> {
    let mut cursor = QuickXmlCursor::from_reader(reader);
    parse(&mut cursor, ctx)
}

/// Parse an entity from an XML string under the given parser settings,
/// reporting unknown elements through `tracing`.
pub fn from_xml_str_config<E: SchemaEntity>(xml: &str, config: &ParserConfig) -> Result<E> {
    from_xml_str_with(xml, &ParseContext::new().with_config(config.clone()))
}
