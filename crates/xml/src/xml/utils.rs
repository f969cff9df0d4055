//! Tag utilities shared by every entity.
//!
//! These are stateless helpers over [`XmlCursor`] and [`XmlSink`]: reading the
//! text of a leaf element, writing a scalar element, and skipping an element
//! the caller does not recognize.

use crate::error::{MappingError, Result, StructuralViolation};
use crate::xml::cursor::{EventKind, XmlCursor};
use crate::xml::sink::XmlSink;
use std::fmt::Display;
use std::str::FromStr;

/// Reads the text content of the leaf element the cursor is on.
///
/// The cursor must be on the element's start tag. On return it is on the
/// matching end tag, so the next advance yields the following sibling.
/// An empty element yields the empty string.
pub fn read_text(cursor: &mut dyn XmlCursor) -> Result<String> {
    require_start(cursor)?;
    let depth = cursor.depth();
    let mut text = String::new();
    loop {
        match cursor.next()? {
            EventKind::Text => text.push_str(cursor.text().unwrap_or_default()),
            EventKind::EndTag if cursor.depth() == depth => return Ok(text),
            EventKind::StartTag => {
                return Err(StructuralViolation::Malformed {
                    detail: format!("element {} inside a text-only element", cursor.describe()),
                }
                .into());
            }
            EventKind::EndDocument => return Err(truncated(cursor)),
            _ => continue,
        }
    }
}

/// Writes `<name>value</name>`, or nothing at all when the value is unset.
pub fn write_scalar(sink: &mut dyn XmlSink, name: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    sink.start_element(name, &[])?;
    // Always emit the text event, even when empty, so indenting writers keep
    // the end tag on the same line.
    sink.text(value)?;
    sink.end_element(name)
}

/// Consumes the element the cursor is on, including all nested children.
///
/// Uses an explicit depth counter rather than recursion, so arbitrarily deep
/// unknown content costs no stack. On return the cursor is on the element's
/// end tag.
pub fn skip_subtree(cursor: &mut dyn XmlCursor) -> Result<()> {
    require_start(cursor)?;
    let mut open = 1usize;
    while open > 0 {
        match cursor.next()? {
            EventKind::StartTag => open += 1,
            EventKind::EndTag => open -= 1,
            EventKind::EndDocument => return Err(truncated(cursor)),
            _ => {}
        }
    }
    Ok(())
}

/// Collapses whitespace: trims both ends and replaces every internal run of
/// spaces, tabs, carriage returns and line feeds with a single space.
pub fn normalize(raw: &str) -> String {
    raw.split(is_xml_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Converts scalar text into the field's type.
pub fn parse_scalar<T: FromStr>(entity: &'static str, field: &'static str, raw: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| MappingError::InvalidValue {
        entity,
        field,
        value: raw.to_string(),
    })
}

/// Formats an optional scalar for [`write_scalar`].
pub fn format_scalar<T: Display>(value: Option<&T>) -> Option<String> {
    value.map(ToString::to_string)
}

fn require_start(cursor: &dyn XmlCursor) -> Result<()> {
    if cursor.event() == EventKind::StartTag {
        Ok(())
    } else {
        Err(StructuralViolation::NotOnStartTag {
            found: cursor.describe(),
        }
        .into())
    }
}

fn truncated(cursor: &dyn XmlCursor) -> MappingError {
    StructuralViolation::Truncated {
        open: cursor.name().unwrap_or_default().to_string(),
    }
    .into()
}
