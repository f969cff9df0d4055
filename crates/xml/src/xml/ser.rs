//! Serialize boundary: writing a typed entity as an XML document.
//!
//! [`serialize`] writes through any [`XmlSink`]. The `to_xml_*` functions build
//! a [`QuickXmlSink`] over common outputs; the `_config` variants honour a
//! [`WriterConfig`] for indentation and the XML declaration.

use crate::config::WriterConfig;
use crate::entity::SchemaEntity;
use crate::error::Result;
use crate::xml::sink::{QuickXmlSink, XmlSink};
use std::io::Write;

/// Writes `entity` as one complete element.
pub fn serialize<E: SchemaEntity>(entity: &E, sink: &mut dyn XmlSink) -> Result<()> {
    let span = tracing::debug_span!("serialize", root = E::TAG);
    let _guard = span.enter();
    entity.serialize(sink)
}

/// Serialize an entity to a compact XML string.
///
/// # Examples
///
/// ```ignore
/// use linkedin_xml::to_xml_string;
/// use linkedin_schema::HttpHeader;
///
/// let header = HttpHeader { name: Some("a".into()), value: None };
/// assert_eq!(to_xml_string(&header)?, "<http-header><name>a</name></http-header>");
/// ```
pub fn to_xml_string<E: SchemaEntity>(entity: &E) -> Result<String> {
    to_xml_string_config(entity, &WriterConfig::default())
}

/// Serialize an entity to an XML string using the given writer settings.
pub fn to_xml_string_config<E: SchemaEntity>(entity: &E, config: &WriterConfig) -> Result<String> {
    let buffer = to_xml_vec_config(entity, config)?;
    Ok(String::from_utf8(buffer)?)
}

/// Serialize an entity to a compact XML byte vector.
pub fn to_xml_vec<E: SchemaEntity>(entity: &E) -> Result<Vec<u8>> {
    to_xml_vec_config(entity, &WriterConfig::default())
}

/// Serialize an entity to an XML byte vector using the given writer settings.
pub fn to_xml_vec_config<E: SchemaEntity>(entity: &E, config: &WriterConfig) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer_config(entity, &mut buffer, config)?;
    Ok(buffer)
}

/// Serialize an entity to a writer as compact XML.
pub fn to_xml_writer<E, W>(entity: &E, writer: W) -> Result<()>
where
    E: SchemaEntity,
    W: Write,
{
    to_xml_writer_config(entity, writer, &WriterConfig::default())
}

/// Serialize an entity to a writer using the given writer settings.
pub fn to_xml_writer_config<E, W>(entity: &E, writer: W, config: &WriterConfig) -> Result<()>
where
    E: SchemaEntity,
    W: Write,
{
    let mut sink = QuickXmlSink::with_config(writer, config);
    serialize(entity, &mut sink)?;
    sink.into_inner().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Access, Field, FieldKind, no_children};
    use crate::xml::utils::{format_scalar, parse_scalar, read_text, write_scalar};

    #[derive(Debug, Default, PartialEq)]
    struct Count {
        total: Option<u32>,
        label: Option<String>,
    }

    impl SchemaEntity for Count {
        const TAG: &'static str = "count";
        const FIELDS: &'static [Field<Self>] = &[
            Field {
                name: "total",
                aliases: &[],
                kind: FieldKind::Attribute,
                required: false,
                access: Access::Attribute {
                    get: |count| format_scalar(count.total.as_ref()),
                    set: |count, raw| {
                        count.total = Some(parse_scalar("count", "total", raw)?);
                        Ok(())
                    },
                },
                is_set: |count| count.total.is_some(),
                validate: no_children,
            },
            Field {
                name: "label",
                aliases: &[],
                kind: FieldKind::Text,
                required: false,
                access: Access::Element {
                    read: |count, cursor, _ctx| {
                        count.label = Some(read_text(cursor)?);
                        Ok(())
                    },
                    write: |count, sink| write_scalar(sink, "label", count.label.as_deref()),
                },
                is_set: |count| count.label.is_some(),
                validate: no_children,
            },
        ];
    }

    #[test]
    fn writes_compact_xml() {
        let count = Count {
            total: Some(3),
            label: Some("a < b".to_string()),
        };
        assert_eq!(
            to_xml_string(&count).unwrap(),
            r#"<count total="3"><label>a &lt; b</label></count>"#
        );
    }

    #[test]
    fn unset_fields_leave_no_trace() {
        assert_eq!(to_xml_string(&Count::default()).unwrap(), "<count></count>");
    }

    #[test]
    fn pretty_output_has_declaration_and_indent() {
        let count = Count {
            total: None,
            label: Some("x".to_string()),
        };
        let xml = to_xml_string_config(&count, &WriterConfig::pretty()).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<count>\n  <label>x</label>\n</count>"
        );
    }
}
