//! Event sink the serializer writes to.
//!
//! [`XmlSink`] is the write-side counterpart of [`crate::XmlCursor`]. Entities
//! emit their own element through it; [`QuickXmlSink`] forwards the events to a
//! `quick-xml` [`Writer`].

use crate::config::WriterConfig;
use crate::error::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// A forward-only XML event writer.
pub trait XmlSink {
    /// Writes a start tag with the given attributes, in order.
    fn start_element(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()>;

    /// Writes escaped character data.
    fn text(&mut self, value: &str) -> Result<()>;

    /// Writes an end tag.
    fn end_element(&mut self, name: &str) -> Result<()>;
}

/// [`XmlSink`] backed by a `quick-xml` [`Writer`].
pub struct QuickXmlSink<W: Write> {
    writer: Writer<W>,
    xml_declaration: bool,
    xml_declaration_written: bool,
}

impl<W: Write> QuickXmlSink<W> {
    /// Creates a sink that writes compact XML with no declaration.
    pub fn new(inner: W) -> Self {
        Self::with_config(inner, &WriterConfig::default())
    }

    /// Creates a sink honouring the writer configuration.
    pub fn with_config(inner: W, config: &WriterConfig) -> Self {
        let writer = match config.indent {
            Some(width) if width > 0 => Writer::new_with_indent(inner, b' ', width),
            _ => Writer::new(inner),
        };
        Self {
            writer,
            xml_declaration: config.xml_declaration,
            xml_declaration_written: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Writes the XML declaration if configured and not already written.
    fn write_xml_declaration(&mut self) -> Result<()> {
        if self.xml_declaration && !self.xml_declaration_written {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        self.xml_declaration_written = true;
        Ok(())
    }
}

impl<W: Write> XmlSink for QuickXmlSink<W> {
    fn start_element(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        if !self.xml_declaration_written {
            self.write_xml_declaration()?;
        }

        let mut element = BytesStart::new(name);
        for &(key, value) in attributes {
            element.push_attribute((key, value));
        }
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    fn text(&mut self, value: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(value)))?;
        Ok(())
    }

    fn end_element(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}
