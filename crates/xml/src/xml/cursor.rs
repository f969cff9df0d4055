//! Forward-only pull cursor over an XML event stream.
//!
//! [`XmlCursor`] is the interface the mapping engine drives. It is object safe
//! so entities receive it as `&mut dyn XmlCursor` and the engine never depends
//! on a particular reader. [`QuickXmlCursor`] is the implementation backed by
//! `quick-xml`.
//!
//! Depth follows the usual pull-parser convention: a start tag and its matching
//! end tag report the same depth (the root element is depth 1), text reports the
//! depth of the element that contains it.

use crate::error::{MappingError, Result, StructuralViolation};
use quick_xml::Reader;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};
use std::io::BufRead;

/// The kind of event the cursor is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Nothing has been read yet.
    StartDocument,
    /// An element start tag.
    StartTag,
    /// An element end tag.
    EndTag,
    /// Character data, with references resolved and CDATA merged in.
    Text,
    /// The stream is exhausted.
    EndDocument,
}

/// A forward-only XML event reader.
///
/// Only the code that owns a parse call may advance the cursor; it is handed
/// down the recursive descent by mutable reference and never aliased.
pub trait XmlCursor {
    /// The event the cursor is currently positioned on.
    fn event(&self) -> EventKind;

    /// Element name for [`EventKind::StartTag`] and [`EventKind::EndTag`].
    fn name(&self) -> Option<&str>;

    /// Nesting depth of the current event.
    fn depth(&self) -> usize;

    /// Value of an attribute on the current start tag.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Content of the current text event.
    fn text(&self) -> Option<&str>;

    /// Advances to the next significant event and returns its kind.
    ///
    /// Declarations, comments, processing instructions and doctypes are never
    /// reported.
    fn next(&mut self) -> Result<EventKind>;

    /// Advances to the next start or end tag, skipping whitespace-only text.
    ///
    /// Non-whitespace text is a structural violation, and so is running off
    /// the end of the document.
    fn next_tag(&mut self) -> Result<EventKind> {
        loop {
            match self.next()? {
                EventKind::Text => {
                    if !self.text().map(is_blank).unwrap_or(true) {
                        return Err(StructuralViolation::UnexpectedText {
                            context: self.name().unwrap_or_default().to_string(),
                        }
                        .into());
                    }
                }
                EventKind::EndDocument => {
                    return Err(StructuralViolation::Truncated {
                        open: self.name().unwrap_or_default().to_string(),
                    }
                    .into());
                }
                EventKind::StartDocument => continue,
                kind => return Ok(kind),
            }
        }
    }

    /// Short description of the current event, used in error messages.
    fn describe(&self) -> String {
        match self.event() {
            EventKind::StartDocument => "start of document".to_string(),
            EventKind::StartTag => format!("<{}>", self.name().unwrap_or_default()),
            EventKind::EndTag => format!("</{}>", self.name().unwrap_or_default()),
            EventKind::Text => "text".to_string(),
            EventKind::EndDocument => "end of document".to_string(),
        }
    }
}

/// Returns `true` if the text is empty or made only of XML whitespace.
pub fn is_blank(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b' ' | b'\n' | b'\r' | b'\t'))
}

/// [`XmlCursor`] backed by a `quick-xml` [`Reader`].
pub struct QuickXmlCursor<R: BufRead> {
    reader: Reader<R>,
    /// Buffer for reading events
    buf: Vec<u8>,
    /// Event read ahead while coalescing text
    pending: Option<Event<'static>>,
    kind: EventKind,
    /// Names of the currently open elements, innermost last
    open: Vec<String>,
    /// Name of the element for the current tag event
    name: Option<String>,
    depth: usize,
    attributes: Vec<(String, String)>,
    text: String,
}

impl<'a> QuickXmlCursor<&'a [u8]> {
    /// Creates a cursor over an in-memory document.
    pub fn from_xml_str(xml: &'a str) -> Self {
        Self::new(Reader::from_str(xml))
    }
}

impl<R: BufRead> QuickXmlCursor<R> {
    /// Creates a cursor over any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self::new(Reader::from_reader(reader))
    }

    fn new(mut reader: Reader<R>) -> Self {
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.check_end_names = true;
        Self {
            reader,
            buf: Vec::new(),
            pending: None,
            kind: EventKind::StartDocument,
            open: Vec::new(),
            name: None,
            depth: 0,
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Positions the cursor on the first start tag of the document.
    pub fn advance_to_root(&mut self) -> Result<()> {
        loop {
            match self.next()? {
                EventKind::StartTag => return Ok(()),
                EventKind::Text if is_blank(&self.text) => continue,
                EventKind::EndDocument => {
                    return Err(StructuralViolation::NotOnStartTag {
                        found: "end of document".to_string(),
                    }
                    .into());
                }
                _ => {
                    return Err(StructuralViolation::NotOnStartTag {
                        found: self.describe(),
                    }
                    .into());
                }
            }
        }
    }

    fn read_raw(&mut self) -> Result<Event<'static>> {
        if let Some(event) = self.pending.take() {
            return Ok(event);
        }
        self.buf.clear();
        match self.reader.read_event_into(&mut self.buf) {
            Ok(event) => Ok(event.into_owned()),
            Err(e) => Err(self.translate(e)),
        }
    }

    /// Maps reader failures about markup shape onto structural violations.
    fn translate(&self, err: quick_xml::Error) -> MappingError {
        match err {
            quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(open)) => {
                StructuralViolation::Truncated { open }.into()
            }
            quick_xml::Error::IllFormed(e) => StructuralViolation::Malformed {
                detail: e.to_string(),
            }
            .into(),
            quick_xml::Error::Syntax(e) => StructuralViolation::Malformed {
                detail: e.to_string(),
            }
            .into(),
            other => MappingError::Xml(other),
        }
    }

    fn enter(&mut self, start: &BytesStart<'_>) -> Result<()> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        self.attributes.clear();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            // Namespace declarations are not data.
            if key.starts_with("xmlns") {
                continue;
            }
            let raw = std::str::from_utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw)?;
            self.attributes.push((key.to_string(), value.into_owned()));
        }
        self.open.push(name.clone());
        self.depth = self.open.len();
        self.name = Some(name);
        self.kind = EventKind::StartTag;
        Ok(())
    }

    fn leave(&mut self, raw_name: &[u8]) -> Result<()> {
        let name = std::str::from_utf8(raw_name)?.to_string();
        self.depth = self.open.len();
        self.open.pop();
        self.attributes.clear();
        self.name = Some(name);
        self.kind = EventKind::EndTag;
        Ok(())
    }

    /// Appends a text-like event to the text buffer. Returns `false` if the
    /// event is not text-like.
    fn append_text(&mut self, event: &Event<'static>) -> Result<bool> {
        match event {
            Event::Text(text) => {
                let raw = std::str::from_utf8(text)?;
                self.text.push_str(&quick_xml::escape::unescape(raw)?);
            }
            Event::CData(cdata) => {
                self.text.push_str(std::str::from_utf8(cdata)?);
            }
            Event::GeneralRef(reference) => {
                let name = std::str::from_utf8(reference)?;
                let reference = format!("&{name};");
                let resolved = quick_xml::escape::unescape(&reference)?;
                self.text.push_str(&resolved);
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl<R: BufRead> XmlCursor for QuickXmlCursor<R> {
    fn event(&self) -> EventKind {
        self.kind
    }

    fn name(&self) -> Option<&str> {
        match self.kind {
            EventKind::StartTag | EventKind::EndTag => self.name.as_deref(),
            _ => self.open.last().map(String::as_str),
        }
    }

    fn depth(&self) -> usize {
        match self.kind {
            EventKind::StartTag | EventKind::EndTag => self.depth,
            _ => self.open.len(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        if self.kind != EventKind::StartTag {
            return None;
        }
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn text(&self) -> Option<&str> {
        match self.kind {
            EventKind::Text => Some(&self.text),
            _ => None,
        }
    }

    fn next(&mut self) -> Result<EventKind> {
        if self.kind == EventKind::EndDocument {
            return Ok(EventKind::EndDocument);
        }
        loop {
            let event = self.read_raw()?;
            match event {
                Event::Start(ref start) => {
                    self.enter(start)?;
                    return Ok(self.kind);
                }
                Event::Empty(ref start) => {
                    // Only reachable if empty-element expansion is turned off.
                    self.enter(start)?;
                    self.pending = Some(Event::End(start.to_end()).into_owned());
                    return Ok(self.kind);
                }
                Event::End(ref end) => {
                    self.leave(end.name().as_ref())?;
                    return Ok(self.kind);
                }
                Event::Text(_) | Event::CData(_) | Event::GeneralRef(_) => {
                    self.text.clear();
                    self.append_text(&event)?;
                    loop {
                        let following = self.read_raw()?;
                        if !self.append_text(&following)? {
                            self.pending = Some(following);
                            break;
                        }
                    }
                    self.kind = EventKind::Text;
                    return Ok(self.kind);
                }
                Event::Eof => {
                    if let Some(open) = self.open.last() {
                        return Err(StructuralViolation::Truncated { open: open.clone() }.into());
                    }
                    self.kind = EventKind::EndDocument;
                    self.name = None;
                    return Ok(self.kind);
                }
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => continue,
            }
        }
    }
}
