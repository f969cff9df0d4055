//! The schema entity contract and the generic driver behind it.
//!
//! Every mapped type implements [`SchemaEntity`] by declaring its wire tag and
//! an ordered table of [`Field`]s. The table is the only per-type knowledge the
//! engine needs: [`parse_fields`] interprets it to populate an entity from a
//! cursor, [`serialize_fields`] walks it in declared order to write the entity
//! back out, and [`validate`] uses it to find required fields that were never
//! set. Tables are normally produced by [`crate::schema_entity!`].
//!
//! ## Parse state machine
//!
//! ```text
//! AwaitingRoot --start tag--> DispatchingChildren --own end tag--> Done
//!      |                            |  ^
//!      |                            |  | known child: read field
//!      |                            |  | unknown child: skip subtree
//!      |                            +--+
//!      +------- anything else / truncated stream -------> Failed
//! ```
//!
//! On success the cursor is on the entity's own end tag, so the owner's next
//! advance yields the following sibling.

use crate::config::ParserConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics, UnknownElement};
use crate::error::{MappingError, Result, StructuralViolation};
use crate::xml::cursor::{EventKind, XmlCursor, is_blank};
use crate::xml::sink::XmlSink;
use crate::xml::utils::skip_subtree;
use std::fmt;

static DEFAULT_DIAGNOSTICS: TracingDiagnostics = TracingDiagnostics;

/// Reads one occurrence of a child element into the entity.
///
/// Called with the cursor on the child's start tag; must leave it on the
/// child's end tag.
pub type ReadFn<E> = fn(&mut E, &mut dyn XmlCursor, &ParseContext<'_>) -> Result<()>;

/// Writes a field as one or more complete elements.
pub type WriteFn<E> = fn(&E, &mut dyn XmlSink) -> Result<()>;

/// Recurses validation into nested entities, given the owner's element path.
pub type ValidateFn<E> = fn(&E, &str, &mut Vec<String>);

/// How a field is represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A leaf element whose text is stored verbatim.
    Text,
    /// A leaf element whose text is whitespace-collapsed before storage.
    Normalized,
    /// An attribute on the entity's own start tag.
    Attribute,
    /// A nested entity of a fixed concrete type.
    Entity,
    /// A nested entity declared through a capability; carries the capability
    /// name. The concrete variant is fixed by the declaring entity.
    Capability(&'static str),
    /// Zero or more occurrences of a nested entity.
    List,
}

/// Where a field lives and how the driver reaches it.
pub enum Access<E> {
    /// An attribute of the entity's start tag.
    Attribute {
        /// Formatted value, `None` when unset.
        get: fn(&E) -> Option<String>,
        /// Parses and stores the raw attribute value.
        set: fn(&mut E, &str) -> Result<()>,
    },
    /// A child element.
    Element {
        /// Reads one occurrence.
        read: ReadFn<E>,
        /// Writes the field.
        write: WriteFn<E>,
    },
}

/// One entry of an entity's declared field table.
pub struct Field<E> {
    /// Wire name: element name, or attribute name for attributes.
    pub name: &'static str,
    /// Other element names accepted on input. Output always uses `name`.
    pub aliases: &'static [&'static str],
    /// Wire representation.
    pub kind: FieldKind,
    /// Whether [`validate`] reports the field when unset. Parsing never does.
    pub required: bool,
    /// How the driver reads and writes the field.
    pub access: Access<E>,
    /// Whether the field currently holds a value.
    pub is_set: fn(&E) -> bool,
    /// Validation of nested entities held by the field.
    pub validate: ValidateFn<E>,
}

impl<E> Field<E> {
    /// Returns `true` for fields carried as child elements.
    pub fn is_element(&self) -> bool {
        matches!(self.access, Access::Element { .. })
    }
}

impl<E> fmt::Debug for Field<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .finish()
    }
}

/// A typed node of the mapped object graph, corresponding to one XML element.
///
/// Implementations own their nested entities outright; the graph is a tree.
pub trait SchemaEntity: Default + 'static {
    /// Element name of this entity on the wire.
    const TAG: &'static str;

    /// Other element names accepted for this entity on input.
    const ALIASES: &'static [&'static str] = &[];

    /// Declared fields, in serialization order.
    const FIELDS: &'static [Field<Self>];

    /// Populates `self` from the stream.
    ///
    /// The cursor must be on this entity's start tag. On success it is left on
    /// the matching end tag.
    fn init(&mut self, cursor: &mut dyn XmlCursor, ctx: &ParseContext<'_>) -> Result<()> {
        parse_fields(self, cursor, ctx)
    }

    /// Writes `self` as one complete element.
    fn serialize(&self, sink: &mut dyn XmlSink) -> Result<()> {
        serialize_fields(self, sink)
    }
}

/// Per-parse settings handed down the recursive descent.
#[derive(Clone)]
pub struct ParseContext<'a> {
    diagnostics: &'a dyn Diagnostics,
    config: ParserConfig,
}

impl Default for ParseContext<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseContext<'static> {
    /// Default configuration, reporting through `tracing`.
    pub fn new() -> Self {
        Self {
            diagnostics: &DEFAULT_DIAGNOSTICS,
            config: ParserConfig::default(),
        }
    }
}

impl<'a> ParseContext<'a> {
    /// Default configuration, reporting to the given sink.
    pub fn with_diagnostics(diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            diagnostics,
            config: ParserConfig::default(),
        }
    }

    /// Replaces the parser configuration.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// The diagnostics sink.
    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics
    }

    /// The parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// States of a single entity's parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Waiting to confirm the cursor is on the entity's start tag.
    AwaitingRoot,
    /// Reading child elements until the entity's end tag.
    DispatchingChildren,
    /// The end tag was reached.
    Done,
    /// A structural problem ended the parse.
    Failed,
}

struct EntityParser<'c, 'x, E: SchemaEntity> {
    entity: &'c mut E,
    cursor: &'c mut dyn XmlCursor,
    ctx: &'c ParseContext<'x>,
    depth: usize,
    state: ParseState,
}

impl<E: SchemaEntity> EntityParser<'_, '_, E> {
    fn run(&mut self) -> Result<()> {
        loop {
            match self.state {
                ParseState::Done => return Ok(()),
                ParseState::Failed => {
                    return Err(StructuralViolation::Malformed {
                        detail: format!("parse of <{}> already failed", E::TAG),
                    }
                    .into());
                }
                _ => {}
            }
            match self.step() {
                Ok(next) => self.state = next,
                Err(err) => {
                    tracing::trace!(entity = E::TAG, state = ?self.state, error = %err, "parse failed");
                    self.state = ParseState::Failed;
                    return Err(err);
                }
            }
        }
    }

    fn step(&mut self) -> Result<ParseState> {
        match self.state {
            ParseState::AwaitingRoot => self.enter(),
            ParseState::DispatchingChildren => self.dispatch_next(),
            terminal => Ok(terminal),
        }
    }

    fn enter(&mut self) -> Result<ParseState> {
        if self.cursor.event() != EventKind::StartTag {
            return Err(StructuralViolation::NotOnStartTag {
                found: self.cursor.describe(),
            }
            .into());
        }
        self.depth = self.cursor.depth();
        let limit = self.ctx.config().max_depth;
        if self.depth > limit {
            return Err(StructuralViolation::TooDeep { limit }.into());
        }
        for field in E::FIELDS {
            if let Access::Attribute { set, .. } = field.access {
                if let Some(raw) = self.cursor.attribute(field.name) {
                    set(self.entity, raw)?;
                }
            }
        }
        Ok(ParseState::DispatchingChildren)
    }

    fn dispatch_next(&mut self) -> Result<ParseState> {
        match self.cursor.next()? {
            EventKind::StartTag => {
                let field = self.cursor.name().and_then(element_field::<E>);
                match field {
                    Some(field) => {
                        if let Access::Element { read, .. } = field.access {
                            read(self.entity, self.cursor, self.ctx)?;
                        }
                    }
                    None => {
                        self.ctx.diagnostics().unknown_element(UnknownElement {
                            entity: E::TAG,
                            element: self.cursor.name().unwrap_or_default().to_string(),
                            depth: self.cursor.depth(),
                        });
                        skip_subtree(self.cursor)?;
                    }
                }
                Ok(ParseState::DispatchingChildren)
            }
            EventKind::EndTag if self.cursor.depth() == self.depth => Ok(ParseState::Done),
            EventKind::EndTag => Err(StructuralViolation::Malformed {
                detail: format!("unbalanced {} inside <{}>", self.cursor.describe(), E::TAG),
            }
            .into()),
            EventKind::Text => {
                let blank = self.cursor.text().map(is_blank).unwrap_or(true);
                if !blank && self.ctx.config().strict_text {
                    return Err(StructuralViolation::UnexpectedText {
                        context: E::TAG.to_string(),
                    }
                    .into());
                }
                Ok(ParseState::DispatchingChildren)
            }
            EventKind::EndDocument => Err(StructuralViolation::Truncated {
                open: E::TAG.to_string(),
            }
            .into()),
            EventKind::StartDocument => Ok(ParseState::DispatchingChildren),
        }
    }
}

/// Looks up the child-element field with the given wire name or alias.
pub fn element_field<E: SchemaEntity>(name: &str) -> Option<&'static Field<E>> {
    E::FIELDS.iter().find(|field| {
        field.is_element() && (field.name == name || field.aliases.contains(&name))
    })
}

/// Returns `true` if `name` is the entity's tag or one of its aliases.
pub fn accepts_tag<E: SchemaEntity>(name: &str) -> bool {
    name == E::TAG || E::ALIASES.contains(&name)
}

/// Populates `entity` from the stream by interpreting its field table.
///
/// This is the default [`SchemaEntity::init`]. Children are dispatched by tag
/// name in whatever order they arrive; unknown children are reported to the
/// context's diagnostics and skipped.
pub fn parse_fields<E: SchemaEntity>(
    entity: &mut E,
    cursor: &mut dyn XmlCursor,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    EntityParser {
        entity,
        cursor,
        ctx,
        depth: 0,
        state: ParseState::AwaitingRoot,
    }
    .run()
}

/// Writes `entity` by walking its field table in declared order.
///
/// This is the default [`SchemaEntity::serialize`]. Unset fields produce no
/// output at all.
pub fn serialize_fields<E: SchemaEntity>(entity: &E, sink: &mut dyn XmlSink) -> Result<()> {
    let owned: Vec<(&str, String)> = E::FIELDS
        .iter()
        .filter_map(|field| match field.access {
            Access::Attribute { get, .. } => get(entity).map(|value| (field.name, value)),
            Access::Element { .. } => None,
        })
        .collect();
    let attributes: Vec<(&str, &str)> = owned
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();

    sink.start_element(E::TAG, &attributes)?;
    for field in E::FIELDS {
        if let Access::Element { write, .. } = field.access {
            if (field.is_set)(entity) {
                write(entity, sink)?;
            }
        }
    }
    sink.end_element(E::TAG)
}

/// Builds a fresh `C` and initializes it from the cursor.
pub fn parse_child<C: SchemaEntity>(
    cursor: &mut dyn XmlCursor,
    ctx: &ParseContext<'_>,
) -> Result<C> {
    let mut child = C::default();
    child.init(cursor, ctx)?;
    Ok(child)
}

/// Writes an optional nested entity.
pub fn write_child<C: SchemaEntity>(child: Option<&C>, sink: &mut dyn XmlSink) -> Result<()> {
    match child {
        Some(child) => child.serialize(sink),
        None => Ok(()),
    }
}

/// Writes every element of a repeated nested entity.
pub fn write_children<C: SchemaEntity>(children: &[C], sink: &mut dyn XmlSink) -> Result<()> {
    children.iter().try_for_each(|child| child.serialize(sink))
}

/// Checks every required field of the graph rooted at `entity`.
///
/// Parsing never checks required fields; this is the separate, opt-in check.
/// All missing fields are reported at once, as element paths such as
/// `skill/proficiency`.
pub fn validate<E: SchemaEntity>(entity: &E) -> Result<()> {
    let mut missing = Vec::new();
    validate_into(entity, "", &mut missing);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MappingError::MissingRequired(missing))
    }
}

/// Appends the missing required fields of `entity`, located under
/// `parent_path`, to `missing`.
pub fn validate_into<E: SchemaEntity>(entity: &E, parent_path: &str, missing: &mut Vec<String>) {
    let path = join_path(parent_path, E::TAG);
    validate_at(entity, &path, missing);
}

/// Validates one element of a repeated field, indexing it in the path.
pub fn validate_indexed<E: SchemaEntity>(
    entity: &E,
    parent_path: &str,
    index: usize,
    missing: &mut Vec<String>,
) {
    let path = format!("{}[{}]", join_path(parent_path, E::TAG), index);
    validate_at(entity, &path, missing);
}

fn validate_at<E: SchemaEntity>(entity: &E, path: &str, missing: &mut Vec<String>) {
    for field in E::FIELDS {
        if field.required && !(field.is_set)(entity) {
            let name = match field.kind {
                FieldKind::Attribute => format!("@{}", field.name),
                _ => field.name.to_string(),
            };
            missing.push(join_path(path, &name));
        }
        (field.validate)(entity, path, missing);
    }
}

/// [`ValidateFn`] for fields that hold no nested entities.
pub fn no_children<E>(_entity: &E, _path: &str, _missing: &mut Vec<String>) {}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
