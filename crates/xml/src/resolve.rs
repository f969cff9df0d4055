//! Static resolution of polymorphic capability fields.
//!
//! Some fields are declared against an abstract capability ("the headers of a
//! request", "a proficiency") rather than a concrete entity. The wire format
//! never says which variant to build, so the choice is fixed ahead of time: each
//! [`Capability`] names exactly one concrete [`SchemaEntity`] as its
//! [`Capability::Variant`], and the declaring entity's field table refers to the
//! capability. Resolution is a type projection, done at compile time; nothing
//! inspects the stream or the runtime type of a value.
//!
//! Capabilities are declared with [`crate::capabilities!`], which also records
//! every binding in a table for introspection.

use crate::entity::{ParseContext, SchemaEntity, parse_child};
use crate::error::Result;
use crate::xml::cursor::XmlCursor;

/// An abstract field type bound to a single concrete entity variant.
pub trait Capability: 'static {
    /// Name of the capability, used in diagnostics and field descriptors.
    const NAME: &'static str;

    /// The concrete entity built wherever this capability is declared.
    type Variant: SchemaEntity;
}

/// The concrete variant a capability resolves to.
pub type Resolved<C> = <C as Capability>::Variant;

/// One row of a capability binding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Capability name.
    pub capability: &'static str,
    /// Wire tag of the concrete variant.
    pub variant_tag: &'static str,
}

impl Binding {
    /// Builds the binding row for a capability.
    pub const fn of<C: Capability>() -> Self {
        Self {
            capability: C::NAME,
            variant_tag: <Resolved<C> as SchemaEntity>::TAG,
        }
    }
}

/// Builds an empty instance of the capability's concrete variant.
pub fn instantiate<C: Capability>() -> Resolved<C> {
    <Resolved<C> as Default>::default()
}

/// Builds the capability's concrete variant and initializes it from the
/// cursor, which must be on the variant's start tag.
pub fn parse_resolved<C: Capability>(
    cursor: &mut dyn XmlCursor,
    ctx: &ParseContext<'_>,
) -> Result<Resolved<C>> {
    parse_child::<Resolved<C>>(cursor, ctx)
}

/// Finds a binding by capability name.
pub fn binding_for<'t>(table: &'t [Binding], capability: &str) -> Option<&'t Binding> {
    table.iter().find(|binding| binding.capability == capability)
}

/// Declares capability marker types and their single concrete variants.
///
/// Each capability becomes an uninhabited enum implementing [`Capability`].
/// The macro also defines a `BINDINGS` table holding every declared binding in
/// declaration order, and a `binding_for` lookup over it.
///
/// ```ignore
/// linkedin_xml::capabilities! {
///     /// Headers to send with a profile request.
///     pub Headers => HttpHeaders;
///     pub Proficiency => SkillProficiency;
/// }
/// ```
#[macro_export]
macro_rules! capabilities {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis $capability:ident => $variant:ty;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            $vis enum $capability {}

            impl $crate::resolve::Capability for $capability {
                const NAME: &'static str = stringify!($capability);
                type Variant = $variant;
            }
        )+

        /// Every capability binding declared in this module.
        pub static BINDINGS: &[$crate::resolve::Binding] = &[
            $( $crate::resolve::Binding::of::<$capability>(), )+
        ];

        /// Finds the binding declared for a capability name.
        pub fn binding_for(capability: &str) -> ::std::option::Option<&'static $crate::resolve::Binding> {
            $crate::resolve::binding_for(BINDINGS, capability)
        }
    };
}
