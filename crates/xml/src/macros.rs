//! The `schema_entity!` declarative macro.

/// Declares a schema entity: the struct, its wire tag, and its ordered field
/// table, in one place.
///
/// Each field line names the Rust field, its wire kind, and whether it is
/// `required` or `optional`. Field order is serialization order.
///
/// | Kind | Rust type | Wire form |
/// |------|-----------|-----------|
/// | `text(T, "name")` | `Option<T>` | `<name>T</name>`, `T: FromStr + Display` |
/// | `normalized("name")` | `Option<String>` | `<name>..</name>`, whitespace collapsed on read |
/// | `attribute(T, "name")` | `Option<T>` | `name="T"` on the entity's start tag |
/// | `entity(E)` | `Option<E>` | `E`'s own element |
/// | `capability(C)` | `Option<Resolved<C>>` | element of `C`'s concrete variant |
/// | `list(E)` | `Vec<E>` | zero or more of `E`'s element |
///
/// Nested kinds take their element name from the nested entity's `TAG`, and
/// also accept its aliases on input. An entity lists aliases after its tag:
/// `pub struct HttpHeader("http-header", alias "header")`.
///
/// The generated struct derives `Debug`, `Clone`, `Default`, `PartialEq` and
/// serde's `Serialize`/`Deserialize`, so the calling crate must depend on
/// `serde`.
///
/// ```ignore
/// linkedin_xml::schema_entity! {
///     /// A request for a member's standard profile through the API.
///     pub struct ApiStandardProfileRequest("api-standard-profile-request") {
///         url: text(String, "url") required,
///         headers: capability(Headers) required,
///     }
/// }
/// ```
#[macro_export]
macro_rules! schema_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($tag:literal $(, alias $alias:literal)*) {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident ( $($arg:tt)* ) $presence:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, rename_all = "kebab-case")]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $crate::schema_entity!(@type $kind ($($arg)*)),
            )*
        }

        impl $crate::SchemaEntity for $name {
            const TAG: &'static str = $tag;
            const ALIASES: &'static [&'static str] = &[$($alias),*];
            const FIELDS: &'static [$crate::Field<Self>] = &[
                $( $crate::schema_entity!(@field $tag, $field, $kind ($($arg)*), $presence), )*
            ];
        }
    };

    (@type text ($t:ty, $wire:literal)) => { ::std::option::Option<$t> };
    (@type normalized ($wire:literal)) => { ::std::option::Option<::std::string::String> };
    (@type attribute ($t:ty, $wire:literal)) => { ::std::option::Option<$t> };
    (@type entity ($t:ty)) => { ::std::option::Option<$t> };
    (@type capability ($c:ty)) => { ::std::option::Option<$crate::resolve::Resolved<$c>> };
    (@type list ($t:ty)) => { ::std::vec::Vec<$t> };
    (@type $other:ident $args:tt) => {
        compile_error!(concat!("unknown schema field kind `", stringify!($other), "`"))
    };

    (@required required) => { true };
    (@required optional) => { false };
    (@required $other:ident) => {
        compile_error!(concat!("expected `required` or `optional`, found `", stringify!($other), "`"))
    };

    (@field $tag:literal, $field:ident, text ($t:ty, $wire:literal), $presence:ident) => {
        $crate::Field {
            name: $wire,
            aliases: &[],
            kind: $crate::FieldKind::Text,
            required: $crate::schema_entity!(@required $presence),
            access: $crate::Access::Element {
                read: |entity, cursor, _ctx| {
                    let raw = $crate::xml::utils::read_text(cursor)?;
                    entity.$field = ::std::option::Option::Some(
                        $crate::xml::utils::parse_scalar::<$t>($tag, $wire, &raw)?,
                    );
                    ::std::result::Result::Ok(())
                },
                write: |entity, sink| {
                    let value = $crate::xml::utils::format_scalar(entity.$field.as_ref());
                    $crate::xml::utils::write_scalar(sink, $wire, value.as_deref())
                },
            },
            is_set: |entity| entity.$field.is_some(),
            validate: $crate::entity::no_children,
        }
    };

    (@field $tag:literal, $field:ident, normalized ($wire:literal), $presence:ident) => {
        $crate::Field {
            name: $wire,
            aliases: &[],
            kind: $crate::FieldKind::Normalized,
            required: $crate::schema_entity!(@required $presence),
            access: $crate::Access::Element {
                read: |entity, cursor, _ctx| {
                    let raw = $crate::xml::utils::read_text(cursor)?;
                    entity.$field = ::std::option::Option::Some($crate::xml::utils::normalize(&raw));
                    ::std::result::Result::Ok(())
                },
                write: |entity, sink| {
                    $crate::xml::utils::write_scalar(sink, $wire, entity.$field.as_deref())
                },
            },
            is_set: |entity| entity.$field.is_some(),
            validate: $crate::entity::no_children,
        }
    };

    (@field $tag:literal, $field:ident, attribute ($t:ty, $wire:literal), $presence:ident) => {
        $crate::Field {
            name: $wire,
            aliases: &[],
            kind: $crate::FieldKind::Attribute,
            required: $crate::schema_entity!(@required $presence),
            access: $crate::Access::Attribute {
                get: |entity| $crate::xml::utils::format_scalar(entity.$field.as_ref()),
                set: |entity, raw| {
                    entity.$field = ::std::option::Option::Some(
                        $crate::xml::utils::parse_scalar::<$t>($tag, $wire, raw)?,
                    );
                    ::std::result::Result::Ok(())
                },
            },
            is_set: |entity| entity.$field.is_some(),
            validate: $crate::entity::no_children,
        }
    };

    (@field $tag:literal, $field:ident, entity ($t:ty), $presence:ident) => {
        $crate::Field {
            name: <$t as $crate::SchemaEntity>::TAG,
            aliases: <$t as $crate::SchemaEntity>::ALIASES,
            kind: $crate::FieldKind::Entity,
            required: $crate::schema_entity!(@required $presence),
            access: $crate::Access::Element {
                read: |entity, cursor, ctx| {
                    entity.$field = ::std::option::Option::Some(
                        $crate::entity::parse_child::<$t>(cursor, ctx)?,
                    );
                    ::std::result::Result::Ok(())
                },
                write: |entity, sink| $crate::entity::write_child(entity.$field.as_ref(), sink),
            },
            is_set: |entity| entity.$field.is_some(),
            validate: |entity, path, missing| {
                if let ::std::option::Option::Some(child) = &entity.$field {
                    $crate::entity::validate_into(child, path, missing);
                }
            },
        }
    };

    (@field $tag:literal, $field:ident, capability ($c:ty), $presence:ident) => {
        $crate::Field {
            name: <$crate::resolve::Resolved<$c> as $crate::SchemaEntity>::TAG,
            aliases: <$crate::resolve::Resolved<$c> as $crate::SchemaEntity>::ALIASES,
            kind: $crate::FieldKind::Capability(<$c as $crate::resolve::Capability>::NAME),
            required: $crate::schema_entity!(@required $presence),
            access: $crate::Access::Element {
                read: |entity, cursor, ctx| {
                    entity.$field = ::std::option::Option::Some(
                        $crate::resolve::parse_resolved::<$c>(cursor, ctx)?,
                    );
                    ::std::result::Result::Ok(())
                },
                write: |entity, sink| $crate::entity::write_child(entity.$field.as_ref(), sink),
            },
            is_set: |entity| entity.$field.is_some(),
            validate: |entity, path, missing| {
                if let ::std::option::Option::Some(child) = &entity.$field {
                    $crate::entity::validate_into(child, path, missing);
                }
            },
        }
    };

    (@field $tag:literal, $field:ident, list ($t:ty), $presence:ident) => {
        $crate::Field {
            name: <$t as $crate::SchemaEntity>::TAG,
            aliases: <$t as $crate::SchemaEntity>::ALIASES,
            kind: $crate::FieldKind::List,
            required: $crate::schema_entity!(@required $presence),
            access: $crate::Access::Element {
                read: |entity, cursor, ctx| {
                    entity.$field.push($crate::entity::parse_child::<$t>(cursor, ctx)?);
                    ::std::result::Result::Ok(())
                },
                write: |entity, sink| $crate::entity::write_children(&entity.$field, sink),
            },
            is_set: |entity| !entity.$field.is_empty(),
            validate: |entity, path, missing| {
                for (index, child) in entity.$field.iter().enumerate() {
                    $crate::entity::validate_indexed(child, path, index, missing);
                }
            },
        }
    };
}
