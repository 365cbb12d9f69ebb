//! Immutable value-object base.
//!
//! An entity is declared once with [`define_struct!`]. The macro emits three types:
//! - the entity itself, with private fields and by-reference accessors,
//! - `<Name>Attrs`, the complete attribute set accepted by [`ValueStruct::create`],
//! - `<Name>Patch`, the partial attribute set accepted by [`ValueStruct::with_`].
//!
//! Entities then only add domain operations; copy-with-changes comes from the trait.

/// Immutable attribute bag with copy-on-write updates.
pub trait ValueStruct: Sized {
    /// Complete attribute set. Every field is required.
    type Attrs: Clone;
    /// Partial attribute set. `None` keeps the receiver's value.
    type Patch: Default;

    /// Build a new instance from a complete attribute set.
    fn create(attrs: Self::Attrs) -> Self;

    /// Snapshot of the current attribute values.
    fn attributes(&self) -> Self::Attrs;

    /// Overlay `patch` onto `attrs` with right-side non-`None` overwrite semantics.
    fn merge(attrs: Self::Attrs, patch: Self::Patch) -> Self::Attrs;

    /// Return a new instance by overlaying `patch` onto `self`.
    ///
    /// `self` is left untouched.
    fn with_(&self, patch: Self::Patch) -> Self {
        Self::create(Self::merge(self.attributes(), patch))
    }
}

/// Declare an immutable entity together with its `Attrs` and `Patch` companions.
///
/// ```
/// use tabkit_entity::{define_struct, ValueStruct};
///
/// define_struct! {
///     /// A named point.
///     pub struct Point(PointAttrs, PointPatch) {
///         name: String,
///         x: i64,
///     }
/// }
///
/// let p0 = Point::create(PointAttrs { name: "a".to_string(), x: 1 });
/// let p1 = p0.with_(PointPatch { x: Some(2), ..Default::default() });
/// assert_eq!(*p0.x(), 1);
/// assert_eq!(*p1.x(), 2);
/// assert_eq!(p1.name(), "a");
/// ```
#[macro_export]
macro_rules! define_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($attrs:ident, $patch:ident) {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $field: $ty, )+
        }

        #[doc = concat!("Complete attribute set of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $attrs {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        #[doc = concat!("Partial attribute set of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $patch {
            $( $(#[$fmeta])* pub $field: ::core::option::Option<$ty>, )+
        }

        impl $name {
            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> &$ty {
                    &self.$field
                }
            )+
        }

        impl $crate::structs::ValueStruct for $name {
            type Attrs = $attrs;
            type Patch = $patch;

            fn create(attrs: $attrs) -> Self {
                Self {
                    $( $field: attrs.$field, )+
                }
            }

            fn attributes(&self) -> $attrs {
                $attrs {
                    $( $field: ::core::clone::Clone::clone(&self.$field), )+
                }
            }

            fn merge(attrs: $attrs, patch: $patch) -> $attrs {
                $attrs {
                    $( $field: patch.$field.unwrap_or(attrs.$field), )+
                }
            }
        }
    };
}
