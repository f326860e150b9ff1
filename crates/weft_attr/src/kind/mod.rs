//! Attribute categories and the type-level markers that select merge code.
//!
//! Every attribute type names exactly one [`Kind`] marker through
//! [`Attribute::Kind`](crate::Attribute::Kind). The marker is what merge and
//! composition dispatch on, so the choice of code path is made by the type
//! checker and never at run time.
//!
//! | Marker          | [`Category`]            | Presence  | Shape    |
//! |-----------------|-------------------------|-----------|----------|
//! | `UnusedKind`    | `Unused`                | `Absent`  | `Scalar` |
//! | `PlainKind`     | `Plain`                 | `Present` | `Scalar` |
//! | `TupleKind`     | `TupleLike`             | `Present` | `Scalar` |
//! | `OptionalKind`  | `Optional`              | `Present` | `Scalar` |
//! | `VariantKind`   | `Variant`               | `Present` | `Scalar` |
//! | `EitherKind`    | `Variant`               | `Present` | `Scalar` |
//! | `ContainerKind` | `Container`             | `Present` | `Nested` |
//!
//! `EitherKind` is the variant an alternative synthesises. It merges by
//! unwrapping the active side, while user variants (`VariantKind`) are
//! assigned through `From`.

use std::fmt;

use crate::compose::{Absent, Presence, Present};
use crate::Attribute;

/// The six attribute categories.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    /// The empty marker; carries nothing.
    Unused,
    /// Assigned directly.
    Plain,
    /// Fixed arity, merged slot by slot.
    TupleLike,
    /// Zero or one inner value.
    Optional,
    /// Exactly one of a closed set of alternatives.
    Variant,
    /// Ordered or associative collection.
    Container,
}

impl Category {
    /// Whether values of this category carry information.
    pub const fn is_present(self) -> bool {
        !matches!(self, Category::Unused)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Unused => write!(f, "unused"),
            Category::Plain => write!(f, "plain"),
            Category::TupleLike => write!(f, "tuple-like"),
            Category::Optional => write!(f, "optional"),
            Category::Variant => write!(f, "variant"),
            Category::Container => write!(f, "container"),
        }
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Element depth used when one container merges into another.
pub trait Shape: sealed::Sealed + 'static {}

/// Not a container.
pub enum Scalar {}
/// A container.
pub enum Nested {}

impl sealed::Sealed for Scalar {}
impl sealed::Sealed for Nested {}
impl Shape for Scalar {}
impl Shape for Nested {}

/// Type-level category marker.
pub trait Kind: sealed::Sealed + 'static {
    const CATEGORY: Category;
    type Presence: Presence;
    type Shape: Shape;
}

macro_rules! kinds {
    ($($(#[$meta:meta])* $name:ident => $category:ident, $presence:ty, $shape:ty;)*) => {$(
        $(#[$meta])*
        pub enum $name {}

        impl sealed::Sealed for $name {}

        impl Kind for $name {
            const CATEGORY: Category = Category::$category;
            type Presence = $presence;
            type Shape = $shape;
        }
    )*};
}

kinds! {
    /// Marker for [`Unused`](crate::Unused).
    UnusedKind => Unused, Absent, Scalar;
    /// Marker for scalars and user aggregates.
    PlainKind => Plain, Present, Scalar;
    /// Marker for Rust tuples.
    TupleKind => TupleLike, Present, Scalar;
    /// Marker for `Option<T>`.
    OptionalKind => Optional, Present, Scalar;
    /// Marker for user enums that accept each alternative through `From`.
    VariantKind => Variant, Present, Scalar;
    /// Marker for [`Either`](crate::Either).
    EitherKind => Variant, Present, Scalar;
    /// Marker for collections.
    ContainerKind => Container, Present, Nested;
}

/// The category of `T`, decided from its type alone.
pub const fn classify<T: Attribute>() -> Category {
    <T::Kind as Kind>::CATEGORY
}

/// Shorthand for the presence marker of an attribute type.
pub type PresenceOf<T> = <<T as Attribute>::Kind as Kind>::Presence;

/// Shorthand for the shape marker of an attribute type.
pub type ShapeOf<T> = <<T as Attribute>::Kind as Kind>::Shape;

#[cfg(test)]
mod tests;
