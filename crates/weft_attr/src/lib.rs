//! Attribute model for weft parsers.
//!
//! A parser's *attribute* is the value it produces on success. This crate
//! decides, purely from types:
//!
//! - which [`Category`] an attribute belongs to ([`classify`]),
//! - how a parsed value moves into a destination of a compatible type
//!   ([`Merge`]),
//! - what composite parsers expose ([`compose`]).
//!
//! Incompatible destinations are compile errors. There is no run-time
//! category check anywhere in the merge path.

mod attribute;
pub mod compose;
mod either;
pub mod kind;
mod merge;
mod unused;

pub use attribute::{Attribute, Container, Optional};
pub use either::Either;
pub use kind::{classify, Category};
pub use merge::{ContainerStrategy, Merge, Spread, Strategy, TupleIntoContainer, TupleMerge};
pub use unused::Unused;
