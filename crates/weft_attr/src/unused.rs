//! The empty attribute.

use std::fmt;

/// Attribute of parsers that produce nothing, and the destination that
/// discards whatever it is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unused;

impl fmt::Display for Unused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unused")
    }
}
