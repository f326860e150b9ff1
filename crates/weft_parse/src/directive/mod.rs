//! Directives: wrappers that change how their subject parses.
//!
//! Context directives ([`lexeme`], [`no_skip`], [`skip`], [`skip_with`],
//! [`no_case`]) derive a new context for the subject. Attribute directives
//! ([`raw`], [`omit`], [`matches`], [`as_`], [`narrow`]) change what the
//! subject exposes. [`repeat`] and [`seek`] drive the subject more than
//! once. [`with`] / [`with_local`] bind user values and [`without`] hides
//! them.

mod attribute;
mod repeat;
mod skip;
mod with;

pub use attribute::{as_, matches, narrow, omit, raw, As, Matches, Narrow, Omit, Raw};
pub use repeat::{repeat, seek, Bounds, Repeat, Seek};
pub use skip::{lexeme, no_case, no_skip, skip, skip_with, Lexeme, NoCase, NoSkip, Skip, SkipWith};
pub use with::{with, with_local, without, With, WithLocal, Without};

#[cfg(test)]
mod tests;
