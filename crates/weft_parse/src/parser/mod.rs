//! The parser capability.
//!
//! Everything that parses implements [`Parser`]. The contract:
//!
//! - `parse` returns `true` on a match and `false` otherwise; nothing else
//!   signals failure.
//! - On `false` the cursor is back at its entry position.
//! - `attr` is a fresh, default-initialised slot owned by the caller. A
//!   parser may scribble on it before failing; callers that keep values
//!   across failures (sequences, alternatives, rules) parse into
//!   temporaries and only move the result out once the whole composite has
//!   matched.

mod ext;
mod flags;

pub use ext::ParserExt;
pub use flags::ParserFlags;

use weft_attr::{classify, Attribute};

use crate::char::LitChar;
use crate::string::LitStr;
use crate::{Context, Cursor};

pub trait Parser {
    /// The value produced on success.
    type Attribute: Attribute;

    /// Whether [`Parser::Attribute`] carries information.
    const HAS_ATTRIBUTE: bool = classify::<Self::Attribute>().is_present();

    /// Whether the parser collects into a container itself (repetitions,
    /// lists), as opposed to producing a single element.
    const HANDLES_CONTAINER: bool = false;

    /// Whether a semantic action is attached anywhere below this node.
    /// Rules defined with `=` skip materialising their attribute then.
    const HAS_ACTION: bool = false;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut Self::Attribute)
        -> bool;

    /// Human-readable description used in expectation failures.
    fn what(&self) -> String;

    /// The three flags above, for tracing.
    fn flags() -> ParserFlags
    where
        Self: Sized,
    {
        let mut flags = ParserFlags::empty();
        flags.set(ParserFlags::HAS_ATTRIBUTE, Self::HAS_ATTRIBUTE);
        flags.set(ParserFlags::HANDLES_CONTAINER, Self::HANDLES_CONTAINER);
        flags.set(ParserFlags::HAS_ACTION, Self::HAS_ACTION);
        flags
    }
}

/// Values usable as the right operand of a grammar operator.
///
/// Every parser qualifies, and so do `char` and `&'static str` literals,
/// which match themselves without producing an attribute.
pub trait IntoParser {
    type Parser: Parser;

    fn into_parser(self) -> Self::Parser;
}

impl<P: Parser> IntoParser for P {
    type Parser = P;

    #[inline]
    fn into_parser(self) -> P {
        self
    }
}

impl IntoParser for char {
    type Parser = LitChar;

    #[inline]
    fn into_parser(self) -> LitChar {
        LitChar::new(self)
    }
}

impl IntoParser for &'static str {
    type Parser = LitStr;

    #[inline]
    fn into_parser(self) -> LitStr {
        LitStr::new(self)
    }
}

/// Implement the grammar operators for parser types.
///
/// | operator | builds            |
/// |----------|-------------------|
/// | `a >> b` | sequence          |
/// | `a \| b` | alternative       |
/// | `a - b`  | difference        |
/// | `a % b`  | list              |
/// | `-a`     | optional          |
/// | `!a`     | not-predicate     |
///
/// Generic parameters go in brackets with a trailing comma:
/// `impl_operators! { [P,] Kleene<P>; }`.
macro_rules! impl_operators {
    ($([$($g:tt)*] $ty:ty;)*) => {$(
        impl<$($g)* Rhs: $crate::parser::IntoParser> ::std::ops::Shr<Rhs> for $ty {
            type Output = $crate::operator::Seq<(Self, Rhs::Parser)>;

            #[inline]
            fn shr(self, rhs: Rhs) -> Self::Output {
                $crate::operator::Seq((self, rhs.into_parser()))
            }
        }

        $crate::parser::impl_operators!(@no_shr [$($g)*] $ty);
    )*};
    (@no_shr [$($g:tt)*] $ty:ty) => {
        impl<$($g)* Rhs: $crate::parser::IntoParser> ::std::ops::BitOr<Rhs> for $ty {
            type Output = $crate::operator::Alt<Self, Rhs::Parser>;

            #[inline]
            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::operator::Alt::new(self, rhs.into_parser())
            }
        }

        impl<$($g)* Rhs: $crate::parser::IntoParser> ::std::ops::Sub<Rhs> for $ty {
            type Output = $crate::operator::Difference<Self, Rhs::Parser>;

            #[inline]
            fn sub(self, rhs: Rhs) -> Self::Output {
                $crate::operator::Difference::new(self, rhs.into_parser())
            }
        }

        impl<$($g)* Rhs: $crate::parser::IntoParser> ::std::ops::Rem<Rhs> for $ty {
            type Output = $crate::operator::List<Self, Rhs::Parser>;

            #[inline]
            fn rem(self, rhs: Rhs) -> Self::Output {
                $crate::operator::List::new(self, rhs.into_parser())
            }
        }

        impl<$($g)*> ::std::ops::Neg for $ty {
            type Output = $crate::operator::Optional<Self>;

            #[inline]
            fn neg(self) -> Self::Output {
                $crate::operator::Optional::new(self)
            }
        }

        impl<$($g)*> ::std::ops::Not for $ty {
            type Output = $crate::operator::NotPred<Self>;

            #[inline]
            fn not(self) -> Self::Output {
                $crate::operator::NotPred::new(self)
            }
        }
    };
}

pub(crate) use impl_operators;

#[cfg(test)]
mod tests;
