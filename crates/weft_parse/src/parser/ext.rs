//! Method-call forms of the combinators that have no operator.

use weft_attr::{Attribute, Merge};

use crate::action::{Action, ActionContext};
use crate::directive::{As, Omit, Raw};
use crate::operator::{Expect, Seq};
use crate::parser::{IntoParser, Parser};

pub trait ParserExt: Parser + Sized {
    /// Run `f` on the attribute after a match.
    ///
    /// `f` may reject the match with [`ActionContext::fail`]; the cursor is
    /// then restored as if the subject had not matched.
    fn action<F>(self, f: F) -> Action<Self, F>
    where
        F: Fn(&mut Self::Attribute, &mut ActionContext<'_>),
    {
        Action::new(self, f)
    }

    /// `self` followed by a commit point: once `self` has matched, a
    /// failure of `next` is recorded as an expectation failure.
    fn then_expect<N: IntoParser>(self, next: N) -> Seq<(Self, Expect<N::Parser>)> {
        Seq((self, Expect::new(next.into_parser())))
    }

    /// Match without producing an attribute.
    fn omit(self) -> Omit<Self> {
        Omit::new(self)
    }

    /// Produce the matched text instead of the attribute.
    fn raw(self) -> Raw<Self> {
        Raw::new(self)
    }

    /// Parse into a fresh `T` with the attribute merged in.
    fn as_<T>(self) -> As<T, Self>
    where
        T: Attribute + Merge<Self::Attribute>,
    {
        As::new(self)
    }
}

impl<P: Parser> ParserExt for P {}
