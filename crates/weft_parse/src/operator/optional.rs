//! `-a`: zero or one.

use weft_attr::compose::{optional_of, OptionOf};

use super::failure_pending;
use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

#[derive(Copy, Clone, Debug)]
pub struct Optional<P> {
    subject: P,
}

impl<P> Optional<P> {
    pub fn new(subject: P) -> Self {
        Optional { subject }
    }
}

/// Function form of `-p`.
pub fn opt<P: IntoParser>(subject: P) -> Optional<P::Parser> {
    Optional::new(subject.into_parser())
}

impl<P: Parser> Parser for Optional<P> {
    type Attribute = OptionOf<P::Attribute>;

    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let mut value = P::Attribute::default();
        if self.subject.parse(cur, ctx, &mut value) {
            *attr = optional_of(value);
            return true;
        }
        !failure_pending(ctx)
    }

    fn what(&self) -> String {
        format!("-{}", self.subject.what())
    }
}

crate::parser::impl_operators! { [P,] Optional<P>; }
