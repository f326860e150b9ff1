//! Commit points.

use tracing::trace;
use weft_diagnostic::FailureChannel;

use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// `subject`, with a miss recorded as an expectation failure.
///
/// The failure position is taken after skipping, so it points at the
/// offending input rather than at the whitespace before it.
#[derive(Copy, Clone, Debug)]
pub struct Expect<P> {
    subject: P,
}

impl<P> Expect<P> {
    pub fn new(subject: P) -> Self {
        Expect { subject }
    }
}

pub fn expect<P: IntoParser>(subject: P) -> Expect<P::Parser> {
    Expect::new(subject.into_parser())
}

impl<P: Parser> Parser for Expect<P> {
    type Attribute = P::Attribute;

    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        if self.subject.parse(cur, ctx, attr) {
            return true;
        }
        if <C::Failure as FailureChannel>::PRESENT {
            let start = cur.position();
            ctx.skip_over(cur);
            let position = cur.position();
            cur.set_position(start);
            trace!(position, "commit point missed");
            ctx.failure().record(position, || self.subject.what());
        }
        false
    }

    fn what(&self) -> String {
        self.subject.what()
    }
}

crate::parser::impl_operators! { [P,] Expect<P>; }
