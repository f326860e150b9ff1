//! `a | b`: ordered choice.

use weft_attr::compose::{alternative_left, alternative_right, AlternativeOf};

use super::failure_pending;
use crate::parser::Parser;
use crate::{Context, Cursor};

/// The first of two parsers that matches.
///
/// The attribute is `Either<L, R>`, `Option<_>` when one side has no
/// attribute, or `Unused` when neither has; destinations unwrap it on merge.
#[derive(Copy, Clone, Debug)]
pub struct Alt<L, R> {
    left: L,
    right: R,
}

impl<L, R> Alt<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Alt { left, right }
    }
}

impl<L: Parser, R: Parser> Parser for Alt<L, R> {
    type Attribute = AlternativeOf<L::Attribute, R::Attribute>;

    const HAS_ACTION: bool = L::HAS_ACTION || R::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let mut left = L::Attribute::default();
        if self.left.parse(cur, ctx, &mut left) {
            *attr = alternative_left::<L::Attribute, R::Attribute>(left);
            return true;
        }
        if failure_pending(ctx) {
            return false;
        }

        let mut right = R::Attribute::default();
        if self.right.parse(cur, ctx, &mut right) {
            *attr = alternative_right::<L::Attribute, R::Attribute>(right);
            return true;
        }
        false
    }

    fn what(&self) -> String {
        format!("({} | {})", self.left.what(), self.right.what())
    }
}

crate::parser::impl_operators! { [L, R,] Alt<L, R>; }
