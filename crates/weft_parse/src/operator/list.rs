//! `a % d`: one or more `a` separated by `d`.

use weft_attr::Attribute;

use super::failure_pending;
use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

#[derive(Copy, Clone, Debug)]
pub struct List<A, D> {
    element: A,
    delimiter: D,
}

impl<A, D> List<A, D> {
    pub fn new(element: A, delimiter: D) -> Self {
        List { element, delimiter }
    }
}

/// Function form of `element % delimiter`.
pub fn list<A: IntoParser, D: IntoParser>(element: A, delimiter: D) -> List<A::Parser, D::Parser> {
    List::new(element.into_parser(), delimiter.into_parser())
}

impl<A: Parser, D: Parser> Parser for List<A, D> {
    type Attribute = <A::Attribute as Attribute>::Repeated;

    const HANDLES_CONTAINER: bool = true;
    const HAS_ACTION: bool = A::HAS_ACTION || D::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let start = cur.position();
        let mut first = A::Attribute::default();
        if !self.element.parse(cur, ctx, &mut first) {
            return false;
        }
        A::Attribute::push_repeated(attr, first);

        loop {
            let before = cur.position();
            let mut separator = D::Attribute::default();
            if !self.delimiter.parse(cur, ctx, &mut separator) {
                break;
            }
            let mut value = A::Attribute::default();
            if !self.element.parse(cur, ctx, &mut value) {
                cur.set_position(before);
                break;
            }
            A::Attribute::push_repeated(attr, value);
            if cur.position() == before {
                break;
            }
        }

        if failure_pending(ctx) {
            cur.set_position(start);
            return false;
        }
        true
    }

    fn what(&self) -> String {
        format!("({} % {})", self.element.what(), self.delimiter.what())
    }
}

crate::parser::impl_operators! { [A, D,] List<A, D>; }
