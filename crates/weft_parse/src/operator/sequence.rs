//! `a >> b >> ...`: n-ary sequence.
//!
//! `>>` on a sequence appends rather than nests, so `a >> b >> c` is one
//! three-element node and its attribute is one flat tuple. Children without
//! an attribute take no slot; a single remaining slot is exposed bare.

use weft_attr::compose::{push, Pushed, TupleBuilder};

use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// Sequence of the parsers in the tuple `T`.
#[derive(Copy, Clone, Debug)]
pub struct Seq<T>(pub T);

macro_rules! seq_attribute {
    (@acc $acc:ty;) => { <$acc as TupleBuilder>::Finished };
    (@acc $acc:ty; $p:ident $($rest:ident)*) => {
        seq_attribute!(@acc Pushed<$acc, <$p as Parser>::Attribute>; $($rest)*)
    };
}

macro_rules! sequences {
    ($( ($($p:ident $a:ident $i:tt),+) => $append:ident; )*) => {$(
        impl<$($p: Parser),+> Parser for Seq<($($p,)+)> {
            type Attribute = seq_attribute!(@acc (); $($p)+);

            const HAS_ACTION: bool = false $(|| $p::HAS_ACTION)+;

            fn parse<C: Context>(
                &self,
                cur: &mut Cursor<'_>,
                ctx: &C,
                attr: &mut Self::Attribute,
            ) -> bool {
                let start = cur.position();
                let acc = ();
                $(
                    let mut $a = $p::Attribute::default();
                    if !self.0.$i.parse(cur, ctx, &mut $a) {
                        cur.set_position(start);
                        return false;
                    }
                    let acc = push(acc, $a);
                )+
                *attr = acc.finish();
                true
            }

            fn what(&self) -> String {
                let parts = [$(self.0.$i.what()),+];
                format!("({})", parts.join(" >> "))
            }
        }

        sequences!(@shr $append [$($p $i),+]);

        $crate::parser::impl_operators!(@no_shr [$($p,)+] Seq<($($p,)+)>);
    )*};
    (@shr append [$($p:ident $i:tt),+]) => {
        impl<$($p,)+ Rhs: IntoParser> ::std::ops::Shr<Rhs> for Seq<($($p,)+)> {
            type Output = Seq<($($p,)+ Rhs::Parser)>;

            #[inline]
            fn shr(self, rhs: Rhs) -> Self::Output {
                Seq(($(self.0.$i,)+ rhs.into_parser()))
            }
        }
    };
    // Twelve children is the widest flat node; the next `>>` nests.
    (@shr nest [$($p:ident $i:tt),+]) => {
        impl<$($p,)+ Rhs: IntoParser> ::std::ops::Shr<Rhs> for Seq<($($p,)+)> {
            type Output = Seq<(Self, Rhs::Parser)>;

            #[inline]
            fn shr(self, rhs: Rhs) -> Self::Output {
                Seq((self, rhs.into_parser()))
            }
        }
    };
}

sequences! {
    (P0 a0 0, P1 a1 1) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6, P7 a7 7) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6, P7 a7 7, P8 a8 8) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6, P7 a7 7, P8 a8 8, P9 a9 9) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6, P7 a7 7, P8 a8 8, P9 a9 9, P10 a10 10) => append;
    (P0 a0 0, P1 a1 1, P2 a2 2, P3 a3 3, P4 a4 4, P5 a5 5, P6 a6 6, P7 a7 7, P8 a8 8, P9 a9 9, P10 a10 10, P11 a11 11) => nest;
}
