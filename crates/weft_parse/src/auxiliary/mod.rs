//! Parsers that consume little or nothing.

use std::fmt;

use weft_attr::{Attribute, Unused};

use crate::{Context, Cursor, Parser};

/// Always matches, consuming nothing but the skipper's input.
#[derive(Copy, Clone, Debug, Default)]
pub struct Eps;

/// Matches iff the stored condition holds.
#[derive(Copy, Clone, Debug)]
pub struct EpsIf {
    condition: bool,
}

/// Matches iff `f()` returns `true`, evaluated on every attempt.
#[derive(Copy, Clone)]
pub struct EpsWith<F> {
    f: F,
}

impl<F> fmt::Debug for EpsWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EpsWith")
    }
}

/// End of input.
#[derive(Copy, Clone, Debug, Default)]
pub struct Eoi;

/// End of line: `\r\n`, `\n` or `\r`, or end of input.
#[derive(Copy, Clone, Debug, Default)]
pub struct Eol;

/// Consumes nothing and produces a clone of `value`.
#[derive(Clone, Debug)]
pub struct Attr<T> {
    value: T,
}

pub fn eps() -> Eps {
    Eps
}

pub fn eps_if(condition: bool) -> EpsIf {
    EpsIf { condition }
}

pub fn eps_with<F: Fn() -> bool>(f: F) -> EpsWith<F> {
    EpsWith { f }
}

pub fn eoi() -> Eoi {
    Eoi
}

pub fn eol() -> Eol {
    Eol
}

pub fn attr<T: Attribute + Clone>(value: T) -> Attr<T> {
    Attr { value }
}

/// Shared body of the epsilon forms: skip, then test.
fn epsilon<C: Context>(cur: &mut Cursor<'_>, ctx: &C, condition: bool) -> bool {
    if !condition {
        return false;
    }
    ctx.skip_over(cur);
    true
}

impl Parser for Eps {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        epsilon(cur, ctx, true)
    }

    fn what(&self) -> String {
        "eps".to_owned()
    }
}

impl Parser for EpsIf {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        epsilon(cur, ctx, self.condition)
    }

    fn what(&self) -> String {
        format!("eps({})", self.condition)
    }
}

impl<F: Fn() -> bool> Parser for EpsWith<F> {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        epsilon(cur, ctx, (self.f)())
    }

    fn what(&self) -> String {
        "eps(f)".to_owned()
    }
}

impl Parser for Eoi {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        if cur.at_end() {
            return true;
        }
        cur.set_position(start);
        false
    }

    fn what(&self) -> String {
        "end of input".to_owned()
    }
}

impl Parser for Eol {
    type Attribute = Unused;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, _attr: &mut Unused) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        if cur.eat("\r\n") || cur.eat("\n") || cur.eat("\r") || cur.at_end() {
            return true;
        }
        cur.set_position(start);
        false
    }

    fn what(&self) -> String {
        "end of line".to_owned()
    }
}

impl<T: Attribute + Clone> Parser for Attr<T> {
    type Attribute = T;

    fn parse<C: Context>(&self, _cur: &mut Cursor<'_>, _ctx: &C, attr: &mut T) -> bool {
        attr.clone_from(&self.value);
        true
    }

    fn what(&self) -> String {
        "attr".to_owned()
    }
}

crate::parser::impl_operators! {
    [] Eps;
    [] EpsIf;
    [F,] EpsWith<F>;
    [] Eoi;
    [] Eol;
    [T,] Attr<T>;
}
