//! Skipping and case directives.

use crate::context::SkipMode;
use crate::parser::{IntoParser, Parser};
use crate::{Context, Cursor};

/// Skip once before the subject, then parse it with skipping off.
#[derive(Copy, Clone, Debug)]
pub struct Lexeme<P> {
    subject: P,
}

/// Parse the subject with skipping off, without skipping first.
#[derive(Copy, Clone, Debug)]
pub struct NoSkip<P> {
    subject: P,
}

/// Turn skipping back on inside a `lexeme` or `no_skip`.
#[derive(Copy, Clone, Debug)]
pub struct Skip<P> {
    subject: P,
}

/// Parse the subject with `skipper` as the skipper.
#[derive(Copy, Clone, Debug)]
pub struct SkipWith<S, P> {
    skipper: S,
    subject: P,
}

/// Compare characters case-insensitively inside the subject.
#[derive(Copy, Clone, Debug)]
pub struct NoCase<P> {
    subject: P,
}

pub fn lexeme<P: IntoParser>(subject: P) -> Lexeme<P::Parser> {
    Lexeme {
        subject: subject.into_parser(),
    }
}

pub fn no_skip<P: IntoParser>(subject: P) -> NoSkip<P::Parser> {
    NoSkip {
        subject: subject.into_parser(),
    }
}

pub fn skip<P: IntoParser>(subject: P) -> Skip<P::Parser> {
    Skip {
        subject: subject.into_parser(),
    }
}

pub fn skip_with<S: Parser, P: IntoParser>(skipper: S, subject: P) -> SkipWith<S, P::Parser> {
    SkipWith {
        skipper,
        subject: subject.into_parser(),
    }
}

pub fn no_case<P: IntoParser>(subject: P) -> NoCase<P::Parser> {
    NoCase {
        subject: subject.into_parser(),
    }
}

impl<P: Parser> Parser for Lexeme<P> {
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        if self
            .subject
            .parse(cur, &ctx.with_skip_mode(SkipMode::Disabled), attr)
        {
            return true;
        }
        cur.set_position(start);
        false
    }

    fn what(&self) -> String {
        format!("lexeme[{}]", self.subject.what())
    }
}

impl<P: Parser> Parser for NoSkip<P> {
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        self.subject
            .parse(cur, &ctx.with_skip_mode(SkipMode::Disabled), attr)
    }

    fn what(&self) -> String {
        format!("no_skip[{}]", self.subject.what())
    }
}

impl<P: Parser> Parser for Skip<P> {
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        self.subject
            .parse(cur, &ctx.with_skip_mode(SkipMode::Enabled), attr)
    }

    fn what(&self) -> String {
        format!("skip[{}]", self.subject.what())
    }
}

impl<S: Parser, P: Parser> Parser for SkipWith<S, P> {
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        self.subject
            .parse(cur, &ctx.with_skipper(&self.skipper), attr)
    }

    fn what(&self) -> String {
        format!("skip({})[{}]", self.skipper.what(), self.subject.what())
    }
}

impl<P: Parser> Parser for NoCase<P> {
    type Attribute = P::Attribute;

    const HANDLES_CONTAINER: bool = P::HANDLES_CONTAINER;
    const HAS_ACTION: bool = P::HAS_ACTION;

    fn parse<C: Context>(
        &self,
        cur: &mut Cursor<'_>,
        ctx: &C,
        attr: &mut Self::Attribute,
    ) -> bool {
        self.subject.parse(cur, &ctx.with_no_case(), attr)
    }

    fn what(&self) -> String {
        format!("no_case[{}]", self.subject.what())
    }
}

crate::parser::impl_operators! {
    [P,] Lexeme<P>;
    [P,] NoSkip<P>;
    [P,] Skip<P>;
    [S, P,] SkipWith<S, P>;
    [P,] NoCase<P>;
}
