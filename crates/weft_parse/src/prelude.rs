//! Everything a grammar author usually needs.

pub use crate::action::ActionContext;
pub use crate::auxiliary::{attr, eoi, eol, eps, eps_if, eps_with};
pub use crate::char::{
    alnum, alpha, any_char, blank, char_, char_range, char_set, cntrl, digit, graph, lower,
    print, punct, space, upper, xdigit,
};
pub use crate::context::{Key, Own};
pub use crate::directive::{
    as_, lexeme, matches, narrow, no_case, no_skip, omit, raw, repeat, seek, skip, skip_with,
    with, with_local, without,
};
pub use crate::entry::{
    parse, parse_all, parse_with_options, phrase_parse, phrase_parse_all, ParseError,
    ParseOptions, ParseResult, PostSkip,
};
pub use crate::numeric::{
    bin, bool_, double_, float_, hex, int_, long_, oct, short_, uint_, ulong_, ushort_,
};
pub use crate::operator::{and_pred, expect, kleene, list, not_pred, opt, plus};
pub use crate::parser::{IntoParser, Parser, ParserExt};
pub use crate::rule::{Rule, RuleId};
pub use crate::string::{lit, string};
pub use crate::symbols::Symbols;
pub use crate::{rule, Context, Cursor};
pub use weft_attr::{Either, Unused};
