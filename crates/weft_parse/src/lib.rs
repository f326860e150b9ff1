//! Statically composed parser combinators.
//!
//! A grammar is an ordinary Rust value built from terminals and operators;
//! its type is the combinator tree, so every call is resolved at compile
//! time. Each parser produces a typed *attribute* (see `weft_attr`), and
//! composites derive theirs from their children.
//!
//! ```
//! use weft_parse::prelude::*;
//!
//! let pair = int_() >> ',' >> int_();
//! let mut value = (0_i32, 0_i32);
//! let result = phrase_parse("12 , -7", &pair, &space(), PostSkip::Always, &mut value);
//! assert!(result.is_full_match());
//! assert_eq!(value, (12, -7));
//! ```
//!
//! # Layout
//!
//! - [`cursor`], [`context`], [`parser`]: the parse protocol.
//! - [`operator`]: sequences, alternatives, repetition, predicates and
//!   commit points.
//! - [`char`], [`string`], [`numeric`], [`auxiliary`], [`symbols`]:
//!   terminals.
//! - [`directive`], [`action`]: wrappers that change how a subject parses.
//! - [`rule`]: named and recursive nonterminals.
//! - [`annotate`]: node positions and error reports through rule hooks.
//! - [`entry`]: `parse`, `phrase_parse` and their results.

pub mod action;
pub mod annotate;
pub mod auxiliary;
pub mod char;
pub mod context;
pub mod cursor;
pub mod directive;
pub mod entry;
pub mod numeric;
pub mod operator;
pub mod parser;
pub mod prelude;
pub mod rule;
pub mod string;
pub mod symbols;

pub use context::Context;
pub use cursor::Cursor;
pub use entry::{
    parse, parse_all, parse_with_options, phrase_parse, phrase_parse_all, ParseError,
    ParseOptions, ParseResult, PostSkip,
};
pub use parser::{IntoParser, Parser, ParserExt, ParserFlags};
pub use weft_attr as attribute;
