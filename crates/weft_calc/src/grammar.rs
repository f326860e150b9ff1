//! The calculator grammar.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := name | number | '(' expression ')' | '-' factor | '+' factor
//! ```
//!
//! Every rule's attribute is an `f64` accumulated by actions through
//! [`ActionContext::val`]; the bodies' own attributes are omitted. Names
//! resolve against the [`Constants`] table bound around the parse.

use tracing::trace;
use weft_parse::prelude::*;

/// Tag for the constant table in the parse context.
pub struct Constants;

impl Key for Constants {
    type Value = Symbols<f64>;
}

rule! {
    pub Expression: f64 = "expression" => omit(
        Term::rule().action(assign)
            >> kleene(
                (lit('+') >> expect(Term::rule())).action(add)
                    | (lit('-') >> expect(Term::rule())).action(subtract),
            ),
    );

    pub Term: f64 = "term" => omit(
        Factor::rule().action(assign)
            >> kleene(
                (lit('*') >> expect(Factor::rule())).action(multiply)
                    | (lit('/') >> expect(Factor::rule())).action(divide),
            ),
    );

    pub Factor: f64 = "factor" => omit(
        name().action(constant)
            | double_().action(assign)
            | (lit('(') >> expect(Expression::rule()) >> expect(lit(')'))).action(assign)
            | (lit('-') >> expect(Factor::rule())).action(negate)
            | (lit('+') >> expect(Factor::rule())).action(assign),
    );
}

fn name() -> impl Parser<Attribute = String> + Copy {
    lexeme(raw(alpha() >> kleene(alnum() | '_')))
}

fn update(cx: &ActionContext<'_>, f: impl FnOnce(&mut f64)) {
    if let Some(mut acc) = cx.val::<f64>() {
        f(&mut acc);
    }
}

fn assign(value: &mut f64, cx: &mut ActionContext<'_>) {
    update(cx, |acc| *acc = *value);
}

fn add(value: &mut f64, cx: &mut ActionContext<'_>) {
    update(cx, |acc| *acc += *value);
}

fn subtract(value: &mut f64, cx: &mut ActionContext<'_>) {
    update(cx, |acc| *acc -= *value);
}

fn multiply(value: &mut f64, cx: &mut ActionContext<'_>) {
    update(cx, |acc| *acc *= *value);
}

fn divide(value: &mut f64, cx: &mut ActionContext<'_>) {
    update(cx, |acc| *acc /= *value);
}

fn negate(value: &mut f64, cx: &mut ActionContext<'_>) {
    update(cx, |acc| *acc = -*value);
}

/// Unknown names veto the match so `inf` and `nan` still parse as numbers.
fn constant(name: &mut String, cx: &mut ActionContext<'_>) {
    match cx.get::<Constants>().and_then(|table| table.find(name)).copied() {
        Some(value) => update(cx, |acc| *acc = value),
        None => {
            trace!(name = name.as_str(), "unknown constant");
            cx.fail();
        }
    }
}
