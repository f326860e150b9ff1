use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use weft_attr::Attribute;

use crate::{Context, Cursor, Parser};

fn digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Length of the decimal real at the start of `s`:
/// `[+-] (digits [. digits*] | . digits) [(e|E) [+-] digits]`, or one of
/// `inf`, `infinity`, `nan` in any case.
fn scan_real(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        if s.get(i..i + word.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(word))
        {
            return Some(i + word.len());
        }
    }

    let int_digits = digits(bytes, i);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits(bytes, i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits(bytes, j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    Some(i)
}

/// Decimal floating-point number.
pub struct RealParser<T> {
    target: PhantomData<fn() -> T>,
}

impl<T> RealParser<T> {
    pub const fn new() -> Self {
        RealParser {
            target: PhantomData,
        }
    }
}

impl<T> Clone for RealParser<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RealParser<T> {}

impl<T> fmt::Debug for RealParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RealParser<{}>", std::any::type_name::<T>())
    }
}

impl<T: Attribute + FromStr> Parser for RealParser<T> {
    type Attribute = T;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut T) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        let parsed = scan_real(cur.rest()).and_then(|len| {
            let value = cur.rest().get(..len)?.parse::<T>().ok()?;
            Some((len, value))
        });
        match parsed {
            Some((len, value)) => {
                cur.advance(len);
                *attr = value;
                true
            }
            None => {
                cur.set_position(start);
                false
            }
        }
    }

    fn what(&self) -> String {
        "real number".to_owned()
    }
}

/// `true` or `false`.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoolParser;

impl Parser for BoolParser {
    type Attribute = bool;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut bool) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        let rest = cur.rest();
        for (word, value) in [("true", true), ("false", false)] {
            let matched = if ctx.no_case() {
                rest.get(..word.len())
                    .is_some_and(|p| p.eq_ignore_ascii_case(word))
            } else {
                rest.starts_with(word)
            };
            if matched {
                cur.advance(word.len());
                *attr = value;
                return true;
            }
        }
        cur.set_position(start);
        false
    }

    fn what(&self) -> String {
        "boolean".to_owned()
    }
}

crate::parser::impl_operators! {
    [T,] RealParser<T>;
    [] BoolParser;
}

#[cfg(test)]
pub(super) fn scan(s: &str) -> Option<usize> {
    scan_real(s)
}
