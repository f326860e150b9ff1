//! Numeric terminals.
//!
//! Integers accumulate digit by digit with checked arithmetic, so a value
//! that does not fit the target type is a parse failure, never a wrapped
//! result. Signed parsers accumulate negative values towards `MIN`, which
//! makes `-2147483648` parse as an `i32` while `2147483648` does not.

mod int;
mod real;

pub use int::{Signed, Unsigned};
pub use real::{BoolParser, RealParser};

use std::marker::PhantomData;

use crate::{Context, Cursor, Parser};

/// Unsigned integer in base `RADIX`, `MIN_DIGITS..=MAX_DIGITS` digits long.
///
/// `RADIX` must be in `2..=36`:
///
/// ```compile_fail
/// use weft_parse::numeric::UintParser;
///
/// let _ = UintParser::<u32, 40>::new();
/// ```
pub struct UintParser<
    T,
    const RADIX: u32 = 10,
    const MIN_DIGITS: usize = 1,
    const MAX_DIGITS: usize = { usize::MAX },
> {
    target: PhantomData<fn() -> T>,
}

/// Signed integer: optional `+`/`-`, then digits as for [`UintParser`].
pub struct IntParser<
    T,
    const RADIX: u32 = 10,
    const MIN_DIGITS: usize = 1,
    const MAX_DIGITS: usize = { usize::MAX },
> {
    target: PhantomData<fn() -> T>,
}

macro_rules! marker_impls {
    ($($name:ident),*) => {$(
        impl<T, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize>
            $name<T, RADIX, MIN_DIGITS, MAX_DIGITS>
        {
            /// Rejected at compile time unless `RADIX` is in `2..=36`.
            pub const fn new() -> Self {
                const { assert!(matches!(RADIX, 2..=36), "radix must be in 2..=36") };
                $name { target: PhantomData }
            }
        }

        impl<T, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize> Clone
            for $name<T, RADIX, MIN_DIGITS, MAX_DIGITS>
        {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize> Copy
            for $name<T, RADIX, MIN_DIGITS, MAX_DIGITS>
        {
        }

        impl<T, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize> Default
            for $name<T, RADIX, MIN_DIGITS, MAX_DIGITS>
        {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize>
            std::fmt::Debug for $name<T, RADIX, MIN_DIGITS, MAX_DIGITS>
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}<{}, {RADIX}>", stringify!($name), std::any::type_name::<T>())
            }
        }

        crate::parser::impl_operators! {
            [T, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize,]
            $name<T, RADIX, MIN_DIGITS, MAX_DIGITS>;
        }
    )*};
}

marker_impls!(UintParser, IntParser);

/// Consume up to `max` digits, folding them with `step`.
///
/// `None` when fewer than `min` digits are present or `step` overflows;
/// the cursor is then wherever scanning stopped.
fn accumulate<T: Copy>(
    cur: &mut Cursor<'_>,
    radix: u32,
    min: usize,
    max: usize,
    zero: T,
    step: impl Fn(T, u32) -> Option<T>,
) -> Option<T> {
    let mut value = zero;
    let mut count = 0;
    while count < max {
        let Some(digit) = cur.peek().and_then(|c| c.to_digit(radix)) else {
            break;
        };
        value = step(value, digit)?;
        cur.next_char();
        count += 1;
    }
    (count >= min).then_some(value)
}

impl<T: Unsigned, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize> Parser
    for UintParser<T, RADIX, MIN_DIGITS, MAX_DIGITS>
{
    type Attribute = T;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut T) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        match accumulate(cur, RADIX, MIN_DIGITS, MAX_DIGITS, T::ZERO, |v, d| {
            v.mul_add(RADIX, d)
        }) {
            Some(value) => {
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
        match RADIX {
            2 => "binary integer".to_owned(),
            8 => "octal integer".to_owned(),
            16 => "hexadecimal integer".to_owned(),
            _ => "unsigned integer".to_owned(),
        }
    }
}

impl<T: Signed, const RADIX: u32, const MIN_DIGITS: usize, const MAX_DIGITS: usize> Parser
    for IntParser<T, RADIX, MIN_DIGITS, MAX_DIGITS>
{
    type Attribute = T;

    fn parse<C: Context>(&self, cur: &mut Cursor<'_>, ctx: &C, attr: &mut T) -> bool {
        let start = cur.position();
        ctx.skip_over(cur);
        let negative = match cur.peek() {
            Some('-') => {
                cur.next_char();
                true
            }
            Some('+') => {
                cur.next_char();
                false
            }
            _ => false,
        };
        let value = if negative {
            accumulate(cur, RADIX, MIN_DIGITS, MAX_DIGITS, T::ZERO, |v, d| {
                v.mul_sub(RADIX, d)
            })
        } else {
            accumulate(cur, RADIX, MIN_DIGITS, MAX_DIGITS, T::ZERO, |v, d| {
                v.mul_add(RADIX, d)
            })
        };
        match value {
            Some(value) => {
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
        "integer".to_owned()
    }
}

pub fn uint_() -> UintParser<u32> {
    UintParser::new()
}

pub fn ulong_() -> UintParser<u64> {
    UintParser::new()
}

pub fn ushort_() -> UintParser<u16> {
    UintParser::new()
}

pub fn bin() -> UintParser<u32, 2> {
    UintParser::new()
}

pub fn oct() -> UintParser<u32, 8> {
    UintParser::new()
}

pub fn hex() -> UintParser<u32, 16> {
    UintParser::new()
}

pub fn int_() -> IntParser<i32> {
    IntParser::new()
}

pub fn long_() -> IntParser<i64> {
    IntParser::new()
}

pub fn short_() -> IntParser<i16> {
    IntParser::new()
}

pub fn float_() -> RealParser<f32> {
    RealParser::new()
}

pub fn double_() -> RealParser<f64> {
    RealParser::new()
}

pub fn bool_() -> BoolParser {
    BoolParser
}

#[cfg(test)]
mod tests;
