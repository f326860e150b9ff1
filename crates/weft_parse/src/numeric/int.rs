use weft_attr::Attribute;

/// Integer types an unsigned parser can produce.
pub trait Unsigned: Attribute + Copy {
    const ZERO: Self;

    /// `self * radix + digit`, or `None` on overflow.
    fn mul_add(self, radix: u32, digit: u32) -> Option<Self>;
}

/// Integer types a signed parser can produce.
pub trait Signed: Unsigned {
    /// `self * radix - digit`, or `None` on overflow.
    fn mul_sub(self, radix: u32, digit: u32) -> Option<Self>;
}

macro_rules! unsigned {
    ($($t:ty),*) => {$(
        impl Unsigned for $t {
            const ZERO: Self = 0;

            #[inline]
            fn mul_add(self, radix: u32, digit: u32) -> Option<Self> {
                self.checked_mul(<$t>::try_from(radix).ok()?)?
                    .checked_add(<$t>::try_from(digit).ok()?)
            }
        }
    )*};
}

macro_rules! signed {
    ($($t:ty),*) => {$(
        unsigned!($t);

        impl Signed for $t {
            #[inline]
            fn mul_sub(self, radix: u32, digit: u32) -> Option<Self> {
                self.checked_mul(<$t>::try_from(radix).ok()?)?
                    .checked_sub(<$t>::try_from(digit).ok()?)
            }
        }
    )*};
}

unsigned!(u8, u16, u32, u64, u128, usize);
signed!(i8, i16, i32, i64, i128, isize);
