use pretty_assertions::assert_eq;

use super::*;
use crate::entry::parse;

fn value_of<P: Parser>(input: &str, p: &P) -> Option<P::Attribute>
where
    P::Attribute: weft_attr::Merge<P::Attribute>,
{
    let mut value = P::Attribute::default();
    parse(input, p, &mut value).is_full_match().then_some(value)
}

#[test]
fn test_unsigned() {
    assert_eq!(value_of("123456", &uint_()), Some(123_456));
    assert_eq!(value_of("4294967295", &uint_()), Some(u32::MAX));
    assert_eq!(value_of("4294967296", &uint_()), None);
    assert_eq!(value_of("-1", &uint_()), None);
    assert_eq!(value_of("65535", &ushort_()), Some(u16::MAX));
    assert_eq!(value_of("18446744073709551615", &ulong_()), Some(u64::MAX));
}

#[test]
fn test_radix() {
    assert_eq!(value_of("1011", &bin()), Some(11));
    assert_eq!(value_of("777", &oct()), Some(511));
    assert_eq!(value_of("fFfF", &hex()), Some(0xffff));
    assert_eq!(value_of("2", &bin()), None);
}

#[test]
fn test_digit_bounds() {
    let two: UintParser<u32, 10, 2, 2> = UintParser::new();
    let mut value = 0_u32;
    let result = parse("1234", &two, &mut value);
    assert!(result.matched);
    assert_eq!((value, result.position), (12, 2));
    assert!(!parse("1", &two, &mut value).matched);
}

#[test]
fn test_widest_radix() {
    let base36: UintParser<u32, 36> = UintParser::new();
    assert_eq!(value_of("zZ", &base36), Some(1295));

    let signed: IntParser<i64, 36> = IntParser::new();
    assert_eq!(value_of("-10", &signed), Some(-36));
}

#[test]
fn test_signed() {
    assert_eq!(value_of("-2147483648", &int_()), Some(i32::MIN));
    assert_eq!(value_of("+2147483647", &int_()), Some(i32::MAX));
    assert_eq!(value_of("2147483648", &int_()), None);
    assert_eq!(value_of("-", &int_()), None);
    assert_eq!(value_of("-32768", &short_()), Some(i16::MIN));
    assert_eq!(value_of("-9000000000", &long_()), Some(-9_000_000_000));
}

#[test]
fn test_overflow_rolls_back() {
    let mut value = 17;
    let result = parse("2147483648", &int_(), &mut value);
    assert!(!result.matched);
    assert_eq!(result.position, 0);
    assert_eq!(value, 17);
}

#[test]
fn test_scan_real() {
    assert_eq!(real::scan("1.5e3x"), Some(5));
    assert_eq!(real::scan("-.5"), Some(3));
    assert_eq!(real::scan("7."), Some(2));
    assert_eq!(real::scan("2e"), Some(1));
    assert_eq!(real::scan("2e+"), Some(1));
    assert_eq!(real::scan("."), None);
    assert_eq!(real::scan("+INF"), Some(4));
    assert_eq!(real::scan("infinity!"), Some(8));
    assert_eq!(real::scan("NaN"), Some(3));
    assert_eq!(real::scan("x"), None);
}

#[test]
fn test_reals() {
    assert_eq!(value_of("3.25", &double_()), Some(3.25));
    assert_eq!(value_of("-1e-2", &double_()), Some(-0.01));
    assert_eq!(value_of("42", &float_()), Some(42.0));
    assert_eq!(value_of("-inf", &double_()), Some(f64::NEG_INFINITY));
    assert!(value_of("nan", &double_()).is_some_and(f64::is_nan));
}

#[test]
fn test_bool() {
    assert_eq!(value_of("true", &bool_()), Some(true));
    assert_eq!(value_of("false", &bool_()), Some(false));
    assert_eq!(value_of("yes", &bool_()), None);
    let mut value = false;
    assert!(parse("TRUE", &crate::directive::no_case(bool_()), &mut value).matched);
    assert!(value);
}
