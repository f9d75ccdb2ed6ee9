//! Integration tests against the literal scenario table and the
//! universal correctness properties.

use lexical_parse_float::{
    parse, parse_partial, parse_partial_with_status, Options, ParseFloatError, ParseStatus,
};

fn p64(s: &str) -> f64 {
    parse::<f64>(s.as_bytes(), Options::STANDARD).unwrap()
}

fn p32(s: &str) -> f32 {
    parse::<f32>(s.as_bytes(), Options::STANDARD).unwrap()
}

#[test]
fn smallest_normal_boundary() {
    assert_eq!(p64("2.2250738585072014e-308"), f64::MIN_POSITIVE);
}

#[test]
fn largest_subnormal_boundary() {
    let largest_subnormal = f64::from_bits(f64::MIN_POSITIVE.to_bits() - 1);
    assert_eq!(p64("2.2250738585072009e-308"), largest_subnormal);
    assert!(largest_subnormal < f64::MIN_POSITIVE);
}

#[test]
fn minimum_positive_subnormal() {
    assert_eq!(p64("4.9406564584124654e-324"), f64::from_bits(1));
}

#[test]
fn max_finite_value() {
    assert_eq!(p64("1.7976931348623157e308"), f64::MAX);
}

#[test]
fn overflow_reports_out_of_range_and_signed_infinity() {
    let (value, consumed, status) =
        parse_partial_with_status::<f64>(b"1.8e308", Options::STANDARD).unwrap();
    assert_eq!(value, f64::INFINITY);
    assert_eq!(consumed, 7);
    assert_eq!(status, ParseStatus::ResultOutOfRange);

    let (value, consumed, status) =
        parse_partial_with_status::<f64>(b"-1.8e308", Options::STANDARD).unwrap();
    assert_eq!(value, f64::NEG_INFINITY);
    assert_eq!(consumed, 8);
    assert_eq!(status, ParseStatus::ResultOutOfRange);
}

#[test]
fn huge_zero_mantissa_exponent_is_ok_zero() {
    let value = p64("0e9999999999999999999999999999");
    assert_eq!(value, 0.0);
    assert!(value.is_sign_positive());
}

#[test]
fn negative_zero_keeps_its_sign() {
    let value = p64("-0");
    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());
}

#[test]
fn leading_plus_is_a_dialect_error_under_json() {
    assert!(matches!(
        parse::<f64>(b"+1", Options::JSON),
        Err(ParseFloatError::InvalidDigit(_))
    ));
}

#[test]
fn halfway_case_rounds_to_even() {
    // 2^52 is exactly representable with an even (zero) mantissa LSB;
    // 2^52 + 1 would be odd. Round-half-to-even picks the even one.
    assert_eq!(p64("4503599627370496.5"), 4503599627370496.0);
}

#[test]
fn deep_subnormal_literal_exercises_the_big_integer_path() {
    let s = format!("0.{}49406564584124654", "0".repeat(323));
    assert_eq!(p64(&s), f64::from_bits(1));
}

#[test]
fn extremely_long_leading_zero_run_underflows_exactly_to_zero() {
    let s = format!("0.{}1", "0".repeat(400));
    assert_eq!(p64(&s), 0.0);
}

#[test]
fn f32_rounds_up_to_max_finite() {
    assert_eq!(p32("3.4028234664e38"), f32::MAX);
}

#[test]
fn f32_rounds_down_to_max_finite_rather_than_overflowing() {
    assert_eq!(p32("3.4028234666e38"), f32::MAX);
}

#[test]
fn f32_underflows_to_zero() {
    assert_eq!(p32("7.0060e-46"), 0.0f32);
}

#[test]
fn monotonicity_holds_across_adjacent_literals() {
    let a = p64("1.0000000000000002");
    let b = p64("1.0000000000000004");
    assert!(a <= b);
}

#[test]
fn boundary_symmetry_between_a_literal_and_its_negation() {
    for s in ["1.5", "2.2250738585072014e-308", "4503599627370496.5", "0"] {
        let positive = p64(s);
        let negated = p64(&format!("-{s}"));
        assert_eq!(negated, -positive);
    }
}

#[test]
fn round_trip_through_full_precision_formatting() {
    let values: [f64; 5] = [
        1.0 / 3.0,
        core::f64::consts::PI,
        1e300,
        1e-300,
        123456789.123456,
    ];
    for v in values {
        let formatted = format!("{v:e}");
        assert_eq!(p64(&formatted), v);
    }
}
