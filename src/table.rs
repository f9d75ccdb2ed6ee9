//! Exact small power-of-ten tables for the Clinger fast path (§4.B, §4.C).
//!
//! These are genuinely exact in the target float type (every value here
//! is representable without rounding), unlike the 128-bit approximation
//! table the Eisel-Lemire core uses (`powers.rs`) which is necessarily
//! inexact for large exponents.

use crate::float::RawFloat;

/// `10^0 ..= 10^22`, each exactly representable as an `f64`.
pub const F64_POWERS: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// `10^0 ..= 10^10`, each exactly representable as an `f32`.
pub const F32_POWERS: [f32; 11] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];

/// Clinger's fast path for `f64`: valid when the mantissa fits losslessly
/// in a `f64` and the decimal exponent indexes a tabulated exact power of
/// ten, so the whole computation becomes one native multiply or divide.
pub fn fast_path_f64(mantissa: u64, exp10: i32, negative: bool) -> Option<f64> {
    if mantissa > f64::MAX_MANTISSA_FAST_PATH {
        return None;
    }
    let value = if exp10 >= 0 {
        if exp10 as i64 > f64::MAX_EXPONENT_FAST_PATH {
            return None;
        }
        (mantissa as f64) * F64_POWERS[exp10 as usize]
    } else {
        let exp = -exp10;
        if exp as i64 > f64::MAX_EXPONENT_FAST_PATH {
            return None;
        }
        (mantissa as f64) / F64_POWERS[exp as usize]
    };
    Some(if negative { -value } else { value })
}

/// Clinger's fast path for `f32`, same shape as [`fast_path_f64`].
pub fn fast_path_f32(mantissa: u64, exp10: i32, negative: bool) -> Option<f32> {
    if mantissa > f32::MAX_MANTISSA_FAST_PATH {
        return None;
    }
    // The mantissa must also fit in an `f32` exactly; `f64` has enough
    // precision to hold it, so round-trip through `f64` for the multiply
    // and narrow afterwards, matching the upstream `fast_float` approach
    // of doing the arithmetic in the wider type when available.
    let value = if exp10 >= 0 {
        if exp10 as i64 > f32::MAX_EXPONENT_FAST_PATH {
            return None;
        }
        (mantissa as f32) * F32_POWERS[exp10 as usize]
    } else {
        let exp = -exp10;
        if exp as i64 > f32::MAX_EXPONENT_FAST_PATH {
            return None;
        }
        (mantissa as f32) / F32_POWERS[exp as usize]
    };
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_f64_simple_value() {
        let v = fast_path_f64(125, 2, false).unwrap();
        assert_eq!(v, 12500.0);
    }

    #[test]
    fn fast_path_f64_negative_exponent() {
        let v = fast_path_f64(125, -2, false).unwrap();
        assert_eq!(v, 1.25);
    }

    #[test]
    fn fast_path_f64_rejects_oversized_mantissa() {
        assert!(fast_path_f64(u64::MAX, 0, false).is_none());
    }

    #[test]
    fn fast_path_f32_simple_value() {
        let v = fast_path_f32(125, 2, false).unwrap();
        assert_eq!(v, 12500.0f32);
    }

    #[test]
    fn fast_path_applies_sign() {
        let v = fast_path_f64(5, 0, true).unwrap();
        assert_eq!(v, -5.0);
    }
}
