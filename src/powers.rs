//! On-demand computation of the 128-bit power-of-ten approximations the
//! Eisel-Lemire core (§4.D) multiplies the decimal mantissa by.
//!
//! No literal table of ~650 128-bit magic constants is embedded here.
//! Each entry is derived at call time from the big-integer machinery in
//! `bigint.rs`: an exact power of five for non-negative exponents, and a
//! bit-serial binary long division for negative ones. Doing this on the
//! stack-only `Bigint` rather than caching a heap table also keeps faith
//! with the "no heap allocation is ever required" resource model.

use crate::bigint::Bigint;
use core::cmp::Ordering;

/// Smallest decimal exponent needed for the widest binary format (`f64`).
pub const SMALLEST_POWER_OF_TEN: i32 = -342;
/// Largest decimal exponent needed for the widest binary format (`f64`).
pub const LARGEST_POWER_OF_TEN: i32 = 308;

/// A 128-bit approximation to `10^q`, normalized so the combined
/// `(hi, lo)` pair, read as a 128-bit integer, lies in `[2^127, 2^128)`,
/// together with the binary exponent that scales it back to the true
/// magnitude: `value ~= (hi * 2^64 + lo) * 2^exp2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pow10Approx {
    pub hi: u64,
    pub lo: u64,
    pub exp2: i32,
    /// Set when the true value of `10^q` is strictly greater than the
    /// rounded `(hi, lo)` pair, i.e. precision below 128 bits was folded
    /// in by rounding up rather than represented exactly.
    pub truncated: bool,
}

/// Compute the 128-bit approximation to `10^q`.
///
/// `q` must lie within `[SMALLEST_POWER_OF_TEN, LARGEST_POWER_OF_TEN]`;
/// the digit scanner (§4.A) clamps decimal exponents to stay in range
/// before this is ever called.
pub fn pow10_approx(q: i32) -> Pow10Approx {
    debug_assert!((SMALLEST_POWER_OF_TEN..=LARGEST_POWER_OF_TEN).contains(&q));
    if q >= 0 {
        positive_pow10(q as u32)
    } else {
        negative_pow10((-q) as u32)
    }
}

/// `10^q = 5^q * 2^q` for `q >= 0`: compute `5^q` exactly and fold the
/// `2^q` factor into the binary exponent.
fn positive_pow10(q: u32) -> Pow10Approx {
    let mut big = Bigint::from_u32(1);
    big.pow5(q);
    let bit_length = big.bit_length() as i32;
    let (hi, lo, truncated) = big.hi128();
    let (hi, lo) = round_up_if(hi, lo, truncated);
    Pow10Approx {
        hi,
        lo,
        exp2: bit_length - 128 + q as i32,
        truncated,
    }
}

/// `10^q = 2^q / 5^(-q)` for `q < 0`: derive a ceiling-rounded reciprocal
/// of `5^(-q)` one bit at a time via restoring binary long division, then
/// fold the `2^q` factor into the binary exponent.
///
/// `5^(-q)` is odd for every `-q > 0`, so `1 / 5^(-q)` never terminates in
/// binary: the 128-bit mantissa below is always a truncation of the true
/// value, and rounding it up always yields a safe upper bound.
fn negative_pow10(neg_q: u32) -> Pow10Approx {
    let mut divisor = Bigint::from_u32(1);
    divisor.pow5(neg_q);

    let mut remainder = Bigint::from_u32(1);
    let mut hi: u64 = 0;
    let mut lo: u64 = 0;
    let mut collected: u32 = 0;
    let mut started = false;
    let mut leading_zeros: i32 = 0;

    while collected < 128 {
        remainder.shl(1);
        let bit = if remainder.compare(&divisor) != Ordering::Less {
            remainder.sub_assign(&divisor);
            1u64
        } else {
            0u64
        };
        if !started {
            if bit == 0 {
                leading_zeros += 1;
                continue;
            }
            started = true;
        }
        if collected < 64 {
            hi = (hi << 1) | bit;
        } else {
            lo = (lo << 1) | bit;
        }
        collected += 1;
    }

    let (hi, lo) = round_up_if(hi, lo, true);
    Pow10Approx {
        hi,
        lo,
        exp2: -(leading_zeros + 1) - neg_q as i32,
        truncated: true,
    }
}

#[inline]
fn round_up_if(hi: u64, lo: u64, truncated: bool) -> (u64, u64) {
    if !truncated {
        return (hi, lo);
    }
    let (lo, carry) = lo.overflowing_add(1);
    if carry {
        (hi.wrapping_add(1), lo)
    } else {
        (hi, lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow10_zero_is_one() {
        let p = pow10_approx(0);
        assert!(!p.truncated);
        assert_eq!(p.hi, 1u64 << 63);
        assert_eq!(p.lo, 0);
        assert_eq!(p.exp2, -127);
    }

    #[test]
    fn pow10_small_positive_exact() {
        // 10^1 = 10 = 0b1010, exact, fits well inside 128 bits.
        let p = pow10_approx(1);
        assert!(!p.truncated);
        let mantissa = (p.hi as u128) << 64 | p.lo as u128;
        // mantissa * 2^exp2 must equal 10 exactly; exp2 is negative here,
        // so check mantissa >> -exp2 == 10 with no remainder.
        let shift = (-p.exp2) as u32;
        assert_eq!(mantissa >> shift, 10);
        assert_eq!(mantissa & ((1u128 << shift) - 1), 0);
    }

    #[test]
    fn pow10_negative_matches_reciprocal_shape() {
        // 10^-1 = 0.1; the approximation's mantissa's top bit must be set
        // (normalized) and it must report truncation (non-terminating).
        let p = pow10_approx(-1);
        assert!(p.truncated);
        assert_eq!(p.hi >> 63, 1);
    }

    #[test]
    fn pow10_matches_digit_count() {
        // 10^20 no longer fits in 64 bits but is still exact in 128.
        let p = pow10_approx(20);
        assert!(!p.truncated);
    }
}
