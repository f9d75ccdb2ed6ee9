//! The Eisel-Lemire core (§4.D): resolve mantissa/decimal-exponent pairs
//! the fast path declined, without falling all the way to big-integer
//! arithmetic.
//!
//! Grounded on the Eisel-Lemire implementation surveyed from the
//! `minimal-lexical` example (`mul`/`eisel_lemire`/`moderate_path`), but
//! driven off the on-demand `powers.rs` approximation rather than a
//! literal table, and restructured to hand back an [`AdjustedMantissa`]
//! rather than assemble the float itself (assembly is §4.F's job, in
//! `float.rs`).

use crate::float::{AdjustedMantissa, RawFloat};
use crate::powers::{pow10_approx, LARGEST_POWER_OF_TEN, SMALLEST_POWER_OF_TEN};

/// Multiply two 64-bit integers, returning the exact 128-bit product as
/// `(hi, lo)`.
#[inline(always)]
fn full_mul(a: u64, b: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128);
    ((product >> 64) as u64, product as u64)
}

/// Try to compute `mantissa * 10^q` to within 0.5 ulp using 128-bit
/// arithmetic. Returns an invalid [`AdjustedMantissa`] (§3) when the
/// result is ambiguous and the big-integer comparer (§4.E) must decide.
pub fn compute_float<F: RawFloat>(q: i32, mantissa: u64) -> AdjustedMantissa {
    if mantissa == 0 {
        return AdjustedMantissa::zero_pow2();
    }
    if !(SMALLEST_POWER_OF_TEN..=LARGEST_POWER_OF_TEN).contains(&q) {
        return AdjustedMantissa::invalid();
    }

    let lz = mantissa.leading_zeros();
    let w = mantissa << lz;
    let pow = pow10_approx(q);

    // `w * (pow.hi:pow.lo)`, keeping the leading 128 bits: the `pow.lo`
    // term only ever contributes through its top 64 bits at this scale.
    let (mut prod_hi, mut prod_lo) = full_mul(w, pow.hi);
    let (correction_hi, _) = full_mul(w, pow.lo);
    let (new_lo, carry) = prod_lo.overflowing_add(correction_hi);
    prod_lo = new_lo;
    if carry {
        prod_hi = prod_hi.wrapping_add(1);
    }

    let upperbit = (prod_hi >> 63) as i32;
    let mantissa_bits = F::MANTISSA_EXPLICIT_BITS as i32;
    // Keep exactly `mantissa_bits + 1` bits (the candidate mantissa,
    // implicit leading one included); everything below is the rounding
    // remainder.
    let shift = upperbit + 64 - (mantissa_bits + 2);
    let mut mantissa_candidate = prod_hi >> shift;
    let round_bit = 1u64 << (shift - 1);
    let tail_nonzero = (prod_hi & (round_bit - 1)) != 0 || prod_lo != 0;

    if pow.truncated && prod_hi & round_bit != 0 && !tail_nonzero {
        // Our power-of-ten approximation is itself only accurate to
        // within 1 ulp, and the result sits exactly on the boundary that
        // 1 ulp could move: don't guess.
        return AdjustedMantissa::invalid();
    }
    if prod_hi & round_bit != 0 && (tail_nonzero || mantissa_candidate & 1 != 0) {
        mantissa_candidate += 1;
    }

    // `190` folds in the two fixed 64-bit widenings (`w`'s own scale and
    // the extra 64 bits `full_mul` produces) and the 2 guard bits
    // reserved above; it does not depend on `F`.
    let mut power2 =
        190 - mantissa_bits + upperbit + pow.exp2 - lz as i32 + F::EXPONENT_BIAS;

    if mantissa_candidate == (2u64 << mantissa_bits) {
        // Rounding up overflowed into the next binary power of two.
        mantissa_candidate >>= 1;
        power2 += 1;
    }

    if power2 >= F::INFINITE_POWER as i32 {
        return AdjustedMantissa {
            mantissa: 0,
            power2: F::INFINITE_POWER as i32,
        };
    }
    if power2 <= 0 {
        // Subnormal (or exactly zero) result: let the slow path round
        // this precisely rather than guess here.
        return AdjustedMantissa::invalid();
    }

    AdjustedMantissa {
        mantissa: mantissa_candidate,
        power2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_rounds_trip() {
        let am = compute_float::<f64>(0, 1);
        assert!(!am.is_invalid());
        let (value, exact) = crate::float::to_float::<f64>(false, am);
        assert_eq!(value, 1.0);
        assert!(exact);
    }

    #[test]
    fn small_integer_round_trips() {
        let am = compute_float::<f64>(0, 12345);
        let (value, _) = crate::float::to_float::<f64>(false, am);
        assert_eq!(value, 12345.0);
    }

    #[test]
    fn negative_exponent_matches_division() {
        let am = compute_float::<f64>(-2, 125);
        let (value, _) = crate::float::to_float::<f64>(false, am);
        assert_eq!(value, 1.25);
    }

    #[test]
    fn large_positive_exponent_overflows_to_infinity() {
        let am = compute_float::<f64>(LARGEST_POWER_OF_TEN, 9_999_999_999_999_999);
        let (value, exact) = crate::float::to_float::<f64>(false, am);
        assert!(value.is_infinite());
        assert!(!exact);
    }

    #[test]
    fn exponent_out_of_range_is_invalid() {
        let am = compute_float::<f64>(SMALLEST_POWER_OF_TEN - 1, 1);
        assert!(am.is_invalid());
    }
}
