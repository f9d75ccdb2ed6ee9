//! The big-integer digit comparer (§4.E): the fallback used when neither
//! the fast path nor the Eisel-Lemire core could certify a rounding.
//!
//! Grounded on `positive_digit_comp`/`negative_digit_comp`/`parse_mantissa`
//! in the teacher's slow-path module, but reshaped around a single
//! bit-serial long division (the same restoring-division technique
//! `powers.rs` already uses for the on-demand power-of-ten table) instead
//! of the teacher's `ExtendedFloat80`-seeded halfway-point comparison:
//! since this crate only ever converts from decimal, the exact value is
//! always `digits * 10^exponent` for some big integer `digits`, and
//! dividing that by 1 (when the exponent is non-negative, folded into
//! the numerator) or by `10^-exponent` (otherwise) and reading off the
//! quotient's leading bits is both exact and radix-generic machinery
//! free.
//!
//! The radix-generic `byte_comp`/`Bigfloat` path in the teacher's
//! original is not needed here: every decimal literal has some exact
//! (if astronomically long) binary expansion, so `digit_comp` is always
//! the applicable case for this crate's decimal-only input.

use core::cmp::Ordering;

use crate::bigint::{Bigint, Limb};
use crate::float::{AdjustedMantissa, RawFloat};
use crate::number::ParsedNumber;
use crate::powers::LARGEST_POWER_OF_TEN;

/// Decimal exponent magnitude beyond which the result is unambiguously
/// zero or infinite for any type this crate supports, with headroom
/// left so the big integers built along the way never approach
/// `Bigint`'s capacity.
const EXPONENT_GUARD: i32 = LARGEST_POWER_OF_TEN + 60;

/// Parse every significant digit into a big integer, skipping leading
/// zeros for free (they never grow the accumulator) and capping at
/// `max_digits` *significant* digits beyond which more digits cannot
/// change a correctly-rounded result.
///
/// Returns the big integer together with the exponent adjustment
/// needed to account for any trailing digits the cap dropped, and
/// whether any dropped digit was non-zero (only relevant for
/// round-to-even tie-breaking).
fn parse_digits(num: &ParsedNumber<'_>, max_digits: usize) -> (Bigint, i32, bool) {
    let mut digits = Bigint::new();
    let mut significant = 0usize;
    let mut dropped = 0i32;
    let mut dropped_nonzero = false;
    for &c in num.digits.integer.iter().chain(num.digits.fraction) {
        let d = (c - b'0') as Limb;
        if significant < max_digits {
            if d != 0 || !digits.is_empty() {
                significant += 1;
            }
            digits.mul_small(10);
            digits.add_small(d);
        } else {
            dropped += 1;
            dropped_nonzero |= d != 0;
        }
    }
    (digits, dropped, dropped_nonzero)
}

/// Compute the top `want_bits` bits of `floor(numerator / denominator)`,
/// via bit-serial restoring division (bring down one more bit of the
/// numerator each round, or an implicit zero once it's exhausted).
///
/// Returns `(bits, exponent_of_leading_bit, remainder_nonzero)`, where
/// `exponent_of_leading_bit` is the power of two of the quotient's
/// topmost (implicit) one bit -- exact, not approximated.
fn divide_top_bits(numerator: &Bigint, denominator: &Bigint, want_bits: u32) -> (u64, i32, bool) {
    let n_bits = numerator.bit_length() as i64;
    let mut remainder = Bigint::new();
    let mut bits: u64 = 0;
    let mut collected = 0u32;
    let mut started = false;
    let mut leading_skipped = 0i32;
    let mut round = 0i64;
    loop {
        remainder.shl(1);
        if round < n_bits && numerator.bit(n_bits as u32 - 1 - round as u32) {
            remainder.add_small(1);
        }
        let bit = if remainder.compare(denominator) != Ordering::Less {
            remainder.sub_assign(denominator);
            1u64
        } else {
            0u64
        };
        if !started {
            if bit == 0 {
                leading_skipped += 1;
                round += 1;
                continue;
            }
            started = true;
        }
        bits = (bits << 1) | bit;
        collected += 1;
        round += 1;
        if collected == want_bits {
            break;
        }
    }
    let exponent_of_leading_bit = n_bits as i32 - 1 - leading_skipped;
    (bits, exponent_of_leading_bit, !remainder.is_empty())
}

/// Resolve a parsed decimal literal to the nearest representable `F`
/// via exact big-integer arithmetic. Never returns an invalid
/// [`AdjustedMantissa`]: this is the last stage, so it always decides.
pub fn slow_path<F: RawFloat>(num: &ParsedNumber<'_>) -> AdjustedMantissa {
    let (digits, dropped, dropped_nonzero) = parse_digits(num, F::MAX_DIGITS);
    if digits.is_empty() {
        return AdjustedMantissa::zero_pow2();
    }
    let exponent = num.digits_exponent + dropped;

    if exponent > EXPONENT_GUARD {
        return AdjustedMantissa {
            mantissa: 0,
            power2: F::INFINITE_POWER as i32,
        };
    }
    if exponent < -EXPONENT_GUARD {
        return AdjustedMantissa::zero_pow2();
    }

    let (numerator, denominator);
    if exponent >= 0 {
        let mut n = digits.clone();
        n.pow10(exponent as u32);
        numerator = n;
        denominator = Bigint::from_u32(1);
    } else {
        numerator = digits;
        let mut d = Bigint::from_u32(1);
        d.pow10((-exponent) as u32);
        denominator = d;
    }

    let mantissa_bits = F::MANTISSA_EXPLICIT_BITS;
    let window0 = mantissa_bits + 2;
    let (quotient, leading_exp, tail_from_division) =
        divide_top_bits(&numerator, &denominator, window0);
    let tail_from_division = tail_from_division || dropped_nonzero;

    let biased = leading_exp + F::IEEE_EXPONENT_BIAS;
    if biased >= F::INFINITE_POWER as i32 {
        return AdjustedMantissa {
            mantissa: 0,
            power2: F::INFINITE_POWER as i32,
        };
    }

    let extra_shift = (1 - biased).max(0) as u32;
    if extra_shift >= window0 {
        return AdjustedMantissa::zero_pow2();
    }
    let w = window0 - extra_shift;
    let dropped_mask = if extra_shift == 0 {
        0
    } else {
        (1u64 << extra_shift) - 1
    };
    let tail_nonzero = tail_from_division || (quotient & dropped_mask) != 0;
    let window = quotient >> extra_shift;

    let round_bit = window & 1;
    let mut mantissa_candidate = window >> 1;
    if round_bit == 1 && (tail_nonzero || mantissa_candidate & 1 == 1) {
        mantissa_candidate += 1;
    }

    let is_subnormal = biased <= 0;
    let overflow_limit = if is_subnormal {
        1u64 << mantissa_bits
    } else {
        2u64 << mantissa_bits
    };
    let mut power2 = biased;
    if mantissa_candidate == overflow_limit {
        if is_subnormal {
            power2 = 1;
        } else {
            mantissa_candidate >>= 1;
            power2 += 1;
        }
    } else if is_subnormal {
        power2 = 0;
    }

    if power2 >= F::INFINITE_POWER as i32 {
        return AdjustedMantissa {
            mantissa: 0,
            power2: F::INFINITE_POWER as i32,
        };
    }

    AdjustedMantissa {
        mantissa: mantissa_candidate,
        power2,
    }
}
