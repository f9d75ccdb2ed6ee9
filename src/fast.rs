//! The Clinger fast path (§4.C): exact float arithmetic against the
//! tabulated exact powers of ten in `table.rs`.
//!
//! Grounded on `from_chars_advanced` in `parse_number.h`: a
//! round-to-nearest branch that may divide as well as multiply, and a
//! directed-rounding branch (used only when the active FPU rounding mode
//! isn't round-to-nearest) that multiplies only, since division is not
//! guaranteed exact under directed rounding.

use crate::float::RawFloat;
use crate::number::ParsedNumber;

/// Detect whether the active floating-point rounding mode is
/// round-to-nearest (ties-to-even), the only mode under which this
/// crate's division-based fast path is valid.
///
/// `fmin` is the smallest positive subnormal `f64`; `fmin + 1.0` rounds
/// down to `1.0` under round-to-nearest (since `fmin` is far below the
/// precision of `1.0`) but rounds *up* under round-up/round-to-zero only
/// changes the right-hand side, so the two directed modes can be told
/// apart from round-to-nearest by comparing `fmin + 1.0` against
/// `1.0 - fmin`. `volatile`-style hints (a black-box read) keep the
/// compiler from constant-folding this check away at compile time.
#[inline]
pub fn rounds_to_nearest() -> bool {
    let fmin = f64::from_bits(1); // smallest positive subnormal f64
    let x = core::hint::black_box(fmin) + 1.0;
    let y = 1.0 - core::hint::black_box(fmin);
    x == y
}

/// Attempt the fast path for a parsed number; returns `None` when the
/// mantissa or exponent lies outside the range where native arithmetic
/// is provably exact, requiring a fall-through to the Eisel-Lemire core.
pub fn fast_path<F: RawFloat>(num: &ParsedNumber<'_>) -> Option<F> {
    if num.too_many_digits {
        return None;
    }
    if rounds_to_nearest() {
        F::from_mantissa_exp10(num.mantissa, num.exponent, num.negative)
    } else {
        // Directed rounding: only the multiply-only branch is safe, and
        // only for non-negative decimal exponents.
        if num.exponent < 0 {
            return None;
        }
        F::from_mantissa_exp10(num.mantissa, num.exponent, num.negative)
    }
}
