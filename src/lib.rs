//! A fast, correctly-rounded decimal-to-binary floating-point parser
//! (§1-§2).
//!
//! The driver (§4.G) runs each stage only as far as it needs to: the
//! digit scanner (§4.A) always runs first; the Clinger fast path
//! (§4.C) and the Eisel-Lemire core (§4.D) each either certify a
//! result or decline, and only a literal that both decline ever reaches
//! the big-integer comparer (§4.E), which always decides.
//!
//! Grounded on `lexical_parse_float`'s top-level `parse_number`/
//! `parse_complete` dispatch: digit scan, `inf`/`nan` fallback on scan
//! failure, fast path, Eisel-Lemire, slow path, in that order.

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
mod macros;

mod bigint;
mod error;
mod fast;
mod float;
mod infnan;
mod lemire;
mod limits;
mod number;
mod options;
mod powers;
mod slow;
mod table;

pub use error::ParseFloatError;
pub use float::RawFloat;
pub use options::Options;

use float::AdjustedMantissa;
use number::ParsedNumber;

/// The §6/§7 out-of-band status accompanying a successful parse: whether
/// the magnitude had to be clamped to `+-inf` because it overflows `F`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseStatus {
    /// The literal was representable as parsed.
    Ok,
    /// The decimal magnitude exceeds what `F` can represent; the value
    /// returned is the correctly-signed infinity, per §7.
    ResultOutOfRange,
}

/// Parse a complete decimal literal as `F`, per the grammar `options`
/// selects.
///
/// Unlike [`parse_partial`], trailing bytes after a syntactically valid
/// literal are rejected as [`ParseFloatError::InvalidDigit`] rather
/// than silently ignored (the §6 "complete" contract).
pub fn parse<F: RawFloat>(s: &[u8], options: Options) -> Result<F, ParseFloatError> {
    let (value, consumed) = parse_partial(s, options)?;
    if consumed != s.len() {
        return Err(ParseFloatError::InvalidDigit(consumed));
    }
    Ok(value)
}

/// Parse a decimal literal from the front of `s`, returning the value
/// together with the number of bytes consumed (the §6 "partial"
/// contract: trailing bytes are left for the caller to deal with).
pub fn parse_partial<F: RawFloat>(
    s: &[u8],
    options: Options,
) -> Result<(F, usize), ParseFloatError> {
    let (value, consumed, _status) = parse_partial_with_status(s, options)?;
    Ok((value, consumed))
}

/// Like [`parse_partial`], but also reports whether the magnitude
/// overflowed to infinity (§7's `result_out_of_range` status), which
/// would otherwise be indistinguishable from a literal `inf` in the
/// input.
pub fn parse_partial_with_status<F: RawFloat>(
    s: &[u8],
    options: Options,
) -> Result<(F, usize, ParseStatus), ParseFloatError> {
    match number::parse_number(s, options) {
        Ok((num, consumed)) => {
            let (value, exact) = resolve::<F>(&num);
            let status = if exact {
                ParseStatus::Ok
            } else {
                ParseStatus::ResultOutOfRange
            };
            Ok((value, consumed, status))
        },
        Err(err) => {
            if let Some((value, consumed)) = infnan::parse_infnan::<F>(s, options) {
                return Ok((value, consumed, ParseStatus::Ok));
            }
            Err(err)
        },
    }
}

/// Resolve a scanned [`ParsedNumber`] to the nearest representable `F`,
/// running only as many stages as the literal actually requires.
/// Returns `(value, exact)`, where `exact` is false only when the
/// magnitude overflowed to infinity.
fn resolve<F: RawFloat>(num: &ParsedNumber<'_>) -> (F, bool) {
    if let Some(value) = fast::fast_path::<F>(num) {
        return (value, true);
    }

    let am = lemire::compute_float::<F>(num.exponent, num.mantissa);
    let am = if am.is_invalid() {
        slow::slow_path::<F>(num)
    } else if num.too_many_digits {
        // The mantissa accumulator truncated at least one digit: check
        // whether rounding the dropped tail up at all could have
        // changed the Eisel-Lemire result, per the fast_float
        // `parse_number.h` `is_ambiguous` mantissa+1 re-check. Only a
        // disagreement between `mantissa` and `mantissa + 1` is actually
        // ambiguous; agreement means the dropped digits couldn't have
        // mattered either way.
        let am2 = lemire::compute_float::<F>(num.exponent, num.mantissa + 1);
        if am2.is_invalid() || am2 != am {
            slow::slow_path::<F>(num)
        } else {
            am
        }
    } else {
        am
    };

    float::to_float::<F>(num.negative, am)
}
