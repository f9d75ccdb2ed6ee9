//! Recognise `inf`/`infinity`/`nan` literals (§1, §6, §9).
//!
//! Grounded on `detail::parse_infnan` in `parse_number.h`: tried only
//! after the digit scanner fails to find a leading digit or sign-only
//! prefix, and skipped entirely when `options.no_infnan()` is set (the
//! JSON dialect, per spec).
//!
//! The extended `nan(n-char-seq)` syntax is recognised but the sequence
//! itself is discarded (no payload bits are threaded through): spec §9's
//! open question resolves the allowed characters to ASCII
//! `[A-Za-z0-9_]`, matching `nan(...)` in `parse_number.h`.

use crate::float::RawFloat;
use crate::options::Options;

/// Try to parse a signed infinity or NaN literal from the front of `s`.
///
/// Returns the parsed value and bytes consumed, or `None` if `s` does
/// not start with one (the caller then reports the original digit-scan
/// error instead).
pub fn parse_infnan<F: RawFloat>(s: &[u8], options: Options) -> Option<(F, usize)> {
    if options.no_infnan() {
        return None;
    }
    let mut cursor = 0;
    if options.skip_whitespace() {
        while cursor < s.len() && s[cursor] == b' ' {
            cursor += 1;
        }
    }
    let negative = match s.get(cursor) {
        Some(b'-') => {
            cursor += 1;
            true
        },
        Some(b'+') if options.allow_leading_plus() => {
            cursor += 1;
            false
        },
        _ => false,
    };

    let rest = &s[cursor..];
    if let Some(len) = case_insensitive_prefix(rest, b"infinity", options) {
        let value = if negative { F::from_bits(inf_bits::<F>(true)) } else { F::from_bits(inf_bits::<F>(false)) };
        return Some((value, cursor + len));
    }
    if let Some(len) = case_insensitive_prefix(rest, b"inf", options) {
        let value = F::from_bits(inf_bits::<F>(negative));
        return Some((value, cursor + len));
    }
    if let Some(len) = case_insensitive_prefix(rest, b"nan", options) {
        let mut consumed = len;
        // Extended `nan(n-char-seq)` syntax: consume the parenthesized
        // sequence but don't thread it into the result.
        if rest.get(consumed) == Some(&b'(') {
            let mut j = consumed + 1;
            while j < rest.len() && is_nan_sequence_char(rest[j]) {
                j += 1;
            }
            if rest.get(j) == Some(&b')') {
                consumed = j + 1;
            }
        }
        let value = F::from_bits(nan_bits::<F>(negative));
        return Some((value, cursor + consumed));
    }
    None
}

#[inline]
fn is_nan_sequence_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Match `needle` against the front of `s`, case-insensitively unless
/// the dialect demands exact case.
fn case_insensitive_prefix(s: &[u8], needle: &[u8], options: Options) -> Option<usize> {
    if s.len() < needle.len() {
        return None;
    }
    let matches = if options.case_sensitive_special() {
        &s[..needle.len()] == needle
    } else {
        s[..needle.len()]
            .iter()
            .zip(needle)
            .all(|(&a, &b)| a.to_ascii_lowercase() == b)
    };
    matches.then_some(needle.len())
}

fn inf_bits<F: RawFloat>(negative: bool) -> u64 {
    let mut bits = (F::INFINITE_POWER as u64) << F::MANTISSA_EXPLICIT_BITS;
    if negative {
        bits |= 1u64 << (F::TOTAL_BITS - 1);
    }
    bits
}

fn nan_bits<F: RawFloat>(negative: bool) -> u64 {
    let mut bits = inf_bits::<F>(negative);
    bits |= 1u64 << (F::MANTISSA_EXPLICIT_BITS - 1);
    bits
}
