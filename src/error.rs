//! Error taxonomy for the parser (§7).
//!
//! A plain enum with `Display`, matching the teacher's own hand-rolled
//! error style rather than pulling in `thiserror`: this crate is
//! dependency-minimal and `no_std`-capable by design.

use core::fmt;

/// The two-value status the public interface (§6) reports, plus the
/// finer-grained reason behind an `InvalidArgument` outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseFloatError {
    /// The input was empty.
    Empty,
    /// A character was encountered that is not valid at its position.
    InvalidDigit(usize),
    /// An exponent character (`e`/`E`) was seen with no digits after it.
    MissingExponentDigits,
    /// The magnitude of the decimal literal is too large to represent,
    /// even as infinity (this only matters for the directed-rounding
    /// dialects; the default dialect reports `Ok` with `+-inf` instead,
    /// per §7).
    Overflow,
}

impl fmt::Display for ParseFloatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFloatError::Empty => f.write_str("cannot parse float from empty string"),
            ParseFloatError::InvalidDigit(pos) => {
                write!(f, "invalid digit found at byte offset {pos}")
            },
            ParseFloatError::MissingExponentDigits => {
                f.write_str("exponent has no digits")
            },
            ParseFloatError::Overflow => f.write_str("number too large to fit target type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFloatError {}

/// The status half of the `(consumed, status)` pair the §6 interface
/// contract describes, expressed as a `Result` rather than a C++-style
/// `errc`: `Ok` carries the number of bytes consumed.
pub type ParseResult<T> = Result<(T, usize), ParseFloatError>;
