//! Error types reported at context construction and at value-entry points.
//!
//! There are no recoverable runtime errors once a context is built from a
//! valid modulus and callers respect the documented value preconditions; see
//! the crate-level docs for the constant-time/precondition tradeoff this
//! implies.

use core::fmt;

/// Errors this crate can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MontyError {
    /// The modulus is even, `<= 1`, or exceeds the bound required by the
    /// Montgomery variant that was asked to use it.
    InvalidModulus,
    /// A value offered as canonical does not satisfy `0 <= v < n`, or an
    /// in-domain value does not satisfy its variant's invariant.
    InvalidValue,
}

impl fmt::Display for MontyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidModulus => {
                f.write_str("modulus must be odd, > 1, and within the selected variant's bound")
            }
            Self::InvalidValue => {
                f.write_str("value does not satisfy the required range invariant")
            }
        }
    }
}

// `core::error::Error` only stabilized in Rust 1.81, above this crate's MSRV;
// the `std` impl below covers the common case and no_std users still get
// `Display` plus the `Debug`/`Eq` derives needed to match on a variant.
#[cfg(feature = "std")]
impl std::error::Error for MontyError {}
