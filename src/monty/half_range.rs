//! HalfRange: same `[0, n)` convention as [`super::FullRange`], but requires
//! `n < R/2` (§3). The tighter modulus bound lets every intermediate sum in
//! `add`/`sub`/REDC stay clear of the top bit, which is what lets a
//! constrained caller skip the overflow checks FullRange needs to carry for
//! an arbitrary odd `n`.

use crate::error::MontyError;
use crate::modular::{mod_add, mod_sub, MontyInt};
use crate::redc::{canonicalize_below_n, redc_raw};
use crate::width::Uint;

use super::{Value, Variant};

/// Montgomery variant for moduli strictly less than half the radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfRange;

impl<T: MontyInt> Variant<T> for HalfRange {
    fn check_modulus(n: T) -> Result<(), MontyError> {
        if n > T::MAX >> 1 {
            Err(MontyError::InvalidModulus)
        } else {
            Ok(())
        }
    }

    fn add(n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        Value(mod_add(x.raw(), y.raw(), n))
    }

    fn sub(n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        Value(mod_sub(x.raw(), y.raw(), n))
    }

    fn multiply(n: T, inv_n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        let (hi, lo) = x.raw().widemul(y.raw());
        let raw = redc_raw(hi, lo, n, inv_n);
        Value(canonicalize_below_n(raw, n))
    }

    fn to_canonical(_n: T, v: Value<T>) -> T {
        v.raw()
    }
}
