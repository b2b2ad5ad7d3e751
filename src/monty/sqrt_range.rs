//! SqrtRange: in-domain values satisfy `0 < v <= n`, with `n` itself
//! standing for the zero residue (§3, §9 "Representing zero"). The modulus
//! is restricted to `n < sqrt(R)`, which makes every in-domain product
//! `x * y` fit in a single `T` with no widening at all — the one variant
//! that never calls [`crate::wide_mul::WideMul::widemul`] in its multiply
//! path.

use crate::error::MontyError;
use crate::modular::MontyInt;
use crate::redc::{canonicalize_sqrt_range, redc_raw};
use crate::width::Uint;

use super::{Value, Variant};

/// Montgomery variant whose in-domain values lie in `(0, n]`; `n` itself
/// represents the residue `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqrtRange;

impl<T: MontyInt> Variant<T> for SqrtRange {
    fn check_modulus(n: T) -> Result<(), MontyError> {
        let (hi, _lo) = n.widemul(n);
        if hi.is_zero() {
            Ok(())
        } else {
            Err(MontyError::InvalidModulus)
        }
    }

    fn zero_repr(n: T) -> T {
        n
    }

    fn add(n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        let sum = x.raw() + y.raw();
        Value(if sum > n { sum - n } else { sum })
    }

    fn sub(n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        let (x, y) = (x.raw(), y.raw());
        Value(if x > y { x - y } else { n - (y - x) })
    }

    fn multiply(n: T, inv_n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        // x, y <= n < sqrt(R), so the exact product fits in T with no
        // widening: the high half redc_raw expects is simply zero.
        let product = x.raw().wrapping_mul(y.raw());
        let raw = redc_raw(T::zero(), product, n, inv_n);
        Value(canonicalize_sqrt_range(raw, n))
    }

    fn to_canonical(n: T, v: Value<T>) -> T {
        if v.raw() == n {
            T::zero()
        } else {
            v.raw()
        }
    }
}
