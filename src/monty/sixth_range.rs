//! SixthRange: same `[0, 2n)` in-domain convention as
//! [`super::QuarterRange`], but with the still tighter bound `n < R/6`
//! (§3, §4.6). The extra headroom over QuarterRange is spent outside this
//! trait — in callers that chain several in-domain values through `fmadd`
//! before ever reducing — so `add`/`sub`/`multiply` here are identical in
//! shape to QuarterRange's.

use crate::error::MontyError;
use crate::modular::{mod_add, mod_sub, MontyInt};
use crate::redc::{canonicalize_below_n, redc_raw};
use crate::width::Uint;

use super::{Value, Variant};

/// Montgomery variant whose in-domain values lie in `[0, 2n)`, `n < R/6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SixthRange;

impl<T: MontyInt> Variant<T> for SixthRange {
    fn check_modulus(n: T) -> Result<(), MontyError> {
        let six = T::one() + T::one() + T::one() + T::one() + T::one() + T::one();
        if n > T::MAX / six {
            Err(MontyError::InvalidModulus)
        } else {
            Ok(())
        }
    }

    fn add(n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        let two_n = n.wrapping_add(n);
        Value(mod_add(x.raw(), y.raw(), two_n))
    }

    fn sub(n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        let two_n = n.wrapping_add(n);
        Value(mod_sub(x.raw(), y.raw(), two_n))
    }

    fn multiply(n: T, inv_n: T, x: Value<T>, y: Value<T>) -> Value<T> {
        let (hi, lo) = x.raw().widemul(y.raw());
        Value(redc_raw(hi, lo, n, inv_n))
    }

    fn to_canonical(n: T, v: Value<T>) -> T {
        canonicalize_below_n(v.raw(), n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monty::Context;

    #[test]
    fn rejects_modulus_at_or_above_sixth_radix() {
        let limit = u32::MAX / 6;
        let largest_odd_at_or_below_limit = if limit.is_odd() { limit } else { limit - 1 };
        assert!(Context::<u32, SixthRange>::new(largest_odd_at_or_below_limit).is_ok());
        assert!(Context::<u32, SixthRange>::new(limit + 3).is_err());
    }

    #[test]
    fn round_trips_through_montgomery_form() {
        let ctx = Context::<u32, SixthRange>::new(13).unwrap();
        let x = ctx.convert_in(5);
        let y = ctx.convert_in(7);
        let product = ctx.mul(x, y);
        assert_eq!(ctx.convert_out(product), (5 * 7) % 13);
    }
}
