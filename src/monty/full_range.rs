//! FullRange: the baseline variant. In-domain values satisfy `0 <= v < n`
//! with no restriction on `n` beyond "odd and `> 1`" (§3).

use crate::error::MontyError;
use crate::modular::{mod_add, mod_sub, MontyInt};
use crate::redc::{canonicalize_below_n, redc_raw};

use super::{Value, Variant};

/// The default, unrestricted Montgomery variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullRange;

impl<T: MontyInt> Variant<T> for FullRange {
    fn check_modulus(_n: T) -> Result<(), MontyError> {
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monty::Context;

    #[test]
    fn round_trips_through_montgomery_form() {
        let ctx = Context::<u32, FullRange>::new(13).unwrap();
        let x = ctx.convert_in(5);
        let y = ctx.convert_in(7);
        let product = ctx.mul(x, y);
        assert_eq!(ctx.convert_out(product), (5 * 7) % 13);
    }

    #[test]
    fn unity_and_neg_one() {
        let ctx = Context::<u32, FullRange>::new(13).unwrap();
        assert_eq!(ctx.convert_out(ctx.unity()), 1);
        assert_eq!(ctx.convert_out(ctx.neg_one()), 12);
    }

    #[test]
    fn rejects_even_modulus() {
        assert!(Context::<u32, FullRange>::new(14).is_err());
    }
}
