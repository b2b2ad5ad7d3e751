//! QuarterRange: in-domain values satisfy `0 <= v < 2n`, and `n` is
//! restricted to `n < R/4` (§3, §4.6). The extra headroom lets `multiply`
//! return the REDC "incomplete" result directly, with no final conditional
//! subtraction — the tradeoff is that every other in-domain value also
//! carries the loosened, non-canonical range.

use crate::error::MontyError;
use crate::modular::{mod_add, mod_sub, MontyInt};
use crate::redc::{canonicalize_below_n, redc_raw};
use crate::width::Uint;

use super::{Value, Variant};

/// Montgomery variant whose in-domain values lie in `[0, 2n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterRange;

impl<T: MontyInt> Variant<T> for QuarterRange {
    fn check_modulus(n: T) -> Result<(), MontyError> {
        if n > T::MAX >> 2 {
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
        // x, y < 2n and n < R/4 keep the product's high half under n, which
        // is exactly redc_raw's precondition: 4n^2 / R < n iff n < R/4.
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
    fn rejects_modulus_at_or_above_quarter_radix() {
        assert!(Context::<u32, QuarterRange>::new((1u32 << 30) - 1).is_ok());
        assert!(Context::<u32, QuarterRange>::new(1u32 << 30).is_err());
    }

    #[test]
    fn round_trips_through_montgomery_form() {
        let ctx = Context::<u32, QuarterRange>::new(13).unwrap();
        let x = ctx.convert_in(5);
        let y = ctx.convert_in(7);
        let product = ctx.mul(x, y);
        assert_eq!(ctx.convert_out(product), (5 * 7) % 13);
        assert_eq!(ctx.get_canonical(product).0, (5 * 7) % 13);
    }

    #[test]
    fn in_domain_values_stay_below_two_n() {
        let ctx = Context::<u32, QuarterRange>::new(13).unwrap();
        for x in 0..13 {
            let v = ctx.convert_in(x);
            assert!(v.raw() < 26);
        }
    }
}
