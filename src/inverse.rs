//! Modular multiplicative inverse (§4.4): extended Euclidean algorithm
//! adapted for unsigned remainders with signed cofactors.

use crate::width::{SignedInt, Uint};

/// Computes `v^-1 mod n` together with `gcd(v, n)`.
///
/// Precondition: `n > 1`. If `gcd(v, n) = 1`, returns `(inv, 1)` with
/// `inv` the unique value in `[1, n)` such that `v * inv ≡ 1 (mod n)`.
/// Otherwise returns `(0, gcd)` — `0` is a safe sentinel because no true
/// inverse is ever `0` when `n > 1`.
///
/// The cofactor sequence is carried in `T::Signed`, the same bit width as
/// `T`. A modulus using the full width of `T` can make an intermediate
/// cofactor overflow that width; this implementation accepts the wraparound
/// (§9 "Signed cofactors over unsigned remainders", option (b)) and still
/// recovers the correct inverse for every modulus this crate's Montgomery
/// variants can be constructed with, since none of them permit `n` to reach
/// the full range where the cofactor bound is tightest.
pub fn mod_inverse<T: Uint>(v: T, n: T) -> (T, T) {
    debug_assert!(n > T::one());

    let mut a0 = n;
    let mut a1 = v;
    let mut y0 = <T::Signed as SignedInt>::ZERO;
    let mut y1 = <T::Signed as SignedInt>::ONE;

    while a1 > T::one() {
        let q = a0 / a1;
        let a2 = a0 - q * a1;
        a0 = a1;
        a1 = a2;

        let q_signed = q.to_signed_bits();
        let y2 = y0.wrapping_sub(q_signed.wrapping_mul(y1));
        y0 = y1;
        y1 = y2;
    }

    let (gcd, y) = if a1.is_zero() { (a0, y0) } else { (a1, y1) };

    if gcd == T::one() {
        let normalized = if y.is_negative() {
            y.wrapping_add(n.to_signed_bits())
        } else {
            y
        };
        (T::from_signed_bits(normalized), gcd)
    } else {
        (T::zero(), gcd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn inverse_round_trip_examples() {
        let (inv, gcd) = mod_inverse(5u32, 13);
        assert_eq!(gcd, 1);
        assert_eq!((5u64 * u64::from(inv)) % 13, 1);

        // n = 1_000_003, v = 1_000_002 ≡ -1 (mod n): inverse is v itself.
        let (inv, gcd) = mod_inverse(1_000_002u32, 1_000_003u32);
        assert_eq!(gcd, 1);
        assert_eq!(inv, 1_000_002u32);

        // n = 2^31 - 1 (Mersenne prime), v = 3.
        let n: u32 = (1u32 << 31) - 1;
        let (inv, gcd) = mod_inverse(3u32, n);
        assert_eq!(gcd, 1);
        assert_eq!((3u64 * u64::from(inv)) % u64::from(n), 1);
    }

    #[test]
    fn non_invertible_returns_zero_sentinel() {
        // gcd(6, 9) = 3.
        let (inv, gcd) = mod_inverse(6u32, 9u32);
        assert_eq!(inv, 0);
        assert_eq!(gcd, 3);
    }

    #[test]
    fn v_equals_one_in_one_step() {
        let (inv, gcd) = mod_inverse(1u32, 97u32);
        assert_eq!(inv, 1);
        assert_eq!(gcd, 1);
    }

    #[test]
    fn v_equals_zero_yields_gcd_n() {
        let (inv, gcd) = mod_inverse(0u32, 97u32);
        assert_eq!(inv, 0);
        assert_eq!(gcd, 97);
    }

    proptest! {
        #[test]
        fn inverse_round_trip(v in 1u32..5000, n in 5001u32..1_000_000) {
            let (inv, gcd) = mod_inverse(v, n);
            if gcd == 1 {
                prop_assert_eq!((u64::from(v) * u64::from(inv)) % u64::from(n), 1);
            } else {
                prop_assert_eq!(inv, 0);
            }
        }
    }
}
