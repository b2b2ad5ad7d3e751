//! Montgomery variants (C5): FullRange, HalfRange, QuarterRange, SixthRange,
//! SqrtRange. Each variant is a zero-sized marker type implementing
//! [`Variant`], which fixes the invariant on in-domain values (§3) and picks
//! the cheapest correct `add`/`sub`/`multiply`/canonicalization for that
//! invariant.
//!
//! [`Context`] is the immutable, per-modulus record described in §3: one
//! `Context<T, V>` is built once for a given odd modulus and Montgomery
//! variant `V`, and is shared by reference across every operation performed
//! under it.

pub mod full_range;
pub mod half_range;
pub mod quarter_range;
pub mod sixth_range;
pub mod sqrt_range;

use core::marker::PhantomData;

use crate::error::MontyError;
use crate::modular::MontyInt;
use crate::redc::{canonicalize_below_n, redc_raw};
use crate::width::Uint;

pub use full_range::FullRange;
pub use half_range::HalfRange;
pub use quarter_range::QuarterRange;
pub use sixth_range::SixthRange;
pub use sqrt_range::SqrtRange;

/// An in-domain Montgomery value. Its valid range depends on the variant
/// `V` it was produced under (§3); mixing values produced under different
/// contexts is a logic error the type system does not catch (contexts carry
/// no lifetime link to the values they produce, per §5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<T>(pub(crate) T);

impl<T: Uint> Value<T> {
    /// The raw backing integer, for variant implementations and tests.
    pub(crate) fn raw(self) -> T {
        self.0
    }

    /// Wraps a raw integer as an in-domain value, for the exponentiation
    /// engine's branchless merges.
    pub(crate) fn from_raw(raw: T) -> Self {
        Value(raw)
    }
}

/// A canonical (`0 <= v < n`) Montgomery value, required as the addend of
/// [`Context::fmadd`] and the subtrahend of [`Context::fmsub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalValue<T>(pub(crate) T);

/// Per-variant arithmetic: the interface every Montgomery variant
/// implements (§9 "Polymorphism over variants", option (a) — monomorphized
/// via generics so each variant is a distinct, inlinable type).
pub trait Variant<T: MontyInt>: Copy + Clone + 'static {
    /// Validates `n` against this variant's modulus precondition (§3).
    fn check_modulus(n: T) -> Result<(), MontyError>;

    /// The representation of the additive identity under this variant.
    fn zero_repr(n: T) -> T {
        let _ = n;
        T::zero()
    }

    fn add(n: T, x: Value<T>, y: Value<T>) -> Value<T>;
    fn sub(n: T, x: Value<T>, y: Value<T>) -> Value<T>;

    /// `mont_mul(x, y)`: widening multiply followed by REDC, canonicalized
    /// (or left incomplete) per the variant's own convention.
    fn multiply(n: T, inv_n: T, x: Value<T>, y: Value<T>) -> Value<T>;

    fn square(n: T, inv_n: T, x: Value<T>) -> Value<T> {
        Self::multiply(n, inv_n, x, x)
    }

    /// Reduces `v` to the general `[0, n)` canonical form (idempotent),
    /// regardless of this variant's own in-domain representation.
    fn to_canonical(n: T, v: Value<T>) -> T;
}

/// The Montgomery context (§3, §6): an immutable record for one odd modulus
/// and one variant. Non-`Clone`/non-`Copy` by design — the original library
/// treats aliasing copies of a context as a bug risk (`inv_n` and the cached
/// constants must never be recomputed or diverge between "copies"); moving
/// ownership is fine, sharing is done through `&Context`.
pub struct Context<T: MontyInt, V: Variant<T>> {
    n: T,
    inv_n: T,
    r_mod_n: T,
    r2_mod_n: T,
    _variant: PhantomData<V>,
}

impl<T: MontyInt, V: Variant<T>> Context<T, V> {
    /// Builds a context for modulus `n`. Fails if `n` is even, `<= 1`, or
    /// violates `V`'s modulus bound.
    pub fn new(n: T) -> Result<Self, MontyError> {
        if n.is_even() || n <= T::one() {
            return Err(MontyError::InvalidModulus);
        }
        V::check_modulus(n)?;

        let inv_n = newton_raphson_inverse(n);
        let r_mod_n = radix_mod_n(n);
        let r2_mod_n = r_mod_n.mod_mul(r_mod_n, n);

        Ok(Self { n, inv_n, r_mod_n, r2_mod_n, _variant: PhantomData })
    }

    /// The modulus this context was built for.
    pub fn modulus(&self) -> T {
        self.n
    }

    /// `x * R mod n`, the Montgomery form of `x`. Precondition: `0 <= x < n`.
    pub fn convert_in(&self, x: T) -> Value<T> {
        debug_assert!(x < self.n);
        V::multiply(self.n, self.inv_n, Value(x), Value(self.r2_mod_n))
    }

    /// Inverse of [`Self::convert_in`]: always returns a value in `[0, n)`,
    /// regardless of `V`'s internal convention.
    pub fn convert_out(&self, v: Value<T>) -> T {
        let raw = redc_raw(T::zero(), v.0, self.n, self.inv_n);
        canonicalize_below_n(raw, self.n)
    }

    /// The Montgomery form of `1`.
    pub fn unity(&self) -> Value<T> {
        self.convert_in(T::one())
    }

    /// The Montgomery form of `0`.
    pub fn zero(&self) -> Value<T> {
        Value(V::zero_repr(self.n))
    }

    /// The Montgomery form of `n - 1`.
    pub fn neg_one(&self) -> Value<T> {
        self.convert_in(self.n.wrapping_sub(T::one()))
    }

    pub fn add(&self, x: Value<T>, y: Value<T>) -> Value<T> {
        V::add(self.n, x, y)
    }

    pub fn sub(&self, x: Value<T>, y: Value<T>) -> Value<T> {
        V::sub(self.n, x, y)
    }

    /// `x * y`.
    pub fn mul(&self, x: Value<T>, y: Value<T>) -> Value<T> {
        V::multiply(self.n, self.inv_n, x, y)
    }

    pub fn square(&self, x: Value<T>) -> Value<T> {
        V::square(self.n, self.inv_n, x)
    }

    /// `mul(x, y) + c`, `c` canonical on entry.
    pub fn fmadd(&self, x: Value<T>, y: Value<T>, c: CanonicalValue<T>) -> Value<T> {
        let product = self.mul(x, y);
        V::add(self.n, product, Value(c.0))
    }

    /// `mul(x, y) - c`, `c` canonical on entry.
    pub fn fmsub(&self, x: Value<T>, y: Value<T>, c: CanonicalValue<T>) -> Value<T> {
        let product = self.mul(x, y);
        V::sub(self.n, product, Value(c.0))
    }

    /// Reduces `v` to `[0, n)` and tags it as [`CanonicalValue`] so it can be
    /// used as an `fmadd`/`fmsub` operand.
    pub fn get_canonical(&self, v: Value<T>) -> CanonicalValue<T> {
        CanonicalValue(V::to_canonical(self.n, v))
    }

    /// `|x - y|`, ignoring which of `x`, `y` is larger. Useful for
    /// algorithms (e.g. GCD-style reductions) whose sign is immaterial;
    /// cheaper than `sub` followed by a separate absolute-value step since
    /// it never needs the modulus-wraparound branch `sub` does.
    pub fn unordered_sub(&self, x: Value<T>, y: Value<T>) -> Value<T> {
        Value(crate::modular::abs_diff(x.0, y.0))
    }

    /// `base^exponent` via the branchless square-and-multiply engine
    /// (§4.7).
    pub fn pow(&self, base: Value<T>, exponent: T) -> Value<T> {
        crate::pow::pow(self, base, exponent)
    }

    /// `2^exponent`.
    pub fn two_pow(&self, exponent: T) -> Value<T> {
        crate::pow::two_pow(self, exponent)
    }
}

/// Computes `-n^-1 mod R` (`R = 2^W`) via Newton-Raphson doubling, starting
/// from the standard 5-bit-accurate seed `(3n) xor 2` and doubling the
/// number of correct bits each step until `W` bits are covered (§4.6).
fn newton_raphson_inverse<T: Uint>(n: T) -> T {
    let two = T::one().wrapping_add(T::one());
    let three = two.wrapping_add(T::one());

    let mut inv = n.wrapping_mul(three) ^ two;
    let mut precision = 5u32;
    while precision < T::BITS {
        inv = inv.wrapping_mul(two.wrapping_sub(n.wrapping_mul(inv)));
        precision *= 2;
    }
    T::zero().wrapping_sub(inv)
}

/// `R mod n` where `R = 2^W = T::MAX + 1`.
fn radix_mod_n<T: Uint>(n: T) -> T {
    ((T::MAX % n) + T::one()) % n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_mod_n_matches_definition() {
        assert_eq!(radix_mod_n(13u32), (1u64 << 32) as u64 as u32 % 13);
        assert_eq!(radix_mod_n(13u32), ((1u64 << 32) % 13) as u32);
    }

    #[test]
    fn newton_raphson_inverse_contract() {
        let n: u32 = 1_000_003;
        let inv_n = newton_raphson_inverse(n);
        // n * inv_n ≡ -1 (mod 2^32).
        let product = n.wrapping_mul(inv_n);
        assert_eq!(product, 0u32.wrapping_sub(1));
    }
}
