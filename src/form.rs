//! `MontgomeryForm` (C6): the ergonomic façade over [`crate::monty::Context`]
//! that picks a sensible default variant for a given integer width so most
//! callers never have to name a [`crate::monty::Variant`] at all (§4.6
//! "Choosing a default").
//!
//! For widths up to 32 bits, doubling the register still fits comfortably
//! under a native 64-bit type, so the default runs the context over that
//! doubled register using [`SqrtRange`] — the values the caller sees stay at
//! the narrow width, but internally every multiply is a single native
//! multiply with no widening step at all. At 64 and 128 bits there is no
//! such headroom (doubling 64 bits needs a full 128-bit register, and 128
//! bits has no wider native type to double into), so the default falls back
//! to [`FullRange`] at the caller's own width.

use crate::error::MontyError;
use crate::modular::MontyInt;
use crate::monty::{Context, SqrtRange, Variant, FullRange};
use crate::pow::pow as engine_pow;
use crate::width::Uint;

/// Picks the concrete register width and variant [`MontgomeryForm`] uses for
/// `Self`. Implemented for `u8, u16, u32, u64, u128`; not meant to be
/// implemented outside this crate.
pub trait DefaultVariant: Uint {
    /// The register width the context actually runs at.
    type Reg: MontyInt;
    /// The variant run over [`Self::Reg`].
    type Variant: Variant<Self::Reg>;

    /// Zero-extends a caller-facing value into the register width.
    fn widen_to_reg(self) -> Self::Reg;
    /// Truncates a register-width value back to the caller-facing width.
    /// Precondition: `reg` fits in `Self` (guaranteed for every value this
    /// module produces, since the register is only ever used to hold values
    /// reduced modulo a caller-supplied `Self`-width modulus).
    fn narrow_from_reg(reg: Self::Reg) -> Self;
}

macro_rules! impl_default_variant {
    ($narrow:ty, $reg:ty, $variant:ty) => {
        impl DefaultVariant for $narrow {
            type Reg = $reg;
            type Variant = $variant;

            fn widen_to_reg(self) -> Self::Reg {
                self as $reg
            }
            fn narrow_from_reg(reg: Self::Reg) -> Self {
                reg as $narrow
            }
        }
    };
}

impl_default_variant!(u8, u16, SqrtRange);
impl_default_variant!(u16, u32, SqrtRange);
impl_default_variant!(u32, u64, SqrtRange);
impl_default_variant!(u64, u64, FullRange);
impl_default_variant!(u128, u128, FullRange);

/// An in-domain value produced by a [`MontgomeryForm`]. Opaque: convert back
/// out with [`MontgomeryForm::convert_out`] rather than inspecting the bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValue<T: DefaultVariant>(crate::monty::Value<T::Reg>);

/// The default Montgomery form for integer width `T` (§4.6, §6). Thin
/// wrapper over `Context<T::Reg, T::Variant>` that widens inputs in and
/// narrows outputs back out at the boundary.
pub struct MontgomeryForm<T: DefaultVariant> {
    ctx: Context<T::Reg, T::Variant>,
}

impl<T: DefaultVariant> MontgomeryForm<T> {
    /// Builds a form for modulus `n`. Fails under the same conditions as
    /// `Context::new` for the chosen default variant (§3).
    pub fn new(n: T) -> Result<Self, MontyError> {
        Ok(Self { ctx: Context::new(n.widen_to_reg())? })
    }

    /// The modulus this form was built for.
    pub fn modulus(&self) -> T {
        T::narrow_from_reg(self.ctx.modulus())
    }

    /// Converts `x` (`0 <= x < modulus()`) into Montgomery form.
    pub fn convert_in(&self, x: T) -> FormValue<T> {
        FormValue(self.ctx.convert_in(x.widen_to_reg()))
    }

    /// Converts `v` back to a plain integer in `[0, modulus())`.
    pub fn convert_out(&self, v: FormValue<T>) -> T {
        T::narrow_from_reg(self.ctx.convert_out(v.0))
    }

    /// The Montgomery form of `1`.
    pub fn unity(&self) -> FormValue<T> {
        FormValue(self.ctx.unity())
    }

    /// The Montgomery form of `0`.
    pub fn zero(&self) -> FormValue<T> {
        FormValue(self.ctx.zero())
    }

    /// The Montgomery form of `modulus() - 1`.
    pub fn neg_one(&self) -> FormValue<T> {
        FormValue(self.ctx.neg_one())
    }

    /// `x + y`.
    pub fn add(&self, x: FormValue<T>, y: FormValue<T>) -> FormValue<T> {
        FormValue(self.ctx.add(x.0, y.0))
    }

    /// `x - y`.
    pub fn sub(&self, x: FormValue<T>, y: FormValue<T>) -> FormValue<T> {
        FormValue(self.ctx.sub(x.0, y.0))
    }

    /// `x * y`.
    pub fn mul(&self, x: FormValue<T>, y: FormValue<T>) -> FormValue<T> {
        FormValue(self.ctx.mul(x.0, y.0))
    }

    /// `x * x`.
    pub fn square(&self, x: FormValue<T>) -> FormValue<T> {
        FormValue(self.ctx.square(x.0))
    }

    /// `|x - y|`, ignoring which operand is larger.
    pub fn unordered_sub(&self, x: FormValue<T>, y: FormValue<T>) -> FormValue<T> {
        FormValue(self.ctx.unordered_sub(x.0, y.0))
    }

    /// `base^exponent` under this form, via the branchless square-and-
    /// multiply engine (§4.7).
    pub fn pow(&self, base: FormValue<T>, exponent: T) -> FormValue<T> {
        FormValue(engine_pow(&self.ctx, base.0, exponent.widen_to_reg()))
    }

    /// `2^exponent` under this form.
    pub fn two_pow(&self, exponent: T) -> FormValue<T> {
        FormValue(crate::pow::two_pow(&self.ctx, exponent.widen_to_reg()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_round_trips_u32() {
        let form = MontgomeryForm::<u32>::new(13).unwrap();
        let x = form.convert_in(5);
        let y = form.convert_in(7);
        let product = form.mul(x, y);
        assert_eq!(form.convert_out(product), (5 * 7) % 13);
    }

    #[test]
    fn default_form_pow_matches_fermat() {
        let n: u32 = 65_521;
        let form = MontgomeryForm::<u32>::new(n).unwrap();
        let base = form.convert_in(4);
        let result = form.pow(base, n - 1);
        assert_eq!(form.convert_out(result), 1);
    }

    #[test]
    fn u64_default_form_uses_full_range() {
        let n: u64 = (1u64 << 61) - 1;
        let form = MontgomeryForm::<u64>::new(n).unwrap();
        let x = form.convert_in(3);
        assert_eq!(form.convert_out(x), 3);
    }

    #[test]
    fn u8_default_form_round_trips() {
        let form = MontgomeryForm::<u8>::new(251).unwrap();
        let x = form.convert_in(7);
        let y = form.convert_in(9);
        let product = form.mul(x, y);
        assert_eq!(form.convert_out(product), (7u32 * 9 % 251) as u8);
    }
}
