//! Montgomery modular arithmetic: fixed-width modular integers represented
//! in Montgomery form, so that repeated multiplication under a fixed odd
//! modulus (e.g. modular exponentiation) avoids the division every plain
//! `(a * b) % n` would otherwise need.
//!
//! The crate is built in layers, narrow-to-wide:
//!
//! - [`width`] (C1): the `Uint`/`SignedInt`/`HasWide` traits mapping each
//!   supported machine width to its signed companion and (where one
//!   exists) its double-width native type.
//! - [`wide_mul`] (C2) and [`modular`] (C3): widening multiplication and
//!   the modular add/sub/mul primitives built on it.
//! - [`inverse`] (§4.4) and [`redc`] (C4): the extended-Euclidean modular
//!   inverse, and the REDC reduction every Montgomery variant shares.
//! - [`monty`] (C5): `Context<T, V>`, generic over a `Variant` `V` fixing
//!   the in-domain value invariant — `FullRange`, `HalfRange`,
//!   `QuarterRange`, `SixthRange`, `SqrtRange`.
//! - [`pow`] (C7): branchless scalar, windowed, and array exponentiation
//!   built on top of any `Context`.
//! - [`form`] (C6): `MontgomeryForm<T>`, the façade that picks a sensible
//!   default variant per width so most callers never name one.
//!
//! No allocation is required anywhere in this crate; it builds under
//! `#![no_std]` with the default `std` feature disabled.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, unreachable_pub)]

pub mod error;
pub mod form;
pub mod inverse;
pub mod modular;
pub mod monty;
pub mod pow;
pub mod redc;
pub mod tags;
pub mod wide_mul;
pub mod width;

pub use error::MontyError;
pub use form::{DefaultVariant, FormValue, MontgomeryForm};
pub use monty::{
    CanonicalValue, Context, FullRange, HalfRange, QuarterRange, SixthRange, SqrtRange, Value,
    Variant,
};
pub use pow::{array_pow, pow as modpow, pow_with_tag, two_pow, windowed_pow};
pub use tags::{LowLatencyTag, LowUopsTag, PerformanceTag};
