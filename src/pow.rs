//! Exponentiation (C7, §4.7): scalar square-and-multiply built from
//! unconditional dual computation plus a branchless [`cmov`] merge, a
//! `two_pow` specialization for a fixed base of `2`, a windowed k-ary form
//! that amortizes the multiply cost over several exponent bits at a time,
//! and an array form that raises several bases to one shared exponent in
//! lockstep.
//!
//! None of these branch on exponent bits: every bit (or window) is
//! processed identically regardless of its value, and the choice of which
//! intermediate to keep is made with [`cmov`] rather than a conditional
//! jump (§9 "Branchless merges").

use crate::modular::MontyInt;
use crate::monty::{Context, Value, Variant};
use crate::tags::{LowUopsTag, PerformanceTag};
use crate::width::{cmov, Uint};

const WINDOW_BITS: u32 = 4;
const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

/// `base^exponent` under `ctx`, processing `exponent` one bit at a time,
/// most significant bit first. Equivalent to
/// [`pow_with_tag`]`::<_, _, LowUopsTag>`.
pub fn pow<T: MontyInt, V: Variant<T>>(
    ctx: &Context<T, V>,
    base: Value<T>,
    exponent: T,
) -> Value<T> {
    pow_with_tag::<T, V, LowUopsTag>(ctx, base, exponent)
}

/// `base^exponent`, parameterized by a [`PerformanceTag`] (§4.7, §9
/// "Tag-based optimization hints"). The tag selects nothing about
/// correctness — both tags run the identical branchless merge below — it
/// only documents, at the call site, which cmov-vs-mask tradeoff a tuned
/// backend would pick. A plain implementation, this one included, is free
/// to ignore the tag entirely.
pub fn pow_with_tag<T: MontyInt, V: Variant<T>, Tag: PerformanceTag>(
    ctx: &Context<T, V>,
    base: Value<T>,
    exponent: T,
) -> Value<T> {
    let _tag = Tag::default();
    let mut result = ctx.unity();
    let mut bit_index = T::BITS;
    while bit_index > 0 {
        bit_index -= 1;
        result = ctx.square(result);
        let multiplied = ctx.mul(result, base);
        let bit_set = ((exponent >> bit_index) & T::one()) == T::one();
        result = Value::from_raw(cmov(bit_set, multiplied.raw(), result.raw()));
    }
    result
}

/// `2^exponent` under `ctx`. Equivalent to `pow(ctx, ctx.convert_in(2),
/// exponent)`, spelled out separately because squaring a literal `2` is
/// common enough (primality witnesses, order-finding) to name directly.
pub fn two_pow<T: MontyInt, V: Variant<T>>(ctx: &Context<T, V>, exponent: T) -> Value<T> {
    let two = T::one() + T::one();
    pow(ctx, ctx.convert_in(two), exponent)
}

/// `base^exponent`, processing `exponent` in fixed windows of
/// [`WINDOW_BITS`] bits instead of one bit at a time. Trades a
/// `2^WINDOW_BITS`-entry precomputed table (and a branchless scan of it per
/// window) for fewer modular multiplications overall.
pub fn windowed_pow<T: MontyInt, V: Variant<T>>(
    ctx: &Context<T, V>,
    base: Value<T>,
    exponent: T,
) -> Value<T> {
    let mut table = [ctx.unity(); WINDOW_SIZE];
    for i in 1..WINDOW_SIZE {
        table[i] = ctx.mul(table[i - 1], base);
    }

    let total_bits = T::BITS;
    let mut result = ctx.unity();
    let mut consumed = 0u32;
    while consumed < total_bits {
        let take = core::cmp::min(WINDOW_BITS, total_bits - consumed);
        for _ in 0..take {
            result = ctx.square(result);
        }
        let shift = total_bits - consumed - take;
        let window = (exponent >> shift) & window_mask::<T>(take);

        // Branchless select from `table`: every entry is touched on every
        // window regardless of which one matches, so the access pattern
        // does not depend on the window's value.
        let mut selected = table[0].raw();
        let mut counter = T::zero();
        for entry in &table {
            selected = cmov(counter == window, entry.raw(), selected);
            counter = counter + T::one();
        }
        result = ctx.mul(result, Value::from_raw(selected));

        consumed += take;
    }
    result
}

fn window_mask<T: Uint>(bits: u32) -> T {
    if bits == 0 {
        T::zero()
    } else {
        (T::one() << bits).wrapping_sub(T::one())
    }
}

/// Raises each of `bases` to the same `exponent`, scanning the exponent
/// once and squaring/multiplying every base in lockstep per bit. Cheaper
/// than calling [`pow`] `N` times separately when `N` bases share an
/// exponent, since the exponent's bits are only decoded once.
pub fn array_pow<T: MontyInt, V: Variant<T>, const N: usize>(
    ctx: &Context<T, V>,
    bases: [Value<T>; N],
    exponent: T,
) -> [Value<T>; N] {
    let mut results = [ctx.unity(); N];
    let mut bit_index = T::BITS;
    while bit_index > 0 {
        bit_index -= 1;
        let bit_set = ((exponent >> bit_index) & T::one()) == T::one();
        for i in 0..N {
            results[i] = ctx.square(results[i]);
            let multiplied = ctx.mul(results[i], bases[i]);
            results[i] = Value::from_raw(cmov(bit_set, multiplied.raw(), results[i].raw()));
        }
    }
    results
}
