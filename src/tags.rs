//! Optimization-hint marker types (C8). These carry no data and select
//! nothing observable about *correctness* — they only document, at the call
//! site, which of two cost tradeoffs an exponentiation was written against
//! (§4.7, §9 "Latency vs. uop-count tuning"). Downstream code is free to
//! ignore the distinction entirely and default to [`LowUopsTag`].

/// Prefer the form with the shortest dependency chain between the multiply
/// and the following squaring, even if it issues more micro-ops overall.
/// Matches hardware where latency, not throughput, is the bottleneck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowLatencyTag;

/// Prefer the form that issues the fewest micro-ops, even at the cost of a
/// longer dependency chain. The default tradeoff for most general-purpose
/// cores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowUopsTag;

/// A tuning hint for the exponentiation engine (§4.7). Sealed: the only
/// implementors are [`LowLatencyTag`] and [`LowUopsTag`].
pub trait PerformanceTag: Copy + Clone + Default + private::Sealed + 'static {}

impl PerformanceTag for LowLatencyTag {}
impl PerformanceTag for LowUopsTag {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::LowLatencyTag {}
    impl Sealed for super::LowUopsTag {}
}
