//! The three output widths every engine provides
//!
//! Each call advances the generator and derives its result from the new
//! state. Engines are single-threaded state machines: share one between
//! threads only behind external synchronization, or give each thread its
//! own instance.

/// A seeded bit-stream generator with 32-bit, 64-bit and `[0, 1)` outputs
///
/// How `next64` relates to `next32` is engine specific:
/// [`crate::Pcg64Tmwc`] hands out the low half of a 64-bit draw first,
/// [`crate::DxGenerator`] packs two 32-bit draws high-then-low.
///
/// # Example
/// ```
/// use nextrandom_core_rs::{BitGenerator, DxGenerator, Pcg64Tmwc};
///
/// fn mean<G: BitGenerator>(rng: &mut G, n: usize) -> f64 {
///     (0..n).map(|_| rng.next_double()).sum::<f64>() / n as f64
/// }
///
/// let m = mean(&mut Pcg64Tmwc::default(), 10_000);
/// assert!(m > 0.4 && m < 0.6);
///
/// let m = mean(&mut DxGenerator::default(), 10_000);
/// assert!(m > 0.4 && m < 0.6);
/// ```
pub trait BitGenerator {
    fn next32(&mut self) -> u32;

    fn next64(&mut self) -> u64;

    /// Uniform value in `[0, 1)`
    fn next_double(&mut self) -> f64;
}
