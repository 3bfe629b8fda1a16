//! DX-k-s state and recurrences
//!
//! # Algorithm
//!
//! The state is a circular buffer of `kk` terms and a running index `II`
//! pointing at the most recently written term. One update moves `II`
//! forward and overwrites the oldest term:
//!
//! ```text
//! s = 1:  X[II] = (bb * X[II] + X[II - 1]) mod pp
//! s = 2:  X[II] = (bb * (X[II] + X[II - 1])) mod pp
//! ```
//!
//! # Seeding
//!
//! `X[0] = seed` (a zero seed is replaced by [`ZERO_SEED_FALLBACK`]) and the
//! remaining terms follow the LCG `X[i] = 16807 * X[i - 1] mod pp`. The
//! running index starts at `kk - 1`, so the first update overwrites
//! `X[0]`; from then on every term is below `pp` even if the seed was not.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::DxVariant;

/// Multiplier of the LCG that fills the initial terms
pub const LCG_MULTIPLIER: u64 = 16_807;

/// Seed used in place of zero
pub const ZERO_SEED_FALLBACK: u32 = 11_111;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Map a term in `[0, pp)` onto `[0, 2^32)`: `floor(term * 2^32 / pp)`
#[inline]
pub fn rescale_u32(term: u32, pp: u32) -> u32 {
    (term as f64 * (TWO_POW_32 / pp as f64)) as u32
}

/// `value mod pp`, or the low 32 bits of `value` when `pp == 0`
#[inline]
fn reduce(value: u64, pp: u32) -> u32 {
    value.checked_rem(pp as u64).unwrap_or(value) as u32
}

/// Raw DX-k-s state
///
/// The term buffer is allocated once with a fixed capacity and never
/// reallocated; only its first `kk` slots are used.
///
/// # Example
/// ```
/// use nextrandom_core_rs::config::DxVariant;
/// use nextrandom_core_rs::dx::DxState;
///
/// let mut state = DxState::new(3, 7, 101, 5);
/// assert_eq!(state.terms(), &[5, 3, 22]);
///
/// state.advance(DxVariant::One);
/// assert_eq!(state.index(), 0);
/// assert_eq!(state.current(), 57); // (7 * 5 + 22) mod 101
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DxState {
    terms: Box<[u32]>,
    kk: usize,
    /// Running index `II`
    index: usize,
    bb: u32,
    pp: u32,
}

impl DxState {
    /// Seeded state whose capacity equals `kk`
    ///
    /// # Panics
    /// Panics if `kk == 0`.
    pub fn new(kk: usize, bb: u32, pp: u32, seed: u32) -> Self {
        Self::with_capacity(kk, kk, bb, pp, seed)
    }

    /// Seeded state backed by a buffer of `capacity` terms
    ///
    /// `bb` and `pp` are not checked; `pp < 2` or `bb == 0` give a
    /// degenerate stream. With `pp == 0` terms are left unreduced.
    ///
    /// # Panics
    /// Panics unless `1 <= kk <= capacity`.
    pub fn with_capacity(capacity: usize, kk: usize, bb: u32, pp: u32, seed: u32) -> Self {
        assert!(
            kk >= 1 && kk <= capacity,
            "DX term count {} must be in 1..={}",
            kk,
            capacity
        );
        debug!(
            "seeding DX state: kk={} bb={} pp={} capacity={}",
            kk, bb, pp, capacity
        );

        let mut state = Self {
            terms: vec![0u32; capacity].into_boxed_slice(),
            kk,
            index: 0,
            bb,
            pp,
        };
        state.initialize(seed);
        state
    }

    /// Re-run seeding in place
    pub fn reseed(&mut self, seed: u32) {
        trace!("reseeding DX state");
        self.initialize(seed);
    }

    fn initialize(&mut self, seed: u32) {
        let seed = if seed == 0 { ZERO_SEED_FALLBACK } else { seed };
        self.terms[0] = seed;
        for i in 1..self.kk {
            self.terms[i] = reduce(LCG_MULTIPLIER * self.terms[i - 1] as u64, self.pp);
        }

        self.index = self.kk - 1;
    }

    /// Apply one update of the chosen recurrence
    #[inline]
    pub fn advance(&mut self, variant: DxVariant) {
        let lag = self.index;

        self.index += 1;
        if self.index == self.kk {
            self.index = 0;
        }

        let bb = self.bb as u64;
        let oldest = self.terms[self.index] as u64;
        let newest = self.terms[lag] as u64;

        // Both terms are below 2^32, so variant one cannot overflow. Variant
        // two can only for pp > 2^31 and wraps as a 64-bit product.
        let next = match variant {
            DxVariant::One => bb * oldest + newest,
            DxVariant::Two => bb.wrapping_mul(oldest + newest),
        };

        self.terms[self.index] = reduce(next, self.pp);
    }

    /// Advance, then rescale the new term to 32 bits
    #[inline]
    pub fn next32(&mut self, variant: DxVariant) -> u32 {
        self.advance(variant);
        rescale_u32(self.current(), self.pp)
    }

    /// Two 32-bit draws, the first in the high half
    #[inline]
    pub fn next64(&mut self, variant: DxVariant) -> u64 {
        let high = self.next32(variant) as u64;
        let low = self.next32(variant) as u64;
        (high << 32) | low
    }

    /// Advance, then return `term / pp`
    #[inline]
    pub fn next_double(&mut self, variant: DxVariant) -> f64 {
        self.advance(variant);
        self.current() as f64 / self.pp as f64
    }

    /// Most recently written term
    pub fn current(&self) -> u32 {
        self.terms[self.index]
    }

    /// The `kk` live terms
    pub fn terms(&self) -> &[u32] {
        &self.terms[..self.kk]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kk(&self) -> usize {
        self.kk
    }

    pub fn capacity(&self) -> usize {
        self.terms.len()
    }

    pub fn bb(&self) -> u32 {
        self.bb
    }

    pub fn pp(&self) -> u32 {
        self.pp
    }
}
