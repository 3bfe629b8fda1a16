//! 64-bit multiply-with-carry
//!
//! # Algorithm
//!
//! With modulus `2^64` and multiplier `bb`, each update computes the full
//! 128-bit value
//!
//! ```text
//! cx = bb * xx + cc
//! ```
//!
//! and keeps the low word as the new `xx` and the high word as the new
//! carry `cc`. When `bb` is `2^rr +/- 2^ww` the product is formed with two
//! shifts instead.
//!
//! # Carry range
//!
//! Seeding places the carry in `[1, bb - 2]`. Every update keeps it in
//! `[0, bb - 1]`: with `xx <= 2^64 - 1` and `cc <= bb - 1` the sum is at most
//! `bb * 2^64 - 1`.

use serde::{Deserialize, Serialize};

use crate::config::MwcMultiplier;

/// One MWC update on raw words, returning `(xx, cc)`
///
/// Exact: the intermediate value is held in a `u128`. The shift forms wrap
/// at 128 bits, which never triggers for exponents below 64; an exponent of
/// 128 or more contributes zero.
///
/// # Example
/// ```
/// use nextrandom_core_rs::config::MwcMultiplier;
/// use nextrandom_core_rs::mwc::mwc_step;
///
/// let (xx, cc) = mwc_step(MwcMultiplier::Free { bb: 10 }, u64::MAX, 3);
/// // 10 * (2^64 - 1) + 3 = 9 * 2^64 + (2^64 - 7)
/// assert_eq!((xx, cc), (u64::MAX - 6, 9));
/// ```
#[inline]
pub fn mwc_step(multiplier: MwcMultiplier, xx: u64, cc: u64) -> (u64, u64) {
    let x = xx as u128;
    let c = cc as u128;

    let cx = match multiplier {
        MwcMultiplier::Free { bb } => (bb as u128) * x + c,
        MwcMultiplier::PowerAdd { rr, ww } => shl(x, rr).wrapping_add(shl(x, ww)).wrapping_add(c),
        MwcMultiplier::PowerSub { rr, ww } => shl(x, rr).wrapping_sub(shl(x, ww)).wrapping_add(c),
    };

    (cx as u64, (cx >> 64) as u64)
}

/// Shifts of 128 or more clear the value instead of panicking
#[inline]
fn shl(x: u128, exponent: u32) -> u128 {
    x.checked_shl(exponent).unwrap_or(0)
}

/// `a * b + c` as `(low, high)` words, using only 64-bit arithmetic
///
/// Portable counterpart of the `u128` path in [`mwc_step`]; the two must
/// always agree.
pub fn mul_add_wide(a: u64, b: u64, c: u64) -> (u64, u64) {
    const MASK: u64 = 0xffff_ffff;

    let (a_lo, a_hi) = (a & MASK, a >> 32);
    let (b_lo, b_hi) = (b & MASK, b >> 32);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // at most 3 * (2^32 - 1), no overflow
    let mid = (ll >> 32) + (lh & MASK) + (hl & MASK);

    let lo = (ll & MASK) | (mid << 32);
    let hi = hh + (lh >> 32) + (hl >> 32) + (mid >> 32);

    let (lo, carry) = lo.overflowing_add(c);
    (lo, hi + carry as u64)
}

/// A 64-bit multiply-with-carry engine
///
/// # Example
/// ```
/// use nextrandom_core_rs::config::MwcMultiplier;
/// use nextrandom_core_rs::mwc::Mwc64;
///
/// let mut mwc = Mwc64::new(MwcMultiplier::Free { bb: 18446744073709550874 }, [0, 7]);
/// assert_eq!(mwc.cc(), 1);
/// mwc.update();
/// assert_eq!(mwc.xx(), 18446744073709546423);
/// assert_eq!(mwc.cc(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mwc64 {
    /// Carry `c_n`
    cc: u64,
    /// Value `x_n`
    xx: u64,
    multiplier: MwcMultiplier,
}

impl Mwc64 {
    /// Create and seed an engine
    ///
    /// See [`Mwc64::seed`] for the multiplier precondition.
    pub fn new(multiplier: MwcMultiplier, seed: [u64; 2]) -> Self {
        let mut mwc = Self {
            cc: 0,
            xx: 0,
            multiplier,
        };
        mwc.seed(seed);
        mwc
    }

    /// Seed from two words: `seed[0]` picks the carry, `seed[1]` is `xx`
    ///
    /// The carry becomes `seed[0] mod (bb - 2) + 1`, always in `[1, bb - 2]`.
    ///
    /// # Preconditions
    /// `bb > 2`. Smaller multipliers are not rejected: `bb - 2` wraps, and
    /// for `bb == 2` the reduction is skipped, so the engine runs but the
    /// stream is degenerate.
    pub fn seed(&mut self, seed: [u64; 2]) {
        let bb = self.multiplier.value();

        self.xx = seed[1];
        self.cc = seed[0]
            .checked_rem(bb.wrapping_sub(2))
            .unwrap_or(seed[0])
            .wrapping_add(1);
    }

    /// Advance by one step
    #[inline]
    pub fn update(&mut self) {
        let (xx, cc) = mwc_step(self.multiplier, self.xx, self.cc);
        self.xx = xx;
        self.cc = cc;
    }

    /// Current carry
    pub fn cc(&self) -> u64 {
        self.cc
    }

    /// Current value
    pub fn xx(&self) -> u64 {
        self.xx
    }

    pub fn multiplier(&self) -> MwcMultiplier {
        self.multiplier
    }

    /// The multiplier value `bb`
    pub fn bb(&self) -> u64 {
        self.multiplier.value()
    }
}
