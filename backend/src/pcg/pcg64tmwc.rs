//! PCG64TMWC generator
//!
//! # Algorithm
//!
//! Two independent [`Mwc64`] engines are advanced once per draw (engine 1
//! first). Their values are treated as the upper and lower halves of a
//! 128-bit state and pushed through the PCG "XSL RR 128/64" output
//! function:
//!
//! ```text
//! out = rotr64(upper ^ lower, upper >> 58)
//! ```
//!
//! # Output widths
//!
//! - `next64`: one combined draw.
//! - `next32`: the low half of a fresh 64-bit draw, then the cached high
//!   half on the following call.
//! - `next_double`: a 64-bit draw divided by `2^64`; bypasses the cache.

use log::{debug, trace};
use rand_core::{impls, Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, MwcMultiplier, Pcg64TmwcConfig};
use crate::generator::{words_from_le_bytes, BitGenerator, SeedBytes};
use crate::mwc::Mwc64;

const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// XSL-RR output: xor the halves, rotate right by the top 6 bits of `upper`
#[inline]
pub fn output_xsl_rr(upper: u64, lower: u64) -> u64 {
    (upper ^ lower).rotate_right((upper >> 58) as u32)
}

/// Scale a 64-bit draw by `2^-64`
///
/// The conversion to `f64` rounds to nearest, so the top `2^10` inputs
/// (`x >= 2^64 - 2^10`) come out as exactly `1.0`.
#[inline]
pub fn to_unit_double(x: u64) -> f64 {
    x as f64 / TWO_POW_64
}

/// PCG64TMWC generator state
///
/// # Example
/// ```
/// use nextrandom_core_rs::Pcg64Tmwc;
/// use nextrandom_core_rs::config::Pcg64TmwcConfig;
///
/// let mut rng = Pcg64Tmwc::new(Pcg64TmwcConfig::default(), [1, 1], [1, 1]);
/// assert_eq!(rng.next64(), 161678);
///
/// let u = rng.next_double();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcg64Tmwc {
    mwc_1: Mwc64,
    mwc_2: Mwc64,
    /// True while `cached_u32` holds an unconsumed upper half
    has_u32: bool,
    cached_u32: u32,
}

impl Pcg64Tmwc {
    /// Create and seed a generator
    ///
    /// Parameters are trusted; see [`MwcMultiplier`] for the preconditions
    /// and [`Pcg64Tmwc::from_config`] for a checked constructor.
    pub fn new(config: Pcg64TmwcConfig, seed_1: [u64; 2], seed_2: [u64; 2]) -> Self {
        debug!(
            "seeding PCG64TMWC: multiplier_1={:?} multiplier_2={:?}",
            config.multiplier_1, config.multiplier_2
        );
        Self {
            mwc_1: Mwc64::new(config.multiplier_1, seed_1),
            mwc_2: Mwc64::new(config.multiplier_2, seed_2),
            has_u32: false,
            cached_u32: 0,
        }
    }

    /// Validate `config`, then seed
    pub fn from_config(
        config: Pcg64TmwcConfig,
        seed_1: [u64; 2],
        seed_2: [u64; 2],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, seed_1, seed_2))
    }

    /// [`SeedableRng::from_seed`] under a custom configuration
    ///
    /// # Arguments
    /// * `config` - Multipliers for the two engines
    /// * `seed` - Four little-endian words `[s1[0], s1[1], s2[0], s2[1]]`
    pub fn from_seed_with(config: Pcg64TmwcConfig, seed: [u8; 32]) -> Self {
        let [s0, s1, s2, s3] = words_from_le_bytes(&seed);
        Self::new(config, [s0, s1], [s2, s3])
    }

    /// [`SeedableRng::seed_from_u64`] under a custom configuration
    ///
    /// With the default configuration this is exactly
    /// `Pcg64Tmwc::seed_from_u64(seed)`.
    pub fn seed_from_u64_with(config: Pcg64TmwcConfig, seed: u64) -> Self {
        Self::from_seed_with(config, SeedBytes::<32>::seed_from_u64(seed).0)
    }

    /// Directly supplied multipliers
    pub fn with_multipliers(bb_1: u64, bb_2: u64, seed_1: [u64; 2], seed_2: [u64; 2]) -> Self {
        Self::new(Pcg64TmwcConfig::free(bb_1, bb_2), seed_1, seed_2)
    }

    /// One multiplier descriptor per engine, typically the
    /// `PowerAdd`/`PowerSub` forms of [`MwcMultiplier`]
    pub fn with_exponents(
        multiplier_1: MwcMultiplier,
        multiplier_2: MwcMultiplier,
        seed_1: [u64; 2],
        seed_2: [u64; 2],
    ) -> Self {
        let config = Pcg64TmwcConfig {
            multiplier_1,
            multiplier_2,
        };
        Self::new(config, seed_1, seed_2)
    }

    /// Re-seed both engines in place, keeping their multipliers, and empty
    /// the 32-bit cache
    pub fn reseed(&mut self, seed_1: [u64; 2], seed_2: [u64; 2]) {
        trace!("reseeding PCG64TMWC");
        self.mwc_1.seed(seed_1);
        self.mwc_2.seed(seed_2);
        self.has_u32 = false;
        self.cached_u32 = 0;
    }

    pub fn config(&self) -> Pcg64TmwcConfig {
        Pcg64TmwcConfig {
            multiplier_1: self.mwc_1.multiplier(),
            multiplier_2: self.mwc_2.multiplier(),
        }
    }

    /// Engine supplying the upper half
    pub fn mwc_1(&self) -> &Mwc64 {
        &self.mwc_1
    }

    /// Engine supplying the lower half
    pub fn mwc_2(&self) -> &Mwc64 {
        &self.mwc_2
    }

    /// Whether a cached upper half is waiting for the next `next32`
    pub fn has_cached_u32(&self) -> bool {
        self.has_u32
    }

    #[inline]
    pub fn next64(&mut self) -> u64 {
        self.mwc_1.update();
        self.mwc_2.update();
        output_xsl_rr(self.mwc_1.xx(), self.mwc_2.xx())
    }

    #[inline]
    pub fn next32(&mut self) -> u32 {
        if self.has_u32 {
            self.has_u32 = false;
            return self.cached_u32;
        }

        let next = self.next64();
        self.has_u32 = true;
        self.cached_u32 = (next >> 32) as u32;
        next as u32
    }

    /// Uniform double in `[0, 1)`, except that a draw of at least
    /// `2^64 - 2^10` gives exactly `1.0` (see [`to_unit_double`]); the
    /// chance of that is `2^-54` per draw.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        to_unit_double(self.next64())
    }
}

impl Default for Pcg64Tmwc {
    /// Default multipliers seeded with `[1, 1]` for both engines
    fn default() -> Self {
        Self::new(Pcg64TmwcConfig::default(), [1, 1], [1, 1])
    }
}

impl BitGenerator for Pcg64Tmwc {
    fn next32(&mut self) -> u32 {
        Pcg64Tmwc::next32(self)
    }

    fn next64(&mut self) -> u64 {
        Pcg64Tmwc::next64(self)
    }

    fn next_double(&mut self) -> f64 {
        Pcg64Tmwc::next_double(self)
    }
}

impl RngCore for Pcg64Tmwc {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg64Tmwc {
    type Seed = [u8; 32];

    /// Four little-endian words `[s1[0], s1[1], s2[0], s2[1]]` with the
    /// default multipliers
    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_seed_with(Pcg64TmwcConfig::default(), seed)
    }
}
