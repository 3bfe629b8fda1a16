//! DX-k-s generator bound to one recurrence

use rand_core::{impls, Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use super::dx_k_s::{DxState, ZERO_SEED_FALLBACK};
use crate::config::{ConfigError, DxConfig, DxVariant, MAX_TERMS};
use crate::generator::{BitGenerator, SeedBytes};

/// A DX-k-s generator
///
/// Holds one [`DxState`] and always updates it with the same recurrence,
/// so the two variants can never be mixed on one stream.
///
/// # Example
/// ```
/// use nextrandom_core_rs::DxGenerator;
/// use nextrandom_core_rs::config::DxConfig;
///
/// // DX-643-1, bb = 42720, pp = 2^31 - 1
/// let mut rng = DxGenerator::new(DxConfig::default(), 12345);
/// assert_eq!(rng.next32(), 690189920);
///
/// let u = rng.next_double();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DxGenerator {
    state: DxState,
    variant: DxVariant,
}

impl DxGenerator {
    /// Seeded generator with a buffer of exactly `config.kk` terms
    ///
    /// Parameters are trusted; see [`DxConfig`] for the preconditions and
    /// [`DxGenerator::from_config`] for a checked constructor.
    ///
    /// # Panics
    /// Panics if `config.kk == 0`.
    pub fn new(config: DxConfig, seed: u32) -> Self {
        Self::with_capacity(config, config.kk, seed)
    }

    /// Seeded generator backed by a buffer of `capacity` terms
    ///
    /// # Panics
    /// Panics unless `1 <= config.kk <= capacity`.
    pub fn with_capacity(config: DxConfig, capacity: usize, seed: u32) -> Self {
        Self {
            state: DxState::with_capacity(capacity, config.kk, config.bb, config.pp, seed),
            variant: config.variant,
        }
    }

    /// Validate `config` against [`MAX_TERMS`], then seed
    pub fn from_config(config: DxConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate_with_capacity(MAX_TERMS)?;
        Ok(Self::new(config, seed))
    }

    /// [`SeedableRng::from_seed`] under a custom configuration
    pub fn from_seed_with(config: DxConfig, seed: [u8; 4]) -> Self {
        Self::new(config, u32::from_le_bytes(seed))
    }

    /// [`SeedableRng::seed_from_u64`] under a custom configuration
    ///
    /// With the default configuration this is exactly
    /// `DxGenerator::seed_from_u64(seed)`.
    pub fn seed_from_u64_with(config: DxConfig, seed: u64) -> Self {
        Self::from_seed_with(config, SeedBytes::<4>::seed_from_u64(seed).0)
    }

    pub fn reseed(&mut self, seed: u32) {
        self.state.reseed(seed);
    }

    pub fn config(&self) -> DxConfig {
        DxConfig::new(
            self.state.kk(),
            self.state.bb(),
            self.state.pp(),
            self.variant,
        )
    }

    pub fn variant(&self) -> DxVariant {
        self.variant
    }

    pub fn state(&self) -> &DxState {
        &self.state
    }

    /// Give up the variant binding and return the raw state
    pub fn into_state(self) -> DxState {
        self.state
    }

    #[inline]
    pub fn next32(&mut self) -> u32 {
        self.state.next32(self.variant)
    }

    /// Two 32-bit draws, the first in the high half
    #[inline]
    pub fn next64(&mut self) -> u64 {
        self.state.next64(self.variant)
    }

    #[inline]
    pub fn next_double(&mut self) -> f64 {
        self.state.next_double(self.variant)
    }
}

impl Default for DxGenerator {
    /// DX-643-1 seeded with the zero-seed fallback
    fn default() -> Self {
        Self::new(DxConfig::default(), ZERO_SEED_FALLBACK)
    }
}

impl BitGenerator for DxGenerator {
    fn next32(&mut self) -> u32 {
        DxGenerator::next32(self)
    }

    fn next64(&mut self) -> u64 {
        DxGenerator::next64(self)
    }

    fn next_double(&mut self) -> f64 {
        DxGenerator::next_double(self)
    }
}

impl RngCore for DxGenerator {
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

impl SeedableRng for DxGenerator {
    type Seed = [u8; 4];

    /// Little-endian seed word with the default DX-643-1 parameters
    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_seed_with(DxConfig::default(), seed)
    }
}
