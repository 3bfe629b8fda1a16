//! Turning seed material into engine seed words
//!
//! Single-word seeds always go through `rand_core`'s
//! `SeedableRng::seed_from_u64`, whatever the generator configuration.

use rand_core::SeedableRng;

/// Raw seed bytes for an `N`-byte seed
///
/// Its [`SeedableRng`] impl only stores the bytes, so
/// `SeedBytes::<N>::seed_from_u64(n)` yields exactly the bytes
/// `seed_from_u64(n)` hands to any generator with an `[u8; N]` seed. The
/// `*_with` constructors use it to apply that mapping under a custom
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedBytes<const N: usize>(pub [u8; N]);

impl SeedableRng for SeedBytes<32> {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self(seed)
    }
}

impl SeedableRng for SeedBytes<4> {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self(seed)
    }
}

/// Split 32 seed bytes into four little-endian words
pub fn words_from_le_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut words = [0u64; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = u64::from_le_bytes(buf);
    }
    words
}
