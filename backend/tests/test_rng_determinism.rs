//! Determinism across every generator and seeding path
//!
//! Same parameters + same seed must give the same stream, however the
//! generator was constructed or cloned.

use nextrandom_core_rs::config::{DxConfig, DxVariant, Pcg64TmwcConfig};
use nextrandom_core_rs::generator::SeedBytes;
use nextrandom_core_rs::{DxGenerator, Pcg64Tmwc};
use proptest::prelude::*;
use rand_core::{RngCore, SeedableRng};

#[test]
fn test_clone_continues_identically() {
    let mut pcg = Pcg64Tmwc::seed_from_u64(7);
    let mut dx = DxGenerator::new(DxConfig::default(), 7);
    for _ in 0..37 {
        pcg.next32();
        dx.next32();
    }

    let mut pcg_clone = pcg.clone();
    let mut dx_clone = dx.clone();
    for _ in 0..1000 {
        assert_eq!(pcg.next32(), pcg_clone.next32());
        assert_eq!(dx.next32(), dx_clone.next32());
    }
}

#[test]
fn test_rng_core_uses_native_widths() {
    let mut native = Pcg64Tmwc::default();
    let mut rng_core = Pcg64Tmwc::default();
    assert_eq!(native.next32(), rng_core.next_u32());
    assert_eq!(native.next32(), rng_core.next_u32());
    assert_eq!(native.next64(), rng_core.next_u64());

    let mut native = DxGenerator::default();
    let mut rng_core = DxGenerator::default();
    assert_eq!(native.next64(), rng_core.next_u64());
}

#[test]
fn test_fill_bytes_deterministic() {
    let mut a = Pcg64Tmwc::seed_from_u64(99);
    let mut b = Pcg64Tmwc::seed_from_u64(99);
    let mut buf_a = [0u8; 61];
    let mut buf_b = [0u8; 61];
    a.fill_bytes(&mut buf_a);
    b.fill_bytes(&mut buf_b);
    assert_eq!(buf_a, buf_b);

    let mut a = DxGenerator::seed_from_u64(99);
    let mut b = DxGenerator::seed_from_u64(99);
    a.fill_bytes(&mut buf_a);
    b.fill_bytes(&mut buf_b);
    assert_eq!(buf_a, buf_b);
}

#[test]
fn test_integer_seeds_differ() {
    let config = Pcg64TmwcConfig::power_add((54, 34), (57, 25));
    let mut a = Pcg64Tmwc::seed_from_u64_with(config, 0);
    let mut b = Pcg64Tmwc::seed_from_u64_with(config, 1);
    let seq_a: Vec<u64> = (0..10).map(|_| a.next64()).collect();
    let seq_b: Vec<u64> = (0..10).map(|_| b.next64()).collect();
    assert_ne!(seq_a, seq_b);
}

#[test]
fn test_integer_seed_words_pcg() {
    // rand_core's PCG32 fill of the 32-byte seed, read as little-endian words
    let config = Pcg64TmwcConfig::power_sub((54, 34), (57, 25));
    assert_eq!(
        Pcg64Tmwc::seed_from_u64_with(config, 0),
        Pcg64Tmwc::new(
            config,
            [0x45cd_b581_f973_f2ec, 0xad6c_ad06_7346_f087],
            [0x67e7_1733_e3a3_d0d0, 0xfe7d_8ad7_72ea_9bf2],
        )
    );
    assert_eq!(
        Pcg64Tmwc::seed_from_u64(7),
        Pcg64Tmwc::new(
            Pcg64TmwcConfig::default(),
            [0x096c_20d0_3b40_0cc8, 0x1e25_4ff2_6f3b_a637],
            [0x5a56_84b3_1b2f_bb3c, 0x3f20_1b0d_1566_a09a],
        )
    );
}

#[test]
fn test_integer_seed_words_dx() {
    let config = DxConfig {
        variant: DxVariant::Two,
        ..DxConfig::default()
    };
    assert_eq!(
        DxGenerator::seed_from_u64_with(config, 0),
        DxGenerator::new(config, 4_185_125_612)
    );
    assert_eq!(
        DxGenerator::seed_from_u64(7),
        DxGenerator::new(DxConfig::default(), 994_053_320)
    );
}

proptest! {
    #[test]
    fn prop_pcg_same_seed_same_sequence(s in any::<[u64; 4]>()) {
        let config = Pcg64TmwcConfig::power_sub((54, 34), (57, 25));
        let mut a = Pcg64Tmwc::new(config, [s[0], s[1]], [s[2], s[3]]);
        let mut b = Pcg64Tmwc::new(config, [s[0], s[1]], [s[2], s[3]]);
        for _ in 0..100 {
            prop_assert_eq!(a.next32(), b.next32());
            prop_assert_eq!(a.next64(), b.next64());
            prop_assert_eq!(a.next_double(), b.next_double());
        }
    }

    #[test]
    fn prop_dx_same_seed_same_sequence(seed in any::<u32>(), two in any::<bool>()) {
        let variant = if two { DxVariant::Two } else { DxVariant::One };
        let config = DxConfig { variant, ..DxConfig::default() };
        let mut a = DxGenerator::new(config, seed);
        let mut b = DxGenerator::new(config, seed);
        for _ in 0..100 {
            prop_assert_eq!(a.next32(), b.next32());
            prop_assert_eq!(a.next64(), b.next64());
            prop_assert_eq!(a.next_double(), b.next_double());
        }
    }

    #[test]
    fn prop_integer_seed_follows_seedable_rng(seed in any::<u64>()) {
        prop_assert_eq!(
            Pcg64Tmwc::seed_from_u64_with(Pcg64TmwcConfig::default(), seed),
            Pcg64Tmwc::seed_from_u64(seed)
        );
        prop_assert_eq!(
            DxGenerator::seed_from_u64_with(DxConfig::default(), seed),
            DxGenerator::seed_from_u64(seed)
        );

        let config = Pcg64TmwcConfig::free(3_091_352_289, 2_985_467_773);
        prop_assert_eq!(
            Pcg64Tmwc::seed_from_u64_with(config, seed),
            Pcg64Tmwc::from_seed_with(config, SeedBytes::<32>::seed_from_u64(seed).0)
        );
    }

    #[test]
    fn prop_seedable_rng_matches_new(seed in any::<[u8; 32]>()) {
        let mut from_seed = Pcg64Tmwc::from_seed(seed);
        let words: Vec<u64> = seed
            .chunks_exact(8)
            .map(|c| u64::from_le_bytes(c.try_into().unwrap()))
            .collect();
        let mut direct = Pcg64Tmwc::new(
            Pcg64TmwcConfig::default(),
            [words[0], words[1]],
            [words[2], words[3]],
        );
        for _ in 0..20 {
            prop_assert_eq!(from_seed.next64(), direct.next64());
        }
    }
}
