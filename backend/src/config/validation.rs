//! Parameter validation errors

use thiserror::Error;

/// Reasons a generator configuration is rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MWC multiplier {bb} must be greater than 2")]
    MultiplierTooSmall { bb: u64 },

    #[error("Shift exponent {exponent} must be below 64")]
    ExponentOutOfRange { exponent: u32 },

    #[error("2^{rr} + 2^{ww} does not fit in 64 bits")]
    MultiplierOverflow { rr: u32, ww: u32 },

    #[error("Subtractive multiplier 2^{rr} - 2^{ww} requires rr > ww")]
    SubtractiveOrder { rr: u32, ww: u32 },

    #[error("DX term count must be positive")]
    ZeroTerms,

    #[error("DX term count {kk} exceeds capacity {capacity}")]
    TooManyTerms { kk: usize, capacity: usize },

    #[error("DX multiplier must be positive")]
    ZeroDxMultiplier,

    #[error("DX modulus {pp} must be at least 2")]
    ModulusTooSmall { pp: u32 },

    #[error("Unknown DX variant selector {ss} (expected 1 or 2)")]
    UnknownVariant { ss: u8 },
}
