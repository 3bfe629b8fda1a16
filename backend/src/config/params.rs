//! Parameter descriptors and published defaults

use serde::{Deserialize, Serialize};

use super::validation::ConfigError;

/// First default MWC multiplier: 2^64 - 742
pub const DEFAULT_BB_1: u64 = 18_446_744_073_709_550_874;

/// Second default MWC multiplier: 2^64 - 80,167
pub const DEFAULT_BB_2: u64 = 18_446_744_073_709_471_449;

/// Exponent pairs `(rr, ww)` known to give good `2^rr + 2^ww` multipliers
pub const ADDITIVE_EXPONENTS: [(u32, u32); 3] = [(9, 16), (21, 52), (23, 36)];

/// Exponent pairs `(rr, ww)` known to give good `2^rr - 2^ww` multipliers
pub const SUBTRACTIVE_EXPONENTS: [(u32, u32); 4] = [(37, 19), (54, 34), (57, 25), (61, 37)];

/// Default number of DX terms (DX-643-1)
pub const DEFAULT_DX_KK: usize = 643;

/// Default DX multiplier
pub const DEFAULT_DX_BB: u32 = 42_720;

/// Default DX modulus: 2^31 - 1
pub const DEFAULT_DX_PP: u32 = 2_147_483_647;

/// Default upper bound on the DX term count (buffer capacity)
pub const MAX_TERMS: usize = 700;

/// How an MWC64 engine forms its multiplier `bb`
///
/// The power-of-two forms let the update use two shifts instead of a full
/// 64x64 multiply.
///
/// # Preconditions
/// - `Free`: `bb > 2`
/// - `PowerAdd` / `PowerSub`: both exponents below 64, the resulting `bb`
///   fits in 64 bits and exceeds 2 (for `PowerSub` this means `rr > ww`)
///
/// [`MwcMultiplier::validate`] checks all of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MwcMultiplier {
    /// Multiplier given directly
    Free { bb: u64 },
    /// `bb = 2^rr + 2^ww`
    PowerAdd { rr: u32, ww: u32 },
    /// `bb = 2^rr - 2^ww`
    PowerSub { rr: u32, ww: u32 },
}

impl MwcMultiplier {
    /// The multiplier value `bb`
    ///
    /// For the power-of-two forms the arithmetic wraps at 64 bits, so an
    /// out-of-range pair yields a meaningless value rather than a panic.
    pub fn value(&self) -> u64 {
        match *self {
            MwcMultiplier::Free { bb } => bb,
            MwcMultiplier::PowerAdd { rr, ww } => pow2(rr).wrapping_add(pow2(ww)),
            MwcMultiplier::PowerSub { rr, ww } => pow2(rr).wrapping_sub(pow2(ww)),
        }
    }

    /// Check the preconditions listed on the type
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            MwcMultiplier::Free { .. } => {}
            MwcMultiplier::PowerAdd { rr, ww } => {
                check_exponent(rr)?;
                check_exponent(ww)?;
                if pow2(rr).checked_add(pow2(ww)).is_none() {
                    return Err(ConfigError::MultiplierOverflow { rr, ww });
                }
            }
            MwcMultiplier::PowerSub { rr, ww } => {
                check_exponent(rr)?;
                check_exponent(ww)?;
                if rr <= ww {
                    return Err(ConfigError::SubtractiveOrder { rr, ww });
                }
            }
        }

        let bb = self.value();
        if bb <= 2 {
            return Err(ConfigError::MultiplierTooSmall { bb });
        }
        Ok(())
    }
}

fn pow2(exponent: u32) -> u64 {
    1u64.checked_shl(exponent).unwrap_or(0)
}

fn check_exponent(exponent: u32) -> Result<(), ConfigError> {
    if exponent >= 64 {
        return Err(ConfigError::ExponentOutOfRange { exponent });
    }
    Ok(())
}

/// Multipliers for the two MWC64 engines inside a PCG64TMWC generator
///
/// # Example
/// ```
/// use nextrandom_core_rs::config::{MwcMultiplier, Pcg64TmwcConfig};
///
/// let config = Pcg64TmwcConfig::power_sub((37, 19), (61, 37));
/// assert!(config.validate().is_ok());
/// assert_eq!(
///     config.multiplier_1,
///     MwcMultiplier::PowerSub { rr: 37, ww: 19 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pcg64TmwcConfig {
    pub multiplier_1: MwcMultiplier,
    pub multiplier_2: MwcMultiplier,
}

impl Pcg64TmwcConfig {
    /// Two directly supplied multipliers
    pub fn free(bb_1: u64, bb_2: u64) -> Self {
        Self {
            multiplier_1: MwcMultiplier::Free { bb: bb_1 },
            multiplier_2: MwcMultiplier::Free { bb: bb_2 },
        }
    }

    /// Two `2^rr + 2^ww` multipliers
    pub fn power_add(pair_1: (u32, u32), pair_2: (u32, u32)) -> Self {
        Self {
            multiplier_1: MwcMultiplier::PowerAdd { rr: pair_1.0, ww: pair_1.1 },
            multiplier_2: MwcMultiplier::PowerAdd { rr: pair_2.0, ww: pair_2.1 },
        }
    }

    /// Two `2^rr - 2^ww` multipliers
    pub fn power_sub(pair_1: (u32, u32), pair_2: (u32, u32)) -> Self {
        Self {
            multiplier_1: MwcMultiplier::PowerSub { rr: pair_1.0, ww: pair_1.1 },
            multiplier_2: MwcMultiplier::PowerSub { rr: pair_2.0, ww: pair_2.1 },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.multiplier_1.validate()?;
        self.multiplier_2.validate()
    }
}

impl Default for Pcg64TmwcConfig {
    fn default() -> Self {
        Self::free(DEFAULT_BB_1, DEFAULT_BB_2)
    }
}

/// DX-k-s recurrence choice (the `s` in DX-k-s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DxVariant {
    /// `X[i] = (bb * X[i] + X[i-1]) mod pp`
    One,
    /// `X[i] = (bb * (X[i] + X[i-1])) mod pp`
    Two,
}

impl DxVariant {
    /// The numeric selector (`1` or `2`)
    pub fn ss(&self) -> u8 {
        match self {
            DxVariant::One => 1,
            DxVariant::Two => 2,
        }
    }
}

impl TryFrom<u8> for DxVariant {
    type Error = ConfigError;

    fn try_from(ss: u8) -> Result<Self, Self::Error> {
        match ss {
            1 => Ok(DxVariant::One),
            2 => Ok(DxVariant::Two),
            other => Err(ConfigError::UnknownVariant { ss: other }),
        }
    }
}

/// DX-k-s parameters
///
/// # Preconditions
/// - `1 <= kk <= capacity` (capacity defaults to [`MAX_TERMS`])
/// - `bb >= 1`
/// - `2 <= pp` (`pp <= 2^32` holds by type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DxConfig {
    /// Number of terms
    pub kk: usize,
    /// Multiplier
    pub bb: u32,
    /// Modulus
    pub pp: u32,
    pub variant: DxVariant,
}

impl DxConfig {
    pub fn new(kk: usize, bb: u32, pp: u32, variant: DxVariant) -> Self {
        Self { kk, bb, pp, variant }
    }

    /// Validate against the default capacity
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with_capacity(MAX_TERMS)
    }

    pub fn validate_with_capacity(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.kk == 0 {
            return Err(ConfigError::ZeroTerms);
        }
        if self.kk > capacity {
            return Err(ConfigError::TooManyTerms {
                kk: self.kk,
                capacity,
            });
        }
        if self.bb == 0 {
            return Err(ConfigError::ZeroDxMultiplier);
        }
        if self.pp < 2 {
            return Err(ConfigError::ModulusTooSmall { pp: self.pp });
        }
        Ok(())
    }
}

impl Default for DxConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DX_KK, DEFAULT_DX_BB, DEFAULT_DX_PP, DxVariant::One)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers_match_published_values() {
        assert_eq!(DEFAULT_BB_1, u64::MAX - 741);
        assert_eq!(DEFAULT_BB_2, u64::MAX - 80_166);
    }

    #[test]
    fn test_power_multiplier_values() {
        assert_eq!(MwcMultiplier::PowerAdd { rr: 9, ww: 16 }.value(), 512 + 65_536);
        assert_eq!(
            MwcMultiplier::PowerSub { rr: 37, ww: 19 }.value(),
            (1u64 << 37) - (1u64 << 19)
        );
    }

    #[test]
    fn test_out_of_range_exponent_does_not_panic() {
        assert_eq!(MwcMultiplier::PowerAdd { rr: 64, ww: 1 }.value(), 2);
    }

    #[test]
    fn test_published_exponents_validate() {
        for (rr, ww) in ADDITIVE_EXPONENTS {
            assert!(MwcMultiplier::PowerAdd { rr, ww }.validate().is_ok());
        }
        for (rr, ww) in SUBTRACTIVE_EXPONENTS {
            assert!(MwcMultiplier::PowerSub { rr, ww }.validate().is_ok());
        }
    }

    #[test]
    fn test_variant_selector_round_trip() {
        assert_eq!(DxVariant::try_from(1), Ok(DxVariant::One));
        assert_eq!(DxVariant::try_from(2), Ok(DxVariant::Two));
        assert_eq!(DxVariant::Two.ss(), 2);
        assert_eq!(
            DxVariant::try_from(3),
            Err(ConfigError::UnknownVariant { ss: 3 })
        );
    }
}
