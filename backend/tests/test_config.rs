//! Tests for generator parameters and validation

use nextrandom_core_rs::config::{
    DxConfig, DxVariant, MwcMultiplier, Pcg64TmwcConfig, DEFAULT_BB_1, DEFAULT_BB_2, MAX_TERMS,
};
use nextrandom_core_rs::{ConfigError, DxGenerator};

#[test]
fn test_pcg_defaults() {
    let config = Pcg64TmwcConfig::default();
    assert_eq!(config.multiplier_1, MwcMultiplier::Free { bb: DEFAULT_BB_1 });
    assert_eq!(config.multiplier_2, MwcMultiplier::Free { bb: DEFAULT_BB_2 });
    assert_eq!(DEFAULT_BB_1, 18446744073709550874);
    assert_eq!(DEFAULT_BB_2, 18446744073709471449);
    assert!(config.validate().is_ok());
}

#[test]
fn test_dx_defaults() {
    let config = DxConfig::default();
    assert_eq!(config.kk, 643);
    assert_eq!(config.bb, 42720);
    assert_eq!(config.pp, 2147483647);
    assert_eq!(config.variant, DxVariant::One);
    assert!(config.validate().is_ok());
}

#[test]
fn test_multiplier_too_small() {
    assert_eq!(
        MwcMultiplier::Free { bb: 2 }.validate(),
        Err(ConfigError::MultiplierTooSmall { bb: 2 })
    );
    assert_eq!(
        MwcMultiplier::PowerAdd { rr: 0, ww: 0 }.validate(),
        Err(ConfigError::MultiplierTooSmall { bb: 2 })
    );
    assert_eq!(
        MwcMultiplier::PowerSub { rr: 1, ww: 0 }.validate(),
        Err(ConfigError::MultiplierTooSmall { bb: 1 })
    );
    assert!(MwcMultiplier::Free { bb: 3 }.validate().is_ok());
}

#[test]
fn test_exponent_out_of_range() {
    assert_eq!(
        MwcMultiplier::PowerAdd { rr: 64, ww: 3 }.validate(),
        Err(ConfigError::ExponentOutOfRange { exponent: 64 })
    );
    assert_eq!(
        MwcMultiplier::PowerSub { rr: 70, ww: 100 }.validate(),
        Err(ConfigError::ExponentOutOfRange { exponent: 70 })
    );
}

#[test]
fn test_additive_overflow() {
    assert_eq!(
        MwcMultiplier::PowerAdd { rr: 63, ww: 63 }.validate(),
        Err(ConfigError::MultiplierOverflow { rr: 63, ww: 63 })
    );
    assert!(MwcMultiplier::PowerAdd { rr: 63, ww: 62 }.validate().is_ok());
}

#[test]
fn test_subtractive_order() {
    assert_eq!(
        MwcMultiplier::PowerSub { rr: 19, ww: 37 }.validate(),
        Err(ConfigError::SubtractiveOrder { rr: 19, ww: 37 })
    );
    assert_eq!(
        MwcMultiplier::PowerSub { rr: 5, ww: 5 }.validate(),
        Err(ConfigError::SubtractiveOrder { rr: 5, ww: 5 })
    );
}

#[test]
fn test_pcg_config_reports_first_bad_multiplier() {
    let config = Pcg64TmwcConfig {
        multiplier_1: MwcMultiplier::Free { bb: 1 },
        multiplier_2: MwcMultiplier::PowerSub { rr: 1, ww: 2 },
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::MultiplierTooSmall { bb: 1 })
    );
}

#[test]
fn test_dx_validation() {
    let ok = DxConfig::new(10, 5, 101, DxVariant::Two);
    assert!(ok.validate().is_ok());

    assert_eq!(
        DxConfig { kk: 0, ..ok }.validate(),
        Err(ConfigError::ZeroTerms)
    );
    assert_eq!(
        DxConfig { kk: MAX_TERMS + 1, ..ok }.validate(),
        Err(ConfigError::TooManyTerms {
            kk: MAX_TERMS + 1,
            capacity: MAX_TERMS
        })
    );
    assert_eq!(
        DxConfig { bb: 0, ..ok }.validate(),
        Err(ConfigError::ZeroDxMultiplier)
    );
    assert_eq!(
        DxConfig { pp: 1, ..ok }.validate(),
        Err(ConfigError::ModulusTooSmall { pp: 1 })
    );
}

#[test]
fn test_dx_validation_custom_capacity() {
    let config = DxConfig::new(1000, 5, 101, DxVariant::One);
    assert!(config.validate().is_err());
    assert!(config.validate_with_capacity(1024).is_ok());
}

#[test]
fn test_from_config_checks_before_seeding() {
    let config = DxConfig::new(0, 5, 101, DxVariant::One);
    assert_eq!(
        DxGenerator::from_config(config, 1),
        Err(ConfigError::ZeroTerms)
    );
}

#[test]
fn test_multiplier_json_shape() {
    let json = serde_json::to_value(MwcMultiplier::PowerSub { rr: 37, ww: 19 }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"type": "PowerSub", "rr": 37, "ww": 19})
    );

    let parsed: MwcMultiplier =
        serde_json::from_str(r#"{"type": "Free", "bb": 18446744073709550874}"#).unwrap();
    assert_eq!(parsed, MwcMultiplier::Free { bb: DEFAULT_BB_1 });
}

#[test]
fn test_dx_config_from_json() {
    let config: DxConfig =
        serde_json::from_str(r#"{"kk": 643, "bb": 42720, "pp": 2147483647, "variant": "Two"}"#)
            .unwrap();
    assert_eq!(config, DxConfig { variant: DxVariant::Two, ..DxConfig::default() });
}
