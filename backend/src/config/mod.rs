//! Generator parameters
//!
//! Parameter descriptors for every engine in the crate, the defaults the
//! published generators ship with, and opt-in validation.
//!
//! Raw constructors (`new`, `seed`) trust their parameters. The
//! `from_config` constructors run [`Pcg64TmwcConfig::validate`] /
//! [`DxConfig::validate`] first and report a [`ConfigError`] instead of
//! producing a degenerate stream.

pub mod params;
pub mod validation;

pub use params::{
    DxConfig, DxVariant, MwcMultiplier, Pcg64TmwcConfig, ADDITIVE_EXPONENTS, DEFAULT_BB_1,
    DEFAULT_BB_2, DEFAULT_DX_BB, DEFAULT_DX_KK, DEFAULT_DX_PP, MAX_TERMS, SUBTRACTIVE_EXPONENTS,
};
pub use validation::ConfigError;
