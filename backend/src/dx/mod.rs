//! DX-k-s lagged generators
//!
//! A `kk`-term recurrence modulo `pp` with two update rules (`s = 1, 2`).
//! [`DxState`] exposes the raw recurrence with the rule chosen per call;
//! [`DxGenerator`] fixes the rule at construction and is the usual entry
//! point.

mod dx_k_s;
mod generator;

pub use dx_k_s::{rescale_u32, DxState, LCG_MULTIPLIER, ZERO_SEED_FALLBACK};
pub use generator::DxGenerator;
