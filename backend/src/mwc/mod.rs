//! Multiply-with-carry engine
//!
//! A single 64-bit MWC recurrence, `(xx, cc) <- lo/hi(bb * xx + cc)`.
//! Used standalone or as one half of a [`crate::pcg::Pcg64Tmwc`].

mod mwc64;

pub use mwc64::{mul_add_wide, mwc_step, Mwc64};
