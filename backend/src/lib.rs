//! NextRandom Core - deterministic bit-stream generators
//!
//! Reproducible, statistically characterised (not cryptographic) random
//! streams for simulation and sampling code.
//!
//! # Architecture
//!
//! - **mwc**: 64-bit multiply-with-carry engine and its 128-bit step
//! - **pcg**: PCG64TMWC, two MWC64 engines mixed by an XSL-RR output
//! - **dx**: DX-k-s lagged generators (variants 1 and 2)
//! - **config**: Parameters, published defaults, validation
//! - **generator**: The shared `BitGenerator` interface and seed expansion
//!
//! # Critical Invariants
//!
//! 1. Same parameters + same seed = same stream, on every platform
//! 2. No draw allocates, fails, or blocks
//! 3. Generators are plain values: no shared or global state
//!
//! # Example
//! ```
//! use nextrandom_core_rs::{DxGenerator, Pcg64Tmwc};
//! use nextrandom_core_rs::config::{DxConfig, Pcg64TmwcConfig};
//!
//! let mut pcg = Pcg64Tmwc::new(Pcg64TmwcConfig::default(), [1, 1], [1, 1]);
//! let mut dx = DxGenerator::new(DxConfig::default(), 12345);
//!
//! let a = pcg.next64();
//! let b = dx.next32();
//! assert_eq!((a, b), (161678, 690189920));
//! ```

// Module declarations
pub mod config;
pub mod generator;
pub mod dx;
pub mod mwc;
pub mod pcg;

// Re-exports for convenience
pub use config::{ConfigError, DxConfig, DxVariant, MwcMultiplier, Pcg64TmwcConfig};
pub use generator::BitGenerator;
pub use dx::{DxGenerator, DxState};
pub use mwc::Mwc64;
pub use pcg::Pcg64Tmwc;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn nextrandom_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
