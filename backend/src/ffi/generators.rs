//! PyO3 wrappers for the generators
//!
//! # Example (from Python)
//!
//! ```python
//! from nextrandom_core_rs import default_pcg64tmwc, custom_dx32
//!
//! pcg = default_pcg64tmwc(seed=12345)
//! print(pcg.next64(), pcg.next_double())
//!
//! dx = custom_dx32(bb=42720, pp=2**31 - 1, kk=643, ss=2, seed=7)
//! raw = dx.random_raw(10)
//! ```

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{config_error_to_py, dx_config_to_py, entropy_bytes, pcg64tmwc_config_to_py};
use crate::config::{
    DxConfig, DxVariant, Pcg64TmwcConfig, DEFAULT_BB_1, DEFAULT_BB_2, DEFAULT_DX_BB, DEFAULT_DX_KK,
    DEFAULT_DX_PP, MAX_TERMS,
};
use crate::dx::DxGenerator;
use crate::pcg::Pcg64Tmwc;

/// Python wrapper for [`Pcg64Tmwc`]
#[pyclass(name = "PCG64TMWC")]
pub struct PyPcg64Tmwc {
    inner: Pcg64Tmwc,
}

#[pymethods]
impl PyPcg64Tmwc {
    /// Create a generator from two free multipliers
    ///
    /// # Arguments
    ///
    /// * `bb_1` - Multiplier of the engine supplying the upper half
    /// * `bb_2` - Multiplier of the engine supplying the lower half
    /// * `seed` - Integer seed, mapped through `SeedableRng::seed_from_u64`;
    ///   `None` seeds from OS entropy
    ///
    /// # Returns
    ///
    /// New PCG64TMWC instance
    ///
    /// # Errors
    ///
    /// Raises ValueError if a multiplier is 2 or less.
    /// Raises RuntimeError if OS entropy is unavailable (`seed=None` only).
    #[new]
    #[pyo3(signature = (bb_1 = DEFAULT_BB_1, bb_2 = DEFAULT_BB_2, seed = None))]
    fn new(bb_1: u64, bb_2: u64, seed: Option<u64>) -> PyResult<Self> {
        let config = Pcg64TmwcConfig::free(bb_1, bb_2);
        config.validate().map_err(config_error_to_py)?;

        let inner = match seed {
            Some(seed) => Pcg64Tmwc::seed_from_u64_with(config, seed),
            None => Pcg64Tmwc::from_seed_with(config, entropy_bytes::<32>()?),
        };

        Ok(Self { inner })
    }

    fn next32(&mut self) -> u32 {
        self.inner.next32()
    }

    fn next64(&mut self) -> u64 {
        self.inner.next64()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    /// `size` consecutive 64-bit draws
    fn random_raw(&mut self, size: usize) -> Vec<u64> {
        (0..size).map(|_| self.inner.next64()).collect()
    }

    /// The multipliers this generator was built with
    fn get_args<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        pcg64tmwc_config_to_py(py, &self.inner.config())
    }
}

/// Python wrapper for [`DxGenerator`]
#[pyclass(name = "DXGenerator32")]
pub struct PyDxGenerator32 {
    inner: DxGenerator,
}

#[pymethods]
impl PyDxGenerator32 {
    /// Create a DX-kk-ss generator
    ///
    /// # Arguments
    ///
    /// * `bb` - Multiplier of the recurrence
    /// * `pp` - Prime modulus
    /// * `kk` - Number of terms
    /// * `ss` - Number of nonzero coefficients (1 or 2)
    /// * `seed` - Integer seed, mapped through `SeedableRng::seed_from_u64`;
    ///   `None` seeds from OS entropy
    ///
    /// # Returns
    ///
    /// New DXGenerator32 instance
    ///
    /// # Errors
    ///
    /// Raises ValueError if:
    /// - `ss` is not 1 or 2
    /// - `kk` is 0 or above the term capacity
    /// - `bb` is 0 or `pp` below 2
    ///
    /// Raises RuntimeError if OS entropy is unavailable (`seed=None` only).
    #[new]
    #[pyo3(signature = (bb = DEFAULT_DX_BB, pp = DEFAULT_DX_PP, kk = DEFAULT_DX_KK, ss = 1, seed = None))]
    fn new(bb: u32, pp: u32, kk: usize, ss: u8, seed: Option<u64>) -> PyResult<Self> {
        let variant = DxVariant::try_from(ss).map_err(config_error_to_py)?;
        let config = DxConfig::new(kk, bb, pp, variant);
        config
            .validate_with_capacity(MAX_TERMS)
            .map_err(config_error_to_py)?;

        let inner = match seed {
            Some(seed) => DxGenerator::seed_from_u64_with(config, seed),
            None => DxGenerator::from_seed_with(config, entropy_bytes::<4>()?),
        };
        Ok(Self { inner })
    }

    fn next32(&mut self) -> u32 {
        self.inner.next32()
    }

    fn next64(&mut self) -> u64 {
        self.inner.next64()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    /// `size` consecutive 64-bit draws
    fn random_raw(&mut self, size: usize) -> Vec<u64> {
        (0..size).map(|_| self.inner.next64()).collect()
    }

    /// The parameters this generator was built with
    fn get_args<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        dx_config_to_py(py, &self.inner.config())
    }
}

/// PCG64TMWC with caller-chosen multipliers
///
/// # Arguments
///
/// * `bb_1`, `bb_2` - Engine multipliers (defaults are the library defaults)
/// * `seed` - Integer seed or `None` for OS entropy
///
/// # Errors
///
/// Same as the `PCG64TMWC` constructor.
#[pyfunction]
#[pyo3(signature = (bb_1 = DEFAULT_BB_1, bb_2 = DEFAULT_BB_2, seed = None))]
pub fn custom_pcg64tmwc(bb_1: u64, bb_2: u64, seed: Option<u64>) -> PyResult<PyPcg64Tmwc> {
    PyPcg64Tmwc::new(bb_1, bb_2, seed)
}

/// PCG64TMWC with the default multipliers
#[pyfunction]
#[pyo3(signature = (seed = None))]
pub fn default_pcg64tmwc(seed: Option<u64>) -> PyResult<PyPcg64Tmwc> {
    PyPcg64Tmwc::new(DEFAULT_BB_1, DEFAULT_BB_2, seed)
}

/// # Returns
///
/// `{"bb_1": ..., "bb_2": ...}` for the default multipliers
#[pyfunction]
pub fn get_default_pcg64tmwc_args(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    pcg64tmwc_config_to_py(py, &Pcg64TmwcConfig::default())
}

/// DX-kk-ss with caller-chosen parameters
///
/// # Errors
///
/// Same as the `DXGenerator32` constructor.
#[pyfunction]
#[pyo3(signature = (bb = DEFAULT_DX_BB, pp = DEFAULT_DX_PP, kk = DEFAULT_DX_KK, ss = 1, seed = None))]
pub fn custom_dx32(
    bb: u32,
    pp: u32,
    kk: usize,
    ss: u8,
    seed: Option<u64>,
) -> PyResult<PyDxGenerator32> {
    PyDxGenerator32::new(bb, pp, kk, ss, seed)
}

#[pyfunction]
#[pyo3(signature = (seed = None))]
pub fn default_dx32(seed: Option<u64>) -> PyResult<PyDxGenerator32> {
    let config = DxConfig::default();
    PyDxGenerator32::new(config.bb, config.pp, config.kk, config.variant.ss(), seed)
}

#[pyfunction]
pub fn get_default_dx32_args(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    dx_config_to_py(py, &DxConfig::default())
}
