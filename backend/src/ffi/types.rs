//! Conversions across the FFI boundary
//!
//! Maps Rust configuration and errors onto Python dicts and exceptions.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use rand_core::{OsRng, RngCore};

use crate::config::{ConfigError, DxConfig, Pcg64TmwcConfig};

/// Invalid parameters surface as `ValueError`
///
/// # Arguments
///
/// * `err` - Validation failure from [`crate::config`]
///
/// # Returns
///
/// `ValueError` carrying the error's display text
pub fn config_error_to_py(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Seed material from the operating system (the `seed=None` case)
///
/// # Returns
///
/// `N` bytes from [`OsRng`]
///
/// # Errors
///
/// Raises RuntimeError if the OS entropy source fails.
pub fn entropy_bytes<const N: usize>() -> PyResult<[u8; N]> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to read OS entropy: {}", e)))?;
    Ok(bytes)
}

/// `{"bb_1": ..., "bb_2": ...}` for free multipliers
///
/// Power-of-two multipliers are reported by their value as well, since the
/// Python side only knows the free form.
///
/// # Errors
///
/// Propagates any failure inserting into the dict.
pub fn pcg64tmwc_config_to_py<'py>(
    py: Python<'py>,
    config: &Pcg64TmwcConfig,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("bb_1", config.multiplier_1.value())?;
    dict.set_item("bb_2", config.multiplier_2.value())?;
    Ok(dict)
}

/// `{"bb": ..., "pp": ..., "kk": ..., "ss": ...}`
///
/// # Errors
///
/// Propagates any failure inserting into the dict.
pub fn dx_config_to_py<'py>(py: Python<'py>, config: &DxConfig) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("bb", config.bb)?;
    dict.set_item("pp", config.pp)?;
    dict.set_item("kk", config.kk)?;
    dict.set_item("ss", config.variant.ss())?;
    Ok(dict)
}
