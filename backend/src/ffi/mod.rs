//! Python bindings
//!
//! Exposes the generators under the names the `nextrandom` Python package
//! uses (`PCG64TMWC`, `DXGenerator32`) together with its helper functions.

pub mod generators;
pub mod types;

use pyo3::prelude::*;

pub use generators::{PyDxGenerator32, PyPcg64Tmwc};

/// Register classes and functions on the extension module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPcg64Tmwc>()?;
    m.add_class::<PyDxGenerator32>()?;
    m.add_function(wrap_pyfunction!(generators::custom_pcg64tmwc, m)?)?;
    m.add_function(wrap_pyfunction!(generators::default_pcg64tmwc, m)?)?;
    m.add_function(wrap_pyfunction!(generators::get_default_pcg64tmwc_args, m)?)?;
    m.add_function(wrap_pyfunction!(generators::custom_dx32, m)?)?;
    m.add_function(wrap_pyfunction!(generators::default_dx32, m)?)?;
    m.add_function(wrap_pyfunction!(generators::get_default_dx32_args, m)?)?;
    Ok(())
}
