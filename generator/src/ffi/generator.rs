//! PyO3 wrapper for Xorshift64
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::checkpoint::GeneratorSnapshot;
use crate::error::RngError;
use crate::rng::Xorshift64 as RustXorshift64;

fn to_py_err(err: RngError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Rust Xorshift64
///
/// # Example (from Python)
///
/// ```python
/// from xorshift64_core_rs import Xorshift64
///
/// rng = Xorshift64(1)
/// print(rng.next())  # 129
/// print(rng.next())  # 16417
///
/// saved = rng.snapshot_json(draws=2)
/// resumed = Xorshift64.from_snapshot_json(saved)
/// ```
#[pyclass(name = "Xorshift64")]
pub struct PyXorshift64 {
    inner: RustXorshift64,
}

#[pymethods]
impl PyXorshift64 {
    /// Create a generator
    ///
    /// Raises ValueError when `strict` is set and `seed` is zero.
    #[new]
    #[pyo3(signature = (seed, strict = false))]
    fn new(seed: u64, strict: bool) -> PyResult<Self> {
        let inner = if strict {
            RustXorshift64::new_strict(seed).map_err(to_py_err)?
        } else {
            RustXorshift64::new(seed)
        };
        Ok(PyXorshift64 { inner })
    }

    /// Advance one step and return the new state
    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    /// Current state
    fn state(&self) -> u64 {
        self.inner.state()
    }

    /// Serialize the current state as a JSON snapshot
    #[pyo3(signature = (draws = 0))]
    fn snapshot_json(&self, draws: u64) -> PyResult<String> {
        GeneratorSnapshot::capture(&self.inner, draws)
            .to_json()
            .map_err(to_py_err)
    }

    /// Rebuild a generator from `snapshot_json` output
    #[staticmethod]
    fn from_snapshot_json(json: &str) -> PyResult<Self> {
        let inner = GeneratorSnapshot::from_json(json)
            .and_then(|snapshot| snapshot.restore())
            .map_err(to_py_err)?;
        Ok(PyXorshift64 { inner })
    }

    fn __repr__(&self) -> String {
        format!("Xorshift64(state={})", self.inner.state())
    }
}
