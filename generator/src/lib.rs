//! Xorshift64 Core - Rust Engine
//!
//! Minimal deterministic pseudorandom generator from the xorshift family.
//!
//! # Architecture
//!
//! - **rng**: Generators ([`Xorshift64`], [`Xorshift64Int32`]) and the
//!   [`rng::Xorshift`] trait they share
//! - **config**: JSON-loadable generator configuration
//! - **checkpoint**: Save/restore generator state
//! - **error**: Errors from the opt-in strict and persistence surfaces
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence
//! 2. Seeds must be non-zero; zero is accepted and yields zeroes forever
//!    unless strict construction is used
//! 3. Each generator owns its state; advancing takes `&mut self`
//! 4. Not cryptographically secure

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::GeneratorSnapshot;
pub use config::GeneratorConfig;
pub use error::RngError;
pub use rng::{Width, Xorshift, Xorshift64, Xorshift64Int32};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xorshift64_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyXorshift64>()?;
    Ok(())
}
