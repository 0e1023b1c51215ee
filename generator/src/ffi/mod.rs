//! Python FFI bindings
//!
//! Exposes [`crate::Xorshift64`] to Python. Built only with the `pyo3`
//! feature.

pub mod generator;
