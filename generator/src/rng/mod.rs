//! Deterministic xorshift random number generation
//!
//! Two-stage xorshift (`x ^= x << 7; x ^= x >> 9`) in two integer widths:
//!
//! - [`Xorshift64`]: genuine 64-bit unsigned arithmetic
//! - [`Xorshift64Int32`]: 32-bit signed coercion before every shift, as
//!   dynamically-typed runtimes with 32-bit bitwise operators compute it
//!
//! The widths agree while the state stays below 2^31 and diverge after.
//! Neither is cryptographically secure.

mod int32;
mod xorshift;

use crate::config::GeneratorConfig;
use crate::error::RngError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use int32::Xorshift64Int32;
pub use xorshift::Xorshift64;

/// Left shift applied in the first stage
pub const SHIFT_LEFT: u32 = 7;

/// Logical right shift applied in the second stage
pub const SHIFT_RIGHT: u32 = 9;

/// Integer semantics a generator computes with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    /// Unsigned 64-bit state
    #[default]
    U64,
    /// Signed 32-bit state
    Int32,
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::U64 => write!(f, "u64"),
            Width::Int32 => write!(f, "int32"),
        }
    }
}

impl FromStr for Width {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u64" => Ok(Width::U64),
            "int32" => Ok(Width::Int32),
            other => Err(RngError::InvalidConfig(format!(
                "unknown width '{}' (expected u64 or int32)",
                other
            ))),
        }
    }
}

/// Common surface of both generator widths
///
/// Used by generic callers (config, checkpoints, the CLI) that do not care
/// which width they advance.
pub trait Xorshift: Sized {
    /// Value returned by one step
    type Output: Copy + fmt::Debug + fmt::Display + PartialEq;

    /// Width this generator computes with
    const WIDTH: Width;

    /// Create a generator whose state equals `seed` (coerced to the width)
    fn from_seed(seed: u64) -> Self;

    /// Advance one step and return the new state
    fn step(&mut self) -> Self::Output;

    /// Current state widened to a `u64` bit pattern
    fn state_bits(&self) -> u64;

    /// Rebuild a generator from [`Xorshift::state_bits`]
    fn from_state_bits(bits: u64) -> Self;
}

/// Values printed by the demonstration harness
///
/// Runs the streams of [`GeneratorConfig::demo`] at 64-bit width, each from
/// a fresh generator.
///
/// # Example
/// ```
/// use xorshift64_core_rs::rng::demo_sequence;
///
/// assert_eq!(demo_sequence(), vec![129, 16417, 258]);
/// ```
pub fn demo_sequence() -> Vec<u64> {
    GeneratorConfig::demo(Width::U64, false)
        .iter()
        .flat_map(|config| {
            let mut rng = Xorshift64::new(config.seed);
            (0..config.draws).map(move |_| rng.next())
        })
        .collect()
}
