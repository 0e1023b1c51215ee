//! Two-stage xorshift over a 64-bit unsigned state
//!
//! # Algorithm
//!
//! ```text
//! x ^= x << 7
//! x ^= x >> 9   (logical, zero-filling)
//! ```
//!
//! Both stages are invertible, so the step is a bijection on `u64`: zero maps
//! to zero and nothing else does. A generator seeded with zero returns zero
//! forever, which is why the seed must be non-zero.
//!
//! # Determinism
//!
//! Same seed → same sequence. The returned value is the new state, so the next
//! value depends only on the last one.

use super::{Width, Xorshift, SHIFT_LEFT, SHIFT_RIGHT};
use crate::error::RngError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Xorshift generator with a 64-bit unsigned state
///
/// Advancing needs `&mut self`, so one instance can't be stepped from two
/// places at once without a lock around it.
///
/// # Example
/// ```
/// use xorshift64_core_rs::Xorshift64;
///
/// let mut rng = Xorshift64::new(1);
/// assert_eq!(rng.next(), 129);
/// assert_eq!(rng.next(), 16417);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    /// Internal state, also the last returned value
    state: u64,
}

impl Xorshift64 {
    /// Create a new generator with given seed
    ///
    /// The seed is not checked. A zero seed yields an all-zero stream; use
    /// [`Xorshift64::new_strict`] to reject it.
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::Xorshift64;
    ///
    /// let rng = Xorshift64::new(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a new generator, rejecting a zero seed
    ///
    /// # Errors
    /// Returns [`RngError::ZeroSeed`] if `seed == 0`.
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::{RngError, Xorshift64};
    ///
    /// assert!(Xorshift64::new_strict(7).is_ok());
    /// assert_eq!(Xorshift64::new_strict(0), Err(RngError::ZeroSeed));
    /// ```
    pub fn new_strict(seed: u64) -> Result<Self, RngError> {
        if seed == 0 {
            debug!(width = %Width::U64, "rejected zero seed");
            return Err(RngError::ZeroSeed);
        }
        Ok(Self::new(seed))
    }

    /// Advance the state one step and return it
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::Xorshift64;
    ///
    /// let mut rng = Xorshift64::new(2);
    /// assert_eq!(rng.next(), 258);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << SHIFT_LEFT;
        x ^= x >> SHIFT_RIGHT;
        self.state = x;
        x
    }

    /// Get current state (for checkpointing/replay)
    ///
    /// A generator created with this value continues the same stream.
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::Xorshift64;
    ///
    /// let mut rng = Xorshift64::new(12345);
    /// rng.next();
    ///
    /// let mut replay = Xorshift64::new(rng.state());
    /// assert_eq!(replay.next(), rng.next());
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }

    /// True once the state is zero and every further value is zero
    pub fn is_degenerate(&self) -> bool {
        self.state == 0
    }

    /// Endless iterator over successive values
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::Xorshift64;
    ///
    /// let mut rng = Xorshift64::new(1);
    /// let first: Vec<u64> = rng.stream().take(2).collect();
    /// assert_eq!(first, vec![129, 16417]);
    /// assert_eq!(rng.state(), 16417);
    /// ```
    pub fn stream(&mut self) -> impl Iterator<Item = u64> + '_ {
        std::iter::repeat_with(move || self.next())
    }
}

impl Xorshift for Xorshift64 {
    type Output = u64;

    const WIDTH: Width = Width::U64;

    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    fn step(&mut self) -> u64 {
        self.next()
    }

    fn state_bits(&self) -> u64 {
        self.state
    }

    fn from_state_bits(bits: u64) -> Self {
        Self::new(bits)
    }
}
