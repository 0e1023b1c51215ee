//! Two-stage xorshift with 32-bit signed coercion
//!
//! Runtimes whose bitwise operators work on 32-bit integers compute the same
//! recurrence with every operand truncated to `i32` first. The left shift
//! drops bits past bit 31 and the logical right shift operates on the
//! unsigned view. Output is signed.
//!
//! This matches [`super::Xorshift64`] exactly while the state stays below
//! 2^31. Beyond that the two streams diverge.

use super::{Width, Xorshift, SHIFT_LEFT, SHIFT_RIGHT};
use crate::error::RngError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Xorshift generator with a 32-bit signed state
///
/// # Example
/// ```
/// use xorshift64_core_rs::Xorshift64Int32;
///
/// let mut rng = Xorshift64Int32::new(1u64 << 31);
/// assert_eq!(rng.state(), i32::MIN);
/// assert_eq!(rng.next(), -2143289344);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64Int32 {
    state: i32,
}

impl Xorshift64Int32 {
    /// Create a new generator, keeping the low 32 bits of the seed
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed as u32 as i32,
        }
    }

    /// Create a new generator, rejecting a seed that truncates to zero
    ///
    /// # Errors
    /// Returns [`RngError::ZeroSeed`] when the low 32 bits of `seed` are all
    /// zero, which includes `1 << 32`.
    pub fn new_strict(seed: u64) -> Result<Self, RngError> {
        let rng = Self::new(seed);
        if rng.is_degenerate() {
            debug!(width = %Width::Int32, seed, "rejected zero seed");
            return Err(RngError::ZeroSeed);
        }
        Ok(rng)
    }

    /// Advance the state one step and return it
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i32 {
        let mut x = self.state;
        x ^= x << SHIFT_LEFT;
        x ^= ((x as u32) >> SHIFT_RIGHT) as i32;
        self.state = x;
        x
    }

    /// Get current state
    pub fn state(&self) -> i32 {
        self.state
    }

    /// True once the state is zero and every further value is zero
    pub fn is_degenerate(&self) -> bool {
        self.state == 0
    }
}

impl Xorshift for Xorshift64Int32 {
    type Output = i32;

    const WIDTH: Width = Width::Int32;

    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    fn step(&mut self) -> i32 {
        self.next()
    }

    // Sign-extended so negative states read the same as their i64 value
    fn state_bits(&self) -> u64 {
        self.state as i64 as u64
    }

    fn from_state_bits(bits: u64) -> Self {
        Self::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_one_sequence() {
        let mut rng = Xorshift64Int32::new(1);
        let values: Vec<i32> = (0..6).map(|_| rng.next()).collect();
        assert_eq!(
            values,
            vec![129, 16417, 2113673, 268960779, 335545483, 336085035]
        );
    }

    #[test]
    fn test_seed_two_first_value() {
        let mut rng = Xorshift64Int32::new(2);
        assert_eq!(rng.next(), 258);
    }

    #[test]
    fn test_seed_truncated_to_low_bits() {
        assert_eq!(Xorshift64Int32::new(0x1_0000_0005).state(), 5);
        assert_eq!(Xorshift64Int32::new(u64::MAX).state(), -1);
    }

    #[test]
    fn test_strict_rejects_truncated_zero() {
        assert_eq!(Xorshift64Int32::new_strict(0), Err(RngError::ZeroSeed));
        assert_eq!(
            Xorshift64Int32::new_strict(1u64 << 32),
            Err(RngError::ZeroSeed)
        );
        assert!(Xorshift64Int32::new_strict(3).is_ok());
    }

    #[test]
    fn test_left_shift_discards_high_bits() {
        // 1 << 25 shifted by 7 leaves bit 32, which does not exist in i32
        let mut rng = Xorshift64Int32::new(1u64 << 25);
        assert_eq!(rng.next(), (1 << 25) ^ (1 << 16));
    }

    #[test]
    fn test_negative_state_bits_roundtrip() {
        let mut rng = Xorshift64Int32::new(1u64 << 31);
        rng.next();
        assert!(rng.state() < 0);

        let bits = rng.state_bits();
        assert_eq!(bits as i64, rng.state() as i64);
        assert_eq!(Xorshift64Int32::from_state_bits(bits), rng);
    }

    #[test]
    fn test_zero_seed_degenerate() {
        let mut rng = Xorshift64Int32::new(0);
        for _ in 0..100 {
            assert_eq!(rng.next(), 0);
        }
    }
}
