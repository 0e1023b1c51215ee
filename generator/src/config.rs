//! Generator configuration
//!
//! A small serde document describing which generator to build:
//!
//! ```json
//! { "seed": 1, "width": "u64", "strict": false, "draws": 2 }
//! ```
//!
//! Only `seed` is required.

use crate::error::RngError;
use crate::rng::{Width, Xorshift};
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_draws() -> usize {
    1
}

/// Configuration for building a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Initial state
    pub seed: u64,

    /// Integer semantics
    #[serde(default)]
    pub width: Width,

    /// Reject seeds that would leave the generator stuck at zero
    #[serde(default)]
    pub strict: bool,

    /// Number of values a caller should draw
    #[serde(default = "default_draws")]
    pub draws: usize,
}

impl GeneratorConfig {
    /// Config with defaults for everything but the seed
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::{GeneratorConfig, Width};
    ///
    /// let config = GeneratorConfig::new(42);
    /// assert_eq!(config.width, Width::U64);
    /// assert!(!config.strict);
    /// assert_eq!(config.draws, 1);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: Width::default(),
            strict: false,
            draws: default_draws(),
        }
    }

    /// The two streams of the demonstration harness, in run order
    ///
    /// Seed 1 drawn twice, then an independent seed 2 drawn once.
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::{GeneratorConfig, Width};
    ///
    /// let [first, second] = GeneratorConfig::demo(Width::U64, false);
    /// assert_eq!((first.seed, first.draws), (1, 2));
    /// assert_eq!((second.seed, second.draws), (2, 1));
    /// ```
    pub fn demo(width: Width, strict: bool) -> [Self; 2] {
        [
            Self {
                seed: 1,
                width,
                strict,
                draws: 2,
            },
            Self {
                seed: 2,
                width,
                strict,
                draws: 1,
            },
        ]
    }

    /// Parse a config from JSON
    ///
    /// # Errors
    /// [`RngError::InvalidConfig`] on malformed JSON, missing `seed`, or
    /// unknown fields.
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        serde_json::from_str(json).map_err(|e| RngError::InvalidConfig(e.to_string()))
    }

    /// Check the config without building anything
    ///
    /// # Errors
    /// - [`RngError::ZeroSeed`] if `strict` and the seed coerces to zero
    ///   at the configured width
    /// - [`RngError::InvalidConfig`] if `draws` is zero
    pub fn validate(&self) -> Result<(), RngError> {
        if self.draws == 0 {
            return Err(RngError::InvalidConfig(
                "draws must be positive".to_string(),
            ));
        }

        if self.strict {
            let coerced_zero = match self.width {
                Width::U64 => self.seed == 0,
                Width::Int32 => self.seed as u32 == 0,
            };
            if coerced_zero {
                return Err(RngError::ZeroSeed);
            }
        }

        Ok(())
    }

    /// Validate, then build a generator of type `G`
    ///
    /// # Errors
    /// Anything [`GeneratorConfig::validate`] returns, plus
    /// [`RngError::WidthMismatch`] when `G` computes at a different width
    /// than configured.
    ///
    /// # Example
    /// ```
    /// use xorshift64_core_rs::{GeneratorConfig, Xorshift64};
    ///
    /// let config = GeneratorConfig::from_json(r#"{"seed": 1}"#).unwrap();
    /// let mut rng: Xorshift64 = config.build().unwrap();
    /// assert_eq!(rng.next(), 129);
    /// ```
    pub fn build<G: Xorshift>(&self) -> Result<G, RngError> {
        if G::WIDTH != self.width {
            return Err(RngError::WidthMismatch {
                expected: self.width,
                actual: G::WIDTH,
            });
        }
        self.validate()?;

        debug!(seed = self.seed, width = %self.width, strict = self.strict, "building generator");
        Ok(G::from_seed(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Xorshift64, Xorshift64Int32};

    #[test]
    fn test_defaults_applied() {
        let config = GeneratorConfig::from_json(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config, GeneratorConfig::new(9));
    }

    #[test]
    fn test_demo_streams_in_run_order() {
        for width in [Width::U64, Width::Int32] {
            let [first, second] = GeneratorConfig::demo(width, true);
            assert_eq!((first.seed, first.draws), (1, 2));
            assert_eq!((second.seed, second.draws), (2, 1));
            assert!(first.strict && second.strict);
            assert_eq!((first.width, second.width), (width, width));
            assert!(first.validate().is_ok() && second.validate().is_ok());
        }
    }

    #[test]
    fn test_full_document() {
        let config = GeneratorConfig::from_json(
            r#"{"seed": 2, "width": "int32", "strict": true, "draws": 5}"#,
        )
        .unwrap();
        assert_eq!(config.seed, 2);
        assert_eq!(config.width, Width::Int32);
        assert!(config.strict);
        assert_eq!(config.draws, 5);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = GeneratorConfig::from_json(r#"{"seed": 1, "shift": 13}"#);
        assert!(matches!(result, Err(RngError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_seed_rejected() {
        let result = GeneratorConfig::from_json(r#"{"width": "u64"}"#);
        assert!(matches!(result, Err(RngError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_draws_rejected() {
        let mut config = GeneratorConfig::new(1);
        config.draws = 0;
        assert!(matches!(
            config.validate(),
            Err(RngError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_seed_lenient_by_default() {
        let config = GeneratorConfig::new(0);
        let rng: Xorshift64 = config.build().unwrap();
        assert!(rng.is_degenerate());
    }

    #[test]
    fn test_strict_zero_seed_per_width() {
        let mut config = GeneratorConfig::new(1u64 << 32);
        config.strict = true;
        assert!(config.build::<Xorshift64>().is_ok());

        config.width = Width::Int32;
        assert_eq!(
            config.build::<Xorshift64Int32>(),
            Err(RngError::ZeroSeed)
        );
    }

    #[test]
    fn test_width_mismatch() {
        let config = GeneratorConfig::new(1);
        assert_eq!(
            config.build::<Xorshift64Int32>(),
            Err(RngError::WidthMismatch {
                expected: Width::U64,
                actual: Width::Int32,
            })
        );
    }
}
