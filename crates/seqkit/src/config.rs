//! # Sampling Configuration
//!
//! Reproducibility settings for the sampling operators, loadable from TOML.
//!
//! ```toml
//! seed = 42
//! ```
//!
//! Without a `seed`, the randomizer is seeded from operating-system entropy.

use crate::SeqError;
use crate::sampling::StdRandomizer;
use serde::{Deserialize, Serialize};

/// Settings for building a [`StdRandomizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    /// Fixed seed for deterministic sampling.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SamplingConfig {
    /// Configuration with a fixed seed.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SeqError> {
        toml::from_str(text).map_err(|e| SeqError::InvalidConfig(e.to_string()))
    }

    /// Build the randomizer this configuration describes.
    #[must_use]
    pub fn randomizer(&self) -> StdRandomizer {
        match self.seed {
            Some(seed) => StdRandomizer::seeded(seed),
            None => StdRandomizer::new(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
