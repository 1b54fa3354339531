//! Random graph configuration
//!
//! This module provides the settings shared by the Erdős–Rényi constructors: the
//! probability with which each candidate link is drawn and an optional seed that
//! makes generation reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{Error, Result};

/// Configuration for Erdős–Rényi graph generation
///
/// Every candidate link (each unordered pair for undirected graphs, each ordered pair
/// of distinct nodes for directed graphs) is included independently with
/// `probability`. When `seed` is set, [`RandomGraphConfig::rng`] yields the same
/// random source on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGraphConfig {
    /// Probability in `[0, 1]` that a candidate link is included (default: 0.5)
    pub probability: f64,

    /// Seed for the random source; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            probability: 0.5,
            seed: None,
        }
    }
}

impl RandomGraphConfig {
    /// Creates a configuration for sparse graphs
    ///
    /// Includes roughly one candidate link in ten.
    #[must_use]
    pub fn sparse() -> Self {
        Self {
            probability: 0.1,
            seed: None,
        }
    }

    /// Creates a configuration for dense graphs
    ///
    /// Includes roughly nine candidate links in ten.
    #[must_use]
    pub fn dense() -> Self {
        Self {
            probability: 0.9,
            seed: None,
        }
    }

    /// Returns this configuration with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns this configuration with a different link probability.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Checks that the probability lies within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProbability`] for values outside the range and for NaN.
    pub fn validate(&self) -> Result<()> {
        check_probability(self.probability)
    }

    /// Builds the random source described by this configuration.
    #[must_use]
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Rejects probabilities outside `[0, 1]`, NaN included.
pub(crate) fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(Error::InvalidProbability(probability))
    }
}
