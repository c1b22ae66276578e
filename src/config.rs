//! Scatter configuration and eager validation.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a variable-radius disc scatter.
///
/// Every generated point draws one of the allowed `diameters`; its radius is
/// half that diameter. Validation is eager: [`ScatterConfig::validate`] runs
/// before any sampler state is built, so generation itself cannot fail.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScatterConfig {
    /// Allowed point diameters in world units. Must be non-empty, all > 0.
    pub diameters: Vec<f32>,
    /// Size of the sampled region in world units, both components > 0.
    pub region_extent: Vec2,
    /// Translation applied once to every output position.
    pub region_offset: Vec2,
    /// Candidate attempts per active point before it is retired.
    /// Larger values pack tighter at higher cost.
    pub rejection_budget: u32,
    /// Seed for the deterministic RNG stream.
    pub seed: u64,
}

impl ScatterConfig {
    /// Creates a new [`ScatterConfig`] with the given diameters and region size.
    pub fn new(diameters: Vec<f32>, region_extent: Vec2) -> Self {
        Self {
            diameters,
            region_extent,
            region_offset: Vec2::ZERO,
            rejection_budget: 30,
            seed: 0,
        }
    }

    /// Sets the translation applied to final output positions.
    pub fn with_region_offset(mut self, region_offset: Vec2) -> Self {
        self.region_offset = region_offset;
        self
    }

    /// Sets the per-point candidate budget.
    pub fn with_rejection_budget(mut self, rejection_budget: u32) -> Self {
        self.rejection_budget = rejection_budget;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.diameters.is_empty() {
            return Err(Error::InvalidConfig("diameters must not be empty".into()));
        }
        if self.diameters.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(Error::InvalidConfig(
                "diameters must all be finite and > 0".into(),
            ));
        }
        if !self.region_extent.is_finite()
            || self.region_extent.x <= 0.0
            || self.region_extent.y <= 0.0
        {
            return Err(Error::InvalidConfig(
                "region_extent must be > 0 in both components".into(),
            ));
        }
        if self.rejection_budget == 0 {
            return Err(Error::InvalidConfig("rejection_budget must be > 0".into()));
        }

        Ok(())
    }

    /// Smallest allowed diameter. Only meaningful after validation.
    pub(crate) fn min_diameter(&self) -> f32 {
        self.diameters.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Largest allowed diameter. Only meaningful after validation.
    pub(crate) fn max_diameter(&self) -> f32 {
        self.diameters.iter().copied().fold(0.0, f32::max)
    }
}
