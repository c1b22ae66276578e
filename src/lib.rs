#![forbid(unsafe_code)]
//! disc_scatter: variable-radius Poisson disc sampling for organic object placement.
//!
//! Generates 2D points inside a rectangular region so that every pair keeps a
//! minimum separation derived from per-point radii, with near-uniform density
//! and no grid artifacts. Bridson's algorithm, generalized to a caller-supplied
//! set of allowed diameters.
//!
//! Modules:
//! - config: scatter configuration and eager validation
//! - sampler: the generation loop and public entry points
//! - error: error types and result alias
pub mod config;
pub mod error;
mod grid;
mod rng;
pub mod sampler;

/// Convenient re-exports for common types. Import with `use disc_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::config::ScatterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::sampler::{scatter, scatter_with_rng, SamplePoint};
}
