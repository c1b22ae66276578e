//! Variable-radius Poisson disc sampler.
//!
//! Bridson's algorithm generalized to per-point radii drawn from a discrete
//! diameter set: an active frontier of accepted points spawns candidates in an
//! annulus, a dense occupancy grid answers collision queries, and exhausted
//! frontier entries are retired until no active point remains.
use std::f32::consts::PI;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::config::ScatterConfig;
use crate::error::Result;
use crate::grid::OccupancyGrid;
use crate::rng::{rand01, rand_index};

/// A placed disc: position in world units and its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplePoint {
    /// Final position, region offset already applied.
    pub position: Vec2,
    /// Half of the diameter drawn for this point.
    pub radius: f32,
}

/// Run a scatter with an RNG seeded from the configuration.
pub fn scatter(config: &ScatterConfig) -> Result<Vec<SamplePoint>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    scatter_with_rng(config, &mut rng)
}

/// Run a scatter with a caller-provided RNG stream.
///
/// All randomness is consumed from `rng` in a fixed order, so identical
/// configurations and RNG streams reproduce identical output sequences.
pub fn scatter_with_rng(
    config: &ScatterConfig,
    rng: &mut dyn RngCore,
) -> Result<Vec<SamplePoint>> {
    config.validate()?;
    Ok(DiscSampler::new(config).run(rng))
}

struct DiscSampler<'a> {
    config: &'a ScatterConfig,
    min_diameter: f32,
    max_diameter: f32,
    grid: OccupancyGrid,
    /// Indices into `points` still eligible to spawn children.
    frontier: Vec<usize>,
    points: Vec<SamplePoint>,
}

impl<'a> DiscSampler<'a> {
    fn new(config: &'a ScatterConfig) -> Self {
        let min_diameter = config.min_diameter();
        let max_diameter = config.max_diameter();

        Self {
            config,
            min_diameter,
            max_diameter,
            grid: OccupancyGrid::new(config.region_extent, min_diameter, max_diameter),
            frontier: Vec::new(),
            points: Vec::new(),
        }
    }

    fn run(mut self, rng: &mut dyn RngCore) -> Vec<SamplePoint> {
        let seed_radius = self.draw_radius(rng);
        self.accept(self.config.region_extent * 0.5, seed_radius);

        let mut retired = 0usize;
        while !self.frontier.is_empty() {
            let pick = rand_index(rng, self.frontier.len());
            let active = self.points[self.frontier[pick]].position;
            let radius = self.draw_radius(rng);

            match self.try_place(active, radius, rng) {
                Some(position) => self.accept(position, radius),
                None => {
                    self.frontier.swap_remove(pick);
                    retired += 1;
                }
            }
        }

        debug!(
            points = self.points.len(),
            retired, "disc scatter complete"
        );

        for point in &mut self.points {
            point.position += self.config.region_offset;
        }
        self.points
    }

    fn draw_radius(&self, rng: &mut dyn RngCore) -> f32 {
        let diameters = &self.config.diameters;
        diameters[rand_index(rng, diameters.len())] * 0.5
    }

    /// Propose candidates around `active` until one is accepted or the
    /// rejection budget runs out. Pure with respect to frontier and output;
    /// only the grid and prior points are consulted.
    fn try_place(&self, active: Vec2, radius: f32, rng: &mut dyn RngCore) -> Option<Vec2> {
        let inner_sq = self.min_diameter * self.min_diameter;
        let outer_sq = 4.0 * self.max_diameter * self.max_diameter;
        let extent = self.config.region_extent;

        for _ in 0..self.config.rejection_budget {
            let angle = rand01(rng) * 2.0 * PI;
            // Uniform over the annulus area, not the radius, so density stays
            // even instead of clustering toward the inner edge.
            let magnitude = (inner_sq + rand01(rng) * (outer_sq - inner_sq)).sqrt();
            let candidate = active + magnitude * Vec2::new(angle.sin(), angle.cos());

            if candidate.x < 0.0
                || candidate.x > extent.x
                || candidate.y < 0.0
                || candidate.y > extent.y
            {
                continue;
            }
            if self.collides(candidate, radius) {
                continue;
            }

            return Some(candidate);
        }

        None
    }

    fn collides(&self, candidate: Vec2, radius: f32) -> bool {
        for index in self.grid.occupants_near(candidate) {
            let occupant = &self.points[index];
            let min_dist = occupant.radius + radius;
            if candidate.distance_squared(occupant.position) < min_dist * min_dist {
                return true;
            }
        }
        false
    }

    fn accept(&mut self, position: Vec2, radius: f32) {
        let index = self.points.len();
        self.points.push(SamplePoint { position, radius });
        self.grid.place(position, index);
        self.frontier.push(index);
    }
}
