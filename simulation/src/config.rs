use crate::error::{SimulationError, SimulationResult};
use crate::outcome::CollisionPolicy;
use common::shapes::Rectangle;
use quadtree::quadtree::{Config, OutOfBounds, RefreshStrategy};

/// Construction-time settings of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub width: f32,
    pub height: f32,
    pub max_objects: usize,
    pub max_depth: u32,
    pub policy: CollisionPolicy,
    pub refresh: RefreshStrategy,
    /// Bodies spawned by `Simulation::new`.
    pub body_count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Upper bound of each velocity component, in units per second.
    pub speed_max: f32,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 800.0,
            height: 600.0,
            max_objects: 4,
            max_depth: 4,
            policy: CollisionPolicy::Recolor,
            refresh: RefreshStrategy::FullRebuild,
            body_count: 300,
            radius_min: 10.0,
            radius_max: 20.0,
            speed_max: 500.0,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> SimulationResult<()> {
        let invalid = |reason: &str| {
            Err(SimulationError::InvalidConfig {
                reason: reason.to_string(),
            })
        };
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return invalid("plane width and height must be finite and positive");
        }
        if self.max_objects == 0 {
            return invalid("max_objects must be at least 1");
        }
        if !self.radius_min.is_finite() || !self.radius_max.is_finite() || self.radius_min <= 0.0 {
            return invalid("radius_min must be finite and positive");
        }
        if self.radius_min > self.radius_max {
            return invalid("radius_min must not exceed radius_max");
        }
        if self.radius_max * 2.0 > self.width.min(self.height) {
            return invalid("bodies of radius_max must fit inside the plane");
        }
        if !self.speed_max.is_finite() || self.speed_max < 0.0 {
            return invalid("speed_max must be finite and non-negative");
        }
        Ok(())
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width, self.height)
    }

    pub fn quadtree_config(&self) -> Config {
        Config {
            max_objects: self.max_objects,
            max_depth: self.max_depth,
            // The integrator keeps bodies inside the plane, so anything outside
            // is a stray that queries must still see.
            out_of_bounds: OutOfBounds::RetainAtRoot,
            ..Config::default()
        }
    }
}
