//! Numerical and physical parameters for the simulation
//!
//! `SimulationParameters` holds runtime settings:
//! - particle collision radius shared by every pairwise test,
//! - elasticity (and the reserved plasticity ratio),
//! - air friction, constraint iteration count and time step,
//! - the duration constant of the black-hole spiral

use crate::error::{Result, SimulationError};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub collision_radius: f64, // radius of the sphere around each vertex
    pub elasticity: f64, // 0 = snap to rigid shape, 1 = ignore shape matching
    pub plasticity: f64, // reserved, not applied by the solver
    pub friction: f64, // velocity damping per unit time
    pub collision_steps: usize, // constraint iterations per step
    pub time_step: f64, // fixed dt
    pub black_hole_timer: f64, // controls how fast a captured body shrinks
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            collision_radius: 0.04,
            elasticity: 0.0,
            plasticity: 0.0,
            friction: 1.0,
            collision_steps: 5,
            time_step: 0.005,
            black_hole_timer: 1.0,
        }
    }
}

impl SimulationParameters {
    /// Reject values the solver cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.collision_radius.is_finite() && self.collision_radius >= 0.0) {
            return Err(invalid("collision_radius", "must be non-negative", self.collision_radius));
        }
        if !(0.0..=1.0).contains(&self.elasticity) {
            return Err(invalid("elasticity", "must lie in [0, 1]", self.elasticity));
        }
        if !(0.0..=1.0).contains(&self.plasticity) {
            return Err(invalid("plasticity", "must lie in [0, 1]", self.plasticity));
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(invalid("friction", "must be non-negative", self.friction));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(invalid("time_step", "must be positive", self.time_step));
        }
        if !(self.black_hole_timer.is_finite() && self.black_hole_timer > 0.0) {
            return Err(invalid("black_hole_timer", "must be positive", self.black_hole_timer));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, rule: &str, value: f64) -> SimulationError {
    SimulationError::InvalidParameter {
        name,
        reason: format!("{rule}, got {value}"),
    }
}
