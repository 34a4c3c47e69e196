//! Gravity resolver: external acceleration and position prediction
//!
//! Every free body feels at most one planet and at most one black hole,
//! evaluated at its center of mass. The first planet in range sets the
//! gravity, then the first black hole in range overwrites it. A captured
//! body gets nothing here, its motion comes from the spiral finalize.

use crate::simulation::attractors::{first_pull, BlackHole, Planet};
use crate::simulation::params::SimulationParameters;
use crate::simulation::states::{DeformableBody, NVec3};

/// Acceleration acting on a body whose center of mass is `com`
pub fn combined_gravity(com: &NVec3, planets: &[Planet], black_holes: &[BlackHole]) -> NVec3 {
    let mut gravity = first_pull(planets, com).unwrap_or_else(NVec3::zeros);

    // Black holes dominate: a match replaces the planet's pull
    if let Some(pull) = first_pull(black_holes, com) {
        gravity = pull;
    }
    gravity
}

/// Integrate gravity and friction into the velocity of every free body and
/// predict its next positions
///
/// Expects `com` to be up to date with `position`.
pub fn planetary_attraction(
    bodies: &mut [DeformableBody],
    planets: &[Planet],
    black_holes: &[BlackHole],
    params: &SimulationParameters,
) {
    let dt = params.time_step;
    let damping = 1.0 - dt * params.friction;

    for body in bodies.iter_mut().filter(|b| !b.is_captured()) {
        let gravity = combined_gravity(&body.com, planets, black_holes);

        let DeformableBody {
            position,
            position_predict,
            velocity,
            ..
        } = body;

        for ((v, p), p_pred) in velocity.iter_mut().zip(position.iter()).zip(position_predict.iter_mut()) {
            // drag + gravity
            *v = *v * damping + dt * gravity;
            *p_pred = p + dt * *v;
        }
    }
}
