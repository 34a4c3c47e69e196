//! Fixed-step orchestration of one simulation update
//!
//! One call to [`simulate_step`]:
//! 1. refreshes every center of mass from `position`
//! 2. applies gravity and predicts positions (free bodies)
//! 3. runs `collision_steps` constraint iterations, each made of the three
//!    collision passes followed by shape matching
//! 4. finalizes velocities and positions, free bodies by PBD velocity
//!    reconstruction, captured bodies by the black-hole spiral
//! 5. walks the player (body 0) along the surface of the planet holding it
//!
//! Every precondition is checked before anything is written, so a failed
//! step leaves the bodies untouched.

use tracing::trace;

use crate::error::{Result, SimulationError};
use crate::simulation::attractors::{Attractor, BlackHole, Planet};
use crate::simulation::camera::CameraView;
use crate::simulation::collisions::{collision_between_bodies, collision_with_black_holes, collision_with_planets};
use crate::simulation::forces::planetary_attraction;
use crate::simulation::params::SimulationParameters;
use crate::simulation::shape_matching::shape_matching;
use crate::simulation::states::{average, normalize_or_zero, DeformableBody, NVec3};

/// Distance a captured vertex travels along its spiral velocity each step
pub const SPIRAL_STEP: f64 = 0.015;

/// Fraction of the vertex-to-black-hole vector added each step
pub const SPIRAL_PULL: f64 = 0.02;

/// Displacement the player is walked by each step, before being bent
/// tangent to the planet surface
pub const PLAYER_STRIDE: [f64; 3] = [0.01, 0.0, 0.0];

/// Advance the whole scene by `params.time_step`
pub fn simulate_step<C: CameraView + ?Sized>(
    bodies: &mut [DeformableBody],
    planets: &[Planet],
    black_holes: &[BlackHole],
    params: &SimulationParameters,
    camera: &C,
) -> Result<()> {
    check_preconditions(bodies, black_holes, params)?;

    let dt = params.time_step;

    // Center of mass first, gravity is evaluated there
    for body in bodies.iter_mut() {
        body.com = average(&body.position);
    }

    planetary_attraction(bodies, planets, black_holes, params);

    let mut contacts = 0;
    let mut captures = 0;
    for _ in 0..params.collision_steps {
        contacts += collision_between_bodies(bodies, params);
        contacts += collision_with_planets(bodies, planets, params);
        captures += collision_with_black_holes(bodies, black_holes, params).len();
        shape_matching(bodies, params);
    }

    let camera_position = camera.position();
    for body in bodies.iter_mut() {
        match body.captured_by() {
            Some(id) => spiral_into(body, &black_holes[id.0], &camera_position, params),
            None => settle(body, dt),
        }
    }

    if let Some(player) = bodies.first_mut() {
        walk_on_planet(player, planets);
    }

    trace!(bodies = bodies.len(), contacts, captures, "step done");
    Ok(())
}

/// Reject inputs a step cannot run on
pub fn check_preconditions(
    bodies: &[DeformableBody],
    black_holes: &[BlackHole],
    params: &SimulationParameters,
) -> Result<()> {
    params.validate()?;
    for (i, body) in bodies.iter().enumerate() {
        body.validate(i)?;
        if let Some(id) = body.captured_by() {
            if id.0 >= black_holes.len() {
                return Err(SimulationError::UnknownBlackHole {
                    body: i,
                    id: id.0,
                    count: black_holes.len(),
                });
            }
        }
    }
    Ok(())
}

/// PBD velocity reconstruction, then commit the prediction
pub fn settle(body: &mut DeformableBody, dt: f64) {
    let DeformableBody {
        position,
        position_predict,
        velocity,
        ..
    } = body;

    for ((p, p_pred), v) in position.iter_mut().zip(position_predict.iter()).zip(velocity.iter_mut()) {
        *v = (p_pred - *p) / dt;
        *p = *p_pred;
    }
}

/// Spiral-collapse kinematics of a captured body
///
/// The body shrinks toward its center of mass, swirls around the line of
/// sight and drifts into the black hole. Velocities are rewritten from the
/// swirl, not integrated.
pub fn spiral_into(
    body: &mut DeformableBody,
    black_hole: &BlackHole,
    camera_position: &NVec3,
    params: &SimulationParameters,
) {
    let dt = params.time_step;
    let scale = 1.0 - 2.0 * dt / params.black_hole_timer;
    let com = body.com;
    let to_black_hole = black_hole.center() - com;

    let DeformableBody { position, velocity, .. } = body;
    for (p, v) in position.iter_mut().zip(velocity.iter_mut()) {
        *p = com + scale * (*p - com);
        *v = to_black_hole.cross(&(camera_position - *p)) / dt;
        *p += SPIRAL_STEP * normalize_or_zero(v) + SPIRAL_PULL * to_black_hole;
    }

    body.capture_elapsed += dt;
}

/// Move the player tangentially on every planet holding it
///
/// Each attracting planet contributes one stride along its own surface
/// tangent. The predicate and the normals use the centroid from the start
/// of the walk.
pub fn walk_on_planet(player: &mut DeformableBody, planets: &[Planet]) {
    if player.is_captured() {
        return;
    }
    player.com = average(&player.position);
    let com = player.com;

    let stride = NVec3::from(PLAYER_STRIDE);
    let amplitude = stride.norm();
    for planet in planets.iter().filter(|p| p.should_attract(&com)) {
        let normal = normalize_or_zero(&(com - planet.center()));
        let direction = normal.cross(&(stride / amplitude));
        player.translate(direction * amplitude);
    }
}
