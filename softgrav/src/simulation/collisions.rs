//! Collision resolver
//!
//! Three passes over the predicted positions, each pruned by the bounding
//! box broad phase:
//! - body against body: symmetric push-apart of overlapping vertex spheres
//! - body against planet: the vertex is pushed out of the immovable planet
//! - body against black hole: a single touching vertex captures the body
//!
//! Captured bodies take part in none of them.

use tracing::debug;

use crate::simulation::attractors::{Attractor, BlackHole, Planet};
use crate::simulation::bounding_box::{predicted_boxes, Aabb};
use crate::simulation::params::SimulationParameters;
use crate::simulation::states::{BlackHoleId, DeformableBody, NVec3};

/// Separate two overlapping vertex spheres of radius `r`
///
/// Both vertices move by half the penetration depth, in opposite
/// directions. Coincident vertices have no separating direction and are
/// left alone. Returns whether the pair was in contact.
pub fn separate_pair(p_left: &mut NVec3, p_right: &mut NVec3, r: f64) -> bool {
    let left_to_right = *p_right - *p_left;
    let n = left_to_right.norm();
    if n >= 2.0 * r || n == 0.0 {
        return false;
    }
    let half_push = left_to_right / n * (2.0 * r - n) * 0.5;
    *p_left -= half_push;
    *p_right += half_push;
    true
}

/// Push vertex `p` out of a sphere of radius `reach` centered on `center`
///
/// Returns whether the vertex was inside.
pub fn push_out_of_sphere(p: &mut NVec3, center: &NVec3, reach: f64) -> bool {
    let outward = *p - center;
    let n = outward.norm();
    if n >= reach || n == 0.0 {
        return false;
    }
    *p += outward / n * (reach - n);
    true
}

/// Resolve vertex overlaps between every pair of free bodies
///
/// Returns the number of vertex pairs that were pushed apart.
pub fn collision_between_bodies(bodies: &mut [DeformableBody], params: &SimulationParameters) -> usize {
    let r = params.collision_radius;
    let bbox = predicted_boxes(bodies, r);
    let mut contacts = 0;

    for i in 0..bodies.len() {
        for j in 0..i {
            if !bbox[i].overlaps(&bbox[j]) {
                continue;
            }
            // j < i, so j lives in `head` and i is the first of `tail`
            let (head, tail) = bodies.split_at_mut(i);
            let right = &mut head[j];
            let left = &mut tail[0];
            if left.is_captured() || right.is_captured() {
                continue;
            }

            // objects MAY collide
            for p_left in left.position_predict.iter_mut() {
                for p_right in right.position_predict.iter_mut() {
                    if separate_pair(p_left, p_right, r) {
                        contacts += 1;
                    }
                }
            }
        }
    }
    contacts
}

/// Push free bodies out of every planet they penetrate
///
/// Returns the number of vertex corrections applied.
pub fn collision_with_planets(
    bodies: &mut [DeformableBody],
    planets: &[Planet],
    params: &SimulationParameters,
) -> usize {
    let r = params.collision_radius;
    let bbox = predicted_boxes(bodies, r);
    let planet_bbox: Vec<Aabb> = planets.iter().map(Attractor::bounding_box).collect();
    let mut contacts = 0;

    for (body, body_box) in bodies.iter_mut().zip(bbox.iter()) {
        if body.is_captured() {
            continue;
        }
        for (planet, planet_box) in planets.iter().zip(planet_bbox.iter()) {
            if !body_box.overlaps(planet_box) {
                continue;
            }
            let center = planet.center();
            let reach = r + planet.radius();
            for p in body.position_predict.iter_mut() {
                if push_out_of_sphere(p, &center, reach) {
                    contacts += 1;
                }
            }
        }
    }
    contacts
}

/// Capture every free body that touches a black hole
///
/// The first black hole touched in iteration order keeps the body, even
/// when a later one is touched in the same pass, so a capture never moves
/// to another black hole. No position correction is applied. Returns the
/// bodies captured by this pass as `(body index, black hole)`.
pub fn collision_with_black_holes(
    bodies: &mut [DeformableBody],
    black_holes: &[BlackHole],
    params: &SimulationParameters,
) -> Vec<(usize, BlackHoleId)> {
    let r = params.collision_radius;
    let bbox = predicted_boxes(bodies, r);
    let black_hole_bbox: Vec<Aabb> = black_holes.iter().map(Attractor::bounding_box).collect();
    let mut captured = Vec::new();

    for (i, (body, body_box)) in bodies.iter_mut().zip(bbox.iter()).enumerate() {
        if body.is_captured() {
            continue;
        }
        let hit = black_holes
            .iter()
            .zip(black_hole_bbox.iter())
            .position(|(black_hole, bh_box)| {
                if !body_box.overlaps(bh_box) {
                    return false;
                }
                let center = black_hole.center();
                let reach = r + black_hole.radius();
                body.position_predict.iter().any(|p| (center - p).norm() < reach)
            });

        if let Some(j) = hit {
            let id = BlackHoleId(j);
            if body.capture(id) {
                debug!(body = i, black_hole = j, "body captured by black hole");
                captured.push((i, id));
            }
        }
    }
    captured
}
