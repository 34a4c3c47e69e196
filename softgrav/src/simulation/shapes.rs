//! Rest-shape primitives
//!
//! Point sets a deformable body can be built from. Every primitive is
//! centered on the origin; `DeformableBody::set_position_and_velocity`
//! places it in the scene.

use std::f64::consts::PI;

use crate::error::{Result, SimulationError};
use crate::simulation::states::{average, NVec3};

/// Translate `points` so their centroid sits on the origin
pub fn centered(mut points: Vec<NVec3>) -> Vec<NVec3> {
    let c = average(&points);
    for p in points.iter_mut() {
        *p -= c;
    }
    points
}

/// Ellipsoid surface with semi-axes `size`, sampled on a `samples_u` x
/// `samples_v` longitude/latitude grid
///
/// Pole rows are emitted once each, not once per longitude.
pub fn ellipsoid(size: NVec3, samples_u: usize, samples_v: usize) -> Result<Vec<NVec3>> {
    if samples_u < 3 {
        return Err(too_few("samples_u", samples_u, 3));
    }
    if samples_v < 3 {
        return Err(too_few("samples_v", samples_v, 3));
    }

    let mut points = Vec::with_capacity(samples_u * (samples_v - 2) + 2);
    points.push(NVec3::new(0.0, 0.0, size.z));
    for kv in 1..samples_v - 1 {
        let phi = PI * kv as f64 / (samples_v - 1) as f64;
        for ku in 0..samples_u {
            let theta = 2.0 * PI * ku as f64 / samples_u as f64;
            points.push(NVec3::new(
                size.x * theta.cos() * phi.sin(),
                size.y * theta.sin() * phi.sin(),
                size.z * phi.cos(),
            ));
        }
    }
    points.push(NVec3::new(0.0, 0.0, -size.z));

    Ok(centered(points))
}

pub fn sphere(radius: f64, samples_u: usize, samples_v: usize) -> Result<Vec<NVec3>> {
    ellipsoid(NVec3::repeat(radius), samples_u, samples_v)
}

/// Surface lattice of the cube `[-half_extent, half_extent]^3` with
/// `samples` points per edge
pub fn cubic_grid(half_extent: f64, samples: usize) -> Result<Vec<NVec3>> {
    if samples < 2 {
        return Err(too_few("samples", samples, 2));
    }
    let last = samples - 1;
    let coord = |k: usize| -half_extent + 2.0 * half_extent * k as f64 / last as f64;

    let mut points = Vec::new();
    for kx in 0..samples {
        for ky in 0..samples {
            for kz in 0..samples {
                let on_surface = [kx, ky, kz].iter().any(|&k| k == 0 || k == last);
                if on_surface {
                    points.push(NVec3::new(coord(kx), coord(ky), coord(kz)));
                }
            }
        }
    }
    Ok(centered(points))
}

/// Lateral surface of a cylinder of `radius` whose axis runs along x from
/// `-half_length` to `half_length`
///
/// `samples_along` rings of `samples_around` points each, caps left open.
pub fn cylinder(radius: f64, half_length: f64, samples_around: usize, samples_along: usize) -> Result<Vec<NVec3>> {
    if samples_around < 3 {
        return Err(too_few("samples_around", samples_around, 3));
    }
    if samples_along < 2 {
        return Err(too_few("samples_along", samples_along, 2));
    }

    let mut points = Vec::with_capacity(samples_around * samples_along);
    for ka in 0..samples_along {
        let x = -half_length + 2.0 * half_length * ka as f64 / (samples_along - 1) as f64;
        for ku in 0..samples_around {
            let theta = 2.0 * PI * ku as f64 / samples_around as f64;
            points.push(NVec3::new(x, radius * theta.cos(), radius * theta.sin()));
        }
    }
    Ok(centered(points))
}

/// Lateral surface of an open cone, base disk of `radius` at z = 0 and apex
/// at z = `height`
///
/// The apex is emitted once. `samples_along` counts the apex as a ring.
pub fn cone(radius: f64, height: f64, samples_around: usize, samples_along: usize) -> Result<Vec<NVec3>> {
    if samples_around < 3 {
        return Err(too_few("samples_around", samples_around, 3));
    }
    if samples_along < 2 {
        return Err(too_few("samples_along", samples_along, 2));
    }

    let mut points = Vec::with_capacity(samples_around * (samples_along - 1) + 1);
    for kv in 0..samples_along - 1 {
        let t = kv as f64 / (samples_along - 1) as f64;
        let ring = radius * (1.0 - t);
        for ku in 0..samples_around {
            let theta = 2.0 * PI * ku as f64 / samples_around as f64;
            points.push(NVec3::new(ring * theta.cos(), ring * theta.sin(), t * height));
        }
    }
    points.push(NVec3::new(0.0, 0.0, height));

    Ok(centered(points))
}

fn too_few(name: &'static str, got: usize, min: usize) -> SimulationError {
    SimulationError::InvalidParameter {
        name,
        reason: format!("needs at least {min} samples, got {got}"),
    }
}
