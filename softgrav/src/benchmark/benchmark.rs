use std::time::Instant;

use crate::error::Result;
use crate::simulation::attractors::Planet;
use crate::simulation::camera::FixedCamera;
use crate::simulation::integrator::simulate_step;
use crate::simulation::params::SimulationParameters;
use crate::simulation::shapes::cubic_grid;
use crate::simulation::states::{DeformableBody, NVec3};

/// Helper to build `n` small cubes stacked in a column above a planet
///
/// Neighbouring cubes start close enough for their boxes to overlap, so the
/// body-body pass has real work to do.
fn make_bodies(n: usize, samples: usize) -> Result<Vec<DeformableBody>> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let center = NVec3::new(
            (i_f * 0.37).sin() * 0.05,
            (i_f * 0.13).cos() * 0.05,
            2.3 + 0.21 * i_f,
        );

        let mut body = DeformableBody::new(cubic_grid(0.1, samples)?)?;
        body.set_position_and_velocity(center, NVec3::zeros(), NVec3::zeros());
        bodies.push(body);
    }
    Ok(bodies)
}

fn make_planets() -> Result<Vec<Planet>> {
    Ok(vec![Planet::new(NVec3::zeros(), 2.0, 50.0)?])
}

/// Benchmark simulate_step for a range of body counts
/// Paste output directly into excel to graph
pub fn bench_step() -> Result<()> {
    let samples = 4; // 56 vertices per cube
    let steps = 10;

    let planets = make_planets()?;
    let camera = FixedCamera {
        eye: NVec3::new(0.0, -10.0, 5.0),
        target: NVec3::zeros(),
    };
    let params = SimulationParameters::default();

    println!("bodies,vertices,ms_per_step");

    for n in [1, 2, 4, 8, 16, 32, 64] {
        let mut bodies = make_bodies(n, samples)?;
        let vertices: usize = bodies.iter().map(DeformableBody::len).sum();

        // Warm up
        simulate_step(&mut bodies, &planets, &[], &params, &camera)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            simulate_step(&mut bodies, &planets, &[], &params, &camera)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{},{:.6}", n, vertices, ms);
    }
    Ok(())
}
