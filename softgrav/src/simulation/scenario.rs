//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - solver parameters (`SimulationParameters`)
//! - deformable bodies, the player first
//! - planets and black holes
//! - the camera the capture spiral is oriented by and bodies are thrown from

use tracing::debug;

use crate::configuration::config::{BodyConfig, ScenarioConfig, ShapeConfig};
use crate::error::{Result, SimulationError};
use crate::simulation::attractors::{BlackHole, Planet};
use crate::simulation::camera::{CameraView, FixedCamera};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::simulate_step;
use crate::simulation::params::SimulationParameters;
use crate::simulation::shapes::{centered, cone, cubic_grid, cylinder, ellipsoid, sphere};
use crate::simulation::states::{DeformableBody, NVec3};

/// Steps with a smaller time step are skipped (the simulation is paused)
pub const MIN_TIME_STEP: f64 = 1e-6;

/// Runtime bundle of a scene: everything one step reads or writes
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: SimulationParameters,
    pub bodies: Vec<DeformableBody>,
    pub planets: Vec<Planet>,
    pub black_holes: Vec<BlackHole>,
    pub camera: FixedCamera,
    pub t: f64, // simulated time
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Engine (runtime) from EngineConfig
        let defaults = Engine::default();
        let engine = Engine {
            steps: cfg.engine.steps.unwrap_or(defaults.steps),
            report_every: cfg.engine.report_every.unwrap_or(defaults.report_every),
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let base = SimulationParameters::default();
        let parameters = SimulationParameters {
            collision_radius: p_cfg.collision_radius.unwrap_or(base.collision_radius),
            elasticity: p_cfg.elasticity.unwrap_or(base.elasticity),
            plasticity: p_cfg.plasticity.unwrap_or(base.plasticity),
            friction: p_cfg.friction.unwrap_or(base.friction),
            collision_steps: p_cfg.collision_steps.unwrap_or(base.collision_steps),
            time_step: p_cfg.time_step.unwrap_or(base.time_step),
            black_hole_timer: p_cfg.black_hole_timer.unwrap_or(base.black_hole_timer),
        };
        parameters.validate()?;

        // Bodies: the player is always body 0
        let mut bodies = Vec::with_capacity(1 + cfg.bodies.len());
        bodies.push(build_body(&cfg.player)?);
        for bc in &cfg.bodies {
            bodies.push(build_body(bc)?);
        }

        let planets = cfg
            .planets
            .iter()
            .map(|pc| Planet::new(NVec3::from(pc.position), pc.radius, pc.attraction_radius))
            .collect::<Result<Vec<_>>>()?;

        let black_holes = cfg
            .black_holes
            .iter()
            .map(|bc| BlackHole::new(NVec3::from(bc.position), bc.radius, bc.attraction_radius))
            .collect::<Result<Vec<_>>>()?;

        let camera = FixedCamera {
            eye: NVec3::from(cfg.camera.eye),
            target: NVec3::from(cfg.camera.target),
        };

        debug!(
            bodies = bodies.len(),
            planets = planets.len(),
            black_holes = black_holes.len(),
            "scenario built"
        );

        Ok(Self {
            engine,
            parameters,
            bodies,
            planets,
            black_holes,
            camera,
            t: 0.0,
        })
    }

    /// Advance by one time step
    ///
    /// Returns `Ok(false)` without touching anything when the time step is
    /// below [`MIN_TIME_STEP`].
    pub fn step(&mut self) -> Result<bool> {
        if self.parameters.time_step <= MIN_TIME_STEP {
            return Ok(false);
        }
        simulate_step(
            &mut self.bodies,
            &self.planets,
            &self.black_holes,
            &self.parameters,
            &self.camera,
        )?;
        self.t += self.parameters.time_step;
        Ok(true)
    }

    /// Add an already placed body to the scene, returns its index
    pub fn add_body(&mut self, body: DeformableBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Throw a new body from the camera along its viewing direction
    ///
    /// The body leaves the eye with `speed * front` and a spin whose
    /// components lie in `[-speed, speed]`. Returns the new body's index.
    pub fn throw_body(&mut self, shape: &ShapeConfig, speed: f64) -> Result<usize> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "throw_speed",
                reason: format!("must be finite and >= 0, got {speed}"),
            });
        }
        let mut body = DeformableBody::new(build_shape(shape)?)?;
        let velocity = speed * self.camera.front();
        let spin = speed * throw_spin(self.bodies.len());
        body.set_position_and_velocity(self.camera.position(), velocity, spin);

        let index = self.add_body(body);
        debug!(body = index, speed, "body thrown from camera");
        Ok(index)
    }

    pub fn player(&self) -> Option<&DeformableBody> {
        self.bodies.first()
    }
}

/// Rest shape described by `shape`, centered on the origin
pub fn build_shape(shape: &ShapeConfig) -> Result<Vec<NVec3>> {
    match shape {
        ShapeConfig::Ellipsoid { size, samples_u, samples_v } => ellipsoid(NVec3::from(*size), *samples_u, *samples_v),
        ShapeConfig::Cube { half_extent, samples } => cubic_grid(*half_extent, *samples),
        ShapeConfig::Sphere { radius, samples_u, samples_v } => sphere(*radius, *samples_u, *samples_v),
        ShapeConfig::Cylinder { radius, half_length, samples_around, samples_along } => {
            cylinder(*radius, *half_length, *samples_around, *samples_along)
        }
        ShapeConfig::Cone { radius, height, samples_around, samples_along } => {
            cone(*radius, *height, *samples_around, *samples_along)
        }
        ShapeConfig::Points { points } => Ok(centered(points.iter().map(|p| NVec3::from(*p)).collect())),
    }
}

/// Map `BodyConfig` -> runtime `DeformableBody` placed and moving
pub fn build_body(bc: &BodyConfig) -> Result<DeformableBody> {
    let mut body = DeformableBody::new(build_shape(&bc.shape)?)?;
    body.set_position_and_velocity(
        NVec3::from(bc.position),
        NVec3::from(bc.velocity),
        NVec3::from(bc.angular_velocity),
    );
    Ok(body)
}

/// Spin direction of the `n`-th thrown body, each component in [-1, 1]
fn throw_spin(n: usize) -> NVec3 {
    // deterministic, no rand needed
    let n_f = n as f64;
    NVec3::new((n_f * 0.37).sin(), (n_f * 0.13).cos(), (n_f * 0.71).sin())
}
