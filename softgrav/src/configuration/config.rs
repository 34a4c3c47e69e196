//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scenario consists of:
//!
//! - [`EngineConfig`]     – headless run length and report cadence
//! - [`ParametersConfig`] – solver parameters, each optional
//! - [`CameraConfig`]     – where the viewer stands and looks
//! - [`BodyConfig`]       – the player and any extra deformable bodies
//! - [`PlanetConfig`] / [`BlackHoleConfig`] – the attractors
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   steps: 2000
//!   report_every: 200
//!
//! parameters:
//!   collision_radius: 0.04
//!   elasticity: 0.2
//!   collision_steps: 5
//!   time_step: 0.005
//!
//! camera:
//!   eye: [0.0, -12.0, 4.0]
//!   target: [0.0, 0.0, 0.0]
//!
//! player:
//!   shape: { type: ellipsoid, size: [0.3, 0.2, 0.2], samples_u: 12, samples_v: 8 }
//!   position: [0.0, 0.0, 2.2]
//!
//! bodies:
//!   - shape: { type: cube, half_extent: 0.1, samples: 4 }
//!     position: [1.0, 0.0, 2.5]
//!     velocity: [0.0, 0.0, -1.0]
//!
//! planets:
//!   - position: [0.0, 0.0, 0.0]
//!     radius: 2.0
//!     attraction_radius: 5.0
//!
//! black_holes:
//!   - position: [8.0, 0.0, 0.0]
//!     radius: 0.3
//!     attraction_radius: 2.0
//! ```
//!
//! The scenario builder maps this configuration into runtime types.

use serde::Deserialize;

/// Run settings of the headless driver
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    pub steps: Option<usize>, // number of steps to run
    pub report_every: Option<usize>, // log cadence in steps
}

/// Solver parameters, missing entries fall back to the defaults
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub collision_radius: Option<f64>, // radius of the sphere around each vertex
    pub elasticity: Option<f64>, // blend between PBD prediction and rigid target
    pub plasticity: Option<f64>, // reserved
    pub friction: Option<f64>, // velocity damping per unit time
    pub collision_steps: Option<usize>, // constraint iterations per step
    pub time_step: Option<f64>, // fixed dt
    pub black_hole_timer: Option<f64>, // spiral shrink duration constant
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
    pub eye: [f64; 3], // camera position
    #[serde(default)]
    pub target: [f64; 3], // point the camera looks at
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, -10.0, 5.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Rest shape of a body, centered on the origin before placement
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeConfig {
    Ellipsoid {
        size: [f64; 3],
        samples_u: usize,
        samples_v: usize,
    },
    Cube {
        half_extent: f64,
        samples: usize,
    },
    Sphere {
        radius: f64,
        samples_u: usize,
        samples_v: usize,
    },
    Cylinder {
        radius: f64,
        half_length: f64, // axis along x
        samples_around: usize,
        samples_along: usize,
    },
    Cone {
        radius: f64,
        height: f64, // apex along +z
        samples_around: usize,
        samples_along: usize,
    },
    Points {
        points: Vec<[f64; 3]>,
    },
}

/// Initial state of one deformable body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub shape: ShapeConfig,
    pub position: [f64; 3], // where the shape's center of mass is placed
    #[serde(default)]
    pub velocity: [f64; 3], // initial linear velocity
    #[serde(default)]
    pub angular_velocity: [f64; 3], // initial angular velocity about the center
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub position: [f64; 3],
    pub radius: f64, // collision radius
    pub attraction_radius: f64, // gravity influence radius
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlackHoleConfig {
    pub position: [f64; 3],
    pub radius: f64, // capture radius
    pub attraction_radius: f64, // gravity influence radius
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    pub player: BodyConfig, // always body 0
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub planets: Vec<PlanetConfig>,
    #[serde(default)]
    pub black_holes: Vec<BlackHoleConfig>,
}
