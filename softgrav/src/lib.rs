pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Result, SimulationError};

pub use simulation::states::{average, normalize_or_zero, BlackHoleId, BodyState, DeformableBody, NVec3};
pub use simulation::params::SimulationParameters;
pub use simulation::attractors::{Attractor, BlackHole, Planet};
pub use simulation::bounding_box::Aabb;
pub use simulation::camera::{CameraView, FixedCamera};
pub use simulation::shape_matching::polar_decomposition;
pub use simulation::integrator::simulate_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, CameraConfig, BodyConfig, ShapeConfig, PlanetConfig, BlackHoleConfig};

pub use benchmark::benchmark::bench_step;
