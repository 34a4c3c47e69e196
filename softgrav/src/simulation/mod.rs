pub mod states;
pub mod params;
pub mod engine;
pub mod attractors;
pub mod bounding_box;
pub mod camera;
pub mod shapes;
pub mod forces;
pub mod collisions;
pub mod shape_matching;
pub mod integrator;
pub mod scenario;
