//! Camera query surface
//!
//! The solver only needs to know where the viewer stands: captured bodies
//! spiral around the line of sight while they collapse. Thrown bodies leave
//! from the eye along the viewing direction.

use crate::simulation::states::{normalize_or_zero, NVec3};

pub trait CameraView {
    fn position(&self) -> NVec3;

    /// Unit viewing direction, zero when it is undefined
    fn front(&self) -> NVec3;
}

/// Camera parked at a fixed eye position, looking at `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCamera {
    pub eye: NVec3,
    pub target: NVec3,
}

impl CameraView for FixedCamera {
    fn position(&self) -> NVec3 {
        self.eye
    }

    fn front(&self) -> NVec3 {
        normalize_or_zero(&(self.target - self.eye))
    }
}
