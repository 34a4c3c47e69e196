//! Core state types for the soft-body simulation.
//!
//! Defines the per-body vertex arrays consumed by every solver pass:
//! - `position`           authoritative positions after the previous step
//! - `position_predict`   tentative positions refined by the constraints
//! - `velocity`           per-vertex velocity
//! - `position_reference` rest shape, fixed at creation
//!
//! A body is either free or captured by a black hole. Capture is terminal.

use nalgebra::Vector3;

use crate::error::{Result, SimulationError};

pub type NVec3 = Vector3<f64>;

/// Index of a black hole inside the scene's black-hole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlackHoleId(pub usize);

/// Discrete physical model a body is simulated with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Free,
    Captured(BlackHoleId),
}

#[derive(Debug, Clone)]
pub struct DeformableBody {
    pub position: Vec<NVec3>, // positions after the last step
    pub position_predict: Vec<NVec3>, // predicted positions, same order as `position`
    pub velocity: Vec<NVec3>, // per-vertex velocity
    position_reference: Vec<NVec3>, // rest shape, never touched by the solver
    pub com: NVec3, // center of mass of predict/position
    pub com_reference: NVec3, // center of mass used by shape matching
    captured_by: Option<BlackHoleId>,
    pub capture_elapsed: f64, // time spent spiralling into the black hole
}

impl DeformableBody {
    /// Create a body at rest whose current shape is its reference shape
    pub fn new(rest_shape: Vec<NVec3>) -> Result<Self> {
        if rest_shape.is_empty() {
            return Err(SimulationError::EmptyShape);
        }
        let com = average(&rest_shape);
        Ok(Self {
            position: rest_shape.clone(),
            position_predict: rest_shape.clone(),
            velocity: vec![NVec3::zeros(); rest_shape.len()],
            position_reference: rest_shape,
            com,
            com_reference: com,
            captured_by: None,
            capture_elapsed: 0.0,
        })
    }

    /// Place the rest shape at `center` and give it a rigid motion
    ///
    /// Every vertex gets `velocity + angular_velocity x (p - center)`.
    pub fn set_position_and_velocity(&mut self, center: NVec3, velocity: NVec3, angular_velocity: NVec3) {
        let rest_com = average(&self.position_reference);
        for (k, p_ref) in self.position_reference.iter().enumerate() {
            let p = p_ref - rest_com + center;
            self.position[k] = p;
            self.position_predict[k] = p;
            self.velocity[k] = velocity + angular_velocity.cross(&(p - center));
        }
        self.com = center;
        self.com_reference = center;
    }

    pub fn position_reference(&self) -> &[NVec3] {
        &self.position_reference
    }

    pub fn captured_by(&self) -> Option<BlackHoleId> {
        self.captured_by
    }

    pub fn state(&self) -> BodyState {
        match self.captured_by {
            Some(id) => BodyState::Captured(id),
            None => BodyState::Free,
        }
    }

    pub fn is_captured(&self) -> bool {
        self.captured_by.is_some()
    }

    /// Hand the body over to a black hole
    ///
    /// Returns `false` if the body was already captured; the first capture
    /// is kept.
    pub fn capture(&mut self, black_hole: BlackHoleId) -> bool {
        if self.captured_by.is_some() {
            return false;
        }
        self.captured_by = Some(black_hole);
        true
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Translate every current and predicted vertex by `offset`
    pub fn translate(&mut self, offset: NVec3) {
        for p in self.position.iter_mut() {
            *p += offset;
        }
        for p in self.position_predict.iter_mut() {
            *p += offset;
        }
        self.com += offset;
    }

    /// Check the array invariants of body number `index`
    pub fn validate(&self, index: usize) -> Result<()> {
        let expected = self.position.len();
        if expected == 0 {
            return Err(SimulationError::EmptyBody { body: index });
        }
        let others = [
            ("position_predict", self.position_predict.len()),
            ("velocity", self.velocity.len()),
            ("position_reference", self.position_reference.len()),
        ];
        for (field, found) in others {
            if found != expected {
                return Err(SimulationError::MismatchedLengths { body: index, field, expected, found });
            }
        }
        Ok(())
    }
}

/// Arithmetic mean of a point set, zero for an empty set
pub fn average(points: &[NVec3]) -> NVec3 {
    if points.is_empty() {
        return NVec3::zeros();
    }
    let sum = points.iter().fold(NVec3::zeros(), |acc, p| acc + p);
    sum / points.len() as f64
}

/// Unit vector along `v`, or the zero vector when `v` has no length
pub fn normalize_or_zero(v: &NVec3) -> NVec3 {
    v.try_normalize(0.0).unwrap_or_else(NVec3::zeros)
}
