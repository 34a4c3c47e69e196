//! Gravity sources a deformable body can fall toward
//!
//! Planets and black holes expose the same read-only surface through the
//! [`Attractor`] trait so the gravity and collision passes can treat them
//! generically. They differ in how they pull:
//! - a planet pulls with an inverse-square law,
//! - a black hole pulls with a constant, distance-independent strength.

use crate::error::{Result, SimulationError};
use crate::simulation::bounding_box::Aabb;
use crate::simulation::states::{normalize_or_zero, NVec3};

/// Strength of a planet's inverse-square pull
pub const PLANET_PULL: f64 = 25.0;

/// Strength of a black hole's constant pull
pub const BLACK_HOLE_PULL: f64 = 40.0;

/// Read-only view of a gravity source
pub trait Attractor {
    fn center(&self) -> NVec3;

    /// Collision radius
    fn radius(&self) -> f64;

    /// Gravity influence radius
    fn attraction_radius(&self) -> f64;

    /// Acceleration felt by a body whose center of mass sits at
    /// `offset = center - com` from the attractor
    fn pull(&self, offset: NVec3) -> NVec3;

    /// Broad-phase box of the attractor, already inflated for the narrow phase
    fn bounding_box(&self) -> Aabb;

    fn should_attract(&self, com: &NVec3) -> bool {
        (self.center() - com).norm() <= self.attraction_radius()
    }
}

/// Pull of the first attractor in `attractors` whose influence reaches `com`
///
/// Ties between equidistant attractors go to the one listed first.
pub fn first_pull<A: Attractor>(attractors: &[A], com: &NVec3) -> Option<NVec3> {
    attractors
        .iter()
        .find(|a| a.should_attract(com))
        .map(|a| a.pull(a.center() - com))
}

fn check_radii(kind: &'static str, radius: f64, attraction_radius: f64) -> Result<()> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(SimulationError::InvalidRadius { kind, value: radius });
    }
    if !(attraction_radius.is_finite() && attraction_radius > 0.0) {
        return Err(SimulationError::InvalidAttractionRadius { kind, value: attraction_radius });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    center: NVec3,
    radius: f64,
    attraction_radius: f64,
}

impl Planet {
    pub fn new(center: NVec3, radius: f64, attraction_radius: f64) -> Result<Self> {
        check_radii("planet", radius, attraction_radius)?;
        Ok(Self { center, radius, attraction_radius })
    }
}

impl Attractor for Planet {
    fn center(&self) -> NVec3 {
        self.center
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn attraction_radius(&self) -> f64 {
        self.attraction_radius
    }

    fn pull(&self, offset: NVec3) -> NVec3 {
        let n2 = offset.norm_squared();
        if n2 == 0.0 {
            return NVec3::zeros();
        }
        PLANET_PULL * normalize_or_zero(&offset) / n2
    }

    /// Sphere extents around the center, inflated by the planet's diameter
    fn bounding_box(&self) -> Aabb {
        Aabb::around(NVec3::zeros(), self.radius)
            .translated(self.center)
            .expanded(2.0 * self.radius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlackHole {
    center: NVec3,
    radius: f64,
    attraction_radius: f64,
}

impl BlackHole {
    pub fn new(center: NVec3, radius: f64, attraction_radius: f64) -> Result<Self> {
        check_radii("black hole", radius, attraction_radius)?;
        Ok(Self { center, radius, attraction_radius })
    }
}

impl Attractor for BlackHole {
    fn center(&self) -> NVec3 {
        self.center
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn attraction_radius(&self) -> f64 {
        self.attraction_radius
    }

    fn pull(&self, offset: NVec3) -> NVec3 {
        BLACK_HOLE_PULL * normalize_or_zero(&offset)
    }

    /// The center point inflated by the black hole's diameter
    fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&[self.center]).expanded(2.0 * self.radius)
    }
}
