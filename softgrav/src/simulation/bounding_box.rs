//! Axis-aligned bounding boxes for the collision broad phase
//!
//! Boxes are rebuilt from scratch on every pass, there is no incremental
//! update. Two vertex sets are only compared vertex-by-vertex when their
//! expanded boxes overlap.

use crate::simulation::states::{DeformableBody, NVec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: NVec3,
    pub max: NVec3,
}

impl Aabb {
    /// Inverted box that contains nothing and overlaps nothing
    pub fn empty() -> Self {
        Self {
            min: NVec3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: NVec3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Tightest box around `points`
    pub fn from_points(points: &[NVec3]) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.min.z = bbox.min.z.min(p.z);

            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
            bbox.max.z = bbox.max.z.max(p.z);
        }
        bbox
    }

    /// Cube of half side `half_extent` centered on `center`
    pub fn around(center: NVec3, half_extent: f64) -> Self {
        let half = NVec3::repeat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inflate by `margin` on every axis
    pub fn expanded(&self, margin: f64) -> Self {
        let m = NVec3::repeat(margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    pub fn translated(&self, offset: NVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// True iff the intervals overlap on all three axes (touching counts)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (0..3).all(|k| self.min[k] <= other.max[k] && other.min[k] <= self.max[k])
    }
}

/// One box per body around its predicted positions, inflated by `margin`
pub fn predicted_boxes(bodies: &[DeformableBody], margin: f64) -> Vec<Aabb> {
    bodies
        .iter()
        .map(|b| Aabb::from_points(&b.position_predict).expanded(margin))
        .collect()
}
