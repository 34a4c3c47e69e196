//! Shape matching constraint
//!
//! Recovers the rotation that best aligns a body's predicted vertices with
//! its last settled shape, then relaxes the prediction toward that rigidly
//! moved shape:
//!
//! ```text
//! T      = sum_i (p_pred_i - com) (p_i - com_ref)^T
//! R      = U V^T            where T = U S V^T
//! target = R (p_i - com_ref) + com
//! p_pred = e * p_pred + (1 - e) * target
//! ```
//!
//! The reference centroid comes from `position`, the shape settled by the
//! previous step, not from the rest pose.

use nalgebra::Matrix3;
use tracing::warn;

use crate::simulation::params::SimulationParameters;
use crate::simulation::states::{average, DeformableBody};

/// Upper bound on SVD sweeps before giving up on a 3x3 matrix
const SVD_MAX_ITERATIONS: usize = 200;

/// Orthogonal factor `R = U V^T` of the polar decomposition `M = R S`
///
/// Singular input still yields an orthogonal matrix. Non-finite input, or an
/// SVD that fails to converge, yields the identity.
pub fn polar_decomposition(m: &Matrix3<f64>) -> Matrix3<f64> {
    if m.iter().any(|x| !x.is_finite()) {
        warn!("non-finite covariance matrix, falling back to identity rotation");
        return Matrix3::identity();
    }
    match m.try_svd(true, true, f64::EPSILON, SVD_MAX_ITERATIONS) {
        Some(svd) => match (svd.u, svd.v_t) {
            (Some(u), Some(v_t)) => u * v_t,
            _ => Matrix3::identity(),
        },
        None => {
            warn!("SVD did not converge, falling back to identity rotation");
            Matrix3::identity()
        }
    }
}

/// Cross-covariance between the predicted shape and the settled shape
///
/// Refreshes `com` and `com_reference` on the way.
pub fn cross_covariance(body: &mut DeformableBody) -> Matrix3<f64> {
    body.com = average(&body.position_predict);
    body.com_reference = average(&body.position);

    let mut t = Matrix3::zeros();
    for (p_pred, p) in body.position_predict.iter().zip(body.position.iter()) {
        // tensor product a * b^T
        t += (p_pred - body.com) * (p - body.com_reference).transpose();
    }
    t
}

/// Relax one body toward its rigidly matched shape
pub fn match_shape(body: &mut DeformableBody, elasticity: f64) {
    let t = cross_covariance(body);
    let r = polar_decomposition(&t);

    let com = body.com;
    let com_reference = body.com_reference;
    for (p_pred, p) in body.position_predict.iter_mut().zip(body.position.iter()) {
        let target = r * (p - com_reference) + com;
        *p_pred = elasticity * *p_pred + (1.0 - elasticity) * target;
    }
}

/// Shape matching on every free body
pub fn shape_matching(bodies: &mut [DeformableBody], params: &SimulationParameters) {
    for body in bodies.iter_mut().filter(|b| !b.is_captured()) {
        match_shape(body, params.elasticity);
    }
}
