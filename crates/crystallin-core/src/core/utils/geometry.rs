use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Translation3, Unit, Vector3};
use thiserror::Error;

const AXIS_NORM_EPS: f64 = 1e-12;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("axis or plane normal is degenerate (norm {0:.3e})")]
    DegenerateAxis(f64),
}

fn unit_axis(axis: &Vector3<f64>) -> Result<Unit<Vector3<f64>>, GeometryError> {
    Unit::try_new(*axis, AXIS_NORM_EPS).ok_or(GeometryError::DegenerateAxis(axis.norm()))
}

/// Homogeneous rotation about a pre-normalized axis through the origin.
pub fn rotation_about_unit_axis(axis: &Unit<Vector3<f64>>, angle: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(axis, angle).to_homogeneous()
}

/// Homogeneous rotation about a pre-normalized axis through a fixed point.
///
/// The rotation is conjugated by translations to and from the fixed point, so
/// the point is invariant under the returned transform.
pub fn rotation_about_unit_axis_point(
    axis: &Unit<Vector3<f64>>,
    angle: f64,
    point: &Point3<f64>,
) -> Matrix4<f64> {
    Translation3::from(point.coords).to_homogeneous()
        * rotation_about_unit_axis(axis, angle)
        * Translation3::from(-point.coords).to_homogeneous()
}

/// Homogeneous rotation about an arbitrary axis through the origin.
///
/// The axis need not be normalized, but a near-zero axis is a degenerate
/// geometry error. The angle is in radians.
pub fn rotation_about_axis(
    axis: &Vector3<f64>,
    angle: f64,
) -> Result<Matrix4<f64>, GeometryError> {
    Ok(rotation_about_unit_axis(&unit_axis(axis)?, angle))
}

/// Homogeneous rotation about an arbitrary axis through a fixed point.
pub fn rotation_about_point(
    axis: &Vector3<f64>,
    angle: f64,
    point: &Point3<f64>,
) -> Result<Matrix4<f64>, GeometryError> {
    Ok(rotation_about_unit_axis_point(&unit_axis(axis)?, angle, point))
}

/// Homogeneous reflection across the plane through the origin with the given
/// normal (Householder transform `I - 2nnᵀ` on the linear subspace).
pub fn reflection_across_plane(normal: &Vector3<f64>) -> Result<Matrix4<f64>, GeometryError> {
    let n = unit_axis(normal)?.into_inner();
    let householder = Matrix3::identity() - 2.0 * n * n.transpose();
    Ok(householder.to_homogeneous())
}

/// Homogeneous translation by the given offset.
pub fn translation(offset: &Vector3<f64>) -> Matrix4<f64> {
    Translation3::from(*offset).to_homogeneous()
}

/// The linear (rotation/zoom/shear) part of an affine transform.
///
/// Direction vectors such as patch normals must be transformed by this 3x3
/// block only; the translation column must never reach them.
pub fn linear_part(m: &Matrix4<f64>) -> Matrix3<f64> {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}
