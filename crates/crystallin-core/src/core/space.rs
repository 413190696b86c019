use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpaceError {
    #[error("box length must be positive, got {0}")]
    NonPositiveBoxLength(f64),
}

/// Cuboid periodic boundary conditions for a cubic box centered on the origin.
///
/// The half box length is the wrap and minimum-image threshold. Immutable once
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidPbc {
    box_len: f64,
    half_len: f64,
}

impl CuboidPbc {
    pub fn new(box_len: f64) -> Result<Self, SpaceError> {
        if !(box_len > 0.0) {
            return Err(SpaceError::NonPositiveBoxLength(box_len));
        }
        Ok(Self {
            box_len,
            half_len: box_len / 2.0,
        })
    }

    pub fn box_len(&self) -> f64 {
        self.box_len
    }

    /// Per-axis minimum-image difference `p1 - p2`.
    pub fn displacement(&self, p1: &Point3<f64>, p2: &Point3<f64>) -> Vector3<f64> {
        let mut diff = p1 - p2;
        for i in 0..3 {
            if diff[i] > self.half_len {
                diff[i] -= self.box_len;
            } else if diff[i] < -self.half_len {
                diff[i] += self.box_len;
            }
        }
        diff
    }

    /// Euclidean norm of the minimum-image displacement.
    pub fn distance(&self, p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
        self.displacement(p1, p2).norm()
    }

    /// Wrap a position back into the box, one box length per axis at most.
    ///
    /// Positions displaced by more than one box length in a single move are not
    /// re-wrapped; displacement magnitudes are always smaller than the box here.
    pub fn wrap(&self, pos: &Point3<f64>) -> Point3<f64> {
        let mut wrapped = *pos;
        for i in 0..3 {
            if wrapped[i] > self.half_len {
                wrapped[i] -= self.box_len;
            } else if wrapped[i] < -self.half_len {
                wrapped[i] += self.box_len;
            }
        }
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_box_length() {
        assert!(matches!(
            CuboidPbc::new(0.0),
            Err(SpaceError::NonPositiveBoxLength(_))
        ));
        assert!(matches!(
            CuboidPbc::new(-3.0),
            Err(SpaceError::NonPositiveBoxLength(_))
        ));
        assert!(CuboidPbc::new(10.0).is_ok());
    }

    #[test]
    fn distance_to_self_is_zero() {
        let space = CuboidPbc::new(8.0).unwrap();
        let p = Point3::new(1.0, -3.5, 2.25);
        assert_eq!(space.distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let space = CuboidPbc::new(8.0).unwrap();
        let p1 = Point3::new(3.9, 0.0, -3.9);
        let p2 = Point3::new(-3.9, 1.0, 3.9);
        assert!((space.distance(&p1, &p2) - space.distance(&p2, &p1)).abs() < 1e-15);
    }

    #[test]
    fn displacement_uses_minimum_image() {
        let space = CuboidPbc::new(10.0).unwrap();
        let p1 = Point3::new(4.8, 0.0, 0.0);
        let p2 = Point3::new(-4.8, 0.0, 0.0);
        let diff = space.displacement(&p1, &p2);
        // Naive difference is 9.6; crossing the boundary it is -0.4.
        assert!((diff.x - (-0.4)).abs() < 1e-12);
        assert_eq!(diff.y, 0.0);
        assert_eq!(diff.z, 0.0);
    }

    #[test]
    fn wrap_moves_outside_positions_into_box() {
        let space = CuboidPbc::new(10.0).unwrap();
        let wrapped = space.wrap(&Point3::new(6.0, -7.5, 2.0));
        assert!((wrapped.x - (-4.0)).abs() < 1e-12);
        assert!((wrapped.y - 2.5).abs() < 1e-12);
        assert!((wrapped.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_is_idempotent() {
        let space = CuboidPbc::new(10.0).unwrap();
        for p in [
            Point3::new(9.9, -9.9, 0.1),
            Point3::new(-6.0, 6.0, 5.1),
            Point3::new(1.0, 2.0, 3.0),
        ] {
            let once = space.wrap(&p);
            let twice = space.wrap(&once);
            assert_eq!(once, twice);
        }
    }
}
