use crate::core::utils::geometry;
use nalgebra::{Matrix4, Point3, Vector3};

/// Directional patch markers carried by a particle.
///
/// Patch vectors encode anisotropic interaction geometry. They are
/// co-transformed with the particle position by the linear part of any applied
/// affine map only; the translation component never reaches them. Under pure
/// rotations they stay unit length up to floating-point drift; no
/// renormalization is performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// No patch; the particle is a plain sphere.
    None,
    /// A single patch described by its unit normal.
    Normal { norm: Vector3<f64> },
    /// An orientationally specific patch: a unit normal plus a unit
    /// orientation vector perpendicular to it.
    Oriented {
        norm: Vector3<f64>,
        orient: Vector3<f64>,
    },
}

/// A spherical particle in a coarse-grained model.
///
/// Particles carry a configuration-wide unique index, a free-form domain tag
/// (e.g. "ACD", "NTD", "BLB"), a small type discriminator used only for
/// serialization bookkeeping, a position, and an optional patch.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Unique particle index, global across a configuration.
    pub index: usize,
    /// Domain the particle represents.
    pub domain: String,
    /// Type discriminator within the particle's monomer.
    pub type_id: u32,
    /// Position in model space.
    pub position: Point3<f64>,
    /// Patch vectors, if any.
    pub patch: Patch,
}

impl Particle {
    /// Creates a plain particle at the origin.
    pub fn simple(index: usize, domain: &str, type_id: u32) -> Self {
        Self {
            index,
            domain: domain.to_string(),
            type_id,
            position: Point3::origin(),
            patch: Patch::None,
        }
    }

    /// Creates a single-patch particle at the origin.
    pub fn patchy(index: usize, domain: &str, type_id: u32, patch_norm: Vector3<f64>) -> Self {
        Self {
            patch: Patch::Normal { norm: patch_norm },
            ..Self::simple(index, domain, type_id)
        }
    }

    /// Creates an oriented-patch particle at the origin.
    pub fn oriented(
        index: usize,
        domain: &str,
        type_id: u32,
        patch_norm: Vector3<f64>,
        patch_orient: Vector3<f64>,
    ) -> Self {
        Self {
            patch: Patch::Oriented {
                norm: patch_norm,
                orient: patch_orient,
            },
            ..Self::simple(index, domain, type_id)
        }
    }

    /// The particle kind label used in serialized configurations.
    pub fn form(&self) -> &'static str {
        match self.patch {
            Patch::None => "SimpleParticle",
            Patch::Normal { .. } => "PatchyParticle",
            Patch::Oriented { .. } => "OrientedPatchyParticle",
        }
    }

    pub fn patch_norm(&self) -> Option<&Vector3<f64>> {
        match &self.patch {
            Patch::None => None,
            Patch::Normal { norm } | Patch::Oriented { norm, .. } => Some(norm),
        }
    }

    pub fn patch_orient(&self) -> Option<&Vector3<f64>> {
        match &self.patch {
            Patch::Oriented { orient, .. } => Some(orient),
            _ => None,
        }
    }

    /// Applies an affine transform to the particle.
    ///
    /// The position is transformed by the full homogeneous matrix; patch
    /// vectors by its linear part only.
    pub fn apply_transform(&mut self, m: &Matrix4<f64>) {
        self.position = m.transform_point(&self.position);
        match &mut self.patch {
            Patch::None => {}
            Patch::Normal { norm } => {
                *norm = geometry::linear_part(m) * *norm;
            }
            Patch::Oriented { norm, orient } => {
                let linear = geometry::linear_part(m);
                *norm = linear * *norm;
                *orient = linear * *orient;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn constructors_start_at_origin_with_expected_forms() {
        let simple = Particle::simple(0, "PAR", 0);
        assert_eq!(simple.position, Point3::origin());
        assert_eq!(simple.form(), "SimpleParticle");
        assert!(simple.patch_norm().is_none());

        let patchy = Particle::patchy(1, "A", 0, Vector3::x());
        assert_eq!(patchy.form(), "PatchyParticle");
        assert_eq!(patchy.patch_norm(), Some(&Vector3::x()));
        assert!(patchy.patch_orient().is_none());

        let oriented = Particle::oriented(2, "ACD", 0, -Vector3::y(), Vector3::x());
        assert_eq!(oriented.form(), "OrientedPatchyParticle");
        assert_eq!(oriented.patch_norm(), Some(&-Vector3::y()));
        assert_eq!(oriented.patch_orient(), Some(&Vector3::x()));
    }

    #[test]
    fn translation_moves_position_but_not_patch() {
        let mut particle = Particle::patchy(0, "A", 0, Vector3::z());
        let shift = geometry::translation(&Vector3::new(1.0, 2.0, 3.0));
        particle.apply_transform(&shift);
        assert_eq!(particle.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(particle.patch_norm(), Some(&Vector3::z()));
    }

    #[test]
    fn rotation_co_transforms_patch_vectors() {
        let mut particle = Particle::oriented(0, "ACD", 0, Vector3::x(), Vector3::y());
        let rotate = geometry::rotation_about_axis(&Vector3::z(), FRAC_PI_2).unwrap();
        particle.apply_transform(&rotate);
        assert!((particle.patch_norm().unwrap() - Vector3::y()).norm() < 1e-12);
        assert!((particle.patch_orient().unwrap() - (-Vector3::x())).norm() < 1e-12);
    }

    #[test]
    fn rigid_transform_moves_patch_endpoint_consistently() {
        let mut particle = Particle::patchy(0, "A", 0, Vector3::new(0.0, 0.0, 1.0));
        let endpoint = particle.position + particle.patch_norm().unwrap();

        let m = geometry::rotation_about_point(
            &Vector3::new(1.0, 2.0, -0.5),
            1.3,
            &Point3::new(4.0, -1.0, 2.0),
        )
        .unwrap()
            * geometry::translation(&Vector3::new(-2.0, 0.5, 9.0));
        particle.apply_transform(&m);

        // The synthetic endpoint transformed as a point lands exactly on
        // position + patch_norm, so their separation stays one unit.
        let moved_endpoint = m.transform_point(&endpoint);
        let patch_endpoint = particle.position + particle.patch_norm().unwrap();
        assert!((moved_endpoint - patch_endpoint).norm() < 1e-12);
        assert!(((patch_endpoint - particle.position).norm() - 1.0).abs() < 1e-12);
    }
}
