use super::particle::Particle;
use nalgebra::{Matrix4, Point3, Vector3};

/// Shape tag describing how a monomer's particles are partitioned into
/// domain groups and which radius each group carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonomerShape {
    /// A single spherical particle.
    Bead { radius: f64 },
    /// An alphaB-crystallin monomer: `num_acd` ACD particles followed by
    /// `num_ntd` NTD particles, with any remaining particles being auxiliary
    /// blob markers.
    AlphaB {
        num_acd: usize,
        num_ntd: usize,
        acd_radius: f64,
        ntd_radius: f64,
    },
}

/// An ordered, fixed-size collection of particles moved as one rigid body.
///
/// All particles are owned by the monomer; applying a transform applies the
/// identical matrix to every owned particle. Particle membership is fixed at
/// construction; positions and patches are mutated in place during assembly
/// and placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomer {
    index: usize,
    particles: Vec<Particle>,
    shape: MonomerShape,
}

impl Monomer {
    /// Creates a single-particle monomer.
    pub fn bead(particle: Particle, radius: f64, index: usize) -> Self {
        Self {
            index,
            particles: vec![particle],
            shape: MonomerShape::Bead { radius },
        }
    }

    /// Creates an alphaB monomer from its ACD, NTD, and blob particle chains.
    pub fn alpha_b(
        acd_particles: Vec<Particle>,
        ntd_particles: Vec<Particle>,
        blob_particles: Vec<Particle>,
        acd_radius: f64,
        ntd_radius: f64,
        index: usize,
    ) -> Self {
        let shape = MonomerShape::AlphaB {
            num_acd: acd_particles.len(),
            num_ntd: ntd_particles.len(),
            acd_radius,
            ntd_radius,
        };
        let mut particles = acd_particles;
        particles.extend(ntd_particles);
        particles.extend(blob_particles);
        Self {
            index,
            particles,
            shape,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn shape(&self) -> &MonomerShape {
        &self.shape
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// The monomer's nominal radius: the bead radius, or the ACD radius for
    /// alphaB monomers.
    pub fn radius(&self) -> f64 {
        match self.shape {
            MonomerShape::Bead { radius } => radius,
            MonomerShape::AlphaB { acd_radius, .. } => acd_radius,
        }
    }

    /// The radius serialized for a particle of the given domain.
    pub fn radius_for_domain(&self, domain: &str) -> f64 {
        match self.shape {
            MonomerShape::Bead { radius } => radius,
            MonomerShape::AlphaB {
                acd_radius,
                ntd_radius,
                ..
            } => match domain {
                "ACD" => acd_radius,
                "NTD" => ntd_radius,
                _ => acd_radius,
            },
        }
    }

    pub fn acd_particles(&self) -> &[Particle] {
        match self.shape {
            MonomerShape::Bead { .. } => &[],
            MonomerShape::AlphaB { num_acd, .. } => &self.particles[..num_acd],
        }
    }

    pub(crate) fn acd_particles_mut(&mut self) -> &mut [Particle] {
        match self.shape {
            MonomerShape::Bead { .. } => &mut [],
            MonomerShape::AlphaB { num_acd, .. } => &mut self.particles[..num_acd],
        }
    }

    pub fn ntd_particles(&self) -> &[Particle] {
        match self.shape {
            MonomerShape::Bead { .. } => &[],
            MonomerShape::AlphaB {
                num_acd, num_ntd, ..
            } => &self.particles[num_acd..num_acd + num_ntd],
        }
    }

    pub(crate) fn ntd_particles_mut(&mut self) -> &mut [Particle] {
        match self.shape {
            MonomerShape::Bead { .. } => &mut [],
            MonomerShape::AlphaB {
                num_acd, num_ntd, ..
            } => &mut self.particles[num_acd..num_acd + num_ntd],
        }
    }

    pub fn blob_particles(&self) -> &[Particle] {
        match self.shape {
            MonomerShape::Bead { .. } => &[],
            MonomerShape::AlphaB {
                num_acd, num_ntd, ..
            } => &self.particles[num_acd + num_ntd..],
        }
    }

    pub(crate) fn blob_particles_mut(&mut self) -> &mut [Particle] {
        match self.shape {
            MonomerShape::Bead { .. } => &mut [],
            MonomerShape::AlphaB {
                num_acd, num_ntd, ..
            } => &mut self.particles[num_acd + num_ntd..],
        }
    }

    /// Arithmetic mean of all owned particle positions.
    pub fn center(&self) -> Point3<f64> {
        mean_position(&self.particles)
    }

    /// Arithmetic mean of the ACD particle positions.
    ///
    /// Falls back to the whole-monomer center for bead monomers.
    pub fn acd_center(&self) -> Point3<f64> {
        match self.shape {
            MonomerShape::Bead { .. } => self.center(),
            MonomerShape::AlphaB { .. } => mean_position(self.acd_particles()),
        }
    }

    /// Applies the identical affine transform to every owned particle.
    pub fn apply_transform(&mut self, m: &Matrix4<f64>) {
        for particle in &mut self.particles {
            particle.apply_transform(m);
        }
    }
}

fn mean_position(particles: &[Particle]) -> Point3<f64> {
    let mut sum = Vector3::zeros();
    for particle in particles {
        sum += particle.position.coords;
    }
    Point3::from(sum / particles.len() as f64)
}
