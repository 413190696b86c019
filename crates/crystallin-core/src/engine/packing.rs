use nalgebra::Vector3;
use rand::Rng;
use thiserror::Error;
use tracing::trace;

use super::utils::sampling;
use crate::core::models::monomer::Monomer;
use crate::core::space::CuboidPbc;
use crate::core::utils::geometry;

/// Retry budget before a placement attempt is declared infeasible.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackingError {
    #[error(
        "no overlap-free placement found after {attempts} attempts \
         (diameter {diameter}, box length {box_len})"
    )]
    InfeasibleDensity {
        attempts: usize,
        diameter: f64,
        box_len: f64,
    },
}

/// Rejection-sampling insertion of rigid bodies into a periodic box.
///
/// A body is a monomer (or a rigid group of monomers) whose particles must
/// all clear every particle of every previously accepted body by at least the
/// configured diameter under the minimum-image metric. Self-overlap within a
/// body is never checked.
pub struct Packer<'a> {
    space: &'a CuboidPbc,
    diameter: f64,
    max_attempts: usize,
}

impl<'a> Packer<'a> {
    pub fn new(space: &'a CuboidPbc, diameter: f64) -> Self {
        Self {
            space,
            diameter,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Hard-sphere overlap test of a candidate body against all previously
    /// placed monomers. Short-circuits on the first overlapping pair.
    pub fn overlaps(&self, candidate: &Monomer, placed: &[Monomer]) -> bool {
        for monomer in placed {
            for new_particle in candidate.particles() {
                for old_particle in monomer.particles() {
                    let distance = self
                        .space
                        .distance(&new_particle.position, &old_particle.position);
                    if distance < self.diameter {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Places a body at a uniformly random position in the box, keeping its
    /// current orientation.
    pub fn place(
        &self,
        monomer: &mut Monomer,
        placed: &[Monomer],
        rng: &mut impl Rng,
    ) -> Result<(), PackingError> {
        self.try_place(monomer, placed, rng, false)
    }

    /// Places a body at a uniformly random position, re-rotating it about its
    /// own center before every translation trial.
    pub fn place_tumbled(
        &self,
        monomer: &mut Monomer,
        placed: &[Monomer],
        rng: &mut impl Rng,
    ) -> Result<(), PackingError> {
        self.try_place(monomer, placed, rng, true)
    }

    /// Places a rigid group of monomers with one shared random offset per
    /// trial, preserving the group's internal geometry.
    pub fn place_group(
        &self,
        group: &mut [Monomer],
        placed: &[Monomer],
        rng: &mut impl Rng,
    ) -> Result<(), PackingError> {
        for attempt in 1..=self.max_attempts {
            let delta = sampling::random_box_position(self.space.box_len(), rng).coords;
            for monomer in group.iter_mut() {
                for particle in monomer.particles_mut() {
                    particle.position = self.space.wrap(&(particle.position + delta));
                }
            }
            if group.iter().all(|m| !self.overlaps(m, placed)) {
                trace!(attempt, "placed rigid group");
                return Ok(());
            }
        }
        Err(self.infeasible())
    }

    fn try_place(
        &self,
        monomer: &mut Monomer,
        placed: &[Monomer],
        rng: &mut impl Rng,
        tumble: bool,
    ) -> Result<(), PackingError> {
        for attempt in 1..=self.max_attempts {
            if tumble {
                self.tumble(monomer, rng);
            }
            self.translate_to_random(monomer, rng);
            if !self.overlaps(monomer, placed) {
                trace!(attempt, "placed body");
                return Ok(());
            }
        }
        Err(self.infeasible())
    }

    /// Three sequential lab-axis rotations about the body center. Not a
    /// uniform sampler on SO(3); the orientation bias is an accepted
    /// approximation.
    fn tumble(&self, monomer: &mut Monomer, rng: &mut impl Rng) {
        for axis in [Vector3::x_axis(), Vector3::y_axis(), Vector3::x_axis()] {
            let center = monomer.center();
            let rotation = geometry::rotation_about_unit_axis_point(
                &axis,
                sampling::random_angle(rng),
                &center,
            );
            monomer.apply_transform(&rotation);
        }
    }

    /// Moves the body's reference particle to a uniformly random position and
    /// carries every other particle rigidly, re-wrapping each into the box.
    fn translate_to_random(&self, monomer: &mut Monomer, rng: &mut impl Rng) {
        let target = sampling::random_box_position(self.space.box_len(), rng);
        let reference = monomer.particles()[0].position;
        for particle in monomer.particles_mut() {
            let offset = particle.position - reference;
            particle.position = self.space.wrap(&(target + offset));
        }
    }

    fn infeasible(&self) -> PackingError {
        PackingError::InfeasibleDensity {
            attempts: self.max_attempts,
            diameter: self.diameter,
            box_len: self.space.box_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::particle::Particle;
    use nalgebra::Point3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bead_at(index: usize, x: f64, y: f64, z: f64) -> Monomer {
        let mut particle = Particle::simple(index, "PAR", 0);
        particle.position = Point3::new(x, y, z);
        Monomer::bead(particle, 0.5, index)
    }

    #[test]
    fn overlap_detects_close_pairs_across_the_boundary() {
        let space = CuboidPbc::new(10.0).unwrap();
        let packer = Packer::new(&space, 1.0);
        let placed = vec![bead_at(0, 4.9, 0.0, 0.0)];

        // Naively 9.7 away, but only 0.3 through the boundary.
        let candidate = bead_at(1, -4.8, 0.0, 0.0);
        assert!(packer.overlaps(&candidate, &placed));

        let candidate = bead_at(1, 0.0, 3.0, 0.0);
        assert!(!packer.overlaps(&candidate, &placed));
    }

    #[test]
    fn placed_beads_never_overlap() {
        let space = CuboidPbc::new(20.0).unwrap();
        let packer = Packer::new(&space, 1.0);
        let mut rng = StdRng::seed_from_u64(42);

        let mut placed: Vec<Monomer> = Vec::new();
        for i in 0..10 {
            let mut monomer = bead_at(i, 0.0, 0.0, 0.0);
            packer.place(&mut monomer, &placed, &mut rng).unwrap();
            placed.push(monomer);
        }

        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                let d = space.distance(&a.particles()[0].position, &b.particles()[0].position);
                assert!(d >= 1.0, "pair at distance {d}");
            }
        }
    }

    #[test]
    fn placement_keeps_positions_inside_the_box() {
        let space = CuboidPbc::new(8.0).unwrap();
        let packer = Packer::new(&space, 0.5);
        let mut rng = StdRng::seed_from_u64(3);

        let mut monomer = bead_at(0, 0.0, 0.0, 0.0);
        packer.place(&mut monomer, &[], &mut rng).unwrap();
        for particle in monomer.particles() {
            for i in 0..3 {
                assert!(particle.position[i].abs() <= 4.0);
            }
        }
    }

    #[test]
    fn infeasible_density_fails_after_retry_cap() {
        let space = CuboidPbc::new(2.0).unwrap();
        // A sphere with diameter 3 can never clear an already placed one in a
        // box of length 2.
        let packer = Packer::new(&space, 3.0).with_max_attempts(50);
        let mut rng = StdRng::seed_from_u64(1);

        let placed = vec![bead_at(0, 0.0, 0.0, 0.0)];
        let mut monomer = bead_at(1, 0.0, 0.0, 0.0);
        let result = packer.place(&mut monomer, &placed, &mut rng);
        assert_eq!(
            result,
            Err(PackingError::InfeasibleDensity {
                attempts: 50,
                diameter: 3.0,
                box_len: 2.0,
            })
        );
    }

    #[test]
    fn tumbled_placement_preserves_internal_geometry() {
        let space = CuboidPbc::new(40.0).unwrap();
        let packer = Packer::new(&space, 1.0);
        let mut rng = StdRng::seed_from_u64(9);

        let acd = vec![Particle::patchy(0, "ACD", 0, Vector3::x())];
        let ntd = vec![Particle::simple(1, "NTD", 1)];
        let mut monomer = Monomer::alpha_b(acd, ntd, Vec::new(), 0.5, 0.5, 0);
        monomer.particles_mut()[1].position = Point3::new(1.0, 0.0, 0.0);

        packer.place_tumbled(&mut monomer, &[], &mut rng).unwrap();
        let d = space.distance(
            &monomer.particles()[1].position,
            &monomer.particles()[0].position,
        );
        assert!((d - 1.0).abs() < 1e-9);
        // Patch vectors stay unit length through the tumbling rotations.
        let norm = monomer.particles()[0].patch_norm().unwrap().norm();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn group_placement_moves_monomers_by_a_shared_offset() {
        let space = CuboidPbc::new(50.0).unwrap();
        let packer = Packer::new(&space, 1.0);
        let mut rng = StdRng::seed_from_u64(5);

        let mut group = vec![bead_at(0, 0.0, 0.0, 0.0), bead_at(1, 2.0, 0.0, 0.0)];
        packer.place_group(&mut group, &[], &mut rng).unwrap();
        let d = space.distance(
            &group[1].particles()[0].position,
            &group[0].particles()[0].position,
        );
        assert!((d - 2.0).abs() < 1e-9);
    }
}
