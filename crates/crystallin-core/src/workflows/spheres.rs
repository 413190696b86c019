use rand::Rng;
use tracing::{info, instrument};

use crate::core::models::configuration::Configuration;
use crate::core::models::monomer::Monomer;
use crate::core::models::particle::Particle;
use crate::core::space::CuboidPbc;
use crate::engine::config::SphereFluidParams;
use crate::engine::error::BuildError;
use crate::engine::packing::Packer;
use crate::engine::utils::sampling;

/// Builds a random configuration of plain hard spheres with no overlaps.
#[instrument(skip_all, name = "hard_sphere_workflow")]
pub fn build_hard_sphere_fluid(
    params: &SphereFluidParams,
    rng: &mut impl Rng,
) -> Result<Configuration, BuildError> {
    build_fluid(params, rng, |index, _| Particle::simple(index, "PAR", 0))
}

/// Builds a random configuration of single-patch spheres, each with a
/// uniformly random patch direction.
#[instrument(skip_all, name = "patchy_sphere_workflow")]
pub fn build_patchy_fluid(
    params: &SphereFluidParams,
    rng: &mut impl Rng,
) -> Result<Configuration, BuildError> {
    build_fluid(params, rng, |index, rng| {
        Particle::patchy(index, "A", 0, sampling::random_unit_vector(rng))
    })
}

fn build_fluid<R: Rng>(
    params: &SphereFluidParams,
    rng: &mut R,
    mut make_particle: impl FnMut(usize, &mut R) -> Particle,
) -> Result<Configuration, BuildError> {
    params.validate()?;
    let space = CuboidPbc::new(params.box_len)?;
    let packer = Packer::new(&space, params.diameter).with_max_attempts(params.max_attempts);
    let radius = params.diameter / 2.0;

    let mut monomers: Vec<Monomer> = Vec::with_capacity(params.num_particles);
    for i in 0..params.num_particles {
        let particle = make_particle(i, rng);
        let mut monomer = Monomer::bead(particle, radius, i);
        packer.place(&mut monomer, &monomers, rng)?;
        monomers.push(monomer);
    }

    info!(
        num_particles = monomers.len(),
        box_len = params.box_len,
        "sphere fluid built"
    );
    Ok(Configuration::new(monomers, params.box_len))
}
