use rand::Rng;
use tracing::{info, instrument};

use crate::core::models::configuration::Configuration;
use crate::core::models::monomer::Monomer;
use crate::core::space::CuboidPbc;
use crate::engine::assembly::{self, MonomerSpec};
use crate::engine::config::{HexamerFluidParams, MonomerFluidParams};
use crate::engine::error::BuildError;
use crate::engine::packing::Packer;

/// Builds a random configuration of individual alphaB monomers with no
/// overlaps. Each monomer is tumbled about its own center before every
/// placement trial.
#[instrument(skip_all, name = "monomer_fluid_workflow")]
pub fn build_monomer_fluid(
    params: &MonomerFluidParams,
    rng: &mut impl Rng,
) -> Result<Configuration, BuildError> {
    params.validate()?;
    let space = CuboidPbc::new(params.box_len)?;
    let packer = Packer::new(&space, params.diameter).with_max_attempts(params.max_attempts);
    let radius = params.diameter / 2.0;
    let spec = MonomerSpec {
        acd_radius: radius,
        ntd_radius: radius,
        num_acd_spheres: params.num_acd_spheres,
        num_ntd_spheres: params.num_ntd_spheres,
    };

    let oriented = assembly::build_monomers(&spec, params.num_monomers, &params.angles)?;
    let mut placed: Vec<Monomer> = Vec::with_capacity(oriented.len());
    for mut monomer in oriented {
        packer.place_tumbled(&mut monomer, &placed, rng)?;
        placed.push(monomer);
    }

    info!(
        num_monomers = placed.len(),
        box_len = params.box_len,
        "monomer fluid built"
    );
    Ok(Configuration::new(placed, params.box_len))
}

/// Builds a random configuration of pre-assembled alphaB hexamers, each
/// placed as one rigid group with no overlaps against earlier hexamers.
#[instrument(skip_all, name = "hexamer_fluid_workflow")]
pub fn build_hexamer_fluid(
    params: &HexamerFluidParams,
    rng: &mut impl Rng,
) -> Result<Configuration, BuildError> {
    params.validate()?;
    let space = CuboidPbc::new(params.box_len)?;
    let packer = Packer::new(&space, params.diameter).with_max_attempts(params.max_attempts);
    let radius = params.diameter / 2.0;
    let spec = MonomerSpec {
        acd_radius: radius,
        ntd_radius: radius,
        num_acd_spheres: params.num_acd_spheres,
        num_ntd_spheres: params.num_ntd_spheres,
    };

    let mut monomers =
        assembly::build_monomers(&spec, 6 * params.num_hexamers, &params.angles)?;
    for hexamer in monomers.chunks_mut(6) {
        for pair in hexamer.chunks_mut(2) {
            assembly::compose_dimer(pair)?;
        }
        assembly::compose_hexamer(hexamer)?;
    }

    let mut placed: Vec<Monomer> = Vec::with_capacity(monomers.len());
    for _ in 0..params.num_hexamers {
        let mut group: Vec<Monomer> = monomers.drain(..6).collect();
        packer.place_group(&mut group, &placed, rng)?;
        placed.extend(group);
    }

    info!(
        num_hexamers = params.num_hexamers,
        num_monomers = placed.len(),
        box_len = params.box_len,
        "hexamer fluid built"
    );
    Ok(Configuration::new(placed, params.box_len))
}
