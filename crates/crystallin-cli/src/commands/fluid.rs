use crate::cli::{FluidArgs, HexamerArgs};
use crate::error::Result;
use crystallin::engine::config::{self, HexamerFluidParams, MonomerFluidParams};
use crystallin::workflows::fluid;
use rand::Rng;
use tracing::info;

pub fn run_monomer_fluid(args: FluidArgs, rng: &mut impl Rng) -> Result<()> {
    let mut params = match &args.params {
        Some(path) => config::load_params::<MonomerFluidParams>(path)?,
        None => MonomerFluidParams::default(),
    };
    params.num_monomers = args.num_monomers;
    params.diameter = args.diameter;
    params.box_len = args.box_len;

    info!(num_monomers = params.num_monomers, "building monomer fluid");
    let config = fluid::build_monomer_fluid(&params, rng)?;
    super::write_outputs(&config, &args.output_filebase)
}

pub fn run_hexamer_fluid(args: HexamerArgs, rng: &mut impl Rng) -> Result<()> {
    let mut params = match &args.params {
        Some(path) => config::load_params::<HexamerFluidParams>(path)?,
        None => HexamerFluidParams::default(),
    };
    params.num_hexamers = args.num_hexamers;
    params.diameter = args.diameter;
    params.box_len = args.box_len;

    info!(num_hexamers = params.num_hexamers, "building hexamer fluid");
    let config = fluid::build_hexamer_fluid(&params, rng)?;
    super::write_outputs(&config, &args.output_filebase)
}
