use crate::cli::SphereArgs;
use crate::error::Result;
use crystallin::engine::config::SphereFluidParams;
use crystallin::workflows::spheres;
use rand::Rng;
use tracing::info;

fn params_from_args(args: &SphereArgs) -> SphereFluidParams {
    let mut params = SphereFluidParams {
        num_particles: args.num_particles,
        diameter: args.diameter,
        box_len: args.box_len,
        ..SphereFluidParams::default()
    };
    if let Some(max_attempts) = args.max_attempts {
        params.max_attempts = max_attempts;
    }
    params
}

pub fn run_hard_spheres(args: SphereArgs, rng: &mut impl Rng) -> Result<()> {
    info!(num_particles = args.num_particles, "building hard-sphere fluid");
    let config = spheres::build_hard_sphere_fluid(&params_from_args(&args), rng)?;
    super::write_outputs(&config, &args.output_filebase)
}

pub fn run_patchy(args: SphereArgs, rng: &mut impl Rng) -> Result<()> {
    info!(num_particles = args.num_particles, "building patchy-sphere fluid");
    let config = spheres::build_patchy_fluid(&params_from_args(&args), rng)?;
    super::write_outputs(&config, &args.output_filebase)
}
