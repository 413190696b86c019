use crate::cli::OligomerArgs;
use crate::error::Result;
use crystallin::engine::config::{self, OligomerParams};
use crystallin::workflows::oligomer;
use tracing::info;

pub fn run(args: OligomerArgs) -> Result<()> {
    let mut params = match &args.params {
        Some(path) => config::load_params::<OligomerParams>(path)?,
        None => OligomerParams::default(),
    };
    params.num_acd_spheres = args.num_acd_spheres;
    params.num_ntd_spheres = args.num_ntd_spheres;
    params.arm_to_edge = args.arm_to_edge;
    params.box_len = args.box_len;

    info!(
        num_acd_spheres = params.num_acd_spheres,
        num_ntd_spheres = params.num_ntd_spheres,
        arm_to_edge = params.arm_to_edge,
        "building oligomer"
    );
    let build = oligomer::build_oligomer(&params)?;

    // Solved angles go to stdout for downstream bookkeeping.
    println!(
        "{} {} {}",
        build.acd_ntd_angle, build.blob_angles[0], build.blob_angles[1]
    );

    super::write_outputs(&build.configuration, &args.output_filebase)
}
