use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "cgbuild - Construct initial configurations for coarse-grained \
             alphaB-crystallin and hard-sphere simulations."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Seed for the random number generator used by the placement commands
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack plain hard spheres into a periodic box.
    Spheres(SphereArgs),
    /// Pack single-patch spheres with random patch orientations.
    Patchy(SphereArgs),
    /// Construct the tetrahedral alphaB-crystallin oligomer.
    Oligomer(OligomerArgs),
    /// Pack individual alphaB monomers into a periodic box.
    Fluid(FluidArgs),
    /// Pack pre-assembled alphaB hexamers into a periodic box.
    Hexamers(HexamerArgs),
}

/// Arguments for the `spheres` and `patchy` subcommands.
#[derive(Args, Debug)]
pub struct SphereArgs {
    /// Number of particles to place in the system
    pub num_particles: usize,

    /// Diameter of the particles
    pub diameter: f64,

    /// Edge length of the periodic box
    pub box_len: f64,

    /// Output filebase; `.pdb` and `.json` are appended
    pub output_filebase: PathBuf,

    /// Cap on placement attempts per particle before failing as infeasible
    #[arg(long, value_name = "NUM")]
    pub max_attempts: Option<usize>,
}

/// Arguments for the `oligomer` subcommand.
#[derive(Args, Debug)]
pub struct OligomerArgs {
    /// Number of spheres for one monomer's ACD
    pub num_acd_spheres: usize,

    /// Number of spheres for one monomer's NTD
    pub num_ntd_spheres: usize,

    /// Tetrahedral arm to triangle edge ratio
    pub arm_to_edge: f64,

    /// Box length recorded in the output configuration
    pub box_len: f64,

    /// Output filebase; `.pdb` and `.json` are appended
    pub output_filebase: PathBuf,

    /// TOML parameter file supplying the remaining oligomer knobs
    /// (angle bracket, blob angle guesses, edge length, extension flag)
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,
}

/// Arguments for the `fluid` subcommand.
#[derive(Args, Debug)]
pub struct FluidArgs {
    /// Number of monomers to place in the system
    pub num_monomers: usize,

    /// Diameter of the particles
    pub diameter: f64,

    /// Edge length of the periodic box
    pub box_len: f64,

    /// Output filebase; `.pdb` and `.json` are appended
    pub output_filebase: PathBuf,

    /// TOML parameter file supplying the remaining fluid knobs
    /// (sphere counts, orientation angles, attempt cap)
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,
}

/// Arguments for the `hexamers` subcommand.
#[derive(Args, Debug)]
pub struct HexamerArgs {
    /// Number of hexamers to place in the system
    pub num_hexamers: usize,

    /// Diameter of the particles
    pub diameter: f64,

    /// Edge length of the periodic box
    pub box_len: f64,

    /// Output filebase; `.pdb` and `.json` are appended
    pub output_filebase: PathBuf,

    /// TOML parameter file supplying the remaining fluid knobs
    /// (sphere counts, orientation angles, attempt cap)
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,
}
