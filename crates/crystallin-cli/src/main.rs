mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("cgbuild v{} starting up", env!("CARGO_PKG_VERSION"));
    debug!("parsed CLI arguments: {:?}", &cli);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Commands::Spheres(args) => commands::spheres::run_hard_spheres(args, &mut rng),
        Commands::Patchy(args) => commands::spheres::run_patchy(args, &mut rng),
        Commands::Oligomer(args) => commands::oligomer::run(args),
        Commands::Fluid(args) => commands::fluid::run_monomer_fluid(args, &mut rng),
        Commands::Hexamers(args) => commands::fluid::run_hexamer_fluid(args, &mut rng),
    }
}
