pub mod fluid;
pub mod oligomer;
pub mod spheres;

use crate::error::Result;
use crystallin::core::io::json::JsonFile;
use crystallin::core::io::pdb::PdbFile;
use crystallin::core::io::traits::ConfigFile;
use crystallin::core::models::configuration::Configuration;
use std::path::{Path, PathBuf};
use tracing::info;

/// Appends a suffix to a filebase without treating dots in the base as
/// extensions.
fn path_with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut os = base.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

/// Writes the finished configuration as `<filebase>.pdb` and
/// `<filebase>.json`.
pub fn write_outputs(config: &Configuration, filebase: &Path) -> Result<()> {
    let pdb_path = path_with_suffix(filebase, ".pdb");
    let json_path = path_with_suffix(filebase, ".json");

    PdbFile::write_to_path(config, &pdb_path)?;
    JsonFile::write_to_path(config, &json_path)?;

    info!(
        pdb = %pdb_path.display(),
        json = %json_path.display(),
        monomers = config.monomers.len(),
        particles = config.num_particles(),
        "configuration written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_appended_verbatim() {
        let base = Path::new("out/run_0.5");
        assert_eq!(path_with_suffix(base, ".pdb"), PathBuf::from("out/run_0.5.pdb"));
        assert_eq!(path_with_suffix(base, ".json"), PathBuf::from("out/run_0.5.json"));
    }

    #[test]
    fn outputs_land_next_to_each_other() {
        use crystallin::core::models::monomer::Monomer;
        use crystallin::core::models::particle::Particle;

        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("config");
        let config = Configuration::new(
            vec![Monomer::bead(Particle::simple(0, "PAR", 0), 0.5, 0)],
            10.0,
        );
        write_outputs(&config, &base).unwrap();
        assert!(dir.path().join("config.pdb").exists());
        assert!(dir.path().join("config.json").exists());
    }
}
