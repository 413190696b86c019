use crystallin::core::io::json::JsonError;
use crystallin::core::io::pdb::PdbError;
use crystallin::engine::config::ConfigError;
use crystallin::engine::error::BuildError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Parameter file error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write structural file: {0}")]
    Pdb(#[from] PdbError),

    #[error("Failed to write JSON configuration: {0}")]
    Json(#[from] JsonError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
