use thiserror::Error;

use super::config::ConfigError;
use super::packing::PackingError;
use super::utils::solver::SolverError;
use crate::core::space::SpaceError;
use crate::core::utils::geometry::GeometryError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("degenerate geometry: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("invalid periodic box: {source}")]
    Space {
        #[from]
        source: SpaceError,
    },

    #[error("constraint solving failed: {source}")]
    Solver {
        #[from]
        source: SolverError,
    },

    #[error("placement failed: {source}")]
    Packing {
        #[from]
        source: PackingError,
    },

    #[error("invalid build parameters: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
