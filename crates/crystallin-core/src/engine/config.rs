use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::packing::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for parameter '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads a parameter struct from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse into the
/// requested parameter type.
pub fn load_params<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn require_at_least_one(name: &'static str, value: usize) -> Result<(), ConfigError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            reason: "must be at least 1".to_string(),
        })
    }
}

/// Orientation angles for one alphaB monomer: the solved ACD-NTD bend and the
/// two auxiliary blob angles.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonomerAngles {
    pub acd_ntd: f64,
    pub blob: [f64; 2],
}

impl Default for MonomerAngles {
    /// Known-good values solved for the 2 ACD / 2 NTD sphere model.
    fn default() -> Self {
        Self {
            acd_ntd: 0.623_656_137_342_567_5,
            blob: [-0.318_827_603_743, -0.534_300_804_011],
        }
    }
}

/// Parameters for packing single-particle fluids (hard spheres and patchy
/// spheres).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SphereFluidParams {
    pub num_particles: usize,
    pub diameter: f64,
    pub box_len: f64,
    pub max_attempts: usize,
}

impl Default for SphereFluidParams {
    fn default() -> Self {
        Self {
            num_particles: 10,
            diameter: 1.0,
            box_len: 20.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SphereFluidParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_at_least_one("num_particles", self.num_particles)?;
        require_positive("diameter", self.diameter)?;
        require_positive("box_len", self.box_len)?;
        require_at_least_one("max_attempts", self.max_attempts)
    }
}

/// Parameters for constructing the tetrahedral alphaB oligomer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OligomerParams {
    /// Number of spheres in one monomer's ACD chain.
    pub num_acd_spheres: usize,
    /// Number of spheres in one monomer's NTD chain.
    pub num_ntd_spheres: usize,
    /// Tetrahedral arm length as a fraction of the hexamer edge length. The
    /// default pairs with the default angle bracket; changing one without the
    /// other can leave the bracket without a root.
    pub arm_to_edge: f64,
    /// Edge length of the hexamer triangle; fixes the sphere radii.
    pub hexamer_edge_length: f64,
    /// Box length recorded in serialized output.
    pub box_len: f64,
    /// Bracket for the ACD-NTD angle search. The narrow default excludes a
    /// mirror solution admitted by the full geometric interval
    /// [0, pi - arccos(-1/3)].
    pub angle_bracket: (f64, f64),
    /// Seed estimates for the two blob angles.
    pub blob_angle_guess: [f64; 2],
    /// Append the extra capping dimer after assembly (26 monomers total).
    pub extend_structure: bool,
}

impl Default for OligomerParams {
    fn default() -> Self {
        Self {
            num_acd_spheres: 2,
            num_ntd_spheres: 2,
            arm_to_edge: 0.75,
            hexamer_edge_length: 65.0,
            box_len: 100.0,
            angle_bracket: (0.62, 0.63),
            blob_angle_guess: [-0.319, -0.534],
            extend_structure: true,
        }
    }
}

impl OligomerParams {
    pub fn acd_radius(&self) -> f64 {
        self.hexamer_edge_length / (4.0 * self.num_acd_spheres as f64 + 1.0)
    }

    pub fn ntd_radius(&self) -> f64 {
        self.acd_radius()
    }

    pub fn arm_length(&self) -> f64 {
        self.arm_to_edge * self.hexamer_edge_length
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_at_least_one("num_acd_spheres", self.num_acd_spheres)?;
        require_at_least_one("num_ntd_spheres", self.num_ntd_spheres)?;
        require_positive("arm_to_edge", self.arm_to_edge)?;
        require_positive("hexamer_edge_length", self.hexamer_edge_length)?;
        require_positive("box_len", self.box_len)?;
        let (lo, hi) = self.angle_bracket;
        if !(lo < hi) {
            return Err(ConfigError::InvalidValue {
                name: "angle_bracket",
                reason: format!("lower bound {lo} must be below upper bound {hi}"),
            });
        }
        Ok(())
    }
}

/// Parameters for packing individual alphaB monomers into a box.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonomerFluidParams {
    pub num_monomers: usize,
    pub diameter: f64,
    pub box_len: f64,
    pub num_acd_spheres: usize,
    pub num_ntd_spheres: usize,
    /// Monomer orientation angles; the defaults match the 2/2 sphere model.
    pub angles: MonomerAngles,
    pub max_attempts: usize,
}

impl Default for MonomerFluidParams {
    fn default() -> Self {
        Self {
            num_monomers: 10,
            diameter: 1.0,
            box_len: 20.0,
            num_acd_spheres: 2,
            num_ntd_spheres: 2,
            angles: MonomerAngles::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl MonomerFluidParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_at_least_one("num_monomers", self.num_monomers)?;
        require_positive("diameter", self.diameter)?;
        require_positive("box_len", self.box_len)?;
        require_at_least_one("num_acd_spheres", self.num_acd_spheres)?;
        require_at_least_one("num_ntd_spheres", self.num_ntd_spheres)?;
        require_at_least_one("max_attempts", self.max_attempts)
    }
}

/// Parameters for packing pre-assembled hexamers into a box.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HexamerFluidParams {
    pub num_hexamers: usize,
    pub diameter: f64,
    pub box_len: f64,
    pub num_acd_spheres: usize,
    pub num_ntd_spheres: usize,
    /// Monomer orientation angles; the defaults match the 2/2 sphere model.
    pub angles: MonomerAngles,
    pub max_attempts: usize,
}

impl Default for HexamerFluidParams {
    fn default() -> Self {
        Self {
            num_hexamers: 2,
            diameter: 1.0,
            box_len: 20.0,
            num_acd_spheres: 2,
            num_ntd_spheres: 2,
            angles: MonomerAngles::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl HexamerFluidParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_at_least_one("num_hexamers", self.num_hexamers)?;
        require_positive("diameter", self.diameter)?;
        require_positive("box_len", self.box_len)?;
        require_at_least_one("num_acd_spheres", self.num_acd_spheres)?;
        require_at_least_one("num_ntd_spheres", self.num_ntd_spheres)?;
        require_at_least_one("max_attempts", self.max_attempts)
    }
}
