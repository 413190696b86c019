use crate::core::io::traits::ConfigFile;
use crate::core::models::configuration::Configuration;
use crate::core::models::monomer::Monomer;
use crate::core::models::particle::Particle;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The serialized configuration document, rooted at the `cgmonomer` key the
/// downstream simulation engine reads.
///
/// `Deserialize` is derived so round-trips are testable; no public reader
/// workflow exists in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub cgmonomer: ConfigBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigBody {
    pub radius: f64,
    pub box_len: f64,
    pub config: Vec<MonomerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonomerRecord {
    pub index: usize,
    pub particles: Vec<ParticleRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    pub index: usize,
    pub domain: String,
    pub form: String,
    #[serde(rename = "type")]
    pub type_id: u32,
    /// Position with the homogeneous coordinate dropped.
    pub pos: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_norm: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_orient: Option<[f64; 3]>,
}

impl ConfigDocument {
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            cgmonomer: ConfigBody {
                radius: config.radius(),
                box_len: config.box_len,
                config: config.monomers.iter().map(MonomerRecord::from_monomer).collect(),
            },
        }
    }
}

impl MonomerRecord {
    fn from_monomer(monomer: &Monomer) -> Self {
        Self {
            index: monomer.index(),
            particles: monomer
                .particles()
                .iter()
                .map(ParticleRecord::from_particle)
                .collect(),
        }
    }
}

impl ParticleRecord {
    fn from_particle(particle: &Particle) -> Self {
        Self {
            index: particle.index,
            domain: particle.domain.clone(),
            form: particle.form().to_string(),
            type_id: particle.type_id,
            pos: particle.position.coords.into(),
            patch_norm: particle.patch_norm().map(|v| (*v).into()),
            patch_orient: particle.patch_orient().map(|v| (*v).into()),
        }
    }
}

/// JSON configuration writer for the downstream simulation engine.
pub struct JsonFile;

impl ConfigFile for JsonFile {
    type Error = JsonError;

    fn write_to(config: &Configuration, writer: &mut impl Write) -> Result<(), Self::Error> {
        let document = ConfigDocument::from_configuration(config);
        serde_json::to_writer_pretty(&mut *writer, &document)?;
        Ok(())
    }
}
