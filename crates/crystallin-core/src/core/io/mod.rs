//! Provides output functionality for configuration file formats.
//!
//! This module contains the writers for the two serialized forms of a finished
//! configuration: a fixed-column structural file for viewer tooling and a JSON
//! document for the downstream simulation engine. Both writers are pure
//! functions of the configuration.

pub mod json;
pub mod pdb;
pub mod traits;
