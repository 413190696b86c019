//! # Engine Module
//!
//! The construction logic of the library: deterministic rigid-body assembly
//! of alphaB-crystallin oligomers, constraint solving over assembly
//! parameters, and rejection-sampling placement of rigid bodies into a
//! periodic box.
//!
//! ## Architecture
//!
//! - **Assembly** ([`assembly`]) - Monomer layout and the dimer → hexamer →
//!   tetrahedral oligomer composition, including the geometric constraint
//!   objectives
//! - **Packing** ([`packing`]) - Hard-sphere overlap testing and random,
//!   collision-free insertion of bodies into the box
//! - **Configuration** ([`config`]) - Build parameters, defaults, validation,
//!   and TOML parameter files
//! - **Error Handling** ([`error`]) - The engine-wide error type

pub mod assembly;
pub mod config;
pub mod error;
pub mod packing;
pub mod utils;
