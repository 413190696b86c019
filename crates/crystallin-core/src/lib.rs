//! # Crystallin Core Library
//!
//! A library for constructing initial particle configurations of coarse-grained
//! alphaB-crystallin oligomers and simple hard-sphere systems, and serializing
//! them to the structural file formats consumed by downstream simulation and
//! analysis tools.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (particles,
//!   monomers, configurations), the homogeneous-coordinate geometry kernel, the
//!   periodic boundary space, and the structural-file writers.
//!
//! - **[`engine`]: The Logic Core.** This layer implements the rigid-body assembly
//!   pipeline (dimer → hexamer → tetrahedral oligomer with constraint solving),
//!   the rejection-sampling packing engine, and build-parameter handling.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties `engine` and `core` together into complete construction procedures, one
//!   per supported system: hard-sphere fluids, patchy-sphere fluids, monomer and
//!   hexamer fluids, and the full tetrahedral oligomer.

pub mod core;
pub mod engine;
pub mod workflows;
