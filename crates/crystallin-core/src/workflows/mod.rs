//! # Workflows Module
//!
//! High-level construction procedures, one per supported system. Workflows are
//! the top-level entry points for users of the library: they validate
//! parameters, run the assembly and packing engines, and return a finished
//! [`Configuration`](crate::core::models::configuration::Configuration) ready
//! for serialization. No file I/O happens here.
//!
//! - **Sphere fluids** ([`spheres`]) - Hard spheres and patchy spheres packed
//!   individually into a periodic box
//! - **Monomer and hexamer fluids** ([`fluid`]) - Pre-oriented alphaB
//!   monomers, packed one at a time or as rigid hexamer groups
//! - **Oligomer construction** ([`oligomer`]) - The deterministic tetrahedral
//!   24-mer with constraint-solved assembly angles

pub mod fluid;
pub mod oligomer;
pub mod spheres;
