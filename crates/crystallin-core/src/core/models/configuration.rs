use super::monomer::Monomer;

/// The final ordered sequence of monomers plus the periodic box length.
///
/// This is the unit of serialization: created once per construction run and
/// not mutated after being handed to a writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub monomers: Vec<Monomer>,
    pub box_len: f64,
}

impl Configuration {
    pub fn new(monomers: Vec<Monomer>, box_len: f64) -> Self {
        Self { monomers, box_len }
    }

    /// The common particle radius recorded in serialized output, taken from
    /// the first monomer.
    pub fn radius(&self) -> f64 {
        self.monomers.first().map_or(0.0, Monomer::radius)
    }

    pub fn num_particles(&self) -> usize {
        self.monomers.iter().map(|m| m.particles().len()).sum()
    }
}
