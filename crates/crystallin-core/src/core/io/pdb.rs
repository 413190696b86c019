use crate::core::io::traits::ConfigFile;
use crate::core::models::configuration::Configuration;
use nalgebra::Point3;
use std::io::{self, Write};
use thiserror::Error;

// Constant placeholders for fields the coarse-grained model has no use for.
const RES_NAME: &str = "ABC";
const CHAIN_ID: char = 'A';
const ELEMENT: &str = "CG";
const PATCH_NAME: &str = "PAT";
const PATCH_OCCUPANCY: f64 = 1.0;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Fixed-column structural file in PDB format (positions only).
///
/// Each monomer is written as one residue; the particle domain tag fills the
/// atom-name field and the domain radius the occupancy field. Patchy particles
/// emit one extra record per patch vector, offset from the particle position
/// by the unit vector itself, so viewers can display patch directions.
pub struct PdbFile;

impl ConfigFile for PdbFile {
    type Error = PdbError;

    fn write_to(config: &Configuration, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut last_record: Option<(usize, usize)> = None;
        for monomer in &config.monomers {
            for particle in monomer.particles() {
                let radius = monomer.radius_for_domain(&particle.domain);
                write_atom(
                    writer,
                    particle.index,
                    &particle.domain,
                    monomer.index(),
                    &particle.position,
                    radius,
                )?;
                if let Some(norm) = particle.patch_norm() {
                    write_atom(
                        writer,
                        particle.index,
                        PATCH_NAME,
                        monomer.index(),
                        &(particle.position + norm),
                        PATCH_OCCUPANCY,
                    )?;
                }
                if let Some(orient) = particle.patch_orient() {
                    write_atom(
                        writer,
                        particle.index,
                        PATCH_NAME,
                        monomer.index(),
                        &(particle.position + orient),
                        PATCH_OCCUPANCY,
                    )?;
                }
                last_record = Some((particle.index, monomer.index()));
            }
        }

        if let Some((serial, res_seq)) = last_record {
            writeln!(
                writer,
                "TER   {:>5}      {:<3} {:1}{:>4} ",
                serial + 1,
                RES_NAME,
                CHAIN_ID,
                res_seq
            )?;
        }
        Ok(())
    }
}

fn write_atom(
    writer: &mut impl Write,
    serial: usize,
    name: &str,
    res_seq: usize,
    pos: &Point3<f64>,
    occupancy: f64,
) -> io::Result<()> {
    writeln!(
        writer,
        "ATOM  {:>5}  {:<3} {:<3} {:1}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:18}{}  ",
        serial, name, RES_NAME, CHAIN_ID, res_seq, pos.x, pos.y, pos.z, occupancy, "", ELEMENT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::monomer::Monomer;
    use crate::core::models::particle::Particle;
    use nalgebra::Vector3;

    fn write_to_string(config: &Configuration) -> String {
        let mut buffer = Vec::new();
        PdbFile::write_to(config, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn bead_config() -> Configuration {
        let monomers = (0..3)
            .map(|i| {
                let mut particle = Particle::simple(i, "PAR", 0);
                particle.position = Point3::new(i as f64, 0.0, -1.5);
                Monomer::bead(particle, 0.5, i)
            })
            .collect();
        Configuration::new(monomers, 10.0)
    }

    #[test]
    fn atom_record_has_fixed_columns() {
        let output = write_to_string(&bead_config());
        let first = output.lines().next().unwrap();
        assert_eq!(first.len(), 82);
        assert_eq!(&first[0..6], "ATOM  ");
        assert_eq!(&first[6..11], "    0");
        assert_eq!(&first[13..16], "PAR");
        assert_eq!(&first[17..20], "ABC");
        assert_eq!(&first[21..22], "A");
        assert_eq!(&first[22..26], "   0");
        assert_eq!(&first[30..38], "   0.000");
        assert_eq!(&first[38..46], "   0.000");
        assert_eq!(&first[46..54], "  -1.500");
        assert_eq!(&first[54..60], "  0.50");
        assert_eq!(&first[78..80], "CG");
    }

    #[test]
    fn one_atom_record_per_bead_plus_one_terminator() {
        let output = write_to_string(&bead_config());
        let atom_lines = output.lines().filter(|l| l.starts_with("ATOM")).count();
        let ter_lines: Vec<&str> = output.lines().filter(|l| l.starts_with("TER")).collect();
        assert_eq!(atom_lines, 3);
        assert_eq!(ter_lines.len(), 1);
        // Terminator serial is one past the last particle index.
        assert_eq!(ter_lines[0], "TER       3      ABC A   2 ");
    }

    #[test]
    fn patch_vectors_emit_synthetic_records() {
        let mut particle = Particle::oriented(0, "A", 0, Vector3::x(), Vector3::y());
        particle.position = Point3::new(1.0, 2.0, 3.0);
        let config = Configuration::new(vec![Monomer::bead(particle, 0.5, 0)], 10.0);
        let output = write_to_string(&config);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4); // particle + two patch records + TER
        assert_eq!(&lines[1][13..16], "PAT");
        // Patch-normal endpoint sits one unit along x from the particle.
        assert_eq!(&lines[1][30..38], "   2.000");
        assert_eq!(&lines[1][54..60], "  1.00");
        // Patch-orientation endpoint sits one unit along y.
        assert_eq!(&lines[2][38..46], "   3.000");
    }

    #[test]
    fn empty_configuration_writes_nothing() {
        let output = write_to_string(&Configuration::new(Vec::new(), 10.0));
        assert!(output.is_empty());
    }
}
