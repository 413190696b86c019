use nalgebra::{Point3, Vector3};
use tracing::{instrument, trace};

use super::config::MonomerAngles;
use super::error::BuildError;
use crate::core::models::monomer::Monomer;
use crate::core::models::particle::Particle;
use crate::core::utils::geometry;
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI};

/// Number of monomers in the base tetrahedral oligomer.
pub const OLIGOMER_MONOMERS: usize = 24;

/// Monomer pair whose terminal NTD spheres meet at the assembly nexus.
const NEXUS_MONOMERS: (usize, usize) = (0, 23);

/// Monomer pairs whose blob particles coincide in the closed oligomer.
const BLOB_CONTACT_MONOMERS: [(usize, usize); 2] = [(0, 3), (0, 23)];

/// Geometric inputs for laying out one alphaB monomer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonomerSpec {
    pub acd_radius: f64,
    pub ntd_radius: f64,
    pub num_acd_spheres: usize,
    pub num_ntd_spheres: usize,
}

/// Builds `count` identically oriented monomers with consecutive monomer
/// indices and globally consecutive particle indices starting at zero.
pub fn build_monomers(
    spec: &MonomerSpec,
    count: usize,
    angles: &MonomerAngles,
) -> Result<Vec<Monomer>, BuildError> {
    let particles_per_monomer = spec.num_acd_spheres + spec.num_ntd_spheres + 1;
    (0..count)
        .map(|i| build_monomer(spec, i, i * particles_per_monomer, angles))
        .collect()
}

/// Builds one alphaB monomer and orients it to the given angles.
///
/// Patch assignments are tied to the way the particles are later oriented: the
/// first ACD sphere carries the oriented dimer patch, the remaining ACD
/// spheres and the first NTD sphere carry plain patches facing the neighbor
/// monomer, and the rest are plain spheres. Changing the sphere counts may
/// call for revisiting these choices.
fn build_monomer(
    spec: &MonomerSpec,
    index: usize,
    first_particle_index: usize,
    angles: &MonomerAngles,
) -> Result<Monomer, BuildError> {
    let mut particle_index = first_particle_index;
    let mut type_id = 0u32;

    let mut acd_particles = Vec::with_capacity(spec.num_acd_spheres);
    for j in 0..spec.num_acd_spheres {
        let particle = if j == 0 {
            Particle::oriented(particle_index, "ACD", type_id, -Vector3::y(), Vector3::x())
        } else {
            Particle::patchy(particle_index, "ACD", type_id, -Vector3::x())
        };
        acd_particles.push(particle);
        particle_index += 1;
        type_id += 1;
    }

    let mut ntd_particles = Vec::with_capacity(spec.num_ntd_spheres);
    for j in 0..spec.num_ntd_spheres {
        let particle = if j == 0 {
            Particle::patchy(particle_index, "NTD", type_id, -Vector3::x())
        } else {
            Particle::simple(particle_index, "NTD", type_id)
        };
        ntd_particles.push(particle);
        particle_index += 1;
        type_id += 1;
    }

    let blob_particles = vec![Particle::simple(particle_index, "BLB", type_id)];

    let mut monomer = Monomer::alpha_b(
        acd_particles,
        ntd_particles,
        blob_particles,
        spec.acd_radius,
        spec.ntd_radius,
        index,
    );
    orient_monomer(&mut monomer, spec, angles)?;
    Ok(monomer)
}

/// Orients a freshly constructed monomer to the given ACD-NTD and blob angles.
fn orient_monomer(
    monomer: &mut Monomer,
    spec: &MonomerSpec,
    angles: &MonomerAngles,
) -> Result<(), BuildError> {
    let acd_radius = spec.acd_radius;
    let ntd_radius = spec.ntd_radius;
    let z_axis = Vector3::z();
    let z_axis_angle = -FRAC_PI_6;

    // ACD spheres along +y, the edge of the first sphere touching the origin.
    for (j, particle) in monomer.acd_particles_mut().iter_mut().enumerate() {
        particle.position.y = (2 * j + 1) as f64 * acd_radius;
    }

    let last_acd = spec.num_acd_spheres - 1;
    let last_acd_pos = monomer.acd_particles()[last_acd].position;
    let acd_z_rotation = geometry::rotation_about_point(&z_axis, z_axis_angle, &last_acd_pos)?;

    // Pre-rotate the last ACD sphere so its patch faces the eventual dimer
    // partner; the position is on the rotation axis and stays put.
    monomer.acd_particles_mut()[last_acd].apply_transform(&acd_z_rotation);

    // The NTD bend axis is the x axis carried through the same z rotation.
    let z_rotation = geometry::rotation_about_axis(&z_axis, z_axis_angle)?;
    let ntd_xy_axis = geometry::linear_part(&z_rotation) * Vector3::x();
    let bend = geometry::rotation_about_point(&ntd_xy_axis, angles.acd_ntd, &last_acd_pos)?;
    let ntd_transform = bend * acd_z_rotation;

    // NTD spheres continue along +y, then take the composed bend.
    let mut chain_position = spec.num_acd_spheres;
    for particle in monomer.ntd_particles_mut() {
        particle.position.y +=
            2.0 * (chain_position - 1) as f64 * ntd_radius + 2.0 * acd_radius + ntd_radius;
        particle.apply_transform(&ntd_transform);
        chain_position += 1;
    }

    // The blob marker trails the NTD chain by half a sphere, follows the NTD
    // bend, then takes its two auxiliary rotations about the last NTD sphere.
    let last_ntd_pos = monomer.ntd_particles()[spec.num_ntd_spheres - 1].position;
    let blob_rotation1 =
        geometry::rotation_about_point(&Vector3::x(), angles.blob[0], &last_ntd_pos)?;
    let blob_rotation2 =
        geometry::rotation_about_point(&Vector3::y(), angles.blob[1], &last_ntd_pos)?;
    let blob_transform = blob_rotation1 * blob_rotation2;
    let blob_offset =
        2.0 * (chain_position - 1) as f64 * ntd_radius + 2.0 * acd_radius + 1.5 * ntd_radius;
    for particle in monomer.blob_particles_mut() {
        particle.position.y += blob_offset;
        particle.apply_transform(&ntd_transform);
        particle.apply_transform(&blob_transform);
    }

    Ok(())
}

/// Binds two identically placed monomers into a dimer by reflecting the
/// second across the y-normal plane through the origin.
pub fn compose_dimer(pair: &mut [Monomer]) -> Result<(), BuildError> {
    let reflection = geometry::reflection_across_plane(&Vector3::y())?;
    pair[1].apply_transform(&reflection);
    Ok(())
}

/// Arranges six monomers (three dimers) into a closed triangular hexamer with
/// one corner on the y axis, re-centered so the mean ACD center sits at the
/// origin.
pub fn compose_hexamer(monomers: &mut [Monomer]) -> Result<(), BuildError> {
    let z_axis = Vector3::z();

    // The second and third dimers start out pointing the other way.
    let half_turn = geometry::rotation_about_axis(&z_axis, PI)?;
    for monomer in &mut monomers[2..6] {
        monomer.apply_transform(&half_turn);
    }

    // Rotate everything 30 degrees off the y axis about the triangle corner,
    // one sphere beyond the last ACD sphere of the first monomer.
    let acd = monomers[0].acd_particles();
    let mut corner = acd[acd.len() - 1].position;
    corner.y += 2.0 * monomers[0].radius();
    let rotate30 = geometry::rotation_about_point(&z_axis, FRAC_PI_6, &corner)?;
    for monomer in monomers.iter_mut() {
        monomer.apply_transform(&rotate30);
    }

    // Swing the second dimer across the y axis.
    let rotate_back60 = geometry::rotation_about_point(&z_axis, -FRAC_PI_3, &corner)?;
    for monomer in &mut monomers[2..4] {
        monomer.apply_transform(&rotate_back60);
    }

    // Close the bottom edge with the third dimer, pivoting about the point
    // extrapolated one chain length along the second monomer's ACD chain.
    let acd = monomers[1].acd_particles();
    let first_pos = acd[0].position;
    let last_pos = acd[acd.len() - 1].position;
    let pivot = last_pos + (last_pos - first_pos);
    let rotate60 = geometry::rotation_about_point(&z_axis, FRAC_PI_3, &pivot)?;
    for monomer in &mut monomers[4..6] {
        monomer.apply_transform(&rotate60);
    }

    // Center the triangle on the origin.
    let mut center = Vector3::zeros();
    for monomer in monomers.iter() {
        center += monomer.acd_center().coords;
    }
    center /= monomers.len() as f64;
    let recenter = geometry::translation(&-center);
    for monomer in monomers.iter_mut() {
        monomer.apply_transform(&recenter);
    }

    Ok(())
}

/// Positions four hexamers (24 monomers) at the vertices of a regular
/// tetrahedron with the given arm length.
pub fn compose_tetrahedron(monomers: &mut [Monomer], arm_length: f64) -> Result<(), BuildError> {
    let drop_arm = geometry::translation(&Vector3::new(0.0, 0.0, -arm_length));
    for monomer in monomers.iter_mut() {
        monomer.apply_transform(&drop_arm);
    }

    let tetrahedral_angle = (-1.0f64 / 3.0).acos();
    let tilt = geometry::rotation_about_axis(&Vector3::x(), tetrahedral_angle)?;
    let rotate60 = geometry::rotation_about_axis(&Vector3::z(), FRAC_PI_3)?;
    let rotate120 = geometry::rotation_about_axis(&Vector3::z(), 2.0 * FRAC_PI_3)?;

    let arm2 = rotate60 * tilt;
    let arm3 = rotate120 * arm2;
    let arm4 = rotate120 * arm3;
    for (hexamer, transform) in monomers[6..].chunks_mut(6).zip([arm2, arm3, arm4]) {
        for monomer in hexamer {
            monomer.apply_transform(&transform);
        }
    }

    Ok(())
}

/// Deterministically builds the full tetrahedral oligomer from the given
/// angles: 24 monomers paired into dimers, grouped into hexamers, and closed
/// into a tetrahedron.
#[instrument(level = "debug", skip_all)]
pub fn assemble_oligomer(
    spec: &MonomerSpec,
    arm_length: f64,
    angles: &MonomerAngles,
) -> Result<Vec<Monomer>, BuildError> {
    let mut monomers = build_monomers(spec, OLIGOMER_MONOMERS, angles)?;
    for pair in monomers.chunks_mut(2) {
        compose_dimer(pair)?;
    }
    for hexamer in monomers.chunks_mut(6) {
        compose_hexamer(hexamer)?;
    }
    compose_tetrahedron(&mut monomers, arm_length)?;
    trace!(arm_length, "oligomer composed");
    Ok(monomers)
}

/// Signed gap between the two NTD spheres expected to touch at the assembly
/// nexus, for a trial oligomer built with the given ACD-NTD angle. Zero at
/// correct contact.
pub fn nexus_gap(
    spec: &MonomerSpec,
    arm_length: f64,
    acd_ntd_angle: f64,
) -> Result<f64, BuildError> {
    let angles = MonomerAngles {
        acd_ntd: acd_ntd_angle,
        blob: [0.0, 0.0],
    };
    let monomers = assemble_oligomer(spec, arm_length, &angles)?;
    let (i, j) = NEXUS_MONOMERS;
    let first = last_ntd_position(&monomers[i]);
    let second = last_ntd_position(&monomers[j]);
    Ok((second - first).norm() - 2.0 * spec.ntd_radius)
}

/// Summed distance between the blob pairs that coincide in the closed
/// oligomer, for a trial oligomer built with the given blob angles. Minimal at
/// correct placement.
pub fn blob_mismatch(
    spec: &MonomerSpec,
    arm_length: f64,
    acd_ntd_angle: f64,
    blob_angles: [f64; 2],
) -> Result<f64, BuildError> {
    let angles = MonomerAngles {
        acd_ntd: acd_ntd_angle,
        blob: blob_angles,
    };
    let monomers = assemble_oligomer(spec, arm_length, &angles)?;
    let total = BLOB_CONTACT_MONOMERS
        .iter()
        .map(|&(i, j)| {
            let first = monomers[i].blob_particles()[0].position;
            let second = monomers[j].blob_particles()[0].position;
            (second - first).norm()
        })
        .sum();
    Ok(total)
}

/// Extends the assembled oligomer with a deep copy of its first dimer,
/// re-indexed and rotated half a turn about the x axis through the copied
/// blob position.
pub fn append_capping_dimer(monomers: &mut Vec<Monomer>) -> Result<(), BuildError> {
    let next_particle_index = monomers
        .iter()
        .flat_map(|m| m.particles())
        .map(|p| p.index)
        .max()
        .map_or(0, |i| i + 1);
    let next_monomer_index = monomers.len();

    let mut first = monomers[0].clone();
    let mut second = monomers[1].clone();
    first.set_index(next_monomer_index);
    second.set_index(next_monomer_index + 1);

    let mut counter = next_particle_index;
    for particle in first
        .particles_mut()
        .iter_mut()
        .chain(second.particles_mut().iter_mut())
    {
        particle.index = counter;
        counter += 1;
    }

    let pivot = first.blob_particles()[0].position;
    let flip = geometry::rotation_about_point(&Vector3::x(), PI, &pivot)?;
    first.apply_transform(&flip);
    second.apply_transform(&flip);

    monomers.push(first);
    monomers.push(second);
    Ok(())
}

fn last_ntd_position(monomer: &Monomer) -> Point3<f64> {
    let ntd = monomer.ntd_particles();
    ntd[ntd.len() - 1].position
}
