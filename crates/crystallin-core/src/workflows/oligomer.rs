use tracing::{info, instrument};

use crate::core::models::configuration::Configuration;
use crate::engine::assembly::{self, MonomerSpec};
use crate::engine::config::{MonomerAngles, OligomerParams};
use crate::engine::error::BuildError;
use crate::engine::utils::solver::{self, SolverOptions};

/// A constructed oligomer together with the assembly angles solved for it.
#[derive(Debug, Clone)]
pub struct OligomerBuild {
    pub configuration: Configuration,
    pub acd_ntd_angle: f64,
    pub blob_angles: [f64; 2],
}

/// Constructs the tetrahedral alphaB oligomer.
///
/// The ACD-NTD angle is solved as the root of the nexus-gap constraint over
/// the configured bracket; the two blob angles are then solved jointly by
/// minimizing the blob-contact mismatch, seeded from the configured guess.
/// The final oligomer is assembled from the solved angles and, unless
/// disabled, extended with the capping dimer.
///
/// # Errors
///
/// Fails if the parameters are invalid, if either constraint solve does not
/// converge (no partial oligomer is returned), or on degenerate geometry.
#[instrument(skip_all, name = "oligomer_workflow")]
pub fn build_oligomer(params: &OligomerParams) -> Result<OligomerBuild, BuildError> {
    params.validate()?;
    let spec = MonomerSpec {
        acd_radius: params.acd_radius(),
        ntd_radius: params.ntd_radius(),
        num_acd_spheres: params.num_acd_spheres,
        num_ntd_spheres: params.num_ntd_spheres,
    };
    let arm_length = params.arm_length();

    info!(
        bracket = ?params.angle_bracket,
        arm_length,
        "solving ACD-NTD angle"
    );
    let acd_ntd_angle = solver::find_root_brent(
        |angle| assembly::nexus_gap(&spec, arm_length, angle),
        params.angle_bracket,
        &SolverOptions::for_root_finding(),
    )?;

    info!(acd_ntd_angle, "solving blob angles");
    let solved = solver::minimize_nelder_mead(
        |angles| assembly::blob_mismatch(&spec, arm_length, acd_ntd_angle, [angles[0], angles[1]]),
        &params.blob_angle_guess,
        &SolverOptions::for_minimization(),
    )?;
    let blob_angles = [solved[0], solved[1]];

    let angles = MonomerAngles {
        acd_ntd: acd_ntd_angle,
        blob: blob_angles,
    };
    let mut monomers = assembly::assemble_oligomer(&spec, arm_length, &angles)?;
    if params.extend_structure {
        assembly::append_capping_dimer(&mut monomers)?;
    }

    info!(
        acd_ntd_angle,
        blob_angle1 = blob_angles[0],
        blob_angle2 = blob_angles[1],
        num_monomers = monomers.len(),
        "oligomer assembled"
    );
    Ok(OligomerBuild {
        configuration: Configuration::new(monomers, params.box_len),
        acd_ntd_angle,
        blob_angles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assembly::OLIGOMER_MONOMERS;

    fn base_params() -> OligomerParams {
        OligomerParams {
            box_len: 200.0,
            ..OligomerParams::default()
        }
    }

    #[test]
    fn solved_angle_closes_the_nexus_gap() {
        let params = base_params();
        let build = build_oligomer(&params).unwrap();

        // The default bracket and arm ratio reproduce the known solution.
        assert!((build.acd_ntd_angle - 0.623_656_137_342_567_5).abs() < 1e-9);

        let spec = MonomerSpec {
            acd_radius: params.acd_radius(),
            ntd_radius: params.ntd_radius(),
            num_acd_spheres: params.num_acd_spheres,
            num_ntd_spheres: params.num_ntd_spheres,
        };
        let gap =
            assembly::nexus_gap(&spec, params.arm_length(), build.acd_ntd_angle).unwrap();
        assert!(gap.abs() < 1e-9);
    }

    #[test]
    fn solved_blob_angles_sit_at_the_mismatch_minimum() {
        let params = base_params();
        let build = build_oligomer(&params).unwrap();
        let spec = MonomerSpec {
            acd_radius: params.acd_radius(),
            ntd_radius: params.ntd_radius(),
            num_acd_spheres: params.num_acd_spheres,
            num_ntd_spheres: params.num_ntd_spheres,
        };

        let solved = assembly::blob_mismatch(
            &spec,
            params.arm_length(),
            build.acd_ntd_angle,
            build.blob_angles,
        )
        .unwrap();
        // Known minimum of the summed blob distances is close to zero.
        assert!(solved < 1e-2, "blob mismatch {solved}");

        // Nearby angle pairs do no better than the solved pair, up to the
        // simplex tolerance.
        for delta in [[0.01, 0.0], [0.0, 0.01], [-0.01, 0.0], [0.0, -0.01]] {
            let perturbed = assembly::blob_mismatch(
                &spec,
                params.arm_length(),
                build.acd_ntd_angle,
                [
                    build.blob_angles[0] + delta[0],
                    build.blob_angles[1] + delta[1],
                ],
            )
            .unwrap();
            assert!(perturbed + 1e-4 >= solved);
        }
    }

    #[test]
    fn extended_oligomer_has_26_monomers() {
        let build = build_oligomer(&base_params()).unwrap();
        assert_eq!(build.configuration.monomers.len(), OLIGOMER_MONOMERS + 2);

        let mut indices: Vec<usize> = build
            .configuration
            .monomers
            .iter()
            .flat_map(|m| m.particles())
            .map(|p| p.index)
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..26 * 5).collect::<Vec<_>>());
    }

    #[test]
    fn base_oligomer_can_skip_the_capping_dimer() {
        let params = OligomerParams {
            extend_structure: false,
            ..base_params()
        };
        let build = build_oligomer(&params).unwrap();
        assert_eq!(build.configuration.monomers.len(), OLIGOMER_MONOMERS);
    }

    #[test]
    fn nexus_spheres_touch_in_the_finished_oligomer() {
        let params = OligomerParams {
            extend_structure: false,
            ..base_params()
        };
        let build = build_oligomer(&params).unwrap();
        let monomers = &build.configuration.monomers;

        let first = monomers[0].ntd_particles();
        let last = monomers[23].ntd_particles();
        let d = (last[last.len() - 1].position - first[first.len() - 1].position).norm();
        assert!((d - 2.0 * params.ntd_radius()).abs() < 1e-6);
    }

    #[test]
    fn bracket_without_a_root_is_a_solver_error() {
        let params = OligomerParams {
            // The nexus gap does not change sign over this interval for the
            // default arm ratio.
            angle_bracket: (0.1, 0.2),
            ..base_params()
        };
        assert!(matches!(
            build_oligomer(&params),
            Err(BuildError::Solver { .. })
        ));
    }
}
