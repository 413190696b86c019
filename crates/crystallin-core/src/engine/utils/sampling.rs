use nalgebra::{Point3, Vector3};
use rand::Rng;
use std::f64::consts::TAU;

/// Samples a vector on the unit sphere with uniform probability.
///
/// Marsaglia rejection sampling, after Allen and Tildesley.
pub fn random_unit_vector(rng: &mut impl Rng) -> Vector3<f64> {
    loop {
        let ran1 = 1.0 - 2.0 * rng.gen_range(0.0..1.0);
        let ran2 = 1.0 - 2.0 * rng.gen_range(0.0..1.0);
        let ransq: f64 = ran1 * ran1 + ran2 * ran2;
        if ransq < 1.0 {
            let ranh = 2.0 * (1.0 - ransq).sqrt();
            return Vector3::new(ran1 * ranh, ran2 * ranh, 1.0 - 2.0 * ransq);
        }
    }
}

/// Samples a rotation angle uniformly in [0, 2π).
pub fn random_angle(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..TAU)
}

/// Samples a position uniformly within a cubic box centered on the origin.
pub fn random_box_position(box_len: f64, rng: &mut impl Rng) -> Point3<f64> {
    Point3::new(
        box_len * rng.gen_range(-0.5..0.5),
        box_len * rng.gen_range(-0.5..0.5),
        box_len * rng.gen_range(-0.5..0.5),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unit_vectors_have_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_unit_vector(&mut rng);
            assert!((v.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn angles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let angle = random_angle(&mut rng);
            assert!((0.0..TAU).contains(&angle));
        }
    }

    #[test]
    fn box_positions_stay_inside_the_box() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = random_box_position(20.0, &mut rng);
            for i in 0..3 {
                assert!(p[i].abs() <= 10.0);
            }
        }
    }
}
