use std::mem;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error(
        "objective does not change sign over bracket [{a}, {b}] (f(a) = {fa:.6e}, f(b) = {fb:.6e})"
    )]
    BracketSign { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("solver failed to converge after {iterations} iterations")]
    Convergence { iterations: usize },

    #[error("objective returned a non-finite value at {at:?}")]
    NonFiniteObjective { at: Vec<f64> },

    #[error("initial guess must not be empty")]
    EmptyGuess,
}

/// Termination criteria shared by the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl SolverOptions {
    /// Defaults for bracketed root finding.
    pub fn for_root_finding() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 100,
        }
    }

    /// Defaults for simplex minimization.
    pub fn for_minimization() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 400,
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::for_root_finding()
    }
}

/// Finds a root of `f` within a bracketing interval by Brent's method.
///
/// The objective is fallible; any error it returns aborts the solve. The
/// bracket endpoints must straddle a sign change.
///
/// # Errors
///
/// Returns [`SolverError::BracketSign`] if the endpoints have the same sign,
/// [`SolverError::Convergence`] if the iteration budget is exhausted, and
/// [`SolverError::NonFiniteObjective`] if the objective produces NaN or
/// infinity.
pub fn find_root_brent<F, E>(mut f: F, bracket: (f64, f64), options: &SolverOptions) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    let (mut a, mut b) = bracket;
    let mut fa = eval_scalar(&mut f, a)?;
    let mut fb = eval_scalar(&mut f, b)?;

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa.signum() == fb.signum() {
        return Err(SolverError::BracketSign { a, b, fa, fb }.into());
    }

    if fa.abs() < fb.abs() {
        mem::swap(&mut a, &mut b);
        mem::swap(&mut fa, &mut fb);
    }
    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut bisected = true;

    for _ in 0..options.max_iterations {
        if fb == 0.0 || (b - a).abs() < options.tolerance {
            return Ok(b);
        }

        let mut s = if fa != fc && fb != fc {
            // Inverse quadratic interpolation.
            a * fb * fc / ((fa - fb) * (fa - fc))
                + b * fa * fc / ((fb - fa) * (fb - fc))
                + c * fa * fb / ((fc - fa) * (fc - fb))
        } else {
            // Secant step.
            b - fb * (b - a) / (fb - fa)
        };

        let midpoint = (3.0 * a + b) / 4.0;
        let out_of_bounds = !((midpoint.min(b) < s) && (s < midpoint.max(b)));
        let step_too_small = if bisected {
            (s - b).abs() >= (b - c).abs() / 2.0 || (b - c).abs() < options.tolerance
        } else {
            (s - b).abs() >= (c - d).abs() / 2.0 || (c - d).abs() < options.tolerance
        };
        if out_of_bounds || step_too_small {
            s = (a + b) / 2.0;
            bisected = true;
        } else {
            bisected = false;
        }

        let fs = eval_scalar(&mut f, s)?;
        d = c;
        c = b;
        fc = fb;
        if fa.signum() != fs.signum() {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }
        if fa.abs() < fb.abs() {
            mem::swap(&mut a, &mut b);
            mem::swap(&mut fa, &mut fb);
        }
    }

    Err(SolverError::Convergence {
        iterations: options.max_iterations,
    }
    .into())
}

/// Minimizes `f` by the Nelder-Mead downhill simplex method.
///
/// The initial simplex is built around the seed point; convergence requires
/// both the coordinate spread and the value spread of the simplex to fall
/// below the tolerance.
///
/// # Errors
///
/// Returns [`SolverError::EmptyGuess`] for a zero-dimensional seed,
/// [`SolverError::Convergence`] if the iteration budget is exhausted, and
/// [`SolverError::NonFiniteObjective`] if the objective produces NaN or
/// infinity.
pub fn minimize_nelder_mead<F, E>(
    mut f: F,
    guess: &[f64],
    options: &SolverOptions,
) -> Result<Vec<f64>, E>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
    E: From<SolverError>,
{
    const REFLECT: f64 = 1.0;
    const EXPAND: f64 = 2.0;
    const CONTRACT: f64 = 0.5;
    const SHRINK: f64 = 0.5;
    const NONZERO_STEP: f64 = 0.05;
    const ZERO_STEP: f64 = 0.00025;

    if guess.is_empty() {
        return Err(SolverError::EmptyGuess.into());
    }
    let n = guess.len();

    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    simplex.push(guess.to_vec());
    for i in 0..n {
        let mut vertex = guess.to_vec();
        if vertex[i] != 0.0 {
            vertex[i] *= 1.0 + NONZERO_STEP;
        } else {
            vertex[i] = ZERO_STEP;
        }
        simplex.push(vertex);
    }
    let mut values = Vec::with_capacity(n + 1);
    for vertex in &simplex {
        values.push(eval_vector(&mut f, vertex)?);
    }

    for _ in 0..options.max_iterations {
        sort_simplex(&mut simplex, &mut values);

        let coord_spread = simplex[1..]
            .iter()
            .flat_map(|v| v.iter().zip(&simplex[0]).map(|(x, x0)| (x - x0).abs()))
            .fold(0.0f64, f64::max);
        let value_spread = (values[n] - values[0]).abs();
        if coord_spread <= options.tolerance && value_spread <= options.tolerance {
            return Ok(simplex.swap_remove(0));
        }

        // Centroid of all vertices but the worst.
        let mut centroid = vec![0.0; n];
        for vertex in &simplex[..n] {
            for (c, x) in centroid.iter_mut().zip(vertex) {
                *c += x / n as f64;
            }
        }

        let reflected = combine(&centroid, &simplex[n], REFLECT);
        let f_reflected = eval_vector(&mut f, &reflected)?;

        if f_reflected < values[0] {
            let expanded = combine(&centroid, &simplex[n], EXPAND);
            let f_expanded = eval_vector(&mut f, &expanded)?;
            if f_expanded < f_reflected {
                simplex[n] = expanded;
                values[n] = f_expanded;
            } else {
                simplex[n] = reflected;
                values[n] = f_reflected;
            }
        } else if f_reflected < values[n - 1] {
            simplex[n] = reflected;
            values[n] = f_reflected;
        } else {
            let contracted = combine(&centroid, &simplex[n], -CONTRACT);
            let f_contracted = eval_vector(&mut f, &contracted)?;
            if f_contracted < values[n] {
                simplex[n] = contracted;
                values[n] = f_contracted;
            } else {
                // Shrink everything toward the best vertex.
                let best = simplex[0].clone();
                for (vertex, value) in simplex.iter_mut().zip(values.iter_mut()).skip(1) {
                    for (x, x_best) in vertex.iter_mut().zip(&best) {
                        *x = x_best + SHRINK * (*x - x_best);
                    }
                    *value = eval_vector(&mut f, vertex)?;
                }
            }
        }
    }

    Err(SolverError::Convergence {
        iterations: options.max_iterations,
    }
    .into())
}

fn eval_scalar<F, E>(f: &mut F, x: f64) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    let value = f(x)?;
    if !value.is_finite() {
        return Err(SolverError::NonFiniteObjective { at: vec![x] }.into());
    }
    Ok(value)
}

fn eval_vector<F, E>(f: &mut F, x: &[f64]) -> Result<f64, E>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
    E: From<SolverError>,
{
    let value = f(x)?;
    if !value.is_finite() {
        return Err(SolverError::NonFiniteObjective { at: x.to_vec() }.into());
    }
    Ok(value)
}

/// Point on the line through `worst` and `centroid`: `centroid + factor *
/// (centroid - worst)`. Positive factors reflect away from the worst vertex,
/// negative factors contract toward it.
fn combine(centroid: &[f64], worst: &[f64], factor: f64) -> Vec<f64> {
    centroid
        .iter()
        .zip(worst)
        .map(|(c, w)| c + factor * (c - w))
        .collect()
}

fn sort_simplex(simplex: &mut [Vec<f64>], values: &mut [f64]) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].partial_cmp(&values[j]).unwrap_or(std::cmp::Ordering::Equal));

    let sorted_simplex: Vec<Vec<f64>> = order.iter().map(|&i| simplex[i].clone()).collect();
    let sorted_values: Vec<f64> = order.iter().map(|&i| values[i]).collect();
    for (slot, vertex) in simplex.iter_mut().zip(sorted_simplex) {
        *slot = vertex;
    }
    values.copy_from_slice(&sorted_values);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn brent_finds_cosine_root() {
        let options = SolverOptions::for_root_finding();
        let root: f64 =
            find_root_brent(|x| Ok::<_, SolverError>(x.cos()), (1.0, 2.0), &options).unwrap();
        assert!((root - FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn brent_handles_narrow_brackets() {
        let options = SolverOptions::for_root_finding();
        let root: f64 = find_root_brent(
            |x| Ok::<_, SolverError>(x * x * x - 0.25),
            (0.62, 0.64),
            &options,
        )
        .unwrap();
        assert!((root - 0.25f64.cbrt()).abs() < 1e-10);
    }

    #[test]
    fn brent_rejects_sign_preserving_bracket() {
        let options = SolverOptions::for_root_finding();
        let result: Result<f64, SolverError> =
            find_root_brent(|x| Ok(x * x + 1.0), (-1.0, 1.0), &options);
        assert!(matches!(result, Err(SolverError::BracketSign { .. })));
    }

    #[test]
    fn brent_propagates_objective_errors() {
        let options = SolverOptions::for_root_finding();
        let result: Result<f64, SolverError> = find_root_brent(
            |_| Err(SolverError::EmptyGuess),
            (0.0, 1.0),
            &options,
        );
        assert_eq!(result, Err(SolverError::EmptyGuess));
    }

    #[test]
    fn nelder_mead_finds_quadratic_minimum() {
        let options = SolverOptions::for_minimization();
        let solution = minimize_nelder_mead(
            |x| Ok::<_, SolverError>((x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2)),
            &[0.0, 0.0],
            &options,
        )
        .unwrap();
        assert!((solution[0] - 1.0).abs() < 1e-3);
        assert!((solution[1] + 2.0).abs() < 1e-3);
    }

    #[test]
    fn nelder_mead_minimizes_from_nonzero_seed() {
        let options = SolverOptions::for_minimization();
        let solution = minimize_nelder_mead(
            |x| Ok::<_, SolverError>((x[0] + 0.3).powi(2) + (x[1] + 0.5).powi(2) + 1.0),
            &[-0.319, -0.534],
            &options,
        )
        .unwrap();
        assert!((solution[0] + 0.3).abs() < 1e-3);
        assert!((solution[1] + 0.5).abs() < 1e-3);
    }

    #[test]
    fn nelder_mead_rejects_empty_guess() {
        let options = SolverOptions::for_minimization();
        let result: Result<Vec<f64>, SolverError> =
            minimize_nelder_mead(|_| Ok(0.0), &[], &options);
        assert_eq!(result, Err(SolverError::EmptyGuess));
    }

    #[test]
    fn non_finite_objective_is_an_error() {
        let options = SolverOptions::for_root_finding();
        let result: Result<f64, SolverError> =
            find_root_brent(|_| Ok(f64::NAN), (0.0, 1.0), &options);
        assert!(matches!(result, Err(SolverError::NonFiniteObjective { .. })));
    }
}
