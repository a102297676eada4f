use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use crate::{polynomial::Polynomial, solver::{Bands, Solver}};

/// Per segment coefficients of a natural cubic spline. On segment `i` the spline is
/// `a[i] + b[i]·u + c[i]·u² + d[i]·u³` with `u = z - x[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl Coefficients {

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    pub fn c(&self) -> &[f64] {
        &self.c
    }

    pub fn d(&self) -> &[f64] {
        &self.d
    }

    /// Number of segments, one less than the number of knots.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub(crate) fn segment(&self, index: usize) -> Polynomial {
        Polynomial::new([self.a[index], self.b[index], self.c[index], self.d[index]])
    }
}

/// Assembles the natural spline system `M·c = r` for knots `x` and values `y`.
///
/// Interior rows hold `h[i-1], 2(h[i-1] + h[i]), h[i]` with right hand side
/// `3((y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1])`. First and last rows are identity rows with
/// zero right hand side. The system is returned unsolved.
/// # Errors
/// [SplineError::ShapeMismatch], [SplineError::TooFewPoints], [SplineError::DuplicateKnot] or
/// [SplineError::NonFiniteValue].
pub fn build_system(x: &[f64], y: &[f64]) -> Result<(DMatrix<f64>, DVector<f64>), SplineError> {
    Ok(build_bands(x, y)?.to_dense())
}

/// Solves the natural spline system with the default [Solver] and derives the coefficients.
/// # Example
/// ```
/// use spline_curve::{build_coefficients, evaluate};
/// use assert_approx_eq::assert_approx_eq;
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [0.0, 1.0, 0.0, 1.0];
/// let coefficients = build_coefficients(&x, &y).unwrap();
///
/// assert_eq!(coefficients.a(), &[0.0, 1.0, 0.0]);
/// assert_approx_eq!(evaluate(&coefficients, &x, 1.5).unwrap(), 0.5, 1e-12);
/// ```
pub fn build_coefficients(x: &[f64], y: &[f64]) -> Result<Coefficients, SplineError> {
    build_coefficients_with(x, y, Solver::default())
}

/// Same as [build_coefficients] with an explicit [Solver].
/// # Errors
/// Input validation errors of [build_system] and [SplineError::SingularSystem] when the solve fails.
pub fn build_coefficients_with(x: &[f64], y: &[f64], solver: Solver) -> Result<Coefficients, SplineError> {
    let bands = build_bands(x, y)?;
    let solution = bands.solve(solver).ok_or(SplineError::SingularSystem)?;

    let number_of_segments = x.len() - 1;
    let mut coefficients = Coefficients {
        a: Vec::with_capacity(number_of_segments),
        b: Vec::with_capacity(number_of_segments),
        c: Vec::with_capacity(number_of_segments),
        d: Vec::with_capacity(number_of_segments),
    };

    for i in 0..number_of_segments {
        let h = x[i + 1] - x[i];
        let d = (solution[i + 1] - solution[i]) / (3.0 * h);
        coefficients.a.push(y[i]);
        coefficients.b.push((y[i + 1] - y[i]) / h - solution[i] * h - d * h * h);
        coefficients.c.push(solution[i]);
        coefficients.d.push(d);
    }
    Ok(coefficients)
}

/// Spline value at `z`.
/// # Errors
/// [SplineError::OutOfDomain] unless `x[0] <= z <= x[last]`.
pub fn evaluate(coefficients: &Coefficients, x: &[f64], z: f64) -> Result<f64, SplineError> {
    evaluate_derivative(coefficients, x, z, 0)
}

/// First derivative of the spline at `z`, `b + 2c·u + 3d·u²`.
pub fn evaluate_first_derivative(coefficients: &Coefficients, x: &[f64], z: f64) -> Result<f64, SplineError> {
    evaluate_derivative(coefficients, x, z, 1)
}

/// Second derivative of the spline at `z`, `2c + 6d·u`.
pub fn evaluate_second_derivative(coefficients: &Coefficients, x: &[f64], z: f64) -> Result<f64, SplineError> {
    evaluate_derivative(coefficients, x, z, 2)
}

fn evaluate_derivative(coefficients: &Coefficients, x: &[f64], z: f64, order: usize) -> Result<f64, SplineError> {
    if coefficients.len() + 1 != x.len() {
        return Err(SplineError::ShapeMismatch { x_len: x.len(), y_len: coefficients.len() + 1 });
    }
    let index = find_segment_linear(x, z).ok_or_else(|| out_of_domain(x, z))?;
    Ok(coefficients.segment(index).evaluate_derivative(z - x[index], order))
}

/// Natural cubic spline through `(x[i], y[i])`.
///
/// The spline owns its knots and coefficients, evaluation never rebuilds them.
/// Knots are used in the given order and do not have to be increasing, only consecutive knots must differ.
/// # Example
/// ```
/// use spline_curve::CubicSpline;
/// use assert_approx_eq::assert_approx_eq;
///
/// let spline = CubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
///
/// assert_approx_eq!(spline.interpolate(1.0).unwrap(), 1.0, 1e-12);
/// assert_approx_eq!(spline.second_derivative(0.0).unwrap(), 0.0, 1e-12);
/// assert!(spline.interpolate(2.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    coefficients: Coefficients,
    is_increasing: bool,
}

impl CubicSpline {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        Self::with_solver(x, y, Solver::default())
    }

    pub fn with_solver(x: &[f64], y: &[f64], solver: Solver) -> Result<Self, SplineError> {
        let coefficients = build_coefficients_with(x, y, solver)?;
        let is_increasing = x.windows(2).all(|w| w[0] < w[1]);

        log::debug!(
            "built natural cubic spline with {} segments using {:?} solver",
            coefficients.len(),
            solver
        );
        Ok(CubicSpline { knots: x.to_vec(), coefficients, is_increasing })
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn domain_start(&self) -> f64 {
        self.knots[0]
    }

    pub fn domain_end(&self) -> f64 {
        self.knots[self.knots.len() - 1]
    }

    pub fn interpolate(&self, z: f64) -> Result<f64, SplineError> {
        self.evaluate_at(z, 0)
    }

    pub fn derivative(&self, z: f64) -> Result<f64, SplineError> {
        self.evaluate_at(z, 1)
    }

    pub fn second_derivative(&self, z: f64) -> Result<f64, SplineError> {
        self.evaluate_at(z, 2)
    }

    /// Interpolates every point of `z_vector`. Fails without partial results if any point is out of range.
    pub fn batch_interpolate(&self, z_vector: &[f64]) -> Result<Vec<f64>, SplineError> {

        if let Some(z) = z_vector.iter().find(|z| !self.is_in_range(**z)) {
            return Err(out_of_domain(&self.knots, *z));
        }

        let mut results = Vec::with_capacity(z_vector.len());
        let mut index = 0;

        for z in z_vector {
            index = self.find_segment_with_hint(index, *z).ok_or_else(|| out_of_domain(&self.knots, *z))?;
            results.push(self.coefficients.segment(index).evaluate(z - self.knots[index]));
        }
        Ok(results)
    }

    /// Index of the segment used for `z`. A query exactly on an interior knot belongs
    /// to the segment starting at that knot.
    pub fn segment_index(&self, z: f64) -> Result<usize, SplineError> {
        self.find_segment(z).ok_or_else(|| out_of_domain(&self.knots, z))
    }

    fn evaluate_at(&self, z: f64, order: usize) -> Result<f64, SplineError> {
        let index = self.segment_index(z)?;
        Ok(self.coefficients.segment(index).evaluate_derivative(z - self.knots[index], order))
    }

    fn is_in_range(&self, z: f64) -> bool {
        self.domain_start() <= z && z <= self.domain_end()
    }

    fn find_segment(&self, z: f64) -> Option<usize> {
        if !self.is_in_range(z) {
            return None;
        }
        if self.is_increasing {
            Some(self.find_segment_bisect(z))
        } else {
            find_segment_linear(&self.knots, z)
        }
    }

    // largest i < n with knots[i] <= z, which is also the last segment containing z
    fn find_segment_bisect(&self, z: f64) -> usize {
        let mut min = 0;
        let mut max = self.knots.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if z < self.knots[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_segment_with_hint(&self, index_hint: usize, z: f64) -> Option<usize> {
        if !self.is_increasing {
            return self.find_segment(z);
        }

        let last = self.coefficients.len() - 1;
        if self.is_in_segment(index_hint, z) {
            // a later segment still wins on its left knot
            if index_hint < last && z == self.knots[index_hint + 1] {
                return Some(index_hint + 1);
            }
            return Some(index_hint);
        }
        if index_hint < last && self.is_in_segment(index_hint + 1, z) && z < self.knots[index_hint + 2] {
            return Some(index_hint + 1);
        }
        self.find_segment(z)
    }

    fn is_in_segment(&self, index: usize, z: f64) -> bool {
        self.knots[index] <= z && z <= self.knots[index + 1]
    }
}

// last segment i with x[i] <= z <= x[i + 1]
fn find_segment_linear(x: &[f64], z: f64) -> Option<usize> {
    if x.len() < 2 || !(x[0] <= z && z <= x[x.len() - 1]) {
        return None;
    }
    (0..x.len() - 1).rev().find(|&i| x[i] <= z && z <= x[i + 1])
}

fn out_of_domain(x: &[f64], z: f64) -> SplineError {
    SplineError::OutOfDomain {
        z,
        min: x.first().copied().unwrap_or(f64::NAN),
        max: x.last().copied().unwrap_or(f64::NAN),
    }
}

fn build_bands(x: &[f64], y: &[f64]) -> Result<Bands, SplineError> {
    if x.len() != y.len() {
        return Err(SplineError::ShapeMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(SplineError::TooFewPoints(x.len()));
    }
    if let Some(index) = x.windows(2).position(|w| !(w[1] - w[0]).is_finite() || w[1] == w[0]) {
        return Err(SplineError::DuplicateKnot { index });
    }
    if let Some(index) = y.iter().position(|v| !v.is_finite()) {
        return Err(SplineError::NonFiniteValue { index });
    }

    let n = x.len() - 1;
    let mut bands = Bands::zeros(n + 1);

    for i in 1..n {
        let h_prev = x[i] - x[i - 1];
        let h_next = x[i + 1] - x[i];
        bands.lower[i] = h_prev;
        bands.upper[i] = h_next;
        bands.diagonal[i] = 2.0 * (h_prev + h_next);
        bands.rhs[i] = 3.0 * ((y[i + 1] - y[i]) / h_next - (y[i] - y[i - 1]) / h_prev);
    }
    bands.diagonal[0] = 1.0;
    bands.diagonal[n] = 1.0;

    Ok(bands)
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SplineError {
    #[error("Error in Spline: x has {x_len} values but y has {y_len}")]
    ShapeMismatch { x_len: usize, y_len: usize },
    #[error("Error in Spline: spline must have at least 2 knots, got {0}")]
    TooFewPoints(usize),
    #[error("Error in Spline: knot {index} and its successor have equal x values")]
    DuplicateKnot { index: usize },
    #[error("Error in Spline: value {index} is not finite")]
    NonFiniteValue { index: usize },
    #[error("Error in Spline: error while solving set of equations")]
    SingularSystem,
    #[error("Error in Spline: {z} is out of range [{min}, {max}]")]
    OutOfDomain { z: f64, min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const X: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
    const Y: [f64; 4] = [0.0, 1.0, 0.0, 1.0];

    #[test]
    fn system_layout() {
        let x = [0.0, 1.0, 3.0, 4.0];
        let y = [1.0, 2.0, 0.0, 1.0];
        let (matrix, rhs) = build_system(&x, &y).unwrap();

        assert_eq!(matrix.nrows(), 4);
        assert_eq!(matrix.ncols(), 4);

        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 1)], 0.0);
        assert_eq!(matrix[(3, 3)], 1.0);
        assert_eq!(matrix[(3, 2)], 0.0);

        assert_eq!(matrix[(1, 0)], 1.0);
        assert_eq!(matrix[(1, 1)], 6.0);
        assert_eq!(matrix[(1, 2)], 2.0);
        assert_eq!(matrix[(2, 1)], 2.0);
        assert_eq!(matrix[(2, 2)], 6.0);
        assert_eq!(matrix[(2, 3)], 1.0);

        assert_eq!(rhs[0], 0.0);
        assert_approx_eq!(rhs[1], 3.0 * (-1.0 - 1.0), 1e-12);
        assert_approx_eq!(rhs[2], 3.0 * (1.0 + 1.0), 1e-12);
        assert_eq!(rhs[3], 0.0);
    }

    #[test]
    fn known_coefficients() {
        let eps = 1e-12;
        let coefficients = build_coefficients(&X, &Y).unwrap();

        assert_eq!(coefficients.len(), 3);
        assert_eq!(coefficients.a(), &Y[..3]);

        let b = [5.0 / 3.0, -1.0 / 3.0, -1.0 / 3.0];
        let c = [0.0, -2.0, 2.0];
        let d = [-2.0 / 3.0, 4.0 / 3.0, -2.0 / 3.0];
        for i in 0..3 {
            assert_approx_eq!(coefficients.b()[i], b[i], eps);
            assert_approx_eq!(coefficients.c()[i], c[i], eps);
            assert_approx_eq!(coefficients.d()[i], d[i], eps);
        }

        assert_approx_eq!(evaluate(&coefficients, &X, 0.5).unwrap(), 0.75, eps);
        assert_approx_eq!(evaluate(&coefficients, &X, 1.5).unwrap(), 0.5, eps);
        assert_approx_eq!(evaluate(&coefficients, &X, 2.5).unwrap(), 0.25, eps);
    }

    #[test]
    fn solvers_agree() {
        let eps = 1e-10;
        let x = [0.0, 0.3, 1.1, 1.7, 2.0, 3.5, 4.1];
        let y = [2.0, -1.0, 0.5, 4.0, 3.0, -2.0, 0.0];

        let thomas = build_coefficients_with(&x, &y, Solver::Tridiagonal).unwrap();
        let lu = build_coefficients_with(&x, &y, Solver::DenseLu).unwrap();

        for i in 0..thomas.len() {
            assert_approx_eq!(thomas.b()[i], lu.b()[i], eps);
            assert_approx_eq!(thomas.c()[i], lu.c()[i], eps);
            assert_approx_eq!(thomas.d()[i], lu.d()[i], eps);
        }
    }

    #[test]
    fn interpolation_is_exact_at_knots() {
        let eps = 1e-12;
        let x = [0.0, 0.9, 1.1, 1.7, 2.0, 2.6];
        let y = [1.0, -0.5, 2.0, 3.25, 0.0, 1.5];

        let coefficients = build_coefficients(&x, &y).unwrap();
        let spline = CubicSpline::new(&x, &y).unwrap();

        for i in 0..x.len() {
            assert_approx_eq!(evaluate(&coefficients, &x, x[i]).unwrap(), y[i], eps);
            assert_approx_eq!(spline.interpolate(x[i]).unwrap(), y[i], eps);
        }
    }

    #[test]
    fn continuity_at_interior_knots() {
        let eps = 1e-10;
        let x = [0.0, 0.9, 1.1, 1.7, 2.0, 2.6];
        let y = [1.0, -0.5, 2.0, 3.25, 0.0, 1.5];
        let coefficients = build_coefficients(&x, &y).unwrap();

        for i in 1..x.len() - 1 {
            let left = coefficients.segment(i - 1);
            let right = coefficients.segment(i);
            let h = x[i] - x[i - 1];

            for order in 0..=2 {
                assert_approx_eq!(left.evaluate_derivative(h, order), right.evaluate_derivative(0.0, order), eps);
            }
        }
    }

    #[test]
    fn natural_boundary() {
        let eps = 1e-10;
        let x = [0.0, 0.9, 1.1, 1.7, 2.0, 2.6];
        let y = [1.0, -0.5, 2.0, 3.25, 0.0, 1.5];
        let spline = CubicSpline::new(&x, &y).unwrap();

        assert_approx_eq!(spline.second_derivative(0.0).unwrap(), 0.0, eps);
        assert_approx_eq!(spline.second_derivative(2.6).unwrap(), 0.0, eps);
        assert!(spline.second_derivative(1.1).unwrap().abs() > 1e-3);
    }

    #[test]
    fn derivatives() {
        let eps = 1e-12;
        let coefficients = build_coefficients(&X, &Y).unwrap();

        // segment 1: 1 - u/3 - 2u^2 + 4/3 u^3
        let u: f64 = 0.25;
        assert_approx_eq!(
            evaluate_first_derivative(&coefficients, &X, 1.25).unwrap(),
            -1.0 / 3.0 - 4.0 * u + 4.0 * u * u,
            eps
        );
        assert_approx_eq!(
            evaluate_second_derivative(&coefficients, &X, 1.25).unwrap(),
            -4.0 + 8.0 * u,
            eps
        );
    }

    #[test]
    fn ties_resolve_to_higher_segment() {
        let spline = CubicSpline::new(&X, &Y).unwrap();

        assert_eq!(spline.segment_index(0.0).unwrap(), 0);
        assert_eq!(spline.segment_index(0.5).unwrap(), 0);
        assert_eq!(spline.segment_index(1.0).unwrap(), 1);
        assert_eq!(spline.segment_index(2.0).unwrap(), 2);
        assert_eq!(spline.segment_index(3.0).unwrap(), 2);

        assert_eq!(find_segment_linear(&X, 1.0), Some(1));
        assert_eq!(find_segment_linear(&X, 2.0), Some(2));
        assert_eq!(find_segment_linear(&X, 3.0), Some(2));
    }

    #[test]
    fn linear_and_bisect_search_agree() {
        let x = [0.0, 0.3, 1.1, 1.7, 2.0, 3.5, 4.1];
        let y = [2.0, -1.0, 0.5, 4.0, 3.0, -2.0, 0.0];
        let spline = CubicSpline::new(&x, &y).unwrap();

        let mut z = 0.0;
        while z <= 4.1 {
            assert_eq!(spline.segment_index(z).ok(), find_segment_linear(&x, z));
            z += 0.05;
        }
        for knot in x {
            assert_eq!(spline.segment_index(knot).ok(), find_segment_linear(&x, knot));
        }
    }

    #[test]
    fn non_monotonic_knots() {
        let eps = 1e-12;
        let x = [0.0, 2.0, 1.0, 3.0];
        let y = [0.0, 1.0, 4.0, 2.0];
        let spline = CubicSpline::new(&x, &y).unwrap();

        // decreasing middle segment is never selected, the last increasing one is
        assert_eq!(spline.segment_index(1.5).unwrap(), 2);
        assert_eq!(spline.segment_index(0.5).unwrap(), 0);
        assert_approx_eq!(spline.interpolate(3.0).unwrap(), 2.0, eps);
        assert_approx_eq!(spline.interpolate(1.0).unwrap(), 4.0, eps);
    }

    #[test]
    fn domain_rejection() {
        let coefficients = build_coefficients(&X, &Y).unwrap();
        let spline = CubicSpline::new(&X, &Y).unwrap();

        for z in [-0.001, 3.001, f64::NAN] {
            assert!(evaluate(&coefficients, &X, z).is_err());
            assert!(evaluate_first_derivative(&coefficients, &X, z).is_err());
            assert!(evaluate_second_derivative(&coefficients, &X, z).is_err());
            assert!(spline.interpolate(z).is_err());
            assert!(spline.derivative(z).is_err());
            assert!(spline.second_derivative(z).is_err());
        }

        assert_eq!(
            spline.interpolate(4.0),
            Err(SplineError::OutOfDomain { z: 4.0, min: 0.0, max: 3.0 })
        );
    }

    #[test]
    fn batch() {
        let eps = 1e-12;
        let spline = CubicSpline::new(&X, &Y).unwrap();

        let z_vector = vec![0.0, 0.5, 1.0, 1.0, 1.5, 2.0, 2.5, 3.0, 0.25];
        let result = spline.batch_interpolate(&z_vector).unwrap();

        assert_eq!(z_vector.len(), result.len());
        for (z, value) in z_vector.iter().zip(result.iter()) {
            assert_approx_eq!(*value, spline.interpolate(*z).unwrap(), eps);
        }

        assert!(spline.batch_interpolate(&[0.0, 1.0, 3.5]).is_err());
    }

    #[test]
    fn two_points_are_a_line() {
        let eps = 1e-12;
        let spline = CubicSpline::new(&[1.0, 3.0], &[2.0, 6.0]).unwrap();

        assert_approx_eq!(spline.interpolate(2.0).unwrap(), 4.0, eps);
        assert_approx_eq!(spline.derivative(1.7).unwrap(), 2.0, eps);
        assert_approx_eq!(spline.second_derivative(2.9).unwrap(), 0.0, eps);
    }

    #[test]
    fn shape_mismatch_error() {
        assert_eq!(
            build_coefficients(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
            Err(SplineError::ShapeMismatch { x_len: 3, y_len: 2 })
        );
        assert!(build_system(&[0.0, 1.0], &[0.0]).is_err());
    }

    #[test]
    fn test_one_knot_error() {
        assert_eq!(CubicSpline::new(&[0.0], &[2.0]), Err(SplineError::TooFewPoints(1)));
        assert_eq!(build_coefficients(&[], &[]), Err(SplineError::TooFewPoints(0)));
    }

    #[test]
    fn test_equal_x_knot_values() {
        let x = [0.0, 0.0, 1.0];
        let y = [2.0, 1.0, 4.0];

        assert_eq!(CubicSpline::new(&x, &y), Err(SplineError::DuplicateKnot { index: 0 }));
        assert_eq!(
            build_coefficients_with(&x, &y, Solver::DenseLu),
            Err(SplineError::DuplicateKnot { index: 0 })
        );
    }

    #[test]
    fn test_non_finite_y_values() {
        assert_eq!(
            build_coefficients(&[0.0, 1.0], &[0.0, f64::NAN]),
            Err(SplineError::NonFiniteValue { index: 1 })
        );
        assert_eq!(
            build_coefficients(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 1.0]),
            Err(SplineError::NonFiniteValue { index: 1 })
        );
        assert_eq!(
            CubicSpline::with_solver(&[0.0, 1.0, 2.0], &[f64::INFINITY, 0.0, 1.0], Solver::DenseLu),
            Err(SplineError::NonFiniteValue { index: 0 })
        );
    }

    #[ignore]
    #[test]
    fn perfomance() {
        use std::time::Instant;
        use rand::Rng;

        let mut rng = rand::thread_rng();

        let knots_number = 400;
        let x: Vec<f64> = (0..knots_number).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..knots_number).map(|_| rng.gen_range(0.0..10.0)).collect();

        let now = Instant::now();
        let thomas = build_coefficients_with(&x, &y, Solver::Tridiagonal).unwrap();
        println!("tridiagonal time: {:.2?}", now.elapsed());

        let now = Instant::now();
        let lu = build_coefficients_with(&x, &y, Solver::DenseLu).unwrap();
        println!("dense lu time: {:.2?}", now.elapsed());

        for i in 0..thomas.len() {
            assert_approx_eq!(thomas.c()[i], lu.c()[i], 1e-8);
        }
    }
}
