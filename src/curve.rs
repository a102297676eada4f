use nalgebra::{Point2, Vector2};
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    config::{ArcLengthMode, CurveConfig, PlotStyle, DEFAULT_QUADRATURE_NODES},
    quadrature::{GaussLegendre, QuadratureError},
    samples::Samples,
    solver::Solver,
    spline::{CubicSpline, SplineError},
};

/// Cumulative arc length of the graph of `y(x)` at every sample.
///
/// A natural spline of `y` against `x` is integrated segment by segment with a
/// [DEFAULT_QUADRATURE_NODES] point Gauss-Legendre rule applied to `sqrt(1 + y'(x)²)`.
/// The first entry is zero and the profile is non-decreasing when `x` is increasing.
/// # Example
/// ```
/// use spline_curve::curve_length;
/// use assert_approx_eq::assert_approx_eq;
///
/// let lengths = curve_length(&[0.0, 3.0, 6.0], &[0.0, 4.0, 8.0]).unwrap();
///
/// assert_eq!(lengths[0], 0.0);
/// assert_approx_eq!(lengths[1], 5.0, 1e-12);
/// assert_approx_eq!(lengths[2], 10.0, 1e-12);
/// ```
pub fn curve_length(x: &[f64], y: &[f64]) -> Result<Vec<f64>, CurveError> {
    let rule = GaussLegendre::new(DEFAULT_QUADRATURE_NODES)?;
    curve_length_with(x, y, &rule, Solver::default())
}

/// Same as [curve_length] with an explicit quadrature rule and solver.
pub fn curve_length_with(x: &[f64], y: &[f64], rule: &GaussLegendre, solver: Solver) -> Result<Vec<f64>, CurveError> {
    let spline = CubicSpline::with_solver(x, y, solver)?;
    let speed = |z: f64| -> Result<f64, SplineError> {
        let slope = spline.derivative(z)?;
        Ok((1.0 + slope * slope).sqrt())
    };

    let segment_lengths = collect_indexed(x.len() - 1, |j| {
        rule.try_integrate_on_interval(&speed, x[j], x[j + 1])
    })?;
    Ok(cumulative(&segment_lengths))
}

/// Natural splines `x(t)` and `y(t)` of the samples against their index `t = 0, 1, ..., n`.
pub fn curve_parametric(x: &[f64], y: &[f64]) -> Result<(CubicSpline, CubicSpline), CurveError> {
    let samples = Samples::new(x.to_vec(), y.to_vec())?;
    let by_index = ByIndex::new(&samples, Solver::default())?;
    Ok((by_index.x, by_index.y))
}

/// Natural splines `x(s)` and `y(s)` of the samples against the [curve_length] profile.
pub fn curve_s_parametric(x: &[f64], y: &[f64]) -> Result<(CubicSpline, CubicSpline), CurveError> {
    let curve = Curve::from_xy(x, y)?;
    Ok((curve.x_of_s, curve.y_of_s))
}

/// Tangent `(dx/ds, dy/ds)` at arc length `s`, using the default [CurveConfig]. The vector is not normalized.
pub fn curve_tangent(x: &[f64], y: &[f64], s: f64) -> Result<Vector2<f64>, CurveError> {
    Curve::from_xy(x, y)?.tangent_at(s)
}

/// Radius of curvature at every sample index.
///
/// The first and last entries are copies of their neighbours. Straight stretches give `f64::INFINITY`.
/// # Example
/// ```
/// use spline_curve::curve_radius;
///
/// let radii = curve_radius(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
/// assert!(radii.iter().all(|r| r.is_infinite()));
/// ```
pub fn curve_radius(x: &[f64], y: &[f64]) -> Result<Vec<f64>, CurveError> {
    let samples = Samples::new(x.to_vec(), y.to_vec())?;
    Ok(ByIndex::new(&samples, Solver::default())?.radius_profile()?)
}

/// Sequence of points with drawing hints, handed to an external renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point2<f64>>,
    pub style: PlotStyle,
}

/// Spline fitted curve through ordered 2-D samples.
///
/// Every spline is built once on construction: `x(t)` and `y(t)` against the sample index,
/// the arc length table and `x(s)`, `y(s)` against arc length. Queries only evaluate them.
/// # Example
/// ```
/// use spline_curve::Curve;
/// use assert_approx_eq::assert_approx_eq;
///
/// let curve = Curve::from_xy(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]).unwrap();
/// let length = 5.0_f64.sqrt();
///
/// assert_approx_eq!(curve.total_length(), 3.0 * length, 1e-12);
///
/// let tangent = curve.tangent_at(1.5 * length).unwrap();
/// assert_approx_eq!(tangent.x, 1.0 / length, 1e-9);
/// assert_approx_eq!(tangent.y, 2.0 / length, 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Curve {
    samples: Samples,
    config: CurveConfig,
    by_index: ByIndex,
    arc_lengths: Vec<f64>,
    x_of_s: CubicSpline,
    y_of_s: CubicSpline,
}

impl Curve {
    pub fn new(samples: Samples) -> Result<Self, CurveError> {
        Self::with_config(samples, CurveConfig::default())
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, CurveError> {
        Self::new(Samples::new(x.to_vec(), y.to_vec())?)
    }

    pub fn with_config(samples: Samples, config: CurveConfig) -> Result<Self, CurveError> {
        let rule = GaussLegendre::new(config.quadrature_nodes)?;
        let by_index = ByIndex::new(&samples, config.solver)?;

        let arc_lengths = match config.arc_length {
            ArcLengthMode::Graph => curve_length_with(samples.x(), samples.y(), &rule, config.solver)?,
            ArcLengthMode::Parametric => by_index.parametric_length(&rule)?,
        };
        let x_of_s = CubicSpline::with_solver(&arc_lengths, samples.x(), config.solver)?;
        let y_of_s = CubicSpline::with_solver(&arc_lengths, samples.y(), config.solver)?;

        log::debug!(
            "built curve through {} samples, {:?} arc length {:.6}",
            samples.len(),
            config.arc_length,
            arc_lengths[arc_lengths.len() - 1]
        );
        Ok(Curve { samples, config, by_index, arc_lengths, x_of_s, y_of_s })
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Cumulative arc length at every sample, starting with zero.
    pub fn arc_lengths(&self) -> &[f64] {
        &self.arc_lengths
    }

    pub fn total_length(&self) -> f64 {
        self.arc_lengths[self.arc_lengths.len() - 1]
    }

    /// The `x(t)`, `y(t)` spline pair against the sample index.
    pub fn parametric(&self) -> (&CubicSpline, &CubicSpline) {
        (&self.by_index.x, &self.by_index.y)
    }

    /// The `x(s)`, `y(s)` spline pair against arc length.
    pub fn arc_length_parametric(&self) -> (&CubicSpline, &CubicSpline) {
        (&self.x_of_s, &self.y_of_s)
    }

    /// Point at index parameter `t`, `0 <= t <= n`.
    pub fn position_at(&self, t: f64) -> Result<Point2<f64>, CurveError> {
        Ok(Point2::new(self.by_index.x.interpolate(t)?, self.by_index.y.interpolate(t)?))
    }

    /// Point at distance `s` along the curve.
    pub fn position_at_arc_length(&self, s: f64) -> Result<Point2<f64>, CurveError> {
        Ok(Point2::new(self.x_of_s.interpolate(s)?, self.y_of_s.interpolate(s)?))
    }

    /// Tangent `(dx/ds, dy/ds)` at distance `s`. Its length is only approximately one.
    pub fn tangent_at(&self, s: f64) -> Result<Vector2<f64>, CurveError> {
        Ok(Vector2::new(self.x_of_s.derivative(s)?, self.y_of_s.derivative(s)?))
    }

    /// Radius of curvature at index parameter `t`, without boundary clamping.
    pub fn radius_at(&self, t: f64) -> Result<f64, CurveError> {
        Ok(self.by_index.radius_at(t)?)
    }

    /// Radius of curvature at every sample index, see [curve_radius].
    pub fn radius_profile(&self) -> Result<Vec<f64>, CurveError> {
        Ok(self.by_index.radius_profile()?)
    }

    /// `(t, R)` pairs of the radius profile.
    pub fn radius_points(&self) -> Result<Vec<(f64, f64)>, CurveError> {
        let radii = self.radius_profile()?;
        Ok(radii.into_iter().enumerate().map(|(i, r)| (i as f64, r)).collect())
    }

    /// `sample_count` points evenly spaced in the index parameter, first and last sample included.
    pub fn sample(&self) -> Result<Vec<Point2<f64>>, CurveError> {
        let count = self.config.sample_count;
        let last = (self.len() - 1) as f64;
        let parameters: Vec<f64> = match count {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => (0..count).map(|k| last * k as f64 / (count - 1) as f64).collect(),
        };

        let xs = self.by_index.x.batch_interpolate(&parameters)?;
        let ys = self.by_index.y.batch_interpolate(&parameters)?;
        Ok(xs.into_iter().zip(ys).map(|(x, y)| Point2::new(x, y)).collect())
    }

    pub fn polyline(&self) -> Result<Polyline, CurveError> {
        Ok(Polyline { points: self.sample()?, style: self.config.style.clone() })
    }

    pub fn radius_polyline(&self) -> Result<Polyline, CurveError> {
        let points = self.radius_points()?
            .into_iter()
            .map(|(t, r)| Point2::new(t, r))
            .collect();
        Ok(Polyline { points, style: self.config.style.clone() })
    }
}

// x(t) and y(t) against the sample index
#[derive(Debug, Clone)]
struct ByIndex {
    x: CubicSpline,
    y: CubicSpline,
}

impl ByIndex {

    fn new(samples: &Samples, solver: Solver) -> Result<Self, SplineError> {
        let t = samples.index_parameter();
        Ok(ByIndex {
            x: CubicSpline::with_solver(&t, samples.x(), solver)?,
            y: CubicSpline::with_solver(&t, samples.y(), solver)?,
        })
    }

    fn len(&self) -> usize {
        self.x.knots().len()
    }

    fn radius_at(&self, t: f64) -> Result<f64, SplineError> {
        let dx = self.x.derivative(t)?;
        let dy = self.y.derivative(t)?;
        let d2x = self.x.second_derivative(t)?;
        let d2y = self.y.second_derivative(t)?;
        Ok(radius_of_curvature(dx, dy, d2x, d2y))
    }

    fn radius_profile(&self) -> Result<Vec<f64>, SplineError> {
        let n = self.len();
        let mut radii = collect_indexed(n, |i| self.radius_at(i as f64))?;

        // natural boundary makes the end values unreliable
        radii[0] = radii[1];
        radii[n - 1] = radii[n - 2];

        let straight = radii.iter().filter(|r| r.is_infinite()).count();
        if straight > 0 {
            log::debug!("{straight} of {n} samples have zero curvature");
        }
        let undefined = radii.iter().filter(|r| r.is_nan()).count();
        if undefined > 0 {
            log::warn!("{undefined} of {n} samples have undefined radius, curve has zero speed there");
        }
        Ok(radii)
    }

    fn parametric_length(&self, rule: &GaussLegendre) -> Result<Vec<f64>, SplineError> {
        let speed = |t: f64| -> Result<f64, SplineError> {
            Ok(self.x.derivative(t)?.hypot(self.y.derivative(t)?))
        };

        let segment_lengths = collect_indexed(self.len() - 1, |i| {
            rule.try_integrate_on_interval(&speed, i as f64, (i + 1) as f64)
        })?;
        Ok(cumulative(&segment_lengths))
    }
}

fn radius_of_curvature(dx: f64, dy: f64, d2x: f64, d2y: f64) -> f64 {
    let denominator = (dx * d2y - dy * d2x).abs();
    (dx * dx + dy * dy).powf(1.5) / denominator
}

fn cumulative(segment_lengths: &[f64]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(segment_lengths.len() + 1);
    let mut total = 0.0;
    lengths.push(total);
    for length in segment_lengths {
        total += length;
        lengths.push(total);
    }
    lengths
}

#[cfg(feature = "parallel")]
fn collect_indexed<T, E, F>(count: usize, f: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(usize) -> Result<T, E> + Sync + Send,
{
    (0..count).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_indexed<T, E, F>(count: usize, f: F) -> Result<Vec<T>, E>
where
    F: Fn(usize) -> Result<T, E>,
{
    (0..count).map(f).collect()
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CurveError {
    #[error(transparent)]
    Spline(#[from] SplineError),
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}
