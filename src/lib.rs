//! Natural cubic spline fitting of ordered 2-D samples and the curve geometry derived from it:
//! arc length, arc length parametrization, tangent and radius of curvature.
//!
//! Arc length integrals use fixed order Gauss-Legendre quadrature. Evaluation outside of
//! the sampled domain is an error, there is no extrapolation.
//!
//! # Example
//! ```
//! use spline_curve::{ArcLengthMode, Curve, CurveConfig, Samples};
//! use assert_approx_eq::assert_approx_eq;
//!
//! // 16 points on a circle of radius 5
//! let points: Vec<(f64, f64)> = (0..16)
//!     .map(|k| {
//!         let angle = std::f64::consts::PI * k as f64 / 8.0;
//!         (5.0 * angle.cos(), 5.0 * angle.sin())
//!     })
//!     .collect();
//!
//! let config = CurveConfig::default().with_arc_length(ArcLengthMode::Parametric);
//! let curve = Curve::with_config(Samples::from_points(&points).unwrap(), config).unwrap();
//! let radii = curve.radius_profile().unwrap();
//!
//! assert_approx_eq!(radii[8], 5.0, 0.1);
//! assert_eq!(radii[0], radii[1]);
//! ```

mod config;
mod curve;
mod polynomial;
mod quadrature;
mod samples;
mod solver;
mod spline;

pub use config::{ArcLengthMode, CurveConfig, PlotStyle, DEFAULT_QUADRATURE_NODES, DEFAULT_SAMPLE_COUNT};
pub use curve::{
    curve_length, curve_length_with, curve_parametric, curve_radius, curve_s_parametric, curve_tangent,
    Curve, CurveError, Polyline,
};
pub use polynomial::Polynomial;
pub use quadrature::{integrate, integrate_on_interval, GaussLegendre, QuadratureError};
pub use samples::Samples;
pub use solver::Solver;
pub use spline::{
    build_coefficients, build_coefficients_with, build_system, evaluate, evaluate_first_derivative,
    evaluate_second_derivative, Coefficients, CubicSpline, SplineError,
};
