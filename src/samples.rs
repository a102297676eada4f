use crate::spline::SplineError;

/// Ordered 2-D sample points of a curve, `(x[i], y[i])` for `i = 0..=n`.
///
/// Both coordinate arrays always have the same length, at least 2.
/// # Example
/// ```
/// use spline_curve::Samples;
///
/// let samples = Samples::from_points(&[(0.0, 0.0), (1.0, 2.0), (3.0, 1.0)]).unwrap();
///
/// assert_eq!(samples.len(), 3);
/// assert_eq!(samples.y(), &[0.0, 2.0, 1.0]);
/// assert_eq!(samples.index_parameter(), vec![0.0, 1.0, 2.0]);
/// ```
/// # Errors
/// Arrays of different length are rejected.
/// ```
/// use spline_curve::Samples;
///
/// assert!(Samples::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Samples {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::ShapeMismatch { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(SplineError::TooFewPoints(x.len()));
        }
        Ok(Samples { x, y })
    }

    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, SplineError> {
        let (x, y) = points.iter().copied().unzip();
        Self::new(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sample index as a real parameter: `0.0, 1.0, ..., n`.
    pub fn index_parameter(&self) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64).collect()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
