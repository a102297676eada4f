use crate::solver::Solver;

/// Gauss-Legendre order used per segment when integrating arc length.
pub const DEFAULT_QUADRATURE_NODES: usize = 3;

/// Number of points produced when sampling a curve for drawing.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// How the arc length table of a [Curve](crate::Curve) is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcLengthMode {
    /// Length of the graph of `y(x)`, integrating `sqrt(1 + y'(x)²)` between consecutive x values.
    /// Requires increasing x for a meaningful result.
    #[default]
    Graph,
    /// Length of the index parametrization, integrating `sqrt(x'(t)² + y'(t)²)` over each `[i, i + 1]`.
    /// Works for closed and self intersecting curves.
    Parametric,
}

/// Drawing hints attached to produced polylines. The crate never draws anything itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub color: String,
    pub line_width: f64,
    pub show_axes: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle { color: "black".to_string(), line_width: 1.0, show_axes: true }
    }
}

impl PlotStyle {
    pub fn new(color: impl Into<String>, line_width: f64, show_axes: bool) -> Self {
        PlotStyle { color: color.into(), line_width, show_axes }
    }
}

/// Parameters of curve construction and sampling.
/// # Example
/// ```
/// use spline_curve::{ArcLengthMode, CurveConfig, Solver};
///
/// let config = CurveConfig::default()
///     .with_quadrature_nodes(5)
///     .with_arc_length(ArcLengthMode::Parametric);
///
/// assert_eq!(config.quadrature_nodes, 5);
/// assert_eq!(config.solver, Solver::Tridiagonal);
/// assert_eq!(config.sample_count, 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    pub quadrature_nodes: usize,
    pub solver: Solver,
    pub arc_length: ArcLengthMode,
    pub sample_count: usize,
    pub style: PlotStyle,
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfig {
            quadrature_nodes: DEFAULT_QUADRATURE_NODES,
            solver: Solver::default(),
            arc_length: ArcLengthMode::default(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            style: PlotStyle::default(),
        }
    }
}

impl CurveConfig {
    pub fn with_quadrature_nodes(mut self, quadrature_nodes: usize) -> Self {
        self.quadrature_nodes = quadrature_nodes;
        self
    }

    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_arc_length(mut self, arc_length: ArcLengthMode) -> Self {
        self.arc_length = arc_length;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }
}
