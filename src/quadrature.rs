use std::f64::consts::PI;

use thiserror::Error;

const NEWTON_TOLERANCE: f64 = 1e-15;
const NEWTON_MAX_ITERATIONS: usize = 100;

/// Fixed order Gauss-Legendre rule on `[-1, 1]`.
///
/// Nodes and weights are computed once on construction, so a single rule can be reused
/// for any number of integrals. An `n` point rule is exact for polynomials of degree up to `2n - 1`.
/// # Example
/// ```
/// use spline_curve::GaussLegendre;
/// use assert_approx_eq::assert_approx_eq;
///
/// let rule = GaussLegendre::new(2).unwrap();
/// assert_approx_eq!(rule.integrate(|u| u * u), 2.0 / 3.0, 1e-12);
/// assert_approx_eq!(rule.integrate_on_interval(|z| z * z, 0.0, 3.0), 9.0, 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Builds the `order` point rule. Nodes are stored in ascending order.
    /// # Errors
    /// [QuadratureError::InvalidOrder] when `order` is zero.
    pub fn new(order: usize) -> Result<Self, QuadratureError> {
        if order == 0 {
            return Err(QuadratureError::InvalidOrder(order));
        }

        let mut nodes = vec![0.0; order];
        let mut weights = vec![0.0; order];

        // roots are symmetric, only the positive half is searched
        let half = (order + 1) / 2;
        for i in 1..=half {
            let mut z = (PI * (i as f64 - 0.25) / (order as f64 + 0.5)).cos();
            for _ in 0..NEWTON_MAX_ITERATIONS {
                let (value, derivative) = legendre(order, z);
                let step = value / derivative;
                z -= step;
                if step.abs() <= NEWTON_TOLERANCE {
                    break;
                }
            }
            let (_, derivative) = legendre(order, z);
            let weight = 2.0 / ((1.0 - z * z) * derivative * derivative);

            nodes[i - 1] = -z;
            nodes[order - i] = z;
            weights[i - 1] = weight;
            weights[order - i] = weight;
        }

        log::trace!("computed {order} point Gauss-Legendre rule");
        Ok(GaussLegendre { nodes, weights })
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Approximates the integral of `f` over `[-1, 1]`.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.nodes.iter()
            .zip(self.weights.iter())
            .map(|(u, w)| w * f(*u))
            .sum()
    }

    /// Approximates the integral of `f` over `[a, b]` using the substitution
    /// `z = a + (u + 1)(b - a) / 2`. When `a > b` the result is the negated integral over `[b, a]`.
    pub fn integrate_on_interval<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half_width = (b - a) * 0.5;
        half_width * self.integrate(|u| f(a + (u + 1.0) * half_width))
    }

    /// Same as [GaussLegendre::integrate_on_interval] for an integrand that can fail.
    /// The first error stops the summation and is returned.
    pub fn try_integrate_on_interval<F, E>(&self, f: F, a: f64, b: f64) -> Result<f64, E>
    where
        F: Fn(f64) -> Result<f64, E>,
    {
        let half_width = (b - a) * 0.5;
        let mut sum = 0.0;
        for (u, w) in self.nodes.iter().zip(self.weights.iter()) {
            sum += w * f(a + (u + 1.0) * half_width)?;
        }
        Ok(half_width * sum)
    }
}

/// Integrates `f` over `[-1, 1]` with an `n_nodes` point Gauss-Legendre rule.
pub fn integrate<F>(f: F, n_nodes: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    Ok(GaussLegendre::new(n_nodes)?.integrate(f))
}

/// Integrates `f` over `[a, b]` with an `n_nodes` point Gauss-Legendre rule.
pub fn integrate_on_interval<F>(f: F, n_nodes: usize, a: f64, b: f64) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    Ok(GaussLegendre::new(n_nodes)?.integrate_on_interval(f, a, b))
}

// P_n(z) and P_n'(z) from the three term recurrence
fn legendre(order: usize, z: f64) -> (f64, f64) {
    let mut p1 = 1.0;
    let mut p2 = 0.0;
    for j in 1..=order {
        let p3 = p2;
        p2 = p1;
        p1 = ((2 * j - 1) as f64 * z * p2 - (j - 1) as f64 * p3) / j as f64;
    }
    let derivative = order as f64 * (z * p1 - p2) / (z * z - 1.0);
    (p1, derivative)
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum QuadratureError {
    #[error("Error in Quadrature: rule needs at least 1 node, got {0}")]
    InvalidOrder(usize),
}
