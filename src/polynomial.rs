/// Single cubic segment of a spline, written in the local coordinate `u = z - x_i`
/// of its left knot: `c0 + c1·u + c2·u² + c3·u³`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: [f64; 4],
}

impl Polynomial {

    pub fn new(coefficients: [f64; 4]) -> Self {
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64; 4] {
        &self.coefficients
    }

    pub fn evaluate(&self, u: f64) -> f64 {
        self.evaluate_derivative(u, 0)
    }

    /// Value of the derivative of given `order` at local coordinate `u`.
    /// Orders above 3 are identically zero.
    pub fn evaluate_derivative(&self, u: f64, order: usize) -> f64 {
        let mut result = 0.0;
        for power in (order..self.coefficients.len()).rev() {
            result = result * u + self.coefficients[power] * derivative_multiplier(power, order);
        }
        result
    }
}

// power * (power - 1) * ... * (power - order + 1)
fn derivative_multiplier(power: usize, order: usize) -> f64 {
    let mut multiplier = 1.0;
    let mut coeff = power as f64;
    for _ in 0..order {
        multiplier *= coeff;
        coeff -= 1.0;
    }
    multiplier
}
