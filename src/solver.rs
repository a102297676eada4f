use nalgebra::{DMatrix, DVector};

/// Linear solver used for the spline's second derivative system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    /// Thomas algorithm on the three diagonals, O(n).
    #[default]
    Tridiagonal,
    /// LU decomposition of the full matrix, O(n³).
    DenseLu,
}

/// Tridiagonal system stored by diagonals. `lower[0]` and `upper[size - 1]` are unused.
#[derive(Debug, Clone)]
pub(crate) struct Bands {
    pub lower: Vec<f64>,
    pub diagonal: Vec<f64>,
    pub upper: Vec<f64>,
    pub rhs: Vec<f64>,
}

impl Bands {

    pub fn zeros(size: usize) -> Self {
        Bands {
            lower: vec![0.0; size],
            diagonal: vec![0.0; size],
            upper: vec![0.0; size],
            rhs: vec![0.0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.diagonal.len()
    }

    pub fn to_dense(&self) -> (DMatrix<f64>, DVector<f64>) {
        let size = self.size();
        let mut matrix = DMatrix::<f64>::zeros(size, size);
        for i in 0..size {
            matrix[(i, i)] = self.diagonal[i];
            if i > 0 {
                matrix[(i, i - 1)] = self.lower[i];
            }
            if i + 1 < size {
                matrix[(i, i + 1)] = self.upper[i];
            }
        }
        (matrix, DVector::from_column_slice(&self.rhs))
    }

    /// Solves the system, `None` when a pivot vanishes or the solution is not finite.
    pub fn solve(&self, solver: Solver) -> Option<Vec<f64>> {
        let solution = match solver {
            Solver::Tridiagonal => self.solve_thomas()?,
            Solver::DenseLu => {
                let (matrix, rhs) = self.to_dense();
                matrix.lu().solve(&rhs)?.iter().copied().collect::<Vec<f64>>()
            }
        };

        if solution.iter().all(|v| v.is_finite()) {
            Some(solution)
        } else {
            None
        }
    }

    fn solve_thomas(&self) -> Option<Vec<f64>> {
        let size = self.size();
        let mut upper_prime = vec![0.0; size];
        let mut rhs_prime = vec![0.0; size];

        let mut pivot = self.diagonal[0];
        if pivot == 0.0 {
            return None;
        }
        upper_prime[0] = self.upper[0] / pivot;
        rhs_prime[0] = self.rhs[0] / pivot;

        for i in 1..size {
            pivot = self.diagonal[i] - self.lower[i] * upper_prime[i - 1];
            if pivot == 0.0 {
                return None;
            }
            if i + 1 < size {
                upper_prime[i] = self.upper[i] / pivot;
            }
            rhs_prime[i] = (self.rhs[i] - self.lower[i] * rhs_prime[i - 1]) / pivot;
        }

        let mut solution = rhs_prime;
        for i in (0..size - 1).rev() {
            solution[i] -= upper_prime[i] * solution[i + 1];
        }
        Some(solution)
    }
}
