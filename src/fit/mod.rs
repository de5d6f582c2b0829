/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Linear least-squares capability
//!
//! The curve fitter needs to solve small overdetermined linear systems. That is a solved
//! problem, so rather than reimplementing it the requirement is expressed as the `LeastSquares`
//! trait with a default implementation backed by `nalgebra`'s SVD. Tests and callers with
//! special requirements can substitute their own solver.
//!

use nalgebra::{DMatrix, DVector};

///
/// Solves overdetermined linear systems in the least-squares sense
///
pub trait LeastSquares {
    ///
    /// Finds the `x` minimizing `||a*x - b||`, or `None` when the system is too ill-conditioned
    /// to solve
    ///
    fn solve_least_squares(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>>;
}

///
/// The default least-squares solver, using singular value decomposition
///
#[derive(Clone, Copy, Debug)]
pub struct SvdSolver {
    /// Singular values below this are treated as zero
    pub epsilon: f64,
}

impl Default for SvdSolver {
    fn default() -> SvdSolver {
        SvdSolver { epsilon: 1e-12 }
    }
}

impl LeastSquares for SvdSolver {
    fn solve_least_squares(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
        let svd = a.clone().svd(true, true);
        svd.solve(b, self.epsilon).ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solves_overdetermined_line_fit() {
        // Fit y = 2x + 1 from four exact samples
        let a = DMatrix::from_row_slice(4, 2, &[0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0, 1.0]);
        let b = DVector::from_row_slice(&[1.0, 3.0, 5.0, 7.0]);

        let x = SvdSolver::default().solve_least_squares(&a, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-10);
        assert!((x[1] - 1.0).abs() < 1e-10);
    }
}
