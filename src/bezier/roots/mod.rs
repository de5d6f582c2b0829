/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Root finders for scalar curve functions
//!
//! Two interchangeable strategies for finding where a scalar S-basis function crosses zero on
//! [0, 1]. Bezier clipping subdivides the Bernstein control polygon and is the fast default;
//! the Sturm strategy converts to the power basis and counts roots exactly, which catches
//! even-multiplicity tangencies that subdivision can only probe for.
//!

mod bernstein;

pub use self::bernstein::*;

use crate::error::*;
use crate::geo::*;
use crate::poly::*;
use crate::sbasis::*;

///
/// Selects how `find_roots` locates the zeros of a function
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RootStrategy {
    /// Bernstein control-polygon subdivision with convex-hull pruning
    BezierClip,

    /// Square-free deflation and Sturm-chain sign counting in the power basis
    Sturm,
}

///
/// Finds the places where an S-basis function is zero on [0, 1]
///
/// Returns the roots sorted ascending with duplicates within `accuracy` merged; a root of even
/// multiplicity (the function touches zero without crossing) is reported once. A function that
/// is identically zero has no meaningful root set and produces
/// `GeomError::IndeterminateRoots`.
///
pub fn find_roots(f: &SBasis, accuracy: f64, strategy: RootStrategy) -> Result<Vec<f64>, GeomError> {
    if f.is_zero() {
        return Err(GeomError::IndeterminateRoots);
    }

    let mut roots = match strategy {
        RootStrategy::BezierClip => {
            let weights = sbasis_to_bezier(f);
            find_bernstein_roots(&weights, accuracy)
        }

        RootStrategy::Sturm => {
            let poly = sbasis_to_poly(f);
            find_roots_sturm(&poly, Space1::unit(), accuracy)?
        }
    };

    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    roots.dedup_by(|a, b| (*a - *b).abs() <= accuracy);
    Ok(roots)
}

#[cfg(test)]
mod test {
    use super::*;

    fn product_of_roots(roots: &[f64]) -> SBasis {
        let mut f = SBasis::constant(1.0);
        for &root in roots {
            let factor = SBasis::from_linear(Linear::new(-root, 1.0 - root));
            f = multiply(&f, &factor).unwrap();
        }
        f
    }

    fn check_roots(found: &[f64], expected: &[f64], accuracy: f64) {
        assert!(found.len() == expected.len(), "found {:?} expected {:?}", found, expected);
        for (f, e) in found.iter().zip(expected.iter()) {
            assert!((f - e).abs() <= accuracy, "found {:?} expected {:?}", found, expected);
        }
    }

    #[test]
    fn simple_roots_by_clipping() {
        let f = product_of_roots(&[0.2, 0.5, 0.9]);
        let roots = find_roots(&f, 1e-8, RootStrategy::BezierClip).unwrap();
        check_roots(&roots, &[0.2, 0.5, 0.9], 1e-6);
    }

    #[test]
    fn simple_roots_by_sturm() {
        let f = product_of_roots(&[0.2, 0.5, 0.9]);
        let roots = find_roots(&f, 1e-8, RootStrategy::Sturm).unwrap();
        check_roots(&roots, &[0.2, 0.5, 0.9], 1e-6);
    }

    #[test]
    fn double_root_reported_once() {
        // (t-0.5)^2 (t-0.8): the touch at 0.5 must appear exactly once
        let f = product_of_roots(&[0.5, 0.5, 0.8]);

        let roots = find_roots(&f, 1e-7, RootStrategy::Sturm).unwrap();
        check_roots(&roots, &[0.5, 0.8], 1e-4);

        let roots = find_roots(&f, 1e-7, RootStrategy::BezierClip).unwrap();
        check_roots(&roots, &[0.5, 0.8], 1e-3);
    }

    #[test]
    fn no_roots_for_positive_function() {
        let f = &product_of_roots(&[0.5]) + &SBasis::constant(2.0);
        let roots = find_roots(&f, 1e-8, RootStrategy::BezierClip).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn zero_function_is_indeterminate() {
        assert!(matches!(find_roots(&SBasis::zero(), 1e-8, RootStrategy::BezierClip), Err(GeomError::IndeterminateRoots)));
        assert!(matches!(find_roots(&SBasis::zero(), 1e-8, RootStrategy::Sturm), Err(GeomError::IndeterminateRoots)));
    }

    #[test]
    fn roots_at_the_ends_of_the_range() {
        let f = product_of_roots(&[0.0, 1.0]);
        let roots = find_roots(&f, 1e-8, RootStrategy::BezierClip).unwrap();
        check_roots(&roots, &[0.0, 1.0], 1e-6);
    }
}
