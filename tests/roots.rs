/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

extern crate flo_geom;

use flo_geom::bezier::{find_roots, RootStrategy};
use flo_geom::sbasis::*;
use flo_geom::GeomError;

///
/// `(t - a)(t - b)` as an S-basis function
///
fn quadratic_with_roots(a: f64, b: f64) -> SBasis {
    let t = SBasis::from_linear(Linear::new(0.0, 1.0));
    let factor_a = &t - &SBasis::constant(a);
    let factor_b = &t - &SBasis::constant(b);
    multiply(&factor_a, &factor_b).unwrap()
}

#[test]
fn simple_roots_with_both_strategies() {
    let f = quadratic_with_roots(0.25, 0.75);

    for strategy in [RootStrategy::BezierClip, RootStrategy::Sturm] {
        let roots = find_roots(&f, 1e-9, strategy).unwrap();

        assert!(roots.len() == 2, "{:?} found {:?}", strategy, roots);
        assert!((roots[0] - 0.25).abs() < 1e-6);
        assert!((roots[1] - 0.75).abs() < 1e-6);
    }
}

#[test]
fn double_root_is_reported_once() {
    // (t - 1/2)^2 touches zero without crossing
    let f = quadratic_with_roots(0.5, 0.5);

    for strategy in [RootStrategy::BezierClip, RootStrategy::Sturm] {
        let roots = find_roots(&f, 1e-7, strategy).unwrap();

        assert!(roots.len() == 1, "{:?} found {:?}", strategy, roots);
        assert!((roots[0] - 0.5).abs() < 1e-3);
    }
}

#[test]
fn roots_at_the_endpoints() {
    let f = quadratic_with_roots(0.0, 1.0);

    for strategy in [RootStrategy::BezierClip, RootStrategy::Sturm] {
        let roots = find_roots(&f, 1e-9, strategy).unwrap();

        assert!(roots.len() == 2, "{:?} found {:?}", strategy, roots);
        assert!(roots[0].abs() < 1e-6);
        assert!((roots[1] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn no_roots_in_range() {
    let f = quadratic_with_roots(2.0, 3.0);

    for strategy in [RootStrategy::BezierClip, RootStrategy::Sturm] {
        assert!(find_roots(&f, 1e-9, strategy).unwrap().is_empty());
    }
}

#[test]
fn identically_zero_is_an_error() {
    let f = SBasis::zero();

    for strategy in [RootStrategy::BezierClip, RootStrategy::Sturm] {
        assert!(matches!(find_roots(&f, 1e-9, strategy), Err(GeomError::IndeterminateRoots)));
    }
}

#[test]
fn cubic_with_three_roots() {
    let t = SBasis::from_linear(Linear::new(0.0, 1.0));
    let f1 = &t - &SBasis::constant(0.2);
    let f2 = &t - &SBasis::constant(0.5);
    let f3 = &t - &SBasis::constant(0.8);
    let f = multiply(&multiply(&f1, &f2).unwrap(), &f3).unwrap();

    for strategy in [RootStrategy::BezierClip, RootStrategy::Sturm] {
        let roots = find_roots(&f, 1e-9, strategy).unwrap();

        assert!(roots.len() == 3, "{:?} found {:?}", strategy, roots);
        for (root, expected) in roots.iter().zip([0.2, 0.5, 0.8]) {
            assert!((root - expected).abs() < 1e-6);
        }
    }
}
