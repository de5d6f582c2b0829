/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use roots::{find_roots_linear, find_roots_quadratic};
use smallvec::SmallVec;

use crate::geo::*;

use super::basis::*;
use super::derivative::*;
use super::roots::*;

///
/// The bounding box of a Bezier curve's control polygon
///
/// Fast and conservative: the curve is contained in the convex hull of its control points, so
/// this box always contains the curve but is usually larger than it.
///
pub fn bounding_box<Curve: BoundingBox>(control_points: &[Curve::Point]) -> Curve {
    Curve::bounds_for_points(control_points.iter().copied())
}

///
/// The exact bounding box of a Bezier curve
///
/// Finds where the derivative of each coordinate is zero and takes the extremes over those
/// points and the curve's endpoints.
///
pub fn tight_bounding_box<Curve: BoundingBox>(control_points: &[Curve::Point]) -> Curve {
    debug_assert!(control_points.len() >= 2);

    let mut extrema: SmallVec<[f64; 16]> = SmallVec::new();
    extrema.push(0.0);
    extrema.push(1.0);

    let deriv = derivative_points(control_points);
    for axis in 0..<Curve::Point as Coordinate>::len() {
        let weights: SmallVec<[f64; 8]> = deriv.iter().map(|p| p.get(axis)).collect();
        axis_extrema(&weights, &mut extrema);
    }

    Curve::bounds_for_points(extrema.iter().map(|&t| de_casteljau(control_points, t)))
}

///
/// Collects the roots on (0, 1) of a derivative component given by Bernstein weights
///
/// Degrees up to 2 use the closed-form solvers; higher degrees fall back to subdivision.
///
fn axis_extrema(weights: &[f64], extrema: &mut SmallVec<[f64; 16]>) {
    match weights.len() {
        0 | 1 => { /* Constant derivative: extremes are at the endpoints */ }

        2 => {
            let coeffs = bernstein_to_power_quadratic(weights);
            for &t in find_roots_linear(coeffs[1], coeffs[0]).as_ref() {
                if t > 0.0 && t < 1.0 {
                    extrema.push(t);
                }
            }
        }

        3 => {
            let coeffs = bernstein_to_power_quadratic(weights);
            for &t in find_roots_quadratic(coeffs[2], coeffs[1], coeffs[0]).as_ref() {
                if t > 0.0 && t < 1.0 {
                    extrema.push(t);
                }
            }
        }

        _ => {
            for t in find_bernstein_roots(weights, 1e-8) {
                if t > 0.0 && t < 1.0 {
                    extrema.push(t);
                }
            }
        }
    }
}
