/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::bezier::basis::*;
use crate::bezier::subdivide::*;
use crate::consts::*;

///
/// Finds the zeros on [0, 1] of a scalar function given by its Bernstein weights
///
/// Subdivides the control polygon, pruning any interval whose weights are all on one side of
/// zero (the convex-hull property makes this safe). An interval whose polygon changes sign once
/// brackets a crossing and is resolved by bisection; an interval whose weights hover near zero
/// without a sign change is probed at its midpoint once it is narrower than `accuracy`, which is
/// how tangencies of even multiplicity get reported.
///
/// The results may contain near-duplicates at subdivision boundaries; the caller is expected to
/// sort and merge them.
///
pub fn find_bernstein_roots(weights: &[f64], accuracy: f64) -> Vec<f64> {
    let mut roots = vec![];

    if weights.is_empty() {
        return roots;
    }

    if weights[0] == 0.0 {
        roots.push(0.0);
    }
    if weights[weights.len() - 1] == 0.0 {
        roots.push(1.0);
    }

    subdivide_for_roots(weights, 0.0, 1.0, 0, accuracy, &mut roots);
    roots
}

fn polygon_crossings(weights: &[f64]) -> usize {
    let mut crossings = 0;
    let mut last_sign = 0.0_f64;

    for &w in weights {
        if w != 0.0 {
            if last_sign != 0.0 && w.signum() != last_sign {
                crossings += 1;
            }
            last_sign = w.signum();
        }
    }

    crossings
}

fn subdivide_for_roots(weights: &[f64], left_t: f64, right_t: f64, depth: usize, accuracy: f64, roots: &mut Vec<f64>) {
    let min_w = weights.iter().copied().fold(f64::MAX, f64::min);
    let max_w = weights.iter().copied().fold(f64::MIN, f64::max);

    // The function values lie inside the weight range
    if min_w > accuracy || max_w < -accuracy {
        return;
    }

    let crossings = polygon_crossings(weights);
    let width = right_t - left_t;

    if crossings == 1 {
        roots.push(bisect_crossing(weights, left_t, right_t, accuracy));
        return;
    }

    if crossings == 0 {
        // No sign change but the polygon is close to zero: a possible tangency
        if width <= accuracy || depth >= MAX_CLIP_DEPTH {
            let value = de_casteljau(weights, 0.5);
            if value.abs() <= accuracy {
                roots.push(left_t + width * 0.5);
            }
            return;
        }
    } else if depth >= MAX_CLIP_DEPTH {
        // Multiple crossings that refuse to separate: best effort
        roots.push(left_t + width * 0.5);
        return;
    }

    let mid_t = left_t + width * 0.5;
    let (left, right) = subdivide(weights, 0.5);
    subdivide_for_roots(&left, left_t, mid_t, depth + 1, accuracy, roots);
    subdivide_for_roots(&right, mid_t, right_t, depth + 1, accuracy, roots);
}

///
/// Resolves the single crossing bracketed by a polygon with exactly one sign change
///
/// One polygon sign change means the endpoint weights, which are true function values, have
/// opposite signs, so ordinary bisection applies.
///
fn bisect_crossing(weights: &[f64], left_t: f64, right_t: f64, accuracy: f64) -> f64 {
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut lo_value = weights[0];

    if lo_value == 0.0 {
        return left_t;
    }
    if weights[weights.len() - 1] == 0.0 {
        return right_t;
    }

    let width = right_t - left_t;
    while (hi - lo) * width > accuracy * 0.5 {
        let mid = (lo + hi) * 0.5;
        let value = de_casteljau(weights, mid);

        if value == 0.0 {
            return left_t + mid * width;
        }

        if value.signum() == lo_value.signum() {
            lo = mid;
            lo_value = value;
        } else {
            hi = mid;
        }
    }

    left_t + (lo + hi) * 0.5 * width
}

///
/// Converts low-degree Bernstein weights to power-basis coefficients
///
/// Used by the closed-form solvers for derivative extrema, where the degree is at most 2.
///
pub(crate) fn bernstein_to_power_quadratic(weights: &[f64]) -> SmallVec<[f64; 4]> {
    match weights.len() {
        0 => SmallVec::new(),
        1 => {
            let mut coeffs = SmallVec::new();
            coeffs.push(weights[0]);
            coeffs
        }
        2 => {
            let mut coeffs = SmallVec::new();
            coeffs.push(weights[0]);
            coeffs.push(weights[1] - weights[0]);
            coeffs
        }
        _ => {
            debug_assert!(weights.len() == 3);
            let mut coeffs = SmallVec::new();
            coeffs.push(weights[0]);
            coeffs.push(2.0 * (weights[1] - weights[0]));
            coeffs.push(weights[0] - 2.0 * weights[1] + weights[2]);
            coeffs
        }
    }
}
