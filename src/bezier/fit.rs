/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use nalgebra::{DMatrix, DVector};

use crate::fit::*;
use crate::geo::*;
use crate::segment::*;

use super::basis::*;

/// Splitting more than this many times means the points are probably noise
const MAX_FIT_SUBDIVISIONS: usize = 16;

///
/// Fits a sequence of cubic Bezier curves through a set of points
///
/// Uses least-squares fitting with chord-length parameterization, splitting at the worst point
/// and recursing when a single cubic cannot get within `max_error` of every sample. Returns
/// `None` when there are not enough distinct points to define a curve.
///
pub fn fit_curve(points: &[Coord2], max_error: f64) -> Option<Vec<CubicBezier>> {
    let distinct: Vec<Coord2> = points
        .iter()
        .fold(vec![], |mut distinct: Vec<Coord2>, point| {
            if distinct.last() != Some(point) {
                distinct.push(*point);
            }
            distinct
        });

    if distinct.len() < 2 {
        return None;
    }

    let solver = SvdSolver::default();
    let start_tangent = (distinct[1] - distinct[0]).to_unit_vector();
    let end_tangent = (distinct[distinct.len() - 2] - distinct[distinct.len() - 1]).to_unit_vector();

    let mut curves = vec![];
    fit_recursive(&distinct, start_tangent, end_tangent, max_error, &solver, 0, &mut curves);
    Some(curves)
}

fn fit_recursive(
    points: &[Coord2],
    start_tangent: Coord2,
    end_tangent: Coord2,
    max_error: f64,
    solver: &impl LeastSquares,
    depth: usize,
    curves: &mut Vec<CubicBezier>,
) {
    if points.len() == 2 {
        curves.push(line_as_cubic(points[0], points[1]));
        return;
    }

    let mut parameters = chord_length_parameterize(points);
    let mut curve = generate_bezier(points, &parameters, start_tangent, end_tangent, solver);
    let (mut error, mut worst) = max_fit_error(points, &parameters, &curve);

    // A couple of reparameterization passes often rescue a marginal fit
    for _ in 0..2 {
        if error <= max_error {
            break;
        }
        reparameterize(points, &mut parameters, &curve);
        curve = generate_bezier(points, &parameters, start_tangent, end_tangent, solver);
        let (new_error, new_worst) = max_fit_error(points, &parameters, &curve);
        error = new_error;
        worst = new_worst;
    }

    if error <= max_error || depth >= MAX_FIT_SUBDIVISIONS || worst == 0 || worst == points.len() - 1 {
        curves.push(curve);
        return;
    }

    // Split at the worst point, with the tangent there shared between the halves
    let center_tangent = (points[worst - 1] - points[worst + 1]).to_unit_vector();
    fit_recursive(&points[..=worst], start_tangent, center_tangent, max_error, solver, depth + 1, curves);
    fit_recursive(&points[worst..], center_tangent * -1.0, end_tangent, max_error, solver, depth + 1, curves);
}

fn line_as_cubic(start: Coord2, end: Coord2) -> CubicBezier {
    let third = (end - start) * (1.0 / 3.0);
    CubicBezier::new(start, start + third, end - third, end)
}

///
/// Assigns each point a parameter proportional to its distance along the polyline
///
fn chord_length_parameterize(points: &[Coord2]) -> Vec<f64> {
    let mut parameters = Vec::with_capacity(points.len());
    parameters.push(0.0);

    for i in 1..points.len() {
        parameters.push(parameters[i - 1] + points[i - 1].distance_to(&points[i]));
    }

    let total = parameters[points.len() - 1];
    if total > 0.0 {
        for parameter in parameters.iter_mut() {
            *parameter /= total;
        }
    }

    parameters
}

///
/// The least-squares cubic through the end points with the given end tangent directions
///
/// The unknowns are the two tangent handle lengths; each sample point contributes two rows (one
/// per coordinate) to the system.
///
fn generate_bezier(
    points: &[Coord2],
    parameters: &[f64],
    start_tangent: Coord2,
    end_tangent: Coord2,
    solver: &impl LeastSquares,
) -> CubicBezier {
    let first = points[0];
    let last = points[points.len() - 1];
    let n = points.len();

    let mut a = DMatrix::zeros(2 * n, 2);
    let mut b = DVector::zeros(2 * n);

    for (i, (&point, &t)) in points.iter().zip(parameters.iter()).enumerate() {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;

        let residual = point - first * (b0 + b1) - last * (b2 + b3);

        a[(2 * i, 0)] = start_tangent.x() * b1;
        a[(2 * i, 1)] = end_tangent.x() * b2;
        a[(2 * i + 1, 0)] = start_tangent.y() * b1;
        a[(2 * i + 1, 1)] = end_tangent.y() * b2;

        b[2 * i] = residual.x();
        b[2 * i + 1] = residual.y();
    }

    let alphas = solver.solve_least_squares(&a, &b);
    let (alpha1, alpha2) = match alphas {
        Some(alphas) => (alphas[0], alphas[1]),
        None => (0.0, 0.0),
    };

    // Degenerate alphas collapse the handles; fall back to a third of the chord
    let chord = first.distance_to(&last);
    let alpha1 = if alpha1.is_finite() && alpha1 > 1e-6 * chord { alpha1 } else { chord / 3.0 };
    let alpha2 = if alpha2.is_finite() && alpha2 > 1e-6 * chord { alpha2 } else { chord / 3.0 };

    CubicBezier::new(first, first + start_tangent * alpha1, last + end_tangent * alpha2, last)
}

///
/// The largest distance between a sample point and the curve at its parameter, and which sample
/// it was
///
fn max_fit_error(points: &[Coord2], parameters: &[f64], curve: &CubicBezier) -> (f64, usize) {
    let mut max_error = 0.0;
    let mut worst = points.len() / 2;

    for (i, (&point, &t)) in points.iter().zip(parameters.iter()).enumerate() {
        let error = de_casteljau(&curve.points, t).distance_to(&point);
        if error > max_error {
            max_error = error;
            worst = i;
        }
    }

    (max_error, worst)
}

///
/// One Newton-Raphson step moving each parameter towards the closest point on the curve
///
fn reparameterize(points: &[Coord2], parameters: &mut [f64], curve: &CubicBezier) {
    let deriv = super::derivative::derivative_points(&curve.points);
    let second_deriv = super::derivative::derivative_points(&deriv);

    for (&point, t) in points.iter().zip(parameters.iter_mut()) {
        let on_curve = de_casteljau(&curve.points, *t);
        let d1 = de_casteljau(&deriv, *t);
        let d2 = de_casteljau(&second_deriv, *t);

        let offset = on_curve - point;
        let numerator = offset.dot(&d1);
        let denominator = d1.dot(&d1) + offset.dot(&d2);

        if denominator.abs() > 1e-12 {
            *t = (*t - numerator / denominator).clamp(0.0, 1.0);
        }
    }
}
