/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;

use super::basis::*;
use super::derivative::*;

///
/// The tangent vector of a Bezier curve at the specified position
///
/// Where the derivative vanishes (at a cusp, or the ends of a curve with coincident control
/// points) the tangent is taken from a point slightly inside the curve instead; a curve whose
/// control points are all coincident has no direction anywhere and produces
/// `GeomError::ZeroLengthCurve`.
///
pub fn tangent_at_pos<Point: Coordinate>(control_points: &[Point], t: f64) -> Result<Point, GeomError> {
    let deriv = derivative_points(control_points);

    let tangent = de_casteljau(&deriv, t);
    if tangent.magnitude() > 0.0 {
        return Ok(tangent);
    }

    // Step away from the degenerate position
    let mut offset = 1e-4;
    while offset < 0.5 {
        let t_nudged = if t < 0.5 { t + offset } else { t - offset };
        let tangent = de_casteljau(&deriv, t_nudged);
        if tangent.magnitude() > 0.0 {
            return Ok(tangent);
        }
        offset *= 10.0;
    }

    Err(GeomError::ZeroLengthCurve)
}
