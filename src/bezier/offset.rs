/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;
use crate::segment::*;

use super::fit::*;
use super::normal::*;

///
/// An approximate offset of a curve segment, as a sequence of cubic Beziers
///
/// Every point of the segment is displaced along its unit normal; the displacement interpolates
/// linearly from `initial_offset` at the start of the segment to `final_offset` at the end. The
/// true offset of a Bezier curve is not a Bezier curve, so the result is a refit within
/// `max_error` of the sampled offset points.
///
/// A segment with no length anywhere has no normals to offset along.
///
pub fn offset(segment: &Segment, initial_offset: f64, final_offset: f64, max_error: f64) -> Result<Vec<CubicBezier>, GeomError> {
    // Enough samples that the fit error dominates the sampling error
    const SAMPLES: usize = 33;

    let mut offset_points = Vec::with_capacity(SAMPLES);

    for i in 0..SAMPLES {
        let t = (i as f64) / ((SAMPLES - 1) as f64);
        let normal = unit_normal(segment, t)?;
        let distance = initial_offset + (final_offset - initial_offset) * t;

        offset_points.push(segment.point_at_pos(t) + normal * distance);
    }

    fit_curve(&offset_points, max_error).ok_or(GeomError::ZeroLengthCurve)
}

///
/// The unit normal of a segment
///
/// Arcs have a nonzero derivative everywhere, so only the polynomial variants need the
/// degenerate-spot handling that `unit_normal_at_pos` provides.
///
fn unit_normal(segment: &Segment, t: f64) -> Result<Coord2, GeomError> {
    match segment.control_points() {
        Some(points) => unit_normal_at_pos(points, t),
        None => Ok(segment.derivative_at_pos(t).rotate_90().to_unit_vector()),
    }
}
