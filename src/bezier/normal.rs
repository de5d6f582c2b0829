/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;

use super::tangent::*;

///
/// The normal vector of a 2D Bezier curve at the specified position
///
/// The normal is the tangent rotated a quarter turn anticlockwise; it is not normalized.
///
pub fn normal_at_pos(control_points: &[Coord2], t: f64) -> Result<Coord2, GeomError> {
    let tangent = tangent_at_pos(control_points, t)?;
    Ok(tangent.rotate_90())
}

///
/// The unit normal vector of a 2D Bezier curve at the specified position
///
pub fn unit_normal_at_pos(control_points: &[Coord2], t: f64) -> Result<Coord2, GeomError> {
    Ok(normal_at_pos(control_points, t)?.to_unit_vector())
}
