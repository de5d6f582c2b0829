/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use super::line::*;

///
/// Returns the coefficients `(a, b, c)` of the implicit equation `a*x + b*y + c = 0` for a line,
/// normalized so that `a*a + b*b = 1`
///
/// With normalized coefficients, `a*x + b*y + c` is the signed perpendicular distance of the
/// point `(x, y)` from the line. Returns `None` for a zero-length line, which has no direction.
///
pub fn line_coefficients_2d<L>(line: &L) -> Option<(f64, f64, f64)>
where
    L: Line,
    L::Point: Coordinate + Coordinate2D,
{
    let (p1, p2) = line.points();

    let a = p2.y() - p1.y();
    let b = p1.x() - p2.x();
    let len = (a * a + b * b).sqrt();

    if len == 0.0 {
        return None;
    }

    let a = a / len;
    let b = b / len;
    let c = -(a * p1.x() + b * p1.y());

    Some((a, b, c))
}
