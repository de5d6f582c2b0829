/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use super::line::*;

///
/// Finds where two line segments cross, as positions along each segment
///
/// Returns `(t1, t2, det)` where `t1` and `t2` are the positions on the first and second line
/// and `det` is the cross product of the two direction vectors (its sign indicates which way the
/// second line crosses the first). Returns `None` for parallel or degenerate lines, or when the
/// crossing point lies outside either segment.
///
pub fn line_intersects_line<L>(l1: &L, l2: &L) -> Option<(f64, f64, f64)>
where
    L: Line,
    L::Point: Coordinate + Coordinate2D,
{
    let (a0, a1) = l1.points();
    let (b0, b1) = l2.points();

    let ad = Coord2(a1.x() - a0.x(), a1.y() - a0.y());
    let bd = Coord2(b1.x() - b0.x(), b1.y() - b0.y());
    let d = Coord2(b0.x() - a0.x(), b0.y() - a0.y());

    let det = ad.cross(&bd);
    if 1.0 + det == 1.0 {
        // Parallel within floating point precision
        return None;
    }

    let det_inv = 1.0 / det;
    let t1 = d.cross(&bd) * det_inv;
    let t2 = d.cross(&ad) * det_inv;

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        Some((t1, t2, det))
    } else {
        None
    }
}
