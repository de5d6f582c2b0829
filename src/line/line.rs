/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Represents a straight line
///
pub trait Line: Geo {
    ///
    /// Creates a new line from points
    ///
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self;

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);

    ///
    /// The point at the specified position along this line (0 = start, 1 = end)
    ///
    fn point_at_pos(&self, pos: f64) -> Self::Point {
        let (p1, p2) = self.points();

        p1 + (p2 - p1) * pos
    }
}

impl<Point: Coordinate> Line for (Point, Point) {
    #[inline]
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self {
        (p1, p2)
    }

    #[inline]
    fn points(&self) -> (Self::Point, Self::Point) {
        *self
    }
}
