/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

///
/// Implemented by types that have a coordinate type associated with them
///
pub trait Geo {
    /// The type of coordinate this item uses
    type Point: Coordinate;
}

impl<Point: Coordinate> Geo for (Point, Point) {
    type Point = Point;
}
