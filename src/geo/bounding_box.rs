/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;
use super::geo::*;

///
/// Trait implemented by things that can represent axis-aligned bounding boxes
///
pub trait BoundingBox: Geo + Sized {
    ///
    /// Returns a bounding box with the specified minimum and maximum coordinates
    ///
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    ///
    /// Returns the minimum point of this bounding box
    ///
    fn min(&self) -> Self::Point;

    ///
    /// Returns the maximum point of this bounding box
    ///
    fn max(&self) -> Self::Point;

    ///
    /// Returns an empty bounding box
    ///
    fn empty() -> Self {
        let min = Self::Point::from_components(&[f64::MAX; 4]);
        let max = Self::Point::from_components(&[f64::MIN; 4]);

        Self::from_min_max(min, max)
    }

    ///
    /// True if this bounding box contains no points
    ///
    fn is_empty(&self) -> bool {
        let (min, max) = (self.min(), self.max());

        (0..Self::Point::len()).any(|index| min.get(index) > max.get(index))
    }

    ///
    /// Creates the smallest bounding box containing all of the supplied points
    ///
    fn bounds_for_points<PointIter: IntoIterator<Item = Self::Point>>(points: PointIter) -> Self {
        let mut points = points.into_iter();

        let first = points.next();
        let first = if let Some(first) = first {
            first
        } else {
            return Self::empty();
        };

        let (mut min, mut max) = (first, first);
        for point in points {
            min = Self::Point::from_smallest_components(min, point);
            max = Self::Point::from_biggest_components(max, point);
        }

        Self::from_min_max(min, max)
    }

    ///
    /// Creates the union of this and another bounding box
    ///
    fn union_bounds(self, target: Self) -> Self {
        if self.is_empty() {
            target
        } else if target.is_empty() {
            self
        } else {
            let min = Self::Point::from_smallest_components(self.min(), target.min());
            let max = Self::Point::from_biggest_components(self.max(), target.max());

            Self::from_min_max(min, max)
        }
    }

    ///
    /// Returns the overlapping region of this and another bounding box, if there is one
    ///
    /// An empty overlap is reported as `None` rather than as a degenerate box.
    ///
    fn intersection_bounds(self, target: Self) -> Option<Self> {
        let min = Self::Point::from_biggest_components(self.min(), target.min());
        let max = Self::Point::from_smallest_components(self.max(), target.max());

        let result = Self::from_min_max(min, max);
        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }

    ///
    /// True if this bounding box overlaps another (boxes that touch are considered to overlap)
    ///
    fn overlaps(&self, target: &Self) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (target.min(), target.max());

        (0..Self::Point::len())
            .all(|index| min1.get(index) <= max2.get(index) && min2.get(index) <= max1.get(index))
    }
}

///
/// Represents a bounding box
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds<Point>(pub Point, pub Point);

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point = Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        Bounds(min, max)
    }

    #[inline]
    fn min(&self) -> Self::Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Self::Point {
        self.1
    }
}

impl<Point: Coordinate> BoundingBox for (Point, Point) {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        (min, max)
    }

    #[inline]
    fn min(&self) -> Self::Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Self::Point {
        self.1
    }
}
