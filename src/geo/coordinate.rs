/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Sub};

///
/// Represents a value that can be used as a coordinate
///
pub trait Coordinate:
    Copy
    + Clone
    + PartialEq
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<f64, Output = Self>
{
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    fn distance_to(&self, target: &Self) -> f64 {
        let offset = *self - *target;
        offset.dot(&offset).sqrt()
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    fn dot(&self, target: &Self) -> f64;

    ///
    /// True if every component of this coordinate is a finite number
    ///
    fn is_finite(&self) -> bool {
        (0..Self::len()).all(|index| self.get(index).is_finite())
    }

    ///
    /// True if this coordinate is within `max_distance` of another one
    ///
    fn is_near_to(&self, target: &Self, max_distance: f64) -> bool {
        self.distance_to(target) <= max_distance
    }

    ///
    /// The magnitude of this coordinate, treated as a vector
    ///
    fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    ///
    /// This coordinate, scaled to a length of 1 (the origin is returned unchanged)
    ///
    fn to_unit_vector(&self) -> Self {
        let magnitude = self.magnitude();

        if magnitude == 0.0 {
            *self
        } else {
            *self * (1.0 / magnitude)
        }
    }
}

///
/// 1-dimensional coordinates, so scalar functions can share the curve algorithms
///
impl Coordinate for f64 {
    #[inline]
    fn from_components(components: &[f64]) -> f64 {
        components[0]
    }

    #[inline]
    fn origin() -> f64 {
        0.0
    }

    #[inline]
    fn len() -> usize {
        1
    }

    #[inline]
    fn get(&self, _index: usize) -> f64 {
        *self
    }

    #[inline]
    fn from_biggest_components(p1: f64, p2: f64) -> f64 {
        f64::max(p1, p2)
    }

    #[inline]
    fn from_smallest_components(p1: f64, p2: f64) -> f64 {
        f64::min(p1, p2)
    }

    #[inline]
    fn dot(&self, target: &f64) -> f64 {
        self * target
    }
}

///
/// Implemented by coordinates with an x and y component
///
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    ///
    /// Returns this coordinate as a 2-component point
    ///
    fn coords(&self) -> (f64, f64) {
        (self.x(), self.y())
    }
}
