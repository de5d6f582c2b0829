/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::consts::*;
use crate::error::*;
use crate::geo::*;

///
/// A straight line segment between two points
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineSegment {
    pub points: [Coord2; 2],
}

///
/// A quadratic Bezier curve
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadraticBezier {
    pub points: [Coord2; 3],
}

///
/// A cubic Bezier curve
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CubicBezier {
    pub points: [Coord2; 4],
}

///
/// A Bezier curve of arbitrary degree, up to the crate's degree cap
///
#[derive(Clone, PartialEq, Debug)]
pub struct GeneralBezier {
    points: SmallVec<[Coord2; 8]>,
}

impl LineSegment {
    #[inline]
    pub fn new(start: Coord2, end: Coord2) -> LineSegment {
        LineSegment { points: [start, end] }
    }
}

impl QuadraticBezier {
    #[inline]
    pub fn new(start: Coord2, control: Coord2, end: Coord2) -> QuadraticBezier {
        QuadraticBezier {
            points: [start, control, end],
        }
    }
}

impl CubicBezier {
    #[inline]
    pub fn new(start: Coord2, control1: Coord2, control2: Coord2, end: Coord2) -> CubicBezier {
        CubicBezier {
            points: [start, control1, control2, end],
        }
    }
}

impl GeneralBezier {
    ///
    /// Creates a Bezier of arbitrary degree from its control points
    ///
    /// There must be at least two control points, they must all be finite, and the degree must
    /// not exceed the cap that the rest of the crate's algorithms are sized for.
    ///
    pub fn new(points: impl IntoIterator<Item = Coord2>) -> Result<GeneralBezier, GeomError> {
        let points: SmallVec<[Coord2; 8]> = points.into_iter().collect();

        if points.len() < 2 {
            return Err(GeomError::ZeroLengthCurve);
        }
        if points.len() > MAX_DEGREE + 1 {
            return Err(GeomError::DegreeOverflow(points.len() - 1));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeomError::NonFiniteCoordinate);
        }

        Ok(GeneralBezier { points })
    }

    ///
    /// Builds a general Bezier from points already known to be valid
    ///
    pub(crate) fn from_points_unchecked(points: SmallVec<[Coord2; 8]>) -> GeneralBezier {
        debug_assert!(points.len() >= 2 && points.len() <= MAX_DEGREE + 1);
        GeneralBezier { points }
    }

    #[inline]
    pub fn control_points(&self) -> &[Coord2] {
        &self.points
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }
}

impl Geo for LineSegment {
    type Point = Coord2;
}

impl Geo for QuadraticBezier {
    type Point = Coord2;
}

impl Geo for CubicBezier {
    type Point = Coord2;
}

impl Geo for GeneralBezier {
    type Point = Coord2;
}
