/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::f64::consts::PI;

use crate::error::*;
use crate::geo::*;
use crate::path::*;
use crate::segment::*;

use super::elliptical::*;

///
/// A whole circle
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle {
    pub center: Coord2,
    pub radius: f64,
}

impl Circle {
    ///
    /// Creates a circle with a center and a radius
    ///
    pub fn new(center: Coord2, radius: f64) -> Result<Circle, GeomError> {
        if !center.is_finite() {
            return Err(GeomError::NonFiniteCoordinate);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeomError::DegenerateArc);
        }

        Ok(Circle { center, radius })
    }

    ///
    /// True if a point lies inside (or on) the circle
    ///
    pub fn contains(&self, point: &Coord2) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    ///
    /// The arc covering a part of this circle, anticlockwise from `start_angle`
    ///
    pub fn arc(&self, start_angle: f64, sweep_angle: f64) -> Result<EllipticalArc, GeomError> {
        EllipticalArc::new(self.center, (self.radius, self.radius), 0.0, start_angle, sweep_angle)
    }

    ///
    /// This circle as a closed path of four quarter-turn arcs, traced anticlockwise from the
    /// rightmost point
    ///
    pub fn to_path(&self) -> Result<Path, GeomError> {
        let quarters = (0..4)
            .map(|quarter| {
                let arc = self.arc((quarter as f64) * PI / 2.0, PI / 2.0)?;
                Ok(Segment::Arc(arc))
            })
            .collect::<Result<Vec<_>, GeomError>>()?;

        Path::from_segments(quarters, true)
    }
}
