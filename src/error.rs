/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///
/// Errors that can occur while building or operating on geometry
///
/// Numeric non-convergence is deliberately absent here: the intersection
/// routines absorb it and flag the result as degraded instead of failing.
///
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeomError {
    /// A coordinate was NaN or infinite
    #[error("coordinate is not a finite number")]
    NonFiniteCoordinate,

    /// A direction was requested from a curve with no extent
    #[error("curve has zero length where a direction is required")]
    ZeroLengthCurve,

    /// The degree of an S-basis or Bezier representation grew past the supported ceiling
    #[error("degree {0} exceeds the supported maximum of {max}", max = crate::consts::MAX_DEGREE)]
    DegreeOverflow(usize),

    /// An elliptical arc was constructed with non-positive or non-finite radii
    #[error("elliptical arc parameters are degenerate")]
    DegenerateArc,

    /// The root finder was given a function that is zero everywhere
    #[error("function is identically zero: every point is a root")]
    IndeterminateRoots,

    /// A path was built from segments that do not join end-to-end
    #[error("path segments are not continuous at segment {0}")]
    DiscontinuousPath(usize),

    /// A boolean operation produced a contour that failed to close
    #[error("boolean operation produced an open contour (gap of {gap})")]
    OpenContour { gap: f64 },

    /// Fixture text could not be parsed as path data
    #[error("invalid path data at offset {offset}: {reason}")]
    SvgSyntax { offset: usize, reason: &'static str },
}
