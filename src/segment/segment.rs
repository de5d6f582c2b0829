/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::arc::*;
use crate::bezier;
use crate::bezier::roots::*;
use crate::error::*;
use crate::geo::*;
use crate::sbasis::*;

use super::bezier_segments::*;

///
/// A single curve segment of a path
///
#[derive(Clone, PartialEq, Debug)]
pub enum Segment {
    Line(LineSegment),
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
    Bezier(GeneralBezier),
    Arc(EllipticalArc),
}

impl Geo for Segment {
    type Point = Coord2;
}

impl From<LineSegment> for Segment {
    fn from(segment: LineSegment) -> Segment {
        Segment::Line(segment)
    }
}

impl From<QuadraticBezier> for Segment {
    fn from(segment: QuadraticBezier) -> Segment {
        Segment::Quadratic(segment)
    }
}

impl From<CubicBezier> for Segment {
    fn from(segment: CubicBezier) -> Segment {
        Segment::Cubic(segment)
    }
}

impl From<GeneralBezier> for Segment {
    fn from(segment: GeneralBezier) -> Segment {
        Segment::Bezier(segment)
    }
}

impl From<EllipticalArc> for Segment {
    fn from(segment: EllipticalArc) -> Segment {
        Segment::Arc(segment)
    }
}

impl Segment {
    ///
    /// A straight line between two points
    ///
    pub fn line(start: Coord2, end: Coord2) -> Segment {
        Segment::Line(LineSegment::new(start, end))
    }

    ///
    /// The control points, for the variants that are polynomial curves
    ///
    /// Arcs are trigonometric and have no control points; use `to_clip_spans` for a bounded
    /// Bezier approximation instead.
    ///
    pub fn control_points(&self) -> Option<&[Coord2]> {
        match self {
            Segment::Line(line) => Some(&line.points),
            Segment::Quadratic(quad) => Some(&quad.points),
            Segment::Cubic(cubic) => Some(&cubic.points),
            Segment::Bezier(bezier) => Some(bezier.control_points()),
            Segment::Arc(_) => None,
        }
    }

    ///
    /// Checks that every coordinate that defines this segment is finite
    ///
    pub fn validated(self) -> Result<Segment, GeomError> {
        let finite = match &self {
            Segment::Arc(_) => true, // Arcs are validated when they are built
            _ => self.control_points().map(|points| points.iter().all(|p| p.is_finite())).unwrap_or(true),
        };

        if finite {
            Ok(self)
        } else {
            Err(GeomError::NonFiniteCoordinate)
        }
    }

    pub fn start_point(&self) -> Coord2 {
        match self {
            Segment::Arc(arc) => arc.start_point(),
            _ => self.control_points().unwrap()[0],
        }
    }

    pub fn end_point(&self) -> Coord2 {
        match self {
            Segment::Arc(arc) => arc.end_point(),
            _ => {
                let points = self.control_points().unwrap();
                points[points.len() - 1]
            }
        }
    }

    ///
    /// The point on this segment at the specified position
    ///
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        match self {
            Segment::Arc(arc) => arc.point_at_pos(t),
            _ => bezier::de_casteljau(self.control_points().unwrap(), t),
        }
    }

    ///
    /// The derivative of this segment with respect to t
    ///
    pub fn derivative_at_pos(&self, t: f64) -> Coord2 {
        match self {
            Segment::Arc(arc) => arc.derivative_at_pos(t),
            _ => {
                let deriv = bezier::derivative_points(self.control_points().unwrap());
                bezier::de_casteljau(&deriv, t)
            }
        }
    }

    ///
    /// A fast, conservative bounding box for this segment
    ///
    pub fn bounding_box<Bounds: BoundingBox<Point = Coord2>>(&self) -> Bounds {
        match self {
            Segment::Arc(arc) => arc.bounding_box(),
            _ => bezier::bounding_box(self.control_points().unwrap()),
        }
    }

    ///
    /// The exact bounding box of this segment
    ///
    pub fn tight_bounding_box<Bounds: BoundingBox<Point = Coord2>>(&self) -> Bounds {
        match self {
            Segment::Arc(arc) => arc.bounding_box(),
            Segment::Line(line) => Bounds::bounds_for_points(line.points.iter().copied()),
            _ => bezier::tight_bounding_box(self.control_points().unwrap()),
        }
    }

    ///
    /// This segment traced in the opposite direction
    ///
    pub fn reverse(&self) -> Segment {
        match self {
            Segment::Arc(arc) => Segment::Arc(arc.reverse()),
            _ => {
                let mut points: SmallVec<[Coord2; 8]> = self.control_points().unwrap().iter().copied().collect();
                points.reverse();
                Segment::from_bezier_points(points)
            }
        }
    }

    ///
    /// The part of this segment between two positions, reparameterised onto [0, 1]
    ///
    pub fn section(&self, t_min: f64, t_max: f64) -> Segment {
        match self {
            Segment::Arc(arc) => Segment::Arc(arc.section(t_min, t_max)),
            Segment::Line(line) => {
                let (p0, p1) = (line.points[0], line.points[1]);
                let start = p0 * (1.0 - t_min) + p1 * t_min;
                let end = p0 * (1.0 - t_max) + p1 * t_max;
                Segment::line(start, end)
            }
            _ => {
                let points = bezier::section(self.control_points().unwrap(), t_min, t_max);
                Segment::from_bezier_points(points)
            }
        }
    }

    ///
    /// Splits this segment at a position; the two halves concatenate to exactly the original
    /// segment
    ///
    pub fn subdivide(&self, t: f64) -> (Segment, Segment) {
        match self {
            Segment::Arc(arc) => {
                let (left, right) = arc.subdivide(t);
                (Segment::Arc(left), Segment::Arc(right))
            }
            _ => {
                let (left, right) = bezier::subdivide(self.control_points().unwrap(), t);
                (Segment::from_bezier_points(left), Segment::from_bezier_points(right))
            }
        }
    }

    ///
    /// The coordinate functions of this segment as a pair of S-basis functions
    ///
    /// Exact for the polynomial variants; arcs use a bounded-error series approximation (see
    /// `EllipticalArc::to_sbasis`).
    ///
    pub fn to_sbasis(&self) -> Result<(SBasis, SBasis), GeomError> {
        match self {
            Segment::Arc(arc) => arc.to_sbasis(),
            _ => {
                let points = self.control_points().unwrap();
                let x_weights: SmallVec<[f64; 8]> = points.iter().map(|p| p.x()).collect();
                let y_weights: SmallVec<[f64; 8]> = points.iter().map(|p| p.y()).collect();
                Ok((bezier_to_sbasis(&x_weights), bezier_to_sbasis(&y_weights)))
            }
        }
    }

    ///
    /// This segment as one or more Bezier control-point runs suitable for clipping, each with
    /// the t range of the segment it covers
    ///
    /// Polynomial variants are exact single runs; arcs become cubic quarter-turn spans with a
    /// small bounded error, which the intersection code compensates for by refining its answers
    /// against the analytic arc.
    ///
    pub fn to_clip_spans(&self) -> SmallVec<[(SmallVec<[Coord2; 8]>, Space1); 4]> {
        match self {
            Segment::Arc(arc) => arc
                .to_cubic_spans()
                .into_iter()
                .map(|(points, range)| {
                    let points: SmallVec<[Coord2; 8]> = points.iter().copied().collect();
                    (points, range)
                })
                .collect(),
            _ => {
                let points: SmallVec<[Coord2; 8]> = self.control_points().unwrap().iter().copied().collect();
                let mut spans = SmallVec::new();
                spans.push((points, Space1::unit()));
                spans
            }
        }
    }

    ///
    /// Positions on this segment where the x coordinate takes a particular value
    ///
    pub fn solve_t_for_x(&self, x: f64, accuracy: f64) -> Vec<f64> {
        match self {
            Segment::Arc(arc) => arc.solve_t_for_axis(0, x).into_iter().collect(),
            _ => bezier::solve_t_for_x(self.control_points().unwrap(), x, accuracy),
        }
    }

    ///
    /// Positions on this segment where the y coordinate takes a particular value
    ///
    pub fn solve_t_for_y(&self, y: f64, accuracy: f64) -> Vec<f64> {
        match self {
            Segment::Arc(arc) => arc.solve_t_for_axis(1, y).into_iter().collect(),
            _ => bezier::solve_t_for_y(self.control_points().unwrap(), y, accuracy),
        }
    }

    ///
    /// Builds the most specific polynomial variant for a run of control points
    ///
    pub(crate) fn from_bezier_points(points: SmallVec<[Coord2; 8]>) -> Segment {
        match points.len() {
            2 => Segment::Line(LineSegment::new(points[0], points[1])),
            3 => Segment::Quadratic(QuadraticBezier::new(points[0], points[1], points[2])),
            4 => Segment::Cubic(CubicBezier::new(points[0], points[1], points[2], points[3])),
            _ => Segment::Bezier(GeneralBezier::from_points_unchecked(points)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    fn arch() -> Segment {
        Segment::Cubic(CubicBezier::new(
            Coord2(0.0, 0.0),
            Coord2(1.0, 2.0),
            Coord2(3.0, 2.0),
            Coord2(4.0, 0.0),
        ))
    }

    #[test]
    fn subdivision_is_exact() {
        let segment = arch();
        let (left, right) = segment.subdivide(0.3);

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!(left.point_at_pos(t).distance_to(&segment.point_at_pos(t * 0.3)) < 1e-12);
            assert!(right.point_at_pos(t).distance_to(&segment.point_at_pos(0.3 + t * 0.7)) < 1e-12);
        }
    }

    #[test]
    fn reverse_traces_backwards() {
        let segment = arch();
        let reversed = segment.reverse();

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            assert!(reversed.point_at_pos(t).distance_to(&segment.point_at_pos(1.0 - t)) < 1e-12);
        }
    }

    #[test]
    fn sbasis_form_matches_the_curve() {
        let segment = arch();
        let (x, y) = segment.to_sbasis().unwrap();

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            let point = segment.point_at_pos(t);
            assert!((x.point_at_pos(t) - point.x()).abs() < 1e-10);
            assert!((y.point_at_pos(t) - point.y()).abs() < 1e-10);
        }
    }

    #[test]
    fn tight_bounding_box_shrinks_the_control_hull() {
        let segment = arch();

        let loose: Bounds<Coord2> = segment.bounding_box();
        let tight: Bounds<Coord2> = segment.tight_bounding_box();

        // The arch peaks at y = 1.5 but its control hull reaches y = 2
        assert!(loose.max().y() == 2.0);
        assert!((tight.max().y() - 1.5).abs() < 1e-9);
        assert!(tight.min().distance_to(&Coord2(0.0, 0.0)) < 1e-9);
        assert!((tight.max().x() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn line_section_is_a_line() {
        let segment = Segment::line(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
        let section = segment.section(0.2, 0.7);

        assert!(matches!(section, Segment::Line(_)));
        assert!(section.start_point().distance_to(&Coord2(2.0, 2.0)) < 1e-12);
        assert!(section.end_point().distance_to(&Coord2(7.0, 7.0)) < 1e-12);
    }

    #[test]
    fn arc_segment_dispatches_to_the_arc() {
        let arc = EllipticalArc::new(Coord2(0.0, 0.0), (1.0, 1.0), 0.0, 0.0, PI).unwrap();
        let segment = Segment::Arc(arc);

        assert!(segment.point_at_pos(0.5).distance_to(&Coord2(0.0, 1.0)) < 1e-12);
        assert!(segment.control_points().is_none());
        assert!(segment.to_clip_spans().len() == 2);
    }

    #[test]
    fn validation_rejects_non_finite_points() {
        let segment = Segment::line(Coord2(0.0, 0.0), Coord2(f64::NAN, 1.0));
        assert!(matches!(segment.validated(), Err(GeomError::NonFiniteCoordinate)));
    }

    #[test]
    fn general_bezier_degree_cap() {
        let many_points = (0..40).map(|i| Coord2(i as f64, 0.0));
        assert!(matches!(GeneralBezier::new(many_points), Err(GeomError::DegreeOverflow(39))));
    }
}
