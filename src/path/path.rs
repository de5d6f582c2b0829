/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::arc::EllipticalArc;
use crate::consts::*;
use crate::error::*;
use crate::geo::*;
use crate::segment::*;

///
/// A position along a path: a segment index and a parameter on that segment
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PathTime {
    pub segment_idx: usize,
    pub t: f64,
}

impl PathTime {
    pub fn new(segment_idx: usize, t: f64) -> PathTime {
        PathTime { segment_idx, t }
    }

    ///
    /// This position as a single scalar (`segment_idx + t`), which orders positions along the
    /// path
    ///
    #[inline]
    pub fn as_scalar(&self) -> f64 {
        (self.segment_idx as f64) + self.t
    }
}

///
/// A connected sequence of curve segments
///
/// Consecutive segments join end to start (within `CLOSE_DISTANCE`); a closed path additionally
/// joins its last segment back to its first.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    segments: Vec<Segment>,
    closed: bool,
}

impl Geo for Path {
    type Point = Coord2;
}

impl Path {
    ///
    /// Creates a path from a run of segments, checking that they connect
    ///
    /// `GeomError::DiscontinuousPath` reports the index of the first segment whose start does
    /// not meet the previous segment's end. A closed path must also return to its start point.
    ///
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>, closed: bool) -> Result<Path, GeomError> {
        let segments = segments
            .into_iter()
            .map(|segment| segment.validated())
            .collect::<Result<Vec<_>, _>>()?;

        for idx in 1..segments.len() {
            if !segments[idx - 1].end_point().is_near_to(&segments[idx].start_point(), CLOSE_DISTANCE) {
                return Err(GeomError::DiscontinuousPath(idx));
            }
        }

        if closed && segments.len() > 0 {
            let gap = segments[segments.len() - 1].end_point().distance_to(&segments[0].start_point());
            if gap > CLOSE_DISTANCE {
                return Err(GeomError::DiscontinuousPath(0));
            }
        }

        Ok(Path { segments, closed })
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn start_point(&self) -> Option<Coord2> {
        self.segments.first().map(|segment| segment.start_point())
    }

    pub fn end_point(&self) -> Option<Coord2> {
        self.segments.last().map(|segment| segment.end_point())
    }

    ///
    /// The point at a position along this path
    ///
    pub fn point_at_time(&self, time: PathTime) -> Coord2 {
        self.segments[time.segment_idx].point_at_pos(time.t)
    }

    ///
    /// The bounding box of the whole path (conservative)
    ///
    pub fn bounding_box<BoundsType: BoundingBox<Point = Coord2>>(&self) -> BoundsType {
        self.segments
            .iter()
            .map(|segment| segment.bounding_box())
            .fold(BoundsType::empty(), |bounds, next: BoundsType| bounds.union_bounds(next))
    }

    ///
    /// This path traced in the opposite direction
    ///
    pub fn reverse(&self) -> Path {
        Path {
            segments: self.segments.iter().rev().map(|segment| segment.reverse()).collect(),
            closed: self.closed,
        }
    }

    ///
    /// The segments tracing this path forward from one position to another
    ///
    /// On a closed path the walk wraps around the end; `to` at or before `from` produces the
    /// long way round. Degenerate slivers shorter than `SMALL_T_DISTANCE` in parameter space
    /// are dropped.
    ///
    pub fn segments_between(&self, from: PathTime, to: PathTime) -> Vec<Segment> {
        let mut result = vec![];
        let count = self.segments.len();
        if count == 0 {
            return result;
        }

        let mut push_section = |segment_idx: usize, t_min: f64, t_max: f64| {
            if t_max - t_min > SMALL_T_DISTANCE {
                result.push(self.segments[segment_idx].section(t_min, t_max));
            }
        };

        if from.segment_idx == to.segment_idx && to.t > from.t {
            push_section(from.segment_idx, from.t, to.t);
            return result;
        }

        push_section(from.segment_idx, from.t, 1.0);

        let mut idx = (from.segment_idx + 1) % count;
        while idx != to.segment_idx {
            push_section(idx, 0.0, 1.0);
            idx = (idx + 1) % count;
        }

        push_section(to.segment_idx, 0.0, to.t);
        result
    }
}

///
/// A set of paths treated as a single filled region
///
/// The filled region is decided by the nonzero winding rule: a point is inside when the sum of
/// the signed crossings of any ray from it is not zero. Contour direction therefore matters;
/// holes are contours wound opposite to their surroundings.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PathVector {
    paths: Vec<Path>,
}

impl Geo for PathVector {
    type Point = Coord2;
}

impl PathVector {
    pub fn new() -> PathVector {
        PathVector { paths: vec![] }
    }

    pub fn from_paths(paths: impl IntoIterator<Item = Path>) -> PathVector {
        PathVector {
            paths: paths.into_iter().collect(),
        }
    }

    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.iter().all(|path| path.is_empty())
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn bounding_box<BoundsType: BoundingBox<Point = Coord2>>(&self) -> BoundsType {
        self.paths
            .iter()
            .map(|path| path.bounding_box())
            .fold(BoundsType::empty(), |bounds, next: BoundsType| bounds.union_bounds(next))
    }

    ///
    /// Every path reversed (negating all winding numbers; the filled region is unchanged under
    /// the nonzero rule)
    ///
    pub fn reverse(&self) -> PathVector {
        PathVector {
            paths: self.paths.iter().map(|path| path.reverse()).collect(),
        }
    }
}

///
/// Builds a path one segment at a time, in drawing order
///
pub struct PathBuilder {
    start: Coord2,
    current: Coord2,
    segments: Vec<Segment>,
}

impl PathBuilder {
    ///
    /// Begins a path at a point
    ///
    pub fn start(point: Coord2) -> PathBuilder {
        PathBuilder {
            start: point,
            current: point,
            segments: vec![],
        }
    }

    pub fn line_to(mut self, point: Coord2) -> Self {
        self.segments.push(Segment::line(self.current, point));
        self.current = point;
        self
    }

    pub fn quadratic_to(mut self, control: Coord2, point: Coord2) -> Self {
        self.segments.push(Segment::Quadratic(QuadraticBezier::new(self.current, control, point)));
        self.current = point;
        self
    }

    pub fn cubic_to(mut self, control1: Coord2, control2: Coord2, point: Coord2) -> Self {
        self.segments
            .push(Segment::Cubic(CubicBezier::new(self.current, control1, control2, point)));
        self.current = point;
        self
    }

    pub fn arc_to(
        mut self,
        radii: (f64, f64),
        rotation: f64,
        large_arc: bool,
        sweep_positive: bool,
        point: Coord2,
    ) -> Result<Self, GeomError> {
        let arc = EllipticalArc::from_endpoints(self.current, radii, rotation, large_arc, sweep_positive, point)?;
        self.segments.push(Segment::Arc(arc));
        self.current = point;
        Ok(self)
    }

    ///
    /// Finishes the path, leaving it open
    ///
    pub fn build(self) -> Result<Path, GeomError> {
        Path::from_segments(self.segments, false)
    }

    ///
    /// Closes and finishes the path, adding a line back to the start if there is a gap
    ///
    pub fn build_closed(mut self) -> Result<Path, GeomError> {
        if self.current.distance_to(&self.start) > SMALL_DISTANCE {
            self.segments.push(Segment::line(self.current, self.start));
        }
        Path::from_segments(self.segments, true)
    }
}
