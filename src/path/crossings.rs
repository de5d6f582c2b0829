/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::intersection::*;
use crate::geo::*;
use crate::segment::*;

use super::path::*;

///
/// A position within a path vector
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PathPosition {
    pub path_idx: usize,
    pub time: PathTime,
}

impl PathPosition {
    pub fn new(path_idx: usize, segment_idx: usize, t: f64) -> PathPosition {
        PathPosition {
            path_idx,
            time: PathTime::new(segment_idx, t),
        }
    }
}

///
/// A point where two path vectors cross
///
#[derive(Clone, Copy, Debug)]
pub struct Crossing {
    pub a: PathPosition,
    pub b: PathPosition,
    pub point: Coord2,

    /// Positive when b crosses a from right to left (the sign of the derivative cross product)
    pub sign: f64,

    /// True when the crossing estimate could not be refined to full accuracy
    pub degraded: bool,
}

///
/// Finds all the points where two path vectors cross each other
///
/// Candidate segment pairs are pruned by a sweep over the segment bounding boxes, then each
/// pair goes through curve/curve intersection. Crossings that fall exactly on a segment join
/// are reported once, attributed to the start of the later segment.
///
pub fn path_crossings(a: &PathVector, b: &PathVector, accuracy: f64) -> Vec<Crossing> {
    let segments_a = collect_segments(a);
    let segments_b = collect_segments(b);

    let bounds_a: Vec<Bounds<Coord2>> = segments_a.iter().map(|(_, _, segment)| segment.bounding_box()).collect();
    let bounds_b: Vec<Bounds<Coord2>> = segments_b.iter().map(|(_, _, segment)| segment.bounding_box()).collect();

    let mut crossings = vec![];

    for (idx_a, idx_b) in sweep_bounds(&bounds_a, &bounds_b) {
        let (path_a, seg_a, segment_a) = &segments_a[idx_a];
        let (path_b, seg_b, segment_b) = &segments_b[idx_b];

        let found = curve_intersects_curve(segment_a, segment_b, accuracy);

        for (t1, t2) in found.crossings {
            let point = segment_a.point_at_pos(t1);
            let d1 = segment_a.derivative_at_pos(t1);
            let d2 = segment_b.derivative_at_pos(t2);

            let position_a = canonical_position(a, *path_a, *seg_a, t1);
            let position_b = canonical_position(b, *path_b, *seg_b, t2);

            crossings.push(Crossing {
                a: position_a,
                b: position_b,
                point,
                sign: d1.cross(&d2),
                degraded: found.degraded,
            });
        }
    }

    dedup_path_crossings(&mut crossings, accuracy);
    crossings
}

fn collect_segments(paths: &PathVector) -> Vec<(usize, usize, Segment)> {
    let mut segments = vec![];
    for (path_idx, path) in paths.paths().iter().enumerate() {
        for (seg_idx, segment) in path.segments().iter().enumerate() {
            segments.push((path_idx, seg_idx, segment.clone()));
        }
    }
    segments
}

///
/// Moves a position at the very end of a segment onto the start of the next one
///
/// Keeps every crossing attributed to a unique position, so a crossing at a segment join is not
/// seen as two different crossings.
///
fn canonical_position(paths: &PathVector, path_idx: usize, segment_idx: usize, t: f64) -> PathPosition {
    let segment_count = paths.paths()[path_idx].segments().len();

    if t >= 1.0 - 1e-9 && segment_count > 0 {
        let next = (segment_idx + 1) % segment_count;
        PathPosition::new(path_idx, next, 0.0)
    } else {
        PathPosition::new(path_idx, segment_idx, t)
    }
}

fn dedup_path_crossings(crossings: &mut Vec<Crossing>, accuracy: f64) {
    let mut deduped: Vec<Crossing> = vec![];

    'next_crossing: for crossing in crossings.iter() {
        for existing in deduped.iter() {
            let same_a = crossing.a.path_idx == existing.a.path_idx
                && (scalar_distance(crossing.a.time, existing.a.time) < 1e-6 || crossing.point.is_near_to(&existing.point, accuracy));
            let same_b = crossing.b.path_idx == existing.b.path_idx
                && (scalar_distance(crossing.b.time, existing.b.time) < 1e-6 || crossing.point.is_near_to(&existing.point, accuracy));

            if same_a && same_b && crossing.point.is_near_to(&existing.point, accuracy * 10.0) {
                continue 'next_crossing;
            }
        }

        deduped.push(*crossing);
    }

    *crossings = deduped;
}

fn scalar_distance(time1: PathTime, time2: PathTime) -> f64 {
    (time1.as_scalar() - time2.as_scalar()).abs()
}
