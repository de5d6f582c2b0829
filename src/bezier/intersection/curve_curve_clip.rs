/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::consts::*;
use crate::geo::*;
use crate::line::*;
use crate::segment::*;

use super::fat_line::*;

/// Clipping calls allowed per span pair before giving up on refinement
const MAX_CLIP_CALLS: usize = 4096;

/// Domains narrower than this are considered resolved
const DOMAIN_EPSILON: f64 = 1e-9;

///
/// The result of intersecting two curve segments
///
#[derive(Clone, Debug, Default)]
pub struct CurveCrossings {
    /// The crossings as (t on the first curve, t on the second curve), sorted by the first t
    pub crossings: Vec<(f64, f64)>,

    /// True when some crossing could not be refined to full accuracy
    pub degraded: bool,
}

///
/// Finds the points where two curve segments cross, as parameter pairs
///
/// `accuracy` is a distance in coordinate space: reported crossing points on the two curves lie
/// within it of each other, and crossings closer together than it are merged. Curves that share
/// an endpoint may or may not report the shared point; callers tracking path topology handle
/// segment joins themselves.
///
pub fn curve_intersects_curve(curve1: &Segment, curve2: &Segment, accuracy: f64) -> CurveCrossings {
    let mut result = CurveCrossings::default();

    // Zero-extent segments cross nothing
    if is_point_like(curve1) || is_point_like(curve2) {
        return result;
    }

    // Two lines have a closed form
    if let (Segment::Line(l1), Segment::Line(l2)) = (curve1, curve2) {
        let line1 = (l1.points[0], l1.points[1]);
        let line2 = (l2.points[0], l2.points[1]);
        if let Some((t1, t2, _)) = line_intersects_line(&line1, &line2) {
            result.crossings.push((t1, t2));
        }
        return result;
    }

    let mut candidates: Vec<(f64, f64)> = vec![];

    for (points1, range1) in curve1.to_clip_spans() {
        for (points2, range2) in curve2.to_clip_spans() {
            let mut calls = 0;
            let before = candidates.len();

            clip_spans(
                &points1,
                &points2,
                Space1::unit(),
                Space1::unit(),
                false,
                0,
                &mut calls,
                &mut candidates,
                &mut result.degraded,
            );

            // Map span-local parameters onto the whole segment
            for candidate in candidates[before..].iter_mut() {
                *candidate = (range1.point_at_pos(candidate.0), range2.point_at_pos(candidate.1));
            }
        }
    }

    for (t1, t2) in candidates {
        let polished = newton_polish(curve1, curve2, t1, t2, accuracy, &mut result.degraded);
        result.crossings.push(polished);
    }

    dedup_crossings(curve1, curve2, &mut result.crossings, accuracy);
    result
}

fn is_point_like(segment: &Segment) -> bool {
    match segment.control_points() {
        Some(points) => points.iter().skip(1).all(|p| *p == points[0]),
        None => false,
    }
}

///
/// One step of the fat-line clipping recursion
///
/// `curve1` over `domain1` is clipped against the fat line of `curve2`; roles swap on each
/// recursion. `flip` records whether the (t1, t2) output order is currently swapped.
///
#[allow(clippy::too_many_arguments)]
fn clip_spans(
    curve1: &[Coord2],
    curve2: &[Coord2],
    domain1: Space1,
    domain2: Space1,
    flip: bool,
    depth: usize,
    calls: &mut usize,
    out: &mut Vec<(f64, f64)>,
    degraded: &mut bool,
) {
    *calls += 1;
    if *calls > MAX_CLIP_CALLS || depth > MAX_CLIP_DEPTH {
        // Refinement budget exhausted: emit the best estimate rather than losing the crossing
        push_candidate(out, domain1.mid(), domain2.mid(), flip);
        *degraded = true;
        return;
    }

    let bounds1: Bounds<Coord2> = crate::bezier::bounding_box(curve1);
    let bounds2: Bounds<Coord2> = crate::bezier::bounding_box(curve2);
    if !bounds1.overlaps(&bounds2) {
        return;
    }

    if domain1.extent() < DOMAIN_EPSILON && domain2.extent() < DOMAIN_EPSILON {
        push_candidate(out, domain1.mid(), domain2.mid(), flip);
        return;
    }

    // Clip curve1 against the chord band of curve2, then against the perpendicular band
    let mut clip_range = Space1::unit();
    for fat_line in [FatLine::from_chord(curve2), FatLine::perpendicular_to_chord(curve2)] {
        let fat_line = match fat_line {
            Some(fat_line) => fat_line,
            None => continue, // Point-like chord: the bounding box check above still prunes
        };

        let clipped_points = crate::bezier::section(curve1, clip_range.min(), clip_range.max());
        match fat_line.clip(&clipped_points) {
            Some(sub_range) => clip_range = clip_range.subrange(sub_range.min(), sub_range.max()),
            None => return,
        }
    }

    let new_domain1 = domain1.subrange(clip_range.min(), clip_range.max());
    let clipped1 = crate::bezier::section(curve1, clip_range.min(), clip_range.max());

    if clip_range.extent() > 0.8 {
        // Not enough progress: subdivide the wider domain instead of clipping again
        if new_domain1.extent() > domain2.extent() {
            let (left, right) = crate::bezier::subdivide(&clipped1, 0.5);
            let mid = new_domain1.mid();
            clip_spans(curve2, &left, domain2, Space1::new(new_domain1.min(), mid), !flip, depth + 1, calls, out, degraded);
            clip_spans(curve2, &right, domain2, Space1::new(mid, new_domain1.max()), !flip, depth + 1, calls, out, degraded);
        } else {
            let (left, right) = crate::bezier::subdivide(curve2, 0.5);
            let mid = domain2.mid();
            clip_spans(&left, &clipped1, Space1::new(domain2.min(), mid), new_domain1, !flip, depth + 1, calls, out, degraded);
            clip_spans(&right, &clipped1, Space1::new(mid, domain2.max()), new_domain1, !flip, depth + 1, calls, out, degraded);
        }
    } else {
        clip_spans(curve2, &clipped1, domain2, new_domain1, !flip, depth + 1, calls, out, degraded);
    }
}

fn push_candidate(out: &mut Vec<(f64, f64)>, t1: f64, t2: f64, flip: bool) {
    if flip {
        out.push((t2, t1));
    } else {
        out.push((t1, t2));
    }
}

///
/// Newton iteration on `curve1(t1) - curve2(t2) = 0` against the analytic curves
///
/// Clipping works on Bezier approximations (exact for polynomial segments, bounded-error for
/// arcs); this step recovers the remaining accuracy. If the iteration fails to converge the
/// clipped estimate is kept and the result is marked degraded.
///
fn newton_polish(curve1: &Segment, curve2: &Segment, t1: f64, t2: f64, accuracy: f64, degraded: &mut bool) -> (f64, f64) {
    let mut best = (t1, t2);
    let mut best_distance = curve1.point_at_pos(t1).distance_to(&curve2.point_at_pos(t2));

    let (mut t1, mut t2) = (t1, t2);

    for _ in 0..12 {
        if best_distance <= accuracy * 0.01 {
            return best;
        }

        let delta = curve1.point_at_pos(t1) - curve2.point_at_pos(t2);
        let d1 = curve1.derivative_at_pos(t1);
        let d2 = curve2.derivative_at_pos(t2);

        // Solve [d1, -d2] * (dt1, dt2) = -delta
        let det = d1.x() * (-d2.y()) - (-d2.x()) * d1.y();
        if 1.0 + det == 1.0 {
            break;
        }

        let dt1 = (-delta.x() * (-d2.y()) - (-d2.x()) * -delta.y()) / det;
        let dt2 = (d1.x() * -delta.y() - -delta.x() * d1.y()) / det;

        t1 = (t1 + dt1).clamp(0.0, 1.0);
        t2 = (t2 + dt2).clamp(0.0, 1.0);

        let distance = curve1.point_at_pos(t1).distance_to(&curve2.point_at_pos(t2));
        if distance < best_distance {
            best_distance = distance;
            best = (t1, t2);
        } else {
            break;
        }
    }

    if best_distance > accuracy {
        log::warn!(
            "curve intersection did not converge (residual {:.3e} > accuracy {:.3e})",
            best_distance,
            accuracy
        );
        *degraded = true;
    }

    best
}

///
/// Sorts the crossings and merges near-duplicates
///
/// Pairs whose points on both curves are within `accuracy` are duplicates of the same crossing;
/// the representative kept is the one whose sample points lie closest together.
///
fn dedup_crossings(curve1: &Segment, curve2: &Segment, crossings: &mut Vec<(f64, f64)>, accuracy: f64) {
    crossings.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut deduped: Vec<(f64, f64)> = vec![];
    let mut distances: SmallVec<[f64; 8]> = SmallVec::new();

    'next_crossing: for &(t1, t2) in crossings.iter() {
        let p1 = curve1.point_at_pos(t1);
        let p2 = curve2.point_at_pos(t2);
        let distance = p1.distance_to(&p2);

        for (index, existing) in deduped.iter().enumerate() {
            let q1 = curve1.point_at_pos(existing.0);
            let q2 = curve2.point_at_pos(existing.1);

            if p1.is_near_to(&q1, accuracy) && p2.is_near_to(&q2, accuracy) {
                if distance < distances[index] {
                    deduped[index] = (t1, t2);
                    distances[index] = distance;
                }
                continue 'next_crossing;
            }
        }

        deduped.push((t1, t2));
        distances.push(distance);
    }

    deduped.sort_by(|a, b| a.partial_cmp(b).unwrap());
    *crossings = deduped;
}
