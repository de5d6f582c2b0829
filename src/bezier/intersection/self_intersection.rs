/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::consts::*;
use crate::geo::*;
use crate::segment::*;

use super::curve_curve_clip::*;

///
/// Finds the points where a curve segment crosses itself
///
/// Returns (t1, t2) pairs with t1 < t2, sorted by t1. The curve is split into axis-monotonic
/// pieces, which cannot individually self-intersect, and the pieces are intersected pairwise;
/// hits at the shared endpoints of neighbouring pieces are discarded.
///
/// Lines, quadratics and arcs of up to a full turn cannot cross themselves; only cubic and
/// higher-degree segments can.
///
pub fn curve_self_intersections(curve: &Segment, accuracy: f64) -> Vec<(f64, f64)> {
    match curve {
        // An arc beyond a full turn retraces itself, which is an overlap rather than a crossing
        Segment::Line(_) | Segment::Quadratic(_) | Segment::Arc(_) => return vec![],
        _ => {}
    }

    let splits = monotonic_splits(curve, accuracy);

    let mut pieces: SmallVec<[(Segment, Space1); 8]> = SmallVec::new();
    for window in splits.windows(2) {
        let range = Space1::new(window[0], window[1]);
        if range.extent() > 0.0 {
            pieces.push((curve.section(range.min(), range.max()), range));
        }
    }

    let mut found = vec![];

    for i in 0..pieces.len() {
        for j in (i + 1)..pieces.len() {
            let (piece1, range1) = &pieces[i];
            let (piece2, range2) = &pieces[j];

            let crossings = curve_intersects_curve(piece1, piece2, accuracy);
            for (local1, local2) in crossings.crossings {
                let t1 = range1.point_at_pos(local1);
                let t2 = range2.point_at_pos(local2);

                // Neighbouring pieces always meet where they were split
                if (t2 - t1).abs() <= SMALL_T_DISTANCE * 10.0 {
                    continue;
                }

                let (t1, t2) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
                if !found
                    .iter()
                    .any(|(u1, u2): &(f64, f64)| (u1 - t1).abs() < 1e-6 && (u2 - t2).abs() < 1e-6)
                {
                    found.push((t1, t2));
                }
            }
        }
    }

    found.sort_by(|a, b| a.partial_cmp(b).unwrap());
    found
}

///
/// The sorted parameter values that cut a curve into axis-monotonic pieces
///
fn monotonic_splits(curve: &Segment, accuracy: f64) -> SmallVec<[f64; 8]> {
    let control_points = match curve.control_points() {
        Some(points) => points,
        None => return SmallVec::from_slice(&[0.0, 1.0]),
    };

    let deriv = crate::bezier::derivative_points(control_points);

    let mut splits: SmallVec<[f64; 8]> = SmallVec::new();
    splits.push(0.0);

    for axis in 0..2 {
        let weights: SmallVec<[f64; 8]> = deriv.iter().map(|p| p.get(axis)).collect();
        if weights.iter().all(|&w| w == 0.0) {
            continue;
        }

        for t in crate::bezier::roots::find_bernstein_roots(&weights, accuracy.min(1e-6)) {
            if t > 1e-9 && t < 1.0 - 1e-9 {
                splits.push(t);
            }
        }
    }

    splits.push(1.0);
    splits.sort_by(|a, b| a.partial_cmp(b).unwrap());
    splits.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    splits
}
