/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::geo::*;

///
/// Splits a Bezier curve at `t`, returning the control points of the two halves
///
/// The halves trace exactly the same points as the original curve: the left half covers
/// `[0, t]` and the right half `[t, 1]` of the original parameter range.
///
pub fn subdivide<Point: Coordinate>(control_points: &[Point], t: f64) -> (SmallVec<[Point; 8]>, SmallVec<[Point; 8]>) {
    let n = control_points.len();
    debug_assert!(n >= 1);

    let mut work: SmallVec<[Point; 8]> = control_points.iter().copied().collect();
    let mut left: SmallVec<[Point; 8]> = SmallVec::with_capacity(n);
    let mut right: SmallVec<[Point; 8]> = SmallVec::with_capacity(n);

    // Each de Casteljau sweep contributes its first point to the left half and its last to the right
    let mut len = n;
    left.push(work[0]);
    right.push(work[len - 1]);

    while len > 1 {
        for i in 0..(len - 1) {
            work[i] = work[i] * (1.0 - t) + work[i + 1] * t;
        }
        len -= 1;

        left.push(work[0]);
        right.push(work[len - 1]);
    }

    right.reverse();
    (left, right)
}

///
/// The control points for the section of a Bezier curve between `t_min` and `t_max`,
/// reparameterised onto [0, 1]
///
pub fn section<Point: Coordinate>(control_points: &[Point], t_min: f64, t_max: f64) -> SmallVec<[Point; 8]> {
    if t_min == 0.0 && t_max == 1.0 {
        return control_points.iter().copied().collect();
    }

    let (_, from_min) = subdivide(control_points, t_min);

    if t_max >= 1.0 {
        return from_min;
    }

    // t_max within the remaining range
    let adjusted = if t_min < 1.0 { (t_max - t_min) / (1.0 - t_min) } else { 0.0 };
    let (result, _) = subdivide(&from_min, adjusted);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bezier::basis::*;

    #[test]
    fn halves_trace_the_original() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];
        let (left, right) = subdivide(&points, 0.3);

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            let on_left = de_casteljau(&left, t);
            let expected = de_casteljau(&points, t * 0.3);
            assert!(on_left.distance_to(&expected) < 1e-12);

            let on_right = de_casteljau(&right, t);
            let expected = de_casteljau(&points, 0.3 + t * 0.7);
            assert!(on_right.distance_to(&expected) < 1e-12);
        }
    }

    #[test]
    fn section_matches_reparameterisation() {
        let points = [Coord2(1.0, 1.0), Coord2(2.0, 5.0), Coord2(6.0, 5.0), Coord2(7.0, 1.0)];
        let mid = section(&points, 0.25, 0.75);

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            let on_section = de_casteljau(&mid, t);
            let expected = de_casteljau(&points, 0.25 + t * 0.5);
            assert!(on_section.distance_to(&expected) < 1e-12);
        }
    }
}
