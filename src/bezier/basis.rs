/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::geo::*;

///
/// Evaluates a Bezier curve from its control points by de Casteljau's algorithm
///
/// Works for any degree; the control point list must not be empty.
///
pub fn de_casteljau<Point: Coordinate>(control_points: &[Point], t: f64) -> Point {
    debug_assert!(!control_points.is_empty());

    let mut points: SmallVec<[Point; 8]> = control_points.iter().copied().collect();
    let mut len = points.len();

    while len > 1 {
        for i in 0..(len - 1) {
            points[i] = points[i] * (1.0 - t) + points[i + 1] * t;
        }
        len -= 1;
    }

    points[0]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cubic_evaluation_at_ends() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];

        assert!(de_casteljau(&points, 0.0).distance_to(&points[0]) < 1e-12);
        assert!(de_casteljau(&points, 1.0).distance_to(&points[3]) < 1e-12);
    }

    #[test]
    fn cubic_evaluation_matches_bernstein_sum() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];

        for i in 0..=10 {
            let t = (i as f64) / 10.0;
            let u = 1.0 - t;
            let expected = points[0] * (u * u * u)
                + points[1] * (3.0 * u * u * t)
                + points[2] * (3.0 * u * t * t)
                + points[3] * (t * t * t);

            assert!(de_casteljau(&points, t).distance_to(&expected) < 1e-12);
        }
    }

}
