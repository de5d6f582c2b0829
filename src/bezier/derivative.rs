/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::geo::*;

///
/// The control points of the derivative of a Bezier curve
///
/// The derivative of a degree-n Bezier is a degree n-1 Bezier whose control points are the
/// scaled differences of adjacent control points.
///
pub fn derivative_points<Point: Coordinate>(control_points: &[Point]) -> SmallVec<[Point; 8]> {
    let n = control_points.len();
    debug_assert!(n >= 2);

    let scale = (n - 1) as f64;
    (0..(n - 1))
        .map(|i| (control_points[i + 1] - control_points[i]) * scale)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bezier::basis::*;

    #[test]
    fn derivative_matches_finite_differences() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];
        let deriv = derivative_points(&points);

        let h = 1e-6;
        for i in 1..10 {
            let t = (i as f64) / 10.0;
            let approx = (de_casteljau(&points, t + h) - de_casteljau(&points, t - h)) * (1.0 / (2.0 * h));
            let exact = de_casteljau(&deriv, t);

            assert!(approx.distance_to(&exact) < 1e-5);
        }
    }
}
