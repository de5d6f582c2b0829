/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::SmallVec;

use crate::geo::*;

use super::roots::*;

///
/// Finds the positions on a Bezier curve where one coordinate axis has a particular value
///
/// Returns the t values sorted ascending. A curve that lies entirely on the requested value
/// along that axis (a vertical line asked for its x, say) produces a single result at t = 0.5
/// rather than the whole range.
///
pub fn solve_t_for_axis<Point: Coordinate>(control_points: &[Point], axis: usize, value: f64, accuracy: f64) -> Vec<f64> {
    let weights: SmallVec<[f64; 8]> = control_points.iter().map(|p| p.get(axis) - value).collect();

    if weights.iter().all(|&w| w == 0.0) {
        return vec![0.5];
    }

    let mut roots = find_bernstein_roots(&weights, accuracy);
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
    roots.dedup_by(|a, b| (*a - *b).abs() <= accuracy);
    roots
}

///
/// Finds the positions on a curve with the specified x coordinate
///
pub fn solve_t_for_x<Point>(control_points: &[Point], x: f64, accuracy: f64) -> Vec<f64>
where
    Point: Coordinate + Coordinate2D,
{
    solve_t_for_axis(control_points, 0, x, accuracy)
}

///
/// Finds the positions on a curve with the specified y coordinate
///
pub fn solve_t_for_y<Point>(control_points: &[Point], y: f64, accuracy: f64) -> Vec<f64>
where
    Point: Coordinate + Coordinate2D,
{
    solve_t_for_axis(control_points, 1, y, accuracy)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bezier::basis::*;

    #[test]
    fn solves_for_x_on_a_cubic() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];

        let solutions = solve_t_for_x(&points, 2.0, 1e-9);
        assert!(solutions.len() == 1);

        let point = de_casteljau(&points, solutions[0]);
        assert!((point.x() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn finds_both_crossings_of_an_arch() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];

        let solutions = solve_t_for_y(&points, 1.0, 1e-9);
        assert!(solutions.len() == 2);

        for t in solutions {
            let point = de_casteljau(&points, t);
            assert!((point.y() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn no_solutions_outside_the_curve() {
        let points = [Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 2.0), Coord2(4.0, 0.0)];
        assert!(solve_t_for_y(&points, 5.0, 1e-9).is_empty());
    }
}
