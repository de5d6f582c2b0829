/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use super::path::*;

///
/// The winding number of a path vector around a point
///
/// Casts a horizontal ray towards positive x and sums the signed crossings: +1 where the path
/// crosses the ray moving up, -1 moving down. A point is inside the filled region when this is
/// not zero (the nonzero rule). The result for a point exactly on the boundary is not
/// specified.
///
pub fn winding(paths: &PathVector, point: &Coord2) -> i32 {
    paths.paths().iter().map(|path| path_winding(path, point)).sum()
}

///
/// The winding number of a single path around a point
///
pub fn path_winding(path: &Path, point: &Coord2) -> i32 {
    let mut winding = 0;

    for segment in path.segments() {
        // Quick reject: the segment cannot cross the ray if its box is on the wrong side
        let bounds: Bounds<Coord2> = segment.bounding_box();
        if bounds.max().x() < point.x() || bounds.min().y() > point.y() || bounds.max().y() < point.y() {
            continue;
        }

        for t in segment.solve_t_for_y(point.y(), 1e-10) {
            // The crossing at a segment join belongs to the following segment
            if t >= 1.0 - 1e-9 {
                continue;
            }

            let crossing = segment.point_at_pos(t);
            if crossing.x() <= point.x() {
                continue;
            }

            let dy = segment.derivative_at_pos(t).y();
            if dy > 1e-12 {
                winding += 1;
            } else if dy < -1e-12 {
                winding -= 1;
            }
            // A vanishing derivative is a tangential touch, which does not change the winding
        }
    }

    winding
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_square() -> PathVector {
        let path = PathBuilder::start(Coord2(0.0, 0.0))
            .line_to(Coord2(1.0, 0.0))
            .line_to(Coord2(1.0, 1.0))
            .line_to(Coord2(0.0, 1.0))
            .build_closed()
            .unwrap();
        PathVector::from_paths([path])
    }

    #[test]
    fn inside_a_square() {
        let square = unit_square();
        assert!(winding(&square, &Coord2(0.5, 0.5)) != 0);
    }

    #[test]
    fn outside_a_square() {
        let square = unit_square();
        assert!(winding(&square, &Coord2(2.0, 0.5)) == 0);
        assert!(winding(&square, &Coord2(-1.0, 0.5)) == 0);
        assert!(winding(&square, &Coord2(0.5, 2.0)) == 0);
    }

    #[test]
    fn hole_cancels_the_winding() {
        let outer = PathBuilder::start(Coord2(0.0, 0.0))
            .line_to(Coord2(4.0, 0.0))
            .line_to(Coord2(4.0, 4.0))
            .line_to(Coord2(0.0, 4.0))
            .build_closed()
            .unwrap();

        // Inner square wound the opposite way
        let inner = PathBuilder::start(Coord2(1.0, 1.0))
            .line_to(Coord2(1.0, 3.0))
            .line_to(Coord2(3.0, 3.0))
            .line_to(Coord2(3.0, 1.0))
            .build_closed()
            .unwrap();

        let with_hole = PathVector::from_paths([outer, inner]);
        assert!(winding(&with_hole, &Coord2(2.0, 2.0)) == 0);
        assert!(winding(&with_hole, &Coord2(0.5, 2.0)) != 0);
    }

    #[test]
    fn winding_of_a_circle() {
        use crate::arc::Circle;

        let circle = Circle::new(Coord2(0.0, 0.0), 1.0).unwrap();
        let paths = PathVector::from_paths([circle.to_path().unwrap()]);

        assert!(winding(&paths, &Coord2(0.2, 0.3)) != 0);
        assert!(winding(&paths, &Coord2(1.5, 0.0)) == 0);
    }
}
