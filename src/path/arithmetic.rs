/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;

use super::graph::*;
use super::path::*;

///
/// The region covered by either of two path vectors
///
/// Both operands must be made of closed contours. An empty operand is the identity: the union
/// with nothing is the other operand unchanged.
///
pub fn path_union(a: &PathVector, b: &PathVector, accuracy: f64) -> Result<PathVector, GeomError> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    PathIntersectionGraph::new(a.clone(), b.clone(), accuracy)?.union()
}

///
/// The region covered by both of two path vectors
///
/// The intersection with an empty operand is empty.
///
pub fn path_intersect(a: &PathVector, b: &PathVector, accuracy: f64) -> Result<PathVector, GeomError> {
    if a.is_empty() || b.is_empty() {
        return Ok(PathVector::new());
    }

    PathIntersectionGraph::new(a.clone(), b.clone(), accuracy)?.intersection()
}

///
/// The region covered by the first path vector but not the second
///
/// Subtracting nothing changes nothing; subtracting from nothing leaves nothing.
///
pub fn path_sub(a: &PathVector, b: &PathVector, accuracy: f64) -> Result<PathVector, GeomError> {
    if a.is_empty() {
        return Ok(PathVector::new());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    PathIntersectionGraph::new(a.clone(), b.clone(), accuracy)?.a_minus_b()
}

///
/// The region covered by exactly one of two path vectors
///
pub fn path_xor(a: &PathVector, b: &PathVector, accuracy: f64) -> Result<PathVector, GeomError> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    PathIntersectionGraph::new(a.clone(), b.clone(), accuracy)?.xor()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo::*;

    fn square(min: f64, max: f64) -> PathVector {
        let path = PathBuilder::start(Coord2(min, min))
            .line_to(Coord2(max, min))
            .line_to(Coord2(max, max))
            .line_to(Coord2(min, max))
            .build_closed()
            .unwrap();
        PathVector::from_paths([path])
    }

    #[test]
    fn empty_operands() {
        let a = square(0.0, 1.0);
        let empty = PathVector::new();

        assert!(path_union(&a, &empty, 0.001).unwrap() == a);
        assert!(path_union(&empty, &a, 0.001).unwrap() == a);
        assert!(path_intersect(&a, &empty, 0.001).unwrap().is_empty());
        assert!(path_sub(&a, &empty, 0.001).unwrap() == a);
        assert!(path_sub(&empty, &a, 0.001).unwrap().is_empty());
        assert!(path_xor(&a, &empty, 0.001).unwrap() == a);
    }

    #[test]
    fn union_area_of_overlapping_squares() {
        use crate::path::path_vector_area;

        let a = square(0.0, 2.0);
        let b = square(1.0, 3.0);

        let union = path_union(&a, &b, 0.001).unwrap();
        assert!((path_vector_area(&union).unwrap().abs() - 7.0).abs() < 0.01);
    }
}
