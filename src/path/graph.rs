/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use itertools::Itertools;

use crate::consts::*;
use crate::error::*;
use crate::geo::*;
use crate::segment::*;

use super::crossings::*;
use super::path::*;
use super::winding::*;

///
/// Which of the two operands a graph position refers to
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
    A,
    B,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

///
/// A crossing vertex of the intersection graph
///
#[derive(Clone, Debug)]
struct Vertex {
    a: PathPosition,
    b: PathPosition,

    /// Whether the arc leaving this vertex on the A side is inside operand B (and vice versa)
    a_departs_inside: bool,
    b_departs_inside: bool,

    a_visited: bool,
    b_visited: bool,
}

impl Vertex {
    fn position(&self, side: Side) -> PathPosition {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    fn departs_inside(&self, side: Side) -> bool {
        match side {
            Side::A => self.a_departs_inside,
            Side::B => self.b_departs_inside,
        }
    }
}

///
/// The intersection graph of two path vectors
///
/// Holds the crossings between the operands and, for the arc following each crossing along
/// either operand, whether that arc lies inside the other operand. Boolean operations extract
/// their results by walking the arcs this graph keeps. The graph is built per query and
/// discarded afterwards.
///
pub struct PathIntersectionGraph {
    a: PathVector,
    b: PathVector,
    accuracy: f64,

    vertices: Vec<Vertex>,

    /// For each path of each operand, the vertex indexes in path order
    a_order: Vec<Vec<usize>>,
    b_order: Vec<Vec<usize>>,
}

impl PathIntersectionGraph {
    ///
    /// Builds the intersection graph for two path vectors
    ///
    /// Both operands must consist of closed contours; an open contour has no inside and outside
    /// to resolve, and is reported via `GeomError::OpenContour` with the size of its gap.
    ///
    pub fn new(a: PathVector, b: PathVector, accuracy: f64) -> Result<PathIntersectionGraph, GeomError> {
        check_closed(&a)?;
        check_closed(&b)?;

        let crossings = path_crossings(&a, &b, accuracy);

        let vertices: Vec<Vertex> = crossings
            .into_iter()
            .filter(|crossing| crossing.sign != 0.0)
            .map(|crossing| Vertex {
                a: crossing.a,
                b: crossing.b,
                a_departs_inside: false,
                b_departs_inside: false,
                a_visited: false,
                b_visited: false,
            })
            .collect();

        let mut graph = PathIntersectionGraph {
            a_order: sorted_orders(&a, &vertices, Side::A),
            b_order: sorted_orders(&b, &vertices, Side::B),
            a,
            b,
            accuracy,
            vertices,
        };

        graph.label_arcs();
        graph.remove_non_switching_vertices();

        Ok(graph)
    }

    ///
    /// The region covered by either operand
    ///
    pub fn union(&self) -> Result<PathVector, GeomError> {
        self.extract(false, false)
    }

    ///
    /// The region covered by both operands
    ///
    pub fn intersection(&self) -> Result<PathVector, GeomError> {
        self.extract(true, true)
    }

    ///
    /// The region covered by the first operand but not the second
    ///
    pub fn a_minus_b(&self) -> Result<PathVector, GeomError> {
        // The complement walk needs the subtrahend traced the other way round
        let graph = PathIntersectionGraph::new(self.a.clone(), self.b.reverse(), self.accuracy)?;
        graph.extract(false, true)
    }

    ///
    /// The region covered by the second operand but not the first
    ///
    pub fn b_minus_a(&self) -> Result<PathVector, GeomError> {
        let graph = PathIntersectionGraph::new(self.a.reverse(), self.b.clone(), self.accuracy)?;
        graph.extract(true, false)
    }

    ///
    /// The region covered by exactly one of the operands
    ///
    pub fn xor(&self) -> Result<PathVector, GeomError> {
        let mut result = self.a_minus_b()?;
        for path in self.b_minus_a()?.paths() {
            result.push(path.clone());
        }
        Ok(result)
    }

    fn operand(&self, side: Side) -> &PathVector {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    fn order(&self, side: Side) -> &Vec<Vec<usize>> {
        match side {
            Side::A => &self.a_order,
            Side::B => &self.b_order,
        }
    }

    ///
    /// The vertex that follows a vertex along its path on one side
    ///
    fn next_vertex(&self, side: Side, vertex_idx: usize) -> usize {
        let path_idx = self.vertices[vertex_idx].position(side).path_idx;
        let order = &self.order(side)[path_idx];

        let here = order.iter().position(|idx| *idx == vertex_idx).unwrap();
        order[(here + 1) % order.len()]
    }

    ///
    /// Labels the arc leaving each vertex on each side as inside or outside the other operand
    ///
    /// The label comes from the winding number of the other operand at the arc's midpoint, the
    /// midpoint being halfway along the arc in parameter space.
    ///
    fn label_arcs(&mut self) {
        for side in [Side::A, Side::B] {
            for path_idx in 0..self.order(side).len() {
                let labels: Vec<(usize, bool)> = self.order(side)[path_idx]
                    .iter()
                    .copied()
                    .circular_tuple_windows()
                    .map(|(vertex_idx, next_idx)| {
                        let midpoint = self.arc_midpoint(side, vertex_idx, next_idx);
                        (vertex_idx, winding(self.operand(side.other()), &midpoint) != 0)
                    })
                    .collect();

                for (vertex_idx, inside) in labels {
                    match side {
                        Side::A => self.vertices[vertex_idx].a_departs_inside = inside,
                        Side::B => self.vertices[vertex_idx].b_departs_inside = inside,
                    }
                }
            }
        }
    }

    fn arc_midpoint(&self, side: Side, from_idx: usize, to_idx: usize) -> Coord2 {
        let from = self.vertices[from_idx].position(side);
        let to = self.vertices[to_idx].position(side);
        let path = &self.operand(side).paths()[from.path_idx];
        let count = path.segments().len() as f64;

        let from_scalar = from.time.as_scalar();
        let mut to_scalar = to.time.as_scalar();
        if to_scalar <= from_scalar {
            to_scalar += count;
        }

        let mid_scalar = (from_scalar + to_scalar) * 0.5 % count;
        let segment_idx = (mid_scalar.floor() as usize).min(path.segments().len() - 1);

        path.point_at_time(PathTime::new(segment_idx, mid_scalar - segment_idx as f64))
    }

    ///
    /// Removes crossings where the path does not actually move from one side of the other
    /// operand to the other (tangential touches)
    ///
    /// A true crossing switches the inside label on both operands; midpoint winding near a
    /// tangency can also disagree between the two sides, and removing the vertex and relabelling
    /// resolves the disagreement.
    ///
    fn remove_non_switching_vertices(&mut self) {
        loop {
            let mut to_remove = None;

            'search: for side in [Side::A, Side::B] {
                for order in self.order(side).iter() {
                    if order.len() < 2 {
                        // A single crossing on a closed contour is always tangential
                        if order.len() == 1 {
                            to_remove = Some(order[0]);
                            break 'search;
                        }
                        continue;
                    }

                    for position in 0..order.len() {
                        let previous = order[(position + order.len() - 1) % order.len()];
                        let vertex = order[position];

                        let arrives = self.vertices[previous].departs_inside(side);
                        let departs = self.vertices[vertex].departs_inside(side);
                        if arrives == departs {
                            to_remove = Some(vertex);
                            break 'search;
                        }
                    }
                }
            }

            let vertex_idx = match to_remove {
                Some(vertex_idx) => vertex_idx,
                None => return,
            };

            for order in self.a_order.iter_mut().chain(self.b_order.iter_mut()) {
                order.retain(|idx| *idx != vertex_idx);
            }

            // Merged arcs need their labels measured again
            self.label_arcs();
        }
    }

    ///
    /// Walks the kept arcs into result contours
    ///
    /// Keeps the arcs of A whose inside-B label equals `keep_a_inside` (and symmetrically for
    /// B), starting at any unvisited kept arc and switching operand at every crossing.
    ///
    fn extract(&self, keep_a_inside: bool, keep_b_inside: bool) -> Result<PathVector, GeomError> {
        let mut vertices = self.vertices.clone();
        let mut result = PathVector::new();

        let keep = |side: Side, vertex: &Vertex| match side {
            Side::A => vertex.a_departs_inside == keep_a_inside,
            Side::B => vertex.b_departs_inside == keep_b_inside,
        };
        let visited = |side: Side, vertex: &Vertex| match side {
            Side::A => vertex.a_visited,
            Side::B => vertex.b_visited,
        };

        // Contours that cross the other operand
        loop {
            let mut start = None;
            'find: for side in [Side::A, Side::B] {
                for order in self.order(side).iter() {
                    for &vertex_idx in order.iter() {
                        if keep(side, &vertices[vertex_idx]) && !visited(side, &vertices[vertex_idx]) {
                            start = Some((side, vertex_idx));
                            break 'find;
                        }
                    }
                }
            }

            let (start_side, start_idx) = match start {
                Some(start) => start,
                None => break,
            };

            let mut segments = vec![];
            let mut side = start_side;
            let mut vertex_idx = start_idx;

            loop {
                // Arriving at an already-departed arc means the labels were inconsistent; stop
                // here and let the closure check report the malformed contour
                if visited(side, &vertices[vertex_idx]) && !(side == start_side && vertex_idx == start_idx) {
                    break;
                }

                match side {
                    Side::A => vertices[vertex_idx].a_visited = true,
                    Side::B => vertices[vertex_idx].b_visited = true,
                }

                let next_idx = self.next_vertex(side, vertex_idx);
                let from = self.vertices[vertex_idx].position(side);
                let to = self.vertices[next_idx].position(side);

                let path = &self.operand(side).paths()[from.path_idx];
                segments.extend(path.segments_between(from.time, to.time));

                // Switch operand at the crossing; stay if the other side's arc is not kept
                vertex_idx = next_idx;
                let other = side.other();
                if keep(other, &vertices[vertex_idx]) {
                    side = other;
                } else if !keep(side, &vertices[vertex_idx]) {
                    break;
                }

                if side == start_side && vertex_idx == start_idx {
                    break;
                }
            }

            result.push(close_contour(segments, self.accuracy)?);
        }

        // Contours that never cross the other operand are kept or dropped whole
        for side in [Side::A, Side::B] {
            let keep_inside = match side {
                Side::A => keep_a_inside,
                Side::B => keep_b_inside,
            };

            for (path_idx, path) in self.operand(side).paths().iter().enumerate() {
                if !self.order(side)[path_idx].is_empty() || path.is_empty() {
                    continue;
                }

                let sample = path.point_at_time(PathTime::new(0, 0.5));
                let inside = winding(self.operand(side.other()), &sample) != 0;

                if inside == keep_inside {
                    result.push(path.clone());
                }
            }
        }

        Ok(result)
    }
}

fn check_closed(paths: &PathVector) -> Result<(), GeomError> {
    for path in paths.paths() {
        if path.is_empty() {
            continue;
        }

        if !path.is_closed() {
            let gap = path
                .end_point()
                .unwrap()
                .distance_to(&path.start_point().unwrap());
            return Err(GeomError::OpenContour { gap });
        }
    }

    Ok(())
}

fn close_contour(segments: Vec<Segment>, accuracy: f64) -> Result<Path, GeomError> {
    if segments.is_empty() {
        return Path::from_segments(segments, true);
    }

    let start = segments[0].start_point();
    let end = segments[segments.len() - 1].end_point();
    let gap = end.distance_to(&start);

    if gap > CLOSE_DISTANCE {
        return Err(GeomError::OpenContour { gap });
    }

    let mut segments = segments;
    if gap > accuracy.max(1e-12) {
        // Seal small numeric gaps so the contour closes exactly
        segments.push(Segment::line(end, start));
    }

    Path::from_segments(segments, true)
}

///
/// Sorts the crossing vertices of each path by their position along it
///
fn sorted_orders(paths: &PathVector, vertices: &[Vertex], side: Side) -> Vec<Vec<usize>> {
    let mut orders: Vec<Vec<usize>> = paths.paths().iter().map(|_| vec![]).collect();

    for (vertex_idx, vertex) in vertices.iter().enumerate() {
        let position = vertex.position(side);
        orders[position.path_idx].push(vertex_idx);
    }

    for order in orders.iter_mut() {
        order.sort_by(|idx1, idx2| {
            let s1 = vertices[*idx1].position(side).time.as_scalar();
            let s2 = vertices[*idx2].position(side).time.as_scalar();
            s1.partial_cmp(&s2).unwrap()
        });
    }

    orders
}
