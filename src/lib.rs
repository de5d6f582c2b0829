/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_geom
//!
//! `flo_geom` is a 2D computational geometry kernel. It provides curve primitives (lines,
//! quadratic and cubic Beziers, higher-order Beziers and elliptical arcs), the numeric
//! machinery to operate on them (an S-basis polynomial form, Bernstein-basis and Sturm-chain
//! root finders), and the operations built on top: intersections between curves, paths made of
//! connected segments, winding numbers and signed areas, and the boolean operations (union,
//! intersection, difference, exclusive-or) on filled regions.
//!
//! A quick tour:
//!
//! * `geo` holds the foundational traits and types: coordinates, bounding boxes, 1-dimensional
//!   ranges and the sweep that prunes candidate pairs of bounding boxes.
//! * `sbasis` is the symmetric-power polynomial form that the analytic operations (areas,
//!   derivatives, exact composition) are computed in.
//! * `bezier` operates on control-point runs: evaluation, subdivision, bounding, root finding,
//!   curve/curve and curve/line intersection by fat-line clipping, offsetting and fitting.
//! * `path` assembles segments into contours and path vectors, and implements the winding,
//!   area, crossing and boolean operations along with an SVG-style text form for fixtures.
//!
//! ```
//! use flo_geom::geo::*;
//! use flo_geom::path::*;
//!
//! let a = PathVector::from_paths([PathBuilder::start(Coord2(0.0, 0.0))
//!     .line_to(Coord2(2.0, 0.0))
//!     .line_to(Coord2(2.0, 2.0))
//!     .line_to(Coord2(0.0, 2.0))
//!     .build_closed()?]);
//! let b = PathVector::from_paths([PathBuilder::start(Coord2(1.0, 1.0))
//!     .line_to(Coord2(3.0, 1.0))
//!     .line_to(Coord2(3.0, 3.0))
//!     .line_to(Coord2(1.0, 3.0))
//!     .build_closed()?]);
//!
//! let union = path_union(&a, &b, 0.01)?;
//! assert!((path_vector_area(&union)?.abs() - 7.0).abs() < 0.1);
//! # Ok::<(), flo_geom::GeomError>(())
//! ```
//!

#[macro_use]
mod test_assert;

pub mod arc;
pub mod bezier;
pub mod consts;
mod error;
pub mod fit;
pub mod geo;
pub mod line;
pub mod path;
pub mod poly;
pub mod sbasis;
pub mod segment;

pub use self::error::*;
