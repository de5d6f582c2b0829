/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Paths and path arithmetic
//!
//! A `Path` is a connected run of curve segments; a `PathVector` is a set of paths interpreted
//! as a filled region under the nonzero winding rule. This module provides the measurement
//! operations (winding numbers, signed area, crossings between path vectors) and the boolean
//! operations built on them, along with a minimal SVG-style text form used for fixtures.
//!
//! The boolean operations work by building a `PathIntersectionGraph`: the crossings between the
//! two operands, the arcs between consecutive crossings labelled inside or outside the other
//! operand, and an extraction walk that stitches the kept arcs into result contours.
//!

mod area;
mod arithmetic;
mod crossings;
mod graph;
mod path;
mod svg;
mod winding;

pub use self::area::*;
pub use self::arithmetic::*;
pub use self::crossings::*;
pub use self::graph::*;
pub use self::path::*;
pub use self::svg::*;
pub use self::winding::*;
