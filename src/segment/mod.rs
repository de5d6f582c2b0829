/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Curve segments
//!
//! `Segment` is the curve type that paths are made of: a closed set of variants covering line
//! segments, quadratic and cubic Beziers, Beziers of arbitrary degree up to the crate's cap, and
//! elliptical arcs. Every operation that the path and intersection machinery needs is available
//! on the enum itself, so adding a variant means extending the matches here rather than teaching
//! every algorithm about a new type.
//!

mod bezier_segments;
mod segment;

pub use self::bezier_segments::*;
pub use self::segment::*;
