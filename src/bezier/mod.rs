/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Bezier curve algorithms
//!
//! Routines for manipulating curves in Bernstein-Bezier form: evaluation and subdivision by
//! de Casteljau's algorithm, derivatives, bounding boxes, axis solving, and the two root finders
//! (`roots`) that the intersection routines are built from.
//!
//! The `intersection` module finds crossings between whole curve segments by fat-line Bezier
//! clipping, and `self_intersection` finds the points where a single curve crosses itself.
//! `fit` and `offset` provide least-squares curve fitting and approximate offset curves.
//!

mod basis;
mod bounds;
mod derivative;
mod fit;
mod normal;
mod offset;
mod solve;
mod subdivide;
mod tangent;

pub mod intersection;
pub mod roots;

pub use self::basis::*;
pub use self::bounds::*;
pub use self::derivative::*;
pub use self::fit::*;
pub use self::normal::*;
pub use self::offset::*;
pub use self::solve::*;
pub use self::subdivide::*;
pub use self::tangent::*;

pub use self::intersection::{curve_intersects_curve, curve_intersects_line, curve_self_intersections, CurveCrossings};
pub use self::roots::{find_roots, RootStrategy};
