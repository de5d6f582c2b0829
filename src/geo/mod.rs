/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Traits and types for basic geometric definitions
//!
//! This provides some basic geometric definitions. The `Geo` trait can be implemented by any type that has
//! a particular type of coordinate - for example, implementations of curve types need to implement `Geo`
//! in order to describe what type they use for coordinates.
//!
//! `BoundingBox` provides a way to describe axis-aligned bounding boxes. It too is a trait, making it
//! possible to request bounding boxes in types other than the default `Bounds` type supplied by the
//! library. `Space1` is the 1-dimensional equivalent, used for parameter ranges.
//!
//! `sweep_bounds()` performs sweep-line pruning over collections of bounding boxes, and is how the
//! path intersection routines avoid testing every pair of curves against each other.
//!

mod bounding_box;
mod coord2;
mod coordinate;
mod geo;
mod space1;
mod sweep;

pub use self::bounding_box::*;
pub use self::coord2::*;
pub use self::coordinate::*;
pub use self::geo::*;
pub use self::space1::*;
pub use self::sweep::*;
