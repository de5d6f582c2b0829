/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Curve/curve intersection
//!
//! Pairwise intersections are found by fat-line Bezier clipping: each curve is repeatedly
//! clipped against a thickened chord of the other, shrinking the parameter domains until a
//! crossing is isolated, with subdivision taking over whenever clipping stops making progress.
//! The clipped estimates are then polished by Newton iteration against the original curves, so
//! the answers are as accurate as the segments themselves rather than as the clip tolerance.
//!
//! Tangential and near-degenerate configurations can exhaust the clipping budget; when that
//! happens the best available estimates are returned and the result is marked degraded instead
//! of failing the whole operation.
//!

mod curve_curve_clip;
mod curve_line;
mod fat_line;
mod self_intersection;

pub use self::curve_curve_clip::*;
pub use self::curve_line::*;
pub use self::self_intersection::*;

pub(crate) use self::fat_line::*;
