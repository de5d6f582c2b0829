/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Describing and intersecting lines
//!
//! The `Line` trait is implemented for any pair of points, so a plain tuple can be used
//! wherever a line is needed. `line_coefficients_2d()` produces the implicit form
//! `a*x + b*y + c = 0` used by the fat-line clipping algorithm.
//!

mod coefficients;
mod intersection;
mod line;

pub use self::coefficients::*;
pub use self::intersection::*;
pub use self::line::*;
