/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Circles and elliptical arcs
//!
//! `EllipticalArc` is the exact trigonometric representation: evaluation, derivatives and axis
//! solving are closed-form, and conversion to Bezier or S-basis form is an approximation with a
//! bounded error. Arcs are validated when they are built; an arc with a zero or negative radius
//! is rejected rather than producing NaNs later.
//!

mod circle;
mod elliptical;

pub use self::circle::*;
pub use self::elliptical::*;
