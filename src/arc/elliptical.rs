/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::f64::consts::PI;

use smallvec::SmallVec;

use crate::error::*;
use crate::geo::*;
use crate::poly::*;
use crate::sbasis::*;

///
/// An arc of an ellipse, stored in center parameterization
///
/// The arc traces `center + rotate(rotation) * (rx*cos(angle), ry*sin(angle))` as the angle
/// moves from `start_angle` through `sweep_angle` (signed: positive sweeps anticlockwise in a
/// y-up coordinate system). The parameter t in [0, 1] maps linearly onto the angle range.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EllipticalArc {
    center: Coord2,
    radii: (f64, f64),
    rotation: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl Geo for EllipticalArc {
    type Point = Coord2;
}

impl EllipticalArc {
    ///
    /// Creates an arc from its center parameterization
    ///
    /// The radii must be finite and strictly positive and the angles finite, otherwise the arc
    /// is rejected as degenerate.
    ///
    pub fn new(center: Coord2, radii: (f64, f64), rotation: f64, start_angle: f64, sweep_angle: f64) -> Result<EllipticalArc, GeomError> {
        if !center.is_finite() {
            return Err(GeomError::NonFiniteCoordinate);
        }

        if !(radii.0.is_finite() && radii.1.is_finite() && radii.0 > 0.0 && radii.1 > 0.0)
            || !(rotation.is_finite() && start_angle.is_finite() && sweep_angle.is_finite())
        {
            return Err(GeomError::DegenerateArc);
        }

        Ok(EllipticalArc {
            center,
            radii,
            rotation,
            start_angle,
            sweep_angle,
        })
    }

    ///
    /// Creates an arc from SVG endpoint parameterization (the `A` path command)
    ///
    /// Follows the endpoint-to-center conversion from the SVG specification: out-of-range radii
    /// are scaled up until the arc exists, and the large-arc and sweep flags select among the
    /// four candidate arcs. Coincident endpoints have no arc and are rejected.
    ///
    pub fn from_endpoints(
        start: Coord2,
        radii: (f64, f64),
        rotation: f64,
        large_arc: bool,
        sweep_positive: bool,
        end: Coord2,
    ) -> Result<EllipticalArc, GeomError> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(GeomError::NonFiniteCoordinate);
        }
        if start == end {
            return Err(GeomError::DegenerateArc);
        }

        let mut rx = radii.0.abs();
        let mut ry = radii.1.abs();
        if rx == 0.0 || ry == 0.0 || !rx.is_finite() || !ry.is_finite() || !rotation.is_finite() {
            return Err(GeomError::DegenerateArc);
        }

        let (sin_phi, cos_phi) = rotation.sin_cos();

        // Step 1: transform to the ellipse-aligned frame
        let dx2 = (start.x() - end.x()) / 2.0;
        let dy2 = (start.y() - end.y()) / 2.0;
        let x1p = cos_phi * dx2 + sin_phi * dy2;
        let y1p = -sin_phi * dx2 + cos_phi * dy2;

        // Step 2: scale radii up if the endpoints are too far apart for them
        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // Step 3: center in the aligned frame
        let num = (rx * rx) * (ry * ry) - (rx * rx) * (y1p * y1p) - (ry * ry) * (x1p * x1p);
        let den = (rx * rx) * (y1p * y1p) + (ry * ry) * (x1p * x1p);
        let factor = (f64::max(num, 0.0) / den).sqrt();
        let sign = if large_arc != sweep_positive { 1.0 } else { -1.0 };

        let cxp = sign * factor * (rx * y1p / ry);
        let cyp = sign * factor * -(ry * x1p / rx);

        // Step 4: back to the original frame
        let cx = cos_phi * cxp - sin_phi * cyp + (start.x() + end.x()) / 2.0;
        let cy = sin_phi * cxp + cos_phi * cyp + (start.y() + end.y()) / 2.0;

        let start_angle = f64::atan2((y1p - cyp) / ry, (x1p - cxp) / rx);
        let end_angle = f64::atan2((-y1p - cyp) / ry, (-x1p - cxp) / rx);

        let mut sweep_angle = end_angle - start_angle;
        if sweep_positive && sweep_angle < 0.0 {
            sweep_angle += 2.0 * PI;
        } else if !sweep_positive && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * PI;
        }

        EllipticalArc::new(Coord2(cx, cy), (rx, ry), rotation, start_angle, sweep_angle)
    }

    #[inline]
    pub fn center(&self) -> Coord2 {
        self.center
    }

    #[inline]
    pub fn radii(&self) -> (f64, f64) {
        self.radii
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[inline]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    ///
    /// The angle on the ellipse corresponding to a position on the arc
    ///
    #[inline]
    pub fn angle_at_pos(&self, t: f64) -> f64 {
        self.start_angle + t * self.sweep_angle
    }

    ///
    /// The point on the ellipse at a particular angle
    ///
    pub fn point_at_angle(&self, angle: f64) -> Coord2 {
        let (sin_a, cos_a) = angle.sin_cos();
        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let x = self.radii.0 * cos_a;
        let y = self.radii.1 * sin_a;

        Coord2(
            self.center.x() + cos_phi * x - sin_phi * y,
            self.center.y() + sin_phi * x + cos_phi * y,
        )
    }

    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        self.point_at_angle(self.angle_at_pos(t))
    }

    #[inline]
    pub fn start_point(&self) -> Coord2 {
        self.point_at_pos(0.0)
    }

    #[inline]
    pub fn end_point(&self) -> Coord2 {
        self.point_at_pos(1.0)
    }

    ///
    /// The derivative of the arc with respect to t
    ///
    pub fn derivative_at_pos(&self, t: f64) -> Coord2 {
        let angle = self.angle_at_pos(t);
        let (sin_a, cos_a) = angle.sin_cos();
        let (sin_phi, cos_phi) = self.rotation.sin_cos();

        let dx = -self.radii.0 * sin_a * self.sweep_angle;
        let dy = self.radii.1 * cos_a * self.sweep_angle;

        Coord2(cos_phi * dx - sin_phi * dy, sin_phi * dx + cos_phi * dy)
    }

    ///
    /// The same arc traced in the opposite direction
    ///
    pub fn reverse(&self) -> EllipticalArc {
        EllipticalArc {
            center: self.center,
            radii: self.radii,
            rotation: self.rotation,
            start_angle: self.start_angle + self.sweep_angle,
            sweep_angle: -self.sweep_angle,
        }
    }

    ///
    /// The sub-arc between two positions, reparameterised onto [0, 1]
    ///
    pub fn section(&self, t_min: f64, t_max: f64) -> EllipticalArc {
        EllipticalArc {
            center: self.center,
            radii: self.radii,
            rotation: self.rotation,
            start_angle: self.angle_at_pos(t_min),
            sweep_angle: (t_max - t_min) * self.sweep_angle,
        }
    }

    ///
    /// Splits the arc at a position, returning the two sub-arcs
    ///
    pub fn subdivide(&self, t: f64) -> (EllipticalArc, EllipticalArc) {
        (self.section(0.0, t), self.section(t, 1.0))
    }

    ///
    /// Whether an angle (modulo full turns) lies within the swept range, and where
    ///
    /// Returns the t value for the angle if it is on the arc.
    ///
    pub fn pos_for_angle(&self, angle: f64) -> Option<f64> {
        if self.sweep_angle == 0.0 {
            return None;
        }

        let tau = 2.0 * PI;
        let mut offset = (angle - self.start_angle) % tau;

        if self.sweep_angle > 0.0 {
            if offset < 0.0 {
                offset += tau;
            }
            if offset <= self.sweep_angle {
                Some(offset / self.sweep_angle)
            } else {
                None
            }
        } else {
            if offset > 0.0 {
                offset -= tau;
            }
            if offset >= self.sweep_angle {
                Some(offset / self.sweep_angle)
            } else {
                None
            }
        }
    }

    ///
    /// The exact bounding box of the arc
    ///
    /// The extremes of each coordinate occur at the arc's endpoints or where the derivative of
    /// that coordinate vanishes, which happens at two angles per axis per turn.
    ///
    pub fn bounding_box<Bounds: BoundingBox<Point = Coord2>>(&self) -> Bounds {
        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let (rx, ry) = self.radii;

        let mut points: SmallVec<[Coord2; 6]> = SmallVec::new();
        points.push(self.start_point());
        points.push(self.end_point());

        // dx/dangle = 0 at atan2(-ry*sin_phi, rx*cos_phi); dy/dangle = 0 a quarter turn around
        let theta_x = f64::atan2(-ry * sin_phi, rx * cos_phi);
        let theta_y = f64::atan2(ry * cos_phi, rx * sin_phi);

        for theta in [theta_x, theta_x + PI, theta_y, theta_y + PI] {
            if self.pos_for_angle(theta).is_some() {
                points.push(self.point_at_angle(theta));
            }
        }

        Bounds::bounds_for_points(points)
    }

    ///
    /// Finds the positions on the arc where one coordinate has a particular value, closed form
    ///
    pub fn solve_t_for_axis(&self, axis: usize, value: f64) -> SmallVec<[f64; 4]> {
        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let (rx, ry) = self.radii;

        // coordinate(angle) = center + a*cos(angle) + b*sin(angle)
        let (a, b, center) = if axis == 0 {
            (rx * cos_phi, -ry * sin_phi, self.center.x())
        } else {
            (rx * sin_phi, ry * cos_phi, self.center.y())
        };

        let mut result = SmallVec::new();

        let r = (a * a + b * b).sqrt();
        if r == 0.0 {
            return result;
        }

        let c = (value - center) / r;
        if c.abs() > 1.0 {
            return result;
        }

        let alpha = f64::atan2(b, a);
        let delta = c.clamp(-1.0, 1.0).acos();

        for theta in [alpha + delta, alpha - delta] {
            if let Some(t) = self.pos_for_angle(theta) {
                if !result.iter().any(|&existing: &f64| (existing - t).abs() < 1e-12) {
                    result.push(t);
                }
            }
        }

        result.sort_by(|a, b| a.partial_cmp(b).unwrap());
        result
    }

    ///
    /// Approximates the arc as a sequence of cubic Bezier spans
    ///
    /// Each span covers at most a quarter turn, using the standard tangent-length construction;
    /// the error of a quarter-turn cubic approximation is below 2e-4 of the radius and shrinks
    /// as the fourth power of the sweep. Each span is returned with the t range of the arc that
    /// it covers.
    ///
    pub fn to_cubic_spans(&self) -> SmallVec<[([Coord2; 4], Space1); 4]> {
        let mut spans = SmallVec::new();

        let num_spans = usize::max(1, (self.sweep_angle.abs() / (PI / 2.0)).ceil() as usize);
        let span_sweep = self.sweep_angle / (num_spans as f64);

        // Tangent handle length for a cubic matching a circular arc of this sweep
        let k = 4.0 / 3.0 * (span_sweep / 4.0).tan();

        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let (rx, ry) = self.radii;
        let place = |angle: f64, handle_scale: f64| {
            let (sin_a, cos_a) = angle.sin_cos();
            let px = rx * (cos_a - handle_scale * sin_a);
            let py = ry * (sin_a + handle_scale * cos_a);
            Coord2(
                self.center.x() + cos_phi * px - sin_phi * py,
                self.center.y() + sin_phi * px + cos_phi * py,
            )
        };

        for span in 0..num_spans {
            let t0 = (span as f64) / (num_spans as f64);
            let t1 = ((span + 1) as f64) / (num_spans as f64);
            let a0 = self.angle_at_pos(t0);
            let a1 = self.angle_at_pos(t1);

            let points = [place(a0, 0.0), place(a0, k), place(a1, -k), place(a1, 0.0)];
            spans.push((points, Space1::new(t0, t1)));
        }

        spans
    }

    ///
    /// The coordinate functions of the arc as a pair of S-basis approximations
    ///
    /// Built from a truncated sine/cosine series expanded around the middle of the sweep; for
    /// sweeps up to a full turn the error stays below roughly 1e-8 of the radii. Callers that
    /// need exact positions refine against the analytic arc afterwards.
    ///
    pub fn to_sbasis(&self) -> Result<(SBasis, SBasis), GeomError> {
        let mid_angle = self.start_angle + self.sweep_angle * 0.5;
        let (cos_series, sin_series) = sin_cos_series(mid_angle, self.sweep_angle)?;

        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let (rx, ry) = self.radii;

        let x = &(&(&cos_series * (rx * cos_phi)) - &(&sin_series * (ry * sin_phi))) + &SBasis::constant(self.center.x());
        let y = &(&(&cos_series * (rx * sin_phi)) + &(&sin_series * (ry * cos_phi))) + &SBasis::constant(self.center.y());

        Ok((x, y))
    }
}

///
/// S-basis approximations of `cos(mid + sweep*(t - 1/2))` and `sin(...)` on [0, 1]
///
fn sin_cos_series(mid: f64, sweep: f64) -> Result<(SBasis, SBasis), GeomError> {
    // Taylor series in u = t - 1/2, where |sweep*u| <= |sweep|/2
    let mut cos_coeffs = vec![];
    let mut sin_coeffs = vec![];

    let (sin_mid, cos_mid) = mid.sin_cos();
    let derivative_cycle = [
        (cos_mid, sin_mid),
        (-sin_mid, cos_mid),
        (-cos_mid, -sin_mid),
        (sin_mid, -cos_mid),
    ];

    let mut scale = 1.0; // sweep^k / k!
    for k in 0..=20 {
        let (cos_deriv, sin_deriv) = derivative_cycle[k % 4];
        cos_coeffs.push(cos_deriv * scale);
        sin_coeffs.push(sin_deriv * scale);

        scale *= sweep / ((k + 1) as f64);
        if scale.abs() * 0.5_f64.powi(k as i32 + 1) < 1e-14 {
            break;
        }
    }

    let u = SBasis::from_linear(Linear::new(-0.5, 0.5));
    let cos_series = compose(&poly_to_sbasis(&Poly::from_coefficients(cos_coeffs))?, &u)?;
    let sin_series = compose(&poly_to_sbasis(&Poly::from_coefficients(sin_coeffs))?, &u)?;

    Ok((cos_series, sin_series))
}
