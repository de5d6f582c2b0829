/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::f64::consts::PI;
use std::fmt::Write;

use crate::error::*;
use crate::geo::*;
use crate::segment::*;

use super::path::*;

///
/// Parses SVG-style path data into a path vector
///
/// Supports the `M`, `L`, `H`, `V`, `C`, `Q`, `A` and `Z` commands, in both absolute and
/// relative (lowercase) forms, with the usual implicit repetition of the last command. Each `M`
/// starts a new contour; `Z` closes the current one. Syntax errors report the byte offset of
/// the offending token.
///
pub fn parse_path_data(data: &str) -> Result<PathVector, GeomError> {
    let mut parser = PathDataParser::new(data);
    let mut paths = vec![];

    let mut segments: Vec<Segment> = vec![];
    let mut subpath_start = Coord2(0.0, 0.0);
    let mut current = Coord2(0.0, 0.0);
    let mut started = false;

    while let Some((offset, command)) = parser.next_command()? {
        if !started && !matches!(command, 'M' | 'm') {
            return Err(GeomError::SvgSyntax {
                offset,
                reason: "path data must begin with a move command",
            });
        }

        let relative = command.is_ascii_lowercase();
        let origin = |current: Coord2| if relative { current } else { Coord2(0.0, 0.0) };

        match command.to_ascii_uppercase() {
            'M' => {
                if !segments.is_empty() {
                    paths.push(Path::from_segments(segments.drain(..), false)?);
                }

                let point = parser.point()? + origin(current);
                subpath_start = point;
                current = point;
                started = true;

                // Further coordinate pairs after a move are implicit line commands
                while parser.more_arguments() {
                    let point = parser.point()? + origin(current);
                    segments.push(Segment::line(current, point));
                    current = point;
                }
            }

            'L' => loop {
                let point = parser.point()? + origin(current);
                segments.push(Segment::line(current, point));
                current = point;
                if !parser.more_arguments() {
                    break;
                }
            },

            'H' => loop {
                let x = parser.number()? + if relative { current.x() } else { 0.0 };
                let point = Coord2(x, current.y());
                segments.push(Segment::line(current, point));
                current = point;
                if !parser.more_arguments() {
                    break;
                }
            },

            'V' => loop {
                let y = parser.number()? + if relative { current.y() } else { 0.0 };
                let point = Coord2(current.x(), y);
                segments.push(Segment::line(current, point));
                current = point;
                if !parser.more_arguments() {
                    break;
                }
            },

            'C' => loop {
                let cp1 = parser.point()? + origin(current);
                let cp2 = parser.point()? + origin(current);
                let point = parser.point()? + origin(current);
                segments.push(Segment::Cubic(CubicBezier::new(current, cp1, cp2, point)));
                current = point;
                if !parser.more_arguments() {
                    break;
                }
            },

            'Q' => loop {
                let cp = parser.point()? + origin(current);
                let point = parser.point()? + origin(current);
                segments.push(Segment::Quadratic(QuadraticBezier::new(current, cp, point)));
                current = point;
                if !parser.more_arguments() {
                    break;
                }
            },

            'A' => loop {
                let rx = parser.number()?;
                let ry = parser.number()?;
                let rotation_degrees = parser.number()?;
                let large_arc = parser.flag()?;
                let sweep = parser.flag()?;
                let point = parser.point()? + origin(current);

                if point.is_near_to(&current, 1e-12) {
                    // Coincident endpoints define no arc at all; SVG says to skip the command
                    if !parser.more_arguments() {
                        break;
                    }
                    continue;
                }

                let arc = crate::arc::EllipticalArc::from_endpoints(
                    current,
                    (rx.abs(), ry.abs()),
                    rotation_degrees * PI / 180.0,
                    large_arc,
                    sweep,
                    point,
                )?;
                segments.push(Segment::Arc(arc));
                current = point;
                if !parser.more_arguments() {
                    break;
                }
            },

            'Z' => {
                if current.distance_to(&subpath_start) > 1e-12 {
                    segments.push(Segment::line(current, subpath_start));
                }
                paths.push(Path::from_segments(segments.drain(..), true)?);
                current = subpath_start;
            }

            _ => {
                return Err(GeomError::SvgSyntax {
                    offset,
                    reason: "unsupported path command",
                })
            }
        }
    }

    if !segments.is_empty() {
        paths.push(Path::from_segments(segments, false)?);
    }

    Ok(PathVector::from_paths(paths))
}

struct PathDataParser<'a> {
    data: &'a [u8],
    pos: usize,
    last_command: Option<char>,
}

impl<'a> PathDataParser<'a> {
    fn new(data: &'a str) -> PathDataParser<'a> {
        PathDataParser {
            data: data.as_bytes(),
            pos: 0,
            last_command: None,
        }
    }

    fn skip_separators(&mut self) {
        while self.pos < self.data.len() && matches!(self.data[self.pos], b' ' | b'\t' | b'\n' | b'\r' | b',') {
            self.pos += 1;
        }
    }

    ///
    /// The next command letter, or the repeated previous command when arguments follow directly
    ///
    fn next_command(&mut self) -> Result<Option<(usize, char)>, GeomError> {
        self.skip_separators();
        if self.pos >= self.data.len() {
            return Ok(None);
        }

        let offset = self.pos;
        let c = self.data[self.pos] as char;

        if c.is_ascii_alphabetic() {
            self.pos += 1;
            self.last_command = Some(c);
            return Ok(Some((offset, c)));
        }

        // A bare number repeats the previous command (an M repeats as L)
        match self.last_command {
            Some('M') => Ok(Some((offset, 'L'))),
            Some('m') => Ok(Some((offset, 'l'))),
            Some('Z') | Some('z') => Err(GeomError::SvgSyntax {
                offset,
                reason: "a close command takes no arguments",
            }),
            Some(previous) => Ok(Some((offset, previous))),
            None => Err(GeomError::SvgSyntax {
                offset,
                reason: "expected a path command",
            }),
        }
    }

    ///
    /// True when another argument group follows without an intervening command letter
    ///
    fn more_arguments(&mut self) -> bool {
        self.skip_separators();
        self.pos < self.data.len() && !(self.data[self.pos] as char).is_ascii_alphabetic()
    }

    fn number(&mut self) -> Result<f64, GeomError> {
        self.skip_separators();
        let start = self.pos;

        if self.pos < self.data.len() && matches!(self.data[self.pos], b'+' | b'-') {
            self.pos += 1;
        }
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos < self.data.len() && self.data[self.pos] == b'.' {
            self.pos += 1;
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }
        if self.pos < self.data.len() && matches!(self.data[self.pos], b'e' | b'E') {
            self.pos += 1;
            if self.pos < self.data.len() && matches!(self.data[self.pos], b'+' | b'-') {
                self.pos += 1;
            }
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }

        let text = std::str::from_utf8(&self.data[start..self.pos]).map_err(|_| GeomError::SvgSyntax {
            offset: start,
            reason: "expected a number",
        })?;

        text.parse::<f64>().map_err(|_| GeomError::SvgSyntax {
            offset: start,
            reason: "expected a number",
        })
    }

    fn point(&mut self) -> Result<Coord2, GeomError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Coord2(x, y))
    }

    ///
    /// An arc flag, which must be a single 0 or 1
    ///
    fn flag(&mut self) -> Result<bool, GeomError> {
        self.skip_separators();
        let offset = self.pos;

        match self.data.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            _ => Err(GeomError::SvgSyntax {
                offset,
                reason: "expected an arc flag of 0 or 1",
            }),
        }
    }
}

///
/// Writes path vectors back out as SVG-style path data
///
pub struct SvgWriter {
    precision: usize,
}

impl Default for SvgWriter {
    fn default() -> SvgWriter {
        SvgWriter { precision: 6 }
    }
}

impl SvgWriter {
    pub fn new() -> SvgWriter {
        SvgWriter::default()
    }

    ///
    /// The number of decimal places to write coordinates with
    ///
    pub fn with_precision(mut self, precision: usize) -> SvgWriter {
        self.precision = precision;
        self
    }

    ///
    /// Formats a path vector as path data
    ///
    /// Runs of collinear line segments collapse into a single `L`; curves of degree above cubic
    /// are written as a cubic approximation, one span per control point past the endpoints.
    ///
    pub fn write_path_data(&self, paths: &PathVector) -> String {
        let mut out = String::new();

        for path in paths.paths() {
            let start = match path.start_point() {
                Some(start) => start,
                None => continue,
            };

            self.write_command(&mut out, 'M', &[start]);

            let segments = merge_collinear_lines(path.segments(), path.is_closed());
            let last_idx = segments.len() - 1;

            for (idx, segment) in segments.iter().enumerate() {
                // The closing edge of a closed path is implied by Z
                if path.is_closed() && idx == last_idx {
                    if let Segment::Line(_) = segment {
                        break;
                    }
                }

                match segment {
                    Segment::Line(line) => self.write_command(&mut out, 'L', &[line.points[1]]),
                    Segment::Quadratic(quad) => self.write_command(&mut out, 'Q', &quad.points[1..]),
                    Segment::Cubic(cubic) => self.write_command(&mut out, 'C', &cubic.points[1..]),
                    Segment::Bezier(_) => {
                        for cubic in approximate_with_cubics(segment) {
                            self.write_command(&mut out, 'C', &cubic.points[1..]);
                        }
                    }
                    Segment::Arc(arc) => {
                        let (rx, ry) = arc.radii();
                        let large_arc = arc.sweep_angle().abs() > PI;
                        let sweep = arc.sweep_angle() > 0.0;

                        out.push_str(" A ");
                        self.write_number(&mut out, rx);
                        out.push(' ');
                        self.write_number(&mut out, ry);
                        out.push(' ');
                        self.write_number(&mut out, arc.rotation() * 180.0 / PI);
                        write!(out, " {} {} ", large_arc as u8, sweep as u8).ok();
                        self.write_point(&mut out, arc.end_point());
                    }
                }
            }

            if path.is_closed() {
                out.push_str(" Z");
            }
        }

        out.trim_start().to_string()
    }

    fn write_command(&self, out: &mut String, command: char, points: &[Coord2]) {
        write!(out, " {}", command).ok();
        for point in points {
            out.push(' ');
            self.write_point(out, *point);
        }
    }

    fn write_point(&self, out: &mut String, point: Coord2) {
        self.write_number(out, point.x());
        out.push(' ');
        self.write_number(out, point.y());
    }

    fn write_number(&self, out: &mut String, value: f64) {
        let formatted = format!("{:.*}", self.precision, value);
        let trimmed = if formatted.contains('.') {
            formatted.trim_end_matches('0').trim_end_matches('.')
        } else {
            &formatted
        };

        // Avoid writing a negative zero
        if trimmed == "-0" {
            out.push('0');
        } else {
            out.push_str(trimmed);
        }
    }
}

///
/// Collapses consecutive collinear line segments into single lines
///
fn merge_collinear_lines(segments: &[Segment], closed: bool) -> Vec<Segment> {
    let mut merged: Vec<Segment> = vec![];

    for segment in segments {
        if let (Some(Segment::Line(previous)), Segment::Line(line)) = (merged.last(), segment) {
            let d1 = previous.points[1] - previous.points[0];
            let d2 = line.points[1] - line.points[0];

            // Same direction only: a doubling-back line is geometry, not redundancy
            if d1.cross(&d2).abs() < 1e-12 && d1.dot(&d2) > 0.0 {
                let start = previous.points[0];
                let end = line.points[1];
                *merged.last_mut().unwrap() = Segment::line(start, end);
                continue;
            }
        }

        merged.push(segment.clone());
    }

    // A closed path can also merge its last line into its first
    if closed && merged.len() > 1 {
        if let (Segment::Line(last), Segment::Line(first)) = (&merged[merged.len() - 1], &merged[0]) {
            let d1 = last.points[1] - last.points[0];
            let d2 = first.points[1] - first.points[0];
            if d1.cross(&d2).abs() < 1e-12 && d1.dot(&d2) > 0.0 {
                let start = last.points[0];
                let end = first.points[1];
                merged[0] = Segment::line(start, end);
                merged.pop();
            }
        }
    }

    merged
}

///
/// Approximates a segment with cubic spans matched to its endpoints and tangents
///
fn approximate_with_cubics(segment: &Segment) -> Vec<CubicBezier> {
    let spans = match segment.control_points() {
        Some(points) => (points.len() - 2).max(1),
        None => 4,
    };

    let mut cubics = vec![];
    for span in 0..spans {
        let t0 = (span as f64) / (spans as f64);
        let t1 = ((span + 1) as f64) / (spans as f64);
        let scale = (t1 - t0) / 3.0;

        let p0 = segment.point_at_pos(t0);
        let p1 = segment.point_at_pos(t1);
        let c1 = p0 + segment.derivative_at_pos(t0) * scale;
        let c2 = p1 - segment.derivative_at_pos(t1) * scale;

        cubics.push(CubicBezier::new(p0, c1, c2, p1));
    }
    cubics
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_a_closed_triangle() {
        let paths = parse_path_data("M 0 0 L 4 0 L 2 3 Z").unwrap();

        assert!(paths.paths().len() == 1);
        assert!(paths.paths()[0].is_closed());
        assert!(paths.paths()[0].segments().len() == 3);
    }

    #[test]
    fn parses_relative_and_shorthand_commands() {
        let paths = parse_path_data("m 1 1 l 2 0 0 2 h -2 v -2 z").unwrap();
        let path = &paths.paths()[0];

        assert!(path.is_closed());
        assert!(path.start_point().unwrap().distance_to(&Coord2(1.0, 1.0)) < 1e-12);
        assert!(path.segments()[1].end_point().distance_to(&Coord2(3.0, 3.0)) < 1e-12);
    }

    #[test]
    fn parses_curves_and_arcs() {
        let paths = parse_path_data("M 0 0 C 0 1 1 1 1 0 Q 2 -1 3 0 A 1.5 1.5 0 0 1 6 0").unwrap();
        let path = &paths.paths()[0];

        assert!(!path.is_closed());
        assert!(matches!(path.segments()[0], Segment::Cubic(_)));
        assert!(matches!(path.segments()[1], Segment::Quadratic(_)));
        assert!(matches!(path.segments()[2], Segment::Arc(_)));
        assert!(path.end_point().unwrap().distance_to(&Coord2(6.0, 0.0)) < 1e-6);
    }

    #[test]
    fn reports_the_offset_of_a_syntax_error() {
        match parse_path_data("M 0 0 L 1 banana") {
            Err(GeomError::SvgSyntax { offset, .. }) => assert!(offset == 10, "offset {}", offset),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn rejects_data_without_a_move() {
        assert!(matches!(
            parse_path_data("L 1 1"),
            Err(GeomError::SvgSyntax { .. })
        ));
    }

    #[test]
    fn roundtrip_preserves_the_geometry() {
        let original = parse_path_data("M 0 0 C 0 2 4 2 4 0 L 2 -2 Z").unwrap();
        let written = SvgWriter::new().write_path_data(&original);
        let reparsed = parse_path_data(&written).unwrap();

        let path1 = &original.paths()[0];
        let path2 = &reparsed.paths()[0];
        assert!(path1.segments().len() == path2.segments().len(), "{}", written);

        for i in 0..=20 {
            let t = (i as f64) / 20.0;
            for seg in 0..path1.segments().len() {
                let p1 = path1.segments()[seg].point_at_pos(t);
                let p2 = path2.segments()[seg].point_at_pos(t);
                assert!(p1.distance_to(&p2) < 1e-5, "{:?} vs {:?}", p1, p2);
            }
        }
    }

    #[test]
    fn collinear_lines_merge_on_output() {
        let paths = parse_path_data("M 0 0 L 1 0 L 2 0 L 3 0").unwrap();
        let written = SvgWriter::new().write_path_data(&paths);

        assert!(written == "M 0 0 L 3 0", "{}", written);
    }

    #[test]
    fn precision_controls_the_output() {
        let paths = parse_path_data("M 0.123456789 0 L 1 1").unwrap();
        let written = SvgWriter::new().with_precision(3).write_path_data(&paths);

        assert!(written.starts_with("M 0.123 0"), "{}", written);
    }
}
