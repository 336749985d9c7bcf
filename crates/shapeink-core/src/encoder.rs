//! Path command encoding.
//!
//! Turns shape-local [`Path`]s into SVG path data in viewer space. Numbers
//! use Rust's shortest round-trip `f64` formatting, which never falls back to
//! exponent notation, so every token is a valid SVG number.

use crate::shapes::{Path, Segment};
use crate::transform::AffineTransform;
use kurbo::Point;
use std::fmt::Write;

/// Incrementally built SVG path data (`d` attribute contents).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData {
    buf: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    fn command(&mut self, letter: char, points: &[Point]) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push(letter);
        for p in points {
            // Writing into a String cannot fail.
            let _ = write!(self.buf, " {} {}", unsigned_zero(p.x), unsigned_zero(p.y));
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.command('M', &[p]);
    }

    pub fn line_to(&mut self, p: Point) {
        self.command('L', &[p]);
    }

    pub fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
        self.command('C', &[p1, p2, p3]);
    }

    pub fn close(&mut self) {
        self.command('Z', &[]);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Folds `-0.0` into `0.0` so flipped axes don't print `-0`.
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Append one path, mapped through `transform`, to `out`.
pub fn encode_path(path: &Path, transform: AffineTransform, out: &mut PathData) {
    for segment in &path.segments {
        match *segment {
            Segment::Start { x, y } => out.move_to(transform.apply_xy(x, y)),
            Segment::Line { x, y } => out.line_to(transform.apply_xy(x, y)),
            Segment::CubicCurve {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => out.curve_to(
                transform.apply_xy(x1, y1),
                transform.apply_xy(x2, y2),
                transform.apply_xy(x3, y3),
            ),
        }
    }
    if path.closed {
        out.close();
    }
}

/// Encode all `paths` of one shape into a single path data string.
pub fn encode(paths: &[Path], transform: AffineTransform) -> String {
    let mut out = PathData::new();
    for path in paths {
        encode_path(path, transform, &mut out);
    }
    out.into_string()
}
