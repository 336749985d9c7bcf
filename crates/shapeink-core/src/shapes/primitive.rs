//! Geometric primitives: lines, rectangles, ellipses and single Bezier curves.

use super::Path;
use crate::transform::AffineTransform;
use kurbo::{Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Flattening tolerance for ellipse-to-cubic conversion, in local units.
pub const ELLIPSE_TOLERANCE: f64 = 0.1;

/// Straight line between two points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub transform: AffineTransform,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl Line {
    pub fn to_path(&self) -> Path {
        Path::new()
            .move_to(self.start_x, self.start_y)
            .line_to(self.end_x, self.end_y)
    }
}

/// Axis-aligned rectangle in local space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(default)]
    pub transform: AffineTransform,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn to_path(&self) -> Path {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        Path::new()
            .move_to(x0, y0)
            .line_to(x1, y0)
            .line_to(x1, y1)
            .line_to(x0, y1)
            .close()
    }
}

/// Axis-aligned ellipse in local space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ellipse {
    #[serde(default)]
    pub transform: AffineTransform,
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    /// Cubic approximation of the outline. Always closed.
    pub fn to_paths(&self) -> Vec<Path> {
        let ellipse = kurbo::Ellipse::new(
            Point::new(self.center_x, self.center_y),
            (self.radius_x, self.radius_y),
            0.0,
        );
        // kurbo ends the loop on the start point without a ClosePath.
        Path::from_bez_path(&ellipse.to_path(ELLIPSE_TOLERANCE))
            .into_iter()
            .map(Path::close)
            .collect()
    }
}

/// A single cubic Bezier curve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bezier {
    #[serde(default)]
    pub transform: AffineTransform,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub x3: f64,
    pub y3: f64,
}

impl Bezier {
    pub fn to_path(&self) -> Path {
        Path::new()
            .move_to(self.x0, self.y0)
            .curve_to(self.x1, self.y1, self.x2, self.y2, self.x3, self.y3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Segment;

    #[test]
    fn test_rectangle_path() {
        let rect = Rectangle {
            x: 10.0,
            y: 20.0,
            width: 5.0,
            height: 3.0,
            ..Default::default()
        };
        let path = rect.to_path();
        assert!(path.closed);
        assert_eq!(path.segments[0], Segment::Start { x: 10.0, y: 20.0 });
        assert_eq!(path.segments[2], Segment::Line { x: 15.0, y: 23.0 });
    }

    #[test]
    fn test_line_path_is_open() {
        let line = Line {
            start_x: 1.0,
            start_y: 2.0,
            end_x: 3.0,
            end_y: 4.0,
            ..Default::default()
        };
        let path = line.to_path();
        assert!(!path.closed);
        assert_eq!(path.segments.len(), 2);
    }

    #[test]
    fn test_ellipse_is_closed_cubic_loop() {
        let ellipse = Ellipse {
            center_x: 50.0,
            center_y: 50.0,
            radius_x: 20.0,
            radius_y: 10.0,
            ..Default::default()
        };
        let paths = ellipse.to_paths();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].closed);
        assert!(matches!(paths[0].segments[0], Segment::Start { .. }));
        for segment in &paths[0].segments[1..] {
            match *segment {
                Segment::CubicCurve { x3, y3, .. } => {
                    let nx = (x3 - 50.0) / 20.0;
                    let ny = (y3 - 50.0) / 10.0;
                    assert!((nx * nx + ny * ny - 1.0).abs() < 1e-6);
                }
                Segment::Line { .. } | Segment::Start { .. } => {
                    panic!("unexpected segment {segment:?}")
                }
            }
        }
    }

    #[test]
    fn test_ellipse_encodes_with_close_token() {
        let ellipse = Ellipse {
            center_x: 50.0,
            center_y: 50.0,
            radius_x: 20.0,
            radius_y: 10.0,
            ..Default::default()
        };
        let data = crate::encoder::encode(&ellipse.to_paths(), AffineTransform::IDENTITY);
        assert!(data.starts_with("M "));
        assert!(data.ends_with(" Z"));
        assert_eq!(data.matches('Z').count(), 1);
    }

    #[test]
    fn test_bezier_path() {
        let bezier = Bezier {
            x3: 9.0,
            y3: 9.0,
            ..Default::default()
        };
        let path = bezier.to_path();
        assert!(matches!(path.segments[1], Segment::CubicCurve { x3, .. } if x3 == 9.0));
    }
}
