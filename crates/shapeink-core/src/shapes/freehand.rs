//! Freehand shape: one or more vector paths.

use crate::transform::AffineTransform;
use kurbo::{BezPath, PathEl};
use serde::{Deserialize, Serialize};

/// One drawing instruction of a [`Path`], in the shape's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Begin a subpath at `(x, y)`.
    Start { x: f64, y: f64 },
    /// Straight line to `(x, y)`.
    Line { x: f64, y: f64 },
    /// Cubic Bezier with control points `(x1, y1)`, `(x2, y2)` ending at `(x3, y3)`.
    CubicCurve {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
}

/// An ordered run of segments, optionally closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub closed: bool,
}

impl Path {
    /// Create an empty open path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a start segment.
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(Segment::Start { x, y });
        self
    }

    /// Append a line segment.
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(Segment::Line { x, y });
        self
    }

    /// Append a cubic curve segment.
    pub fn curve_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        self.segments.push(Segment::CubicCurve {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
        });
        self
    }

    /// Mark the path as closed.
    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split a kurbo path into one [`Path`] per subpath.
    ///
    /// Quadratic segments are raised to cubics.
    pub fn from_bez_path(bez: &BezPath) -> Vec<Path> {
        let mut paths = Vec::new();
        let mut current = Path::new();
        let mut last = kurbo::Point::ZERO;

        for el in bez.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if !current.is_empty() {
                        paths.push(std::mem::take(&mut current));
                    }
                    current = current.move_to(p.x, p.y);
                    last = p;
                }
                PathEl::LineTo(p) => {
                    current = current.line_to(p.x, p.y);
                    last = p;
                }
                PathEl::QuadTo(p1, p2) => {
                    let cubic = kurbo::QuadBez::new(last, p1, p2).raise();
                    current = current.curve_to(
                        cubic.p1.x, cubic.p1.y, cubic.p2.x, cubic.p2.y, cubic.p3.x, cubic.p3.y,
                    );
                    last = p2;
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    current = current.curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
                    last = p3;
                }
                PathEl::ClosePath => {
                    current.closed = true;
                    paths.push(std::mem::take(&mut current));
                }
            }
        }

        if !current.is_empty() {
            paths.push(current);
        }
        paths
    }
}

/// A shape made of vector paths sharing one local transform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreeHand {
    #[serde(default)]
    pub transform: AffineTransform,
    /// Paths in drawing order.
    #[serde(default)]
    pub paths: Vec<Path>,
}

impl FreeHand {
    /// Create a freehand shape with an identity transform.
    pub fn new(paths: Vec<Path>) -> Self {
        Self {
            transform: AffineTransform::IDENTITY,
            paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_path_builder() {
        let path = Path::new().move_to(0.0, 0.0).line_to(1.0, 0.0).close();
        assert_eq!(path.segments.len(), 2);
        assert!(path.closed);
        assert_eq!(path.segments[1], Segment::Line { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_from_bez_path_splits_subpaths() {
        let mut bez = BezPath::new();
        bez.move_to(Point::new(0.0, 0.0));
        bez.line_to(Point::new(10.0, 0.0));
        bez.close_path();
        bez.move_to(Point::new(5.0, 5.0));
        bez.curve_to(
            Point::new(6.0, 6.0),
            Point::new(7.0, 7.0),
            Point::new(8.0, 8.0),
        );

        let paths = Path::from_bez_path(&bez);
        assert_eq!(paths.len(), 2);
        assert!(paths[0].closed);
        assert!(!paths[1].closed);
        assert_eq!(paths[1].segments[0], Segment::Start { x: 5.0, y: 5.0 });
    }

    #[test]
    fn test_from_bez_path_raises_quads() {
        let mut bez = BezPath::new();
        bez.move_to(Point::new(0.0, 0.0));
        bez.quad_to(Point::new(3.0, 3.0), Point::new(6.0, 0.0));

        let paths = Path::from_bez_path(&bez);
        match paths[0].segments[1] {
            Segment::CubicCurve { x1, y1, x3, y3, .. } => {
                assert!((x1 - 2.0).abs() < 1e-12);
                assert!((y1 - 2.0).abs() < 1e-12);
                assert_eq!((x3, y3), (6.0, 0.0));
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }
}
