//! Immutable 2D affine transform used to flatten nested shape coordinates.
//!
//! The builder methods (`translate`, `scale`, `rotate`) *prepend* their
//! operation: the new operation is applied to a point before everything the
//! transform already contains. Composition with [`AffineTransform::then`]
//! reads left to right in application order.

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// 2x3 affine transform in kurbo coefficient order `[a, b, c, d, e, f]`.
///
/// A point maps as `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 6]", into = "[f64; 6]")]
pub struct AffineTransform(Affine);

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Create a transform from raw coefficients.
    pub fn new(coeffs: [f64; 6]) -> Self {
        Self(Affine::new(coeffs))
    }

    /// Raw coefficients `[a, b, c, d, e, f]`.
    pub fn coeffs(&self) -> [f64; 6] {
        self.0.as_coeffs()
    }

    /// Prepend a translation.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self(self.0 * Affine::translate((dx, dy)))
    }

    /// Prepend a non-uniform scale.
    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self(self.0 * Affine::scale_non_uniform(sx, sy))
    }

    /// Prepend a rotation by `degrees`.
    ///
    /// Positive angles rotate clockwise in a y-up space, the way page
    /// rotation is expressed in paginated documents. Whole quarter turns use
    /// exact coefficients.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        let (sin, cos) = clockwise_sin_cos(degrees);
        Self(self.0 * Affine::new([cos, sin, -sin, cos, 0.0, 0.0]))
    }

    /// The transform equivalent to applying `self`, then `other`.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        Self(other.0 * self.0)
    }

    /// Alias of [`AffineTransform::then`].
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        self.then(other)
    }

    /// Map a point through the transform.
    pub fn apply(&self, point: Point) -> Point {
        self.0 * point
    }

    /// Map an `(x, y)` pair through the transform.
    pub fn apply_xy(&self, x: f64, y: f64) -> Point {
        self.apply(Point::new(x, y))
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for AffineTransform {
    fn from(affine: Affine) -> Self {
        Self(affine)
    }
}

impl From<[f64; 6]> for AffineTransform {
    fn from(coeffs: [f64; 6]) -> Self {
        Self::new(coeffs)
    }
}

impl From<AffineTransform> for [f64; 6] {
    fn from(transform: AffineTransform) -> Self {
        transform.coeffs()
    }
}

/// `(sin, cos)` of the math angle for a clockwise turn of `degrees`.
fn clockwise_sin_cos(degrees: f64) -> (f64, f64) {
    if degrees.is_finite() && degrees.rem_euclid(90.0) == 0.0 {
        match (degrees / 90.0).rem_euclid(4.0) as u8 {
            0 => (0.0, 1.0),
            1 => (-1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (1.0, 0.0),
        }
    } else {
        (-degrees).to_radians().sin_cos()
    }
}
