//! Image placement. Pixel content is never decoded; only the placement box
//! is kept.

use super::Path;
use crate::transform::AffineTransform;
use serde::{Deserialize, Serialize};

/// An image drawn into the box `(0, 0)`-`(width, height)` of its local space.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub transform: AffineTransform,
    pub width: f64,
    pub height: f64,
}

impl Image {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            transform: AffineTransform::IDENTITY,
            width,
            height,
        }
    }

    /// Closed outline of the placement box in local space.
    pub fn outline(&self) -> Path {
        Path::new()
            .move_to(0.0, 0.0)
            .line_to(self.width, 0.0)
            .line_to(self.width, self.height)
            .line_to(0.0, self.height)
            .close()
    }
}
