//! Page descriptors and the document-to-viewer transform.

use crate::shapes::Shape;
use crate::transform::AffineTransform;
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Display rotation of a page, in clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Orientation {
    /// Clockwise rotation in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            Orientation::Rotate0 => 0.0,
            Orientation::Rotate90 => 90.0,
            Orientation::Rotate180 => 180.0,
            Orientation::Rotate270 => 270.0,
        }
    }

    /// Whether the page's width and height swap on screen.
    pub fn is_sideways(self) -> bool {
        matches!(self, Orientation::Rotate90 | Orientation::Rotate270)
    }
}

/// Read-only view of one page as materialized by a document model provider.
pub trait PageModel {
    /// Nominal page width in document units, before rotation.
    fn width(&self) -> f64;

    /// Nominal page height in document units, before rotation.
    fn height(&self) -> f64;

    /// Display rotation.
    fn orientation(&self) -> Orientation;

    /// Media box in document space (origin bottom-left, y up).
    fn media_box(&self) -> Rect;

    /// Root of this page's shape tree.
    fn root_shape(&self) -> &Shape;
}

/// A page of a document dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Nominal width.
    pub width: f64,
    /// Nominal height.
    pub height: f64,
    #[serde(default)]
    pub orientation: Orientation,
    /// Media box; defaults to `(0, 0, width, height)` when absent.
    #[serde(default)]
    pub media_box: Option<Rect>,
    /// Root shape node.
    pub shapes: Shape,
}

impl Page {
    /// Create an unrotated page whose media box matches its nominal size.
    pub fn new(width: f64, height: f64, shapes: Shape) -> Self {
        Self {
            width,
            height,
            orientation: Orientation::Rotate0,
            media_box: None,
            shapes,
        }
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

impl PageModel for Page {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn media_box(&self) -> Rect {
        self.media_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, self.width, self.height))
    }

    fn root_shape(&self) -> &Shape {
        &self.shapes
    }
}

/// Root transform of a page together with the canvas it targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerTransform {
    /// Maps document space to viewer space (origin top-left, y down).
    pub transform: AffineTransform,
    /// Canvas size in viewer space, after the rotation swap.
    pub canvas: Size,
}

impl ViewerTransform {
    /// Resolve the viewer transform for a page.
    pub fn for_page<P: PageModel + ?Sized>(page: &P) -> Self {
        let media_box = page.media_box();
        Self::resolve(page.orientation(), media_box.width(), media_box.height())
    }

    /// Resolve the viewer transform for a media box of `width` x `height`.
    ///
    /// The y-flip uses the viewer-space height so the rotated page lands on
    /// the canvas. Rotation is clockwise, so the sideways rows translate by
    /// `(-W, 0)` for 90 and `(0, -H)` for 270: document (0, 0) lands at the
    /// viewer's top-left on a 90 degree page and bottom-right on a 270 degree
    /// page. The cropbox offset is not applied.
    pub fn resolve(orientation: Orientation, width: f64, height: f64) -> Self {
        let canvas = if orientation.is_sideways() {
            Size::new(height, width)
        } else {
            Size::new(width, height)
        };

        let (dx, dy) = match orientation {
            Orientation::Rotate0 => (0.0, 0.0),
            Orientation::Rotate90 => (-width, 0.0),
            Orientation::Rotate180 => (-width, -height),
            Orientation::Rotate270 => (0.0, -height),
        };

        let transform = AffineTransform::IDENTITY
            .translate(0.0, canvas.height)
            .scale(1.0, -1.0)
            .rotate(orientation.degrees())
            .translate(dx, dy);

        Self { transform, canvas }
    }
}
