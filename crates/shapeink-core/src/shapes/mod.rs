//! Shape tree definitions.
//!
//! A page's content is a strict tree of [`Shape`] nodes. Every node that
//! carries geometry or children also carries a local transform relative to
//! its parent's coordinate space.

mod container;
mod freehand;
mod image;
mod primitive;

pub use container::Container;
pub use freehand::{FreeHand, Path, Segment};
pub use image::Image;
pub use primitive::{Bezier, Ellipse, Line, Rectangle, ELLIPSE_TOLERANCE};

use crate::transform::AffineTransform;
use serde::{Deserialize, Serialize};

/// Text run. Glyph layout is not reproduced, so text is never drawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub transform: AffineTransform,
    #[serde(default)]
    pub text: String,
}

/// Clipping region. Clip geometry does not produce output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clip {
    #[serde(default)]
    pub transform: AffineTransform,
    #[serde(default)]
    pub paths: Vec<Path>,
}

/// Any node of a page's shape tree.
///
/// Unknown `type` tags in a document dump deserialize to
/// [`Shape::Unsupported`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Container(Container),
    FreeHand(FreeHand),
    Image(Image),
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Bezier(Bezier),
    Text(Text),
    Clip(Clip),
    #[serde(other)]
    Unsupported,
}

impl Shape {
    /// A container with an identity transform.
    pub fn container(children: Vec<Shape>) -> Self {
        Shape::Container(Container::new(children))
    }

    /// A freehand shape with an identity transform.
    pub fn freehand(paths: Vec<Path>) -> Self {
        Shape::FreeHand(FreeHand::new(paths))
    }

    /// An image placement of `width` x `height` at the local origin.
    pub fn image(width: f64, height: f64) -> Self {
        Shape::Image(Image::new(width, height))
    }

    /// Local transform relative to the parent node.
    pub fn transform(&self) -> AffineTransform {
        match self {
            Shape::Container(s) => s.transform,
            Shape::FreeHand(s) => s.transform,
            Shape::Image(s) => s.transform,
            Shape::Line(s) => s.transform,
            Shape::Rectangle(s) => s.transform,
            Shape::Ellipse(s) => s.transform,
            Shape::Bezier(s) => s.transform,
            Shape::Text(s) => s.transform,
            Shape::Clip(s) => s.transform,
            Shape::Unsupported => AffineTransform::IDENTITY,
        }
    }

    /// Replace the local transform. Has no effect on [`Shape::Unsupported`].
    pub fn with_transform(mut self, transform: AffineTransform) -> Self {
        match &mut self {
            Shape::Container(s) => s.transform = transform,
            Shape::FreeHand(s) => s.transform = transform,
            Shape::Image(s) => s.transform = transform,
            Shape::Line(s) => s.transform = transform,
            Shape::Rectangle(s) => s.transform = transform,
            Shape::Ellipse(s) => s.transform = transform,
            Shape::Bezier(s) => s.transform = transform,
            Shape::Text(s) => s.transform = transform,
            Shape::Clip(s) => s.transform = transform,
            Shape::Unsupported => {}
        }
        self
    }

    /// Variant name, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Container(_) => "Container",
            Shape::FreeHand(_) => "FreeHand",
            Shape::Image(_) => "Image",
            Shape::Line(_) => "Line",
            Shape::Rectangle(_) => "Rectangle",
            Shape::Ellipse(_) => "Ellipse",
            Shape::Bezier(_) => "Bezier",
            Shape::Text(_) => "Text",
            Shape::Clip(_) => "Clip",
            Shape::Unsupported => "Unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_transform_replaces_local_transform() {
        let t = AffineTransform::IDENTITY.translate(3.0, 4.0);
        let shape = Shape::image(10.0, 10.0).with_transform(t);
        assert_eq!(shape.transform(), t);
        assert_eq!(Shape::Unsupported.with_transform(t).transform(), AffineTransform::IDENTITY);
    }

    #[test]
    fn test_json_uses_type_tag() {
        let shape = Shape::image(20.0, 10.0);
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "Image");
        assert_eq!(json["width"], 20.0);
    }

    #[test]
    fn test_unknown_type_deserializes_as_unsupported() {
        let json = r#"{"type": "Hologram", "transform": [1, 0, 0, 1, 0, 0], "depth": 3}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert!(matches!(shape, Shape::Unsupported));
    }

    #[test]
    fn test_missing_transform_defaults_to_identity() {
        let json = r#"{"type": "Container", "children": [{"type": "Text", "text": "hi"}]}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape.transform(), AffineTransform::IDENTITY);
        match shape {
            Shape::Container(c) => assert_eq!(c.children[0].kind_name(), "Text"),
            other => panic!("expected container, got {}", other.kind_name()),
        }
    }
}
