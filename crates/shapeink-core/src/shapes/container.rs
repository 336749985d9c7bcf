//! Grouping node (shape collections and layers).

use super::Shape;
use crate::transform::AffineTransform;
use serde::{Deserialize, Serialize};

/// An ordered group of child shapes. Carries no geometry of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub transform: AffineTransform,
    /// Children in drawing order (back to front).
    #[serde(default)]
    pub children: Vec<Shape>,
}

impl Container {
    /// Create a container from a list of shapes.
    pub fn new(children: Vec<Shape>) -> Self {
        Self {
            transform: AffineTransform::IDENTITY,
            children,
        }
    }

    /// Get the children of this container.
    pub fn children(&self) -> &[Shape] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_keep_order() {
        let container = Container::new(vec![Shape::image(1.0, 1.0), Shape::Unsupported]);
        let kinds: Vec<_> = container.children().iter().map(Shape::kind_name).collect();
        assert_eq!(kinds, ["Image", "Unsupported"]);
    }
}
