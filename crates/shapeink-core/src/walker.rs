//! Shape tree traversal.
//!
//! The walker visits a tree in strict pre-order, composing every node's
//! local transform with the transform inherited from its ancestors (local
//! first, then inherited) and emitting one element per drawable node.

use crate::encoder;
use crate::error::Result;
use crate::shapes::Shape;
use crate::transform::AffineTransform;
use crate::writer::{ElementKind, SvgWriter};
use std::io::Write;

/// Counters collected during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Elements written.
    pub elements: usize,
    /// Nodes skipped because their variant produces no output.
    pub skipped: usize,
    /// Deepest nesting level reached, the root being level 0.
    pub max_depth: usize,
}

/// Visits a shape tree and streams its geometry into an [`SvgWriter`].
pub struct ShapeWalker<'w, 'c, W: Write> {
    writer: &'w mut SvgWriter<'c, W>,
    stats: WalkStats,
}

impl<'w, 'c, W: Write> ShapeWalker<'w, 'c, W> {
    pub fn new(writer: &'w mut SvgWriter<'c, W>) -> Self {
        Self {
            writer,
            stats: WalkStats::default(),
        }
    }

    /// Visit `shape` with the transform accumulated from its ancestors.
    pub fn visit(&mut self, shape: &Shape, inherited: AffineTransform) -> Result<()> {
        self.visit_at(shape, inherited, 0)
    }

    /// Counters gathered so far. `elements` is the writer's element count.
    pub fn stats(&self) -> WalkStats {
        WalkStats {
            elements: self.writer.element_count(),
            ..self.stats
        }
    }

    fn visit_at(&mut self, shape: &Shape, inherited: AffineTransform, depth: usize) -> Result<()> {
        self.stats.max_depth = self.stats.max_depth.max(depth);
        let effective = shape.transform().then(inherited);

        match shape {
            Shape::Container(container) => {
                for child in container.children() {
                    self.visit_at(child, effective, depth + 1)?;
                }
                Ok(())
            }
            Shape::FreeHand(freehand) => {
                self.emit(ElementKind::Outline, &encoder::encode(&freehand.paths, effective))
            }
            Shape::Image(image) => self.emit(
                ElementKind::ImageBox,
                &encoder::encode(&[image.outline()], effective),
            ),
            Shape::Line(line) => self.emit(
                ElementKind::Primitive,
                &encoder::encode(&[line.to_path()], effective),
            ),
            Shape::Rectangle(rect) => self.emit(
                ElementKind::Primitive,
                &encoder::encode(&[rect.to_path()], effective),
            ),
            Shape::Ellipse(ellipse) => self.emit(
                ElementKind::Primitive,
                &encoder::encode(&ellipse.to_paths(), effective),
            ),
            Shape::Bezier(bezier) => self.emit(
                ElementKind::Primitive,
                &encoder::encode(&[bezier.to_path()], effective),
            ),
            Shape::Text(_) | Shape::Clip(_) | Shape::Unsupported => {
                log::debug!("Skipping {} shape at depth {}", shape.kind_name(), depth);
                self.stats.skipped += 1;
                Ok(())
            }
        }
    }

    fn emit(&mut self, kind: ElementKind, path_data: &str) -> Result<()> {
        self.writer.write_element(kind, path_data)
    }
}
