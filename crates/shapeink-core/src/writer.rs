//! Streaming SVG document writer.
//!
//! Output is written straight to the sink in call order: `start`, any
//! number of `write_element`, then `end`.

use crate::config::{ConvertConfig, ElementStyle, OutputFormat};
use crate::error::{ConvertError, Result};
use std::io::Write;

/// Visual role of an emitted path element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Freehand path outline.
    Outline,
    /// Placement box of an image.
    ImageBox,
    /// Line, rectangle, ellipse or Bezier primitive.
    Primitive,
}

impl ElementKind {
    /// Value of the element's `class` attribute.
    pub fn class_name(self) -> &'static str {
        match self {
            ElementKind::Outline => "outline",
            ElementKind::ImageBox => "image-box",
            ElementKind::Primitive => "primitive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Open,
    Closed,
}

/// Writes one SVG (or HTML-wrapped SVG) document to `W`.
pub struct SvgWriter<'a, W: Write> {
    out: W,
    config: &'a ConvertConfig,
    state: State,
    elements: usize,
}

impl<'a, W: Write> SvgWriter<'a, W> {
    pub fn new(out: W, config: &'a ConvertConfig) -> Self {
        Self {
            out,
            config,
            state: State::Idle,
            elements: 0,
        }
    }

    /// Emit the preamble for a `width` x `height` viewer canvas.
    pub fn start(&mut self, width: f64, height: f64) -> Result<()> {
        if self.state != State::Idle {
            return Err(ConvertError::Writer("document already started".to_string()));
        }
        match self.config.format {
            OutputFormat::Html => write!(
                self.out,
                "<!DOCTYPE html>\n<html>\n<body>\n<svg width=\"{width}\" height=\"{height}\">\n"
            )?,
            OutputFormat::Svg => write!(
                self.out,
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                 <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
                 viewBox=\"0 0 {width} {height}\">\n"
            )?,
        }
        self.state = State::Open;
        Ok(())
    }

    /// Emit one stroked, unfilled path element.
    pub fn write_element(&mut self, kind: ElementKind, path_data: &str) -> Result<()> {
        if self.state != State::Open {
            return Err(ConvertError::Writer(
                "element written outside an open document".to_string(),
            ));
        }
        let style = self.style_for(kind);
        write!(
            self.out,
            "<path class=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            kind.class_name(),
            style.stroke_color.to_hex(),
            style.stroke_width
        )?;
        if style.stroke_color.a < 255 {
            write!(self.out, " stroke-opacity=\"{}\"", style.stroke_color.opacity())?;
        }
        writeln!(self.out, " fill=\"none\" d=\"{path_data}\"/>")?;
        self.elements += 1;
        Ok(())
    }

    /// Emit the postamble.
    pub fn end(&mut self) -> Result<()> {
        if self.state != State::Open {
            return Err(ConvertError::Writer("document is not open".to_string()));
        }
        match self.config.format {
            OutputFormat::Html => self.out.write_all(b"</svg>\n</body>\n</html>\n")?,
            OutputFormat::Svg => self.out.write_all(b"</svg>\n")?,
        }
        self.state = State::Closed;
        Ok(())
    }

    /// Number of elements written so far.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Flush and hand back the sink. The document must have been ended.
    pub fn finish(mut self) -> Result<W> {
        if self.state != State::Closed {
            return Err(ConvertError::Writer("document was not ended".to_string()));
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn style_for(&self, kind: ElementKind) -> ElementStyle {
        match kind {
            ElementKind::Outline => self.config.outline,
            ElementKind::ImageBox => self.config.image_box,
            ElementKind::Primitive => self.config.primitive,
        }
    }
}
