//! ShapeInk Core Library
//!
//! Flattens the nested shape tree of a document page into viewer-space SVG
//! path markup. Each node's local transform is composed with the transforms
//! of its ancestors and the page's orientation before geometry is written.

pub mod config;
pub mod convert;
pub mod document;
pub mod encoder;
pub mod error;
pub mod page;
pub mod shapes;
pub mod transform;
pub mod walker;
pub mod writer;

pub use config::{ConvertConfig, ElementStyle, OutputFormat, SerializableColor};
pub use convert::{convert_page, convert_page_to_file, render_page};
pub use document::Document;
pub use error::{ConvertError, Result};
pub use page::{Orientation, Page, PageModel, ViewerTransform};
pub use shapes::{Path, Segment, Shape};
pub use transform::AffineTransform;
pub use walker::{ShapeWalker, WalkStats};
pub use writer::{ElementKind, SvgWriter};
