//! Page conversion entry points.

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::page::{PageModel, ViewerTransform};
use crate::walker::{ShapeWalker, WalkStats};
use crate::writer::SvgWriter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Convert one page into `sink`, returning the flushed sink and traversal
/// counters.
pub fn convert_page<P, W>(page: &P, sink: W, config: &ConvertConfig) -> Result<(W, WalkStats)>
where
    P: PageModel + ?Sized,
    W: Write,
{
    let viewer = ViewerTransform::for_page(page);
    let mut writer = SvgWriter::new(sink, config);
    writer.start(viewer.canvas.width, viewer.canvas.height)?;

    let stats = {
        let mut walker = ShapeWalker::new(&mut writer);
        walker.visit(page.root_shape(), viewer.transform)?;
        walker.stats()
    };

    writer.end()?;
    let sink = writer.finish()?;
    log::debug!(
        "Converted page {}x{}: {} elements, {} skipped, depth {}",
        viewer.canvas.width,
        viewer.canvas.height,
        stats.elements,
        stats.skipped,
        stats.max_depth
    );
    Ok((sink, stats))
}

/// Convert one page into an in-memory document string.
pub fn render_page<P>(page: &P, config: &ConvertConfig) -> Result<String>
where
    P: PageModel + ?Sized,
{
    let (bytes, _) = convert_page(page, Vec::new(), config)?;
    // The writer only emits ASCII markup and formatted numbers.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Convert one page into a newly created file at `path`.
///
/// On failure the partially written file is removed.
pub fn convert_page_to_file<P>(page: &P, path: &Path, config: &ConvertConfig) -> Result<WalkStats>
where
    P: PageModel + ?Sized,
{
    write_output_file(path, |sink| {
        let (_, stats) = convert_page(page, sink, config)?;
        Ok(stats)
    })
}

fn write_output_file<T>(path: &Path, write: impl FnOnce(BufWriter<File>) -> Result<T>) -> Result<T> {
    let file = File::create(path)?;
    write(BufWriter::new(file)).inspect_err(|err| {
        log::warn!("Discarding {} after error: {}", path.display(), err);
        if let Err(remove_err) = fs::remove_file(path) {
            log::warn!("Could not remove {}: {}", path.display(), remove_err);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::page::{Orientation, Page};
    use crate::shapes::{Path as ShapePath, Shape};
    use crate::transform::AffineTransform;
    use tempfile::tempdir;

    fn path_data(out: &str) -> Vec<&str> {
        out.split("d=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_end_to_end_flipped_open_path() {
        let freehand = Shape::freehand(vec![
            ShapePath::new()
                .move_to(10.0, 10.0)
                .line_to(90.0, 10.0)
                .line_to(90.0, 40.0),
        ]);
        let page = Page::new(100.0, 50.0, Shape::container(vec![freehand]));

        let out = render_page(&page, &ConvertConfig::default()).unwrap();
        assert!(out.contains("<svg width=\"100\" height=\"50\">"));
        assert_eq!(path_data(&out), ["M 10 40 L 90 40 L 90 10"]);
        assert!(out.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_rotated_page_canvas_and_placement() {
        let freehand = Shape::freehand(vec![ShapePath::new().move_to(0.0, 0.0).line_to(200.0, 0.0)]);
        let page = Page::new(200.0, 100.0, freehand).with_orientation(Orientation::Rotate90);

        let config = ConvertConfig::default().with_format(OutputFormat::Svg);
        let out = render_page(&page, &config).unwrap();
        assert!(out.contains("width=\"100\" height=\"200\""));
        assert_eq!(path_data(&out), ["M 0 0 L 0 200"]);
    }

    #[test]
    fn test_unsupported_shape_does_not_abort() {
        let dot = |x: f64| Shape::freehand(vec![ShapePath::new().move_to(x, 0.0)]);
        let tree = Shape::container(vec![dot(1.0), Shape::Unsupported, dot(2.0)]);
        let page = Page::new(10.0, 10.0, tree);

        let (bytes, stats) = convert_page(&page, Vec::new(), &ConvertConfig::default()).unwrap();
        let out = String::from_utf8(bytes).unwrap();
        assert_eq!(path_data(&out), ["M 1 10", "M 2 10"]);
        assert_eq!(stats.elements, 2);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_nested_local_transforms_on_page() {
        let image = Shape::image(10.0, 10.0)
            .with_transform(AffineTransform::IDENTITY.translate(5.0, 5.0));
        let layer = Shape::container(vec![image])
            .with_transform(AffineTransform::IDENTITY.translate(20.0, 0.0));
        let page = Page::new(100.0, 100.0, layer);

        let out = render_page(&page, &ConvertConfig::default()).unwrap();
        assert_eq!(path_data(&out), ["M 25 95 L 35 95 L 35 85 L 25 85 Z"]);
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        use crate::error::ConvertError;

        let dir = tempdir().unwrap();
        let path = dir.path().join("page_1.svg");
        let result: Result<()> = write_output_file(&path, |mut sink| {
            sink.write_all(b"<svg>")?;
            sink.flush()?;
            Err(ConvertError::Writer("interrupted".to_string()))
        });
        assert!(matches!(result, Err(ConvertError::Writer(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_convert_page_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page_1.html");
        let page = Page::new(10.0, 10.0, Shape::image(1.0, 1.0));

        let stats = convert_page_to_file(&page, &path, &ConvertConfig::default()).unwrap();
        assert_eq!(stats.elements, 1);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<!DOCTYPE html>"));
        assert!(contents.contains("class=\"image-box\""));
    }
}
