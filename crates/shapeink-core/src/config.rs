//! Conversion settings.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke applied to one kind of emitted element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
}

impl ElementStyle {
    pub fn new(stroke_color: impl Into<SerializableColor>, stroke_width: f64) -> Self {
        Self {
            stroke_color: stroke_color.into(),
            stroke_width,
        }
    }
}

/// Document wrapper written around the SVG content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A minimal HTML page embedding the SVG.
    #[default]
    Html,
    /// A standalone SVG document.
    Svg,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
        }
    }

    /// Parse a format name (`html` or `svg`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(OutputFormat::Html),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }
}

/// Settings for converting a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub format: OutputFormat,
    /// Stroke for freehand paths.
    pub outline: ElementStyle,
    /// Stroke for image placement boxes.
    pub image_box: ElementStyle,
    /// Stroke for lines, rectangles, ellipses and Bezier primitives.
    pub primitive: ElementStyle,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            outline: ElementStyle::new(Color::from_rgb8(0, 0, 255), 3.0),
            image_box: ElementStyle::new(Color::from_rgb8(255, 0, 0), 1.0),
            primitive: ElementStyle::new(Color::from_rgb8(0, 128, 0), 1.0),
        }
    }
}

impl ConvertConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(SerializableColor::new(0, 128, 255, 255).to_hex(), "#0080ff");
    }

    #[test]
    fn test_color_peniko_round_trip() {
        let color = SerializableColor::new(10, 20, 30, 128);
        let peniko: Color = color.into();
        assert_eq!(SerializableColor::from(peniko), color);
    }

    #[test]
    fn test_default_styles_from_peniko_colors() {
        let config = ConvertConfig::default();
        assert_eq!(config.outline.stroke_color, SerializableColor::new(0, 0, 255, 255));
        assert_eq!(config.image_box.stroke_color.to_hex(), "#ff0000");
        assert_eq!(config.primitive.stroke_color, SerializableColor::new(0, 128, 0, 255));
        assert_eq!(config.primitive.stroke_color.a, 255);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ConvertConfig::from_json(r#"{"format": "svg"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Svg);
        assert_eq!(config.outline, ConvertConfig::default().outline);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(ConvertConfig::from_json(r#"{"format": "pdf"}"#).is_err());
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("SVG"), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_name("html"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::from_name("png"), None);
        assert_eq!(OutputFormat::Svg.extension(), "svg");
    }
}
