//! Drawing surface abstraction.
//!
//! The book engine never rasterizes anything itself. It emits drawing calls
//! against a [`DrawingSurface`], one page at a time, in a single absolute
//! coordinate space per page (origin top-left, `y` down, PDF points).
//!
//! Drawing state (font, fill, stroke, line width) is not held by the surface.
//! Every call receives an explicit [`DrawContext`], and the composer starts
//! each page from a freshly reset context so no state leaks between pages.
//!
//! ```text
//! BookComposer
//!     ↓  (one DrawContext per page)
//! [DrawingSurface] ── begin_page / rect / rounded_rect / line / text / image
//!     ↓
//! RecordingSurface → RecordedDocument (JSON) → external rasterizer
//! ```

mod recording;

pub use recording::{DrawOp, RecordedDocument, RecordedPage, RecordingSurface};

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Font used when a requested font cannot be loaded.
pub const DEFAULT_FONT: &str = "Helvetica";

/// The PDF Base-14 font names, which are always available.
pub const BASE14_FONTS: [&str; 14] = [
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
    "Symbol",
    "ZapfDingbats",
];

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Create a neutral gray.
    pub fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    /// WCAG relative luminance of the color (sRGB, 0.0 - 1.0).
    pub fn relative_luminance(&self) -> f32 {
        fn linear(channel: f32) -> f32 {
            if channel <= 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio between two colors (1.0 - 21.0).
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (hi, lo) = if a > b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }

    /// Black or white, whichever contrasts more with this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlebook::surface::Color;
    ///
    /// assert_eq!(Color::new(0.1, 0.1, 0.4).contrasting_text(), Color::white());
    /// assert_eq!(Color::new(1.0, 0.9, 0.3).contrasting_text(), Color::black());
    /// ```
    pub fn contrasting_text(&self) -> Color {
        let black = Color::black();
        let white = Color::white();
        if self.contrast_ratio(&black) >= self.contrast_ratio(&white) {
            black
        } else {
            white
        }
    }
}

/// Font name and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font name (e.g., "Helvetica", "Times-Bold")
    pub name: String,
    /// Font size in points
    pub size: f32,
}

impl FontSpec {
    /// Create a new font spec.
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Anchor is the left end of the text
    #[default]
    Left,
    /// Anchor is the middle of the text
    Center,
    /// Anchor is the right end of the text
    Right,
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paint {
    /// Fill only
    Fill,
    /// Stroke only
    Stroke,
    /// Fill, then stroke
    FillStroke,
}

/// Explicit drawing state passed to every surface call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawContext {
    /// Current font
    pub font: FontSpec,
    /// Fill color (also used for text)
    pub fill: Color,
    /// Stroke color
    pub stroke: Color,
    /// Stroke width in points
    pub line_width: f32,
    base_font: String,
}

impl DrawContext {
    /// Create a context whose reset state uses `base_font`.
    pub fn new(base_font: impl Into<String>) -> Self {
        let base_font = base_font.into();
        Self {
            font: FontSpec::new(base_font.clone(), 12.0),
            fill: Color::black(),
            stroke: Color::black(),
            line_width: 1.0,
            base_font,
        }
    }

    /// Return to the initial state; called at the start of every page.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.base_font));
    }

    /// Copy of this context with a different font.
    pub fn with_font(&self, name: &str, size: f32) -> Self {
        Self {
            font: FontSpec::new(name, size),
            ..self.clone()
        }
    }

    /// Copy of this context with a different font size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            font: FontSpec::new(self.font.name.clone(), size),
            ..self.clone()
        }
    }

    /// Copy of this context with a different fill color.
    pub fn with_fill(&self, fill: Color) -> Self {
        Self {
            fill,
            ..self.clone()
        }
    }

    /// Copy of this context with a different stroke.
    pub fn with_stroke(&self, stroke: Color, line_width: f32) -> Self {
        Self {
            stroke,
            line_width,
            ..self.clone()
        }
    }
}

/// A decoded image that a surface can place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageHandle {
    /// Key the image was loaded under
    pub key: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

/// Rendering collaborator that receives the book's drawing calls.
pub trait DrawingSurface {
    /// Start a new page of the given size. Every later call targets it.
    fn begin_page(&mut self, width: f32, height: f32);

    /// Draw a rectangle.
    fn rect(&mut self, rect: Rect, paint: Paint, ctx: &DrawContext);

    /// Draw a rectangle with rounded corners.
    fn rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint, ctx: &DrawContext);

    /// Draw a straight line.
    fn line(&mut self, from: Point, to: Point, ctx: &DrawContext);

    /// Draw one line of text with its baseline at `at.y`.
    fn text(&mut self, text: &str, at: Point, align: TextAlign, ctx: &DrawContext);

    /// Place an image scaled into `rect`.
    fn image(&mut self, image: &ImageHandle, rect: Rect);
}

/// Source of fonts and images.
///
/// Loading may fail for any reason; callers fall back to [`DEFAULT_FONT`] or
/// a plain fill instead of aborting.
pub trait ResourceProvider {
    /// Make a font available to the surface.
    fn load_font(&mut self, name: &str) -> Result<()>;

    /// Load and decode an image.
    fn load_image(&mut self, key: &str) -> Result<ImageHandle>;
}

/// Provider that only knows the Base-14 fonts and has no images.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinResources;

impl ResourceProvider for BuiltinResources {
    fn load_font(&mut self, name: &str) -> Result<()> {
        if BASE14_FONTS.contains(&name) {
            Ok(())
        } else {
            Err(Error::Resource(format!("font '{}' is not available", name)))
        }
    }

    fn load_image(&mut self, key: &str) -> Result<ImageHandle> {
        Err(Error::Resource(format!("no image source for '{}'", key)))
    }
}
