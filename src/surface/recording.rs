//! In-memory surface that records drawing operations.
//!
//! The recorded document serializes to JSON, which is the hand-off format for
//! an external PDF rasterizer. Tests use it to inspect what a page drew.

use super::{Color, DrawContext, DrawingSurface, ImageHandle, Paint, TextAlign};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Rectangle
    Rect {
        /// Bounds
        rect: Rect,
        /// Fill/stroke mode
        paint: Paint,
        /// Fill color
        fill: Color,
        /// Stroke color
        stroke: Color,
        /// Stroke width
        line_width: f32,
    },
    /// Rounded rectangle
    RoundedRect {
        /// Bounds
        rect: Rect,
        /// Corner radius
        radius: f32,
        /// Fill/stroke mode
        paint: Paint,
        /// Fill color
        fill: Color,
        /// Stroke color
        stroke: Color,
        /// Stroke width
        line_width: f32,
    },
    /// Straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        stroke: Color,
        /// Stroke width
        line_width: f32,
    },
    /// One line of text
    Text {
        /// Text content
        text: String,
        /// Anchor (baseline)
        at: Point,
        /// Alignment about the anchor
        align: TextAlign,
        /// Font name
        font: String,
        /// Font size
        size: f32,
        /// Text color
        color: Color,
    },
    /// Placed image
    Image {
        /// Image key
        key: String,
        /// Target bounds
        rect: Rect,
    },
}

/// All operations drawn on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedPage {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Operations in drawing order
    pub ops: Vec<DrawOp>,
}

impl RecordedPage {
    /// Text strings drawn on this page, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check whether any text op on this page equals `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }
}

/// A recorded book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedDocument {
    /// Pages in order
    pub pages: Vec<RecordedPage>,
}

impl RecordedDocument {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    document: RecordedDocument,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages recorded so far.
    pub fn pages(&self) -> &[RecordedPage] {
        &self.document.pages
    }

    /// Consume the surface and return the recorded document.
    pub fn into_document(self) -> RecordedDocument {
        self.document
    }

    fn push(&mut self, op: DrawOp) {
        match self.document.pages.last_mut() {
            Some(page) => page.ops.push(op),
            None => log::warn!("Drawing operation issued before the first page was started"),
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.document.pages.push(RecordedPage {
            width,
            height,
            ops: Vec::new(),
        });
    }

    fn rect(&mut self, rect: Rect, paint: Paint, ctx: &DrawContext) {
        self.push(DrawOp::Rect {
            rect,
            paint,
            fill: ctx.fill,
            stroke: ctx.stroke,
            line_width: ctx.line_width,
        });
    }

    fn rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint, ctx: &DrawContext) {
        self.push(DrawOp::RoundedRect {
            rect,
            radius,
            paint,
            fill: ctx.fill,
            stroke: ctx.stroke,
            line_width: ctx.line_width,
        });
    }

    fn line(&mut self, from: Point, to: Point, ctx: &DrawContext) {
        self.push(DrawOp::Line {
            from,
            to,
            stroke: ctx.stroke,
            line_width: ctx.line_width,
        });
    }

    fn text(&mut self, text: &str, at: Point, align: TextAlign, ctx: &DrawContext) {
        self.push(DrawOp::Text {
            text: text.to_string(),
            at,
            align,
            font: ctx.font.name.clone(),
            size: ctx.font.size,
            color: ctx.fill,
        });
    }

    fn image(&mut self, image: &ImageHandle, rect: Rect) {
        self.push(DrawOp::Image {
            key: image.key.clone(),
            rect,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_ops_per_page() {
        let ctx = DrawContext::new("Helvetica");
        let mut surface = RecordingSurface::new();
        surface.begin_page(100.0, 200.0);
        surface.text("Hello", Point::new(10.0, 20.0), TextAlign::Left, &ctx);
        surface.begin_page(100.0, 200.0);
        surface.rect(Rect::new(0.0, 0.0, 5.0, 5.0), Paint::Fill, &ctx);

        let pages = surface.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].texts(), vec!["Hello"]);
        assert!(pages[1].texts().is_empty());
        assert_eq!(pages[1].ops.len(), 1);
    }

    #[test]
    fn test_ops_before_first_page_are_dropped() {
        let ctx = DrawContext::new("Helvetica");
        let mut surface = RecordingSurface::new();
        surface.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &ctx);
        assert!(surface.pages().is_empty());
    }

    #[test]
    fn test_text_captures_context() {
        let ctx = DrawContext::new("Helvetica")
            .with_font("Times-Bold", 18.0)
            .with_fill(Color::gray(0.5));
        let mut surface = RecordingSurface::new();
        surface.begin_page(10.0, 10.0);
        surface.text("X", Point::new(1.0, 2.0), TextAlign::Center, &ctx);
        match &surface.pages()[0].ops[0] {
            DrawOp::Text {
                font, size, color, ..
            } => {
                assert_eq!(font, "Times-Bold");
                assert_eq!(*size, 18.0);
                assert_eq!(*color, Color::gray(0.5));
            },
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_json_tagging() {
        let ctx = DrawContext::new("Helvetica");
        let mut surface = RecordingSurface::new();
        surface.begin_page(10.0, 10.0);
        surface.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &ctx);
        let json = surface.into_document().to_json().unwrap();
        assert!(json.contains("\"op\": \"line\""));
        let doc = RecordedDocument::from_json(&json).unwrap();
        assert_eq!(doc.pages[0].ops.len(), 1);
    }
}
