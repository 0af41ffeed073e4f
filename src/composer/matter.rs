//! Front matter, back matter and separator pages.
//!
//! These pages are stacks of centered or left-aligned text lines, laid out
//! with the same vertical stacking rules as puzzle pages.

use crate::config::Fonts;
use crate::geometry::{Point, Rect};
use crate::layout::text::{stack_offset, wrap, VerticalAlign, ASCENT};
use crate::surface::{Color, DrawContext, DrawingSurface, TextAlign};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Instructions used when an instructions page has no text of its own.
pub const DEFAULT_INSTRUCTIONS: &str = "Every word in the list is hidden in the grid. \
Words run in straight lines: across, down or diagonally, depending on the difficulty. \
Letters may be shared where two words cross.\n\
Circle each word as you find it and cross it off the list. \
Solutions are at the back of the book.";

/// A programmatic front-matter page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FrontMatter {
    /// Title page; never numbered
    Title {
        /// Book title
        title: String,
        /// Optional subtitle
        #[serde(default)]
        subtitle: Option<String>,
        /// Optional author line
        #[serde(default)]
        author: Option<String>,
    },
    /// Copyright notice, bottom-aligned
    Copyright {
        /// Rights holder
        holder: String,
        /// Copyright year; the current year when absent
        #[serde(default)]
        year: Option<i32>,
        /// Additional notice lines
        #[serde(default)]
        notice: Option<String>,
    },
    /// How to play
    Instructions {
        /// Custom instructions; [`DEFAULT_INSTRUCTIONS`] when absent
        #[serde(default)]
        text: Option<String>,
    },
    /// Free text
    Text {
        /// Optional heading
        #[serde(default)]
        heading: Option<String>,
        /// Body; blank-line separated paragraphs
        body: String,
    },
}

impl FrontMatter {
    /// Whether the page carries a page number.
    pub fn is_numbered(&self) -> bool {
        !matches!(self, FrontMatter::Title { .. })
    }
}

/// A back-matter page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BackMatter {
    /// Free text
    Text {
        /// Optional heading
        #[serde(default)]
        heading: Option<String>,
        /// Body; blank-line separated paragraphs
        body: String,
    },
    /// Ruled lines for notes
    Notes {
        /// Heading; "Notes" when absent
        #[serde(default)]
        heading: Option<String>,
    },
    /// About the author or publisher
    About {
        /// Body text
        body: String,
    },
}

/// Sizes of matter page elements before scaling.
const HEADING_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 11.0;
const LINE_FACTOR: f32 = 1.4;
const RULE_SPACING: f32 = 24.0;

#[derive(Debug, Clone)]
struct StackLine {
    text: String,
    font: String,
    size: f32,
    advance: f32,
}

/// Vertical stack of text lines.
#[derive(Debug, Default)]
struct TextStack {
    lines: Vec<StackLine>,
}

impl TextStack {
    fn push_wrapped(&mut self, text: &str, font: &str, size: f32, width: f32) {
        for paragraph in text.split('\n') {
            if paragraph.trim().is_empty() {
                self.push_gap(size * 0.5);
                continue;
            }
            for line in wrap(paragraph, size, width) {
                self.lines.push(StackLine {
                    text: line,
                    font: font.to_string(),
                    size,
                    advance: size * LINE_FACTOR,
                });
            }
        }
    }

    fn push_gap(&mut self, height: f32) {
        self.lines.push(StackLine {
            text: String::new(),
            font: String::new(),
            size: 0.0,
            advance: height,
        });
    }

    fn height(&self) -> f32 {
        self.lines.iter().map(|l| l.advance).sum()
    }

    /// Draw the stack; returns the y coordinate just below the last line.
    fn draw(
        &self,
        content: Rect,
        valign: VerticalAlign,
        align: TextAlign,
        surface: &mut dyn DrawingSurface,
        ctx: &DrawContext,
    ) -> f32 {
        let x = match align {
            TextAlign::Left => content.left(),
            TextAlign::Center => content.center().x,
            TextAlign::Right => content.right(),
        };
        let mut y = content.y + stack_offset(content.height, self.height(), valign);
        for line in &self.lines {
            if !line.text.is_empty() {
                let baseline = y + (line.advance - line.size) / 2.0 + line.size * ASCENT;
                surface.text(&line.text, Point::new(x, baseline), align, &ctx.with_font(&line.font, line.size));
            }
            y += line.advance;
        }
        y
    }
}

/// Draws matter and separator pages.
#[derive(Debug, Clone, Copy)]
pub struct MatterRenderer<'a> {
    fonts: &'a Fonts,
    scale: f32,
}

impl<'a> MatterRenderer<'a> {
    /// Create a renderer using `fonts`, with sizes multiplied by `scale`.
    pub fn new(fonts: &'a Fonts, scale: f32) -> Self {
        Self { fonts, scale }
    }

    fn heading(&self, stack: &mut TextStack, text: &str, width: f32) {
        stack.push_wrapped(text, &self.fonts.title, HEADING_SIZE * self.scale, width);
        stack.push_gap(HEADING_SIZE * self.scale * 0.6);
    }

    fn body(&self, stack: &mut TextStack, text: &str, width: f32) {
        stack.push_wrapped(text, &self.fonts.body, BODY_SIZE * self.scale, width);
    }

    /// Draw a front-matter page.
    pub fn front(&self, matter: &FrontMatter, content: Rect, surface: &mut dyn DrawingSurface, ctx: &DrawContext) {
        let width = content.width;
        let mut stack = TextStack::default();
        match matter {
            FrontMatter::Title {
                title,
                subtitle,
                author,
            } => {
                stack.push_wrapped(title, &self.fonts.title, 32.0 * self.scale, width);
                if let Some(subtitle) = subtitle {
                    stack.push_gap(12.0 * self.scale);
                    stack.push_wrapped(subtitle, &self.fonts.body, 16.0 * self.scale, width);
                }
                if let Some(author) = author {
                    stack.push_gap(48.0 * self.scale);
                    stack.push_wrapped(author, &self.fonts.body, 14.0 * self.scale, width);
                }
                stack.draw(content, VerticalAlign::Center, TextAlign::Center, surface, ctx);
            },
            FrontMatter::Copyright {
                holder,
                year,
                notice,
            } => {
                let year = year.unwrap_or_else(|| chrono::Local::now().year());
                self.body(&mut stack, &format!("Copyright © {} {}", year, holder), width);
                self.body(&mut stack, "All rights reserved.", width);
                if let Some(notice) = notice {
                    stack.push_gap(BODY_SIZE * self.scale);
                    self.body(&mut stack, notice, width);
                }
                stack.draw(content, VerticalAlign::Bottom, TextAlign::Center, surface, ctx);
            },
            FrontMatter::Instructions { text } => {
                self.heading(&mut stack, "How to play", width);
                self.body(&mut stack, text.as_deref().unwrap_or(DEFAULT_INSTRUCTIONS), width);
                stack.draw(content, VerticalAlign::Top, TextAlign::Left, surface, ctx);
            },
            FrontMatter::Text { heading, body } => {
                self.text_page(heading.as_deref(), body, content, surface, ctx);
            },
        }
    }

    /// Draw a back-matter page.
    pub fn back(&self, matter: &BackMatter, content: Rect, surface: &mut dyn DrawingSurface, ctx: &DrawContext) {
        match matter {
            BackMatter::Text { heading, body } => {
                self.text_page(heading.as_deref(), body, content, surface, ctx);
            },
            BackMatter::Notes { heading } => {
                let mut stack = TextStack::default();
                self.heading(&mut stack, heading.as_deref().unwrap_or("Notes"), content.width);
                let top = stack.draw(content, VerticalAlign::Top, TextAlign::Left, surface, ctx);
                self.rules(Rect::new(content.x, top, content.width, content.bottom() - top), surface, ctx);
            },
            BackMatter::About { body } => {
                let mut stack = TextStack::default();
                self.heading(&mut stack, "About", content.width);
                self.body(&mut stack, body, content.width);
                stack.draw(content, VerticalAlign::Center, TextAlign::Left, surface, ctx);
            },
        }
    }

    /// Draw a separator page with a large centered title.
    pub fn separator(
        &self,
        title: &str,
        subtitle: Option<&str>,
        content: Rect,
        surface: &mut dyn DrawingSurface,
        ctx: &DrawContext,
    ) {
        let mut stack = TextStack::default();
        stack.push_wrapped(title, &self.fonts.title, 40.0 * self.scale, content.width);
        if let Some(subtitle) = subtitle {
            stack.push_gap(16.0 * self.scale);
            stack.push_wrapped(subtitle, &self.fonts.body, 14.0 * self.scale, content.width);
        }
        stack.draw(content, VerticalAlign::Center, TextAlign::Center, surface, ctx);
    }

    fn text_page(
        &self,
        heading: Option<&str>,
        body: &str,
        content: Rect,
        surface: &mut dyn DrawingSurface,
        ctx: &DrawContext,
    ) {
        let mut stack = TextStack::default();
        if let Some(heading) = heading {
            self.heading(&mut stack, heading, content.width);
        }
        self.body(&mut stack, body, content.width);
        stack.draw(content, VerticalAlign::Top, TextAlign::Left, surface, ctx);
    }

    fn rules(&self, area: Rect, surface: &mut dyn DrawingSurface, ctx: &DrawContext) {
        let spacing = RULE_SPACING * self.scale;
        let rule = ctx.with_stroke(Color::gray(0.7), 0.5);
        let mut y = area.y + spacing;
        while y <= area.bottom() {
            surface.line(Point::new(area.left(), y), Point::new(area.right(), y), &rule);
            y += spacing;
        }
    }
}
