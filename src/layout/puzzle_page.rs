//! Layout and rendering of a single puzzle page.
//!
//! A puzzle page stacks, top to bottom inside the content box: the title,
//! an optional description, an ornamental divider, then the word list and the
//! letter grid in the configured [`LayoutOrder`]. Layout is computed first
//! into a [`PuzzlePageLayout`] and drawn afterwards.

use super::text::{stack_offset, wrap, VerticalAlign, ASCENT};
use crate::geometry::{Point, Rect};
use crate::puzzle::PuzzleData;
use crate::surface::{Color, DrawContext, DrawingSurface, Paint, TextAlign};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of word-list columns.
pub const WORD_LIST_COLUMNS: usize = 3;

/// Order of the grid and the word list below the divider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutOrder {
    /// Word list, gap, grid
    WordsFirst,
    /// Grid, gap, word list
    #[default]
    GridFirst,
}

/// Unscaled sizes for puzzle page elements. Every size is multiplied by the
/// page scale factor before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzlePageStyle {
    /// Font for titles
    pub title_font: String,
    /// Font for descriptions and word lists
    pub body_font: String,
    /// Font for grid letters
    pub letter_font: String,
    /// Title font size
    pub title_size: f32,
    /// Description font size
    pub description_size: f32,
    /// Word list font size
    pub word_size: f32,
    /// Line height multiplier for title and description
    pub line_height: f32,
    /// Line height multiplier for word list items
    pub word_line_height: f32,
    /// Vertical gap between blocks
    pub block_gap: f32,
    /// Height reserved for the divider ornament
    pub divider_height: f32,
    /// Inner padding of the grid and word list boxes
    pub box_padding: f32,
    /// Largest grid cell, for legibility
    pub max_cell_size: f32,
    /// Letter size as a fraction of the cell size
    pub letter_ratio: f32,
    /// Grid/word list order
    pub layout_order: LayoutOrder,
    /// Vertical placement of the whole stack
    pub align: VerticalAlign,
}

impl Default for PuzzlePageStyle {
    fn default() -> Self {
        Self {
            title_font: "Helvetica-Bold".to_string(),
            body_font: "Helvetica".to_string(),
            letter_font: "Courier-Bold".to_string(),
            title_size: 24.0,
            description_size: 11.0,
            word_size: 11.0,
            line_height: 1.2,
            word_line_height: 1.5,
            block_gap: 12.0,
            divider_height: 14.0,
            box_padding: 10.0,
            max_cell_size: 30.0,
            letter_ratio: 0.6,
            layout_order: LayoutOrder::GridFirst,
            align: VerticalAlign::Center,
        }
    }
}

/// A positioned block of wrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Bounds of the block
    pub rect: Rect,
    /// Wrapped lines
    pub lines: Vec<String>,
    /// Scaled font size
    pub font_size: f32,
    /// Height of one line
    pub line_height: f32,
}

impl TextBlock {
    fn layout(text: &str, font_size: f32, line_factor: f32, width: f32) -> Self {
        let lines = wrap(text, font_size, width);
        let line_height = font_size * line_factor;
        let height = line_height * lines.len() as f32;
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            lines,
            font_size,
            line_height,
        }
    }

    fn draw(&self, surface: &mut dyn DrawingSurface, ctx: &DrawContext) {
        let ctx = ctx.with_size(self.font_size);
        let x = self.rect.center().x;
        for (i, line) in self.lines.iter().enumerate() {
            let baseline = self.rect.y + i as f32 * self.line_height + self.font_size * ASCENT;
            surface.text(line, Point::new(x, baseline), TextAlign::Center, &ctx);
        }
    }
}

/// Positioned letter grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBox {
    /// Grid bounds (exactly `cell_size * n` square)
    pub rect: Rect,
    /// Edge length of one cell
    pub cell_size: f32,
}

/// Positioned three-column word list.
#[derive(Debug, Clone, PartialEq)]
pub struct WordListBox {
    /// Box bounds
    pub rect: Rect,
    /// Words per column, filled column by column
    pub columns: Vec<Vec<String>>,
    /// Height of one list item
    pub item_height: f32,
    /// Scaled font size
    pub font_size: f32,
    /// Scaled inner padding
    pub padding: f32,
}

impl WordListBox {
    /// Width of one column.
    pub fn column_width(&self) -> f32 {
        (self.rect.width - 2.0 * self.padding) / WORD_LIST_COLUMNS as f32
    }
}

/// Split words into exactly three columns of `ceil(count / 3)` items, filling
/// the first column before the second.
pub fn split_columns(words: &[String]) -> Vec<Vec<String>> {
    let per_column = words.len().div_ceil(WORD_LIST_COLUMNS);
    let mut columns: Vec<Vec<String>> = vec![Vec::new(); WORD_LIST_COLUMNS];
    if per_column == 0 {
        return columns;
    }
    for (i, word) in words.iter().enumerate() {
        columns[i / per_column].push(word.clone());
    }
    columns
}

/// Computed layout of one puzzle page.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzlePageLayout {
    /// Scale factor applied to every size
    pub scale: f32,
    /// Title block
    pub title: TextBlock,
    /// Description block, if any
    pub description: Option<TextBlock>,
    /// Divider ornament bounds
    pub divider: Rect,
    /// Letter grid
    pub grid: GridBox,
    /// Word list
    pub word_list: WordListBox,
    /// Height of the whole stack
    pub total_height: f32,
}

/// Lays out and draws puzzle pages.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRenderer {
    style: PuzzlePageStyle,
}

impl PageRenderer {
    /// Create a renderer with the given style.
    pub fn new(style: PuzzlePageStyle) -> Self {
        Self { style }
    }

    /// Compute the layout of a puzzle page.
    ///
    /// The grid takes whatever height the other blocks leave, limited by the
    /// content width and by the scaled maximum cell size:
    /// `cell = min(height_budget / n, width_budget / n, max_cell)`.
    pub fn layout(
        &self,
        content: Rect,
        scale: f32,
        title: &str,
        description: Option<&str>,
        puzzle: &PuzzleData,
    ) -> PuzzlePageLayout {
        let s = &self.style;
        let n = puzzle.size().max(1) as f32;
        let gap = s.block_gap * scale;
        let padding = s.box_padding * scale;

        let mut title_block = TextBlock::layout(title, s.title_size * scale, s.line_height, content.width);
        let mut description_block = description
            .filter(|d| !d.trim().is_empty())
            .map(|d| TextBlock::layout(d, s.description_size * scale, s.line_height, content.width));
        let divider_height = s.divider_height * scale;

        let words = word_list(puzzle);
        let columns = split_columns(&words);
        let items_per_column = words.len().div_ceil(WORD_LIST_COLUMNS);
        let word_size = s.word_size * scale;
        let item_height = word_size * s.word_line_height;
        let list_height = items_per_column as f32 * item_height + 2.0 * padding;

        let header_height = title_block.rect.height
            + description_block
                .as_ref()
                .map_or(0.0, |d| gap + d.rect.height)
            + gap
            + divider_height
            + gap;
        let fixed_height = header_height + list_height + gap;

        let height_budget = (content.height - fixed_height).max(0.0);
        let width_budget = content.width;
        let cell_size = (height_budget / n)
            .min(width_budget / n)
            .min(s.max_cell_size * scale)
            .max(0.0);
        let grid_side = cell_size * n;
        let total_height = fixed_height + grid_side;

        let mut y = content.y + stack_offset(content.height, total_height, s.align);

        title_block.rect.x = content.x;
        title_block.rect.y = y;
        y += title_block.rect.height;
        if let Some(block) = description_block.as_mut() {
            y += gap;
            block.rect.x = content.x;
            block.rect.y = y;
            y += block.rect.height;
        }
        y += gap;
        let divider = Rect::new(content.x, y, content.width, divider_height);
        y += divider_height + gap;

        let grid_x = content.x + (content.width - grid_side) / 2.0;
        let (grid_rect, list_rect) = match s.layout_order {
            LayoutOrder::GridFirst => {
                let grid = Rect::new(grid_x, y, grid_side, grid_side);
                let list = Rect::new(content.x, grid.bottom() + gap, content.width, list_height);
                (grid, list)
            },
            LayoutOrder::WordsFirst => {
                let list = Rect::new(content.x, y, content.width, list_height);
                let grid = Rect::new(grid_x, list.bottom() + gap, grid_side, grid_side);
                (grid, list)
            },
        };

        PuzzlePageLayout {
            scale,
            title: title_block,
            description: description_block,
            divider,
            grid: GridBox {
                rect: grid_rect,
                cell_size,
            },
            word_list: WordListBox {
                rect: list_rect,
                columns,
                item_height,
                font_size: word_size,
                padding,
            },
            total_height,
        }
    }

    /// Draw a laid-out puzzle page.
    pub fn render(
        &self,
        layout: &PuzzlePageLayout,
        puzzle: &PuzzleData,
        surface: &mut dyn DrawingSurface,
        ctx: &DrawContext,
    ) {
        let s = &self.style;
        layout
            .title
            .draw(surface, &ctx.with_font(&s.title_font, layout.title.font_size));
        if let Some(description) = &layout.description {
            description.draw(surface, &ctx.with_font(&s.body_font, description.font_size));
        }
        draw_divider(surface, ctx, layout.divider, layout.scale);
        draw_letter_grid(
            surface,
            &ctx.with_font(&s.letter_font, layout.grid.cell_size * s.letter_ratio),
            layout.grid,
            puzzle,
            None,
        );
        self.draw_word_list(surface, ctx, &layout.word_list);
    }

    fn draw_word_list(&self, surface: &mut dyn DrawingSurface, ctx: &DrawContext, list: &WordListBox) {
        let frame = ctx.with_stroke(Color::gray(0.4), 0.75);
        surface.rounded_rect(list.rect, list.padding, Paint::Stroke, &frame);

        let text_ctx = ctx.with_font(&self.style.body_font, list.font_size);
        let column_width = list.column_width();
        for (c, column) in list.columns.iter().enumerate() {
            let x = list.rect.x + list.padding + c as f32 * column_width;
            for (i, word) in column.iter().enumerate() {
                let top = list.rect.y + list.padding + i as f32 * list.item_height;
                let baseline = top + (list.item_height - list.font_size) / 2.0 + list.font_size * ASCENT;
                surface.text(word, Point::new(x, baseline), TextAlign::Left, &text_ctx);
            }
        }
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(PuzzlePageStyle::default())
    }
}

/// Words listed under a puzzle: placed words only, alphabetized.
pub fn word_list(puzzle: &PuzzleData) -> Vec<String> {
    let mut words: Vec<String> = puzzle.words.iter().map(|p| p.text.clone()).collect();
    words.sort();
    words
}

/// Ornamental divider: a rule through the middle with a small diamond.
fn draw_divider(surface: &mut dyn DrawingSurface, ctx: &DrawContext, rect: Rect, scale: f32) {
    let center = rect.center();
    let half = rect.width * 0.25;
    let line = ctx.with_stroke(Color::gray(0.5), 0.75 * scale);
    surface.line(
        Point::new(center.x - half, center.y),
        Point::new(center.x + half, center.y),
        &line,
    );
    let size = (rect.height * 0.5).min(8.0 * scale);
    let ornament = Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size);
    surface.rounded_rect(ornament, size * 0.2, Paint::Fill, &ctx.with_fill(Color::gray(0.5)));
}

/// Draw a letter grid, optionally shading solution cells.
///
/// Shaded cells get `highlight` as fill and a contrasting letter color.
pub(crate) fn draw_letter_grid(
    surface: &mut dyn DrawingSurface,
    ctx: &DrawContext,
    grid: GridBox,
    puzzle: &PuzzleData,
    highlight: Option<(&BTreeSet<(usize, usize)>, Color)>,
) {
    let cell = grid.cell_size;
    let letter_size = ctx.font.size;

    if let Some((cells, fill)) = highlight {
        let shade = ctx.with_fill(fill);
        for &(row, col) in cells {
            let rect = Rect::new(
                grid.rect.x + col as f32 * cell,
                grid.rect.y + row as f32 * cell,
                cell,
                cell,
            );
            surface.rect(rect, Paint::Fill, &shade);
        }
    }

    let plain = ctx.with_fill(Color::black());
    let on_fill = highlight.map(|(cells, fill)| (cells, ctx.with_fill(fill.contrasting_text())));
    for (row, letters) in puzzle.grid.iter().enumerate() {
        for (col, letter) in letters.iter().enumerate() {
            let text_ctx = match &on_fill {
                Some((cells, shaded)) if cells.contains(&(row, col)) => shaded,
                _ => &plain,
            };
            let x = grid.rect.x + (col as f32 + 0.5) * cell;
            let baseline = grid.rect.y + (row as f32 + 0.5) * cell + letter_size * 0.35;
            let mut buf = [0u8; 4];
            surface.text(letter.encode_utf8(&mut buf), Point::new(x, baseline), TextAlign::Center, text_ctx);
        }
    }

    let border = ctx.with_stroke(Color::black(), 1.0);
    surface.rect(grid.rect, Paint::Stroke, &border);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Difficulty, GridPlacer, Word};
    use crate::surface::RecordingSurface;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn puzzle(words: &[&str], size: usize) -> PuzzleData {
        GridPlacer::with_rng(ChaCha8Rng::seed_from_u64(5)).place(&Word::list(words), size, Difficulty::Easy)
    }

    fn content() -> Rect {
        Rect::new(54.0, 45.0, 504.0, 702.0)
    }

    #[test]
    fn test_split_columns() {
        let words: Vec<String> = (1..=7).map(|i| format!("W{}", i)).collect();
        let columns = split_columns(&words);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0], vec!["W1", "W2", "W3"]);
        assert_eq!(columns[1], vec!["W4", "W5", "W6"]);
        assert_eq!(columns[2], vec!["W7"]);
        assert_eq!(split_columns(&[]).len(), 3);
    }

    #[test]
    fn test_layout_stays_inside_content_box() {
        let p = puzzle(&["APPLE", "BANANA", "CHERRY", "GRAPE", "LEMON", "MANGO", "PEACH"], 15);
        let layout = PageRenderer::default().layout(content(), 1.0, "Fruit", Some("Find them all"), &p);
        assert!(content().contains_rect(&layout.title.rect));
        assert!(content().contains_rect(&layout.grid.rect));
        assert!(content().contains_rect(&layout.word_list.rect));
        assert!(!layout.grid.rect.intersects(&layout.word_list.rect));
    }

    #[test]
    fn test_cell_size_capped() {
        let p = puzzle(&["CAT", "DOG"], 5);
        let layout = PageRenderer::default().layout(content(), 1.0, "Pets", None, &p);
        assert_eq!(layout.grid.cell_size, 30.0);
        let scaled = PageRenderer::default().layout(content(), 0.8, "Pets", None, &p);
        assert!((scaled.grid.cell_size - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_cell_size_limited_by_width() {
        let p = puzzle(&["CAT", "DOG"], 20);
        let narrow = Rect::new(0.0, 0.0, 200.0, 2000.0);
        let layout = PageRenderer::default().layout(narrow, 1.0, "Pets", None, &p);
        assert!((layout.grid.cell_size - 10.0).abs() < 1e-4);
        assert!(narrow.contains_rect(&layout.grid.rect));
    }

    #[test]
    fn test_cell_size_limited_by_height() {
        let p = puzzle(&["CAT", "DOG"], 20);
        let short = Rect::new(0.0, 0.0, 2000.0, 300.0);
        let layout = PageRenderer::default().layout(short, 1.0, "Pets", None, &p);
        assert!(layout.grid.rect.bottom() <= short.bottom() + 0.01);
        assert!(layout.word_list.rect.bottom() <= short.bottom() + 0.01);
    }

    #[test]
    fn test_vertical_centering() {
        let p = puzzle(&["CAT", "DOG"], 5);
        let layout = PageRenderer::default().layout(content(), 1.0, "Pets", None, &p);
        let above = layout.title.rect.y - content().y;
        let below = content().bottom() - (layout.title.rect.y + layout.total_height);
        assert!((above - below).abs() < 0.01);
        assert!(above > 0.0);
    }

    #[test]
    fn test_bottom_alignment() {
        let p = puzzle(&["CAT", "DOG"], 5);
        let style = PuzzlePageStyle {
            align: VerticalAlign::Bottom,
            ..Default::default()
        };
        let layout = PageRenderer::new(style).layout(content(), 1.0, "Pets", None, &p);
        let bottom = layout.word_list.rect.bottom();
        assert!((bottom - content().bottom()).abs() < 0.01);
    }

    #[test]
    fn test_words_first_order() {
        let p = puzzle(&["CAT", "DOG"], 8);
        let style = PuzzlePageStyle {
            layout_order: LayoutOrder::WordsFirst,
            ..Default::default()
        };
        let layout = PageRenderer::new(style).layout(content(), 1.0, "Pets", None, &p);
        assert!(layout.word_list.rect.bottom() < layout.grid.rect.top());
        assert!(layout.divider.bottom() <= layout.word_list.rect.top());
    }

    #[test]
    fn test_word_list_height_depends_on_rows_only() {
        let renderer = PageRenderer::default();
        let four = puzzle(&["AAAA", "BBBB", "CCCC", "DDDD"], 10);
        let six = puzzle(&["AAAA", "BBBB", "CCCC", "DDDD", "EEEE", "FFFF"], 10);
        let a = renderer.layout(content(), 1.0, "T", None, &four);
        let b = renderer.layout(content(), 1.0, "T", None, &six);
        assert_eq!(four.words.len(), 4);
        assert_eq!(six.words.len(), 6);
        assert_eq!(a.word_list.rect.height, b.word_list.rect.height);
    }

    #[test]
    fn test_render_draws_every_letter_and_word() {
        let p = puzzle(&["CAT", "DOG", "EMU"], 6);
        let renderer = PageRenderer::default();
        let layout = renderer.layout(content(), 1.0, "Animals", None, &p);
        let mut surface = RecordingSurface::new();
        surface.begin_page(612.0, 792.0);
        renderer.render(&layout, &p, &mut surface, &DrawContext::new("Helvetica"));

        let page = &surface.pages()[0];
        assert!(page.has_text("Animals"));
        assert!(page.has_text("CAT") && page.has_text("DOG") && page.has_text("EMU"));
        let single_letters = page.texts().iter().filter(|t| t.len() == 1).count();
        assert_eq!(single_letters, 36);
    }
}
