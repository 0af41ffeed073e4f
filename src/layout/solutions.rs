//! Solutions pages: up to four solved grids per page in a 2x2 arrangement.

use super::puzzle_page::{draw_letter_grid, GridBox};
use super::text::ASCENT;
use crate::geometry::{Point, Rect};
use crate::puzzle::PuzzleData;
use crate::surface::{Color, DrawContext, DrawingSurface, TextAlign};

/// Solved grids per solutions page.
pub const SOLUTIONS_PER_PAGE: usize = 4;

/// One solved puzzle waiting for a quadrant.
#[derive(Debug, Clone, Copy)]
pub struct SolutionEntry<'a> {
    /// Label drawn above the grid
    pub label: &'a str,
    /// The solved puzzle
    pub puzzle: &'a PuzzleData,
}

/// Layout of one quadrant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    /// Full quadrant bounds
    pub bounds: Rect,
    /// Strip reserved for the label
    pub label: Rect,
    /// Centered grid below the label
    pub grid: GridBox,
}

/// Number of solutions pages needed for `count` puzzles.
///
/// # Examples
///
/// ```
/// use puzzlebook::layout::solutions_page_count;
///
/// assert_eq!(solutions_page_count(4), 1);
/// assert_eq!(solutions_page_count(5), 2);
/// assert_eq!(solutions_page_count(0), 0);
/// ```
pub fn solutions_page_count(count: usize) -> usize {
    count.div_ceil(SOLUTIONS_PER_PAGE)
}

/// Packs solved grids into 2x2 solutions pages.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionsPacker {
    label_font: String,
    letter_font: String,
    label_size: f32,
    gutter: f32,
    highlight: Color,
}

impl SolutionsPacker {
    /// Create a packer that shades solution cells with `highlight`.
    pub fn new(label_font: &str, letter_font: &str, highlight: Color) -> Self {
        Self {
            label_font: label_font.to_string(),
            letter_font: letter_font.to_string(),
            label_size: 10.0,
            gutter: 18.0,
            highlight,
        }
    }

    /// Split the content box into quadrants for the given grid sizes, in
    /// reading order (top-left, top-right, bottom-left, bottom-right).
    ///
    /// Each grid uses `cell = min(quadrant_width, quadrant_height) / n`,
    /// measured after the label strip and gutters are taken out.
    pub fn quadrants(&self, content: Rect, scale: f32, sizes: &[usize]) -> Vec<Quadrant> {
        let gutter = self.gutter * scale;
        let label_height = self.label_size * scale * 1.6;
        let width = ((content.width - gutter) / 2.0).max(0.0);
        let height = ((content.height - gutter) / 2.0).max(0.0);

        sizes
            .iter()
            .take(SOLUTIONS_PER_PAGE)
            .enumerate()
            .map(|(i, &n)| {
                let col = (i % 2) as f32;
                let row = (i / 2) as f32;
                let bounds = Rect::new(
                    content.x + col * (width + gutter),
                    content.y + row * (height + gutter),
                    width,
                    height,
                );
                let label = Rect::new(bounds.x, bounds.y, width, label_height.min(height));
                let area = bounds.inset(label.height, 0.0, 0.0, 0.0);
                let cell_size = area.width.min(area.height) / n.max(1) as f32;
                let side = cell_size * n as f32;
                Quadrant {
                    bounds,
                    label,
                    grid: GridBox {
                        rect: area.centered(side, side),
                        cell_size,
                    },
                }
            })
            .collect()
    }

    /// Draw one solutions page holding up to four entries.
    pub fn render(
        &self,
        entries: &[SolutionEntry<'_>],
        content: Rect,
        scale: f32,
        surface: &mut dyn DrawingSurface,
        ctx: &DrawContext,
    ) {
        if entries.len() > SOLUTIONS_PER_PAGE {
            log::warn!(
                "Solutions page given {} entries, drawing the first {}",
                entries.len(),
                SOLUTIONS_PER_PAGE
            );
        }
        let sizes: Vec<usize> = entries.iter().map(|e| e.puzzle.size()).collect();
        let label_ctx = ctx.with_font(&self.label_font, self.label_size * scale);

        for (entry, quadrant) in entries.iter().zip(self.quadrants(content, scale, &sizes)) {
            let baseline = quadrant.label.y + label_ctx.font.size * ASCENT;
            surface.text(
                entry.label,
                Point::new(quadrant.label.center().x, baseline),
                TextAlign::Center,
                &label_ctx,
            );

            let mask = entry.puzzle.solution_mask();
            let letter_ctx = ctx.with_font(&self.letter_font, quadrant.grid.cell_size * 0.6);
            draw_letter_grid(
                surface,
                &letter_ctx,
                quadrant.grid,
                entry.puzzle,
                Some((&mask, self.highlight)),
            );
        }
    }
}

impl Default for SolutionsPacker {
    fn default() -> Self {
        Self::new("Helvetica-Bold", "Courier-Bold", Color::gray(0.8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Difficulty, GridPlacer, Word};
    use crate::surface::{DrawOp, RecordingSurface};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn content() -> Rect {
        Rect::new(50.0, 50.0, 518.0, 718.0)
    }

    #[test]
    fn test_page_count() {
        assert_eq!(solutions_page_count(1), 1);
        assert_eq!(solutions_page_count(8), 2);
        assert_eq!(solutions_page_count(9), 3);
    }

    #[test]
    fn test_quadrants_in_reading_order() {
        let q = SolutionsPacker::default().quadrants(content(), 1.0, &[10, 10, 10, 10]);
        assert_eq!(q.len(), 4);
        assert_eq!(q[0].bounds.y, q[1].bounds.y);
        assert!(q[1].bounds.x > q[0].bounds.x);
        assert_eq!(q[0].bounds.x, q[2].bounds.x);
        assert!(q[2].bounds.y > q[0].bounds.y);
        for quad in &q {
            assert!(content().contains_rect(&quad.bounds));
            assert!(quad.bounds.contains_rect(&quad.grid.rect));
            assert!(!quad.grid.rect.intersects(&quad.label));
        }
        assert!(!q[0].bounds.intersects(&q[1].bounds));
        assert!(!q[0].bounds.intersects(&q[2].bounds));
    }

    #[test]
    fn test_cell_size_uses_smaller_side() {
        let q = SolutionsPacker::default().quadrants(content(), 1.0, &[10, 20]);
        let width = (518.0 - 18.0) / 2.0;
        assert!((q[0].grid.cell_size - width / 10.0).abs() < 1e-3);
        assert!((q[1].grid.cell_size - width / 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_grid_centered_in_quadrant() {
        let q = SolutionsPacker::default().quadrants(content(), 1.0, &[12]);
        let area_center = q[0].bounds.inset(q[0].label.height, 0.0, 0.0, 0.0).center();
        let grid_center = q[0].grid.rect.center();
        assert!((area_center.x - grid_center.x).abs() < 1e-3);
        assert!((area_center.y - grid_center.y).abs() < 1e-3);
    }

    #[test]
    fn test_render_shades_solution_cells() {
        let puzzle = GridPlacer::with_rng(ChaCha8Rng::seed_from_u64(9)).place(
            &Word::list(&["CAT", "DOG"]),
            8,
            Difficulty::Easy,
        );
        let mask = puzzle.solution_mask();
        let packer = SolutionsPacker::new("Helvetica-Bold", "Courier-Bold", Color::new(0.1, 0.1, 0.5));
        let mut surface = RecordingSurface::new();
        surface.begin_page(612.0, 792.0);
        packer.render(
            &[SolutionEntry {
                label: "#1 Pets (p. 3)",
                puzzle: &puzzle,
            }],
            content(),
            1.0,
            &mut surface,
            &DrawContext::new("Helvetica"),
        );

        let page = &surface.pages()[0];
        assert!(page.has_text("#1 Pets (p. 3)"));
        let shaded = page
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { fill, .. } if *fill == Color::new(0.1, 0.1, 0.5)))
            .count();
        assert_eq!(shaded, mask.len());
        let white_letters = page
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { color, text, .. } if *color == Color::white() && text.len() == 1))
            .count();
        assert_eq!(white_letters, mask.len());
    }
}
