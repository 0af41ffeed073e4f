//! Configuration for book composition.

use crate::error::{Error, Result};
use crate::layout::{
    LayoutOrder, NumberPlacement, PageNumberStyle, PageSpec, PuzzlePageStyle, VerticalAlign,
};
use crate::puzzle::Difficulty;
use crate::surface::{Color, DEFAULT_FONT};
use serde::{Deserialize, Serialize};

/// How puzzles are grouped in the book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevelMode {
    /// One undifferentiated sequence of puzzles, no separators
    #[default]
    Single,
    /// Easy, Medium and Hard sections, each behind a separator page
    Multi,
}

/// Default grid edge length per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSizes {
    /// Easy grid size
    pub easy: usize,
    /// Medium grid size
    pub medium: usize,
    /// Hard grid size
    pub hard: usize,
}

impl GridSizes {
    /// Grid size for a difficulty.
    pub fn for_difficulty(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for GridSizes {
    fn default() -> Self {
        Self {
            easy: 12,
            medium: 15,
            hard: 18,
        }
    }
}

/// Font names used by the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Body text, word lists and page numbers
    pub body: String,
    /// Titles and headings
    pub title: String,
    /// Grid letters
    pub letters: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            body: DEFAULT_FONT.to_string(),
            title: "Helvetica-Bold".to_string(),
            letters: "Courier-Bold".to_string(),
        }
    }
}

/// Book composition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Trim, bleed and margins
    pub page: PageSpec,

    /// Print mode: apply bleed and keep the page count even.
    pub print_mode: bool,

    /// Single sequence or difficulty sections.
    pub level_mode: LevelMode,

    /// Display number of the first programmatic page.
    pub start_page: i64,

    /// Pages supplied outside this crate that precede the book (offset only).
    pub external_front_matter: usize,

    /// Page number style
    pub number_style: PageNumberStyle,

    /// Page number placement
    pub number_placement: NumberPlacement,

    /// Page number font size
    pub number_size: f32,

    /// Draw page numbers on separator pages too.
    pub number_separators: bool,

    /// Grid/word list order on puzzle pages
    pub layout_order: LayoutOrder,

    /// Vertical alignment of puzzle page content
    pub puzzle_align: VerticalAlign,

    /// Grid size per difficulty, for puzzle sets without their own
    pub grid_sizes: GridSizes,

    /// Fonts
    pub fonts: Fonts,

    /// Fill color of solution cells
    pub solution_highlight: Color,

    /// Name of the background decorator, if any.
    pub background: Option<String>,

    /// Seed for reproducible grids. Unseeded when `None`.
    pub seed: Option<u64>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BookConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page: PageSpec::default(),
            print_mode: false,
            level_mode: LevelMode::Single,
            start_page: 1,
            external_front_matter: 0,
            number_style: PageNumberStyle::Plain,
            number_placement: NumberPlacement::BottomOuter,
            number_size: 10.0,
            number_separators: false,
            layout_order: LayoutOrder::GridFirst,
            puzzle_align: VerticalAlign::Center,
            grid_sizes: GridSizes::default(),
            fonts: Fonts::default(),
            solution_highlight: Color::gray(0.8),
            background: None,
            seed: None,
        }
    }

    /// Set the page spec.
    pub fn with_page(mut self, page: PageSpec) -> Self {
        self.page = page;
        self
    }

    /// Enable print mode (bleed and even page count).
    pub fn with_print_mode(mut self, enable: bool) -> Self {
        self.print_mode = enable;
        self
    }

    /// Set the level mode.
    pub fn with_level_mode(mut self, mode: LevelMode) -> Self {
        self.level_mode = mode;
        self
    }

    /// Set the display number of the first programmatic page.
    pub fn with_start_page(mut self, start: i64) -> Self {
        self.start_page = start;
        self
    }

    /// Set the number of externally supplied front-matter pages.
    pub fn with_external_front_matter(mut self, pages: usize) -> Self {
        self.external_front_matter = pages;
        self
    }

    /// Set the page number style and placement.
    pub fn with_page_numbers(mut self, style: PageNumberStyle, placement: NumberPlacement) -> Self {
        self.number_style = style;
        self.number_placement = placement;
        self
    }

    /// Draw page numbers on separator pages.
    pub fn with_number_separators(mut self, enable: bool) -> Self {
        self.number_separators = enable;
        self
    }

    /// Set the grid/word list order.
    pub fn with_layout_order(mut self, order: LayoutOrder) -> Self {
        self.layout_order = order;
        self
    }

    /// Set the vertical alignment of puzzle page content.
    pub fn with_puzzle_align(mut self, align: VerticalAlign) -> Self {
        self.puzzle_align = align;
        self
    }

    /// Set the default grid size for one difficulty.
    pub fn with_grid_size(mut self, difficulty: Difficulty, size: usize) -> Self {
        match difficulty {
            Difficulty::Easy => self.grid_sizes.easy = size,
            Difficulty::Medium => self.grid_sizes.medium = size,
            Difficulty::Hard => self.grid_sizes.hard = size,
        }
        self
    }

    /// Set the fonts.
    pub fn with_fonts(mut self, fonts: Fonts) -> Self {
        self.fonts = fonts;
        self
    }

    /// Set the solution highlight color.
    pub fn with_solution_highlight(mut self, color: Color) -> Self {
        self.solution_highlight = color;
        self
    }

    /// Use a named background decorator.
    pub fn with_background(mut self, name: impl Into<String>) -> Self {
        self.background = Some(name.into());
        self
    }

    /// Seed the grid generator for reproducible books.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Style for puzzle pages derived from this configuration.
    pub fn puzzle_style(&self) -> PuzzlePageStyle {
        PuzzlePageStyle {
            title_font: self.fonts.title.clone(),
            body_font: self.fonts.body.clone(),
            letter_font: self.fonts.letters.clone(),
            layout_order: self.layout_order,
            align: self.puzzle_align,
            ..PuzzlePageStyle::default()
        }
    }

    /// Reject configurations that cannot produce a book.
    pub fn validate(&self) -> Result<()> {
        self.page.validate()?;
        if self.number_size <= 0.0 {
            return Err(Error::InvalidPageSpec {
                reason: "page number size must be positive".to_string(),
            });
        }
        if let Some(difficulty) = Difficulty::ALL
            .into_iter()
            .find(|d| self.grid_sizes.for_difficulty(*d) == 0)
        {
            return Err(Error::InvalidPageSpec {
                reason: format!("{} grid size must be at least 1", difficulty.label()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Margins, TrimSize};

    #[test]
    fn test_defaults() {
        let config = BookConfig::default();
        assert_eq!(config.start_page, 1);
        assert_eq!(config.level_mode, LevelMode::Single);
        assert!(!config.print_mode);
        assert_eq!(config.grid_sizes.for_difficulty(Difficulty::Hard), 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BookConfig::new()
            .with_print_mode(true)
            .with_level_mode(LevelMode::Multi)
            .with_start_page(5)
            .with_external_front_matter(3)
            .with_grid_size(Difficulty::Medium, 14)
            .with_background("dots")
            .with_seed(42);
        assert!(config.print_mode);
        assert_eq!(config.level_mode, LevelMode::Multi);
        assert_eq!(config.start_page, 5);
        assert_eq!(config.external_front_matter, 3);
        assert_eq!(config.grid_sizes.medium, 14);
        assert_eq!(config.background.as_deref(), Some("dots"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_bad_page() {
        let config = BookConfig::new()
            .with_page(PageSpec::from_trim(TrimSize::Digest).with_margins(Margins::uniform(400.0)));
        assert!(matches!(config.validate(), Err(Error::InvalidPageSpec { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_grid() {
        let config = BookConfig::new().with_grid_size(Difficulty::Easy, 0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Easy"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BookConfig = serde_json::from_str(r#"{"print_mode": true, "level_mode": "multi"}"#).unwrap();
        assert!(config.print_mode);
        assert_eq!(config.level_mode, LevelMode::Multi);
        assert_eq!(config.start_page, 1);
        assert_eq!(config.fonts, Fonts::default());
    }

    #[test]
    fn test_puzzle_style_follows_config() {
        let style = BookConfig::new()
            .with_layout_order(LayoutOrder::WordsFirst)
            .with_puzzle_align(VerticalAlign::Bottom)
            .puzzle_style();
        assert_eq!(style.layout_order, LayoutOrder::WordsFirst);
        assert_eq!(style.align, VerticalAlign::Bottom);
        assert_eq!(style.title_font, "Helvetica-Bold");
    }
}
