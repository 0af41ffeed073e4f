//! Book composition: page sequencing and rendering.
//!
//! Composition runs in two phases. [`BookComposer::plan`] generates the grids
//! and lays out the page sequence without drawing anything:
//!
//! ```text
//! [front matter] → [Easy sep → Easy puzzles] → [Medium sep → ...] → [Hard sep → ...]
//!                → [Solutions sep] → [Solutions, 4 per page] → [filler?] → [back matter]
//! ```
//!
//! Difficulty separators only appear in [`LevelMode::Multi`], and only for
//! difficulties with at least one puzzle. [`BookComposer::compose`] then
//! draws every planned page in order on a [`DrawingSurface`].
//!
//! Recto/verso parity counts the externally supplied front matter; display
//! numbers do not. See [`PageCursor`].

pub mod decorator;
pub mod matter;
pub mod page;
pub mod request;

pub use decorator::{BackgroundDecorator, DecoratorRegistry, ImageBackground, SolidBackground};
pub use matter::{BackMatter, FrontMatter, MatterRenderer, DEFAULT_INSTRUCTIONS};
pub use page::{BookPage, PageCursor, PageKind, PagePosition};
pub use request::{BookContent, BookRequest, PuzzleSet};

use crate::config::{BookConfig, Fonts, LevelMode};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::{
    scale_factor, NumberFrame, PageDimensions, PageGeometry, PageNumberFormatter, PageRenderer, SolutionEntry,
    SolutionsPacker, SOLUTIONS_PER_PAGE,
};
use crate::puzzle::{Difficulty, GridPlacer, PuzzleData};
use crate::surface::{
    BuiltinResources, Color, DrawContext, DrawingSurface, Paint, ResourceProvider, DEFAULT_FONT,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Minimum number of usable words for a puzzle set.
pub const MIN_WORDS: usize = 2;

/// Why a puzzle set was left out of the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum SkipReason {
    /// Fewer than two usable words
    TooFewWords {
        /// Usable words in the set
        usable: usize,
    },
    /// Generation produced no usable grid
    GenerationFailed,
}

/// A puzzle set that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSet {
    /// Position of the set in the input
    pub index: usize,
    /// Title of the set
    pub title: String,
    /// Difficulty of the set
    pub difficulty: Difficulty,
    /// Why it was skipped
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Words of one puzzle that could not be hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplacedWords {
    /// Puzzle number in the book
    pub puzzle: usize,
    /// Puzzle title
    pub title: String,
    /// The words left out
    pub words: Vec<String>,
}

/// What happened during composition, for the caller to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionReport {
    /// Programmatic pages emitted
    pub pages: usize,
    /// Physical pages including external front matter
    pub book_pages: usize,
    /// Puzzles in the book
    pub puzzles: usize,
    /// Whether a parity filler page was inserted
    pub parity_filler: bool,
    /// Skipped puzzle sets
    pub skipped: Vec<SkippedSet>,
    /// Per-puzzle unplaced words
    pub unplaced: Vec<UnplacedWords>,
}

impl CompositionReport {
    /// Total number of words that could not be hidden.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.iter().map(|u| u.words.len()).sum()
    }
}

/// A generated puzzle and where it lands in the book.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    /// Sequential number, from 1, in book order
    pub number: usize,
    /// Title
    pub title: String,
    /// Description
    pub description: Option<String>,
    /// Difficulty
    pub difficulty: Difficulty,
    /// The grid
    pub data: PuzzleData,
    /// Display number of the puzzle's page
    pub page_number: i64,
}

impl GeneratedPuzzle {
    /// Heading drawn on the puzzle page.
    pub fn heading(&self) -> String {
        format!("#{} {}", self.number, self.title)
    }

    /// Label drawn above the solution grid.
    pub fn solution_label(&self) -> String {
        format!("#{} {} (p. {})", self.number, self.title, self.page_number)
    }
}

/// The full page sequence of a book, before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPlan {
    /// Pages in order
    pub pages: Vec<BookPage>,
    /// Puzzles in book order; page kinds index into this list
    pub puzzles: Vec<GeneratedPuzzle>,
    /// Composition report
    pub report: CompositionReport,
}

impl BookPlan {
    /// Page kinds in order.
    pub fn kinds(&self) -> Vec<&PageKind> {
        self.pages.iter().map(|p| &p.kind).collect()
    }
}

/// Top-level book sequencer.
///
/// # Example
///
/// ```
/// use puzzlebook::composer::{BookComposer, BookContent, PuzzleSet};
/// use puzzlebook::config::BookConfig;
/// use puzzlebook::puzzle::Difficulty;
/// use puzzlebook::surface::RecordingSurface;
///
/// let content = BookContent::with_puzzles(vec![
///     PuzzleSet::new("Pets", &["CAT", "DOG"], Difficulty::Easy).with_grid_size(10),
/// ]);
/// let mut composer = BookComposer::new(BookConfig::new().with_seed(1));
/// let mut surface = RecordingSurface::new();
/// let report = composer.compose(&content, &mut surface).unwrap();
/// assert_eq!(report.pages, 3);
/// assert_eq!(surface.pages().len(), 3);
/// ```
pub struct BookComposer {
    config: BookConfig,
    resources: Box<dyn ResourceProvider>,
    decorators: DecoratorRegistry,
}

impl BookComposer {
    /// Create a composer with Base-14 fonts and the default decorators.
    pub fn new(config: BookConfig) -> Self {
        Self {
            config,
            resources: Box::new(BuiltinResources),
            decorators: DecoratorRegistry::default(),
        }
    }

    /// Use a different resource provider.
    pub fn with_resources(mut self, resources: Box<dyn ResourceProvider>) -> Self {
        self.resources = resources;
        self
    }

    /// Use a different decorator registry.
    pub fn with_decorators(mut self, decorators: DecoratorRegistry) -> Self {
        self.decorators = decorators;
        self
    }

    /// Page geometry; bleed applies in print mode only.
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.config.page, self.config.print_mode)
    }

    /// Generate all grids and build the page sequence.
    ///
    /// Fails only on an invalid configuration or when no puzzle set survives.
    pub fn plan(&self, content: &BookContent) -> Result<BookPlan> {
        self.config.validate()?;

        let (mut puzzles, skipped) = match self.config.seed {
            Some(seed) => self.generate(content, &mut GridPlacer::with_rng(ChaCha8Rng::seed_from_u64(seed))),
            None => self.generate(content, &mut GridPlacer::new()),
        };
        if puzzles.is_empty() {
            return Err(Error::NoUsablePuzzles {
                skipped: skipped.len(),
            });
        }

        if self.config.level_mode == LevelMode::Multi {
            // Stable, so input order is kept within a difficulty
            puzzles.sort_by_key(|p| p.difficulty);
        }
        for (i, puzzle) in puzzles.iter_mut().enumerate() {
            puzzle.number = i + 1;
        }

        let mut planner = Planner::new(&self.config, self.geometry());

        if !content.front_matter.is_empty() {
            log::info!("Front matter: {} page(s)", content.front_matter.len());
        }
        for matter in &content.front_matter {
            planner.push(PageKind::FrontMatter(matter.clone()));
        }

        match self.config.level_mode {
            LevelMode::Single => {
                log::info!("Puzzles: {} page(s)", puzzles.len());
                for (i, puzzle) in puzzles.iter_mut().enumerate() {
                    puzzle.page_number = planner.push(PageKind::Puzzle(i)).display_number;
                }
            },
            LevelMode::Multi => {
                for difficulty in Difficulty::ALL {
                    let count = puzzles.iter().filter(|p| p.difficulty == difficulty).count();
                    if count == 0 {
                        continue;
                    }
                    log::info!("{} section: {} puzzle(s)", difficulty.label(), count);
                    planner.push(PageKind::DifficultySeparator {
                        difficulty,
                        puzzles: count,
                    });
                    for (i, puzzle) in puzzles.iter_mut().enumerate() {
                        if puzzle.difficulty == difficulty {
                            puzzle.page_number = planner.push(PageKind::Puzzle(i)).display_number;
                        }
                    }
                }
            },
        }

        log::info!("Solutions: {} puzzle(s)", puzzles.len());
        planner.push(PageKind::SolutionsSeparator);
        let indices: Vec<usize> = (0..puzzles.len()).collect();
        for chunk in indices.chunks(SOLUTIONS_PER_PAGE) {
            planner.push(PageKind::Solutions(chunk.to_vec()));
        }

        let parity_filler =
            self.config.print_mode && (planner.cursor.book_count() + content.back_matter.len()) % 2 == 1;
        if parity_filler {
            log::debug!("Inserting filler page to keep the page count even");
            planner.push(PageKind::Filler);
        }

        for matter in &content.back_matter {
            planner.push(PageKind::BackMatter(matter.clone()));
        }

        let unplaced = puzzles
            .iter()
            .filter(|p| !p.data.unplaced_words.is_empty())
            .map(|p| UnplacedWords {
                puzzle: p.number,
                title: p.title.clone(),
                words: p.data.unplaced_words.clone(),
            })
            .collect();

        let report = CompositionReport {
            pages: planner.cursor.internal_count(),
            book_pages: planner.cursor.book_count(),
            puzzles: puzzles.len(),
            parity_filler,
            skipped,
            unplaced,
        };

        Ok(BookPlan {
            pages: planner.pages,
            puzzles,
            report,
        })
    }

    fn generate<R: Rng>(
        &self,
        content: &BookContent,
        placer: &mut GridPlacer<R>,
    ) -> (Vec<GeneratedPuzzle>, Vec<SkippedSet>) {
        let mut puzzles = Vec::new();
        let mut skipped = Vec::new();

        for (index, set) in content.puzzles.iter().enumerate() {
            let skip = |reason: SkipReason| {
                log::warn!("Skipping puzzle set '{}': {:?}", set.title, reason);
                SkippedSet {
                    index,
                    title: set.title.clone(),
                    difficulty: set.difficulty,
                    reason,
                }
            };

            let words = set.usable_words();
            if words.len() < MIN_WORDS {
                skipped.push(skip(SkipReason::TooFewWords { usable: words.len() }));
                continue;
            }

            let size = set
                .grid_size
                .unwrap_or_else(|| self.config.grid_sizes.for_difficulty(set.difficulty));
            let data = placer.place(&words, size, set.difficulty);

            if data.words.is_empty() {
                skipped.push(skip(SkipReason::GenerationFailed));
                continue;
            }
            if let Err(e) = data.verify() {
                log::warn!("Generated grid for '{}' is inconsistent: {}", set.title, e);
                skipped.push(skip(SkipReason::GenerationFailed));
                continue;
            }
            if !data.unplaced_words.is_empty() {
                log::debug!(
                    "'{}': {} word(s) could not be placed",
                    set.title,
                    data.unplaced_words.len()
                );
            }

            puzzles.push(GeneratedPuzzle {
                number: 0,
                title: set.title.clone(),
                description: set.description.clone(),
                difficulty: set.difficulty,
                data,
                page_number: 0,
            });
        }

        (puzzles, skipped)
    }

    /// Plan the book and draw every page on `surface`.
    pub fn compose(&mut self, content: &BookContent, surface: &mut dyn DrawingSurface) -> Result<CompositionReport> {
        let plan = self.plan(content)?;

        let fonts = self.resolve_fonts();
        let geometry = self.geometry();
        let size = geometry.page_size();
        let full_page = Rect::new(0.0, 0.0, size.width, size.height);
        let scale = scale_factor(geometry.trim_area());

        let mut style = self.config.puzzle_style();
        style.title_font = fonts.title.clone();
        style.body_font = fonts.body.clone();
        style.letter_font = fonts.letters.clone();
        let renderer = PageRenderer::new(style);
        let packer = SolutionsPacker::new(&fonts.title, &fonts.letters, self.config.solution_highlight);
        let matter = MatterRenderer::new(&fonts, scale);
        let numbers = PageNumberFormatter::new(
            self.config.number_style,
            self.config.number_placement,
            self.config.number_size * scale,
        );

        let mut ctx = DrawContext::new(fonts.body.clone());
        for page in &plan.pages {
            ctx.reset();
            surface.begin_page(size.width, size.height);
            log::debug!(
                "Page {} ({}): {}",
                page.position.internal,
                if page.is_left_page() { "verso" } else { "recto" },
                page.kind.name()
            );

            if let Some(name) = &self.config.background {
                self.decorators
                    .decorate(name, full_page, surface, self.resources.as_mut(), &ctx);
            }

            match &page.kind {
                PageKind::FrontMatter(m) => matter.front(m, page.content, surface, &ctx),
                PageKind::DifficultySeparator { difficulty, puzzles } => {
                    let subtitle = match puzzles {
                        1 => "1 puzzle".to_string(),
                        n => format!("{} puzzles", n),
                    };
                    matter.separator(difficulty.label(), Some(&subtitle), page.content, surface, &ctx);
                },
                PageKind::Puzzle(i) => match plan.puzzles.get(*i) {
                    Some(puzzle) => {
                        let layout = renderer.layout(
                            page.content,
                            scale,
                            &puzzle.heading(),
                            puzzle.description.as_deref(),
                            &puzzle.data,
                        );
                        renderer.render(&layout, &puzzle.data, surface, &ctx);
                    },
                    None => log::warn!("Puzzle page refers to missing puzzle {}", i),
                },
                PageKind::SolutionsSeparator => {
                    matter.separator("Solutions", None, page.content, surface, &ctx)
                },
                PageKind::Solutions(indices) => {
                    let labelled: Vec<(String, &PuzzleData)> = indices
                        .iter()
                        .filter_map(|i| plan.puzzles.get(*i))
                        .map(|p| (p.solution_label(), &p.data))
                        .collect();
                    let entries: Vec<SolutionEntry<'_>> = labelled
                        .iter()
                        .map(|(label, puzzle)| SolutionEntry { label, puzzle })
                        .collect();
                    packer.render(&entries, page.content, scale, surface, &ctx);
                },
                PageKind::Filler => {},
                PageKind::BackMatter(m) => matter.back(m, page.content, surface, &ctx),
            }

            if page.show_number {
                draw_page_number(&numbers, page, size, &fonts.body, surface, &ctx);
            }
        }

        log::info!(
            "Composed {} page(s), {} puzzle(s), {} skipped",
            plan.report.pages,
            plan.report.puzzles,
            plan.report.skipped.len()
        );
        Ok(plan.report)
    }

    /// Load the configured fonts, substituting the default font for any
    /// that fail.
    fn resolve_fonts(&mut self) -> Fonts {
        let mut resolve = |name: &str| match self.resources.load_font(name) {
            Ok(()) => name.to_string(),
            Err(e) => {
                log::warn!("Font '{}' unavailable, using {}: {}", name, DEFAULT_FONT, e);
                DEFAULT_FONT.to_string()
            },
        };
        let fonts = &self.config.fonts;
        Fonts {
            body: resolve(&fonts.body),
            title: resolve(&fonts.title),
            letters: resolve(&fonts.letters),
        }
    }
}

impl std::fmt::Debug for BookComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookComposer")
            .field("config", &self.config)
            .field("decorators", &self.decorators)
            .finish_non_exhaustive()
    }
}

/// Page sequencing state.
struct Planner<'a> {
    config: &'a BookConfig,
    geometry: PageGeometry,
    cursor: PageCursor,
    pages: Vec<BookPage>,
}

impl<'a> Planner<'a> {
    fn new(config: &'a BookConfig, geometry: PageGeometry) -> Self {
        Self {
            config,
            geometry,
            cursor: PageCursor::new(config.external_front_matter, config.start_page),
            pages: Vec::new(),
        }
    }

    fn push(&mut self, kind: PageKind) -> PagePosition {
        let position = self.cursor.advance();
        let show_number = match &kind {
            PageKind::FrontMatter(m) => m.is_numbered(),
            k if k.is_separator() => self.config.number_separators,
            _ => true,
        };
        self.pages.push(BookPage {
            kind,
            position,
            margins: self.geometry.mirrored_margins(position.is_left_page),
            content: self.geometry.content_box(position.is_left_page),
            show_number,
        });
        position
    }
}

fn draw_page_number(
    numbers: &PageNumberFormatter,
    page: &BookPage,
    size: PageDimensions,
    font: &str,
    surface: &mut dyn DrawingSurface,
    ctx: &DrawContext,
) {
    let number = numbers.format(page.display_number(), page.is_left_page(), size, page.margins);
    if number.text.is_empty() {
        return;
    }
    if let (Some(frame), Some(rect)) = (number.frame, number.frame_rect) {
        let radius = match frame {
            NumberFrame::Box => rect.height * 0.15,
            NumberFrame::Pill => rect.height / 2.0,
        };
        surface.rounded_rect(rect, radius, Paint::Stroke, &ctx.with_stroke(Color::black(), 0.75));
    }
    surface.text(&number.text, number.anchor, number.align, &ctx.with_font(font, numbers.font_size()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn set(title: &str, words: &[&str], difficulty: Difficulty) -> PuzzleSet {
        PuzzleSet::new(title, words, difficulty).with_grid_size(10)
    }

    fn composer(config: BookConfig) -> BookComposer {
        BookComposer::new(config.with_seed(11))
    }

    #[test]
    fn test_single_level_cat_dog() {
        let content = BookContent::with_puzzles(vec![set("Pets", &["CAT", "DOG"], Difficulty::Easy)]);
        let plan = composer(BookConfig::new()).plan(&content).unwrap();
        assert_eq!(
            plan.kinds(),
            vec![
                &PageKind::Puzzle(0),
                &PageKind::SolutionsSeparator,
                &PageKind::Solutions(vec![0])
            ]
        );
        assert!(!plan.report.parity_filler);
    }

    #[test]
    fn test_print_mode_adds_filler() {
        let content = BookContent::with_puzzles(vec![set("Pets", &["CAT", "DOG"], Difficulty::Easy)]);
        let plan = composer(BookConfig::new().with_print_mode(true)).plan(&content).unwrap();
        assert_eq!(plan.pages.len(), 4);
        assert_eq!(plan.pages[3].kind, PageKind::Filler);
        assert!(plan.report.parity_filler);
    }

    #[test]
    fn test_filler_goes_before_back_matter() {
        let content = BookContent::with_puzzles(vec![set("Pets", &["CAT", "DOG"], Difficulty::Easy)])
            .back(BackMatter::Notes { heading: None })
            .back(BackMatter::About { body: "Hi".into() });
        let plan = composer(BookConfig::new().with_print_mode(true)).plan(&content).unwrap();
        assert_eq!(plan.pages.len(), 6);
        assert_eq!(plan.pages[3].kind, PageKind::Filler);
        assert!(matches!(plan.pages[4].kind, PageKind::BackMatter(_)));
    }

    #[test]
    fn test_multi_level_order() {
        let content = BookContent::with_puzzles(vec![
            set("Hard one", &["LION", "TIGER"], Difficulty::Hard),
            set("Easy one", &["CAT", "DOG"], Difficulty::Easy),
            set("Easy two", &["COW", "PIG"], Difficulty::Easy),
        ]);
        let plan = composer(BookConfig::new().with_level_mode(LevelMode::Multi))
            .plan(&content)
            .unwrap();
        let names: Vec<&str> = plan.kinds().iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec![
                "difficulty-separator",
                "puzzle",
                "puzzle",
                "difficulty-separator",
                "puzzle",
                "solutions-separator",
                "solutions"
            ]
        );
        assert_eq!(
            plan.pages[3].kind,
            PageKind::DifficultySeparator {
                difficulty: Difficulty::Hard,
                puzzles: 1
            }
        );
        let titles: Vec<&str> = plan.puzzles.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Easy one", "Easy two", "Hard one"]);
        assert_eq!(plan.puzzles[2].number, 3);
    }

    #[test]
    fn test_skips_are_reported() {
        let content = BookContent::with_puzzles(vec![
            set("Lonely", &["CAT"], Difficulty::Easy),
            set("Too long", &["ELEPHANT", "GIRAFFE"], Difficulty::Easy).with_grid_size(5),
            set("Pets", &["CAT", "DOG"], Difficulty::Easy),
        ]);
        let plan = composer(BookConfig::new()).plan(&content).unwrap();
        assert_eq!(plan.report.puzzles, 1);
        assert_eq!(plan.report.skipped.len(), 2);
        assert_eq!(plan.report.skipped[0].reason, SkipReason::TooFewWords { usable: 1 });
        assert_eq!(plan.report.skipped[1].reason, SkipReason::GenerationFailed);
        assert_eq!(plan.report.skipped[1].index, 1);
    }

    #[test]
    fn test_no_usable_puzzles() {
        let content = BookContent::with_puzzles(vec![set("Lonely", &["CAT"], Difficulty::Easy)]);
        let err = composer(BookConfig::new()).plan(&content).unwrap_err();
        assert!(matches!(err, Error::NoUsablePuzzles { skipped: 1 }));
    }

    #[test]
    fn test_page_numbers_suppressed_on_title_and_separators() {
        let content = BookContent::with_puzzles(vec![set("Pets", &["CAT", "DOG"], Difficulty::Easy)])
            .front(FrontMatter::Title {
                title: "Book".into(),
                subtitle: None,
                author: None,
            })
            .front(FrontMatter::Instructions { text: None });
        let plan = composer(BookConfig::new()).plan(&content).unwrap();
        let shown: Vec<bool> = plan.pages.iter().map(|p| p.show_number).collect();
        assert_eq!(shown, vec![false, true, true, false, true]);

        let numbered = composer(BookConfig::new().with_number_separators(true))
            .plan(&content)
            .unwrap();
        assert!(numbered.pages[3].show_number);
    }

    #[test]
    fn test_solution_labels_carry_page_numbers() {
        let content = BookContent::with_puzzles(vec![
            set("Pets", &["CAT", "DOG"], Difficulty::Easy),
            set("Farm", &["COW", "PIG"], Difficulty::Easy),
        ])
        .front(FrontMatter::Instructions { text: None });
        let plan = composer(BookConfig::new().with_start_page(3)).plan(&content).unwrap();
        assert_eq!(plan.puzzles[0].page_number, 4);
        assert_eq!(plan.puzzles[1].solution_label(), "#2 Farm (p. 5)");
    }

    #[test]
    fn test_compose_draws_every_page() {
        let content = BookContent::with_puzzles(vec![set("Pets", &["CAT", "DOG"], Difficulty::Easy)])
            .front(FrontMatter::Title {
                title: "Book".into(),
                subtitle: None,
                author: None,
            });
        let mut composer = composer(BookConfig::new().with_print_mode(true));
        let mut surface = RecordingSurface::new();
        let report = composer.compose(&content, &mut surface).unwrap();
        assert_eq!(report.pages, 4);
        let pages = surface.pages();
        assert_eq!(pages.len(), 4);
        assert!(pages[0].has_text("Book"));
        assert!(!pages[0].has_text("1"));
        assert!(pages[1].has_text("#1 Pets"));
        assert!(pages[1].has_text("2"));
        assert!(pages[2].has_text("Solutions"));
        assert!(pages[3].has_text("#1 Pets (p. 2)"));
        assert!(pages[3].has_text("4"));
    }

    #[test]
    fn test_missing_font_falls_back() {
        let config = BookConfig::new().with_fonts(Fonts {
            body: "Comic Neue".into(),
            ..Fonts::default()
        });
        let mut composer = composer(config);
        let mut surface = RecordingSurface::new();
        composer
            .compose(
                &BookContent::with_puzzles(vec![set("Pets", &["CAT", "DOG"], Difficulty::Easy)]),
                &mut surface,
            )
            .unwrap();
        let fonts: Vec<&str> = surface.pages()[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                crate::surface::DrawOp::Text { font, .. } => Some(font.as_str()),
                _ => None,
            })
            .collect();
        assert!(!fonts.contains(&"Comic Neue"));
        assert!(fonts.contains(&DEFAULT_FONT));
    }
}
