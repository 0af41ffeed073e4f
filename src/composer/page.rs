//! Page descriptors and page counting.

use super::matter::{BackMatter, FrontMatter};
use crate::geometry::Rect;
use crate::layout::PageMargins;
use crate::puzzle::Difficulty;

/// What a page shows. Each kind has its own render function.
#[derive(Debug, Clone, PartialEq)]
pub enum PageKind {
    /// Programmatic front matter
    FrontMatter(FrontMatter),
    /// Section divider before a group of same-difficulty puzzles
    DifficultySeparator {
        /// Difficulty of the following puzzles
        difficulty: Difficulty,
        /// Number of puzzles in the section
        puzzles: usize,
    },
    /// One puzzle, by index into the plan's puzzle list
    Puzzle(usize),
    /// Divider before the solutions
    SolutionsSeparator,
    /// Up to four solved puzzles, by index into the plan's puzzle list
    Solutions(Vec<usize>),
    /// Blank page keeping the page count even in print mode
    Filler,
    /// Back matter
    BackMatter(BackMatter),
}

impl PageKind {
    /// Check if this is a separator page.
    pub fn is_separator(&self) -> bool {
        matches!(self, PageKind::DifficultySeparator { .. } | PageKind::SolutionsSeparator)
    }

    /// Short name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            PageKind::FrontMatter(_) => "front-matter",
            PageKind::DifficultySeparator { .. } => "difficulty-separator",
            PageKind::Puzzle(_) => "puzzle",
            PageKind::SolutionsSeparator => "solutions-separator",
            PageKind::Solutions(_) => "solutions",
            PageKind::Filler => "filler",
            PageKind::BackMatter(_) => "back-matter",
        }
    }
}

/// Position of a page in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePosition {
    /// 1-based counter over programmatic pages
    pub internal: usize,
    /// Whether the page is a left-hand (verso) page
    pub is_left_page: bool,
    /// Number shown on the page
    pub display_number: i64,
}

/// Counts programmatic pages and derives side and display number.
///
/// The external front-matter count only shifts recto/verso parity; display
/// numbers come from the internal counter and the start page alone.
///
/// # Examples
///
/// ```
/// use puzzlebook::composer::PageCursor;
///
/// let mut cursor = PageCursor::new(1, 3);
/// let first = cursor.advance();
/// assert_eq!(first.internal, 1);
/// assert!(first.is_left_page);
/// assert_eq!(first.display_number, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    internal: usize,
    external_offset: usize,
    start_page: i64,
}

impl PageCursor {
    /// Create a cursor before the first programmatic page.
    pub fn new(external_offset: usize, start_page: i64) -> Self {
        Self {
            internal: 0,
            external_offset,
            start_page,
        }
    }

    /// Move to the next page and return its position.
    pub fn advance(&mut self) -> PagePosition {
        self.internal += 1;
        PagePosition {
            internal: self.internal,
            is_left_page: (self.internal + self.external_offset) % 2 == 0,
            display_number: self.start_page.saturating_add(self.internal as i64 - 1),
        }
    }

    /// Programmatic pages emitted so far.
    pub fn internal_count(&self) -> usize {
        self.internal
    }

    /// Physical pages so far, external front matter included.
    pub fn book_count(&self) -> usize {
        self.internal + self.external_offset
    }
}

/// A page descriptor produced by the planner.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPage {
    /// What the page shows
    pub kind: PageKind,
    /// Position in the book
    pub position: PagePosition,
    /// Mirrored margins of the page
    pub margins: PageMargins,
    /// Page minus margins
    pub content: Rect,
    /// Whether the page number is drawn
    pub show_number: bool,
}

impl BookPage {
    /// Whether the page is a left-hand (verso) page.
    pub fn is_left_page(&self) -> bool {
        self.position.is_left_page
    }

    /// Number shown on the page.
    pub fn display_number(&self) -> i64 {
        self.position.display_number
    }
}
