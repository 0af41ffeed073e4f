//! Page layout for puzzle books.
//!
//! This module turns a page configuration into concrete positions:
//! - Trim, bleed and recto/verso-mirrored margins ([`PageGeometry`])
//! - Page number text and placement ([`PageNumberFormatter`])
//! - Puzzle page stacking and grid sizing ([`PageRenderer`])
//! - 2x2 solutions pages ([`SolutionsPacker`])
//!
//! All coordinates are PDF points with the origin at the top-left corner of
//! the page (bleed included) and `y` growing downwards.

pub mod page_geometry;
pub mod page_number;
pub mod puzzle_page;
pub mod solutions;
pub mod text;

// Re-export main types
pub use page_geometry::{
    Bleed, Margins, PageDimensions, PageGeometry, PageMargins, PageSpec, TrimSize, POINTS_PER_INCH,
};
pub use page_number::{
    to_roman, FormattedPageNumber, NumberFrame, NumberPlacement, PageNumberFormatter, PageNumberStyle,
};
pub use puzzle_page::{LayoutOrder, PageRenderer, PuzzlePageLayout, PuzzlePageStyle};
pub use solutions::{solutions_page_count, SolutionEntry, SolutionsPacker, SOLUTIONS_PER_PAGE};
pub use text::{scale_factor, wrap, VerticalAlign};
