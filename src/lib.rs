// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::new_without_default)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Puzzlebook
//!
//! Word-search puzzle book engine: hides word lists in letter grids and lays
//! the grids out as a paginated, print-ready book.
//!
//! ## Core Features
//!
//! - **Word Placement**: randomized greedy search, longest word first, with
//!   difficulty-dependent directions and an injectable random source
//! - **Page Geometry**: trim size, bleed and recto/verso-mirrored margins
//! - **Puzzle Pages**: title, description, divider, grid and three-column word
//!   list, vertically centered and scaled to the trim size
//! - **Solutions**: four solved grids per page with contrast-aware shading
//! - **Book Sequencing**: front matter, difficulty sections, solutions, parity
//!   filler for duplex printing, back matter
//! - **Page Numbers**: plain, roman, bracketed, dashed, boxed and pill styles,
//!   placed at the outer edge or centered
//!
//! Drawing is delegated to a [`surface::DrawingSurface`]. The crate ships a
//! [`surface::RecordingSurface`] whose output serializes to JSON for an
//! external rasterizer.
//!
//! ## Quick Start
//!
//! ```
//! use puzzlebook::composer::{BookComposer, BookContent, FrontMatter, PuzzleSet};
//! use puzzlebook::config::{BookConfig, LevelMode};
//! use puzzlebook::puzzle::Difficulty;
//! use puzzlebook::surface::RecordingSurface;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let content = BookContent::with_puzzles(vec![
//!     PuzzleSet::new("Pets", &["CAT", "DOG", "HAMSTER"], Difficulty::Easy),
//!     PuzzleSet::new("Jungle", &["TIGER", "PARROT", "JAGUAR"], Difficulty::Hard),
//! ])
//! .front(FrontMatter::Title {
//!     title: "Animal Word Search".into(),
//!     subtitle: None,
//!     author: None,
//! });
//!
//! let config = BookConfig::new()
//!     .with_level_mode(LevelMode::Multi)
//!     .with_print_mode(true);
//! let mut surface = RecordingSurface::new();
//! let report = BookComposer::new(config).compose(&content, &mut surface)?;
//!
//! assert_eq!(report.book_pages % 2, 0);
//! println!("{}", surface.into_document().to_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry primitives
pub mod geometry;

// Word placement
pub mod puzzle;

// Page layout
pub mod layout;

// Drawing abstraction
pub mod surface;

// Book sequencing
pub mod composer;

// Re-exports
pub use composer::{BookComposer, BookContent, BookRequest, CompositionReport, PuzzleSet};
pub use config::BookConfig;
pub use error::{Error, Result};
pub use puzzle::{Difficulty, GridPlacer, PuzzleData, Word};
