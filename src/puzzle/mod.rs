//! Word-search puzzle data model.
//!
//! A puzzle is an N x N letter grid plus the list of words hidden in it.
//! Grids are produced by [`GridPlacer`] and are immutable afterwards.

mod placer;

pub use placer::GridPlacer;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A word to hide in a grid.
///
/// `text` is expected to be uppercase A-Z only; normalization happens
/// before words reach this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Caller-provided identifier
    pub id: String,
    /// Normalized word text
    pub text: String,
}

impl Word {
    /// Create a new word.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Build a word list from plain strings, numbering ids from 1.
    pub fn list<S: AsRef<str>>(texts: &[S]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::new((i + 1).to_string(), t.as_ref()))
            .collect()
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the word has no letters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Direction a word runs through the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    /// Every direction, in table order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// The (row, column) step taken for each successive letter.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// Puzzle difficulty, which controls the allowed directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Horizontal and vertical words only
    Easy,
    /// Adds top-left to bottom-right diagonals
    Medium,
    /// Adds bottom-left to top-right diagonals
    Hard,
}

impl Difficulty {
    /// All difficulties in book order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Directions a word may take at this difficulty.
    pub fn directions(&self) -> &'static [Direction] {
        match self {
            Difficulty::Easy => &Direction::ALL[..2],
            Difficulty::Medium => &Direction::ALL[..3],
            Difficulty::Hard => &Direction::ALL,
        }
    }

    /// Human-readable name, used on separator pages.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A word together with where it was hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    /// Id of the placed word
    pub id: String,
    /// Text of the placed word
    pub text: String,
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    /// Direction the word runs
    pub direction: Direction,
}

impl WordPlacement {
    /// Grid cells covered by this placement, first letter first.
    ///
    /// Cells that would fall off the top or left edge are returned as `None`
    /// so that callers validating foreign data can detect them.
    pub fn cells(&self) -> impl Iterator<Item = Option<(usize, usize)>> + '_ {
        let (dr, dc) = self.direction.offset();
        (0..self.text.chars().count()).map(move |i| {
            let row = self.row as isize + dr * i as isize;
            let col = self.col as isize + dc * i as isize;
            if row < 0 || col < 0 {
                None
            } else {
                Some((row as usize, col as usize))
            }
        })
    }
}

/// A finished puzzle: a fully populated grid and its hidden words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleData {
    /// Grid letters, `grid[row][col]`
    pub grid: Vec<Vec<char>>,
    /// Words that were hidden, in placement order
    pub words: Vec<WordPlacement>,
    /// Words that could not be hidden
    pub unplaced_words: Vec<String>,
}

impl PuzzleData {
    /// Grid edge length.
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// Letter at a cell, if it is inside the grid.
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// All cells covered by at least one hidden word, in row-major order.
    pub fn solution_mask(&self) -> BTreeSet<(usize, usize)> {
        self.words
            .iter()
            .flat_map(|placement| placement.cells().flatten())
            .collect()
    }

    /// Check every structural invariant of a generated puzzle.
    ///
    /// The grid must be square, every placement must stay in bounds and spell
    /// its word. Crossing placements then agree on their shared letter because
    /// both must match the grid.
    pub fn verify(&self) -> Result<()> {
        let n = self.size();
        if let Some(row) = self.grid.iter().position(|r| r.len() != n) {
            return Err(Error::InvalidPlacement {
                word: String::new(),
                reason: format!("grid row {} has {} cells, expected {}", row, self.grid[row].len(), n),
            });
        }

        for placement in &self.words {
            let invalid = |reason: String| Error::InvalidPlacement {
                word: placement.text.clone(),
                reason,
            };
            for (cell, expected) in placement.cells().zip(placement.text.chars()) {
                let (row, col) = cell.ok_or_else(|| invalid("runs off the grid".to_string()))?;
                let actual = self
                    .letter(row, col)
                    .ok_or_else(|| invalid(format!("cell ({}, {}) is out of bounds", row, col)))?;
                if actual != expected {
                    return Err(invalid(format!(
                        "cell ({}, {}) holds '{}', expected '{}'",
                        row, col, actual, expected
                    )));
                }
            }
        }

        Ok(())
    }
}
