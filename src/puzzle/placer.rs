//! Randomized greedy word placement.
//!
//! Words are placed longest-first. Each word scans every start cell and every
//! allowed direction in shuffled order and takes the first fit; there is no
//! backtracking across words, so the search always terminates after at most
//! N² x 4 attempts per word.

use super::{Difficulty, Direction, PuzzleData, Word, WordPlacement};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds puzzle grids from word lists.
///
/// The random source is injectable so tests and reproducible books can use a
/// seeded generator.
///
/// # Example
///
/// ```
/// use puzzlebook::puzzle::{Difficulty, GridPlacer, Word};
///
/// let words = Word::list(&["CAT", "DOG"]);
/// let puzzle = GridPlacer::new().place(&words, 10, Difficulty::Easy);
/// assert_eq!(puzzle.size(), 10);
/// assert_eq!(puzzle.words.len(), 2);
/// ```
#[derive(Debug)]
pub struct GridPlacer<R = ThreadRng> {
    rng: R,
}

impl GridPlacer<ThreadRng> {
    /// Create a placer backed by the thread-local generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for GridPlacer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GridPlacer<R> {
    /// Create a placer using the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Place `words` into a `size` x `size` grid.
    ///
    /// Never fails: words that cannot be placed are reported in
    /// [`PuzzleData::unplaced_words`]. Remaining cells are filled with
    /// uniformly random letters A-Z.
    pub fn place(&mut self, words: &[Word], size: usize, difficulty: Difficulty) -> PuzzleData {
        let mut grid: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
        let mut placed = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        let mut ordered: Vec<&Word> = words.iter().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        for word in ordered {
            match self.place_word(&mut grid, word, difficulty) {
                Some(placement) => placed.push(placement),
                None => {
                    log::debug!("Could not place '{}' in {}x{} grid", word.text, size, size);
                    unplaced.push(word.text.clone());
                },
            }
        }

        let grid: Vec<Vec<char>> = grid
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(|| self.random_letter()))
                    .collect::<Vec<char>>()
            })
            .collect();

        PuzzleData {
            grid,
            words: placed,
            unplaced_words: unplaced,
        }
    }

    fn place_word(
        &mut self,
        grid: &mut [Vec<Option<char>>],
        word: &Word,
        difficulty: Difficulty,
    ) -> Option<WordPlacement> {
        let size = grid.len();
        let letters: Vec<char> = word.text.chars().collect();
        if letters.len() > size {
            return None;
        }

        let mut directions: Vec<Direction> = difficulty.directions().to_vec();
        directions.shuffle(&mut self.rng);

        let mut starts: Vec<(usize, usize)> = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .collect();
        starts.shuffle(&mut self.rng);

        for &(row, col) in &starts {
            for &direction in &directions {
                if fits(grid, &letters, row, col, direction) {
                    let (dr, dc) = direction.offset();
                    for (i, &letter) in letters.iter().enumerate() {
                        let r = (row as isize + dr * i as isize) as usize;
                        let c = (col as isize + dc * i as isize) as usize;
                        grid[r][c] = Some(letter);
                    }
                    return Some(WordPlacement {
                        id: word.id.clone(),
                        text: word.text.clone(),
                        row,
                        col,
                        direction,
                    });
                }
            }
        }
        None
    }

    fn random_letter(&mut self) -> char {
        (b'A' + self.rng.random_range(0..26u8)) as char
    }
}

/// Check whether `letters` can start at (`row`, `col`) running in `direction`.
///
/// Every cell must be inside the grid and either empty or already holding the
/// same letter.
fn fits(
    grid: &[Vec<Option<char>>],
    letters: &[char],
    row: usize,
    col: usize,
    direction: Direction,
) -> bool {
    let size = grid.len() as isize;
    let (dr, dc) = direction.offset();
    letters.iter().enumerate().all(|(i, &letter)| {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        if r < 0 || c < 0 || r >= size || c >= size {
            return false;
        }
        match grid[r as usize][c as usize] {
            None => true,
            Some(existing) => existing == letter,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded(seed: u64) -> GridPlacer<ChaCha8Rng> {
        GridPlacer::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_grid_is_full() {
        let puzzle = seeded(1).place(&Word::list(&["CAT", "DOG"]), 10, Difficulty::Easy);
        assert_eq!(puzzle.size(), 10);
        assert!(puzzle.grid.iter().all(|row| row.len() == 10));
        assert!(puzzle
            .grid
            .iter()
            .flatten()
            .all(|c| c.is_ascii_uppercase()));
        assert!(puzzle.verify().is_ok());
    }

    #[test]
    fn test_word_longer_than_grid_is_unplaced() {
        for seed in 0..20 {
            let puzzle = seeded(seed).place(&Word::list(&["ELEPHANT"]), 6, Difficulty::Hard);
            assert!(puzzle.words.is_empty());
            assert_eq!(puzzle.unplaced_words, vec!["ELEPHANT".to_string()]);
        }
    }

    #[test]
    fn test_easy_uses_only_straight_directions() {
        let words = Word::list(&["ALPHA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT"]);
        for seed in 0..10 {
            let puzzle = seeded(seed).place(&words, 12, Difficulty::Easy);
            for p in &puzzle.words {
                assert!(Difficulty::Easy.directions().contains(&p.direction));
            }
        }
    }

    #[test]
    fn test_hard_eventually_uses_diagonal_up() {
        let words = Word::list(&["ALPHA", "BRAVO", "CHARLIE", "DELTA"]);
        let used = (0..50).any(|seed| {
            seeded(seed)
                .place(&words, 10, Difficulty::Hard)
                .words
                .iter()
                .any(|p| p.direction == Direction::DiagonalUp)
        });
        assert!(used);
    }

    #[test]
    fn test_longest_word_placed_first() {
        let words = Word::list(&["AB", "ABCDE", "ABC"]);
        let puzzle = seeded(7).place(&words, 8, Difficulty::Medium);
        let order: Vec<&str> = puzzle.words.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(order, vec!["ABCDE", "ABC", "AB"]);
    }

    #[test]
    fn test_duplicates_attempted_independently() {
        let words = Word::list(&["SUN", "SUN"]);
        let puzzle = seeded(3).place(&words, 6, Difficulty::Easy);
        assert_eq!(puzzle.words.len() + puzzle.unplaced_words.len(), 2);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let words = Word::list(&["RIVER", "STONE", "CLOUD"]);
        let a = seeded(42).place(&words, 9, Difficulty::Hard);
        let b = seeded(42).place(&words, 9, Difficulty::Hard);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_size_grid_places_nothing() {
        let puzzle = seeded(0).place(&Word::list(&["A", "BC"]), 0, Difficulty::Easy);
        assert_eq!(puzzle.size(), 0);
        assert_eq!(puzzle.unplaced_words.len(), 2);
    }

    #[test]
    fn test_fits_allows_matching_crossing() {
        let mut grid = vec![vec![None; 3]; 3];
        grid[0][1] = Some('A');
        assert!(fits(&grid, &['C', 'A', 'T'], 0, 0, Direction::Horizontal));
        assert!(!fits(&grid, &['D', 'O', 'G'], 0, 0, Direction::Horizontal));
        assert!(!fits(&grid, &['C', 'A', 'T'], 0, 1, Direction::Horizontal));
        assert!(!fits(&grid, &['C', 'A', 'T'], 1, 0, Direction::DiagonalUp));
    }
}
