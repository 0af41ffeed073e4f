//! Book content and the JSON request format.

use super::matter::{BackMatter, FrontMatter};
use crate::config::BookConfig;
use crate::error::Result;
use crate::puzzle::{Difficulty, Word};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One word list to turn into a puzzle page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSet {
    /// Puzzle title
    pub title: String,
    /// Optional description under the title
    #[serde(default)]
    pub description: Option<String>,
    /// Normalized words
    pub words: Vec<Word>,
    /// Difficulty
    pub difficulty: Difficulty,
    /// Grid size; the configured size for the difficulty when absent
    #[serde(default)]
    pub grid_size: Option<usize>,
}

impl PuzzleSet {
    /// Create a set from plain word strings.
    pub fn new<S: AsRef<str>>(title: impl Into<String>, words: &[S], difficulty: Difficulty) -> Self {
        Self {
            title: title.into(),
            description: None,
            words: Word::list(words),
            difficulty,
            grid_size: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an explicit grid size.
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = Some(size);
        self
    }

    /// Words with at least one letter.
    pub fn usable_words(&self) -> Vec<Word> {
        self.words.iter().filter(|w| !w.is_empty()).cloned().collect()
    }
}

/// Everything that goes into a book apart from its configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookContent {
    /// Programmatic front matter, in order
    pub front_matter: Vec<FrontMatter>,
    /// Puzzle sets, in input order
    pub puzzles: Vec<PuzzleSet>,
    /// Back matter, in order
    pub back_matter: Vec<BackMatter>,
}

impl BookContent {
    /// Create content holding only puzzles.
    pub fn with_puzzles(puzzles: Vec<PuzzleSet>) -> Self {
        Self {
            puzzles,
            ..Default::default()
        }
    }

    /// Add a front-matter page.
    pub fn front(mut self, matter: FrontMatter) -> Self {
        self.front_matter.push(matter);
        self
    }

    /// Add a back-matter page.
    pub fn back(mut self, matter: BackMatter) -> Self {
        self.back_matter.push(matter);
        self
    }
}

/// Configuration and content read from one JSON document.
///
/// ```json
/// {
///   "config": { "print_mode": true, "level_mode": "multi" },
///   "front_matter": [{ "kind": "title", "title": "Animals" }],
///   "puzzles": [{ "title": "Pets", "difficulty": "Easy",
///                 "words": [{ "id": "1", "text": "CAT" }, { "id": "2", "text": "DOG" }] }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRequest {
    /// Composition settings
    #[serde(default)]
    pub config: BookConfig,
    /// Pages to compose
    #[serde(flatten)]
    pub content: BookContent,
}

impl BookRequest {
    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a request from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelMode;

    #[test]
    fn test_usable_words_drops_empty() {
        let set = PuzzleSet::new("Pets", &["CAT", "", "DOG"], Difficulty::Easy);
        assert_eq!(set.words.len(), 3);
        assert_eq!(set.usable_words().len(), 2);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "config": {"print_mode": true, "level_mode": "multi"},
            "front_matter": [{"kind": "title", "title": "Animals"}],
            "puzzles": [{
                "title": "Pets",
                "difficulty": "Hard",
                "grid_size": 9,
                "words": [{"id": "a", "text": "CAT"}, {"id": "b", "text": "DOG"}]
            }]
        }"#;
        let request = BookRequest::from_json(json).unwrap();
        assert!(request.config.print_mode);
        assert_eq!(request.config.level_mode, LevelMode::Multi);
        assert_eq!(request.content.front_matter.len(), 1);
        assert!(request.content.back_matter.is_empty());
        let set = &request.content.puzzles[0];
        assert_eq!(set.difficulty, Difficulty::Hard);
        assert_eq!(set.grid_size, Some(9));
        assert_eq!(set.words[1].id, "b");
    }

    #[test]
    fn test_request_json_round_trip() {
        let request = BookRequest {
            config: BookConfig::new().with_seed(7),
            content: BookContent::with_puzzles(vec![PuzzleSet::new("Pets", &["CAT", "DOG"], Difficulty::Medium)
                .with_description("Household animals")]),
        };
        let parsed = BookRequest::from_json(&request.to_json().unwrap()).unwrap();
        assert_eq!(parsed, request);
    }
}
