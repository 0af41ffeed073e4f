//! Text measurement, wrapping and vertical stacking helpers.
//!
//! Metrics are estimates: fonts are supplied by an external collaborator, so
//! widths use an average glyph width per em instead of real font tables.

use serde::{Deserialize, Serialize};

/// Average glyph advance as a fraction of the font size.
pub const AVG_GLYPH_WIDTH: f32 = 0.55;

/// Distance from the top of a line box to its baseline, as a fraction of the
/// font size.
pub const ASCENT: f32 = 0.8;

/// Area of a US Letter page in square points; the reference for scaling.
pub const REFERENCE_PAGE_AREA: f32 = 612.0 * 792.0;

/// Smallest layout scale factor.
pub const MIN_SCALE: f32 = 0.7;

/// Largest layout scale factor.
pub const MAX_SCALE: f32 = 1.0;

/// Vertical placement of a content stack inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    /// Content starts at the top
    Top,
    /// Surplus space is split evenly above and below
    #[default]
    Center,
    /// Content ends at the bottom
    Bottom,
}

/// Estimated width of `text` at `font_size`.
pub fn estimate_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_GLYPH_WIDTH
}

/// Greedy word wrap into lines no wider than `max_width`.
///
/// A single word wider than `max_width` gets a line of its own. Always
/// returns at least one line.
pub fn wrap(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0.0;
    let space_width = estimate_width(" ", font_size);

    for word in text.split_whitespace() {
        let word_width = estimate_width(word, font_size);

        if current_line.is_empty() {
            current_line = word.to_string();
            current_width = word_width;
        } else if current_width + space_width + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
            current_width = word_width;
        }
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Offset from the top of the available space to the top of the stack.
///
/// Overflowing content (negative surplus) is pinned to the top.
pub fn stack_offset(available: f32, total: f32, align: VerticalAlign) -> f32 {
    let surplus = (available - total).max(0.0);
    match align {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Center => surplus / 2.0,
        VerticalAlign::Bottom => surplus,
    }
}

/// Layout scale factor for a page of the given trim area.
///
/// `clamp(sqrt(area / letter_area), 0.7, 1.0)`: smaller trims shrink fonts
/// and paddings proportionally, but never below 70%.
///
/// # Examples
///
/// ```
/// use puzzlebook::layout::scale_factor;
///
/// assert_eq!(scale_factor(612.0 * 792.0), 1.0);
/// assert_eq!(scale_factor(100.0), 0.7);
/// ```
pub fn scale_factor(page_area: f32) -> f32 {
    (page_area / REFERENCE_PAGE_AREA)
        .sqrt()
        .clamp(MIN_SCALE, MAX_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("Animals of the Farm", 10.0, 500.0), vec!["Animals of the Farm"]);
    }

    #[test]
    fn test_wrap_breaks_lines() {
        // 10pt glyphs are 5.5pt wide; 60pt fits ten characters
        let lines = wrap("alpha beta gamma delta", 10.0, 60.0);
        assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap("   ", 10.0, 60.0), vec![String::new()]);
    }

    #[test]
    fn test_wrap_long_word_alone() {
        let lines = wrap("a extraordinarily b", 10.0, 30.0);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_stack_offset() {
        assert_eq!(stack_offset(100.0, 60.0, VerticalAlign::Center), 20.0);
        assert_eq!(stack_offset(100.0, 60.0, VerticalAlign::Bottom), 40.0);
        assert_eq!(stack_offset(100.0, 60.0, VerticalAlign::Top), 0.0);
        assert_eq!(stack_offset(100.0, 160.0, VerticalAlign::Center), 0.0);
    }

    #[test]
    fn test_scale_factor_range() {
        let trade = scale_factor(432.0 * 648.0);
        assert!(trade > 0.7 && trade < 1.0);
        assert!((trade - (432.0f32 * 648.0 / REFERENCE_PAGE_AREA).sqrt()).abs() < 1e-6);
        assert_eq!(scale_factor(2.0 * REFERENCE_PAGE_AREA), 1.0);
    }
}
