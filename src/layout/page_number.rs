//! Page number formatting and side-aware placement.
//!
//! Turns an integer page number into display text (plain, roman, bracketed,
//! dashed, boxed, pill) and positions it on the page. "Outer" placements
//! follow the fore edge, so they flip between recto and verso pages.

use super::page_geometry::{PageDimensions, PageMargins};
use crate::geometry::{Point, Rect};
use crate::surface::TextAlign;
use serde::{Deserialize, Serialize};

/// Display style of a page number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageNumberStyle {
    /// Decimal digits (1, 2, 3, ...)
    #[default]
    Plain,
    /// Lowercase Roman numerals (i, ii, iii, ...)
    RomanLower,
    /// Uppercase Roman numerals (I, II, III, ...)
    RomanUpper,
    /// Digits in brackets ([1], [2], ...)
    Bracketed,
    /// Digits between em dashes (— 1 —)
    Dashed,
    /// Digits inside a rectangular frame
    Boxed,
    /// Digits inside a fully rounded frame
    Pill,
}

/// Where the page number sits on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberPlacement {
    /// Bottom margin, at the fore edge
    #[default]
    BottomOuter,
    /// Bottom margin, centered
    BottomCenter,
    /// Top margin, at the fore edge
    TopOuter,
    /// Top margin, centered
    TopCenter,
}

impl NumberPlacement {
    fn is_top(&self) -> bool {
        matches!(self, NumberPlacement::TopOuter | NumberPlacement::TopCenter)
    }

    fn is_outer(&self) -> bool {
        matches!(self, NumberPlacement::BottomOuter | NumberPlacement::TopOuter)
    }
}

/// Decorative frame drawn around the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFrame {
    /// Rectangle with slightly rounded corners
    Box,
    /// Rectangle with semicircular ends
    Pill,
}

/// A page number ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedPageNumber {
    /// Display text
    pub text: String,
    /// Text anchor (baseline)
    pub anchor: Point,
    /// Alignment about the anchor
    pub align: TextAlign,
    /// Optional frame around the text
    pub frame: Option<NumberFrame>,
    /// Frame bounds, when `frame` is set
    pub frame_rect: Option<Rect>,
}

/// Formats and positions page numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageNumberFormatter {
    style: PageNumberStyle,
    placement: NumberPlacement,
    font_size: f32,
}

impl PageNumberFormatter {
    /// Create a formatter.
    pub fn new(style: PageNumberStyle, placement: NumberPlacement, font_size: f32) -> Self {
        Self {
            style,
            placement,
            font_size,
        }
    }

    /// Font size used for the number text.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Display text for a page number.
    ///
    /// Numbers below 1 have no representation and yield an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlebook::layout::{NumberPlacement, PageNumberFormatter, PageNumberStyle};
    ///
    /// let f = PageNumberFormatter::new(PageNumberStyle::Dashed, NumberPlacement::BottomCenter, 10.0);
    /// assert_eq!(f.text(7), "— 7 —");
    /// ```
    pub fn text(&self, number: i64) -> String {
        if number < 1 {
            return String::new();
        }
        let n = number as u64;
        match self.style {
            PageNumberStyle::Plain | PageNumberStyle::Boxed | PageNumberStyle::Pill => n.to_string(),
            PageNumberStyle::RomanLower => to_roman(n, false),
            PageNumberStyle::RomanUpper => to_roman(n, true),
            PageNumberStyle::Bracketed => format!("[{}]", n),
            PageNumberStyle::Dashed => format!("— {} —", n),
        }
    }

    /// Format and position a page number.
    ///
    /// Outer placements right-align at the right content edge of a right-hand
    /// page and left-align at the left content edge of a left-hand page.
    /// Center placements are centered on the page regardless of side. The
    /// number is vertically centered inside the top or bottom margin.
    pub fn format(
        &self,
        number: i64,
        is_left_page: bool,
        page: PageDimensions,
        margins: PageMargins,
    ) -> FormattedPageNumber {
        let text = self.text(number);

        let (x, align) = if self.placement.is_outer() {
            if is_left_page {
                (margins.left, TextAlign::Left)
            } else {
                (page.width - margins.right, TextAlign::Right)
            }
        } else {
            (page.width / 2.0, TextAlign::Center)
        };

        let band_center = if self.placement.is_top() {
            margins.top / 2.0
        } else {
            page.height - margins.bottom / 2.0
        };
        // Baseline sits a third of the font size below the band center so
        // digits look optically centered.
        let anchor = Point::new(x, band_center + self.font_size / 3.0);

        let frame = match self.style {
            PageNumberStyle::Boxed => Some(NumberFrame::Box),
            PageNumberStyle::Pill => Some(NumberFrame::Pill),
            _ => None,
        };
        let frame_rect = frame.map(|_| self.frame_rect(&text, anchor, align, band_center));

        FormattedPageNumber {
            text,
            anchor,
            align,
            frame,
            frame_rect,
        }
    }

    fn frame_rect(&self, text: &str, anchor: Point, align: TextAlign, band_center: f32) -> Rect {
        let padding = self.font_size * 0.5;
        let width = super::text::estimate_width(text, self.font_size) + padding * 2.0;
        let height = self.font_size * 1.6;
        let left = match align {
            TextAlign::Left => anchor.x - padding,
            TextAlign::Center => anchor.x - width / 2.0,
            TextAlign::Right => anchor.x + padding - width,
        };
        Rect::new(left, band_center - height / 2.0, width, height)
    }
}

impl Default for PageNumberFormatter {
    fn default() -> Self {
        Self::new(PageNumberStyle::Plain, NumberPlacement::BottomOuter, 10.0)
    }
}

/// Convert a number to Roman numerals.
///
/// Greedy subtractive conversion over the canonical table. Zero converts to
/// an empty string.
///
/// # Examples
///
/// ```
/// use puzzlebook::layout::to_roman;
///
/// assert_eq!(to_roman(2024, true), "MMXXIV");
/// assert_eq!(to_roman(14, false), "xiv");
/// ```
pub fn to_roman(mut n: u64, uppercase: bool) -> String {
    const NUMERALS: [(u64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for (value, numeral) in NUMERALS.iter() {
        while n >= *value {
            result.push_str(numeral);
            n -= value;
        }
    }

    if uppercase {
        result
    } else {
        result.to_lowercase()
    }
}
