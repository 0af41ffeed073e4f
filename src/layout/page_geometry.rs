//! Page geometry: trim size, bleed and recto/verso-mirrored margins.
//!
//! Margins are expressed relative to the binding: `inside` is the gutter edge
//! and `outside` the fore edge. On a right-hand (recto) page the gutter is on
//! the left; on a left-hand (verso) page it is on the right.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Extra printable area on each edge, trimmed away after binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bleed {
    /// Top edge
    pub top: f32,
    /// Bottom edge
    pub bottom: f32,
    /// Fore edge
    pub outer: f32,
    /// Gutter edge
    pub inner: f32,
}

impl Bleed {
    /// The common print-on-demand bleed: 0.125" on every edge except the gutter.
    pub fn standard() -> Self {
        let eighth = POINTS_PER_INCH / 8.0;
        Self {
            top: eighth,
            bottom: eighth,
            outer: eighth,
            inner: 0.0,
        }
    }
}

/// Margins measured from the trim edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Gutter-side margin
    pub inside: f32,
    /// Fore-edge margin
    pub outside: f32,
}

impl Margins {
    /// Same margin on every edge.
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            inside: value,
            outside: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 0.5 * POINTS_PER_INCH,
            bottom: 0.5 * POINTS_PER_INCH,
            inside: 0.75 * POINTS_PER_INCH,
            outside: 0.5 * POINTS_PER_INCH,
        }
    }
}

/// Trim size presets, resolved to points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrimSize {
    /// US Letter (8.5" x 11")
    Letter,
    /// 8.25" x 11"
    Large,
    /// 8" x 10"
    Square8x10,
    /// 7" x 10"
    Workbook,
    /// 6" x 9"
    Trade,
    /// 5.5" x 8.5"
    Digest,
    /// A4 (210mm x 297mm)
    A4,
    /// A5 (148mm x 210mm)
    A5,
    /// Custom dimensions in points
    Custom(f32, f32),
}

impl TrimSize {
    /// Get dimensions in points (1 inch = 72 points).
    pub fn dimensions(&self) -> (f32, f32) {
        let inch = POINTS_PER_INCH;
        match self {
            TrimSize::Letter => (8.5 * inch, 11.0 * inch),
            TrimSize::Large => (8.25 * inch, 11.0 * inch),
            TrimSize::Square8x10 => (8.0 * inch, 10.0 * inch),
            TrimSize::Workbook => (7.0 * inch, 10.0 * inch),
            TrimSize::Trade => (6.0 * inch, 9.0 * inch),
            TrimSize::Digest => (5.5 * inch, 8.5 * inch),
            TrimSize::A4 => (595.0, 842.0),
            TrimSize::A5 => (420.0, 595.0),
            TrimSize::Custom(w, h) => (*w, *h),
        }
    }
}

/// Resolved trim, bleed and margin configuration of a book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Trimmed page width
    pub trim_width: f32,
    /// Trimmed page height
    pub trim_height: f32,
    /// Bleed allowance
    #[serde(default)]
    pub bleed: Bleed,
    /// Margins from the trim edge
    #[serde(default)]
    pub margins: Margins,
}

impl PageSpec {
    /// Create a spec from a trim preset with default margins and standard bleed.
    pub fn from_trim(trim: TrimSize) -> Self {
        let (trim_width, trim_height) = trim.dimensions();
        Self {
            trim_width,
            trim_height,
            bleed: Bleed::standard(),
            margins: Margins::default(),
        }
    }

    /// Replace the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Replace the bleed.
    pub fn with_bleed(mut self, bleed: Bleed) -> Self {
        self.bleed = bleed;
        self
    }

    /// Reject specs that leave no room for content.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(Error::InvalidPageSpec {
                reason: reason.to_string(),
            })
        };
        if self.trim_width <= 0.0 || self.trim_height <= 0.0 {
            return invalid("trim size must be positive");
        }
        let m = &self.margins;
        let b = &self.bleed;
        if [m.top, m.bottom, m.inside, m.outside, b.top, b.bottom, b.outer, b.inner]
            .iter()
            .any(|v| *v < 0.0)
        {
            return invalid("margins and bleed must not be negative");
        }
        if m.inside + m.outside >= self.trim_width {
            return invalid("horizontal margins leave no content width");
        }
        if m.top + m.bottom >= self.trim_height {
            return invalid("vertical margins leave no content height");
        }
        Ok(())
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::from_trim(TrimSize::Letter)
    }
}

/// Absolute margins of one page, measured from that page's own edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Distance from the top edge
    pub top: f32,
    /// Distance from the bottom edge
    pub bottom: f32,
    /// Distance from the left edge
    pub left: f32,
    /// Distance from the right edge
    pub right: f32,
}

/// Full page dimensions including bleed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
}

/// Resolves a [`PageSpec`] into per-page sizes and margins.
///
/// # Examples
///
/// ```
/// use puzzlebook::layout::{Bleed, Margins, PageGeometry, PageSpec, TrimSize};
///
/// let spec = PageSpec::from_trim(TrimSize::Trade)
///     .with_margins(Margins { top: 36.0, bottom: 36.0, inside: 54.0, outside: 36.0 })
///     .with_bleed(Bleed { top: 9.0, bottom: 9.0, outer: 9.0, inner: 0.0 });
/// let geometry = PageGeometry::new(spec, true);
///
/// let recto = geometry.mirrored_margins(false);
/// assert_eq!(recto.left, 54.0);
/// assert_eq!(recto.right, 45.0);
///
/// let verso = geometry.mirrored_margins(true);
/// assert_eq!(verso.left, 45.0);
/// assert_eq!(verso.right, 54.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    spec: PageSpec,
    bleed_enabled: bool,
}

impl PageGeometry {
    /// Create a geometry. With `bleed_enabled == false` every bleed term is zero.
    pub fn new(spec: PageSpec, bleed_enabled: bool) -> Self {
        Self {
            spec,
            bleed_enabled,
        }
    }

    fn bleed(&self) -> Bleed {
        if self.bleed_enabled {
            self.spec.bleed
        } else {
            Bleed::default()
        }
    }

    /// Page size: trim plus bleed on each applicable side.
    pub fn page_size(&self) -> PageDimensions {
        let bleed = self.bleed();
        PageDimensions {
            width: self.spec.trim_width + bleed.inner + bleed.outer,
            height: self.spec.trim_height + bleed.top + bleed.bottom,
        }
    }

    /// Margins of a page, mirrored by side.
    ///
    /// On a right-hand page the gutter (inside margin plus inner bleed) is on
    /// the left; on a left-hand page it is on the right.
    pub fn mirrored_margins(&self, is_left_page: bool) -> PageMargins {
        let bleed = self.bleed();
        let m = &self.spec.margins;
        let gutter = m.inside + bleed.inner;
        let fore_edge = m.outside + bleed.outer;
        let (left, right) = if is_left_page {
            (fore_edge, gutter)
        } else {
            (gutter, fore_edge)
        };
        PageMargins {
            top: m.top + bleed.top,
            bottom: m.bottom + bleed.bottom,
            left,
            right,
        }
    }

    /// Page rectangle minus the mirrored margins.
    pub fn content_box(&self, is_left_page: bool) -> Rect {
        let size = self.page_size();
        let m = self.mirrored_margins(is_left_page);
        Rect::new(0.0, 0.0, size.width, size.height).inset(m.top, m.right, m.bottom, m.left)
    }

    /// Trimmed page area, used for the layout scale factor.
    pub fn trim_area(&self) -> f32 {
        self.spec.trim_width * self.spec.trim_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PageSpec {
        PageSpec {
            trim_width: 432.0,
            trim_height: 648.0,
            bleed: Bleed {
                top: 9.0,
                bottom: 10.0,
                outer: 11.0,
                inner: 2.0,
            },
            margins: Margins {
                top: 30.0,
                bottom: 40.0,
                inside: 60.0,
                outside: 35.0,
            },
        }
    }

    #[test]
    fn test_right_page_margins() {
        let m = PageGeometry::new(spec(), true).mirrored_margins(false);
        assert_eq!(m.left, 60.0 + 2.0);
        assert_eq!(m.right, 35.0 + 11.0);
        assert_eq!(m.top, 39.0);
        assert_eq!(m.bottom, 50.0);
    }

    #[test]
    fn test_left_page_swaps_sides() {
        let g = PageGeometry::new(spec(), true);
        let recto = g.mirrored_margins(false);
        let verso = g.mirrored_margins(true);
        assert_eq!(verso.left, recto.right);
        assert_eq!(verso.right, recto.left);
        assert_eq!(verso.top, recto.top);
        assert_eq!(verso.bottom, recto.bottom);
    }

    #[test]
    fn test_bleed_disabled_zeroes_bleed_terms() {
        let g = PageGeometry::new(spec(), false);
        let m = g.mirrored_margins(false);
        assert_eq!(m.left, 60.0);
        assert_eq!(m.right, 35.0);
        assert_eq!(m.top, 30.0);
        assert_eq!(m.bottom, 40.0);
        assert_eq!(
            g.page_size(),
            PageDimensions {
                width: 432.0,
                height: 648.0
            }
        );
    }

    #[test]
    fn test_page_size_with_bleed() {
        let size = PageGeometry::new(spec(), true).page_size();
        assert_eq!(size.width, 432.0 + 2.0 + 11.0);
        assert_eq!(size.height, 648.0 + 9.0 + 10.0);
    }

    #[test]
    fn test_content_box() {
        let g = PageGeometry::new(spec(), true);
        let size = g.page_size();
        let content = g.content_box(true);
        assert_eq!(content.x, 46.0);
        assert_eq!(content.y, 39.0);
        assert_eq!(content.right(), size.width - 62.0);
        assert_eq!(content.bottom(), size.height - 50.0);
    }

    #[test]
    fn test_trim_presets() {
        assert_eq!(TrimSize::Letter.dimensions(), (612.0, 792.0));
        assert_eq!(TrimSize::Trade.dimensions(), (432.0, 648.0));
        assert_eq!(TrimSize::Custom(100.0, 200.0).dimensions(), (100.0, 200.0));
    }

    #[test]
    fn test_validate() {
        assert!(spec().validate().is_ok());
        let mut bad = spec();
        bad.trim_width = 0.0;
        assert!(bad.validate().is_err());
        let wide = spec().with_margins(Margins::uniform(300.0));
        assert!(wide.validate().is_err());
        let negative = spec().with_bleed(Bleed {
            top: -1.0,
            ..Bleed::default()
        });
        assert!(negative.validate().is_err());
    }
}
