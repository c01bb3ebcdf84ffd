//! Text layout: places one simplified glyph per character along a single baseline.

mod metrics;

pub use metrics::{ApproxMetrics, ParleyMetrics, TextMetrics};

use crate::foundation::core::Viewport;
use crate::glyph::{GlyphBox, outline_for};
use crate::outline::Outline;

/// Horizontal position of the first character.
pub const LEFT_MARGIN: f64 = 10.0;
/// Space above the cap line.
pub const TOP_MARGIN: f64 = 10.0;
/// Total margin added to the measured text size on each axis.
pub const VIEWPORT_MARGIN: f64 = 20.0;

/// Outline descriptions for a laid-out string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    /// All characters, concatenated in order.
    pub full: String,
    /// One entry per character, index-aligned with the input (empty for spaces).
    pub letters: Vec<String>,
    /// Sum of the advance widths.
    pub text_width: f64,
    /// Baseline the glyphs sit on.
    pub baseline: f64,
    pub viewport: Viewport,
}

impl TextLayout {
    /// Layout used when metrics are unavailable: nothing to draw.
    pub fn unavailable() -> Self {
        Self {
            full: String::new(),
            letters: Vec::new(),
            text_width: 0.0,
            baseline: 0.0,
            viewport: Viewport::FALLBACK,
        }
    }

    /// `true` when at least one character produced drawable geometry.
    pub fn has_outline(&self) -> bool {
        !self.full.is_empty()
    }

    /// Parse into structured base geometry.
    pub fn to_base(&self) -> BaseOutlines {
        BaseOutlines {
            full: Outline::parse(&self.full),
            letters: self.letters.iter().map(|d| Outline::parse(d)).collect(),
        }
    }
}

/// Parsed, undisplaced geometry cached between layouts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseOutlines {
    pub full: Outline,
    pub letters: Vec<Outline>,
}

impl BaseOutlines {
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}

/// Lay out `text` left to right, one glyph per character.
///
/// The cursor starts at [`LEFT_MARGIN`] and the baseline sits at `font_size + TOP_MARGIN`. If the
/// metrics source cannot measure any character, the whole layout degrades to
/// [`TextLayout::unavailable`].
#[tracing::instrument(skip(metrics), fields(chars = text.chars().count()))]
pub fn layout_text(
    text: &str,
    font: &str,
    font_size: f64,
    metrics: &mut dyn TextMetrics,
) -> TextLayout {
    let baseline = font_size + TOP_MARGIN;
    let mut cursor = LEFT_MARGIN;
    let mut full = String::new();
    let mut letters = Vec::with_capacity(text.len());

    for ch in text.chars() {
        let Some(advance) = metrics.advance_width(ch, font, font_size) else {
            tracing::warn!(?ch, font, "text metrics unavailable; drawing nothing");
            return TextLayout::unavailable();
        };
        let d = outline_for(ch, GlyphBox::new(cursor, baseline, advance, font_size));
        full.push_str(&d);
        letters.push(d);
        cursor += advance;
    }

    let text_width = cursor - LEFT_MARGIN;
    TextLayout {
        full,
        letters,
        text_width,
        baseline,
        viewport: Viewport::new(text_width + VIEWPORT_MARGIN, font_size + VIEWPORT_MARGIN),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout.rs"]
mod tests;
