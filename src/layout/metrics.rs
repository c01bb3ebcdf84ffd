use crate::foundation::error::{JigglyError, JigglyResult};

/// Source of character advance widths.
///
/// Returning `None` means metrics are unavailable (no font, no measuring context); layout then
/// degrades to an empty outline instead of failing.
pub trait TextMetrics {
    /// Advance width of `ch` set in `font` at `font_size` pixels.
    fn advance_width(&mut self, ch: char, font: &str, font_size: f64) -> Option<f64>;
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn advance_width(&mut self, ch: char, font: &str, font_size: f64) -> Option<f64> {
        (**self).advance_width(ch, font, font_size)
    }
}

/// Table-driven metrics approximating a Helvetica/Arial-class sans.
///
/// Deterministic and font-file free. Font stacks naming a monospace family switch to a fixed
/// 0.6 em pitch.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMetrics;

impl ApproxMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Advance of `ch` in ems.
    pub fn em_advance(ch: char, font: &str) -> f64 {
        if is_monospace(font) {
            return 0.6;
        }
        match ch {
            ' ' | '.' | ',' | '!' | ':' | ';' | '\'' | '|' => 0.278,
            'i' | 'j' | 'l' => 0.222,
            'f' | 't' | 'I' => 0.278,
            'r' | '(' | ')' | '-' => 0.333,
            'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 0.5,
            'm' => 0.833,
            'w' => 0.722,
            'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 0.556,
            'L' | '?' => 0.556,
            '0'..='9' => 0.556,
            'F' | 'T' | 'Z' => 0.611,
            'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' => 0.667,
            'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 0.722,
            'G' | 'O' | 'Q' => 0.778,
            'M' => 0.833,
            'W' => 0.944,
            c if c.is_whitespace() => 0.278,
            c if c.is_uppercase() => 0.667,
            _ => 0.556,
        }
    }
}

impl TextMetrics for ApproxMetrics {
    fn advance_width(&mut self, ch: char, font: &str, font_size: f64) -> Option<f64> {
        Some(Self::em_advance(ch, font) * font_size)
    }
}

fn is_monospace(font: &str) -> bool {
    font.split(',').map(str::trim).any(|family| {
        let f = family.trim_matches(|c| c == '"' || c == '\'').to_ascii_lowercase();
        f == "monospace" || f.contains("mono") || f.contains("courier")
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MeasureBrush;

/// Metrics measured by shaping single characters with Parley.
///
/// Fonts are registered from raw font bytes. The requested font stack is tried after the
/// registered family, so a stack that names nothing usable still resolves to the loaded face.
pub struct ParleyMetrics {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
    family: Option<String>,
}

impl Default for ParleyMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyMetrics {
    /// Metrics with no registered fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family: None,
        }
    }

    /// Metrics backed by the first family found in `font_bytes`.
    pub fn from_font_bytes(font_bytes: &[u8]) -> JigglyResult<Self> {
        let mut out = Self::new();
        out.register_font(font_bytes)?;
        Ok(out)
    }

    /// Register a font and make its family the preferred one. Returns the family name.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> JigglyResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            JigglyError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| JigglyError::validation("registered font family has no name"))?
            .to_string();
        self.family = Some(family_name.clone());
        Ok(family_name)
    }

    /// Family registered last, if any.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    fn font_stack(&self, font: &str) -> String {
        match &self.family {
            Some(family) if font.trim().is_empty() => format!("\"{family}\""),
            Some(family) => format!("\"{family}\", {font}"),
            None => font.to_string(),
        }
    }
}

impl TextMetrics for ParleyMetrics {
    fn advance_width(&mut self, ch: char, font: &str, font_size: f64) -> Option<f64> {
        let size_px = font_size as f32;
        if !size_px.is_finite() || size_px <= 0.0 {
            return None;
        }

        let text = ch.to_string();
        let stack = self.font_stack(font);
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(stack)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(&text);
        layout.break_all_lines(None);

        let width = f64::from(layout.full_width());
        if !width.is_finite() || (width <= 0.0 && !ch.is_whitespace()) {
            // Nothing resolved a face for this character.
            return None;
        }
        Some(width)
    }
}
