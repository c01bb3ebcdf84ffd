//! Simplified geometric letterforms.
//!
//! [`outline_for`] maps one character and its layout box to a closed outline description built
//! from rectangles, straight strokes and quadratic-curve bands. Letters A-Z and a-z and the
//! punctuation marks `. , ! ?` have dedicated shapes; space is empty and anything else becomes a
//! solid block. The mapping is pure: identical inputs always give identical text.

mod lower;
mod pen;
mod punct;
mod upper;

use pen::Pen;

/// Stroke width as a fraction of the advance width.
pub const STROKE_RATIO: f64 = 0.15;
/// Lowercase body height as a fraction of the cap height.
pub const X_HEIGHT_RATIO: f64 = 0.7;
/// Width of the fallback block as a fraction of the advance width.
pub const FALLBACK_WIDTH_RATIO: f64 = 0.8;

/// Placement of one character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphBox {
    /// Left edge of the advance.
    pub x: f64,
    /// Baseline.
    pub y: f64,
    /// Advance width.
    pub width: f64,
    /// Cap height.
    pub height: f64,
}

impl GlyphBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Derived drawing guides shared by every glyph function.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Guides {
    /// Left and right edges of the ink, inset from the advance.
    pub(crate) l: f64,
    pub(crate) r: f64,
    pub(crate) w: f64,
    pub(crate) cx: f64,
    /// Top of the body (cap height for capitals, x-height for lowercase).
    pub(crate) t: f64,
    /// Baseline.
    pub(crate) b: f64,
    pub(crate) h: f64,
    pub(crate) my: f64,
    /// Cap line, reached by lowercase ascenders.
    pub(crate) cap: f64,
    /// Lowest point of lowercase descenders.
    pub(crate) desc: f64,
    pub(crate) sw: f64,
}

impl Guides {
    fn new(bx: GlyphBox, body_height: f64) -> Self {
        let sw = bx.width * STROKE_RATIO;
        let l = bx.x + bx.width * 0.1;
        let r = bx.x + bx.width * 0.9;
        let b = bx.y;
        let t = b - body_height;
        Self {
            l,
            r,
            w: r - l,
            cx: (l + r) / 2.0,
            t,
            b,
            h: body_height,
            my: (t + b) / 2.0,
            cap: b - bx.height,
            desc: b + sw * 1.2,
            sw,
        }
    }
}

type GlyphFn = fn(&mut Pen, &Guides);

/// Shape function for a character, if it has a dedicated glyph.
fn lookup(ch: char) -> Option<GlyphFn> {
    upper::lookup(ch)
        .or_else(|| lower::lookup(ch))
        .or_else(|| punct::lookup(ch))
}

/// `true` when `ch` has a dedicated shape rather than the fallback block.
pub fn has_glyph(ch: char) -> bool {
    lookup(ch).is_some()
}

/// Outline description for one character placed in `bx`.
///
/// Space yields an empty string. Characters without a dedicated shape yield a block 80% of the
/// advance wide, cap-height tall when the character is its own uppercase form and x-height tall
/// otherwise.
pub fn outline_for(ch: char, bx: GlyphBox) -> String {
    if ch == ' ' {
        return String::new();
    }
    let mut pen = Pen::new(bx.width * STROKE_RATIO);
    match lookup(ch) {
        Some(draw) => {
            let body = if ch.is_lowercase() {
                bx.height * X_HEIGHT_RATIO
            } else {
                bx.height
            };
            draw(&mut pen, &Guides::new(bx, body));
        }
        None => fallback(&mut pen, ch, bx),
    }
    let d = pen.finish();
    if d.is_empty() {
        // Degenerate boxes can collapse every curve; keep the shape visible.
        let mut pen = Pen::new(0.0);
        fallback(&mut pen, ch, bx);
        return pen.finish();
    }
    d
}

fn fallback(pen: &mut Pen, ch: char, bx: GlyphBox) {
    let h = if is_own_uppercase(ch) {
        bx.height
    } else {
        bx.height * X_HEIGHT_RATIO
    };
    pen.rect(
        bx.x,
        bx.y - h,
        bx.x + bx.width * FALLBACK_WIDTH_RATIO,
        bx.y,
    );
}

fn is_own_uppercase(ch: char) -> bool {
    ch.to_uppercase().eq(std::iter::once(ch))
}

#[cfg(test)]
#[path = "../../tests/unit/glyph.rs"]
mod tests;
