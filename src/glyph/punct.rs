use super::{GlyphFn, Guides, Pen};

pub(super) fn lookup(ch: char) -> Option<GlyphFn> {
    let f: GlyphFn = match ch {
        '.' => period,
        ',' => comma,
        '!' => exclamation,
        '?' => question,
        _ => return None,
    };
    Some(f)
}

/// Side of the square dot every mark is built around.
fn dot_size(g: &Guides) -> f64 {
    g.sw * 1.5
}

fn dot(pen: &mut Pen, g: &Guides) {
    let s = dot_size(g);
    pen.rect(g.cx - s / 2.0, g.b - s, g.cx + s / 2.0, g.b);
}

fn period(pen: &mut Pen, g: &Guides) {
    dot(pen, g);
}

fn comma(pen: &mut Pen, g: &Guides) {
    let s = dot_size(g);
    let x1 = g.cx + s / 2.0;
    pen.polygon(&[
        (g.cx - s / 2.0, g.b - s),
        (x1, g.b - s),
        (x1, g.b),
        (g.cx - s / 2.0, g.b + s),
    ]);
}

fn exclamation(pen: &mut Pen, g: &Guides) {
    let s = dot_size(g);
    pen.rect(g.cx - g.sw / 2.0, g.t, g.cx + g.sw / 2.0, g.b - s * 2.0);
    dot(pen, g);
}

fn question(pen: &mut Pen, g: &Guides) {
    let s = dot_size(g);
    let ry = g.h * 0.2;
    let rx = (g.w / 2.0).max(pen.stroke());
    pen.arc_band(g.cx, g.t + ry, rx, ry, 180.0, 450.0);
    pen.rect(g.cx - g.sw / 2.0, g.t + ry * 2.0 - g.sw, g.cx + g.sw / 2.0, g.b - s * 2.0);
    dot(pen, g);
}
