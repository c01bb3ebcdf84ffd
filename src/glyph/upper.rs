use super::{GlyphFn, Guides, Pen};

pub(super) fn lookup(ch: char) -> Option<GlyphFn> {
    let f: GlyphFn = match ch {
        'A' => a,
        'B' => b,
        'C' => c,
        'D' => d,
        'E' => e,
        'F' => f,
        'G' => g,
        'H' => h,
        'I' => i,
        'J' => j,
        'K' => k,
        'L' => l,
        'M' => m,
        'N' => n,
        'O' => o,
        'P' => p,
        'Q' => q,
        'R' => r,
        'S' => s,
        'T' => t,
        'U' => u,
        'V' => v,
        'W' => w,
        'X' => x,
        'Y' => y,
        'Z' => z,
        _ => return None,
    };
    Some(f)
}

fn stem_left(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.l + g.sw, g.b);
}

fn stem_right(pen: &mut Pen, g: &Guides) {
    pen.rect(g.r - g.sw, g.t, g.r, g.b);
}

/// Closed bowl attached to the stem, spanning `top..bottom` vertically.
fn bowl(pen: &mut Pen, g: &Guides, top: f64, bottom: f64) {
    let ry = (bottom - top) / 2.0;
    let rx = (g.r - g.cx).max(g.sw);
    let cy = top + ry;
    pen.rect(g.l, top, g.cx, top + g.sw);
    pen.rect(g.l, bottom - g.sw, g.cx, bottom);
    pen.arc_band(g.cx, cy, rx, ry, 270.0, 450.0);
}

fn a(pen: &mut Pen, g: &Guides) {
    pen.bar((g.l + g.sw / 2.0, g.b), (g.cx, g.t + g.sw / 2.0));
    pen.bar((g.cx, g.t + g.sw / 2.0), (g.r - g.sw / 2.0, g.b));
    let y = g.my + g.h * 0.1;
    pen.rect(g.l + g.w * 0.22, y, g.r - g.w * 0.22, y + g.sw);
}

fn b(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    bowl(pen, g, g.t, g.my + g.sw / 2.0);
    bowl(pen, g, g.my - g.sw / 2.0, g.b);
}

fn c(pen: &mut Pen, g: &Guides) {
    pen.arc_band(g.cx, g.my, g.w / 2.0, g.h / 2.0, 45.0, 315.0);
}

fn d(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    bowl(pen, g, g.t, g.b);
}

fn e(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    pen.rect(g.l, g.t, g.r, g.t + g.sw);
    pen.rect(g.l, g.my - g.sw / 2.0, g.r - g.w * 0.15, g.my + g.sw / 2.0);
    pen.rect(g.l, g.b - g.sw, g.r, g.b);
}

fn f(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    pen.rect(g.l, g.t, g.r, g.t + g.sw);
    pen.rect(g.l, g.my - g.sw / 2.0, g.r - g.w * 0.15, g.my + g.sw / 2.0);
}

fn g(pen: &mut Pen, gd: &Guides) {
    pen.arc_band(gd.cx, gd.my, gd.w / 2.0, gd.h / 2.0, 30.0, 330.0);
    pen.rect(gd.cx, gd.my, gd.r, gd.my + gd.sw);
    pen.rect(gd.r - gd.sw, gd.my, gd.r, gd.b - gd.h * 0.2);
}

fn h(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    stem_right(pen, g);
    pen.rect(g.l, g.my - g.sw / 2.0, g.r, g.my + g.sw / 2.0);
}

fn i(pen: &mut Pen, g: &Guides) {
    pen.rect(g.cx - g.sw / 2.0, g.t, g.cx + g.sw / 2.0, g.b);
    pen.rect(g.l + g.w * 0.2, g.t, g.r - g.w * 0.2, g.t + g.sw);
    pen.rect(g.l + g.w * 0.2, g.b - g.sw, g.r - g.w * 0.2, g.b);
}

fn j(pen: &mut Pen, g: &Guides) {
    let ry = g.h * 0.25;
    pen.rect(g.r - g.sw, g.t, g.r, g.b - ry);
    pen.arc_band(g.cx, g.b - ry, g.w / 2.0, ry, 0.0, 180.0);
}

fn k(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    pen.bar((g.l + g.sw, g.my + g.sw / 2.0), (g.r - g.sw / 2.0, g.t));
    pen.bar((g.l + g.sw + g.w * 0.15, g.my - g.h * 0.05), (g.r - g.sw / 2.0, g.b));
}

fn l(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    pen.rect(g.l, g.b - g.sw, g.r, g.b);
}

fn m(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    stem_right(pen, g);
    let v = (g.cx, g.my + g.h * 0.1);
    pen.bar((g.l + g.sw / 2.0, g.t), v);
    pen.bar(v, (g.r - g.sw / 2.0, g.t));
}

fn n(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    stem_right(pen, g);
    pen.bar((g.l + g.sw / 2.0, g.t), (g.r - g.sw / 2.0, g.b));
}

fn o(pen: &mut Pen, g: &Guides) {
    pen.ring(g.cx, g.my, g.w / 2.0, g.h / 2.0);
}

fn p(pen: &mut Pen, g: &Guides) {
    stem_left(pen, g);
    bowl(pen, g, g.t, g.t + g.h * 0.55);
}

fn q(pen: &mut Pen, g: &Guides) {
    o(pen, g);
    pen.bar((g.cx + g.w * 0.1, g.my + g.h * 0.2), (g.r, g.b));
}

fn r(pen: &mut Pen, g: &Guides) {
    p(pen, g);
    pen.bar((g.cx, g.t + g.h * 0.55 - g.sw / 2.0), (g.r - g.sw / 2.0, g.b));
}

fn s(pen: &mut Pen, g: &Guides) {
    let ry = g.h / 4.0;
    let rx = g.w / 2.0;
    pen.arc_band(g.cx, g.t + ry, rx, ry + g.sw / 4.0, 90.0, 330.0);
    pen.arc_band(g.cx, g.b - ry, rx, ry + g.sw / 4.0, 270.0, 510.0);
}

fn t(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.r, g.t + g.sw);
    pen.rect(g.cx - g.sw / 2.0, g.t, g.cx + g.sw / 2.0, g.b);
}

fn u(pen: &mut Pen, g: &Guides) {
    let ry = g.h * 0.3;
    pen.rect(g.l, g.t, g.l + g.sw, g.b - ry);
    pen.rect(g.r - g.sw, g.t, g.r, g.b - ry);
    pen.arc_band(g.cx, g.b - ry, g.w / 2.0, ry, 0.0, 180.0);
}

fn v(pen: &mut Pen, g: &Guides) {
    let bottom = (g.cx, g.b - g.sw / 2.0);
    pen.bar((g.l + g.sw / 2.0, g.t), bottom);
    pen.bar(bottom, (g.r - g.sw / 2.0, g.t));
}

fn w(pen: &mut Pen, g: &Guides) {
    let pts = [
        (g.l + g.sw / 2.0, g.t),
        (g.l + g.w * 0.25, g.b - g.sw / 2.0),
        (g.cx, g.t + g.h * 0.3),
        (g.r - g.w * 0.25, g.b - g.sw / 2.0),
        (g.r - g.sw / 2.0, g.t),
    ];
    for pair in pts.windows(2) {
        pen.bar(pair[0], pair[1]);
    }
}

fn x(pen: &mut Pen, g: &Guides) {
    pen.bar((g.l + g.sw / 2.0, g.t), (g.r - g.sw / 2.0, g.b));
    pen.bar((g.r - g.sw / 2.0, g.t), (g.l + g.sw / 2.0, g.b));
}

fn y(pen: &mut Pen, g: &Guides) {
    let fork = (g.cx, g.my);
    pen.bar((g.l + g.sw / 2.0, g.t), fork);
    pen.bar((g.r - g.sw / 2.0, g.t), fork);
    pen.rect(g.cx - g.sw / 2.0, g.my, g.cx + g.sw / 2.0, g.b);
}

fn z(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.r, g.t + g.sw);
    pen.rect(g.l, g.b - g.sw, g.r, g.b);
    pen.bar((g.r - g.sw / 2.0, g.t + g.sw), (g.l + g.sw / 2.0, g.b - g.sw));
}
