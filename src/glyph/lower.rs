use super::{GlyphFn, Guides, Pen};

pub(super) fn lookup(ch: char) -> Option<GlyphFn> {
    let f: GlyphFn = match ch {
        'a' => a,
        'b' => b,
        'c' => c,
        'd' => d,
        'e' => e,
        'f' => f,
        'g' => g,
        'h' => h,
        'i' => i,
        'j' => j,
        'k' => k,
        'l' => l,
        'm' => m,
        'n' => n,
        'o' => o,
        'p' => p,
        'q' => q,
        'r' => r,
        's' => s,
        't' => t,
        'u' => u,
        'v' => v,
        'w' => w,
        'x' => x,
        'y' => y,
        'z' => z,
        _ => return None,
    };
    Some(f)
}

fn dot(pen: &mut Pen, g: &Guides, cx: f64) {
    let rad = g.sw * 0.6;
    pen.ellipse(cx, g.t - g.sw * 1.5, rad, rad, true);
}

/// Arch over the body, as in `n` and `h`, from `x0` to `x1`.
fn arch(pen: &mut Pen, g: &Guides, x0: f64, x1: f64) {
    let rx = (x1 - x0) / 2.0;
    let ry = g.h * 0.35;
    pen.arc_band(x0 + rx, g.t + ry, rx, ry, 180.0, 360.0);
    pen.rect(x1 - g.sw, g.t + ry, x1, g.b);
}

fn a(pen: &mut Pen, g: &Guides) {
    let ry = g.h * 0.3;
    pen.ring(g.cx - g.sw / 4.0, g.b - ry, g.w / 2.0 - g.sw / 4.0, ry);
    pen.arc_band(g.cx, g.t + g.h * 0.25, g.w / 2.0, g.h * 0.25, 200.0, 360.0);
    pen.rect(g.r - g.sw, g.t + g.h * 0.25, g.r, g.b);
}

fn b(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.cap, g.l + g.sw, g.b);
    pen.ring(g.cx, g.my, g.w / 2.0, g.h / 2.0);
}

fn c(pen: &mut Pen, g: &Guides) {
    pen.arc_band(g.cx, g.my, g.w / 2.0, g.h / 2.0, 45.0, 315.0);
}

fn d(pen: &mut Pen, g: &Guides) {
    pen.ring(g.cx, g.my, g.w / 2.0, g.h / 2.0);
    pen.rect(g.r - g.sw, g.cap, g.r, g.b);
}

fn e(pen: &mut Pen, g: &Guides) {
    pen.arc_band(g.cx, g.my, g.w / 2.0, g.h / 2.0, 60.0, 360.0);
    pen.rect(g.l, g.my - g.sw / 2.0, g.r, g.my + g.sw / 2.0);
}

fn f(pen: &mut Pen, g: &Guides) {
    let hook = g.w * 0.3;
    pen.rect(g.cx - g.sw / 2.0, g.cap + hook, g.cx + g.sw / 2.0, g.b);
    pen.rect(g.l + g.w * 0.1, g.t, g.r - g.w * 0.1, g.t + g.sw);
    pen.arc_band(
        g.cx + hook - g.sw / 2.0,
        g.cap + hook,
        hook,
        hook,
        180.0,
        330.0,
    );
}

fn g(pen: &mut Pen, gd: &Guides) {
    pen.ring(gd.cx, gd.my, gd.w / 2.0, gd.h / 2.0);
    pen.rect(gd.r - gd.sw, gd.t, gd.r, gd.b);
    pen.arc_band(gd.cx, gd.b, gd.w / 2.0, gd.desc - gd.b, 0.0, 160.0);
}

fn h(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.cap, g.l + g.sw, g.b);
    arch(pen, g, g.l, g.r);
}

fn i(pen: &mut Pen, g: &Guides) {
    pen.rect(g.cx - g.sw / 2.0, g.t, g.cx + g.sw / 2.0, g.b);
    dot(pen, g, g.cx);
}

fn j(pen: &mut Pen, g: &Guides) {
    let x1 = g.cx + g.sw / 2.0;
    pen.rect(g.cx - g.sw / 2.0, g.t, x1, g.b);
    let rx = g.w * 0.3;
    pen.arc_band(x1 - rx, g.b, rx, g.desc - g.b, 0.0, 150.0);
    dot(pen, g, g.cx);
}

fn k(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.cap, g.l + g.sw, g.b);
    pen.bar((g.l + g.sw, g.b - g.h * 0.35), (g.r - g.sw / 2.0, g.t));
    pen.bar((g.l + g.sw + g.w * 0.2, g.b - g.h * 0.45), (g.r - g.sw / 2.0, g.b));
}

fn l(pen: &mut Pen, g: &Guides) {
    pen.rect(g.cx - g.sw / 2.0, g.cap, g.cx + g.sw / 2.0, g.b);
}

fn m(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.l + g.sw, g.b);
    arch(pen, g, g.l, g.cx + g.sw / 2.0);
    arch(pen, g, g.cx - g.sw / 2.0, g.r);
}

fn n(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.l + g.sw, g.b);
    arch(pen, g, g.l, g.r);
}

fn o(pen: &mut Pen, g: &Guides) {
    pen.ring(g.cx, g.my, g.w / 2.0, g.h / 2.0);
}

fn p(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.l + g.sw, g.desc);
    pen.ring(g.cx, g.my, g.w / 2.0, g.h / 2.0);
}

fn q(pen: &mut Pen, g: &Guides) {
    pen.ring(g.cx, g.my, g.w / 2.0, g.h / 2.0);
    pen.rect(g.r - g.sw, g.t, g.r, g.desc);
}

fn r(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.l + g.sw, g.b);
    let rx = g.w / 2.0;
    let ry = g.h * 0.35;
    pen.arc_band(g.l + rx, g.t + ry, rx, ry, 180.0, 300.0);
}

fn s(pen: &mut Pen, g: &Guides) {
    let ry = g.h / 4.0;
    let rx = g.w / 2.0;
    pen.arc_band(g.cx, g.t + ry, rx, ry + g.sw / 4.0, 90.0, 330.0);
    pen.arc_band(g.cx, g.b - ry, rx, ry + g.sw / 4.0, 270.0, 510.0);
}

fn t(pen: &mut Pen, g: &Guides) {
    pen.rect(g.cx - g.sw / 2.0, g.cap + g.h * 0.2, g.cx + g.sw / 2.0, g.b);
    pen.rect(g.l, g.t, g.r - g.w * 0.1, g.t + g.sw);
}

fn u(pen: &mut Pen, g: &Guides) {
    let ry = g.h * 0.35;
    pen.rect(g.l, g.t, g.l + g.sw, g.b - ry);
    pen.rect(g.r - g.sw, g.t, g.r, g.b);
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
        (g.cx, g.t + g.h * 0.35),
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
    pen.bar((g.l + g.sw / 2.0, g.t), (g.cx, g.b - g.sw / 2.0));
    pen.bar((g.r - g.sw / 2.0, g.t), (g.l + g.w * 0.2, g.desc));
}

fn z(pen: &mut Pen, g: &Guides) {
    pen.rect(g.l, g.t, g.r, g.t + g.sw);
    pen.rect(g.l, g.b - g.sw, g.r, g.b);
    pen.bar((g.r - g.sw / 2.0, g.t + g.sw), (g.l + g.sw / 2.0, g.b - g.sw));
}
