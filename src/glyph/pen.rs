use std::f64::consts::PI;
use std::fmt::Write as _;

/// Writes outline descriptions out of filled primitives.
///
/// Solid parts are emitted with positive winding (clockwise on a y-down screen) and counters
/// with negative winding, so overlapping strokes merge and holes stay open under the default
/// non-zero fill rule. Coordinates are rounded to hundredths.
#[derive(Debug)]
pub(crate) struct Pen {
    d: String,
    stroke: f64,
}

impl Pen {
    pub(crate) fn new(stroke: f64) -> Self {
        Self {
            d: String::new(),
            stroke,
        }
    }

    pub(crate) fn stroke(&self) -> f64 {
        self.stroke
    }

    pub(crate) fn finish(self) -> String {
        self.d
    }

    fn verb(&mut self, letter: char, coords: &[f64]) {
        self.d.push(letter);
        for (i, v) in coords.iter().enumerate() {
            if i > 0 {
                self.d.push(',');
            }
            // Writing into a String cannot fail.
            let _ = write!(self.d, "{}", round2(*v));
        }
    }

    fn move_to(&mut self, p: (f64, f64)) {
        self.verb('M', &[p.0, p.1]);
    }

    fn line_to(&mut self, p: (f64, f64)) {
        self.verb('L', &[p.0, p.1]);
    }

    fn quad_to(&mut self, c: (f64, f64), p: (f64, f64)) {
        self.verb('Q', &[c.0, c.1, p.0, p.1]);
    }

    fn close(&mut self) {
        self.d.push('Z');
    }

    /// Axis-aligned filled box between two corners.
    pub(crate) fn rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.polygon(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]);
    }

    /// Filled polygon, rewound to positive orientation when needed.
    pub(crate) fn polygon(&mut self, pts: &[(f64, f64)]) {
        self.polygon_wound(pts, true);
    }

    fn polygon_wound(&mut self, pts: &[(f64, f64)], solid: bool) {
        if pts.len() < 3 {
            return;
        }
        let positive = signed_area(pts) >= 0.0;
        let mut ordered = pts.to_vec();
        if positive != solid {
            ordered.reverse();
        }
        self.move_to(ordered[0]);
        for &p in &ordered[1..] {
            self.line_to(p);
        }
        self.close();
    }

    /// Straight stroke of the pen's width centred on the segment `a -> b`.
    pub(crate) fn bar(&mut self, a: (f64, f64), b: (f64, f64)) {
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f64::EPSILON {
            return;
        }
        let half = self.stroke / 2.0;
        let (nx, ny) = (-dy / len * half, dx / len * half);
        self.polygon(&[
            (a.0 + nx, a.1 + ny),
            (b.0 + nx, b.1 + ny),
            (b.0 - nx, b.1 - ny),
            (a.0 - nx, a.1 - ny),
        ]);
    }

    /// Filled ellipse (solid) or elliptical counter (hole).
    pub(crate) fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, solid: bool) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (from, to) = if solid { (0.0, 360.0) } else { (360.0, 0.0) };
        self.move_to(on_ellipse(cx, cy, rx, ry, from));
        self.arc(cx, cy, rx, ry, from, to);
        self.close();
    }

    /// Elliptical ring of the pen's width; the outer edge touches `rx`/`ry`.
    pub(crate) fn ring(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        let t = self.stroke;
        self.ellipse(cx, cy, rx, ry, true);
        self.ellipse(cx, cy, rx - t, ry - t, false);
    }

    /// Curved stroke following an ellipse from `a0` to `a1` degrees (`a0 < a1`).
    ///
    /// Angles are measured on screen: 0 points right, 90 down, 180 left, 270 up. The outer edge
    /// touches `rx`/`ry`.
    pub(crate) fn arc_band(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, a0: f64, a1: f64) {
        let t = self.stroke;
        let (irx, iry) = ((rx - t).max(0.0), (ry - t).max(0.0));
        self.move_to(on_ellipse(cx, cy, rx, ry, a0));
        self.arc(cx, cy, rx, ry, a0, a1);
        self.line_to(on_ellipse(cx, cy, irx, iry, a1));
        self.arc(cx, cy, irx, iry, a1, a0);
        self.close();
    }

    /// Quadratic segments along an ellipse, at most 45 degrees each, from the current point.
    fn arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, from: f64, to: f64) {
        let sweep = to - from;
        let steps = (sweep.abs() / 45.0).ceil().max(1.0) as usize;
        let step = sweep / steps as f64;
        let k = 1.0 / (step.abs() / 2.0).to_radians().cos();
        for i in 0..steps {
            let start = from + step * i as f64;
            let mid = start + step / 2.0;
            let ctrl = on_ellipse(cx, cy, rx * k, ry * k, mid);
            self.quad_to(ctrl, on_ellipse(cx, cy, rx, ry, start + step));
        }
    }
}

fn on_ellipse(cx: f64, cy: f64, rx: f64, ry: f64, deg: f64) -> (f64, f64) {
    let a = deg * PI / 180.0;
    (cx + rx * a.cos(), cy + ry * a.sin())
}

fn signed_area(pts: &[(f64, f64)]) -> f64 {
    let n = pts.len();
    (0..n)
        .map(|i| {
            let (x0, y0) = pts[i];
            let (x1, y1) = pts[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum::<f64>()
        / 2.0
}

pub(crate) fn round2(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    // Avoid emitting "-0".
    if r == 0.0 { 0.0 } else { r }
}
