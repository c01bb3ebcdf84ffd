use std::fmt::Write as _;

use crate::foundation::core::{Point, Viewport};
use crate::render::paint::{Gradient, Paint, linear_endpoints};

const GRADIENT_ID: &str = "jiggly-fill";

/// Invisible copy of the source text laid over the outline, so it can be selected and read by
/// assistive tools.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay<'a> {
    pub text: &'a str,
    pub font: &'a str,
    pub font_size: f64,
    /// Baseline origin of the first character.
    pub origin: Point,
}

/// Standalone SVG document for one displayed outline.
#[derive(Clone, Debug)]
pub struct SvgDocument<'a> {
    viewport: Viewport,
    outline: &'a str,
    paint: &'a Paint,
    overlay: Option<TextOverlay<'a>>,
}

impl<'a> SvgDocument<'a> {
    pub fn new(viewport: Viewport, outline: &'a str, paint: &'a Paint) -> Self {
        Self {
            viewport,
            outline,
            paint,
            overlay: None,
        }
    }

    pub fn with_overlay(mut self, overlay: TextOverlay<'a>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Serialize to SVG markup.
    pub fn render(&self) -> String {
        let Viewport { width, height } = self.viewport;
        let mut out = String::with_capacity(self.outline.len() + 512);
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        let fill = match &self.paint.gradient {
            Some(g) => {
                write_gradient(&mut out, g);
                format!("url(#{GRADIENT_ID})")
            }
            None => escape(&self.paint.fill),
        };

        if !self.outline.is_empty() {
            let _ = write!(
                out,
                r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                escape(self.outline),
                fill,
                escape(&self.paint.stroke),
                self.paint.stroke_width,
            );
        }

        if let Some(o) = &self.overlay {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="transparent" style="user-select:text">{}</text>"#,
                o.origin.x,
                o.origin.y,
                escape(o.font),
                o.font_size,
                escape(o.text),
            );
        }

        out.push_str("</svg>");
        out
    }
}

fn write_gradient(out: &mut String, gradient: &Gradient) {
    out.push_str("<defs>");
    match gradient {
        Gradient::Linear { angle, .. } => {
            let ((x1, y1), (x2, y2)) = linear_endpoints(*angle);
            let _ = write!(
                out,
                r#"<linearGradient id="{GRADIENT_ID}" x1="{x1}%" y1="{y1}%" x2="{x2}%" y2="{y2}%">"#
            );
        }
        Gradient::Radial { .. } => {
            let _ = write!(
                out,
                r#"<radialGradient id="{GRADIENT_ID}" cx="50%" cy="50%" r="50%">"#
            );
        }
    }
    for stop in gradient.stops() {
        let _ = write!(
            out,
            r#"<stop offset="{}%" stop-color="{}"/>"#,
            stop.offset,
            escape(&stop.color)
        );
    }
    out.push_str(match gradient {
        Gradient::Linear { .. } => "</linearGradient>",
        Gradient::Radial { .. } => "</radialGradient>",
    });
    out.push_str("</defs>");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
