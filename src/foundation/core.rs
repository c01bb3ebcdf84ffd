pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Size of the local coordinate space an outline is drawn in.
///
/// The drawing surface is sized to this box and uses it as its `viewBox`, so outline coordinates
/// and viewport coordinates are the same units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in local units.
    pub width: f64,
    /// Height in local units.
    pub height: f64,
}

impl Viewport {
    /// Viewport used when text could not be measured.
    pub const FALLBACK: Viewport = Viewport {
        width: 100.0,
        height: 100.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Local-space rectangle covering the whole viewport.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Map a screen-space position onto local coordinates.
    ///
    /// `element` is where the rendered surface sits on screen. Each axis is rescaled by the ratio
    /// of the local box to the on-screen size. Returns `None` for a degenerate element rect.
    pub fn map_from_screen(self, screen: Point, element: Rect) -> Option<Point> {
        let w = element.width();
        let h = element.height();
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return None;
        }
        let sx = self.width / w;
        let sy = self.height / h;
        Some(Point::new(
            (screen.x - element.x0) * sx,
            (screen.y - element.y0) * sy,
        ))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
