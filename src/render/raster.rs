use crate::foundation::error::{JigglyError, JigglyResult};

/// Rasterized frame pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, straight (non-premultiplied) alpha.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Render SVG markup at `scale` times its intrinsic size.
pub fn rasterize_svg(svg: &str, scale: f32) -> JigglyResult<FrameRGBA> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(JigglyError::validation(format!(
            "raster scale must be finite and > 0 (got {scale})"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| JigglyError::render(format!("parse svg: {e}")))?;

    let width = ((tree.size().width() * scale).ceil() as u32).max(1);
    let height = ((tree.size().height() * scale).ceil() as u32).max(1);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| JigglyError::render("failed to allocate svg pixmap"))?;

    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(FrameRGBA {
        width,
        height,
        data,
    })
}
