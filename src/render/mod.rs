//! Host stand-in rendering: SVG documents for displayed outlines and their rasterization.

pub mod paint;
pub mod raster;
pub mod svg;

pub use paint::{ColorStop, Gradient, Paint};
pub use raster::{FrameRGBA, rasterize_svg};
pub use svg::{SvgDocument, TextOverlay};
