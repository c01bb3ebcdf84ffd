//! Jiggly renders text as simplified vector letterforms that wobble.
//!
//! Each character becomes a small closed outline; every animation tick redraws the outline from
//! its cached base geometry with bounded random jitter, an optional push away from the pointer and
//! an optional per-letter intensity wave. The public API is component-oriented:
//!
//! - Configure a [`JigglyTextProps`] (or load it from JSON)
//! - Create a [`JigglyText`] with a [`TextMetrics`] source
//! - Feed it frame callbacks and pointer events, and paint [`JigglyText::displayed_outline`] or
//!   [`JigglyText::to_svg`]
//! - Or let a [`FrameLoop`] simulate a display and stream applied updates into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod component;
pub mod encode;
pub mod glyph;
pub mod layout;
pub mod outline;
pub mod perturb;
pub mod render;
pub mod session;

pub use crate::foundation::core::{BezPath, Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{JigglyError, JigglyResult};

pub use crate::animation::{
    AnimationConfig, AnimationDriver, FrameHandle, OutlineFrame, OutlineObserver, TickOutcome,
};
pub use crate::component::{JigglyText, JigglyTextProps};
pub use crate::encode::sink::{
    FrameSink, InMemorySink, PngDirSink, RecordedFrame, SinkConfig, SinkFrame, SvgDirSink,
};
pub use crate::glyph::{GlyphBox, outline_for};
pub use crate::layout::{ApproxMetrics, ParleyMetrics, TextLayout, TextMetrics, layout_text};
pub use crate::outline::{CommandTag, DrawCommand, Outline};
pub use crate::render::{ColorStop, FrameRGBA, Gradient, Paint, SvgDocument, rasterize_svg};
pub use crate::session::{FrameLoop, FrameLoopOpts, LoopStats, PointerKey};
