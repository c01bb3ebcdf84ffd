use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::Viewport;
use crate::foundation::error::{JigglyError, JigglyResult};
use crate::render::rasterize_svg;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkConfig {
    pub viewport: Viewport,
    /// Simulated display refresh rate driving the loop.
    pub refresh_hz: f64,
}

/// One applied update, ready to be stored.
#[derive(Debug, Clone, Copy)]
pub struct SinkFrame<'a> {
    /// 1-based count of applied updates.
    pub tick: u64,
    pub time_ms: f64,
    pub outline: &'a str,
    /// Standalone SVG document for `outline`.
    pub svg: &'a str,
}

/// Sink contract for consuming applied updates.
///
/// Ordering contract: `push_frame` is called in strictly increasing `tick` order between one
/// `begin` and its `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> JigglyResult<()>;
    fn push_frame(&mut self, frame: &SinkFrame<'_>) -> JigglyResult<()>;
    fn end(&mut self) -> JigglyResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub tick: u64,
    pub time_ms: f64,
    pub outline: String,
    pub svg: String,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in tick order.
    pub frames: Vec<RecordedFrame>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> JigglyResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &SinkFrame<'_>) -> JigglyResult<()> {
        self.frames.push(RecordedFrame {
            tick: frame.tick,
            time_ms: frame.time_ms,
            outline: frame.outline.to_owned(),
            svg: frame.svg.to_owned(),
        });
        Ok(())
    }

    fn end(&mut self) -> JigglyResult<()> {
        self.ended = true;
        Ok(())
    }
}

fn frame_path(dir: &Path, index: usize, ext: &str) -> PathBuf {
    dir.join(format!("frame_{index:05}.{ext}"))
}

fn ensure_dir(dir: &Path) -> JigglyResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

/// Writes every frame as `frame_NNNNN.svg` into a directory.
#[derive(Debug)]
pub struct SvgDirSink {
    dir: PathBuf,
    written: usize,
}

impl SvgDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameSink for SvgDirSink {
    fn begin(&mut self, _cfg: SinkConfig) -> JigglyResult<()> {
        self.written = 0;
        ensure_dir(&self.dir)
    }

    fn push_frame(&mut self, frame: &SinkFrame<'_>) -> JigglyResult<()> {
        let path = frame_path(&self.dir, self.written, "svg");
        std::fs::write(&path, frame.svg)
            .with_context(|| format!("write svg '{}'", path.display()))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> JigglyResult<()> {
        tracing::debug!(frames = self.written, dir = %self.dir.display(), "svg frames written");
        Ok(())
    }
}

/// Rasterizes every frame and writes it as `frame_NNNNN.png` into a directory.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    scale: f32,
    written: usize,
}

impl PngDirSink {
    pub fn new(dir: impl Into<PathBuf>, scale: f32) -> JigglyResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(JigglyError::validation(format!(
                "png scale must be finite and > 0 (got {scale})"
            )));
        }
        Ok(Self {
            dir: dir.into(),
            scale,
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, _cfg: SinkConfig) -> JigglyResult<()> {
        self.written = 0;
        ensure_dir(&self.dir)
    }

    fn push_frame(&mut self, frame: &SinkFrame<'_>) -> JigglyResult<()> {
        let path = frame_path(&self.dir, self.written, "png");
        write_png(&path, frame.svg, self.scale)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> JigglyResult<()> {
        tracing::debug!(frames = self.written, dir = %self.dir.display(), "png frames written");
        Ok(())
    }
}

/// Rasterize `svg` and save it as a PNG at `path`.
pub fn write_png(path: &Path, svg: &str, scale: f32) -> JigglyResult<()> {
    let frame = rasterize_svg(svg, scale)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
