use crate::animation::TickOutcome;
use crate::component::JigglyText;
use crate::encode::sink::{FrameSink, SinkConfig, SinkFrame};
use crate::foundation::core::Point;
use crate::foundation::error::{JigglyError, JigglyResult};

/// Upper bound on frame callbacks in one loop.
pub const MAX_FRAMES: u64 = 1_000_000;

/// Options controlling a simulated display loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLoopOpts {
    /// Display refresh rate the frame callbacks arrive at.
    pub refresh_hz: f64,
    /// Host time of the first frame callback.
    pub start_ms: f64,
    /// Span covered; frames land on every refresh boundary from `start_ms` through
    /// `start_ms + duration_ms` inclusive.
    pub duration_ms: f64,
}

impl Default for FrameLoopOpts {
    fn default() -> Self {
        Self {
            refresh_hz: 60.0,
            start_ms: 0.0,
            duration_ms: 1_000.0,
        }
    }
}

impl FrameLoopOpts {
    pub fn validate(&self) -> JigglyResult<()> {
        if !self.refresh_hz.is_finite() || self.refresh_hz <= 0.0 {
            return Err(JigglyError::validation("refresh_hz must be finite and > 0"));
        }
        if !self.start_ms.is_finite() {
            return Err(JigglyError::validation("start_ms must be finite"));
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(JigglyError::validation("duration_ms must be finite and >= 0"));
        }
        let frames = self.duration_ms * self.refresh_hz / 1_000.0;
        if !frames.is_finite() || frames >= MAX_FRAMES as f64 {
            return Err(JigglyError::validation(format!(
                "loop would exceed {MAX_FRAMES} frames (duration_ms {} at {} Hz)",
                self.duration_ms, self.refresh_hz
            )));
        }
        Ok(())
    }

    pub fn frame_interval_ms(&self) -> f64 {
        1_000.0 / self.refresh_hz
    }

    pub fn frame_count(&self) -> u64 {
        // Tolerate representation error so an exact multiple still includes its last frame.
        let last = (self.duration_ms * self.refresh_hz / 1_000.0 + 1e-9).floor() as u64;
        last.saturating_add(1).min(MAX_FRAMES)
    }

    pub fn frame_time(&self, index: u64) -> f64 {
        self.start_ms + index as f64 * self.frame_interval_ms()
    }
}

/// Scripted pointer state from `time_ms` on. `None` means the pointer left the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerKey {
    pub time_ms: f64,
    /// Local coordinates.
    pub position: Option<Point>,
}

/// Loop statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frame callbacks delivered.
    pub frames_total: u64,
    /// Callbacks that published a new outline.
    pub frames_applied: u64,
    /// Callbacks skipped by frame pacing.
    pub frames_throttled: u64,
}

/// Drives a [`JigglyText`] the way a display refresh would.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    opts: FrameLoopOpts,
    pointer_path: Vec<PointerKey>,
}

impl FrameLoop {
    pub fn new(opts: FrameLoopOpts) -> JigglyResult<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            pointer_path: Vec::new(),
        })
    }

    /// Replace the scripted pointer path. Keys are applied in time order.
    pub fn with_pointer_path(mut self, mut keys: Vec<PointerKey>) -> Self {
        keys.sort_by(|a, b| a.time_ms.total_cmp(&b.time_ms));
        self.pointer_path = keys;
        self
    }

    pub fn opts(&self) -> &FrameLoopOpts {
        &self.opts
    }

    /// Run the loop, pushing every applied update to `sink`.
    ///
    /// Stops early once the component has no scheduled loop. Running again from an earlier
    /// `start_ms` is fine: the first callback before the previous update is applied immediately.
    pub fn run(&self, text: &mut JigglyText, sink: &mut dyn FrameSink) -> JigglyResult<LoopStats> {
        sink.begin(SinkConfig {
            viewport: text.viewport(),
            refresh_hz: self.opts.refresh_hz,
        })?;

        let mut stats = LoopStats::default();
        let mut next_key = 0;
        for i in 0..self.opts.frame_count() {
            let now = self.opts.frame_time(i);
            while let Some(key) = self.pointer_path.get(next_key)
                && key.time_ms <= now
            {
                text.set_pointer_local(key.position);
                next_key += 1;
            }

            let Some(handle) = text.frame_handle() else {
                tracing::debug!(frame = i, "no loop scheduled; stopping");
                break;
            };
            stats.frames_total += 1;
            match text.on_frame(handle, now)? {
                TickOutcome::Applied(outline) => {
                    stats.frames_applied += 1;
                    let svg = text.to_svg();
                    sink.push_frame(&SinkFrame {
                        tick: text.ticks(),
                        time_ms: now,
                        outline: &outline,
                        svg: &svg,
                    })?;
                }
                TickOutcome::Throttled => stats.frames_throttled += 1,
                TickOutcome::Idle | TickOutcome::Cancelled => break,
            }
        }

        sink.end()?;
        Ok(stats)
    }

    /// Run the loop without recording frames; the component is left at the last applied update.
    pub fn advance(&self, text: &mut JigglyText) -> JigglyResult<LoopStats> {
        self.run(text, &mut Discard)
    }
}

struct Discard;

impl FrameSink for Discard {
    fn begin(&mut self, _cfg: SinkConfig) -> JigglyResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _frame: &SinkFrame<'_>) -> JigglyResult<()> {
        Ok(())
    }

    fn end(&mut self) -> JigglyResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_loop.rs"]
mod tests;
