//! The animated text component: owns layout, pointer state, the driver and its observers.

mod props;

pub use props::JigglyTextProps;

use crate::animation::{
    AnimationDriver, FrameHandle, OutlineFrame, OutlineObserver, Scene, TickOutcome,
};
use crate::foundation::core::{Point, Rect, Viewport};
use crate::foundation::error::JigglyResult;
use crate::layout::{BaseOutlines, LEFT_MARGIN, TextLayout, TextMetrics, layout_text};
use crate::render::{SvgDocument, TextOverlay};

/// Jiggling text.
///
/// The host calls [`on_frame`](Self::on_frame) once per display refresh with the handle from
/// [`frame_handle`](Self::frame_handle), forwards pointer events, and paints
/// [`displayed_outline`](Self::displayed_outline) (or subscribes an observer) after each applied
/// update. All methods take the host's clock in milliseconds.
pub struct JigglyText {
    props: JigglyTextProps,
    metrics: Box<dyn TextMetrics>,
    layout: TextLayout,
    base: BaseOutlines,
    pointer: Option<Point>,
    driver: AnimationDriver,
    displayed: String,
    wave_origin_ms: f64,
    observers: Vec<Box<dyn OutlineObserver>>,
    ticks: u64,
}

impl std::fmt::Debug for JigglyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JigglyText")
            .field("props", &self.props)
            .field("layout", &self.layout)
            .field("pointer", &self.pointer)
            .field("driver", &self.driver)
            .field("observers", &self.observers.len())
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl JigglyText {
    /// Validate `props`, lay out the text and start the driver if there is anything to animate.
    pub fn new(
        props: JigglyTextProps,
        metrics: Box<dyn TextMetrics>,
        now_ms: f64,
    ) -> JigglyResult<Self> {
        props.validate()?;
        let driver = AnimationDriver::new(props.animation.clone());
        let mut this = Self {
            props,
            metrics,
            layout: TextLayout::unavailable(),
            base: BaseOutlines::default(),
            pointer: None,
            driver,
            displayed: String::new(),
            wave_origin_ms: now_ms,
            observers: Vec::new(),
            ticks: 0,
        };
        this.relayout(now_ms);
        this.driver.resume(this.layout.has_outline());
        Ok(this)
    }

    pub fn props(&self) -> &JigglyTextProps {
        &self.props
    }

    /// Apply new props.
    ///
    /// A change to text, font or font size recomputes the layout and resets the wave clock before
    /// the next tick. Any layout or animation change cancels the running loop before a new one is
    /// scheduled; paint-only changes leave the loop alone.
    pub fn set_props(&mut self, props: JigglyTextProps, now_ms: f64) -> JigglyResult<()> {
        props.validate()?;
        let relayout = self.props.layout_differs(&props);
        let reanimate = self.props.animation != props.animation;
        self.props = props;

        if relayout {
            self.driver.stop();
            self.relayout(now_ms);
        }
        if relayout || reanimate {
            self.driver
                .reconfigure(self.props.animation.clone(), self.layout.has_outline());
        }
        Ok(())
    }

    fn relayout(&mut self, now_ms: f64) {
        self.layout = layout_text(
            &self.props.text,
            &self.props.font,
            self.props.font_size,
            self.metrics.as_mut(),
        );
        self.base = self.layout.to_base();
        self.displayed = self.layout.full.clone();
        self.wave_origin_ms = now_ms;
        tracing::debug!(
            letters = self.layout.letters.len(),
            width = self.layout.text_width,
            "text laid out"
        );
    }

    /// Pointer moved to `screen`, with the rendered surface at `element` on screen.
    ///
    /// Ignored unless pointer interaction is enabled.
    pub fn pointer_move(&mut self, screen: Point, element: Rect) {
        if !self.props.animation.interacts_with_mouse {
            return;
        }
        if let Some(local) = self.layout.viewport.map_from_screen(screen, element) {
            self.pointer = Some(local);
        }
    }

    /// Pointer position in local coordinates.
    pub fn set_pointer_local(&mut self, local: Option<Point>) {
        self.pointer = local;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Handle the host must pass back to [`on_frame`](Self::on_frame), if a loop is scheduled.
    pub fn frame_handle(&self) -> Option<FrameHandle> {
        self.driver.handle()
    }

    /// Frame callback. Applied updates replace the displayed outline and are fanned out to every
    /// observer in subscription order; the first observer error is returned.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) -> JigglyResult<TickOutcome> {
        let scene = Scene {
            base: &self.base,
            pointer: self.pointer,
            elapsed_ms: now_ms - self.wave_origin_ms,
        };
        let outcome = self.driver.on_frame(handle, now_ms, &scene);
        if let TickOutcome::Applied(d) = &outcome {
            self.displayed.clone_from(d);
            self.ticks += 1;
            let frame = OutlineFrame {
                tick: self.ticks,
                time_ms: now_ms,
                outline: &self.displayed,
            };
            for observer in &mut self.observers {
                observer.on_outline(&frame)?;
            }
        }
        Ok(outcome)
    }

    /// Cancel the loop. Later callbacks report [`TickOutcome::Idle`].
    pub fn teardown(&mut self) {
        self.driver.stop();
        self.pointer = None;
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn displayed_outline(&self) -> &str {
        &self.displayed
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn base(&self) -> &BaseOutlines {
        &self.base
    }

    pub fn viewport(&self) -> Viewport {
        self.layout.viewport
    }

    /// Number of applied updates so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn subscribe(&mut self, observer: impl OutlineObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Standalone SVG of the displayed outline with its selectable text overlay.
    pub fn to_svg(&self) -> String {
        SvgDocument::new(self.viewport(), &self.displayed, &self.props.paint)
            .with_overlay(TextOverlay {
                text: &self.props.text,
                font: &self.props.font,
                font_size: self.props.font_size,
                origin: Point::new(LEFT_MARGIN, self.layout.baseline),
            })
            .render()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component.rs"]
mod tests;
