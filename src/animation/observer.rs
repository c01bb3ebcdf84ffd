use crate::foundation::error::JigglyResult;

/// One published outline update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineFrame<'a> {
    /// 1-based count of applied ticks since the component was created.
    pub tick: u64,
    /// Host time of the frame callback that produced this update.
    pub time_ms: f64,
    /// Outline description to paint.
    pub outline: &'a str,
}

/// Receives every applied update, after the displayed outline has been replaced.
pub trait OutlineObserver {
    fn on_outline(&mut self, frame: &OutlineFrame<'_>) -> JigglyResult<()>;
}

impl<F> OutlineObserver for F
where
    F: FnMut(&OutlineFrame<'_>) -> JigglyResult<()>,
{
    fn on_outline(&mut self, frame: &OutlineFrame<'_>) -> JigglyResult<()> {
        self(frame)
    }
}
