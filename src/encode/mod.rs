//! Frame sinks.
//!
//! Sinks consume applied outline updates in tick order and are fed by
//! [`FrameLoop::run`](crate::session::FrameLoop::run).

pub mod sink;

pub use sink::{
    FrameSink, InMemorySink, PngDirSink, RecordedFrame, SinkConfig, SinkFrame, SvgDirSink,
    write_png,
};
