//! Animation loop: configuration, frame-paced driver and outline observers.

mod config;
mod driver;
mod observer;

pub use config::AnimationConfig;
pub use driver::{AnimationDriver, FrameHandle, Scene, TickOutcome};
pub use observer::{OutlineFrame, OutlineObserver};
