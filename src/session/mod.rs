//! Simulated host display loop.

mod frame_loop;

pub use frame_loop::{FrameLoop, FrameLoopOpts, LoopStats, MAX_FRAMES, PointerKey};
