use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::config::AnimationConfig;
use crate::foundation::core::Point;
use crate::layout::BaseOutlines;
use crate::outline::Outline;
use crate::perturb::{jitter, wave_intensity_factor, wave_phase};

/// Token for one scheduled frame loop.
///
/// Every (re)start issues a new handle and invalidates the previous one, so a callback left over
/// from a cancelled loop can never drive the outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Result of one frame callback.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The driver is not running.
    Idle,
    /// The handle belongs to a loop that has been cancelled.
    Cancelled,
    /// Too early since the last applied update; reschedule without recomputing.
    Throttled,
    /// A freshly perturbed outline description.
    Applied(String),
}

/// Inputs a tick reads but never writes.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub base: &'a BaseOutlines,
    /// Pointer position in local coordinates, if over the surface.
    pub pointer: Option<Point>,
    /// Milliseconds since the text was last laid out.
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DriverState {
    Idle,
    Running(FrameHandle),
}

/// Frame-paced perturbation loop.
///
/// Idle until [`start`](Self::start); while running, [`on_frame`](Self::on_frame) applies at
/// most one update per `speed` milliseconds, regardless of how often the host calls it.
#[derive(Debug)]
pub struct AnimationDriver {
    config: AnimationConfig,
    state: DriverState,
    next_handle: u64,
    last_update_ms: Option<f64>,
    rng: StdRng,
}

impl AnimationDriver {
    pub fn new(config: AnimationConfig) -> Self {
        let rng = make_rng(config.seed);
        Self {
            config,
            state: DriverState::Idle,
            next_handle: 0,
            last_update_ms: None,
            rng,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running(_))
    }

    /// Handle of the live loop, if any.
    pub fn handle(&self) -> Option<FrameHandle> {
        match self.state {
            DriverState::Running(h) => Some(h),
            DriverState::Idle => None,
        }
    }

    /// Start a loop, cancelling any loop already running.
    pub fn start(&mut self) -> FrameHandle {
        self.stop();
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.state = DriverState::Running(handle);
        tracing::debug!(?handle, "animation loop started");
        handle
    }

    /// Cancel the live loop, if any.
    pub fn stop(&mut self) {
        if let DriverState::Running(handle) = self.state {
            tracing::debug!(?handle, "animation loop cancelled");
        }
        self.state = DriverState::Idle;
    }

    /// Swap the configuration and restart if there is something to animate.
    ///
    /// The old loop is always cancelled first. The jitter stream is reseeded only when the seed
    /// changes.
    pub fn reconfigure(&mut self, config: AnimationConfig, has_outline: bool) -> Option<FrameHandle> {
        self.stop();
        if config.seed != self.config.seed {
            self.rng = make_rng(config.seed);
        }
        self.config = config;
        self.resume(has_outline)
    }

    /// Start when the configuration asks for a loop and there is geometry to move.
    pub fn resume(&mut self, has_outline: bool) -> Option<FrameHandle> {
        if self.config.wants_loop() && has_outline {
            Some(self.start())
        } else {
            self.stop();
            None
        }
    }

    /// Frame callback for `handle` at host time `now_ms`.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64, scene: &Scene<'_>) -> TickOutcome {
        match self.state {
            DriverState::Idle => return TickOutcome::Idle,
            DriverState::Running(live) if live != handle => return TickOutcome::Cancelled,
            DriverState::Running(_) => {}
        }

        // A clock that moved backwards counts as elapsed.
        if let Some(last) = self.last_update_ms
            && now_ms >= last
            && now_ms - last < self.config.speed
        {
            return TickOutcome::Throttled;
        }
        self.last_update_ms = Some(now_ms);

        let d = self.compose(scene);
        tracing::trace!(len = d.len(), now_ms, "applied tick");
        TickOutcome::Applied(d)
    }

    /// Perturb the cached base geometry once and serialize it.
    ///
    /// Wave mode perturbs each letter with its own envelope-scaled intensity and concatenates
    /// the results; otherwise the whole text is jittered as one command stream.
    pub fn compose(&mut self, scene: &Scene<'_>) -> String {
        let intensity = self.config.effective_intensity();
        if self.config.wave_mode {
            let mut out = String::new();
            for (i, letter) in scene.base.letters.iter().enumerate() {
                let phase = wave_phase(i, self.config.wave_delay);
                let factor = wave_intensity_factor(scene.elapsed_ms, phase);
                out.push_str(&self.perturb(letter, intensity * factor, scene.pointer).serialize());
            }
            out
        } else {
            self.perturb(&scene.base.full, intensity, scene.pointer)
                .serialize()
        }
    }

    fn perturb(&mut self, base: &Outline, intensity: f64, pointer: Option<Point>) -> Outline {
        let jittered = jitter(base, intensity, &mut self.rng);
        match (self.config.pointer_field(), pointer) {
            (Some(field), Some(p)) => field.apply(&jittered, p),
            _ => jittered,
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
