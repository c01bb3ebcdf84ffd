//! Pure per-tick transforms over parsed outlines.
//!
//! Every function takes the cached base outline by reference and returns a new outline; base
//! operands are never touched, so the shape always oscillates around its true geometry.

use rand::Rng;

use crate::foundation::core::{Point, Vec2};
use crate::outline::{Operands, Outline};

/// Period constant of the wave envelope, in milliseconds per half cycle.
pub const WAVE_HALF_PERIOD_MS: f64 = 200.0;

/// Redraw every operand as `base + uniform(-intensity, intensity)`.
///
/// Close commands pass through untouched. A non-positive intensity resets the outline to rest.
pub fn jitter<R: Rng + ?Sized>(outline: &Outline, intensity: f64, rng: &mut R) -> Outline {
    outline
        .commands()
        .iter()
        .map(|cmd| {
            if cmd.is_close() {
                return cmd.clone();
            }
            let current: Operands = cmd
                .base
                .iter()
                .map(|&v| {
                    if intensity > 0.0 {
                        v + intensity * rng.gen_range(-1.0_f64..=1.0)
                    } else {
                        v
                    }
                })
                .collect();
            cmd.with_current(current)
        })
        .collect()
}

/// Radial push away from a pointer with linear falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerField {
    /// Distance at which the push reaches zero.
    pub radius: f64,
    /// Push magnitude at zero distance.
    pub strength: f64,
}

impl PointerField {
    pub fn new(radius: f64, strength: f64) -> Self {
        Self { radius, strength }
    }

    /// Offset applied to `point` by a pointer at `pointer`.
    ///
    /// Zero outside the radius and for a point exactly under the pointer.
    pub fn displacement(&self, point: Point, pointer: Point) -> Vec2 {
        let delta = point - pointer;
        let dist = delta.hypot();
        if !(dist > 0.0 && dist < self.radius) {
            return Vec2::ZERO;
        }
        let falloff = 1.0 - dist / self.radius;
        delta / dist * (self.strength * falloff)
    }

    /// Push every coordinate pair of `outline`'s current operands away from `pointer`.
    ///
    /// Operands are read as alternating x/y values; a trailing unpaired value is left alone.
    /// Applied on top of whatever is current, so it stacks with jitter.
    pub fn apply(&self, outline: &Outline, pointer: Point) -> Outline {
        outline
            .commands()
            .iter()
            .map(|cmd| {
                if cmd.is_close() {
                    return cmd.clone();
                }
                let mut current = cmd.current.clone();
                for pair in current.chunks_exact_mut(2) {
                    let p = Point::new(pair[0], pair[1]);
                    let d = self.displacement(p, pointer);
                    pair[0] += d.x;
                    pair[1] += d.y;
                }
                cmd.with_current(current)
            })
            .collect()
    }
}

/// Phase lag of letter `index`, in milliseconds.
pub fn wave_phase(index: usize, wave_delay_ms: f64) -> f64 {
    index as f64 * wave_delay_ms
}

/// Jitter scale for a letter at `elapsed_ms` given its phase; always within `[0, 1]`.
pub fn wave_intensity_factor(elapsed_ms: f64, phase_ms: f64) -> f64 {
    let v = 0.5 + 0.5 * (std::f64::consts::PI * (elapsed_ms - phase_ms) / WAVE_HALF_PERIOD_MS).sin();
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/perturb.rs"]
mod tests;
