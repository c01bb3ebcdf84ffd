use crate::foundation::error::{JigglyError, JigglyResult};
use crate::perturb::PointerField;

/// Per-render animation settings.
///
/// Field names follow the public camelCase configuration surface; every field is optional when
/// deserializing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    /// Jitter bound in coordinate units.
    pub intensity: f64,
    /// Minimum milliseconds between applied updates.
    pub speed: f64,
    /// Enables jitter.
    pub animated: bool,
    /// Enables the pointer push.
    pub interacts_with_mouse: bool,
    pub mouse_radius: f64,
    pub mouse_strength: f64,
    /// Per-letter travelling intensity wave.
    pub wave_mode: bool,
    /// Lag between consecutive letters in wave mode, in milliseconds.
    pub wave_delay: f64,
    /// Seed for reproducible jitter; fresh entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            intensity: 1.5,
            speed: 50.0,
            animated: true,
            interacts_with_mouse: false,
            mouse_radius: 50.0,
            mouse_strength: 15.0,
            wave_mode: false,
            wave_delay: 100.0,
            seed: None,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> JigglyResult<()> {
        fn non_negative(name: &str, v: f64) -> JigglyResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(JigglyError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
            Ok(())
        }

        non_negative("intensity", self.intensity)?;
        non_negative("speed", self.speed)?;
        non_negative("mouseStrength", self.mouse_strength)?;
        non_negative("waveDelay", self.wave_delay)?;
        if !self.mouse_radius.is_finite() || self.mouse_radius <= 0.0 {
            return Err(JigglyError::validation(format!(
                "mouseRadius must be finite and > 0 (got {})",
                self.mouse_radius
            )));
        }
        Ok(())
    }

    /// Jitter bound actually applied, zero when jitter is switched off.
    pub fn effective_intensity(&self) -> f64 {
        if self.animated { self.intensity } else { 0.0 }
    }

    /// Pointer field when interaction is on.
    pub fn pointer_field(&self) -> Option<PointerField> {
        self.interacts_with_mouse
            .then(|| PointerField::new(self.mouse_radius, self.mouse_strength))
    }

    /// Whether a loop is worth running at all.
    pub fn wants_loop(&self) -> bool {
        self.animated || self.interacts_with_mouse
    }
}
