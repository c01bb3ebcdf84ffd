use std::path::Path;

use crate::animation::AnimationConfig;
use crate::foundation::error::{JigglyError, JigglyResult};
use crate::render::Paint;

/// Full configuration surface of a [`JigglyText`](crate::component::JigglyText).
///
/// Deserializes from a flat camelCase JSON object; every field is optional.
///
/// ```json
/// { "text": "Wobble", "fontSize": 48, "fill": "#336699", "waveMode": true }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JigglyTextProps {
    pub text: String,
    pub font: String,
    pub font_size: f64,
    #[serde(flatten)]
    pub paint: Paint,
    #[serde(flatten)]
    pub animation: AnimationConfig,
}

impl Default for JigglyTextProps {
    fn default() -> Self {
        Self {
            text: "Hello".to_owned(),
            font: "Arial, sans-serif".to_owned(),
            font_size: 72.0,
            paint: Paint::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl JigglyTextProps {
    pub fn from_reader(r: impl std::io::Read) -> JigglyResult<Self> {
        let props: Self =
            serde_json::from_reader(r).map_err(|e| JigglyError::serde(e.to_string()))?;
        props.validate()?;
        Ok(props)
    }

    pub fn from_path(path: impl AsRef<Path>) -> JigglyResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            JigglyError::Other(anyhow::Error::new(e).context(format!("open {}", path.display())))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    pub fn validate(&self) -> JigglyResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(JigglyError::validation(format!(
                "fontSize must be finite and > 0 (got {})",
                self.font_size
            )));
        }
        self.paint.validate()?;
        self.animation.validate()
    }

    /// Whether switching to `other` requires a new layout.
    pub(crate) fn layout_differs(&self, other: &Self) -> bool {
        self.text != other.text || self.font != other.font || self.font_size != other.font_size
    }
}
