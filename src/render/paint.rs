use crate::foundation::error::{JigglyError, JigglyResult};

/// Fill and stroke of the rendered outline. Colors are passed through to SVG untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paint {
    pub fill: String,
    /// Overrides `fill` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: "#000000".to_owned(),
            gradient: None,
            stroke: "none".to_owned(),
            stroke_width: 0.0,
        }
    }
}

impl Paint {
    pub fn validate(&self) -> JigglyResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(JigglyError::validation(
                "strokeWidth must be finite and >= 0",
            ));
        }
        if let Some(g) = &self.gradient {
            g.validate()?;
        }
        Ok(())
    }
}

/// One gradient color stop; `offset` is a percentage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

impl ColorStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Gradient {
    Linear {
        /// Direction in degrees; 0 runs left to right, 90 top to bottom.
        #[serde(default)]
        angle: f64,
        stops: Vec<ColorStop>,
    },
    Radial {
        stops: Vec<ColorStop>,
    },
}

impl Gradient {
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Self::Linear { stops, .. } | Self::Radial { stops } => stops,
        }
    }

    pub fn validate(&self) -> JigglyResult<()> {
        if self.stops().is_empty() {
            return Err(JigglyError::validation("gradient needs at least one stop"));
        }
        for s in self.stops() {
            if !s.offset.is_finite() {
                return Err(JigglyError::validation("gradient stop offset must be finite"));
            }
        }
        if let Self::Linear { angle, .. } = self
            && !angle.is_finite()
        {
            return Err(JigglyError::validation("gradient angle must be finite"));
        }
        Ok(())
    }
}

/// Start and end points of a linear gradient, as percentages of the bounding box.
///
/// The angle is projected through cosine/sine around the box centre:
/// `(50 - 50cos, 50 - 50sin) -> (50 + 50cos, 50 + 50sin)`.
pub fn linear_endpoints(angle_deg: f64) -> ((f64, f64), (f64, f64)) {
    let a = angle_deg.to_radians();
    let (dx, dy) = (50.0 * a.cos(), 50.0 * a.sin());
    ((50.0 - dx, 50.0 - dy), (50.0 + dx, 50.0 + dy))
}
