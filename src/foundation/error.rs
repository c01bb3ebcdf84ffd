/// Crate-wide result alias.
pub type JigglyResult<T> = Result<T, JigglyError>;

/// Errors surfaced at the crate boundary (configuration, rendering, sinks).
///
/// The outline engine itself never fails: malformed outline data and missing metrics degrade to
/// smaller or empty shapes instead.
#[derive(thiserror::Error, Debug)]
pub enum JigglyError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JigglyError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
