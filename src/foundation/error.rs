/// Convenience result type used across riso-fx.
pub type FxResult<T> = Result<T, FxError>;

/// Top-level error taxonomy used by the effect pipeline.
///
/// The pipeline recovers silently from malformed numeric or structural configuration. Only
/// unusable colors, inconsistent buffers and runtime setup failures surface as errors.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// Invalid caller-provided data (dimensions, buffer lengths, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// A channel color that cannot be parsed as `#RRGGBB`.
    #[error("color format error: '{value}': {reason}")]
    ColorFormat {
        /// The offending color text, as configured.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Errors while executing the pipeline (thread pools, worker lifecycle).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl FxError {
    /// Build a [`FxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FxError::ColorFormat`] value.
    pub fn color_format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ColorFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`FxError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
