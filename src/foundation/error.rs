/// Convenience result type used across melody.
pub type MelodyResult<T> = Result<T, MelodyError>;

/// Error taxonomy for the configuration surfaces of the crate.
///
/// Advancing, sampling and resetting motions never fails; only building them from
/// external descriptions (frame rates, scores) can.
#[derive(thiserror::Error, Debug)]
pub enum MelodyError {
    /// Invalid user-provided construction parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A score is structurally unusable (no stages, non-finite endpoints, ...).
    #[error("score error: {0}")]
    Score(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MelodyError {
    /// Build a [`MelodyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MelodyError::Score`] value.
    pub fn score(msg: impl Into<String>) -> Self {
        Self::Score(msg.into())
    }

    /// Build a [`MelodyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MelodyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
