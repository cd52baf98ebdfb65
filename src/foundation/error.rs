/// Convenience result type used across slideloom.
pub type SlideloomResult<T> = Result<T, SlideloomError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Every variant is fatal for the current invocation: the pipeline has no
/// partial-success mode, and scene mutations already committed before a
/// failure are not rolled back.
#[derive(thiserror::Error, Debug)]
pub enum SlideloomError {
    /// A container could not export its rendered contents to bytes.
    #[error("export error: {0}")]
    Export(String),

    /// The transcoding worker failed, returned invalid data, or timed out.
    #[error("transcode error: {0}")]
    Transcode(String),

    /// The image registry rejected or failed to register a payload.
    #[error("registration error: {0}")]
    Registration(String),

    /// The host scene backend failed while installing the derived scene.
    #[error("scene error: {0}")]
    Scene(String),

    /// Invalid input data, such as a malformed raw bitmap payload.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideloomError {
    /// Build a [`SlideloomError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`SlideloomError::Transcode`] value.
    pub fn transcode(msg: impl Into<String>) -> Self {
        Self::Transcode(msg.into())
    }

    /// Build a [`SlideloomError::Registration`] value.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }

    /// Build a [`SlideloomError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`SlideloomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlideloomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
