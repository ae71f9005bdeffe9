use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParameterError>;

/// Errors that can be raised while preparing parameter changes for a
/// reconciliation loop.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// The named parameter does not exist in the engine's parameter catalog.
    #[error("unknown parameter: {name}")]
    UnknownParameter { name: String },
    /// The named parameter exists but is static or system reserved.
    #[error("parameter is not modifiable: {name}")]
    UnmodifiableParameter { name: String },
    /// A chunk size of zero cannot produce a valid partition.
    #[error("invalid chunk size: {size}")]
    InvalidChunkSize { size: usize },
}

impl ParameterError {
    /// Convenience constructor for [`ParameterError::UnknownParameter`].
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Convenience constructor for [`ParameterError::UnmodifiableParameter`].
    pub fn unmodifiable_parameter(name: impl Into<String>) -> Self {
        Self::UnmodifiableParameter { name: name.into() }
    }

    /// Creates a [`ParameterError::InvalidChunkSize`] for the rejected size.
    pub(crate) fn invalid_chunk_size(size: usize) -> Self {
        Self::InvalidChunkSize { size }
    }

    /// Returns `true` when retrying cannot succeed until the requested
    /// configuration changes.
    ///
    /// A control loop should stop requeueing the resource on a terminal
    /// error and wait for new user input instead of retrying.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::UnknownParameter { .. } | Self::UnmodifiableParameter { .. }
        )
    }

    /// Name of the offending parameter, when the error concerns one.
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::UnknownParameter { name } | Self::UnmodifiableParameter { name } => Some(name),
            Self::InvalidChunkSize { .. } => None,
        }
    }
}
