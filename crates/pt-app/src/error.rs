//! Error types for the pt-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Entity error: {0}")]
    Entity(String),

    /// Confinement failure. Reported to the user; no animation starts.
    #[error("{0}")]
    UnboundedMotion(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Unknown catalog ion: {0}")]
    UnknownIon(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pt-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pt_project::ProjectError> for AppError {
    fn from(err: pt_project::ProjectError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<pt_trap::TrapError> for AppError {
    fn from(err: pt_trap::TrapError) -> Self {
        AppError::Entity(err.to_string())
    }
}

impl From<pt_model::ModelError> for AppError {
    fn from(err: pt_model::ModelError) -> Self {
        match err {
            pt_model::ModelError::UnboundedMotion { .. } => {
                AppError::UnboundedMotion(err.to_string())
            }
            other => AppError::Model(other.to_string()),
        }
    }
}

impl From<pt_playback::PlaybackError> for AppError {
    fn from(err: pt_playback::PlaybackError) -> Self {
        AppError::Playback(err.to_string())
    }
}
