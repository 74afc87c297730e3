//! Unified error handling for the synchronizer.

/// Application error type.
///
/// Everything the tracking provider can do wrong - non-2xx responses,
/// transport failures, malformed bodies - collapses into the single
/// `Provider` taxonomy; callers only ever degrade, they never retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("engine error: {0}")]
    Engine(#[from] floralab_engine::Error),

    #[error("provider error: {0}")]
    Provider(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Provider(e.to_string())
    }
}

/// Result type alias for synchronizer operations.
pub type Result<T> = std::result::Result<T, Error>;
