pub mod api;
pub mod assessment;
pub mod audio;
pub mod config;
pub mod progress;
pub mod proxy;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StressCheckError {
    #[error("File read error: {0}")]
    FileRead(String),

    #[error("Audio playback error: {0}")]
    AudioPlayback(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<std::io::Error> for StressCheckError {
    fn from(e: std::io::Error) -> Self {
        StressCheckError::FileRead(e.to_string())
    }
}

impl StressCheckError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // A failed file pick can be retried with another file
            StressCheckError::FileRead(_) => true,
            // Preview failures never block the assessment itself
            StressCheckError::AudioPlayback(_) => true,
            // These are typically transient errors
            StressCheckError::Request(_) => true,
            StressCheckError::Backend(_) => true,
            StressCheckError::InvalidResponse(_) => true,
            // Config and runtime errors require user intervention
            StressCheckError::Config(_) => false,
            StressCheckError::Runtime(_) => false,
        }
    }

    /// Get a user-friendly description suitable for display in the UI
    pub fn user_message(&self) -> String {
        match self {
            StressCheckError::FileRead(_) => {
                "Could not read the selected file. Please pick it again.".to_string()
            }
            StressCheckError::AudioPlayback(_) => {
                "Audio preview failed. The recording will still be submitted.".to_string()
            }
            StressCheckError::Request(_) => {
                "Failed to analyze stress level. Please check your data and try again.".to_string()
            }
            // Backend-reported messages are shown verbatim
            StressCheckError::Backend(msg) => msg.clone(),
            StressCheckError::InvalidResponse(_) => {
                "The analysis service returned an unexpected response. Please try again."
                    .to_string()
            }
            StressCheckError::Config(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            StressCheckError::Runtime(_) => {
                "The analysis service could not be started. Please restart the application."
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StressCheckError>;
