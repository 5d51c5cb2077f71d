use serde::Serialize;
use thiserror::Error;

/// Errors raised by a recording session.
///
/// Every variant carries an identifying kind (see [`CaptureError::kind`]) so
/// the presentation layer can render a signal for it. None of them is fatal:
/// the worst case is a session parked in `Failed` until it is reset.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CaptureError {
    /// Camera/microphone could not be acquired. Triggers the mock fallback.
    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),

    /// Stop was reached without a single captured chunk.
    #[error("no data captured")]
    NoDataCaptured,

    /// Review-time playback failed. Advisory only.
    #[error("playback unavailable: {0}")]
    PlaybackUnavailable(String),

    /// The capture sink reported an error while recording.
    #[error("capture failed: {0}")]
    CaptureFailed(String),

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),
}

impl CaptureError {
    /// Stable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DeviceUnavailable(_) => "device_unavailable",
            Self::NoDataCaptured => "no_data_captured",
            Self::PlaybackUnavailable(_) => "playback_unavailable",
            Self::CaptureFailed(_) => "capture_failed",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::ConfigurationFailed(_) => "configuration_failed",
        }
    }

    /// Whether the session keeps working after this error without a reset.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            Self::DeviceUnavailable(_)
                | Self::PlaybackUnavailable(_)
                | Self::InvalidTransition { .. }
        )
    }
}
