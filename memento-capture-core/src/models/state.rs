use serde::Serialize;

use super::error::CaptureError;

/// Recording session state machine.
///
/// State transitions:
/// ```text
/// idle → acquiring → ready → recording ↔ paused
///            ↓                   ↓        ↓
///         failed              stopped → reviewable → idle (save)
///                                ↓
///                             failed (no data)
///
/// reviewable / failed ── discard ──→ idle
/// any ── reset ──→ idle → acquiring
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Acquiring,
    Ready,
    Recording,
    Paused,
    Stopped,
    Reviewable,
    Failed(CaptureError),
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Recording or paused: the sink is running and the clock is live.
    pub fn is_capturing(&self) -> bool {
        matches!(self, Self::Recording | Self::Paused)
    }

    /// States a discard is accepted from.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Reviewable | Self::Failed(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Acquiring => "acquiring",
            Self::Ready => "ready",
            Self::Recording => "recording",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Reviewable => "reviewable",
            Self::Failed(_) => "failed",
        }
    }
}
