use serde::{Deserialize, Serialize};

use super::state::SessionState;

/// Where the session's media comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// A real camera/microphone stream.
    #[default]
    Live,
    /// Synthetic fallback used when no device could be acquired.
    Mock,
}

/// A live audio/video stream handed out by a media source.
///
/// Ownership of the handle is returned to the provider on release, so a
/// released stream cannot be used again.
#[derive(Debug, PartialEq, Eq)]
pub struct MediaStream {
    pub id: String,
    pub label: String,
    pub has_video: bool,
    pub has_audio: bool,
}

impl MediaStream {
    pub fn new(label: impl Into<String>, has_video: bool, has_audio: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label: label.into(),
            has_video,
            has_audio,
        }
    }
}

/// What the presentation layer should show in the preview pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Preview {
    /// The live device stream is bound to the preview.
    Live { stream_id: String },
    /// Mock mode: a synthetic placeholder stands in for the camera.
    Placeholder,
    /// Object-URL style handle to the finished artifact bytes.
    Playback { url: String },
}

impl Preview {
    pub(crate) fn playback() -> Self {
        Self::Playback {
            url: format!("blob:memento/{}", uuid::Uuid::new_v4()),
        }
    }
}

/// Advisory signal raised during the final seconds before the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWarning {
    pub seconds_remaining: u32,
}

/// Read-only projection of the controller, pushed to the presentation layer
/// on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureSnapshot {
    pub session: u64,
    pub state: SessionState,
    pub elapsed_secs: u32,
    pub max_duration_secs: u32,
    pub mode: CaptureMode,
    pub warning: Option<TimeWarning>,
    pub preview: Option<Preview>,
}

impl CaptureSnapshot {
    /// Recording indicator text, e.g. `00:07/00:30`.
    pub fn clock_label(&self) -> String {
        format!(
            "{}/{}",
            format_clock(self.elapsed_secs),
            format_clock(self.max_duration_secs)
        )
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.max_duration_secs.saturating_sub(self.elapsed_secs)
    }
}

/// Render seconds as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Counters for debugging capture sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDiagnostics {
    pub chunk_callback_count: u64,
    pub empty_chunks_ignored: u64,
    pub stale_callbacks_dropped: u64,
    pub bytes_buffered: u64,
    pub timer_ticks: u64,
    pub sessions_started: u64,
}
