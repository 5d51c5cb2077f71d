use crate::models::artifact::MediaArtifact;
use crate::models::error::CaptureError;
use crate::models::media_models::CaptureSnapshot;

/// User intents accepted by a recording session.
///
/// Implemented by `RecordingController`. Presentation layers and the
/// persistence boundary depend on this trait rather than the concrete type.
pub trait RecordingSession: Send {
    /// Current projection of the session.
    fn snapshot(&self) -> CaptureSnapshot;

    /// Idle → acquiring → ready, or ready → recording.
    fn request_start(&mut self) -> Result<(), CaptureError>;

    /// Recording → paused. No-op when already paused.
    fn request_pause(&mut self) -> Result<(), CaptureError>;

    /// Paused → recording. No-op when already recording.
    fn request_resume(&mut self) -> Result<(), CaptureError>;

    /// Recording/paused → stopped → reviewable (or failed without data).
    fn request_stop(&mut self) -> Result<(), CaptureError>;

    /// Tear down the session and acquire the device again.
    fn request_reset(&mut self) -> Result<(), CaptureError>;

    /// Reviewable/failed → idle.
    fn request_discard(&mut self) -> Result<(), CaptureError>;

    /// Reviewable → idle, handing the artifact to the caller.
    fn request_save(&mut self) -> Result<MediaArtifact, CaptureError>;

    /// One-second timer callback.
    fn tick(&mut self) -> Result<(), CaptureError>;
}
