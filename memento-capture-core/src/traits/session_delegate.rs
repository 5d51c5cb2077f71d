use crate::models::artifact::ArtifactMetadata;
use crate::models::error::CaptureError;
use crate::models::media_models::CaptureSnapshot;

/// Event delegate for recording session notifications.
///
/// Methods may be called from whichever thread delivers a device callback.
/// Implementations should marshal to the UI thread if needed. The session's
/// internal lock is never held while a delegate method runs.
pub trait SessionDelegate: Send + Sync {
    /// Called on every transition and every timer tick.
    fn on_state_changed(&self, snapshot: &CaptureSnapshot);

    /// Called whenever an error is raised, fatal to the session or not.
    fn on_error(&self, error: &CaptureError);

    /// Called when a finished artifact becomes available for review.
    fn on_artifact_ready(&self, metadata: &ArtifactMetadata);
}
