use crate::models::config::MediaConstraints;
use crate::models::error::CaptureError;
use crate::models::media_models::MediaStream;
use crate::traits::capture_sink::CaptureSink;

/// Interface for platform-specific camera/microphone sources.
///
/// Implemented by host backends (browser bridge, native camera APIs) and by
/// test doubles. Any error from `acquire` or `create_sink` is treated by the
/// controller as `DeviceUnavailable` and triggers the mock fallback.
pub trait MediaSourceProvider: Send {
    /// Request a live stream. May block until the user grants or denies access.
    fn acquire(&mut self, constraints: &MediaConstraints) -> Result<MediaStream, CaptureError>;

    /// Build a capture sink recording from `stream`.
    fn create_sink(&mut self, stream: &MediaStream) -> Result<Box<dyn CaptureSink>, CaptureError>;

    /// Stop every track of `stream` and give the device back.
    fn release(&mut self, stream: MediaStream);
}
