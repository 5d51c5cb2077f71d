use std::sync::Arc;

use crate::models::error::CaptureError;
use crate::models::media_models::CaptureMode;

/// Callback invoked when a fragment of captured media is available.
///
/// Fragments must be delivered in capture order. Empty fragments are ignored.
pub type ChunkCallback = Arc<dyn Fn(&[u8]) + Send + Sync + 'static>;

/// Callback invoked when the sink fails while capturing.
pub type ErrorCallback = Arc<dyn Fn(CaptureError) + Send + Sync + 'static>;

/// Callback invoked exactly once when the sink has flushed its final data
/// after `stop`.
pub type FinalizeCallback = Box<dyn FnOnce() + Send + 'static>;

/// A recorder that turns a stream into chunks.
///
/// `Live` sinks wrap a real device recorder; the crate ships `MockSink` for
/// the fallback path. The strategy is picked once, at acquisition time.
///
/// Callbacks may fire synchronously from inside these methods or later from
/// another thread.
pub trait CaptureSink: Send {
    fn mode(&self) -> CaptureMode;

    /// Begin capturing, delivering a chunk roughly every `interval_secs`.
    fn start(
        &mut self,
        on_data: ChunkCallback,
        on_error: ErrorCallback,
        interval_secs: u32,
    ) -> Result<(), CaptureError>;

    /// Suspend capture without discarding delivered chunks.
    fn pause(&mut self) -> Result<(), CaptureError>;

    fn resume(&mut self) -> Result<(), CaptureError>;

    /// Flush remaining data through `on_data`, then call `on_finalized`.
    fn stop(&mut self, on_finalized: FinalizeCallback) -> Result<(), CaptureError>;
}
