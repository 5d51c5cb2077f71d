//! Mock capture sink.
//!
//! Stands in for a real recorder when no camera/microphone could be
//! acquired. It produces no incremental data; on stop it delivers a single
//! deterministic placeholder chunk and finalizes immediately.

use crate::models::error::CaptureError;
use crate::models::media_models::CaptureMode;
use crate::processing::placeholder;
use crate::traits::capture_sink::{CaptureSink, ChunkCallback, ErrorCallback, FinalizeCallback};

#[derive(Default)]
pub struct MockSink {
    on_data: Option<ChunkCallback>,
    paused: bool,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.on_data.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl CaptureSink for MockSink {
    fn mode(&self) -> CaptureMode {
        CaptureMode::Mock
    }

    fn start(
        &mut self,
        on_data: ChunkCallback,
        _on_error: ErrorCallback,
        _interval_secs: u32,
    ) -> Result<(), CaptureError> {
        if self.on_data.is_some() {
            return Err(CaptureError::CaptureFailed("mock sink already running".into()));
        }
        self.on_data = Some(on_data);
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), CaptureError> {
        self.paused = true;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), CaptureError> {
        self.paused = false;
        Ok(())
    }

    fn stop(&mut self, on_finalized: FinalizeCallback) -> Result<(), CaptureError> {
        if let Some(on_data) = self.on_data.take() {
            on_data(&placeholder::generate_placeholder());
        }
        self.paused = false;
        on_finalized();
        Ok(())
    }
}
