//! # memento-capture-core
//!
//! Platform-agnostic video message capture core.
//!
//! Provides the recording session state machine, elapsed-time accounting
//! with a hard duration cap, ordered chunk buffering, artifact assembly and
//! a mock fallback for hosts without a usable camera. Platform backends
//! implement `MediaSourceProvider` / `CaptureSink` and plug into the
//! generic `RecordingController`.
//!
//! ## Architecture
//!
//! ```text
//! memento-capture-core (this crate)
//! ├── traits/       ← MediaSourceProvider, CaptureSink, SessionDelegate, RecordingSession
//! ├── models/       ← CaptureError, SessionState, CaptureConfiguration, MediaArtifact, snapshots
//! ├── processing/   ← ChunkBuffer, placeholder image generation
//! ├── sinks/        ← MockSink (fallback capture strategy)
//! └── session/      ← RecordingController (state machine orchestrator)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod sinks;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::artifact::{ArtifactMetadata, MediaArtifact};
pub use models::config::{CaptureConfiguration, MediaConstraints};
pub use models::error::CaptureError;
pub use models::media_models::{
    format_clock, CaptureMode, CaptureSnapshot, MediaStream, Preview, SessionDiagnostics,
    TimeWarning,
};
pub use models::state::SessionState;
pub use processing::chunk_buffer::ChunkBuffer;
pub use session::controller::RecordingController;
pub use sinks::mock::MockSink;
pub use traits::capture_sink::{CaptureSink, ChunkCallback, ErrorCallback, FinalizeCallback};
pub use traits::media_source::MediaSourceProvider;
pub use traits::recording_session::RecordingSession;
pub use traits::session_delegate::SessionDelegate;
