use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::artifact::{ArtifactMetadata, MediaArtifact};
use crate::models::config::CaptureConfiguration;
use crate::models::error::CaptureError;
use crate::models::media_models::{
    CaptureMode, CaptureSnapshot, MediaStream, Preview, SessionDiagnostics, TimeWarning,
};
use crate::models::state::SessionState;
use crate::processing::chunk_buffer::ChunkBuffer;
use crate::processing::placeholder;
use crate::sinks::mock::MockSink;
use crate::traits::capture_sink::{CaptureSink, ChunkCallback, ErrorCallback, FinalizeCallback};
use crate::traits::media_source::MediaSourceProvider;
use crate::traits::recording_session::RecordingSession;
use crate::traits::session_delegate::SessionDelegate;

/// Internal mutable session state, shared with device callbacks.
///
/// `generation` identifies the current session. Every callback handed to a
/// sink is bound to the generation it was created for and is ignored once
/// the session has moved on.
struct SessionShared {
    generation: u64,
    state: SessionState,
    mode: CaptureMode,
    elapsed_secs: u32,
    max_duration_secs: u32,
    warning_window_secs: u32,
    timer_armed: bool,
    chunks: ChunkBuffer,
    pending: Option<MediaArtifact>,
    preview: Option<Preview>,
    prompt: Option<String>,
    diagnostics: SessionDiagnostics,
}

impl SessionShared {
    fn new(config: &CaptureConfiguration) -> Self {
        Self {
            generation: 0,
            state: SessionState::Idle,
            mode: CaptureMode::Live,
            elapsed_secs: 0,
            max_duration_secs: config.max_duration_secs,
            warning_window_secs: config.warning_window_secs,
            timer_armed: false,
            chunks: ChunkBuffer::new(),
            pending: None,
            preview: None,
            prompt: None,
            diagnostics: SessionDiagnostics::default(),
        }
    }

    fn snapshot(&self) -> CaptureSnapshot {
        let remaining = self.max_duration_secs.saturating_sub(self.elapsed_secs);
        let warning = (self.state.is_capturing() && remaining <= self.warning_window_secs)
            .then_some(TimeWarning {
                seconds_remaining: remaining,
            });

        CaptureSnapshot {
            session: self.generation,
            state: self.state.clone(),
            elapsed_secs: self.elapsed_secs,
            max_duration_secs: self.max_duration_secs,
            mode: self.mode,
            warning,
            preview: self.preview.clone(),
        }
    }

    fn is_current(&mut self, generation: u64) -> bool {
        if self.generation == generation {
            return true;
        }
        self.diagnostics.stale_callbacks_dropped += 1;
        log::debug!(
            "dropping callback for stale session {} (current {})",
            generation,
            self.generation
        );
        false
    }
}

/// Fan-out to the optional delegate, with logging.
#[derive(Clone, Default)]
struct Notifier(Option<Arc<dyn SessionDelegate>>);

impl Notifier {
    fn state_changed(&self, snapshot: &CaptureSnapshot) {
        log::debug!(
            "session {} {} ({}s, {:?})",
            snapshot.session,
            snapshot.state.name(),
            snapshot.elapsed_secs,
            snapshot.mode
        );
        if let Some(ref delegate) = self.0 {
            delegate.on_state_changed(snapshot);
        }
    }

    fn error(&self, error: &CaptureError) {
        if error.is_advisory() {
            log::warn!("{} ({})", error, error.kind());
        } else {
            log::error!("{} ({})", error, error.kind());
        }
        if let Some(ref delegate) = self.0 {
            delegate.on_error(error);
        }
    }

    fn artifact_ready(&self, metadata: &ArtifactMetadata) {
        if let Some(ref delegate) = self.0 {
            delegate.on_artifact_ready(metadata);
        }
    }
}

fn invalid(action: &'static str, state: &SessionState) -> CaptureError {
    CaptureError::InvalidTransition {
        action,
        state: state.name(),
    }
}

/// Recording session controller.
///
/// Owns the state machine, the elapsed-time accounting, the chunk buffer and
/// the device stream. Consumes a [`MediaSourceProvider`] and produces a
/// [`MediaArtifact`]:
/// ```text
/// [MediaSourceProvider] → stream → [CaptureSink: Live | Mock]
///                                        │ on_data (ordered)
///                                        ↓
///                                  [ChunkBuffer] ── finalize ──→ [MediaArtifact] → save
/// ```
///
/// All transitions are driven by intents (`request_*`), by the host's
/// one-second timer (`tick`) or by sink callbacks. The controller spawns no
/// threads of its own.
pub struct RecordingController {
    config: CaptureConfiguration,
    provider: Box<dyn MediaSourceProvider>,
    sink: Option<Box<dyn CaptureSink>>,
    /// The bound sink has been started and not yet stopped.
    sink_running: bool,
    stream: Option<MediaStream>,
    shared: Arc<Mutex<SessionShared>>,
    notifier: Notifier,
}

impl RecordingController {
    pub fn new(
        provider: Box<dyn MediaSourceProvider>,
        config: CaptureConfiguration,
    ) -> Result<Self, CaptureError> {
        config.validate().map_err(CaptureError::ConfigurationFailed)?;

        Ok(Self {
            shared: Arc::new(Mutex::new(SessionShared::new(&config))),
            config,
            provider,
            sink: None,
            sink_running: false,
            stream: None,
            notifier: Notifier::default(),
        })
    }

    /// Install the delegate. Callbacks created afterwards report to it.
    pub fn set_delegate(&mut self, delegate: Arc<dyn SessionDelegate>) {
        self.notifier = Notifier(Some(delegate));
    }

    /// Prompt shown during capture. Carried into the saved artifact only.
    pub fn set_prompt(&mut self, prompt: Option<String>) {
        self.shared.lock().prompt = prompt.filter(|p| !p.trim().is_empty());
    }

    pub fn prompt(&self) -> Option<String> {
        self.shared.lock().prompt.clone()
    }

    pub fn config(&self) -> &CaptureConfiguration {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.shared.lock().state.clone()
    }

    pub fn diagnostics(&self) -> SessionDiagnostics {
        self.shared.lock().diagnostics.clone()
    }

    /// Whether a live device stream is currently held.
    pub fn holds_device(&self) -> bool {
        self.stream.is_some()
    }

    pub fn timer_armed(&self) -> bool {
        self.shared.lock().timer_armed
    }

    pub fn buffered_chunks(&self) -> usize {
        self.shared.lock().chunks.len()
    }

    /// Playback handle for the finished recording.
    ///
    /// Only available while reviewable. Failure is advisory: the session
    /// state is left untouched and the delegate is told.
    pub fn request_playback(&self) -> Result<Preview, CaptureError> {
        let result = {
            let s = self.shared.lock();
            match (&s.state, &s.preview) {
                (SessionState::Reviewable, Some(Preview::Playback { url })) => {
                    Ok(Preview::Playback { url: url.clone() })
                }
                (state, _) => Err(CaptureError::PlaybackUnavailable(format!(
                    "no recording to play while {}",
                    state.name()
                ))),
            }
        };

        if let Err(ref error) = result {
            self.notifier.error(error);
        }
        result
    }

    /// Unmount path: stop capture, release the device, revoke previews.
    pub fn shutdown(&mut self) {
        self.release_resources();
        self.publish();
    }

    // --- Internal helpers ---

    fn publish(&self) {
        let snapshot = self.shared.lock().snapshot();
        self.notifier.state_changed(&snapshot);
    }

    /// Idle → acquiring → ready (live or mock).
    fn acquire(&mut self) -> Result<(), CaptureError> {
        {
            let mut s = self.shared.lock();
            s.generation += 1;
            s.state = SessionState::Acquiring;
            s.mode = CaptureMode::Live;
            s.timer_armed = false;
            s.chunks.reset();
            s.pending = None;
            s.preview = None;
            s.diagnostics.sessions_started += 1;
        }
        self.publish();

        let acquired = match self.provider.acquire(&self.config.constraints) {
            Ok(stream) => match self.provider.create_sink(&stream) {
                Ok(sink) => Ok((stream, sink)),
                Err(error) => {
                    self.provider.release(stream);
                    Err(error)
                }
            },
            Err(error) => Err(error),
        };

        match acquired {
            Ok((stream, sink)) => {
                log::info!("acquired live stream '{}' ({})", stream.label, stream.id);
                {
                    let mut s = self.shared.lock();
                    s.mode = sink.mode();
                    s.preview = Some(Preview::Live {
                        stream_id: stream.id.clone(),
                    });
                    s.state = SessionState::Ready;
                }
                self.stream = Some(stream);
                self.sink = Some(sink);
                self.publish();
                Ok(())
            }
            Err(cause) => self.fall_back(cause),
        }
    }

    fn fall_back(&mut self, cause: CaptureError) -> Result<(), CaptureError> {
        let error = match cause {
            CaptureError::DeviceUnavailable(_) => cause,
            other => CaptureError::DeviceUnavailable(other.to_string()),
        };
        self.notifier.error(&error);

        if !self.config.enable_mock_fallback {
            log::error!("{}; mock fallback disabled", error);
            self.shared.lock().state = SessionState::Failed(error.clone());
            self.publish();
            return Err(error);
        }

        log::warn!("{}; switching to mock capture", error);
        {
            let mut s = self.shared.lock();
            s.mode = CaptureMode::Mock;
            s.preview = Some(Preview::Placeholder);
            s.state = SessionState::Ready;
        }
        self.sink = Some(Box::new(MockSink::new()));
        self.publish();
        Ok(())
    }

    /// Ready → recording.
    fn begin_recording(&mut self) -> Result<(), CaptureError> {
        let generation = {
            let mut s = self.shared.lock();
            s.chunks.reset();
            s.elapsed_secs = 0;
            s.state = SessionState::Recording;
            s.timer_armed = true;
            s.generation
        };

        let on_data = self.chunk_callback(generation);
        let on_error = self.error_callback(generation);
        let interval = self.config.chunk_interval_secs;
        let started = match self.sink.as_mut() {
            Some(sink) => sink.start(on_data, on_error, interval),
            None => Err(CaptureError::CaptureFailed("no capture sink bound".into())),
        };

        if let Err(error) = started {
            fail_session(&self.shared, &self.notifier, generation, error.clone());
            return Err(error);
        }
        self.sink_running = true;

        log::info!("recording started (session {})", generation);
        self.publish();
        Ok(())
    }

    /// Recording/paused → stopped. Reviewable follows once the sink finalizes.
    fn stop_capture(&mut self) -> Result<(), CaptureError> {
        let generation = {
            let mut s = self.shared.lock();
            if matches!(s.state, SessionState::Stopped) {
                return Ok(());
            }
            if !s.state.is_capturing() {
                return Err(invalid("stop", &s.state));
            }
            s.timer_armed = false;
            s.state = SessionState::Stopped;
            log::info!("stopping session {} at {}s", s.generation, s.elapsed_secs);
            s.generation
        };
        self.publish();

        let on_finalized = self.finalize_callback(generation);
        let stopped = match self.sink.as_mut() {
            Some(sink) => sink.stop(on_finalized),
            None => {
                on_finalized();
                Ok(())
            }
        };
        self.sink_running = false;
        self.release_stream();

        if let Err(error) = stopped {
            fail_session(&self.shared, &self.notifier, generation, error.clone());
            return Err(error);
        }
        Ok(())
    }

    /// Drop everything the session holds and return to idle without notifying.
    fn release_resources(&mut self) {
        {
            let mut s = self.shared.lock();
            s.generation += 1;
            s.timer_armed = false;
            s.chunks.reset();
            s.pending = None;
            if let Some(Preview::Playback { url }) = s.preview.take() {
                log::debug!("revoked preview {}", url);
            }
            s.state = SessionState::Idle;
        }
        self.release_devices();
    }

    /// Stop a still-running sink, then hand the stream back to the provider.
    ///
    /// Callers bump the generation first so anything the sink flushes on the
    /// way out is dropped as stale.
    fn release_devices(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if self.sink_running {
                if let Err(e) = sink.stop(Box::new(|| {})) {
                    log::warn!("failed to stop capture sink: {}", e);
                }
            }
        }
        self.sink_running = false;
        self.release_stream();
    }

    fn release_stream(&mut self) {
        if let Some(stream) = self.stream.take() {
            log::debug!("releasing stream {}", stream.id);
            self.provider.release(stream);
        }
    }

    fn chunk_callback(&self, generation: u64) -> ChunkCallback {
        let shared = Arc::clone(&self.shared);
        Arc::new(move |data: &[u8]| {
            let mut s = shared.lock();
            if !s.is_current(generation) {
                return;
            }
            if !matches!(
                s.state,
                SessionState::Recording | SessionState::Paused | SessionState::Stopped
            ) {
                s.diagnostics.stale_callbacks_dropped += 1;
                log::debug!("ignoring chunk delivered while {}", s.state.name());
                return;
            }

            s.diagnostics.chunk_callback_count += 1;
            if s.chunks.push(data) {
                s.diagnostics.bytes_buffered += data.len() as u64;
            } else {
                s.diagnostics.empty_chunks_ignored += 1;
            }
        })
    }

    fn error_callback(&self, generation: u64) -> ErrorCallback {
        let shared = Arc::clone(&self.shared);
        let notifier = self.notifier.clone();
        Arc::new(move |error: CaptureError| fail_session(&shared, &notifier, generation, error))
    }

    fn finalize_callback(&self, generation: u64) -> FinalizeCallback {
        let shared = Arc::clone(&self.shared);
        let notifier = self.notifier.clone();
        let mime_type = self.config.mime_type.clone();
        Box::new(move || finalize_session(&shared, &notifier, generation, &mime_type))
    }
}

/// Move a capturing (or stopping) session to `Failed`.
///
/// Errors arriving in any other state are reported but change nothing.
fn fail_session(
    shared: &Mutex<SessionShared>,
    notifier: &Notifier,
    generation: u64,
    error: CaptureError,
) {
    let snapshot = {
        let mut s = shared.lock();
        if !s.is_current(generation) {
            return;
        }
        if !matches!(
            s.state,
            SessionState::Recording | SessionState::Paused | SessionState::Stopped
        ) {
            drop(s);
            log::warn!("capture error outside recording: {}", error);
            notifier.error(&error);
            return;
        }

        log::error!("session {} failed: {}", generation, error);
        s.timer_armed = false;
        s.chunks.reset();
        s.state = SessionState::Failed(error.clone());
        s.snapshot()
    };
    notifier.error(&error);
    notifier.state_changed(&snapshot);
}

/// Stopped → reviewable, assembling the artifact from the shared buffer.
///
/// Live sessions with no data fail with `NoDataCaptured`; mock sessions
/// always yield the placeholder.
fn finalize_session(
    shared: &Mutex<SessionShared>,
    notifier: &Notifier,
    generation: u64,
    live_mime_type: &str,
) {
    let mut s = shared.lock();
    if !s.is_current(generation) {
        return;
    }
    if !matches!(s.state, SessionState::Stopped) {
        log::debug!("ignoring finalize while {}", s.state.name());
        return;
    }

    if s.chunks.is_empty() && s.mode == CaptureMode::Mock {
        s.chunks.push(&placeholder::generate_placeholder());
    }

    if s.chunks.is_empty() {
        log::error!("session {} stopped without captured data", generation);
        s.state = SessionState::Failed(CaptureError::NoDataCaptured);
        let snapshot = s.snapshot();
        drop(s);
        notifier.error(&CaptureError::NoDataCaptured);
        notifier.state_changed(&snapshot);
        return;
    }

    let mime_type = match s.mode {
        CaptureMode::Live => live_mime_type,
        CaptureMode::Mock => placeholder::PLACEHOLDER_MIME_TYPE,
    };
    let artifact = MediaArtifact::assemble(
        &s.chunks,
        mime_type,
        s.mode,
        s.elapsed_secs,
        s.prompt.clone(),
    );
    log::info!(
        "session {} finalized: {} chunks, {} bytes, {}s",
        generation,
        artifact.chunk_count,
        artifact.len(),
        artifact.duration_secs
    );

    let metadata = artifact.metadata();
    s.pending = Some(artifact);
    s.preview = Some(Preview::playback());
    s.state = SessionState::Reviewable;
    let snapshot = s.snapshot();
    drop(s);

    notifier.artifact_ready(&metadata);
    notifier.state_changed(&snapshot);
}

impl RecordingSession for RecordingController {
    fn snapshot(&self) -> CaptureSnapshot {
        self.shared.lock().snapshot()
    }

    fn request_start(&mut self) -> Result<(), CaptureError> {
        let state = self.shared.lock().state.clone();
        match state {
            SessionState::Idle => self.acquire(),
            SessionState::Ready => self.begin_recording(),
            other => Err(invalid("start", &other)),
        }
    }

    fn request_pause(&mut self) -> Result<(), CaptureError> {
        let generation = {
            let s = self.shared.lock();
            match s.state {
                SessionState::Paused => return Ok(()),
                SessionState::Recording => s.generation,
                _ => return Err(invalid("pause", &s.state)),
            }
        };

        if let Some(sink) = self.sink.as_mut() {
            if let Err(error) = sink.pause() {
                fail_session(&self.shared, &self.notifier, generation, error.clone());
                return Err(error);
            }
        }

        {
            let mut s = self.shared.lock();
            if !s.state.is_recording() {
                return Ok(());
            }
            s.timer_armed = false;
            s.state = SessionState::Paused;
        }
        self.publish();
        Ok(())
    }

    fn request_resume(&mut self) -> Result<(), CaptureError> {
        let generation = {
            let s = self.shared.lock();
            match s.state {
                SessionState::Recording => return Ok(()),
                SessionState::Paused => s.generation,
                _ => return Err(invalid("resume", &s.state)),
            }
        };

        if let Some(sink) = self.sink.as_mut() {
            if let Err(error) = sink.resume() {
                fail_session(&self.shared, &self.notifier, generation, error.clone());
                return Err(error);
            }
        }

        {
            let mut s = self.shared.lock();
            if !s.state.is_paused() {
                return Ok(());
            }
            s.timer_armed = true;
            s.state = SessionState::Recording;
        }
        self.publish();
        Ok(())
    }

    fn request_stop(&mut self) -> Result<(), CaptureError> {
        self.stop_capture()
    }

    fn request_reset(&mut self) -> Result<(), CaptureError> {
        self.release_resources();
        self.publish();
        self.acquire()
    }

    fn request_discard(&mut self) -> Result<(), CaptureError> {
        {
            let s = self.shared.lock();
            if !s.state.is_settled() {
                return Err(invalid("discard", &s.state));
            }
        }
        log::info!("discarding session");
        self.release_resources();
        self.publish();
        Ok(())
    }

    fn request_save(&mut self) -> Result<MediaArtifact, CaptureError> {
        let artifact = {
            let mut s = self.shared.lock();
            match s.state {
                SessionState::Reviewable => {}
                SessionState::Failed(CaptureError::NoDataCaptured) => {
                    return Err(CaptureError::NoDataCaptured)
                }
                _ => return Err(invalid("save", &s.state)),
            }
            let Some(mut artifact) = s.pending.take() else {
                return Err(CaptureError::NoDataCaptured);
            };
            artifact.prompt = s.prompt.clone();
            s.generation += 1;
            s.chunks.reset();
            s.preview = None;
            s.state = SessionState::Idle;
            artifact
        };

        self.release_devices();
        log::info!(
            "artifact {} handed off ({} bytes, {})",
            artifact.id,
            artifact.len(),
            artifact.mime_type
        );
        self.publish();
        Ok(artifact)
    }

    fn tick(&mut self) -> Result<(), CaptureError> {
        let reached_cap = {
            let mut s = self.shared.lock();
            if !s.timer_armed || !s.state.is_recording() {
                return Ok(());
            }
            s.diagnostics.timer_ticks += 1;
            s.elapsed_secs = (s.elapsed_secs + 1).min(s.max_duration_secs);
            s.elapsed_secs >= s.max_duration_secs
        };
        self.publish();

        if reached_cap {
            log::info!("maximum duration reached; stopping");
            return self.stop_capture();
        }
        Ok(())
    }
}

impl Drop for RecordingController {
    fn drop(&mut self) {
        self.release_resources();
    }
}
