pub mod capture_sink;
pub mod media_source;
pub mod recording_session;
pub mod session_delegate;
