/// What to request from the media source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaConstraints {
    pub video: bool,
    pub audio: bool,
}

impl Default for MediaConstraints {
    fn default() -> Self {
        Self {
            video: true,
            audio: true,
        }
    }
}

/// Configuration for a recording session.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureConfiguration {
    /// Hard cap on recorded time in seconds (default: 30).
    pub max_duration_secs: u32,

    /// Seconds before the cap during which snapshots carry a warning (default: 5).
    pub warning_window_secs: u32,

    /// Cadence at which the sink delivers data chunks (default: 1).
    pub chunk_interval_secs: u32,

    /// MIME type of live captured media (default: "video/webm").
    pub mime_type: String,

    /// Fall back to a synthetic placeholder when the device is unavailable
    /// (default: true). When false, device failure parks the session in `Failed`.
    pub enable_mock_fallback: bool,

    /// Tracks requested from the media source.
    pub constraints: MediaConstraints,
}

impl CaptureConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_duration_secs == 0 {
            return Err("max duration must be positive".into());
        }
        if self.warning_window_secs > self.max_duration_secs {
            return Err(format!(
                "warning window ({}s) exceeds max duration ({}s)",
                self.warning_window_secs, self.max_duration_secs
            ));
        }
        if self.chunk_interval_secs == 0 {
            return Err("chunk interval must be positive".into());
        }
        if self.mime_type.trim().is_empty() {
            return Err("mime type must not be empty".into());
        }
        if !self.constraints.video && !self.constraints.audio {
            return Err("at least one of video or audio must be requested".into());
        }
        Ok(())
    }
}

impl Default for CaptureConfiguration {
    fn default() -> Self {
        Self {
            max_duration_secs: 30,
            warning_window_secs: 5,
            chunk_interval_secs: 1,
            mime_type: "video/webm".into(),
            enable_mock_fallback: true,
            constraints: MediaConstraints::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CaptureConfiguration::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_duration_secs, 30);
        assert_eq!(config.warning_window_secs, 5);
    }

    #[test]
    fn rejects_zero_duration() {
        let config = CaptureConfiguration {
            max_duration_secs: 0,
            warning_window_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_warning_window() {
        let config = CaptureConfiguration {
            max_duration_secs: 10,
            warning_window_secs: 11,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("warning window"));
    }

    #[test]
    fn rejects_empty_constraints() {
        let config = CaptureConfiguration {
            constraints: MediaConstraints {
                video: false,
                audio: false,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
