use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::media_models::CaptureMode;
use crate::processing::chunk_buffer::ChunkBuffer;

/// The finished output of a recording session.
///
/// Not `Clone`. The controller moves it out on save and keeps
/// no reference afterwards.
#[derive(Debug, PartialEq, Eq)]
pub struct MediaArtifact {
    pub id: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub prompt: Option<String>,
    pub duration_secs: u32,
    pub mode: CaptureMode,
    pub chunk_count: usize,
    pub checksum: String,
    pub created_at: String,
}

impl MediaArtifact {
    /// Concatenate the buffered chunks, in arrival order, into an artifact.
    pub fn assemble(
        chunks: &ChunkBuffer,
        mime_type: &str,
        mode: CaptureMode,
        duration_secs: u32,
        prompt: Option<String>,
    ) -> Self {
        let bytes = chunks.assemble();
        let checksum = sha256_hex(&bytes);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            bytes,
            mime_type: mime_type.to_string(),
            prompt,
            duration_secs,
            mode,
            chunk_count: chunks.len(),
            checksum,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Mock artifacts hold placeholder bytes, not genuine video.
    pub fn is_placeholder(&self) -> bool {
        self.mode == CaptureMode::Mock
    }

    pub fn metadata(&self) -> ArtifactMetadata {
        ArtifactMetadata {
            id: self.id.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.bytes.len() as u64,
            duration_secs: self.duration_secs,
            mode: self.mode,
            chunk_count: self.chunk_count,
            checksum: self.checksum.clone(),
            prompt: self.prompt.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

/// Byte-free description of an artifact, serializable for the presentation
/// layer and the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub duration_secs: u32,
    pub mode: CaptureMode,
    pub chunk_count: usize,
    pub checksum: String,
    pub prompt: Option<String>,
    pub created_at: String,
}

/// SHA-256 hex digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_concatenates_in_order() {
        let mut chunks = ChunkBuffer::new();
        chunks.push(b"first-");
        chunks.push(b"second-");
        chunks.push(b"third");

        let artifact = MediaArtifact::assemble(&chunks, "video/webm", CaptureMode::Live, 3, None);

        assert_eq!(artifact.bytes, b"first-second-third".to_vec());
        assert_eq!(artifact.chunk_count, 3);
        assert_eq!(artifact.duration_secs, 3);
        assert_eq!(artifact.checksum, sha256_hex(b"first-second-third"));
        assert!(!artifact.is_placeholder());
    }

    #[test]
    fn metadata_mirrors_artifact() {
        let mut chunks = ChunkBuffer::new();
        chunks.push(&[1, 2, 3, 4]);
        let artifact = MediaArtifact::assemble(
            &chunks,
            "image/bmp",
            CaptureMode::Mock,
            12,
            Some("What brings you the most joy?".into()),
        );

        let metadata = artifact.metadata();
        assert_eq!(metadata.size_bytes, 4);
        assert_eq!(metadata.mode, CaptureMode::Mock);
        assert_eq!(metadata.prompt.as_deref(), Some("What brings you the most joy?"));
        assert_eq!(metadata.id, artifact.id);
        assert!(artifact.is_placeholder());
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
