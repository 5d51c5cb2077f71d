/// Ordered, append-only buffer of captured media chunks.
///
/// The authoritative store for a session's media: data callbacks append
/// here and the artifact is assembled from here at finalize time. Wrap in
/// `Arc<parking_lot::Mutex<_>>` (via the session's shared state) for access
/// from device callbacks.
///
/// Unlike a ring buffer there is no overflow policy: nothing is ever dropped
/// or reordered. Empty chunks are refused.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    chunks: Vec<Vec<u8>>,
    total_bytes: usize,
}

impl ChunkBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk. Returns `false` (and stores nothing) for an empty chunk.
    pub fn push(&mut self, data: &[u8]) -> bool {
        if data.is_empty() {
            return false;
        }
        self.chunks.push(data.to_vec());
        self.total_bytes += data.len();
        true
    }

    /// Concatenation of every chunk, in insertion order.
    pub fn assemble(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.total_bytes);
        for chunk in &self.chunks {
            bytes.extend_from_slice(chunk);
        }
        bytes
    }

    /// Number of chunks held.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total bytes across all chunks.
    pub fn byte_len(&self) -> usize {
        self.total_bytes
    }

    pub fn chunk_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.chunks.iter().map(Vec::len)
    }

    /// Drop every chunk.
    pub fn reset(&mut self) {
        self.chunks.clear();
        self.total_bytes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_assemble() {
        let mut buf = ChunkBuffer::new();
        assert!(buf.push(&[1, 2]));
        assert!(buf.push(&[3]));
        assert!(buf.push(&[4, 5, 6]));

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.byte_len(), 6);
        assert_eq!(buf.assemble(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.chunk_sizes().collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn empty_chunks_are_refused() {
        let mut buf = ChunkBuffer::new();
        assert!(!buf.push(&[]));
        assert!(buf.is_empty());
        assert_eq!(buf.byte_len(), 0);
    }

    #[test]
    fn assemble_does_not_consume() {
        let mut buf = ChunkBuffer::new();
        buf.push(b"abc");

        assert_eq!(buf.assemble(), b"abc".to_vec());
        assert_eq!(buf.assemble(), b"abc".to_vec());
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn reset_clears_buffer() {
        let mut buf = ChunkBuffer::new();
        buf.push(&[9; 32]);
        buf.reset();

        assert!(buf.is_empty());
        assert_eq!(buf.byte_len(), 0);
        assert!(buf.assemble().is_empty());
    }
}
