/// Errors surfaced by the typed group conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The wire codec rejected the frame (bad length, zero or duplicate id).
    #[error("frame rejected by the wire codec")]
    Malformed,

    /// The destination buffer cannot hold the populated records.
    #[error("destination buffer too small for the populated records")]
    BufferTooSmall,

    /// More records than a frame can carry.
    #[error("collection holds {count} records, frame capacity is {max}")]
    TooManyRecords { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
