/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The encoder was handed an empty bit stream.
    #[error("input stream is empty")]
    EmptyInput,

    /// The chunk size must be at least one bit.
    #[error("invalid chunk size ({0} bits, must be at least 1)")]
    InvalidChunkSize(usize),

    /// A flag-delimited frame destuffed to fewer bits than a checksum.
    ///
    /// This stops the whole decode; frames verified before it are kept.
    #[error("frame {index} at bit {offset} too short ({bits} bits, need at least 16)")]
    ShortPayload {
        index: usize,
        offset: usize,
        bits: usize,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;
