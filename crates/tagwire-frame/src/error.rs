/// Errors that can occur while wrapping or splitting framed elements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The sequence header does not start with the magic number.
    #[error("invalid sequence magic (expected 0x5653 \"VS\")")]
    InvalidMagic,

    /// An element payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The sequence declares more elements than allowed.
    #[error("too many elements ({count}, max {max})")]
    TooManyElements { count: usize, max: usize },

    /// The buffer ended before a complete header or payload.
    #[error("truncated frame (needed {needed} bytes, {available} available)")]
    Truncated { needed: usize, available: usize },

    /// Bytes remain after the last element of a sequence.
    #[error("{remaining} trailing bytes after sequence")]
    TrailingBytes { remaining: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
