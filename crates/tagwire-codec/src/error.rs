use crate::int::IntWidth;

/// Errors that can occur during value encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Composite framing was malformed.
    #[error("frame error: {0}")]
    Frame(#[from] tagwire_frame::FrameError),

    /// The buffer is shorter than the primitive layout requires.
    #[error("buffer too short ({available} bytes, need {needed})")]
    Truncated { needed: usize, available: usize },

    /// The buffer is not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// An integer buffer has no matching fixed width.
    #[error("no integer width matches a {len}-byte buffer")]
    InvalidWidth { len: usize },

    /// The value does not fit the integer width and truncation is disabled.
    #[error("{value} does not fit in {width}")]
    PrecisionLoss { value: i128, width: IntWidth },

    /// Nesting exceeded the configured recursion limit.
    #[error("nesting depth exceeds {max}")]
    DepthExceeded { max: usize },

    /// The value kind has no codec and strict kinds are enabled.
    #[error("unsupported value kind: {0}")]
    UnsupportedKind(String),

    /// A composite has a different element count than its shape.
    #[error("expected {expected} elements, found {found}")]
    ArityMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
