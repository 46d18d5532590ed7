use tagwire_frame::FrameConfig;

use crate::int::IntWidth;

/// Default recursion limit for composite encode/decode.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What to do when an integer does not fit its wire width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecisionPolicy {
    /// Keep the low-order bytes. Compatible with existing encoded data.
    #[default]
    Truncate,
    /// Fail with `CodecError::PrecisionLoss`.
    Reject,
}

/// Controls encoder/decoder behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Maximum composite nesting depth. Default: 64.
    pub max_depth: usize,
    /// Width used when encoding `BigInt` values. Default: 64 bits.
    pub bigint_width: IntWidth,
    /// Handling of integers that exceed their wire width.
    pub precision: PrecisionPolicy,
    /// When true, `Value::Unsupported` fails instead of falling back to text.
    pub strict_kinds: bool,
    /// Limits applied while splitting composite framing.
    pub frame: FrameConfig,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            bigint_width: IntWidth::W64,
            precision: PrecisionPolicy::Truncate,
            strict_kinds: false,
            frame: FrameConfig::default(),
        }
    }
}
