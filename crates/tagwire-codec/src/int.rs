//! Width-explicit little-endian integer codec.
//!
//! Every integer on the wire has a fixed width chosen by the caller. Values
//! that do not fit are either truncated to their low-order bytes or rejected,
//! depending on [`PrecisionPolicy`].

use std::fmt;

use bytes::{BufMut, BytesMut};

use crate::config::PrecisionPolicy;
use crate::error::{CodecError, Result};

/// Fixed integer width on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W32,
    W64,
    W128,
}

impl IntWidth {
    /// Number of bytes this width occupies.
    pub fn bytes(self) -> usize {
        match self {
            IntWidth::W32 => 4,
            IntWidth::W64 => 8,
            IntWidth::W128 => 16,
        }
    }

    /// Width whose byte size is exactly `len`.
    pub fn for_len(len: usize) -> Option<Self> {
        match len {
            4 => Some(IntWidth::W32),
            8 => Some(IntWidth::W64),
            16 => Some(IntWidth::W128),
            _ => None,
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bytes() * 8)
    }
}

/// Returns true if `value` is representable as a signed integer of `width`.
pub fn fits_signed(value: i128, width: IntWidth) -> bool {
    match width {
        IntWidth::W32 => i32::try_from(value).is_ok(),
        IntWidth::W64 => i64::try_from(value).is_ok(),
        IntWidth::W128 => true,
    }
}

/// Returns true if `value` is representable as an unsigned integer of `width`.
pub fn fits_unsigned(value: u128, width: IntWidth) -> bool {
    match width {
        IntWidth::W32 => u32::try_from(value).is_ok(),
        IntWidth::W64 => u64::try_from(value).is_ok(),
        IntWidth::W128 => true,
    }
}

/// Append `value` as a two's complement little-endian integer of `width`.
pub fn write_signed(
    value: i128,
    width: IntWidth,
    policy: PrecisionPolicy,
    dst: &mut BytesMut,
) -> Result<()> {
    ensure_signed(value, width, policy)?;
    dst.put_slice(&value.to_le_bytes()[..width.bytes()]);
    Ok(())
}

/// Append `value` as an unsigned little-endian integer of `width`.
pub fn write_unsigned(
    value: u128,
    width: IntWidth,
    policy: PrecisionPolicy,
    dst: &mut BytesMut,
) -> Result<()> {
    if !fits_unsigned(value, width) {
        check_policy(i128::try_from(value).unwrap_or(i128::MAX), width, policy)?;
    }
    dst.put_slice(&value.to_le_bytes()[..width.bytes()]);
    Ok(())
}

/// Read a signed little-endian integer of `width` from the start of `src`.
///
/// Bytes past the width are ignored.
pub fn read_signed(src: &[u8], width: IntWidth) -> Result<i128> {
    let raw = leading(src, width)?;
    let value = match width {
        IntWidth::W32 => i32::from_le_bytes(copy_array(raw)) as i128,
        IntWidth::W64 => i64::from_le_bytes(copy_array(raw)) as i128,
        IntWidth::W128 => i128::from_le_bytes(copy_array(raw)),
    };
    Ok(value)
}

/// Apply `policy` if `value` does not fit a signed integer of `width`.
pub fn ensure_signed(value: i128, width: IntWidth, policy: PrecisionPolicy) -> Result<()> {
    if fits_signed(value, width) {
        return Ok(());
    }
    check_policy(value, width, policy)
}

fn check_policy(value: i128, width: IntWidth, policy: PrecisionPolicy) -> Result<()> {
    match policy {
        PrecisionPolicy::Reject => Err(CodecError::PrecisionLoss { value, width }),
        PrecisionPolicy::Truncate => {
            tracing::debug!(value = %value, %width, "truncating integer to low-order bytes");
            Ok(())
        }
    }
}

fn leading(src: &[u8], width: IntWidth) -> Result<&[u8]> {
    let needed = width.bytes();
    src.get(..needed).ok_or(CodecError::Truncated {
        needed,
        available: src.len(),
    })
}

fn copy_array<const N: usize>(raw: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&raw[..N]);
    out
}
