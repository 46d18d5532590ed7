//! Per-primitive byte layouts.
//!
//! | Kind    | Layout                                                   |
//! |---------|----------------------------------------------------------|
//! | Boolean | 1 byte, `1` or `0`                                       |
//! | Char    | UTF-8, left-aligned, zero padded to at least 2 bytes     |
//! | String  | raw UTF-8, no length prefix                              |
//! | Number  | 4 bytes, signed little-endian                            |
//! | BigInt  | 4, 8 or 16 bytes, signed little-endian                   |

use bytes::{BufMut, BytesMut};

use crate::config::PrecisionPolicy;
use crate::error::{CodecError, Result};
use crate::int::{self, IntWidth};

/// Minimum encoded size of a character.
pub const CHAR_WIDTH: usize = 2;

/// Encoded size of a number.
pub const NUMBER_WIDTH: IntWidth = IntWidth::W32;

pub fn encode_bool(b: bool, dst: &mut BytesMut) {
    dst.put_u8(u8::from(b));
}

/// Any first byte other than `1` decodes as false.
pub fn decode_bool(src: &[u8]) -> Result<bool> {
    match src.first() {
        Some(byte) => Ok(*byte == 1),
        None => Err(CodecError::Truncated {
            needed: 1,
            available: 0,
        }),
    }
}

pub fn encode_char(c: char, dst: &mut BytesMut) {
    let mut raw = [0u8; 4];
    let encoded = c.encode_utf8(&mut raw);
    let len = encoded.len();
    dst.put_slice(encoded.as_bytes());
    if len < CHAR_WIDTH {
        dst.put_bytes(0, CHAR_WIDTH - len);
    }
}

/// Decode the first code point of `src`.
pub fn decode_char(src: &[u8]) -> Result<char> {
    leading_text(src)?
        .chars()
        .next()
        .ok_or(CodecError::Truncated {
            needed: 1,
            available: 0,
        })
}

pub fn encode_str(s: &str, dst: &mut BytesMut) {
    dst.put_slice(s.as_bytes());
}

/// Decode UTF-8 text.
///
/// A 2-byte buffer may be a padded character, so one trailing NUL is
/// dropped from it. `"ab"` stays `"ab"`, `[b'a', 0]` becomes `"a"`.
pub fn decode_string(src: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(src)?;
    if src.len() == CHAR_WIDTH {
        if let Some(stripped) = text.strip_suffix('\0') {
            return Ok(stripped.to_string());
        }
    }
    Ok(text.to_string())
}

/// Encode a machine-width integer as 4 little-endian bytes.
///
/// Negative values are written through their unsigned 32-bit
/// reinterpretation; the bytes are identical to the signed layout.
pub fn encode_number(n: i64, policy: PrecisionPolicy, dst: &mut BytesMut) -> Result<()> {
    if n < 0 {
        int::ensure_signed(n as i128, NUMBER_WIDTH, policy)?;
        return int::write_unsigned(n as u32 as u128, NUMBER_WIDTH, policy, dst);
    }
    int::write_signed(n as i128, NUMBER_WIDTH, policy, dst)
}

pub fn decode_number(src: &[u8]) -> Result<i64> {
    Ok(int::read_signed(src, NUMBER_WIDTH)? as i64)
}

pub fn encode_bigint(
    n: i128,
    width: IntWidth,
    policy: PrecisionPolicy,
    dst: &mut BytesMut,
) -> Result<()> {
    int::write_signed(n, width, policy, dst)
}

/// The buffer length selects the width; 4, 8 and 16 bytes are accepted.
pub fn decode_bigint(src: &[u8]) -> Result<i128> {
    let width = IntWidth::for_len(src.len()).ok_or(CodecError::InvalidWidth { len: src.len() })?;
    int::read_signed(src, width)
}

// Longest valid UTF-8 prefix; invalid trailing padding is tolerated.
fn leading_text(src: &[u8]) -> Result<&str> {
    match std::str::from_utf8(src) {
        Ok(text) => Ok(text),
        Err(err) if err.valid_up_to() > 0 => Ok(std::str::from_utf8(&src[..err.valid_up_to()])?),
        Err(err) => Err(err.into()),
    }
}
