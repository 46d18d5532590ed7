use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Element prefix: payload length (4 bytes LE).
pub const LENGTH_SIZE: usize = 4;

/// Magic bytes: "VS" (0x56 0x53).
pub const MAGIC: [u8; 2] = [0x56, 0x53];

/// Sequence header: magic (2) + element count (4) = 6 bytes.
pub const SEQUENCE_HEADER_SIZE: usize = 6;

/// Default maximum element payload size: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Default maximum number of elements in one sequence.
pub const DEFAULT_MAX_ELEMENTS: usize = 1 << 20;

/// Configuration for splitting framed sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum element payload size in bytes. Default: 16 MiB.
    pub max_payload_size: usize,
    /// Maximum element count accepted from a sequence header.
    pub max_elements: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

/// Wrap one encoded value, appending it to `dst`.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────┐
/// │ Length (4B)  │ Payload          │
/// │ u32 LE       │ (Length bytes)   │
/// └──────────────┴──────────────────┘
/// ```
pub fn wrap_into(payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > u32::MAX as usize {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: u32::MAX as usize,
        });
    }
    dst.reserve(LENGTH_SIZE + payload.len());
    dst.put_u32_le(payload.len() as u32);
    dst.put_slice(payload);
    Ok(())
}

/// Wrap one encoded value into a fresh buffer.
pub fn wrap(payload: &[u8]) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(LENGTH_SIZE + payload.len());
    wrap_into(payload, &mut dst)?;
    Ok(dst.freeze())
}

/// Join already-wrapped elements into one sequence buffer.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────┬──────────────────────┐
/// │ Magic (2B)   │ Count (4B)   │ Wrapped elements     │
/// │ 0x56 0x53    │ u32 LE       │ (Count of them)      │
/// │ "VS"         │              │                      │
/// └──────────────┴──────────────┴──────────────────────┘
/// ```
pub fn join_sequence(elements: &[Bytes]) -> Result<Bytes> {
    if elements.len() > u32::MAX as usize {
        return Err(FrameError::TooManyElements {
            count: elements.len(),
            max: u32::MAX as usize,
        });
    }
    let body: usize = elements.iter().map(Bytes::len).sum();
    let mut dst = BytesMut::with_capacity(SEQUENCE_HEADER_SIZE + body);
    dst.put_slice(&MAGIC);
    dst.put_u32_le(elements.len() as u32);
    for element in elements {
        dst.put_slice(element);
    }
    Ok(dst.freeze())
}

/// Read a sequence header at `cursor`, returning the declared element count.
///
/// On success the cursor is advanced past the header.
pub fn read_sequence_header(src: &[u8], cursor: &mut usize, config: &FrameConfig) -> Result<usize> {
    let start = *cursor;
    ensure_available(src, start, SEQUENCE_HEADER_SIZE)?;

    if src[start..start + 2] != MAGIC {
        return Err(FrameError::InvalidMagic);
    }

    let count = read_u32_le(src, start + 2)? as usize;
    if count > config.max_elements {
        return Err(FrameError::TooManyElements {
            count,
            max: config.max_elements,
        });
    }

    // Every element carries at least its length prefix.
    let body_start = start + SEQUENCE_HEADER_SIZE;
    ensure_available(src, body_start, count.saturating_mul(LENGTH_SIZE))?;

    *cursor = body_start;
    Ok(count)
}

/// Unwrap the element at `cursor`, returning its payload without copying.
///
/// On success the cursor is advanced past the element.
pub fn unwrap(src: &Bytes, cursor: &mut usize, max_payload: usize) -> Result<Bytes> {
    let start = *cursor;
    let len = read_u32_le(src, start)? as usize;

    if len > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: len,
            max: max_payload,
        });
    }

    let payload_start = start + LENGTH_SIZE;
    ensure_available(src, payload_start, len)?;

    *cursor = payload_start + len;
    Ok(src.slice(payload_start..payload_start + len))
}

/// Split a complete sequence buffer into its element payloads.
pub fn split_sequence(src: &Bytes, config: &FrameConfig) -> Result<Vec<Bytes>> {
    let mut cursor = 0usize;
    let count = read_sequence_header(src, &mut cursor, config)?;

    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        elements.push(unwrap(src, &mut cursor, config.max_payload_size)?);
    }

    if cursor != src.len() {
        return Err(FrameError::TrailingBytes {
            remaining: src.len() - cursor,
        });
    }

    tracing::trace!(count, len = src.len(), "split framed sequence");
    Ok(elements)
}

/// Returns true if `src` starts with a sequence header.
pub fn is_sequence(src: &[u8]) -> bool {
    src.len() >= SEQUENCE_HEADER_SIZE && src[..2] == MAGIC
}

fn read_u32_le(src: &[u8], at: usize) -> Result<u32> {
    ensure_available(src, at, LENGTH_SIZE)?;
    let mut raw = [0u8; LENGTH_SIZE];
    raw.copy_from_slice(&src[at..at + LENGTH_SIZE]);
    Ok(u32::from_le_bytes(raw))
}

fn ensure_available(src: &[u8], at: usize, needed: usize) -> Result<()> {
    let available = src.len().saturating_sub(at);
    if available < needed {
        return Err(FrameError::Truncated { needed, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(payloads: &[&[u8]]) -> Bytes {
        let wrapped: Vec<Bytes> = payloads.iter().map(|p| wrap(p).unwrap()).collect();
        join_sequence(&wrapped).unwrap()
    }

    #[test]
    fn test_wrap_layout() {
        let wrapped = wrap(b"abc").unwrap();
        assert_eq!(wrapped.as_ref(), &[3, 0, 0, 0, b'a', b'b', b'c']);
    }

    #[test]
    fn test_join_layout() {
        let buf = sequence_of(&[b"\x01", b""]);
        assert_eq!(
            buf.as_ref(),
            &[0x56, 0x53, 2, 0, 0, 0, 1, 0, 0, 0, 0x01, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_split_sequence_in_order() {
        let buf = sequence_of(&[b"first", b"second", b""]);
        let parts = split_sequence(&buf, &FrameConfig::default()).unwrap();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].as_ref(), b"first");
        assert_eq!(parts[1].as_ref(), b"second");
        assert!(parts[2].is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        let buf = join_sequence(&[]).unwrap();
        assert_eq!(buf.len(), SEQUENCE_HEADER_SIZE);
        assert!(split_sequence(&buf, &FrameConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unwrap_advances_cursor() {
        let mut wire = BytesMut::new();
        wrap_into(b"one", &mut wire).unwrap();
        wrap_into(b"two", &mut wire).unwrap();
        let wire = wire.freeze();

        let mut cursor = 0;
        let first = unwrap(&wire, &mut cursor, DEFAULT_MAX_PAYLOAD).unwrap();
        assert_eq!(cursor, LENGTH_SIZE + 3);
        let second = unwrap(&wire, &mut cursor, DEFAULT_MAX_PAYLOAD).unwrap();

        assert_eq!(first.as_ref(), b"one");
        assert_eq!(second.as_ref(), b"two");
        assert_eq!(cursor, wire.len());
    }

    #[test]
    fn test_invalid_magic() {
        let buf = Bytes::from_static(&[0xFF, 0xFF, 0, 0, 0, 0]);
        let result = split_sequence(&buf, &FrameConfig::default());
        assert!(matches!(result, Err(FrameError::InvalidMagic)));
    }

    #[test]
    fn test_truncated_header() {
        let buf = Bytes::from_static(&[0x56, 0x53, 0x01]);
        let result = split_sequence(&buf, &FrameConfig::default());
        assert!(matches!(result, Err(FrameError::Truncated { .. })));
    }

    #[test]
    fn test_truncated_payload() {
        let buf = sequence_of(&[b"hello"]);
        let cut = buf.slice(..buf.len() - 2);
        let result = split_sequence(&cut, &FrameConfig::default());
        assert_eq!(
            result.unwrap_err(),
            FrameError::Truncated {
                needed: 5,
                available: 3
            }
        );
    }

    #[test]
    fn test_count_larger_than_buffer_is_rejected_early() {
        let mut wire = BytesMut::new();
        wire.put_slice(&MAGIC);
        wire.put_u32_le(1_000);
        let result = split_sequence(&wire.freeze(), &FrameConfig::default());
        assert!(matches!(result, Err(FrameError::Truncated { .. })));
    }

    #[test]
    fn test_too_many_elements() {
        let buf = sequence_of(&[b"a", b"b", b"c"]);
        let cfg = FrameConfig {
            max_elements: 2,
            ..FrameConfig::default()
        };
        let result = split_sequence(&buf, &cfg);
        assert!(matches!(
            result,
            Err(FrameError::TooManyElements { count: 3, max: 2 })
        ));
    }

    #[test]
    fn test_payload_too_large() {
        let buf = sequence_of(&[b"0123456789"]);
        let cfg = FrameConfig {
            max_payload_size: 4,
            ..FrameConfig::default()
        };
        let result = split_sequence(&buf, &cfg);
        assert!(matches!(result, Err(FrameError::PayloadTooLarge { .. })));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut wire = BytesMut::from(sequence_of(&[b"x"]).as_ref());
        wire.put_u8(0xAA);
        let result = split_sequence(&wire.freeze(), &FrameConfig::default());
        assert!(matches!(
            result,
            Err(FrameError::TrailingBytes { remaining: 1 })
        ));
    }

    #[test]
    fn test_nested_sequence_payload() {
        let inner = sequence_of(&[b"deep"]);
        let outer = sequence_of(&[inner.as_ref(), b"shallow"]);

        let parts = split_sequence(&outer, &FrameConfig::default()).unwrap();
        assert!(is_sequence(&parts[0]));
        let inner_parts = split_sequence(&parts[0], &FrameConfig::default()).unwrap();
        assert_eq!(inner_parts[0].as_ref(), b"deep");
        assert_eq!(parts[1].as_ref(), b"shallow");
    }
}
