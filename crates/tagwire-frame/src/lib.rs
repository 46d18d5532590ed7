//! Length-prefixed element framing for tagwire composites.
//!
//! Composite values are encoded as a sequence of framed elements:
//! - A 2-byte magic number ("VS") marking the start of a sequence
//! - A 4-byte little-endian element count
//! - Each element as a 4-byte little-endian length followed by its payload
//!
//! Splitting walks the buffer with an explicit cursor, so nested sequences
//! can be unwrapped depth-first without re-slicing the outer buffer.

pub mod codec;
pub mod error;

pub use codec::{
    is_sequence, join_sequence, read_sequence_header, split_sequence, unwrap, wrap, wrap_into,
    FrameConfig, DEFAULT_MAX_ELEMENTS, DEFAULT_MAX_PAYLOAD, LENGTH_SIZE, MAGIC,
    SEQUENCE_HEADER_SIZE,
};
pub use error::{FrameError, Result};
