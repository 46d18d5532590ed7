//! Compact type-directed binary encoding for heterogeneous values.
//!
//! tagwire turns booleans, integers, characters, strings, byte sequences and
//! nested arrays/objects into deterministic byte buffers, and decodes them
//! back given an explicit type tag.
//!
//! # Crate Structure
//!
//! - [`codec`] — Value model, encoder and tag-directed decoder
//! - [`frame`] — Length-prefixed element framing for composites

/// Re-export codec types.
pub mod codec {
    pub use tagwire_codec::*;
}

/// Re-export frame types.
pub mod frame {
    pub use tagwire_frame::*;
}

pub use tagwire_codec::{decode, encode, Codec, CodecConfig, Shape, TypeTag, Value};
