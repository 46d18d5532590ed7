//! Type-directed binary codec for heterogeneous values.
//!
//! The encoder inspects a [`Value`]'s runtime kind and writes a compact,
//! untagged byte layout. The decoder needs the [`TypeTag`] out of band,
//! since encoded bytes do not identify their own type.
//!
//! Composites (arrays and objects) are framed with `tagwire-frame`; their
//! members can be decoded back with a [`Shape`] describing what each
//! element holds.
//!
//! ```
//! use tagwire_codec::{decode, encode, TypeTag, Value};
//!
//! let encoded = encode(&Value::Number(-42)).unwrap();
//! assert_eq!(encoded.len(), 4);
//! assert_eq!(decode(&encoded, TypeTag::Number).unwrap(), Value::Number(-42));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod int;
pub mod primitive;
pub mod shape;
pub mod tag;
pub mod value;

pub use codec::{decode, encode, Codec, Decoded};
pub use config::{CodecConfig, PrecisionPolicy, DEFAULT_MAX_DEPTH};
pub use error::{CodecError, Result};
pub use int::IntWidth;
pub use shape::Shape;
pub use tag::{tag_name, TypeTag, UnknownTag};
pub use value::{is_flat_byte_sequence, Value, ValueKind};
