use bytes::{BufMut, Bytes, BytesMut};
use tagwire_frame::{is_sequence, join_sequence, read_sequence_header, unwrap, wrap, FrameError};

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::primitive;
use crate::shape::Shape;
use crate::tag::{is_array_kind, TypeTag};
use crate::value::{is_flat_byte_sequence, Value};

/// Outcome of decoding with a raw tag code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The tag was recognized and the buffer decoded.
    Value(Value),
    /// No decoder exists for this tag code.
    Unsupported { code: u8 },
}

impl Decoded {
    pub fn into_value(self) -> Option<Value> {
        match self {
            Decoded::Value(value) => Some(value),
            Decoded::Unsupported { .. } => None,
        }
    }
}

/// Stateless encoder/decoder.
///
/// A `Codec` holds only its configuration and can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Encode a value, dispatching on its runtime kind.
    ///
    /// The output carries no type tag; the decoder must be told what to
    /// expect.
    pub fn encode(&self, value: &Value) -> Result<Bytes> {
        tracing::trace!(kind = %value.kind(), "encoding value");
        let mut dst = BytesMut::new();
        self.encode_into(value, 0, &mut dst)?;
        Ok(dst.freeze())
    }

    /// Decode a buffer with an explicit tag.
    ///
    /// Composite tags decode without element context: `Object` and a framed
    /// `Bytes` buffer yield an array of each element's raw payload. A `Bytes`
    /// buffer without the sequence header is a flat byte run and comes back
    /// whole. Use [`Codec::decode_shape`] to recover typed members.
    pub fn decode(&self, src: &[u8], tag: TypeTag) -> Result<Value> {
        tracing::trace!(%tag, len = src.len(), "decoding value");
        let src = Bytes::copy_from_slice(src);
        self.decode_tag(&src, tag, 0)
    }

    /// Decode with a numeric tag code, reporting unknown codes explicitly.
    pub fn decode_code(&self, src: &[u8], code: u8) -> Result<Decoded> {
        match TypeTag::from_code(code) {
            Some(tag) => Ok(Decoded::Value(self.decode(src, tag)?)),
            None => {
                tracing::debug!(
                    code,
                    array_kind = is_array_kind(code),
                    "no decoder for tag code"
                );
                Ok(Decoded::Unsupported { code })
            }
        }
    }

    /// Decode a buffer using a shape that supplies element tags.
    pub fn decode_shape(&self, src: &[u8], shape: &Shape) -> Result<Value> {
        let src = Bytes::copy_from_slice(src);
        self.decode_shaped(&src, shape, 0)
    }

    fn encode_into(&self, value: &Value, depth: usize, dst: &mut BytesMut) -> Result<()> {
        match value {
            Value::Array(items) if is_flat_byte_sequence(items) => {
                for item in items {
                    if let Value::Byte(b) = item {
                        dst.put_u8(*b);
                    }
                }
                Ok(())
            }
            Value::Array(items) => self.encode_composite(items.iter(), depth, dst),
            Value::Bool(b) => {
                primitive::encode_bool(*b, dst);
                Ok(())
            }
            Value::BigInt(n) => {
                primitive::encode_bigint(*n, self.config.bigint_width, self.config.precision, dst)
            }
            Value::Number(n) => primitive::encode_number(*n, self.config.precision, dst),
            Value::Object(members) => {
                self.encode_composite(members.iter().map(|(_, member)| member), depth, dst)
            }
            Value::Char(c) => {
                primitive::encode_char(*c, dst);
                Ok(())
            }
            Value::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => primitive::encode_char(c, dst),
                    _ => primitive::encode_str(s, dst),
                }
                Ok(())
            }
            Value::Byte(b) => {
                dst.put_u8(*b);
                Ok(())
            }
            Value::Bytes(bytes) => {
                dst.put_slice(bytes);
                Ok(())
            }
            Value::Unsupported(text) => {
                if self.config.strict_kinds {
                    return Err(CodecError::UnsupportedKind(text.clone()));
                }
                tracing::debug!(%text, "no codec for value kind, encoding as text");
                primitive::encode_str(text, dst);
                Ok(())
            }
        }
    }

    fn encode_composite<'a>(
        &self,
        members: impl Iterator<Item = &'a Value>,
        depth: usize,
        dst: &mut BytesMut,
    ) -> Result<()> {
        let depth = self.enter(depth)?;
        let mut wrapped = Vec::new();
        let mut element = BytesMut::new();
        for member in members {
            element.clear();
            self.encode_into(member, depth, &mut element)?;
            wrapped.push(wrap(&element)?);
        }
        dst.put_slice(&join_sequence(&wrapped)?);
        Ok(())
    }

    fn decode_tag(&self, src: &Bytes, tag: TypeTag, depth: usize) -> Result<Value> {
        let value = match tag {
            TypeTag::Boolean => Value::Bool(primitive::decode_bool(src)?),
            TypeTag::BigInt => Value::BigInt(primitive::decode_bigint(src)?),
            TypeTag::Number => Value::Number(primitive::decode_number(src)?),
            TypeTag::Char => Value::Char(primitive::decode_char(src)?),
            TypeTag::String => Value::Str(primitive::decode_string(src)?),
            TypeTag::Bytes if !is_sequence(src) => Value::Bytes(src.clone()),
            TypeTag::Object | TypeTag::Bytes => {
                Value::Array(self.decode_sequence(src, depth, None, |_, element| {
                    Ok(Value::Bytes(element))
                })?)
            }
        };
        Ok(value)
    }

    fn decode_shaped(&self, src: &Bytes, shape: &Shape, depth: usize) -> Result<Value> {
        match shape {
            Shape::Scalar(tag) => self.decode_tag(src, *tag, depth),
            Shape::Raw => Ok(Value::Bytes(src.clone())),
            Shape::List(element) => {
                let items = self.decode_sequence(src, depth, None, |depth, bytes| {
                    self.decode_shaped(&bytes, element, depth)
                })?;
                Ok(Value::Array(items))
            }
            Shape::Tuple(elements) => {
                let mut shapes = elements.iter();
                let items = self.decode_sequence(src, depth, Some(elements.len()), |depth, bytes| {
                    match shapes.next() {
                        Some(shape) => self.decode_shaped(&bytes, shape, depth),
                        None => Ok(Value::Bytes(bytes)),
                    }
                })?;
                Ok(Value::Array(items))
            }
            Shape::Record(fields) => {
                let mut shapes = fields.iter().map(|(_, shape)| shape);
                let items = self.decode_sequence(src, depth, Some(fields.len()), |depth, bytes| {
                    match shapes.next() {
                        Some(shape) => self.decode_shaped(&bytes, shape, depth),
                        None => Ok(Value::Bytes(bytes)),
                    }
                })?;
                Ok(Value::Object(
                    fields
                        .iter()
                        .map(|(key, _)| key.clone())
                        .zip(items)
                        .collect(),
                ))
            }
        }
    }

    /// Walk one framed sequence with a cursor, decoding each element.
    fn decode_sequence<F>(
        &self,
        src: &Bytes,
        depth: usize,
        expected: Option<usize>,
        mut decode_element: F,
    ) -> Result<Vec<Value>>
    where
        F: FnMut(usize, Bytes) -> Result<Value>,
    {
        let depth = self.enter(depth)?;
        let mut cursor = 0usize;
        let count = read_sequence_header(src, &mut cursor, &self.config.frame)?;

        if let Some(expected) = expected {
            if count != expected {
                return Err(CodecError::ArityMismatch {
                    expected,
                    found: count,
                });
            }
        }

        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            let element = unwrap(src, &mut cursor, self.config.frame.max_payload_size)?;
            items.push(decode_element(depth, element)?);
        }

        if cursor != src.len() {
            return Err(FrameError::TrailingBytes {
                remaining: src.len() - cursor,
            }
            .into());
        }
        Ok(items)
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        if depth >= self.config.max_depth {
            return Err(CodecError::DepthExceeded {
                max: self.config.max_depth,
            });
        }
        Ok(depth + 1)
    }
}

/// Encode a value with the default configuration.
pub fn encode(value: &Value) -> Result<Bytes> {
    Codec::new().encode(value)
}

/// Decode a buffer with the default configuration.
pub fn decode(src: &[u8], tag: TypeTag) -> Result<Value> {
    Codec::new().decode(src, tag)
}
