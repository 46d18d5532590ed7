//! [`Value`] — the runtime value model accepted by the encoder.

use std::fmt;

use bytes::Bytes;

/// A value the encoder can dispatch on.
///
/// Object keys are kept for display and conversions only; the wire form
/// carries member values in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Boolean flag
    Bool(bool),
    /// Machine-width integer
    Number(i64),
    /// Integer wider than a machine word
    BigInt(i128),
    /// Exactly one code point
    Char(char),
    /// UTF-8 text
    Str(String),
    /// A single byte, eligible for the flat byte-run path inside arrays
    Byte(u8),
    /// Byte sequence
    Bytes(Bytes),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Ordered key-value pairs
    Object(Vec<(String, Value)>),
    /// Any other runtime kind, carried as its default text representation
    Unsupported(String),
}

/// Runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Integer,
    BigInteger,
    Character,
    String,
    Byte,
    ByteSequence,
    Array,
    Object,
    Unsupported,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::BigInteger => "big integer",
            ValueKind::Character => "character",
            ValueKind::String => "string",
            ValueKind::Byte => "byte",
            ValueKind::ByteSequence => "byte sequence",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Integer,
            Value::BigInt(_) => ValueKind::BigInteger,
            Value::Char(_) => ValueKind::Character,
            Value::Str(_) => ValueKind::String,
            Value::Byte(_) => ValueKind::Byte,
            Value::Bytes(_) => ValueKind::ByteSequence,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Unsupported(_) => ValueKind::Unsupported,
        }
    }

    /// Build an object from `(key, value)` pairs, keeping their order.
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(
            members
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Build an array of single bytes.
    pub fn byte_array(bytes: &[u8]) -> Self {
        Value::Array(bytes.iter().copied().map(Value::Byte).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

/// Returns true if `items` is non-empty and every element is a single byte.
///
/// An empty array is not treated as flat even though "every element is a
/// byte" holds vacuously: it encodes as an empty framed sequence so that it
/// decodes back to an empty array rather than an empty byte run.
pub fn is_flat_byte_sequence(items: &[Value]) -> bool {
    !items.is_empty() && items.iter().all(|item| matches!(item, Value::Byte(_)))
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<u8> for Value {
    fn from(b: u8) -> Self {
        Value::Byte(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(Bytes::from(bytes))
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_byte_sequence_detection() {
        assert!(is_flat_byte_sequence(&[Value::Byte(1), Value::Byte(2)]));
        assert!(!is_flat_byte_sequence(&[Value::Byte(1), Value::Number(2)]));
        assert!(!is_flat_byte_sequence(&[Value::Bytes(Bytes::from_static(b"a"))]));
        assert!(!is_flat_byte_sequence(&[]));
    }

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(Value::from(5).kind(), ValueKind::Integer);
        assert_eq!(Value::from(5i128).kind(), ValueKind::BigInteger);
        assert_eq!(Value::from(5u8).kind(), ValueKind::Byte);
        assert_eq!(Value::from(vec![1u8, 2]).kind(), ValueKind::ByteSequence);
        assert_eq!(ValueKind::BigInteger.to_string(), "big integer");
    }

    #[test]
    fn object_keeps_insertion_order() {
        let obj = Value::object([("b", Value::from(1)), ("a", Value::from(2))]);
        match obj {
            Value::Object(members) => {
                assert_eq!(members[0].0, "b");
                assert_eq!(members[1].0, "a");
            }
            other => panic!("expected object, got {other:?}"),
        }
    }
}
