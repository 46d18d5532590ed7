//! Type tags selecting a decoder.
//!
//! Codes 0-15 name scalar and composite kinds.
//! Codes 16-255 name array kinds.

use std::fmt;
use std::str::FromStr;

/// Single byte, 1 = true.
pub const BOOLEAN: u8 = 0;

/// Signed integer of configurable width.
pub const BIGINT: u8 = 1;

/// 32-bit signed integer.
pub const NUMBER: u8 = 2;

/// Framed sequence of member values.
pub const OBJECT: u8 = 3;

/// One code point, zero padded to at least 2 bytes.
pub const CHAR: u8 = 4;

/// Raw UTF-8 text.
pub const STRING: u8 = 5;

/// Flat byte run, or a framed sequence of byte-sequence entries.
pub const BYTES: u8 = 16;

/// First array-kind tag code.
pub const ARRAY_KIND_START: u8 = 16;

/// Returns a human-readable name for a tag code.
pub fn tag_name(code: u8) -> &'static str {
    match code {
        BOOLEAN => "BOOLEAN",
        BIGINT => "BIGINT",
        NUMBER => "NUMBER",
        OBJECT => "OBJECT",
        CHAR => "CHAR",
        STRING => "STRING",
        BYTES => "BYTES",
        _ => "UNKNOWN",
    }
}

/// Returns true if the tag code is in the array-kind range.
pub fn is_array_kind(code: u8) -> bool {
    code >= ARRAY_KIND_START
}

/// Decoder selector supplied alongside an encoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Boolean,
    BigInt,
    Number,
    Object,
    Char,
    String,
    Bytes,
}

impl TypeTag {
    pub const ALL: [TypeTag; 7] = [
        TypeTag::Boolean,
        TypeTag::BigInt,
        TypeTag::Number,
        TypeTag::Object,
        TypeTag::Char,
        TypeTag::String,
        TypeTag::Bytes,
    ];

    /// Stable numeric code of this tag.
    pub fn code(self) -> u8 {
        match self {
            TypeTag::Boolean => BOOLEAN,
            TypeTag::BigInt => BIGINT,
            TypeTag::Number => NUMBER,
            TypeTag::Object => OBJECT,
            TypeTag::Char => CHAR,
            TypeTag::String => STRING,
            TypeTag::Bytes => BYTES,
        }
    }

    /// Look up a tag by code. Returns `None` for unrecognized codes.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.code() == code)
    }

    pub fn name(self) -> &'static str {
        tag_name(self.code())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown tag name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip_through_lookup() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_code(tag.code()), Some(tag));
        }
    }

    #[test]
    fn unknown_code_has_no_tag() {
        assert_eq!(TypeTag::from_code(9), None);
        assert_eq!(TypeTag::from_code(17), None);
        assert_eq!(TypeTag::from_code(255), None);
        assert_eq!(tag_name(9), "UNKNOWN");
    }

    #[test]
    fn array_kinds() {
        assert!(is_array_kind(BYTES));
        assert!(is_array_kind(17));
        assert!(!is_array_kind(OBJECT));
    }

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("number".parse::<TypeTag>().unwrap(), TypeTag::Number);
        assert_eq!(" BigInt ".parse::<TypeTag>().unwrap(), TypeTag::BigInt);
        assert_eq!(
            "float".parse::<TypeTag>().unwrap_err(),
            UnknownTag("float".to_string())
        );
    }
}
