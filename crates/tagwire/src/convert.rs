//! JSON <-> [`Value`] mapping for the command line.
//!
//! Plain JSON maps onto the value model directly. Kinds JSON cannot express
//! use single-key marker objects:
//!
//! - `{"$bigint": "170141183460469231731687303715884105727"}`
//! - `{"$char": "x"}`
//! - `{"$bytes": "0a0b0c"}` (hex)
//! - `{"$byte": 7}`

use bytes::Bytes;
use serde_json::{Map, Number, Value as Json};
use tagwire_codec::{Shape, TypeTag, Value};

use crate::exit::{CliError, CliResult};

pub fn value_from_json(json: Json) -> CliResult<Value> {
    let value = match json {
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => number_from_json(&n),
        Json::String(s) => Value::Str(s),
        Json::Array(items) => Value::Array(
            items
                .into_iter()
                .map(value_from_json)
                .collect::<CliResult<_>>()?,
        ),
        Json::Object(map) => {
            if let Some((key, inner)) = marker(&map) {
                return marker_value(key, inner);
            }
            Value::Object(
                map.into_iter()
                    .map(|(key, member)| Ok((key, value_from_json(member)?)))
                    .collect::<CliResult<_>>()?,
            )
        }
        Json::Null => Value::Unsupported("null".to_string()),
    };
    Ok(value)
}

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => Json::from(*n),
        Value::BigInt(n) => match i64::try_from(*n) {
            Ok(n) => Json::from(n),
            Err(_) => Json::String(n.to_string()),
        },
        Value::Char(c) => Json::String(c.to_string()),
        Value::Str(s) => Json::String(s.clone()),
        Value::Byte(b) => Json::from(*b),
        Value::Bytes(bytes) => Json::String(hex::encode(bytes)),
        Value::Array(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Value::Object(members) => Json::Object(
            members
                .iter()
                .map(|(key, member)| (key.clone(), value_to_json(member)))
                .collect(),
        ),
        Value::Unsupported(text) => Json::String(text.clone()),
    }
}

/// Parse a decode shape.
///
/// A string names a tag (`"number"`) or a list of one (`"string[]"`), an array
/// is a tuple, an object is a record, and `{"$list": shape}` is a list of
/// any shape.
pub fn shape_from_json(json: &Json) -> CliResult<Shape> {
    match json {
        Json::String(name) => shape_from_name(name),
        Json::Array(items) => Ok(Shape::Tuple(
            items.iter().map(shape_from_json).collect::<CliResult<_>>()?,
        )),
        Json::Object(map) => {
            if let Some(("$list", inner)) = marker(map) {
                return Ok(Shape::list(shape_from_json(inner)?));
            }
            Ok(Shape::Record(
                map.iter()
                    .map(|(key, field)| Ok((key.clone(), shape_from_json(field)?)))
                    .collect::<CliResult<_>>()?,
            ))
        }
        other => Err(CliError::usage(format!("invalid shape: {other}"))),
    }
}

fn shape_from_name(name: &str) -> CliResult<Shape> {
    if let Some(element) = name.strip_suffix("[]") {
        return Ok(Shape::list(shape_from_name(element)?));
    }
    name.parse::<TypeTag>()
        .map(Shape::Scalar)
        .map_err(|err| CliError::usage(err.to_string()))
}

fn number_from_json(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i)
    } else if let Some(u) = n.as_u64() {
        Value::BigInt(u as i128)
    } else {
        Value::Unsupported(n.to_string())
    }
}

fn marker(map: &Map<String, Json>) -> Option<(&str, &Json)> {
    if map.len() != 1 {
        return None;
    }
    map.iter()
        .next()
        .filter(|(key, _)| key.starts_with('$'))
        .map(|(key, inner)| (key.as_str(), inner))
}

fn marker_value(key: &str, inner: &Json) -> CliResult<Value> {
    let text = || {
        inner
            .as_str()
            .ok_or_else(|| CliError::usage(format!("{key} expects a string")))
    };
    match key {
        "$bigint" => text()?
            .parse::<i128>()
            .map(Value::BigInt)
            .map_err(|err| CliError::usage(format!("invalid $bigint: {err}"))),
        "$char" => {
            let s = text()?;
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(CliError::usage("$char expects exactly one character")),
            }
        }
        "$bytes" => hex::decode(text()?)
            .map(|raw| Value::Bytes(Bytes::from(raw)))
            .map_err(|err| CliError::usage(format!("invalid $bytes: {err}"))),
        "$byte" => inner
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .map(Value::Byte)
            .ok_or_else(|| CliError::usage("$byte expects an integer 0-255")),
        other => Err(CliError::usage(format!("unknown marker {other}"))),
    }
}
