use std::io::{IsTerminal, Write};

use bytes::Bytes;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tagwire_codec::{Value, ValueKind};

use crate::convert::value_to_json;

const PREVIEW_BYTES: usize = 16;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct EncodedOutput<'a> {
    kind: &'a str,
    len: usize,
    hex: String,
}

#[derive(Serialize)]
struct DecodedOutput<'a> {
    tag: &'a str,
    kind: &'a str,
    value: serde_json::Value,
}

#[derive(Serialize)]
struct ElementOutput {
    index: usize,
    len: usize,
    hex: String,
    nested: bool,
}

pub fn print_encoded(kind: ValueKind, encoded: &[u8], format: OutputFormat) {
    let hex = hex::encode(encoded);
    match format {
        OutputFormat::Json => print_json(&EncodedOutput {
            kind: kind.name(),
            len: encoded.len(),
            hex,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["KIND", "LEN", "HEX"]);
            table.add_row(vec![kind.name().to_string(), encoded.len().to_string(), hex]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("kind={} len={} hex={hex}", kind.name(), encoded.len()),
        OutputFormat::Raw => print_raw(encoded),
    }
}

pub fn print_decoded(tag: &str, value: &Value, format: OutputFormat) {
    let kind = value.kind();
    let rendered = value_to_json(value);
    match format {
        OutputFormat::Json => print_json(&DecodedOutput {
            tag,
            kind: kind.name(),
            value: rendered,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["TAG", "KIND", "VALUE"]);
            table.add_row(vec![tag.to_string(), kind.name().to_string(), rendered.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("tag={tag} kind={} value={rendered}", kind.name()),
        OutputFormat::Raw => {
            if let Some(bytes) = value.as_bytes() {
                print_raw(bytes);
            } else if let Some(text) = value.as_str() {
                print_raw(text.as_bytes());
            } else {
                println!("{rendered}");
            }
        }
    }
}

pub fn print_elements(elements: &[Bytes], format: OutputFormat) {
    let rows: Vec<ElementOutput> = elements
        .iter()
        .enumerate()
        .map(|(index, element)| ElementOutput {
            index,
            len: element.len(),
            hex: preview(element),
            nested: tagwire_frame::is_sequence(element),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = new_table(vec!["#", "LEN", "NESTED", "BYTES"]);
            for row in rows {
                table.add_row(vec![
                    row.index.to_string(),
                    row.len.to_string(),
                    row.nested.to_string(),
                    row.hex,
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!(
                    "element={} len={} nested={} bytes={}",
                    row.index, row.len, row.nested, row.hex
                );
            }
        }
        OutputFormat::Raw => {
            for element in elements {
                print_raw(element);
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn print_json<T: Serialize + ?Sized>(out: &T) {
    println!(
        "{}",
        serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
    );
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn preview(bytes: &[u8]) -> String {
    if bytes.len() <= PREVIEW_BYTES {
        return hex::encode(bytes);
    }
    format!("{}… (+{} bytes)", hex::encode(&bytes[..PREVIEW_BYTES]), bytes.len() - PREVIEW_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_payloads() {
        assert_eq!(preview(&[0xAB, 0xCD]), "abcd");
        let long = vec![0u8; PREVIEW_BYTES + 4];
        assert!(preview(&long).ends_with("(+4 bytes)"));
    }
}
