use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::cmd::ScalarType;

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
    schema_id: &'a str,
    #[serde(rename = "type")]
    ty: &'a str,
    width: usize,
    count: usize,
    wire: String,
}

#[derive(Serialize)]
struct DecodedOutput<'a> {
    schema_id: &'a str,
    #[serde(rename = "type")]
    ty: &'a str,
    width: usize,
    count: usize,
    values: &'a [i64],
}

pub fn print_encoded(ty: ScalarType, inputs: &[String], wire: &[u8], format: OutputFormat) {
    let width = ty.width().len();
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                schema_id: "https://schemas.3leaps.dev/netorder/cli/v1/encoded.schema.json",
                ty: ty.name(),
                width,
                count: wire.len() / width,
                wire: hex_string(wire),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "INPUT", "WIRE"]);
            for (input, chunk) in inputs.iter().zip(wire.chunks(width)) {
                table.add_row(vec![
                    ty.name().to_string(),
                    input.clone(),
                    hex_string(chunk),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (input, chunk) in inputs.iter().zip(wire.chunks(width)) {
                println!("{}({}) = {}", ty.name(), input, hex_string(chunk));
            }
        }
        OutputFormat::Raw => {
            print_raw(wire);
        }
    }
}

pub fn print_decoded(ty: ScalarType, values: &[i64], format: OutputFormat) {
    let width = ty.width().len();
    match format {
        OutputFormat::Json => {
            let out = DecodedOutput {
                schema_id: "https://schemas.3leaps.dev/netorder/cli/v1/decoded.schema.json",
                ty: ty.name(),
                width,
                count: values.len(),
                values,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["OFFSET", "TYPE", "VALUE", "HEX"]);
            for (index, value) in values.iter().enumerate() {
                table.add_row(vec![
                    (index * width).to_string(),
                    ty.name().to_string(),
                    value.to_string(),
                    hex_value(*value, width),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (index, value) in values.iter().enumerate() {
                println!(
                    "@{} {} = {} ({})",
                    index * width,
                    ty.name(),
                    value,
                    hex_value(*value, width)
                );
            }
        }
        OutputFormat::Raw => {
            for value in values {
                println!("{value}");
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Space-separated lowercase hex, e.g. `01 02 ab`.
pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two's-complement hex of a decoded value, truncated to its wire width.
fn hex_value(value: i64, width: usize) -> String {
    let mask = (1u64 << (width * 8)) - 1;
    format!("{:#0w$x}", (value as u64) & mask, w = width * 2 + 2)
}
