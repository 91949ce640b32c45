use clap::{Args, Subcommand, ValueEnum};
use netorder_marshal::Width;
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode integers to network-order bytes.
    Encode(EncodeArgs),
    /// Decode network-order bytes to integers.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Scalar types accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScalarType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

impl ScalarType {
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::U8 => "u8",
            ScalarType::I8 => "i8",
            ScalarType::U16 => "u16",
            ScalarType::I16 => "i16",
            ScalarType::U32 => "u32",
            ScalarType::I32 => "i32",
        }
    }

    pub fn width(self) -> Width {
        match self {
            ScalarType::U8 | ScalarType::I8 => Width::Byte,
            ScalarType::U16 | ScalarType::I16 => Width::Short,
            ScalarType::U32 | ScalarType::I32 => Width::Word,
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Scalar type of every value.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub ty: ScalarType,
    /// Values to encode (decimal or 0x-prefixed hex).
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Scalar type of every value.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub ty: ScalarType,
    /// Hex-encoded input bytes (whitespace allowed).
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub hex: Option<String>,
    /// Read input bytes from file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_type() {
        assert_eq!(ScalarType::I8.width().len(), 1);
        assert_eq!(ScalarType::U16.width().len(), 2);
        assert_eq!(ScalarType::I32.width().len(), 4);
    }

    #[test]
    fn names_match_value_enum() {
        for ty in ScalarType::value_variants() {
            let possible = ty.to_possible_value().expect("no skipped variants");
            assert_eq!(possible.get_name(), ty.name());
        }
    }
}
