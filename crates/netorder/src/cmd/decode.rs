use std::fs;

use netorder_marshal::{assert_channel_ok, unmarshal_value, BufChannel, Scalar};
use tracing::debug;

use crate::cmd::{DecodeArgs, ScalarType};
use crate::exit::{io_error, marshal_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_decoded, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(&args)?;
    let values = match args.ty {
        ScalarType::U8 => decode_all::<u8>(&input)?,
        ScalarType::I8 => decode_all::<i8>(&input)?,
        ScalarType::U16 => decode_all::<u16>(&input)?,
        ScalarType::I16 => decode_all::<i16>(&input)?,
        ScalarType::U32 => decode_all::<u32>(&input)?,
        ScalarType::I32 => decode_all::<i32>(&input)?,
    };
    debug!(ty = args.ty.name(), bytes = input.len(), count = values.len(), "decoded values");

    print_decoded(args.ty, &values, format);
    Ok(SUCCESS)
}

fn resolve_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "either --hex or --file is required"))
}

/// Decode values until the input is exhausted. A trailing partial value
/// fails the whole decode.
fn decode_all<T>(input: &[u8]) -> CliResult<Vec<i64>>
where
    T: Scalar + Into<i64>,
{
    let mut channel = BufChannel::new(input);
    let mut values = Vec::with_capacity(input.len() / T::WIDTH.len());
    while channel.remaining() > 0 {
        if let Some(value) = unmarshal_value::<T, _>(&mut channel) {
            values.push(value.into());
        }
    }
    assert_channel_ok(&channel).map_err(|err| marshal_error("decode failed", err))?;
    Ok(values)
}

/// Parse hex digits, ignoring whitespace and an optional `0x` prefix.
fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);

    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            format!("--hex must have an even number of digits (got {})", digits.len()),
        ));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| CliError::new(USAGE, format!("invalid hex digits at offset {i}")))
        })
        .collect()
}
