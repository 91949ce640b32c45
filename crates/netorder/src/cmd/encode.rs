use bytes::BytesMut;
use netorder_marshal::{assert_channel_ok, marshal, BufChannel, Scalar};
use tracing::debug;

use crate::cmd::{EncodeArgs, ScalarType};
use crate::exit::{marshal_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = match args.ty {
        ScalarType::U8 => encode_all::<u8>(&args.values)?,
        ScalarType::I8 => encode_all::<i8>(&args.values)?,
        ScalarType::U16 => encode_all::<u16>(&args.values)?,
        ScalarType::I16 => encode_all::<i16>(&args.values)?,
        ScalarType::U32 => encode_all::<u32>(&args.values)?,
        ScalarType::I32 => encode_all::<i32>(&args.values)?,
    };
    debug!(ty = args.ty.name(), count = args.values.len(), bytes = wire.len(), "encoded values");

    print_encoded(args.ty, &args.values, &wire, format);
    Ok(SUCCESS)
}

fn encode_all<T>(values: &[String]) -> CliResult<BytesMut>
where
    T: Scalar + TryFrom<i64>,
{
    let mut channel = BufChannel::new(BytesMut::with_capacity(values.len() * T::WIDTH.len()));
    for raw in values {
        let value = parse_value::<T>(raw)?;
        marshal(&mut channel, value);
    }
    assert_channel_ok(&channel).map_err(|err| marshal_error("encode failed", err))?;
    Ok(channel.into_inner())
}

/// Parse a decimal or `0x`-prefixed hex integer and range-check it for `T`.
pub(crate) fn parse_value<T: TryFrom<i64>>(raw: &str) -> CliResult<T> {
    let input = raw.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (radix, body) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // from_str_radix takes its own sign; only the one stripped above is allowed.
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return Err(CliError::new(USAGE, format!("invalid integer: {raw}")));
    }

    let magnitude = i64::from_str_radix(body, radix)
        .map_err(|_| CliError::new(USAGE, format!("invalid integer: {raw}")))?;
    let value = if negative {
        magnitude
            .checked_neg()
            .ok_or_else(|| CliError::new(USAGE, format!("invalid integer: {raw}")))?
    } else {
        magnitude
    };
    T::try_from(value).map_err(|_| {
        CliError::new(
            USAGE,
            format!("{raw} is out of range for {}", std::any::type_name::<T>()),
        )
    })
}
