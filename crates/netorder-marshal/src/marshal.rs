//! Width-dispatched big-endian marshalling over channels.
//!
//! Encoding is two independent steps: convert the scalar's unsigned
//! representation to network order ([`crate::endian`]), then copy it into a
//! width-sized byte array ([`crate::unaligned`]). Decoding runs the same steps
//! in reverse. The width is fixed by the scalar type, so a 1-byte scalar is
//! copied verbatim and 2- and 4-byte scalars are swapped on little-endian
//! hosts.
//!
//! Wire format for a 4-byte scalar:
//! ```text
//! ┌────────┬────────┬────────┬────────┐
//! │ bits   │ bits   │ bits   │ bits   │
//! │ 31..24 │ 23..16 │ 15..8  │ 7..0   │
//! └────────┴────────┴────────┴────────┘
//! ```

use crate::channel::{InputChannel, OutputChannel};
use crate::endian::{from_network, to_network, WireRepr};
use crate::scalar::Scalar;
use crate::unaligned::{load, store};

/// Byte array holding one encoded `T`.
pub type WireBytes<T> = <<T as Scalar>::Repr as WireRepr>::Bytes;

/// Encode `value` into its big-endian wire bytes.
#[inline]
pub fn encode<T: Scalar>(value: T) -> WireBytes<T> {
    let mut wire: WireBytes<T> = Default::default();
    store(wire.as_mut(), T::from_repr(to_network(value.into_repr())));
    wire
}

/// Decode a value from its big-endian wire bytes.
#[inline]
pub fn decode<T: Scalar>(wire: WireBytes<T>) -> T {
    let raw: T = load(wire.as_ref());
    T::from_repr(from_network(raw.into_repr()))
}

/// Write `value` to `channel` in network byte order.
///
/// Never fails directly: a write fault is recorded in the channel's state and
/// must be checked with [`crate::assert_channel_ok`]. Returns the channel so
/// calls can be chained.
pub fn marshal<T, C>(channel: &mut C, value: T) -> &mut C
where
    T: Scalar,
    C: OutputChannel + ?Sized,
{
    channel.write_bytes(encode(value).as_ref());
    channel
}

/// Read a network-order value from `channel` into `value`.
///
/// Reads exactly `T::WIDTH.len()` bytes. If the channel cannot supply them,
/// `value` is left unchanged and the channel's state records the failure;
/// check it with [`crate::assert_channel_ok`].
pub fn unmarshal<'c, T, C>(channel: &'c mut C, value: &mut T) -> &'c mut C
where
    T: Scalar,
    C: InputChannel + ?Sized,
{
    if let Some(decoded) = unmarshal_value(channel) {
        *value = decoded;
    }
    channel
}

/// Read a network-order value from `channel`, or `None` if the read failed.
///
/// The channel's state is updated exactly as by [`unmarshal`].
pub fn unmarshal_value<T, C>(channel: &mut C) -> Option<T>
where
    T: Scalar,
    C: InputChannel + ?Sized,
{
    let mut wire: WireBytes<T> = Default::default();
    if channel.read_bytes(wire.as_mut()) {
        Some(decode(wire))
    } else {
        None
    }
}
