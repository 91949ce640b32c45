//! Canonical big-endian marshalling for fixed-width scalars.
//!
//! Every scalar goes on the wire in network byte order, whatever the host:
//! - 1-byte scalars (`u8`, `i8`) are written verbatim
//! - 2-byte scalars (`u16`, `i16`) as a big-endian `u16`
//! - 4-byte scalars (`u32`, `i32`) as a big-endian `u32`
//!
//! Other widths do not implement [`Scalar`] and are rejected at compile time.
//!
//! [`marshal`] and [`unmarshal`] never return errors. A short read or a write
//! fault is recorded in the channel, and the caller checks it once with
//! [`assert_channel_ok`], possibly after a whole batch of calls.

pub mod assert;
pub mod channel;
pub mod endian;
pub mod error;
pub mod marshal;
pub mod scalar;
pub mod unaligned;

pub use assert::{assert_channel_ok, raise_if};
pub use channel::{
    BufChannel, Channel, ChannelConfig, ChannelState, InputChannel, OutputChannel, StreamChannel,
};
pub use endian::{from_network, to_network, WireRepr};
pub use error::{MarshalError, Result};
pub use marshal::{decode, encode, marshal, unmarshal, unmarshal_value, WireBytes};
pub use scalar::{Scalar, Width};
pub use unaligned::{load, load_at, store, store_at};
