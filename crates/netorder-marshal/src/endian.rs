//! Host <-> network byte order conversion.
//!
//! Network order is big-endian. On big-endian hosts both conversions are the
//! identity; on little-endian hosts they swap bytes. Single bytes have no
//! order.

use std::fmt;

/// Unsigned integer used as the on-the-wire representation of a scalar.
///
/// Sealed: implemented for `u8`, `u16` and `u32` only.
pub trait WireRepr: private::Sealed + Copy + Eq + fmt::Debug {
    /// Byte array holding exactly one value.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default;

    /// Host-order bytes of the value.
    fn to_host_bytes(self) -> Self::Bytes;

    /// Value from host-order bytes.
    fn from_host_bytes(bytes: Self::Bytes) -> Self;

    /// Convert from host order to network order.
    fn to_network(self) -> Self;

    /// Convert from network order to host order.
    fn from_network(self) -> Self;
}

macro_rules! impl_wire_repr {
    ($($ty:ty => $len:literal;)*) => {$(
        impl private::Sealed for $ty {}

        impl WireRepr for $ty {
            type Bytes = [u8; $len];

            #[inline]
            fn to_host_bytes(self) -> [u8; $len] {
                self.to_ne_bytes()
            }

            #[inline]
            fn from_host_bytes(bytes: [u8; $len]) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }

            #[inline]
            fn to_network(self) -> Self {
                self.to_be()
            }

            #[inline]
            fn from_network(self) -> Self {
                <$ty>::from_be(self)
            }
        }
    )*};
}

impl_wire_repr! {
    u8 => 1;
    u16 => 2;
    u32 => 4;
}

/// Convert a host-order value to network order (`htons`/`htonl`).
#[inline]
pub fn to_network<R: WireRepr>(value: R) -> R {
    value.to_network()
}

/// Convert a network-order value to host order (`ntohs`/`ntohl`).
#[inline]
pub fn from_network<R: WireRepr>(value: R) -> R {
    value.from_network()
}

/// Returns true when the host stores integers most-significant byte first.
pub const fn host_is_big_endian() -> bool {
    cfg!(target_endian = "big")
}

mod private {
    pub trait Sealed {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_u32_bytes_are_big_endian() {
        let net = to_network(0x0102_0304u32);
        assert_eq!(net.to_host_bytes(), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn network_u16_bytes_are_big_endian() {
        let net = to_network(0xABCDu16);
        assert_eq!(net.to_host_bytes(), [0xAB, 0xCD]);
    }

    #[test]
    fn single_byte_has_no_order() {
        for byte in 0..=u8::MAX {
            assert_eq!(to_network(byte), byte);
            assert_eq!(from_network(byte), byte);
        }
    }

    #[test]
    fn from_network_inverts_to_network() {
        for value in [0u32, 1, 0x8000_0000, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(from_network(to_network(value)), value);
        }
        for value in [0u16, 1, 0x00FF, 0xFF00, u16::MAX] {
            assert_eq!(from_network(to_network(value)), value);
        }
    }

    #[test]
    fn conversion_matches_host_order() {
        let value = 0x1122_3344u32;
        if host_is_big_endian() {
            assert_eq!(to_network(value), value);
        } else {
            assert_eq!(to_network(value), value.swap_bytes());
        }
    }
}
