//! Alignment-independent load and store of raw scalars.
//!
//! Values are copied byte-for-byte through a fixed-size array, so the source
//! or destination slice may start at any address. No byte order conversion
//! happens here: host order in, host order out.

use crate::endian::WireRepr;
use crate::scalar::Scalar;

/// Read a scalar from the first `T::WIDTH` bytes of `bytes`, in host order.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `T::WIDTH.len()`.
#[inline]
pub fn load<T: Scalar>(bytes: &[u8]) -> T {
    let mut raw = <T::Repr as WireRepr>::Bytes::default();
    let width = raw.as_ref().len();
    raw.as_mut().copy_from_slice(&bytes[..width]);
    T::from_repr(<T::Repr as WireRepr>::from_host_bytes(raw))
}

/// Write `value` into the first `T::WIDTH` bytes of `bytes`, in host order.
///
/// Bytes past the scalar's width are left untouched.
///
/// # Panics
///
/// Panics if `bytes` is shorter than `T::WIDTH.len()`.
#[inline]
pub fn store<T: Scalar>(bytes: &mut [u8], value: T) {
    let raw = value.into_repr().to_host_bytes();
    let raw = raw.as_ref();
    bytes[..raw.len()].copy_from_slice(raw);
}

/// Read a scalar starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + T::WIDTH.len()` exceeds `bytes.len()`.
#[inline]
pub fn load_at<T: Scalar>(bytes: &[u8], offset: usize) -> T {
    load(&bytes[offset..])
}

/// Write a scalar starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + T::WIDTH.len()` exceeds `bytes.len()`.
#[inline]
pub fn store_at<T: Scalar>(bytes: &mut [u8], offset: usize, value: T) {
    store(&mut bytes[offset..], value)
}
