use crate::endian::WireRepr;

/// Byte widths a scalar may have on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 1 byte, no byte order.
    Byte,
    /// 2 bytes, big-endian.
    Short,
    /// 4 bytes, big-endian.
    Word,
}

impl Width {
    /// Number of bytes a value of this width occupies.
    pub const fn len(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Short => 2,
            Width::Word => 4,
        }
    }
}

/// A fixed-width integer that can be marshalled.
///
/// The trait is sealed: it is implemented for `u8`, `i8`, `u16`, `i16`, `u32`
/// and `i32` only, so an unsupported width never type-checks.
///
/// A scalar converts bit-for-bit to and from the unsigned integer of the same
/// width ([`Scalar::Repr`]); byte order is handled separately by
/// [`crate::endian`].
pub trait Scalar: private::Sealed + Copy {
    /// Unsigned integer with the same width.
    type Repr: WireRepr;

    /// Width of this scalar on the wire.
    const WIDTH: Width;

    /// Reinterpret the value as its unsigned representation.
    fn into_repr(self) -> Self::Repr;

    /// Reinterpret an unsigned representation as this scalar.
    fn from_repr(repr: Self::Repr) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty => $repr:ty, $width:expr;)*) => {$(
        impl private::Sealed for $ty {}

        impl Scalar for $ty {
            type Repr = $repr;
            const WIDTH: Width = $width;

            #[inline]
            fn into_repr(self) -> $repr {
                self as $repr
            }

            #[inline]
            fn from_repr(repr: $repr) -> Self {
                repr as $ty
            }
        }

        const _: () = assert!(core::mem::size_of::<$ty>() == $width.len());
        const _: () = assert!(core::mem::size_of::<$repr>() == $width.len());
    )*};
}

impl_scalar! {
    u8 => u8, Width::Byte;
    i8 => u8, Width::Byte;
    u16 => u16, Width::Short;
    i16 => u16, Width::Short;
    u32 => u32, Width::Word;
    i32 => u32, Width::Word;
}

mod private {
    pub trait Sealed {}
}
