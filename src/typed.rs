//! Generic per-type codec routines.
//!
//! Every supported primitive implements [`Numeric`], and the kind-tagged
//! [`decode`](crate::decode) and [`encode`](crate::encode) dispatch onto
//! [`decode_as`] and [`encode_as`]. zerocopy does the raw reinterpretation;
//! callers only see this crate's types.

use crate::codec::window;
use crate::order::reverse_bytes;
use crate::{CodecError, Encoded, MAX_WIDTH, NumericKind, NumericValue, Result};

mod sealed {
    pub trait Sealed: Copy {
        /// Reinterpret exactly `size_of::<Self>()` native-order bytes.
        fn read_native(bytes: &[u8]) -> Option<Self>;

        /// In-memory representation of `self`.
        fn native_bytes(&self) -> &[u8];
    }
}

/// A fixed-width primitive the codec can read and write.
///
/// Sealed: implemented for `i8`..`u64`, `isize`, `usize`, `f32`, `f64`.
pub trait Numeric: sealed::Sealed {
    /// The kind this type is decoded and encoded as.
    const KIND: NumericKind;

    fn into_value(self) -> NumericValue;

    /// `None` when `value` holds a different kind.
    fn from_value(value: NumericValue) -> Option<Self>;
}

macro_rules! impl_numeric {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            const _: () = assert!(core::mem::size_of::<$ty>() == NumericKind::$variant.width());
            const _: () = assert!(core::mem::size_of::<$ty>() <= MAX_WIDTH);

            impl sealed::Sealed for $ty {
                #[inline]
                fn read_native(bytes: &[u8]) -> Option<Self> {
                    <$ty as zerocopy::FromBytes>::read_from_bytes(bytes).ok()
                }

                #[inline]
                fn native_bytes(&self) -> &[u8] {
                    zerocopy::IntoBytes::as_bytes(self)
                }
            }

            impl Numeric for $ty {
                const KIND: NumericKind = NumericKind::$variant;

                #[inline]
                fn into_value(self) -> NumericValue {
                    NumericValue::$variant(self)
                }

                #[inline]
                fn from_value(value: NumericValue) -> Option<Self> {
                    match value {
                        NumericValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for NumericValue {
                #[inline]
                fn from(v: $ty) -> Self {
                    NumericValue::$variant(v)
                }
            }

            impl TryFrom<NumericValue> for $ty {
                type Error = CodecError;

                #[inline]
                fn try_from(value: NumericValue) -> Result<Self> {
                    <$ty as Numeric>::from_value(value).ok_or(CodecError::KindMismatch {
                        expected: NumericKind::$variant,
                        found: value.kind(),
                    })
                }
            }
        )+
    };
}

impl_numeric!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    isize => NativeInt,
    usize => NativeUInt,
    f32 => Float32,
    f64 => Float64,
);

/// Read a `T` from `region[offset..offset + width]`, reversing the bytes first
/// when `swap` is set and `T` is wider than one byte.
///
/// Fails with [`CodecError::OutOfRange`] before touching any byte if the
/// window does not fit.
#[inline]
pub fn decode_as<T: Numeric>(region: &[u8], offset: usize, swap: bool) -> Result<T> {
    let width = T::KIND.width();
    let src = window(region, offset, width)?;

    let value = if swap && width > 1 {
        let mut scratch = [0u8; MAX_WIDTH];
        let scratch = &mut scratch[..width];
        scratch.copy_from_slice(src);
        reverse_bytes(scratch);
        T::read_native(scratch)
    } else {
        T::read_native(src)
    };

    // Defensive fallback, never taken: `src` is exactly `width` bytes.
    value.ok_or(CodecError::OutOfRange {
        offset,
        width,
        available: region.len(),
    })
}

/// The native-order bytes of `value`.
#[inline]
#[must_use]
pub fn encode_as<T: Numeric>(value: T) -> Encoded {
    Encoded::new(value.native_bytes())
}
