//! Kind-tagged encode and decode.

use crate::order::reverse_bytes;
use crate::typed::{decode_as, encode_as};
use crate::{ByteOrder, CodecError, Encoded, NumericKind, NumericValue, Result};

/// Borrow `region[offset..offset + width]`, or fail without reading.
#[inline]
pub(crate) fn window(region: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    match offset
        .checked_add(width)
        .and_then(|end| region.get(offset..end))
    {
        Some(bytes) => Ok(bytes),
        None => {
            #[cfg(feature = "log")]
            log::trace!(
                "numcast: {width} bytes at offset {offset} exceeds region of {}",
                region.len()
            );
            Err(CodecError::OutOfRange {
                offset,
                width,
                available: region.len(),
            })
        }
    }
}

/// Reconstruct a value of `kind` from `region` starting at `offset`.
///
/// Consumes `kind.width()` bytes. With `swap` set the bytes are reversed
/// relative to the host's native order before being interpreted; single byte
/// kinds ignore the flag.
///
/// # Errors
///
/// [`CodecError::OutOfRange`] if `offset + kind.width()` exceeds `region.len()`.
///
/// # Example
///
/// ```
/// use numcast::{NumericKind, NumericValue, decode};
///
/// let region = [0xFF];
/// assert_eq!(decode(&region, 0, NumericKind::Int8, false), Ok(NumericValue::Int8(-1)));
/// assert_eq!(decode(&region, 0, NumericKind::UInt8, true), Ok(NumericValue::UInt8(255)));
/// ```
pub fn decode(region: &[u8], offset: usize, kind: NumericKind, swap: bool) -> Result<NumericValue> {
    let value = match kind {
        NumericKind::Int8 => NumericValue::Int8(decode_as(region, offset, swap)?),
        NumericKind::UInt8 => NumericValue::UInt8(decode_as(region, offset, swap)?),
        NumericKind::Int16 => NumericValue::Int16(decode_as(region, offset, swap)?),
        NumericKind::UInt16 => NumericValue::UInt16(decode_as(region, offset, swap)?),
        NumericKind::Int32 => NumericValue::Int32(decode_as(region, offset, swap)?),
        NumericKind::UInt32 => NumericValue::UInt32(decode_as(region, offset, swap)?),
        NumericKind::Int64 => NumericValue::Int64(decode_as(region, offset, swap)?),
        NumericKind::UInt64 => NumericValue::UInt64(decode_as(region, offset, swap)?),
        NumericKind::NativeInt => NumericValue::NativeInt(decode_as(region, offset, swap)?),
        NumericKind::NativeUInt => NumericValue::NativeUInt(decode_as(region, offset, swap)?),
        NumericKind::Float32 => NumericValue::Float32(decode_as(region, offset, swap)?),
        NumericKind::Float64 => NumericValue::Float64(decode_as(region, offset, swap)?),
    };
    Ok(value)
}

/// Decode reading the bytes in an absolute byte order.
#[inline]
pub fn decode_with_order(
    region: &[u8],
    offset: usize,
    kind: NumericKind,
    order: ByteOrder,
) -> Result<NumericValue> {
    decode(region, offset, kind, order.swap_flag())
}

/// The value's in-memory bytes in native order, exactly `value.width()` long.
///
/// No byte order flag applies here: reversal is a decode-side concern. Use
/// [`encode_swapped`] to produce reversed bytes explicitly.
#[must_use]
pub fn encode(value: &NumericValue) -> Encoded {
    match *value {
        NumericValue::Int8(v) => encode_as(v),
        NumericValue::UInt8(v) => encode_as(v),
        NumericValue::Int16(v) => encode_as(v),
        NumericValue::UInt16(v) => encode_as(v),
        NumericValue::Int32(v) => encode_as(v),
        NumericValue::UInt32(v) => encode_as(v),
        NumericValue::Int64(v) => encode_as(v),
        NumericValue::UInt64(v) => encode_as(v),
        NumericValue::NativeInt(v) => encode_as(v),
        NumericValue::NativeUInt(v) => encode_as(v),
        NumericValue::Float32(v) => encode_as(v),
        NumericValue::Float64(v) => encode_as(v),
    }
}

/// Like [`encode`], with the bytes reversed from native order.
///
/// `decode(&encode_swapped(&v), 0, v.kind(), true)` yields `v`.
#[must_use]
pub fn encode_swapped(value: &NumericValue) -> Encoded {
    let mut encoded = encode(value);
    reverse_bytes(encoded.as_mut_slice());
    encoded
}

/// Write the native-order bytes of `value` to the front of `buf`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// [`CodecError::BufferTooSmall`] if `buf` is shorter than `value.width()`;
/// `buf` is left untouched.
pub fn encode_into(value: &NumericValue, buf: &mut [u8]) -> Result<usize> {
    let encoded = encode(value);
    let len = encoded.len();
    match buf.get_mut(..len) {
        Some(dst) => {
            dst.copy_from_slice(&encoded);
            Ok(len)
        }
        None => {
            #[cfg(feature = "log")]
            log::trace!(
                "numcast: encoding {} needs {len} bytes, buffer holds {}",
                value.kind(),
                buf.len()
            );
            Err(CodecError::BufferTooSmall {
                needed: len,
                available: buf.len(),
            })
        }
    }
}
