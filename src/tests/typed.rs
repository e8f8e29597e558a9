use crate::{CodecError, Numeric, NumericKind, NumericValue, decode, decode_as, encode, encode_as};

#[test]
fn test_kind_constants() {
    assert_eq!(<i8 as Numeric>::KIND, NumericKind::Int8);
    assert_eq!(<u16 as Numeric>::KIND, NumericKind::UInt16);
    assert_eq!(<isize as Numeric>::KIND, NumericKind::NativeInt);
    assert_eq!(<usize as Numeric>::KIND, NumericKind::NativeUInt);
    assert_eq!(<f64 as Numeric>::KIND, NumericKind::Float64);
}

#[test]
fn test_decode_as_matches_decode() {
    let region = [0x10u8, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE, 0x01];
    for swap in [false, true] {
        for offset in 0..2 {
            assert_eq!(
                decode_as::<i64>(&region, offset, swap).map(NumericValue::from),
                decode(&region, offset, NumericKind::Int64, swap)
            );
            assert_eq!(
                decode_as::<u16>(&region, offset, swap).map(NumericValue::from),
                decode(&region, offset, NumericKind::UInt16, swap)
            );
            assert_eq!(
                decode_as::<usize>(&region, offset, swap).map(NumericValue::from),
                decode(&region, offset, NumericKind::NativeUInt, swap)
            );
        }
    }
}

#[test]
fn test_decode_as_out_of_range() {
    let region = [0u8; 3];
    assert_eq!(
        decode_as::<u32>(&region, 0, false),
        Err(CodecError::OutOfRange {
            offset: 0,
            width: 4,
            available: 3,
        })
    );
    assert_eq!(decode_as::<u8>(&region, 2, true), Ok(0));
    assert!(decode_as::<u8>(&region, 3, true).is_err());
}

#[test]
fn test_encode_as_matches_encode() {
    assert_eq!(encode_as(-7i32), encode(&NumericValue::Int32(-7)));
    assert_eq!(encode_as(2.5f32), encode(&NumericValue::Float32(2.5)));
    assert_eq!(encode_as(7u8), [7u8]);
}

#[test]
fn test_value_conversions() {
    let value = NumericValue::from(300u16);
    assert_eq!(value.kind(), NumericKind::UInt16);
    assert_eq!(value.width(), 2);
    assert_eq!(u16::try_from(value), Ok(300));
    assert_eq!(
        i16::try_from(value),
        Err(CodecError::KindMismatch {
            expected: NumericKind::Int16,
            found: NumericKind::UInt16,
        })
    );
    assert_eq!(f32::from_value(NumericValue::Float32(1.0)), Some(1.0));
    assert_eq!(f32::from_value(NumericValue::Float64(1.0)), None);
    assert_eq!((-3isize).into_value(), NumericValue::NativeInt(-3));
}

#[test]
fn test_bit_eq() {
    let nan = NumericValue::Float64(f64::NAN);
    assert_ne!(nan, nan);
    assert!(nan.bit_eq(&nan));
    assert!(!NumericValue::Float32(0.0).bit_eq(&NumericValue::Float32(-0.0)));
    assert!(!NumericValue::Int8(1).bit_eq(&NumericValue::UInt8(1)));
    assert!(NumericValue::UInt64(9).bit_eq(&NumericValue::UInt64(9)));
}
