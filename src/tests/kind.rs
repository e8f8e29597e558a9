use crate::{CodecError, MAX_WIDTH, NATIVE_WIDTH, NumericKind};

#[test]
fn test_widths() {
    assert_eq!(NumericKind::Int8.width(), 1);
    assert_eq!(NumericKind::UInt8.width(), 1);
    assert_eq!(NumericKind::Int16.width(), 2);
    assert_eq!(NumericKind::UInt16.width(), 2);
    assert_eq!(NumericKind::Int32.width(), 4);
    assert_eq!(NumericKind::UInt32.width(), 4);
    assert_eq!(NumericKind::Int64.width(), 8);
    assert_eq!(NumericKind::UInt64.width(), 8);
    assert_eq!(NumericKind::Float32.width(), 4);
    assert_eq!(NumericKind::Float64.width(), 8);
}

#[test]
fn test_native_width_matches_pointer() {
    assert_eq!(NATIVE_WIDTH, core::mem::size_of::<*const u8>());
    assert_eq!(NumericKind::NativeInt.width(), NATIVE_WIDTH);
    assert_eq!(NumericKind::NativeUInt.width(), NATIVE_WIDTH);
}

#[test]
fn test_all_kinds_fit_max_width() {
    assert_eq!(NumericKind::ALL.len(), 12);
    for kind in NumericKind::ALL {
        assert!(kind.width() <= MAX_WIDTH, "{kind}");
    }
}

#[test]
fn test_signedness() {
    let signed = [
        NumericKind::Int8,
        NumericKind::Int16,
        NumericKind::Int32,
        NumericKind::Int64,
        NumericKind::NativeInt,
    ];
    for kind in NumericKind::ALL {
        assert_eq!(kind.is_signed(), signed.contains(&kind), "{kind}");
    }
    assert!(NumericKind::Float32.is_float());
    assert!(NumericKind::Float64.is_float());
    assert!(!NumericKind::Float64.is_signed());
    assert!(!NumericKind::UInt64.is_float());
}

#[test]
fn test_name_parse_roundtrip() {
    for kind in NumericKind::ALL {
        assert_eq!(kind.name().parse::<NumericKind>(), Ok(kind));
    }
}

#[test]
fn test_parse_aliases() {
    assert_eq!("short".parse::<NumericKind>(), Ok(NumericKind::Int16));
    assert_eq!("int".parse::<NumericKind>(), Ok(NumericKind::Int32));
    assert_eq!("uint".parse::<NumericKind>(), Ok(NumericKind::UInt32));
    assert_eq!("long long".parse::<NumericKind>(), Ok(NumericKind::Int64));
    assert_eq!("usize".parse::<NumericKind>(), Ok(NumericKind::NativeUInt));
    assert_eq!("float".parse::<NumericKind>(), Ok(NumericKind::Float32));
    assert_eq!("double".parse::<NumericKind>(), Ok(NumericKind::Float64));
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        "int128".parse::<NumericKind>(),
        Err(CodecError::UnknownKind)
    );
    assert_eq!("".parse::<NumericKind>(), Err(CodecError::UnknownKind));
    assert_eq!("Int8".parse::<NumericKind>(), Err(CodecError::UnknownKind));
}
