use crate::NumericKind;

/// A numeric value tagged with its kind.
///
/// `PartialEq` follows the primitive types, so a NaN payload is never equal
/// to itself; use [`NumericValue::bit_eq`] to compare bit patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumericValue {
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    NativeInt(isize),
    NativeUInt(usize),
    Float32(f32),
    Float64(f64),
}

impl NumericValue {
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::Int8(_) => NumericKind::Int8,
            Self::UInt8(_) => NumericKind::UInt8,
            Self::Int16(_) => NumericKind::Int16,
            Self::UInt16(_) => NumericKind::UInt16,
            Self::Int32(_) => NumericKind::Int32,
            Self::UInt32(_) => NumericKind::UInt32,
            Self::Int64(_) => NumericKind::Int64,
            Self::UInt64(_) => NumericKind::UInt64,
            Self::NativeInt(_) => NumericKind::NativeInt,
            Self::NativeUInt(_) => NumericKind::NativeUInt,
            Self::Float32(_) => NumericKind::Float32,
            Self::Float64(_) => NumericKind::Float64,
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.kind().width()
    }

    /// Same kind and same bit pattern.
    #[must_use]
    pub fn bit_eq(&self, other: &NumericValue) -> bool {
        match (self, other) {
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (a, b) => a == b,
        }
    }
}
