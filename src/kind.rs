//! The twelve supported numeric kinds and their layout.

use core::fmt;
use core::str::FromStr;

use crate::CodecError;

/// Width of the platform pointer-sized integers, fixed at compile time.
pub const NATIVE_WIDTH: usize = core::mem::size_of::<usize>();

/// Widest supported kind in bytes.
pub const MAX_WIDTH: usize = 8;

const _: () = assert!(NATIVE_WIDTH == 4 || NATIVE_WIDTH == 8);
const _: () = assert!(NATIVE_WIDTH <= MAX_WIDTH);

/// Which numeric type to reconstruct from, or produce as, bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumericKind {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    NativeInt,
    NativeUInt,
    Float32,
    Float64,
}

impl NumericKind {
    /// Every kind, in width order with the native kinds before the floats.
    pub const ALL: [NumericKind; 12] = [
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::NativeInt,
        Self::NativeUInt,
        Self::Float32,
        Self::Float64,
    ];

    /// Encoded width in bytes.
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
            Self::NativeInt | Self::NativeUInt => NATIVE_WIDTH,
        }
    }

    /// True for two's-complement integers. Floats are neither signed nor unsigned here.
    #[inline]
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::NativeInt
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::NativeInt => "nativeint",
            Self::NativeUInt => "nativeuint",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = CodecError;

    /// Accepts the canonical names plus the C and Rust spellings of each type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "int8" | "i8" => Self::Int8,
            "uint8" | "u8" => Self::UInt8,
            "int16" | "i16" | "short" => Self::Int16,
            "uint16" | "u16" | "ushort" => Self::UInt16,
            "int32" | "i32" | "int" => Self::Int32,
            "uint32" | "u32" | "uint" => Self::UInt32,
            "int64" | "i64" | "long long" => Self::Int64,
            "uint64" | "u64" | "unsigned long long" => Self::UInt64,
            "nativeint" | "isize" | "integer" => Self::NativeInt,
            "nativeuint" | "usize" | "uinteger" => Self::NativeUInt,
            "float32" | "f32" | "float" => Self::Float32,
            "float64" | "f64" | "double" => Self::Float64,
            _ => return Err(CodecError::UnknownKind),
        };
        Ok(kind)
    }
}
