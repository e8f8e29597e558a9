use core::fmt;

use crate::NumericKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The requested window `offset..offset + width` does not fit in the region.
    OutOfRange {
        offset: usize,
        width: usize,
        available: usize,
    },
    BufferTooSmall {
        needed: usize,
        available: usize,
    },
    UnknownKind,
    KindMismatch {
        expected: NumericKind,
        found: NumericKind,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                offset,
                width,
                available,
            } => {
                write!(
                    f,
                    "out of range: {width} bytes at offset {offset}, region holds {available}"
                )
            }
            Self::BufferTooSmall { needed, available } => {
                write!(
                    f,
                    "buffer too small: needed {needed} bytes, only {available} available"
                )
            }
            Self::UnknownKind => f.write_str("unknown numeric kind"),
            Self::KindMismatch { expected, found } => {
                write!(f, "kind mismatch: expected {expected}, found {found}")
            }
        }
    }
}

// Rust 1.81+
impl core::error::Error for CodecError {}

pub type Result<T> = core::result::Result<T, CodecError>;
