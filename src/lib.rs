//! Fixed-width numeric values to and from raw bytes.
//!
//! This crate is the codec layer under a byte buffer or stream: it turns a
//! single numeric value into its native-order bytes, and reads a value of a
//! requested [`NumericKind`] back out of a byte region at an offset, with an
//! explicit flag to reverse the byte order.
//!
//! # Example
//!
//! ```
//! use numcast::{NumericKind, NumericValue, decode, encode};
//!
//! let bytes = encode(&NumericValue::UInt16(0xBEEF));
//! assert_eq!(bytes.len(), 2);
//!
//! let value = decode(&bytes, 0, NumericKind::UInt16, false).unwrap();
//! assert_eq!(value, NumericValue::UInt16(0xBEEF));
//!
//! // Reading past the end is an error, never a zero.
//! assert!(decode(&bytes, 1, NumericKind::UInt16, false).is_err());
//! ```
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod codec;
mod encoded;
mod error;
mod kind;
mod order;
mod typed;
mod value;

pub use codec::{decode, decode_with_order, encode, encode_into, encode_swapped};
pub use encoded::Encoded;
pub use error::{CodecError, Result};
pub use kind::{MAX_WIDTH, NATIVE_WIDTH, NumericKind};
pub use order::ByteOrder;
pub use typed::{Numeric, decode_as, encode_as};
pub use value::NumericValue;

#[cfg(test)]
mod tests;
