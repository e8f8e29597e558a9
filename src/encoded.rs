//! Owned output of an encode call.

use core::fmt;
use core::ops::Deref;

use crate::MAX_WIDTH;

/// The bytes of one encoded value, stored inline.
///
/// Length is always the width of the encoded kind. Derefs to `[u8]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoded {
    buf: [u8; MAX_WIDTH],
    len: u8,
}

impl Encoded {
    /// Copy `bytes` into a new value.
    ///
    /// Callers pass the native bytes of a [`Numeric`](crate::Numeric) type,
    /// whose width is checked against `MAX_WIDTH` at compile time.
    #[inline]
    pub(crate) fn new(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= MAX_WIDTH);
        let mut buf = [0u8; MAX_WIDTH];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self {
            buf,
            len: bytes.len() as u8,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len as usize]
    }

    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn into_vec(self) -> alloc::vec::Vec<u8> {
        self.as_slice().to_vec()
    }
}

impl Deref for Encoded {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Encoded {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Encoded").field(&self.as_slice()).finish()
    }
}

impl PartialEq<[u8]> for Encoded {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Encoded {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(feature = "alloc")]
impl From<Encoded> for alloc::vec::Vec<u8> {
    fn from(encoded: Encoded) -> Self {
        encoded.into_vec()
    }
}
