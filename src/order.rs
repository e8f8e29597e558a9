//! Byte order reversal and absolute byte order helpers.

/// An absolute byte order.
///
/// The codec itself only knows "native" and "reversed"; this type maps a
/// wire format's fixed order onto that flag for the current host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// The swap flag that makes decode read bytes in this order.
    #[inline]
    #[must_use]
    pub const fn swap_flag(self) -> bool {
        !matches!(
            (self, Self::NATIVE),
            (ByteOrder::Little, ByteOrder::Little) | (ByteOrder::Big, ByteOrder::Big)
        )
    }

    #[inline]
    #[must_use]
    pub const fn reversed(self) -> ByteOrder {
        match self {
            ByteOrder::Little => ByteOrder::Big,
            ByteOrder::Big => ByteOrder::Little,
        }
    }
}

/// Reverse `bytes` in place: index `i` trades with `len - 1 - i`.
///
/// Zero and one byte slices are left as they are.
#[inline]
pub(crate) fn reverse_bytes(bytes: &mut [u8]) {
    let len = bytes.len();
    for i in 0..len / 2 {
        bytes.swap(i, len - 1 - i);
    }
}
