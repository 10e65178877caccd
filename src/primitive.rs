//! The restricted integer shared by note numbers and Control Change codes.

use crate::prelude::*;

/// A 7-bit integer type.
///
/// Wraps the `u8` type and ensures that the top bit is always zero.
/// Both MIDI note numbers and Control Change codes are 7-bit values, so functions taking a `u7`
/// can never be handed an out-of-range value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
#[repr(transparent)]
#[allow(non_camel_case_types)]
pub struct u7(u8);
impl From<u8> for u7 {
    /// Lossy conversion, loses top bit.
    #[inline]
    fn from(raw: u8) -> u7 {
        u7::from_int_lossy(raw)
    }
}
impl From<u7> for u8 {
    #[inline]
    fn from(restricted: u7) -> u8 {
        restricted.0
    }
}
impl From<u7> for i32 {
    #[inline]
    fn from(restricted: u7) -> i32 {
        restricted.0 as i32
    }
}
impl fmt::Display for u7 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
impl u7 {
    const MASK: u8 = (1 << 7) - 1;

    /// The maximum value that this restricted integer can hold.
    #[inline]
    pub const fn max_value() -> u7 {
        u7(Self::MASK)
    }

    /// Creates a restricted int from its non-restricted counterpart by masking off the
    /// extra bits.
    #[inline]
    pub const fn new(raw: u8) -> u7 {
        u7(raw & Self::MASK)
    }

    /// Creates a restricted int from its non-restricted counterpart by masking off the
    /// extra bits.
    #[inline]
    pub const fn from_int_lossy(raw: u8) -> u7 {
        u7(raw & Self::MASK)
    }

    /// Returns `Some` if the raw integer is within range of the restricted integer, and
    /// `None` otherwise.
    #[inline]
    pub const fn try_from(raw: u8) -> Option<u7> {
        if raw <= Self::MASK {
            Some(u7(raw))
        } else {
            None
        }
    }

    /// Returns `Some` if the signed integer lies inside `[0, 127]`, and `None` otherwise.
    ///
    /// This is the validation every untyped entry point of this crate goes through.
    #[inline]
    pub fn try_from_i32(raw: i32) -> Option<u7> {
        u8::try_from(raw).ok().and_then(u7::try_from)
    }

    /// Get the inner integer out of the wrapper.
    /// The inner integer is guaranteed to be in range of the restricted wrapper.
    #[inline]
    pub const fn as_int(self) -> u8 {
        self.0
    }

    /// Iterate over every 7-bit value, in increasing order.
    #[inline]
    pub fn all() -> impl DoubleEndedIterator<Item = u7> + ExactSizeIterator {
        (0..=Self::MASK).map(u7)
    }
}
impl PartialEq<u8> for u7 {
    fn eq(&self, rhs: &u8) -> bool {
        self.as_int() == *rhs
    }
}
impl PartialOrd<u8> for u7 {
    fn partial_cmp(&self, rhs: &u8) -> Option<core::cmp::Ordering> {
        Some(self.as_int().cmp(rhs))
    }
}
impl PartialEq<u7> for u8 {
    fn eq(&self, rhs: &u7) -> bool {
        *self == rhs.as_int()
    }
}
impl PartialOrd<u7> for u8 {
    fn partial_cmp(&self, rhs: &u7) -> Option<core::cmp::Ordering> {
        Some(self.cmp(&rhs.as_int()))
    }
}
