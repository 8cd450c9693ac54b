// src/cursor.rs
//! Sequential typed access with automatic position advancement
//!
//! A [`Cursor`] pairs a mutable borrow of a [`RawBuffer`] with a byte
//! position. Every read or write advances the position by the scalar's
//! width, so heterogeneous sequences pack and unpack without the caller
//! tracking offsets. Repeated calls touch strictly increasing,
//! non-overlapping byte ranges in call order.

use crate::buffer::RawBuffer;
use crate::error::Result;
use crate::scalar::{Scalar, ScalarKind};

/// Sequential read/write position tracker bound to one buffer.
///
/// The cursor borrows the buffer; it never owns, constructs or destroys it.
/// The position is not validated against the buffer bounds by the unchecked
/// operations.
///
/// # Examples
///
/// ```
/// use rawbuf::{Cursor, RawBuffer};
///
/// let mut buf = RawBuffer::new(16);
/// let mut cur = Cursor::new(&mut buf, 0);
/// unsafe {
///     cur.put_u16(7);
///     cur.put_f32(0.5);
/// }
/// assert_eq!(cur.pos(), 6);
///
/// cur.set_pos(0);
/// unsafe {
///     assert_eq!(cur.get_u16(), 7);
///     assert_eq!(cur.get_f32(), 0.5);
/// }
/// ```
pub struct Cursor<'a> {
    buf: &'a mut RawBuffer,
    pos: usize,
}

macro_rules! cursor_scalar_ops {
    ($ty:ty, $put:ident, $get:ident, $put_at:ident, $get_at:ident, $width:literal) => {
        #[doc = concat!(
            "Writes a `", stringify!($ty),
            "` at the current position and advances by ", stringify!($width), "."
        )]
        ///
        /// # Safety
        ///
        #[doc = concat!("Caller MUST guarantee: `self.pos() + ", stringify!($width), " <= buffer length`.")]
        #[inline(always)]
        pub unsafe fn $put(&mut self, val: $ty) {
            unsafe { self.buf.$put_at(self.pos, val) };
            self.pos += $width;
        }

        #[doc = concat!(
            "Reads a `", stringify!($ty),
            "` at the current position and advances by ", stringify!($width), "."
        )]
        ///
        /// # Safety
        ///
        #[doc = concat!("Caller MUST guarantee: `self.pos() + ", stringify!($width), " <= buffer length`.")]
        #[inline(always)]
        pub unsafe fn $get(&mut self) -> $ty {
            let val = unsafe { self.buf.$get_at(self.pos) };
            self.pos += $width;
            val
        }
    };
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `buf` starting at `start`.
    ///
    /// Performs no validation; a starting position beyond the buffer length
    /// is a caller error that surfaces on the first unchecked access.
    #[inline]
    pub fn new(buf: &'a mut RawBuffer, start: usize) -> Self {
        Self { buf, pos: start }
    }

    /// Current byte position.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Moves the position to `pos`. No validation.
    #[inline(always)]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Bytes between the current position and the end of the buffer
    /// (saturating at zero).
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    cursor_scalar_ops!(i8, put_i8, get_i8, put_i8_at_unchecked, get_i8_at_unchecked, 1);
    cursor_scalar_ops!(u8, put_u8, get_u8, put_u8_at_unchecked, get_u8_at_unchecked, 1);
    cursor_scalar_ops!(i16, put_i16, get_i16, put_i16_at_unchecked, get_i16_at_unchecked, 2);
    cursor_scalar_ops!(u16, put_u16, get_u16, put_u16_at_unchecked, get_u16_at_unchecked, 2);
    cursor_scalar_ops!(i32, put_i32, get_i32, put_i32_at_unchecked, get_i32_at_unchecked, 4);
    cursor_scalar_ops!(u32, put_u32, get_u32, put_u32_at_unchecked, get_u32_at_unchecked, 4);
    cursor_scalar_ops!(f32, put_f32, get_f32, put_f32_at_unchecked, get_f32_at_unchecked, 4);
    cursor_scalar_ops!(f64, put_f64, get_f64, put_f64_at_unchecked, get_f64_at_unchecked, 8);

    /// Writes a tagged scalar at the current position and advances by its
    /// width.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `self.pos() + value.width() <= buffer length`.
    #[inline]
    pub unsafe fn write_next(&mut self, value: Scalar) {
        unsafe { self.buf.write_scalar_unchecked(self.pos, value) };
        self.pos += value.width();
    }

    /// Reads a scalar of `kind` at the current position and advances by its
    /// width.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `self.pos() + kind.width() <= buffer length`.
    #[inline]
    pub unsafe fn read_next(&mut self, kind: ScalarKind) -> Scalar {
        let val = unsafe { self.buf.read_scalar_unchecked(kind, self.pos) };
        self.pos += kind.width();
        val
    }

    /// Advances the position by `kind`'s width without reading or writing.
    ///
    /// Used to skip or pad a field.
    #[inline(always)]
    pub fn advance(&mut self, kind: ScalarKind) {
        self.pos += kind.width();
    }

    /// Checked variant of [`write_next`](Self::write_next): verifies bounds,
    /// writes, then advances.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OffsetOutOfBounds`](crate::BufferError::OffsetOutOfBounds)
    /// if the value does not fit; the position is left unchanged on error.
    #[inline]
    pub fn try_write_next(&mut self, value: Scalar) -> Result<()> {
        self.buf.write_scalar(self.pos, value)?;
        self.pos += value.width();
        Ok(())
    }

    /// Checked variant of [`read_next`](Self::read_next): verifies bounds,
    /// reads, then advances.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OffsetOutOfBounds`](crate::BufferError::OffsetOutOfBounds)
    /// if the scalar does not fit; the position is left unchanged on error.
    #[inline]
    pub fn try_read_next(&mut self, kind: ScalarKind) -> Result<Scalar> {
        let val = self.buf.read_scalar(kind, self.pos)?;
        self.pos += kind.width();
        Ok(val)
    }
}
