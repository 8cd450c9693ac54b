// src/buffer/ops.rs
//! Checked buffer operations
//!
//! Bounds-verified wrappers over the unchecked tier. These are additive:
//! setup paths and callers that prefer verification use them, hot paths go
//! straight to the `_unchecked` operations.

use super::core::RawBuffer;
use crate::error::{BufferError, Result};

macro_rules! checked_scalar_ops {
    ($ty:ty, $put:ident, $get:ident, $put_unchecked:ident, $get_unchecked:ident, $width:literal) => {
        #[doc = concat!("Writes a `", stringify!($ty), "` at `offset` with bounds checking.")]
        ///
        /// # Errors
        ///
        #[doc = concat!(
            "Returns [`BufferError::OffsetOutOfBounds`] if `offset + ",
            stringify!($width), "` exceeds the buffer length."
        )]
        #[inline]
        pub fn $put(&mut self, offset: usize, val: $ty) -> Result<()> {
            if offset + $width > self.data.len() {
                return Err(BufferError::OffsetOutOfBounds);
            }
            unsafe {
                self.$put_unchecked(offset, val);
            }
            Ok(())
        }

        #[doc = concat!("Reads a `", stringify!($ty), "` at `offset` with bounds checking.")]
        ///
        /// # Errors
        ///
        #[doc = concat!(
            "Returns [`BufferError::OffsetOutOfBounds`] if `offset + ",
            stringify!($width), "` exceeds the buffer length."
        )]
        #[inline]
        pub fn $get(&self, offset: usize) -> Result<$ty> {
            if offset + $width > self.data.len() {
                return Err(BufferError::OffsetOutOfBounds);
            }
            Ok(unsafe { self.$get_unchecked(offset) })
        }
    };
}

impl RawBuffer {
    checked_scalar_ops!(i8, put_i8_at, get_i8_at, put_i8_at_unchecked, get_i8_at_unchecked, 1);
    checked_scalar_ops!(u8, put_u8_at, get_u8_at, put_u8_at_unchecked, get_u8_at_unchecked, 1);
    checked_scalar_ops!(i16, put_i16_at, get_i16_at, put_i16_at_unchecked, get_i16_at_unchecked, 2);
    checked_scalar_ops!(u16, put_u16_at, get_u16_at, put_u16_at_unchecked, get_u16_at_unchecked, 2);
    checked_scalar_ops!(i32, put_i32_at, get_i32_at, put_i32_at_unchecked, get_i32_at_unchecked, 4);
    checked_scalar_ops!(u32, put_u32_at, get_u32_at, put_u32_at_unchecked, get_u32_at_unchecked, 4);
    checked_scalar_ops!(f32, put_f32_at, get_f32_at, put_f32_at_unchecked, get_f32_at_unchecked, 4);
    checked_scalar_ops!(f64, put_f64_at, get_f64_at, put_f64_at_unchecked, get_f64_at_unchecked, 8);

    /// Copies `len` bytes from `src` into this buffer with bounds checking
    /// on both ends.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::RangeOutOfBounds`] if either range exceeds its
    /// buffer's extent.
    #[inline]
    pub fn copy_from(
        &mut self,
        dst_offset: usize,
        src: &RawBuffer,
        src_offset: usize,
        len: usize,
    ) -> Result<()> {
        if dst_offset + len > self.data.len() || src_offset + len > src.data.len() {
            return Err(BufferError::RangeOutOfBounds);
        }
        unsafe {
            self.copy_from_unchecked(dst_offset, src, src_offset, len);
        }
        Ok(())
    }

    /// Copies `len` bytes from `src_offset` to `dst_offset` within this
    /// buffer with bounds checking. Overlap-correct.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::RangeOutOfBounds`] if either range exceeds the
    /// buffer extent.
    #[inline]
    pub fn copy_within(&mut self, src_offset: usize, dst_offset: usize, len: usize) -> Result<()> {
        if src_offset + len > self.data.len() || dst_offset + len > self.data.len() {
            return Err(BufferError::RangeOutOfBounds);
        }
        unsafe {
            self.copy_within_unchecked(src_offset, dst_offset, len);
        }
        Ok(())
    }

    /// Copies `[start, start + len)` into a newly allocated independent
    /// buffer, with bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::RangeOutOfBounds`] if the range exceeds the
    /// buffer extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawbuf::RawBuffer;
    ///
    /// let buf = RawBuffer::from_slice(&[1, 2, 3, 4]);
    /// let piece = buf.slice(1, 2)?;
    /// assert_eq!(piece.as_slice(), &[2, 3]);
    /// # Ok::<(), rawbuf::BufferError>(())
    /// ```
    #[inline]
    pub fn slice(&self, start: usize, len: usize) -> Result<RawBuffer> {
        if start + len > self.data.len() {
            return Err(BufferError::RangeOutOfBounds);
        }
        Ok(unsafe { self.slice_unchecked(start, len) })
    }

    /// Writes `value` into every byte of `[start, start + len)` with bounds
    /// checking.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::RangeOutOfBounds`] if the range exceeds the
    /// buffer extent.
    #[inline]
    pub fn fill_range(&mut self, start: usize, len: usize, value: u8) -> Result<()> {
        if start + len > self.data.len() {
            return Err(BufferError::RangeOutOfBounds);
        }
        unsafe {
            self.fill_range_unchecked(start, len, value);
        }
        Ok(())
    }
}
