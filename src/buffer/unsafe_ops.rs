// src/buffer/unsafe_ops.rs
//! Unchecked (unsafe) buffer operations for maximum performance
//!
//! This tier is the primary contract of the crate: no bounds checking, no
//! error values, caller-verified preconditions only. `debug_assert!` guards
//! catch contract violations in debug builds and compile to nothing in
//! release builds.

use super::core::RawBuffer;

macro_rules! unchecked_scalar_ops {
    ($ty:ty, $put:ident, $get:ident, $width:literal) => {
        #[doc = concat!(
            "Writes a `", stringify!($ty),
            "` at `offset` in native-endian representation without bounds checking."
        )]
        ///
        /// # Safety
        ///
        #[doc = concat!("Caller MUST guarantee: `offset + ", stringify!($width), " <= self.len()`.")]
        #[inline(always)]
        pub unsafe fn $put(&mut self, offset: usize, val: $ty) {
            debug_assert!(
                offset + $width <= self.data.len(),
                concat!(stringify!($put), ": offset {} + ", stringify!($width), " > len {}"),
                offset,
                self.data.len()
            );

            let ptr = unsafe { self.data.as_mut_ptr().add(offset) };
            unsafe { ptr.cast::<$ty>().write_unaligned(val) };
        }

        #[doc = concat!(
            "Reads a `", stringify!($ty),
            "` at `offset` in native-endian representation without bounds checking."
        )]
        ///
        /// # Safety
        ///
        #[doc = concat!("Caller MUST guarantee: `offset + ", stringify!($width), " <= self.len()`.")]
        #[inline(always)]
        pub unsafe fn $get(&self, offset: usize) -> $ty {
            debug_assert!(
                offset + $width <= self.data.len(),
                concat!(stringify!($get), ": offset {} + ", stringify!($width), " > len {}"),
                offset,
                self.data.len()
            );

            let ptr = unsafe { self.data.as_ptr().add(offset) };
            unsafe { ptr.cast::<$ty>().read_unaligned() }
        }
    };
}

impl RawBuffer {
    unchecked_scalar_ops!(i8, put_i8_at_unchecked, get_i8_at_unchecked, 1);
    unchecked_scalar_ops!(u8, put_u8_at_unchecked, get_u8_at_unchecked, 1);
    unchecked_scalar_ops!(i16, put_i16_at_unchecked, get_i16_at_unchecked, 2);
    unchecked_scalar_ops!(u16, put_u16_at_unchecked, get_u16_at_unchecked, 2);
    unchecked_scalar_ops!(i32, put_i32_at_unchecked, get_i32_at_unchecked, 4);
    unchecked_scalar_ops!(u32, put_u32_at_unchecked, get_u32_at_unchecked, 4);
    unchecked_scalar_ops!(f32, put_f32_at_unchecked, get_f32_at_unchecked, 4);
    unchecked_scalar_ops!(f64, put_f64_at_unchecked, get_f64_at_unchecked, 8);

    /// Copies `len` bytes from `src` starting at `src_offset` into this
    /// buffer starting at `dst_offset`, without bounds checking.
    ///
    /// Two distinct `RawBuffer`s never alias, so the copy is nonoverlapping
    /// by construction. For copies within one buffer use
    /// [`copy_within_unchecked`](Self::copy_within_unchecked).
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `dst_offset + len <= self.len()` and
    /// `src_offset + len <= src.len()`.
    #[inline]
    pub unsafe fn copy_from_unchecked(
        &mut self,
        dst_offset: usize,
        src: &RawBuffer,
        src_offset: usize,
        len: usize,
    ) {
        debug_assert!(dst_offset + len <= self.data.len());
        debug_assert!(src_offset + len <= src.data.len());

        let src_ptr = unsafe { src.data.as_ptr().add(src_offset) };
        let dst_ptr = unsafe { self.data.as_mut_ptr().add(dst_offset) };
        unsafe { std::ptr::copy_nonoverlapping(src_ptr, dst_ptr, len) };
    }

    /// Copies `len` bytes from `src_offset` to `dst_offset` within this
    /// buffer, without bounds checking.
    ///
    /// Overlapping ranges behave as if copied through an intermediate
    /// buffer (memmove semantics).
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `src_offset + len <= self.len()` and
    /// `dst_offset + len <= self.len()`.
    #[inline]
    pub unsafe fn copy_within_unchecked(
        &mut self,
        src_offset: usize,
        dst_offset: usize,
        len: usize,
    ) {
        debug_assert!(src_offset + len <= self.data.len());
        debug_assert!(dst_offset + len <= self.data.len());

        let ptr = self.data.as_mut_ptr();
        let src_ptr = unsafe { ptr.add(src_offset) } as *const u8;
        let dst_ptr = unsafe { ptr.add(dst_offset) };
        unsafe { std::ptr::copy(src_ptr, dst_ptr, len) };
    }

    /// Copies the range `[start, start + len)` into a newly allocated
    /// buffer, without bounds checking.
    ///
    /// The returned buffer has independent storage; mutating one does not
    /// affect the other.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `start + len <= self.len()`.
    #[inline]
    pub unsafe fn slice_unchecked(&self, start: usize, len: usize) -> RawBuffer {
        debug_assert!(start + len <= self.data.len());

        let src = unsafe { std::slice::from_raw_parts(self.data.as_ptr().add(start), len) };
        RawBuffer::from_slice(src)
    }

    /// Writes `value` into every byte of `[start, start + len)` without
    /// bounds checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `start + len <= self.len()`.
    #[inline]
    pub unsafe fn fill_range_unchecked(&mut self, start: usize, len: usize, value: u8) {
        debug_assert!(start + len <= self.data.len());

        unsafe { self.data.get_unchecked_mut(start..start + len) }.fill(value);
    }
}
