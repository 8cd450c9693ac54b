// src/lib.rs
//! # Fixed-Size Raw Buffer Library
//!
//! Low-level, unchecked-by-design access to fixed-size contiguous byte
//! regions, built for performance-critical serialization paths: binary
//! protocols, numeric encodings, archetype-style data storage.
//!
//! Features:
//! - Typed scalar reads/writes at explicit byte offsets for the eight
//!   fixed-width kinds (i8/u8/i16/u16/i32/u32/f32/f64)
//! - Sequential [`Cursor`] access with automatic position advancement
//! - Compiled [`Layout`]s: field-name-to-offset mappings computed once and
//!   reused across many buffers
//! - Whole-buffer utilities: slice, clone, reverse, fill, lexicographic
//!   compare, hex and binary rendering
//! - Checked `Result`-returning counterparts for every unchecked operation
//! - Secure memory zeroing on drop using the `zeroize` crate
//!   (compiler-resistant)
//!
//! # Safety model
//!
//! The hot-path operations are `unsafe fn`s that perform no bounds checking:
//! callers operating outside the documented preconditions get undefined
//! behavior, not a structured error. This is a deliberate throughput/safety
//! tradeoff. Every unchecked operation carries a `debug_assert!` that fires
//! in debug builds, and a checked counterpart for callers that want
//! verification.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod cursor;
pub mod error;
pub mod layout;
pub mod scalar;

// Re-export main types
pub use buffer::{BUF_MAX_SIZE, RawBuffer};
pub use cursor::Cursor;
pub use error::{BufferError, Result};
pub use layout::{Field, Layout};
pub use scalar::{Scalar, ScalarKind};

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::RawBuffer;
    pub use crate::cursor::Cursor;
    pub use crate::error::{BufferError, Result};
    pub use crate::layout::{Field, Layout};
    pub use crate::scalar::{Scalar, ScalarKind};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_buffer() {
        let mut buf = RawBuffer::new(1024);
        buf.put_u32_at(0, 42).unwrap();
        buf.put_u8_at(4, 0xFF).unwrap();

        assert_eq!(buf.get_u32_at(0).unwrap(), 42);
        assert_eq!(buf.get_u8_at(4).unwrap(), 0xFF);
    }

    #[test]
    fn test_cursor_sequence() {
        let mut buf = RawBuffer::new(64);
        let mut cur = Cursor::new(&mut buf, 0);

        unsafe {
            cur.put_u32(0x12345678);
            cur.put_f64(1.5);
        }
        assert_eq!(cur.pos(), 12);

        cur.set_pos(0);
        unsafe {
            assert_eq!(cur.get_u32(), 0x12345678);
            assert_eq!(cur.get_f64(), 1.5);
        }
    }

    #[test]
    fn test_layout_round_trip() {
        let layout = Layout::compile([
            ("id", ScalarKind::U32),
            ("value", ScalarKind::F64),
        ])
        .unwrap();

        let mut buf = layout.alloc();
        layout.try_set(&mut buf, "id", Scalar::U32(9)).unwrap();
        layout.try_set(&mut buf, "value", Scalar::F64(-4.25)).unwrap();

        assert_eq!(layout.try_get(&buf, "id").unwrap(), Scalar::U32(9));
        assert_eq!(layout.try_get(&buf, "value").unwrap(), Scalar::F64(-4.25));
    }

    #[test]
    fn test_unchecked_ops() {
        let mut buf = RawBuffer::new(1024);

        buf.put_u32_at(0, 0x12345678).unwrap();
        unsafe {
            buf.put_u32_at_unchecked(4, 0xABCDEF00);
        }

        assert_eq!(buf.get_u32_at(0).unwrap(), 0x12345678);
        assert_eq!(buf.get_u32_at(4).unwrap(), 0xABCDEF00);
    }

    #[test]
    fn test_byte_utilities() {
        let buf = RawBuffer::from_slice(&[0xDE, 0xAD]);
        assert_eq!(buf.to_hex(), "DEAD");

        let mut copy = buf.clone();
        copy.reverse();
        assert_eq!(copy.as_slice(), &[0xAD, 0xDE]);
        assert!(copy != buf);
    }
}
