// src/error.rs
//! Error types for the checked operation tier with advanced conversion support

use std::fmt;

use crate::scalar::ScalarKind;

/// Errors reported by the checked (bounds-verified) operations.
///
/// The unchecked tier never constructs these: out-of-contract use of an
/// `unsafe fn` is undefined behavior, not an error value.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Offset plus scalar width exceeds the buffer extent
    OffsetOutOfBounds,
    /// A byte range (copy, fill, slice) exceeds the buffer extent
    RangeOutOfBounds,
    /// Requested buffer size exceeds the maximum allowed
    SizeTooBig,
    /// Layout field name not present in the compiled layout
    UnknownField(String),
    /// Layout field name declared more than once
    DuplicateField(String),
    /// Scalar value kind does not match the field's compiled kind
    KindMismatch {
        /// Kind recorded at layout compilation
        expected: ScalarKind,
        /// Kind of the value supplied by the caller
        found: ScalarKind,
    },
    /// Buffer is smaller than the layout it is being accessed through
    BufferTooSmall,
    /// I/O error (for compatibility)
    Io(String),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffsetOutOfBounds => write!(f, "Offset out of bounds"),
            Self::RangeOutOfBounds => write!(f, "Byte range out of bounds"),
            Self::SizeTooBig => write!(f, "Buffer size too big"),
            Self::UnknownField(name) => write!(f, "Unknown layout field: {}", name),
            Self::DuplicateField(name) => write!(f, "Duplicate layout field: {}", name),
            Self::KindMismatch { expected, found } => {
                write!(f, "Scalar kind mismatch: expected {:?}, found {:?}", expected, found)
            }
            Self::BufferTooSmall => write!(f, "Buffer too small for layout"),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for BufferError {}

// ============================================================================
// ADVANCED ERROR CONVERSION - Makes buffer library compatible with any error type
// ============================================================================

/// Convert BufferError to std::io::Error
impl From<BufferError> for std::io::Error {
    fn from(err: BufferError) -> Self {
        use std::io::ErrorKind;
        match err {
            BufferError::OffsetOutOfBounds | BufferError::RangeOutOfBounds => {
                std::io::Error::new(ErrorKind::WriteZero, err)
            }
            BufferError::UnknownField(_) | BufferError::DuplicateField(_) => {
                std::io::Error::new(ErrorKind::InvalidInput, err)
            }
            BufferError::Io(msg) => std::io::Error::new(ErrorKind::Other, msg),
            _ => std::io::Error::new(ErrorKind::Other, err),
        }
    }
}

/// Convert std::io::Error to BufferError
impl From<std::io::Error> for BufferError {
    fn from(err: std::io::Error) -> Self {
        BufferError::Io(err.to_string())
    }
}

/// Convert BufferError to anyhow::Error (for protocol handler compatibility)
#[cfg(feature = "anyhow")]
impl From<BufferError> for anyhow::Error {
    fn from(err: BufferError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

/// Allow using ? with anyhow::Error
#[cfg(feature = "anyhow")]
impl From<anyhow::Error> for BufferError {
    fn from(err: anyhow::Error) -> Self {
        BufferError::Io(err.to_string())
    }
}

// ============================================================================
// RESULT TYPE ALIASES
// ============================================================================

/// Result type alias for checked buffer operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`rawbuf::Result<T>`) or use the conversion traits.
pub type Result<T> = std::result::Result<T, BufferError>;

// ============================================================================
// EXTENSION TRAIT FOR EASY CONVERSION
// ============================================================================

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}

// ============================================================================
// HELPER MACROS FOR ERROR HANDLING
// ============================================================================

/// Convenience macro for converting buffer operations to any Result type.
///
/// Requires an explicit target error type as the second argument so the
/// conversion is unambiguous — necessary because error types like
/// `anyhow::Error` have multiple overlapping `From` impls.
///
/// # Example
/// ```ignore
/// use rawbuf::prelude::*;
/// use rawbuf::buffer_op;
///
/// fn handler_function() -> anyhow::Result<()> {
///     let mut buf = RawBuffer::new(1024);
///     buffer_op!(buf.put_u32_at(0, 42), anyhow::Error)?;
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! buffer_op {
    // Two-arg form: explicit target type (use this with anyhow, Box<dyn Error>, etc.)
    ($expr:expr, $target:ty) => {
        $expr.map_err(|e: $crate::BufferError| -> $target { e.into() })
    };
    // One-arg form: defaults to std::io::Error (unambiguous, no overlapping impls)
    ($expr:expr) => {
        $expr.map_err(|e: $crate::BufferError| -> std::io::Error { e.into() })
    };
}

/// Try a buffer operation with automatic error conversion
#[macro_export]
macro_rules! buffer_try {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => return Err(e.into()),
        }
    };
}
