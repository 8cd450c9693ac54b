// src/layout.rs
//! Compiled struct-like field layouts
//!
//! A [`Layout`] is compiled once from an ordered list of `(name, kind)`
//! pairs and reused across any number of buffers. Compilation accumulates a
//! running byte offset per field, so offsets are strictly increasing in
//! declaration order and the final offset plus the last field's width equals
//! the total size.

use std::collections::HashMap;

use crate::buffer::RawBuffer;
use crate::error::{BufferError, Result};
use crate::scalar::{Scalar, ScalarKind};

/// One compiled field: name, scalar kind and byte offset.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: ScalarKind,
    offset: usize,
}

impl Field {
    /// Field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar kind recorded at compilation.
    #[inline]
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Byte offset within a buffer of the layout's size.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// A precomputed field-name-to-byte-offset mapping plus total size.
///
/// Immutable after compilation; compiling the same field list twice yields
/// identical offsets. Lookup is by field name, declaration order drives the
/// offsets.
///
/// # Examples
///
/// ```
/// use rawbuf::{Layout, Scalar, ScalarKind};
///
/// let layout = Layout::compile([
///     ("a", ScalarKind::I8),
///     ("b", ScalarKind::F64),
///     ("c", ScalarKind::I32),
/// ])?;
/// assert_eq!(layout.size(), 13);
/// assert_eq!(layout.offset_of("b"), Some(1));
///
/// let mut buf = layout.alloc();
/// unsafe {
///     layout.set(&mut buf, "b", Scalar::F64(3.5))?;
///     assert_eq!(layout.get(&buf, "b")?, Scalar::F64(3.5));
/// }
/// # Ok::<(), rawbuf::BufferError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    size: usize,
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl Layout {
    /// Compiles a layout from ordered `(name, kind)` pairs.
    ///
    /// Pure function of its input: the per-field byte offset is the running
    /// sum of the preceding widths, and the total size is the sum of all
    /// widths.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::DuplicateField`] if a name appears more than
    /// once. Field names must be distinct for lookup to be unambiguous.
    pub fn compile<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ScalarKind)>,
        S: Into<String>,
    {
        let iter = fields.into_iter();
        let mut compiled = Vec::with_capacity(iter.size_hint().0);
        let mut index = HashMap::with_capacity(iter.size_hint().0);
        let mut offset = 0usize;

        for (name, kind) in iter {
            let name = name.into();
            if index.contains_key(&name) {
                return Err(BufferError::DuplicateField(name));
            }
            index.insert(name.clone(), compiled.len());
            compiled.push(Field { name, kind, offset });
            offset += kind.width();
        }

        Ok(Self {
            size: offset,
            fields: compiled,
            index,
        })
    }

    /// Total byte size of the layout.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of compiled fields.
    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the layout has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Byte offset of `name`, or `None` if the layout has no such field.
    #[inline]
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&i| self.fields[i].offset)
    }

    /// Scalar kind of `name`, or `None` if the layout has no such field.
    #[inline]
    pub fn kind_of(&self, name: &str) -> Option<ScalarKind> {
        self.index.get(name).map(|&i| self.fields[i].kind)
    }

    /// Iterates the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Allocates a new zero-filled buffer of exactly [`size`](Self::size)
    /// bytes.
    #[inline]
    pub fn alloc(&self) -> RawBuffer {
        RawBuffer::new(self.size)
    }

    #[inline]
    fn lookup(&self, name: &str) -> Result<&Field> {
        self.index
            .get(name)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| BufferError::UnknownField(name.to_string()))
    }

    /// Writes `value` into the named field without bounds checking.
    ///
    /// The field's compiled kind drives the codec; a value of a different
    /// kind is a caller error caught by a `debug_assert` only.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::UnknownField`] if the layout has no field
    /// named `name`.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `buf.len() >= self.size()`.
    #[inline]
    pub unsafe fn set(&self, buf: &mut RawBuffer, name: &str, value: Scalar) -> Result<()> {
        let field = self.lookup(name)?;
        debug_assert_eq!(
            value.kind(),
            field.kind,
            "layout set {}: value kind differs from compiled kind",
            field.name
        );
        unsafe { buf.write_scalar_unchecked(field.offset, value) };
        Ok(())
    }

    /// Reads the named field without bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::UnknownField`] if the layout has no field
    /// named `name`.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `buf.len() >= self.size()`.
    #[inline]
    pub unsafe fn get(&self, buf: &RawBuffer, name: &str) -> Result<Scalar> {
        let field = self.lookup(name)?;
        Ok(unsafe { buf.read_scalar_unchecked(field.kind, field.offset) })
    }

    /// Checked variant of [`set`](Self::set): verifies the field exists, the
    /// value kind matches and the buffer covers the layout.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnknownField`], [`BufferError::KindMismatch`] or
    /// [`BufferError::BufferTooSmall`].
    pub fn try_set(&self, buf: &mut RawBuffer, name: &str, value: Scalar) -> Result<()> {
        let field = self.lookup(name)?;
        if value.kind() != field.kind {
            return Err(BufferError::KindMismatch {
                expected: field.kind,
                found: value.kind(),
            });
        }
        if buf.len() < self.size {
            return Err(BufferError::BufferTooSmall);
        }
        unsafe { buf.write_scalar_unchecked(field.offset, value) };
        Ok(())
    }

    /// Checked variant of [`get`](Self::get): verifies the field exists and
    /// the buffer covers the layout.
    ///
    /// # Errors
    ///
    /// [`BufferError::UnknownField`] or [`BufferError::BufferTooSmall`].
    pub fn try_get(&self, buf: &RawBuffer, name: &str) -> Result<Scalar> {
        let field = self.lookup(name)?;
        if buf.len() < self.size {
            return Err(BufferError::BufferTooSmall);
        }
        Ok(unsafe { buf.read_scalar_unchecked(field.kind, field.offset) })
    }
}
