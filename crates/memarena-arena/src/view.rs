//! Typed, aliasing views over arena bytes.
//!
//! A [`View`] borrows a pointer's byte range from a [`crate::Memory`] and
//! decodes elements on access. Nothing is copied when the view is built,
//! and two views built from the same pointer read the same bytes.

use std::fmt;
use std::marker::PhantomData;

use memarena_core::Element;

/// Read-only window over `len` elements of `T`.
///
/// Offsets inside the arena are aligned to `T`'s width relative to their
/// region, but the arena's base address carries no alignment guarantee, so
/// elements are read unaligned. [`View::try_as_slice`] returns a plain
/// `&[T]` when the absolute address happens to be aligned.
#[derive(Clone, Copy)]
pub struct View<'a, T: Element> {
    bytes: &'a [u8],
    _marker: PhantomData<T>,
}

impl<'a, T: Element> View<'a, T> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        debug_assert_eq!(bytes.len() % T::WIDTH, 0);
        Self {
            bytes,
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.bytes.len() / T::WIDTH
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        let start = index.checked_mul(T::WIDTH)?;
        let chunk = self.bytes.get(start..start.checked_add(T::WIDTH)?)?;
        Some(bytemuck::pod_read_unaligned(chunk))
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        self.bytes
            .chunks_exact(T::WIDTH)
            .map(bytemuck::pod_read_unaligned)
    }

    /// Copy the elements out into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// The raw bytes behind the view.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Reinterpret the bytes as `&[T]` without copying.
    ///
    /// Returns `None` when the absolute address is not aligned for `T`.
    pub fn try_as_slice(&self) -> Option<&'a [T]> {
        bytemuck::try_cast_slice(self.bytes).ok()
    }
}

impl<T: Element> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> PartialEq<[T]> for View<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == *b)
    }
}

impl<T: Element> PartialEq<&[T]> for View<'_, T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for View<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Element> PartialEq<Vec<T>> for View<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: Element> PartialEq for View<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of<T: Element>(values: &[T]) -> Vec<u8> {
        bytemuck::cast_slice(values).to_vec()
    }

    #[test]
    fn decodes_elements_in_order() {
        let bytes = bytes_of(&[-2i16, 145, 42, 0, -15]);
        let view = View::<i16>::new(&bytes);
        assert_eq!(view.len(), 5);
        assert_eq!(view.get(0), Some(-2));
        assert_eq!(view.get(4), Some(-15));
        assert_eq!(view.get(5), None);
        assert_eq!(view.to_vec(), vec![-2, 145, 42, 0, -15]);
        assert_eq!(view, [-2i16, 145, 42, 0, -15]);
    }

    #[test]
    fn reads_unaligned_bytes() {
        let mut bytes = vec![0u8; 1];
        bytes.extend(bytes_of(&[1.5f64, -2.25]));
        let view = View::<f64>::new(&bytes[1..]);
        assert_eq!(view, [1.5, -2.25]);
    }

    #[test]
    fn empty_view() {
        let view = View::<u32>::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
        assert_eq!(view, Vec::<u32>::new());
    }

    #[test]
    fn length_mismatch_is_unequal() {
        let bytes = bytes_of(&[1i32, 2]);
        let view = View::<i32>::new(&bytes);
        assert_ne!(view, [1i32]);
        assert_ne!(view, [1i32, 2, 0]);
    }

    #[test]
    fn try_as_slice_on_aligned_source() {
        let values = [7u32, 8, 9];
        let view = View::<u32>::new(bytemuck::cast_slice(&values));
        assert_eq!(view.try_as_slice(), Some(&values[..]));
    }

    #[test]
    fn debug_lists_elements() {
        let bytes = bytes_of(&[-7i32, 0]);
        let view = View::<i32>::new(&bytes);
        assert_eq!(format!("{view:?}"), "[-7, 0]");
    }
}
