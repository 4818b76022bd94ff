#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use crate::StaticBounds;

/// A contiguous run of elements a view can be built from.
///
/// This is the only capability the views require from their sources: expose the elements as a
/// slice. The static bounds of the source are checked against the bounds of the view at compile
/// time.
pub trait Sequence: StaticBounds {
    /// Element type.
    type Item;

    /// Returns the elements of the sequence.
    fn as_elements(&self) -> &[Self::Item];
}

/// A [`Sequence`] also granting write access to its elements.
pub trait SequenceMut: Sequence {
    /// Returns the elements of the sequence.
    fn as_elements_mut(&mut self) -> &mut [Self::Item];
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    #[inline]
    fn as_elements_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn as_elements_mut(&mut self) -> &mut [T] {
        self
    }
}

// Read-only: arbitrary byte writes could break UTF-8 validity.
impl Sequence for str {
    type Item = u8;

    #[inline]
    fn as_elements(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "alloc")]
impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self.as_slice()
    }
}

#[cfg(feature = "alloc")]
impl<T> SequenceMut for Vec<T> {
    #[inline]
    fn as_elements_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(feature = "alloc")]
impl<T> Sequence for Box<[T]> {
    type Item = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<T> SequenceMut for Box<[T]> {
    #[inline]
    fn as_elements_mut(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl Sequence for String {
    type Item = u8;

    #[inline]
    fn as_elements(&self) -> &[u8] {
        self.as_bytes()
    }
}
