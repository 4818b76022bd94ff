//! Backing representations of the views.
//!
//! A view whose length can vary at runtime stores a slice (pointer and length), a view whose
//! length is a compile-time constant only stores a pointer to an array. The choice is made by the
//! type of the view: [`SizedView`](crate::SizedView) and [`SizedViewMut`](crate::SizedViewMut)
//! select the fixed storages, every other view uses the dynamic ones. Both strategies expose the
//! same slice/length contract, so the views never need to know which one they hold.

use core::fmt;

use crate::private::Sealed;

/// Read-only backing of a [`BoundedView`](crate::BoundedView).
pub trait Storage<'a, T: 'a>: Copy + Sealed {
    /// Length of the view if it is encoded in the storage type itself.
    const FIXED_LEN: Option<usize>;

    /// Wraps `slice`.
    ///
    /// Fixed storages debug-assert that the slice length is exactly their size.
    fn from_slice(slice: &'a [T]) -> Self;

    /// Returns the referenced elements.
    fn as_slice(self) -> &'a [T];

    /// Returns the number of referenced elements.
    fn len(self) -> usize;

    /// Returns `true` if no element is referenced.
    fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Read-write backing of a [`MutableBoundedView`](crate::MutableBoundedView).
pub trait StorageMut<'a, T: 'a>: Sealed {
    /// Length of the view if it is encoded in the storage type itself.
    const FIXED_LEN: Option<usize>;

    /// Read-only storage with the same strategy.
    type Shared: Storage<'a, T>;

    /// Wraps `slice`.
    ///
    /// Fixed storages debug-assert that the slice length is exactly their size.
    fn from_mut_slice(slice: &'a mut [T]) -> Self;

    /// Returns the referenced elements.
    fn as_slice(&self) -> &[T];

    /// Returns the referenced elements.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Releases the referenced elements for the whole lifetime `'a`.
    fn into_mut_slice(self) -> &'a mut [T];

    /// Gives up write access.
    fn into_shared(self) -> Self::Shared;

    /// Returns the number of referenced elements.
    fn len(&self) -> usize;

    /// Returns `true` if no element is referenced.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[track_caller]
fn leading_array<T, const N: usize>(slice: &[T]) -> &[T; N] {
    debug_assert_eq!(slice.len(), N, "slice length does not match the fixed view size");
    slice
        .first_chunk::<N>()
        .expect("slice shorter than the fixed view size")
}

#[track_caller]
fn leading_array_mut<T, const N: usize>(slice: &mut [T]) -> &mut [T; N] {
    debug_assert_eq!(slice.len(), N, "slice length does not match the fixed view size");
    slice
        .first_chunk_mut::<N>()
        .expect("slice shorter than the fixed view size")
}

/// Pointer and runtime length.
pub struct Dynamic<'a, T>(&'a [T]);

impl<T> Clone for Dynamic<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Dynamic<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Dynamic<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dynamic").field(&self.0).finish()
    }
}

impl<T> Sealed for Dynamic<'_, T> {}

impl<'a, T: 'a> Storage<'a, T> for Dynamic<'a, T> {
    const FIXED_LEN: Option<usize> = None;

    #[inline]
    fn from_slice(slice: &'a [T]) -> Self {
        Self(slice)
    }

    #[inline]
    fn as_slice(self) -> &'a [T] {
        self.0
    }

    #[inline]
    fn len(self) -> usize {
        self.0.len()
    }
}

/// Pointer only, the length is `N`.
pub struct Fixed<'a, T, const N: usize>(&'a [T; N]);

impl<'a, T, const N: usize> Fixed<'a, T, N> {
    /// Wraps an array reference.
    #[inline]
    pub const fn new(array: &'a [T; N]) -> Self {
        Self(array)
    }

    /// Returns the referenced array.
    #[inline]
    pub const fn as_array(self) -> &'a [T; N] {
        self.0
    }
}

impl<T, const N: usize> Clone for Fixed<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Fixed<'_, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Fixed<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fixed").field(&self.0).finish()
    }
}

impl<T, const N: usize> Sealed for Fixed<'_, T, N> {}

impl<'a, T: 'a, const N: usize> Storage<'a, T> for Fixed<'a, T, N> {
    const FIXED_LEN: Option<usize> = Some(N);

    #[inline]
    #[track_caller]
    fn from_slice(slice: &'a [T]) -> Self {
        Self(leading_array(slice))
    }

    #[inline]
    fn as_slice(self) -> &'a [T] {
        self.0
    }

    #[inline]
    fn len(self) -> usize {
        N
    }
}

/// Pointer and runtime length, with write access.
pub struct DynamicMut<'a, T>(&'a mut [T]);

impl<T: fmt::Debug> fmt::Debug for DynamicMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DynamicMut").field(&self.0).finish()
    }
}

impl<T> Sealed for DynamicMut<'_, T> {}

impl<'a, T: 'a> StorageMut<'a, T> for DynamicMut<'a, T> {
    const FIXED_LEN: Option<usize> = None;

    type Shared = Dynamic<'a, T>;

    #[inline]
    fn from_mut_slice(slice: &'a mut [T]) -> Self {
        Self(slice)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &*self.0
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.0
    }

    #[inline]
    fn into_mut_slice(self) -> &'a mut [T] {
        self.0
    }

    #[inline]
    fn into_shared(self) -> Dynamic<'a, T> {
        Dynamic(self.0)
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Pointer only, with write access; the length is `N`.
pub struct FixedMut<'a, T, const N: usize>(&'a mut [T; N]);

impl<'a, T, const N: usize> FixedMut<'a, T, N> {
    /// Wraps an array reference.
    #[inline]
    pub const fn new(array: &'a mut [T; N]) -> Self {
        Self(array)
    }

    /// Returns the referenced array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &*self.0
    }

    /// Returns the referenced array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut *self.0
    }

    /// Releases the referenced array for the whole lifetime `'a`.
    #[inline]
    pub fn into_array(self) -> &'a mut [T; N] {
        self.0
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedMut").field(&self.0).finish()
    }
}

impl<T, const N: usize> Sealed for FixedMut<'_, T, N> {}

impl<'a, T: 'a, const N: usize> StorageMut<'a, T> for FixedMut<'a, T, N> {
    const FIXED_LEN: Option<usize> = Some(N);

    type Shared = Fixed<'a, T, N>;

    #[inline]
    #[track_caller]
    fn from_mut_slice(slice: &'a mut [T]) -> Self {
        Self(leading_array_mut(slice))
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &*self.0
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.0
    }

    #[inline]
    fn into_mut_slice(self) -> &'a mut [T] {
        self.0
    }

    #[inline]
    fn into_shared(self) -> Fixed<'a, T, N> {
        Fixed(self.0)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}
