//! Free-function shorthands for building views.
//!
//! The bounds are passed through the turbofish, the element type is inferred from the source:
//!
//! ```
//! use bounded_view::{bounded_view, sized_view, UNBOUNDED};
//!
//! let header = [0x03, 0x00, 0x00, 0x13];
//! let at_least_two = bounded_view::<2, UNBOUNDED, _>(&header);
//! let exactly_four = sized_view(&header);
//! assert_eq!(at_least_two, exactly_four);
//! ```

use crate::{
    BoundedView, MutableBoundedView, Sequence, SequenceMut, SizedView, SizedViewMut,
};

/// Creates a view over `source`, checking at compile time that its static bounds fit.
#[inline]
pub fn bounded_view<'a, const AT_LEAST: usize, const AT_MOST: usize, Src>(
    source: &'a Src,
) -> BoundedView<'a, Src::Item, AT_LEAST, AT_MOST>
where
    Src: Sequence + ?Sized,
{
    BoundedView::new(source)
}

/// Creates a view over `slice`, trusting that its length lies within the bounds.
#[inline]
#[track_caller]
pub fn bounded_view_assumed<const AT_LEAST: usize, const AT_MOST: usize, T>(
    slice: &[T],
) -> BoundedView<'_, T, AT_LEAST, AT_MOST> {
    BoundedView::assumed(slice)
}

/// Creates a fixed-size view over an array.
#[inline]
pub const fn sized_view<T, const N: usize>(array: &[T; N]) -> SizedView<'_, T, N> {
    SizedView::from_array(array)
}

/// Creates a fixed-size view over `slice`, trusting that it holds exactly `N` elements.
///
/// # Panics
///
/// Panics if `slice` holds fewer than `N` elements. Extra elements are only caught by a debug
/// assertion.
#[inline]
#[track_caller]
pub fn sized_view_assumed<const N: usize, T>(slice: &[T]) -> SizedView<'_, T, N> {
    SizedView::assumed(slice)
}

/// Creates a mutable view over `source`, checking at compile time that its static bounds fit.
#[inline]
pub fn bounded_view_mut<'a, const AT_LEAST: usize, const AT_MOST: usize, Src>(
    source: &'a mut Src,
) -> MutableBoundedView<'a, Src::Item, AT_LEAST, AT_MOST>
where
    Src: SequenceMut + ?Sized,
{
    MutableBoundedView::new(source)
}

/// Creates a mutable view over `slice`, trusting that its length lies within the bounds.
#[inline]
#[track_caller]
pub fn bounded_view_mut_assumed<const AT_LEAST: usize, const AT_MOST: usize, T>(
    slice: &mut [T],
) -> MutableBoundedView<'_, T, AT_LEAST, AT_MOST> {
    MutableBoundedView::assumed(slice)
}

/// Creates a fixed-size mutable view over an array.
#[inline]
pub fn sized_view_mut<T, const N: usize>(array: &mut [T; N]) -> SizedViewMut<'_, T, N> {
    SizedViewMut::from_array(array)
}

/// Creates a fixed-size mutable view over `slice`, trusting that it holds exactly `N` elements.
///
/// # Panics
///
/// Panics if `slice` holds fewer than `N` elements.
#[inline]
#[track_caller]
pub fn sized_view_mut_assumed<const N: usize, T>(slice: &mut [T]) -> SizedViewMut<'_, T, N> {
    SizedViewMut::assumed(slice)
}
