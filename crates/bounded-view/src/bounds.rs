//! Static size bounds of sequences.
//!
//! [`StaticBounds`] maps a sequence type to the narrowest `[at_least, at_most]` range known for
//! its length. It is a pure compile-time mapping: the bounds are an associated constant and are
//! only ever consumed in const contexts by the view constructors and slicing operations.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Upper bound of sequences whose length has no static limit.
pub const UNBOUNDED: usize = usize::MAX;

/// Returns `at_most - n`, keeping [`UNBOUNDED`] unbounded.
///
/// `n` must not exceed `at_most`.
#[inline]
pub const fn sub_at_most(at_most: usize, n: usize) -> usize {
    if at_most == UNBOUNDED {
        UNBOUNDED
    } else {
        at_most - n
    }
}

/// Closed range `[at_least, at_most]` of possible lengths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SizeBounds {
    at_least: usize,
    at_most: usize,
}

impl SizeBounds {
    /// Bounds of a sequence whose length is not statically known.
    pub const UNBOUNDED: Self = Self {
        at_least: 0,
        at_most: UNBOUNDED,
    };

    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `at_least > at_most`. In a const context, this is a compilation error.
    #[must_use]
    #[track_caller]
    pub const fn new(at_least: usize, at_most: usize) -> Self {
        assert!(at_least <= at_most, "lower bound is greater than upper bound");
        Self { at_least, at_most }
    }

    /// Bounds of a sequence of exactly `n` elements.
    #[must_use]
    pub const fn fixed(n: usize) -> Self {
        Self { at_least: n, at_most: n }
    }

    /// Minimum length.
    #[inline]
    pub const fn at_least(self) -> usize {
        self.at_least
    }

    /// Maximum length, [`UNBOUNDED`] if there is none.
    #[inline]
    pub const fn at_most(self) -> usize {
        self.at_most
    }

    /// Returns `true` if the length is a compile-time constant.
    #[inline]
    pub const fn is_fixed(self) -> bool {
        self.at_least == self.at_most
    }

    /// Returns `true` if nothing at all is known about the length.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.at_least == 0 && self.at_most == UNBOUNDED
    }

    /// Returns `true` if `len` lies within the bounds.
    #[inline]
    pub const fn contains(self, len: usize) -> bool {
        self.at_least <= len && len <= self.at_most
    }

    /// Returns `true` if every length allowed by `self` is also allowed by `outer`.
    #[inline]
    pub const fn fits_within(self, outer: SizeBounds) -> bool {
        outer.at_least <= self.at_least && self.at_most <= outer.at_most
    }

    /// Bounds left after removing `n` elements, from either end.
    ///
    /// Returns `None` when `n` is greater than the lower bound: some sequences allowed by `self`
    /// would be too short.
    #[must_use]
    pub const fn shrink(self, n: usize) -> Option<SizeBounds> {
        if n > self.at_least {
            return None;
        }

        Some(Self {
            at_least: self.at_least - n,
            at_most: sub_at_most(self.at_most, n),
        })
    }

    /// Bounds of `count` elements taken at `offset`.
    ///
    /// Returns `None` when `offset + count` is greater than the lower bound.
    #[must_use]
    pub const fn subrange(self, offset: usize, count: usize) -> Option<SizeBounds> {
        match offset.checked_add(count) {
            Some(end) if end <= self.at_least => Some(Self::fixed(count)),
            _ => None,
        }
    }
}

/// Static bounds on the length of a sequence type.
///
/// Types without a meaningful static limit use [`SizeBounds::UNBOUNDED`].
pub trait StaticBounds {
    /// Narrowest known range for the length of any value of this type.
    const BOUNDS: SizeBounds;
}

/// Returns the static bounds of `S`.
#[inline]
pub const fn bounds_of<S: StaticBounds + ?Sized>() -> SizeBounds {
    S::BOUNDS
}

impl<T, const N: usize> StaticBounds for [T; N] {
    const BOUNDS: SizeBounds = SizeBounds::fixed(N);
}

impl<T> StaticBounds for [T] {
    const BOUNDS: SizeBounds = SizeBounds::UNBOUNDED;
}

impl StaticBounds for str {
    const BOUNDS: SizeBounds = SizeBounds::UNBOUNDED;
}

#[cfg(feature = "alloc")]
impl<T> StaticBounds for Vec<T> {
    const BOUNDS: SizeBounds = SizeBounds::UNBOUNDED;
}

#[cfg(feature = "alloc")]
impl<T> StaticBounds for Box<[T]> {
    const BOUNDS: SizeBounds = SizeBounds::UNBOUNDED;
}

#[cfg(feature = "alloc")]
impl StaticBounds for String {
    const BOUNDS: SizeBounds = SizeBounds::UNBOUNDED;
}

impl<S: StaticBounds + ?Sized> StaticBounds for &S {
    const BOUNDS: SizeBounds = S::BOUNDS;
}

impl<S: StaticBounds + ?Sized> StaticBounds for &mut S {
    const BOUNDS: SizeBounds = S::BOUNDS;
}

// Compile-time checks used by the views. They are only ever evaluated inside `const { .. }`
// blocks, where a failed assertion is a compilation error.

pub(crate) const fn assert_view_bounds(at_least: usize, at_most: usize, fixed_len: Option<usize>) {
    assert!(at_least <= at_most, "lower bound is greater than upper bound");

    if let Some(n) = fixed_len {
        assert!(
            n == at_least && n == at_most,
            "fixed storage size does not match the view bounds"
        );
    }
}

pub(crate) const fn assert_fits_within(source: SizeBounds, at_least: usize, at_most: usize) {
    assert!(
        source.fits_within(SizeBounds::new(at_least, at_most)),
        "source bounds are not contained in the view bounds"
    );
}

pub(crate) const fn assert_shrunk_bounds(
    at_least: usize,
    at_most: usize,
    n: usize,
    new_at_least: usize,
    new_at_most: usize,
) {
    assert!(
        n <= at_least,
        "cannot remove more elements than the lower bound guarantees"
    );
    assert!(
        new_at_least == at_least - n && new_at_most == sub_at_most(at_most, n),
        "result bounds do not match the bounds of the sliced view"
    );
}

pub(crate) const fn assert_subrange(at_least: usize, offset: usize, count: usize) {
    assert!(
        matches!(offset.checked_add(count), Some(end) if end <= at_least),
        "sub-range may exceed the lower bound"
    );
}
