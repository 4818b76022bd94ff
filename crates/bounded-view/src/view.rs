use core::fmt;
use core::marker::PhantomData;
use core::ops::Index;
use core::slice::{self, SliceIndex};

use crate::bounds::{assert_fits_within, assert_shrunk_bounds, assert_subrange, assert_view_bounds};
use crate::storage::{Dynamic, Fixed, Storage};
use crate::{Sequence, SizeBounds, StaticBounds, ViewResult};

const SHORTER_THAN_LOWER_BOUND: &str = "view is shorter than its lower bound";

/// Read-only view over `AT_LEAST..=AT_MOST` contiguous elements.
///
/// The view never owns the elements. It is `Copy` and as cheap to pass around as the slice (or,
/// for [`SizedView`], the array reference) backing it.
///
/// There is no default or empty constructor: a view is obtained from a source sequence, either
/// through [`BoundedView::new`], which checks at compile time that the static bounds of the
/// source fit, or through [`BoundedView::assumed`] when the caller already knows the length is
/// right.
pub struct BoundedView<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S = Dynamic<'a, T>> {
    storage: S,
    _marker: PhantomData<&'a [T]>,
}

/// Read-only view over exactly `N` elements, stored as a thin array reference.
pub type SizedView<'a, T, const N: usize> = BoundedView<'a, T, N, N, Fixed<'a, T, N>>;

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    /// Bounds on the length of this view type.
    pub const BOUNDS: SizeBounds = SizeBounds::new(AT_LEAST, AT_MOST);

    #[inline]
    pub(crate) fn from_storage(storage: S) -> Self {
        const { assert_view_bounds(AT_LEAST, AT_MOST, S::FIXED_LEN) };

        Self {
            storage,
            _marker: PhantomData,
        }
    }

    /// Creates a view over `slice`, trusting that its length lies within the bounds.
    ///
    /// The length is only checked by a debug assertion.
    #[inline]
    #[track_caller]
    pub fn assumed(slice: &'a [T]) -> Self {
        debug_assert!(
            AT_LEAST <= slice.len() && slice.len() <= AT_MOST,
            "slice length is out of the view bounds"
        );

        Self::from_storage(S::from_slice(slice))
    }

    /// Creates a view over `len` elements starting at `ptr`, trusting that `len` lies within the
    /// bounds.
    ///
    /// # Safety
    ///
    /// Same contract as [`core::slice::from_raw_parts`] for the lifetime `'a`.
    #[inline]
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        // SAFETY: upheld by the caller.
        let slice = unsafe { slice::from_raw_parts(ptr, len) };
        Self::assumed(slice)
    }

    /// Creates a view over the elements of `source`.
    ///
    /// Fails to compile unless the static bounds of `Src` are contained in
    /// `[AT_LEAST, AT_MOST]`: an array of 4 elements fits in `BoundedView<_, 0, 8>`, a slice only
    /// fits in `BoundedView<_, 0, UNBOUNDED>`.
    #[inline]
    pub fn new<Src>(source: &'a Src) -> Self
    where
        Src: Sequence<Item = T> + ?Sized,
    {
        const { assert_fits_within(Src::BOUNDS, AT_LEAST, AT_MOST) };

        Self::assumed(source.as_elements())
    }

    /// Creates a view over the elements of `source`, trusting that its length lies within the
    /// bounds.
    ///
    /// When `Src` carries static bounds, they still have to be contained in the view bounds.
    #[inline]
    #[track_caller]
    pub fn assumed_from<Src>(source: &'a Src) -> Self
    where
        Src: Sequence<Item = T> + ?Sized,
    {
        const {
            if !Src::BOUNDS.is_unknown() {
                assert_fits_within(Src::BOUNDS, AT_LEAST, AT_MOST)
            }
        };

        Self::assumed(source.as_elements())
    }

    /// Creates a view over `slice` if its length lies within the bounds.
    pub fn try_new(slice: &'a [T]) -> ViewResult<Self> {
        ensure_bounds!(ctx: "BoundedView::try_new", in: slice, bounds: Self::BOUNDS);
        Ok(Self::assumed(slice))
    }

    /// Returns the number of elements.
    ///
    /// When `AT_LEAST == AT_MOST`, this is the constant bound whatever the storage.
    #[inline]
    pub fn len(&self) -> usize {
        if AT_LEAST == AT_MOST {
            AT_LEAST
        } else {
            self.storage.len()
        }
    }

    /// Returns `true` if the view has no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_slice().as_ptr()
    }

    /// Returns the elements as a slice, valid for the whole lifetime `'a`.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.storage.as_slice()
    }

    /// Returns the first element.
    ///
    /// The view must not be empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &'a T {
        debug_assert!(!self.is_empty(), "front() called on an empty view");
        &self.as_slice()[0]
    }

    /// Returns the last element.
    ///
    /// The view must not be empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &'a T {
        debug_assert!(!self.is_empty(), "back() called on an empty view");
        let slice = self.as_slice();
        &slice[slice.len() - 1]
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Returns the first `n` elements.
    #[inline]
    #[track_caller]
    pub fn first(&self, n: usize) -> &'a [T] {
        debug_assert!(n <= self.len(), "first() count is greater than the view length");
        &self.as_slice()[..n]
    }

    /// Returns the last `n` elements.
    #[inline]
    #[track_caller]
    pub fn last(&self, n: usize) -> &'a [T] {
        debug_assert!(n <= self.len(), "last() count is greater than the view length");
        let slice = self.as_slice();
        &slice[slice.len() - n..]
    }

    /// Returns the elements starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn from_offset(&self, offset: usize) -> &'a [T] {
        debug_assert!(offset <= self.len(), "from_offset() offset is greater than the view length");
        &self.as_slice()[offset..]
    }

    /// Returns `count` elements starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn subarray(&self, offset: usize, count: usize) -> &'a [T] {
        debug_assert!(
            offset <= self.len() && count <= self.len() - offset,
            "subarray() range is out of the view"
        );
        &self.as_slice()[offset..][..count]
    }

    /// Returns `count` elements starting at `offset`, or an error if the range does not fit.
    pub fn try_subarray(&self, offset: usize, count: usize) -> ViewResult<&'a [T]> {
        self.as_slice()
            .get(offset..)
            .and_then(|rest| rest.get(..count))
            .ok_or_else(|| range_out_of_bounds_err!("BoundedView::try_subarray", offset, count, self.len()))
    }

    /// Returns the elements without the first `n`.
    #[inline]
    #[track_caller]
    pub fn drop_front(&self, n: usize) -> &'a [T] {
        debug_assert!(n <= self.len(), "drop_front() count is greater than the view length");
        &self.as_slice()[n..]
    }

    /// Returns the elements without the last `n`.
    #[inline]
    #[track_caller]
    pub fn drop_back(&self, n: usize) -> &'a [T] {
        debug_assert!(n <= self.len(), "drop_back() count is greater than the view length");
        let slice = self.as_slice();
        &slice[..slice.len() - n]
    }

    /// Returns the first `N` elements.
    ///
    /// Fails to compile if `N > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn first_static<const N: usize>(&self) -> SizedView<'a, T, N> {
        const { assert!(N <= AT_LEAST, "count is greater than the lower bound") };

        let array = self.as_slice().first_chunk::<N>().expect(SHORTER_THAN_LOWER_BOUND);
        SizedView::<'a, T, N>::from_array(array)
    }

    /// Returns the last `N` elements.
    ///
    /// Fails to compile if `N > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn last_static<const N: usize>(&self) -> SizedView<'a, T, N> {
        const { assert!(N <= AT_LEAST, "count is greater than the lower bound") };

        let array = self.as_slice().last_chunk::<N>().expect(SHORTER_THAN_LOWER_BOUND);
        SizedView::<'a, T, N>::from_array(array)
    }

    /// Returns `COUNT` elements starting at `OFFSET`.
    ///
    /// Fails to compile if `OFFSET + COUNT > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn subarray_static<const OFFSET: usize, const COUNT: usize>(&self) -> SizedView<'a, T, COUNT> {
        const { assert_subrange(AT_LEAST, OFFSET, COUNT) };

        let array = self
            .as_slice()
            .get(OFFSET..)
            .and_then(|rest| rest.first_chunk::<COUNT>())
            .expect(SHORTER_THAN_LOWER_BOUND);
        SizedView::<'a, T, COUNT>::from_array(array)
    }

    /// Returns the elements starting at `OFFSET`.
    ///
    /// The result bounds must be `[AT_LEAST - OFFSET, AT_MOST - OFFSET]` (an unbounded upper
    /// bound stays unbounded); they can be left for the compiler to infer with `_`.
    /// Fails to compile if `OFFSET > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn from_offset_static<const OFFSET: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &self,
    ) -> BoundedView<'a, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_shrunk_bounds(AT_LEAST, AT_MOST, OFFSET, NEW_AT_LEAST, NEW_AT_MOST) };

        BoundedView::assumed(&self.as_slice()[OFFSET..])
    }

    /// Returns the elements without the first `N`.
    ///
    /// Same bounds rules as [`from_offset_static`](Self::from_offset_static).
    #[inline]
    #[track_caller]
    pub fn drop_front_static<const N: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &self,
    ) -> BoundedView<'a, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_shrunk_bounds(AT_LEAST, AT_MOST, N, NEW_AT_LEAST, NEW_AT_MOST) };

        BoundedView::assumed(&self.as_slice()[N..])
    }

    /// Returns the elements without the last `N`.
    ///
    /// The result bounds must be `[AT_LEAST - N, AT_MOST - N]` (an unbounded upper bound stays
    /// unbounded). Fails to compile if `N > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn drop_back_static<const N: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &self,
    ) -> BoundedView<'a, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_shrunk_bounds(AT_LEAST, AT_MOST, N, NEW_AT_LEAST, NEW_AT_MOST) };

        let slice = self.as_slice();
        BoundedView::assumed(&slice[..slice.len() - N])
    }

    /// Returns the same elements under wider bounds.
    ///
    /// Fails to compile unless `[AT_LEAST, AT_MOST]` is contained in
    /// `[NEW_AT_LEAST, NEW_AT_MOST]`.
    #[inline]
    pub fn widen<const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &self,
    ) -> BoundedView<'a, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_fits_within(SizeBounds::new(AT_LEAST, AT_MOST), NEW_AT_LEAST, NEW_AT_MOST) };

        BoundedView::assumed(self.as_slice())
    }

    /// Returns the same elements as a [`SizedView`], backed by a thin array reference.
    ///
    /// Static slicing yields dynamically stored views even when their bounds are equal; this
    /// recovers the fixed storage. Fails to compile unless `AT_LEAST == AT_MOST`.
    #[inline]
    #[track_caller]
    pub fn into_sized(self) -> SizedView<'a, T, AT_LEAST> {
        const { assert!(AT_LEAST == AT_MOST, "view length is not fixed") };

        let array = self.as_slice().first_chunk::<AT_LEAST>().expect(SHORTER_THAN_LOWER_BOUND);
        SizedView::<'a, T, AT_LEAST>::from_array(array)
    }

    /// Copies the elements into an array.
    ///
    /// Fails to compile unless `AT_LEAST == AT_MOST`.
    #[inline]
    #[track_caller]
    pub fn to_array(&self) -> [T; AT_LEAST]
    where
        T: Clone,
    {
        self.into_sized().as_array().clone()
    }
}

impl<'a, T, const N: usize> BoundedView<'a, T, N, N, Fixed<'a, T, N>> {
    /// Creates a view over an array.
    #[inline]
    pub const fn from_array(array: &'a [T; N]) -> Self {
        Self {
            storage: Fixed::new(array),
            _marker: PhantomData,
        }
    }

    /// Returns the referenced array.
    #[inline]
    pub const fn as_array(&self) -> &'a [T; N] {
        self.storage.as_array()
    }

    /// Converts the elements into any type constructible from an array of `N` elements.
    #[inline]
    pub fn to<C>(&self) -> C
    where
        T: Clone,
        C: From<[T; N]>,
    {
        C::from(self.to_array())
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize> BoundedView<'a, T, AT_LEAST, AT_MOST, Dynamic<'a, T>> {
    /// Converts the elements into any type constructible from a slice.
    #[inline]
    pub fn to<C>(&self) -> C
    where
        C: From<&'a [T]>,
    {
        C::from(self.as_slice())
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> Clone for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> Copy for BoundedView<'a, T, AT_LEAST, AT_MOST, S> where
    S: Storage<'a, T>
{
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> fmt::Debug for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: fmt::Debug,
    S: Storage<'a, T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedView")
            .field("at_least", &AT_LEAST)
            .field("at_most", &AT_MOST)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S, I> Index<I> for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> IntoIterator for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> IntoIterator for &BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> AsRef<[T]> for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> StaticBounds for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    const BOUNDS: SizeBounds = SizeBounds::new(AT_LEAST, AT_MOST);
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> Sequence for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    type Item = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, 'b, T, U, const AT_LEAST: usize, const AT_MOST: usize, S, const AT_LEAST2: usize, const AT_MOST2: usize, S2>
    PartialEq<BoundedView<'b, U, AT_LEAST2, AT_MOST2, S2>> for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: PartialEq<U>,
    S: Storage<'a, T>,
    S2: Storage<'b, U>,
{
    #[inline]
    fn eq(&self, other: &BoundedView<'b, U, AT_LEAST2, AT_MOST2, S2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> Eq for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: Eq,
    S: Storage<'a, T>,
{
}

impl<'a, T, U, const AT_LEAST: usize, const AT_MOST: usize, S> PartialEq<[U]> for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: PartialEq<U>,
    S: Storage<'a, T>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, T, U, const AT_LEAST: usize, const AT_MOST: usize, S, const N: usize> PartialEq<[U; N]>
    for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: PartialEq<U>,
    S: Storage<'a, T>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, const N: usize> From<&'a [T; N]>
    for BoundedView<'a, T, AT_LEAST, AT_MOST, Dynamic<'a, T>>
{
    /// Fails to compile unless `N` lies within `[AT_LEAST, AT_MOST]`.
    #[inline]
    fn from(array: &'a [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for BoundedView<'a, T, N, N, Fixed<'a, T, N>> {
    #[inline]
    fn from(array: &'a [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> TryFrom<&'a [T]> for BoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: Storage<'a, T>,
{
    type Error = crate::ViewError;

    #[inline]
    fn try_from(slice: &'a [T]) -> ViewResult<Self> {
        Self::try_new(slice)
    }
}
