use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::slice::{self, SliceIndex};

use crate::bounds::{assert_fits_within, assert_shrunk_bounds, assert_subrange, assert_view_bounds};
use crate::storage::{DynamicMut, FixedMut, StorageMut};
use crate::{BoundedView, Sequence, SequenceMut, SizeBounds, SizedView, StaticBounds, ViewResult};

const SHORTER_THAN_LOWER_BOUND: &str = "view is shorter than its lower bound";

/// Read-write view over `AT_LEAST..=AT_MOST` contiguous elements.
///
/// Unlike [`BoundedView`], this view is not `Copy`: it holds the only mutable borrow of its
/// elements. Use [`reborrow`](MutableBoundedView::reborrow) to hand it out temporarily, and
/// [`as_view`](MutableBoundedView::as_view) or [`into_view`](MutableBoundedView::into_view) to get
/// a read-only projection.
pub struct MutableBoundedView<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S = DynamicMut<'a, T>> {
    storage: S,
    _marker: PhantomData<&'a mut [T]>,
}

/// Read-write view over exactly `N` elements, stored as a thin array reference.
pub type SizedViewMut<'a, T, const N: usize> = MutableBoundedView<'a, T, N, N, FixedMut<'a, T, N>>;

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    /// Bounds on the length of this view type.
    pub const BOUNDS: SizeBounds = SizeBounds::new(AT_LEAST, AT_MOST);

    #[inline]
    fn from_storage(storage: S) -> Self {
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
    pub fn assumed(slice: &'a mut [T]) -> Self {
        debug_assert!(
            AT_LEAST <= slice.len() && slice.len() <= AT_MOST,
            "slice length is out of the view bounds"
        );

        Self::from_storage(S::from_mut_slice(slice))
    }

    /// Creates a view over `len` elements starting at `ptr`, trusting that `len` lies within the
    /// bounds.
    ///
    /// # Safety
    ///
    /// Same contract as [`core::slice::from_raw_parts_mut`] for the lifetime `'a`.
    #[inline]
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        // SAFETY: upheld by the caller.
        let slice = unsafe { slice::from_raw_parts_mut(ptr, len) };
        Self::assumed(slice)
    }

    /// Creates a view over the elements of `source`.
    ///
    /// Fails to compile unless the static bounds of `Src` are contained in
    /// `[AT_LEAST, AT_MOST]`. Read-only sources such as `str` are rejected.
    #[inline]
    pub fn new<Src>(source: &'a mut Src) -> Self
    where
        Src: SequenceMut<Item = T> + ?Sized,
    {
        const { assert_fits_within(Src::BOUNDS, AT_LEAST, AT_MOST) };

        Self::assumed(source.as_elements_mut())
    }

    /// Creates a view over the elements of `source`, trusting that its length lies within the
    /// bounds.
    ///
    /// When `Src` carries static bounds, they still have to be contained in the view bounds.
    #[inline]
    #[track_caller]
    pub fn assumed_from<Src>(source: &'a mut Src) -> Self
    where
        Src: SequenceMut<Item = T> + ?Sized,
    {
        const {
            if !Src::BOUNDS.is_unknown() {
                assert_fits_within(Src::BOUNDS, AT_LEAST, AT_MOST)
            }
        };

        Self::assumed(source.as_elements_mut())
    }

    /// Creates a view over `slice` if its length lies within the bounds.
    pub fn try_new(slice: &'a mut [T]) -> ViewResult<Self> {
        ensure_bounds!(ctx: "MutableBoundedView::try_new", in: slice, bounds: Self::BOUNDS);
        Ok(Self::assumed(slice))
    }

    /// Returns the number of elements.
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

    /// Returns a mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_slice().as_mut_ptr()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Consumes the view and returns its elements for the whole lifetime `'a`.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.storage.into_mut_slice()
    }

    /// Consumes the view and returns a read-only view with the same bounds and storage strategy.
    #[inline]
    pub fn into_view(self) -> BoundedView<'a, T, AT_LEAST, AT_MOST, S::Shared> {
        BoundedView::from_storage(self.storage.into_shared())
    }

    // Dynamic-storage read-only projection, used by the `&self` slicing operations.
    #[inline]
    fn shared(&self) -> BoundedView<'_, T, AT_LEAST, AT_MOST> {
        BoundedView::assumed(self.as_slice())
    }

    /// Returns the first element.
    ///
    /// The view must not be empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front() called on an empty view");
        &self.as_slice()[0]
    }

    /// Returns the first element.
    ///
    /// The view must not be empty.
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "front_mut() called on an empty view");
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element.
    ///
    /// The view must not be empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back() called on an empty view");
        let slice = self.as_slice();
        &slice[slice.len() - 1]
    }

    /// Returns the last element.
    ///
    /// The view must not be empty.
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back_mut() called on an empty view");
        let slice = self.as_mut_slice();
        let last = slice.len() - 1;
        &mut slice[last]
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first `n` elements.
    #[inline]
    #[track_caller]
    pub fn first(&self, n: usize) -> &[T] {
        self.shared().first(n)
    }

    /// Returns the last `n` elements.
    #[inline]
    #[track_caller]
    pub fn last(&self, n: usize) -> &[T] {
        self.shared().last(n)
    }

    /// Returns the elements starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn from_offset(&self, offset: usize) -> &[T] {
        self.shared().from_offset(offset)
    }

    /// Returns `count` elements starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn subarray(&self, offset: usize, count: usize) -> &[T] {
        self.shared().subarray(offset, count)
    }

    /// Returns the elements without the first `n`.
    #[inline]
    #[track_caller]
    pub fn drop_front(&self, n: usize) -> &[T] {
        self.shared().drop_front(n)
    }

    /// Returns the elements without the last `n`.
    #[inline]
    #[track_caller]
    pub fn drop_back(&self, n: usize) -> &[T] {
        self.shared().drop_back(n)
    }

    /// Returns the first `n` elements.
    #[inline]
    #[track_caller]
    pub fn first_mut(&mut self, n: usize) -> &mut [T] {
        debug_assert!(n <= self.len(), "first_mut() count is greater than the view length");
        &mut self.as_mut_slice()[..n]
    }

    /// Returns the last `n` elements.
    #[inline]
    #[track_caller]
    pub fn last_mut(&mut self, n: usize) -> &mut [T] {
        debug_assert!(n <= self.len(), "last_mut() count is greater than the view length");
        let slice = self.as_mut_slice();
        let start = slice.len() - n;
        &mut slice[start..]
    }

    /// Returns the elements starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn from_offset_mut(&mut self, offset: usize) -> &mut [T] {
        debug_assert!(
            offset <= self.len(),
            "from_offset_mut() offset is greater than the view length"
        );
        &mut self.as_mut_slice()[offset..]
    }

    /// Returns `count` elements starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn subarray_mut(&mut self, offset: usize, count: usize) -> &mut [T] {
        debug_assert!(
            offset <= self.len() && count <= self.len() - offset,
            "subarray_mut() range is out of the view"
        );
        &mut self.as_mut_slice()[offset..][..count]
    }

    /// Returns `count` elements starting at `offset`, or an error if the range does not fit.
    pub fn try_subarray_mut(&mut self, offset: usize, count: usize) -> ViewResult<&mut [T]> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(offset..)
            .and_then(|rest| rest.get_mut(..count))
            .ok_or_else(|| range_out_of_bounds_err!("MutableBoundedView::try_subarray_mut", offset, count, len))
    }

    /// Returns the elements without the first `n`.
    #[inline]
    #[track_caller]
    pub fn drop_front_mut(&mut self, n: usize) -> &mut [T] {
        debug_assert!(n <= self.len(), "drop_front_mut() count is greater than the view length");
        &mut self.as_mut_slice()[n..]
    }

    /// Returns the elements without the last `n`.
    #[inline]
    #[track_caller]
    pub fn drop_back_mut(&mut self, n: usize) -> &mut [T] {
        debug_assert!(n <= self.len(), "drop_back_mut() count is greater than the view length");
        let slice = self.as_mut_slice();
        let end = slice.len() - n;
        &mut slice[..end]
    }

    /// Returns the first `N` elements. Fails to compile if `N > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn first_static<const N: usize>(&self) -> SizedView<'_, T, N> {
        self.shared().first_static::<N>()
    }

    /// Returns the last `N` elements. Fails to compile if `N > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn last_static<const N: usize>(&self) -> SizedView<'_, T, N> {
        self.shared().last_static::<N>()
    }

    /// Returns `COUNT` elements starting at `OFFSET`. Fails to compile if
    /// `OFFSET + COUNT > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn subarray_static<const OFFSET: usize, const COUNT: usize>(&self) -> SizedView<'_, T, COUNT> {
        self.shared().subarray_static::<OFFSET, COUNT>()
    }

    /// See [`BoundedView::from_offset_static`].
    #[inline]
    #[track_caller]
    pub fn from_offset_static<const OFFSET: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &self,
    ) -> BoundedView<'_, T, NEW_AT_LEAST, NEW_AT_MOST> {
        self.shared().from_offset_static::<OFFSET, NEW_AT_LEAST, NEW_AT_MOST>()
    }

    /// See [`BoundedView::drop_front_static`].
    #[inline]
    #[track_caller]
    pub fn drop_front_static<const N: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &self,
    ) -> BoundedView<'_, T, NEW_AT_LEAST, NEW_AT_MOST> {
        self.shared().drop_front_static::<N, NEW_AT_LEAST, NEW_AT_MOST>()
    }

    /// See [`BoundedView::drop_back_static`].
    #[inline]
    #[track_caller]
    pub fn drop_back_static<const N: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &self,
    ) -> BoundedView<'_, T, NEW_AT_LEAST, NEW_AT_MOST> {
        self.shared().drop_back_static::<N, NEW_AT_LEAST, NEW_AT_MOST>()
    }

    /// Returns the first `N` elements. Fails to compile if `N > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn first_static_mut<const N: usize>(&mut self) -> SizedViewMut<'_, T, N> {
        const { assert!(N <= AT_LEAST, "count is greater than the lower bound") };

        let array = self
            .as_mut_slice()
            .first_chunk_mut::<N>()
            .expect(SHORTER_THAN_LOWER_BOUND);
        SizedViewMut::from_array(array)
    }

    /// Returns the last `N` elements. Fails to compile if `N > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn last_static_mut<const N: usize>(&mut self) -> SizedViewMut<'_, T, N> {
        const { assert!(N <= AT_LEAST, "count is greater than the lower bound") };

        let array = self
            .as_mut_slice()
            .last_chunk_mut::<N>()
            .expect(SHORTER_THAN_LOWER_BOUND);
        SizedViewMut::from_array(array)
    }

    /// Returns `COUNT` elements starting at `OFFSET`. Fails to compile if
    /// `OFFSET + COUNT > AT_LEAST`.
    #[inline]
    #[track_caller]
    pub fn subarray_static_mut<const OFFSET: usize, const COUNT: usize>(&mut self) -> SizedViewMut<'_, T, COUNT> {
        const { assert_subrange(AT_LEAST, OFFSET, COUNT) };

        let array = self
            .as_mut_slice()
            .get_mut(OFFSET..)
            .and_then(|rest| rest.first_chunk_mut::<COUNT>())
            .expect(SHORTER_THAN_LOWER_BOUND);
        SizedViewMut::from_array(array)
    }

    /// Returns the elements starting at `OFFSET`, with the bounds rules of
    /// [`BoundedView::from_offset_static`].
    #[inline]
    #[track_caller]
    pub fn from_offset_static_mut<const OFFSET: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &mut self,
    ) -> MutableBoundedView<'_, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_shrunk_bounds(AT_LEAST, AT_MOST, OFFSET, NEW_AT_LEAST, NEW_AT_MOST) };

        MutableBoundedView::assumed(&mut self.as_mut_slice()[OFFSET..])
    }

    /// Returns the elements without the first `N`, with the bounds rules of
    /// [`BoundedView::drop_front_static`].
    #[inline]
    #[track_caller]
    pub fn drop_front_static_mut<const N: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &mut self,
    ) -> MutableBoundedView<'_, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_shrunk_bounds(AT_LEAST, AT_MOST, N, NEW_AT_LEAST, NEW_AT_MOST) };

        MutableBoundedView::assumed(&mut self.as_mut_slice()[N..])
    }

    /// Returns the elements without the last `N`, with the bounds rules of
    /// [`BoundedView::drop_back_static`].
    #[inline]
    #[track_caller]
    pub fn drop_back_static_mut<const N: usize, const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        &mut self,
    ) -> MutableBoundedView<'_, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_shrunk_bounds(AT_LEAST, AT_MOST, N, NEW_AT_LEAST, NEW_AT_MOST) };

        let slice = self.as_mut_slice();
        let end = slice.len() - N;
        MutableBoundedView::assumed(&mut slice[..end])
    }

    /// Consumes the view and returns the same elements under wider bounds.
    ///
    /// Fails to compile unless `[AT_LEAST, AT_MOST]` is contained in
    /// `[NEW_AT_LEAST, NEW_AT_MOST]`.
    #[inline]
    pub fn widen<const NEW_AT_LEAST: usize, const NEW_AT_MOST: usize>(
        self,
    ) -> MutableBoundedView<'a, T, NEW_AT_LEAST, NEW_AT_MOST> {
        const { assert_fits_within(SizeBounds::new(AT_LEAST, AT_MOST), NEW_AT_LEAST, NEW_AT_MOST) };

        MutableBoundedView::assumed(self.into_slice())
    }

    /// Returns the same elements as a [`SizedViewMut`], backed by a thin array reference.
    ///
    /// Fails to compile unless `AT_LEAST == AT_MOST`.
    #[inline]
    #[track_caller]
    pub fn into_sized(self) -> SizedViewMut<'a, T, AT_LEAST> {
        const { assert!(AT_LEAST == AT_MOST, "view length is not fixed") };

        let array = self
            .into_slice()
            .first_chunk_mut::<AT_LEAST>()
            .expect(SHORTER_THAN_LOWER_BOUND);
        SizedViewMut::<'a, T, AT_LEAST>::from_array(array)
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
        const { assert!(AT_LEAST == AT_MOST, "view length is not fixed") };

        self.as_slice()
            .first_chunk::<AT_LEAST>()
            .expect(SHORTER_THAN_LOWER_BOUND)
            .clone()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize> MutableBoundedView<'a, T, AT_LEAST, AT_MOST, DynamicMut<'a, T>> {
    /// Returns a shorter-lived view over the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> MutableBoundedView<'_, T, AT_LEAST, AT_MOST> {
        MutableBoundedView::assumed(self.as_mut_slice())
    }

    /// Returns a read-only view over the same elements.
    #[inline]
    pub fn as_view(&self) -> BoundedView<'_, T, AT_LEAST, AT_MOST> {
        BoundedView::assumed(self.as_slice())
    }

    /// Converts the elements into any type constructible from a slice.
    #[inline]
    pub fn to<'b, C>(&'b self) -> C
    where
        C: From<&'b [T]>,
    {
        C::from(self.as_slice())
    }
}

impl<'a, T, const N: usize> MutableBoundedView<'a, T, N, N, FixedMut<'a, T, N>> {
    /// Creates a view over an array.
    #[inline]
    pub fn from_array(array: &'a mut [T; N]) -> Self {
        Self::from_storage(FixedMut::new(array))
    }

    /// Returns the referenced array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        self.storage.as_array()
    }

    /// Returns the referenced array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        self.storage.as_mut_array()
    }

    /// Consumes the view and returns the referenced array.
    #[inline]
    pub fn into_array(self) -> &'a mut [T; N] {
        self.storage.into_array()
    }

    /// Returns a shorter-lived view over the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> SizedViewMut<'_, T, N> {
        SizedViewMut::from_array(self.as_mut_array())
    }

    /// Returns a read-only view over the same elements.
    #[inline]
    pub fn as_view(&self) -> SizedView<'_, T, N> {
        SizedView::from_array(self.as_array())
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

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> fmt::Debug for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: fmt::Debug,
    S: StorageMut<'a, T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableBoundedView")
            .field("at_least", &AT_LEAST)
            .field("at_most", &AT_MOST)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S, I> Index<I> for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    #[inline]
    #[track_caller]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S, I> IndexMut<I>
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
    I: SliceIndex<[T]>,
{
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> IntoIterator
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<'s, 'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> IntoIterator
    for &'s MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    type Item = &'s T;
    type IntoIter = slice::Iter<'s, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, 'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> IntoIterator
    for &'s mut MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    type Item = &'s mut T;
    type IntoIter = slice::IterMut<'s, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> AsRef<[T]> for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> AsMut<[T]> for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> StaticBounds
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    const BOUNDS: SizeBounds = SizeBounds::new(AT_LEAST, AT_MOST);
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> Sequence for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    type Item = T;

    #[inline]
    fn as_elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> SequenceMut
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    #[inline]
    fn as_elements_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, 'b, T, U, const AT_LEAST: usize, const AT_MOST: usize, S, const AT_LEAST2: usize, const AT_MOST2: usize, S2>
    PartialEq<MutableBoundedView<'b, U, AT_LEAST2, AT_MOST2, S2>> for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: PartialEq<U>,
    S: StorageMut<'a, T>,
    S2: StorageMut<'b, U>,
{
    #[inline]
    fn eq(&self, other: &MutableBoundedView<'b, U, AT_LEAST2, AT_MOST2, S2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> Eq for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: Eq,
    S: StorageMut<'a, T>,
{
}

impl<'a, T, U, const AT_LEAST: usize, const AT_MOST: usize, S> PartialEq<[U]>
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: PartialEq<U>,
    S: StorageMut<'a, T>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, T, U, const AT_LEAST: usize, const AT_MOST: usize, S, const N: usize> PartialEq<[U; N]>
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    T: PartialEq<U>,
    S: StorageMut<'a, T>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> From<MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>>
    for BoundedView<'a, T, AT_LEAST, AT_MOST, S::Shared>
where
    S: StorageMut<'a, T>,
{
    #[inline]
    fn from(view: MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>) -> Self {
        view.into_view()
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, const N: usize> From<&'a mut [T; N]>
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, DynamicMut<'a, T>>
{
    /// Fails to compile unless `N` lies within `[AT_LEAST, AT_MOST]`.
    #[inline]
    fn from(array: &'a mut [T; N]) -> Self {
        Self::new(array)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for MutableBoundedView<'a, T, N, N, FixedMut<'a, T, N>> {
    #[inline]
    fn from(array: &'a mut [T; N]) -> Self {
        Self::from_array(array)
    }
}

impl<'a, T, const AT_LEAST: usize, const AT_MOST: usize, S> TryFrom<&'a mut [T]>
    for MutableBoundedView<'a, T, AT_LEAST, AT_MOST, S>
where
    S: StorageMut<'a, T>,
{
    type Error = crate::ViewError;

    #[inline]
    fn try_from(slice: &'a mut [T]) -> ViewResult<Self> {
        Self::try_new(slice)
    }
}
