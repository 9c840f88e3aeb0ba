//! One-dimensional strided views.
//!
//! A view is a window `start..start + len` inside a *root* extent of
//! `root_len` elements spaced `inc` apart. Sub-views (`left`, `right`,
//! `skip`, `extract`, `reverse`) and `slide` re-parametrize the window and
//! keep the root, so a window can later be moved anywhere inside it.
//! Splitting a mutable view narrows each half's root to the half itself,
//! which is what keeps simultaneously live mutable views disjoint.
//!
//! Range errors panic, like slice indexing.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::scalar::Real;

/// Window geometry shared by [`StridedView`] and [`StridedViewMut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lane {
    pub(crate) root_len: usize,
    pub(crate) inc: isize,
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl Lane {
    #[inline(always)]
    pub(crate) fn full(root_len: usize, inc: isize) -> Self {
        Self {
            root_len,
            inc,
            start: 0,
            len: root_len,
        }
    }

    /// Root offset (in elements, scaled by `inc`) of window position `i`.
    #[inline(always)]
    fn offset(&self, i: usize) -> isize {
        (self.start + i) as isize * self.inc
    }

    #[inline]
    fn window(self, start: usize, len: usize) -> Self {
        assert!(
            start + len <= self.len,
            "sub-view {}..{} out of range for view of length {}",
            start,
            start + len,
            self.len
        );
        Self {
            start: self.start + start,
            len,
            ..self
        }
    }

    #[inline]
    fn slide(self, del: isize) -> Self {
        let start = self.start as isize + del;
        assert!(
            start >= 0 && start as usize + self.len <= self.root_len,
            "slide by {} moves window {}..{} outside root of length {}",
            del,
            self.start,
            self.start + self.len,
            self.root_len
        );
        Self {
            start: start as usize,
            ..self
        }
    }

    /// Reversed geometry plus the base shift (in elements) to the new root origin.
    #[inline]
    fn reverse(self) -> (isize, Self) {
        let shift = if self.root_len == 0 {
            0
        } else {
            (self.root_len - 1) as isize * self.inc
        };
        (
            shift,
            Self {
                root_len: self.root_len,
                inc: -self.inc,
                start: self.root_len - self.start - self.len,
                len: self.len,
            },
        )
    }

    /// Geometry whose root is exactly this window, plus the base shift.
    #[inline]
    fn narrowed(self) -> (isize, Self) {
        (self.offset(0), Self::full(self.len, self.inc))
    }
}

/// Pointer `offset` elements away from `base`, or dangling for an empty result.
#[inline(always)]
pub(crate) fn shifted<T>(base: NonNull<T>, offset: isize, nonempty: bool) -> NonNull<T> {
    if nonempty {
        // SAFETY: callers only ask for offsets of positions inside the root.
        unsafe { NonNull::new_unchecked(base.as_ptr().offset(offset)) }
    } else {
        NonNull::dangling()
    }
}

/// Index of root element 0 in a slice holding `len` elements spaced `inc`
/// apart, following the BLAS convention for negative increments.
fn root_origin(data_len: usize, len: usize, inc: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let span = (len - 1) * inc.unsigned_abs();
    assert!(
        span < data_len,
        "{} elements with increment {} need {} slots, slice has {}",
        len,
        inc,
        span + 1,
        data_len
    );
    if inc < 0 {
        span
    } else {
        0
    }
}

// ============================================================================
// StridedView
// ============================================================================

/// Read-only strided window over borrowed storage.
pub struct StridedView<'a, T> {
    base: NonNull<T>,
    lane: Lane,
    _marker: PhantomData<&'a T>,
}

impl<T> Clone for StridedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StridedView<'_, T> {}

// SAFETY: a StridedView behaves like `&'a [T]`.
unsafe impl<T: Sync> Send for StridedView<'_, T> {}
unsafe impl<T: Sync> Sync for StridedView<'_, T> {}

impl<'a, T> StridedView<'a, T> {
    /// Contiguous view over the whole slice.
    pub fn new(data: &'a [T]) -> Self {
        Self {
            base: NonNull::from(data).cast(),
            lane: Lane::full(data.len(), 1),
            _marker: PhantomData,
        }
    }

    /// `len` elements of `data` spaced `inc` apart.
    ///
    /// A negative increment walks the slice backwards from position
    /// `(len - 1) * |inc|`, as in BLAS.
    pub fn with_stride(data: &'a [T], len: usize, inc: isize) -> Self {
        let origin = root_origin(data.len(), len, inc);
        let base = NonNull::from(data).cast::<T>();
        Self {
            base: shifted(base, origin as isize, len > 0),
            lane: Lane::full(len, inc),
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// Every root position of `lane` must address a live `T` readable for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn from_parts(base: NonNull<T>, lane: Lane) -> Self {
        Self {
            base,
            lane,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn with_lane(self, lane: Lane) -> Self {
        Self { lane, ..self }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.lane.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.lane.len == 0
    }

    /// Distance between consecutive elements (may be negative).
    #[inline(always)]
    pub fn increment(&self) -> isize {
        self.lane.inc
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> Option<&'a T> {
        if i < self.lane.len {
            // SAFETY: position i is inside the window, hence inside the root.
            Some(unsafe { &*self.base.as_ptr().offset(self.lane.offset(i)) })
        } else {
            None
        }
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            ptr: shifted(self.base, self.lane.offset(0), self.lane.len > 0),
            inc: self.lane.inc,
            front: 0,
            back: self.lane.len,
            _marker: PhantomData,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The first `n` elements.
    pub fn left(self, n: usize) -> Self {
        self.with_lane(self.lane.window(0, n))
    }

    /// The last `n` elements.
    pub fn right(self, n: usize) -> Self {
        assert!(n <= self.lane.len, "right({}) of view of length {}", n, self.lane.len);
        self.with_lane(self.lane.window(self.lane.len - n, n))
    }

    /// Drops the first `n` elements.
    pub fn skip(self, n: usize) -> Self {
        assert!(n <= self.lane.len, "skip({}) of view of length {}", n, self.lane.len);
        self.with_lane(self.lane.window(n, self.lane.len - n))
    }

    /// `len` elements starting at `start`.
    pub fn extract(self, start: usize, len: usize) -> Self {
        self.with_lane(self.lane.window(start, len))
    }

    /// Same elements, last to first.
    pub fn reverse(self) -> Self {
        let (shift, lane) = self.lane.reverse();
        Self {
            base: shifted(self.base, shift, lane.root_len > 0),
            lane,
            _marker: PhantomData,
        }
    }

    /// Moves the window `del` positions along its root extent.
    pub fn slide(self, del: isize) -> Self {
        self.with_lane(self.lane.slide(del))
    }
}

impl<T: Real> StridedView<'_, T> {
    /// Left-to-right sum.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Sum of absolute values.
    pub fn asum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v.abs())
    }

    /// Naive sum of squares. Overflows where `nrm2` does not.
    pub fn ssq(&self) -> T {
        self.iter().fold(T::zero(), |acc, &v| acc + v * v)
    }

    /// Left-to-right sum of elementwise products.
    pub fn dot(&self, other: StridedView<'_, T>) -> T {
        assert_eq!(self.len(), other.len(), "dot of views with different lengths");
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    /// Index of the largest element; the first one wins ties.
    pub fn imax(&self) -> Option<usize> {
        self.scan(|v| v, |v, best| v > best)
    }

    /// Index of the smallest element; the first one wins ties.
    pub fn imin(&self) -> Option<usize> {
        self.scan(|v| v, |v, best| v < best)
    }

    /// Index of the element of largest magnitude (0 for an empty view).
    pub fn iamax(&self) -> usize {
        self.scan(|v| v.abs(), |v, best| v > best).unwrap_or(0)
    }

    pub fn max(&self) -> Option<T> {
        self.imax().map(|i| self[i])
    }

    pub fn min(&self) -> Option<T> {
        self.imin().map(|i| self[i])
    }

    #[inline]
    fn scan(&self, key: impl Fn(T) -> T, better: impl Fn(T, T) -> bool) -> Option<usize> {
        let mut iter = self.iter();
        let mut best = key(*iter.next()?);
        let mut best_idx = 0;
        for (i, &v) in iter.enumerate() {
            let k = key(v);
            if better(k, best) {
                best = k;
                best_idx = i + 1;
            }
        }
        Some(best_idx)
    }
}

impl<T> Index<usize> for StridedView<'_, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(v) => v,
            None => panic!("index {} out of range for view of length {}", i, self.len()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StridedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for StridedView<'_, T> {
    /// Tab-separated elements on one line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

// ============================================================================
// StridedViewMut
// ============================================================================

/// Mutable strided window over borrowed storage.
pub struct StridedViewMut<'a, T> {
    base: NonNull<T>,
    lane: Lane,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: a StridedViewMut behaves like `&'a mut [T]`.
unsafe impl<T: Send> Send for StridedViewMut<'_, T> {}
unsafe impl<T: Sync> Sync for StridedViewMut<'_, T> {}

impl<'a, T> StridedViewMut<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            lane: Lane::full(data.len(), 1),
            base: NonNull::from(data).cast(),
            _marker: PhantomData,
        }
    }

    /// `len` elements of `data` spaced `inc` apart (BLAS convention for `inc < 0`).
    pub fn with_stride(data: &'a mut [T], len: usize, inc: isize) -> Self {
        assert!(
            inc != 0 || len <= 1,
            "mutable view of {} elements needs a nonzero increment",
            len
        );
        let origin = root_origin(data.len(), len, inc);
        let base = NonNull::from(data).cast::<T>();
        Self {
            base: shifted(base, origin as isize, len > 0),
            lane: Lane::full(len, inc),
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// Every root position of `lane` must address a live `T` exclusively
    /// borrowed for `'a`, and `lane.inc` must be nonzero when `root_len > 1`.
    #[inline(always)]
    pub(crate) unsafe fn from_parts(base: NonNull<T>, lane: Lane) -> Self {
        Self {
            base,
            lane,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn with_lane(self, lane: Lane) -> Self {
        Self { lane, ..self }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.lane.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.lane.len == 0
    }

    #[inline(always)]
    pub fn increment(&self) -> isize {
        self.lane.inc
    }

    #[inline(always)]
    pub fn as_view(&self) -> StridedView<'_, T> {
        // SAFETY: shared reborrow of the same window for the borrow of self.
        unsafe { StridedView::from_parts(self.base, self.lane) }
    }

    #[inline(always)]
    pub fn into_view(self) -> StridedView<'a, T> {
        // SAFETY: self is consumed, so no mutable access remains.
        unsafe { StridedView::from_parts(self.base, self.lane) }
    }

    /// Shorter-lived mutable view of the same window.
    #[inline(always)]
    pub fn reborrow(&mut self) -> StridedViewMut<'_, T> {
        // SAFETY: exclusive reborrow for the borrow of self.
        unsafe { StridedViewMut::from_parts(self.base, self.lane) }
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_view().get(i)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.lane.len {
            // SAFETY: inside the window, exclusively borrowed through self.
            Some(unsafe { &mut *self.base.as_ptr().offset(self.lane.offset(i)) })
        } else {
            None
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.as_view().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.reborrow().into_iter()
    }

    pub fn left(self, n: usize) -> Self {
        let lane = self.lane.window(0, n);
        self.with_lane(lane)
    }

    pub fn right(self, n: usize) -> Self {
        assert!(n <= self.lane.len, "right({}) of view of length {}", n, self.lane.len);
        let lane = self.lane.window(self.lane.len - n, n);
        self.with_lane(lane)
    }

    /// Drops the first `n` elements.
    pub fn skip(self, n: usize) -> Self {
        assert!(n <= self.lane.len, "skip({}) of view of length {}", n, self.lane.len);
        let lane = self.lane.window(n, self.lane.len - n);
        self.with_lane(lane)
    }

    pub fn extract(self, start: usize, len: usize) -> Self {
        let lane = self.lane.window(start, len);
        self.with_lane(lane)
    }

    pub fn reverse(self) -> Self {
        let (shift, lane) = self.lane.reverse();
        Self {
            base: shifted(self.base, shift, lane.root_len > 0),
            lane,
            _marker: PhantomData,
        }
    }

    pub fn slide(self, del: isize) -> Self {
        let lane = self.lane.slide(del);
        self.with_lane(lane)
    }

    /// Splits into `[0, k)` and `[k, len)`, each rooted at its own window.
    pub fn split_at(self, k: usize) -> (Self, Self) {
        assert!(k <= self.lane.len, "split_at({}) of view of length {}", k, self.lane.len);
        let (head_shift, head) = self.lane.window(0, k).narrowed();
        let (tail_shift, tail) = self.lane.window(k, self.lane.len - k).narrowed();
        // SAFETY: the two windows cover disjoint positions of the original root.
        unsafe {
            (
                Self::from_parts(shifted(self.base, head_shift, head.len > 0), head),
                Self::from_parts(shifted(self.base, tail_shift, tail.len > 0), tail),
            )
        }
    }

    /// Exchanges elements `i` and `j`.
    pub fn swap_elements(&mut self, i: usize, j: usize) {
        assert!(
            i < self.len() && j < self.len(),
            "swap_elements({}, {}) out of range for view of length {}",
            i,
            j,
            self.len()
        );
        // SAFETY: both positions are inside the window; ptr::swap allows i == j.
        unsafe {
            let p = self.base.as_ptr();
            std::ptr::swap(p.offset(self.lane.offset(i)), p.offset(self.lane.offset(j)));
        }
    }
}

impl<T: Copy> StridedViewMut<'_, T> {
    /// Element-by-element copy of `src`, each side walked by its own stride.
    pub fn copy(&mut self, src: StridedView<'_, T>) {
        assert_eq!(self.len(), src.len(), "copy between views of different lengths");
        for (dst, &v) in self.iter_mut().zip(src.iter()) {
            *dst = v;
        }
    }

    /// Element-by-element exchange with `other`.
    pub fn swap(&mut self, other: &mut StridedViewMut<'_, T>) {
        assert_eq!(self.len(), other.len(), "swap between views of different lengths");
        for (x, y) in self.iter_mut().zip(other.iter_mut()) {
            std::mem::swap(x, y);
        }
    }

    pub fn set(&mut self, value: T) {
        for x in self.iter_mut() {
            *x = value;
        }
    }

    /// `this[i] = f(i)`.
    pub fn set_with(&mut self, mut f: impl FnMut(usize) -> T) {
        for (i, x) in self.iter_mut().enumerate() {
            *x = f(i);
        }
    }
}

impl<T: Real> StridedViewMut<'_, T> {
    /// Multiplies every element by `value`.
    ///
    /// A zero scale overwrites the elements with exact zeros, NaN and Inf
    /// included; a unit scale leaves them untouched.
    pub fn scale(&mut self, value: T) {
        if value == T::one() {
            return;
        }
        if value == T::zero() {
            self.set(T::zero());
            return;
        }
        for x in self.iter_mut() {
            *x *= value;
        }
    }

    pub fn add(&mut self, value: T) {
        if value == T::zero() {
            return;
        }
        for x in self.iter_mut() {
            *x += value;
        }
    }

    pub fn div(&mut self, value: T) {
        for x in self.iter_mut() {
            *x /= value;
        }
    }

    /// `this[i] += a * y[i]`. `y` is not read at all when `a` is zero.
    pub fn add_ay(&mut self, a: T, y: StridedView<'_, T>) {
        if a == T::zero() {
            return;
        }
        assert_eq!(self.len(), y.len(), "add_ay between views of different lengths");
        for (x, &v) in self.iter_mut().zip(y.iter()) {
            *x += a * v;
        }
    }
}

impl<T> Index<usize> for StridedViewMut<'_, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        let len = self.len();
        match self.get(i) {
            Some(v) => v,
            None => panic!("index {} out of range for view of length {}", i, len),
        }
    }
}

impl<T> IndexMut<usize> for StridedViewMut<'_, T> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(i) {
            Some(v) => v,
            None => panic!("index {} out of range for view of length {}", i, len),
        }
    }
}

impl<'a, T> IntoIterator for StridedViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        IterMut {
            ptr: shifted(self.base, self.lane.offset(0), self.lane.len > 0),
            inc: self.lane.inc,
            front: 0,
            back: self.lane.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for StridedView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for StridedViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

impl<T: fmt::Display> fmt::Display for StridedViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}

// ============================================================================
// Element iterators
// ============================================================================

/// Iterator over `&T` in window order.
pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    inc: isize,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back <= len, so the position is inside the window.
        let item = unsafe { &*self.ptr.as_ptr().offset(self.front as isize * self.inc) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: see next().
        Some(unsafe { &*self.ptr.as_ptr().offset(self.back as isize * self.inc) })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over `&mut T` in window order.
pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    inc: isize,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline(always)]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: nonzero increment, so every position is yielded at most once.
        let item = unsafe { &mut *self.ptr.as_ptr().offset(self.front as isize * self.inc) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: see next().
        Some(unsafe { &mut *self.ptr.as_ptr().offset(self.back as isize * self.inc) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
