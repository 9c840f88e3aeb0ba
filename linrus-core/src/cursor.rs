//! Row/column cursors over matrix views.
//!
//! Each step yields a fresh [`StridedView`] (or [`StridedViewMut`]) for the
//! next row or column; earlier results stay valid. Rows and columns of a
//! matrix never overlap, so the mutable cursor can hand out every lane at
//! once.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::matrix::Window;
use crate::vector::{shifted, StridedView, StridedViewMut};

/// Which family of lanes a cursor walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

struct Walk<T> {
    base: NonNull<T>,
    win: Window,
    axis: Axis,
    front: usize,
    back: usize,
}

impl<T> Walk<T> {
    fn new(base: NonNull<T>, win: Window, axis: Axis) -> Self {
        let back = match axis {
            Axis::Rows => win.rows(),
            Axis::Columns => win.cols(),
        };
        Self {
            base,
            win,
            axis,
            front: 0,
            back,
        }
    }

    #[inline]
    fn parts(&self, i: usize) -> (NonNull<T>, crate::vector::Lane) {
        let (off, lane) = self.win.lane(self.axis, i);
        (shifted(self.base, off as isize, lane.root_len > 0), lane)
    }

    #[inline]
    fn next_index(&mut self) -> Option<usize> {
        if self.front < self.back {
            self.front += 1;
            Some(self.front - 1)
        } else {
            None
        }
    }

    #[inline]
    fn next_back_index(&mut self) -> Option<usize> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.back)
        } else {
            None
        }
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.back - self.front
    }
}

/// Cursor over the rows or columns of a [`MatrixView`](crate::MatrixView).
pub struct ViewIterator<'a, T> {
    walk: Walk<T>,
    _marker: PhantomData<&'a T>,
}

// SAFETY: yields shared views only.
unsafe impl<T: Sync> Send for ViewIterator<'_, T> {}
unsafe impl<T: Sync> Sync for ViewIterator<'_, T> {}

impl<T> Clone for ViewIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            walk: Walk { ..self.walk },
            _marker: PhantomData,
        }
    }
}

impl<'a, T> ViewIterator<'a, T> {
    /// # Safety
    /// `base` and `win` must describe storage readable for `'a`.
    pub(crate) unsafe fn new(base: NonNull<T>, win: Window, axis: Axis) -> Self {
        Self {
            walk: Walk::new(base, win, axis),
            _marker: PhantomData,
        }
    }

    pub fn axis(&self) -> Axis {
        self.walk.axis
    }

    fn view(&self, i: usize) -> StridedView<'a, T> {
        let (base, lane) = self.walk.parts(i);
        // SAFETY: a lane of a window readable for 'a.
        unsafe { StridedView::from_parts(base, lane) }
    }
}

impl<'a, T> Iterator for ViewIterator<'a, T> {
    type Item = StridedView<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_index().map(|i| self.view(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.walk.remaining();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for ViewIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.walk.next_back_index().map(|i| self.view(i))
    }
}

impl<T> ExactSizeIterator for ViewIterator<'_, T> {}
impl<T> FusedIterator for ViewIterator<'_, T> {}

/// Cursor handing out mutable rows or columns of a
/// [`MatrixViewMut`](crate::MatrixViewMut).
pub struct ViewIteratorMut<'a, T> {
    walk: Walk<T>,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: yields disjoint mutable views.
unsafe impl<T: Send> Send for ViewIteratorMut<'_, T> {}
unsafe impl<T: Sync> Sync for ViewIteratorMut<'_, T> {}

impl<'a, T> ViewIteratorMut<'a, T> {
    /// # Safety
    /// `base` and `win` must describe storage exclusively borrowed for `'a`.
    pub(crate) unsafe fn new(base: NonNull<T>, win: Window, axis: Axis) -> Self {
        Self {
            walk: Walk::new(base, win, axis),
            _marker: PhantomData,
        }
    }

    pub fn axis(&self) -> Axis {
        self.walk.axis
    }

    fn view(&self, i: usize) -> StridedViewMut<'a, T> {
        let (base, lane) = self.walk.parts(i);
        // SAFETY: every index is yielded at most once and lanes of one axis
        // are disjoint; row lanes have inc = ld >= 1.
        unsafe { StridedViewMut::from_parts(base, lane) }
    }
}

impl<'a, T> Iterator for ViewIteratorMut<'a, T> {
    type Item = StridedViewMut<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_index().map(|i| self.view(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.walk.remaining();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for ViewIteratorMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.walk.next_back_index().map(|i| self.view(i))
    }
}

impl<T> ExactSizeIterator for ViewIteratorMut<'_, T> {}
impl<T> FusedIterator for ViewIteratorMut<'_, T> {}
