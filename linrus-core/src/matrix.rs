//! Column-major matrix views with an explicit leading dimension.
//!
//! Element (r, c) of a view lives at `base[r + ld * c]`. Like the strided
//! vector views, a matrix view is a window inside a root region: extraction
//! (`top`, `left`, `extract`, ...) keeps the root, the shrink/grow helpers
//! move the window inside it, and `split_rows_at` / `split_columns_at`
//! narrow each half's root so both halves can be mutated at once.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::cursor::{Axis, ViewIterator, ViewIteratorMut};
use crate::scalar::Real;
use crate::vector::{shifted, Lane, StridedView, StridedViewMut};

/// Window geometry shared by [`MatrixView`] and [`MatrixViewMut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    root_rows: usize,
    root_cols: usize,
    ld: usize,
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
}

impl Window {
    fn full(rows: usize, cols: usize, ld: usize) -> Self {
        Self {
            root_rows: rows,
            root_cols: cols,
            ld,
            row0: 0,
            col0: 0,
            rows,
            cols,
        }
    }

    /// Root offset of window element (r, c).
    #[inline(always)]
    fn offset(&self, r: usize, c: usize) -> usize {
        (self.row0 + r) + self.ld * (self.col0 + c)
    }

    #[inline(always)]
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    fn sub(self, r: usize, nr: usize, c: usize, nc: usize) -> Self {
        assert!(
            r + nr <= self.rows && c + nc <= self.cols,
            "sub-matrix rows {}..{}, cols {}..{} out of range for {}x{} view",
            r,
            r + nr,
            c,
            c + nc,
            self.rows,
            self.cols
        );
        Self {
            row0: self.row0 + r,
            col0: self.col0 + c,
            rows: nr,
            cols: nc,
            ..self
        }
    }

    /// Window at absolute root position (row0, col0), checked against the root.
    fn placed(self, row0: isize, col0: isize, rows: usize, cols: usize) -> Self {
        assert!(
            row0 >= 0
                && col0 >= 0
                && row0 as usize + rows <= self.root_rows
                && col0 as usize + cols <= self.root_cols,
            "{}x{} window at ({}, {}) leaves the {}x{} root",
            rows,
            cols,
            row0,
            col0,
            self.root_rows,
            self.root_cols
        );
        Self {
            row0: row0 as usize,
            col0: col0 as usize,
            rows,
            cols,
            ..self
        }
    }

    /// Geometry rooted at this window, plus the base offset of its origin.
    fn narrowed(self) -> (usize, Self) {
        (self.offset(0, 0), Self::full(self.rows, self.cols, self.ld))
    }

    /// Base offset and geometry of row `i` or column `i`.
    #[inline]
    pub(crate) fn lane(&self, axis: Axis, i: usize) -> (usize, Lane) {
        match axis {
            Axis::Rows => {
                assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
                (
                    self.row0 + i,
                    Lane {
                        root_len: self.root_cols,
                        inc: self.ld as isize,
                        start: self.col0,
                        len: self.cols,
                    },
                )
            }
            Axis::Columns => {
                assert!(i < self.cols, "column {} out of range for {} columns", i, self.cols);
                (
                    self.ld * (self.col0 + i),
                    Lane {
                        root_len: self.root_rows,
                        inc: 1,
                        start: self.row0,
                        len: self.rows,
                    },
                )
            }
        }
    }

    /// Base offset and geometry of the k-th diagonal (k > 0 above, k < 0 below).
    fn diagonal(&self, k: isize) -> (usize, Lane) {
        let inc = (self.ld + 1) as isize;
        let shift = k.unsigned_abs();
        let (r, c, len) = if k >= 0 {
            if shift >= self.cols {
                return (0, Lane::full(0, inc));
            }
            (self.row0, self.col0 + shift, self.rows.min(self.cols - shift))
        } else {
            if shift >= self.rows {
                return (0, Lane::full(0, inc));
            }
            (self.row0 + shift, self.col0, (self.rows - shift).min(self.cols))
        };
        if len == 0 {
            return (0, Lane::full(0, inc));
        }
        let back = r.min(c);
        let (r0, c0) = (r - back, c - back);
        (
            r0 + self.ld * c0,
            Lane {
                root_len: (self.root_rows - r0).min(self.root_cols - c0),
                inc,
                start: back,
                len,
            },
        )
    }
}

fn check_storage(data_len: usize, rows: usize, cols: usize, ld: usize) {
    assert!(
        ld >= rows.max(1),
        "leading dimension {} is smaller than the row count {}",
        ld,
        rows
    );
    if rows > 0 && cols > 0 {
        let needed = ld * (cols - 1) + rows;
        assert!(
            needed <= data_len,
            "{}x{} matrix with leading dimension {} needs {} elements, slice has {}",
            rows,
            cols,
            ld,
            needed,
            data_len
        );
    }
}

/// Window-moving helpers shared by both view kinds.
macro_rules! window_motion {
    () => {
        /// Drops `nr` leading rows and `nc` leading columns.
        pub fn bshrink(&mut self, nr: usize, nc: usize) {
            let w = self.win;
            assert!(nr <= w.rows && nc <= w.cols, "bshrink({}, {}) of {}x{} view", nr, nc, w.rows, w.cols);
            self.win = w.sub(nr, w.rows - nr, nc, w.cols - nc);
        }

        /// Drops `nr` trailing rows and `nc` trailing columns.
        pub fn eshrink(&mut self, nr: usize, nc: usize) {
            let w = self.win;
            assert!(nr <= w.rows && nc <= w.cols, "eshrink({}, {}) of {}x{} view", nr, nc, w.rows, w.cols);
            self.win = w.sub(0, w.rows - nr, 0, w.cols - nc);
        }

        /// Grows the window by `nr` rows upwards and `nc` columns leftwards.
        pub fn bexpand(&mut self, nr: usize, nc: usize) {
            let w = self.win;
            self.win = w.placed(
                w.row0 as isize - nr as isize,
                w.col0 as isize - nc as isize,
                w.rows + nr,
                w.cols + nc,
            );
        }

        /// Grows the window by `nr` rows downwards and `nc` columns rightwards.
        pub fn eexpand(&mut self, nr: usize, nc: usize) {
            let w = self.win;
            self.win = w.placed(w.row0 as isize, w.col0 as isize, w.rows + nr, w.cols + nc);
        }

        /// Moves the window by `dr` rows and `dc` columns, keeping its size.
        pub fn shift(&mut self, dr: isize, dc: isize) {
            let w = self.win;
            self.win = w.placed(w.row0 as isize + dr, w.col0 as isize + dc, w.rows, w.cols);
        }

        /// Moves to the next diagonal block of the same size.
        pub fn next_block(&mut self) {
            let (r, c) = (self.win.rows as isize, self.win.cols as isize);
            self.shift(r, c);
        }

        /// Moves to the previous diagonal block of the same size.
        pub fn previous_block(&mut self) {
            let (r, c) = (self.win.rows as isize, self.win.cols as isize);
            self.shift(-r, -c);
        }

        #[inline(always)]
        pub fn nrows(&self) -> usize {
            self.win.rows
        }

        #[inline(always)]
        pub fn ncols(&self) -> usize {
            self.win.cols
        }

        /// Leading dimension (distance between consecutive columns).
        #[inline(always)]
        pub fn ld(&self) -> usize {
            self.win.ld
        }

        #[inline(always)]
        pub fn is_empty(&self) -> bool {
            self.win.rows == 0 || self.win.cols == 0
        }

        #[inline(always)]
        pub fn is_square(&self) -> bool {
            self.win.rows == self.win.cols
        }
    };
}

// ============================================================================
// MatrixView
// ============================================================================

/// Read-only column-major window over borrowed storage.
pub struct MatrixView<'a, T> {
    base: NonNull<T>,
    win: Window,
    _marker: PhantomData<&'a T>,
}

impl<T> Clone for MatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatrixView<'_, T> {}

// SAFETY: a MatrixView behaves like `&'a [T]`.
unsafe impl<T: Sync> Send for MatrixView<'_, T> {}
unsafe impl<T: Sync> Sync for MatrixView<'_, T> {}

impl<'a, T> MatrixView<'a, T> {
    /// `rows x cols` matrix stored column-major in `data` with leading dimension `ld`.
    pub fn new(data: &'a [T], rows: usize, cols: usize, ld: usize) -> Self {
        check_storage(data.len(), rows, cols, ld);
        Self {
            base: NonNull::from(data).cast(),
            win: Window::full(rows, cols, ld),
            _marker: PhantomData,
        }
    }

    /// Densely packed `rows x cols` matrix (`ld == rows`).
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> Self {
        Self::new(data, rows, cols, rows.max(1))
    }

    window_motion!();

    #[inline(always)]
    fn with_window(self, win: Window) -> Self {
        Self { win, ..self }
    }

    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> Option<&'a T> {
        if r < self.win.rows && c < self.win.cols {
            // SAFETY: (r, c) is inside the window, hence inside the root.
            Some(unsafe { &*self.base.as_ptr().add(self.win.offset(r, c)) })
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> StridedView<'a, T> {
        let (off, lane) = self.win.lane(Axis::Rows, i);
        // SAFETY: the lane is a row of the root region.
        unsafe { StridedView::from_parts(shifted(self.base, off as isize, lane.root_len > 0), lane) }
    }

    pub fn column(&self, j: usize) -> StridedView<'a, T> {
        let (off, lane) = self.win.lane(Axis::Columns, j);
        // SAFETY: the lane is a column of the root region.
        unsafe { StridedView::from_parts(shifted(self.base, off as isize, lane.root_len > 0), lane) }
    }

    /// Main diagonal for `k == 0`, super-diagonals for `k > 0`, sub-diagonals
    /// for `k < 0`. Empty when `k` is out of range.
    pub fn diagonal(&self, k: isize) -> StridedView<'a, T> {
        let (off, lane) = self.win.diagonal(k);
        // SAFETY: the lane is a diagonal of the root region.
        unsafe { StridedView::from_parts(shifted(self.base, off as isize, lane.root_len > 0), lane) }
    }

    /// Cursor over the rows, top to bottom.
    pub fn rows(&self) -> ViewIterator<'a, T> {
        // SAFETY: base and window describe storage readable for 'a.
        unsafe { ViewIterator::new(self.base, self.win, Axis::Rows) }
    }

    /// Cursor over the columns, left to right.
    pub fn columns(&self) -> ViewIterator<'a, T> {
        // SAFETY: base and window describe storage readable for 'a.
        unsafe { ViewIterator::new(self.base, self.win, Axis::Columns) }
    }

    pub fn top(self, n: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(0, n, 0, w.cols))
    }

    pub fn bottom(self, n: usize) -> Self {
        let w = self.win;
        assert!(n <= w.rows, "bottom({}) of {} rows", n, w.rows);
        self.with_window(w.sub(w.rows - n, n, 0, w.cols))
    }

    pub fn left(self, n: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(0, w.rows, 0, n))
    }

    pub fn right(self, n: usize) -> Self {
        let w = self.win;
        assert!(n <= w.cols, "right({}) of {} columns", n, w.cols);
        self.with_window(w.sub(0, w.rows, w.cols - n, n))
    }

    pub fn top_left(self, nr: usize, nc: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(0, nr, 0, nc))
    }

    pub fn bottom_right(self, nr: usize, nc: usize) -> Self {
        let w = self.win;
        assert!(nr <= w.rows && nc <= w.cols, "bottom_right({}, {}) of {}x{}", nr, nc, w.rows, w.cols);
        self.with_window(w.sub(w.rows - nr, nr, w.cols - nc, nc))
    }

    /// `nr x nc` block whose top-left corner is (r, c).
    pub fn extract(self, r: usize, nr: usize, c: usize, nc: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(r, nr, c, nc))
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        match self.get(r, c) {
            Some(v) => v,
            None => panic!(
                "index ({}, {}) out of range for {}x{} view",
                r,
                c,
                self.nrows(),
                self.ncols()
            ),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for MatrixView<'_, T> {
    /// One line per row, elements separated by tabs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

// ============================================================================
// MatrixViewMut
// ============================================================================

/// Mutable column-major window over borrowed storage.
pub struct MatrixViewMut<'a, T> {
    base: NonNull<T>,
    win: Window,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: a MatrixViewMut behaves like `&'a mut [T]`.
unsafe impl<T: Send> Send for MatrixViewMut<'_, T> {}
unsafe impl<T: Sync> Sync for MatrixViewMut<'_, T> {}

impl<'a, T> MatrixViewMut<'a, T> {
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, ld: usize) -> Self {
        check_storage(data.len(), rows, cols, ld);
        Self {
            base: NonNull::from(data).cast(),
            win: Window::full(rows, cols, ld),
            _marker: PhantomData,
        }
    }

    pub fn from_slice(data: &'a mut [T], rows: usize, cols: usize) -> Self {
        Self::new(data, rows, cols, rows.max(1))
    }

    window_motion!();

    #[inline(always)]
    fn with_window(self, win: Window) -> Self {
        Self { win, ..self }
    }

    #[inline(always)]
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            base: self.base,
            win: self.win,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn into_view(self) -> MatrixView<'a, T> {
        MatrixView {
            base: self.base,
            win: self.win,
            _marker: PhantomData,
        }
    }

    /// Shorter-lived mutable view of the same window.
    #[inline(always)]
    pub fn reborrow(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut {
            base: self.base,
            win: self.win,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        self.as_view().get(r, c)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, r: usize, c: usize) -> Option<&mut T> {
        if r < self.win.rows && c < self.win.cols {
            // SAFETY: inside the window and exclusively borrowed through self.
            Some(unsafe { &mut *self.base.as_ptr().add(self.win.offset(r, c)) })
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> StridedView<'_, T> {
        self.as_view().row(i)
    }

    pub fn column(&self, j: usize) -> StridedView<'_, T> {
        self.as_view().column(j)
    }

    pub fn diagonal(&self, k: isize) -> StridedView<'_, T> {
        self.as_view().diagonal(k)
    }

    pub fn row_mut(&mut self, i: usize) -> StridedViewMut<'_, T> {
        let (off, lane) = self.win.lane(Axis::Rows, i);
        // SAFETY: a row of the root, exclusively borrowed through self; inc = ld >= 1.
        unsafe { StridedViewMut::from_parts(shifted(self.base, off as isize, lane.root_len > 0), lane) }
    }

    pub fn column_mut(&mut self, j: usize) -> StridedViewMut<'_, T> {
        let (off, lane) = self.win.lane(Axis::Columns, j);
        // SAFETY: a column of the root, exclusively borrowed through self.
        unsafe { StridedViewMut::from_parts(shifted(self.base, off as isize, lane.root_len > 0), lane) }
    }

    pub fn diagonal_mut(&mut self, k: isize) -> StridedViewMut<'_, T> {
        let (off, lane) = self.win.diagonal(k);
        // SAFETY: a diagonal of the root, exclusively borrowed through self.
        unsafe { StridedViewMut::from_parts(shifted(self.base, off as isize, lane.root_len > 0), lane) }
    }

    pub fn rows(&self) -> ViewIterator<'_, T> {
        self.as_view().rows()
    }

    pub fn columns(&self) -> ViewIterator<'_, T> {
        self.as_view().columns()
    }

    /// Cursor handing out each row as a mutable view.
    pub fn rows_mut(&mut self) -> ViewIteratorMut<'_, T> {
        // SAFETY: rows of the root are pairwise disjoint; self stays borrowed.
        unsafe { ViewIteratorMut::new(self.base, self.win, Axis::Rows) }
    }

    /// Cursor handing out each column as a mutable view.
    pub fn columns_mut(&mut self) -> ViewIteratorMut<'_, T> {
        // SAFETY: ld >= root rows, so columns of the root are pairwise disjoint.
        unsafe { ViewIteratorMut::new(self.base, self.win, Axis::Columns) }
    }

    pub fn top(self, n: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(0, n, 0, w.cols))
    }

    pub fn bottom(self, n: usize) -> Self {
        let w = self.win;
        assert!(n <= w.rows, "bottom({}) of {} rows", n, w.rows);
        self.with_window(w.sub(w.rows - n, n, 0, w.cols))
    }

    pub fn left(self, n: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(0, w.rows, 0, n))
    }

    pub fn right(self, n: usize) -> Self {
        let w = self.win;
        assert!(n <= w.cols, "right({}) of {} columns", n, w.cols);
        self.with_window(w.sub(0, w.rows, w.cols - n, n))
    }

    pub fn top_left(self, nr: usize, nc: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(0, nr, 0, nc))
    }

    pub fn bottom_right(self, nr: usize, nc: usize) -> Self {
        let w = self.win;
        assert!(nr <= w.rows && nc <= w.cols, "bottom_right({}, {}) of {}x{}", nr, nc, w.rows, w.cols);
        self.with_window(w.sub(w.rows - nr, nr, w.cols - nc, nc))
    }

    pub fn extract(self, r: usize, nr: usize, c: usize, nc: usize) -> Self {
        let w = self.win;
        self.with_window(w.sub(r, nr, c, nc))
    }

    /// Splits into rows `[0, i)` and `[i, m)`, each rooted at its own block.
    pub fn split_rows_at(self, i: usize) -> (Self, Self) {
        let w = self.win;
        assert!(i <= w.rows, "split_rows_at({}) of {} rows", i, w.rows);
        self.split(w.sub(0, i, 0, w.cols), w.sub(i, w.rows - i, 0, w.cols))
    }

    /// Splits into columns `[0, j)` and `[j, n)`, each rooted at its own block.
    pub fn split_columns_at(self, j: usize) -> (Self, Self) {
        let w = self.win;
        assert!(j <= w.cols, "split_columns_at({}) of {} columns", j, w.cols);
        self.split(w.sub(0, w.rows, 0, j), w.sub(0, w.rows, j, w.cols - j))
    }

    fn split(self, first: Window, second: Window) -> (Self, Self) {
        let (off1, first) = first.narrowed();
        let (off2, second) = second.narrowed();
        let nonempty = |w: &Window| w.rows > 0 && w.cols > 0;
        // SAFETY: the two blocks share no element of the original root.
        (
            Self {
                base: shifted(self.base, off1 as isize, nonempty(&first)),
                win: first,
                _marker: PhantomData,
            },
            Self {
                base: shifted(self.base, off2 as isize, nonempty(&second)),
                win: second,
                _marker: PhantomData,
            },
        )
    }

    /// Exchanges rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize)
    where
        T: Copy,
    {
        if i == j {
            return;
        }
        let (lo, hi) = (i.min(j), i.max(j));
        let (mut upper, mut lower) = self.reborrow().split_rows_at(hi);
        upper.row_mut(lo).swap(&mut lower.row_mut(0));
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    /// Assigns `value` to every element, column by column.
    pub fn set(&mut self, value: T) {
        for mut col in self.columns_mut() {
            col.set(value);
        }
    }

    /// `self[(r, c)] = f(r, c)`.
    pub fn set_with(&mut self, mut f: impl FnMut(usize, usize) -> T) {
        for (c, mut col) in self.columns_mut().enumerate() {
            col.set_with(|r| f(r, c));
        }
    }

    /// Element-wise copy of a view of the same shape.
    pub fn copy_from(&mut self, src: MatrixView<'_, T>) {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (src.nrows(), src.ncols()),
            "copy between matrices of different shapes"
        );
        for (mut dst, col) in self.columns_mut().zip(src.columns()) {
            dst.copy(col);
        }
    }
}

impl<T: Real> MatrixViewMut<'_, T> {
    /// Multiplies every element by `value`, with the same zero/one fast
    /// paths as [`StridedViewMut::scale`].
    pub fn scale(&mut self, value: T) {
        if value == T::one() {
            return;
        }
        for mut col in self.columns_mut() {
            col.scale(value);
        }
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        let (m, n) = (self.nrows(), self.ncols());
        match self.get(r, c) {
            Some(v) => v,
            None => panic!("index ({}, {}) out of range for {}x{} view", r, c, m, n),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        let (m, n) = (self.nrows(), self.ncols());
        match self.get_mut(r, c) {
            Some(v) => v,
            None => panic!("index ({}, {}) out of range for {}x{} view", r, c, m, n),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MatrixViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

impl<T: fmt::Display> fmt::Display for MatrixViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x4 matrix with element (r, c) = 10r + c, leading dimension 5.
    fn padded() -> Vec<f64> {
        let mut data = vec![-1.0; 5 * 4];
        for c in 0..4 {
            for r in 0..3 {
                data[r + 5 * c] = (10 * r + c) as f64;
            }
        }
        data
    }

    #[test]
    fn test_element_layout() {
        let data = padded();
        let a = MatrixView::new(&data, 3, 4, 5);
        assert_eq!(a[(2, 3)], 23.0);
        assert_eq!(a.get(3, 0), None);
        assert_eq!(a.row(1).to_vec(), vec![10.0, 11.0, 12.0, 13.0]);
        assert_eq!(a.row(1).increment(), 5);
        assert_eq!(a.column(2).to_vec(), vec![2.0, 12.0, 22.0]);
        assert_eq!(a.column(2).increment(), 1);
    }

    #[test]
    fn test_diagonals() {
        let data = padded();
        let a = MatrixView::new(&data, 3, 4, 5);
        assert_eq!(a.diagonal(0).to_vec(), vec![0.0, 11.0, 22.0]);
        assert_eq!(a.diagonal(1).to_vec(), vec![1.0, 12.0, 23.0]);
        assert_eq!(a.diagonal(3).to_vec(), vec![3.0]);
        assert_eq!(a.diagonal(-2).to_vec(), vec![20.0]);
        assert!(a.diagonal(4).is_empty());
        assert!(a.diagonal(-3).is_empty());
        // a sub-matrix diagonal can slide back along the root diagonal
        let d = a.bottom_right(2, 2).diagonal(0);
        assert_eq!(d.to_vec(), vec![12.0, 23.0]);
        assert_eq!(d.slide(-1).to_vec(), vec![1.0, 12.0]);
    }

    #[test]
    fn test_extraction_shares_storage() {
        let data = padded();
        let a = MatrixView::new(&data, 3, 4, 5);
        let b = a.extract(1, 2, 1, 2);
        assert_eq!((b.nrows(), b.ncols(), b.ld()), (2, 2, 5));
        assert_eq!(b[(0, 0)], 11.0);
        assert_eq!(a.top(1).row(0).to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(a.bottom(1).row(0).to_vec(), vec![20.0, 21.0, 22.0, 23.0]);
        assert_eq!(a.left(1).column(0).to_vec(), vec![0.0, 10.0, 20.0]);
        assert_eq!(a.right(1).column(0).to_vec(), vec![3.0, 13.0, 23.0]);
        assert_eq!(a.top_left(2, 2)[(1, 1)], 11.0);
        assert_eq!(a.bottom_right(2, 2)[(0, 0)], 12.0);
    }

    #[test]
    fn test_window_motion() {
        let data = padded();
        let mut w = MatrixView::new(&data, 3, 4, 5).top_left(1, 1);
        w.next_block();
        assert_eq!(w[(0, 0)], 11.0);
        w.next_block();
        assert_eq!(w[(0, 0)], 22.0);
        w.previous_block();
        w.eexpand(1, 2);
        assert_eq!((w.nrows(), w.ncols()), (2, 3));
        assert_eq!(w[(1, 2)], 23.0);
        w.bshrink(1, 1);
        assert_eq!(w[(0, 0)], 22.0);
        w.bexpand(2, 2);
        assert_eq!(w[(0, 0)], 0.0);
        w.eshrink(0, 1);
        assert_eq!((w.nrows(), w.ncols()), (3, 3));
        w.shift(0, 1);
        assert_eq!(w[(0, 0)], 1.0);
    }

    #[test]
    #[should_panic]
    fn test_shift_outside_root_panics() {
        let data = padded();
        let mut w = MatrixView::new(&data, 3, 4, 5).top_left(2, 2);
        w.shift(2, 0);
    }

    #[test]
    fn test_cursors() {
        let data = padded();
        let a = MatrixView::new(&data, 3, 4, 5);
        let sums: Vec<f64> = a.columns().map(|c| c.sum()).collect();
        assert_eq!(sums, vec![30.0, 33.0, 36.0, 39.0]);
        let last = a.rows().next_back().map(|r| r.to_vec());
        assert_eq!(last, Some(vec![20.0, 21.0, 22.0, 23.0]));
        assert_eq!(a.rows().len(), 3);
    }

    #[test]
    fn test_mutable_bulk_ops() {
        let mut data = padded();
        let mut a = MatrixViewMut::new(&mut data, 3, 4, 5);
        a.set_with(|r, c| (r * c) as f64);
        a.scale(2.0);
        assert_eq!(a[(2, 3)], 12.0);
        a.set(f64::NAN);
        a.scale(0.0);
        assert!(a.columns().all(|c| c.iter().all(|&v| v == 0.0)));
        // padding rows are untouched
        assert_eq!(data[3], -1.0);
        assert_eq!(data[4], -1.0);
    }

    #[test]
    fn test_split_and_swap_rows() {
        let mut data = padded();
        let mut a = MatrixViewMut::new(&mut data, 3, 4, 5);
        a.swap_rows(0, 2);
        assert_eq!(a.row(0).to_vec(), vec![20.0, 21.0, 22.0, 23.0]);
        assert_eq!(a.row(2).to_vec(), vec![0.0, 1.0, 2.0, 3.0]);

        let (mut left, right) = a.split_columns_at(1);
        left.column_mut(0).add_ay(1.0, right.column(0));
        assert_eq!(left.column(0).to_vec(), vec![41.0, 21.0, 1.0]);

        let mut data = padded();
        let (mut top, bottom) = MatrixViewMut::new(&mut data, 3, 4, 5).split_rows_at(2);
        assert_eq!((top.nrows(), bottom.nrows()), (2, 1));
        top.row_mut(1).copy(bottom.row(0));
        assert_eq!(data[1 + 5 * 3], 23.0);
    }

    #[test]
    fn test_columns_mut_hands_out_disjoint_lanes() {
        let mut data = vec![0.0f64; 6];
        let mut a = MatrixViewMut::from_slice(&mut data, 2, 3);
        for (j, mut col) in a.columns_mut().enumerate() {
            col.set(j as f64);
        }
        for (i, mut row) in a.rows_mut().rev().enumerate() {
            row.add(i as f64 * 10.0);
        }
        assert_eq!(data, vec![10.0, 0.0, 11.0, 1.0, 12.0, 2.0]);
    }

    #[test]
    fn test_empty_matrix() {
        let data: [f64; 0] = [];
        let a = MatrixView::from_slice(&data, 0, 3);
        assert!(a.is_empty());
        assert_eq!(a.columns().count(), 3);
        assert!(a.column(1).is_empty());
        assert_eq!(a.rows().count(), 0);
        assert_eq!(a.to_string(), "");
    }

    #[test]
    fn test_display() {
        let data = [1.0f64, 3.0, 2.0, 4.0];
        let a = MatrixView::from_slice(&data, 2, 2);
        assert_eq!(a.to_string(), "1\t2\n3\t4\n");
    }
}
