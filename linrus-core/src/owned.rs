//! Heap-owning vector and matrix containers.
//!
//! Kernels only ever see views; the owning types exist to hold storage and
//! hand out [`all`](OwningMatrix::all) / [`all_mut`](OwningMatrix::all_mut)
//! views over their full extent.

use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::{Error, Result};

use crate::matrix::{MatrixView, MatrixViewMut};
use crate::rng::SplitMix64;
use crate::scalar::Real;
use crate::vector::{StridedView, StridedViewMut};

// ============================================================================
// OwningVector
// ============================================================================

/// Contiguous vector that owns its elements.
#[derive(Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OwningVector<T> {
    data: Vec<T>,
}

impl<T: Clone> Clone for OwningVector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    /// Copy-assignment: reuses the existing allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

impl<T> OwningVector<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// `v[i] = f(i)` for `i` in `0..len`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..len).map(f).collect(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// View over every element.
    pub fn all(&self) -> StridedView<'_, T> {
        StridedView::new(&self.data)
    }

    pub fn all_mut(&mut self) -> StridedViewMut<'_, T> {
        StridedViewMut::new(&mut self.data)
    }
}

impl<T: Real> OwningVector<T> {
    /// `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    /// Overwrites every element with a uniform sample from `[lo, hi)`.
    pub fn fill_uniform(&mut self, rng: &mut SplitMix64, lo: T, hi: T) {
        for x in &mut self.data {
            *x = rng.uniform(lo, hi);
        }
    }
}

impl<T> From<Vec<T>> for OwningVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> Index<usize> for OwningVector<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for OwningVector<T> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: fmt::Display> fmt::Display for OwningVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.all(), f)
    }
}

// ============================================================================
// OwningMatrix
// ============================================================================

/// Column-major matrix that owns its elements, packed with `ld == max(rows, 1)`.
#[derive(Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawMatrix<T>")
)]
pub struct OwningMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unchecked wire form of [`OwningMatrix`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawMatrix<T>> for OwningMatrix<T> {
    type Error = Error;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        let RawMatrix { data, rows, cols } = raw;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::invalid_argument(
                "OwningMatrix",
                format!("{}x{} matrix holds {} elements", rows, cols, data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }
}

impl<T: Clone> Clone for OwningMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

impl<T> OwningMatrix<T> {
    /// Takes `data` as the column-major contents of a `rows x cols` matrix.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "{}x{} matrix built from {} elements",
            rows,
            cols,
            data.len()
        );
        Self { data, rows, cols }
    }

    /// `a[(r, c)] = f(r, c)`, generated column by column.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for c in 0..cols {
            for r in 0..rows {
                data.push(f(r, c));
            }
        }
        Self { data, rows, cols }
    }

    #[inline(always)]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn ld(&self) -> usize {
        self.rows.max(1)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Column-major storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// View over the full extent.
    pub fn all(&self) -> MatrixView<'_, T> {
        MatrixView::new(&self.data, self.rows, self.cols, self.ld())
    }

    pub fn all_mut(&mut self) -> MatrixViewMut<'_, T> {
        let ld = self.ld();
        MatrixViewMut::new(&mut self.data, self.rows, self.cols, ld)
    }
}

impl<T: Copy> OwningMatrix<T> {
    /// Builds a matrix from row-major `data`, the order matrices are written in source.
    pub fn from_row_major(rows: usize, cols: usize, data: &[T]) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "{}x{} matrix built from {} elements",
            rows,
            cols,
            data.len()
        );
        Self::from_fn(rows, cols, |r, c| data[r * cols + c])
    }
}

impl<T: Real> OwningMatrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { T::one() } else { T::zero() })
    }

    /// Overwrites every element with a uniform sample from `[lo, hi)`.
    pub fn fill_uniform(&mut self, rng: &mut SplitMix64, lo: T, hi: T) {
        for x in &mut self.data {
            *x = rng.uniform(lo, hi);
        }
    }
}

impl<T> Index<(usize, usize)> for OwningMatrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            r,
            c,
            self.rows,
            self.cols
        );
        &self.data[r + self.rows * c]
    }
}

impl<T> IndexMut<(usize, usize)> for OwningMatrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(
            r < self.rows && c < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            r,
            c,
            self.rows,
            self.cols
        );
        &mut self.data[r + self.rows * c]
    }
}

impl<T: fmt::Display> fmt::Display for OwningMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.all(), f)
    }
}

// ============================================================================
// Copies out of views
// ============================================================================

impl<T: Copy> StridedView<'_, T> {
    /// Contiguous copy of the viewed elements.
    pub fn to_owned(&self) -> OwningVector<T> {
        OwningVector::from_vec(self.to_vec())
    }
}

impl<T: Copy> MatrixView<'_, T> {
    /// Packed copy of the viewed block.
    pub fn to_owned(&self) -> OwningMatrix<T> {
        let mut data = Vec::with_capacity(self.nrows() * self.ncols());
        for col in self.columns() {
            data.extend(col.iter().copied());
        }
        OwningMatrix::from_vec(self.nrows(), self.ncols(), data)
    }

    /// Packed copy of the transposed block.
    pub fn transpose(&self) -> OwningMatrix<T> {
        let mut data = Vec::with_capacity(self.nrows() * self.ncols());
        for row in self.rows() {
            data.extend(row.iter().copied());
        }
        OwningMatrix::from_vec(self.ncols(), self.nrows(), data)
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    pub fn to_owned(&self) -> OwningMatrix<T> {
        self.as_view().to_owned()
    }

    pub fn transpose(&self) -> OwningMatrix<T> {
        self.as_view().transpose()
    }
}
