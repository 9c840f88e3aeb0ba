//! LAPACK routines over linrus matrix views.
//!
//! - **LU factorization** (`getrf2`): recursive, with partial pivoting,
//!   built from row interchanges, `trsm` and `gemm`.
//! - **LU driver** (`getrf`): always takes the unblocked path through `getrf2`.
//!
//! Pivots are 0-based: `ipiv[i]` is the row interchanged with row `i`.
//! Singularity is reported through the returned `info` (1-based column of
//! the first exactly-zero pivot, 0 on success), never as an error.
//!
//! The Cholesky routines, `getrs`, `gesv`, `laswp` and `ilaenv` exist only as
//! interfaces and return [`Error::NotImplemented`].

use linrus_blas::level3::{gemm, trsm};
use linrus_core::{Diag, Error, MatrixView, MatrixViewMut, Real, Result, Side, Transpose, Uplo};
use tracing::{debug, trace, warn};

// ============================================================================
// LU Factorization: A = P * L * U
// ============================================================================

/// Recursive LU factorization with partial pivoting.
///
/// Factors the `m x n` matrix A as `P * L * U` in place: L (unit lower
/// trapezoidal, diagonal not stored) below the diagonal, U on and above it.
/// `ipiv` needs at least `min(m, n)` entries; only those are written.
///
/// Returns `info`: 0 on success, `k > 0` if `U[k-1, k-1]` is exactly zero.
/// The factorization is completed either way.
pub fn getrf2<T: Real>(a: MatrixViewMut<'_, T>, ipiv: &mut [usize]) -> Result<usize> {
    let (m, n) = (a.nrows(), a.ncols());
    trace!(m, n, "getrf2");
    let k = m.min(n);
    if ipiv.len() < k {
        debug!(m, n, ipiv_len = ipiv.len(), "getrf2: pivot array too short");
        return Err(Error::invalid_argument(
            "getrf2",
            format!("ipiv has {} entries, {}x{} matrix needs {}", ipiv.len(), m, n, k),
        ));
    }
    if k == 0 {
        return Ok(0);
    }
    factor(a, &mut ipiv[..k])
}

/// Recursion body of [`getrf2`]; `ipiv.len() == min(m, n) >= 1`.
fn factor<T: Real>(mut a: MatrixViewMut<'_, T>, ipiv: &mut [usize]) -> Result<usize> {
    let (m, n) = (a.nrows(), a.ncols());
    let c = T::constants();

    if m == 1 {
        // One row: nothing to pivot or eliminate.
        ipiv[0] = 0;
        if a[(0, 0)] == c.zero {
            debug!(column = 1, "getrf2: zero pivot");
            return Ok(1);
        }
        return Ok(0);
    }

    if n == 1 {
        // One column: pick the pivot and scale the multipliers.
        let mut col = a.column_mut(0);
        let p = col.as_view().iamax();
        ipiv[0] = p;
        if col[p] == c.zero {
            debug!(column = 1, "getrf2: zero pivot");
            return Ok(1);
        }
        if p != 0 {
            col.swap_elements(0, p);
        }
        let pivot = col[0];
        let mut below = col.skip(1);
        if pivot.abs() >= c.safe_min {
            below.scale(c.one / pivot);
        } else {
            below.div(pivot);
        }
        return Ok(0);
    }

    //        [ A11 | A12 ]  n1
    //    A = [-----+-----]
    //        [ A21 | A22 ]  m - n1
    //          n1    n2
    let n1 = m.min(n) / 2;
    let n2 = n - n1;
    let (mut left, mut right) = a.split_columns_at(n1);

    // Factor [A11; A21].
    let info_left = factor(left.reborrow(), &mut ipiv[..n1])?;

    // Apply its interchanges to [A12; A22].
    for (i, &p) in ipiv[..n1].iter().enumerate() {
        right.swap_rows(i, p);
    }
    let (mut a12, mut a22) = right.split_rows_at(n1);

    // A12 := inv(L11) * A12
    trsm(
        Side::Left,
        Uplo::Lower,
        Transpose::NoTrans,
        Diag::Unit,
        c.one,
        left.as_view().top(n1),
        a12.reborrow(),
    )?;

    // A22 := A22 - A21 * A12
    gemm(
        Transpose::NoTrans,
        Transpose::NoTrans,
        -c.one,
        left.as_view().bottom(m - n1),
        a12.as_view(),
        c.one,
        a22.reborrow(),
    )?;

    // Factor A22 and lift its pivots into A's row numbering.
    let kk = (m - n1).min(n2);
    let info_right = factor(a22, &mut ipiv[n1..n1 + kk])?;
    for p in &mut ipiv[n1..n1 + kk] {
        *p += n1;
    }

    // Apply the A22 interchanges to A21.
    for (i, &p) in ipiv[n1..n1 + kk].iter().enumerate() {
        left.swap_rows(n1 + i, p);
    }

    Ok(if info_left == 0 && info_right > 0 {
        info_right + n1
    } else {
        info_left
    })
}

/// LU factorization with partial pivoting; see [`getrf2`].
///
/// Block-size tuning is not available, so this always runs the unblocked
/// recursive algorithm.
pub fn getrf<T: Real>(a: MatrixViewMut<'_, T>, ipiv: &mut [usize]) -> Result<usize> {
    trace!(m = a.nrows(), n = a.ncols(), "getrf");
    getrf2(a, ipiv)
}

// ============================================================================
// Interface-only routines
// ============================================================================

fn stub(routine: &'static str) -> Error {
    warn!(routine, "stub routine reached");
    Error::not_implemented(routine)
}

/// Cholesky factorization `A = U^T * U` or `A = L * L^T`. Not implemented.
pub fn potrf<T: Real>(uplo: Uplo, a: MatrixViewMut<'_, T>) -> Result<usize> {
    let _ = (uplo, a);
    Err(stub("potrf"))
}

/// Recursive Cholesky factorization. Not implemented.
pub fn potrf2<T: Real>(uplo: Uplo, a: MatrixViewMut<'_, T>) -> Result<usize> {
    let _ = (uplo, a);
    Err(stub("potrf2"))
}

/// Unblocked Cholesky factorization. Not implemented.
pub fn potf2<T: Real>(uplo: Uplo, a: MatrixViewMut<'_, T>) -> Result<usize> {
    let _ = (uplo, a);
    Err(stub("potf2"))
}

/// Solves `op(A) * X = B` from the factors computed by [`getrf`]. Not implemented.
pub fn getrs<T: Real>(
    trans: Transpose,
    lu: MatrixView<'_, T>,
    ipiv: &[usize],
    b: MatrixViewMut<'_, T>,
) -> Result<()> {
    let _ = (trans, lu, ipiv, b);
    Err(stub("getrs"))
}

/// Solves `A * X = B` through an LU factorization. Not implemented.
pub fn gesv<T: Real>(
    a: MatrixViewMut<'_, T>,
    ipiv: &mut [usize],
    b: MatrixViewMut<'_, T>,
) -> Result<usize> {
    let _ = (a, ipiv, b);
    Err(stub("gesv"))
}

/// Applies the row interchanges `ipiv[k1..k2]` to A. Not implemented.
pub fn laswp<T: Real>(a: MatrixViewMut<'_, T>, k1: usize, k2: usize, ipiv: &[usize]) -> Result<()> {
    let _ = (a, k1, k2, ipiv);
    Err(stub("laswp"))
}

/// Tuning parameters answered by [`ilaenv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningParameter {
    /// Optimal block size.
    BlockSize,
    /// Smallest block size worth blocking for.
    MinBlockSize,
    /// Crossover point below which the unblocked code is used.
    Crossover,
}

/// Machine- and routine-dependent tuning lookup. Not implemented.
pub fn ilaenv(param: TuningParameter, routine: &str, dims: [usize; 4]) -> Result<usize> {
    let _ = (param, routine, dims);
    Err(stub("ilaenv"))
}
