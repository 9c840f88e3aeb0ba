//! BLAS Level 3: Matrix-matrix operations.
//!
//! `gemm` is written against matrix views, `gemm_strided` is the same
//! algorithm as a raw index walk over `(slice, ld)` operands. Both scale a
//! column of C by beta and then accumulate `alpha * op(B)[l, j]` times the
//! l-th column of `op(A)` into it, skipping zero multipliers, so the two
//! agree bit for bit.
//!
//! `trsm` spells out all eight (side, uplo, trans) sweeps.

use linrus_core::{
    Diag, Error, MatrixView, MatrixViewMut, Real, Result, Side, StridedView, Transpose, Uplo,
};
use tracing::{trace, warn};

use crate::check::{check_operand, shape_error};

// ============================================================================
// GEMM: General matrix multiply
// C := alpha * op(A) * op(B) + beta * C
// ============================================================================

/// C := alpha * op(A) * op(B) + beta * C
///
/// With a zero alpha or an empty inner dimension only the beta scaling
/// happens; a zero beta overwrites C with exact zeros.
pub fn gemm<T: Real>(
    transa: Transpose,
    transb: Transpose,
    alpha: T,
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    beta: T,
    mut c: MatrixViewMut<'_, T>,
) -> Result<()> {
    let (m, k) = transa.apply(a.nrows(), a.ncols());
    let (kb, n) = transb.apply(b.nrows(), b.ncols());
    trace!(?transa, ?transb, m, n, k, "gemm");
    if k != kb || c.nrows() != m || c.ncols() != n {
        return Err(shape_error(
            "gemm",
            format!(
                "op(A) is {}x{}, op(B) is {}x{}, C is {}x{}",
                m,
                k,
                kb,
                n,
                c.nrows(),
                c.ncols()
            ),
        ));
    }
    if c.is_empty() {
        return Ok(());
    }
    if alpha == T::zero() || k == 0 {
        c.scale(beta);
        return Ok(());
    }

    // Lane l of op(A) and lane j of op(B), chosen once.
    type Lane<'v, T> = fn(&MatrixView<'v, T>, usize) -> StridedView<'v, T>;
    let a_lane: Lane<'_, T> = if transa.is_trans() {
        MatrixView::row
    } else {
        MatrixView::column
    };
    let b_lane: Lane<'_, T> = if transb.is_trans() {
        MatrixView::row
    } else {
        MatrixView::column
    };

    for (j, mut cj) in c.columns_mut().enumerate() {
        cj.scale(beta);
        for (l, &blj) in b_lane(&b, j).iter().enumerate() {
            cj.add_ay(alpha * blj, a_lane(&a, l));
        }
    }
    Ok(())
}

/// [`gemm`] over raw column-major storage.
///
/// `m x n` is the shape of C and `k` the inner dimension; A is stored as
/// `m x k` (or `k x m` when transposed) with leading dimension `lda`, and
/// likewise for B.
pub fn gemm_strided<T: Real>(
    transa: Transpose,
    transb: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) -> Result<()> {
    trace!(?transa, ?transb, m, n, k, "gemm_strided");
    let (ar, ac) = if transa.is_trans() { (k, m) } else { (m, k) };
    let (br, bc) = if transb.is_trans() { (n, k) } else { (k, n) };
    check_operand("gemm_strided", "a", a.len(), ar, ac, lda)?;
    check_operand("gemm_strided", "b", b.len(), br, bc, ldb)?;
    check_operand("gemm_strided", "c", c.len(), m, n, ldc)?;
    if m == 0 || n == 0 {
        return Ok(());
    }

    let zero = T::zero();
    let one = T::one();
    let scale_column = |cj: &mut [T]| {
        if beta == zero {
            cj.iter_mut().for_each(|x| *x = zero);
        } else if beta != one {
            cj.iter_mut().for_each(|x| *x *= beta);
        }
    };

    if alpha == zero || k == 0 {
        for j in 0..n {
            scale_column(&mut c[j * ldc..j * ldc + m]);
        }
        return Ok(());
    }

    // op(A)[i, l] = a[i * a_rs + l * a_cs], op(B)[l, j] = b[l * b_rs + j * b_cs]
    let (a_rs, a_cs) = if transa.is_trans() { (lda, 1) } else { (1, lda) };
    let (b_rs, b_cs) = if transb.is_trans() { (ldb, 1) } else { (1, ldb) };

    for j in 0..n {
        let cj = &mut c[j * ldc..j * ldc + m];
        scale_column(cj);
        for l in 0..k {
            let temp = alpha * b[l * b_rs + j * b_cs];
            if temp == zero {
                continue;
            }
            for (i, x) in cj.iter_mut().enumerate() {
                *x += temp * a[i * a_rs + l * a_cs];
            }
        }
    }
    Ok(())
}

// ============================================================================
// TRSM: Triangular solve with multiple right-hand sides
// op(A) * X = alpha * B  or  X * op(A) = alpha * B
// ============================================================================

/// Solves `op(A) * X = alpha * B` (`Side::Left`) or `X * op(A) = alpha * B`
/// (`Side::Right`) for triangular A, overwriting B with X.
///
/// Only the `uplo` triangle of A is read; with `Diag::Unit` its diagonal is
/// taken to be one and never read. A singular A is not detected.
pub fn trsm<T: Real>(
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    alpha: T,
    a: MatrixView<'_, T>,
    mut b: MatrixViewMut<'_, T>,
) -> Result<()> {
    let (m, n) = (b.nrows(), b.ncols());
    trace!(?side, ?uplo, ?trans, ?diag, m, n, "trsm");
    let order = match side {
        Side::Left => m,
        Side::Right => n,
    };
    if !a.is_square() || a.nrows() != order {
        return Err(shape_error(
            "trsm",
            format!(
                "A is {}x{} but B is {}x{} with A on the {:?}",
                a.nrows(),
                a.ncols(),
                m,
                n,
                side
            ),
        ));
    }
    if b.is_empty() {
        return Ok(());
    }
    if alpha == T::zero() {
        b.set(T::zero());
        return Ok(());
    }

    let nonunit = !diag.is_unit();
    let zero = T::zero();

    match (side, trans, uplo) {
        (Side::Left, Transpose::NoTrans, Uplo::Upper) => {
            // B := alpha * inv(U) * B
            for mut bj in b.columns_mut() {
                bj.scale(alpha);
                for k in (0..m).rev() {
                    if bj[k] != zero {
                        if nonunit {
                            bj[k] /= a[(k, k)];
                        }
                        let bk = bj[k];
                        bj.reborrow().left(k).add_ay(-bk, a.column(k).left(k));
                    }
                }
            }
        }
        (Side::Left, Transpose::NoTrans, Uplo::Lower) => {
            // B := alpha * inv(L) * B
            for mut bj in b.columns_mut() {
                bj.scale(alpha);
                for k in 0..m {
                    if bj[k] != zero {
                        if nonunit {
                            bj[k] /= a[(k, k)];
                        }
                        let bk = bj[k];
                        bj.reborrow().skip(k + 1).add_ay(-bk, a.column(k).skip(k + 1));
                    }
                }
            }
        }
        (Side::Left, Transpose::Trans, Uplo::Upper) => {
            // B := alpha * inv(U^T) * B
            for mut bj in b.columns_mut() {
                for i in 0..m {
                    let mut temp = alpha * bj[i] - a.column(i).left(i).dot(bj.as_view().left(i));
                    if nonunit {
                        temp /= a[(i, i)];
                    }
                    bj[i] = temp;
                }
            }
        }
        (Side::Left, Transpose::Trans, Uplo::Lower) => {
            // B := alpha * inv(L^T) * B
            for mut bj in b.columns_mut() {
                for i in (0..m).rev() {
                    let mut temp =
                        alpha * bj[i] - a.column(i).skip(i + 1).dot(bj.as_view().skip(i + 1));
                    if nonunit {
                        temp /= a[(i, i)];
                    }
                    bj[i] = temp;
                }
            }
        }
        (Side::Right, Transpose::NoTrans, Uplo::Upper) => {
            // B := alpha * B * inv(U)
            for j in 0..n {
                let (done, mut rest) = b.reborrow().split_columns_at(j);
                let mut bj = rest.column_mut(0);
                bj.scale(alpha);
                for k in 0..j {
                    bj.add_ay(-a[(k, j)], done.column(k));
                }
                if nonunit {
                    bj.div(a[(j, j)]);
                }
            }
        }
        (Side::Right, Transpose::NoTrans, Uplo::Lower) => {
            // B := alpha * B * inv(L)
            for j in (0..n).rev() {
                let (mut head, done) = b.reborrow().split_columns_at(j + 1);
                let mut bj = head.column_mut(j);
                bj.scale(alpha);
                for k in (j + 1..n).rev() {
                    bj.add_ay(-a[(k, j)], done.column(k - j - 1));
                }
                if nonunit {
                    bj.div(a[(j, j)]);
                }
            }
        }
        (Side::Right, Transpose::Trans, Uplo::Upper) => {
            // B := alpha * B * inv(U^T)
            for k in (0..n).rev() {
                let (mut head, mut rest) = b.reborrow().split_columns_at(k);
                let mut bk = rest.column_mut(0);
                if nonunit {
                    bk.div(a[(k, k)]);
                }
                for j in 0..k {
                    head.column_mut(j).add_ay(-a[(j, k)], bk.as_view());
                }
                bk.scale(alpha);
            }
        }
        (Side::Right, Transpose::Trans, Uplo::Lower) => {
            // B := alpha * B * inv(L^T)
            for k in 0..n {
                let (mut head, mut rest) = b.reborrow().split_columns_at(k + 1);
                let mut bk = head.column_mut(k);
                if nonunit {
                    bk.div(a[(k, k)]);
                }
                for j in (k + 1..n).rev() {
                    rest.column_mut(j - k - 1).add_ay(-a[(j, k)], bk.as_view());
                }
                bk.scale(alpha);
            }
        }
    }
    Ok(())
}

// ============================================================================
// TRMM: Triangular matrix multiply
// ============================================================================

/// B := alpha * op(A) * B or B := alpha * B * op(A). Not implemented.
pub fn trmm<T: Real>(
    side: Side,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    alpha: T,
    a: MatrixView<'_, T>,
    b: MatrixViewMut<'_, T>,
) -> Result<()> {
    let _ = (alpha, a, b);
    warn!(?side, ?uplo, ?trans, ?diag, "trmm is a stub");
    Err(Error::not_implemented("trmm"))
}

// ============================================================================
// CBLAS-style slice entry points
// ============================================================================

macro_rules! level3_entry_points {
    ($t:ty, $prec:literal, $gemm:ident, $trsm:ident) => {
        #[doc = concat!($prec, "-precision GEMM on column-major storage; see [`gemm_strided`].")]
        pub fn $gemm(
            transa: Transpose,
            transb: Transpose,
            m: usize,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &[$t],
            ldb: usize,
            beta: $t,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            gemm_strided(transa, transb, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
        }

        #[doc = concat!($prec, "-precision TRSM on column-major storage; B is `m x n`.")]
        pub fn $trsm(
            side: Side,
            uplo: Uplo,
            trans: Transpose,
            diag: Diag,
            m: usize,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &mut [$t],
            ldb: usize,
        ) -> Result<()> {
            let order = match side {
                Side::Left => m,
                Side::Right => n,
            };
            check_operand(stringify!($trsm), "a", a.len(), order, order, lda)?;
            check_operand(stringify!($trsm), "b", b.len(), m, n, ldb)?;
            trsm(
                side,
                uplo,
                trans,
                diag,
                alpha,
                MatrixView::new(a, order, order, lda),
                MatrixViewMut::new(b, m, n, ldb),
            )
        }
    };
}

level3_entry_points!(f32, "Single", sgemm, strsm);
level3_entry_points!(f64, "Double", dgemm, dtrsm);

#[cfg(test)]
mod tests {
    use super::*;
    use linrus_core::OwningMatrix;

    fn mat(rows: usize, cols: usize, row_major: &[f64]) -> OwningMatrix<f64> {
        OwningMatrix::from_row_major(rows, cols, row_major)
    }

    #[test]
    fn test_gemm_identity() {
        let a = mat(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let i = OwningMatrix::<f64>::identity(2);
        let mut c = OwningMatrix::<f64>::zeros(3, 2);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, a.all(), i.all(), 0.0, c.all_mut()).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_sgemm_simple_multiply() {
        // A = [[1,2],[3,4]], B = [[5,6],[7,8]], column-major
        let a = vec![1.0f32, 3.0, 2.0, 4.0];
        let b = vec![5.0f32, 7.0, 6.0, 8.0];
        let mut c = vec![0.0f32; 4];
        sgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut c, 2)
            .unwrap();
        assert_eq!(c, vec![19.0, 43.0, 22.0, 50.0]);
    }

    #[test]
    fn test_gemm_alpha_beta() {
        let a = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = mat(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let mut c = mat(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 2.0, a.all(), b.all(), 3.0, c.all_mut()).unwrap();
        assert_eq!(c, mat(2, 2, &[41.0, 47.0, 89.0, 103.0]));
    }

    #[test]
    fn test_gemm_transposes() {
        let a = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = mat(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let expected = mat(2, 2, &[58.0, 64.0, 139.0, 154.0]);
        let at = a.all().transpose();
        let bt = b.all().transpose();

        let cases = [
            (Transpose::NoTrans, Transpose::NoTrans, a.all(), b.all()),
            (Transpose::Trans, Transpose::NoTrans, at.all(), b.all()),
            (Transpose::NoTrans, Transpose::Trans, a.all(), bt.all()),
            (Transpose::Trans, Transpose::Trans, at.all(), bt.all()),
        ];
        for (ta, tb, av, bv) in cases {
            let mut c = OwningMatrix::<f64>::zeros(2, 2);
            gemm(ta, tb, 1.0, av, bv, 0.0, c.all_mut()).unwrap();
            assert_eq!(c, expected, "{:?} {:?}", ta, tb);
        }
    }

    #[test]
    fn test_gemm_zero_alpha_scales_only() {
        let a = mat(1, 1, &[f64::NAN]);
        let b = mat(1, 2, &[1.0, 2.0]);
        let mut c = mat(1, 2, &[f64::INFINITY, 2.0]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 0.0, a.all(), b.all(), 0.0, c.all_mut()).unwrap();
        assert_eq!(c.as_slice(), &[0.0, 0.0]);

        let mut c = mat(1, 2, &[1.0, 2.0]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 0.0, a.all(), b.all(), 0.5, c.all_mut()).unwrap();
        assert_eq!(c.as_slice(), &[0.5, 1.0]);
    }

    #[test]
    fn test_gemm_empty_inner_dimension() {
        let a = OwningMatrix::<f64>::zeros(2, 0);
        let b = OwningMatrix::<f64>::zeros(0, 2);
        let mut c = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, a.all(), b.all(), 2.0, c.all_mut()).unwrap();
        assert_eq!(c, mat(2, 2, &[2.0, 4.0, 6.0, 8.0]));

        // empty C: A and B are never read
        let a = mat(3, 2, &[f64::NAN; 6]);
        let b = OwningMatrix::<f64>::zeros(2, 0);
        let mut c = OwningMatrix::<f64>::zeros(3, 0);
        gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, a.all(), b.all(), 0.0, c.all_mut()).unwrap();
        let a = OwningMatrix::<f64>::zeros(2, 0);
        let b = mat(2, 3, &[f64::NAN; 6]);
        let mut c = OwningMatrix::<f64>::zeros(0, 3);
        gemm(Transpose::Trans, Transpose::NoTrans, 1.0, a.all(), b.all(), 0.0, c.all_mut()).unwrap();
        assert!(c.is_empty());

        let mut c = [5.0f64; 2];
        dgemm(Transpose::NoTrans, Transpose::Trans, 0, 2, 3, 1.0, &[], 1, &[1.0; 6], 2, 0.0, &mut c, 1)
            .unwrap();
        assert_eq!(c, [5.0, 5.0]);
    }

    #[test]
    fn test_trsm_empty() {
        let empty = OwningMatrix::<f64>::zeros(0, 0);
        let a = mat(2, 2, &[2.0, 0.0, 1.0, 4.0]);
        for trans in [Transpose::NoTrans, Transpose::Trans] {
            for uplo in [Uplo::Upper, Uplo::Lower] {
                // Left with no rows: A is 0x0
                let mut b = OwningMatrix::<f64>::zeros(0, 4);
                trsm(Side::Left, uplo, trans, Diag::NonUnit, 1.0, empty.all(), b.all_mut()).unwrap();
                // Right with no columns: A is 0x0
                let mut b = OwningMatrix::<f64>::zeros(4, 0);
                trsm(Side::Right, uplo, trans, Diag::Unit, 0.0, empty.all(), b.all_mut()).unwrap();
                // no right-hand sides against a real A
                let mut b = OwningMatrix::<f64>::zeros(2, 0);
                trsm(Side::Left, uplo, trans, Diag::NonUnit, 1.0, a.all(), b.all_mut()).unwrap();
                let mut b = OwningMatrix::<f64>::zeros(0, 2);
                trsm(Side::Right, uplo, trans, Diag::NonUnit, 1.0, a.all(), b.all_mut()).unwrap();
            }
        }
    }

    #[test]
    fn test_gemm_shape_mismatch() {
        let a = OwningMatrix::<f64>::zeros(2, 3);
        let b = OwningMatrix::<f64>::zeros(2, 2);
        let mut c = OwningMatrix::<f64>::zeros(2, 2);
        let err = gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, a.all(), b.all(), 0.0, c.all_mut())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { routine: "gemm", .. }));
    }

    #[test]
    fn test_gemm_strided_checks_storage() {
        let a = [1.0f64; 3];
        let b = [1.0f64; 4];
        let mut c = [0.0f64; 4];
        let err = dgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut c, 2)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        let err = dgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2, 1.0, &b, 1, &b, 2, 0.0, &mut c, 2)
            .unwrap_err();
        assert!(err.to_string().contains("lda"));
    }

    #[test]
    fn test_gemm_submatrix_operands() {
        // multiply the bottom-right 2x2 blocks of two 3x3 matrices into a padded C
        let a = mat(3, 3, &[9.0, 9.0, 9.0, 9.0, 1.0, 2.0, 9.0, 3.0, 4.0]);
        let b = mat(3, 3, &[9.0, 9.0, 9.0, 9.0, 5.0, 6.0, 9.0, 7.0, 8.0]);
        let mut storage = vec![-1.0f64; 8];
        let c = MatrixViewMut::new(&mut storage, 2, 2, 4);
        gemm(
            Transpose::NoTrans,
            Transpose::NoTrans,
            1.0,
            a.all().bottom_right(2, 2),
            b.all().bottom_right(2, 2),
            0.0,
            c,
        )
        .unwrap();
        assert_eq!(storage, vec![19.0, 43.0, -1.0, -1.0, 22.0, 50.0, -1.0, -1.0]);
    }

    fn upper() -> OwningMatrix<f64> {
        mat(3, 3, &[2.0, 1.0, -1.0, 0.0, 4.0, 3.0, 0.0, 0.0, 5.0])
    }

    #[test]
    fn test_trsm_left_upper() {
        // U * X = B with X = [1, 2, 3]^T
        let u = upper();
        let mut b = mat(3, 1, &[1.0, 17.0, 15.0]);
        trsm(Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 1.0, u.all(), b.all_mut())
            .unwrap();
        assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_trsm_ignores_other_triangle_and_unit_diagonal() {
        let mut u = upper();
        u[(2, 0)] = f64::NAN;
        u[(1, 0)] = f64::NAN;
        let mut b = mat(3, 1, &[1.0, 2.0, 3.0]);
        trsm(Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 1.0, u.all(), b.all_mut())
            .unwrap();
        assert!(b.as_slice().iter().all(|v| v.is_finite()));

        // unit diagonal: the stored diagonal is never read
        let l = mat(2, 2, &[f64::NAN, 0.0, 3.0, f64::NAN]);
        let mut b = mat(2, 1, &[1.0, 5.0]);
        trsm(Side::Left, Uplo::Lower, Transpose::NoTrans, Diag::Unit, 1.0, l.all(), b.all_mut())
            .unwrap();
        assert_eq!(b.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_trsm_right_lower_trans() {
        // X * L^T = B
        let l = mat(2, 2, &[2.0, 0.0, 1.0, 4.0]);
        let x = mat(1, 2, &[3.0, 5.0]);
        // B = X * L^T = [6, 23]
        let mut b = mat(1, 2, &[6.0, 23.0]);
        trsm(Side::Right, Uplo::Lower, Transpose::Trans, Diag::NonUnit, 1.0, l.all(), b.all_mut())
            .unwrap();
        assert_eq!(b, x);
    }

    #[test]
    fn test_trsm_alpha() {
        let u = upper();
        let mut b = mat(3, 1, &[0.5, 8.5, 7.5]);
        dtrsm(
            Side::Left,
            Uplo::Upper,
            Transpose::NoTrans,
            Diag::NonUnit,
            3,
            1,
            2.0,
            u.as_slice(),
            3,
            b.as_mut_slice(),
            3,
        )
        .unwrap();
        assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0]);

        let mut b = mat(3, 1, &[f64::NAN, 1.0, 1.0]);
        trsm(Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, 0.0, u.all(), b.all_mut())
            .unwrap();
        assert_eq!(b.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_trsm_shape_mismatch() {
        let a = OwningMatrix::<f64>::identity(3);
        let mut b = OwningMatrix::<f64>::zeros(2, 3);
        let err = trsm(Side::Left, Uplo::Lower, Transpose::NoTrans, Diag::Unit, 1.0, a.all(), b.all_mut())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { routine: "trsm", .. }));
        trsm(Side::Right, Uplo::Lower, Transpose::NoTrans, Diag::Unit, 1.0, a.all(), b.all_mut())
            .unwrap();
    }

    #[test]
    fn test_trmm_is_a_stub() {
        let a = OwningMatrix::<f64>::identity(2);
        let mut b = OwningMatrix::<f64>::identity(2);
        let err = trmm(Side::Left, Uplo::Upper, Transpose::NoTrans, Diag::Unit, 1.0, a.all(), b.all_mut())
            .unwrap_err();
        assert_eq!(err, Error::not_implemented("trmm"));
    }
}
