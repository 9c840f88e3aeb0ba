//! BLAS Level 2: Matrix-vector operations.
//!
//! `gemv` accumulates whole lanes of A into y (columns for `NoTrans`, rows
//! for `Trans`), so every inner loop is a Level-1 `axpy`.

use linrus_core::{Error, MatrixView, Real, Result, StridedView, StridedViewMut, Transpose};
use tracing::{debug, trace};

use crate::check::{check_operand, check_vector};

// ============================================================================
// GEMV: General matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// y := alpha * op(A) * x + beta * y
///
/// y is scaled by beta first (a zero beta clears NaN/Inf in y); with a zero
/// alpha, A and x are not read.
pub fn gemv<T: Real>(
    trans: Transpose,
    alpha: T,
    a: MatrixView<'_, T>,
    x: StridedView<'_, T>,
    beta: T,
    mut y: StridedViewMut<'_, T>,
) -> Result<()> {
    let (m, n) = trans.apply(a.nrows(), a.ncols());
    trace!(?trans, m, n, "gemv");
    if x.len() != n || y.len() != m {
        debug!(m, n, x_len = x.len(), y_len = y.len(), "gemv: operand shapes disagree");
        return Err(Error::invalid_argument(
            "gemv",
            format!(
                "op(A) is {}x{} but x has {} and y has {} elements",
                m,
                n,
                x.len(),
                y.len()
            ),
        ));
    }

    y.scale(beta);
    if alpha == T::zero() {
        return Ok(());
    }

    let lanes = match trans {
        Transpose::NoTrans => a.columns(),
        Transpose::Trans => a.rows(),
    };
    for (lane, &xk) in lanes.zip(x.iter()) {
        y.add_ay(alpha * xk, lane);
    }
    Ok(())
}

macro_rules! gemv_entry_point {
    ($t:ty, $name:ident, $prec:literal) => {
        #[doc = concat!($prec, "-precision GEMV on column-major `(a, lda)` storage.")]
        ///
        /// `m x n` is the shape of A itself; x and y take BLAS increments.
        /// Storage too short for its shape is reported as `InvalidArgument`.
        pub fn $name(
            trans: Transpose,
            m: usize,
            n: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            x: &[$t],
            incx: isize,
            beta: $t,
            y: &mut [$t],
            incy: isize,
        ) -> Result<()> {
            let routine = stringify!($name);
            let (ylen, xlen) = trans.apply(m, n);
            check_operand(routine, "a", a.len(), m, n, lda)?;
            check_vector(routine, "x", x.len(), xlen, incx, false)?;
            check_vector(routine, "y", y.len(), ylen, incy, true)?;
            gemv(
                trans,
                alpha,
                MatrixView::new(a, m, n, lda),
                StridedView::with_stride(x, xlen, incx),
                beta,
                StridedViewMut::with_stride(y, ylen, incy),
            )
        }
    };
}

gemv_entry_point!(f32, sgemv, "Single");
gemv_entry_point!(f64, dgemv, "Double");
