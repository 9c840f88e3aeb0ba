// BLAS functions match CBLAS signatures; many parameters are inherent to the API.
#![allow(clippy::too_many_arguments)]

//! # Linrus BLAS
//!
//! Generic, pure Rust BLAS kernels over the views of `linrus-core`.
//!
//! Every kernel is generic over [`Real`] and takes strided or matrix views;
//! the `s*`/`d*` functions keep the CBLAS calling shape over
//! `(n, slice, inc)` and `(slice, ld)` operands (column-major, signed
//! increments).
//!
//! ## BLAS Levels
//!
//! - **Level 1** (vector-vector): `copy`, `swap`, `axpy`, `scal`, `dot`,
//!   `asum`, `nrm2`, `rot`, `iamax`
//! - **Level 2** (matrix-vector): `gemv`
//! - **Level 3** (matrix-matrix): `gemm`, `gemm_strided`, `trsm`
//!   (`trmm` is declared but not implemented)
//!
//! ## Example
//!
//! ```
//! use linrus_blas::{level3, OwningMatrix, Transpose};
//!
//! let a = OwningMatrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]);
//! let b = OwningMatrix::from_row_major(2, 2, &[5.0, 6.0, 7.0, 8.0]);
//! let mut c = OwningMatrix::<f64>::zeros(2, 2);
//!
//! level3::gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, a.all(), b.all(), 0.0, c.all_mut())
//!     .unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 43.0, 22.0, 50.0]);
//! ```

mod check;
pub mod level1;
pub mod level2;
pub mod level3;

// Re-export the view and operand types the kernels are written against
pub use linrus_core::{
    Diag, Error, MatrixView, MatrixViewMut, OwningMatrix, OwningVector, Real, Result, Side,
    StridedView, StridedViewMut, Transpose, Uplo,
};
