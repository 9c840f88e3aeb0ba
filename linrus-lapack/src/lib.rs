//! # Linrus LAPACK
//!
//! LAPACK-style factorizations on top of `linrus-blas`.
//!
//! - **LU**: [`getrf2`] (recursive, partial pivoting) and the [`getrf`] driver
//! - **Interfaces only**: `potrf`, `potrf2`, `potf2`, `getrs`, `gesv`,
//!   `laswp`, `ilaenv` return [`Error::NotImplemented`]
//!
//! ```
//! use linrus_lapack::{getrf2, OwningMatrix};
//!
//! let mut a = OwningMatrix::from_row_major(2, 2, &[4.0, 3.0, 6.0, 3.0]);
//! let mut ipiv = [0usize; 2];
//! let info = getrf2(a.all_mut(), &mut ipiv).unwrap();
//! assert_eq!(info, 0);
//! assert_eq!(ipiv, [1, 1]);
//! assert_eq!(a[(0, 0)], 6.0);
//! ```

pub mod lapack;

pub use lapack::{
    gesv, getrf, getrf2, getrs, ilaenv, laswp, potf2, potrf, potrf2, TuningParameter,
};
pub use linrus_core::{Error, MatrixView, MatrixViewMut, OwningMatrix, Real, Result};
