//! # Linrus Core
//!
//! Storage abstractions shared by the linrus kernel crates.
//!
//! This crate provides:
//! - **Strided views**: [`StridedView`] / [`StridedViewMut`], non-owning
//!   windows of `len` elements spaced `inc` apart (negative increments
//!   follow the BLAS convention).
//! - **Matrix views**: [`MatrixView`] / [`MatrixViewMut`], column-major
//!   windows with a leading dimension, plus the row/column cursors
//!   [`ViewIterator`] / [`ViewIteratorMut`].
//! - **Owning containers**: [`OwningVector`] / [`OwningMatrix`].
//! - **Numeric constants**: the [`Real`] element trait and its lazily
//!   computed [`NumericConstants`] table.
//! - **CBLAS operand enums**: [`Transpose`], [`Uplo`], [`Side`], [`Diag`].

pub mod cursor;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod owned;
pub mod rng;
pub mod scalar;
pub mod vector;

pub use cursor::{Axis, ViewIterator, ViewIteratorMut};
pub use error::{Error, Result};
pub use layout::{Diag, Side, Transpose, Uplo};
pub use matrix::{MatrixView, MatrixViewMut};
pub use owned::{OwningMatrix, OwningVector};
pub use rng::SplitMix64;
pub use scalar::{constants, NumericConstants, Real};
pub use vector::{Iter, IterMut, StridedView, StridedViewMut};
