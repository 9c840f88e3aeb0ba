//! CBLAS-style operand specifiers.
//!
//! Storage is always column-major in linrus, so unlike CBLAS there is no
//! layout enum: element (r, c) of a matrix lives at `r + ld * c`. The
//! discriminants keep the CBLAS values so they can be handed to a C library
//! unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transpose operation for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = 111,
    /// Transpose.
    Trans = 112,
}

impl Transpose {
    #[inline(always)]
    pub fn is_trans(self) -> bool {
        self == Transpose::Trans
    }

    /// Shape of `op(A)` for an `rows x cols` matrix A.
    #[inline(always)]
    pub fn apply(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Transpose::NoTrans => (rows, cols),
            Transpose::Trans => (cols, rows),
        }
    }
}

impl From<bool> for Transpose {
    fn from(trans: bool) -> Self {
        if trans {
            Transpose::Trans
        } else {
            Transpose::NoTrans
        }
    }
}

/// BLAS triangle specifier (upper/lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

/// BLAS side specifier (left/right multiplication).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Side {
    #[default]
    Left = 141,
    Right = 142,
}

/// BLAS diagonal specifier (unit/non-unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    Unit = 132,
}

impl Diag {
    #[inline(always)]
    pub fn is_unit(self) -> bool {
        self == Diag::Unit
    }
}

impl From<bool> for Diag {
    /// `true` selects a unit diagonal.
    fn from(unit: bool) -> Self {
        if unit {
            Diag::Unit
        } else {
            Diag::NonUnit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_apply() {
        assert_eq!(Transpose::NoTrans.apply(3, 2), (3, 2));
        assert_eq!(Transpose::Trans.apply(3, 2), (2, 3));
        assert_eq!(Transpose::from(true), Transpose::Trans);
    }

    #[test]
    fn test_cblas_codes() {
        assert_eq!(Transpose::Trans as u32, 112);
        assert_eq!(Uplo::Lower as u32, 122);
        assert_eq!(Side::Right as u32, 142);
        assert_eq!(Diag::Unit as u32, 132);
        assert!(Diag::from(true).is_unit());
    }
}
