//! BLAS Level 1: Vector-vector operations.
//!
//! The generic kernels take strided views; the `s*`/`d*` functions are the
//! CBLAS-shaped entry points over `(n, slice, inc)` triples, with signed
//! increments following the BLAS convention.

use linrus_core::{Real, StridedView, StridedViewMut};

// ============================================================================
// Generic kernels over views
// ============================================================================

/// y := x
#[inline]
pub fn copy<T: Copy>(x: StridedView<'_, T>, mut y: StridedViewMut<'_, T>) {
    y.copy(x);
}

/// x <-> y
#[inline]
pub fn swap<T: Copy>(mut x: StridedViewMut<'_, T>, mut y: StridedViewMut<'_, T>) {
    x.swap(&mut y);
}

/// y := alpha * x + y (nothing happens when alpha is zero)
#[inline]
pub fn axpy<T: Real>(alpha: T, x: StridedView<'_, T>, mut y: StridedViewMut<'_, T>) {
    y.add_ay(alpha, x);
}

/// x := alpha * x (zero alpha stores exact zeros)
#[inline]
pub fn scal<T: Real>(alpha: T, mut x: StridedViewMut<'_, T>) {
    x.scale(alpha);
}

/// x^T * y, accumulated left to right.
#[inline]
pub fn dot<T: Real>(x: StridedView<'_, T>, y: StridedView<'_, T>) -> T {
    x.dot(y)
}

/// sum(|x_i|)
#[inline]
pub fn asum<T: Real>(x: StridedView<'_, T>) -> T {
    x.asum()
}

/// Index of the first element of largest magnitude (0 for an empty view).
#[inline]
pub fn iamax<T: Real>(x: StridedView<'_, T>) -> usize {
    x.iamax()
}

/// Euclidean norm without intermediate overflow or underflow.
///
/// Magnitudes are sorted into three accumulators: above `tbig` they are
/// scaled down by `sbig` before squaring, below `tsml` scaled up by `ssml`,
/// and in between squared directly. Small values are dropped once a big one
/// has been seen.
pub fn nrm2<T: Real>(x: StridedView<'_, T>) -> T {
    let c = T::constants();
    if x.is_empty() {
        return c.zero;
    }

    let mut notbig = true;
    let (mut asml, mut amed, mut abig) = (c.zero, c.zero, c.zero);
    for &xi in x.iter() {
        let ax = xi.abs();
        if ax > c.tbig {
            let s = ax * c.sbig;
            abig += s * s;
            notbig = false;
        } else if ax < c.tsml {
            if notbig {
                let s = ax * c.ssml;
                asml += s * s;
            }
        } else {
            amed += ax * ax;
        }
    }

    let (scl, sumsq) = if abig > c.zero {
        // Medium mass still counts when it overflowed or went NaN.
        if amed > c.zero || amed > c.huge || amed.is_nan() {
            abig += (amed * c.sbig) * c.sbig;
        }
        (c.one / c.sbig, abig)
    } else if asml > c.zero {
        if amed > c.zero || amed > c.huge || amed.is_nan() {
            let amed = amed.sqrt();
            let asml = asml.sqrt() / c.ssml;
            let (ymin, ymax) = if asml > amed { (amed, asml) } else { (asml, amed) };
            let r = ymin / ymax;
            (c.one, ymax * ymax * (c.one + r * r))
        } else {
            (c.one / c.ssml, asml)
        }
    } else {
        (c.one, amed)
    };
    scl * sumsq.sqrt()
}

/// Plane rotation: x' = c*x + s*y, y' = c*y - s*x.
pub fn rot<T: Real>(mut x: StridedViewMut<'_, T>, mut y: StridedViewMut<'_, T>, c: T, s: T) {
    assert_eq!(x.len(), y.len(), "rot between views of different lengths");
    for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
        let (a, b) = (*xi, *yi);
        *xi = c * a + s * b;
        *yi = c * b - s * a;
    }
}

// ============================================================================
// CBLAS-style slice entry points
// ============================================================================

macro_rules! level1_entry_points {
    (
        $t:ty, $prec:literal,
        $copy:ident, $swap:ident, $axpy:ident, $scal:ident, $dot:ident,
        $asum:ident, $nrm2:ident, $rot:ident, $iamax:ident
    ) => {
        #[doc = concat!($prec, "-precision copy: y := x")]
        #[inline]
        pub fn $copy(n: usize, x: &[$t], incx: isize, y: &mut [$t], incy: isize) {
            copy(StridedView::with_stride(x, n, incx), StridedViewMut::with_stride(y, n, incy));
        }

        #[doc = concat!($prec, "-precision swap: x <-> y")]
        #[inline]
        pub fn $swap(n: usize, x: &mut [$t], incx: isize, y: &mut [$t], incy: isize) {
            swap(StridedViewMut::with_stride(x, n, incx), StridedViewMut::with_stride(y, n, incy));
        }

        #[doc = concat!($prec, "-precision AXPY: y := alpha * x + y")]
        #[inline]
        pub fn $axpy(n: usize, alpha: $t, x: &[$t], incx: isize, y: &mut [$t], incy: isize) {
            axpy(alpha, StridedView::with_stride(x, n, incx), StridedViewMut::with_stride(y, n, incy));
        }

        #[doc = concat!($prec, "-precision scale: x := alpha * x")]
        #[inline]
        pub fn $scal(n: usize, alpha: $t, x: &mut [$t], incx: isize) {
            scal(alpha, StridedViewMut::with_stride(x, n, incx));
        }

        #[doc = concat!($prec, "-precision dot product: x^T * y")]
        #[inline]
        pub fn $dot(n: usize, x: &[$t], incx: isize, y: &[$t], incy: isize) -> $t {
            dot(StridedView::with_stride(x, n, incx), StridedView::with_stride(y, n, incy))
        }

        #[doc = concat!($prec, "-precision absolute sum")]
        #[inline]
        pub fn $asum(n: usize, x: &[$t], incx: isize) -> $t {
            asum(StridedView::with_stride(x, n, incx))
        }

        #[doc = concat!($prec, "-precision Euclidean norm")]
        #[inline]
        pub fn $nrm2(n: usize, x: &[$t], incx: isize) -> $t {
            nrm2(StridedView::with_stride(x, n, incx))
        }

        #[doc = concat!($prec, "-precision plane rotation")]
        #[inline]
        pub fn $rot(n: usize, x: &mut [$t], incx: isize, y: &mut [$t], incy: isize, c: $t, s: $t) {
            rot(StridedViewMut::with_stride(x, n, incx), StridedViewMut::with_stride(y, n, incy), c, s);
        }

        #[doc = concat!($prec, "-precision index of max |x_i| (0-based)")]
        #[inline]
        pub fn $iamax(n: usize, x: &[$t], incx: isize) -> usize {
            iamax(StridedView::with_stride(x, n, incx))
        }
    };
}

level1_entry_points!(f32, "Single", scopy, sswap, saxpy, sscal, sdot, sasum, snrm2, srot, isamax);
level1_entry_points!(f64, "Double", dcopy, dswap, daxpy, dscal, ddot, dasum, dnrm2, drot, idamax);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sdot() {
        let x = vec![1.0f32, 2.0, 3.0, 4.0];
        let y = vec![5.0f32, 6.0, 7.0, 8.0];
        assert_eq!(sdot(4, &x, 1, &y, 1), 70.0);
    }

    #[test]
    fn test_ddot_symmetric() {
        let x = vec![1.5f64, -2.0, 3.25];
        let y = vec![4.0f64, 5.5, -6.0];
        assert_eq!(ddot(3, &x, 1, &y, 1), ddot(3, &y, 1, &x, 1));
    }

    #[test]
    fn test_sdot_strided() {
        let x = vec![1.0f32, 0.0, 2.0, 0.0, 3.0];
        let y = vec![4.0f32, 0.0, 5.0, 0.0, 6.0];
        assert_eq!(sdot(3, &x, 2, &y, 2), 32.0);
    }

    #[test]
    fn test_negative_increment() {
        // element 0 of a negative-increment vector is the last slot
        let x = vec![1.0f64, 2.0, 3.0];
        let y = vec![1.0f64, 10.0, 100.0];
        assert_eq!(ddot(3, &x, -1, &y, 1), 3.0 + 20.0 + 100.0);

        let mut z = vec![0.0f64; 3];
        dcopy(3, &x, 1, &mut z, -1);
        assert_eq!(z, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_saxpy() {
        let x = vec![1.0f32, 2.0, 3.0, 4.0];
        let mut y = vec![10.0f32, 20.0, 30.0, 40.0];
        saxpy(4, 2.0, &x, 1, &mut y, 1);
        assert_eq!(y, vec![12.0, 24.0, 36.0, 48.0]);
    }

    #[test]
    fn test_axpy_zero_alpha_ignores_x() {
        let x = vec![f64::NAN, f64::INFINITY];
        let mut y = vec![1.0f64, 2.0];
        daxpy(2, 0.0, &x, 1, &mut y, 1);
        assert_eq!(y, vec![1.0, 2.0]);
    }

    #[test]
    fn test_sscal_strided() {
        let mut x = vec![1.0f32, 0.0, 2.0, 0.0, 3.0];
        sscal(3, 3.0, &mut x, 2);
        assert_eq!(x, vec![3.0, 0.0, 6.0, 0.0, 9.0]);
    }

    #[test]
    fn test_scal_round_trip_and_zero() {
        let mut x = vec![1.0f64, -2.0, 4.0];
        dscal(3, 4.0, &mut x, 1);
        dscal(3, 0.25, &mut x, 1);
        assert_eq!(x, vec![1.0, -2.0, 4.0]);

        let mut y = vec![f64::NAN, f64::NEG_INFINITY];
        dscal(2, 0.0, &mut y, 1);
        assert_eq!(y, vec![0.0, 0.0]);
    }

    #[test]
    fn test_copy_preserves_sum() {
        let x: Vec<f64> = (1..=6).map(|i| i as f64 * 0.5).collect();
        let mut y = vec![0.0f64; 12];
        dcopy(6, &x, 1, &mut y, 2);
        assert_eq!(
            StridedView::with_stride(&y, 6, 2).sum(),
            StridedView::new(&x).sum()
        );
    }

    #[test]
    fn test_swap_twice_is_identity() {
        let mut x = vec![1.0f32, 2.0, 3.0];
        let mut y = vec![4.0f32, 5.0, 6.0];
        sswap(3, &mut x, 1, &mut y, -1);
        assert_eq!(x, vec![6.0, 5.0, 4.0]);
        sswap(3, &mut x, 1, &mut y, -1);
        assert_eq!(x, vec![1.0, 2.0, 3.0]);
        assert_eq!(y, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_sasum_and_isamax() {
        let x = vec![-1.0f32, 2.0, -5.0, 5.0];
        assert_eq!(sasum(4, &x, 1), 13.0);
        assert_eq!(isamax(4, &x, 1), 2);
        assert_eq!(isamax(0, &x, 1), 0);
    }

    #[test]
    fn test_nrm2_medium_matches_ssq() {
        let x = vec![3.0f64, -4.0, 12.0];
        let v = StridedView::new(&x);
        assert_relative_eq!(dnrm2(3, &x, 1), 13.0, max_relative = 1e-15);
        assert_relative_eq!(nrm2(v) * nrm2(v), v.ssq(), max_relative = 1e-14);
        assert_relative_eq!(snrm2(2, &[3.0f32, 0.0, 4.0], 2), 5.0, max_relative = 1e-6);
    }

    #[test]
    fn test_nrm2_huge_and_tiny() {
        let big = [1e300f64];
        assert!(StridedView::new(&big).ssq().is_infinite());
        assert_relative_eq!(dnrm2(1, &big, 1), 1e300, max_relative = 1e-15);

        let both = [1e300f64, -1e300];
        assert_relative_eq!(dnrm2(2, &both, 1), 1e300 * 2f64.sqrt(), max_relative = 1e-15);

        let tiny = [3e-300f64, 4e-300];
        assert_eq!(StridedView::new(&tiny).ssq(), 0.0);
        assert_relative_eq!(dnrm2(2, &tiny, 1), 5e-300, max_relative = 1e-15);

        // small values vanish next to a big one, medium ones still count
        let mixed = [1e-300f64, 1.0, 1e200];
        assert_relative_eq!(dnrm2(3, &mixed, 1), 1e200, max_relative = 1e-15);

        let small_and_medium = [1e-170f64, 3.0, 4.0];
        assert_relative_eq!(dnrm2(3, &small_and_medium, 1), 5.0, max_relative = 1e-15);
    }

    #[test]
    fn test_nrm2_empty_and_nan() {
        assert_eq!(dnrm2(0, &[], 1), 0.0);
        assert!(dnrm2(2, &[1.0, f64::NAN], 1).is_nan());
    }

    #[test]
    fn test_rot() {
        let mut x = vec![1.0f64, 2.0];
        let mut y = vec![3.0f64, 4.0];
        drot(2, &mut x, 1, &mut y, 1, 0.6, 0.8);
        assert_relative_eq!(x[0], 0.6 + 2.4, max_relative = 1e-15);
        assert_relative_eq!(y[0], 1.8 - 0.8, max_relative = 1e-15);
        assert_relative_eq!(x[1], 1.2 + 3.2, max_relative = 1e-15);
        assert_relative_eq!(y[1], 2.4 - 1.6, max_relative = 1e-15);

        // a rotation by theta then -theta restores the vectors
        drot(2, &mut x, 1, &mut y, 1, 0.6, -0.8);
        assert_relative_eq!(x[0], 1.0, max_relative = 1e-14);
        assert_relative_eq!(y[1], 4.0, max_relative = 1e-14);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut y: Vec<f32> = vec![];
        saxpy(0, 2.0, &[], 1, &mut y, 1);
        sscal(0, 0.0, &mut y, 1);
        assert_eq!(sdot(0, &[], 1, &[], 1), 0.0);
        assert_eq!(sasum(0, &[], 7), 0.0);

        // n = 0 leaves non-empty storage alone, whatever the increments
        let mut a = vec![1.0f64, 2.0];
        let mut b = vec![3.0f64, 4.0];
        dcopy(0, &a, 1, &mut b, -1);
        dswap(0, &mut a, 1, &mut b, 1);
        drot(0, &mut a, 2, &mut b, 1, 0.0, 1.0);
        copy::<f64>(StridedView::new(&[]), StridedViewMut::new(&mut []));
        rot(StridedViewMut::with_stride(&mut a, 0, 1), StridedViewMut::with_stride(&mut b, 0, 1), 0.0, 1.0);
        assert_eq!(a, vec![1.0, 2.0]);
        assert_eq!(b, vec![3.0, 4.0]);
        assert_eq!(dnrm2(0, &[], 1), 0.0);
        assert_eq!(idamax(0, &[], 1), 0);
    }
}
