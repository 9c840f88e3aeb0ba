//! Argument checks shared by the slice entry points.

use linrus_core::{Error, Result};
use tracing::debug;

pub(crate) fn shape_error(routine: &'static str, reason: String) -> Error {
    debug!(routine, %reason, "argument check failed");
    Error::invalid_argument(routine, reason)
}

/// Checks that `data` can hold a `rows x cols` column-major operand with
/// leading dimension `ld`.
pub(crate) fn check_operand(
    routine: &'static str,
    name: &str,
    len: usize,
    rows: usize,
    cols: usize,
    ld: usize,
) -> Result<()> {
    if ld < rows.max(1) {
        return Err(shape_error(
            routine,
            format!("ld{} = {} is smaller than its {} rows", name, ld, rows),
        ));
    }
    if rows > 0 && cols > 0 && len < ld * (cols - 1) + rows {
        return Err(shape_error(
            routine,
            format!(
                "{} ({}x{}, ld {}) needs {} elements, slice has {}",
                name,
                rows,
                cols,
                ld,
                ld * (cols - 1) + rows,
                len
            ),
        ));
    }
    Ok(())
}

/// Checks that `data` holds `n` elements spaced `inc` apart. Written
/// vectors of more than one element need a nonzero increment.
pub(crate) fn check_vector(
    routine: &'static str,
    name: &str,
    len: usize,
    n: usize,
    inc: isize,
    written: bool,
) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    if written && inc == 0 && n > 1 {
        return Err(shape_error(routine, format!("inc{} must not be zero", name)));
    }
    let needed = (n - 1) * inc.unsigned_abs() + 1;
    if len < needed {
        return Err(shape_error(
            routine,
            format!(
                "{} ({} elements, inc {}) needs {} slots, slice has {}",
                name, n, inc, needed, len
            ),
        ));
    }
    Ok(())
}
