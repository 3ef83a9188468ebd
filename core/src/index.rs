//! Mapping linear indices onto a two-dimensional grid.
//!
//! Only the column count of a shape is used, so indices past
//! `rows * columns` and negative indices map without error:
//!
//! ```rust
//! use ittools_core::index::{enum_to_2dix, Shape2D};
//!
//! assert_eq!(enum_to_2dix(5, Shape2D::new(3, 2)).unwrap(), (2, 1));
//! assert_eq!(enum_to_2dix(-1, Shape2D::new(2, 2)).unwrap(), (-1, 1));
//! ```

use ittools_common::{CommonError, Result};
use serde::{Deserialize, Serialize};

/// A 2D shape as `(rows, columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape2D {
    pub rows: i64,
    pub columns: i64,
}

impl Shape2D {
    pub fn new(rows: i64, columns: i64) -> Self {
        Self { rows, columns }
    }
}

impl From<(i64, i64)> for Shape2D {
    fn from((rows, columns): (i64, i64)) -> Self {
        Self::new(rows, columns)
    }
}

/// Map `number` to a `(row, column)` pair for a grid of `shape`.
///
/// Uses floored division and modulo, so the column always has the sign of
/// `shape.columns`. Fails when `shape.columns` is zero, or when the row
/// does not fit in an `i64` (`i64::MIN` with `-1` columns).
pub fn enum_to_2dix<S: Into<Shape2D>>(number: i64, shape: S) -> Result<(i64, i64)> {
    let shape = shape.into();
    validate_columns(shape.columns)?;
    checked_index(number, shape.columns)
}

fn checked_index(number: i64, columns: i64) -> Result<(i64, i64)> {
    floor_div_mod(number, columns).ok_or_else(|| {
        CommonError::invalid_argument(format!(
            "index {number} overflows a grid with {columns} columns"
        ))
    })
}

fn validate_columns(columns: i64) -> Result<()> {
    if columns == 0 {
        return Err(CommonError::invalid_argument(
            "shape must have a non-zero column count",
        ));
    }
    Ok(())
}

/// Floored quotient and remainder, `None` on zero or overflow.
fn floor_div_mod(number: i64, divisor: i64) -> Option<(i64, i64)> {
    let quotient = number.checked_div(divisor)?;
    let remainder = number.checked_rem(divisor)?;
    if remainder != 0 && ((remainder < 0) != (divisor < 0)) {
        Some((quotient - 1, remainder + divisor))
    } else {
        Some((quotient, remainder))
    }
}

/// Callable-style adapter binding a fixed shape to [`enum_to_2dix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Index2D {
    shape: Shape2D,
}

impl Index2D {
    /// Bind `shape`, failing when it has no columns.
    pub fn new<S: Into<Shape2D>>(shape: S) -> Result<Self> {
        let shape = shape.into();
        validate_columns(shape.columns)?;
        Ok(Self { shape })
    }

    /// The bound shape.
    pub fn shape(&self) -> Shape2D {
        self.shape
    }

    /// Map `number` to a `(row, column)` pair.
    #[inline]
    pub fn index(&self, number: i64) -> Result<(i64, i64)> {
        checked_index(number, self.shape.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_two() {
        let mapped: Vec<(i64, i64)> = (0..6)
            .map(|i| enum_to_2dix(i, (3, 2)).unwrap())
            .collect();
        assert_eq!(mapped, [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_three_by_four() {
        assert_eq!(enum_to_2dix(7, (3, 4)).unwrap(), (1, 3));
        assert_eq!(enum_to_2dix(11, (3, 4)).unwrap(), (2, 3));
    }

    #[test]
    fn test_negative_numbers_use_floored_division() {
        assert_eq!(enum_to_2dix(-1, (2, 2)).unwrap(), (-1, 1));
        assert_eq!(enum_to_2dix(-1, (1, 2)).unwrap(), (-1, 1));
        assert_eq!(enum_to_2dix(-4, (1, 3)).unwrap(), (-2, 2));
        assert_eq!(enum_to_2dix(5, (1, -2)).unwrap(), (-3, -1));
    }

    #[test]
    fn test_rows_are_not_bounds_checked() {
        assert_eq!(enum_to_2dix(100, (1, 3)).unwrap(), (33, 1));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = enum_to_2dix(3, (3, 0)).unwrap_err();
        assert!(matches!(err, CommonError::InvalidArgument { .. }));
        assert!(Index2D::new((3, 0)).is_err());
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(floor_div_mod(i64::MIN, 2), Some((i64::MIN / 2, 0)));
        assert_eq!(floor_div_mod(i64::MAX, -1), Some((-i64::MAX, 0)));
        assert_eq!(floor_div_mod(i64::MIN, -1), None);
    }

    #[test]
    fn test_overflowing_row_rejected() {
        let err = enum_to_2dix(i64::MIN, (1, -1)).unwrap_err();
        assert!(matches!(err, CommonError::InvalidArgument { .. }));
        assert!(err.to_string().contains("overflows"));

        let idx = Index2D::new((1, -1)).unwrap();
        assert!(idx.index(i64::MIN).is_err());
        assert_eq!(idx.index(i64::MIN + 1).unwrap(), (i64::MAX, 0));
    }

    #[test]
    fn test_index2d_matches_function() {
        let idx = Index2D::new((3, 2)).unwrap();
        assert_eq!(idx.shape(), Shape2D::new(3, 2));
        for i in -10..10 {
            assert_eq!(idx.index(i).unwrap(), enum_to_2dix(i, (3, 2)).unwrap());
        }
    }
}
