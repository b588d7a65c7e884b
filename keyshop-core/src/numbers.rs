//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Clamp a requested quantity into the stored `u32` range.
///
/// Returns `None` for zero or negative requests, which callers treat as
/// removal.
#[must_use]
pub fn positive_quantity(requested: i64) -> Option<u32> {
    if requested <= 0 {
        return None;
    }
    Some(cast::<i64, u32>(requested).unwrap_or(u32::MAX))
}

/// Convert a quantity to `f64` for price arithmetic.
#[must_use]
pub fn quantity_to_f64(quantity: u32) -> f64 {
    cast::<u32, f64>(quantity).unwrap_or(0.0)
}

/// Widen a quantity to `u64` for item counts.
#[must_use]
pub fn quantity_to_u64(quantity: u32) -> u64 {
    cast::<u32, u64>(quantity).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_quantity_rejects_non_positive() {
        assert_eq!(positive_quantity(0), None);
        assert_eq!(positive_quantity(-3), None);
        assert_eq!(positive_quantity(4), Some(4));
    }

    #[test]
    fn positive_quantity_saturates() {
        assert_eq!(positive_quantity(i64::MAX), Some(u32::MAX));
    }

    #[test]
    fn widening_helpers_are_lossless() {
        assert!((quantity_to_f64(3) - 3.0).abs() < f64::EPSILON);
        assert_eq!(quantity_to_u64(u32::MAX), u64::from(u32::MAX));
    }
}
