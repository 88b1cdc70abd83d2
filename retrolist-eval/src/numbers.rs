//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Round to `places` decimals on the exact binary value of `value`.
///
/// Fixed-precision formatting expands the float exactly and breaks true ties
/// to the even digit, so `0.0125` (stored slightly above the tie) becomes
/// `0.013` while the exact tie `0.0625` becomes `0.062`. Non-finite values
/// pass through unchanged.
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let precision = cast::<u32, usize>(places).unwrap_or(0);
    format!("{value:.precision$}").parse().unwrap_or(value)
}

/// Mean of a slice, `None` when empty.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / usize_to_f64(values.len()))
}

/// Percentage of `part` in `whole`, 0.0 when `whole` is zero.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    usize_to_f64(part) / usize_to_f64(whole) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_ties_to_even() {
        assert!((round_to_places(0.0625, 3) - 0.062).abs() < f64::EPSILON);
        assert!((round_to_places(0.8333333, 3) - 0.833).abs() < f64::EPSILON);
        assert!((round_to_places(0.6666667, 3) - 0.667).abs() < f64::EPSILON);
    }

    #[test]
    fn rounds_the_stored_value_not_a_scaled_copy() {
        // 0.0125 * 1000 lands exactly on 12.5, but the stored 0.0125 is above the tie
        assert!((round_to_places(0.5 / 40.0, 3) - 0.013).abs() < f64::EPSILON);
        assert!((round_to_places(2.675, 2) - 2.67).abs() < f64::EPSILON);
        assert!((round_to_places(-0.0004, 3)).abs() < f64::EPSILON);
    }

    #[test]
    fn round_passes_non_finite_through() {
        assert!(round_to_places(f64::NAN, 3).is_nan());
        assert!(round_to_places(f64::INFINITY, 3).is_infinite());
    }

    #[test]
    fn mean_handles_empty_and_values() {
        assert!(mean(&[]).is_none());
        assert_eq!(mean(&[0.0, 0.5, 1.0]), Some(0.5));
    }

    #[test]
    fn percentage_guards_zero_whole() {
        assert!(percentage(3, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
