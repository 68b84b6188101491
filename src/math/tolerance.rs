//! Approximate comparisons shared by the symmetry and motif checks

use num_traits::Float;

/// Absolute tolerance added to every relative comparison
///
/// Keeps comparisons against zero meaningful, matching the usual
/// `|a - b| <= atol + rtol * |b|` closeness rule.
pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Relative tolerance added to every absolute comparison
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-5;

/// Closeness rule `|value - reference| <= absolute + relative * |reference|`
pub fn is_close<T: Float>(value: T, reference: T, absolute: T, relative: T) -> bool {
    (value - reference).abs() <= absolute + relative * reference.abs()
}

/// Whether every value lies within `relative` of `reference`
pub fn all_close_relative<T: Float>(values: &[T], reference: T, relative: T) -> bool {
    let absolute = T::from(DEFAULT_ABSOLUTE_TOLERANCE).unwrap_or_else(T::epsilon);
    values
        .iter()
        .all(|&value| is_close(value, reference, absolute, relative))
}

/// Whether every value lies within `absolute` of `reference`
pub fn all_close_absolute<T: Float>(values: &[T], reference: T, absolute: T) -> bool {
    let relative = T::from(DEFAULT_RELATIVE_TOLERANCE).unwrap_or_else(T::epsilon);
    values
        .iter()
        .all(|&value| is_close(value, reference, absolute, relative))
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let count = T::from(values.len())?;
    let total = values.iter().fold(T::zero(), |acc, &value| acc + value);
    Some(total / count)
}

/// Population variance, `None` for an empty slice
pub fn variance<T: Float>(values: &[T]) -> Option<T> {
    let centre = mean(values)?;
    let squares: Vec<T> = values
        .iter()
        .map(|&value| (value - centre) * (value - centre))
        .collect();
    mean(&squares)
}
