//! Reusable validation predicates
//!
//! Predicates here never fail: they answer `true` or `false` and leave it to
//! the caller to decide whether `false` is a domain error.

/// Inclusive integer range check for validators that bound numeric values.
///
/// Implementors opt in with an empty `impl` block and call the provided
/// function as `Self::is_integer_between_values(..)`.
///
/// ```rust
/// use pokedex_core::validation::NumberBoundsCheck;
///
/// struct LevelValidator;
/// impl NumberBoundsCheck for LevelValidator {}
///
/// assert!(LevelValidator::is_integer_between_values(100, 1, 100));
/// assert!(!LevelValidator::is_integer_between_values(101, 1, 100));
/// ```
pub trait NumberBoundsCheck {
    fn is_integer_between_values(value: i64, min: i64, max: i64) -> bool {
        is_integer_between_values(value, min, max)
    }
}

/// `min <= value <= max`. Bounds are not normalised, so `min > max` never matches.
pub fn is_integer_between_values(value: i64, min: i64, max: i64) -> bool {
    min <= value && value <= max
}
