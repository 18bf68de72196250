//! Form input validation.
//!
//! # Responsibility
//! - Check a single text or numeric value against optional constraints.
//! - Stay pure: no side effects, no panics, boolean result only.
//!
//! # Invariants
//! - All supplied constraints are conjunctive.
//! - Constraints that do not apply to the value's type are ignored.
//! - Length bounds compare the raw, untrimmed character count.

/// Value under validation.
///
/// Form fields arrive as text; fields with numeric bounds are converted to
/// numbers by the caller before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatableValue {
    Text(String),
    Number(i64),
}

impl Default for ValidatableValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// One value plus the optional constraints to check it against.
///
/// Built with struct-update syntax; unset constraints stay inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validatable {
    pub value: ValidatableValue,
    /// Textual form of the value, trimmed, must be non-empty.
    pub required: bool,
    /// Minimum character count; applies to text values only.
    pub min_length: Option<usize>,
    /// Maximum character count; applies to text values only.
    pub max_length: Option<usize>,
    /// Inclusive lower bound; applies to numeric values only.
    pub min: Option<i64>,
    /// Inclusive upper bound; applies to numeric values only.
    pub max: Option<i64>,
}

/// Checks every supplied constraint; the result is the conjunction.
///
/// An empty constraint set validates as true.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid
            && match &input.value {
                ValidatableValue::Text(text) => !text.trim().is_empty(),
                // The textual form of a number is never blank.
                ValidatableValue::Number(_) => true,
            };
    }

    if let (Some(min_length), ValidatableValue::Text(text)) = (input.min_length, &input.value) {
        is_valid = is_valid && text.chars().count() >= min_length;
    }
    if let (Some(max_length), ValidatableValue::Text(text)) = (input.max_length, &input.value) {
        is_valid = is_valid && text.chars().count() <= max_length;
    }

    if let (Some(min), ValidatableValue::Number(value)) = (input.min, &input.value) {
        is_valid = is_valid && *value >= min;
    }
    if let (Some(max), ValidatableValue::Number(value)) = (input.max, &input.value) {
        is_valid = is_valid && *value <= max;
    }

    is_valid
}
