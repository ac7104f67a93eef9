//! Grade bounds and validation.

/// Lowest grade a submission can receive.
pub const GRADE_MIN: f32 = 0.0;

/// Highest grade a submission can receive.
pub const GRADE_MAX: f32 = 100.0;

/// Check that a grade value is within the allowed range.
pub fn validate_grade(grade: f32) -> bool {
    grade.is_finite() && (GRADE_MIN..=GRADE_MAX).contains(&grade)
}
