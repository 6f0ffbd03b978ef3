use thiserror::Error;

/// Which part of the form a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Grade,
    Attendance,
    Marks,
}

/// Rejected submission. Validation stops at the first failing category, so
/// at most one of these is reported per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid grade between 1 and 12.")]
    InvalidGrade,

    #[error("Please enter a valid attendance percentage.")]
    InvalidAttendance,

    /// Does not say which subject failed.
    #[error("Please enter valid marks between 0 and 100 for all subjects.")]
    InvalidMarks,
}

impl ValidationError {
    pub fn category(self) -> ErrorCategory {
        match self {
            ValidationError::InvalidGrade => ErrorCategory::Grade,
            ValidationError::InvalidAttendance => ErrorCategory::Attendance,
            ValidationError::InvalidMarks => ErrorCategory::Marks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::InvalidGrade.to_string(),
            "Please enter a valid grade between 1 and 12."
        );
        assert_eq!(
            ValidationError::InvalidAttendance.to_string(),
            "Please enter a valid attendance percentage."
        );
        assert_eq!(
            ValidationError::InvalidMarks.to_string(),
            "Please enter valid marks between 0 and 100 for all subjects."
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(ValidationError::InvalidGrade.category(), ErrorCategory::Grade);
        assert_eq!(ValidationError::InvalidMarks.category(), ErrorCategory::Marks);
    }
}
