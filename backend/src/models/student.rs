//! Student record and its validation rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest accepted grade point average.
pub const GPA_MIN: f64 = 0.0;
/// Highest accepted grade point average.
pub const GPA_MAX: f64 = 4.0;

/// A student record as stored by the repository and exchanged over HTTP.
///
/// Missing `id`, `major` and `gpa` fields deserialize to their defaults so that
/// an incomplete body reaches [`Student::validate`] and is reported as a
/// validation failure rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, chosen by the client
    #[serde(default)]
    pub id: String,
    /// Full name
    pub name: String,
    /// Declared major, empty when undeclared
    #[serde(default)]
    pub major: String,
    /// Grade point average in `[0.0, 4.0]`
    #[serde(default)]
    pub gpa: f64,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
        gpa: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            major: major.into(),
            gpa,
        }
    }

    /// Check every constraint on the record, including the id.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        let mut violations = Vec::new();
        if self.id.trim().is_empty() {
            violations.push(Violation::EmptyId);
        }
        violations.extend(self.field_violations());
        StudentValidationError::from_violations(violations)
    }

    /// Return a copy of this record carrying `id`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    fn field_violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.name.trim().is_empty() {
            violations.push(Violation::EmptyName);
        }
        if !self.gpa.is_finite() || !(GPA_MIN..=GPA_MAX).contains(&self.gpa) {
            violations.push(Violation::GpaOutOfRange(self.gpa));
        }
        violations
    }
}

/// A single broken constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    EmptyId,
    EmptyName,
    GpaOutOfRange(f64),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyId => write!(f, "id must not be empty"),
            Violation::EmptyName => write!(f, "name must not be empty"),
            Violation::GpaOutOfRange(gpa) => write!(
                f,
                "gpa must be between {:.2} and {:.2} (got {})",
                GPA_MIN, GPA_MAX, gpa
            ),
        }
    }
}

/// All constraints a student record failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid student: {}", join(.violations))]
pub struct StudentValidationError {
    pub violations: Vec<Violation>,
}

impl StudentValidationError {
    fn from_violations(violations: Vec<Violation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_student_passes() {
        let student = Student::new("s1", "Ada Lovelace", "Mathematics", 3.9);
        assert!(student.validate().is_ok());
    }

    #[test]
    fn test_gpa_bounds_are_inclusive() {
        assert!(Student::new("s1", "Ada", "", 0.0).validate().is_ok());
        assert!(Student::new("s1", "Ada", "", 4.0).validate().is_ok());
    }

    #[test]
    fn test_gpa_above_range_rejected() {
        let err = Student::new("s1", "Ada", "", 4.5).validate().unwrap_err();
        assert_eq!(err.violations, vec![Violation::GpaOutOfRange(4.5)]);
        assert!(err.to_string().contains("gpa must be between 0.00 and 4.00"));
    }

    #[test]
    fn test_negative_and_nan_gpa_rejected() {
        assert!(Student::new("s1", "Ada", "", -0.01).validate().is_err());
        assert!(Student::new("s1", "Ada", "", f64::NAN).validate().is_err());
    }

    #[test]
    fn test_blank_id_and_name_reported_together() {
        let err = Student::new("  ", "", "", 2.0).validate().unwrap_err();
        assert_eq!(err.violations, vec![Violation::EmptyId, Violation::EmptyName]);
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let student: Student = serde_json::from_str(r#"{"id":"s2","name":"Alan"}"#).unwrap();
        assert_eq!(student, Student::new("s2", "Alan", "", 0.0));
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(Student::new("s3", "Edsger", "CS", 3.5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "s3", "name": "Edsger", "major": "CS", "gpa": 3.5})
        );
    }
}
