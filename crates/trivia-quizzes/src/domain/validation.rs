//! Field validation for quizzes.

use trivia_core::error::DomainError;

/// Rejects a blank question or answer.
///
/// # Errors
///
/// Returns `DomainError::Validation` naming every blank field.
pub fn validate_quiz_fields(question: &str, answer: &str) -> Result<(), DomainError> {
    let mut problems = Vec::new();
    if question.trim().is_empty() {
        problems.push("Question must not be empty.");
    }
    if answer.trim().is_empty() {
        problems.push("Answer must not be empty.");
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(problems.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_filled_fields() {
        assert!(validate_quiz_fields("2+2", "4").is_ok());
    }

    #[test]
    fn test_reports_every_blank_field() {
        match validate_quiz_fields("  ", "") {
            Err(DomainError::Validation(msg)) => {
                assert!(msg.contains("Question"));
                assert!(msg.contains("Answer"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
