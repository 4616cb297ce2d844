//! Command handlers for the quiz authoring context.

use tracing::info;
use trivia_core::clock::Clock;
use trivia_core::error::DomainError;
use trivia_core::quiz::{NewQuiz, Quiz};
use trivia_core::repository::QuizRepository;

use crate::domain::commands::{CreateQuiz, DeleteQuiz, UpdateQuiz};
use crate::domain::validation::validate_quiz_fields;

/// Handles the `CreateQuiz` command: validates the fields and inserts the
/// quiz.
///
/// # Errors
///
/// Returns `DomainError::Validation` for blank fields and
/// `DomainError::Infrastructure` if the insert fails.
pub async fn handle_create_quiz(
    command: &CreateQuiz,
    clock: &dyn Clock,
    repo: &dyn QuizRepository,
) -> Result<Quiz, DomainError> {
    validate_quiz_fields(&command.question, &command.answer)?;

    let quiz = repo
        .create(NewQuiz {
            question: command.question.trim().to_owned(),
            answer: command.answer.trim().to_owned(),
            author_id: command.author_id,
            created_at: clock.now(),
        })
        .await?;

    info!(quiz_id = quiz.id, author_id = quiz.author_id, "quiz created");
    Ok(quiz)
}

/// Handles the `UpdateQuiz` command: loads the quiz, replaces its question
/// and answer, and saves it.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist and
/// `DomainError::Validation` for blank fields.
pub async fn handle_update_quiz(
    command: &UpdateQuiz,
    clock: &dyn Clock,
    repo: &dyn QuizRepository,
) -> Result<Quiz, DomainError> {
    let mut quiz = repo.find_by_id(command.quiz_id).await?;
    validate_quiz_fields(&command.question, &command.answer)?;

    command.question.trim().clone_into(&mut quiz.question);
    command.answer.trim().clone_into(&mut quiz.answer);
    quiz.updated_at = clock.now();
    repo.update(&quiz).await?;

    info!(quiz_id = quiz.id, "quiz updated");
    Ok(quiz)
}

/// Handles the `DeleteQuiz` command.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist.
pub async fn handle_delete_quiz(
    command: &DeleteQuiz,
    repo: &dyn QuizRepository,
) -> Result<(), DomainError> {
    repo.delete(command.quiz_id).await?;
    info!(quiz_id = command.quiz_id, "quiz deleted");
    Ok(())
}
