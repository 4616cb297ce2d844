//! Command handlers for the tips context.
//!
//! Every handler first resolves the quiz, then the tip, and refuses a tip
//! that belongs to a different quiz than the one addressed.

use tracing::info;
use trivia_core::clock::Clock;
use trivia_core::error::DomainError;
use trivia_core::quiz::Quiz;
use trivia_core::repository::{QuizRepository, TipRepository};
use trivia_core::tip::{NewTip, Tip};

use crate::domain::commands::{AcceptTip, CreateTip, DeleteTip, EditTip};

fn validate_text(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation(
            "Tip text must not be empty.".to_owned(),
        ));
    }
    Ok(())
}

async fn load_tip_of_quiz(
    quiz_id: i64,
    tip_id: i64,
    quizzes: &dyn QuizRepository,
    tips: &dyn TipRepository,
) -> Result<(Quiz, Tip), DomainError> {
    let quiz = quizzes.find_by_id(quiz_id).await?;
    let tip = tips.find_by_id(tip_id).await?;
    if tip.quiz_id != quiz.id {
        return Err(DomainError::TipNotFound(tip_id));
    }
    Ok((quiz, tip))
}

/// Handles the `CreateTip` command.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` if the quiz does not exist and
/// `DomainError::Validation` for blank text.
pub async fn handle_create_tip(
    command: &CreateTip,
    clock: &dyn Clock,
    quizzes: &dyn QuizRepository,
    tips: &dyn TipRepository,
) -> Result<Tip, DomainError> {
    let quiz = quizzes.find_by_id(command.quiz_id).await?;
    validate_text(&command.text)?;

    let tip = tips
        .create(NewTip {
            quiz_id: quiz.id,
            text: command.text.trim().to_owned(),
            author: command.author.clone(),
            created_at: clock.now(),
        })
        .await?;

    info!(quiz_id = quiz.id, tip_id = tip.id, "tip created");
    Ok(tip)
}

/// Handles the `AcceptTip` command.
///
/// # Errors
///
/// Returns `DomainError::QuizNotFound` / `DomainError::TipNotFound` if
/// either record is missing or the tip belongs to another quiz.
pub async fn handle_accept_tip(
    command: &AcceptTip,
    clock: &dyn Clock,
    quizzes: &dyn QuizRepository,
    tips: &dyn TipRepository,
) -> Result<Tip, DomainError> {
    let (_, mut tip) = load_tip_of_quiz(command.quiz_id, command.tip_id, quizzes, tips).await?;

    tip.accepted = true;
    tip.updated_at = clock.now();
    tips.update(&tip).await?;

    info!(quiz_id = tip.quiz_id, tip_id = tip.id, "tip accepted");
    Ok(tip)
}

/// Handles the `EditTip` command. When the editor is the quiz's author the
/// tip goes back to unaccepted, awaiting another review.
///
/// # Errors
///
/// Returns the not-found errors of [`handle_accept_tip`] and
/// `DomainError::Validation` for blank text.
pub async fn handle_edit_tip(
    command: &EditTip,
    clock: &dyn Clock,
    quizzes: &dyn QuizRepository,
    tips: &dyn TipRepository,
) -> Result<Tip, DomainError> {
    let (quiz, mut tip) = load_tip_of_quiz(command.quiz_id, command.tip_id, quizzes, tips).await?;
    validate_text(&command.text)?;

    command.text.trim().clone_into(&mut tip.text);
    if command.editor_id == Some(quiz.author_id) {
        tip.accepted = false;
    }
    tip.updated_at = clock.now();
    tips.update(&tip).await?;

    info!(quiz_id = quiz.id, tip_id = tip.id, accepted = tip.accepted, "tip edited");
    Ok(tip)
}

/// Handles the `DeleteTip` command.
///
/// # Errors
///
/// Returns the not-found errors of [`handle_accept_tip`].
pub async fn handle_delete_tip(
    command: &DeleteTip,
    quizzes: &dyn QuizRepository,
    tips: &dyn TipRepository,
) -> Result<(), DomainError> {
    let (quiz, tip) = load_tip_of_quiz(command.quiz_id, command.tip_id, quizzes, tips).await?;
    tips.delete(tip.id).await?;
    info!(quiz_id = quiz.id, tip_id = tip.id, "tip deleted");
    Ok(())
}
