//! Routes for random play: questions are drawn one after another until a
//! wrong answer ends the play-through or every quiz has been answered.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use trivia_quizzes::application::query_handlers::QuizSummary;
use trivia_random_play::application::command_handlers::{self, NextQuestionResult};
use trivia_random_play::application::query_handlers::{self, PlayProgressView};
use trivia_random_play::domain::commands;
use trivia_random_play::domain::play_session::Verdict;

use crate::error::ApiError;
use crate::state::AppState;

/// Render directive of the random play pages.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RandomPlayView {
    /// The next question to show.
    RandomPlay { score: u32, quiz: QuizSummary },
    /// Outcome of a checked answer while the play-through continues, or
    /// after it was lost.
    RandomResult {
        answer: String,
        quiz: QuizSummary,
        result: bool,
        score: u32,
    },
    /// Every quiz has been answered correctly.
    RandomNomore { score: u32 },
}

/// Query string of GET /randomcheck/{quiz_id}.
#[derive(Debug, Deserialize)]
pub struct AnswerParams {
    /// The submitted answer; empty when absent.
    #[serde(default)]
    pub answer: String,
}

/// GET /randomplay
#[instrument(skip(state, jar))]
async fn random_play(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<RandomPlayView>), ApiError> {
    let (jar, session_id) = state.session_cookie.resolve(jar);
    let command = commands::NextQuestion {
        correlation_id: Uuid::new_v4(),
        session_id,
    };

    info!(correlation_id = %command.correlation_id, %session_id, "handling next_question command");

    let result = command_handlers::handle_next_question(
        &command,
        &state.rng,
        &*state.quiz_repository,
        &*state.session_store,
    )
    .await?;

    let view = match result {
        NextQuestionResult::Question { quiz, score } => RandomPlayView::RandomPlay {
            score,
            quiz: QuizSummary::from(&quiz),
        },
        NextQuestionResult::Finished { score } => RandomPlayView::RandomNomore { score },
    };
    Ok((jar, Json(view)))
}

/// GET /randomcheck/{quiz_id}?answer=
#[instrument(skip(state, jar, params))]
async fn random_check(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Query(params): Query<AnswerParams>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<RandomPlayView>), ApiError> {
    // Autoload: an unknown quiz is a 404 and never reaches the session.
    let quiz = state.quiz_repository.find_by_id(quiz_id).await?;

    let (jar, session_id) = state.session_cookie.resolve(jar);
    let command = commands::CheckAnswer {
        correlation_id: Uuid::new_v4(),
        session_id,
        answer: params.answer,
    };

    info!(correlation_id = %command.correlation_id, %session_id, "handling check_answer command");

    let verdict =
        command_handlers::handle_check_answer(&command, &quiz, &*state.session_store).await?;

    let view = match verdict {
        Verdict::Won { score } => RandomPlayView::RandomNomore { score },
        Verdict::Continue { .. } | Verdict::Lost { .. } => RandomPlayView::RandomResult {
            answer: command.answer,
            quiz: QuizSummary::from(&quiz),
            result: verdict.is_correct(),
            score: verdict.score(),
        },
    };
    Ok((jar, Json(view)))
}

/// GET /randomplay/progress
#[instrument(skip(state, jar))]
async fn progress(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<PlayProgressView>), ApiError> {
    let (jar, session_id) = state.session_cookie.resolve(jar);
    let view = query_handlers::get_play_progress(session_id, &*state.session_store).await?;
    Ok((jar, Json(view)))
}

/// Returns the router for the random play context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/randomplay", get(random_play))
        .route("/randomplay/progress", get(progress))
        .route("/randomcheck/{quiz_id}", get(random_check))
}
