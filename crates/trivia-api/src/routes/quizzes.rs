//! Routes for quiz authoring, listing and single-quiz play.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use trivia_core::quiz::Quiz;
use trivia_quizzes::application::query_handlers::{
    self, QuizDetailView, QuizIndexView, QuizListQuery, QuizSummary, SingleCheckView,
};
use trivia_quizzes::application::command_handlers;
use trivia_quizzes::domain::commands;

use crate::error::ApiError;
use crate::routes::random_play::AnswerParams;
use crate::state::AppState;

/// Render directive of the quiz pages.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum QuizzesView {
    /// A page of the quiz listing.
    QuizzesIndex(QuizIndexView),
    /// One quiz with its tips.
    QuizzesShow(QuizDetailView),
    /// The form to answer one quiz.
    QuizzesPlay { quiz: QuizSummary, answer: String },
    /// Outcome of answering one quiz.
    QuizzesResult(SingleCheckView),
}

/// Query string of the listing routes.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Free-text search over questions.
    pub search: Option<String>,
    /// 1-based page number.
    pub pageno: Option<i64>,
}

/// Request body for POST /quizzes.
#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub question: String,
    pub answer: String,
    /// Owning user; `0` when not given.
    #[serde(default)]
    pub author_id: i64,
}

/// Request body for PUT /quizzes/{quiz_id}.
#[derive(Debug, Deserialize)]
pub struct UpdateQuizRequest {
    pub question: String,
    pub answer: String,
}

async fn list(
    state: &AppState,
    params: ListParams,
    author_id: Option<i64>,
) -> Result<Json<QuizzesView>, ApiError> {
    let query = QuizListQuery {
        search: params.search,
        author_id,
        pageno: params.pageno,
    };
    let view = query_handlers::list_quizzes(&query, &*state.quiz_repository).await?;
    Ok(Json(QuizzesView::QuizzesIndex(view)))
}

/// GET /quizzes
#[instrument(skip(state, params))]
async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<QuizzesView>, ApiError> {
    list(&state, params, None).await
}

/// GET /users/{user_id}/quizzes
#[instrument(skip(state, params))]
async fn index_of_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<Json<QuizzesView>, ApiError> {
    list(&state, params, Some(user_id)).await
}

/// GET /quizzes/{quiz_id}
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> Result<Json<QuizzesView>, ApiError> {
    let view = query_handlers::get_quiz_with_tips(
        quiz_id,
        &*state.quiz_repository,
        &*state.tip_repository,
    )
    .await?;
    Ok(Json(QuizzesView::QuizzesShow(view)))
}

/// POST /quizzes
#[instrument(skip(state, request), fields(author_id = request.author_id))]
async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateQuizRequest>,
) -> Result<(StatusCode, Json<Quiz>), ApiError> {
    let command = commands::CreateQuiz {
        correlation_id: Uuid::new_v4(),
        question: request.question,
        answer: request.answer,
        author_id: request.author_id,
    };

    info!(correlation_id = %command.correlation_id, "handling create_quiz command");

    let quiz = command_handlers::handle_create_quiz(
        &command,
        state.clock.as_ref(),
        &*state.quiz_repository,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(quiz)))
}

/// PUT /quizzes/{quiz_id}
#[instrument(skip(state, request))]
async fn update(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Json(request): Json<UpdateQuizRequest>,
) -> Result<Json<Quiz>, ApiError> {
    let command = commands::UpdateQuiz {
        correlation_id: Uuid::new_v4(),
        quiz_id,
        question: request.question,
        answer: request.answer,
    };

    info!(correlation_id = %command.correlation_id, "handling update_quiz command");

    let quiz = command_handlers::handle_update_quiz(
        &command,
        state.clock.as_ref(),
        &*state.quiz_repository,
    )
    .await?;
    Ok(Json(quiz))
}

/// DELETE /quizzes/{quiz_id}
#[instrument(skip(state))]
async fn destroy(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteQuiz {
        correlation_id: Uuid::new_v4(),
        quiz_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_quiz command");

    command_handlers::handle_delete_quiz(&command, &*state.quiz_repository).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /quizzes/{quiz_id}/play?answer=
#[instrument(skip(state, params))]
async fn play(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Query(params): Query<AnswerParams>,
) -> Result<Json<QuizzesView>, ApiError> {
    let quiz = state.quiz_repository.find_by_id(quiz_id).await?;
    Ok(Json(QuizzesView::QuizzesPlay {
        quiz: QuizSummary::from(&quiz),
        answer: params.answer,
    }))
}

/// GET /quizzes/{quiz_id}/check?answer=
#[instrument(skip(state, params))]
async fn check(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Query(params): Query<AnswerParams>,
) -> Result<Json<QuizzesView>, ApiError> {
    let quiz = state.quiz_repository.find_by_id(quiz_id).await?;
    let view = query_handlers::check_single_answer(&quiz, &params.answer);
    Ok(Json(QuizzesView::QuizzesResult(view)))
}

/// Returns the router for the quizzes context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quizzes", get(index).post(create))
        .route("/quizzes/{quiz_id}", get(show).put(update).delete(destroy))
        .route("/quizzes/{quiz_id}/play", get(play))
        .route("/quizzes/{quiz_id}/check", get(check))
        .route("/users/{user_id}/quizzes", get(index_of_user))
}
