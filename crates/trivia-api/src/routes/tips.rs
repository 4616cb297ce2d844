//! Routes for tips attached to a quiz.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use trivia_core::tip::Tip;
use trivia_tips::application::command_handlers;
use trivia_tips::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /quizzes/{quiz_id}/tips.
#[derive(Debug, Deserialize)]
pub struct CreateTipRequest {
    pub text: String,
    /// Display name of the submitter.
    pub author: String,
}

/// Request body for PUT /quizzes/{quiz_id}/tips/{tip_id}.
#[derive(Debug, Deserialize)]
pub struct EditTipRequest {
    pub text: String,
    /// The user making the edit, if known.
    pub editor_id: Option<i64>,
}

/// POST /quizzes/{quiz_id}/tips
#[instrument(skip(state, request))]
async fn create(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Json(request): Json<CreateTipRequest>,
) -> Result<(StatusCode, Json<Tip>), ApiError> {
    let command = commands::CreateTip {
        correlation_id: Uuid::new_v4(),
        quiz_id,
        text: request.text,
        author: request.author,
    };

    info!(correlation_id = %command.correlation_id, "handling create_tip command");

    let tip = command_handlers::handle_create_tip(
        &command,
        state.clock.as_ref(),
        &*state.quiz_repository,
        &*state.tip_repository,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(tip)))
}

/// PUT /quizzes/{quiz_id}/tips/{tip_id}/accept
#[instrument(skip(state))]
async fn accept(
    State(state): State<AppState>,
    Path((quiz_id, tip_id)): Path<(i64, i64)>,
) -> Result<Json<Tip>, ApiError> {
    let command = commands::AcceptTip {
        correlation_id: Uuid::new_v4(),
        quiz_id,
        tip_id,
    };

    info!(correlation_id = %command.correlation_id, "handling accept_tip command");

    let tip = command_handlers::handle_accept_tip(
        &command,
        state.clock.as_ref(),
        &*state.quiz_repository,
        &*state.tip_repository,
    )
    .await?;
    Ok(Json(tip))
}

/// PUT /quizzes/{quiz_id}/tips/{tip_id}
#[instrument(skip(state, request))]
async fn edit(
    State(state): State<AppState>,
    Path((quiz_id, tip_id)): Path<(i64, i64)>,
    Json(request): Json<EditTipRequest>,
) -> Result<Json<Tip>, ApiError> {
    let command = commands::EditTip {
        correlation_id: Uuid::new_v4(),
        quiz_id,
        tip_id,
        text: request.text,
        editor_id: request.editor_id,
    };

    info!(correlation_id = %command.correlation_id, "handling edit_tip command");

    let tip = command_handlers::handle_edit_tip(
        &command,
        state.clock.as_ref(),
        &*state.quiz_repository,
        &*state.tip_repository,
    )
    .await?;
    Ok(Json(tip))
}

/// DELETE /quizzes/{quiz_id}/tips/{tip_id}
#[instrument(skip(state))]
async fn destroy(
    State(state): State<AppState>,
    Path((quiz_id, tip_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteTip {
        correlation_id: Uuid::new_v4(),
        quiz_id,
        tip_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_tip command");

    command_handlers::handle_delete_tip(
        &command,
        &*state.quiz_repository,
        &*state.tip_repository,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the tips context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quizzes/{quiz_id}/tips", post(create))
        .route("/quizzes/{quiz_id}/tips/{tip_id}", put(edit).delete(destroy))
        .route("/quizzes/{quiz_id}/tips/{tip_id}/accept", put(accept))
}
