//! Vote endpoints: upvote, downvote
//!
//! Voting is a best-effort community signal. A duplicate vote is a normal
//! outcome that short-circuits; storage failures are logged and the
//! response stays empty. Only a recorded vote schedules a hide check, and
//! that runs off the request path.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::repos::{VoteOutcome, VoteRepo};
use crate::http::error::ApiError;
use crate::state::AppState;

/// Vote request
#[derive(Deserialize)]
pub struct VoteRequest {
    pub point_id: Uuid,
    pub voter: String,
}

/// POST /api/v1/upvote
async fn upvote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoteRequest>,
) -> Result<StatusCode, ApiError> {
    cast_vote(state, req, 1).await
}

/// POST /api/v1/downvote
async fn downvote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoteRequest>,
) -> Result<StatusCode, ApiError> {
    cast_vote(state, req, -1).await
}

async fn cast_vote(
    state: Arc<AppState>,
    req: VoteRequest,
    value: i16,
) -> Result<StatusCode, ApiError> {
    if state.gate.is_banned(&req.voter).await {
        return Err(ApiError::Forbidden {
            reason: "identity is banned",
        });
    }

    match VoteRepo::new(&state.pool)
        .cast(&req.voter, req.point_id, value)
        .await
    {
        Ok(VoteOutcome::Recorded) => {
            state.moderation.enqueue(req.point_id);
        }
        Ok(VoteOutcome::AlreadyVoted) => {}
        Err(err) => {
            tracing::error!(point_id = %req.point_id, error = %err, "vote failed");
        }
    }

    Ok(StatusCode::OK)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upvote", post(upvote))
        .route("/downvote", post(downvote))
}
