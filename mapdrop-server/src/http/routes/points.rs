//! Point endpoints: submit, list, delete
//!
//! Submit and list are the primary contract and surface their failures.
//! Delete is fire-and-forget: the response is empty whether or not the
//! update went through, and storage errors only reach the log.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use mapdrop_core::{rewrite_social_link, BoundingBox, Coordinates, Feature, MessageBody};

use crate::db::repos::PointRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// Wire form of a coordinate pair
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordsParam {
    pub lat: f64,
    pub lng: f64,
}

impl CoordsParam {
    fn validate(self) -> Result<Coordinates, ApiError> {
        Ok(Coordinates::new(self.lng, self.lat)?)
    }
}

/// Submit point request
#[derive(Deserialize)]
pub struct SubmitRequest {
    pub coords: CoordsParam,
    pub created_by: String,
    pub message: String,
    pub icon: String,
}

/// List points request: a bounding box plus the requester identity
#[derive(Deserialize)]
pub struct ListRequest {
    pub requested_by: String,
    #[serde(rename = "NE")]
    pub ne: CoordsParam,
    #[serde(rename = "SW")]
    pub sw: CoordsParam,
}

/// Delete point request
#[derive(Deserialize)]
pub struct DeleteRequest {
    pub point_id: Uuid,
    pub created_by: String,
}

/// POST /api/v1/point - submit a new point
///
/// Responds with a single-element feature array; the submitter can always
/// delete their own fresh point.
async fn submit_point(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<Vec<Feature>>, ApiError> {
    let coords = req.coords.validate()?;
    let body = MessageBody::new(&req.message)?;

    if state.gate.is_banned(&req.created_by).await {
        return Err(ApiError::Forbidden {
            reason: "identity is banned",
        });
    }

    // Social links become anchors once, at write time; the stored body is
    // the rewritten one.
    let stored = rewrite_social_link(body.as_str());

    let record = PointRepo::new(&state.pool)
        .create(coords, &stored, &req.icon, &req.created_by)
        .await?;

    Ok(Json(vec![Feature::for_point(
        coords,
        record.id,
        record.body,
        record.created_at,
        record.icon,
        true,
    )]))
}

/// POST /api/v1/points - list visible points inside a bounding box
async fn list_points(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ListRequest>,
) -> Result<Json<Vec<Feature>>, ApiError> {
    let bx = BoundingBox::from_corners(req.ne.validate()?, req.sw.validate()?);

    let rows = PointRepo::new(&state.pool)
        .list_visible(
            &bx,
            &req.requested_by,
            state.config.max_point_age,
            state.config.list_limit,
        )
        .await?;

    let features = rows
        .into_iter()
        .map(|p| {
            Feature::for_point(
                Coordinates {
                    lng: p.longitude,
                    lat: p.latitude,
                },
                p.id,
                p.body,
                p.created_at,
                p.icon,
                p.can_delete,
            )
        })
        .collect();

    Ok(Json(features))
}

/// POST /api/v1/delete - soft-delete a point the requester owns
///
/// Always responds with an empty body: an ownership mismatch, a missing
/// point, and a successful hide are indistinguishable to the caller.
async fn delete_point(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteRequest>,
) -> StatusCode {
    if let Err(err) = PointRepo::new(&state.pool)
        .soft_delete_by_owner(req.point_id, &req.created_by)
        .await
    {
        tracing::error!(point_id = %req.point_id, error = %err, "delete failed");
    }

    StatusCode::OK
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/point", post(submit_point))
        .route("/points", post(list_points))
        .route("/delete", post(delete_point))
}
