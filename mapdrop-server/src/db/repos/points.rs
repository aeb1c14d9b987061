//! Point repository
//!
//! Owns the `points` table: creation, windowed bounding-box listing, and the
//! monotonic hidden flag. Rows are never physically deleted; both community
//! moderation and owner deletes set `hidden = TRUE`, and nothing resets it.

use chrono::{DateTime, Duration, Utc};
use mapdrop_core::{BoundingBox, Coordinates};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;

/// Point record from database
#[derive(Debug, Clone, FromRow)]
pub struct PointRecord {
    pub id: Uuid,
    pub longitude: f64,
    pub latitude: f64,
    pub body: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub hidden: bool,
}

/// Listing row with the per-viewer delete flag
#[derive(Debug, Clone, FromRow)]
pub struct VisiblePoint {
    pub id: Uuid,
    pub longitude: f64,
    pub latitude: f64,
    pub body: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub can_delete: bool,
}

/// Point repository
pub struct PointRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PointRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new visible point.
    pub async fn create(
        &self,
        coords: Coordinates,
        body: &str,
        icon: &str,
        created_by: &str,
    ) -> Result<PointRecord, DbError> {
        let record = sqlx::query_as(
            r#"
            INSERT INTO points (longitude, latitude, body, icon, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, longitude, latitude, body, icon, created_at, created_by, hidden
            "#,
        )
        .bind(coords.lng)
        .bind(coords.lat)
        .bind(body)
        .bind(icon)
        .bind(created_by)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    /// List visible points inside the box, newer than `max_age`, capped at
    /// `limit`. `can_delete` is computed per viewer in the query itself.
    pub async fn list_visible(
        &self,
        bx: &BoundingBox,
        requested_by: &str,
        max_age: Duration,
        limit: i64,
    ) -> Result<Vec<VisiblePoint>, DbError> {
        let cutoff = Utc::now() - max_age;

        let rows = sqlx::query_as(
            r#"
            SELECT
                id,
                longitude,
                latitude,
                body,
                icon,
                created_at,
                (created_by = $1) AS can_delete
            FROM points
            WHERE hidden = FALSE
              AND created_at > $2
              AND longitude BETWEEN $3 AND $4
              AND latitude BETWEEN $5 AND $6
            LIMIT $7
            "#,
        )
        .bind(requested_by)
        .bind(cutoff)
        .bind(bx.west())
        .bind(bx.east())
        .bind(bx.south())
        .bind(bx.north())
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Hide a point. Idempotent: hiding an already-hidden or unknown point
    /// succeeds without effect.
    pub async fn hide(&self, id: Uuid) -> Result<(), DbError> {
        sqlx::query("UPDATE points SET hidden = TRUE WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Hide a point only when the requester created it. An ownership
    /// mismatch (or unknown id) is a silent no-op; the caller cannot tell
    /// "not found" from "not owner".
    pub async fn soft_delete_by_owner(
        &self,
        id: Uuid,
        requested_by: &str,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE points SET hidden = TRUE WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(requested_by)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Fetch a single point by id.
    pub async fn get(&self, id: Uuid) -> Result<Option<PointRecord>, DbError> {
        let record = sqlx::query_as(
            r#"
            SELECT id, longitude, latitude, body, icon, created_at, created_by, hidden
            FROM points
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }
}
