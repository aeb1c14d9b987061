//! Database migrations for point and vote tables

use sqlx::PgPool;

use super::repos::DbError;

/// Run all migrations. Idempotent; executed at startup.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running mapdrop migrations...");

    // Points are soft-deleted only: hidden goes false -> true and never back.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS points (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            longitude DOUBLE PRECISION NOT NULL,
            latitude DOUBLE PRECISION NOT NULL,
            body TEXT NOT NULL,
            icon TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            created_by TEXT NOT NULL,
            hidden BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // The composite primary key is the one-vote-per-voter-per-point
    // constraint; vote dedup rides on it rather than on any in-process lock.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS votes (
            voter_id TEXT NOT NULL,
            point_id UUID NOT NULL REFERENCES points(id) ON DELETE CASCADE,
            value SMALLINT NOT NULL CHECK (value IN (-1, 1)),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            PRIMARY KEY (voter_id, point_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("mapdrop migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_points_visible ON points(created_at DESC) WHERE hidden = FALSE",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_points_coords ON points(longitude, latitude)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_votes_point ON votes(point_id)")
        .execute(pool)
        .await?;

    Ok(())
}
