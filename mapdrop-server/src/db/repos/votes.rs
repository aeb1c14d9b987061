//! Vote ledger
//!
//! Append-only: one row per (voter, point), never updated, never deleted.
//! Dedup rides on the table's composite primary key via ON CONFLICT, so it
//! holds across concurrent requests and across service instances; there is
//! no application-level locking to get wrong.

use sqlx::PgPool;
use uuid::Uuid;

use super::DbError;

/// Result of attempting to record a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was inserted.
    Recorded,
    /// This voter already voted on this point; nothing was written.
    AlreadyVoted,
}

/// Vote repository
pub struct VoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a vote, atomically deduplicating on (voter, point).
    ///
    /// Under two concurrent casts for the same pair, exactly one row is
    /// inserted; the loser observes [`VoteOutcome::AlreadyVoted`].
    pub async fn cast(
        &self,
        voter: &str,
        point_id: Uuid,
        value: i16,
    ) -> Result<VoteOutcome, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO votes (voter_id, point_id, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (voter_id, point_id) DO NOTHING
            "#,
        )
        .bind(voter)
        .bind(point_id)
        .bind(value)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(VoteOutcome::AlreadyVoted)
        } else {
            Ok(VoteOutcome::Recorded)
        }
    }

    /// Aggregate score for a point; 0 when it has no votes.
    pub async fn score_for(&self, point_id: Uuid) -> Result<i64, DbError> {
        let (score,): (i64,) =
            sqlx::query_as("SELECT COALESCE(SUM(value), 0)::BIGINT FROM votes WHERE point_id = $1")
                .bind(point_id)
                .fetch_one(self.pool)
                .await?;

        Ok(score)
    }
}
