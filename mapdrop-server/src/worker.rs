//! Background moderation worker
//!
//! Vote handlers must not wait on moderation. Recorded votes enqueue the
//! point id on a bounded channel; a single consumer task recomputes the
//! score and hides the point when the policy says so. The queue decouples
//! the hide check from the request/response cycle, and its failures are
//! logged on their own path, invisible to any caller.
//!
//! Redundant checks for the same point are harmless: `hide` is idempotent
//! and the hidden flag never flips back.

use mapdrop_core::ModerationPolicy;
use sqlx::PgPool;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::db::repos::{DbError, PointRepo, VoteRepo};

/// Handle for enqueueing hide checks.
#[derive(Clone)]
pub struct ModerationQueue {
    tx: mpsc::Sender<Uuid>,
}

impl ModerationQueue {
    /// Spawn the consumer task and return the enqueue handle.
    ///
    /// The task exits once every handle is dropped.
    pub fn spawn(pool: PgPool, policy: ModerationPolicy, depth: usize) -> Self {
        let (tx, rx) = mpsc::channel(depth);
        tokio::spawn(run(pool, policy, rx));
        Self { tx }
    }

    /// Enqueue a hide check without blocking.
    ///
    /// A full queue drops the check with a warning; the next vote on the
    /// point enqueues a fresh one.
    pub fn enqueue(&self, point_id: Uuid) {
        if let Err(err) = self.tx.try_send(point_id) {
            warn!(%point_id, error = %err, "dropping hide check");
        }
    }
}

async fn run(pool: PgPool, policy: ModerationPolicy, mut rx: mpsc::Receiver<Uuid>) {
    info!(
        hide_threshold = policy.hide_threshold(),
        "moderation worker started"
    );

    while let Some(point_id) = rx.recv().await {
        if let Err(err) = check_point(&pool, &policy, point_id).await {
            warn!(%point_id, error = %err, "hide check failed");
        }
    }

    info!("moderation worker stopped");
}

/// Recompute the score and hide the point if it crossed the threshold.
async fn check_point(
    pool: &PgPool,
    policy: &ModerationPolicy,
    point_id: Uuid,
) -> Result<(), DbError> {
    let score = VoteRepo::new(pool).score_for(point_id).await?;

    if policy.should_hide(score) {
        PointRepo::new(pool).hide(point_id).await?;
        info!(%point_id, score, "point hidden");
    } else {
        debug!(%point_id, score, "point stays visible");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use mapdrop_core::{BoundingBox, Coordinates};

    #[tokio::test]
    async fn enqueue_never_blocks_or_panics() {
        // Closed channel: receiver dropped immediately.
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let queue = ModerationQueue { tx };

        queue.enqueue(Uuid::new_v4());
        queue.enqueue(Uuid::new_v4());
    }

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn five_downvotes_hide_the_point() {
        let pool = test_pool().await;
        let policy = ModerationPolicy::default();
        let creator = format!("creator-{}", Uuid::new_v4());

        let record = PointRepo::new(&pool)
            .create(
                Coordinates::new(5.0, 5.0).unwrap(),
                "about to go",
                "flag",
                &creator,
            )
            .await
            .expect("create failed");

        for n in 0..5 {
            VoteRepo::new(&pool)
                .cast(&format!("voter-{n}-{}", record.id), record.id, -1)
                .await
                .expect("cast failed");
            // Checks along the way are harmless; only the fifth crosses
            // the threshold.
            check_point(&pool, &policy, record.id)
                .await
                .expect("check failed");
        }

        let fetched = PointRepo::new(&pool)
            .get(record.id)
            .await
            .expect("get failed")
            .unwrap();
        assert!(fetched.hidden);

        // A sixth viewer's listing no longer includes it.
        let wide = BoundingBox::from_corners(
            Coordinates::new(-180.0, -89.0).unwrap(),
            Coordinates::new(180.0, 89.0).unwrap(),
        );
        let listed = PointRepo::new(&pool)
            .list_visible(&wide, "voter-6", chrono::Duration::hours(12), 500)
            .await
            .expect("list failed");
        assert!(listed.iter().all(|p| p.id != record.id));

        // Re-running the check on an already-hidden point stays quiet.
        check_point(&pool, &policy, record.id)
            .await
            .expect("redundant check failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn queue_end_to_end_hides_point() {
        let pool = test_pool().await;
        let queue = ModerationQueue::spawn(pool.clone(), ModerationPolicy::new(0), 16);
        let creator = format!("creator-{}", Uuid::new_v4());

        let record = PointRepo::new(&pool)
            .create(Coordinates::new(6.0, 6.0).unwrap(), "gone soon", "flag", &creator)
            .await
            .expect("create failed");
        VoteRepo::new(&pool)
            .cast(&format!("voter-{}", record.id), record.id, -1)
            .await
            .expect("cast failed");

        queue.enqueue(record.id);

        // Fire-and-forget: poll until the worker gets to it.
        for _ in 0..50 {
            let fetched = PointRepo::new(&pool)
                .get(record.id)
                .await
                .expect("get failed")
                .unwrap();
            if fetched.hidden {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
        panic!("point was never hidden by the worker");
    }
}
