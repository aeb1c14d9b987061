//! mapdrop-server: HTTP surface and persistence for the map-annotation service
//!
//! Anonymous users drop geotagged points on a map, vote them up or down, and
//! the community hides abusive content through a score threshold. This crate
//! owns the axum routes, the Postgres repositories, and the background
//! moderation worker; domain rules live in `mapdrop-core`.

pub mod config;
pub mod db;
pub mod http;
pub mod identity;
pub mod state;
pub mod worker;

use std::sync::Arc;

use mapdrop_core::ModerationPolicy;

use crate::db::repos::DbError;
use crate::identity::{IdentityGate, OpenGate};
use crate::state::AppState;
use crate::worker::ModerationQueue;

pub use config::AppConfig;

/// Top-level server error
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Connect, migrate, and run the HTTP server until shutdown.
///
/// Uses the permissive [`OpenGate`] identity collaborator; deployments with a
/// verification service plug theirs in via [`serve_with_gate`].
pub async fn serve(config: AppConfig) -> Result<(), ServeError> {
    serve_with_gate(config, Arc::new(OpenGate)).await
}

/// Like [`serve`], with an explicit identity gate.
pub async fn serve_with_gate(
    config: AppConfig,
    gate: Arc<dyn IdentityGate>,
) -> Result<(), ServeError> {
    let pool = db::pool::create_pool(&config.database_url)
        .await
        .map_err(DbError::from)?;

    db::migrations::run(&pool).await?;

    let policy = ModerationPolicy::new(config.hide_threshold);
    let moderation = ModerationQueue::spawn(pool.clone(), policy, config.moderation_queue_depth);

    let state = AppState {
        pool,
        config,
        moderation,
        gate,
    };

    http::server::run(state).await
}
