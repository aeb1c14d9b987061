//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::identity::IdentityGate;
use crate::worker::ModerationQueue;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: AppConfig,
    /// Handle to the background hide-check worker
    pub moderation: ModerationQueue,
    /// Verification collaborator (external subsystem)
    pub gate: Arc<dyn IdentityGate>,
}
