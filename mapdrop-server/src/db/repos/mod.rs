//! Repository implementations for database access
//!
//! Patterns shared by the repositories:
//! - Conflicts are handled via ON CONFLICT (no check-then-insert)
//! - Per-viewer fields are computed in SQL, not in a second pass
//! - No repository surfaces "not found" on the soft-delete path; an
//!   ownership mismatch is indistinguishable from a missing row by design

pub mod points;
pub mod votes;

pub use points::{PointRecord, PointRepo, VisiblePoint};
pub use votes::{VoteOutcome, VoteRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
