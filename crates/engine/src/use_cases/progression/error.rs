//! Progression operation errors.

use crate::infrastructure::ports::RepoError;
use wodsheet_domain::{
    CharacterId, DomainError, EditError, GameLine, RefundError, SpendError, StatError,
};

/// Errors that can occur during progression operations.
///
/// Every variant leaves the stored sheet as it was.
#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Game line not registered: {0}")]
    UnknownGameLine(GameLine),

    #[error("Unknown pool: {pool}")]
    UnknownPool { pool: String },

    #[error("Not enough {pool}: requested {requested}, {available} available")]
    InsufficientPool {
        pool: String,
        requested: i32,
        available: i32,
    },

    #[error(transparent)]
    Spend(#[from] SpendError),

    #[error(transparent)]
    Refund(#[from] RefundError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Stat(#[from] StatError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
