//! Persistence ports.

use async_trait::async_trait;
use wodsheet_domain::{CharacterId, CharacterSheet};

use super::RepoError;

/// Loads and stores whole character sheets.
///
/// A sheet is always saved as one unit, so every field a ledger call touched
/// is persisted together.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<CharacterSheet>, RepoError>;
    async fn save(&self, sheet: &CharacterSheet) -> Result<(), RepoError>;
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;
}
