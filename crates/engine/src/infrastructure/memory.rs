//! In-memory character storage.

use async_trait::async_trait;
use dashmap::DashMap;
use wodsheet_domain::{CharacterId, CharacterSheet};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// Process-local [`CharacterRepo`] backed by a concurrent map.
///
/// Sheets are cloned in and out, so a caller never holds a reference into
/// the store. Saving a sheet that no longer fits its schema is refused.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    sheets: DashMap<CharacterId, CharacterSheet>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get(&self, id: CharacterId) -> Result<Option<CharacterSheet>, RepoError> {
        Ok(self.sheets.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, sheet: &CharacterSheet) -> Result<(), RepoError> {
        if !sheet.is_consistent() {
            return Err(RepoError::constraint(format!(
                "Character {} has values outside its {} schema",
                sheet.id(),
                sheet.game_line()
            )));
        }
        self.sheets.insert(sheet.id(), sheet.clone());
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        self.sheets
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("CharacterSheet", id))
    }
}
