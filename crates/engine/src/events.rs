//! Progression lifecycle events and their subscribers.
//!
//! Components that react to character changes are handed to
//! [`ProgressionUseCases`](crate::use_cases::progression::ProgressionUseCases)
//! at construction. Events are delivered after the sheet was saved.

use serde::Serialize;
use wodsheet_domain::{CharacterId, Currency, GameLine, SpendRecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressionEvent {
    CharacterCreated {
        character_id: CharacterId,
        game_line: GameLine,
        starting_freebies: u32,
    },
    CharacterDeleted {
        character_id: CharacterId,
    },
    TraitPurchased {
        character_id: CharacterId,
        record_id: SpendRecordId,
        trait_name: String,
        currency: Currency,
        cost: u32,
        new_value: i32,
    },
    PurchaseRefunded {
        character_id: CharacterId,
        record_id: SpendRecordId,
        trait_name: String,
        currency: Currency,
        refunded: u32,
    },
    PurchaseApproved {
        character_id: CharacterId,
        record_id: SpendRecordId,
    },
    ExperienceAwarded {
        character_id: CharacterId,
        amount: u32,
        balance: u32,
    },
    CreationFinished {
        character_id: CharacterId,
        forfeited_freebies: u32,
    },
    TraitEdited {
        character_id: CharacterId,
        trait_name: String,
        previous: i32,
        value: i32,
    },
    PoolChanged {
        character_id: CharacterId,
        pool: String,
        permanent: i32,
        temporary: i32,
    },
}

impl ProgressionEvent {
    pub fn character_id(&self) -> CharacterId {
        match self {
            Self::CharacterCreated { character_id, .. }
            | Self::CharacterDeleted { character_id }
            | Self::TraitPurchased { character_id, .. }
            | Self::PurchaseRefunded { character_id, .. }
            | Self::PurchaseApproved { character_id, .. }
            | Self::ExperienceAwarded { character_id, .. }
            | Self::CreationFinished { character_id, .. }
            | Self::TraitEdited { character_id, .. }
            | Self::PoolChanged { character_id, .. } => *character_id,
        }
    }
}

/// Receives every [`ProgressionEvent`].
#[cfg_attr(test, mockall::automock)]
pub trait ProgressionSubscriber: Send + Sync {
    fn on_event(&self, event: &ProgressionEvent);
}
