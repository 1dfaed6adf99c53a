//! Typed failures of the progression ledger.
//!
//! Every variant is a recoverable outcome the caller is expected to branch
//! on. A call that returns one of these has changed nothing.

use thiserror::Error;

use crate::aggregates::CharacterStage;
use crate::game_lines::GameLine;
use crate::ids::SpendRecordId;
use crate::progression::{SpendStatus, TraitCategory};
use crate::value_objects::{Currency, TraitRange};

/// Why a purchase was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpendError {
    #[error("Unknown trait: {trait_name}")]
    UnknownTrait { trait_name: String },

    #[error("{trait_name} is already at its maximum of {max}")]
    AtMaximum { trait_name: String, max: i32 },

    #[error("Not enough {currency}: {trait_name} costs {cost}, balance is {balance}")]
    InsufficientFunds {
        trait_name: String,
        currency: Currency,
        cost: u32,
        balance: u32,
    },

    #[error("{trait_name} ({category}) cannot be bought with {currency}")]
    NotPurchasable {
        trait_name: String,
        category: TraitCategory,
        currency: Currency,
    },

    #[error("{trait_name} cannot exceed {prerequisite} ({prerequisite_value})")]
    PrerequisiteNotMet {
        trait_name: String,
        prerequisite: String,
        prerequisite_value: i32,
    },

    #[error("{currency} cannot be spent while the character is in {stage}")]
    CurrencyUnavailable {
        currency: Currency,
        stage: CharacterStage,
    },

    #[error("Ledger for {ledger} cannot be used on a {sheet} sheet")]
    GameLineMismatch { ledger: GameLine, sheet: GameLine },

    #[error("{game_line} sheet stores {actual} values but its rules expect {expected}")]
    SchemaMismatch {
        game_line: GameLine,
        expected: usize,
        actual: usize,
    },
}

impl SpendError {
    pub fn unknown_trait(name: impl Into<String>) -> Self {
        Self::UnknownTrait {
            trait_name: name.into(),
        }
    }

    /// Stable machine-readable code, for callers that map failures to messages.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTrait { .. } => "unknown_trait",
            Self::AtMaximum { .. } => "at_maximum",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::NotPurchasable { .. } => "not_purchasable",
            Self::PrerequisiteNotMet { .. } => "prerequisite_not_met",
            Self::CurrencyUnavailable { .. } => "currency_unavailable",
            Self::GameLineMismatch { .. } => "game_line_mismatch",
            Self::SchemaMismatch { .. } => "schema_mismatch",
        }
    }
}

/// Why a spend record could not be refunded or approved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefundError {
    #[error("Spend record not found: {0}")]
    RecordNotFound(SpendRecordId),

    #[error("Spend record {id} is already {status}")]
    AlreadySettled { id: SpendRecordId, status: SpendStatus },

    #[error("A later purchase of {trait_name} must be refunded first")]
    Superseded { trait_name: String },

    #[error("{trait_name} is now {actual}, not the purchased {expected}")]
    TraitChanged {
        trait_name: String,
        expected: i32,
        actual: i32,
    },

    #[error("Ledger for {ledger} cannot be used on a {sheet} sheet")]
    GameLineMismatch { ledger: GameLine, sheet: GameLine },

    #[error("{game_line} sheet stores {actual} values but its rules expect {expected}")]
    SchemaMismatch {
        game_line: GameLine,
        expected: usize,
        actual: usize,
    },
}

/// Why a direct Storyteller edit was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Unknown trait: {trait_name}")]
    UnknownTrait { trait_name: String },

    #[error("{value} is outside {trait_name}'s range {range}")]
    OutOfRange {
        trait_name: String,
        value: i32,
        range: TraitRange,
    },
}
