//! wodsheet domain: trait progression and the point-buy economy.
//!
//! Pure, synchronous rules code with no I/O:
//! - [`value_objects::LinkedStat`]: permanent/temporary stat pairs
//! - [`schema::TraitSchema`]: per-line trait layout, built once
//! - [`progression::Ledger`]: priced, atomic purchases of trait dots
//! - [`game_lines`]: the six supported lines and their cost tables

pub mod aggregates;
pub mod error;
pub mod game_lines;
pub mod ids;
pub mod progression;
pub mod schema;
pub mod value_objects;

pub use aggregates::{CharacterSheet, CharacterStage, CreationFinished, TraitEdit};
pub use error::DomainError;
pub use game_lines::{CharacterType, GameLine, GameLineRegistry};
pub use ids::{CharacterId, SpendRecordId, TraitId};
pub use progression::{
    CostEntry, CostRule, CostTable, EditError, Ledger, Quote, RefundError, RefundReceipt,
    SpendError, SpendReceipt, SpendRecord, SpendStatus, TraitCategory,
};
pub use schema::{PairSpec, TraitDef, TraitSchema, TraitSchemaBuilder, TraitSpec};
pub use value_objects::{
    CharacterName, Currency, CurrencyBalance, LinkedStat, LinkedStatDef, LinkedStatView,
    RaisePolicy, StatError, TraitRange, TraitValues,
};
