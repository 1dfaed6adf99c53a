//! Value objects - Immutable objects defined by their attributes

mod currency;
mod linked_stat;
mod names;
mod rating;
mod trait_values;

pub use currency::{Currency, CurrencyBalance};
pub use linked_stat::{LinkedStat, LinkedStatDef, LinkedStatView, RaisePolicy, StatError};
pub use names::CharacterName;
pub use rating::TraitRange;
pub use trait_values::TraitValues;
