//! Aggregate roots - domain objects that own their related data
//!
//! | Concern | How it is enforced |
//! |---------|--------------------|
//! | Values stay in range | Private fields; every write path checks the schema |
//! | Balances never go negative | `CurrencyBalance` is unsigned, debits are all-or-nothing |
//! | Outcomes are reported | Mutations return outcome values or typed errors |

pub mod character;

pub use character::{CharacterSheet, CharacterStage, CreationFinished, TraitEdit};
