//! Trait progression: categories, cost tables and the spend ledger.

mod category;
mod cost;
mod error;
mod ledger;
mod record;

pub use category::TraitCategory;
pub use cost::{CostEntry, CostRule, CostTable};
pub use error::{EditError, RefundError, SpendError};
pub use ledger::Ledger;
pub use record::{Quote, RefundReceipt, SpendReceipt, SpendRecord, SpendStatus};
