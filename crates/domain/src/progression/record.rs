//! Spend history and the values the ledger hands back to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{SpendRecordId, TraitId};
use crate::progression::TraitCategory;
use crate::value_objects::Currency;

/// Review state of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendStatus {
    /// Committed, awaiting Storyteller review.
    Pending,
    Approved,
    /// Denied; the dot and the currency were given back.
    Refunded,
}

impl SpendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for SpendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One committed purchase in a sheet's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendRecord {
    pub id: SpendRecordId,
    pub trait_id: TraitId,
    pub trait_name: String,
    pub category: TraitCategory,
    pub currency: Currency,
    pub cost: u32,
    pub new_value: i32,
    /// Points the linked temporary half gained with this dot; taken back on refund.
    #[serde(default)]
    pub temporary_gain: i32,
    pub spent_at: DateTime<Utc>,
    pub status: SpendStatus,
}

impl SpendRecord {
    pub fn is_pending(&self) -> bool {
        self.status == SpendStatus::Pending
    }

    pub fn is_refunded(&self) -> bool {
        self.status == SpendStatus::Refunded
    }
}

/// Price check result; nothing was spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub trait_name: String,
    pub category: TraitCategory,
    pub currency: Currency,
    pub current_value: i32,
    pub new_value: i32,
    pub cost: u32,
    pub balance: u32,
}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendReceipt {
    pub record_id: SpendRecordId,
    pub trait_name: String,
    pub category: TraitCategory,
    pub currency: Currency,
    pub cost: u32,
    pub new_value: i32,
    pub balance_after: u32,
}

/// Result of a successful refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundReceipt {
    pub record_id: SpendRecordId,
    pub trait_name: String,
    pub currency: Currency,
    pub refunded: u32,
    pub restored_value: i32,
    pub balance_after: u32,
}
