//! Cost rules and per-character-type cost tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::progression::TraitCategory;
use crate::value_objects::Currency;

/// How much one more dot costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostRule {
    /// Same price for every dot.
    Flat { cost: u32 },
    /// `multiplier × new value`.
    PerNewDot { multiplier: u32 },
    /// `new_trait` when buying the first dot, `multiplier × new value` after that.
    PerNewDotOrFlatNew { multiplier: u32, new_trait: u32 },
}

impl CostRule {
    pub const fn flat(cost: u32) -> Self {
        Self::Flat { cost }
    }

    pub const fn per_new_dot(multiplier: u32) -> Self {
        Self::PerNewDot { multiplier }
    }

    pub const fn per_new_dot_or_new(multiplier: u32, new_trait: u32) -> Self {
        Self::PerNewDotOrFlatNew {
            multiplier,
            new_trait,
        }
    }

    /// Price of raising a trait from `current` to `current + 1`.
    pub fn cost(&self, current: i32) -> u32 {
        let new_value = u32::try_from(current.saturating_add(1)).unwrap_or(0);
        match *self {
            Self::Flat { cost } => cost,
            Self::PerNewDot { multiplier } => multiplier.saturating_mul(new_value),
            Self::PerNewDotOrFlatNew {
                multiplier,
                new_trait,
            } => {
                if current <= 0 {
                    new_trait
                } else {
                    multiplier.saturating_mul(new_value)
                }
            }
        }
    }
}

/// A cost rule plus an optional currency-specific ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostEntry {
    rule: CostRule,
    ceiling: Option<i32>,
}

impl CostEntry {
    pub const fn new(rule: CostRule) -> Self {
        Self {
            rule,
            ceiling: None,
        }
    }

    /// Purchases with this currency stop at `ceiling` even if the trait's
    /// range allows more (Arete caps at 3 during creation).
    pub const fn with_ceiling(mut self, ceiling: i32) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    pub fn rule(&self) -> CostRule {
        self.rule
    }

    pub fn ceiling(&self) -> Option<i32> {
        self.ceiling
    }
}

/// `(category, currency) -> CostEntry` for one character type.
///
/// A missing entry means the category cannot be bought with that currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostTable {
    entries: HashMap<(TraitCategory, Currency), CostEntry>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: TraitCategory, currency: Currency, entry: CostEntry) -> Self {
        self.entries.insert((category, currency), entry);
        self
    }

    /// Flat freebie price per dot.
    pub fn freebies(self, category: TraitCategory, cost: u32) -> Self {
        self.with(category, Currency::Freebies, CostEntry::new(CostRule::flat(cost)))
    }

    pub fn experience(self, category: TraitCategory, rule: CostRule) -> Self {
        self.with(category, Currency::Experience, CostEntry::new(rule))
    }

    pub fn get(&self, category: TraitCategory, currency: Currency) -> Option<&CostEntry> {
        self.entries.get(&(category, currency))
    }

    pub fn contains(&self, category: TraitCategory, currency: Currency) -> bool {
        self.entries.contains_key(&(category, currency))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A copy of `self` with every entry of `overrides` laid on top.
    pub fn merged(&self, overrides: &CostTable) -> CostTable {
        let mut entries = self.entries.clone();
        entries.extend(overrides.entries.iter().map(|(k, v)| (*k, *v)));
        CostTable { entries }
    }
}
