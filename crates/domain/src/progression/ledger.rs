//! The trait progression ledger.
//!
//! Every purchase of a dot goes through [`Ledger::spend`]. A purchase is
//! checked in a fixed order and either commits completely (value +1, linked
//! temporary adjusted, currency debited, record appended) or returns a
//! [`SpendError`] with the sheet untouched.
//!
//! Check order:
//! 0. the sheet belongs to this character type and its values fit the schema
//! 1. the trait exists in the character type's schema
//! 2. the current stage accepts the currency
//! 3. the effective category has a cost entry for the currency
//! 4. the next dot fits under the range maximum and the entry's ceiling
//! 5. the next dot does not pass the trait's prerequisite
//! 6. the balance covers the cost

use chrono::{DateTime, Utc};

use crate::aggregates::CharacterSheet;
use crate::game_lines::CharacterType;
use crate::ids::{SpendRecordId, TraitId};
use crate::progression::{
    Quote, RefundError, RefundReceipt, SpendError, SpendReceipt, SpendRecord, SpendStatus,
    TraitCategory,
};
use crate::value_objects::{Currency, LinkedStat};

/// A validated, not yet committed purchase.
struct Purchase {
    trait_id: TraitId,
    trait_name: &'static str,
    category: TraitCategory,
    current: i32,
    cost: u32,
    balance: u32,
}

impl Purchase {
    fn new_value(&self) -> i32 {
        self.current + 1
    }
}

/// Spends currency on traits of one character type.
#[derive(Clone, Copy)]
pub struct Ledger<'a> {
    character_type: &'a dyn CharacterType,
}

impl<'a> Ledger<'a> {
    pub fn new(character_type: &'a dyn CharacterType) -> Self {
        Self { character_type }
    }

    pub fn character_type(&self) -> &'a dyn CharacterType {
        self.character_type
    }

    /// Run every check [`Ledger::spend`] would, and report the price.
    pub fn quote(
        &self,
        sheet: &CharacterSheet,
        trait_name: &str,
        currency: Currency,
    ) -> Result<Quote, SpendError> {
        let purchase = self.plan(sheet, trait_name, currency)?;
        Ok(Quote {
            trait_name: purchase.trait_name.to_string(),
            category: purchase.category,
            currency,
            current_value: purchase.current,
            new_value: purchase.new_value(),
            cost: purchase.cost,
            balance: purchase.balance,
        })
    }

    /// Buy one dot of `trait_name` with `currency`.
    pub fn spend(
        &self,
        sheet: &mut CharacterSheet,
        trait_name: &str,
        currency: Currency,
        at: DateTime<Utc>,
    ) -> Result<SpendReceipt, SpendError> {
        let purchase = self.plan(sheet, trait_name, currency)?;

        let balance_after = match sheet.balance_mut(currency).debit(purchase.cost) {
            Some(remaining) => remaining,
            None => {
                return Err(SpendError::InsufficientFunds {
                    trait_name: purchase.trait_name.to_string(),
                    currency,
                    cost: purchase.cost,
                    balance: purchase.balance,
                })
            }
        };

        let new_value = purchase.new_value();
        let schema = self.character_type.schema();
        if !sheet.values_mut().set(purchase.trait_id, new_value) {
            sheet.balance_mut(currency).credit(purchase.cost);
            return Err(self.schema_mismatch(sheet));
        }
        let values = sheet.values_mut();
        let temporary_gain = schema
            .linked_for_permanent(purchase.trait_id)
            .map_or(0, |pair| LinkedStat::new(pair, values).after_permanent_raised());

        let record = SpendRecord {
            id: SpendRecordId::new(),
            trait_id: purchase.trait_id,
            trait_name: purchase.trait_name.to_string(),
            category: purchase.category,
            currency,
            cost: purchase.cost,
            new_value,
            temporary_gain,
            spent_at: at,
            status: SpendStatus::Pending,
        };
        let record_id = record.id;
        sheet.push_record(record);

        Ok(SpendReceipt {
            record_id,
            trait_name: purchase.trait_name.to_string(),
            category: purchase.category,
            currency,
            cost: purchase.cost,
            new_value,
            balance_after,
        })
    }

    /// Undo a pending purchase: remove the dot and credit the currency back.
    ///
    /// Only the latest live purchase of a trait can be refunded, and only
    /// while the trait still holds the purchased value.
    pub fn refund(
        &self,
        sheet: &mut CharacterSheet,
        record_id: SpendRecordId,
    ) -> Result<RefundReceipt, RefundError> {
        self.check_game_line_for_refund(sheet)?;

        let position = sheet
            .history()
            .iter()
            .position(|r| r.id == record_id)
            .ok_or(RefundError::RecordNotFound(record_id))?;
        let record = &sheet.history()[position];

        if !record.is_pending() {
            return Err(RefundError::AlreadySettled {
                id: record_id,
                status: record.status,
            });
        }
        let superseded = sheet.history()[position + 1..]
            .iter()
            .any(|later| later.trait_id == record.trait_id && !later.is_refunded());
        if superseded {
            return Err(RefundError::Superseded {
                trait_name: record.trait_name.clone(),
            });
        }
        let actual = sheet.values().get(record.trait_id);
        if actual != record.new_value {
            return Err(RefundError::TraitChanged {
                trait_name: record.trait_name.clone(),
                expected: record.new_value,
                actual,
            });
        }

        let trait_id = record.trait_id;
        let trait_name = record.trait_name.clone();
        let currency = record.currency;
        let refunded = record.cost;
        let restored_value = record.new_value - 1;
        let temporary_gain = record.temporary_gain;

        let schema = self.character_type.schema();
        let values = sheet.values_mut();
        values.set(trait_id, restored_value);
        if let Some(pair) = schema.linked_for_permanent(trait_id) {
            LinkedStat::new(pair, values).after_permanent_lowered(temporary_gain);
        }
        let balance_after = sheet.balance_mut(currency).credit(refunded);
        if let Some(record) = sheet.history_mut().get_mut(position) {
            record.status = SpendStatus::Refunded;
        }

        Ok(RefundReceipt {
            record_id,
            trait_name,
            currency,
            refunded,
            restored_value,
            balance_after,
        })
    }

    /// Mark a pending purchase as reviewed and kept.
    pub fn approve(
        &self,
        sheet: &mut CharacterSheet,
        record_id: SpendRecordId,
    ) -> Result<(), RefundError> {
        self.check_game_line_for_refund(sheet)?;

        let record = sheet
            .history_mut()
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or(RefundError::RecordNotFound(record_id))?;
        if !record.is_pending() {
            return Err(RefundError::AlreadySettled {
                id: record_id,
                status: record.status,
            });
        }
        record.status = SpendStatus::Approved;
        Ok(())
    }

    fn plan(
        &self,
        sheet: &CharacterSheet,
        trait_name: &str,
        currency: Currency,
    ) -> Result<Purchase, SpendError> {
        let ledger_line = self.character_type.game_line();
        if sheet.game_line() != ledger_line {
            return Err(SpendError::GameLineMismatch {
                ledger: ledger_line,
                sheet: sheet.game_line(),
            });
        }
        if !self.fits_layout(sheet) {
            return Err(self.schema_mismatch(sheet));
        }

        let schema = self.character_type.schema();
        let def = schema
            .def_by_name(trait_name)
            .ok_or_else(|| SpendError::unknown_trait(trait_name))?;
        let trait_id = def.id();
        let category = self
            .character_type
            .resolve_category(sheet, trait_id)
            .ok_or_else(|| SpendError::unknown_trait(trait_name))?;

        if !sheet.stage().accepts(currency) {
            return Err(SpendError::CurrencyUnavailable {
                currency,
                stage: sheet.stage(),
            });
        }

        let entry = match self.character_type.cost_table().get(category, currency) {
            Some(entry) if !category.is_reserve() => *entry,
            _ => {
                return Err(SpendError::NotPurchasable {
                    trait_name: def.name().to_string(),
                    category,
                    currency,
                })
            }
        };

        let current = sheet.values().get(trait_id);
        let max = def.range().with_ceiling(entry.ceiling()).max();
        if current >= max {
            return Err(SpendError::AtMaximum {
                trait_name: def.name().to_string(),
                max,
            });
        }

        if let Some(prerequisite) = def.capped_by().and_then(|id| schema.def(id)) {
            let prerequisite_value = sheet.values().get(prerequisite.id());
            if current + 1 > prerequisite_value {
                return Err(SpendError::PrerequisiteNotMet {
                    trait_name: def.name().to_string(),
                    prerequisite: prerequisite.name().to_string(),
                    prerequisite_value,
                });
            }
        }

        let cost = entry.rule().cost(current);
        let balance = sheet.balance(currency).amount();
        if balance < cost {
            return Err(SpendError::InsufficientFunds {
                trait_name: def.name().to_string(),
                currency,
                cost,
                balance,
            });
        }

        Ok(Purchase {
            trait_id,
            trait_name: def.name(),
            category,
            current,
            cost,
            balance,
        })
    }

    fn check_game_line_for_refund(&self, sheet: &CharacterSheet) -> Result<(), RefundError> {
        let ledger_line = self.character_type.game_line();
        if sheet.game_line() != ledger_line {
            return Err(RefundError::GameLineMismatch {
                ledger: ledger_line,
                sheet: sheet.game_line(),
            });
        }
        if !self.fits_layout(sheet) {
            return Err(RefundError::SchemaMismatch {
                game_line: ledger_line,
                expected: self.character_type.schema().len(),
                actual: sheet.values().len(),
            });
        }
        Ok(())
    }

    /// The sheet's values are laid out by this character type's schema.
    fn fits_layout(&self, sheet: &CharacterSheet) -> bool {
        let schema = self.character_type.schema();
        sheet.values().len() == schema.len()
            && (std::ptr::eq(schema, sheet.schema()) || schema.same_layout(sheet.schema()))
    }

    fn schema_mismatch(&self, sheet: &CharacterSheet) -> SpendError {
        SpendError::SchemaMismatch {
            game_line: self.character_type.game_line(),
            expected: self.character_type.schema().len(),
            actual: sheet.values().len(),
        }
    }
}
