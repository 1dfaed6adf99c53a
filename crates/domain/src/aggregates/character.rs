//! Character sheet aggregate
//!
//! # Design
//!
//! - **Private fields**: values and balances only change through the
//!   ledger, the linked stat accessors, or the explicit Storyteller edit
//! - **Schema-indexed storage**: trait values live in a dense array laid out
//!   by the game line's schema; names are resolved once through its index
//! - **Outcome values**: mutations return what happened (`TraitEdit`,
//!   `CreationFinished`) so callers can report it

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::DomainError;
use crate::game_lines::{CharacterType, GameLine};
use crate::ids::{CharacterId, SpendRecordId, TraitId};
use crate::progression::{EditError, SpendRecord};
use crate::schema::TraitSchema;
use crate::value_objects::{
    CharacterName, Currency, CurrencyBalance, LinkedStat, LinkedStatView, TraitRange, TraitValues,
};

/// Where a character is in its life cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterStage {
    /// Being built; freebie points are spendable.
    #[default]
    Creation,
    /// In play; experience is spendable.
    Active,
}

impl CharacterStage {
    /// Whether `currency` may be spent in this stage.
    pub fn accepts(&self, currency: Currency) -> bool {
        matches!(
            (self, currency),
            (Self::Creation, Currency::Freebies) | (Self::Active, Currency::Experience)
        )
    }
}

impl fmt::Display for CharacterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creation => write!(f, "character creation"),
            Self::Active => write!(f, "active play"),
        }
    }
}

/// Result of a direct Storyteller edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitEdit {
    pub trait_id: TraitId,
    pub previous: i32,
    pub value: i32,
}

/// Result of leaving character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreationFinished {
    pub forfeited_freebies: u32,
}

/// A character's progression state: trait values, balances and history.
///
/// # Invariants
///
/// - `values` is laid out by `game_line`'s schema and every value lies in
///   its trait's range
/// - every capped linked pair has `temporary <= permanent`
/// - balances never go negative (`CurrencyBalance` is unsigned)
///
/// # Example
///
/// ```
/// use wodsheet_domain::aggregates::{CharacterSheet, CharacterStage};
/// use wodsheet_domain::game_lines::GameLine;
/// use wodsheet_domain::value_objects::CharacterName;
///
/// let name = CharacterName::new("Ysabel").unwrap();
/// let sheet = CharacterSheet::new(name, GameLine::Changeling, 15);
///
/// assert_eq!(sheet.stage(), CharacterStage::Creation);
/// assert_eq!(sheet.freebies().amount(), 15);
/// assert_eq!(sheet.trait_value("wayfare"), Some(0));
/// assert_eq!(sheet.trait_value("not_a_trait"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    id: CharacterId,
    name: CharacterName,
    game_line: GameLine,
    stage: CharacterStage,
    values: TraitValues,
    freebies: CurrencyBalance,
    experience: CurrencyBalance,
    favored: BTreeSet<TraitId>,
    history: Vec<SpendRecord>,
}

impl CharacterSheet {
    /// A fresh sheet in character creation with every trait at its default.
    pub fn new(name: CharacterName, game_line: GameLine, starting_freebies: u32) -> Self {
        Self {
            id: CharacterId::new(),
            name,
            game_line,
            stage: CharacterStage::Creation,
            values: game_line.character_type().schema().defaults(),
            freebies: CurrencyBalance::new(starting_freebies),
            experience: CurrencyBalance::ZERO,
            favored: BTreeSet::new(),
            history: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn game_line(&self) -> GameLine {
        self.game_line
    }

    pub fn character_type(&self) -> &'static dyn CharacterType {
        self.game_line.character_type()
    }

    pub fn schema(&self) -> &'static TraitSchema {
        self.character_type().schema()
    }

    pub fn stage(&self) -> CharacterStage {
        self.stage
    }

    pub fn values(&self) -> &TraitValues {
        &self.values
    }

    pub fn trait_value(&self, name: &str) -> Option<i32> {
        self.schema().id(name).map(|id| self.values.get(id))
    }

    pub fn balance(&self, currency: Currency) -> CurrencyBalance {
        match currency {
            Currency::Freebies => self.freebies,
            Currency::Experience => self.experience,
        }
    }

    pub fn freebies(&self) -> CurrencyBalance {
        self.freebies
    }

    pub fn experience(&self) -> CurrencyBalance {
        self.experience
    }

    pub fn history(&self) -> &[SpendRecord] {
        &self.history
    }

    pub fn record(&self, id: SpendRecordId) -> Option<&SpendRecord> {
        self.history.iter().find(|r| r.id == id)
    }

    pub fn is_favored(&self, id: TraitId) -> bool {
        self.favored.contains(&id)
    }

    pub fn favored(&self) -> impl Iterator<Item = TraitId> + '_ {
        self.favored.iter().copied()
    }

    /// Whether the stored values still fit this sheet's schema.
    pub fn is_consistent(&self) -> bool {
        self.schema().validate(&self.values)
    }

    // -------------------------------------------------------------------------
    // Linked stats
    // -------------------------------------------------------------------------

    pub fn linked_stat(&mut self, name: &str) -> Option<LinkedStat<'_>> {
        let def = self.game_line.character_type().schema().linked(name)?;
        Some(LinkedStat::new(def, &mut self.values))
    }

    pub fn linked_stat_view(&self, name: &str) -> Option<LinkedStatView<'_>> {
        let def = self.schema().linked(name)?;
        Some(LinkedStatView::new(def, &self.values))
    }

    pub fn willpower(&mut self) -> Option<LinkedStat<'_>> {
        self.linked_stat("willpower")
    }

    /// Names of every linked pair on this sheet.
    pub fn linked_stat_names(&self) -> Vec<&'static str> {
        self.schema().linked_stats().iter().map(|l| l.name()).collect()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Mark a trait as favored (in-clan Discipline, affinity Sphere) or not.
    pub fn set_favored(&mut self, name: &str, favored: bool) -> Result<(), DomainError> {
        let id = self
            .schema()
            .id(name)
            .ok_or_else(|| DomainError::not_found("Trait", name))?;
        if favored {
            self.favored.insert(id);
        } else {
            self.favored.remove(&id);
        }
        Ok(())
    }

    /// Storyteller escape hatch: set a trait directly.
    ///
    /// Bypasses cost, currency, stage and prerequisites. The value must still
    /// lie in the trait's range; the temporary half of a capped pair must
    /// also stay at or below its permanent half. Lowering a permanent half
    /// drags its temporary down with it.
    pub fn storyteller_set(&mut self, name: &str, value: i32) -> Result<TraitEdit, EditError> {
        let schema = self.game_line.character_type().schema();
        let def = schema.def_by_name(name).ok_or_else(|| EditError::UnknownTrait {
            trait_name: name.to_string(),
        })?;
        let id = def.id();
        let previous = self.values.get(id);

        if let Some(pair) = schema.linked_for_permanent(id) {
            if !LinkedStat::new(pair, &mut self.values).set_permanent(value) {
                return Err(EditError::OutOfRange {
                    trait_name: name.to_string(),
                    value,
                    range: def.range(),
                });
            }
        } else if let Some(pair) = schema
            .linked_stats()
            .iter()
            .find(|l| l.temporary_id() == id)
        {
            let permanent = self.values.get(pair.permanent_id());
            let ceiling = if pair.cap_temporary() {
                permanent.min(pair.max_temporary())
            } else {
                pair.max_temporary()
            };
            let allowed = TraitRange::new(pair.min_temporary(), ceiling.max(pair.min_temporary()))
                .unwrap_or_else(|_| def.range());
            if !allowed.contains(value) {
                return Err(EditError::OutOfRange {
                    trait_name: name.to_string(),
                    value,
                    range: allowed,
                });
            }
            self.values.set(id, value);
        } else {
            if !def.range().contains(value) {
                return Err(EditError::OutOfRange {
                    trait_name: name.to_string(),
                    value,
                    range: def.range(),
                });
            }
            self.values.set(id, value);
        }

        Ok(TraitEdit {
            trait_id: id,
            previous,
            value,
        })
    }

    /// Add experience. Returns the new balance.
    pub fn award_experience(&mut self, amount: u32) -> u32 {
        self.experience.credit(amount)
    }

    /// Leave character creation.
    ///
    /// With `forfeit_freebies`, unspent freebies are dropped.
    pub fn finish_creation(
        &mut self,
        forfeit_freebies: bool,
    ) -> Result<CreationFinished, DomainError> {
        if self.stage != CharacterStage::Creation {
            return Err(DomainError::validation(format!(
                "Character {} has already finished creation",
                self.id
            )));
        }
        self.stage = CharacterStage::Active;
        let forfeited_freebies = if forfeit_freebies {
            self.freebies.forfeit()
        } else {
            0
        };
        Ok(CreationFinished { forfeited_freebies })
    }

    // -------------------------------------------------------------------------
    // Ledger access
    // -------------------------------------------------------------------------

    pub(crate) fn values_mut(&mut self) -> &mut TraitValues {
        &mut self.values
    }

    pub(crate) fn balance_mut(&mut self, currency: Currency) -> &mut CurrencyBalance {
        match currency {
            Currency::Freebies => &mut self.freebies,
            Currency::Experience => &mut self.experience,
        }
    }

    pub(crate) fn push_record(&mut self, record: SpendRecord) {
        self.history.push(record);
    }

    pub(crate) fn history_mut(&mut self) -> &mut Vec<SpendRecord> {
        &mut self.history
    }
}
