//! Linked permanent/temporary stat pairs.
//!
//! World of Darkness sheets track many "capacity vs. current" pairs:
//! - Willpower (permanent rating vs. temporary points)
//! - Blood Pool (maximum vs. current blood)
//! - Rage and Gnosis
//! - Glamour and Banality
//! - Hunter Virtues (Conviction, Vision, Zeal)
//!
//! A [`LinkedStatDef`] is declared once per character type in its schema.
//! Each sheet owns the two integers; [`LinkedStat`] is the accessor that
//! reads and writes them through one coherent API.
//!
//! # Invariants
//!
//! - When `cap_temporary` is set, `temporary <= permanent` after every write.
//! - `temporary >= min_temporary` after every write.
//! - All operations are total: bad requests are reported through the return
//!   value or clamped as documented per operation, never half-applied.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::TraitId;
use crate::value_objects::{TraitRange, TraitValues};

/// Invalid requests against a linked stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatError {
    /// Spend/restore amounts must be non-negative.
    #[error("Invalid amount: {0} (must be zero or more)")]
    InvalidAmount(i32),
}

/// What buying a dot of the permanent half does to the temporary half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaisePolicy {
    /// Temporary also gains one point.
    RaiseBoth,
    /// Temporary is refilled to the new permanent value.
    Refill,
    /// Temporary is left alone.
    Keep,
}

/// Declaration of a permanent/temporary pair, fixed at schema build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedStatDef {
    name: &'static str,
    permanent: TraitId,
    temporary: TraitId,
    permanent_range: TraitRange,
    cap_temporary: bool,
    min_temporary: i32,
    max_temporary: i32,
    raise_policy: RaisePolicy,
}

impl LinkedStatDef {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: &'static str,
        permanent: TraitId,
        temporary: TraitId,
        permanent_range: TraitRange,
        cap_temporary: bool,
        min_temporary: i32,
        max_temporary: i32,
        raise_policy: RaisePolicy,
    ) -> Self {
        Self {
            name,
            permanent,
            temporary,
            permanent_range,
            cap_temporary,
            min_temporary,
            max_temporary,
            raise_policy,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn permanent_id(&self) -> TraitId {
        self.permanent
    }

    pub fn temporary_id(&self) -> TraitId {
        self.temporary
    }

    pub fn cap_temporary(&self) -> bool {
        self.cap_temporary
    }

    pub fn min_temporary(&self) -> i32 {
        self.min_temporary
    }

    pub fn max_temporary(&self) -> i32 {
        self.max_temporary
    }

    pub fn raise_policy(&self) -> RaisePolicy {
        self.raise_policy
    }

    /// Upper bound for the temporary value given the current permanent one.
    fn temporary_ceiling(&self, permanent: i32) -> i32 {
        if self.cap_temporary {
            permanent.min(self.max_temporary)
        } else {
            self.max_temporary
        }
    }

    fn clamp_temporary(&self, value: i32, permanent: i32) -> i32 {
        value
            .min(self.temporary_ceiling(permanent))
            .max(self.min_temporary)
    }

    /// Whether a stored pair satisfies this declaration.
    pub fn holds_for(&self, values: &TraitValues) -> bool {
        let permanent = values.get(self.permanent);
        let temporary = values.get(self.temporary);
        self.permanent_range.contains(permanent)
            && temporary >= self.min_temporary
            && temporary <= self.temporary_ceiling(permanent).max(self.min_temporary)
    }
}

// =============================================================================
// Read-only view
// =============================================================================

/// Read-only access to a linked pair.
#[derive(Debug, Clone, Copy)]
pub struct LinkedStatView<'a> {
    def: &'a LinkedStatDef,
    values: &'a TraitValues,
}

impl<'a> LinkedStatView<'a> {
    pub(crate) fn new(def: &'a LinkedStatDef, values: &'a TraitValues) -> Self {
        Self { def, values }
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn permanent(&self) -> i32 {
        self.values.get(self.def.permanent)
    }

    pub fn temporary(&self) -> i32 {
        self.values.get(self.def.temporary)
    }

    /// Temporary has reached (or passed) permanent.
    pub fn is_full(&self) -> bool {
        self.temporary() >= self.permanent()
    }

    /// Temporary is at its floor.
    pub fn is_depleted(&self) -> bool {
        self.temporary() <= self.def.min_temporary
    }

    /// Points currently missing from the pool (never negative).
    pub fn spent(&self) -> i32 {
        (self.permanent() - self.temporary()).max(0)
    }

    /// Whether `amount` points can be spent without dropping below the floor.
    pub fn can_spend(&self, amount: i32) -> bool {
        amount == 0
            || (amount > 0 && self.temporary().saturating_sub(amount) >= self.def.min_temporary)
    }
}

impl std::fmt::Display for LinkedStatView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.temporary(), self.permanent())
    }
}

// =============================================================================
// Mutable accessor
// =============================================================================

/// Mutable accessor over one linked pair of a sheet.
///
/// # Example
///
/// ```
/// use wodsheet_domain::aggregates::CharacterSheet;
/// use wodsheet_domain::game_lines::GameLine;
/// use wodsheet_domain::value_objects::CharacterName;
///
/// let name = CharacterName::new("Eleanor").unwrap();
/// let mut sheet = CharacterSheet::new(name, GameLine::Human, 21);
///
/// let mut willpower = sheet.willpower().unwrap();
/// assert_eq!(willpower.permanent(), 3);
/// assert!(willpower.spend(2).unwrap());
/// assert_eq!(willpower.temporary(), 1);
/// assert_eq!(willpower.restore_full(), 2);
/// ```
#[derive(Debug)]
pub struct LinkedStat<'a> {
    def: &'a LinkedStatDef,
    values: &'a mut TraitValues,
}

impl<'a> LinkedStat<'a> {
    pub(crate) fn new(def: &'a LinkedStatDef, values: &'a mut TraitValues) -> Self {
        Self { def, values }
    }

    pub fn view(&self) -> LinkedStatView<'_> {
        LinkedStatView::new(self.def, self.values)
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn permanent(&self) -> i32 {
        self.view().permanent()
    }

    pub fn temporary(&self) -> i32 {
        self.view().temporary()
    }

    pub fn is_full(&self) -> bool {
        self.view().is_full()
    }

    pub fn is_depleted(&self) -> bool {
        self.view().is_depleted()
    }

    pub fn spent(&self) -> i32 {
        self.view().spent()
    }

    pub fn can_spend(&self, amount: i32) -> bool {
        self.view().can_spend(amount)
    }

    /// Set the permanent rating.
    ///
    /// Returns `false` without touching anything if `value` is outside the
    /// permanent trait's range. When the pair is capped, temporary is lowered
    /// to the new permanent value if it now exceeds it.
    pub fn set_permanent(&mut self, value: i32) -> bool {
        if !self.def.permanent_range.contains(value) {
            return false;
        }
        self.values.set(self.def.permanent, value);
        if self.def.cap_temporary && self.temporary() > value {
            self.values.set(self.def.temporary, value.max(self.def.min_temporary));
        }
        true
    }

    /// Set the temporary value, clamped into `[min_temporary, permanent]`
    /// when capped or `[min_temporary, max_temporary]` otherwise.
    pub fn set_temporary(&mut self, value: i32) {
        let clamped = self.def.clamp_temporary(value, self.permanent());
        self.values.set(self.def.temporary, clamped);
    }

    /// Spend temporary points.
    ///
    /// `Ok(false)` with no mutation when spending `amount` would take the
    /// pool below its floor.
    /// Spending zero always succeeds and changes nothing.
    pub fn spend(&mut self, amount: i32) -> Result<bool, StatError> {
        if amount < 0 {
            return Err(StatError::InvalidAmount(amount));
        }
        if !self.can_spend(amount) {
            return Ok(false);
        }
        if amount > 0 {
            self.set_temporary(self.temporary() - amount);
        }
        Ok(true)
    }

    /// Restore temporary points, returning how many were actually restored.
    ///
    /// Capped pairs stop at permanent; uncapped pairs stop at `max_temporary`.
    pub fn restore(&mut self, amount: i32) -> Result<i32, StatError> {
        if amount < 0 {
            return Err(StatError::InvalidAmount(amount));
        }
        let before = self.temporary();
        let ceiling = self.def.temporary_ceiling(self.permanent());
        let after = before.saturating_add(amount).min(ceiling).max(before);
        self.values.set(self.def.temporary, after);
        Ok(after - before)
    }

    /// Refill temporary up to permanent. Returns the points restored.
    pub fn restore_full(&mut self) -> i32 {
        let gap = (self.permanent() - self.temporary()).max(0);
        // gap is never negative, so restore cannot fail
        self.restore(gap).unwrap_or(0)
    }

    /// Apply this pair's [`RaisePolicy`] after the permanent half gained a dot.
    /// Returns the points the temporary half gained.
    pub(crate) fn after_permanent_raised(&mut self) -> i32 {
        let before = self.temporary();
        match self.def.raise_policy {
            RaisePolicy::RaiseBoth => self.set_temporary(before + 1),
            RaisePolicy::Refill => self.set_temporary(self.permanent()),
            RaisePolicy::Keep => {}
        }
        self.temporary() - before
    }

    /// Take back `temporary_gain` points granted by a purchase and
    /// re-establish the cap after the permanent half lost a dot.
    pub(crate) fn after_permanent_lowered(&mut self, temporary_gain: i32) {
        self.set_temporary(self.temporary().saturating_sub(temporary_gain.max(0)));
    }
}
