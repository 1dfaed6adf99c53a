//! The seam every game line implements.

use crate::aggregates::CharacterSheet;
use crate::game_lines::GameLine;
use crate::ids::TraitId;
use crate::progression::{CostTable, TraitCategory};
use crate::schema::TraitSchema;

/// Rules data one game line hands to the shared ledger.
///
/// Schema and cost table are built once; the ledger only reads them.
/// `resolve_category` is the one place a line may change how a trait is
/// priced depending on the sheet (in-clan Disciplines, affinity Spheres).
pub trait CharacterType: Send + Sync {
    fn game_line(&self) -> GameLine;

    fn schema(&self) -> &TraitSchema;

    /// Merged base + line-specific prices.
    fn cost_table(&self) -> &CostTable;

    /// Freebie points a new sheet starts with, unless configured otherwise.
    fn starting_freebies(&self) -> u32;

    /// Category used for pricing `id` on `sheet`. Defaults to the schema's.
    fn resolve_category(&self, _sheet: &CharacterSheet, id: TraitId) -> Option<TraitCategory> {
        self.schema().def(id).map(|def| def.category())
    }

    fn display_name(&self) -> &'static str {
        self.game_line().display_name()
    }
}
