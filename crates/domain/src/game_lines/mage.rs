//! Mage: The Ascension.

use once_cell::sync::Lazy;

use crate::aggregates::CharacterSheet;
use crate::game_lines::human::{base_costs, base_schema};
use crate::game_lines::{CharacterType, GameLine};
use crate::ids::TraitId;
use crate::progression::{CostEntry, CostRule, CostTable, TraitCategory};
use crate::schema::{TraitSchema, TraitSpec};
use crate::value_objects::Currency;

const BACKGROUNDS: &[&str] = &["arcane", "avatar", "library", "node", "wonder"];

const SPHERES: &[&str] = &[
    "correspondence",
    "entropy",
    "forces",
    "life",
    "matter",
    "mind",
    "prime",
    "spirit",
    "time",
];

/// Highest Arete a character may buy during creation.
const CREATION_ARETE_CEILING: i32 = 3;

fn schema() -> TraitSchema {
    let builder = base_schema()
        .traits(TraitCategory::Background, BACKGROUNDS)
        .traits(TraitCategory::Arete, &["arete"]);
    SPHERES
        .iter()
        .fold(builder, |builder, &sphere| {
            builder.trait_spec(TraitSpec::new(sphere, TraitCategory::Sphere).capped_by("arete"))
        })
        .build()
        .expect("mage schema is well-formed")
}

fn costs() -> CostTable {
    let overrides = CostTable::new()
        .with(
            TraitCategory::Arete,
            Currency::Freebies,
            CostEntry::new(CostRule::flat(4)).with_ceiling(CREATION_ARETE_CEILING),
        )
        .freebies(TraitCategory::Sphere, 7)
        .freebies(TraitCategory::AffinitySphere, 7)
        .experience(TraitCategory::Arete, CostRule::per_new_dot(8))
        .experience(TraitCategory::Sphere, CostRule::per_new_dot_or_new(8, 10))
        .experience(
            TraitCategory::AffinitySphere,
            CostRule::per_new_dot_or_new(7, 10),
        );
    base_costs().merged(&overrides)
}

static SCHEMA: Lazy<TraitSchema> = Lazy::new(schema);
static COSTS: Lazy<CostTable> = Lazy::new(costs);

pub struct Mage;

impl CharacterType for Mage {
    fn game_line(&self) -> GameLine {
        GameLine::Mage
    }

    fn schema(&self) -> &TraitSchema {
        &SCHEMA
    }

    fn cost_table(&self) -> &CostTable {
        &COSTS
    }

    fn starting_freebies(&self) -> u32 {
        15
    }

    /// The favored Sphere is the mage's affinity and is cheaper to learn.
    fn resolve_category(&self, sheet: &CharacterSheet, id: TraitId) -> Option<TraitCategory> {
        let category = self.schema().def(id)?.category();
        Some(match category {
            TraitCategory::Sphere if sheet.is_favored(id) => TraitCategory::AffinitySphere,
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::Ledger;
    use crate::value_objects::CharacterName;
    use chrono::Utc;

    fn xp(category: TraitCategory, current: i32) -> u32 {
        Mage.cost_table()
            .get(category, Currency::Experience)
            .unwrap()
            .rule()
            .cost(current)
    }

    #[test]
    fn sphere_experience() {
        assert_eq!(xp(TraitCategory::Sphere, 0), 10);
        assert_eq!(xp(TraitCategory::Sphere, 1), 16);
        assert_eq!(xp(TraitCategory::AffinitySphere, 1), 14);
        assert_eq!(xp(TraitCategory::Arete, 2), 24);
    }

    #[test]
    fn spheres_are_capped_by_arete() {
        let schema = Mage.schema();
        let arete = schema.id("arete").unwrap();
        for def in schema.traits_in(TraitCategory::Sphere) {
            assert_eq!(def.capped_by(), Some(arete));
        }
    }

    #[test]
    fn affinity_sphere_is_cheaper_in_play() {
        let mut sheet = CharacterSheet::new(
            CharacterName::new("Porthos").unwrap(),
            GameLine::Mage,
            15,
        );
        sheet.set_favored("forces", true).unwrap();
        sheet.storyteller_set("arete", 3).unwrap();
        sheet.storyteller_set("forces", 1).unwrap();
        sheet.storyteller_set("prime", 1).unwrap();
        sheet.finish_creation(true).unwrap();
        sheet.award_experience(40);

        let ledger = Ledger::new(&Mage);
        let affinity = ledger
            .spend(&mut sheet, "forces", Currency::Experience, Utc::now())
            .unwrap();
        let other = ledger
            .spend(&mut sheet, "prime", Currency::Experience, Utc::now())
            .unwrap();

        assert_eq!(affinity.category, TraitCategory::AffinitySphere);
        assert_eq!(affinity.cost, 14);
        assert_eq!(other.cost, 16);
        assert_eq!(sheet.experience().amount(), 10);
    }
}
