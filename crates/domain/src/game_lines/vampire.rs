//! Vampire: The Masquerade.

use once_cell::sync::Lazy;

use crate::aggregates::CharacterSheet;
use crate::game_lines::human::{base_costs, base_schema};
use crate::game_lines::{CharacterType, GameLine};
use crate::ids::TraitId;
use crate::progression::{CostRule, CostTable, TraitCategory};
use crate::schema::{PairSpec, TraitSchema, TraitSpec};
use crate::value_objects::RaisePolicy;

const BACKGROUNDS: &[&str] = &["generation", "herd", "retainers", "status"];

const VIRTUES: &[&str] = &["conscience", "self_control", "courage"];

const DISCIPLINES: &[&str] = &[
    "animalism",
    "auspex",
    "celerity",
    "chimerstry",
    "dementation",
    "dominate",
    "fortitude",
    "necromancy",
    "obfuscate",
    "obtenebration",
    "potence",
    "presence",
    "protean",
    "quietus",
    "serpentis",
    "thaumaturgy",
    "vicissitude",
];

fn schema() -> TraitSchema {
    base_schema()
        .traits(TraitCategory::Background, BACKGROUNDS)
        .traits(TraitCategory::Virtue, VIRTUES)
        .trait_spec(TraitSpec::new("humanity", TraitCategory::Humanity).default_value(7))
        .traits(TraitCategory::PathRating, &["path_rating"])
        .traits(TraitCategory::Discipline, DISCIPLINES)
        .trait_spec(TraitSpec::new("max_blood_pool", TraitCategory::BloodPool).default_value(10))
        .trait_spec(
            TraitSpec::new("blood_pool", TraitCategory::Reserve)
                .range(0, 50)
                .default_value(10),
        )
        .pair(
            PairSpec::new("blood_pool", "max_blood_pool", "blood_pool")
                .raise_policy(RaisePolicy::Keep),
        )
        .build()
        .expect("vampire schema is well-formed")
}

fn costs() -> CostTable {
    let overrides = CostTable::new()
        .freebies(TraitCategory::Virtue, 2)
        .freebies(TraitCategory::Humanity, 2)
        .freebies(TraitCategory::PathRating, 2)
        .freebies(TraitCategory::Discipline, 7)
        .freebies(TraitCategory::OutOfClanDiscipline, 10)
        .experience(TraitCategory::Virtue, CostRule::per_new_dot(2))
        .experience(TraitCategory::Humanity, CostRule::per_new_dot(2))
        .experience(TraitCategory::PathRating, CostRule::per_new_dot(2))
        .experience(TraitCategory::Discipline, CostRule::per_new_dot_or_new(5, 10))
        .experience(
            TraitCategory::OutOfClanDiscipline,
            CostRule::per_new_dot_or_new(7, 10),
        );
    base_costs().merged(&overrides)
}

static SCHEMA: Lazy<TraitSchema> = Lazy::new(schema);
static COSTS: Lazy<CostTable> = Lazy::new(costs);

pub struct Vampire;

impl CharacterType for Vampire {
    fn game_line(&self) -> GameLine {
        GameLine::Vampire
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

    /// Disciplines outside the character's clan are priced as out-of-clan.
    fn resolve_category(&self, sheet: &CharacterSheet, id: TraitId) -> Option<TraitCategory> {
        let category = self.schema().def(id)?.category();
        Some(match category {
            TraitCategory::Discipline if !sheet.is_favored(id) => {
                TraitCategory::OutOfClanDiscipline
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{CharacterName, Currency};

    fn xp(category: TraitCategory, current: i32) -> u32 {
        Vampire
            .cost_table()
            .get(category, Currency::Experience)
            .unwrap()
            .rule()
            .cost(current)
    }

    #[test]
    fn discipline_experience() {
        assert_eq!(xp(TraitCategory::Discipline, 0), 10);
        assert_eq!(xp(TraitCategory::Discipline, 2), 15);
        assert_eq!(xp(TraitCategory::OutOfClanDiscipline, 0), 10);
        assert_eq!(xp(TraitCategory::OutOfClanDiscipline, 2), 21);
    }

    #[test]
    fn morality_experience() {
        assert_eq!(xp(TraitCategory::Humanity, 7), 16);
        assert_eq!(xp(TraitCategory::Virtue, 3), 8);
        // inherited from the base table
        assert_eq!(xp(TraitCategory::Attribute, 1), 8);
    }

    #[test]
    fn humanity_reaches_ten() {
        let def = Vampire.schema().def_by_name("humanity").unwrap();
        assert_eq!(def.range().max(), 10);
        assert_eq!(def.default_value(), 7);
    }

    #[test]
    fn blood_pool_is_a_pair_but_not_for_sale() {
        let schema = Vampire.schema();
        let pair = schema.linked("blood_pool").unwrap();
        assert!(pair.cap_temporary());
        assert!(!Vampire
            .cost_table()
            .contains(TraitCategory::BloodPool, Currency::Freebies));
        assert!(!Vampire
            .cost_table()
            .contains(TraitCategory::BloodPool, Currency::Experience));
    }

    #[test]
    fn favored_disciplines_resolve_in_clan() {
        let mut sheet = CharacterSheet::new(
            CharacterName::new("Beckett").unwrap(),
            GameLine::Vampire,
            15,
        );
        sheet.set_favored("auspex", true).unwrap();
        let schema = Vampire.schema();
        let auspex = schema.id("auspex").unwrap();
        let potence = schema.id("potence").unwrap();
        let strength = schema.id("strength").unwrap();

        assert_eq!(
            Vampire.resolve_category(&sheet, auspex),
            Some(TraitCategory::Discipline)
        );
        assert_eq!(
            Vampire.resolve_category(&sheet, potence),
            Some(TraitCategory::OutOfClanDiscipline)
        );
        assert_eq!(
            Vampire.resolve_category(&sheet, strength),
            Some(TraitCategory::Attribute)
        );
    }
}
