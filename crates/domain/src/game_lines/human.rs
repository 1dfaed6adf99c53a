//! Mortals, and the base every other game line extends.

use once_cell::sync::Lazy;

use crate::game_lines::{CharacterType, GameLine};
use crate::progression::{CostRule, CostTable, TraitCategory};
use crate::schema::{PairSpec, TraitSchema, TraitSchemaBuilder, TraitSpec};
use crate::value_objects::RaisePolicy;

pub(crate) const ATTRIBUTES: &[&str] = &[
    "strength",
    "dexterity",
    "stamina",
    "charisma",
    "manipulation",
    "appearance",
    "perception",
    "intelligence",
    "wits",
];

pub(crate) const ABILITIES: &[&str] = &[
    // talents
    "alertness",
    "athletics",
    "awareness",
    "brawl",
    "empathy",
    "expression",
    "intimidation",
    "leadership",
    "streetwise",
    "subterfuge",
    // skills
    "animal_ken",
    "crafts",
    "drive",
    "etiquette",
    "firearms",
    "larceny",
    "melee",
    "performance",
    "stealth",
    "survival",
    // knowledges
    "academics",
    "computer",
    "finance",
    "investigation",
    "law",
    "medicine",
    "occult",
    "politics",
    "science",
    "technology",
];

pub(crate) const BACKGROUNDS: &[&str] =
    &["allies", "contacts", "fame", "influence", "mentor", "resources"];

/// Attributes, Abilities, Backgrounds and Willpower.
pub(crate) fn base_schema() -> TraitSchemaBuilder {
    TraitSchema::builder()
        .traits(TraitCategory::Attribute, ATTRIBUTES)
        .traits(TraitCategory::Ability, ABILITIES)
        .traits(TraitCategory::Background, BACKGROUNDS)
        .trait_spec(TraitSpec::new("willpower", TraitCategory::Willpower).default_value(3))
        .trait_spec(
            TraitSpec::new("temporary_willpower", TraitCategory::Reserve)
                .range(0, 10)
                .default_value(3),
        )
        .pair(
            PairSpec::new("willpower", "willpower", "temporary_willpower")
                .raise_policy(RaisePolicy::RaiseBoth),
        )
}

pub(crate) fn base_costs() -> CostTable {
    CostTable::new()
        .freebies(TraitCategory::Attribute, 5)
        .freebies(TraitCategory::Ability, 2)
        .freebies(TraitCategory::Background, 1)
        .freebies(TraitCategory::Willpower, 1)
        .experience(TraitCategory::Attribute, CostRule::per_new_dot(4))
        .experience(TraitCategory::Ability, CostRule::per_new_dot_or_new(2, 3))
        .experience(TraitCategory::Background, CostRule::per_new_dot_or_new(3, 5))
        .experience(TraitCategory::Willpower, CostRule::per_new_dot(1))
}

static SCHEMA: Lazy<TraitSchema> =
    Lazy::new(|| base_schema().build().expect("human schema is well-formed"));

static COSTS: Lazy<CostTable> = Lazy::new(base_costs);

pub struct Human;

impl CharacterType for Human {
    fn game_line(&self) -> GameLine {
        GameLine::Human
    }

    fn schema(&self) -> &TraitSchema {
        &SCHEMA
    }

    fn cost_table(&self) -> &CostTable {
        &COSTS
    }

    fn starting_freebies(&self) -> u32 {
        21
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Currency;

    fn xp(category: TraitCategory, current: i32) -> u32 {
        Human
            .cost_table()
            .get(category, Currency::Experience)
            .unwrap()
            .rule()
            .cost(current)
    }

    #[test]
    fn schema_builds() {
        let schema = base_schema().build().unwrap();
        assert_eq!(schema.traits_in(TraitCategory::Attribute).count(), 9);
        assert_eq!(schema.traits_in(TraitCategory::Ability).count(), 30);
        assert!(schema.linked("willpower").is_some());
    }

    #[test]
    fn experience_costs() {
        assert_eq!(xp(TraitCategory::Attribute, 2), 12);
        assert_eq!(xp(TraitCategory::Ability, 0), 3);
        assert_eq!(xp(TraitCategory::Ability, 2), 6);
        assert_eq!(xp(TraitCategory::Background, 0), 5);
        assert_eq!(xp(TraitCategory::Background, 1), 6);
        assert_eq!(xp(TraitCategory::Willpower, 5), 6);
    }

    #[test]
    fn starts_with_21_freebies() {
        assert_eq!(Human.starting_freebies(), 21);
        assert_eq!(Human.display_name(), "Mortal");
    }
}
