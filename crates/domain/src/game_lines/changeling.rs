//! Changeling: The Dreaming.

use once_cell::sync::Lazy;

use crate::game_lines::human::{base_costs, base_schema};
use crate::game_lines::{CharacterType, GameLine};
use crate::progression::{CostRule, CostTable, TraitCategory};
use crate::schema::{PairSpec, TraitSchema, TraitSpec};
use crate::value_objects::RaisePolicy;

const BACKGROUNDS: &[&str] = &[
    "chimera",
    "dreamers",
    "holdings",
    "remembrance",
    "title",
    "treasure",
];

const ARTS: &[&str] = &[
    "autumn",
    "chicanery",
    "chronos",
    "contract",
    "dragons_ire",
    "legerdemain",
    "metamorphosis",
    "naming",
    "oneiromancy",
    "primal",
    "pyretics",
    "soothsay",
    "sovereign",
    "wayfare",
];

const REALMS: &[&str] = &["actor", "fae", "nature", "prop", "scene", "time"];

fn schema() -> TraitSchema {
    base_schema()
        .traits(TraitCategory::Background, BACKGROUNDS)
        .traits(TraitCategory::Art, ARTS)
        .traits(TraitCategory::Realm, REALMS)
        .trait_spec(TraitSpec::new("glamour", TraitCategory::Glamour).default_value(4))
        .trait_spec(
            TraitSpec::new("temporary_glamour", TraitCategory::Reserve)
                .range(0, 10)
                .default_value(4),
        )
        .pair(
            PairSpec::new("glamour", "glamour", "temporary_glamour")
                .raise_policy(RaisePolicy::RaiseBoth),
        )
        .trait_spec(TraitSpec::new("banality", TraitCategory::Banality).default_value(3))
        .trait_spec(
            TraitSpec::new("temporary_banality", TraitCategory::Reserve)
                .range(0, 10)
                .default_value(3),
        )
        .pair(
            PairSpec::new("banality", "banality", "temporary_banality")
                .raise_policy(RaisePolicy::RaiseBoth),
        )
        .build()
        .expect("changeling schema is well-formed")
}

fn costs() -> CostTable {
    let overrides = CostTable::new()
        .freebies(TraitCategory::Art, 5)
        .freebies(TraitCategory::Realm, 2)
        .freebies(TraitCategory::Glamour, 3)
        .freebies(TraitCategory::Banality, 2)
        .experience(TraitCategory::Art, CostRule::per_new_dot_or_new(8, 7))
        .experience(TraitCategory::Realm, CostRule::per_new_dot_or_new(5, 5))
        .experience(TraitCategory::Glamour, CostRule::per_new_dot(3))
        .experience(TraitCategory::Banality, CostRule::per_new_dot(2))
        .experience(TraitCategory::Willpower, CostRule::per_new_dot(2));
    base_costs().merged(&overrides)
}

static SCHEMA: Lazy<TraitSchema> = Lazy::new(schema);
static COSTS: Lazy<CostTable> = Lazy::new(costs);

pub struct Changeling;

impl CharacterType for Changeling {
    fn game_line(&self) -> GameLine {
        GameLine::Changeling
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Currency;

    fn xp(category: TraitCategory, current: i32) -> u32 {
        Changeling
            .cost_table()
            .get(category, Currency::Experience)
            .unwrap()
            .rule()
            .cost(current)
    }

    #[test]
    fn arts_and_realms() {
        assert_eq!(xp(TraitCategory::Art, 0), 7);
        assert_eq!(xp(TraitCategory::Art, 1), 16);
        assert_eq!(xp(TraitCategory::Realm, 0), 5);
        assert_eq!(xp(TraitCategory::Realm, 2), 15);
    }

    #[test]
    fn glamour_banality_and_willpower() {
        assert_eq!(xp(TraitCategory::Glamour, 4), 15);
        assert_eq!(xp(TraitCategory::Banality, 3), 8);
        assert_eq!(xp(TraitCategory::Willpower, 3), 8);
    }

    #[test]
    fn ranges() {
        let schema = Changeling.schema();
        assert_eq!(schema.def_by_name("glamour").unwrap().range().max(), 10);
        assert_eq!(schema.def_by_name("banality").unwrap().range().max(), 10);
        assert_eq!(schema.def_by_name("wayfare").unwrap().range().max(), 5);
        assert_eq!(schema.def_by_name("fae").unwrap().range().max(), 5);
    }

    #[test]
    fn banality_is_bought_like_any_trait() {
        let freebie = Changeling
            .cost_table()
            .get(TraitCategory::Banality, Currency::Freebies)
            .unwrap();
        assert_eq!(freebie.rule().cost(3), 2);
        assert!(Changeling.schema().linked("banality").is_some());
    }
}
