//! Werewolf: The Apocalypse.
//!
//! Rage is the one pool here whose temporary value may run above its
//! permanent rating; Gnosis and Renown follow the usual cap.

use once_cell::sync::Lazy;

use crate::game_lines::human::{base_costs, base_schema};
use crate::game_lines::{CharacterType, GameLine};
use crate::progression::{CostRule, CostTable, TraitCategory};
use crate::schema::{PairSpec, TraitSchema, TraitSpec};
use crate::value_objects::RaisePolicy;

const BACKGROUNDS: &[&str] = &["ancestors", "fetish", "kinfolk", "pure_breed", "rites", "totem"];

const RENOWN: &[(&str, &str)] = &[
    ("glory", "temporary_glory"),
    ("honor", "temporary_honor"),
    ("wisdom", "temporary_wisdom"),
];

fn schema() -> TraitSchema {
    let mut builder = base_schema()
        .traits(TraitCategory::Background, BACKGROUNDS)
        .trait_spec(TraitSpec::new("rage", TraitCategory::Rage).default_value(1))
        .trait_spec(
            TraitSpec::new("temporary_rage", TraitCategory::Reserve)
                .range(0, 10)
                .default_value(1),
        )
        .pair(
            PairSpec::new("rage", "rage", "temporary_rage")
                .uncapped()
                .raise_policy(RaisePolicy::RaiseBoth),
        )
        .trait_spec(TraitSpec::new("gnosis", TraitCategory::Gnosis).default_value(1))
        .trait_spec(
            TraitSpec::new("temporary_gnosis", TraitCategory::Reserve)
                .range(0, 10)
                .default_value(1),
        )
        .pair(
            PairSpec::new("gnosis", "gnosis", "temporary_gnosis")
                .raise_policy(RaisePolicy::RaiseBoth),
        );

    for &(permanent, temporary) in RENOWN {
        builder = builder
            .traits(TraitCategory::Renown, &[permanent])
            .trait_spec(TraitSpec::new(temporary, TraitCategory::Reserve).range(0, 10))
            .pair(PairSpec::new(permanent, permanent, temporary).raise_policy(RaisePolicy::Keep));
    }

    builder.build().expect("werewolf schema is well-formed")
}

fn costs() -> CostTable {
    let overrides = CostTable::new()
        .freebies(TraitCategory::Rage, 1)
        .freebies(TraitCategory::Gnosis, 2)
        .freebies(TraitCategory::Renown, 1)
        .experience(TraitCategory::Rage, CostRule::per_new_dot(1))
        .experience(TraitCategory::Gnosis, CostRule::per_new_dot(2))
        .experience(TraitCategory::Renown, CostRule::per_new_dot(1));
    base_costs().merged(&overrides)
}

static SCHEMA: Lazy<TraitSchema> = Lazy::new(schema);
static COSTS: Lazy<CostTable> = Lazy::new(costs);

pub struct Werewolf;

impl CharacterType for Werewolf {
    fn game_line(&self) -> GameLine {
        GameLine::Werewolf
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
    use crate::aggregates::CharacterSheet;
    use crate::value_objects::{CharacterName, Currency};

    fn sheet() -> CharacterSheet {
        CharacterSheet::new(
            CharacterName::new("Mari Cabrah").unwrap(),
            GameLine::Werewolf,
            15,
        )
    }

    #[test]
    fn rage_may_exceed_permanent() {
        let mut sheet = sheet();
        let mut rage = sheet.linked_stat("rage").unwrap();
        assert_eq!(rage.restore(4), Ok(4));
        assert_eq!(rage.temporary(), 5);
        assert_eq!(rage.permanent(), 1);
        assert_eq!(rage.restore_full(), 0);
        assert!(sheet.is_consistent());
    }

    #[test]
    fn gnosis_is_capped() {
        let mut sheet = sheet();
        let mut gnosis = sheet.linked_stat("gnosis").unwrap();
        assert_eq!(gnosis.restore(4), Ok(0));
        assert_eq!(gnosis.temporary(), 1);
    }

    #[test]
    fn renown_pairs_exist() {
        let schema = Werewolf.schema();
        for (name, _) in RENOWN {
            assert!(schema.linked(name).is_some());
        }
        assert_eq!(schema.traits_in(TraitCategory::Renown).count(), 3);
    }

    #[test]
    fn gnosis_experience_scales_by_two() {
        let rule = Werewolf
            .cost_table()
            .get(TraitCategory::Gnosis, Currency::Experience)
            .unwrap()
            .rule();
        assert_eq!(rule.cost(3), 8);
    }
}
