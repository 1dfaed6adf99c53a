//! Hunter: The Reckoning.
//!
//! Hunter Virtues run 0-10 and each carries a spendable pool, so they are
//! declared as linked pairs rather than plain ratings.

use once_cell::sync::Lazy;

use crate::game_lines::human::{base_costs, base_schema};
use crate::game_lines::{CharacterType, GameLine};
use crate::progression::{CostRule, CostTable, TraitCategory};
use crate::schema::{PairSpec, TraitSchema, TraitSpec};
use crate::value_objects::RaisePolicy;

const VIRTUES: &[(&str, &str)] = &[
    ("conviction", "temporary_conviction"),
    ("vision", "temporary_vision"),
    ("zeal", "temporary_zeal"),
];

const EDGES: &[&str] = &[
    "demand",
    "discern",
    "illuminate",
    "judge",
    "radiate",
    "ward",
    "witness",
];

fn schema() -> TraitSchema {
    let builder = VIRTUES.iter().fold(
        base_schema().traits(TraitCategory::Edge, EDGES),
        |builder, &(permanent, temporary)| {
            builder
                .trait_spec(TraitSpec::new(permanent, TraitCategory::Virtue).range(0, 10))
                .trait_spec(TraitSpec::new(temporary, TraitCategory::Reserve).range(0, 10))
                .pair(
                    PairSpec::new(permanent, permanent, temporary)
                        .raise_policy(RaisePolicy::RaiseBoth),
                )
        },
    );
    builder.build().expect("hunter schema is well-formed")
}

fn costs() -> CostTable {
    let overrides = CostTable::new()
        .freebies(TraitCategory::Virtue, 1)
        .freebies(TraitCategory::Edge, 7)
        .experience(TraitCategory::Virtue, CostRule::per_new_dot(2))
        .experience(TraitCategory::Edge, CostRule::per_new_dot(3));
    base_costs().merged(&overrides)
}

static SCHEMA: Lazy<TraitSchema> = Lazy::new(schema);
static COSTS: Lazy<CostTable> = Lazy::new(costs);

pub struct Hunter;

impl CharacterType for Hunter {
    fn game_line(&self) -> GameLine {
        GameLine::Hunter
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
    use crate::progression::Ledger;
    use crate::value_objects::{CharacterName, Currency};
    use chrono::Utc;

    #[test]
    fn virtue_and_edge_experience() {
        let table = Hunter.cost_table();
        let virtue = table.get(TraitCategory::Virtue, Currency::Experience).unwrap();
        let edge = table.get(TraitCategory::Edge, Currency::Experience).unwrap();
        assert_eq!(virtue.rule().cost(2), 6);
        assert_eq!(edge.rule().cost(1), 6);
    }

    #[test]
    fn virtues_start_at_zero_and_reach_ten() {
        let def = Hunter.schema().def_by_name("zeal").unwrap();
        assert_eq!(def.default_value(), 0);
        assert_eq!(def.range().max(), 10);
    }

    #[test]
    fn buying_conviction_adds_a_point_to_spend() {
        let mut sheet = CharacterSheet::new(
            CharacterName::new("Jennifer").unwrap(),
            GameLine::Hunter,
            15,
        );
        let receipt = Ledger::new(&Hunter)
            .spend(&mut sheet, "conviction", Currency::Freebies, Utc::now())
            .unwrap();
        assert_eq!(receipt.cost, 1);

        let mut conviction = sheet.linked_stat("conviction").unwrap();
        assert_eq!(conviction.permanent(), 1);
        assert_eq!(conviction.temporary(), 1);
        assert_eq!(conviction.spend(1), Ok(true));
    }

    #[test]
    fn edges_cost_seven_freebies() {
        let mut sheet = CharacterSheet::new(
            CharacterName::new("Jennifer").unwrap(),
            GameLine::Hunter,
            15,
        );
        let receipt = Ledger::new(&Hunter)
            .spend(&mut sheet, "discern", Currency::Freebies, Utc::now())
            .unwrap();
        assert_eq!(receipt.cost, 7);
        assert_eq!(receipt.balance_after, 8);
        assert_eq!(sheet.trait_value("discern"), Some(1));
    }
}
