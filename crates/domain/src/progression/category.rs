//! Trait categories.
//!
//! A category decides a trait's default legal range and which cost rule
//! applies to it. The set is closed; character types pick the categories
//! they use and may re-resolve a trait to a sibling category (for example
//! an out-of-clan Discipline).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::TraitRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Attribute,
    Ability,
    Background,
    Willpower,
    Virtue,
    Humanity,
    PathRating,
    Discipline,
    OutOfClanDiscipline,
    BloodPool,
    Rage,
    Gnosis,
    Renown,
    Sphere,
    AffinitySphere,
    Arete,
    Art,
    Realm,
    Glamour,
    Banality,
    Edge,
    /// Temporary half of a linked pair. Never bought directly.
    Reserve,
}

impl TraitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Ability => "ability",
            Self::Background => "background",
            Self::Willpower => "willpower",
            Self::Virtue => "virtue",
            Self::Humanity => "humanity",
            Self::PathRating => "path_rating",
            Self::Discipline => "discipline",
            Self::OutOfClanDiscipline => "out_of_clan_discipline",
            Self::BloodPool => "blood_pool",
            Self::Rage => "rage",
            Self::Gnosis => "gnosis",
            Self::Renown => "renown",
            Self::Sphere => "sphere",
            Self::AffinitySphere => "affinity_sphere",
            Self::Arete => "arete",
            Self::Art => "art",
            Self::Realm => "realm",
            Self::Glamour => "glamour",
            Self::Banality => "banality",
            Self::Edge => "edge",
            Self::Reserve => "reserve",
        }
    }

    /// Legal range used when a trait does not declare its own.
    pub fn default_range(&self) -> TraitRange {
        match self {
            Self::Attribute | Self::Virtue => TraitRange::fixed(1, 5),
            Self::Arete => TraitRange::fixed(1, 10),
            Self::Ability
            | Self::Background
            | Self::Discipline
            | Self::OutOfClanDiscipline
            | Self::Sphere
            | Self::AffinitySphere
            | Self::Art
            | Self::Realm
            | Self::Edge => TraitRange::fixed(0, 5),
            Self::Willpower => TraitRange::fixed(1, 10),
            Self::Humanity
            | Self::PathRating
            | Self::Rage
            | Self::Gnosis
            | Self::Renown
            | Self::Glamour
            | Self::Banality => TraitRange::fixed(0, 10),
            Self::BloodPool => TraitRange::fixed(1, 50),
            Self::Reserve => TraitRange::fixed(0, 50),
        }
    }

    /// Categories whose traits can never be bought, whatever the cost table says.
    pub fn is_reserve(&self) -> bool {
        matches!(self, Self::Reserve)
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TraitCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let category = match normalized.as_str() {
            "attribute" => Self::Attribute,
            "ability" => Self::Ability,
            "background" => Self::Background,
            "willpower" => Self::Willpower,
            "virtue" => Self::Virtue,
            "humanity" => Self::Humanity,
            "path_rating" => Self::PathRating,
            "discipline" => Self::Discipline,
            "out_of_clan_discipline" => Self::OutOfClanDiscipline,
            "blood_pool" => Self::BloodPool,
            "rage" => Self::Rage,
            "gnosis" => Self::Gnosis,
            "renown" => Self::Renown,
            "sphere" => Self::Sphere,
            "affinity_sphere" => Self::AffinitySphere,
            "arete" => Self::Arete,
            "art" => Self::Art,
            "realm" => Self::Realm,
            "glamour" => Self::Glamour,
            "banality" => Self::Banality,
            "edge" => Self::Edge,
            "reserve" => Self::Reserve,
            _ => {
                return Err(DomainError::parse(format!(
                    "Unknown trait category: {}",
                    s
                )))
            }
        };
        Ok(category)
    }
}
