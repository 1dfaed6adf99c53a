//! Game line implementations.
//!
//! Each line supplies a trait schema, a cost table merged from the mortal
//! base, and optionally a category resolver. All of them share the same
//! [`Ledger`](crate::progression::Ledger).
//!
//! # Supported lines
//!
//! - Mortals (`human`)
//! - Vampire: The Masquerade (`vampire`)
//! - Werewolf: The Apocalypse (`werewolf`)
//! - Mage: The Ascension (`mage`)
//! - Changeling: The Dreaming (`changeling`)
//! - Hunter: The Reckoning (`hunter`)

mod changeling;
pub(crate) mod human;
mod hunter;
mod mage;
mod traits;
mod vampire;
mod werewolf;

pub use changeling::Changeling;
pub use human::Human;
pub use hunter::Hunter;
pub use mage::Mage;
pub use traits::CharacterType;
pub use vampire::Vampire;
pub use werewolf::Werewolf;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::DomainError;

/// The closed set of supported game lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameLine {
    Human,
    Vampire,
    Werewolf,
    Mage,
    Changeling,
    Hunter,
}

impl GameLine {
    pub fn all() -> [GameLine; 6] {
        [
            Self::Human,
            Self::Vampire,
            Self::Werewolf,
            Self::Mage,
            Self::Changeling,
            Self::Hunter,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Vampire => "vampire",
            Self::Werewolf => "werewolf",
            Self::Mage => "mage",
            Self::Changeling => "changeling",
            Self::Hunter => "hunter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Human => "Mortal",
            Self::Vampire => "Vampire: The Masquerade",
            Self::Werewolf => "Werewolf: The Apocalypse",
            Self::Mage => "Mage: The Ascension",
            Self::Changeling => "Changeling: The Dreaming",
            Self::Hunter => "Hunter: The Reckoning",
        }
    }

    /// Built-in rules for this line.
    pub fn character_type(self) -> &'static dyn CharacterType {
        match self {
            Self::Human => &Human,
            Self::Vampire => &Vampire,
            Self::Werewolf => &Werewolf,
            Self::Mage => &Mage,
            Self::Changeling => &Changeling,
            Self::Hunter => &Hunter,
        }
    }
}

impl fmt::Display for GameLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "mortal" => Ok(Self::Human),
            "vampire" => Ok(Self::Vampire),
            "werewolf" | "garou" => Ok(Self::Werewolf),
            "mage" => Ok(Self::Mage),
            "changeling" => Ok(Self::Changeling),
            "hunter" => Ok(Self::Hunter),
            other => Err(DomainError::parse(format!("Unknown game line: {}", other))),
        }
    }
}

/// Registry of character types the application accepts.
pub struct GameLineRegistry {
    types: Vec<Arc<dyn CharacterType>>,
}

impl Default for GameLineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLineRegistry {
    /// Create a registry with every built-in line.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.insert(Arc::new(Human));
        registry.insert(Arc::new(Vampire));
        registry.insert(Arc::new(Werewolf));
        registry.insert(Arc::new(Mage));
        registry.insert(Arc::new(Changeling));
        registry.insert(Arc::new(Hunter));
        registry
    }

    /// Create an empty registry without built-in lines.
    pub fn empty() -> Self {
        Self { types: Vec::new() }
    }

    /// Register a character type, replacing any earlier one for the same line.
    ///
    /// Sheets store values in their line's built-in layout, so a replacement
    /// may change prices and category resolution but not the schema.
    pub fn register(&mut self, character_type: Arc<dyn CharacterType>) -> Result<(), DomainError> {
        let line = character_type.game_line();
        if !character_type
            .schema()
            .same_layout(line.character_type().schema())
        {
            return Err(DomainError::validation(format!(
                "{} rules must keep the built-in {} trait layout",
                character_type.display_name(),
                line
            )));
        }
        self.insert(character_type);
        Ok(())
    }

    fn insert(&mut self, character_type: Arc<dyn CharacterType>) {
        let line = character_type.game_line();
        self.types.retain(|t| t.game_line() != line);
        self.types.push(character_type);
    }

    pub fn get(&self, game_line: GameLine) -> Option<Arc<dyn CharacterType>> {
        self.types
            .iter()
            .find(|t| t.game_line() == game_line)
            .cloned()
    }

    pub fn list(&self) -> Vec<GameLine> {
        self.types.iter().map(|t| t.game_line()).collect()
    }

    /// Registered lines with their display names.
    pub fn list_with_names(&self) -> Vec<(GameLine, &'static str)> {
        self.types
            .iter()
            .map(|t| (t.game_line(), t.display_name()))
            .collect()
    }
}
