//! Engine configuration from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `WODSHEET_STARTING_FREEBIES_<LINE>` | the line's own starting freebies |
//! | `WODSHEET_FORFEIT_FREEBIES` | `true` |
//!
//! `<LINE>` is the upper-cased game line (`HUMAN`, `VAMPIRE`, ...).

use std::collections::BTreeMap;

use wodsheet_domain::{CharacterType, GameLine};

const STARTING_FREEBIES_PREFIX: &str = "WODSHEET_STARTING_FREEBIES_";
const FORFEIT_FREEBIES_VAR: &str = "WODSHEET_FORFEIT_FREEBIES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    starting_freebies: BTreeMap<GameLine, u32>,
    forfeit_freebies: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_freebies: BTreeMap::new(),
            forfeit_freebies: true,
        }
    }
}

impl EngineConfig {
    /// Load `.env` files from the repository root, then read the environment.
    pub fn load() -> Self {
        load_dotenv_from_repo_root();
        Self::from_env()
    }

    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or unparseable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let starting_freebies = GameLine::all()
            .into_iter()
            .filter_map(|line| {
                let key = format!(
                    "{}{}",
                    STARTING_FREEBIES_PREFIX,
                    line.as_str().to_ascii_uppercase()
                );
                lookup(&key)
                    .and_then(|v| v.trim().parse::<u32>().ok())
                    .map(|amount| (line, amount))
            })
            .collect();
        let forfeit_freebies = lookup(FORFEIT_FREEBIES_VAR)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true);

        Self {
            starting_freebies,
            forfeit_freebies,
        }
    }

    pub fn with_starting_freebies(mut self, line: GameLine, amount: u32) -> Self {
        self.starting_freebies.insert(line, amount);
        self
    }

    pub fn with_forfeit_freebies(mut self, forfeit: bool) -> Self {
        self.forfeit_freebies = forfeit;
        self
    }

    /// Configured starting freebies, or the character type's own default.
    pub fn starting_freebies(&self, character_type: &dyn CharacterType) -> u32 {
        self.starting_freebies
            .get(&character_type.game_line())
            .copied()
            .unwrap_or_else(|| character_type.starting_freebies())
    }

    pub fn forfeit_freebies(&self) -> bool {
        self.forfeit_freebies
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load `.env.local` and `.env` from the workspace root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
