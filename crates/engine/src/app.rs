//! Application state and composition.

use std::sync::Arc;

use wodsheet_domain::GameLineRegistry;

use crate::config::EngineConfig;
use crate::events::ProgressionSubscriber;
use crate::infrastructure::{
    clock::SystemClock,
    memory::InMemoryCharacterRepo,
    ports::{CharacterRepo, ClockPort},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the injected ports and the use cases built on them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub progression: use_cases::ProgressionUseCases,
}

impl App {
    /// Compose the application from explicit ports.
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        registry: Arc<GameLineRegistry>,
        config: EngineConfig,
        subscribers: Vec<Arc<dyn ProgressionSubscriber>>,
    ) -> Self {
        let progression = use_cases::ProgressionUseCases::new(
            character_repo.clone(),
            clock,
            registry,
            config,
            subscribers,
        );

        Self {
            repositories: Repositories {
                character: character_repo,
            },
            use_cases: UseCases { progression },
        }
    }

    /// In-memory storage, the system clock and every built-in game line.
    pub fn in_memory(
        config: EngineConfig,
        subscribers: Vec<Arc<dyn ProgressionSubscriber>>,
    ) -> Self {
        tracing::info!(
            forfeit_freebies = config.forfeit_freebies(),
            "Composing in-memory progression engine"
        );
        Self::new(
            Arc::new(InMemoryCharacterRepo::new()),
            Arc::new(SystemClock::new()),
            Arc::new(GameLineRegistry::new()),
            config,
            subscribers,
        )
    }
}
