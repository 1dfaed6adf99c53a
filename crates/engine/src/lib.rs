//! wodsheet Engine library.
//!
//! Application layer over the progression domain.
//!
//! ## Structure
//!
//! - `use_cases/` - Load a sheet, run one operation, save it
//! - `infrastructure/` - Ports and their adapters (storage, clock)
//! - `events` - Lifecycle events and subscribers
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod events;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
pub use events::{ProgressionEvent, ProgressionSubscriber};
pub use use_cases::{PoolState, ProgressionError, ProgressionUseCases};
