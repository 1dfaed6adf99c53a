//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod progression;

pub use progression::{PoolState, ProgressionError, ProgressionUseCases};
