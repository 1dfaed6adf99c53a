//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Character storage (in-memory today, a database later)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::CharacterRepo;
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::MockCharacterRepo;
#[cfg(test)]
pub use testing::MockClockPort;
