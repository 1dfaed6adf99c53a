//! Legal dot ranges for traits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Inclusive `[min, max]` range a trait's stored value must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitRange {
    min: i32,
    max: i32,
}

impl TraitRange {
    /// Build a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(format!(
                "Invalid trait range: min {} is greater than max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Const constructor for the built-in category ranges.
    pub(crate) const fn fixed(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp for display only. Stored values are never clamped silently.
    pub fn clamp_for_display(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// The same range with its upper bound lowered to `ceiling` (never raised).
    pub fn with_ceiling(&self, ceiling: Option<i32>) -> Self {
        match ceiling {
            Some(c) => Self {
                min: self.min,
                max: self.max.min(c).max(self.min),
            },
            None => *self,
        }
    }
}

impl fmt::Display for TraitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
