//! Point-buy currencies and balances.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The two currencies traits can be bought with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// Fixed pool handed out at character creation, spent only during creation.
    Freebies,
    /// Earned through play, spent afterwards.
    Experience,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freebies => "freebies",
            Self::Experience => "experience",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Freebies => "Freebie Points",
            Self::Experience => "Experience",
        }
    }

    pub fn all() -> [Currency; 2] {
        [Self::Freebies, Self::Experience]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "freebies" | "freebie" | "fp" => Ok(Self::Freebies),
            "experience" | "xp" => Ok(Self::Experience),
            other => Err(DomainError::parse(format!("Unknown currency: {}", other))),
        }
    }
}

/// A non-negative amount of one currency.
///
/// Debits are all-or-nothing: [`CurrencyBalance::debit`] either removes the
/// full amount or leaves the balance untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyBalance(u32);

impl CurrencyBalance {
    pub const ZERO: CurrencyBalance = CurrencyBalance(0);

    pub fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u32 {
        self.0
    }

    pub fn covers(&self, cost: u32) -> bool {
        self.0 >= cost
    }

    /// Remove `cost`, or return `None` with the balance unchanged.
    #[must_use]
    pub fn debit(&mut self, cost: u32) -> Option<u32> {
        let remaining = self.0.checked_sub(cost)?;
        self.0 = remaining;
        Some(remaining)
    }

    /// Add `amount`, saturating at `u32::MAX`.
    pub fn credit(&mut self, amount: u32) -> u32 {
        self.0 = self.0.saturating_add(amount);
        self.0
    }

    /// Drop the whole balance, returning what was forfeited.
    pub fn forfeit(&mut self) -> u32 {
        std::mem::take(&mut self.0)
    }
}

impl fmt::Display for CurrencyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_from_str_accepts_aliases() {
        assert_eq!(Currency::from_str("XP").unwrap(), Currency::Experience);
        assert_eq!(Currency::from_str(" freebie ").unwrap(), Currency::Freebies);
        assert!(matches!(
            Currency::from_str("gold"),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn currency_serializes_snake_case() {
        let json = serde_json::to_string(&Currency::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
    }

    #[test]
    fn debit_is_all_or_nothing() {
        let mut balance = CurrencyBalance::new(1);
        assert_eq!(balance.debit(5), None);
        assert_eq!(balance.amount(), 1);

        assert_eq!(balance.debit(1), Some(0));
        assert_eq!(balance, CurrencyBalance::ZERO);
    }

    #[test]
    fn credit_and_forfeit() {
        let mut balance = CurrencyBalance::new(3);
        assert_eq!(balance.credit(4), 7);
        assert_eq!(balance.forfeit(), 7);
        assert_eq!(balance.amount(), 0);
    }
}
