//! Common types: guess outcomes and configuration errors.

use crate::item::ItemKey;

/// Result of judging one guess against the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessOutcome {
    /// Guess matched the round's target.
    Correct,
    /// Guess did not match the target.
    Incorrect,
}

impl GuessOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

/// Errors raised while setting up pools and engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Pool was built from an empty item list.
    EmptyPool,
    /// Two items in the pool share the same key.
    DuplicateKey(ItemKey),
    /// A round must present at least one option.
    ZeroArity,
    /// More options requested than the pool can supply.
    ArityExceedsPool { arity: usize, pool_size: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyPool => write!(f, "Item pool is empty"),
            ConfigError::DuplicateKey(key) => write!(f, "Item pool contains \"{}\" twice", key),
            ConfigError::ZeroArity => write!(f, "Arity must be at least 1"),
            ConfigError::ArityExceedsPool { arity, pool_size } => write!(
                f,
                "Arity {} exceeds pool size {}",
                arity, pool_size
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
