//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_session, Action, AiPlayer, FeedbackState, GuessOutcome, Item, ItemPool, Player,
    RandomSource, Round, RoundEngine, Session, Variant,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
