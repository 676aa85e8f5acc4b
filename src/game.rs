use alloc::vec::Vec;

use crate::{
    common::{ConfigError, GuessOutcome},
    item::{Item, ItemKey, ItemPool},
    random::RandomSource,
};

/// One question: a target and the options shown for it.
///
/// Rounds are never modified after they are dealt, so the option order a
/// player sees stays the same until the next round replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Item,
    options: Vec<Item>,
    round_number: u32,
}

impl Round {
    /// The correct answer.
    pub fn target(&self) -> &Item {
        &self.target
    }

    /// Options in presentation order.
    pub fn options(&self) -> &[Item] {
        &self.options
    }

    /// 1-based position of this round within its session.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn arity(&self) -> usize {
        self.options.len()
    }

    /// Option shown at `index` (0-based).
    pub fn option(&self, index: usize) -> Option<&Item> {
        self.options.get(index)
    }

    pub fn contains(&self, key: ItemKey) -> bool {
        self.options.iter().any(|o| o.key() == key)
    }

    /// Judge `guess` against the target.
    pub fn evaluate(&self, guess: &Item) -> GuessOutcome {
        evaluate(self, guess)
    }
}

/// Judge `guess` against `round`. Items outside the options are simply wrong.
pub fn evaluate(round: &Round, guess: &Item) -> GuessOutcome {
    if guess.same_key(&round.target) {
        GuessOutcome::Correct
    } else {
        GuessOutcome::Incorrect
    }
}

fn check_arity(pool: &ItemPool, arity: usize) -> Result<(), ConfigError> {
    if pool.is_empty() {
        return Err(ConfigError::EmptyPool);
    }
    if arity == 0 {
        return Err(ConfigError::ZeroArity);
    }
    if arity > pool.len() {
        return Err(ConfigError::ArityExceedsPool {
            arity,
            pool_size: pool.len(),
        });
    }
    Ok(())
}

/// Deal round `round_number` from `pool` with `arity` options.
///
/// The target is drawn uniformly. When the arity covers the whole pool the
/// options are the pool in canonical order; otherwise the pool is shuffled,
/// cut to `arity`, and if the target fell outside the cut a random slot is
/// overwritten with it. That last step is not a uniform draw over all subsets
/// containing the target.
pub fn deal<R: RandomSource + ?Sized>(
    pool: &ItemPool,
    arity: usize,
    round_number: u32,
    rng: &mut R,
) -> Result<Round, ConfigError> {
    check_arity(pool, arity)?;
    Ok(deal_unchecked(pool, arity, round_number, rng))
}

fn deal_unchecked<R: RandomSource + ?Sized>(
    pool: &ItemPool,
    arity: usize,
    round_number: u32,
    rng: &mut R,
) -> Round {
    let items = pool.items();
    let target = items[rng.below(items.len())];

    let options = if arity == items.len() {
        items.to_vec()
    } else {
        let mut options = items.to_vec();
        rng.shuffle(&mut options);
        options.truncate(arity);
        if !options.iter().any(|o| o.same_key(&target)) {
            let slot = rng.below(arity);
            options[slot] = target;
        }
        options
    };

    log::debug!(
        "dealt round {}: target {}, {} options",
        round_number,
        target.key(),
        options.len()
    );
    Round {
        target,
        options,
        round_number,
    }
}

/// Feedback shown for the current round. Held by the caller, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum FeedbackState {
    /// No guess yet this round.
    #[default]
    Idle,
    ShowingCorrect,
    ShowingIncorrect,
}

impl FeedbackState {
    /// State after a guess was judged. Every state accepts further guesses.
    pub fn on_outcome(self, outcome: GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::Correct => FeedbackState::ShowingCorrect,
            GuessOutcome::Incorrect => FeedbackState::ShowingIncorrect,
        }
    }

    /// Short message for the state, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            FeedbackState::Idle => None,
            FeedbackState::ShowingCorrect => Some("Correct!"),
            FeedbackState::ShowingIncorrect => Some("Try again!"),
        }
    }
}

/// Produces rounds for one pool/arity configuration and counts them.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    pool: ItemPool,
    arity: usize,
    rounds_dealt: u32,
}

impl RoundEngine {
    /// Validate the configuration. `arity` must lie in `1..=pool.len()`.
    pub fn new(pool: ItemPool, arity: usize) -> Result<Self, ConfigError> {
        check_arity(&pool, arity)?;
        Ok(Self {
            pool,
            arity,
            rounds_dealt: 0,
        })
    }

    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of rounds dealt so far.
    pub fn rounds_dealt(&self) -> u32 {
        self.rounds_dealt
    }

    /// Deal the next round. The first call yields round 1.
    pub fn start_round<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Round {
        self.rounds_dealt = self.rounds_dealt.saturating_add(1);
        deal_unchecked(&self.pool, self.arity, self.rounds_dealt, rng)
    }

    pub fn evaluate(&self, round: &Round, guess: &Item) -> GuessOutcome {
        evaluate(round, guess)
    }
}
