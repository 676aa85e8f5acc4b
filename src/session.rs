use alloc::vec::Vec;

use crate::{
    common::GuessOutcome,
    game::{FeedbackState, Round, RoundEngine},
    item::{Item, ItemKey},
    player::{Action, Player},
    random::RandomSource,
};

/// Summary of one finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundRecord {
    pub round_number: u32,
    pub target: ItemKey,
    pub options: Vec<ItemKey>,
    pub tries: u32,
    pub solved: bool,
}

/// One player's run through a variant: engine, randomness, current round and
/// the feedback shown for it.
pub struct Session<R: RandomSource> {
    engine: RoundEngine,
    rng: R,
    round: Round,
    feedback: FeedbackState,
    tries: u32,
}

impl<R: RandomSource> Session<R> {
    /// Start a session, dealing round 1.
    pub fn new(mut engine: RoundEngine, mut rng: R) -> Self {
        let round = engine.start_round(&mut rng);
        Self {
            engine,
            rng,
            round,
            feedback: FeedbackState::Idle,
            tries: 0,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn feedback(&self) -> FeedbackState {
        self.feedback
    }

    /// Guesses submitted for the current round.
    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Judge `guess` and update the feedback.
    pub fn guess(&mut self, guess: &Item) -> GuessOutcome {
        let outcome = self.engine.evaluate(&self.round, guess);
        self.tries = self.tries.saturating_add(1);
        self.feedback = self.feedback.on_outcome(outcome);
        log::trace!(
            "round {}: guess {} -> {:?}",
            self.round.round_number(),
            guess.key(),
            outcome
        );
        outcome
    }

    /// Replace the current round with a fresh one and clear feedback.
    pub fn next_round(&mut self) -> &Round {
        self.round = self.engine.start_round(&mut self.rng);
        self.feedback = FeedbackState::Idle;
        self.tries = 0;
        &self.round
    }

    /// Snapshot of the current round's progress.
    pub fn record(&self) -> RoundRecord {
        RoundRecord {
            round_number: self.round.round_number(),
            target: self.round.target().key(),
            options: self.round.options().iter().map(Item::key).collect(),
            tries: self.tries,
            solved: self.feedback == FeedbackState::ShowingCorrect,
        }
    }
}

/// Let `player` drive `session` until it quits or `max_rounds` rounds are done.
///
/// A round is recorded when the player advances past it, or when the player
/// quits after guessing at least once.
pub fn run_session<R, P>(
    session: &mut Session<R>,
    player: &mut P,
    max_rounds: Option<u32>,
) -> Vec<RoundRecord>
where
    R: RandomSource,
    P: Player + ?Sized,
{
    let mut records = Vec::new();
    if max_rounds == Some(0) {
        return records;
    }
    log::info!(
        "session started: {} options from a pool of {}",
        session.engine().arity(),
        session.engine().pool().len()
    );
    loop {
        match player.act(session.round(), session.feedback()) {
            Action::Guess(item) => {
                let outcome = session.guess(&item);
                player.handle_outcome(&item, outcome);
            }
            Action::Next => {
                records.push(session.record());
                if max_rounds.is_some_and(|max| records.len() >= max as usize) {
                    break;
                }
                session.next_round();
            }
            Action::Quit => {
                if session.tries() > 0 {
                    records.push(session.record());
                }
                break;
            }
        }
    }
    log::info!("session finished after {} rounds", records.len());
    records
}
