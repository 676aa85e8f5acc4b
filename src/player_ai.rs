use alloc::vec::Vec;

use crate::{
    game::{FeedbackState, Round},
    item::{Item, ItemKey},
    player::{Action, Player},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulated player that taps options at random, never repeating itself
/// within a round, and moves on once it is right.
pub struct AiPlayer {
    rng: SmallRng,
    round_number: u32,
    tried: Vec<ItemKey>,
}

impl AiPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            round_number: 0,
            tried: Vec::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Player for AiPlayer {
    fn act(&mut self, round: &Round, feedback: FeedbackState) -> Action {
        if round.round_number() != self.round_number {
            self.round_number = round.round_number();
            self.tried.clear();
        }
        if feedback == FeedbackState::ShowingCorrect {
            return Action::Next;
        }
        let untried: Vec<&Item> = round
            .options()
            .iter()
            .filter(|o| !self.tried.contains(&o.key()))
            .collect();
        if untried.is_empty() {
            return Action::Next;
        }
        let pick = *untried[self.rng.random_range(0..untried.len())];
        self.tried.push(pick.key());
        Action::Guess(pick)
    }
}
