use crate::{
    common::GuessOutcome,
    game::{FeedbackState, Round},
    item::Item,
};

/// What a player wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Submit an item as the answer.
    Guess(Item),
    /// Move on to a new round.
    Next,
    /// Stop the session.
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Decide the next action given the current round and its feedback.
    fn act(&mut self, round: &Round, feedback: FeedbackState) -> Action;

    /// Inform the player how its last guess was judged.
    fn handle_outcome(&mut self, _guess: &Item, _outcome: GuessOutcome) {}
}
