#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::GuessOutcome,
    config::Variant,
    game::{FeedbackState, Round},
    item::{Item, ItemKey},
    player::{Action, Player},
    ui,
};

/// Human player reading choices from stdin.
pub struct CliPlayer {
    variant: Variant,
    shown_round: u32,
}

impl CliPlayer {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            shown_round: 0,
        }
    }
}

fn matches_input(item: &Item, input: &str) -> bool {
    match item.key() {
        ItemKey::Name(name) => name.eq_ignore_ascii_case(input),
        ItemKey::Count(_) => false,
    }
}

/// Interpret one line of input. Numbers pick the option at that 1-based
/// position, names pick the option with that name. An empty line advances
/// only once the round is solved. `None` means the input was not understood.
pub fn parse_choice(input: &str, round: &Round, feedback: FeedbackState) -> Option<Action> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Some(Action::Quit),
        "n" | "next" => return Some(Action::Next),
        "" => {
            return (feedback == FeedbackState::ShowingCorrect).then_some(Action::Next);
        }
        _ => {}
    }
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| round.option(i))
            .map(|item| Action::Guess(*item));
    }
    round
        .options()
        .iter()
        .find(|item| matches_input(item, input))
        .map(|item| Action::Guess(*item))
}

impl Player for CliPlayer {
    fn act(&mut self, round: &Round, feedback: FeedbackState) -> Action {
        if round.round_number() != self.shown_round {
            self.shown_round = round.round_number();
            ui::print_round(self.variant, round);
        }
        let stdin = io::stdin();
        loop {
            std::print!("Your pick [1-{}, n = next, q = quit]: ", round.arity());
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Action::Quit,
                Ok(_) => {}
            }
            match parse_choice(&line, round, feedback) {
                Some(action) => return action,
                None => std::println!("Pick one of the options shown"),
            }
        }
    }

    fn handle_outcome(&mut self, _guess: &Item, outcome: GuessOutcome) {
        ui::print_feedback(FeedbackState::Idle.on_outcome(outcome));
    }
}
