#![cfg(feature = "std")]

use std::string::String;

use crate::{
    config::{Variant, COUNT_GLYPH},
    game::{FeedbackState, Round},
    item::ItemKey,
};

pub const CONFETTI: &str = "🎉🎊✨🥳🎈";
pub const TIP: &str = "Tip: Keep sessions short (5–7 minutes). Celebrate tries and successes! 🌟";

/// Header, prompt and numbered options for a round.
pub fn render_round(variant: Variant, round: &Round) -> String {
    let mut out = String::new();
    out.push_str(&std::format!(
        "{}    Round {}\n",
        variant.title(),
        round.round_number()
    ));
    match round.target().key() {
        ItemKey::Count(n) => {
            out.push_str(&COUNT_GLYPH.repeat(usize::from(n)));
            out.push('\n');
        }
        ItemKey::Name(_) => {
            out.push_str(&std::format!("Find: {}\n", round.target()));
        }
    }
    for (i, option) in round.options().iter().enumerate() {
        out.push_str(&std::format!("  {}) {}", i + 1, option));
    }
    out.push('\n');
    out
}

/// Feedback line for the state; the correct state carries confetti.
pub fn render_feedback(feedback: FeedbackState) -> Option<String> {
    let message = feedback.message()?;
    Some(match feedback {
        FeedbackState::ShowingCorrect => std::format!("✅ {}\n{}", message, CONFETTI),
        _ => std::format!("↩️ {}", message),
    })
}

pub fn print_round(variant: Variant, round: &Round) {
    std::println!("\n{}", render_round(variant, round));
}

pub fn print_feedback(feedback: FeedbackState) {
    if let Some(line) = render_feedback(feedback) {
        std::println!("{}", line);
    }
}
