#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use toddler_games::ui::{render_feedback, render_round, CONFETTI};
    use toddler_games::{
        parse_choice, Action, FeedbackState, Item, ItemKey, RoundEngine, Variant,
    };

    fn engine(variant: Variant) -> RoundEngine {
        variant.engine().unwrap()
    }

    #[test]
    fn test_parse_number_picks_option() {
        let round = engine(Variant::Colors).start_round(&mut SmallRng::seed_from_u64(1));
        assert_eq!(
            parse_choice("2\n", &round, FeedbackState::Idle),
            Some(Action::Guess(round.options()[1]))
        );
        assert_eq!(parse_choice("0", &round, FeedbackState::Idle), None);
        assert_eq!(parse_choice("5", &round, FeedbackState::Idle), None);
    }

    #[test]
    fn test_parse_name_picks_option() {
        let round = engine(Variant::Shapes).start_round(&mut SmallRng::seed_from_u64(2));
        let first = round.options()[0];
        let name = match first.key() {
            ItemKey::Name(name) => name.to_ascii_uppercase(),
            ItemKey::Count(_) => unreachable!(),
        };
        assert_eq!(
            parse_choice(&name, &round, FeedbackState::Idle),
            Some(Action::Guess(first))
        );
        assert_eq!(parse_choice("Hexagon", &round, FeedbackState::Idle), None);
    }

    #[test]
    fn test_parse_counting_numbers_are_quantities() {
        let round = engine(Variant::Counting).start_round(&mut SmallRng::seed_from_u64(3));
        for n in 1..=5u8 {
            assert_eq!(
                parse_choice(&n.to_string(), &round, FeedbackState::Idle),
                Some(Action::Guess(Item::number(n)))
            );
        }
    }

    #[test]
    fn test_parse_commands() {
        let round = engine(Variant::Colors).start_round(&mut SmallRng::seed_from_u64(4));
        assert_eq!(parse_choice("q", &round, FeedbackState::Idle), Some(Action::Quit));
        assert_eq!(parse_choice("Next", &round, FeedbackState::Idle), Some(Action::Next));
        assert_eq!(parse_choice("", &round, FeedbackState::Idle), None);
        assert_eq!(
            parse_choice("  ", &round, FeedbackState::ShowingIncorrect),
            None
        );
        assert_eq!(
            parse_choice("", &round, FeedbackState::ShowingCorrect),
            Some(Action::Next)
        );
    }

    #[test]
    fn test_render_named_round() {
        let mut e = engine(Variant::Colors);
        let mut rng = SmallRng::seed_from_u64(5);
        e.start_round(&mut rng);
        let round = e.start_round(&mut rng);
        let text = render_round(Variant::Colors, &round);
        assert!(text.starts_with("Tap the Color"));
        assert!(text.contains("Round 2"));
        assert!(text.contains(&format!("Find: {}", round.target())));
        for option in round.options() {
            assert!(text.contains(&option.to_string()));
        }
        assert!(text.contains("4) "));
    }

    #[test]
    fn test_render_counting_round_shows_apples() {
        let round = engine(Variant::Counting).start_round(&mut SmallRng::seed_from_u64(6));
        let n = match round.target().key() {
            ItemKey::Count(n) => usize::from(n),
            ItemKey::Name(_) => unreachable!(),
        };
        let text = render_round(Variant::Counting, &round);
        assert_eq!(text.matches("🍎").count(), n);
        assert!(!text.contains("Find:"));
        assert!(text.contains("5) 5"));
    }

    #[test]
    fn test_render_feedback() {
        assert_eq!(render_feedback(FeedbackState::Idle), None);
        let correct = render_feedback(FeedbackState::ShowingCorrect).unwrap();
        assert!(correct.contains("Correct!"));
        assert!(correct.contains(CONFETTI));
        let wrong = render_feedback(FeedbackState::ShowingIncorrect).unwrap();
        assert!(wrong.contains("Try again!"));
        assert!(!wrong.contains(CONFETTI));
    }

    #[test]
    fn test_color_items_carry_swatches() {
        assert!(toddler_games::COLORS.iter().all(|c| c.swatch().is_some()));
        assert!(toddler_games::SHAPES.iter().all(|s| s.swatch().is_none()));
        assert_eq!(toddler_games::COLORS[0].to_string(), "🔴 Red");
    }
}
