#[cfg(feature = "std")]
#[cfg(test)]
mod logging_tests {
    use log::LevelFilter;
    use toddler_games::{init_logging, level_from, LOG_ENV};

    #[test]
    fn test_level_from_env_value() {
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level_from(Some("off")), LevelFilter::Off);
        assert_eq!(level_from(Some("loud")), LevelFilter::Info);
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(LOG_ENV, "TODDLER_GAMES_LOG");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
        log::info!("logger installed");
    }
}
