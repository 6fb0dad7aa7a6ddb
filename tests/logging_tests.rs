use log::LevelFilter;
use salvo::{accepts_target, init_logging, parse_level, short_target};

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" TRACE "), Some(LevelFilter::Trace));
    assert_eq!(parse_level("loud"), None);
}

#[test]
fn test_init_twice_is_harmless() {
    init_logging();
    init_logging();
    log::warn!("logger installed");
}

#[test]
fn test_only_game_targets_are_logged() {
    assert!(accepts_target("salvo"));
    assert!(accepts_target("salvo::board"));
    assert!(accepts_target("salvo::cli"));
    assert!(!accepts_target("salvonic"));
    assert!(!accepts_target("rand::rngs"));
    assert!(!accepts_target("sim"));
}

#[test]
fn test_short_target() {
    assert_eq!(short_target("salvo::game"), "game");
    assert_eq!(short_target("salvo"), "salvo");
    assert_eq!(short_target("other::thing"), "other::thing");
}
