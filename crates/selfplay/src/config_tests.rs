use super::*;

#[test]
fn empty_file_gives_defaults() {
    let config = SelfPlayConfig::from_toml_str("").unwrap();
    assert_eq!(config, SelfPlayConfig::default());
    assert_eq!(config.depth, 4);
    assert_eq!(config.white, EngineKind::Classical);
    assert_eq!(config.black, EngineKind::Random);
}

#[test]
fn full_file_is_read() {
    let text = r#"
games = 6
depth = 3
max_plies = 120
white = "random"
black = "classical"
alternate_colors = false
seed = 7
opening = ["e2e4", "e7e5"]
record_path = "games.json"
"#;
    let config = SelfPlayConfig::from_toml_str(text).unwrap();
    assert_eq!(config.games, 6);
    assert_eq!(config.depth, 3);
    assert_eq!(config.max_plies, 120);
    assert_eq!(config.white, EngineKind::Random);
    assert_eq!(config.black, EngineKind::Classical);
    assert!(!config.alternate_colors);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.opening, vec!["e2e4", "e7e5"]);
    assert_eq!(config.record_path, Some(PathBuf::from("games.json")));
}

#[test]
fn unknown_engine_is_rejected() {
    let err = SelfPlayConfig::from_toml_str(r#"white = "neural""#).unwrap_err();
    assert!(matches!(err, SelfPlayError::Toml(_)));
}

#[test]
fn unknown_field_is_rejected() {
    let err = SelfPlayConfig::from_toml_str("time_per_move = 5").unwrap_err();
    assert!(matches!(err, SelfPlayError::Toml(_)));
}

#[test]
fn zero_depth_is_rejected() {
    let err = SelfPlayConfig::from_toml_str("depth = 0").unwrap_err();
    assert!(matches!(err, SelfPlayError::InvalidConfig(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = SelfPlayConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.toml"));
}

#[test]
fn engines_are_named() {
    assert_eq!(EngineKind::Classical.build(Some(1)).name(), "Classical");
    assert_eq!(EngineKind::Random.build(None).name(), "Random");
    assert_eq!(EngineKind::Random.to_string(), "random");
}
