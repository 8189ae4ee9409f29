use super::*;

#[test]
fn test_bot_config_default() {
    let cfg = Config::default();
    assert_eq!(cfg.bot.parse_mode, None);
    assert_eq!(cfg.bot.log_level, "info");
}

#[test]
fn test_parse_mode_from_toml() {
    let toml_str = r#"
        [bot]
        parse_mode = "HTML"
    "#;
    let cfg = parse(toml_str).unwrap();
    assert_eq!(cfg.bot.parse_mode, Some(ParseMode::Html));
    assert_eq!(cfg.bot.log_level, "info");
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg = parse("").unwrap();
    assert_eq!(cfg.bot.parse_mode, None);
}

#[test]
fn test_unknown_parse_mode_is_config_error() {
    let toml_str = r#"
        [bot]
        parse_mode = "BBCode"
    "#;
    let err = parse(toml_str).unwrap_err();
    assert!(matches!(err, CourierError::Config(_)));
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let cfg = load("/nonexistent/__courier_test__/config.toml").unwrap();
    assert_eq!(cfg.bot.parse_mode, None);
}

#[test]
fn test_load_reads_file() {
    let tmp = std::env::temp_dir().join("__courier_test_config__.toml");
    std::fs::write(&tmp, "[bot]\nparse_mode = \"MarkdownV2\"\nlog_level = \"debug\"\n").unwrap();

    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.bot.parse_mode, Some(ParseMode::MarkdownV2));
    assert_eq!(cfg.bot.log_level, "debug");

    let _ = std::fs::remove_file(&tmp);
}
