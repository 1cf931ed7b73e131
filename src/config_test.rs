#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.scroll_offset_px, 60.0);
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn partial_json_keeps_defaults() {
    let config = PageConfig::from_json(r#"{"scroll_offset_px": 80}"#).unwrap();
    assert_eq!(config.scroll_offset_px, 80.0);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn full_json_overrides_every_field() {
    let config =
        PageConfig::from_json(r#"{"storage_key": "site-theme", "scroll_offset_px": 0, "log_level": "debug"}"#).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.scroll_offset_px, 0.0);
    assert_eq!(config.level(), log::Level::Debug);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = PageConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap();
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn malformed_json_is_an_error() {
    let err = PageConfig::from_json("not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid page config"));
    assert!(PageConfig::from_json(r#"{"scroll_offset_px": "far"}"#).is_err());
}
