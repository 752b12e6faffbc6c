//! Filesystem-facing pieces: onboarding flag file, CSV export, config.

use std::fs;

use chrono::NaiveDate;
use regdesk_core::onboarding::{should_show_tour, TOUR_SEEN_KEY};
use regdesk_core::{
    export_to_path, Category, FileFlagStore, FlagStore, RegdeskConfig, RegdeskError,
    RegulationStore, Tour,
};
use tempfile::TempDir;

#[test]
fn flag_file_missing_means_tour_pending() {
    let dir = TempDir::new().unwrap();
    let store = FileFlagStore::new(dir.path().join("flags.json"));
    assert!(should_show_tour(&store).unwrap());
}

#[test]
fn finishing_tour_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("flags.json");

    let mut store = FileFlagStore::new(&path);
    let mut tour = Tour::new();
    while tour.next() {}
    tour.finish(&mut store).unwrap();

    let reopened = FileFlagStore::new(&path);
    assert!(!should_show_tour(&reopened).unwrap());
    assert_eq!(reopened.get(TOUR_SEEN_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn flag_file_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flags.json");
    fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    let mut store = FileFlagStore::new(&path);
    store.set(TOUR_SEEN_KEY, "true").unwrap();

    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(TOUR_SEEN_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn malformed_flag_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flags.json");
    fs::write(&path, "not json").unwrap();

    let store = FileFlagStore::new(&path);
    let err = should_show_tour(&store).unwrap_err();
    assert!(err.to_string().contains("flags.json"));
}

#[test]
fn export_writes_every_regulation_without_touching_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("regulations.csv");
    let mut store = RegulationStore::seeded();
    let first = store.in_category(Category::Personal)[0].id;
    store.move_regulation(first, Category::Irrelevant, None);
    let log_len = store.activity_log().len();

    let rows = export_to_path(store.regulations(), &path, &Default::default()).unwrap();

    assert_eq!(rows, 27);
    assert_eq!(store.activity_log().len(), log_len);
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 28);
    assert!(text.starts_with("\"Title\",\"Category\""));
    assert!(text.contains("\"privacy; data-protection; EU\""));
}

#[test]
fn config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    assert_eq!(RegdeskConfig::load(&path).unwrap(), RegdeskConfig::default());

    fs::write(&path, "tag_delimiter = \"|\"\nsearch_limit = 5\n").unwrap();
    let config = RegdeskConfig::load(&path).unwrap();
    assert_eq!(config.tag_delimiter, "|");
    assert_eq!(config.search_limit, 5);
    assert_eq!(config.export_options().tag_delimiter, "|");
}

#[test]
fn export_board_uses_export_dir_and_dated_name() {
    let dir = TempDir::new().unwrap();
    let config = RegdeskConfig {
        export_dir: Some(dir.path().to_path_buf()),
        tag_delimiter: "|".into(),
        ..RegdeskConfig::default()
    };
    let store = RegulationStore::seeded();
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    let (path, rows) = config.export_board(store.regulations(), None, date).unwrap();

    assert_eq!(path, dir.path().join("regulations-2024-05-01.csv"));
    assert_eq!(rows, 27);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"privacy|data-protection|EU\""));
}

#[test]
fn export_board_failure_is_an_export_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no-such-dir").join("out.csv");
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    let err = RegdeskConfig::default()
        .export_board(RegulationStore::seeded().regulations(), Some(missing), date)
        .unwrap_err();

    assert!(matches!(err, RegdeskError::Export(_)));
    assert!(err.to_string().starts_with("Export error:"));
}
