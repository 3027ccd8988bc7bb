// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn override_dir_wins_over_restricted_fs() {
    let dir = resolve_data_dir(
        Some(PathBuf::from("/srv/till")),
        true,
        PathBuf::from("data"),
    );
    assert_eq!(dir, PathBuf::from("/srv/till"));
}

#[test]
fn restricted_fs_falls_back_to_temp_writable_dir() {
    let dir = resolve_data_dir(None, true, PathBuf::from("data"));
    assert_eq!(dir, env::temp_dir().join("till_data"));
}

#[test]
fn default_dir_used_when_nothing_else_applies() {
    let dir = resolve_data_dir(None, false, PathBuf::from("data"));
    assert_eq!(dir, PathBuf::from("data"));
}

#[test]
fn mirror_requires_a_base_url() {
    assert_eq!(mirror_from(None, Some("sales.csv".into())), None);
    assert_eq!(mirror_from(Some("  ".into()), None), None);
}

#[test]
fn mirror_key_defaults_when_unset_or_blank() {
    let mirror = mirror_from(Some("https://blob.example".into()), None).unwrap();
    assert_eq!(mirror.key, DEFAULT_MIRROR_KEY);

    let mirror = mirror_from(Some("https://blob.example".into()), Some(" ".into())).unwrap();
    assert_eq!(mirror.key, DEFAULT_MIRROR_KEY);
}

#[test]
fn mirror_keeps_explicit_key() {
    let mirror = mirror_from(
        Some("https://blob.example".into()),
        Some("ledgers/till.csv".into()),
    )
    .unwrap();
    assert_eq!(mirror.key, "ledgers/till.csv");
}

#[test]
fn builder_attaches_mirror() {
    let config = StoreConfig::new("/srv/till").with_mirror("https://blob.example", "sales.csv");
    assert!(config.mirror.is_some());
}
