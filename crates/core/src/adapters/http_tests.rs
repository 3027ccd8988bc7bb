// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn object_url_joins_base_and_key() {
    assert_eq!(
        object_url("https://blob.example", "sales.csv"),
        "https://blob.example/sales.csv"
    );
}

#[test]
fn object_url_collapses_duplicate_slashes() {
    assert_eq!(
        object_url("https://blob.example/store/", "/sales.csv"),
        "https://blob.example/store/sales.csv"
    );
}

#[test]
fn mirror_url_reflects_config() {
    let config = MirrorConfig {
        base_url: "https://blob.example".into(),
        key: "ledgers/till.csv".into(),
    };
    let mirror = HttpMirror::new(&config);
    assert_eq!(mirror.url(), "https://blob.example/ledgers/till.csv");
}
