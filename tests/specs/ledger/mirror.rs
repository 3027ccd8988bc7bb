//! Mirror policy specs
//!
//! The remote copy is best-effort: writes push after the local
//! operation succeeds, reads pull before reading, and every mirror
//! failure degrades to local-only behavior.

use crate::prelude::*;

#[test]
fn a_second_instance_sees_rows_through_the_mirror() {
    let mirror = FakeMirror::new();

    let (_dir_a, register_a) = mirrored_store(&mirror);
    register_a.append(&row("coffee", 1000, 2, "cash")).unwrap();
    register_a.append(&row("tea", 500, 1, "card")).unwrap();

    // Fresh instance with an empty local directory
    let (_dir_b, register_b) = mirrored_store(&mirror);
    assert_eq!(
        register_b.load_all().unwrap(),
        vec![row("coffee", 1000, 2, "cash"), row("tea", 500, 1, "card")]
    );
}

#[test]
fn reset_propagates_an_empty_artifact() {
    let mirror = FakeMirror::new();
    let (_dir_a, register_a) = mirrored_store(&mirror);
    register_a.append(&row("coffee", 1000, 2, "cash")).unwrap();
    register_a.reset().unwrap();

    let (_dir_b, register_b) = mirrored_store(&mirror);
    assert!(register_b.load_all().unwrap().is_empty());
}

#[test]
fn push_failures_never_fail_the_local_write() {
    let mirror = FakeMirror::new();
    mirror.fail_puts(true);
    let (_dir, store) = mirrored_store(&mirror);

    store.append(&row("coffee", 1000, 2, "cash")).unwrap();
    store.reset().unwrap();
    store.append(&row("tea", 500, 1, "card")).unwrap();

    assert_eq!(store.load_all().unwrap(), vec![row("tea", 500, 1, "card")]);
}

#[test]
fn fetch_failures_fall_back_to_the_local_copy() {
    let mirror = FakeMirror::new();
    let (_dir, store) = mirrored_store(&mirror);
    store.append(&row("coffee", 1000, 2, "cash")).unwrap();

    mirror.fail_gets(true);
    assert_eq!(store.load_all().unwrap().len(), 1);
    assert!(!store.export_raw().unwrap().is_empty());
}

#[test]
fn stale_remote_is_overwritten_by_the_next_successful_push() {
    let mirror = FakeMirror::new();
    let (_dir, store) = mirrored_store(&mirror);

    mirror.fail_puts(true);
    store.append(&row("coffee", 1000, 2, "cash")).unwrap();
    assert_eq!(mirror.object(), None);

    mirror.fail_puts(false);
    store.append(&row("tea", 500, 1, "card")).unwrap();

    let remote = String::from_utf8(mirror.object().unwrap()).unwrap();
    let rows = codec::decode(&remote);
    assert_eq!(rows.len(), 2);
}
