// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn dir_hash_is_stable_and_short() {
    let a = dir_hash(Path::new("/srv/till/data"));
    let b = dir_hash(Path::new("/srv/till/data"));
    assert_eq!(a, b);
    assert_eq!(a.len(), 16);
}

#[test]
fn different_data_dirs_get_different_sockets() {
    let a = Config::for_store(StoreConfig::new("/srv/a")).unwrap();
    let b = Config::for_store(StoreConfig::new("/srv/b")).unwrap();
    assert_ne!(a.socket_path, b.socket_path);
}

#[tokio::test]
async fn second_startup_on_same_data_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = StoreConfig::new(dir.path().join("data"));
    let mut config = Config::for_store(store).unwrap();
    // Keep all state inside the tempdir so tests do not collide
    config.state_dir = dir.path().join("state");
    config.socket_path = dir.path().join("tilld.sock");
    config.lock_path = config.state_dir.join("tilld.pid");
    config.log_path = config.state_dir.join("tilld.log");

    let first = startup(&config).await.unwrap();
    assert!(matches!(
        startup(&config).await,
        Err(LifecycleError::AlreadyRunning(_))
    ));
    drop(first);
}
