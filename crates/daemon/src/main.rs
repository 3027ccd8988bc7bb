// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Till daemon (tilld)
//!
//! Background process that owns the ledger store and serves clients
//! over a Unix socket.

use std::io::Write as _;
use std::path::PathBuf;

use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

use till_core::config::StoreConfig;
use till_daemon::lifecycle::{self, Config, LifecycleError};
use till_daemon::server;

/// Log line written before tracing is up, so a client tailing the log
/// can locate the current startup attempt.
/// Full format: "--- tilld: starting (pid: 12345) ---"
pub const STARTUP_MARKER_PREFIX: &str = "--- tilld: starting (pid: ";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::for_store(store_from_args())?;

    write_startup_marker(&config)?;
    let log_guard = setup_logging(&config)?;

    info!(
        "tilld starting, data directory {}",
        config.store.data_dir.display()
    );

    let daemon = match lifecycle::startup(&config).await {
        Ok(daemon) => daemon,
        Err(e) => {
            // The non-blocking tracing writer may not flush before exit,
            // so record the failure synchronously as well
            write_startup_error(&config, &e);
            error!("startup failed: {}", e);
            drop(log_guard);
            return Err(e.into());
        }
    };

    info!("listening on {}", config.socket_path.display());

    // Handshake line for the spawning client
    println!("READY");

    serve(daemon).await?;
    info!("tilld stopped");
    Ok(())
}

/// Optional first argument overrides the data directory; everything
/// else comes from the environment.
fn store_from_args() -> StoreConfig {
    let mut store = StoreConfig::from_env();
    if let Some(dir) = std::env::args().nth(1) {
        store.data_dir = PathBuf::from(dir);
    }
    store
}

/// Accept loop. Connections are handled one at a time, so ledger
/// operations never interleave.
async fn serve(mut daemon: lifecycle::DaemonState) -> Result<(), LifecycleError> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    loop {
        tokio::select! {
            accepted = daemon.listener.accept() => {
                match accepted {
                    Ok((stream, _)) => {
                        if let Err(e) = server::handle_connection(&mut daemon, stream).await {
                            error!("connection error: {}", e);
                        }
                    }
                    Err(e) => error!("accept error: {}", e),
                }
            }
            _ = sigterm.recv() => {
                info!("SIGTERM received");
                break;
            }
            _ = sigint.recv() => {
                info!("SIGINT received");
                break;
            }
        }

        if daemon.shutdown_requested {
            info!("shutdown requested over IPC");
            break;
        }
    }

    daemon.shutdown()
}

fn write_startup_marker(config: &Config) -> Result<(), LifecycleError> {
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    writeln!(file, "{}{})", STARTUP_MARKER_PREFIX, std::process::id())?;
    Ok(())
}

fn write_startup_error(config: &Config, error: &LifecycleError) {
    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
    else {
        return;
    };
    let _ = writeln!(file, "ERROR tilld failed to start: {}", error);
}

fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let dir = config.log_path.parent().ok_or(LifecycleError::NoStateDir)?;
    let name = config
        .log_path
        .file_name()
        .ok_or(LifecycleError::NoStateDir)?;
    std::fs::create_dir_all(dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer))
        .init();

    Ok(guard)
}
