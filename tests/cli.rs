//! Runs the built binary to check what the command line prints and returns.

use serde_json::{json, Value};
use std::fs;
use std::net::TcpListener;
use std::process::{Command, Output};
use tempfile::TempDir;

use skycrew_roster::store::RosterStore;

/// Base URL of a port nothing listens on
fn unreachable_base_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{}/api", port)
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    let config = dir.path().join("config.toml");
    fs::write(&config, "[gateway]\ntimeout_secs = 2\n").unwrap();

    Command::new(env!("CARGO_BIN_EXE_skycrew-roster"))
        .arg("--config")
        .arg(&config)
        .arg("--db")
        .arg(dir.path().join("rosters.db"))
        .arg("--base-url")
        .arg(unreachable_base_url())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_generate_unknown_flight_prints_error_document() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&dir, &["generate", "SC1001"]);

    assert!(!output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body, json!({"error": "Flight not found"}));

    let store = RosterStore::open(&dir.path().join("rosters.db")).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_show_missing_roster_prints_error_document() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&dir, &["show", "SC1001"]);

    assert!(!output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body, json!({"error": "Roster not found"}));
}
